//! # Wanderlust
//!
//! A static site generator for travel photography portfolios. Content is a
//! photographer profile and one JSON document per destination; the output is
//! a plain HTML site with masonry galleries and a full-screen image viewer.
//!
//! # Architecture: Load, Resolve, Render
//!
//! ```text
//! 1. Load      content/data/*.json  →  Session        (parallel, all-or-nothing)
//! 2. Resolve   Session + Route      →  View           (one per page)
//! 3. Render    View                 →  dist/**/*.html (maud)
//! ```
//!
//! Loading either produces a complete [`portfolio::Portfolio`] or a single
//! [`portfolio::LoadError`] listing every broken document. There is no partial
//! state: a failed session resolves every route to the error view, so a broken
//! content tree still yields a coherent (if short) site.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`types`] | Serde data model for the profile and destination documents |
//! | [`portfolio`] | Content loading, the build [`portfolio::Session`], gallery filters |
//! | [`masonry`] | Greedy shortest-column layout and responsive column resolution |
//! | [`lightbox`] | Viewer state machine and the host it borrows while open |
//! | [`discovery`] | Seeded or random "curated selection" for the home page |
//! | [`route`] | Route parsing and view resolution |
//! | [`generate`] | HTML rendering of every view and viewer page |
//! | [`config`] | `config.toml` loading, validation, merging, and CSS generation |
//! | [`output`] | CLI output formatting for load and generate results |
//!
//! # Design Decisions
//!
//! ## Viewer Pages Instead of a Client-Side Viewer
//!
//! Every image of every collection gets its own viewer page
//! (`{collection}/{n}.html`). Navigation is plain links, so the viewer works
//! without JavaScript; `static/nav.js` only adds keyboard, edge-tap and
//! backdrop handling on top. The pages are produced by driving the real
//! [`lightbox::Lightbox`] state machine, so wrap-around and close targets are
//! the same ones the state machine computes.
//!
//! ## Both Layouts, One Stylesheet Switch
//!
//! Without a configured column count the generator lays each collection out
//! twice (one column and three columns) and a media query at the configured
//! breakpoint shows exactly one. Layout stays a pure function of the images and
//! the column count; the viewport only picks which result is visible.
//!
//! ## Maud Over Template Engines
//!
//! HTML is generated with [Maud](https://maud.lambda.xyz/), a compile-time HTML
//! macro system. Malformed markup is a build error and all interpolation is
//! auto-escaped, which matters here because every caption and biography line
//! comes from user-edited JSON.

pub mod config;
pub mod discovery;
pub mod generate;
pub mod lightbox;
pub mod masonry;
pub mod output;
pub mod portfolio;
pub mod route;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;
