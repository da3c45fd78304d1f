//! HTML site generation.
//!
//! Takes the loaded [`Session`] and writes every page of the site as static
//! HTML. Each route is resolved to a [`View`] and rendered with maud; every
//! image collection (home selection, destination, gallery filter) also gets
//! one viewer page per image.
//!
//! ## Generated Pages
//!
//! - **Home** (`/index.html`): featured destination hero and the curated selection
//! - **Destination pages** (`/destinations/{slug}/index.html`): narrative and masonry grid
//! - **Gallery pages** (`/gallery/index.html`, `/gallery/{slug}/index.html`): one per filter
//! - **About page** (`/about/index.html`): biography rendered from markdown
//! - **Not found** (`/404.html`)
//! - **Viewer pages** (`{collection}/{n}.html`): full-screen image viewer
//!
//! When the session failed to load, `index.html` and `404.html` carry the
//! error page instead and nothing else is rendered.
//!
//! ## Output Structure
//!
//! ```text
//! dist/
//! ├── index.html                 # Home
//! ├── 1.html ... 6.html          # Viewer pages for the curated selection
//! ├── 404.html
//! ├── about/index.html
//! ├── destinations/
//! │   └── kyoto/
//! │       ├── index.html
//! │       ├── 1.html             # Viewer pages
//! │       └── ...
//! ├── gallery/
//! │   ├── index.html             # All destinations
//! │   ├── 1.html ...
//! │   └── kyoto/index.html ...   # One directory per filter
//! └── images/...                 # Copied from the assets directory
//! ```
//!
//! ## Viewer Pages
//!
//! A viewer page is the lightbox frozen at one index. The generator drives a
//! [`Lightbox`] over [`PageChrome`], a host that records what the open viewer
//! asked of the page: the key bindings become a `data-keys` attribute and the
//! scroll suspension becomes the `viewer-open` body class. `static/nav.js`
//! turns those back into listeners in the browser.
//!
//! ## CSS and JavaScript
//!
//! Static assets are embedded at compile time:
//! - `static/style.css`: Base styles (colors and grid switch injected from config)
//! - `static/nav.js`: Viewer keyboard, edge-zone and backdrop handling
//! - `static/splash.js`: Once-per-session splash screen

use crate::config::{self, LayoutConfig, SiteConfig};
use crate::lightbox::{Action, Key, Lightbox, LightboxError, ViewerHost};
use crate::masonry::{self, MasonryLayout, Viewport};
use crate::portfolio::{GalleryFilter, Session};
use crate::route::{self, GalleryView, HomeView, Route, View};
use crate::types::{Destination, Image, PhotographerProfile, Socials};
use chrono::Datelike;
use maud::{DOCTYPE, Markup, PreEscaped, html};
use pulldown_cmark::{Parser, html as md_html};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Viewer error: {0}")]
    Lightbox(#[from] LightboxError),
}

const CSS_STATIC: &str = include_str!("../static/style.css");
const NAV_JS: &str = include_str!("../static/nav.js");
const SPLASH_JS: &str = include_str!("../static/splash.js");

/// Shown in place of a grid when a collection has no images.
pub const EMPTY_COLLECTION: &str = "No artworks available in this collection.";

/// Shown on the home page when there is no destination to feature.
pub const EMPTY_HOME: &str = "Preparing the exhibition…";

/// One written page and the viewer pages written next to it.
#[derive(Debug, Clone, PartialEq)]
pub struct PageReport {
    pub title: String,
    pub path: PathBuf,
    pub viewers: usize,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct GenerateReport {
    pub pages: Vec<PageReport>,
    /// Assets directory copied to the output root, if it existed.
    pub assets: Option<PathBuf>,
}

impl GenerateReport {
    pub fn viewer_count(&self) -> usize {
        self.pages.iter().map(|p| p.viewers).sum()
    }
}

/// Render the whole site for `session` into `output_dir`.
///
/// `source_root` is the content root; `config.assets_dir` is resolved
/// against it.
pub fn generate(
    session: &Session,
    config: &SiteConfig,
    source_root: &Path,
    output_dir: &Path,
) -> Result<GenerateReport, GenerateError> {
    let site = Site::new(session, config, chrono::Local::now().year());
    let mut report = GenerateReport::default();

    fs::create_dir_all(output_dir)?;

    let assets_dir = source_root.join(&config.assets_dir);
    if assets_dir.is_dir() {
        copy_dir_recursive(&assets_dir, output_dir)?;
        report.assets = Some(assets_dir);
    }

    let routes = match session {
        Session::Ready(portfolio) => Route::site_map(portfolio),
        Session::Failed(_) => vec![Route::Home, Route::NotFound],
    };

    for route in &routes {
        let view = route::resolve(session, route, &config.discovery);
        let page_path = route.output_file();
        write_page(output_dir, &page_path, render_page(&site, route, &view))?;

        let mut viewers = 0;
        if let Some(images) = view.collection() {
            let dir = page_path.parent().map(Path::to_path_buf).unwrap_or_default();
            for (index, markup) in render_viewer_pages(&site, route, &view, images)? {
                write_page(output_dir, &dir.join(viewer_file(index)), markup)?;
                viewers += 1;
            }
        }

        report.pages.push(PageReport {
            title: view.title(site.name),
            path: page_path,
            viewers,
        });
    }

    Ok(report)
}

fn write_page(output_dir: &Path, relative: &Path, markup: Markup) -> std::io::Result<()> {
    let path = output_dir.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, markup.into_string())
}

fn copy_dir_recursive(src: &Path, dst: &Path) -> std::io::Result<()> {
    for entry in fs::read_dir(src)? {
        let entry = entry?;
        let src_path = entry.path();
        let dst_path = dst.join(entry.file_name());

        if src_path.is_dir() {
            fs::create_dir_all(&dst_path)?;
            copy_dir_recursive(&src_path, &dst_path)?;
        } else {
            fs::copy(&src_path, &dst_path)?;
        }
    }
    Ok(())
}

/// File name of the viewer page for a 0-based index.
fn viewer_file(index: usize) -> String {
    format!("{}.html", index + 1)
}

/// Link to the viewer page for `index` within the collection at `base`.
pub fn viewer_href(base: &str, index: usize) -> String {
    format!("{base}{}", viewer_file(index))
}

// ============================================================================
// Site context
// ============================================================================

/// Everything shared by all pages of one build.
struct Site<'a> {
    config: &'a SiteConfig,
    css: String,
    /// Photographer name, or the site title when the profile is unavailable.
    name: &'a str,
    tagline: Option<&'a str>,
    socials: Option<&'a Socials>,
    nav: Vec<NavLink>,
    year: i32,
}

#[derive(Debug, Clone, PartialEq)]
struct NavLink {
    label: String,
    href: String,
}

impl<'a> Site<'a> {
    fn new(session: &'a Session, config: &'a SiteConfig, year: i32) -> Self {
        let css = format!(
            "{}\n\n{}\n\n{}",
            config::generate_color_css(&config.colors),
            CSS_STATIC,
            config::generate_layout_css(&config.theme, &config.layout),
        );
        let profile = session.portfolio().map(|p| p.photographer());
        let destinations = session.portfolio().map(|p| p.destinations()).unwrap_or_default();

        Self {
            config,
            css,
            name: profile.map_or(config.site_title.as_str(), |p| p.name.as_str()),
            tagline: profile.map(|p| p.tagline.as_str()),
            socials: profile.and_then(|p| p.socials.as_ref()),
            nav: nav_links(destinations),
            year,
        }
    }
}

fn nav_links(destinations: &[Destination]) -> Vec<NavLink> {
    let link = |label: &str, route: Route| NavLink {
        label: label.to_string(),
        href: route.href(),
    };
    std::iter::once(link("Home", Route::Home))
        .chain(
            destinations
                .iter()
                .map(|d| link(&d.title, Route::Destination(d.slug.clone()))),
        )
        .chain([
            link("Collection", Route::Gallery(GalleryFilter::All)),
            link("About", Route::About),
        ])
        .collect()
}

// ============================================================================
// HTML Components
// ============================================================================

/// Renders the base HTML document structure
fn base_document(title: &str, css: &str, body_class: Option<&str>, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                style { (PreEscaped(css)) }
            }
            body class=[body_class] {
                (content)
            }
        }
    }
}

/// Renders the site header: name and tagline home link, then the nav.
fn site_header(site: &Site<'_>, current_path: &str) -> Markup {
    html! {
        header.site-header {
            a.site-brand href="/" {
                span.site-name { (site.name) }
                @if let Some(tagline) = site.tagline {
                    span.site-tagline { (tagline) }
                }
            }
            nav.site-nav {
                (render_nav(&site.nav, current_path))
            }
        }
    }
}

/// Renders the navigation menu (inline on wide screens, hamburger panel on narrow)
fn render_nav(items: &[NavLink], current_path: &str) -> Markup {
    html! {
        input.nav-toggle type="checkbox" id="nav-toggle";
        label.nav-hamburger for="nav-toggle" aria-label="Menu" {
            span.hamburger-line {}
            span.hamburger-line {}
            span.hamburger-line {}
        }
        div.nav-panel {
            label.nav-close for="nav-toggle" { "×" }
            ul {
                @for item in items {
                    @let is_current = route::is_current(&item.href, current_path);
                    li class=[is_current.then_some("current")] {
                        a href=(item.href) aria-current=[is_current.then_some("page")] {
                            (item.label)
                        }
                    }
                }
            }
        }
    }
}

fn site_footer(site: &Site<'_>) -> Markup {
    html! {
        footer.site-footer {
            @if let Some(socials) = site.socials {
                ul.socials {
                    @if let Some(url) = &socials.instagram {
                        li { a href=(url) target="_blank" rel="noopener" { "Instagram" } }
                    }
                    @if let Some(url) = &socials.twitter {
                        li { a href=(url) target="_blank" rel="noopener" { "Twitter" } }
                    }
                }
            }
            p.footer-name { (site.name) }
            p.copyright { "© " (site.year) " All rights reserved" }
        }
    }
}

/// Initials of the first two words of a name.
fn monogram(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .take(2)
        .flat_map(char::to_uppercase)
        .collect()
}

/// Splash overlay. Starts hidden; `splash.js` shows it once per browser session.
fn splash(site: &Site<'_>) -> Markup {
    let splash = &site.config.splash;
    html! {
        @if splash.enabled {
            div.splash id="splash" hidden data-min-duration=(splash.min_duration_ms) {
                div.splash-inner {
                    span.splash-monogram { (monogram(&site.config.site_title)) }
                    span.splash-title { (site.config.site_title) }
                }
            }
            script { (PreEscaped(SPLASH_JS)) }
        }
    }
}

fn markdown(text: &str) -> Markup {
    let parser = Parser::new(text);
    let mut body_html = String::new();
    md_html::push_html(&mut body_html, parser);
    PreEscaped(body_html)
}

// ============================================================================
// Masonry
// ============================================================================

/// Masonry grid for a collection, or the placeholder when it is empty.
///
/// With a configured column count one grid is rendered. Otherwise both the
/// narrow and wide layouts are rendered and the stylesheet shows one.
fn render_masonry(images: &[Image], layout: &LayoutConfig, base: &str) -> Markup {
    if images.is_empty() {
        return html! { p.placeholder { (EMPTY_COLLECTION) } };
    }

    match layout.column_count() {
        Some(columns) => render_grid(&masonry::layout(images, columns), base, None),
        None => {
            let narrow = masonry::resolve_columns(None, Viewport::Narrow);
            let wide = masonry::resolve_columns(None, Viewport::Wide);
            html! {
                (render_grid(&masonry::layout(images, narrow), base, Some("masonry-narrow")))
                (render_grid(&masonry::layout(images, wide), base, Some("masonry-wide")))
            }
        }
    }
}

fn render_grid(layout: &MasonryLayout<'_>, base: &str, variant: Option<&str>) -> Markup {
    let class = match variant {
        Some(variant) => format!("masonry {variant}"),
        None => "masonry".to_string(),
    };
    let style = format!("--columns: {};", layout.column_count());
    html! {
        div class=(class) style=(style) {
            @for column in layout.columns() {
                div.masonry-column {
                    @for placement in column {
                        (render_card(placement.image, &viewer_href(base, placement.original_index)))
                    }
                }
            }
        }
    }
}

fn render_card(image: &Image, href: &str) -> Markup {
    let aspect_style = format!("aspect-ratio: {};", image.effective_aspect_ratio());
    html! {
        a.masonry-item href=(href) {
            figure {
                img src=(image.src) srcset=[image.src_set.as_deref()] alt=(image.alt)
                    style=(aspect_style) loading="lazy";
                figcaption {
                    span.caption-subject { (image.caption.subject) }
                    span.caption-profession { (image.caption.profession) }
                }
            }
        }
    }
}

// ============================================================================
// Page Renderers
// ============================================================================

fn render_page(site: &Site<'_>, route: &Route, view: &View<'_>) -> Markup {
    let base = route.href();
    let main = match view {
        View::Home(home) => render_home(home, &site.config.layout),
        View::Destination(dest) => render_destination(dest, &site.config.layout, &base),
        View::Gallery(gallery) => render_gallery(gallery, &site.config.layout, &base),
        View::About(profile) => render_about(profile),
        View::NotFound => render_not_found(),
        View::Failed { message, detail } => render_failed(message, detail),
    };

    let content = html! {
        (splash(site))
        (site_header(site, &base))
        (main)
        (site_footer(site))
    };

    base_document(&view.title(site.name), &site.css, None, content)
}

fn render_home(home: &HomeView<'_>, layout: &LayoutConfig) -> Markup {
    let Some(featured) = home.featured else {
        return html! {
            main.home-page {
                p.placeholder { (EMPTY_HOME) }
            }
        };
    };
    let destination_href = Route::Destination(featured.slug.clone()).href();

    html! {
        main.home-page {
            section.hero {
                @if let Some(cover) = featured.images.first() {
                    img.hero-image src=(cover.src) srcset=[cover.src_set.as_deref()] alt=(cover.alt);
                }
                div.hero-text {
                    span.label { "Featured destination" }
                    h1 { (featured.title) }
                    p { (featured.description) }
                    a.hero-link href=(destination_href) { "Explore " (featured.title) }
                }
            }
            section.curated {
                header.section-header {
                    h2 { "Curated selection" }
                    a href=(Route::Gallery(GalleryFilter::All).href()) {
                        "View the full collection"
                    }
                }
                (render_masonry(&home.selection, layout, &Route::Home.href()))
            }
        }
    }
}

fn render_destination(dest: &Destination, layout: &LayoutConfig, base: &str) -> Markup {
    html! {
        main.destination-page {
            header.page-header {
                span.label { "Destination" }
                h1 { (dest.title) }
                p.description { (dest.description) }
            }
            div.narrative {
                section {
                    h2 { "History" }
                    p { (dest.history) }
                }
                section {
                    h2 { "Why visit" }
                    p { (dest.why_visit) }
                }
            }
            (render_masonry(&dest.images, layout, base))
        }
    }
}

fn render_gallery(gallery: &GalleryView, layout: &LayoutConfig, base: &str) -> Markup {
    html! {
        main.gallery-page {
            header.page-header {
                span.label { "Archive" }
                h1 { "World gallery" }
            }
            nav.filters aria-label="Filter by destination" {
                @for tab in &gallery.filters {
                    @let active = tab.filter == gallery.active;
                    a.filter-tab.active[active]
                        href=(Route::Gallery(tab.filter.clone()).href())
                        aria-current=[active.then_some("page")] {
                        (tab.label)
                    }
                }
            }
            (render_masonry(&gallery.images, layout, base))
        }
    }
}

fn render_about(profile: &PhotographerProfile) -> Markup {
    let bio = &profile.biography;
    let sections = [
        ("Philosophy", &bio.philosophy),
        ("Background", &bio.background),
        ("Experience", &bio.experience),
        ("Current focus", &bio.current_focus),
    ];

    html! {
        main.about-page {
            div.about-intro {
                img.portrait src=(profile.portrait_image.src) alt=(profile.portrait_image.alt);
                header.page-header {
                    span.label { "About" }
                    h1 { (profile.name) }
                    p.description { (profile.tagline) }
                }
            }
            article.about-content {
                @for (heading, text) in sections {
                    section {
                        h2 { (heading) }
                        (markdown(text))
                    }
                }
            }
            @if !profile.clients.is_empty() {
                section.clients {
                    h2 { "Clients" }
                    @for group in &profile.clients {
                        div.client-group {
                            h3 { (group.category) }
                            ul {
                                @for client in &group.clients {
                                    li { (client) }
                                }
                            }
                        }
                    }
                }
            }
            section.contact {
                h2 { "Contact" }
                p { a href={ "mailto:" (profile.contact.email) } { (profile.contact.email) } }
                p { a href={ "tel:" (profile.contact.phone) } { (profile.contact.phone) } }
            }
        }
    }
}

fn render_not_found() -> Markup {
    html! {
        main.not-found-page {
            h1 { "404" }
            p { "This page could not be found." }
            a href="/" { "Return home" }
        }
    }
}

fn render_failed(message: &str, detail: &str) -> Markup {
    html! {
        main.error-page role="alert" {
            h1 { (message) }
            p.error-detail { (detail) }
        }
    }
}

// ============================================================================
// Viewer pages
// ============================================================================

/// Viewer host that records what the open viewer asked of the page.
#[derive(Debug, Default)]
pub struct PageChrome {
    scroll_locked: bool,
    keys: Vec<(Key, Action)>,
}

impl PageChrome {
    /// Body class for the page, `viewer-open` while scroll is suspended.
    pub fn body_class(&self) -> Option<&'static str> {
        self.scroll_locked.then_some("viewer-open")
    }

    /// Bound keys as `Key:action` pairs, space separated.
    pub fn data_keys(&self) -> String {
        self.keys
            .iter()
            .map(|(key, action)| format!("{}:{}", key.dom_name(), action.name()))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl ViewerHost for PageChrome {
    fn suspend_scroll(&mut self) {
        self.scroll_locked = true;
    }

    fn restore_scroll(&mut self) {
        self.scroll_locked = false;
    }

    fn bind_keys(&mut self, bindings: &[(Key, Action)]) {
        self.keys = bindings.to_vec();
    }

    fn unbind_keys(&mut self) {
        self.keys.clear();
    }
}

/// One viewer page per image of the collection, keyed by 0-based index.
fn render_viewer_pages(
    site: &Site<'_>,
    route: &Route,
    view: &View<'_>,
    images: &[Image],
) -> Result<Vec<(usize, Markup)>, GenerateError> {
    let base = route.href();
    let page_title = view.title(site.name);
    let mut lightbox = Lightbox::new(PageChrome::default(), images.len());
    let mut pages = Vec::with_capacity(images.len());

    for (index, image) in images.iter().enumerate() {
        lightbox.select(index)?;
        let state = lightbox.state();
        let href_for = |target: Option<usize>| match target {
            Some(i) => viewer_href(&base, i),
            None => base.clone(),
        };
        let prev = href_for(state.previous(images.len()).index());
        let next = href_for(state.next(images.len()).index());
        let chrome = lightbox.host();

        let content = html! {
            div.lightbox role="dialog" aria-modal="true" aria-label=(image.alt)
                data-keys=(chrome.data_keys()) data-close=(base) data-prev=(prev) data-next=(next) {
                div.nav-zones {
                    div.edge-zone.edge-left data-action="previous" {}
                    div.edge-zone.edge-right data-action="next" {}
                }
                a.lightbox-close href=(base) aria-label="Close" { "×" }
                a.lightbox-prev href=(prev) aria-label="Previous image" { "‹" }
                figure.lightbox-content {
                    img src=(image.src) srcset=[image.src_set.as_deref()] alt=(image.alt);
                    figcaption {
                        h2 { (image.metadata.title) }
                        p.caption { (image.caption.subject) " · " (image.caption.profession) }
                        p.meta {
                            (image.metadata.year)
                            @if let Some(location) = &image.metadata.location { " · " (location) }
                            @if let Some(camera) = &image.metadata.camera { " · " (camera) }
                        }
                        @if let Some(description) = &image.metadata.description {
                            p.description { (description) }
                        }
                    }
                }
                a.lightbox-next href=(next) aria-label="Next image" { "›" }
                span.lightbox-counter { (index + 1) " / " (images.len()) }
            }
            script { (PreEscaped(NAV_JS)) }
        };

        let title = format!("{} - {page_title}", image.metadata.title);
        pages.push((index, base_document(&title, &site.css, chrome.body_class(), content)));
    }

    Ok(pages)
}

// ============================================================================
// Tests
// ============================================================================
