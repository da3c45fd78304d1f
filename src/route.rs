//! Site routes and the views they resolve to.
//!
//! | Path | Route |
//! |------|-------|
//! | `/` | [`Route::Home`] |
//! | `/destinations/<slug>/` | [`Route::Destination`] |
//! | `/gallery/` | [`Route::Gallery`] with [`GalleryFilter::All`] |
//! | `/gallery/<slug>/` | [`Route::Gallery`] with [`GalleryFilter::Series`] |
//! | `/about/` | [`Route::About`] |
//! | anything else | [`Route::NotFound`] |
//!
//! [`resolve`] turns a route into a [`View`] against the build session. Each
//! view variant carries exactly what its page renders, so the generator never
//! looks anything up itself. A failed session resolves every route to
//! [`View::Failed`].

use crate::config::DiscoveryConfig;
use crate::discovery;
use crate::portfolio::{FilterTab, GalleryFilter, Portfolio, Session};
use crate::types::{Destination, Image, PhotographerProfile};
use std::path::PathBuf;

/// Page-level message shown when content could not be loaded.
pub const FAILED_MESSAGE: &str = "Failed to load portfolio data";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    Destination(String),
    Gallery(GalleryFilter),
    About,
    NotFound,
}

impl Route {
    /// Parse a site path. Trailing slashes and `index.html` are accepted.
    pub fn parse(path: &str) -> Route {
        let path = path.strip_suffix("index.html").unwrap_or(path);
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        match segments.as_slice() {
            [] => Route::Home,
            ["destinations", slug] => Route::Destination(slug.to_string()),
            ["gallery"] => Route::Gallery(GalleryFilter::All),
            ["gallery", id] => Route::Gallery(GalleryFilter::from_id(id)),
            ["about"] => Route::About,
            _ => Route::NotFound,
        }
    }

    /// Canonical link for this route.
    pub fn href(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::Destination(slug) => format!("/destinations/{slug}/"),
            Route::Gallery(GalleryFilter::All) => "/gallery/".to_string(),
            Route::Gallery(GalleryFilter::Series(slug)) => format!("/gallery/{slug}/"),
            Route::About => "/about/".to_string(),
            Route::NotFound => "/404.html".to_string(),
        }
    }

    /// Output file for this route, relative to the output root.
    pub fn output_file(&self) -> PathBuf {
        match self {
            Route::NotFound => PathBuf::from("404.html"),
            route => {
                let href = route.href();
                PathBuf::from(href.trim_start_matches('/')).join("index.html")
            }
        }
    }

    /// Every page route of a loaded portfolio, in nav order.
    pub fn site_map(portfolio: &Portfolio) -> Vec<Route> {
        let mut routes = vec![Route::Home];
        routes.extend(
            portfolio
                .destinations()
                .iter()
                .map(|d| Route::Destination(d.slug.clone())),
        );
        routes.extend(portfolio.filters().into_iter().map(|tab| Route::Gallery(tab.filter)));
        routes.push(Route::About);
        routes.push(Route::NotFound);
        routes
    }
}

/// Whether a nav link counts as current for `current_path`.
///
/// Home only matches itself; every other link also matches paths below it.
pub fn is_current(nav_href: &str, current_path: &str) -> bool {
    if nav_href == "/" {
        current_path == "/"
    } else {
        current_path.starts_with(nav_href)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct HomeView<'a> {
    pub featured: Option<&'a Destination>,
    /// The curated selection, already shuffled.
    pub selection: Vec<Image>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GalleryView {
    pub active: GalleryFilter,
    pub filters: Vec<FilterTab>,
    pub images: Vec<Image>,
}

/// Everything a page renders, by page kind.
#[derive(Debug, Clone, PartialEq)]
pub enum View<'a> {
    Home(HomeView<'a>),
    Destination(&'a Destination),
    Gallery(GalleryView),
    About(&'a PhotographerProfile),
    NotFound,
    Failed { message: String, detail: String },
}

impl View<'_> {
    /// Document title. `name` is the photographer's name, or the site title
    /// when no profile is available.
    pub fn title(&self, name: &str) -> String {
        match self {
            View::Home(home) => match home.featured {
                Some(dest) => format!("{} - {name}", dest.title),
                None => name.to_string(),
            },
            View::Destination(dest) => format!("{} - {name}", dest.title),
            View::Gallery(_) => format!("Collection - {name}"),
            View::About(_) => format!("About {name} - Travel & Exploration"),
            View::NotFound => format!("Page not found - {name}"),
            View::Failed { .. } => format!("Error - {name}"),
        }
    }

    /// The image collection this page lays out, if any.
    pub fn collection(&self) -> Option<&[Image]> {
        match self {
            View::Home(home) => Some(&home.selection),
            View::Destination(dest) => Some(&dest.images),
            View::Gallery(gallery) => Some(&gallery.images),
            View::About(_) | View::NotFound | View::Failed { .. } => None,
        }
    }
}

/// Resolve `route` against the session.
pub fn resolve<'a>(session: &'a Session, route: &Route, discovery: &DiscoveryConfig) -> View<'a> {
    let portfolio = match session {
        Session::Ready(portfolio) => portfolio,
        Session::Failed(err) => {
            return View::Failed {
                message: FAILED_MESSAGE.to_string(),
                detail: err.detail(),
            };
        }
    };

    match route {
        Route::Home => View::Home(HomeView {
            featured: portfolio.featured_destination(),
            selection: discovery::pick(&portfolio.all_images(), discovery.count, discovery.seed),
        }),
        Route::Destination(slug) => match portfolio.destination_by_slug(slug) {
            Some(dest) => View::Destination(dest),
            None => View::NotFound,
        },
        Route::Gallery(filter) if portfolio.has_filter(filter) => View::Gallery(GalleryView {
            active: filter.clone(),
            filters: portfolio.filters(),
            images: portfolio.filtered_images(filter),
        }),
        Route::Gallery(_) => View::NotFound,
        Route::About => View::About(portfolio.photographer()),
        Route::NotFound => View::NotFound,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ContentConfig;
    use crate::portfolio::{self, Document, DocumentError, DocumentFailure, LoadError};
    use crate::test_helpers::*;

    fn discovery(seed: u64) -> DiscoveryConfig {
        DiscoveryConfig {
            count: 6,
            seed: Some(seed),
        }
    }

    fn ready(destinations: Vec<Destination>) -> Session {
        Session::Ready(portfolio(destinations))
    }

    // =========================================================================
    // Parsing
    // =========================================================================

    #[test]
    fn parse_known_paths() {
        assert_eq!(Route::parse("/"), Route::Home);
        assert_eq!(Route::parse(""), Route::Home);
        assert_eq!(Route::parse("/destinations/kyoto"), Route::Destination("kyoto".into()));
        assert_eq!(Route::parse("/gallery"), Route::Gallery(GalleryFilter::All));
        assert_eq!(
            Route::parse("/gallery/iceland"),
            Route::Gallery(GalleryFilter::Series("iceland".into()))
        );
        assert_eq!(Route::parse("/about"), Route::About);
    }

    #[test]
    fn parse_accepts_trailing_slash_and_index() {
        assert_eq!(Route::parse("/about/"), Route::About);
        assert_eq!(Route::parse("/index.html"), Route::Home);
        assert_eq!(
            Route::parse("/destinations/kyoto/index.html"),
            Route::Destination("kyoto".into())
        );
        assert_eq!(Route::parse("/gallery/index.html"), Route::Gallery(GalleryFilter::All));
    }

    #[test]
    fn parse_unknown_paths() {
        assert_eq!(Route::parse("/destinations"), Route::NotFound);
        assert_eq!(Route::parse("/destinations/kyoto/extra"), Route::NotFound);
        assert_eq!(Route::parse("/contact"), Route::NotFound);
    }

    #[test]
    fn href_parses_back_to_route() {
        let routes = [
            Route::Home,
            Route::Destination("kyoto".into()),
            Route::Gallery(GalleryFilter::All),
            Route::Gallery(GalleryFilter::Series("iceland".into())),
            Route::About,
        ];
        for route in routes {
            assert_eq!(Route::parse(&route.href()), route);
        }
    }

    #[test]
    fn output_files() {
        assert_eq!(Route::Home.output_file(), PathBuf::from("index.html"));
        assert_eq!(
            Route::Destination("kyoto".into()).output_file(),
            PathBuf::from("destinations/kyoto/index.html")
        );
        assert_eq!(
            Route::Gallery(GalleryFilter::Series("kyoto".into())).output_file(),
            PathBuf::from("gallery/kyoto/index.html")
        );
        assert_eq!(Route::NotFound.output_file(), PathBuf::from("404.html"));
    }

    #[test]
    fn nav_matching() {
        assert!(is_current("/", "/"));
        assert!(!is_current("/", "/about/"));
        assert!(is_current("/gallery/", "/gallery/"));
        assert!(is_current("/gallery/", "/gallery/kyoto/"));
        assert!(!is_current("/about/", "/gallery/"));
    }

    #[test]
    fn site_map_lists_every_page() {
        let portfolio = portfolio(vec![
            destination("kyoto", true, &["k"]),
            destination("iceland", false, &["i"]),
        ]);
        let hrefs: Vec<String> = Route::site_map(&portfolio).iter().map(Route::href).collect();
        assert_eq!(
            hrefs,
            vec![
                "/",
                "/destinations/kyoto/",
                "/destinations/iceland/",
                "/gallery/",
                "/gallery/kyoto/",
                "/gallery/iceland/",
                "/about/",
                "/404.html",
            ]
        );
    }

    // =========================================================================
    // Resolution
    // =========================================================================

    #[test]
    fn unknown_destination_is_not_found() {
        let session = ready(vec![destination("kyoto", true, &["k"])]);
        let view = resolve(&session, &Route::Destination("lima".into()), &discovery(1));
        assert_eq!(view, View::NotFound);
    }

    #[test]
    fn unknown_gallery_filter_is_not_found() {
        let session = ready(vec![destination("kyoto", true, &["k"])]);
        let route = Route::Gallery(GalleryFilter::Series("lima".into()));
        assert_eq!(resolve(&session, &route, &discovery(1)), View::NotFound);
    }

    #[test]
    fn destination_view_carries_destination() {
        let session = ready(vec![destination("kyoto", true, &["k1", "k2"])]);
        match resolve(&session, &Route::Destination("kyoto".into()), &discovery(1)) {
            View::Destination(dest) => assert_eq!(image_ids(&dest.images), vec!["k1", "k2"]),
            other => panic!("expected destination view, got {other:?}"),
        }
    }

    #[test]
    fn gallery_view_marks_active_filter() {
        let session = ready(vec![
            destination("kyoto", true, &["k"]),
            destination("iceland", false, &["i1", "i2"]),
        ]);
        let route = Route::Gallery(GalleryFilter::Series("iceland".into()));
        match resolve(&session, &route, &discovery(1)) {
            View::Gallery(gallery) => {
                assert_eq!(gallery.active, GalleryFilter::Series("iceland".into()));
                assert_eq!(gallery.filters.len(), 3);
                assert_eq!(image_ids(&gallery.images), vec!["i1", "i2"]);
            }
            other => panic!("expected gallery view, got {other:?}"),
        }
    }

    #[test]
    fn home_selection_is_capped_and_seeded() {
        let ids: Vec<String> = (0..10).map(|i| format!("k{i}")).collect();
        let refs: Vec<&str> = ids.iter().map(String::as_str).collect();
        let session = ready(vec![destination("kyoto", true, &refs)]);

        let first = resolve(&session, &Route::Home, &discovery(9));
        let second = resolve(&session, &Route::Home, &discovery(9));
        assert_eq!(first, second);
        match first {
            View::Home(home) => {
                assert_eq!(home.selection.len(), 6);
                assert_eq!(home.featured.map(|d| d.slug.as_str()), Some("kyoto"));
            }
            other => panic!("expected home view, got {other:?}"),
        }
    }

    #[test]
    fn home_without_destinations_has_no_hero() {
        let session = ready(vec![]);
        match resolve(&session, &Route::Home, &discovery(1)) {
            View::Home(home) => {
                assert!(home.featured.is_none());
                assert!(home.selection.is_empty());
            }
            other => panic!("expected home view, got {other:?}"),
        }
    }

    #[test]
    fn failed_session_fails_every_route() {
        let session = Session::Failed(LoadError {
            failures: vec![DocumentFailure {
                document: Document::Destination("iceland".into()),
                path: PathBuf::from("data/destinations/iceland.json"),
                error: DocumentError::Invalid("broken".into()),
            }],
        });
        for route in [Route::Home, Route::About, Route::Gallery(GalleryFilter::All), Route::NotFound] {
            match resolve(&session, &route, &discovery(1)) {
                View::Failed { message, detail } => {
                    assert_eq!(message, FAILED_MESSAGE);
                    assert!(detail.contains("iceland"));
                }
                other => panic!("expected failed view, got {other:?}"),
            }
        }
    }

    #[test]
    fn fixture_session_resolves_about() {
        let tmp = setup_fixtures();
        let session = Session::Ready(portfolio::load(tmp.path(), &ContentConfig::default()).unwrap());
        match resolve(&session, &Route::About, &discovery(1)) {
            View::About(profile) => assert_eq!(profile.name, "Elena Marsh"),
            other => panic!("expected about view, got {other:?}"),
        }
    }

    // =========================================================================
    // Titles
    // =========================================================================

    #[test]
    fn page_titles() {
        let dest = destination("kyoto", true, &["k"]);
        let profile = sample_profile();
        let name = "Ana";

        let home = View::Home(HomeView {
            featured: Some(&dest),
            selection: vec![],
        });
        assert_eq!(home.title(name), "KYOTO - Ana");
        assert_eq!(View::Destination(&dest).title(name), "KYOTO - Ana");
        let gallery = View::Gallery(GalleryView {
            active: GalleryFilter::All,
            filters: vec![],
            images: vec![],
        });
        assert_eq!(gallery.title(name), "Collection - Ana");
        assert_eq!(
            View::About(&profile).title(name),
            "About Ana - Travel & Exploration"
        );
    }

    #[test]
    fn only_gallery_pages_have_collections() {
        let dest = destination("kyoto", true, &["k"]);
        assert_eq!(View::Destination(&dest).collection().map(<[Image]>::len), Some(1));
        assert!(View::NotFound.collection().is_none());
    }
}
