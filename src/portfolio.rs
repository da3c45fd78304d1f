//! Portfolio content loading and the per-build session.
//!
//! The content root holds one profile document and one document per
//! destination:
//!
//! ```text
//! content/data/
//! ├── photographer.json
//! └── destinations/
//!     ├── kyoto.json
//!     └── iceland.json
//! ```
//!
//! The destination list comes from `[content] destinations` in the config;
//! there is no directory discovery. The profile and all destinations are read
//! concurrently and joined before anything is returned. Any failure fails the
//! whole load: every broken document is reported together in one
//! [`LoadError`], and no partially populated [`Portfolio`] exists.
//!
//! A [`Session`] holds the outcome for the rest of the build. Views resolve
//! against it, so a failed load renders an error page for every route instead
//! of half a site.

use crate::config::{ContentConfig, SiteConfig};
use crate::types::{Destination, Image, PhotographerProfile};
use rayon::prelude::*;
use serde::de::DeserializeOwned;
use std::collections::HashSet;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// File name of the profile document inside the data directory.
pub const PHOTOGRAPHER_FILE: &str = "photographer.json";

/// Subdirectory of the data directory holding `<slug>.json` documents.
pub const DESTINATIONS_DIR: &str = "destinations";

/// Gallery filter id of the unfiltered collection. Not usable as a slug.
pub const ALL_FILTER_ID: &str = "all";

/// Why a single document could not be used.
#[derive(Error, Debug)]
pub enum DocumentError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("{0}")]
    Invalid(String),
}

/// Which document failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Document {
    Photographer,
    Destination(String),
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Document::Photographer => write!(f, "photographer profile"),
            Document::Destination(slug) => write!(f, "destination '{slug}'"),
        }
    }
}

#[derive(Debug)]
pub struct DocumentFailure {
    pub document: Document,
    pub path: PathBuf,
    pub error: DocumentError,
}

/// Aggregate load failure: every document that could not be loaded.
#[derive(Error, Debug)]
#[error("Failed to load portfolio data: {}", summarize(.failures))]
pub struct LoadError {
    pub failures: Vec<DocumentFailure>,
}

impl LoadError {
    /// Every failed document and its cause, without the leading message.
    pub fn detail(&self) -> String {
        summarize(&self.failures)
    }

    /// Whether the failure involves the given destination slug.
    pub fn involves_destination(&self, slug: &str) -> bool {
        self.failures
            .iter()
            .any(|f| matches!(&f.document, Document::Destination(s) if s == slug))
    }
}

fn summarize(failures: &[DocumentFailure]) -> String {
    failures
        .iter()
        .map(|f| format!("{} ({}): {}", f.document, f.path.display(), f.error))
        .collect::<Vec<_>>()
        .join("; ")
}

/// Loaded, validated portfolio content. Immutable for the rest of the build.
#[derive(Debug, Clone, PartialEq)]
pub struct Portfolio {
    photographer: PhotographerProfile,
    destinations: Vec<Destination>,
}

impl Portfolio {
    pub fn new(photographer: PhotographerProfile, destinations: Vec<Destination>) -> Self {
        Self {
            photographer,
            destinations,
        }
    }

    pub fn photographer(&self) -> &PhotographerProfile {
        &self.photographer
    }

    /// Destinations in configured order.
    pub fn destinations(&self) -> &[Destination] {
        &self.destinations
    }

    pub fn destination_by_slug(&self, slug: &str) -> Option<&Destination> {
        self.destinations.iter().find(|d| d.slug == slug)
    }

    /// The home page hero: the first featured destination, else the first one.
    pub fn featured_destination(&self) -> Option<&Destination> {
        self.destinations
            .iter()
            .find(|d| d.featured)
            .or_else(|| self.destinations.first())
    }

    /// Every image, destination by destination.
    pub fn all_images(&self) -> Vec<Image> {
        self.destinations
            .iter()
            .flat_map(|d| d.images.iter().cloned())
            .collect()
    }

    /// Filter tabs for the gallery: "all" first, then one per destination.
    pub fn filters(&self) -> Vec<FilterTab> {
        std::iter::once(FilterTab {
            filter: GalleryFilter::All,
            label: "All destinations".to_string(),
        })
        .chain(self.destinations.iter().map(|d| FilterTab {
            filter: GalleryFilter::Series(d.slug.clone()),
            label: d.title.clone(),
        }))
        .collect()
    }

    /// The gallery collection for a filter, in flattened destination order.
    pub fn filtered_images(&self, filter: &GalleryFilter) -> Vec<Image> {
        match filter {
            GalleryFilter::All => self.all_images(),
            GalleryFilter::Series(series) => self
                .destinations
                .iter()
                .flat_map(|d| d.images.iter())
                .filter(|img| &img.metadata.series == series)
                .cloned()
                .collect(),
        }
    }

    /// Whether a filter names something that exists.
    pub fn has_filter(&self, filter: &GalleryFilter) -> bool {
        match filter {
            GalleryFilter::All => true,
            GalleryFilter::Series(slug) => self.destination_by_slug(slug).is_some(),
        }
    }
}

/// Gallery category filter.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum GalleryFilter {
    /// Every image; addressed as [`ALL_FILTER_ID`].
    All,
    /// Images whose `metadata.series` equals this destination slug.
    Series(String),
}

impl GalleryFilter {
    /// Stable identifier: `"all"` or the destination slug.
    pub fn id(&self) -> &str {
        match self {
            GalleryFilter::All => ALL_FILTER_ID,
            GalleryFilter::Series(slug) => slug,
        }
    }

    pub fn from_id(id: &str) -> Self {
        if id == ALL_FILTER_ID {
            GalleryFilter::All
        } else {
            GalleryFilter::Series(id.to_string())
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterTab {
    pub filter: GalleryFilter,
    pub label: String,
}

/// Outcome of loading the content for one build.
#[derive(Debug)]
pub enum Session {
    Ready(Portfolio),
    Failed(LoadError),
}

impl Session {
    pub fn load(root: &Path, config: &SiteConfig) -> Session {
        match load(root, &config.content) {
            Ok(portfolio) => Session::Ready(portfolio),
            Err(err) => Session::Failed(err),
        }
    }

    pub fn portfolio(&self) -> Option<&Portfolio> {
        match self {
            Session::Ready(portfolio) => Some(portfolio),
            Session::Failed(_) => None,
        }
    }

    pub fn error(&self) -> Option<&LoadError> {
        match self {
            Session::Ready(_) => None,
            Session::Failed(err) => Some(err),
        }
    }
}

/// Load and validate the profile and every configured destination.
///
/// Destinations come back in configured order regardless of which finished
/// loading first.
pub fn load(root: &Path, content: &ContentConfig) -> Result<Portfolio, LoadError> {
    let data_dir = root.join(&content.data_dir);

    let (photographer, destinations) = rayon::join(
        || load_photographer(&data_dir),
        || {
            content
                .destinations
                .par_iter()
                .map(|slug| load_destination(&data_dir, slug))
                .collect::<Vec<_>>()
        },
    );

    let mut failures = Vec::new();
    let photographer = photographer.map_err(|f| failures.push(f)).ok();
    let destinations: Vec<Destination> = destinations
        .into_iter()
        .filter_map(|result| result.map_err(|f| failures.push(f)).ok())
        .collect();

    match photographer {
        Some(photographer) if failures.is_empty() => Ok(Portfolio::new(photographer, destinations)),
        _ => Err(LoadError { failures }),
    }
}

/// Path of a destination document.
pub fn destination_path(data_dir: &Path, slug: &str) -> PathBuf {
    data_dir.join(DESTINATIONS_DIR).join(format!("{slug}.json"))
}

fn load_photographer(data_dir: &Path) -> Result<PhotographerProfile, DocumentFailure> {
    let path = data_dir.join(PHOTOGRAPHER_FILE);
    read_document(&path).map_err(|error| DocumentFailure {
        document: Document::Photographer,
        path,
        error,
    })
}

fn load_destination(data_dir: &Path, slug: &str) -> Result<Destination, DocumentFailure> {
    let path = destination_path(data_dir, slug);
    read_document::<Destination>(&path)
        .and_then(|dest| validate_destination(slug, &dest).map(|()| dest))
        .map_err(|error| DocumentFailure {
            document: Document::Destination(slug.to_string()),
            path,
            error,
        })
}

fn read_document<T: DeserializeOwned>(path: &Path) -> Result<T, DocumentError> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

/// Check the invariants the layout and viewer rely on.
fn validate_destination(slug: &str, dest: &Destination) -> Result<(), DocumentError> {
    if dest.slug != slug {
        return Err(DocumentError::Invalid(format!(
            "slug '{}' does not match requested '{slug}'",
            dest.slug
        )));
    }
    let mut ids = HashSet::new();
    for image in &dest.images {
        if !ids.insert(image.id.as_str()) {
            return Err(DocumentError::Invalid(format!(
                "duplicate image id '{}'",
                image.id
            )));
        }
        if let Some(ratio) = image.aspect_ratio
            && (!ratio.is_finite() || ratio < 0.0)
        {
            return Err(DocumentError::Invalid(format!(
                "image '{}' has invalid aspect ratio {ratio}",
                image.id
            )));
        }
    }
    Ok(())
}
