//! Shared test utilities for the wanderlust test suite.
//!
//! Provides fixture setup, builders for small in-memory collections, and
//! lookup helpers that panic with a readable message on a miss.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let tmp = setup_fixtures();
//! let portfolio = load(tmp.path(), &ContentConfig::default()).unwrap();
//!
//! let kyoto = find_destination(&portfolio, "kyoto");
//! assert_eq!(image_ids(&kyoto.images)[0], "kyoto-01");
//! ```

use std::path::Path;
use tempfile::TempDir;

use crate::portfolio::Portfolio;
use crate::types::{
    Biography, Caption, ContactInfo, Destination, Image, ImageMetadata, PhotographerProfile,
    Portrait, Socials,
};

// =========================================================================
// Fixture setup
// =========================================================================

/// Copy `fixtures/content/` to a temp directory and return it.
///
/// Tests get an isolated copy they can mutate (delete or corrupt a
/// document) without affecting other tests or the source fixtures.
pub fn setup_fixtures() -> TempDir {
    let tmp = TempDir::new().unwrap();
    let fixtures = Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures/content");
    copy_dir_recursive(&fixtures, tmp.path()).unwrap();
    tmp
}

fn copy_dir_recursive(src: &Path, dst: &Path) -> std::io::Result<()> {
    for entry in std::fs::read_dir(src)? {
        let entry = entry?;
        let src_path = entry.path();
        let dst_path = dst.join(entry.file_name());

        if src_path.is_dir() {
            std::fs::create_dir_all(&dst_path)?;
            copy_dir_recursive(&src_path, &dst_path)?;
        } else {
            std::fs::copy(&src_path, &dst_path)?;
        }
    }
    Ok(())
}

// =========================================================================
// Builders
// =========================================================================

/// A minimal image in series `"test"`.
pub fn image(id: &str, aspect_ratio: Option<f64>) -> Image {
    image_in(id, "test", aspect_ratio)
}

/// A minimal image in the given series.
pub fn image_in(id: &str, series: &str, aspect_ratio: Option<f64>) -> Image {
    Image {
        id: id.to_string(),
        src: format!("/images/{series}/{id}.jpg"),
        src_set: None,
        alt: format!("Photo {id}"),
        aspect_ratio,
        caption: Caption {
            subject: format!("Subject {id}"),
            profession: "Street".to_string(),
        },
        metadata: ImageMetadata {
            title: format!("Title {id}"),
            year: "2024".to_string(),
            description: None,
            location: None,
            camera: None,
            series: series.to_string(),
        },
    }
}

/// A destination whose images are `image_in(id, slug, Some(1.0))` for each id.
pub fn destination(slug: &str, featured: bool, image_ids: &[&str]) -> Destination {
    Destination {
        id: format!("dest-{slug}"),
        title: slug.to_uppercase(),
        slug: slug.to_string(),
        description: format!("About {slug}"),
        history: format!("History of {slug}"),
        why_visit: format!("Why {slug}"),
        images: image_ids
            .iter()
            .map(|id| image_in(id, slug, Some(1.0)))
            .collect(),
        featured,
    }
}

/// A small profile with both socials set.
pub fn sample_profile() -> PhotographerProfile {
    PhotographerProfile {
        name: "Test Photographer".to_string(),
        tagline: "Light and distance".to_string(),
        biography: Biography {
            philosophy: "Slow travel.".to_string(),
            background: "Started with **film**.".to_string(),
            experience: "Ten years.".to_string(),
            current_focus: "Coastlines.".to_string(),
        },
        contact: ContactInfo {
            email: "test@example.com".to_string(),
            phone: "+1 555 0100".to_string(),
        },
        socials: Some(Socials {
            instagram: Some("https://instagram.com/test".to_string()),
            twitter: Some("https://twitter.com/test".to_string()),
        }),
        clients: vec![],
        portrait_image: Portrait {
            src: "/images/portrait.jpg".to_string(),
            alt: "Portrait".to_string(),
        },
    }
}

/// Portfolio built from in-memory destinations with [`sample_profile`].
pub fn portfolio(destinations: Vec<Destination>) -> Portfolio {
    Portfolio::new(sample_profile(), destinations)
}

// =========================================================================
// Lookups (panic with a clear message on miss)
// =========================================================================

/// Find a destination by slug. Panics if not found.
pub fn find_destination<'a>(portfolio: &'a Portfolio, slug: &str) -> &'a Destination {
    portfolio.destination_by_slug(slug).unwrap_or_else(|| {
        let slugs: Vec<&str> = portfolio
            .destinations()
            .iter()
            .map(|d| d.slug.as_str())
            .collect();
        panic!("destination '{slug}' not found. Available: {slugs:?}")
    })
}

/// Image ids in collection order.
pub fn image_ids(images: &[Image]) -> Vec<&str> {
    images.iter().map(|i| i.id.as_str()).collect()
}
