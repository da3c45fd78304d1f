//! Content types loaded from the portfolio's JSON documents.
//!
//! Field names follow the JSON documents (`camelCase`), so a destination file
//! written for the site can be read back without any mapping layer:
//!
//! ```json
//! {
//!   "id": "dest-kyoto",
//!   "title": "Kyoto",
//!   "slug": "kyoto",
//!   "description": "Temples, gardens and quiet alleys.",
//!   "history": "Imperial capital for over a thousand years.",
//!   "whyVisit": "Autumn light in the moss gardens.",
//!   "featured": true,
//!   "images": [
//!     {
//!       "id": "kyoto-01",
//!       "src": "/images/kyoto/01.jpg",
//!       "alt": "Fushimi Inari gates",
//!       "aspectRatio": 0.667,
//!       "caption": { "subject": "Fushimi Inari", "profession": "Shrine" },
//!       "metadata": { "title": "Gates", "year": "2023", "series": "kyoto" }
//!     }
//!   ]
//! }
//! ```
//!
//! Everything here is immutable once loaded.

use serde::{Deserialize, Serialize};

/// Aspect ratio assumed for images that don't declare one.
///
/// Portrait-leaning, so an unknown image is laid out as slightly taller than wide.
pub const DEFAULT_ASPECT_RATIO: f64 = 0.75;

/// A single photograph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Image {
    /// Unique within its destination.
    pub id: String,
    pub src: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub src_set: Option<String>,
    pub alt: String,
    /// Width / height. Missing or zero means "unknown".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aspect_ratio: Option<f64>,
    pub caption: Caption,
    pub metadata: ImageMetadata,
}

impl Image {
    /// Aspect ratio used for layout: the declared value, or
    /// [`DEFAULT_ASPECT_RATIO`] when it is missing or zero.
    pub fn effective_aspect_ratio(&self) -> f64 {
        match self.aspect_ratio {
            Some(ratio) if ratio > 0.0 => ratio,
            _ => DEFAULT_ASPECT_RATIO,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Caption {
    pub subject: String,
    pub profession: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageMetadata {
    pub title: String,
    pub year: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub camera: Option<String>,
    /// Slug of the destination this image belongs to. Gallery filters match on it.
    pub series: String,
}

/// A destination document: narrative text plus its ordered images.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Destination {
    pub id: String,
    pub title: String,
    pub slug: String,
    pub description: String,
    pub history: String,
    pub why_visit: String,
    #[serde(default)]
    pub images: Vec<Image>,
    /// Picks the home page hero. The first featured destination wins.
    #[serde(default)]
    pub featured: bool,
}

/// The photographer profile document (`photographer.json`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhotographerProfile {
    pub name: String,
    pub tagline: String,
    pub biography: Biography,
    pub contact: ContactInfo,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub socials: Option<Socials>,
    #[serde(default)]
    pub clients: Vec<ClientCategory>,
    pub portrait_image: Portrait,
}

/// Biography sections. Each one is a short Markdown text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Biography {
    pub philosophy: String,
    pub background: String,
    pub experience: String,
    pub current_focus: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactInfo {
    pub email: String,
    pub phone: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Socials {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instagram: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub twitter: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientCategory {
    pub category: String,
    pub clients: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Portrait {
    pub src: String,
    pub alt: String,
}
