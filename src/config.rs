//! Site configuration module.
//!
//! Handles loading, validating, and merging `config.toml`. The file lives in
//! the content root next to the data documents:
//!
//! ```text
//! content/
//! ├── config.toml              # Site config (optional)
//! ├── data/
//! │   ├── photographer.json
//! │   └── destinations/
//! │       ├── kyoto.json
//! │       └── iceland.json
//! └── public/                  # Copied verbatim to the output root
//!     └── images/...
//! ```
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! site_title = "Wanderlust Chronicles"
//! assets_dir = "public"
//!
//! [content]
//! data_dir = "data"
//! destinations = ["kyoto", "iceland"]   # Load order = nav order
//!
//! [layout]
//! # columns = 3                # Fixed column count; omit for responsive 1/3
//! mobile_breakpoint = 768      # px; narrower viewports get one column
//!
//! [discovery]
//! count = 6                    # Images in the home page "curated selection"
//! # seed = 42                  # Fixed shuffle seed; omit for a fresh pick per build
//!
//! [splash]
//! enabled = true
//! min_duration_ms = 1500
//!
//! [theme]
//! grid_gap = "2.5rem"
//! page_padding = "3rem"
//!
//! [colors.light]
//! background = "#faf9f7"
//! ...
//! ```
//!
//! Config files are sparse: stock defaults are serialized to a TOML table and
//! the user file is merged on top with [`merge_toml`]. Unknown keys are
//! rejected to catch typos early.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::num::NonZeroUsize;
use std::path::Path;
use crate::portfolio::ALL_FILTER_ID;
use thiserror::Error;

/// Slugs become path segments: lowercase ASCII letters, digits and hyphens.
fn is_valid_slug(slug: &str) -> bool {
    !slug.is_empty()
        && slug
            .bytes()
            .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'-')
}

/// Widest masonry grid the stylesheet has a layout for.
pub const MAX_COLUMNS: usize = 4;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Site configuration loaded from `config.toml`.
///
/// All fields have sensible defaults. User config files need only specify
/// the values they want to override. Unknown keys are rejected.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Fallback title used when the photographer profile is unavailable,
    /// and the words shown on the splash screen.
    pub site_title: String,
    /// Directory (relative to the content root) copied verbatim to the output root.
    pub assets_dir: String,
    pub content: ContentConfig,
    pub layout: LayoutConfig,
    pub discovery: DiscoveryConfig,
    pub splash: SplashConfig,
    pub theme: ThemeConfig,
    pub colors: ColorConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            site_title: "Wanderlust Chronicles".to_string(),
            assets_dir: "public".to_string(),
            content: ContentConfig::default(),
            layout: LayoutConfig::default(),
            discovery: DiscoveryConfig::default(),
            splash: SplashConfig::default(),
            theme: ThemeConfig::default(),
            colors: ColorConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.content.destinations.is_empty() {
            return Err(ConfigError::Validation(
                "content.destinations must not be empty".into(),
            ));
        }
        let mut seen = HashSet::new();
        for slug in &self.content.destinations {
            if !is_valid_slug(slug) {
                return Err(ConfigError::Validation(format!(
                    "content.destinations: invalid slug '{slug}' (use a-z, 0-9 and '-')"
                )));
            }
            if slug == ALL_FILTER_ID {
                return Err(ConfigError::Validation(format!(
                    "content.destinations: '{slug}' is reserved for the unfiltered gallery"
                )));
            }
            if !seen.insert(slug.as_str()) {
                return Err(ConfigError::Validation(format!(
                    "content.destinations: duplicate slug '{slug}'"
                )));
            }
        }
        if let Some(columns) = self.layout.columns
            && !(1..=MAX_COLUMNS).contains(&columns)
        {
            return Err(ConfigError::Validation(format!(
                "layout.columns must be 1-{MAX_COLUMNS}"
            )));
        }
        if self.layout.mobile_breakpoint == 0 {
            return Err(ConfigError::Validation(
                "layout.mobile_breakpoint must be non-zero".into(),
            ));
        }
        if self.discovery.count == 0 {
            return Err(ConfigError::Validation(
                "discovery.count must be non-zero".into(),
            ));
        }
        Ok(())
    }
}

/// Where the portfolio documents live and which destinations to load.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ContentConfig {
    /// Directory holding `photographer.json` and `destinations/`.
    pub data_dir: String,
    /// Destination slugs, each loaded from `destinations/<slug>.json`.
    pub destinations: Vec<String>,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            data_dir: "data".to_string(),
            destinations: vec!["kyoto".to_string(), "iceland".to_string()],
        }
    }
}

/// Masonry grid settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LayoutConfig {
    /// Fixed column count for every grid. When absent, grids are responsive:
    /// one column below the breakpoint, three at or above it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub columns: Option<usize>,
    /// Viewport width in CSS pixels where the narrow layout ends.
    pub mobile_breakpoint: u32,
}

impl LayoutConfig {
    /// The configured column count, if any. Zero counts as unset;
    /// validation rejects it before this is reached.
    pub fn column_count(&self) -> Option<NonZeroUsize> {
        self.columns.and_then(NonZeroUsize::new)
    }
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            columns: None,
            mobile_breakpoint: 768,
        }
    }
}

/// Home page "curated selection" settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DiscoveryConfig {
    /// How many images to pick.
    pub count: usize,
    /// Shuffle seed. Absent means a different selection on every build.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Default for DiscoveryConfig {
    fn default() -> Self {
        Self {
            count: 6,
            seed: None,
        }
    }
}

/// Splash overlay shown on the first page view of a browser session.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SplashConfig {
    pub enabled: bool,
    /// Minimum time the overlay stays up, in milliseconds.
    pub min_duration_ms: u32,
}

impl Default for SplashConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            min_duration_ms: 1500,
        }
    }
}

/// Theme/layout settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ThemeConfig {
    /// Gap between masonry columns and between cards in a column (CSS value).
    pub grid_gap: String,
    /// Horizontal padding of the page container (CSS value).
    pub page_padding: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            grid_gap: "2.5rem".to_string(),
            page_padding: "3rem".to_string(),
        }
    }
}

/// Color configuration for light and dark modes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColorConfig {
    pub light: ColorScheme,
    pub dark: ColorScheme,
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self {
            light: ColorScheme::default_light(),
            dark: ColorScheme::default_dark(),
        }
    }
}

/// Individual color scheme (light or dark).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColorScheme {
    pub background: String,
    pub text: String,
    /// Labels, captions, inactive nav items.
    pub text_muted: String,
    pub border: String,
    pub link: String,
    pub link_hover: String,
}

impl ColorScheme {
    pub fn default_light() -> Self {
        Self {
            background: "#faf9f7".to_string(),
            text: "#141414".to_string(),
            text_muted: "#6b6b6b".to_string(),
            border: "#e4e2de".to_string(),
            link: "#2b2b2b".to_string(),
            link_hover: "#000000".to_string(),
        }
    }

    pub fn default_dark() -> Self {
        Self {
            background: "#0c0c0c".to_string(),
            text: "#ececec".to_string(),
            text_muted: "#9a9a9a".to_string(),
            border: "#2e2e2e".to_string(),
            link: "#d0d0d0".to_string(),
            link_hover: "#ffffff".to_string(),
        }
    }
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self::default_light()
    }
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
///
/// This is the base layer user overrides are merged on top of.
pub fn stock_defaults_value() -> toml::Value {
    toml::Value::try_from(SiteConfig::default()).expect("default config must serialize")
}

/// Recursively merge `overlay` on top of `base`.
///
/// - Tables are merged key-by-key (overlay keys override base keys).
/// - Non-table values in overlay replace base values entirely, arrays included.
/// - Keys in base that are not in overlay are preserved.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Load `config.toml` from a directory as a raw TOML value.
///
/// Returns `Ok(None)` if no `config.toml` exists in the directory.
pub fn load_raw_config(path: &Path) -> Result<Option<toml::Value>, ConfigError> {
    let config_path = path.join("config.toml");
    if !config_path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(&config_path)?;
    let value: toml::Value = toml::from_str(&content)?;
    Ok(Some(value))
}

/// Merge an optional overlay onto a base value, then deserialize and validate.
pub fn resolve_config(
    base: toml::Value,
    overlay: Option<toml::Value>,
) -> Result<SiteConfig, ConfigError> {
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let config: SiteConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load config from `config.toml` in the content root.
///
/// Merges user values on top of stock defaults, rejects unknown keys,
/// and validates the result.
pub fn load_config(root: &Path) -> Result<SiteConfig, ConfigError> {
    let base = stock_defaults_value();
    let overlay = load_raw_config(root)?;
    resolve_config(base, overlay)
}

/// Returns a fully-commented stock `config.toml` with all keys and explanations.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# Wanderlust Configuration
# ========================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults.
# Unknown keys will cause an error.

# Shown on the splash screen, and used as the page title when the
# photographer profile can't be loaded.
site_title = "Wanderlust Chronicles"

# Directory copied verbatim to the output root (images, favicon, fonts).
assets_dir = "public"

# ---------------------------------------------------------------------------
# Content documents
# ---------------------------------------------------------------------------
[content]
# Directory holding photographer.json and destinations/<slug>.json.
data_dir = "data"

# Destinations to load, in navigation order. Slugs use a-z, 0-9 and '-'
# ("all" is reserved). A missing or invalid document for any of them fails
# the whole build.
destinations = ["kyoto", "iceland"]

# ---------------------------------------------------------------------------
# Masonry grids
# ---------------------------------------------------------------------------
[layout]
# Fixed column count (1-4) for every grid.
# Omit for responsive grids: 1 column on narrow screens, 3 on wide ones.
# columns = 3

# Viewport width (CSS px) below which the single-column layout is used.
mobile_breakpoint = 768

# ---------------------------------------------------------------------------
# Home page curated selection
# ---------------------------------------------------------------------------
[discovery]
# Number of images picked at random from all destinations.
count = 6

# Fix the shuffle for reproducible builds. Omit for a fresh pick every build.
# seed = 42

# ---------------------------------------------------------------------------
# Splash screen
# ---------------------------------------------------------------------------
[splash]
enabled = true

# Minimum time the splash stays visible, in milliseconds.
min_duration_ms = 1500

# ---------------------------------------------------------------------------
# Theme / layout
# ---------------------------------------------------------------------------
[theme]
# Gap between masonry columns and cards (CSS value).
grid_gap = "2.5rem"

# Horizontal page padding (CSS value).
page_padding = "3rem"

# ---------------------------------------------------------------------------
# Colors - Light mode (prefers-color-scheme: light)
# ---------------------------------------------------------------------------
[colors.light]
background = "#faf9f7"
text = "#141414"
text_muted = "#6b6b6b"    # Labels, captions, inactive nav
border = "#e4e2de"
link = "#2b2b2b"
link_hover = "#000000"

# ---------------------------------------------------------------------------
# Colors - Dark mode (prefers-color-scheme: dark)
# ---------------------------------------------------------------------------
[colors.dark]
background = "#0c0c0c"
text = "#ececec"
text_muted = "#9a9a9a"
border = "#2e2e2e"
link = "#d0d0d0"
link_hover = "#ffffff"
"##
}

/// Generate CSS custom properties from color config.
pub fn generate_color_css(colors: &ColorConfig) -> String {
    format!(
        r#":root {{
    --color-bg: {light_bg};
    --color-text: {light_text};
    --color-text-muted: {light_text_muted};
    --color-border: {light_border};
    --color-link: {light_link};
    --color-link-hover: {light_link_hover};
}}

@media (prefers-color-scheme: dark) {{
    :root {{
        --color-bg: {dark_bg};
        --color-text: {dark_text};
        --color-text-muted: {dark_text_muted};
        --color-border: {dark_border};
        --color-link: {dark_link};
        --color-link-hover: {dark_link_hover};
    }}
}}"#,
        light_bg = colors.light.background,
        light_text = colors.light.text,
        light_text_muted = colors.light.text_muted,
        light_border = colors.light.border,
        light_link = colors.light.link,
        light_link_hover = colors.light.link_hover,
        dark_bg = colors.dark.background,
        dark_text = colors.dark.text,
        dark_text_muted = colors.dark.text_muted,
        dark_border = colors.dark.border,
        dark_link = colors.dark.link,
        dark_link_hover = colors.dark.link_hover,
    )
}

/// Generate CSS custom properties and the responsive grid switch.
///
/// Both masonry variants are present in the markup when no column count is
/// configured; the media query at the breakpoint shows exactly one of them.
pub fn generate_layout_css(theme: &ThemeConfig, layout: &LayoutConfig) -> String {
    format!(
        r#":root {{
    --grid-gap: {grid_gap};
    --page-padding: {page_padding};
}}

.masonry-narrow {{ display: flex; }}
.masonry-wide {{ display: none; }}

@media (min-width: {breakpoint}px) {{
    .masonry-narrow {{ display: none; }}
    .masonry-wide {{ display: flex; }}
}}"#,
        grid_gap = theme.grid_gap,
        page_padding = theme.page_padding,
        breakpoint = layout.mobile_breakpoint,
    )
}
