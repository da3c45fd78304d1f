//! CLI output formatting for loading and generation.
//!
//! # Information-First Display
//!
//! Output is **information-centric, not file-centric**. Every entity
//! (destination, image, page) leads with its positional index and title;
//! source documents and output paths follow as secondary context. The output
//! reads as a content inventory while still letting users trace data back to
//! specific files.
//!
//! # Output Format
//!
//! ## Load
//!
//! ```text
//! Photographer
//!     Elena Marsh
//!         Source: data/photographer.json
//!
//! Destinations
//! 001 Kyoto (4 photos) [featured]
//!     Source: data/destinations/kyoto.json
//!     001 Gates of Fushimi Inari
//!     002 Moss garden
//! 002 Iceland (3 photos)
//!     Source: data/destinations/iceland.json
//!
//! Config
//!     config.toml
//!     public/
//! ```
//!
//! ## Load failure
//!
//! ```text
//! Failed to load portfolio data
//!     destination 'iceland'
//!         Source: data/destinations/iceland.json
//!         Error: IO error: No such file or directory (os error 2)
//! ```
//!
//! ## Generate
//!
//! ```text
//! 001 Kyoto - Elena Marsh → index.html (6 viewer pages)
//! 002 Kyoto - Elena Marsh → destinations/kyoto/index.html (4 viewer pages)
//! ...
//! Assets
//!     public/ → output root
//!
//! Generated 9 pages, 24 viewer pages
//! ```
//!
//! # Architecture
//!
//! Each report has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format functions
//! are pure: no I/O, no side effects.

use crate::config::SiteConfig;
use crate::generate::GenerateReport;
use crate::portfolio::{self, LoadError, Portfolio};
use std::path::Path;

// ============================================================================
// Shared entity display helpers
// ============================================================================

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

/// Format an entity header: positional index + title, with optional photo count.
///
/// ```text
/// 001 Kyoto (5 photos)
/// 002 Iceland
/// ```
fn entity_header(index: usize, title: &str, count: Option<usize>) -> String {
    match count {
        Some(n) => format!("{} {} ({} photos)", format_index(index), title, n),
        None => format!("{} {}", format_index(index), title),
    }
}

/// Truncate text to `max` characters, appending `...` if truncated.
fn truncate_desc(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        text.to_string()
    } else {
        let cut: String = text.chars().take(max).collect();
        format!("{}...", cut)
    }
}

// ============================================================================
// Load output
// ============================================================================

/// Format the loaded content inventory.
///
/// Paths are shown relative to `source_root`.
pub fn format_load_output(
    portfolio: &Portfolio,
    config: &SiteConfig,
    source_root: &Path,
) -> Vec<String> {
    let mut lines = Vec::new();
    let data_dir = Path::new(&config.content.data_dir);

    lines.push("Photographer".to_string());
    lines.push(format!("{}{}", indent(1), portfolio.photographer().name));
    lines.push(format!(
        "{}Source: {}",
        indent(2),
        data_dir.join(portfolio::PHOTOGRAPHER_FILE).display()
    ));

    lines.push(String::new());
    lines.push("Destinations".to_string());
    for (i, dest) in portfolio.destinations().iter().enumerate() {
        let mut header = entity_header(i + 1, &dest.title, Some(dest.images.len()));
        if dest.featured {
            header.push_str(" [featured]");
        }
        lines.push(header);
        lines.push(format!(
            "{}Source: {}",
            indent(1),
            portfolio::destination_path(data_dir, &dest.slug).display()
        ));

        let preview = truncate_desc(dest.description.trim(), 60);
        if !preview.is_empty() {
            lines.push(format!("{}{}", indent(1), preview));
        }

        for (idx, image) in dest.images.iter().enumerate() {
            lines.push(format!(
                "{}{} {}",
                indent(1),
                format_index(idx + 1),
                image.metadata.title
            ));
        }
    }

    lines.push(String::new());
    lines.push("Config".to_string());
    if source_root.join("config.toml").exists() {
        lines.push(format!("{}config.toml", indent(1)));
    }
    if source_root.join(&config.assets_dir).is_dir() {
        lines.push(format!("{}{}/", indent(1), config.assets_dir));
    }

    lines
}

/// Format every failed document of a load error.
pub fn format_load_error(err: &LoadError) -> Vec<String> {
    let mut lines = vec![crate::route::FAILED_MESSAGE.to_string()];
    for failure in &err.failures {
        lines.push(format!("{}{}", indent(1), failure.document));
        lines.push(format!("{}Source: {}", indent(2), failure.path.display()));
        lines.push(format!("{}Error: {}", indent(2), failure.error));
    }
    lines
}

/// Print load output to stdout.
pub fn print_load_output(portfolio: &Portfolio, config: &SiteConfig, source_root: &Path) {
    for line in format_load_output(portfolio, config, source_root) {
        println!("{}", line);
    }
}

/// Print a load error to stderr.
pub fn print_load_error(err: &LoadError) {
    for line in format_load_error(err) {
        eprintln!("{}", line);
    }
}

// ============================================================================
// Generate output
// ============================================================================

/// Format generate output: every written page, then a summary line.
pub fn format_generate_output(report: &GenerateReport) -> Vec<String> {
    let mut lines = Vec::new();

    for (i, page) in report.pages.iter().enumerate() {
        let mut line = format!(
            "{} {} \u{2192} {}",
            format_index(i + 1),
            page.title,
            page.path.display()
        );
        if page.viewers > 0 {
            line.push_str(&format!(" ({} viewer pages)", page.viewers));
        }
        lines.push(line);
    }

    if let Some(assets) = &report.assets {
        lines.push(String::new());
        lines.push("Assets".to_string());
        let name = assets
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| assets.display().to_string());
        lines.push(format!("{}{}/ \u{2192} output root", indent(1), name));
    }

    lines.push(String::new());
    lines.push(format!(
        "Generated {} pages, {} viewer pages",
        report.pages.len(),
        report.viewer_count()
    ));

    lines
}

/// Print generate output to stdout.
pub fn print_generate_output(report: &GenerateReport) {
    for line in format_generate_output(report) {
        println!("{}", line);
    }
}

// ============================================================================
// Tests
// ============================================================================
