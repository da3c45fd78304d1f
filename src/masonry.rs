//! Masonry layout: balanced columns from an ordered image sequence.
//!
//! Images are dealt one at a time, in input order, to whichever column is
//! currently shortest. "Height" is measured in units of column width: an image
//! with aspect ratio `r` (width / height) adds `1 / r` to its column. The
//! leftmost column wins ties, so the same input always produces the same
//! layout.
//!
//! ```text
//! a (1.0)  b (0.5)  c (1.0),  2 columns
//!
//!   col 0      col 1
//!   ┌────┐     ┌────┐
//!   │ a  │     │    │
//!   ├────┤     │ b  │
//!   │ c  │     │    │
//!   └────┘     └────┘
//!   h = 2      h = 2
//! ```
//!
//! Every placement carries the image's index in the flat input, which is what
//! the lightbox navigates over. Column position is purely visual.

use crate::types::Image;
use std::num::NonZeroUsize;

/// Number of masonry columns. Zero columns is not representable.
pub type ColumnCount = NonZeroUsize;

/// Columns used on narrow viewports when nothing is configured.
pub const NARROW_COLUMNS: ColumnCount = NonZeroUsize::MIN;

/// Columns used on wide viewports when nothing is configured.
pub const WIDE_COLUMNS: ColumnCount = match NonZeroUsize::new(3) {
    Some(n) => n,
    None => unreachable!(),
};

/// Viewport class, split at the configured breakpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Viewport {
    Narrow,
    Wide,
}

impl Viewport {
    /// `Narrow` strictly below `breakpoint`, `Wide` at or above it.
    pub fn from_width(width: u32, breakpoint: u32) -> Self {
        if width < breakpoint {
            Viewport::Narrow
        } else {
            Viewport::Wide
        }
    }
}

/// Pick the column count: an explicit value wins, otherwise one column on
/// narrow viewports and three on wide ones.
pub fn resolve_columns(configured: Option<ColumnCount>, viewport: Viewport) -> ColumnCount {
    match (configured, viewport) {
        (Some(columns), _) => columns,
        (None, Viewport::Narrow) => NARROW_COLUMNS,
        (None, Viewport::Wide) => WIDE_COLUMNS,
    }
}

/// An image placed in a column, tagged with its position in the flat input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement<'a> {
    pub original_index: usize,
    pub image: &'a Image,
}

/// Result of [`layout`]: one ordered list of placements per column.
#[derive(Debug, Clone, PartialEq)]
pub struct MasonryLayout<'a> {
    columns: Vec<Vec<Placement<'a>>>,
    heights: Vec<f64>,
}

impl<'a> MasonryLayout<'a> {
    pub fn columns(&self) -> &[Vec<Placement<'a>>] {
        &self.columns
    }

    /// Accumulated height of each column, in column-width units.
    pub fn heights(&self) -> &[f64] {
        &self.heights
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// True when no image was placed. Callers render a placeholder instead of a grid.
    pub fn is_empty(&self) -> bool {
        self.columns.iter().all(Vec::is_empty)
    }

    /// Total number of placed images.
    pub fn len(&self) -> usize {
        self.columns.iter().map(Vec::len).sum()
    }
}

/// Distribute `images` over `columns` with the greedy shortest-column rule.
///
/// An empty input yields `columns` empty columns.
pub fn layout(images: &[Image], columns: ColumnCount) -> MasonryLayout<'_> {
    let count = columns.get();
    let mut placed: Vec<Vec<Placement<'_>>> = vec![Vec::new(); count];
    let mut heights = vec![0.0_f64; count];

    for (original_index, image) in images.iter().enumerate() {
        let shortest = shortest_column(&heights);
        placed[shortest].push(Placement {
            original_index,
            image,
        });
        heights[shortest] += 1.0 / image.effective_aspect_ratio();
    }

    MasonryLayout {
        columns: placed,
        heights,
    }
}

/// Index of the minimum height; the first one on ties.
fn shortest_column(heights: &[f64]) -> usize {
    let mut best = 0;
    for (i, &h) in heights.iter().enumerate().skip(1) {
        if h < heights[best] {
            best = i;
        }
    }
    best
}
