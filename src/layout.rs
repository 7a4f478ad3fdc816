//! Viewport size classes.
//!
//! Buckets the terminal width, measured in logical pixels, into a size class
//! that picks the page size.

use crossterm::terminal::WindowSize;

/// Minimum viewport width in logical pixels for the wide layout.
pub const WIDE_LAYOUT_MIN_WIDTH: u32 = 868;

/// Page size in the wide layout (4 × 2 cards).
pub const WIDE_PAGE_SIZE: u32 = 8;

/// Page size in the compact layout (3 × 2 cards).
pub const COMPACT_PAGE_SIZE: u32 = 6;

/// Coarse viewport bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeClass {
    Compact,
    Wide,
}

impl SizeClass {
    /// Classify a viewport width given in logical pixels.
    pub fn from_width(width_px: u32) -> Self {
        if width_px >= WIDE_LAYOUT_MIN_WIDTH {
            SizeClass::Wide
        } else {
            SizeClass::Compact
        }
    }

    /// Number of subjects requested per page.
    pub fn page_size(self) -> u32 {
        match self {
            SizeClass::Wide => WIDE_PAGE_SIZE,
            SizeClass::Compact => COMPACT_PAGE_SIZE,
        }
    }

    /// Number of card columns in the grid.
    pub fn columns(self) -> u16 {
        match self {
            SizeClass::Wide => 4,
            SizeClass::Compact => 3,
        }
    }
}

/// Terminal width in logical pixels.
///
/// # Arguments
/// * `window` - Size reported by the terminal, if available
/// * `columns` - Width in cells
/// * `cell_width_px` - Fallback cell width
///
/// # Details
/// Uses the pixel width reported by the terminal when it is non-zero.
/// Many terminals report zero, in which case the cell count is scaled by
/// `cell_width_px`.
pub fn viewport_width_px(window: Option<WindowSize>, columns: u16, cell_width_px: u16) -> u32 {
    match window {
        Some(size) if size.width > 0 => u32::from(size.width),
        _ => u32::from(columns) * u32::from(cell_width_px),
    }
}
