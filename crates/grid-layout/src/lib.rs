//! Grid layout for logo collages.
//!
//! Picks a grid size for a given number of images from a hand-tuned
//! width table, then assigns every image (and any padding) to a cell.

pub mod placement;
pub mod plan;
pub mod table;

// Re-exports for convenience
pub use placement::{Cell, Layout, PaddingSlots, Placement, Tile, layout, placements};
pub use plan::{GridPlan, plan};
pub use table::{MAX_IMAGES, width_for};

/// Errors that can occur while planning a grid.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum GridError {
    #[error("unsupported image count {count} (expected 1..={max})")]
    UnsupportedCount { count: usize, max: usize },

    #[error("plan {width}x{height} (remainder {remainder}) does not fit {count} images")]
    PlanMismatch {
        count: usize,
        width: u32,
        height: u32,
        remainder: u32,
    },
}
