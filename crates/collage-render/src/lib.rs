//! Collage rendering: resize logos into grid cells and encode the result.
//!
//! Works from a [`grid_layout::Layout`], drawing each tile with a plain
//! overwrite. Padding cells come from an injected [`PaddingProvider`].

pub mod collage;
pub mod compose;
pub mod padding;
pub mod resize;

use std::path::PathBuf;

// Re-exports for convenience
pub use collage::{render, write_png};
pub use padding::{FilePadding, PaddingProvider, SolidPadding};
pub use resize::fit_to_cell;

/// Default cell edge in pixels.
pub const CELL_SIZE: u32 = 200;

/// Errors that can occur while rendering a collage.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("Canvas {width}x{height} cells at {cell_size}px overflows")]
    CanvasTooLarge {
        width: u32,
        height: u32,
        cell_size: u32,
    },

    #[error("Cell size must be positive")]
    ZeroCellSize,

    #[error("Layout refers to image {index} but only {available} were given")]
    MissingImage { index: usize, available: usize },

    #[error("Failed to load padding image {path}: {source}")]
    Padding {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}
