//! Padding image providers.

use std::path::PathBuf;

use image::{DynamicImage, Rgba, RgbaImage};
use tracing::debug;

use crate::RenderError;

/// Supplies the filler image drawn into empty grid cells.
pub trait PaddingProvider {
    fn padding_image(&self) -> Result<DynamicImage, RenderError>;
}

/// Padding decoded from an image file.
#[derive(Debug, Clone)]
pub struct FilePadding {
    path: PathBuf,
}

impl FilePadding {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl PaddingProvider for FilePadding {
    fn padding_image(&self) -> Result<DynamicImage, RenderError> {
        debug!(path = %self.path.display(), "Loading padding image");
        image::open(&self.path).map_err(|source| RenderError::Padding {
            path: self.path.clone(),
            source,
        })
    }
}

/// Padding filled with a single color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolidPadding {
    pub color: Rgba<u8>,
}

impl SolidPadding {
    pub fn new(color: Rgba<u8>) -> Self {
        Self { color }
    }
}

impl Default for SolidPadding {
    fn default() -> Self {
        Self::new(Rgba([255, 255, 255, 255]))
    }
}

impl PaddingProvider for SolidPadding {
    fn padding_image(&self) -> Result<DynamicImage, RenderError> {
        // Resized to the cell later; one pixel is enough.
        Ok(DynamicImage::ImageRgba8(RgbaImage::from_pixel(
            1, 1, self.color,
        )))
    }
}
