//! Cell resizing.
//!
//! Logos are stretched to the square cell with bilinear filtering,
//! ignoring their aspect ratio.

use image::imageops::FilterType;
use image::{DynamicImage, RgbaImage};
use tracing::debug;

/// Resize an image to fill a `cell_size` x `cell_size` cell.
///
/// Images already at the cell size are only converted to RGBA.
pub fn fit_to_cell(img: &DynamicImage, cell_size: u32) -> RgbaImage {
    let (orig_w, orig_h) = (img.width(), img.height());

    if orig_w == cell_size && orig_h == cell_size {
        debug!(cell_size, "Image already at cell size, skipping resize");
        return img.to_rgba8();
    }

    debug!(orig_w, orig_h, cell_size, "Resizing image to cell");
    img.resize_exact(cell_size, cell_size, FilterType::Triangle)
        .to_rgba8()
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GrayImage, Luma, Rgba};

    fn create_test_image(width: u32, height: u32) -> DynamicImage {
        let gray = GrayImage::from_pixel(width, height, Luma([128]));
        DynamicImage::ImageLuma8(gray)
    }

    #[test]
    fn test_fit_downscale() {
        let result = fit_to_cell(&create_test_image(800, 600), 200);
        assert_eq!(result.dimensions(), (200, 200));
    }

    #[test]
    fn test_fit_upscale() {
        let result = fit_to_cell(&create_test_image(20, 50), 200);
        assert_eq!(result.dimensions(), (200, 200));
    }

    #[test]
    fn test_fit_same_size_keeps_pixels() {
        let img = create_test_image(64, 64);
        let result = fit_to_cell(&img, 64);
        assert_eq!(result.dimensions(), (64, 64));
        assert_eq!(*result.get_pixel(10, 10), Rgba([128, 128, 128, 255]));
    }

    #[test]
    fn test_fit_uniform_color_survives_filtering() {
        let img = DynamicImage::ImageRgba8(RgbaImage::from_pixel(37, 91, Rgba([10, 200, 30, 255])));
        let result = fit_to_cell(&img, 50);
        assert_eq!(*result.get_pixel(0, 0), Rgba([10, 200, 30, 255]));
        assert_eq!(*result.get_pixel(49, 49), Rgba([10, 200, 30, 255]));
    }
}
