//! Collage assembly and PNG output.

use std::path::Path;

use grid_layout::{Layout, Tile};
use image::{DynamicImage, ImageFormat, RgbaImage};
use tracing::{debug, info};

use crate::RenderError;
use crate::compose::draw_cell;
use crate::padding::PaddingProvider;
use crate::resize::fit_to_cell;

/// Draw every tile of `layout` onto a new canvas.
///
/// `images[i]` is drawn wherever the layout places index `i`. Padding is
/// fetched from `padding` at most once and only if the layout needs it.
pub fn render(
    layout: &Layout,
    images: &[DynamicImage],
    padding: &dyn PaddingProvider,
    cell_size: u32,
) -> Result<RgbaImage, RenderError> {
    if cell_size == 0 {
        return Err(RenderError::ZeroCellSize);
    }
    let plan = layout.plan;
    let (canvas_w, canvas_h) = plan
        .pixel_size(cell_size)
        .filter(|(w, h)| w.checked_mul(*h).and_then(|px| px.checked_mul(4)).is_some())
        .ok_or(RenderError::CanvasTooLarge {
            width: plan.width,
            height: plan.height,
            cell_size,
        })?;

    let padding_tile = if layout.padding.is_empty() {
        None
    } else {
        Some(fit_to_cell(&padding.padding_image()?, cell_size))
    };

    debug!(canvas_w, canvas_h, cell_size, "Allocating collage canvas");
    let mut canvas = RgbaImage::new(canvas_w, canvas_h);

    for tile in layout.draw_order() {
        match tile {
            Tile::Image { index, cell } => {
                let img = images.get(index).ok_or(RenderError::MissingImage {
                    index,
                    available: images.len(),
                })?;
                draw_cell(&mut canvas, &fit_to_cell(img, cell_size), cell, cell_size);
            }
            Tile::Padding { cell } => {
                if let Some(ref pad) = padding_tile {
                    draw_cell(&mut canvas, pad, cell, cell_size);
                }
            }
        }
    }

    info!(
        images = layout.placements.len(),
        padding = layout.padding.count(),
        width = canvas_w,
        height = canvas_h,
        "Collage rendered"
    );
    Ok(canvas)
}

/// Encode `img` as PNG at `path`, creating or truncating the file.
pub fn write_png(img: &RgbaImage, path: &Path) -> Result<(), RenderError> {
    img.save_with_format(path, ImageFormat::Png)
        .map_err(|source| RenderError::Write {
            path: path.to_path_buf(),
            source,
        })?;
    info!(path = %path.display(), "Collage written");
    Ok(())
}

#[cfg(test)]
#[path = "collage_tests.rs"]
mod tests;
