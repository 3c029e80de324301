//! Cell composition: copy a resized tile into the canvas.

use grid_layout::Cell;
use image::{RgbaImage, imageops};

/// Copy `tile` into grid `cell` of `base`.
///
/// Pixels replace the base outright, alpha included. Anything falling
/// outside `base` is dropped.
pub fn draw_cell(base: &mut RgbaImage, tile: &RgbaImage, cell: Cell, cell_size: u32) {
    let x = i64::from(cell.x) * i64::from(cell_size);
    let y = i64::from(cell.y) * i64::from(cell_size);
    imageops::replace(base, tile, x, y);
}
