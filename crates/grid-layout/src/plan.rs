//! Grid dimensions for an image count.

use serde::Serialize;
use tracing::debug;

use crate::GridError;
use crate::table::width_for;

/// Grid size chosen for a given number of images.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GridPlan {
    pub width: u32,
    pub height: u32,
    /// Empty cells left in the last row (0, 1 or 2).
    pub remainder: u32,
}

impl GridPlan {
    /// Total number of cells in the grid.
    pub fn cells(&self) -> u32 {
        self.width * self.height
    }

    /// Number of real images this plan holds.
    pub fn image_count(&self) -> usize {
        (self.cells() - self.remainder) as usize
    }

    /// Pixel size of the grid for a square cell of `cell_size` pixels.
    ///
    /// Returns `None` if either side overflows `u32`.
    pub fn pixel_size(&self, cell_size: u32) -> Option<(u32, u32)> {
        Some((
            self.width.checked_mul(cell_size)?,
            self.height.checked_mul(cell_size)?,
        ))
    }
}

/// Compute the grid plan for `count` images.
pub fn plan(count: usize) -> Result<GridPlan, GridError> {
    let width = width_for(count)?;
    // count <= MAX_IMAGES, so this never truncates
    let n = count as u32;

    let mut height = n / width;
    if n % width != 0 {
        height += 1;
    }
    let remainder = width * height - n;

    debug!(count, width, height, remainder, "Planned collage grid");
    Ok(GridPlan {
        width,
        height,
        remainder,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::MAX_IMAGES;

    #[test]
    fn every_supported_count_fits_exactly() {
        for n in 1..=MAX_IMAGES {
            let p = plan(n).unwrap();
            assert_eq!(p.cells() - p.remainder, n as u32, "n = {n}");
            assert_eq!(p.image_count(), n);
        }
    }

    #[test]
    fn remainder_is_at_most_two() {
        for n in 1..=MAX_IMAGES {
            let p = plan(n).unwrap();
            assert!(p.remainder <= 2, "n = {n} left {} empty", p.remainder);
            assert!(p.width > 0 && p.height > 0);
        }
    }

    #[test]
    fn eight_is_four_by_two() {
        assert_eq!(
            plan(8).unwrap(),
            GridPlan {
                width: 4,
                height: 2,
                remainder: 0
            }
        );
    }

    #[test]
    fn seven_is_single_row() {
        assert_eq!(
            plan(7).unwrap(),
            GridPlan {
                width: 7,
                height: 1,
                remainder: 0
            }
        );
    }

    #[test]
    fn nine_leaves_one_cell() {
        assert_eq!(
            plan(9).unwrap(),
            GridPlan {
                width: 5,
                height: 2,
                remainder: 1
            }
        );
    }

    #[test]
    fn single_image_is_centered_row() {
        let p = plan(1).unwrap();
        assert_eq!((p.width, p.height, p.remainder), (3, 1, 2));
    }

    #[test]
    fn out_of_range_propagates() {
        assert!(matches!(
            plan(0),
            Err(GridError::UnsupportedCount { count: 0, .. })
        ));
        assert!(matches!(
            plan(31),
            Err(GridError::UnsupportedCount { count: 31, .. })
        ));
    }

    #[test]
    fn pixel_size_scales_by_cell() {
        let p = plan(9).unwrap();
        assert_eq!(p.pixel_size(200), Some((1000, 400)));
        assert_eq!(p.pixel_size(u32::MAX), None);
    }
}
