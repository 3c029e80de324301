//! Preferred grid widths for 1..=30 images.

use crate::GridError;

/// Largest image count the width table covers.
pub const MAX_IMAGES: usize = 30;

/// Grid width for `n` images, at index `n - 1`.
///
/// Picked by hand so the last row is never more than two cells short.
const WIDTHS: [u32; MAX_IMAGES] = [
    3, 3, 3, 6, 6, 6, 7, 4, 5, 5, //
    6, 6, 7, 7, 5, 6, 6, 6, 7, 7, //
    7, 6, 6, 6, 5, 7, 7, 7, 6, 6,
];

/// Look up the grid width for `count` images.
pub fn width_for(count: usize) -> Result<u32, GridError> {
    if count == 0 || count > MAX_IMAGES {
        return Err(GridError::UnsupportedCount {
            count,
            max: MAX_IMAGES,
        });
    }
    Ok(WIDTHS[count - 1])
}
