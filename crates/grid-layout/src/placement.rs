//! Image-to-cell assignment, including last-row padding.
//!
//! When the last row is one cell short it gets a padding cell on the
//! right. When it is two cells short, its images shift right by one and
//! both ends are padded, which keeps the row visually centered.

use serde::Serialize;
use tracing::debug;

use crate::GridError;
use crate::plan::{GridPlan, plan};

/// Zero-based grid coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Cell {
    pub x: u32,
    pub y: u32,
}

impl Cell {
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }

    /// Top-left pixel of this cell for square cells of `cell_size` pixels.
    pub fn origin(&self, cell_size: u32) -> (u32, u32) {
        (self.x * cell_size, self.y * cell_size)
    }
}

/// Where a single input image is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Placement {
    pub index: usize,
    pub cell: Cell,
}

/// Cells filled with the padding image.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PaddingSlots {
    pub left: Option<Cell>,
    pub right: Option<Cell>,
}

impl PaddingSlots {
    pub fn count(&self) -> usize {
        usize::from(self.left.is_some()) + usize::from(self.right.is_some())
    }

    pub fn is_empty(&self) -> bool {
        self.count() == 0
    }
}

/// One cell write, in the order the renderer performs them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tile {
    Image { index: usize, cell: Cell },
    Padding { cell: Cell },
}

impl Tile {
    pub fn cell(&self) -> Cell {
        match *self {
            Tile::Image { cell, .. } | Tile::Padding { cell } => cell,
        }
    }
}

/// A complete collage layout: grid size, image cells and padding cells.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Layout {
    pub plan: GridPlan,
    pub placements: Vec<Placement>,
    pub padding: PaddingSlots,
}

impl Layout {
    /// Tiles in draw order.
    ///
    /// Left padding comes right before the first image of the last row,
    /// right padding comes last.
    pub fn draw_order(&self) -> Vec<Tile> {
        let last_row_start = ((self.plan.height - 1) * self.plan.width) as usize;
        let mut tiles = Vec::with_capacity(self.placements.len() + self.padding.count());

        for placement in &self.placements {
            if placement.index == last_row_start {
                if let Some(cell) = self.padding.left {
                    tiles.push(Tile::Padding { cell });
                }
            }
            tiles.push(Tile::Image {
                index: placement.index,
                cell: placement.cell,
            });
        }
        if let Some(cell) = self.padding.right {
            tiles.push(Tile::Padding { cell });
        }
        tiles
    }
}

/// Assign `count` images to cells of `plan`.
///
/// Fails if `plan` was not computed for `count`.
pub fn placements(count: usize, plan: &GridPlan) -> Result<Layout, GridError> {
    let fits = plan
        .width
        .checked_mul(plan.height)
        .and_then(|cells| cells.checked_sub(plan.remainder))
        .is_some_and(|n| n as usize == count);
    if !fits || count == 0 || plan.remainder > 2 || plan.remainder >= plan.width {
        return Err(GridError::PlanMismatch {
            count,
            width: plan.width,
            height: plan.height,
            remainder: plan.remainder,
        });
    }

    let width = plan.width as usize;
    let last_row = plan.height - 1;
    let mut padding = PaddingSlots::default();
    let mut out = Vec::with_capacity(count);

    for index in 0..count {
        let mut x = (index % width) as u32;
        let y = (index / width) as u32;

        if y == last_row && plan.remainder == 2 {
            if x == 0 {
                padding.left = Some(Cell::new(0, y));
            }
            x += 1;
        }
        out.push(Placement {
            index,
            cell: Cell::new(x, y),
        });
    }

    if plan.remainder > 0 {
        padding.right = Some(Cell::new(plan.width - 1, last_row));
    }

    debug!(
        count,
        padding = padding.count(),
        "Assigned images to grid cells"
    );
    Ok(Layout {
        plan: *plan,
        placements: out,
        padding,
    })
}

/// Plan the grid for `count` images and assign every image to a cell.
pub fn layout(count: usize) -> Result<Layout, GridError> {
    let plan = plan(count)?;
    placements(count, &plan)
}

#[cfg(test)]
#[path = "placement_tests.rs"]
mod tests;
