//! Square-to-pixel geometry for the 10x10 zig-zag board.
//!
//! The background is 800x800 with 80x80 cells. Square 1 is bottom-left,
//! the bottom row runs left to right, the next row right to left, and so on
//! up to square 100 in the top-left corner.
//!
//! ```text
//! |100|99|98|97|96|95|94|93|92|91|
//! | 81|82|83|84|85|86|87|88|89|90|
//!               ...
//! | 20|19|18|17|16|15|14|13|12|11|
//! |  1| 2| 3| 4| 5| 6| 7| 8| 9|10|
//! ```

use crate::core::{Square, FINAL_SQUARE};

/// Side of one board cell in pixels.
pub const CELL_SIZE: u32 = 80;

/// Cells per row and per column.
pub const GRID_SIDE: u32 = 10;

/// Side of the whole board in pixels.
pub const BOARD_SIZE: u32 = CELL_SIZE * GRID_SIDE;

/// Pixel rectangle, half-open: `x0..x1` by `y0..y1`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct BoundingBox {
    pub x0: u32,
    pub y0: u32,
    pub x1: u32,
    pub y1: u32,
}

impl BoundingBox {
    #[must_use]
    pub fn width(&self) -> u32 {
        self.x1.saturating_sub(self.x0)
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.y1.saturating_sub(self.y0)
    }

    /// `((x0, y0), (x1, y1))`
    #[must_use]
    pub fn corners(&self) -> ((u32, u32), (u32, u32)) {
        ((self.x0, self.y0), (self.x1, self.y1))
    }

    /// Whether the two boxes share at least one pixel.
    #[must_use]
    pub fn intersects(&self, other: &BoundingBox) -> bool {
        self.x0 < other.x1 && other.x0 < self.x1 && self.y0 < other.y1 && other.y0 < self.y1
    }

    /// Whether `other` lies entirely inside this box.
    #[must_use]
    pub fn contains(&self, other: &BoundingBox) -> bool {
        other.x0 >= self.x0 && other.x1 <= self.x1 && other.y0 >= self.y0 && other.y1 <= self.y1
    }
}

/// Bounding box of a `width` x `height` region placed at (`x_offset`,
/// `y_offset`) inside the cell of `square`.
///
/// # Panics
///
/// Panics if `square` is not in `1..=100`. Position `0` (not yet on the
/// board) has no cell; callers filter it out first.
///
/// ```
/// use snakes_ladders::render::coordinate_of;
///
/// // Square 1 is the bottom-left cell.
/// let b = coordinate_of(1, 80, 0, 80, 0);
/// assert_eq!(b.corners(), ((0, 720), (80, 800)));
///
/// // Square 11 starts the second row from the right.
/// let b = coordinate_of(11, 80, 0, 80, 0);
/// assert_eq!(b.corners(), ((720, 640), (800, 720)));
/// ```
#[must_use]
pub fn coordinate_of(square: Square, width: u32, x_offset: u32, height: u32, y_offset: u32) -> BoundingBox {
    assert!((1..=FINAL_SQUARE).contains(&square), "square {} off the board", square);

    let n = u32::from(square - 1);
    let row = n / GRID_SIDE;
    let y0 = CELL_SIZE * (GRID_SIDE - 1 - row) + y_offset;

    let mut col = n % GRID_SIDE;
    if row % 2 == 1 {
        col = GRID_SIDE - 1 - col;
    }
    let x0 = CELL_SIZE * col + x_offset;

    BoundingBox {
        x0,
        y0,
        x1: x0 + width,
        y1: y0 + height,
    }
}

/// Full 80x80 cell of `square`.
///
/// # Panics
///
/// Panics if `square` is not in `1..=100`.
#[must_use]
pub fn cell_of(square: Square) -> BoundingBox {
    coordinate_of(square, CELL_SIZE, 0, CELL_SIZE, 0)
}
