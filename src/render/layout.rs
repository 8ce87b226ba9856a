//! Arranging several tokens on one square.
//!
//! Tokens sharing a square go into the smallest `k x k` grid that holds
//! them, filled row-major. Every sub-cell is `TOKEN_AREA / k` pixels wide,
//! starting `TOKEN_MARGIN` pixels from the cell's top-left corner, with no
//! gaps between sub-cells. More tokens therefore render smaller.

use smallvec::SmallVec;

/// Usable side, in pixels, of the token area within a cell.
pub const TOKEN_AREA: u32 = 50;

/// Inset of the token area from the cell's top-left corner.
pub const TOKEN_MARGIN: u32 = 15;

/// Smallest `k` with `k * k >= count`.
#[must_use]
pub fn grid_side(count: usize) -> usize {
    let mut k = 0;
    while k * k < count {
        k += 1;
    }
    k
}

/// Square grid of optional tokens, row-major.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StackGrid<T> {
    side: usize,
    cells: SmallVec<[Option<T>; 4]>,
}

/// One occupied sub-cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Placement<'a, T> {
    pub row: usize,
    pub col: usize,
    /// Pixel offset of the sub-cell from the cell's top-left corner.
    pub x_offset: u32,
    pub y_offset: u32,
    /// Side of the sub-cell in pixels.
    pub size: u32,
    pub token: &'a T,
}

/// Lay `tokens` out in the smallest square grid.
///
/// ```
/// use snakes_ladders::render::stack_layout;
///
/// let grid = stack_layout(["a", "b", "c"]);
/// assert_eq!(grid.side(), 2);
/// assert_eq!(grid.get(0, 1), Some(&"b"));
/// assert_eq!(grid.get(1, 0), Some(&"c"));
/// assert_eq!(grid.get(1, 1), None);
/// assert_eq!(grid.cell_size(), 25);
/// ```
#[must_use]
pub fn stack_layout<T>(tokens: impl IntoIterator<Item = T>) -> StackGrid<T> {
    let mut cells: SmallVec<[Option<T>; 4]> = tokens.into_iter().map(Some).collect();
    let side = grid_side(cells.len());
    cells.resize_with(side * side, || None);
    StackGrid { side, cells }
}

impl<T> StackGrid<T> {
    /// `k`, the number of rows and of columns.
    #[must_use]
    pub fn side(&self) -> usize {
        self.side
    }

    /// Side of one sub-cell in pixels.
    #[must_use]
    pub fn cell_size(&self) -> u32 {
        // side is tiny, the cast cannot truncate
        TOKEN_AREA / (self.side.max(1) as u32)
    }

    /// Token at (`row`, `col`), if that sub-cell is occupied.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        if row >= self.side || col >= self.side {
            return None;
        }
        self.cells[row * self.side + col].as_ref()
    }

    /// Number of tokens placed.
    #[must_use]
    pub fn occupied(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Occupied sub-cells with their pixel offsets, row-major.
    pub fn placements(&self) -> impl Iterator<Item = Placement<'_, T>> {
        let side = self.side;
        let size = self.cell_size();
        self.cells.iter().enumerate().filter_map(move |(i, cell)| {
            let token = cell.as_ref()?;
            let row = i / side;
            let col = i % side;
            Some(Placement {
                row,
                col,
                x_offset: TOKEN_MARGIN + col as u32 * size,
                y_offset: TOKEN_MARGIN + row as u32 * size,
                size,
                token,
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_side() {
        assert_eq!(grid_side(0), 0);
        assert_eq!(grid_side(1), 1);
        assert_eq!(grid_side(2), 2);
        assert_eq!(grid_side(4), 2);
        assert_eq!(grid_side(5), 3);
        assert_eq!(grid_side(9), 3);
        assert_eq!(grid_side(10), 4);
    }

    #[test]
    fn test_single_token_fills_area() {
        let grid = stack_layout([7]);
        let placements: Vec<_> = grid.placements().collect();
        assert_eq!(placements.len(), 1);
        assert_eq!(placements[0].x_offset, TOKEN_MARGIN);
        assert_eq!(placements[0].y_offset, TOKEN_MARGIN);
        assert_eq!(placements[0].size, 50);
    }

    #[test]
    fn test_five_tokens_three_by_three() {
        let grid = stack_layout(1..=5);
        assert_eq!(grid.side(), 3);
        assert_eq!(grid.cell_size(), 16);
        assert_eq!(grid.occupied(), 5);

        let offsets: Vec<_> = grid.placements().map(|p| (p.x_offset, p.y_offset)).collect();
        assert_eq!(
            offsets,
            vec![(15, 15), (31, 15), (47, 15), (15, 31), (31, 31)]
        );
    }

    #[test]
    fn test_row_major_fill() {
        let grid = stack_layout(['a', 'b', 'c', 'd']);
        assert_eq!(grid.get(0, 0), Some(&'a'));
        assert_eq!(grid.get(0, 1), Some(&'b'));
        assert_eq!(grid.get(1, 0), Some(&'c'));
        assert_eq!(grid.get(1, 1), Some(&'d'));
        assert_eq!(grid.get(2, 0), None);
    }

    #[test]
    fn test_empty_layout() {
        let grid = stack_layout(Vec::<u8>::new());
        assert_eq!(grid.side(), 0);
        assert_eq!(grid.placements().count(), 0);
    }

    #[test]
    fn test_sub_cells_stay_inside_cell() {
        for count in 1..=16 {
            let grid = stack_layout(0..count);
            for p in grid.placements() {
                assert!(p.x_offset + p.size <= TOKEN_MARGIN + TOKEN_AREA);
                assert!(p.y_offset + p.size <= TOKEN_MARGIN + TOKEN_AREA);
            }
        }
    }
}
