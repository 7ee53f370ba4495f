//! Block grid
//!
//! Liveness flags for the rows x columns of destructible blocks. Cells
//! start alive and are only ever cleared during a session.

use crate::config::{MAX_COLS, MAX_ROWS};

/// Grid of block liveness flags
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockGrid {
    cells: [[bool; MAX_COLS]; MAX_ROWS],
    rows: u8,
    cols: u8,
    alive: u16,
}

impl BlockGrid {
    /// Create a grid with every block alive
    ///
    /// Dimensions are clamped to [`MAX_ROWS`] x [`MAX_COLS`].
    pub fn new(rows: u8, cols: u8) -> Self {
        let rows = rows.min(MAX_ROWS as u8);
        let cols = cols.min(MAX_COLS as u8);

        let mut cells = [[false; MAX_COLS]; MAX_ROWS];
        for row in cells.iter_mut().take(rows as usize) {
            for cell in row.iter_mut().take(cols as usize) {
                *cell = true;
            }
        }

        Self {
            cells,
            rows,
            cols,
            alive: rows as u16 * cols as u16,
        }
    }

    pub fn rows(&self) -> u8 {
        self.rows
    }

    pub fn cols(&self) -> u8 {
        self.cols
    }

    /// Check if a block is alive; out-of-range cells are dead
    pub fn is_alive(&self, row: u8, col: u8) -> bool {
        row < self.rows && col < self.cols && self.cells[row as usize][col as usize]
    }

    /// Clear a block
    ///
    /// Returns `true` if the block was alive.
    pub fn clear(&mut self, row: u8, col: u8) -> bool {
        if !self.is_alive(row, col) {
            return false;
        }
        self.cells[row as usize][col as usize] = false;
        self.alive -= 1;
        true
    }

    /// Number of blocks still alive
    pub fn alive_count(&self) -> u16 {
        self.alive
    }

    /// Check if every block has been cleared
    pub fn is_cleared(&self) -> bool {
        self.alive == 0
    }

    /// Iterate over the (row, col) of every live block
    pub fn alive_cells(&self) -> impl Iterator<Item = (u8, u8)> + '_ {
        (0..self.rows).flat_map(move |row| {
            (0..self.cols).filter_map(move |col| self.is_alive(row, col).then_some((row, col)))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_grid_all_alive() {
        let grid = BlockGrid::new(5, 8);
        assert_eq!(grid.alive_count(), 40);
        assert!(grid.is_alive(0, 0));
        assert!(grid.is_alive(4, 7));
        assert!(!grid.is_alive(5, 0));
        assert!(!grid.is_alive(0, 8));
        assert_eq!(grid.alive_cells().count(), 40);
    }

    #[test]
    fn test_clear_once() {
        let mut grid = BlockGrid::new(2, 2);
        assert!(grid.clear(1, 0));
        assert!(!grid.is_alive(1, 0));
        assert!(!grid.clear(1, 0));
        assert_eq!(grid.alive_count(), 3);
        assert!(!grid.clear(2, 0));
    }

    #[test]
    fn test_cleared() {
        let mut grid = BlockGrid::new(1, 2);
        grid.clear(0, 0);
        assert!(!grid.is_cleared());
        grid.clear(0, 1);
        assert!(grid.is_cleared());
        assert_eq!(grid.alive_cells().next(), None);
    }

    #[test]
    fn test_dimensions_clamped() {
        let grid = BlockGrid::new(20, 40);
        assert_eq!(grid.rows() as usize, MAX_ROWS);
        assert_eq!(grid.cols() as usize, MAX_COLS);
    }
}
