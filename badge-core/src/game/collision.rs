//! Block collision check
//!
//! Maps a pixel position onto the block grid and decides which way the ball
//! should bounce. The bounce direction is a heuristic: a hit close to the
//! top or bottom edge of a cell is treated as a vertical bounce, anything
//! else as a side hit. Exact corner hits fall on whichever side of the
//! margin the probe point lands.

use super::grid::BlockGrid;
use crate::config::BreakoutConfig;

/// Which velocity component a block hit flips
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Bounce {
    /// Hit the top or bottom of a block, flip vertical speed
    Vertical,
    /// Hit the side of a block, flip horizontal speed
    Horizontal,
}

/// A block struck by the ball
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BlockHit {
    pub row: u8,
    pub col: u8,
    pub bounce: Bounce,
}

/// Grid cell containing a pixel, if it lies inside the block area
pub fn cell_at(x: i32, y: i32, cfg: &BreakoutConfig) -> Option<(u8, u8)> {
    let (w, h) = (cfg.cell_width(), cfg.cell_height());
    if x < 0 || y < 0 || w <= 0 || h <= 0 {
        return None;
    }

    let col = x / w;
    let row = y / h;
    if col >= cfg.cols as i32 || row >= cfg.rows as i32 {
        return None;
    }

    Some((row as u8, col as u8))
}

/// Check a probe point against the block grid
///
/// On a hit the struck cell is cleared and returned so the caller can
/// erase it from the screen. Dead cells and points outside the grid never
/// produce a hit.
pub fn hit_blocks(x: i32, y: i32, grid: &mut BlockGrid, cfg: &BreakoutConfig) -> Option<BlockHit> {
    let (row, col) = cell_at(x, y, cfg)?;

    if !grid.clear(row, col) {
        return None;
    }

    // Distance to the first and last pixel row of the cell
    let top = row as i32 * cfg.cell_height();
    let bottom = top + cfg.cell_height() - 1;
    let bounce = if y - top < cfg.side_margin || bottom - y < cfg.side_margin {
        Bounce::Vertical
    } else {
        Bounce::Horizontal
    };

    Some(BlockHit { row, col, bounce })
}
