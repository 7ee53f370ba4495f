//! Breakout configuration
//!
//! All geometry is in integer pixels of the logical (oriented) framebuffer.
//! Defaults are derived from the screen resolution so the same game runs on
//! panels of different sizes.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Maximum block rows supported by the grid storage
pub const MAX_ROWS: usize = 8;

/// Maximum block columns supported by the grid storage
pub const MAX_COLS: usize = 16;

/// Configuration validation errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Grid has no rows or no columns
    ZeroGrid,
    /// Grid exceeds [`MAX_ROWS`] x [`MAX_COLS`]
    GridTooLarge,
    /// Cells collapse to zero pixels or blocks overlap the paddle lane
    ScreenTooSmall,
    /// Paddle is as wide as the screen
    PaddleTooWide,
    /// Ball does not fit a cell or the paddle
    BallTooLarge,
    /// Side margin covers the whole cell height
    InvalidMargin,
    /// Ball or paddle speed is not positive
    InvalidSpeed,
}

/// Breakout game parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BreakoutConfig {
    /// Playfield width
    pub width: i32,
    /// Playfield height
    pub height: i32,
    /// Block columns
    pub cols: u8,
    /// Block rows
    pub rows: u8,
    /// Height of the band at the top of the screen holding the blocks
    pub block_area_height: i32,
    /// Distance from a cell's top/bottom edge within which a hit counts as
    /// a vertical bounce
    pub side_margin: i32,
    /// Distance beyond the ball's edge, along each velocity axis, at which
    /// blocks are probed
    pub probe_offset: i32,
    pub paddle_width: i32,
    pub paddle_height: i32,
    /// Y of the paddle's top edge
    pub paddle_y: i32,
    /// Pixels per tick while steering
    pub paddle_speed: i32,
    pub ball_radius: i32,
    /// Vertical speed of a served ball
    pub ball_speed: i32,
    /// Cap on horizontal speed after a paddle hit
    pub max_x_speed: i32,
    /// Lives at the start; the game is lost when they drop below zero
    pub lives: i8,
    /// Delay between ticks
    pub frame_delay_ms: u32,
}

impl BreakoutConfig {
    /// Derive a configuration for a screen of the given size
    ///
    /// On a 720x720 panel this gives 90x48 blocks, a 12 px side margin and
    /// a 4 px probe offset.
    pub const fn for_screen(width: u32, height: u32) -> Self {
        let width = width as i32;
        let height = height as i32;
        let cols = 8;
        let rows = 5;
        let block_area_height = height / 3;
        let cell_height = block_area_height / rows;
        let ball_radius = max(width / 90, 3);
        let paddle_height = max(height / 60, 4);
        let ball_speed = max(height / 180, 2);

        Self {
            width,
            height,
            cols: cols as u8,
            rows: rows as u8,
            block_area_height,
            side_margin: cell_height / 4,
            probe_offset: ball_radius / 2,
            paddle_width: width / 6,
            paddle_height,
            paddle_y: height - 4 * paddle_height,
            paddle_speed: max(width / 90, 3),
            ball_radius,
            ball_speed,
            max_x_speed: ball_speed + ball_speed / 2,
            lives: 3,
            frame_delay_ms: 25,
        }
    }

    /// Width of one block cell; zero for an empty grid
    pub const fn cell_width(&self) -> i32 {
        if self.cols == 0 {
            return 0;
        }
        self.width / self.cols as i32
    }

    /// Height of one block cell; zero for an empty grid
    pub const fn cell_height(&self) -> i32 {
        if self.rows == 0 {
            return 0;
        }
        self.block_area_height / self.rows as i32
    }

    /// Leftmost allowed paddle centre
    pub const fn paddle_min_x(&self) -> i32 {
        self.paddle_width / 2
    }

    /// Rightmost allowed paddle centre
    pub const fn paddle_max_x(&self) -> i32 {
        self.width - self.paddle_width / 2
    }

    /// Total number of blocks
    pub const fn block_count(&self) -> usize {
        self.rows as usize * self.cols as usize
    }

    /// Check the configuration for unplayable values
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rows == 0 || self.cols == 0 {
            return Err(ConfigError::ZeroGrid);
        }
        if self.rows as usize > MAX_ROWS || self.cols as usize > MAX_COLS {
            return Err(ConfigError::GridTooLarge);
        }
        if self.cell_width() <= 0
            || self.cell_height() <= 0
            || self.block_area_height + 2 * self.ball_radius >= self.paddle_y
            || self.paddle_y + self.paddle_height >= self.height
        {
            return Err(ConfigError::ScreenTooSmall);
        }
        if self.paddle_width >= self.width {
            return Err(ConfigError::PaddleTooWide);
        }
        if self.ball_radius <= 0
            || 2 * self.ball_radius >= self.paddle_width
            || 2 * self.ball_radius > self.cell_height()
        {
            return Err(ConfigError::BallTooLarge);
        }
        if self.side_margin < 0 || 2 * self.side_margin > self.cell_height() {
            return Err(ConfigError::InvalidMargin);
        }
        if self.ball_speed <= 0 || self.paddle_speed <= 0 || self.max_x_speed < 0 {
            return Err(ConfigError::InvalidSpeed);
        }
        Ok(())
    }
}

impl Default for BreakoutConfig {
    fn default() -> Self {
        Self::for_screen(720, 720)
    }
}

const fn max(a: i32, b: i32) -> i32 {
    if a > b {
        a
    } else {
        b
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_geometry() {
        let cfg = BreakoutConfig::default();
        assert_eq!(cfg.cell_width(), 90);
        assert_eq!(cfg.cell_height(), 48);
        assert_eq!(cfg.side_margin, 12);
        assert_eq!(cfg.probe_offset, 4);
        assert_eq!(cfg.paddle_width, 120);
        assert_eq!(cfg.paddle_y, 672);
        assert_eq!(cfg.paddle_min_x(), 60);
        assert_eq!(cfg.paddle_max_x(), 660);
        assert_eq!(cfg.block_count(), 40);
        assert_eq!(cfg.validate(), Ok(()));
    }

    #[test]
    fn test_small_screen_is_playable() {
        let cfg = BreakoutConfig::for_screen(240, 240);
        assert_eq!(cfg.cell_width(), 30);
        assert_eq!(cfg.cell_height(), 16);
        assert_eq!(cfg.validate(), Ok(()));

        let cfg = BreakoutConfig::for_screen(320, 240);
        assert_eq!(cfg.validate(), Ok(()));
    }

    #[test]
    fn test_validate_errors() {
        let base = BreakoutConfig::default();

        assert_eq!(
            BreakoutConfig { cols: 0, ..base }.validate(),
            Err(ConfigError::ZeroGrid)
        );
        assert_eq!(
            BreakoutConfig { rows: 9, ..base }.validate(),
            Err(ConfigError::GridTooLarge)
        );
        assert_eq!(
            BreakoutConfig {
                block_area_height: 700,
                ..base
            }
            .validate(),
            Err(ConfigError::ScreenTooSmall)
        );
        assert_eq!(
            BreakoutConfig {
                paddle_width: 720,
                ..base
            }
            .validate(),
            Err(ConfigError::PaddleTooWide)
        );
        assert_eq!(
            BreakoutConfig {
                ball_radius: 30,
                ..base
            }
            .validate(),
            Err(ConfigError::BallTooLarge)
        );
        assert_eq!(
            BreakoutConfig {
                side_margin: 30,
                ..base
            }
            .validate(),
            Err(ConfigError::InvalidMargin)
        );
        assert_eq!(
            BreakoutConfig {
                ball_speed: 0,
                ..base
            }
            .validate(),
            Err(ConfigError::InvalidSpeed)
        );
    }

    #[test]
    fn test_tiny_screen_rejected() {
        assert!(BreakoutConfig::for_screen(16, 16).validate().is_err());
    }
}
