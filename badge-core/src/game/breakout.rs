//! Breakout simulation
//!
//! One call to [`Breakout::tick`] advances the game by one frame:
//!
//! 1. Move the paddle and clamp it to the screen
//! 2. Move the ball
//! 3. Bounce off the paddle (horizontal speed follows the hit offset)
//! 4. Probe the block grid just beyond the ball's leading edge
//! 5. Reflect off the left, right and top walls
//! 6. Lose a life when the ball reaches the bottom edge
//!
//! There is no delta time: every tick is one fixed step.

use super::collision::{hit_blocks, BlockHit, Bounce};
use super::grid::BlockGrid;
use crate::config::{BreakoutConfig, ConfigError};
use crate::state::{Event, Outcome};

/// Ball position and velocity, in pixels and pixels per tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Ball {
    pub x: i32,
    pub y: i32,
    pub x_speed: i32,
    pub y_speed: i32,
}

/// Paddle centre and steering direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Paddle {
    pub x: i32,
    /// -1 left, 0 still, +1 right
    pub direction: i8,
}

/// What happened during one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TickReport {
    /// Block destroyed this tick (needs erasing on screen)
    pub cleared: Option<BlockHit>,
    /// Ball bounced off the paddle
    pub paddle_hit: bool,
    /// Ball went past the paddle and was served again
    pub life_lost: bool,
    pub outcome: Outcome,
}

/// A Breakout session
#[derive(Debug, Clone)]
pub struct Breakout {
    cfg: BreakoutConfig,
    grid: BlockGrid,
    ball: Ball,
    paddle: Paddle,
    lives: i8,
    outcome: Outcome,
    serves: u32,
    ticks: u32,
}

impl Breakout {
    /// Start a session with every block alive and the ball served
    pub fn new(cfg: BreakoutConfig) -> Result<Self, ConfigError> {
        cfg.validate()?;

        let mut game = Self {
            cfg,
            grid: BlockGrid::new(cfg.rows, cfg.cols),
            ball: Ball {
                x: 0,
                y: 0,
                x_speed: 0,
                y_speed: 0,
            },
            paddle: Paddle {
                x: 0,
                direction: 0,
            },
            lives: cfg.lives,
            outcome: Outcome::Playing,
            serves: 0,
            ticks: 0,
        };
        game.serve();
        Ok(game)
    }

    pub fn config(&self) -> &BreakoutConfig {
        &self.cfg
    }

    pub fn grid(&self) -> &BlockGrid {
        &self.grid
    }

    pub fn ball(&self) -> Ball {
        self.ball
    }

    pub fn paddle(&self) -> Paddle {
        self.paddle
    }

    /// Lives left; -1 once the session is lost
    pub fn lives(&self) -> i8 {
        self.lives
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Ticks simulated so far
    pub fn ticks(&self) -> u32 {
        self.ticks
    }

    /// Set the paddle direction; values are clamped to -1..=1
    pub fn steer(&mut self, direction: i8) {
        self.paddle.direction = direction.signum();
    }

    /// Advance the game by one frame
    pub fn tick(&mut self) -> TickReport {
        let mut report = TickReport {
            cleared: None,
            paddle_hit: false,
            life_lost: false,
            outcome: self.outcome,
        };

        if self.outcome.is_terminal() {
            return report;
        }
        self.ticks += 1;

        let cfg = self.cfg;

        self.paddle.x = (self.paddle.x + self.paddle.direction as i32 * cfg.paddle_speed)
            .clamp(cfg.paddle_min_x(), cfg.paddle_max_x());

        self.ball.x += self.ball.x_speed;
        self.ball.y += self.ball.y_speed;

        report.paddle_hit = self.bounce_off_paddle();

        // Probe just past the ball's leading edge
        let reach = cfg.ball_radius + cfg.probe_offset;
        let probe_x = self.ball.x + self.ball.x_speed.signum() * reach;
        let probe_y = self.ball.y + self.ball.y_speed.signum() * reach;
        if let Some(hit) = hit_blocks(probe_x, probe_y, &mut self.grid, &cfg) {
            match hit.bounce {
                Bounce::Vertical => self.ball.y_speed = -self.ball.y_speed,
                Bounce::Horizontal => self.ball.x_speed = -self.ball.x_speed,
            }
            let event = if self.grid.is_cleared() {
                Event::AllBlocksCleared
            } else {
                Event::BlockCleared
            };
            self.outcome = self.outcome.transition(event);
            report.cleared = Some(hit);
        }

        self.reflect_walls();

        if !self.outcome.is_terminal() && self.ball.y + cfg.ball_radius >= cfg.height {
            self.lives -= 1;
            report.life_lost = true;
            let event = if self.lives < 0 {
                Event::LivesExhausted
            } else {
                Event::BallLost
            };
            self.outcome = self.outcome.transition(event);
            self.serve();
        }

        report.outcome = self.outcome;
        report
    }

    /// Centre the paddle and launch the ball upwards from it
    ///
    /// Serves alternate between drifting right and left.
    fn serve(&mut self) {
        let cfg = &self.cfg;

        self.paddle = Paddle {
            x: cfg.width / 2,
            direction: 0,
        };

        let drift = cfg.ball_speed / 2;
        self.ball = Ball {
            x: self.paddle.x,
            y: cfg.paddle_y - cfg.ball_radius - 1,
            x_speed: if self.serves % 2 == 0 { drift } else { -drift },
            y_speed: -cfg.ball_speed,
        };
        self.serves += 1;
    }

    /// Reflect a falling ball that overlaps the paddle
    ///
    /// The new horizontal speed is proportional to the distance between the
    /// ball and the paddle centre, capped at `max_x_speed`.
    fn bounce_off_paddle(&mut self) -> bool {
        let cfg = &self.cfg;
        let r = cfg.ball_radius;
        let half = cfg.paddle_width / 2;

        if self.ball.y_speed <= 0 {
            return false;
        }
        if self.ball.y + r < cfg.paddle_y || self.ball.y - r > cfg.paddle_y + cfg.paddle_height {
            return false;
        }

        let offset = self.ball.x - self.paddle.x;
        if offset.abs() > half + r {
            return false;
        }

        self.ball.y = cfg.paddle_y - r;
        self.ball.y_speed = -self.ball.y_speed;
        self.ball.x_speed =
            (offset * cfg.max_x_speed / half).clamp(-cfg.max_x_speed, cfg.max_x_speed);
        true
    }

    fn reflect_walls(&mut self) {
        let cfg = &self.cfg;
        let r = cfg.ball_radius;

        if self.ball.x - r < 0 {
            self.ball.x = r;
            self.ball.x_speed = self.ball.x_speed.abs();
        } else if self.ball.x + r > cfg.width {
            self.ball.x = cfg.width - r;
            self.ball.x_speed = -self.ball.x_speed.abs();
        }

        if self.ball.y - r < 0 {
            self.ball.y = r;
            self.ball.y_speed = self.ball.y_speed.abs();
        }
    }
}
