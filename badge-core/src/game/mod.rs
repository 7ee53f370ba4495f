//! Breakout game
//!
//! A ball, a paddle and a grid of destructible blocks. The simulation is
//! pure: it never draws. Callers render from the accessors and the
//! [`TickReport`] returned by each tick.

pub mod breakout;
pub mod collision;
pub mod grid;

pub use breakout::{Ball, Breakout, Paddle, TickReport};
pub use collision::{cell_at, hit_blocks, BlockHit, Bounce};
pub use grid::BlockGrid;
