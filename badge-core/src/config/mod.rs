//! Configuration types
//!
//! Board-agnostic game configuration, derived from the display resolution.

pub mod game;

pub use game::*;
