//! Board-agnostic core logic for the badge firmware
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Breakout simulation (block grid, ball, paddle, collisions)
//! - Game state machine (playing, won, lost)
//! - Game configuration derived from screen resolution
//! - Debounced button scanning for GPIO keyboards

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod config;
pub mod game;
pub mod input;
pub mod state;
