//! Game state machine
//!
//! Tracks whether a Breakout session is still running. Transitions are
//! explicit, finite and deterministic.

pub mod events;
pub mod machine;

pub use events::Event;
pub use machine::Outcome;
