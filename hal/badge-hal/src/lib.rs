//! Badge Hardware Abstraction Layer
//!
//! This crate defines the contract between applications and the board
//! support code. Applications describe the attached hardware with a static
//! [`DevTree`], hand it to a [`Board`] and from then on only push frames and
//! wait for input events.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  Applications (badge-apps)              │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  badge-hal (this crate - traits/types)  │
//! └─────────────────────────────────────────┘
//!                     │
//!         ┌───────────┴───────────┐
//!         ▼                       ▼
//! ┌───────────────┐       ┌───────────────┐
//! │ badge-firmware│       │  host mocks   │
//! │   (RP2040)    │       │   (tests)     │
//! └───────────────┘       └───────────────┘
//! ```
//!
//! # Contents
//!
//! - [`devtree`] - Static hardware topology
//! - [`input`] - Input events delivered by the board
//! - [`gpio::OutputPin`], [`gpio::InputPin`] - Digital I/O
//! - [`board::Board`] - Registration, display update and event wait

#![no_std]
#![deny(unsafe_code)]

pub mod board;
pub mod devtree;
pub mod error;
pub mod gpio;
pub mod input;

// Re-export key types at crate root for convenience
pub use board::{Board, DevId, BACKLIGHT_MAX};
pub use devtree::{
    Backlight, DevTree, DisplayDevTree, DisplayEndpoint, DsiTimings, InputCategory, InputDevTree,
    InputEndpoint, Keymap, KeymapEntry, LedDevTree, LedEndpoint, PinMap, PixelFormat, PixFmt,
};
pub use error::HalError;
pub use gpio::{ActiveInput, InputPin, OutputPin};
pub use input::{EventKind, InputEvent, Modifiers, NavInput, Timeout};
