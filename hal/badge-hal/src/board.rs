//! Board trait
//!
//! The whole surface applications need from board support code: register a
//! device tree, push frames, control the backlight and wait for input.

use crate::devtree::DevTree;
use crate::error::HalError;
use crate::input::{InputEvent, Timeout};

/// Handle returned by [`Board::register`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DevId(pub u32);

/// Backlight level for full brightness
pub const BACKLIGHT_MAX: u16 = u16::MAX;

/// Board support
///
/// Implementations own all peripherals described by the registered tree.
/// Single-threaded use only: one application drives the board at a time.
#[allow(async_fn_in_trait)]
pub trait Board {
    /// Bring up every device in the tree
    ///
    /// Returns the handle used by the display calls. Trees that name
    /// endpoints the board cannot drive are rejected.
    fn register(&mut self, tree: &'static DevTree) -> Result<DevId, HalError>;

    /// Push a full frame to a display
    ///
    /// `pixels` must hold exactly one frame in the display's pixel format.
    fn disp_update(&mut self, dev: DevId, screen: u8, pixels: &[u8]) -> Result<(), HalError>;

    /// Set a display backlight, 0 (off) to [`BACKLIGHT_MAX`]
    fn disp_backlight(&mut self, dev: DevId, screen: u8, level: u16) -> Result<(), HalError>;

    /// Wait for the next input event
    ///
    /// Returns `None` when the timeout expires first.
    async fn event_wait(&mut self, timeout: Timeout) -> Option<InputEvent>;
}
