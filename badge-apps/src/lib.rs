//! Badge applications
//!
//! Two entry points, each generic over [`Board`](badge_hal::Board):
//!
//! - [`gui_demo::run`]: a static widget grid driven by input events
//! - [`breakout::run`]: the Breakout game loop
//!
//! Both follow the same sequence: print the banner, register the device
//! tree, light the backlight, draw once, then loop on input and redraw.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

mod fmt;

pub mod breakout;
pub mod gui_demo;
pub mod version;

#[cfg(test)]
mod mock;

use core::convert::Infallible;

use badge_core::config::ConfigError;
use badge_display::{DisplayError, Framebuffer};
use badge_hal::{Board, DevId, HalError, InputEvent};

/// Application setup errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AppError {
    /// Board rejected a request
    Hal(HalError),
    /// Framebuffer does not fit the display
    Display(DisplayError),
    /// Game configuration is unplayable
    Config(ConfigError),
    /// Device tree has no display
    NoDisplay,
}

impl From<HalError> for AppError {
    fn from(e: HalError) -> Self {
        AppError::Hal(e)
    }
}

impl From<DisplayError> for AppError {
    fn from(e: DisplayError) -> Self {
        AppError::Display(e)
    }
}

impl From<ConfigError> for AppError {
    fn from(e: ConfigError) -> Self {
        AppError::Config(e)
    }
}

/// Unwrap the result of drawing into a framebuffer, which cannot fail
pub(crate) fn drawn<T>(result: Result<T, Infallible>) -> T {
    match result {
        Ok(value) => value,
        Err(never) => match never {},
    }
}

/// Push the framebuffer to the primary screen
///
/// A failed push is logged and the frame dropped; the next one retries.
pub(crate) fn push<B: Board>(board: &mut B, dev: DevId, fb: &mut Framebuffer<'_>) {
    match board.disp_update(dev, 0, fb.pixels()) {
        Ok(()) => fb.mark_clean(),
        Err(e) => warn!("Display update failed: {}", e),
    }
}

/// Log an input event in the badge's usual one-line format
pub(crate) fn log_event(ev: &InputEvent) {
    info!(
        "Dev {} ep {} input {} nav input {} raw input {} {} modkey {=u32:04x}",
        ev.dev_id,
        ev.endpoint,
        ev.input,
        ev.nav_input,
        ev.raw_input,
        ev.kind.name(),
        ev.modkeys.bits()
    );
}
