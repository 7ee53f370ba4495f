//! Inter-task communication channels
//!
//! The button task produces input events; the application task consumes
//! them through `Board::event_wait`.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;
use embassy_sync::signal::Signal;

use badge_hal::{DevTree, InputEvent};

/// Channel capacity for input events
const INPUT_CHANNEL_SIZE: usize = 16;

/// Input events from the button scanner
pub static INPUT_CHANNEL: Channel<CriticalSectionRawMutex, InputEvent, INPUT_CHANNEL_SIZE> =
    Channel::new();

/// Registered device tree and its device id; the button task waits on
/// this before scanning
pub static REGISTERED: Signal<CriticalSectionRawMutex, (&'static DevTree, u32)> = Signal::new();
