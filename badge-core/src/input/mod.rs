//! Input handling for GPIO keyboards
//!
//! [`ButtonScanner`] debounces raw pin levels into press, hold and release
//! transitions; [`gpio_event`] turns a transition into an [`InputEvent`]
//! using the registered device tree.
//!
//! [`InputEvent`]: badge_hal::InputEvent

pub mod scanner;
pub mod translate;

pub use scanner::{ButtonScanner, ScanTiming};
pub use translate::gpio_event;
