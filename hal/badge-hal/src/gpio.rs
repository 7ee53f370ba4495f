//! GPIO pin abstractions
//!
//! Buttons and LEDs wired straight to the MCU are read and driven through
//! these traits, so scanning and LED logic can be tested with fake pins.

/// Digital output pin (LEDs, backlight enable, panel reset)
pub trait OutputPin {
    /// Drive the pin high
    fn set_high(&mut self);

    /// Drive the pin low
    fn set_low(&mut self);

    /// Drive the pin to a level
    fn set_state(&mut self, high: bool) {
        if high {
            self.set_high();
        } else {
            self.set_low();
        }
    }

    /// Check if the pin is currently driven high
    fn is_set_high(&self) -> bool;
}

/// Digital input pin (buttons)
pub trait InputPin {
    /// Check if the pin reads high
    fn is_high(&self) -> bool;

    /// Check if the pin reads low
    fn is_low(&self) -> bool {
        !self.is_high()
    }
}

/// Input pin with its active level applied
///
/// Wraps a raw pin so callers ask "is the button pressed" instead of
/// "is the line high".
pub struct ActiveInput<P> {
    pin: P,
    active_low: bool,
}

impl<P: InputPin> ActiveInput<P> {
    /// Wrap a pin that is active when high
    pub fn active_high(pin: P) -> Self {
        Self {
            pin,
            active_low: false,
        }
    }

    /// Wrap a pin that is active when low (pull-up + switch to ground)
    pub fn active_low(pin: P) -> Self {
        Self {
            pin,
            active_low: true,
        }
    }

    /// Check if the input is in its active state
    pub fn is_active(&self) -> bool {
        self.pin.is_high() != self.active_low
    }
}
