//! Embassy GPIO adapters for the badge HAL pin traits

use embassy_rp::gpio::{Input, Output};

/// Push-pull output (LED, backlight)
pub struct Pin(Output<'static>);

impl Pin {
    pub fn new(output: Output<'static>) -> Self {
        Self(output)
    }
}

impl badge_hal::OutputPin for Pin {
    fn set_high(&mut self) {
        self.0.set_high();
    }

    fn set_low(&mut self) {
        self.0.set_low();
    }

    fn is_set_high(&self) -> bool {
        self.0.is_set_high()
    }
}

/// Button input with pull-up
pub struct Button(Input<'static>);

impl Button {
    pub fn new(input: Input<'static>) -> Self {
        Self(input)
    }
}

impl badge_hal::InputPin for Button {
    fn is_high(&self) -> bool {
        self.0.is_high()
    }
}
