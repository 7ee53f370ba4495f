//! RP2040 board support
//!
//! Implements [`Board`] for the fixed wiring set up by [`crate::init`]. The
//! registered tree must describe that wiring: GPIO keyboards and buttons on
//! the scanned pins, GPIO LEDs and one ST7789 panel of the wired size.

use defmt::*;
use embassy_rp::gpio::Output;
use embassy_rp::peripherals::SPI1;
use embassy_rp::spi::{Blocking, Spi};
use embassy_time::{with_timeout, Delay, Duration};

use badge_hal::{
    Board, DevId, DevTree, DisplayEndpoint, HalError, InputEndpoint, InputEvent, LedEndpoint,
    OutputPin, PixelFormat, Timeout,
};

use crate::buttons::BUTTON_PINS;
use crate::channels::{INPUT_CHANNEL, REGISTERED};
use crate::devtree::LED_PINS;
use crate::gpio::Pin;
use crate::st7789::{PanelError, St7789};

/// The wired panel
pub type Panel =
    St7789<Spi<'static, SPI1, Blocking>, Output<'static>, Output<'static>, Output<'static>>;

/// Number of GPIO LEDs
pub const LED_COUNT: usize = 2;

/// Only one tree can be registered, so it always gets the same id
const DEV_ID: u32 = 1;

/// Lit once a tree is registered
const STATUS_LED: usize = 0;

/// Toggled on every delivered input event
const ACTIVITY_LED: usize = 1;

/// RP2040 badge
pub struct RpBoard {
    panel: Panel,
    backlight: Pin,
    leds: [Pin; LED_COUNT],
    tree: Option<&'static DevTree>,
}

impl RpBoard {
    pub fn new(panel: Panel, backlight: Pin, leds: [Pin; LED_COUNT]) -> Self {
        Self {
            panel,
            backlight,
            leds,
            tree: None,
        }
    }

    /// Switch a status LED
    pub fn set_led(&mut self, index: usize, on: bool) {
        if let Some(led) = self.leds.get_mut(index) {
            led.set_state(on);
        }
    }

    /// Check that a tree matches the wiring
    fn check_tree(&self, tree: &DevTree) -> Result<(), HalError> {
        tree.validate()?;

        for input in tree.inputs {
            if input.endpoint != InputEndpoint::Gpio {
                return Err(HalError::UnsupportedEndpoint);
            }
            let pins = input.pinmap.map_or(&[][..], |p| p.pins);
            if pins.iter().any(|pin| !BUTTON_PINS.contains(pin)) {
                return Err(HalError::InvalidDevice);
            }
        }

        for led in tree.leds {
            if led.endpoint != LedEndpoint::Gpio {
                return Err(HalError::UnsupportedEndpoint);
            }
            if led.num_leds as usize > LED_COUNT {
                return Err(HalError::TooManyDevices);
            }
            let pins = led.pinmap.map_or(&[][..], |p| p.pins);
            if pins.iter().any(|pin| !LED_PINS.pins.contains(pin)) {
                return Err(HalError::InvalidDevice);
            }
        }

        if tree.displays.len() > 1 {
            return Err(HalError::TooManyDevices);
        }
        for disp in tree.displays {
            if disp.endpoint != DisplayEndpoint::St7789Spi
                || disp.pixfmt.format != PixelFormat::Rgb565
                || !disp.pixfmt.reversed
            {
                return Err(HalError::UnsupportedEndpoint);
            }
            if disp.width != self.panel.width() || disp.height != self.panel.height() {
                return Err(HalError::InvalidDevice);
            }
        }

        Ok(())
    }

    fn check_screen(&self, dev: DevId, screen: u8) -> Result<(), HalError> {
        let tree = self.tree.ok_or(HalError::NotRegistered)?;
        if dev != DevId(DEV_ID) {
            return Err(HalError::NotRegistered);
        }
        if screen as usize >= tree.displays.len() {
            return Err(HalError::InvalidDevice);
        }
        Ok(())
    }
}

impl Board for RpBoard {
    fn register(&mut self, tree: &'static DevTree) -> Result<DevId, HalError> {
        if let Some(current) = self.tree {
            // Applications may restart and register the same tree again
            return if core::ptr::eq(current, tree) {
                Ok(DevId(DEV_ID))
            } else {
                Err(HalError::TooManyDevices)
            };
        }

        self.check_tree(tree)?;
        if !tree.displays.is_empty() {
            self.panel.init(&mut Delay).map_err(panel_error)?;
        }

        self.tree = Some(tree);
        self.set_led(STATUS_LED, true);
        REGISTERED.signal((tree, DEV_ID));

        info!(
            "Registered {} inputs, {} LED chains, {} displays",
            tree.inputs.len(),
            tree.leds.len(),
            tree.displays.len()
        );
        Ok(DevId(DEV_ID))
    }

    fn disp_update(&mut self, dev: DevId, screen: u8, pixels: &[u8]) -> Result<(), HalError> {
        self.check_screen(dev, screen)?;
        self.panel.write_frame(pixels).map_err(panel_error)
    }

    fn disp_backlight(&mut self, dev: DevId, screen: u8, level: u16) -> Result<(), HalError> {
        self.check_screen(dev, screen)?;

        // On/off only: any non-zero level is full brightness
        let on = level > 0;
        self.backlight.set_state(on);
        self.panel.set_display_on(on).map_err(panel_error)
    }

    async fn event_wait(&mut self, timeout: Timeout) -> Option<InputEvent> {
        let event = match timeout {
            Timeout::Immediate => INPUT_CHANNEL.try_receive().ok(),
            Timeout::After(after) => {
                let after = Duration::from_micros(after.as_micros() as u64);
                with_timeout(after, INPUT_CHANNEL.receive()).await.ok()
            }
            Timeout::Forever => Some(INPUT_CHANNEL.receive().await),
        };

        if event.is_some() {
            let lit = self.leds[ACTIVITY_LED].is_set_high();
            self.set_led(ACTIVITY_LED, !lit);
        }
        event
    }
}

fn panel_error(e: PanelError) -> HalError {
    warn!("Panel error: {}", e);
    match e {
        PanelError::FrameSize => HalError::BufferSize,
        PanelError::Bus | PanelError::Pin => HalError::Communication,
    }
}
