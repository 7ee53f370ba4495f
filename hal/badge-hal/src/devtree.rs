//! Static hardware topology
//!
//! A [`DevTree`] lists every peripheral the board support code should bring
//! up: input devices (keyboards, GPIO buttons), LED chains and displays.
//! Trees are plain `const` data declared by the board and handed to
//! [`Board::register`](crate::Board::register) once at startup.

use crate::error::HalError;
use crate::input::{Modifiers, NavInput};

/// Input endpoint driver
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InputEndpoint {
    /// Keyboard scanned by a CH32 co-processor
    Ch32Keyboard,
    /// Buttons wired directly to GPIO pins
    Gpio,
}

/// Input device category
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InputCategory {
    /// Keys translated through a keymap into navigation and text input
    Keyboard,
    /// Raw inputs reported by index only
    Generic,
}

/// One keymap row: raw key code to logical meaning
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct KeymapEntry {
    /// Raw key code as reported by the scanner
    pub raw: u16,
    /// Navigation meaning of the key
    pub nav: NavInput,
    /// Text produced without shift
    pub text: Option<char>,
    /// Text produced with shift held
    pub shifted: Option<char>,
}

impl KeymapEntry {
    /// Key with navigation meaning only
    pub const fn nav(raw: u16, nav: NavInput) -> Self {
        Self {
            raw,
            nav,
            text: None,
            shifted: None,
        }
    }

    /// Key producing text
    pub const fn text(raw: u16, text: char, shifted: char) -> Self {
        Self {
            raw,
            nav: NavInput::Char,
            text: Some(text),
            shifted: Some(shifted),
        }
    }
}

/// Raw key code translation table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Keymap {
    pub entries: &'static [KeymapEntry],
}

impl Keymap {
    /// Find the entry for a raw key code
    pub fn lookup(&self, raw: u16) -> Option<&KeymapEntry> {
        self.entries.iter().find(|e| e.raw == raw)
    }

    /// Translate a raw key code into navigation and text input
    ///
    /// Unknown codes map to [`NavInput::None`] without text.
    pub fn translate(&self, raw: u16, modkeys: Modifiers) -> (NavInput, Option<char>) {
        match self.lookup(raw) {
            Some(entry) => {
                let text = if modkeys.shifted() {
                    entry.shifted.or(entry.text)
                } else {
                    entry.text
                };
                (entry.nav, text)
            }
            None => (NavInput::None, None),
        }
    }
}

/// GPIO pins backing a generic input or LED endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PinMap {
    /// GPIO numbers, in input index order
    pub pins: &'static [u8],
    /// Pins read low when active
    pub active_low: bool,
}

impl PinMap {
    /// Input index of a GPIO number
    pub fn index_of(&self, pin: u8) -> Option<usize> {
        self.pins.iter().position(|&p| p == pin)
    }

    /// Number of pins
    pub fn len(&self) -> usize {
        self.pins.len()
    }

    /// Check if the map is empty
    pub fn is_empty(&self) -> bool {
        self.pins.is_empty()
    }
}

/// Reference to a backlight channel owned by another endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Backlight {
    /// Endpoint (input device index) driving the backlight
    pub endpoint: u8,
    /// Channel on that endpoint
    pub index: u8,
}

/// Input device description
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct InputDevTree {
    pub endpoint: InputEndpoint,
    pub category: InputCategory,
    /// Keymap, required for [`InputCategory::Keyboard`]
    pub keymap: Option<&'static Keymap>,
    /// Pin map, required for [`InputEndpoint::Gpio`]
    pub pinmap: Option<&'static PinMap>,
    /// Keyboard backlight channel
    pub backlight: Option<Backlight>,
}

/// LED endpoint driver
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LedEndpoint {
    /// LEDs driven by the CH32 co-processor
    Ch32,
    /// LEDs wired directly to GPIO pins
    Gpio,
}

/// Pixel formats understood by displays and LED chains
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PixelFormat {
    /// 16-bit greyscale
    Grey16,
    /// 16-bit 5-6-5 RGB
    Rgb565,
    /// 24-bit 8-8-8 RGB
    Rgb888,
}

impl PixelFormat {
    /// Bytes used per pixel
    pub const fn bytes_per_pixel(self) -> usize {
        match self {
            PixelFormat::Grey16 | PixelFormat::Rgb565 => 2,
            PixelFormat::Rgb888 => 3,
        }
    }
}

/// Pixel format with byte order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PixFmt {
    pub format: PixelFormat,
    /// Multi-byte pixels are sent most significant byte first
    pub reversed: bool,
}

/// LED chain description
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LedDevTree {
    pub endpoint: LedEndpoint,
    pub num_leds: u8,
    pub format: PixelFormat,
    /// Pin map, required for [`LedEndpoint::Gpio`]
    pub pinmap: Option<&'static PinMap>,
}

/// Display controller driver
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayEndpoint {
    /// ST7701 panel on a MIPI-DSI link
    St7701Dsi,
    /// ST7789 panel on SPI
    St7789Spi,
}

/// MIPI-DSI video timings, in pixels and lines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DsiTimings {
    pub h_fp: u16,
    pub h_bp: u16,
    pub h_sync: u16,
    pub v_fp: u16,
    pub v_bp: u16,
    pub v_sync: u16,
}

/// Display description
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DisplayDevTree {
    pub endpoint: DisplayEndpoint,
    /// Panel reset GPIO
    pub reset_pin: Option<u8>,
    pub pixfmt: PixFmt,
    pub width: u16,
    pub height: u16,
    /// Video timings, required for DSI panels
    pub timings: Option<DsiTimings>,
    pub backlight: Option<Backlight>,
}

impl DisplayDevTree {
    /// Size in bytes of one full frame
    pub const fn frame_len(&self) -> usize {
        self.width as usize * self.height as usize * self.pixfmt.format.bytes_per_pixel()
    }
}

/// Complete device tree
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DevTree {
    pub inputs: &'static [InputDevTree],
    pub leds: &'static [LedDevTree],
    pub displays: &'static [DisplayDevTree],
}

impl DevTree {
    /// The first display, which applications draw to
    pub fn primary_display(&self) -> Option<&'static DisplayDevTree> {
        self.displays.first()
    }

    /// Check the tree for missing or inconsistent fields
    pub fn validate(&self) -> Result<(), HalError> {
        for input in self.inputs {
            if input.category == InputCategory::Keyboard && input.keymap.is_none() {
                return Err(HalError::UnsupportedEndpoint);
            }
            if input.endpoint == InputEndpoint::Gpio
                && input.pinmap.map_or(true, |p| p.is_empty())
            {
                return Err(HalError::UnsupportedEndpoint);
            }
        }

        for led in self.leds {
            if led.endpoint == LedEndpoint::Gpio
                && led.pinmap.map_or(true, |p| p.len() < led.num_leds as usize)
            {
                return Err(HalError::UnsupportedEndpoint);
            }
        }

        for disp in self.displays {
            if disp.width == 0 || disp.height == 0 {
                return Err(HalError::InvalidDevice);
            }
            if disp.endpoint == DisplayEndpoint::St7701Dsi && disp.timings.is_none() {
                return Err(HalError::UnsupportedEndpoint);
            }
        }

        Ok(())
    }
}
