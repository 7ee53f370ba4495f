//! Device tree of the RP2040 badge

use badge_hal::{
    DevTree, DisplayDevTree, DisplayEndpoint, InputCategory, InputDevTree, InputEndpoint, Keymap,
    KeymapEntry, LedDevTree, LedEndpoint, NavInput, PinMap, PixFmt, PixelFormat,
};

/// D-pad and A/B buttons; raw codes are GPIO numbers
pub const KEYMAP: Keymap = Keymap {
    entries: &[
        KeymapEntry::nav(2, NavInput::Up),
        KeymapEntry::nav(3, NavInput::Down),
        KeymapEntry::nav(4, NavInput::Left),
        KeymapEntry::nav(5, NavInput::Right),
        KeymapEntry::nav(6, NavInput::Accept),
        KeymapEntry::nav(7, NavInput::Back),
    ],
};

pub const KEYPAD_PINS: PinMap = PinMap {
    pins: &[2, 3, 4, 5, 6, 7],
    active_low: true,
};

pub const USER_BUTTON_PINS: PinMap = PinMap {
    pins: &[22],
    active_low: true,
};

pub const LED_PINS: PinMap = PinMap {
    pins: &[25, 15],
    active_low: false,
};

/// 240x240 ST7789, big-endian RGB565
pub const PANEL: DisplayDevTree = DisplayDevTree {
    endpoint: DisplayEndpoint::St7789Spi,
    reset_pin: Some(12),
    pixfmt: PixFmt {
        format: PixelFormat::Rgb565,
        reversed: true,
    },
    width: 240,
    height: 240,
    timings: None,
    // Switched by its own GPIO, not through an input endpoint
    backlight: None,
};

/// Frame size of [`PANEL`] in bytes
pub const FRAME_LEN: usize = PANEL.frame_len();

pub static BADGE_TREE: DevTree = DevTree {
    inputs: &[
        InputDevTree {
            endpoint: InputEndpoint::Gpio,
            category: InputCategory::Keyboard,
            keymap: Some(&KEYMAP),
            pinmap: Some(&KEYPAD_PINS),
            backlight: None,
        },
        InputDevTree {
            endpoint: InputEndpoint::Gpio,
            category: InputCategory::Generic,
            keymap: None,
            pinmap: Some(&USER_BUTTON_PINS),
            backlight: None,
        },
    ],
    leds: &[LedDevTree {
        endpoint: LedEndpoint::Gpio,
        num_leds: 2,
        format: PixelFormat::Grey16,
        pinmap: Some(&LED_PINS),
    }],
    displays: &[PANEL],
};
