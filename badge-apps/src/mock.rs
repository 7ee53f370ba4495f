//! Scripted board for host tests

use std::collections::VecDeque;

use badge_hal::{
    Board, DevId, DevTree, DisplayDevTree, DisplayEndpoint, EventKind, HalError, InputCategory,
    InputDevTree, InputEndpoint, InputEvent, Keymap, KeymapEntry, Modifiers, NavInput, PixFmt,
    PixelFormat, Timeout,
};
use embedded_hal_async::delay::DelayNs;

/// Frames after which a test loop is considered stuck
const RUNAWAY_FRAMES: usize = 100_000;

pub const KEYMAP: Keymap = Keymap {
    entries: &[
        KeymapEntry::nav(0, NavInput::Up),
        KeymapEntry::nav(1, NavInput::Down),
        KeymapEntry::nav(2, NavInput::Left),
        KeymapEntry::nav(3, NavInput::Right),
        KeymapEntry::nav(4, NavInput::Accept),
        KeymapEntry::nav(5, NavInput::Back),
    ],
};

pub const PANEL: DisplayDevTree = DisplayDevTree {
    endpoint: DisplayEndpoint::St7789Spi,
    reset_pin: None,
    pixfmt: PixFmt {
        format: PixelFormat::Rgb565,
        reversed: false,
    },
    width: 240,
    height: 240,
    timings: None,
    backlight: None,
};

pub static TREE: DevTree = DevTree {
    inputs: &[InputDevTree {
        endpoint: InputEndpoint::Gpio,
        category: InputCategory::Keyboard,
        keymap: Some(&KEYMAP),
        pinmap: Some(&badge_hal::PinMap {
            pins: &[2, 3, 4, 5, 6, 7],
            active_low: true,
        }),
        backlight: None,
    }],
    leds: &[],
    displays: &[PANEL],
};

pub static HEADLESS: DevTree = DevTree {
    inputs: &[],
    leds: &[],
    displays: &[],
};

pub const FRAME_LEN: usize = 240 * 240 * 2;

#[derive(Default)]
pub struct MockBoard {
    pub registered: bool,
    pub events: VecDeque<InputEvent>,
    pub waits: Vec<Timeout>,
    pub updates: usize,
    pub last_frame: Vec<u8>,
    pub backlight: Option<u16>,
    pub fail_updates: bool,
}

impl MockBoard {
    pub fn with_events(events: impl IntoIterator<Item = InputEvent>) -> Self {
        Self {
            events: events.into_iter().collect(),
            ..Self::default()
        }
    }
}

impl Board for MockBoard {
    fn register(&mut self, tree: &'static DevTree) -> Result<DevId, HalError> {
        tree.validate()?;
        self.registered = true;
        Ok(DevId(7))
    }

    fn disp_update(&mut self, dev: DevId, screen: u8, pixels: &[u8]) -> Result<(), HalError> {
        if !self.registered || dev != DevId(7) {
            return Err(HalError::NotRegistered);
        }
        if screen != 0 {
            return Err(HalError::InvalidDevice);
        }
        if pixels.len() != FRAME_LEN {
            return Err(HalError::BufferSize);
        }
        if self.fail_updates {
            return Err(HalError::Communication);
        }
        self.updates += 1;
        assert!(self.updates < RUNAWAY_FRAMES, "application loop did not end");
        self.last_frame.clear();
        self.last_frame.extend_from_slice(pixels);
        Ok(())
    }

    fn disp_backlight(&mut self, dev: DevId, _screen: u8, level: u16) -> Result<(), HalError> {
        if !self.registered || dev != DevId(7) {
            return Err(HalError::NotRegistered);
        }
        self.backlight = Some(level);
        Ok(())
    }

    async fn event_wait(&mut self, timeout: Timeout) -> Option<InputEvent> {
        self.waits.push(timeout);
        self.events.pop_front()
    }
}

/// Key event from the mock keyboard
pub fn key(raw: u32, kind: EventKind) -> InputEvent {
    let (nav_input, text_input) = KEYMAP.translate(raw as u16, Modifiers::empty());
    InputEvent {
        dev_id: 7,
        endpoint: 0,
        input: raw,
        nav_input,
        raw_input: raw,
        text_input,
        kind,
        modkeys: Modifiers::empty(),
    }
}

/// Character typed on an attached keyboard
pub fn typed(c: char) -> InputEvent {
    InputEvent {
        dev_id: 7,
        endpoint: 0,
        input: c as u32,
        nav_input: NavInput::Char,
        raw_input: c as u32,
        text_input: Some(c),
        kind: EventKind::Press,
        modkeys: Modifiers::empty(),
    }
}

/// Delay that returns immediately
pub struct NoDelay;

impl DelayNs for NoDelay {
    async fn delay_ns(&mut self, _ns: u32) {}
}
