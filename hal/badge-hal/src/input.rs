//! Input events delivered by the board

use core::time::Duration;

use bitflags::bitflags;

/// Kind of key transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum EventKind {
    /// Key went down
    Press,
    /// Key is still down after the hold delay (repeats)
    Hold,
    /// Key went up
    Release,
}

impl EventKind {
    /// Human readable name for logs
    pub const fn name(self) -> &'static str {
        match self {
            EventKind::Press => "pressed",
            EventKind::Hold => "held",
            EventKind::Release => "released",
        }
    }

    /// Press or hold (key is down)
    pub fn is_down(self) -> bool {
        matches!(self, EventKind::Press | EventKind::Hold)
    }
}

/// Logical navigation value derived from a raw key code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum NavInput {
    /// No navigation meaning
    None,
    Up,
    Down,
    Left,
    Right,
    /// Confirm / activate
    Accept,
    /// Cancel / leave
    Back,
    Backspace,
    Tab,
    /// Key produces text, see [`InputEvent::text_input`]
    Char,
}

bitflags! {
    /// Modifier keys held while an event was produced
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Modifiers: u32 {
        const LSHIFT = 1 << 0;
        const RSHIFT = 1 << 1;
        const LCTRL = 1 << 2;
        const RCTRL = 1 << 3;
        const LALT = 1 << 4;
        const RALT = 1 << 5;
        const LMETA = 1 << 6;
        const RMETA = 1 << 7;
        const CAPSLOCK = 1 << 8;
    }
}

impl Modifiers {
    /// Either shift key or caps lock
    pub fn shifted(self) -> bool {
        self.intersects(Self::LSHIFT | Self::RSHIFT | Self::CAPSLOCK)
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Modifiers {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "Modifiers({=u32:04x})", self.bits())
    }
}

/// An input event from any registered input device
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct InputEvent {
    /// Device id returned by registration
    pub dev_id: u32,
    /// Input endpoint index within the device tree
    pub endpoint: u8,
    /// Logical input index on the endpoint (key or pin index)
    pub input: u32,
    pub nav_input: NavInput,
    /// Raw key code or GPIO number
    pub raw_input: u32,
    /// Text produced by the key, if any
    pub text_input: Option<char>,
    pub kind: EventKind,
    pub modkeys: Modifiers,
}

/// How long [`Board::event_wait`](crate::Board::event_wait) may block
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Timeout {
    /// Return a pending event or nothing, never block
    Immediate,
    /// Block up to the given duration
    After(Duration),
    /// Block until an event arrives
    Forever,
}
