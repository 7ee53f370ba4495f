//! Widget grid
//!
//! A fixed grid of cells, each holding one element. One selectable element
//! is focused at a time; navigation input moves focus and Accept acts on it.
//!
//! ```text
//!   +---------+---------+
//!   | Row 1   | [text_] |   Label  | TextBox
//!   +---------+---------+
//!   | Row 2   | (Hello) |   Label  | Button
//!   +---------+---------+
//! ```

mod grid;
mod theme;
mod widget;

pub use grid::{Grid, MAX_ELEMENTS};
pub use theme::Theme;
pub use widget::{Button, Element, Label, TextBox, TEXTBOX_CAPACITY};

use badge_hal::{EventKind, InputEvent, Modifiers, NavInput};

/// Input as seen by the widget grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct GuiEvent {
    pub kind: EventKind,
    pub input: NavInput,
    pub value: Option<char>,
    pub modkeys: Modifiers,
}

impl GuiEvent {
    pub const fn new(kind: EventKind, input: NavInput) -> Self {
        Self {
            kind,
            input,
            value: None,
            modkeys: Modifiers::empty(),
        }
    }

    /// Key press producing a character
    pub const fn text(c: char) -> Self {
        Self {
            kind: EventKind::Press,
            input: NavInput::Char,
            value: Some(c),
            modkeys: Modifiers::empty(),
        }
    }
}

impl From<&InputEvent> for GuiEvent {
    fn from(ev: &InputEvent) -> Self {
        Self {
            kind: ev.kind,
            input: ev.nav_input,
            value: ev.text_input,
            modkeys: ev.modkeys,
        }
    }
}

/// Result of feeding an event to the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Response {
    /// Nothing changed
    Ignored,
    /// Element state changed; call `Grid::redraw`
    Redraw,
    /// A button was released after being pressed
    Activated(usize),
}

impl Response {
    /// Check if the screen needs updating
    pub fn is_change(&self) -> bool {
        !matches!(self, Response::Ignored)
    }

    /// Numeric code for logs: 0 ignored, 1 redraw, 2 activated
    pub fn code(&self) -> u8 {
        match self {
            Response::Ignored => 0,
            Response::Redraw => 1,
            Response::Activated(_) => 2,
        }
    }
}
