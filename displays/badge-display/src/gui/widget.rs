use heapless::String;

/// Characters a textbox can hold
pub const TEXTBOX_CAPACITY: usize = 32;

/// Static text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Label {
    pub text: &'static str,
}

/// Editable single-line text
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextBox {
    text: String<TEXTBOX_CAPACITY>,
    editing: bool,
}

impl TextBox {
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_editing(&self) -> bool {
        self.editing
    }

    pub(crate) fn set_editing(&mut self, editing: bool) {
        self.editing = editing;
    }

    /// Append a character; returns false when full
    pub(crate) fn insert(&mut self, c: char) -> bool {
        self.text.push(c).is_ok()
    }

    /// Remove the last character; returns false when empty
    pub(crate) fn backspace(&mut self) -> bool {
        self.text.pop().is_some()
    }
}

/// Push button
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Button {
    pub text: &'static str,
    pressed: bool,
}

impl Button {
    pub fn is_pressed(&self) -> bool {
        self.pressed
    }

    pub(crate) fn set_pressed(&mut self, pressed: bool) {
        self.pressed = pressed;
    }
}

/// One grid cell's content
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Element {
    Label(Label),
    TextBox(TextBox),
    Button(Button),
}

impl Element {
    pub const fn label(text: &'static str) -> Self {
        Element::Label(Label { text })
    }

    pub const fn textbox() -> Self {
        Element::TextBox(TextBox {
            text: String::new(),
            editing: false,
        })
    }

    pub const fn button(text: &'static str) -> Self {
        Element::Button(Button {
            text,
            pressed: false,
        })
    }

    /// Check if the element can take focus
    pub fn is_selectable(&self) -> bool {
        !matches!(self, Element::Label(_))
    }
}
