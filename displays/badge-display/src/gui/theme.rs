use embedded_graphics::mono_font::ascii::FONT_6X10;
use embedded_graphics::mono_font::MonoFont;

use crate::color;

/// Colours and metrics for drawing widgets
#[derive(Clone, Copy)]
pub struct Theme {
    /// Screen and label background
    pub bg_col: u32,
    /// Text
    pub fg_col: u32,
    /// Textbox fill
    pub input_col: u32,
    pub button_col: u32,
    pub pressed_col: u32,
    /// Border of the focused element
    pub highlight_col: u32,
    pub border_col: u32,
    /// Gap between a cell edge and its element
    pub padding: i32,
    /// Border thickness; doubled while a textbox is being edited
    pub border: u32,
    pub font: &'static MonoFont<'static>,
}

impl Theme {
    pub const DEFAULT: Theme = Theme {
        bg_col: color::BLACK,
        fg_col: color::WHITE,
        input_col: color::DARK_GREY,
        button_col: 0xff20_4080,
        pressed_col: 0xff40_80ff,
        highlight_col: color::YELLOW,
        border_col: color::GREY,
        padding: 2,
        border: 1,
        font: &FONT_6X10,
    };
}

impl Default for Theme {
    fn default() -> Self {
        Self::DEFAULT
    }
}
