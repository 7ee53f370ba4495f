//! ARGB colours
//!
//! Apps describe colours as packed `0xAARRGGBB` words. They are converted
//! to the framebuffer's RGB565 at draw time; alpha is ignored.

use embedded_graphics::pixelcolor::Rgb565;

pub const BLACK: u32 = 0xff00_0000;
pub const WHITE: u32 = 0xffff_ffff;
pub const RED: u32 = 0xffff_0000;
pub const GREEN: u32 = 0xff00_ff00;
pub const BLUE: u32 = 0xff00_00ff;
pub const YELLOW: u32 = 0xffff_ff00;
pub const CYAN: u32 = 0xff00_ffff;
pub const MAGENTA: u32 = 0xffff_00ff;
pub const ORANGE: u32 = 0xffff_8000;
pub const GREY: u32 = 0xff80_8080;
pub const DARK_GREY: u32 = 0xff30_3030;

/// Block colours, one per row, repeating
pub const ROW_PALETTE: [u32; 6] = [RED, ORANGE, YELLOW, GREEN, CYAN, MAGENTA];

/// Convert a packed ARGB colour to RGB565
pub fn to_rgb565(argb: u32) -> Rgb565 {
    let r = (argb >> 16) as u8;
    let g = (argb >> 8) as u8;
    let b = argb as u8;
    Rgb565::new(r >> 3, g >> 2, b >> 3)
}

/// Colour of a block row
pub const fn row_color(row: u8) -> u32 {
    ROW_PALETTE[row as usize % ROW_PALETTE.len()]
}
