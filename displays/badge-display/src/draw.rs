//! Drawing primitives
//!
//! Thin helpers over `embedded-graphics` taking ARGB colours. They work on
//! any RGB565 draw target, not just [`Framebuffer`](crate::Framebuffer).

use embedded_graphics::mono_font::{MonoFont, MonoTextStyle};
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{
    Circle, PrimitiveStyle, PrimitiveStyleBuilder, Rectangle, StrokeAlignment,
};
use embedded_graphics::text::{Alignment, Baseline, Text, TextStyleBuilder};

use crate::color::to_rgb565;

/// Fill an axis-aligned rectangle; empty rectangles draw nothing
pub fn fill_rect<D>(
    target: &mut D,
    argb: u32,
    x: i32,
    y: i32,
    w: i32,
    h: i32,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    if w <= 0 || h <= 0 {
        return Ok(());
    }
    Rectangle::new(Point::new(x, y), Size::new(w as u32, h as u32))
        .into_styled(PrimitiveStyle::with_fill(to_rgb565(argb)))
        .draw(target)
}

/// Outline a rectangle with a stroke drawn inside its bounds
pub fn stroke_rect<D>(
    target: &mut D,
    argb: u32,
    rect: Rectangle,
    thickness: u32,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    if thickness == 0 {
        return Ok(());
    }
    let style = PrimitiveStyleBuilder::new()
        .stroke_color(to_rgb565(argb))
        .stroke_width(thickness)
        .stroke_alignment(StrokeAlignment::Inside)
        .build();
    rect.into_styled(style).draw(target)
}

/// Fill a circle given its centre and radius
pub fn fill_circle<D>(target: &mut D, argb: u32, cx: i32, cy: i32, r: i32) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    if r <= 0 {
        return Ok(());
    }
    Circle::with_center(Point::new(cx, cy), (2 * r + 1) as u32)
        .into_styled(PrimitiveStyle::with_fill(to_rgb565(argb)))
        .draw(target)
}

/// Draw text with its top-left corner at `pos`
///
/// Returns the position just after the last glyph.
pub fn draw_text<D>(
    target: &mut D,
    font: &MonoFont<'_>,
    argb: u32,
    pos: Point,
    text: &str,
) -> Result<Point, D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    let style = MonoTextStyle::new(font, to_rgb565(argb));
    Text::with_baseline(text, pos, style, Baseline::Top).draw(target)
}

/// Draw text centred on `center`
pub fn draw_text_centered<D>(
    target: &mut D,
    font: &MonoFont<'_>,
    argb: u32,
    center: Point,
    text: &str,
) -> Result<Point, D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    let style = MonoTextStyle::new(font, to_rgb565(argb));
    let text_style = TextStyleBuilder::new()
        .alignment(Alignment::Center)
        .baseline(Baseline::Middle)
        .build();
    Text::with_text_style(text, center, style, text_style).draw(target)
}
