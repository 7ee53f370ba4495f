//! RGB565 framebuffer
//!
//! A framebuffer wraps a caller-owned byte buffer laid out in the panel's
//! native (physical) scan order. Drawing happens in logical coordinates,
//! which differ from physical ones when the buffer is rotated.
//!
//! ```text
//!   RotCw, 3x2 physical panel:
//!
//!   logical (2x3)      physical (3x2)
//!   a b                e c a
//!   c d        ->      f d b
//!   e f
//! ```

use core::convert::Infallible;

use badge_hal::{DisplayDevTree, PixelFormat};
use embedded_graphics::pixelcolor::raw::RawU16;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;

/// Bytes per RGB565 pixel
pub const BYTES_PER_PIXEL: usize = 2;

/// Framebuffer errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError {
    /// Buffer length does not match width x height x 2
    BufferSize,
    /// Zero width or height
    InvalidDimensions,
    /// Panel pixel format is not RGB565
    UnsupportedFormat,
}

/// Mapping from logical to physical coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Orientation {
    #[default]
    Upright,
    /// Rotated 90 degrees clockwise
    RotCw,
    /// Rotated 180 degrees
    Rot180,
    /// Rotated 90 degrees counter-clockwise
    RotCcw,
}

impl Orientation {
    /// Check if logical width and height are swapped
    pub const fn is_transposed(self) -> bool {
        matches!(self, Orientation::RotCw | Orientation::RotCcw)
    }
}

/// Pixel buffer for one screen
pub struct Framebuffer<'a> {
    buf: &'a mut [u8],
    /// Physical width
    width: u16,
    /// Physical height
    height: u16,
    orientation: Orientation,
    /// Store pixels big-endian
    reversed: bool,
    dirty: bool,
}

impl<'a> Framebuffer<'a> {
    /// Wrap a buffer of exactly `width * height * 2` bytes
    pub fn new(buf: &'a mut [u8], width: u16, height: u16) -> Result<Self, DisplayError> {
        if width == 0 || height == 0 {
            return Err(DisplayError::InvalidDimensions);
        }
        if buf.len() != width as usize * height as usize * BYTES_PER_PIXEL {
            return Err(DisplayError::BufferSize);
        }

        Ok(Self {
            buf,
            width,
            height,
            orientation: Orientation::Upright,
            reversed: false,
            dirty: true,
        })
    }

    /// Wrap a buffer sized for a panel from the device tree
    ///
    /// Picks up the panel's byte order.
    pub fn for_display(buf: &'a mut [u8], disp: &DisplayDevTree) -> Result<Self, DisplayError> {
        if disp.pixfmt.format != PixelFormat::Rgb565 {
            return Err(DisplayError::UnsupportedFormat);
        }
        let mut fb = Self::new(buf, disp.width, disp.height)?;
        fb.reversed = disp.pixfmt.reversed;
        Ok(fb)
    }

    pub fn set_orientation(&mut self, orientation: Orientation) {
        if self.orientation != orientation {
            self.orientation = orientation;
            self.dirty = true;
        }
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Logical size, after orientation
    pub fn dims(&self) -> Size {
        if self.orientation.is_transposed() {
            Size::new(self.height as u32, self.width as u32)
        } else {
            Size::new(self.width as u32, self.height as u32)
        }
    }

    /// Fill the whole buffer with one colour
    pub fn background(&mut self, color: Rgb565) {
        let bytes = self.encode(color);
        for px in self.buf.chunks_exact_mut(BYTES_PER_PIXEL) {
            px.copy_from_slice(&bytes);
        }
        self.dirty = true;
    }

    /// Set one pixel in logical coordinates; out-of-bounds writes are dropped
    pub fn set_pixel(&mut self, x: i32, y: i32, color: Rgb565) {
        if let Some(offset) = self.offset(x, y) {
            let bytes = self.encode(color);
            self.buf[offset..offset + BYTES_PER_PIXEL].copy_from_slice(&bytes);
            self.dirty = true;
        }
    }

    /// Read one pixel in logical coordinates
    pub fn pixel(&self, x: i32, y: i32) -> Option<Rgb565> {
        let offset = self.offset(x, y)?;
        let bytes = [self.buf[offset], self.buf[offset + 1]];
        let raw = if self.reversed {
            u16::from_be_bytes(bytes)
        } else {
            u16::from_le_bytes(bytes)
        };
        Some(Rgb565::from(RawU16::new(raw)))
    }

    /// Raw pixel data in physical scan order, ready for `disp_update`
    pub fn pixels(&self) -> &[u8] {
        self.buf
    }

    /// Check if anything was drawn since the last `mark_clean`
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn mark_clean(&mut self) {
        self.dirty = false;
    }

    fn encode(&self, color: Rgb565) -> [u8; BYTES_PER_PIXEL] {
        let raw = RawU16::from(color).into_inner();
        if self.reversed {
            raw.to_be_bytes()
        } else {
            raw.to_le_bytes()
        }
    }

    /// Byte offset of a logical pixel
    fn offset(&self, x: i32, y: i32) -> Option<usize> {
        let dims = self.dims();
        if x < 0 || y < 0 || x as u32 >= dims.width || y as u32 >= dims.height {
            return None;
        }

        let (x, y) = (x as usize, y as usize);
        let w = self.width as usize;
        let h = self.height as usize;
        let (px, py) = match self.orientation {
            Orientation::Upright => (x, y),
            Orientation::RotCw => (w - 1 - y, x),
            Orientation::Rot180 => (w - 1 - x, h - 1 - y),
            Orientation::RotCcw => (y, h - 1 - x),
        };

        Some((py * w + px) * BYTES_PER_PIXEL)
    }
}

impl OriginDimensions for Framebuffer<'_> {
    fn size(&self) -> Size {
        self.dims()
    }
}

impl DrawTarget for Framebuffer<'_> {
    type Color = Rgb565;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            self.set_pixel(point.x, point.y, color);
        }
        Ok(())
    }

    fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
        self.background(color);
        Ok(())
    }
}
