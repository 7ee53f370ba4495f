//! Display side of the badge firmware
//!
//! This crate provides:
//! - `Framebuffer`: an RGB565 pixel buffer with orientation and byte order,
//!   usable as an `embedded-graphics` draw target
//! - ARGB colour helpers and the drawing primitives the apps use
//!   (rectangles, circles, text)
//! - `gui`: a small widget grid (labels, textboxes, buttons) with layout,
//!   input handling and dirty redraw
//!
//! # Architecture
//!
//! Applications draw into a `Framebuffer` and hand `Framebuffer::pixels`
//! to `Board::disp_update`. Nothing here talks to hardware.

#![no_std]

pub mod color;
pub mod draw;
pub mod framebuffer;
pub mod gui;

// Re-export key types
pub use framebuffer::{DisplayError, Framebuffer, Orientation};
pub use gui::{Element, Grid, GuiEvent, Response, Theme};
