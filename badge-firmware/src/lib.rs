//! Badge launcher firmware for RP2040 boards
//!
//! Board support for an RP2040 with an ST7789 SPI panel, a d-pad and A/B
//! buttons, a user button, two status LEDs and a switched backlight.
//!
//! # Wiring
//!
//! ```text
//!   SPI1 SCK  GPIO10    D-pad up/down/left/right  GPIO2..5
//!   SPI1 MOSI GPIO11    A / B                     GPIO6 / GPIO7
//!   Panel CS  GPIO9     User button               GPIO22
//!   Panel DC  GPIO8     LEDs                      GPIO25 / GPIO15
//!   Panel RST GPIO12    Backlight                 GPIO13
//! ```
//!
//! The binaries in `src/bin` each run one application from `badge-apps`
//! on top of [`board::RpBoard`].

#![no_std]

pub mod board;
pub mod buttons;
pub mod channels;
pub mod devtree;
pub mod gpio;
pub mod st7789;

use embassy_rp::gpio::{Input, Level, Output, Pull};
use embassy_rp::spi::{self, Spi};
use embassy_rp::Peripherals;

use badge_core::input::ButtonScanner;
use badge_hal::ActiveInput;

use crate::board::RpBoard;
use crate::buttons::BUTTON_COUNT;
use crate::gpio::{Button, Pin};
use crate::st7789::St7789;

/// SPI clock for the panel
const PANEL_SPI_HZ: u32 = 62_500_000;

/// Take the board's peripherals
///
/// Returns the board and the scanner for the button task.
pub fn init(p: Peripherals) -> (RpBoard, ButtonScanner<Button, BUTTON_COUNT>) {
    let mut config = spi::Config::default();
    config.frequency = PANEL_SPI_HZ;
    config.phase = spi::Phase::CaptureOnSecondTransition;
    config.polarity = spi::Polarity::IdleHigh;
    let spi = Spi::new_blocking_txonly(p.SPI1, p.PIN_10, p.PIN_11, config);

    let panel = St7789::new(
        spi,
        Output::new(p.PIN_9, Level::High),
        Output::new(p.PIN_8, Level::Low),
        Output::new(p.PIN_12, Level::High),
        devtree::PANEL.width,
        devtree::PANEL.height,
    );

    let board = RpBoard::new(
        panel,
        Pin::new(Output::new(p.PIN_13, Level::Low)),
        [
            Pin::new(Output::new(p.PIN_25, Level::Low)),
            Pin::new(Output::new(p.PIN_15, Level::Low)),
        ],
    );

    // Order must match buttons::BUTTON_PINS
    let scanner = ButtonScanner::new(
        [
            ActiveInput::active_low(Button::new(Input::new(p.PIN_2, Pull::Up))),
            ActiveInput::active_low(Button::new(Input::new(p.PIN_3, Pull::Up))),
            ActiveInput::active_low(Button::new(Input::new(p.PIN_4, Pull::Up))),
            ActiveInput::active_low(Button::new(Input::new(p.PIN_5, Pull::Up))),
            ActiveInput::active_low(Button::new(Input::new(p.PIN_6, Pull::Up))),
            ActiveInput::active_low(Button::new(Input::new(p.PIN_7, Pull::Up))),
            ActiveInput::active_low(Button::new(Input::new(p.PIN_22, Pull::Up))),
        ],
        buttons::SCAN_TIMING,
    );

    (board, scanner)
}
