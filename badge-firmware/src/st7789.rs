//! ST7789 TFT Display Driver
//!
//! Driver for ST7789-based RGB565 panels over a write-only SPI bus with
//! separate chip-select, data/command and reset lines. Frames are streamed
//! straight from the caller's framebuffer; the driver keeps no pixel copy.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;
use embedded_hal::spi::SpiBus;

/// ST7789 commands
#[allow(dead_code)]
mod cmd {
    pub const SWRESET: u8 = 0x01;
    pub const SLPIN: u8 = 0x10;
    pub const SLPOUT: u8 = 0x11;
    pub const NORON: u8 = 0x13;
    pub const INVOFF: u8 = 0x20;
    pub const INVON: u8 = 0x21;
    pub const DISPOFF: u8 = 0x28;
    pub const DISPON: u8 = 0x29;
    pub const CASET: u8 = 0x2A;
    pub const RASET: u8 = 0x2B;
    pub const RAMWR: u8 = 0x2C;
    pub const MADCTL: u8 = 0x36;
    pub const COLMOD: u8 = 0x3A;
}

/// COLMOD value for 16 bits per pixel
const COLMOD_RGB565: u8 = 0x55;

/// Bytes per SPI transfer while streaming a frame
const CHUNK: usize = 4096;

/// Panel errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, defmt::Format)]
pub enum PanelError {
    /// SPI transfer failed
    Bus,
    /// Control pin could not be driven
    Pin,
    /// Frame does not match the panel size
    FrameSize,
}

/// ST7789 driver
pub struct St7789<SPI, CS, DC, RST> {
    spi: SPI,
    cs: CS,
    dc: DC,
    rst: RST,
    width: u16,
    height: u16,
}

impl<SPI, CS, DC, RST> St7789<SPI, CS, DC, RST>
where
    SPI: SpiBus,
    CS: OutputPin,
    DC: OutputPin,
    RST: OutputPin,
{
    /// Create a new driver; call [`init`](Self::init) before drawing
    pub fn new(spi: SPI, cs: CS, dc: DC, rst: RST, width: u16, height: u16) -> Self {
        Self {
            spi,
            cs,
            dc,
            rst,
            width,
            height,
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Reset and initialize the panel
    pub fn init(&mut self, delay: &mut impl DelayNs) -> Result<(), PanelError> {
        self.rst.set_low().map_err(|_| PanelError::Pin)?;
        delay.delay_ms(10);
        self.rst.set_high().map_err(|_| PanelError::Pin)?;
        delay.delay_ms(120);

        self.command(cmd::SWRESET, &[])?;
        delay.delay_ms(150);
        self.command(cmd::SLPOUT, &[])?;
        delay.delay_ms(10);

        self.command(cmd::COLMOD, &[COLMOD_RGB565])?;
        // Row/column order top-left to bottom-right, RGB
        self.command(cmd::MADCTL, &[0x00])?;
        // IPS panels need inversion for true colours
        self.command(cmd::INVON, &[])?;
        self.command(cmd::NORON, &[])?;
        delay.delay_ms(10);
        self.command(cmd::DISPON, &[])?;
        delay.delay_ms(10);

        Ok(())
    }

    /// Write one full frame of big-endian RGB565 pixels
    pub fn write_frame(&mut self, pixels: &[u8]) -> Result<(), PanelError> {
        let expected = self.width as usize * self.height as usize * 2;
        if pixels.len() != expected {
            return Err(PanelError::FrameSize);
        }

        let [xe_hi, xe_lo] = (self.width - 1).to_be_bytes();
        let [ye_hi, ye_lo] = (self.height - 1).to_be_bytes();
        self.command(cmd::CASET, &[0, 0, xe_hi, xe_lo])?;
        self.command(cmd::RASET, &[0, 0, ye_hi, ye_lo])?;

        self.select()?;
        let result = self.write_raw(cmd::RAMWR, pixels);
        self.deselect()?;
        result
    }

    /// Turn the panel output on or off
    pub fn set_display_on(&mut self, on: bool) -> Result<(), PanelError> {
        self.command(if on { cmd::DISPON } else { cmd::DISPOFF }, &[])
    }

    /// Send a command with parameters in one chip-select window
    fn command(&mut self, command: u8, params: &[u8]) -> Result<(), PanelError> {
        self.select()?;
        let result = self.write_raw(command, params);
        self.deselect()?;
        result
    }

    fn write_raw(&mut self, command: u8, data: &[u8]) -> Result<(), PanelError> {
        self.dc.set_low().map_err(|_| PanelError::Pin)?;
        self.spi.write(&[command]).map_err(|_| PanelError::Bus)?;
        self.spi.flush().map_err(|_| PanelError::Bus)?;

        if data.is_empty() {
            return Ok(());
        }
        self.dc.set_high().map_err(|_| PanelError::Pin)?;
        for chunk in data.chunks(CHUNK) {
            self.spi.write(chunk).map_err(|_| PanelError::Bus)?;
        }
        self.spi.flush().map_err(|_| PanelError::Bus)
    }

    fn select(&mut self) -> Result<(), PanelError> {
        self.cs.set_low().map_err(|_| PanelError::Pin)
    }

    fn deselect(&mut self) -> Result<(), PanelError> {
        self.cs.set_high().map_err(|_| PanelError::Pin)
    }
}
