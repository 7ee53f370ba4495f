//! Board errors

/// Errors reported by board implementations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum HalError {
    /// Device tree names an endpoint this board cannot drive
    UnsupportedEndpoint,
    /// Device id or screen index does not refer to a registered device
    InvalidDevice,
    /// Pixel buffer length does not match the display geometry
    BufferSize,
    /// Bus error while talking to a peripheral
    Communication,
    /// Operation requires a registered device tree
    NotRegistered,
    /// Device tree lists more devices than the board supports
    TooManyDevices,
}
