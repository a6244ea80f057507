//! Two-wire bus settings for the panel

/// SSD1306 7-bit I2C address (0x78 in 8-bit write notation)
pub const DISPLAY_ADDRESS: u8 = 0x3C;

/// I2C configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct I2cConfig {
    /// SCL frequency in Hz
    pub frequency: u32,
}

impl Default for I2cConfig {
    fn default() -> Self {
        Self::FAST
    }
}

impl I2cConfig {
    /// Fast mode (400 kHz), what the panel is driven at
    pub const FAST: Self = Self { frequency: 400_000 };
}
