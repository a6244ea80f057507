//! SSD1306 OLED Display Driver
//!
//! Driver for 128x64 SSD1306-based OLED displays via I2C. Drawing goes to
//! an in-memory [`FrameBuffer`]; [`Ssd1306::flush`] pushes it to the panel.

use embedded_hal_async::i2c::I2c;

use gallery_core::traits::{Color, DrawSurface, Font};

use crate::backend::DisplayError;
use crate::bus::DISPLAY_ADDRESS;
use crate::frame::{FrameBuffer, PAGES, WIDTH};

/// Control byte prefixes
const CONTROL_COMMAND: u8 = 0x00;
const CONTROL_DATA: u8 = 0x40;

/// SSD1306 commands
mod cmd {
    pub const DISPLAY_OFF: u8 = 0xAE;
    pub const DISPLAY_ON: u8 = 0xAF;
    pub const SET_MEMORY_MODE: u8 = 0x20;
    pub const SET_CONTRAST: u8 = 0x81;
    pub const SET_NORMAL: u8 = 0xA6;
    pub const RESUME_FROM_RAM: u8 = 0xA4;
    pub const SET_DISPLAY_OFFSET: u8 = 0xD3;
    pub const SET_COM_PINS: u8 = 0xDA;
    pub const SET_VCOM_DETECT: u8 = 0xDB;
    pub const SET_CLOCK_DIV: u8 = 0xD5;
    pub const SET_PRECHARGE: u8 = 0xD9;
    pub const SET_MUX_RATIO: u8 = 0xA8;
    pub const SET_LOW_COLUMN: u8 = 0x00;
    pub const SET_HIGH_COLUMN: u8 = 0x10;
    pub const SET_PAGE_ADDR: u8 = 0xB0;
    pub const SET_START_LINE: u8 = 0x40;
    pub const SET_SEG_REMAP: u8 = 0xA1;
    pub const SET_COM_SCAN_DEC: u8 = 0xC8;
    pub const SET_CHARGE_PUMP: u8 = 0x8D;
}

/// Power-on command sequence
const INIT_SEQUENCE: &[u8] = &[
    cmd::DISPLAY_OFF,
    cmd::SET_MEMORY_MODE,
    0x10, // Page addressing
    cmd::SET_PAGE_ADDR,
    cmd::SET_COM_SCAN_DEC,
    cmd::SET_LOW_COLUMN,
    cmd::SET_HIGH_COLUMN,
    cmd::SET_START_LINE,
    cmd::SET_CONTRAST,
    0xFF,
    cmd::SET_SEG_REMAP,
    cmd::SET_NORMAL,
    cmd::SET_MUX_RATIO,
    0x3F, // 64 lines
    cmd::RESUME_FROM_RAM,
    cmd::SET_DISPLAY_OFFSET,
    0x00,
    cmd::SET_CLOCK_DIV,
    0xF0,
    cmd::SET_PRECHARGE,
    0x22,
    cmd::SET_COM_PINS,
    0x12,
    cmd::SET_VCOM_DETECT,
    0x20,
    cmd::SET_CHARGE_PUMP,
    0x14, // Enable charge pump
    cmd::DISPLAY_ON,
];

/// SSD1306 OLED driver
pub struct Ssd1306<I2C> {
    i2c: I2C,
    address: u8,
    frame: FrameBuffer,
    initialized: bool,
}

impl<I2C> Ssd1306<I2C>
where
    I2C: I2c,
{
    /// Create a new SSD1306 driver at the default address
    pub fn new(i2c: I2C) -> Self {
        Self::with_address(i2c, DISPLAY_ADDRESS)
    }

    /// Create a new SSD1306 driver at a 7-bit `address`
    pub fn with_address(i2c: I2C, address: u8) -> Self {
        Self {
            i2c,
            address,
            frame: FrameBuffer::new(),
            initialized: false,
        }
    }

    /// Initialize the display
    pub async fn init(&mut self) -> Result<(), DisplayError> {
        for &c in INIT_SEQUENCE {
            self.command(c).await?;
        }
        self.initialized = true;

        Ok(())
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Send a command to the display
    async fn command(&mut self, cmd: u8) -> Result<(), DisplayError> {
        self.i2c
            .write(self.address, &[CONTROL_COMMAND, cmd])
            .await
            .map_err(|_| DisplayError::Communication)
    }

    /// Flush the frame buffer to the display
    pub async fn flush(&mut self) -> Result<(), DisplayError> {
        if !self.initialized {
            return Err(DisplayError::NotInitialized);
        }

        for page in 0..PAGES {
            self.command(cmd::SET_PAGE_ADDR | (page as u8)).await?;
            self.command(cmd::SET_LOW_COLUMN).await?;
            self.command(cmd::SET_HIGH_COLUMN).await?;

            let mut data = [0u8; WIDTH + 1];
            data[0] = CONTROL_DATA;
            data[1..].copy_from_slice(self.frame.page(page));
            self.i2c
                .write(self.address, &data)
                .await
                .map_err(|_| DisplayError::Communication)?;
        }

        Ok(())
    }
}

impl<I2C> DrawSurface for Ssd1306<I2C> {
    type Error = DisplayError;

    fn clear(&mut self) -> Result<(), DisplayError> {
        Ok(self.frame.clear()?)
    }

    fn fill_rect(
        &mut self,
        x: i32,
        y: i32,
        width: u32,
        height: u32,
        color: Color,
    ) -> Result<(), DisplayError> {
        Ok(self.frame.fill_rect(x, y, width, height, color)?)
    }

    fn fill_circle(
        &mut self,
        x: i32,
        y: i32,
        radius: u32,
        color: Color,
    ) -> Result<(), DisplayError> {
        Ok(self.frame.fill_circle(x, y, radius, color)?)
    }

    fn goto_xy(&mut self, x: i32, y: i32) -> Result<(), DisplayError> {
        Ok(self.frame.goto_xy(x, y)?)
    }

    fn puts(&mut self, text: &str, font: Font, color: Color) -> Result<(), DisplayError> {
        Ok(self.frame.puts(text, font, color)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embassy_futures::block_on;
    use embedded_hal::i2c::{ErrorKind, ErrorType, Operation};
    use heapless::Vec;

    type Transfer = (u8, Vec<u8, { WIDTH + 1 }>);

    /// Bus that records every write
    #[derive(Default)]
    struct MockBus {
        writes: Vec<Transfer, 64>,
        fail: bool,
    }

    impl ErrorType for MockBus {
        type Error = ErrorKind;
    }

    impl I2c for MockBus {
        async fn transaction(
            &mut self,
            address: u8,
            operations: &mut [Operation<'_>],
        ) -> Result<(), ErrorKind> {
            if self.fail {
                return Err(ErrorKind::Other);
            }
            for op in operations {
                if let Operation::Write(bytes) = op {
                    let mut data = Vec::new();
                    data.extend_from_slice(bytes).map_err(|_| ErrorKind::Overrun)?;
                    self.writes.push((address, data)).map_err(|_| ErrorKind::Overrun)?;
                }
            }
            Ok(())
        }
    }

    #[test]
    fn test_init_sends_sequence_as_commands() {
        let mut display = Ssd1306::new(MockBus::default());
        block_on(display.init()).unwrap();

        assert!(display.is_initialized());
        assert_eq!(display.i2c.writes.len(), INIT_SEQUENCE.len());
        for ((address, bytes), &c) in display.i2c.writes.iter().zip(INIT_SEQUENCE) {
            assert_eq!(*address, 0x3C);
            assert_eq!(bytes.as_slice(), &[CONTROL_COMMAND, c]);
        }
        assert_eq!(display.i2c.writes.last().unwrap().1.as_slice(), &[0x00, 0xAF]);
    }

    #[test]
    fn test_flush_before_init_fails() {
        let mut display = Ssd1306::new(MockBus::default());
        assert_eq!(block_on(display.flush()), Err(DisplayError::NotInitialized));
        assert!(display.i2c.writes.is_empty());
    }

    #[test]
    fn test_flush_writes_every_page() {
        let mut display = Ssd1306::new(MockBus::default());
        block_on(display.init()).unwrap();
        display.i2c.writes.clear();

        display.fill_rect(5, 8, 1, 1, Color::Foreground).unwrap();
        block_on(display.flush()).unwrap();

        // Three addressing commands and one data transfer per page
        assert_eq!(display.i2c.writes.len(), PAGES * 4);
        for (page, chunk) in display.i2c.writes.chunks(4).enumerate() {
            assert_eq!(chunk[0].1.as_slice(), &[0x00, 0xB0 | page as u8]);
            assert_eq!(chunk[1].1.as_slice(), &[0x00, 0x00]);
            assert_eq!(chunk[2].1.as_slice(), &[0x00, 0x10]);

            let data = &chunk[3].1;
            assert_eq!(data.len(), WIDTH + 1);
            assert_eq!(data[0], CONTROL_DATA);
            let expected = if page == 1 { 0b0000_0001 } else { 0 };
            assert_eq!(data[1 + 5], expected);
        }
    }

    #[test]
    fn test_bus_failure_maps_to_communication() {
        let mut display = Ssd1306::new(MockBus {
            fail: true,
            ..Default::default()
        });
        assert_eq!(block_on(display.init()), Err(DisplayError::Communication));
        assert!(!display.is_initialized());
    }

    #[test]
    fn test_custom_address() {
        let mut display = Ssd1306::with_address(MockBus::default(), 0x3D);
        block_on(display.init()).unwrap();
        assert!(display.i2c.writes.iter().all(|(address, _)| *address == 0x3D));
    }
}
