//! Monochrome frame buffer
//!
//! One bit per pixel, organized as the SSD1306 expects it: 8 pages of
//! 128 columns, each byte holding 8 vertically stacked pixels with the
//! least significant bit on top.

use core::convert::Infallible;

use embedded_graphics::mono_font::ascii::{FONT_10X20, FONT_6X10};
use embedded_graphics::mono_font::{MonoFont, MonoTextStyle};
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Circle, PrimitiveStyle, Rectangle};
use embedded_graphics::text::{Baseline, Text};

use gallery_core::traits::{Color, DrawSurface, Font};

/// Display dimensions
pub const WIDTH: usize = 128;
pub const HEIGHT: usize = 64;
pub const PAGES: usize = HEIGHT / 8;

/// Frame buffer with a text cursor
#[derive(Clone)]
pub struct FrameBuffer {
    pages: [[u8; WIDTH]; PAGES],
    cursor: Point,
}

impl Default for FrameBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameBuffer {
    /// Create a blank buffer with the cursor at the origin
    pub const fn new() -> Self {
        Self {
            pages: [[0; WIDTH]; PAGES],
            cursor: Point::zero(),
        }
    }

    /// Raw bytes of one page
    pub fn page(&self, page: usize) -> &[u8; WIDTH] {
        &self.pages[page]
    }

    /// Whether the pixel at `(x, y)` is lit. Off-panel pixels read as unlit.
    pub fn pixel(&self, x: i32, y: i32) -> bool {
        match Self::locate(x, y) {
            Some((page, column, mask)) => self.pages[page][column] & mask != 0,
            None => false,
        }
    }

    /// Current text cursor
    pub fn cursor(&self) -> Point {
        self.cursor
    }

    /// Number of lit pixels
    pub fn lit_count(&self) -> u32 {
        self.pages
            .iter()
            .flatten()
            .map(|byte| byte.count_ones())
            .sum()
    }

    fn set_pixel(&mut self, x: i32, y: i32, on: bool) {
        // Clip silently; sprites may hang off the panel edges
        if let Some((page, column, mask)) = Self::locate(x, y) {
            if on {
                self.pages[page][column] |= mask;
            } else {
                self.pages[page][column] &= !mask;
            }
        }
    }

    fn locate(x: i32, y: i32) -> Option<(usize, usize, u8)> {
        if x < 0 || y < 0 || x >= WIDTH as i32 || y >= HEIGHT as i32 {
            return None;
        }
        let (x, y) = (x as usize, y as usize);
        Some((y / 8, x, 1 << (y % 8)))
    }
}

impl OriginDimensions for FrameBuffer {
    fn size(&self) -> Size {
        Size::new(WIDTH as u32, HEIGHT as u32)
    }
}

impl DrawTarget for FrameBuffer {
    type Color = BinaryColor;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            self.set_pixel(point.x, point.y, color.is_on());
        }
        Ok(())
    }
}

fn binary(color: Color) -> BinaryColor {
    match color {
        Color::Background => BinaryColor::Off,
        Color::Foreground => BinaryColor::On,
    }
}

fn mono_font(font: Font) -> &'static MonoFont<'static> {
    match font {
        Font::Small => &FONT_6X10,
        Font::Large => &FONT_10X20,
    }
}

impl DrawSurface for FrameBuffer {
    type Error = Infallible;

    fn clear(&mut self) -> Result<(), Infallible> {
        for page in self.pages.iter_mut() {
            page.fill(0);
        }
        Ok(())
    }

    fn fill_rect(
        &mut self,
        x: i32,
        y: i32,
        width: u32,
        height: u32,
        color: Color,
    ) -> Result<(), Infallible> {
        Rectangle::new(Point::new(x, y), Size::new(width, height))
            .into_styled(PrimitiveStyle::with_fill(binary(color)))
            .draw(self)
    }

    fn fill_circle(&mut self, x: i32, y: i32, radius: u32, color: Color) -> Result<(), Infallible> {
        Circle::with_center(Point::new(x, y), radius * 2 + 1)
            .into_styled(PrimitiveStyle::with_fill(binary(color)))
            .draw(self)
    }

    fn goto_xy(&mut self, x: i32, y: i32) -> Result<(), Infallible> {
        self.cursor = Point::new(x, y);
        Ok(())
    }

    fn puts(&mut self, text: &str, font: Font, color: Color) -> Result<(), Infallible> {
        let style = MonoTextStyle::new(mono_font(font), binary(color));
        self.cursor = Text::with_baseline(text, self.cursor, style, Baseline::Top).draw(self)?;
        Ok(())
    }
}
