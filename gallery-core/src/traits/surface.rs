//! Drawing surface trait for the OLED panel

use core::fmt::Write;

use heapless::String;

use crate::config::geometry::{BANNER_X, BANNER_Y, STATUS_X, STATUS_Y};

/// Two-color palette of a monochrome panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Color {
    /// Pixel off (black)
    Background,
    /// Pixel on (white)
    Foreground,
}

/// Fonts available for text output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Font {
    /// Status line font
    Small,
    /// Banner font
    Large,
}

/// Trait for the frame buffer the game draws into
///
/// All operations act on an off-screen buffer. Pushing the buffer to the
/// panel is left to the concrete driver, since that involves bus traffic
/// the game loop does not own.
pub trait DrawSurface {
    /// Error type for drawing operations
    type Error;

    /// Fill the whole buffer with the background color
    fn clear(&mut self) -> Result<(), Self::Error>;

    /// Fill a `width` x `height` rectangle whose top-left corner is `(x, y)`
    fn fill_rect(
        &mut self,
        x: i32,
        y: i32,
        width: u32,
        height: u32,
        color: Color,
    ) -> Result<(), Self::Error>;

    /// Fill a circle of `radius` centered on `(x, y)`
    fn fill_circle(&mut self, x: i32, y: i32, radius: u32, color: Color)
        -> Result<(), Self::Error>;

    /// Move the text cursor
    fn goto_xy(&mut self, x: i32, y: i32) -> Result<(), Self::Error>;

    /// Print text at the cursor and advance it past the text
    fn puts(&mut self, text: &str, font: Font, color: Color) -> Result<(), Self::Error>;
}

/// Helper trait for the game's fixed screen elements
pub trait DrawSurfaceExt: DrawSurface {
    /// Draw the "Enemy Lives" status line
    fn draw_status(&mut self, lives: u8) -> Result<(), Self::Error> {
        let mut line: String<24> = String::new();
        // 24 bytes always fit "Enemy Lives: 255 "
        let _ = write!(line, "Enemy Lives: {} ", lives);

        self.goto_xy(STATUS_X, STATUS_Y)?;
        self.puts(&line, Font::Small, Color::Foreground)
    }

    /// Draw the victory banner on a cleared buffer
    fn draw_victory(&mut self) -> Result<(), Self::Error> {
        self.clear()?;
        self.goto_xy(BANNER_X, BANNER_Y)?;
        self.puts("You Won!", Font::Large, Color::Foreground)
    }
}

// Blanket implementation for all DrawSurface types
impl<T: DrawSurface> DrawSurfaceExt for T {}


#[cfg(test)]
mod tests {
    use super::mock::{Op, RecordingSurface};
    use super::*;

    #[test]
    fn test_status_line_text_and_position() {
        let mut surface = RecordingSurface::new();
        surface.draw_status(3).unwrap();

        assert_eq!(surface.ops[0], Op::Goto(0, 25));
        match &surface.ops[1] {
            Op::Text(text, font, color) => {
                assert_eq!(text.as_str(), "Enemy Lives: 3 ");
                assert_eq!(*font, Font::Small);
                assert_eq!(*color, Color::Foreground);
            }
            other => panic!("unexpected op {:?}", other),
        }
    }

    #[test]
    fn test_victory_banner() {
        let mut surface = RecordingSurface::new();
        surface.draw_victory().unwrap();

        assert_eq!(surface.ops[0], Op::Clear);
        assert_eq!(surface.ops[1], Op::Goto(20, 30));
        assert!(matches!(&surface.ops[2], Op::Text(t, Font::Large, _) if t.as_str() == "You Won!"));
    }
}
