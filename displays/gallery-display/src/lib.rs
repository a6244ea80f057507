//! Display support for the shooting gallery
//!
//! This crate provides:
//! - `FrameBuffer`: a 128x64 monochrome buffer laid out in SSD1306 pages,
//!   drawn with `embedded-graphics` and exposed through `DrawSurface`
//! - `Ssd1306`: an async I2C driver that initializes the panel and pushes
//!   the buffer to it
//! - Bus settings for the panel

#![no_std]
#![deny(unsafe_code)]

pub mod backend;
pub mod bus;
pub mod frame;
pub mod ssd1306;

// Re-export key types
pub use backend::DisplayError;
pub use bus::{I2cConfig, DISPLAY_ADDRESS};
pub use frame::FrameBuffer;
pub use ssd1306::Ssd1306;
