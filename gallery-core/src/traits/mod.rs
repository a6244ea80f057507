//! Hardware abstraction traits
//!
//! These traits define the interface between the game logic and the
//! display driver.

pub mod surface;

pub use surface::{Color, DrawSurface, DrawSurfaceExt, Font};
