//! Display errors

use core::convert::Infallible;

/// Display backend errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError {
    /// Bus transfer to the panel failed
    Communication,
    /// Frame pushed before the panel was initialized
    NotInitialized,
}

// Frame buffer drawing cannot fail
impl From<Infallible> for DisplayError {
    fn from(never: Infallible) -> Self {
        match never {}
    }
}
