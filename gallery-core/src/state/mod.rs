//! Game state
//!
//! The game is either running or won. Winning is terminal: nothing in the
//! firmware ever leaves the Victory state.

pub mod events;
pub mod machine;
pub mod shared;

pub use events::Event;
pub use machine::GameState;
pub use shared::SharedState;
