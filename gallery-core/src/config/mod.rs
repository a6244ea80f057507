//! Compile-time configuration
//!
//! The game has no runtime configuration. Geometry and timing constants
//! live in their own modules; the few policy knobs are gathered in
//! [`GameConfig`].

pub mod geometry;
pub mod timing;

pub use geometry::{Bounds, REGISTRY_CAPACITY};

/// How the spawner obtains the bullet it fires
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SpawnPolicy {
    /// Every spawn takes a bullet slot nobody references yet.
    /// In-flight bullets are never disturbed.
    #[default]
    Arena,
    /// One bullet object reused for every spawn. A spawn teleports the
    /// in-flight bullet and may register it a second time.
    Singleton,
}

/// Game configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct GameConfig {
    /// Hits the enemy takes before the game is won
    pub enemy_lives: u8,
    /// Bullet spawning behavior
    pub spawn_policy: SpawnPolicy,
}

impl GameConfig {
    /// Configuration the firmware ships with
    pub const DEFAULT: Self = Self {
        enemy_lives: 3,
        spawn_policy: SpawnPolicy::Arena,
    };

    /// Configuration reproducing the single reused bullet
    pub const LEGACY: Self = Self {
        enemy_lives: 3,
        spawn_policy: SpawnPolicy::Singleton,
    };
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}
