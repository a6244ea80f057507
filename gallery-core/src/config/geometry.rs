//! Screen and sprite geometry
//!
//! Coordinates are panel pixels with the origin in the top-left corner.
//! The enemy sits below the player; bullets travel toward larger y.

/// Panel width in pixels
pub const SCREEN_WIDTH: u32 = 128;

/// Panel height in pixels
pub const SCREEN_HEIGHT: u32 = 64;

/// Leftmost column the player may reach
pub const SCREEN_X_MIN: i32 = 8;
/// Rightmost column the player may reach
pub const SCREEN_X_MAX: i32 = 127;
/// Bottom row; bullets past it expire
pub const SCREEN_Y_MAX: i32 = 63;

pub const PLAYER_X_START: i32 = 32;
pub const PLAYER_Y_START: i32 = 7;
pub const PLAYER_X_STEP: i32 = 3;
pub const PLAYER_RADIUS: i32 = 5;

pub const BULLET_WIDTH: i32 = 1;
pub const BULLET_HEIGHT: i32 = 4;
pub const BULLET_Y_STEP: i32 = 5;

pub const ENEMY_X_START: i32 = 32;
pub const ENEMY_Y_START: i32 = 40;
pub const ENEMY_X_STEP: i32 = 4;
pub const ENEMY_WIDTH: i32 = 20;
pub const ENEMY_HEIGHT: i32 = 20;
pub const ENEMY_X_MIN: i32 = 15;
pub const ENEMY_X_MAX: i32 = 116;

/// Inward margin applied to the enemy box when testing bullet overlap
pub const HIT_MARGIN: i32 = 2;

/// Registry slots shared by every kind of object
pub const REGISTRY_CAPACITY: usize = 7;

/// Bullet slots in the arena: whatever the player and enemy leave free
pub const BULLET_POOL: usize = REGISTRY_CAPACITY - 2;

/// Status line origin
pub const STATUS_X: i32 = 0;
pub const STATUS_Y: i32 = 25;

/// Victory banner origin
pub const BANNER_X: i32 = 20;
pub const BANNER_Y: i32 = 30;

/// Horizontal bounds used by the reflection policy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Bounds {
    pub x_min: i32,
    pub x_max: i32,
}

impl Bounds {
    /// Bounds the player bounces between
    pub const PLAYER: Self = Self {
        x_min: SCREEN_X_MIN,
        x_max: SCREEN_X_MAX,
    };

    /// Bounds the enemy bounces between
    pub const ENEMY: Self = Self {
        x_min: ENEMY_X_MIN,
        x_max: ENEMY_X_MAX,
    };
}
