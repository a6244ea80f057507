//! Game objects
//!
//! Player, bullet and enemy share one representation. Their behavior
//! differs only in the boundary policy and in how they are drawn, both
//! selected by [`Kind`].

pub mod bounds;

use crate::config::geometry::{
    BULLET_HEIGHT, BULLET_WIDTH, BULLET_Y_STEP, ENEMY_HEIGHT, ENEMY_WIDTH, ENEMY_X_START,
    ENEMY_X_STEP, ENEMY_Y_START, PLAYER_RADIUS, PLAYER_X_START, PLAYER_X_STEP, PLAYER_Y_START,
    SCREEN_Y_MAX,
};
use crate::config::Bounds;
use crate::state::SharedState;
use crate::traits::{Color, DrawSurface};

pub use bounds::{overlaps_enemy, reflect_horizontal};

/// Integer pair used for positions and per-tick steps
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Vec2 {
    pub x: i32,
    pub y: i32,
}

impl Vec2 {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Which velocity components are applied each tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Axes {
    pub horizontal: bool,
    pub vertical: bool,
}

impl Axes {
    pub const HORIZONTAL: Self = Self {
        horizontal: true,
        vertical: false,
    };

    pub const VERTICAL: Self = Self {
        horizontal: false,
        vertical: true,
    };
}

/// Object kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Kind {
    Player,
    Bullet,
    Enemy,
}

/// Result of running an object's boundary policy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BoundaryOutcome {
    /// Object stays registered
    Retain,
    /// Object left the playfield
    Expired,
    /// Object hit the enemy. `blink` is set when this hit raised the hit flag.
    HitEnemy { blink: bool },
}

impl BoundaryOutcome {
    /// Whether the object must leave the registry
    pub fn removed(self) -> bool {
        !matches!(self, BoundaryOutcome::Retain)
    }
}

/// What a boundary policy may look at besides its own object
pub struct BoundaryContext<'a> {
    /// Enemy position at the time of the check
    pub enemy: Vec2,
    /// Shared enemy state, written on a hit
    pub shared: &'a SharedState,
}

/// A player, bullet or enemy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct GameObject {
    pub kind: Kind,
    pub position: Vec2,
    pub velocity: Vec2,
    pub axes: Axes,
}

impl GameObject {
    /// The player at its start position
    pub const fn player() -> Self {
        Self {
            kind: Kind::Player,
            position: Vec2::new(PLAYER_X_START, PLAYER_Y_START),
            velocity: Vec2::new(PLAYER_X_STEP, 0),
            axes: Axes::HORIZONTAL,
        }
    }

    /// The enemy at its start position
    pub const fn enemy() -> Self {
        Self {
            kind: Kind::Enemy,
            position: Vec2::new(ENEMY_X_START, ENEMY_Y_START),
            velocity: Vec2::new(ENEMY_X_STEP, 0),
            axes: Axes::HORIZONTAL,
        }
    }

    /// A bullet at `position`, heading toward the enemy row
    pub const fn bullet(position: Vec2) -> Self {
        Self {
            kind: Kind::Bullet,
            position,
            velocity: Vec2::new(0, BULLET_Y_STEP),
            axes: Axes::VERTICAL,
        }
    }

    /// Where a bullet fired by a player at `player` appears
    pub const fn muzzle(player: Vec2) -> Vec2 {
        Vec2::new(
            player.x + PLAYER_RADIUS / 2 - BULLET_WIDTH / 2,
            player.y + PLAYER_RADIUS / 2 + BULLET_HEIGHT / 2,
        )
    }

    /// Run the boundary policy of this object
    ///
    /// May move the object back inside its bounds. Never fails: leaving
    /// the playfield is reported through the outcome.
    pub fn on_boundary(&mut self, ctx: &BoundaryContext<'_>) -> BoundaryOutcome {
        match self.kind {
            Kind::Player => {
                reflect_horizontal(
                    &mut self.position,
                    &mut self.velocity,
                    PLAYER_RADIUS * 2,
                    Bounds::PLAYER,
                );
                BoundaryOutcome::Retain
            }
            Kind::Enemy => {
                reflect_horizontal(
                    &mut self.position,
                    &mut self.velocity,
                    ENEMY_WIDTH,
                    Bounds::ENEMY,
                );
                BoundaryOutcome::Retain
            }
            Kind::Bullet => {
                if overlaps_enemy(self.position, ctx.enemy) {
                    let blink = ctx.shared.record_hit();
                    return BoundaryOutcome::HitEnemy { blink };
                }

                if SCREEN_Y_MAX < self.position.y - BULLET_HEIGHT / 2 {
                    BoundaryOutcome::Expired
                } else {
                    BoundaryOutcome::Retain
                }
            }
        }
    }

    /// Apply the enabled velocity components
    pub fn advance(&mut self) {
        if self.axes.vertical {
            self.position.y = self.position.y.saturating_add(self.velocity.y);
        }
        if self.axes.horizontal {
            self.position.x = self.position.x.saturating_add(self.velocity.x);
        }
    }

    /// Draw this object
    ///
    /// `enemy_color` is only used by the enemy.
    pub fn draw<S: DrawSurface>(&self, surface: &mut S, enemy_color: Color) -> Result<(), S::Error> {
        let Vec2 { x, y } = self.position;

        match self.kind {
            Kind::Player => surface.fill_circle(x, y, PLAYER_RADIUS as u32, Color::Foreground),
            Kind::Bullet => surface.fill_rect(
                x,
                y,
                BULLET_WIDTH as u32,
                BULLET_HEIGHT as u32,
                Color::Foreground,
            ),
            Kind::Enemy => {
                surface.fill_rect(x, y, ENEMY_WIDTH as u32, ENEMY_HEIGHT as u32, enemy_color)
            }
        }
    }
}
