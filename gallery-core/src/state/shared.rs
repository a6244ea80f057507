//! Simulation state shared between tasks
//!
//! Each field is an atomic with a single writer role:
//! - `enemy_hit` is raised by collision detection and lowered by the blinker
//! - `enemy_lives` is only decremented by collision detection
//! - `enemy_lit` is only written by the blinker and read by the enemy draw

use portable_atomic::{AtomicBool, AtomicU8, Ordering};

use crate::traits::Color;

/// Shared enemy state
#[derive(Debug)]
pub struct SharedState {
    enemy_hit: AtomicBool,
    enemy_lives: AtomicU8,
    enemy_lit: AtomicBool,
}

impl SharedState {
    /// Create the shared state for an enemy with `lives` lives
    pub const fn new(lives: u8) -> Self {
        Self {
            enemy_hit: AtomicBool::new(false),
            enemy_lives: AtomicU8::new(lives),
            enemy_lit: AtomicBool::new(true),
        }
    }

    /// Record a confirmed hit on the enemy
    ///
    /// Raises the hit flag and takes one life. The counter stops at zero.
    /// Returns `true` when the flag was previously lowered, i.e. when a new
    /// blink sequence should start.
    pub fn record_hit(&self) -> bool {
        let _ = self
            .enemy_lives
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |lives| {
                lives.checked_sub(1)
            });
        !self.enemy_hit.swap(true, Ordering::AcqRel)
    }

    /// Whether a hit is waiting for or undergoing its blink sequence
    pub fn enemy_hit(&self) -> bool {
        self.enemy_hit.load(Ordering::Acquire)
    }

    /// Lower the hit flag once the blink sequence is over
    pub fn clear_hit(&self) {
        self.enemy_hit.store(false, Ordering::Release);
    }

    /// Remaining enemy lives
    pub fn enemy_lives(&self) -> u8 {
        self.enemy_lives.load(Ordering::Acquire)
    }

    /// Whether the enemy has no lives left
    pub fn enemy_defeated(&self) -> bool {
        self.enemy_lives() == 0
    }

    /// Color the enemy sprite is drawn with
    pub fn enemy_color(&self) -> Color {
        if self.enemy_lit.load(Ordering::Acquire) {
            Color::Foreground
        } else {
            Color::Background
        }
    }

    /// Set the color the enemy sprite is drawn with
    pub fn set_enemy_color(&self, color: Color) {
        self.enemy_lit
            .store(color == Color::Foreground, Ordering::Release);
    }
}
