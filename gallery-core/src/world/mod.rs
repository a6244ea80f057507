//! Game world: object arena, registry and the per-tick pass
//!
//! The world owns the player, the enemy and a pool of bullets. The
//! registry holds handles into that arena; only registered objects are
//! updated and drawn.

pub mod registry;

use crate::config::geometry::BULLET_POOL;
use crate::config::{GameConfig, SpawnPolicy, REGISTRY_CAPACITY};
use crate::objects::{BoundaryContext, BoundaryOutcome, GameObject, Vec2};
use crate::state::{Event, GameState, SharedState};
use crate::traits::{DrawSurface, DrawSurfaceExt};

pub use registry::Registry;

/// Reference to an object in the world's arena
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Handle {
    Player,
    Enemy,
    /// Index into the bullet pool
    Bullet(u8),
}

/// Object registry sized for the game
pub type ObjectRegistry = Registry<Handle, REGISTRY_CAPACITY>;

/// What happened during one rendered tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TickReport {
    /// Objects drawn this tick
    pub drawn: u8,
    /// Objects removed from the registry this tick
    pub removed: u8,
    /// A hit raised the hit flag; the blinker must be woken
    pub blink: bool,
}

/// Result of [`World::tick`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TickOutcome {
    /// Frame rendered; push it to the panel
    Rendered(TickReport),
    /// Enemy defeated; nothing was drawn and nothing will be again
    Victory,
}

/// The game world
#[derive(Debug, Clone)]
pub struct World {
    player: GameObject,
    enemy: GameObject,
    bullets: [GameObject; BULLET_POOL],
    registry: ObjectRegistry,
    policy: SpawnPolicy,
    state: GameState,
}

impl World {
    /// Create a world with the player and enemy registered in slots 0 and 1
    pub const fn new(config: GameConfig) -> Self {
        Self {
            player: GameObject::player(),
            enemy: GameObject::enemy(),
            bullets: [GameObject::bullet(Vec2::new(0, 0)); BULLET_POOL],
            registry: Registry::from_slots(initial_slots()),
            policy: config.spawn_policy,
            state: GameState::Running,
        }
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn registry(&self) -> &ObjectRegistry {
        &self.registry
    }

    pub fn player(&self) -> &GameObject {
        &self.player
    }

    pub fn enemy(&self) -> &GameObject {
        &self.enemy
    }

    /// Object behind `handle`, if the handle points into the arena
    pub fn object(&self, handle: Handle) -> Option<&GameObject> {
        match handle {
            Handle::Player => Some(&self.player),
            Handle::Enemy => Some(&self.enemy),
            Handle::Bullet(index) => self.bullets.get(index as usize),
        }
    }

    fn object_mut(&mut self, handle: Handle) -> Option<&mut GameObject> {
        match handle {
            Handle::Player => Some(&mut self.player),
            Handle::Enemy => Some(&mut self.enemy),
            Handle::Bullet(index) => self.bullets.get_mut(index as usize),
        }
    }

    /// Run one update/render pass into `surface`
    ///
    /// Once the enemy has no lives left the world enters Victory and every
    /// further call returns [`TickOutcome::Victory`] without touching the
    /// surface. Otherwise the buffer is cleared, the status line drawn,
    /// and every occupied slot processed in order: its boundary policy
    /// runs first, a removed object is dropped from the registry, a kept
    /// object is advanced and drawn.
    pub fn tick<S: DrawSurface>(
        &mut self,
        surface: &mut S,
        shared: &SharedState,
    ) -> Result<TickOutcome, S::Error> {
        if shared.enemy_defeated() {
            self.state = self.state.transition(Event::EnemyDefeated);
        }
        if self.state.is_terminal() {
            return Ok(TickOutcome::Victory);
        }

        surface.clear()?;
        surface.draw_status(shared.enemy_lives())?;

        let mut report = TickReport::default();

        for index in 0..self.registry.capacity() {
            let Some(handle) = self.registry.get(index) else {
                continue;
            };

            let ctx = BoundaryContext {
                enemy: self.enemy.position,
                shared,
            };
            let Some(object) = self.object_mut(handle) else {
                self.registry.remove(index);
                continue;
            };

            let outcome = object.on_boundary(&ctx);
            if outcome.removed() {
                self.registry.remove(index);
                report.removed += 1;

                if let BoundaryOutcome::HitEnemy { blink } = outcome {
                    report.blink |= blink;
                    self.state = self.state.transition(Event::EnemyHit);
                }
                continue;
            }

            object.advance();
            object.draw(surface, shared.enemy_color())?;
            report.drawn += 1;
        }

        Ok(TickOutcome::Rendered(report))
    }

    /// Fire a bullet from the player's muzzle
    ///
    /// Returns the handle of the registered bullet, or `None` when the
    /// spawn was dropped. With [`SpawnPolicy::Singleton`] the single bullet
    /// is repositioned even when the registry turns out to be full.
    pub fn spawn_bullet(&mut self) -> Option<Handle> {
        let muzzle = GameObject::muzzle(self.player.position);

        let index = match self.policy {
            SpawnPolicy::Singleton => 0,
            SpawnPolicy::Arena => {
                if self.registry.is_full() {
                    return None;
                }
                self.free_bullet()?
            }
        };

        self.bullets[index] = GameObject::bullet(muzzle);

        let handle = Handle::Bullet(index as u8);
        self.registry.insert(handle).map(|_| handle)
    }

    /// First pool slot no registry entry points at
    fn free_bullet(&self) -> Option<usize> {
        (0..BULLET_POOL).find(|&index| {
            !self
                .registry
                .contains(|handle| *handle == Handle::Bullet(index as u8))
        })
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new(GameConfig::DEFAULT)
    }
}

const fn initial_slots() -> [Option<Handle>; REGISTRY_CAPACITY] {
    let mut slots = [None; REGISTRY_CAPACITY];
    slots[0] = Some(Handle::Player);
    slots[1] = Some(Handle::Enemy);
    slots
}
