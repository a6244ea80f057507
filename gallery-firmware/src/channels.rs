//! Inter-task communication channels
//!
//! Static state shared between the Embassy tasks. The world is behind an
//! async mutex; the hit flag, lives and enemy color are atomics so the
//! blinker never waits on the renderer.

use embassy_stm32::i2c::{self, I2c};
use embassy_stm32::mode::Async;
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::mutex::Mutex;
use embassy_sync::signal::Signal;

use gallery_core::config::GameConfig;
use gallery_core::state::SharedState;
use gallery_core::world::World;
use gallery_display::Ssd1306;

/// Game configuration the firmware runs with
pub const GAME_CONFIG: GameConfig = GameConfig::DEFAULT;

/// The OLED on I2C1
pub type OledDisplay = Ssd1306<I2c<'static, Async, i2c::Master>>;

/// Object registry and game state (renderer ticks it, spawner adds bullets)
pub static WORLD: Mutex<CriticalSectionRawMutex, World> = Mutex::new(World::new(GAME_CONFIG));

/// Hit flag, enemy lives and enemy color
pub static SHARED: SharedState = SharedState::new(GAME_CONFIG.enemy_lives);

/// Raised by the renderer when a hit should start a blink
pub static HIT_SIGNAL: Signal<CriticalSectionRawMutex, ()> = Signal::new();

/// Display handoff from the renderer once the enemy is defeated
pub static VICTORY: Signal<CriticalSectionRawMutex, OledDisplay> = Signal::new();
