//! Task periods and hold times, in milliseconds

/// Render/update tick
pub const TICK_MS: u64 = 20;

/// Time between bullet spawns
pub const SPAWN_PERIOD_MS: u64 = 2000;

/// Victory banner redraw period
pub const VICTORY_REFRESH_MS: u64 = 200;

/// Background/foreground cycles of one hit blink
pub const BLINK_CYCLES: u8 = 10;

/// Time the enemy stays invisible in one blink cycle
pub const BLINK_OFF_MS: u64 = 100;

/// Time the enemy stays visible in one blink cycle
pub const BLINK_ON_MS: u64 = 70;
