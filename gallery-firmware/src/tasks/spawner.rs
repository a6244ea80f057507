//! Bullet spawner

use defmt::*;
use embassy_time::{Duration, Ticker};

use gallery_core::config::timing::SPAWN_PERIOD_MS;

use crate::channels::WORLD;

/// Spawner task - fires a bullet from the player's muzzle every
/// [`SPAWN_PERIOD_MS`], starting immediately
#[embassy_executor::task]
pub async fn spawner_task() {
    info!("Spawner task started");

    let mut ticker = Ticker::every(Duration::from_millis(SPAWN_PERIOD_MS));

    loop {
        match WORLD.lock().await.spawn_bullet() {
            Some(handle) => trace!("Bullet spawned: {:?}", handle),
            None => debug!("Registry full, bullet dropped"),
        }

        ticker.next().await;
    }
}
