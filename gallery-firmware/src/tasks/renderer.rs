//! Render loop
//!
//! Owns the display while the game runs. Every tick it advances the world
//! into the frame buffer and pushes the frame to the panel.

use defmt::*;
use embassy_time::{Duration, Ticker};

use gallery_core::config::timing::TICK_MS;
use gallery_core::traits::DrawSurface;
use gallery_core::world::TickOutcome;

use crate::channels::{OledDisplay, HIT_SIGNAL, SHARED, VICTORY, WORLD};

/// Renderer task - ticks the world every [`TICK_MS`]
#[embassy_executor::task]
pub async fn renderer_task(mut display: OledDisplay) {
    info!("Renderer task started");

    if let Err(e) = display.init().await {
        error!("Failed to initialize display: {:?}", e);
    } else {
        info!("OLED initialized");
        display.clear().ok();
        display.flush().await.ok();
    }

    let mut ticker = Ticker::every(Duration::from_millis(TICK_MS));

    loop {
        let outcome = WORLD.lock().await.tick(&mut display, &SHARED);

        match outcome {
            Ok(TickOutcome::Rendered(report)) => {
                if report.blink {
                    debug!("Enemy hit, {} lives left", SHARED.enemy_lives());
                    HIT_SIGNAL.signal(());
                }
                if report.removed > 0 {
                    trace!("{} objects removed", report.removed);
                }
                if let Err(e) = display.flush().await {
                    warn!("Frame push failed: {:?}", e);
                }
            }
            Ok(TickOutcome::Victory) => {
                info!("Enemy defeated, handing display to victory screen");
                VICTORY.signal(display);
                return;
            }
            Err(e) => warn!("Tick failed: {:?}", e),
        }

        ticker.next().await;
    }
}
