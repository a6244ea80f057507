//! Victory screen

use defmt::*;
use embassy_time::{Duration, Ticker};

use gallery_core::config::timing::VICTORY_REFRESH_MS;
use gallery_core::traits::DrawSurfaceExt;

use crate::channels::VICTORY;

/// Victory task - waits for the display, then keeps the banner on screen
#[embassy_executor::task]
pub async fn victory_task() {
    let mut display = VICTORY.wait().await;
    info!("You won!");

    let mut ticker = Ticker::every(Duration::from_millis(VICTORY_REFRESH_MS));

    loop {
        if let Err(e) = display.draw_victory() {
            warn!("Victory banner draw failed: {:?}", e);
        } else if let Err(e) = display.flush().await {
            warn!("Frame push failed: {:?}", e);
        }

        ticker.next().await;
    }
}
