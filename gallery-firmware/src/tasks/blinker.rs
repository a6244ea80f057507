//! Enemy hit blinker

use defmt::*;
use embassy_time::Delay;

use gallery_core::blink::run_blink;

use crate::channels::{HIT_SIGNAL, SHARED};

/// Blinker task - flashes the enemy once per signalled hit
#[embassy_executor::task]
pub async fn blinker_task() {
    info!("Blinker task started");

    let mut delay = Delay;

    loop {
        HIT_SIGNAL.wait().await;
        debug!("Blinking enemy");

        // The renderer only signals when a hit raises the flag, so nothing
        // arrives until run_blink lowers it again
        run_blink(&SHARED, &mut delay).await;
    }
}
