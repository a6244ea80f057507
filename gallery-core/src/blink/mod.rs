//! Enemy hit blink sequence
//!
//! A hit makes the enemy flash: [`BLINK_CYCLES`] cycles of background for
//! [`BLINK_OFF_MS`] then foreground for [`BLINK_ON_MS`]. The sequence is
//! plain data; [`run_blink`] walks it, applies each color and waits for
//! the hold time.

use embedded_hal_async::delay::DelayNs;

use crate::config::timing::{BLINK_CYCLES, BLINK_OFF_MS, BLINK_ON_MS};
use crate::state::SharedState;
use crate::traits::Color;

/// Flash the enemy once, then lower the hit flag
///
/// Hits landing while the sequence runs find the flag already raised,
/// so they neither restart nor extend it.
pub async fn run_blink<D: DelayNs>(shared: &SharedState, delay: &mut D) {
    for step in BlinkSequence::new() {
        shared.set_enemy_color(step.color);
        delay.delay_ms(step.hold_ms as u32).await;
    }
    shared.clear_hit();
}

/// One step of the sequence: show `color` for `hold_ms`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BlinkStep {
    pub color: Color,
    pub hold_ms: u64,
}

/// Iterator over the steps of one blink
#[derive(Debug, Clone)]
pub struct BlinkSequence {
    next: u16,
    total: u16,
}

impl BlinkSequence {
    /// The standard sequence
    pub const fn new() -> Self {
        Self::with_cycles(BLINK_CYCLES)
    }

    /// A sequence of `cycles` background/foreground cycles
    pub const fn with_cycles(cycles: u8) -> Self {
        Self {
            next: 0,
            total: cycles as u16 * 2,
        }
    }
}

impl Default for BlinkSequence {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for BlinkSequence {
    type Item = BlinkStep;

    fn next(&mut self) -> Option<BlinkStep> {
        if self.next >= self.total {
            return None;
        }

        let step = if self.next % 2 == 0 {
            BlinkStep {
                color: Color::Background,
                hold_ms: BLINK_OFF_MS,
            }
        } else {
            BlinkStep {
                color: Color::Foreground,
                hold_ms: BLINK_ON_MS,
            }
        };
        self.next += 1;

        Some(step)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = (self.total - self.next) as usize;
        (left, Some(left))
    }
}

impl ExactSizeIterator for BlinkSequence {}
