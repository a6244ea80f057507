//! Events that trigger state transitions

/// Events that can trigger state transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Event {
    /// A bullet hit the enemy and it still has lives left
    EnemyHit,
    /// The enemy life counter reached zero
    EnemyDefeated,
}
