//! State machine definition

use super::events::Event;

/// Game states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum GameState {
    /// Objects are updated and drawn every tick
    #[default]
    Running,
    /// Enemy defeated; the update loop never renders again
    Victory,
}

impl GameState {
    /// Check if this is the terminal state
    pub fn is_terminal(&self) -> bool {
        matches!(self, GameState::Victory)
    }

    /// Process an event and return the next state
    pub fn transition(self, event: Event) -> Self {
        use Event::*;
        use GameState::*;

        match (self, event) {
            (Running, EnemyHit) => Running,
            (Running, EnemyDefeated) => Victory,

            // Victory is terminal
            (Victory, _) => Victory,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_running() {
        assert_eq!(GameState::default(), GameState::Running);
        assert!(!GameState::default().is_terminal());
    }

    #[test]
    fn test_hit_keeps_running() {
        assert_eq!(GameState::Running.transition(Event::EnemyHit), GameState::Running);
    }

    #[test]
    fn test_defeat_is_terminal() {
        let won = GameState::Running.transition(Event::EnemyDefeated);
        assert_eq!(won, GameState::Victory);
        assert!(won.is_terminal());

        for event in [Event::EnemyHit, Event::EnemyDefeated] {
            assert_eq!(won.transition(event), GameState::Victory);
        }
    }
}
