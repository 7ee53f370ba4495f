//! Session outcome

use super::events::Event;

/// Session state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Outcome {
    /// Ball in play
    Playing,
    /// Every block cleared
    Won,
    /// Lives dropped below zero
    Lost,
}

impl Outcome {
    /// Check if the session is over
    pub fn is_terminal(&self) -> bool {
        matches!(self, Outcome::Won | Outcome::Lost)
    }

    /// Text shown when the session ends
    pub fn banner(&self) -> Option<&'static str> {
        match self {
            Outcome::Playing => None,
            Outcome::Won => Some("You win!"),
            Outcome::Lost => Some("Game over"),
        }
    }

    /// Process an event and return the next state
    ///
    /// Terminal states absorb every event.
    pub fn transition(self, event: Event) -> Self {
        if self.is_terminal() || !event.is_final() {
            return self;
        }
        match event {
            Event::AllBlocksCleared => Outcome::Won,
            _ => Outcome::Lost,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_playing_continues() {
        assert_eq!(Outcome::Playing.transition(Event::BlockCleared), Outcome::Playing);
        assert_eq!(Outcome::Playing.transition(Event::BallLost), Outcome::Playing);
    }

    #[test]
    fn test_terminal_transitions() {
        assert_eq!(Outcome::Playing.transition(Event::AllBlocksCleared), Outcome::Won);
        assert_eq!(Outcome::Playing.transition(Event::LivesExhausted), Outcome::Lost);
    }

    #[test]
    fn test_terminal_states_absorb() {
        for state in [Outcome::Won, Outcome::Lost] {
            assert!(state.is_terminal());
            assert_eq!(state.transition(Event::BallLost), state);
            assert_eq!(state.transition(Event::AllBlocksCleared), state);
            assert_eq!(state.transition(Event::LivesExhausted), state);
        }
        assert!(!Outcome::Playing.is_terminal());
    }

    #[test]
    fn test_banner() {
        assert_eq!(Outcome::Playing.banner(), None);
        assert_eq!(Outcome::Won.banner(), Some("You win!"));
        assert_eq!(Outcome::Lost.banner(), Some("Game over"));
    }
}
