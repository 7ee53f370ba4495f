//! Events that end or continue a session

/// Events produced by the simulation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Event {
    /// A block was destroyed; blocks remain
    BlockCleared,
    /// The last block was destroyed
    AllBlocksCleared,
    /// Ball went past the paddle; lives remain
    BallLost,
    /// Ball went past the paddle with no lives left
    LivesExhausted,
}

impl Event {
    /// Check if this event ends the session
    pub fn is_final(&self) -> bool {
        matches!(self, Event::AllBlocksCleared | Event::LivesExhausted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_final_events() {
        assert!(Event::AllBlocksCleared.is_final());
        assert!(Event::LivesExhausted.is_final());
        assert!(!Event::BlockCleared.is_final());
        assert!(!Event::BallLost.is_final());
    }
}
