pub mod advisor;
pub mod count;
mod error;
pub mod simulation;
pub mod strategy;

use serde::Serialize;

pub use advisor::{Advisory, Recommendation};
pub use count::CountGuess;
pub use error::TrainerError;
pub use simulation::{
    deck::Deck, hand::Hand, GamePhase, Rank, RoundEvent, RoundStatus, RoundSummary, Trainer,
};

/// Table and advice parameters of a training session.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rule {
    /// Dealer draws while its total is below this.
    pub dealer_stand_threshold: u8,
    /// Baseline advice is Hit below this total, Stand otherwise.
    pub basic_stand_threshold: u8,
    /// True count strictly above this favours standing early.
    pub high_count_threshold: f64,
    /// Lowest total that standing on a high count applies to.
    pub high_count_stand_from: u8,
    /// True count strictly below this favours hitting.
    pub low_count_threshold: f64,
    /// A round can only start with at least this many cards left in the deck.
    pub min_cards_to_play: usize,
    /// Floor of the decks-remaining divisor used by the true count.
    pub min_decks_remaining: f64,
}

impl Default for Rule {
    fn default() -> Self {
        Rule {
            dealer_stand_threshold: 17,
            basic_stand_threshold: 17,
            high_count_threshold: 2.0,
            high_count_stand_from: 15,
            low_count_threshold: 0.0,
            min_cards_to_play: 10,
            min_decks_remaining: count::MIN_DECKS_REMAINING,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum PlayerAction {
    Hit,
    Stand,
}

impl PlayerAction {
    /// Parses what the player typed at the decision prompt: `h` or `s`, any case.
    pub fn from_input(input: &str) -> Result<PlayerAction, TrainerError> {
        match input.trim().to_ascii_lowercase().as_str() {
            "h" => Ok(PlayerAction::Hit),
            "s" => Ok(PlayerAction::Stand),
            _ => Err(TrainerError::InvalidAction(input.trim().to_string())),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RoundOutcome {
    PlayerBlackjackStand,
    PlayerBust,
    DealerBust,
    PlayerWin,
    DealerWin,
    Push,
}

impl RoundOutcome {
    pub fn player_wins(&self) -> bool {
        matches!(
            self,
            RoundOutcome::PlayerBlackjackStand | RoundOutcome::DealerBust | RoundOutcome::PlayerWin
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_actions_case_insensitively() {
        assert_eq!(PlayerAction::from_input("h").unwrap(), PlayerAction::Hit);
        assert_eq!(PlayerAction::from_input(" S\n").unwrap(), PlayerAction::Stand);
        assert_eq!(PlayerAction::from_input("H").unwrap(), PlayerAction::Hit);
    }

    #[test]
    fn rejects_other_actions() {
        for input in ["", "hit", "x", "d"] {
            assert!(matches!(
                PlayerAction::from_input(input),
                Err(TrainerError::InvalidAction(_))
            ));
        }
    }
}
