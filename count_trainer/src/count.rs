use crate::Rank;

pub const DECK_SIZE: usize = 52;
pub const MIN_DECKS_REMAINING: f64 = 0.1;

/// Hi-Lo weight of a rank: +1 for 2 to 6, 0 for 7 to 9, -1 for tens and Aces.
pub fn hi_lo_weight(rank: Rank) -> i32 {
    match rank {
        Rank::Two | Rank::Three | Rank::Four | Rank::Five | Rank::Six => 1,
        Rank::Seven | Rank::Eight | Rank::Nine => 0,
        Rank::Ten | Rank::Jack | Rank::Queen | Rank::King | Rank::Ace => -1,
    }
}

pub fn update_running_count(current: i32, rank: Rank) -> i32 {
    current + hi_lo_weight(rank)
}

/// Running count divided by the fraction of the single deck still undealt.
///
/// The divisor never drops below `min_decks_remaining`, so the value stays
/// finite when the deck is (nearly) exhausted.
pub fn true_count(running_count: i32, cards_dealt: usize, min_decks_remaining: f64) -> f64 {
    let undealt = DECK_SIZE.saturating_sub(cards_dealt) as f64;
    let decks_remaining = (undealt / DECK_SIZE as f64).max(min_decks_remaining);
    running_count as f64 / decks_remaining
}

/// A player's guess of the running count, paired with the actual value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountGuess {
    pub guess: i32,
    pub actual: i32,
}

impl CountGuess {
    pub fn parse(input: &str, actual: i32) -> Result<CountGuess, crate::TrainerError> {
        let guess = input
            .trim()
            .parse::<i32>()
            .map_err(|_| crate::TrainerError::InvalidCountGuess(input.trim().to_string()))?;
        Ok(CountGuess { guess, actual })
    }

    pub fn is_correct(&self) -> bool {
        self.guess == self.actual
    }
}
