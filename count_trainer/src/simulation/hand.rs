use serde::Serialize;

use super::Rank;

/// Best blackjack total of the given cards.
///
/// Aces count as 1, and one of them is promoted to 11 when that does not bust.
/// At most one Ace can ever be 11. The result may exceed 21, which means the
/// hand is bust.
pub fn hand_value(cards: &[Rank]) -> u16 {
    let hard = hard_total(cards);
    if cards.contains(&Rank::Ace) && hard + 10 <= 21 {
        hard + 10
    } else {
        hard
    }
}

fn hard_total(cards: &[Rank]) -> u16 {
    cards
        .iter()
        .map(|rank| match rank {
            Rank::Ace => 1,
            other => u16::from(other.blackjack_value()),
        })
        .sum()
}

/// Cards held by the player or the dealer during one round.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Hand {
    cards: Vec<Rank>,
}

impl Hand {
    pub fn new() -> Hand {
        Hand {
            cards: Vec::with_capacity(3),
        }
    }

    pub fn receive_card(&mut self, card: Rank) {
        self.cards.push(card);
    }

    pub fn get_cards(&self) -> &[Rank] {
        &self.cards
    }

    /// A hand in play never goes past 31, so this fits a `u8`.
    pub fn value(&self) -> u8 {
        u8::try_from(hand_value(&self.cards)).unwrap_or(u8::MAX)
    }

    pub fn is_bust(&self) -> bool {
        self.value() > 21
    }

    /// Two cards totalling 21.
    pub fn is_natural(&self) -> bool {
        self.cards.len() == 2 && self.value() == 21
    }

    /// Whether an Ace is still counted as 11.
    pub fn is_soft(&self) -> bool {
        hand_value(&self.cards) != hard_total(&self.cards)
    }

    pub fn clear(&mut self) {
        self.cards.clear();
    }
}

impl From<Vec<Rank>> for Hand {
    fn from(cards: Vec<Rank>) -> Self {
        Hand { cards }
    }
}
