use crate::{count::DECK_SIZE, TrainerError};

use super::Rank;

use strum::IntoEnumIterator;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

const CARDS_PER_RANK: u8 = 4;

/// A single deck of 52 ranks dealt from the front. Dealt cards are never put back.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Rank>,
    current_index: usize,
}

impl Deck {
    /// Creates a new deck with ordered cards.
    pub fn new_ordered() -> Deck {
        let mut cards = Vec::with_capacity(DECK_SIZE);
        for _ in 0..CARDS_PER_RANK {
            for rank in Rank::iter() {
                cards.push(rank);
            }
        }
        Deck::from_ranks(cards)
    }

    /// Creates a deck dealing the given ranks in the given order.
    pub fn from_ranks(cards: Vec<Rank>) -> Deck {
        Deck {
            cards,
            current_index: 0,
        }
    }

    pub fn shuffled<R: Rng + ?Sized>(rng: &mut R) -> Deck {
        let mut deck = Deck::new_ordered();
        deck.cards.shuffle(rng);
        deck
    }

    /// Creates a shuffled deck whose first cards are exactly `firsts`, in order.
    ///
    /// Fails if `firsts` asks for more than four cards of one rank.
    pub fn shuffle_with_firsts<R: Rng + ?Sized>(
        firsts: &[Rank],
        rng: &mut R,
    ) -> Result<Deck, TrainerError> {
        let mut counts = [CARDS_PER_RANK; 13];
        for rank in firsts {
            let slot = &mut counts[*rank as usize];
            if *slot == 0 {
                return Err(TrainerError::InvalidStack(*rank));
            }
            *slot -= 1;
        }

        let mut rest = Vec::with_capacity(DECK_SIZE - firsts.len());
        for rank in Rank::iter() {
            for _ in 0..counts[rank as usize] {
                rest.push(rank);
            }
        }
        rest.shuffle(rng);

        let mut cards = firsts.to_vec();
        cards.extend(rest);
        Ok(Deck::from_ranks(cards))
    }

    /// Deals a card if the deck is not empty. Returns None if empty.
    pub fn deal_card(&mut self) -> Option<Rank> {
        let card = self.cards.get(self.current_index).copied()?;
        self.current_index += 1;
        Some(card)
    }

    /// The cards not dealt yet, next card first.
    pub fn remaining(&self) -> &[Rank] {
        &self.cards[self.current_index..]
    }

    pub fn cards_remaining(&self) -> usize {
        self.cards.len() - self.current_index
    }

    pub fn cards_dealt(&self) -> usize {
        self.current_index
    }

    pub fn is_exhausted(&self) -> bool {
        self.current_index >= self.cards.len()
    }
}

/// Seeded generator when a seed is given, otherwise one seeded from the OS.
pub fn session_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}
