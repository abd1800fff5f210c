use serde::Serialize;
use serde_enum_str::Serialize_enum_str;

use crate::{Rank, Rule};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize_enum_str)]
pub enum Recommendation {
    Hit,
    Stand,
    #[serde(rename = "Stand (High Count)")]
    StandHighCount,
    #[serde(rename = "Hit (Low Count)")]
    HitLowCount,
}

impl Recommendation {
    pub fn is_hit(&self) -> bool {
        matches!(self, Recommendation::Hit | Recommendation::HitLowCount)
    }
}

/// What the trainer shows the player before each decision.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Advisory {
    pub player_total: u8,
    pub dealer_total: u8,
    /// Percentage in [0, 100].
    pub bust_probability: f64,
    pub recommendation: Recommendation,
    pub true_count: f64,
}

/// Percentage of the remaining cards that would bust a hand totalling `player_total`.
///
/// Aces are counted as 11 here, so with a low total this overstates the risk.
pub fn bust_probability(player_total: u8, remaining: &[Rank]) -> f64 {
    if remaining.is_empty() {
        return 0.0;
    }
    let bust_threshold = 22i16 - player_total as i16;
    let bust_cards = remaining
        .iter()
        .filter(|rank| rank.blackjack_value() as i16 >= bust_threshold)
        .count();
    bust_cards as f64 / remaining.len() as f64 * 100.0
}

pub fn recommend(rule: &Rule, player_total: u8, true_count: f64) -> Recommendation {
    if true_count > rule.high_count_threshold && player_total >= rule.high_count_stand_from {
        Recommendation::StandHighCount
    } else if true_count < rule.low_count_threshold && player_total < rule.basic_stand_threshold {
        Recommendation::HitLowCount
    } else if player_total < rule.basic_stand_threshold {
        Recommendation::Hit
    } else {
        Recommendation::Stand
    }
}

pub fn advise(
    rule: &Rule,
    player_total: u8,
    dealer_total: u8,
    remaining: &[Rank],
    true_count: f64,
) -> Advisory {
    Advisory {
        player_total,
        dealer_total,
        bust_probability: bust_probability(player_total, remaining),
        recommendation: recommend(rule, player_total, true_count),
        true_count,
    }
}
