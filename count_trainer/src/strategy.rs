use serde_enum_str::{Deserialize_enum_str, Serialize_enum_str};

use crate::{simulation::Situation, PlayerAction, Rule};

/// Anything that can answer the player's hit-or-stand question during a round.
pub trait ActionSource {
    fn make_decision(&mut self, situation: &Situation<'_>) -> PlayerAction;
}

/// Does whatever the advisor recommends.
#[derive(Debug, Clone, Copy, Default)]
pub struct FollowAdvice;

impl ActionSource for FollowAdvice {
    fn make_decision(&mut self, situation: &Situation<'_>) -> PlayerAction {
        if situation.advisory.recommendation.is_hit() {
            PlayerAction::Hit
        } else {
            PlayerAction::Stand
        }
    }
}

/// Plays the dealer's fixed policy and ignores the count.
#[derive(Debug, Clone, Copy)]
pub struct MimicDealer {
    pub stand_threshold: u8,
}

impl MimicDealer {
    pub fn new(rule: &Rule) -> Self {
        MimicDealer {
            stand_threshold: rule.dealer_stand_threshold,
        }
    }
}

impl ActionSource for MimicDealer {
    fn make_decision(&mut self, situation: &Situation<'_>) -> PlayerAction {
        if situation.advisory.player_total < self.stand_threshold {
            PlayerAction::Hit
        } else {
            PlayerAction::Stand
        }
    }
}

/// Never draws past the initial two cards.
#[derive(Debug, Clone, Copy, Default)]
pub struct AlwaysStand;

impl ActionSource for AlwaysStand {
    fn make_decision(&mut self, _: &Situation<'_>) -> PlayerAction {
        PlayerAction::Stand
    }
}

/// Names of the built-in action sources, as written in config files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize_enum_str, Deserialize_enum_str)]
pub enum PlayerPolicy {
    FollowAdvice,
    MimicDealer,
    AlwaysStand,
}

impl PlayerPolicy {
    pub fn into_action_source(self, rule: &Rule) -> Box<dyn ActionSource> {
        match self {
            PlayerPolicy::FollowAdvice => Box::new(FollowAdvice),
            PlayerPolicy::MimicDealer => Box::new(MimicDealer::new(rule)),
            PlayerPolicy::AlwaysStand => Box::new(AlwaysStand),
        }
    }
}
