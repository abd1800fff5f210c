pub mod deck;
pub mod hand;

use crate::{
    advisor::{self, Advisory},
    count::{self, CountGuess},
    strategy::ActionSource,
    PlayerAction, RoundOutcome, Rule, TrainerError,
};
use count_trainer_macros::allowed_phase;
use log::{debug, info, warn};
use serde::Serialize;
use serde_enum_str::{Deserialize_enum_str, Serialize_enum_str};
use strum_macros::EnumIter;

use self::{deck::Deck, hand::Hand};

/// A card rank. Suits play no part in blackjack or in Hi-Lo counting.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, Serialize_enum_str, Deserialize_enum_str,
)]
pub enum Rank {
    #[serde(rename = "2")]
    Two,
    #[serde(rename = "3")]
    Three,
    #[serde(rename = "4")]
    Four,
    #[serde(rename = "5")]
    Five,
    #[serde(rename = "6")]
    Six,
    #[serde(rename = "7")]
    Seven,
    #[serde(rename = "8")]
    Eight,
    #[serde(rename = "9")]
    Nine,
    #[serde(rename = "10")]
    Ten,
    #[serde(rename = "J")]
    Jack,
    #[serde(rename = "Q")]
    Queen,
    #[serde(rename = "K")]
    King,
    #[serde(rename = "A")]
    Ace,
}

impl Rank {
    /// 10 for tens and faces, 11 for Ace, the pip value otherwise.
    pub fn blackjack_value(&self) -> u8 {
        match self {
            Rank::Two => 2,
            Rank::Three => 3,
            Rank::Four => 4,
            Rank::Five => 5,
            Rank::Six => 6,
            Rank::Seven => 7,
            Rank::Eight => 8,
            Rank::Nine => 9,
            Rank::Ten | Rank::Jack | Rank::Queen | Rank::King => 10,
            Rank::Ace => 11,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Between rounds. Practice draws happen here.
    Idle,
    Dealing,
    PlayerTurn,
    DealerTurn,
    Resolved,
}

/// Something worth showing the player, in the order it happened.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum RoundEvent {
    InitialDeal {
        player: Vec<Rank>,
        dealer: Vec<Rank>,
        running_count: i32,
    },
    Advice {
        advisory: Advisory,
        running_count: i32,
    },
    ActionTaken {
        action: PlayerAction,
    },
    PlayerDraw {
        card: Rank,
        total: u8,
        soft: bool,
    },
    /// The player reached 21 and stands without being asked.
    AutoStand {
        natural: bool,
    },
    PlayerBust {
        total: u8,
    },
    /// The player busted, so the dealer keeps its initial hand.
    DealerSkipped,
    DealerDraw {
        card: Rank,
        total: u8,
    },
    Resolved {
        player_total: u8,
        dealer_total: u8,
        outcome: RoundOutcome,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub enum RoundStatus {
    /// The player must hit or stand. The advisory is the one just logged.
    AwaitingAction(Advisory),
    Resolved(RoundOutcome),
}

/// What a finished round hands back to the session.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoundSummary {
    pub cursor: usize,
    pub running_count: i32,
    pub outcome: RoundOutcome,
    pub events: Vec<RoundEvent>,
}

/// Read-only view of the table offered to an `ActionSource` at each decision.
#[derive(Debug, Clone, Copy)]
pub struct Situation<'a> {
    pub player_cards: &'a [Rank],
    pub dealer_cards: &'a [Rank],
    pub advisory: &'a Advisory,
}

/// A single-deck blackjack table with a Hi-Lo counting trainer attached.
///
/// Every card that leaves the deck, whether drawn for practice or dealt in a
/// round, is counted exactly once. The dealer's hand is fully visible.
pub struct Trainer {
    rule: Rule,
    deck: Deck,
    running_count: i32,

    // Round state
    current_game_phase: GamePhase,
    player_hand: Hand,
    dealer_hand: Hand,
    outcome: Option<RoundOutcome>,
    events: Vec<RoundEvent>,
}

impl Trainer {
    /// Starts a session with a shuffled deck, reproducible when a seed is given.
    pub fn with_seed(rule: &Rule, seed: Option<u64>) -> Self {
        let deck = Deck::shuffled(&mut deck::session_rng(seed));
        Self::with_deck(rule, deck)
    }

    pub fn with_deck(rule: &Rule, deck: Deck) -> Self {
        Self {
            rule: *rule,
            deck,
            running_count: 0,
            current_game_phase: GamePhase::Idle,
            player_hand: Hand::new(),
            dealer_hand: Hand::new(),
            outcome: None,
            events: Vec::new(),
        }
    }

    /// Can be called at Idle phase.
    /// Draws the next card for counting practice. Fails with DeckExhausted
    /// once every card has been dealt.
    #[allowed_phase(Idle)]
    pub fn draw_practice_card(&mut self) -> Result<Rank, TrainerError> {
        let card = self.draw_card()?;
        if self.deck.is_exhausted() {
            info!("Practice deck exhausted, final count is {}", self.running_count);
        }
        Ok(card)
    }

    /// Can be called at Idle phase.
    /// Starts a round: checks enough cards remain, deals the initial hands
    /// and moves on to the player's turn. Nothing changes when too few cards
    /// remain.
    #[allowed_phase(Idle)]
    pub fn start_round(&mut self) -> Result<RoundStatus, TrainerError> {
        let remaining = self.deck.cards_remaining();
        if remaining < self.rule.min_cards_to_play {
            return Err(TrainerError::InsufficientCards {
                remaining,
                required: self.rule.min_cards_to_play,
            });
        }

        self.new_game();
        self.current_game_phase = GamePhase::Dealing;
        let status = self
            .deal_initial_cards()
            .and_then(|_| self.advance_player_turn());
        self.abandon_round_on_error(status)
    }

    /// Can be called at PlayerTurn phase.
    /// Takes what the player typed. Anything but `h` or `s` is rejected
    /// without touching the deck or the count.
    #[allowed_phase(PlayerTurn)]
    pub fn submit_action(&mut self, input: &str) -> Result<RoundStatus, TrainerError> {
        let action = match PlayerAction::from_input(input) {
            Ok(action) => action,
            Err(err) => {
                warn!("Rejected player input {:?}", input.trim());
                return Err(err);
            }
        };
        match action {
            PlayerAction::Hit => self.play_hit(),
            PlayerAction::Stand => self.play_stand(),
        }
    }

    /// Can be called at PlayerTurn phase.
    #[allowed_phase(PlayerTurn)]
    pub fn play_hit(&mut self) -> Result<RoundStatus, TrainerError> {
        self.events.push(RoundEvent::ActionTaken {
            action: PlayerAction::Hit,
        });
        let status = self.draw_card().and_then(|card| {
            self.player_hand.receive_card(card);
            self.events.push(RoundEvent::PlayerDraw {
                card,
                total: self.player_hand.value(),
                soft: self.player_hand.is_soft(),
            });
            self.advance_player_turn()
        });
        self.abandon_round_on_error(status)
    }

    /// Can be called at PlayerTurn phase.
    #[allowed_phase(PlayerTurn)]
    pub fn play_stand(&mut self) -> Result<RoundStatus, TrainerError> {
        self.events.push(RoundEvent::ActionTaken {
            action: PlayerAction::Stand,
        });
        self.current_game_phase = GamePhase::DealerTurn;
        let status = self.dealer_plays_and_summary();
        self.abandon_round_on_error(status)
    }

    /// Can be called at Resolved phase.
    /// Hands the round's result and event log to the caller and returns the
    /// table to Idle.
    #[allowed_phase(Resolved)]
    pub fn finish_round(&mut self) -> Result<RoundSummary, TrainerError> {
        let outcome = self.outcome.take().ok_or(TrainerError::WrongPhase {
            operation: "finish_round",
            allowed: "Resolved",
        })?;
        self.current_game_phase = GamePhase::Idle;
        Ok(RoundSummary {
            cursor: self.deck.cards_dealt(),
            running_count: self.running_count,
            outcome,
            events: std::mem::take(&mut self.events),
        })
    }

    /// Plays a whole round, asking `source` for each decision.
    pub fn play_round<T: ActionSource + ?Sized>(
        &mut self,
        source: &mut T,
    ) -> Result<RoundSummary, TrainerError> {
        let mut status = self.start_round()?;
        while let RoundStatus::AwaitingAction(advisory) = status {
            let situation = Situation {
                player_cards: self.player_hand.get_cards(),
                dealer_cards: self.dealer_hand.get_cards(),
                advisory: &advisory,
            };
            status = match source.make_decision(&situation) {
                PlayerAction::Hit => self.play_hit()?,
                PlayerAction::Stand => self.play_stand()?,
            };
        }
        self.finish_round()
    }

    /// Scores a guess of the running count. Non-integer input is rejected.
    pub fn check_count_guess(&self, input: &str) -> Result<CountGuess, TrainerError> {
        CountGuess::parse(input, self.running_count)
    }

    pub fn true_count(&self) -> f64 {
        count::true_count(
            self.running_count,
            self.deck.cards_dealt(),
            self.rule.min_decks_remaining,
        )
    }

    pub fn running_count(&self) -> i32 {
        self.running_count
    }

    pub fn cursor(&self) -> usize {
        self.deck.cards_dealt()
    }

    pub fn cards_remaining(&self) -> usize {
        self.deck.cards_remaining()
    }

    pub fn is_deck_exhausted(&self) -> bool {
        self.deck.is_exhausted()
    }

    pub fn get_game_phase(&self) -> GamePhase {
        self.current_game_phase
    }

    pub fn get_player_hand(&self) -> &Hand {
        &self.player_hand
    }

    pub fn get_dealer_hand(&self) -> &Hand {
        &self.dealer_hand
    }

    pub fn get_rule(&self) -> &Rule {
        &self.rule
    }

    /// Events of the round in progress.
    pub fn get_events(&self) -> &[RoundEvent] {
        &self.events
    }

    #[allowed_phase(Dealing)]
    fn deal_initial_cards(&mut self) -> Result<(), TrainerError> {
        for _ in 0..2 {
            let card = self.draw_card()?;
            self.player_hand.receive_card(card);
            let card = self.draw_card()?;
            self.dealer_hand.receive_card(card);
        }

        self.events.push(RoundEvent::InitialDeal {
            player: self.player_hand.get_cards().to_vec(),
            dealer: self.dealer_hand.get_cards().to_vec(),
            running_count: self.running_count,
        });
        self.current_game_phase = GamePhase::PlayerTurn;
        Ok(())
    }

    /// Either asks the player for a decision or, on 21 or a bust, ends the
    /// player's turn by itself.
    fn advance_player_turn(&mut self) -> Result<RoundStatus, TrainerError> {
        let total = self.player_hand.value();
        if total == 21 {
            self.events.push(RoundEvent::AutoStand {
                natural: self.player_hand.is_natural(),
            });
            self.current_game_phase = GamePhase::DealerTurn;
            return self.dealer_plays_and_summary();
        }
        if total > 21 {
            self.events.push(RoundEvent::PlayerBust { total });
            self.current_game_phase = GamePhase::DealerTurn;
            return self.dealer_plays_and_summary();
        }

        let advisory = advisor::advise(
            &self.rule,
            total,
            self.dealer_hand.value(),
            self.deck.remaining(),
            self.true_count(),
        );
        self.events.push(RoundEvent::Advice {
            advisory,
            running_count: self.running_count,
        });
        Ok(RoundStatus::AwaitingAction(advisory))
    }

    #[allowed_phase(DealerTurn)]
    fn dealer_plays_and_summary(&mut self) -> Result<RoundStatus, TrainerError> {
        let outcome = if self.player_hand.is_bust() {
            self.events.push(RoundEvent::DealerSkipped);
            RoundOutcome::PlayerBust
        } else {
            while self.dealer_hand.value() < self.rule.dealer_stand_threshold {
                let card = self.draw_card()?;
                self.dealer_hand.receive_card(card);
                self.events.push(RoundEvent::DealerDraw {
                    card,
                    total: self.dealer_hand.value(),
                });
            }
            resolve_outcome(&self.player_hand, &self.dealer_hand)
        };

        let player_total = self.player_hand.value();
        let dealer_total = self.dealer_hand.value();
        info!(
            "Round resolved: player {} dealer {} -> {:?} (running count {})",
            player_total, dealer_total, outcome, self.running_count
        );
        self.events.push(RoundEvent::Resolved {
            player_total,
            dealer_total,
            outcome,
        });
        self.outcome = Some(outcome);
        self.current_game_phase = GamePhase::Resolved;
        Ok(RoundStatus::Resolved(outcome))
    }

    /// The only way a card leaves the deck, so the count sees each card once.
    fn draw_card(&mut self) -> Result<Rank, TrainerError> {
        let card = self.deck.deal_card().ok_or(TrainerError::DeckExhausted)?;
        self.running_count = count::update_running_count(self.running_count, card);
        debug!(
            "Dealt {} (card {}), running count {}",
            card,
            self.deck.cards_dealt(),
            self.running_count
        );
        Ok(card)
    }

    /// A round that fails half way is dropped and the table goes back to
    /// Idle. Dealt cards stay dealt and counted.
    fn abandon_round_on_error(
        &mut self,
        status: Result<RoundStatus, TrainerError>,
    ) -> Result<RoundStatus, TrainerError> {
        if let Err(err) = &status {
            warn!(
                "Round abandoned after {} cards: {}",
                self.deck.cards_dealt(),
                err
            );
            self.new_game();
            self.current_game_phase = GamePhase::Idle;
        }
        status
    }

    fn new_game(&mut self) {
        self.player_hand.clear();
        self.dealer_hand.clear();
        self.outcome = None;
        self.events.clear();
    }
}

/// Outcome of a round in which the player did not bust.
pub fn resolve_outcome(player_hand: &Hand, dealer_hand: &Hand) -> RoundOutcome {
    let player_total = player_hand.value();
    let dealer_total = dealer_hand.value();
    if player_hand.is_bust() {
        RoundOutcome::PlayerBust
    } else if dealer_total > 21 {
        RoundOutcome::DealerBust
    } else if dealer_total > player_total {
        RoundOutcome::DealerWin
    } else if dealer_total < player_total {
        if player_hand.is_natural() {
            RoundOutcome::PlayerBlackjackStand
        } else {
            RoundOutcome::PlayerWin
        }
    } else {
        RoundOutcome::Push
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strategy::{AlwaysStand, FollowAdvice};

    fn stacked_trainer(firsts: &[Rank]) -> Trainer {
        let deck = Deck::shuffle_with_firsts(firsts, &mut deck::session_rng(Some(3))).unwrap();
        Trainer::with_deck(&Rule::default(), deck)
    }

    #[test]
    fn test_allowed_phase() {
        let mut trainer = stacked_trainer(&[]);
        assert_eq!(trainer.get_game_phase(), GamePhase::Idle);
        assert_eq!(
            trainer.play_hit(),
            Err(TrainerError::WrongPhase {
                operation: "play_hit",
                allowed: "PlayerTurn",
            })
        );
        assert!(trainer.finish_round().is_err());
        assert_eq!(trainer.cursor(), 0);
    }

    #[test]
    fn deals_alternately_and_counts_every_card() {
        let mut trainer = stacked_trainer(&[Rank::Two, Rank::King, Rank::Three, Rank::Seven]);
        let status = trainer.start_round().unwrap();
        assert_eq!(trainer.get_player_hand().get_cards(), &[Rank::Two, Rank::Three]);
        assert_eq!(trainer.get_dealer_hand().get_cards(), &[Rank::King, Rank::Seven]);
        assert_eq!(trainer.cursor(), 4);
        assert_eq!(trainer.running_count(), 1);
        assert_eq!(trainer.get_game_phase(), GamePhase::PlayerTurn);
        match status {
            RoundStatus::AwaitingAction(advisory) => {
                assert_eq!(advisory.player_total, 5);
                assert_eq!(advisory.dealer_total, 17);
                assert_eq!(advisory.bust_probability, 0.0);
            }
            other => panic!("unexpected status {:?}", other),
        }
    }

    #[test]
    fn hit_to_twenty_one_then_dealer_stands() {
        let mut trainer = stacked_trainer(&[Rank::Five, Rank::Ten, Rank::Six, Rank::Nine, Rank::Ten]);
        let status = trainer.start_round().unwrap();
        let advisory = match status {
            RoundStatus::AwaitingAction(advisory) => advisory,
            other => panic!("unexpected status {:?}", other),
        };
        assert_eq!(advisory.player_total, 11);
        assert_eq!(advisory.recommendation, crate::Recommendation::Hit);

        let status = trainer.submit_action("H").unwrap();
        assert_eq!(status, RoundStatus::Resolved(RoundOutcome::PlayerWin));

        let summary = trainer.finish_round().unwrap();
        assert_eq!(summary.outcome, RoundOutcome::PlayerWin);
        assert_eq!(summary.cursor, 5);
        // 5 +1, 10 -1, 6 +1, 9 0, 10 -1
        assert_eq!(summary.running_count, 0);
        assert!(summary
            .events
            .contains(&RoundEvent::AutoStand { natural: false }));
        assert!(!summary
            .events
            .iter()
            .any(|event| matches!(event, RoundEvent::DealerDraw { .. })));
        assert_eq!(
            summary.events.last(),
            Some(&RoundEvent::Resolved {
                player_total: 21,
                dealer_total: 19,
                outcome: RoundOutcome::PlayerWin,
            })
        );
        assert_eq!(trainer.get_game_phase(), GamePhase::Idle);
    }

    #[test]
    fn invalid_action_changes_nothing() {
        let mut trainer = stacked_trainer(&[Rank::Five, Rank::Ten, Rank::Six, Rank::Nine, Rank::Ten]);
        trainer.start_round().unwrap();
        let events_before = trainer.get_events().len();
        assert_eq!(
            trainer.submit_action("double"),
            Err(TrainerError::InvalidAction(String::from("double")))
        );
        assert_eq!(trainer.cursor(), 4);
        assert_eq!(trainer.running_count(), 1);
        assert_eq!(trainer.get_events().len(), events_before);
        assert_eq!(trainer.get_game_phase(), GamePhase::PlayerTurn);
        assert!(trainer.submit_action("s").is_ok());
    }

    #[test]
    fn natural_stands_automatically_without_advice() {
        let mut trainer = stacked_trainer(&[Rank::Ace, Rank::Ten, Rank::King, Rank::Eight]);
        let status = trainer.start_round().unwrap();
        assert_eq!(
            status,
            RoundStatus::Resolved(RoundOutcome::PlayerBlackjackStand)
        );
        let summary = trainer.finish_round().unwrap();
        assert!(!summary
            .events
            .iter()
            .any(|event| matches!(event, RoundEvent::Advice { .. })));
        assert!(summary.events.contains(&RoundEvent::AutoStand { natural: true }));
    }

    #[test]
    fn natural_against_dealer_twenty_one_pushes() {
        let mut trainer = stacked_trainer(&[Rank::Ace, Rank::Ace, Rank::Jack, Rank::Queen]);
        let status = trainer.start_round().unwrap();
        assert_eq!(status, RoundStatus::Resolved(RoundOutcome::Push));
    }

    #[test]
    fn bust_skips_dealer() {
        let mut trainer = stacked_trainer(&[
            Rank::Ten,
            Rank::Two,
            Rank::Six,
            Rank::Three,
            Rank::King,
            Rank::Four,
        ]);
        trainer.start_round().unwrap();
        let status = trainer.play_hit().unwrap();
        assert_eq!(status, RoundStatus::Resolved(RoundOutcome::PlayerBust));
        assert_eq!(trainer.get_dealer_hand().get_cards(), &[Rank::Two, Rank::Three]);
        let summary = trainer.finish_round().unwrap();
        assert_eq!(summary.cursor, 5);
        assert!(summary.events.contains(&RoundEvent::PlayerBust { total: 26 }));
        assert!(summary.events.contains(&RoundEvent::DealerSkipped));
    }

    #[test]
    fn dealer_draws_to_seventeen() {
        let mut trainer = stacked_trainer(&[
            Rank::Ten,
            Rank::Six,
            Rank::Nine,
            Rank::Five,
            Rank::Two,
            Rank::Four,
        ]);
        trainer.start_round().unwrap();
        let status = trainer.play_stand().unwrap();
        // Dealer 11 + 2 + 4 = 17 stands, player 19 wins.
        assert_eq!(status, RoundStatus::Resolved(RoundOutcome::PlayerWin));
        assert_eq!(
            trainer.get_dealer_hand().get_cards(),
            &[Rank::Six, Rank::Five, Rank::Two, Rank::Four]
        );
    }

    #[test]
    fn dealer_busts() {
        let mut trainer = stacked_trainer(&[
            Rank::Ten,
            Rank::Ten,
            Rank::Eight,
            Rank::Six,
            Rank::Queen,
        ]);
        trainer.start_round().unwrap();
        let status = trainer.play_stand().unwrap();
        assert_eq!(status, RoundStatus::Resolved(RoundOutcome::DealerBust));
    }

    #[test]
    fn dealer_wins_and_push() {
        let mut trainer = stacked_trainer(&[Rank::Ten, Rank::Ten, Rank::Seven, Rank::Nine]);
        trainer.start_round().unwrap();
        assert_eq!(
            trainer.play_stand().unwrap(),
            RoundStatus::Resolved(RoundOutcome::DealerWin)
        );

        let mut trainer = stacked_trainer(&[Rank::Ten, Rank::Jack, Rank::Eight, Rank::Eight]);
        trainer.start_round().unwrap();
        assert_eq!(
            trainer.play_stand().unwrap(),
            RoundStatus::Resolved(RoundOutcome::Push)
        );
    }

    #[test]
    fn nine_cards_left_is_rejected_without_mutation() {
        let mut trainer = stacked_trainer(&[]);
        for _ in 0..43 {
            trainer.draw_practice_card().unwrap();
        }
        let cursor = trainer.cursor();
        let running_count = trainer.running_count();
        assert_eq!(trainer.cards_remaining(), 9);
        assert_eq!(
            trainer.start_round(),
            Err(TrainerError::InsufficientCards {
                remaining: 9,
                required: 10,
            })
        );
        assert_eq!(trainer.cursor(), cursor);
        assert_eq!(trainer.running_count(), running_count);
        assert_eq!(trainer.get_game_phase(), GamePhase::Idle);
    }

    #[test]
    fn practice_draws_until_exhausted() {
        let mut trainer = stacked_trainer(&[]);
        let mut drawn = 0;
        while trainer.draw_practice_card().is_ok() {
            drawn += 1;
        }
        assert_eq!(drawn, 52);
        assert!(trainer.is_deck_exhausted());
        assert_eq!(trainer.running_count(), 0);
        assert_eq!(trainer.draw_practice_card(), Err(TrainerError::DeckExhausted));
        assert!(trainer.check_count_guess("0").unwrap().is_correct());
    }

    #[test]
    fn practice_draw_is_blocked_mid_round() {
        let mut trainer = stacked_trainer(&[Rank::Five, Rank::Ten, Rank::Six, Rank::Nine]);
        trainer.start_round().unwrap();
        assert!(matches!(
            trainer.draw_practice_card(),
            Err(TrainerError::WrongPhase { .. })
        ));
        assert_eq!(trainer.cursor(), 4);
    }

    #[test]
    fn play_round_keeps_count_in_sync() {
        // Twenty cards always cover one round, so no round runs the deck dry.
        let rule = Rule {
            min_cards_to_play: 20,
            ..Rule::default()
        };
        let mut trainer = Trainer::with_seed(&rule, Some(11));
        let mut source = FollowAdvice;
        while trainer.cards_remaining() >= trainer.get_rule().min_cards_to_play {
            let before = trainer.cursor();
            let summary = trainer.play_round(&mut source).unwrap();
            assert!(summary.cursor >= before + 4);
            assert_eq!(summary.cursor, trainer.cursor());
            assert_eq!(summary.running_count, trainer.running_count());
        }
        while trainer.draw_practice_card().is_ok() {}
        // Every card was seen once, so a full deck nets to zero.
        assert_eq!(trainer.running_count(), 0);
    }

    #[test]
    fn deck_running_dry_mid_round_returns_to_idle() {
        use Rank::*;
        let deck = Deck::from_ranks(vec![Two, Two, Two, Two, Ace, Ace, Ace, Ace, Three, Three]);
        let mut trainer = Trainer::with_deck(&Rule::default(), deck);
        trainer.start_round().unwrap();
        for _ in 0..4 {
            assert!(matches!(
                trainer.play_hit(),
                Ok(RoundStatus::AwaitingAction(_))
            ));
        }
        // The last Three makes 21 and the dealer, on 7, finds the deck empty.
        assert_eq!(trainer.play_hit(), Err(TrainerError::DeckExhausted));

        assert_eq!(trainer.get_game_phase(), GamePhase::Idle);
        assert!(trainer.get_player_hand().get_cards().is_empty());
        assert!(trainer.get_dealer_hand().get_cards().is_empty());
        assert!(trainer.get_events().is_empty());
        assert_eq!(trainer.cursor(), 10);
        assert_eq!(trainer.running_count(), 2);

        assert_eq!(trainer.draw_practice_card(), Err(TrainerError::DeckExhausted));
        assert_eq!(
            trainer.start_round(),
            Err(TrainerError::InsufficientCards {
                remaining: 0,
                required: 10,
            })
        );
        assert!(trainer.check_count_guess("2").unwrap().is_correct());
    }

    #[test]
    fn soft_draws_are_flagged() {
        let mut trainer = stacked_trainer(&[Rank::Two, Rank::Ten, Rank::Four, Rank::Nine, Rank::Ace]);
        trainer.start_round().unwrap();
        trainer.play_hit().unwrap();
        assert!(trainer.get_events().contains(&RoundEvent::PlayerDraw {
            card: Rank::Ace,
            total: 17,
            soft: true,
        }));
    }

    #[test]
    fn ranks_display_as_card_labels() {
        assert_eq!(Rank::Ten.to_string(), "10");
        assert_eq!(Rank::Queen.to_string(), "Q");
        assert_eq!(Rank::Ace.to_string(), "A");
        assert_eq!("7".parse::<Rank>().unwrap(), Rank::Seven);
    }

    #[test]
    fn play_round_with_always_stand() {
        let mut trainer = stacked_trainer(&[Rank::Ten, Rank::Ten, Rank::Two, Rank::Nine]);
        let summary = trainer.play_round(&mut AlwaysStand).unwrap();
        assert_eq!(summary.outcome, RoundOutcome::DealerWin);
        assert!(summary.events.contains(&RoundEvent::ActionTaken {
            action: PlayerAction::Stand
        }));
    }

    #[test]
    fn resolve_outcome_table() {
        let hand = |cards: &[Rank]| Hand::from(cards.to_vec());
        assert_eq!(
            resolve_outcome(&hand(&[Rank::Ten, Rank::Nine]), &hand(&[Rank::Ten, Rank::Six, Rank::Nine])),
            RoundOutcome::DealerBust
        );
        assert_eq!(
            resolve_outcome(&hand(&[Rank::Ten, Rank::Seven]), &hand(&[Rank::Ten, Rank::Eight])),
            RoundOutcome::DealerWin
        );
        assert_eq!(
            resolve_outcome(&hand(&[Rank::Seven, Rank::Seven, Rank::Seven]), &hand(&[Rank::Ten, Rank::Ace])),
            RoundOutcome::Push
        );
    }
}
