use thiserror::Error;

use crate::Rank;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum TrainerError {
    #[error("invalid action {0:?}, please type H or S")]
    InvalidAction(String),

    #[error("invalid count guess {0:?}, please enter an integer")]
    InvalidCountGuess(String),

    #[error("not enough cards left to play a round: {remaining} remaining, {required} required")]
    InsufficientCards { remaining: usize, required: usize },

    #[error("all cards have been dealt")]
    DeckExhausted,

    #[error("{operation} is only allowed in {allowed} phase")]
    WrongPhase {
        operation: &'static str,
        allowed: &'static str,
    },

    #[error("cannot stack more than four cards of rank {0}")]
    InvalidStack(Rank),
}
