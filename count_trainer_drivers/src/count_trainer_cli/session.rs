use std::io::{BufRead, Write};

use count_trainer::{RoundStatus, Trainer, TrainerError};

use crate::render::{ascii_card, render_event};

/// How a round left the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RoundEnd {
    Continue,
    DeckExhausted,
    InputClosed,
}

/// The interactive command loop: practice draws, count guesses and rounds.
pub struct Session<R: BufRead, W: Write> {
    trainer: Trainer,
    input: R,
    output: W,
    show_advice: bool,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(trainer: Trainer, input: R, output: W, show_advice: bool) -> Self {
        Session {
            trainer,
            input,
            output,
            show_advice,
        }
    }

    /// Runs until the player quits, input ends or the deck runs out. In the
    /// last case the player gets one final guess at the count.
    pub fn run(&mut self) -> anyhow::Result<()> {
        writeln!(
            self.output,
            "Welcome to the Card Counting & Blackjack Simulator!\n\
             Commands:\n\
             - Press Enter: Draw next card for counting practice.\n\
             - Type 'count': Guess your current running count.\n\
             - Type 'play': Start a blackjack round.\n\
             - Type 'quit': Exit the simulator.\n\
             --------------------------------------------------------"
        )?;

        while !self.trainer.is_deck_exhausted() {
            let command = match self.prompt("Press Enter (draw), 'count', 'play', or 'quit': ")? {
                Some(command) => command,
                None => return Ok(()),
            };
            match command.trim().to_lowercase().as_str() {
                "quit" => {
                    writeln!(self.output, "Thank you for playing! Goodbye.")?;
                    return Ok(());
                }
                "count" => self.guess_count()?,
                "play" => match self.play_round()? {
                    RoundEnd::Continue => {}
                    RoundEnd::DeckExhausted => break,
                    RoundEnd::InputClosed => return Ok(()),
                },
                "" => self.draw_practice_card()?,
                _ => writeln!(
                    self.output,
                    "Invalid command. Use Enter, 'count', 'play', or 'quit'."
                )?,
            }
        }

        writeln!(self.output, "All cards have been dealt.")?;
        let guess = self
            .prompt("All cards are done. Enter your final count guess: ")?
            .unwrap_or_default();
        match self.trainer.check_count_guess(&guess) {
            Ok(guess) if guess.is_correct() => {
                writeln!(self.output, "Perfect! You got the final count correct!")?
            }
            Ok(guess) => writeln!(
                self.output,
                "Final guess: {}. Actual final count: {}. Better luck next time!",
                guess.guess, guess.actual
            )?,
            Err(_) => writeln!(
                self.output,
                "Invalid guess. The actual final count was {}.",
                self.trainer.running_count()
            )?,
        }
        Ok(())
    }

    fn draw_practice_card(&mut self) -> anyhow::Result<()> {
        match self.trainer.draw_practice_card() {
            Ok(card) => {
                writeln!(self.output, "\nDealing card:\n{}", ascii_card(card).join("\n"))?;
                Ok(())
            }
            Err(TrainerError::DeckExhausted) => Ok(()),
            Err(err) => Err(err.into()),
        }
    }

    fn guess_count(&mut self) -> anyhow::Result<()> {
        let guess = self
            .prompt("Enter your current count guess: ")?
            .unwrap_or_default();
        match self.trainer.check_count_guess(&guess) {
            Ok(guess) if guess.is_correct() => writeln!(
                self.output,
                "Correct! Your guessed count matches the actual running count."
            )?,
            Ok(guess) => writeln!(
                self.output,
                "Your guess: {}. Actual count: {}. Keep practicing!",
                guess.guess, guess.actual
            )?,
            Err(_) => writeln!(self.output, "Please enter a valid integer for your guess.")?,
        }
        Ok(())
    }

    /// Plays one round, prompting for each decision.
    fn play_round(&mut self) -> anyhow::Result<RoundEnd> {
        let mut status = match self.trainer.start_round() {
            Ok(status) => status,
            Err(TrainerError::InsufficientCards { .. }) => {
                writeln!(
                    self.output,
                    "Not enough cards left to play a new blackjack hand. Try again later."
                )?;
                return Ok(RoundEnd::Continue);
            }
            Err(TrainerError::DeckExhausted) => {
                writeln!(self.output, "The deck ran out in the middle of the round.")?;
                return Ok(RoundEnd::DeckExhausted);
            }
            Err(err) => return Err(err.into()),
        };

        let mut shown = 0;
        loop {
            shown = self.show_new_events(shown)?;
            if let RoundStatus::Resolved(_) = status {
                break;
            }

            let action = match self.prompt("(H)it, (S)tand: ")? {
                Some(action) => action,
                None => return Ok(RoundEnd::InputClosed),
            };
            status = match self.trainer.submit_action(&action) {
                Ok(status) => status,
                Err(TrainerError::InvalidAction(_)) => {
                    writeln!(self.output, "Invalid action, please type H or S.")?;
                    status
                }
                Err(TrainerError::DeckExhausted) => {
                    writeln!(self.output, "The deck ran out in the middle of the round.")?;
                    return Ok(RoundEnd::DeckExhausted);
                }
                Err(err) => return Err(err.into()),
            };
        }

        self.trainer.finish_round()?;
        Ok(RoundEnd::Continue)
    }

    fn show_new_events(&mut self, shown: usize) -> anyhow::Result<usize> {
        let events = self.trainer.get_events();
        for event in &events[shown..] {
            if let Some(text) = render_event(event, self.show_advice) {
                writeln!(self.output, "{}", text)?;
            }
        }
        Ok(events.len())
    }

    /// Returns None once input is closed.
    fn prompt(&mut self, message: &str) -> anyhow::Result<Option<String>> {
        write!(self.output, "{}", message)?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}
