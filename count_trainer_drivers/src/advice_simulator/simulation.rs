use std::collections::HashMap;

use count_trainer::{
    simulation::deck::session_rng, strategy::PlayerPolicy, Deck, RoundOutcome, RoundSummary,
    Rule, Trainer, TrainerError,
};

mod private {
    use count_trainer::RoundOutcome;

    #[derive(Debug, Clone, Copy, Default)]
    pub struct Statistics {
        rounds: u64,
        wins: u64,
        losses: u64,
        pushes: u64,
    }

    impl Statistics {
        pub fn record(&mut self, outcome: RoundOutcome) {
            self.rounds += 1;
            if outcome.player_wins() {
                self.wins += 1;
            } else if outcome == RoundOutcome::Push {
                self.pushes += 1;
            } else {
                self.losses += 1;
            }
        }

        pub fn get_rounds(&self) -> u64 {
            self.rounds
        }

        pub fn get_wins(&self) -> u64 {
            self.wins
        }

        pub fn get_losses(&self) -> u64 {
            self.losses
        }

        pub fn get_pushes(&self) -> u64 {
            self.pushes
        }

        pub fn get_win_rate(&self) -> f64 {
            if self.rounds == 0 {
                0.0
            } else {
                self.wins as f64 / self.rounds as f64
            }
        }
    }
}

pub use self::private::Statistics;

/// Results of playing many decks with one policy.
#[derive(Debug, Clone, Default)]
pub struct Report {
    pub decks_played: u64,
    pub outcomes: HashMap<RoundOutcome, u64>,
    pub overall: Statistics,
    /// Rounds that started with a true count above the high-count threshold.
    pub high_count: Statistics,
    /// Rounds that started with a true count below the low-count threshold.
    pub low_count: Statistics,
    /// Rounds cut short because the deck ran out.
    pub exhausted_rounds: u64,
}

#[derive(Debug, Default)]
struct Handler {
    trace: bool,
    report: Report,
}

impl Handler {
    fn on_round_summary(
        &mut self,
        rule: &Rule,
        summary: &RoundSummary,
        true_count_before: f64,
    ) -> anyhow::Result<()> {
        *self.report.outcomes.entry(summary.outcome).or_insert(0) += 1;
        self.report.overall.record(summary.outcome);
        if true_count_before > rule.high_count_threshold {
            self.report.high_count.record(summary.outcome);
        } else if true_count_before < rule.low_count_threshold {
            self.report.low_count.record(summary.outcome);
        }

        if self.trace {
            print!("---\n{}", serde_yaml::to_string(summary)?);
        }
        Ok(())
    }

    fn on_deck_finished(&mut self, deck_id: u64, trainer: &Trainer) {
        self.report.decks_played += 1;
        log::debug!(
            "Deck #{} finished with {} cards left, running count {}",
            deck_id,
            trainer.cards_remaining(),
            trainer.running_count()
        );
    }
}

/// Plays rounds through `number_of_decks` freshly shuffled decks, each until
/// too few cards remain to start another round.
pub fn simulate_decks(
    rule: &Rule,
    policy: PlayerPolicy,
    number_of_decks: u64,
    seed: Option<u64>,
    trace: bool,
) -> anyhow::Result<Report> {
    let mut rng = session_rng(seed);
    let mut source = policy.into_action_source(rule);
    let mut handler = Handler {
        trace,
        ..Default::default()
    };

    for deck_id in 0..number_of_decks {
        let mut trainer = Trainer::with_deck(rule, Deck::shuffled(&mut rng));
        while trainer.cards_remaining() >= rule.min_cards_to_play {
            let true_count_before = trainer.true_count();
            match trainer.play_round(source.as_mut()) {
                Ok(summary) => handler.on_round_summary(rule, &summary, true_count_before)?,
                Err(TrainerError::DeckExhausted) => {
                    handler.report.exhausted_rounds += 1;
                    break;
                }
                Err(err) => return Err(err.into()),
            }
        }
        handler.on_deck_finished(deck_id, &trainer);
    }

    Ok(handler.report)
}

pub fn print_report(policy: PlayerPolicy, report: &Report) {
    println!(
        "Policy {:?}: {} decks, {} rounds",
        policy,
        report.decks_played,
        report.overall.get_rounds()
    );
    for (name, stat) in [
        ("Overall", &report.overall),
        ("High count", &report.high_count),
        ("Low count", &report.low_count),
    ] {
        println!(
            "{:<10} rounds: {:>8}  wins: {:>8}  losses: {:>8}  pushes: {:>8}  win rate: {:.2}%",
            name,
            stat.get_rounds(),
            stat.get_wins(),
            stat.get_losses(),
            stat.get_pushes(),
            stat.get_win_rate() * 100.0
        );
    }

    let mut outcomes: Vec<(&RoundOutcome, &u64)> = report.outcomes.iter().collect();
    outcomes.sort_by(|a, b| b.1.cmp(a.1));
    for (outcome, times) in outcomes {
        println!("  {:?}: {}", outcome, times);
    }
    if report.exhausted_rounds > 0 {
        println!("Rounds cut short by an empty deck: {}", report.exhausted_rounds);
    }
}
