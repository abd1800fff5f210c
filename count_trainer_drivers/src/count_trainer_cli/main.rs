mod render;
mod session;

use std::io;

use clap::Parser;
use count_trainer::{simulation::deck::session_rng, Deck, Rule, Trainer};
use count_trainer_drivers::{init_logger, load_config, parse_ranks, DEFAULT_CONFIG_PATH};

use self::session::Session;

#[derive(Debug, Parser)]
#[command(author, about, long_about = None)]
struct CommandLineArgs {
    /// The path of the config file
    #[arg(short, long, default_value_t = String::from(DEFAULT_CONFIG_PATH))]
    config: String,

    /// Seed for shuffling the deck. Overrides the config file.
    #[arg(short, long)]
    seed: Option<u64>,

    /// Ranks to put on top of the deck, e.g. `5,10,6,9`
    #[arg(long, value_delimiter = ',')]
    stack: Vec<String>,

    /// Hide the bust probability and recommended action during rounds
    #[arg(long)]
    no_advice: bool,
}

fn main() -> anyhow::Result<()> {
    init_logger("warn");
    let args = CommandLineArgs::parse();

    let config = load_config(&args.config)?;
    let rule: Rule = config.rule.try_into()?;
    let seed = args.seed.or(config.trainer.seed);
    let firsts = parse_ranks(&args.stack)?;
    let trainer = if firsts.is_empty() {
        Trainer::with_seed(&rule, seed)
    } else {
        let deck = Deck::shuffle_with_firsts(&firsts, &mut session_rng(seed))?;
        log::debug!("Deck ready with {} stacked cards, seed {:?}", firsts.len(), seed);
        Trainer::with_deck(&rule, deck)
    };
    let show_advice = config.trainer.show_advice && !args.no_advice;
    let mut session = Session::new(trainer, io::stdin().lock(), io::stdout().lock(), show_advice);
    session.run()
}
