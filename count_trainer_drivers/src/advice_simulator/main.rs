mod simulation;

use anyhow::anyhow;
use clap::Parser;
use count_trainer::{strategy::PlayerPolicy, Rule};
use count_trainer_drivers::{init_logger, load_config, DEFAULT_CONFIG_PATH};

#[derive(Debug, Parser)]
#[command(author, about, long_about = None)]
struct CommandLineArgs {
    /// The path of the config file
    #[arg(short, long, default_value_t = String::from(DEFAULT_CONFIG_PATH))]
    config: String,

    /// Number of decks to play through. Overrides the config file.
    #[arg(short, long)]
    decks: Option<u64>,

    /// FollowAdvice, MimicDealer or AlwaysStand. Overrides the config file.
    #[arg(short, long)]
    policy: Option<String>,

    /// Seed for shuffling. Overrides the config file.
    #[arg(short, long)]
    seed: Option<u64>,

    /// Print every round's event log as YAML
    #[arg(long)]
    trace: bool,
}

fn main() -> anyhow::Result<()> {
    init_logger("info");
    let args = CommandLineArgs::parse();

    let config = load_config(&args.config)?;
    let rule: Rule = config.rule.try_into()?;
    let simulator_config = config.advice_simulator;
    let policy: PlayerPolicy = match &args.policy {
        Some(name) => name
            .parse()
            .map_err(|_| anyhow!("Unknown player policy {:?}", name))?,
        None => simulator_config.get_player_policy()?,
    };
    let number_of_decks = args.decks.unwrap_or(simulator_config.number_of_decks);
    let seed = args.seed.or(simulator_config.seed);

    log::info!(
        "Simulating {} decks with {:?} (seed {:?})",
        number_of_decks,
        policy,
        seed
    );
    let report = simulation::simulate_decks(&rule, policy, number_of_decks, seed, args.trace)?;
    simulation::print_report(policy, &report);
    Ok(())
}
