use anyhow::{anyhow, bail, Context};
use count_trainer::{strategy::PlayerPolicy, Rank, Rule};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

pub const DEFAULT_CONFIG_PATH: &str = "~/.count_trainer.yml";
const DEFAULT_CONFIG_FILE_NAME: &str = ".count_trainer.yml";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub rule: ConfigRule,
    pub trainer: ConfigTrainer,
    pub advice_simulator: ConfigAdviceSimulator,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfigRule {
    pub dealer_stand_threshold: u8,
    pub basic_stand_threshold: u8,
    pub high_count_threshold: f64,
    pub high_count_stand_from: u8,
    pub low_count_threshold: f64,
    pub min_cards_to_play: usize,
    pub min_decks_remaining: f64,
}

impl Default for ConfigRule {
    fn default() -> Self {
        let rule = Rule::default();
        ConfigRule {
            dealer_stand_threshold: rule.dealer_stand_threshold,
            basic_stand_threshold: rule.basic_stand_threshold,
            high_count_threshold: rule.high_count_threshold,
            high_count_stand_from: rule.high_count_stand_from,
            low_count_threshold: rule.low_count_threshold,
            min_cards_to_play: rule.min_cards_to_play,
            min_decks_remaining: rule.min_decks_remaining,
        }
    }
}

impl TryFrom<ConfigRule> for Rule {
    type Error = anyhow::Error;

    fn try_from(config: ConfigRule) -> Result<Rule, Self::Error> {
        for (name, value) in [
            ("dealer_stand_threshold", config.dealer_stand_threshold),
            ("basic_stand_threshold", config.basic_stand_threshold),
            ("high_count_stand_from", config.high_count_stand_from),
        ] {
            if !(2..=21).contains(&value) {
                bail!("{} must be in [2, 21], got {}", name, value);
            }
        }
        // Four cards for the initial deal plus at least one to draw.
        if !(5..=52).contains(&config.min_cards_to_play) {
            bail!(
                "min_cards_to_play must be in [5, 52], got {}",
                config.min_cards_to_play
            );
        }
        if !(config.min_decks_remaining > 0.0 && config.min_decks_remaining <= 1.0) {
            bail!(
                "min_decks_remaining must be in (0, 1], got {}",
                config.min_decks_remaining
            );
        }

        Ok(Rule {
            dealer_stand_threshold: config.dealer_stand_threshold,
            basic_stand_threshold: config.basic_stand_threshold,
            high_count_threshold: config.high_count_threshold,
            high_count_stand_from: config.high_count_stand_from,
            low_count_threshold: config.low_count_threshold,
            min_cards_to_play: config.min_cards_to_play,
            min_decks_remaining: config.min_decks_remaining,
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfigTrainer {
    pub seed: Option<u64>,
    pub show_advice: bool,
}

impl Default for ConfigTrainer {
    fn default() -> Self {
        ConfigTrainer {
            seed: None,
            show_advice: true,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfigAdviceSimulator {
    pub number_of_decks: u64,
    pub player_policy: String,
    pub seed: Option<u64>,
}

impl Default for ConfigAdviceSimulator {
    fn default() -> Self {
        ConfigAdviceSimulator {
            number_of_decks: 1000,
            player_policy: String::from("FollowAdvice"),
            seed: None,
        }
    }
}

impl ConfigAdviceSimulator {
    pub fn get_player_policy(&self) -> Result<PlayerPolicy, serde::de::value::Error> {
        let policy = self.player_policy.parse()?;
        Ok(policy)
    }
}

/// Reads the content of a given config file and parses it to a Config.
pub fn parse_config_from_file(filename: &str) -> anyhow::Result<Config> {
    let file_content = fs::read_to_string(filename)
        .with_context(|| format!("Cannot read config file {}", filename))?;
    serde_yaml::from_str(&file_content)
        .with_context(|| format!("Cannot parse config file {}", filename))
}

/// Loads the config named on the command line.
///
/// The default path may be absent, in which case built-in defaults are used.
/// Any other path must exist.
pub fn load_config(path: &str) -> anyhow::Result<Config> {
    if path != DEFAULT_CONFIG_PATH {
        return parse_config_from_file(path);
    }

    let home_dir = home::home_dir().ok_or_else(|| anyhow!("Cannot find home directory"))?;
    let config_file_path = home_dir.join(DEFAULT_CONFIG_FILE_NAME);
    if !config_file_path.exists() {
        log::info!(
            "No config file at {}, using defaults",
            config_file_path.display()
        );
        return Ok(Config::default());
    }
    if config_file_path.is_dir() {
        bail!(
            "{} should be a file rather than a directory",
            config_file_path.display()
        );
    }
    parse_config_from_file(&path_to_string(config_file_path)?)
}

fn path_to_string(path: PathBuf) -> anyhow::Result<String> {
    path.into_os_string()
        .into_string()
        .map_err(|path| anyhow!("Config path {:?} is not valid UTF-8", path))
}

/// Parses ranks such as `10`, `k` or `A` given on the command line.
pub fn parse_ranks(ranks: &[String]) -> anyhow::Result<Vec<Rank>> {
    ranks
        .iter()
        .map(|rank| {
            rank.trim()
                .to_uppercase()
                .parse::<Rank>()
                .map_err(|_| anyhow!("Unknown rank {:?}", rank))
        })
        .collect()
}

pub fn init_logger(default_filter: &str) {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();
}
