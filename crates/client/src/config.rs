//! Client configuration read from the process environment.
use std::env;
use std::path::PathBuf;

/// Configuration for a headless match run.
#[derive(Clone, Debug)]
pub struct CliConfig {
    pub seed: u64,
    pub max_rounds: u32,
    pub data_dir: Option<PathBuf>,
    pub save_dir: Option<PathBuf>,
    pub player_names: [String; 2],
    /// Seat one never locks dice or uses favors.
    pub passive_player_one: bool,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            seed: 0,
            max_rounds: orlog_runtime::RuntimeConfig::DEFAULT_MAX_ROUNDS,
            data_dir: None,
            save_dir: None,
            player_names: ["Player 1".to_string(), "Player 2".to_string()],
            passive_player_one: false,
        }
    }
}

impl CliConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `ORLOG_SEED` - Match seed (default: random)
    /// - `ORLOG_MAX_ROUNDS` - Round cap (default: 100)
    /// - `ORLOG_DATA_DIR` - Directory holding `config.toml` and `favors.ron`
    ///   (default: built-in content)
    /// - `ORLOG_SAVE_DIR` - Directory for round snapshots (default: no saves)
    /// - `ORLOG_PLAYER_ONE`, `ORLOG_PLAYER_TWO` - Player names
    /// - `ORLOG_PASSIVE_PLAYER_ONE` - Make seat one a passive player
    pub fn from_env() -> Self {
        Self::from_vars(|key| env::var(key).ok())
    }

    pub fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let read = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        let mut config = Self::default();

        config.seed = read("ORLOG_SEED")
            .and_then(|value| parse(&value))
            .unwrap_or_else(rand::random);

        if let Some(rounds) = read("ORLOG_MAX_ROUNDS").and_then(|value| parse::<u32>(&value)) {
            config.max_rounds = rounds.max(1);
        }

        config.data_dir = read("ORLOG_DATA_DIR").map(PathBuf::from);
        config.save_dir = read("ORLOG_SAVE_DIR").map(PathBuf::from);

        if let Some(name) = read("ORLOG_PLAYER_ONE") {
            config.player_names[0] = name;
        }
        if let Some(name) = read("ORLOG_PLAYER_TWO") {
            config.player_names[1] = name;
        }

        // A bare variable counts as "true"
        config.passive_player_one = match read("ORLOG_PASSIVE_PLAYER_ONE") {
            Some(value) => parse::<bool>(&value).unwrap_or(true),
            None => lookup("ORLOG_PASSIVE_PLAYER_ONE").is_some(),
        };

        config
    }
}

fn parse<T>(value: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    value.trim().parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> CliConfig {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        CliConfig::from_vars(|key| vars.get(key).cloned())
    }

    #[test]
    fn reads_all_variables() {
        let config = config_from(&[
            ("ORLOG_SEED", "1234"),
            ("ORLOG_MAX_ROUNDS", "12"),
            ("ORLOG_DATA_DIR", "content"),
            ("ORLOG_SAVE_DIR", "saves"),
            ("ORLOG_PLAYER_ONE", "Ragnar"),
            ("ORLOG_PLAYER_TWO", "Astrid"),
            ("ORLOG_PASSIVE_PLAYER_ONE", "false"),
        ]);
        assert_eq!(config.seed, 1234);
        assert_eq!(config.max_rounds, 12);
        assert_eq!(config.data_dir, Some(PathBuf::from("content")));
        assert_eq!(config.save_dir, Some(PathBuf::from("saves")));
        assert_eq!(config.player_names, ["Ragnar".to_string(), "Astrid".to_string()]);
        assert!(!config.passive_player_one);
    }

    #[test]
    fn falls_back_to_defaults() {
        let config = config_from(&[("ORLOG_MAX_ROUNDS", "zero"), ("ORLOG_DATA_DIR", " ")]);
        assert_eq!(config.max_rounds, orlog_runtime::RuntimeConfig::DEFAULT_MAX_ROUNDS);
        assert_eq!(config.data_dir, None);
        assert_eq!(config.player_names[0], "Player 1");
        assert!(!config.passive_player_one);
    }

    #[test]
    fn bare_passive_flag_is_true() {
        assert!(config_from(&[("ORLOG_PASSIVE_PLAYER_ONE", "")]).passive_player_one);
        assert_eq!(config_from(&[("ORLOG_MAX_ROUNDS", "0")]).max_rounds, 1);
    }
}
