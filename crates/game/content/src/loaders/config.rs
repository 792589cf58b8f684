//! Game configuration loader.

use std::path::Path;

use orlog_core::GameConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for [`GameConfig`] from TOML files. Missing keys fall back to defaults.
pub struct ConfigLoader;

impl ConfigLoader {
    pub fn load(path: &Path) -> LoadResult<GameConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<GameConfig> {
        let config: GameConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;

        if config.dice_per_player == 0 {
            anyhow::bail!("dice_per_player must be at least 1");
        }
        if config.rolls_per_round == 0 {
            anyhow::bail!("rolls_per_round must be at least 1");
        }
        if config.max_health == 0 {
            anyhow::bail!("max_health must be at least 1");
        }
        Ok(config)
    }
}
