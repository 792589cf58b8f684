//! Content factory for building catalogs and configuration from data files.

use std::path::{Path, PathBuf};

use orlog_core::GameConfig;

use crate::catalog::FavorCatalog;
use crate::loaders::{ConfigLoader, FavorLoader, LoadResult};

/// Content factory that loads all game content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml
/// └── favors.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load game configuration from `config.toml`.
    pub fn load_config(&self) -> LoadResult<GameConfig> {
        ConfigLoader::load(&self.data_dir.join("config.toml"))
    }

    /// Load the favor catalog from `favors.ron`.
    pub fn load_favors(&self) -> LoadResult<FavorCatalog> {
        FavorLoader::load(&self.data_dir.join("favors.ron"))
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}
