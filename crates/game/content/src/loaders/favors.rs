//! Favor catalog loader.

use std::path::Path;

use orlog_core::FavorDefinition;
use serde::{Deserialize, Serialize};

use crate::catalog::FavorCatalog;
use crate::loaders::{LoadResult, read_file};

/// Favor catalog structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FavorCatalogFile {
    pub favors: Vec<FavorDefinition>,
}

/// Loader for favor catalogs from RON files.
pub struct FavorLoader;

impl FavorLoader {
    pub fn load(path: &Path) -> LoadResult<FavorCatalog> {
        let content = read_file(path)?;
        Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("Invalid favor catalog {}: {}", path.display(), e))
    }

    pub fn parse(content: &str) -> LoadResult<FavorCatalog> {
        let file: FavorCatalogFile = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse favor catalog RON: {}", e))?;
        Ok(FavorCatalog::new(file.favors)?)
    }
}
