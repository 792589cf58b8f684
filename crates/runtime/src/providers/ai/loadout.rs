//! Loadout selection.

use orlog_content::FavorCatalog;
use orlog_core::{EffectKind, FavorDefinition, GameConfig};

/// Aggressive loadout: direct damage favors first, then the lowest priority,
/// catalog order breaking the remaining ties.
pub fn aggressive_loadout(catalog: &FavorCatalog) -> Vec<FavorDefinition> {
    let mut ranked: Vec<&FavorDefinition> = catalog.iter().collect();
    ranked.sort_by_key(|favor| (favor.effect != EffectKind::Damage, favor.priority));
    ranked
        .into_iter()
        .take(GameConfig::LOADOUT_SIZE)
        .cloned()
        .collect()
}
