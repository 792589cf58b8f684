//! Snapshot history kept in memory.

use std::collections::BTreeMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use orlog_core::MatchState;

use crate::repository::{RepositoryError, Result, StateRepository};

type History = BTreeMap<u32, MatchState>;

/// Round-ordered snapshot history for tests and local runs.
///
/// Round 0 is the state right after both loadouts were fixed; every later
/// key is the state after that round resolved. Keys stay ordered, so the
/// newest snapshot and rewinds are map operations rather than directory scans.
#[derive(Default)]
pub struct InMemoryStateRepo {
    history: RwLock<History>,
}

impl InMemoryStateRepo {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a history from a match whose loadouts are already fixed.
    pub fn from_loadouts(state: MatchState) -> Self {
        Self {
            history: RwLock::new(History::from([(0, state)])),
        }
    }

    /// The snapshot taken once loadouts were fixed, if any.
    pub fn loadout_snapshot(&self) -> Result<Option<MatchState>> {
        self.load(0)
    }

    /// Drops every snapshot after `round` so play can resume from it.
    /// Returns how many snapshots were discarded.
    pub fn rewind_to(&self, round: u32) -> Result<usize> {
        let Some(next) = round.checked_add(1) else {
            return Ok(0);
        };
        let discarded = self.write()?.split_off(&next);
        Ok(discarded.len())
    }

    pub fn len(&self) -> usize {
        self.read().map(|history| history.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, History>> {
        self.history
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, History>> {
        self.history
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)
    }
}

impl StateRepository for InMemoryStateRepo {
    fn save(&self, round: u32, state: &MatchState) -> Result<()> {
        self.write()?.insert(round, state.clone());
        Ok(())
    }

    fn load(&self, round: u32) -> Result<Option<MatchState>> {
        Ok(self.read()?.get(&round).cloned())
    }

    fn exists(&self, round: u32) -> bool {
        self.read()
            .map(|history| history.contains_key(&round))
            .unwrap_or(false)
    }

    fn delete(&self, round: u32) -> Result<()> {
        self.write()?.remove(&round);
        Ok(())
    }

    fn list_rounds(&self) -> Result<Vec<u32>> {
        Ok(self.read()?.keys().copied().collect())
    }

    fn latest(&self) -> Result<Option<MatchState>> {
        Ok(self
            .read()?
            .last_key_value()
            .map(|(_, state)| state.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use orlog_core::GameConfig;

    fn snapshot(seed: u64) -> MatchState {
        MatchState::new(GameConfig::default(), seed, "Ragnar", "Astrid")
    }

    #[test]
    fn latest_is_the_highest_round() {
        let repo = InMemoryStateRepo::from_loadouts(snapshot(1));
        repo.save(4, &snapshot(4)).unwrap();
        repo.save(2, &snapshot(2)).unwrap();

        assert_eq!(repo.list_rounds().unwrap(), vec![0, 2, 4]);
        assert_eq!(repo.latest().unwrap().map(|s| s.game_seed), Some(4));

        repo.delete(4).unwrap();
        assert!(!repo.exists(4));
        assert_eq!(repo.latest().unwrap().map(|s| s.game_seed), Some(2));
    }

    #[test]
    fn rewind_keeps_loadout_snapshot() {
        let repo = InMemoryStateRepo::from_loadouts(snapshot(1));
        for round in 1..=5 {
            repo.save(round, &snapshot(u64::from(round) + 10)).unwrap();
        }

        assert_eq!(repo.rewind_to(2).unwrap(), 3);
        assert_eq!(repo.len(), 3);
        assert_eq!(repo.latest().unwrap().map(|s| s.game_seed), Some(12));
        assert_eq!(repo.loadout_snapshot().unwrap().map(|s| s.game_seed), Some(1));

        assert_eq!(repo.rewind_to(u32::MAX).unwrap(), 0);
    }

    #[test]
    fn empty_history_has_no_latest() {
        let repo = InMemoryStateRepo::new();
        assert!(repo.is_empty());
        assert!(repo.latest().unwrap().is_none());
        assert!(repo.loadout_snapshot().unwrap().is_none());
    }
}
