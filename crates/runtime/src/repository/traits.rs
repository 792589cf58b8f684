//! Repository contract for saving and loading match snapshots.

use orlog_core::MatchState;

use super::Result;

/// Repository for match state persistence, indexed by round.
///
/// A snapshot saved under round `n` is the state right after round `n` was
/// resolved; round 0 holds the state after loadouts were fixed. Snapshots
/// round-trip losslessly: counters, health, tokens, loadouts, dice faces,
/// lock flags and the event log.
pub trait StateRepository: Send + Sync {
    /// Save a snapshot under `round`, replacing any existing one.
    fn save(&self, round: u32, state: &MatchState) -> Result<()>;

    /// Load the snapshot saved under `round`.
    fn load(&self, round: u32) -> Result<Option<MatchState>>;

    /// Check if a snapshot exists
    fn exists(&self, round: u32) -> bool;

    /// Delete a snapshot
    fn delete(&self, round: u32) -> Result<()>;

    /// List all saved rounds in ascending order
    fn list_rounds(&self) -> Result<Vec<u32>> {
        Ok(vec![])
    }

    /// Load the snapshot with the highest round number.
    fn latest(&self) -> Result<Option<MatchState>> {
        match self.list_rounds()?.last() {
            Some(&round) => self.load(round),
            None => Ok(None),
        }
    }
}
