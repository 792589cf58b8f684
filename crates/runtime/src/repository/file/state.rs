//! File-based StateRepository implementation.

use std::fs;
use std::path::{Path, PathBuf};

use orlog_core::MatchState;
use sha2::{Digest, Sha256};

use crate::repository::{RepositoryError, Result, StateRepository};

const MAGIC: &[u8; 4] = b"ORLG";
const CHECKSUM_LEN: usize = 32;
const HEADER_LEN: usize = MAGIC.len() + CHECKSUM_LEN;

/// File-based implementation of StateRepository.
///
/// Stores match snapshots as individual files indexed by round.
///
/// # File Format
///
/// Snapshots are stored as `round_{n}.bin`:
///
/// ```text
/// [4 bytes "ORLG"][32 bytes SHA-256 of payload][bincode MatchState payload]
/// ```
///
/// Writes go to a temp file first and are renamed into place, so a crash
/// never leaves a half-written snapshot under a valid name.
pub struct FileStateRepository {
    base_dir: PathBuf,
}

impl FileStateRepository {
    /// Create a new file-based state repository.
    pub fn new(base_dir: impl AsRef<Path>) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        fs::create_dir_all(&base_dir).map_err(RepositoryError::Io)?;
        Ok(Self { base_dir })
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Get the path to a snapshot file.
    fn state_path(&self, round: u32) -> PathBuf {
        self.base_dir.join(format!("round_{}.bin", round))
    }

    fn encode(state: &MatchState) -> Result<Vec<u8>> {
        let payload =
            bincode::serialize(state).map_err(|e| RepositoryError::Serialization(e.to_string()))?;
        let checksum = Sha256::digest(&payload);

        let mut bytes = Vec::with_capacity(HEADER_LEN + payload.len());
        bytes.extend_from_slice(MAGIC);
        bytes.extend_from_slice(&checksum);
        bytes.extend_from_slice(&payload);
        Ok(bytes)
    }

    fn decode(bytes: &[u8]) -> Result<MatchState> {
        if bytes.len() < HEADER_LEN || &bytes[..MAGIC.len()] != MAGIC {
            return Err(RepositoryError::CorruptedData(
                "missing snapshot header".to_string(),
            ));
        }
        let (header, payload) = bytes.split_at(HEADER_LEN);
        let expected = &header[MAGIC.len()..];
        let actual = Sha256::digest(payload);
        if expected != actual.as_slice() {
            return Err(RepositoryError::CorruptedData(format!(
                "checksum mismatch: expected {}, found {}",
                hex::encode(expected),
                hex::encode(actual)
            )));
        }
        bincode::deserialize(payload).map_err(|e| RepositoryError::Serialization(e.to_string()))
    }
}

impl StateRepository for FileStateRepository {
    fn save(&self, round: u32, state: &MatchState) -> Result<()> {
        let path = self.state_path(round);
        let temp_path = path.with_extension("bin.tmp");

        let bytes = Self::encode(state)?;

        // Write to temp file
        fs::write(&temp_path, bytes).map_err(RepositoryError::Io)?;

        // Atomic rename
        fs::rename(&temp_path, &path).map_err(RepositoryError::Io)?;

        tracing::debug!("Saved round[{}] to {}", round, path.display());

        Ok(())
    }

    fn load(&self, round: u32) -> Result<Option<MatchState>> {
        let path = self.state_path(round);

        if !path.exists() {
            return Ok(None);
        }

        let bytes = fs::read(&path).map_err(RepositoryError::Io)?;
        let state = Self::decode(&bytes)?;

        tracing::debug!("Loaded round[{}] from {}", round, path.display());

        Ok(Some(state))
    }

    fn exists(&self, round: u32) -> bool {
        self.state_path(round).exists()
    }

    fn delete(&self, round: u32) -> Result<()> {
        let path = self.state_path(round);

        if path.exists() {
            fs::remove_file(&path).map_err(RepositoryError::Io)?;
            tracing::debug!("Deleted round[{}]", round);
        }

        Ok(())
    }

    fn list_rounds(&self) -> Result<Vec<u32>> {
        let mut rounds = Vec::new();

        let entries = fs::read_dir(&self.base_dir).map_err(RepositoryError::Io)?;

        for entry in entries {
            let entry = entry.map_err(RepositoryError::Io)?;
            let path = entry.path();

            if let Some(filename) = path.file_name().and_then(|s| s.to_str())
                && let Some(round_str) = filename
                    .strip_prefix("round_")
                    .and_then(|s| s.strip_suffix(".bin"))
                && let Ok(round) = round_str.parse::<u32>()
            {
                rounds.push(round);
            }
        }

        rounds.sort_unstable();
        Ok(rounds)
    }
}
