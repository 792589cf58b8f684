//! Bounded, most-recent-first event log.

use std::collections::VecDeque;
use std::fmt;

use crate::engine::FavorActivation;
use crate::favor::Tier;

use super::{RoundSummary, Seat};

/// Fixed-capacity log; pushing past capacity silently drops the oldest entry.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EventLog<T> {
    capacity: usize,
    entries: VecDeque<T>,
}

impl<T> EventLog<T> {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            entries: VecDeque::with_capacity(capacity.min(64)),
        }
    }

    pub fn push(&mut self, entry: T) {
        if self.capacity == 0 {
            return;
        }
        self.entries.push_front(entry);
        self.entries.truncate(self.capacity);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn newest(&self) -> Option<&T> {
        self.entries.front()
    }

    pub fn oldest(&self) -> Option<&T> {
        self.entries.back()
    }

    /// Iterates newest first.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.entries.iter()
    }
}

/// Structured entry of the match event log.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LogEntry {
    Loadout {
        player: String,
        favors: Vec<String>,
    },
    FavorSelected {
        player: String,
        favor: String,
        tier: Tier,
    },
    Roll {
        round: u32,
        roll_phase: u32,
    },
    FavorUsed(FavorActivation),
    Round(RoundSummary),
    Economy {
        /// Tokens from gold faces, per seat.
        gold: [u32; 2],
        /// Tokens taken by steal faces, per seat.
        stolen: [u32; 2],
        /// Net token change over the round, per seat.
        net: [i64; 2],
    },
    Winner {
        seat: Option<Seat>,
        player: Option<String>,
    },
}

impl fmt::Display for LogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogEntry::Loadout { player, favors } => {
                write!(f, "Loadout ({player}): {}", favors.join(", "))
            }
            LogEntry::FavorSelected {
                player,
                favor,
                tier,
            } => write!(f, "{player} selected favor: {favor} ({tier})"),
            LogEntry::Roll { round, roll_phase } => {
                write!(f, "Round {round}, roll {roll_phase}")
            }
            LogEntry::FavorUsed(activation) => activation.fmt(f),
            LogEntry::Round(summary) => summary.fmt(f),
            LogEntry::Economy { gold, stolen, net } => write!(
                f,
                "Favor summary (P1/P2): +gold {}/{}, steal {}/{}, net: {}/{}",
                gold[0], gold[1], stolen[0], stolen[1], net[0], net[1]
            ),
            LogEntry::Winner { player, .. } => match player {
                Some(name) => write!(f, "Winner: {name}"),
                None => f.write_str("Draw: both players fell"),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_newest_first_and_caps() {
        let mut log = EventLog::new(300);
        for i in 1..=305 {
            log.push(format!("msg-{i}"));
        }
        assert_eq!(log.len(), 300);
        assert_eq!(log.newest().map(String::as_str), Some("msg-305"));
        assert_eq!(log.oldest().map(String::as_str), Some("msg-6"));
    }

    #[test]
    fn zero_capacity_discards_everything() {
        let mut log = EventLog::new(0);
        log.push(1);
        assert!(log.is_empty());
    }

    #[test]
    fn economy_entry_renders() {
        let entry = LogEntry::Economy {
            gold: [2, 0],
            stolen: [1, 0],
            net: [3, -1],
        };
        assert_eq!(
            entry.to_string(),
            "Favor summary (P1/P2): +gold 2/0, steal 1/0, net: 3/-1"
        );
    }
}
