use crate::face::Face;
use crate::rng::{RngOracle, RollKey, roll_seed};

use super::{DiceError, Die};

/// Ordered collection of dice belonging to one player.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DicePool {
    dice: Vec<Die>,
}

impl DicePool {
    /// Creates a pool of `size` unrolled, unlocked dice.
    pub fn new(size: usize) -> Self {
        Self {
            dice: vec![Die::new(); size],
        }
    }

    /// Creates an unlocked pool already showing the given faces.
    pub fn from_faces(faces: impl IntoIterator<Item = Face>) -> Self {
        Self {
            dice: faces.into_iter().map(Die::showing).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.dice.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dice.is_empty()
    }

    /// Rolls every unlocked die and returns the faces of the whole pool in order.
    ///
    /// Locked dice keep their previous face.
    pub fn roll_unlocked<R>(&mut self, rng: &R, game_seed: u64, key: RollKey) -> Vec<Option<Face>>
    where
        R: RngOracle + ?Sized,
    {
        self.dice
            .iter_mut()
            .enumerate()
            .map(|(slot, die)| die.roll(rng, roll_seed(game_seed, key, slot)))
            .collect()
    }

    /// Flips the lock on one slot.
    pub fn toggle(&mut self, index: usize) -> Result<(), DiceError> {
        let die = self.die_mut(index)?;
        let locked = die.is_locked();
        die.set_locked(!locked);
        Ok(())
    }

    pub fn set_locked(&mut self, index: usize, locked: bool) -> Result<(), DiceError> {
        self.die_mut(index)?.set_locked(locked);
        Ok(())
    }

    pub fn is_locked(&self, index: usize) -> Result<bool, DiceError> {
        self.dice
            .get(index)
            .map(Die::is_locked)
            .ok_or(DiceError::IndexOutOfRange {
                index,
                len: self.dice.len(),
            })
    }

    /// Snapshot of the faces currently shown. Unrolled dice are `None`.
    pub fn current_faces(&self) -> Vec<Option<Face>> {
        self.dice.iter().map(Die::face).collect()
    }

    pub fn clear_locks(&mut self) {
        for die in &mut self.dice {
            die.set_locked(false);
        }
    }

    pub fn locked_count(&self) -> usize {
        self.dice.iter().filter(|die| die.is_locked()).count()
    }

    pub fn dice(&self) -> &[Die] {
        &self.dice
    }

    fn die_mut(&mut self, index: usize) -> Result<&mut Die, DiceError> {
        let len = self.dice.len();
        self.dice
            .get_mut(index)
            .ok_or(DiceError::IndexOutOfRange { index, len })
    }
}
