//! RNG oracle for deterministic dice rolls.
//!
//! Dice never hold their own random source. Each roll is derived from a seed
//! that mixes the match seed with the round, roll sub-phase, seat and slot,
//! so a match replays identically from its seed.

/// RNG oracle for deterministic random number generation.
///
/// Implementations must be deterministic and produce the same values
/// given the same seed.
pub trait RngOracle: Send + Sync {
    /// Generate a random u32 value from a seed.
    fn next_u32(&self, seed: u64) -> u32;

    /// Pick an index in `0..len`. Returns 0 for an empty range.
    fn pick_index(&self, seed: u64, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        (self.next_u32(seed) as usize) % len
    }
}

/// PCG random number generator (PCG-XSH-RR, 64-bit state, 32-bit output).
///
/// - **Deterministic**: Same seed always produces same output
/// - **Small state**: Only 64 bits
/// - Reference: <https://www.pcg-random.org/>
#[derive(Clone, Copy, Debug, Default)]
pub struct PcgRng;

impl PcgRng {
    const MULTIPLIER: u64 = 6364136223846793005;
    const INCREMENT: u64 = 1442695040888963407;

    #[inline]
    fn step(state: u64) -> u64 {
        state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT)
    }

    #[inline]
    fn output(state: u64) -> u32 {
        let xorshifted = (((state >> 18) ^ state) >> 27) as u32;
        let rot = (state >> 59) as u32;
        xorshifted.rotate_right(rot)
    }
}

impl RngOracle for PcgRng {
    fn next_u32(&self, seed: u64) -> u32 {
        Self::output(Self::step(seed))
    }
}

/// Identifies one die roll within a match.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RollKey {
    pub round: u32,
    pub roll_phase: u32,
    pub seat: u8,
}

/// Seed for a single die slot of a roll.
///
/// Mixing constants are SplitMix64 / FxHash multipliers followed by a
/// murmur-style avalanche.
pub fn roll_seed(game_seed: u64, key: RollKey, slot: usize) -> u64 {
    let mut hash = game_seed;
    hash ^= u64::from(key.round).wrapping_mul(0x9e3779b97f4a7c15);
    hash ^= u64::from(key.roll_phase).wrapping_mul(0x517cc1b727220a95);
    hash ^= u64::from(key.seat).wrapping_mul(0x85ebca6b);
    hash ^= (slot as u64).wrapping_mul(0xc2b2ae3d27d4eb4f);

    hash ^= hash >> 33;
    hash = hash.wrapping_mul(0xff51afd7ed558ccd);
    hash ^= hash >> 33;
    hash
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_value() {
        let rng = PcgRng;
        assert_eq!(rng.next_u32(42), rng.next_u32(42));
    }

    #[test]
    fn pick_index_stays_in_range() {
        let rng = PcgRng;
        for seed in 0..500 {
            assert!(rng.pick_index(seed, 10) < 10);
        }
        assert_eq!(rng.pick_index(7, 0), 0);
    }

    #[test]
    fn seeds_differ_per_slot_and_seat() {
        let key = RollKey {
            round: 1,
            roll_phase: 1,
            seat: 0,
        };
        let other_seat = RollKey { seat: 1, ..key };
        assert_ne!(roll_seed(9, key, 0), roll_seed(9, key, 1));
        assert_ne!(roll_seed(9, key, 0), roll_seed(9, other_seat, 0));
    }
}
