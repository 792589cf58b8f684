use core::fmt;

/// Strength level of a favor use. Stored zero-based, displayed one-based.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "u8", into = "u8"))]
pub struct Tier(u8);

impl Tier {
    pub const COUNT: usize = 3;

    pub const ONE: Tier = Tier(0);
    pub const TWO: Tier = Tier(1);
    pub const THREE: Tier = Tier(2);

    pub const ALL: [Tier; Self::COUNT] = [Tier::ONE, Tier::TWO, Tier::THREE];

    /// Zero-based index into a favor's cost/magnitude tables.
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Lowers the tier by `steps`. Returns `None` when the reduction goes
    /// below the first tier.
    pub fn lowered_by(self, steps: u32) -> Option<Tier> {
        u32::from(self.0)
            .checked_sub(steps)
            .map(|t| Tier(t as u8))
    }
}

/// Raised when a tier index outside `0..=2` is requested.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[error("tier index {0} is out of range (expected 0..=2)")]
pub struct InvalidTier(pub u8);

impl TryFrom<u8> for Tier {
    type Error = InvalidTier;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if (value as usize) < Self::COUNT {
            Ok(Tier(value))
        } else {
            Err(InvalidTier(value))
        }
    }
}

impl From<Tier> for u8 {
    fn from(tier: Tier) -> u8 {
        tier.0
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Tier {}", self.0 + 1)
    }
}
