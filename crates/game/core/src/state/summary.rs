use core::fmt;

/// Combat tallies for one attacking side of a resolved round.
///
/// Counts are taken after pre-combat favors have mutated the face counts.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SideTally {
    pub name: String,
    pub melee: u32,
    pub ranged: u32,
    /// Shields the opponent had against this side's melee.
    pub opponent_shields: u32,
    /// Helmets the opponent had against this side's ranged.
    pub opponent_helmets: u32,
    /// Base combat damage this side dealt (favor damage excluded).
    pub damage: u32,
}

impl SideTally {
    pub fn melee_damage(&self) -> u32 {
        self.melee.saturating_sub(self.opponent_shields)
    }

    pub fn ranged_damage(&self) -> u32 {
        self.ranged.saturating_sub(self.opponent_helmets)
    }
}

/// Display cache of the last resolved round. Not authoritative state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoundSummary {
    pub round: u32,
    /// Indexed by [`super::Seat::index`].
    pub sides: [SideTally; 2],
}

impl fmt::Display for RoundSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b] = &self.sides;
        write!(
            f,
            "R{}: {} dealt {} (M:{} vs S:{}, R:{} vs H:{}) | {} dealt {} (M:{} vs S:{}, R:{} vs H:{})",
            self.round,
            a.name,
            a.damage,
            a.melee,
            a.opponent_shields,
            a.ranged,
            a.opponent_helmets,
            b.name,
            b.damage,
            b.melee,
            b.opponent_shields,
            b.ranged,
            b.opponent_helmets,
        )
    }
}
