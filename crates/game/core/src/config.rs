/// Match configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GameConfig {
    /// Starting and maximum health of each player.
    pub max_health: u32,
    /// Number of dice in each player's pool.
    pub dice_per_player: usize,
    /// Roll sub-phases per round before resolution.
    pub rolls_per_round: u32,
    /// Entries kept in the event log before the oldest are dropped.
    pub log_capacity: usize,
}

impl GameConfig {
    // ===== compile-time constants =====
    /// Favors each player brings into a match.
    pub const LOADOUT_SIZE: usize = 3;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_MAX_HEALTH: u32 = 15;
    pub const DEFAULT_DICE_PER_PLAYER: usize = 6;
    pub const DEFAULT_ROLLS_PER_ROUND: u32 = 3;
    pub const DEFAULT_LOG_CAPACITY: usize = 300;

    pub fn new() -> Self {
        Self {
            max_health: Self::DEFAULT_MAX_HEALTH,
            dice_per_player: Self::DEFAULT_DICE_PER_PLAYER,
            rolls_per_round: Self::DEFAULT_ROLLS_PER_ROUND,
            log_capacity: Self::DEFAULT_LOG_CAPACITY,
        }
    }

    pub fn with_dice_per_player(mut self, dice_per_player: usize) -> Self {
        self.dice_per_player = dice_per_player;
        self
    }

    pub fn with_max_health(mut self, max_health: u32) -> Self {
        self.max_health = max_health;
        self
    }

    pub fn with_log_capacity(mut self, log_capacity: usize) -> Self {
        self.log_capacity = log_capacity;
        self
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}
