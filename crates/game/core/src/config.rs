use crate::experience::LevelCurve;

/// Game configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GameConfig {
    /// Experience needed to leave level 1; later thresholds scale with level².
    pub level_threshold_base: u64,
    /// Mana restored to both combatants after each full round.
    pub mana_regen_per_round: i32,
    /// Rounds after which a battle is abandoned as a stalemate.
    pub max_rounds: u32,
    /// Experience granted to the winner of a battle.
    pub victory_experience: u64,
}

impl GameConfig {
    // ===== compile-time constants used as type parameters =====
    pub const MAX_SKILLS: usize = 4;
    pub const MAX_LEVEL: u32 = 99;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_LEVEL_THRESHOLD_BASE: u64 = 100;
    pub const DEFAULT_MANA_REGEN_PER_ROUND: i32 = 1;
    pub const DEFAULT_MAX_ROUNDS: u32 = 200;
    pub const DEFAULT_VICTORY_EXPERIENCE: u64 = 50;

    pub fn new() -> Self {
        Self {
            level_threshold_base: Self::DEFAULT_LEVEL_THRESHOLD_BASE,
            mana_regen_per_round: Self::DEFAULT_MANA_REGEN_PER_ROUND,
            max_rounds: Self::DEFAULT_MAX_ROUNDS,
            victory_experience: Self::DEFAULT_VICTORY_EXPERIENCE,
        }
    }

    /// Level curve derived from `level_threshold_base`.
    pub fn level_curve(&self) -> LevelCurve {
        LevelCurve::new(self.level_threshold_base)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}
