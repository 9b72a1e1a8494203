//! Experience and level tracking.
//!
//! Instead of invoking a callback that reaches back into its owner,
//! [`ExperienceSystem::gain_experience`] returns one [`LevelUpEvent`] per level
//! gained. The caller decides how to rebalance the character, typically via
//! [`Character::apply_level_up`](crate::Character::apply_level_up).

use crate::config::GameConfig;

/// Experience thresholds per level.
///
/// `threshold(level) = base * level²`: the cumulative experience required to
/// advance past `level`. Strictly increasing for every level >= 1.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LevelCurve {
    base: u64,
}

impl LevelCurve {
    /// Largest base whose thresholds up to `MAX_LEVEL` fit in a `u64`.
    pub const MAX_BASE: u64 =
        u64::MAX / (GameConfig::MAX_LEVEL as u64 * GameConfig::MAX_LEVEL as u64);

    /// Creates a curve, clamping `base` into `1..=MAX_BASE`.
    pub const fn new(base: u64) -> Self {
        let base = if base == 0 {
            1
        } else if base > Self::MAX_BASE {
            Self::MAX_BASE
        } else {
            base
        };
        Self { base }
    }

    pub const fn base(&self) -> u64 {
        self.base
    }

    /// Cumulative experience needed to leave `level`.
    pub const fn threshold(&self, level: u32) -> u64 {
        let level = level as u64;
        self.base.saturating_mul(level.saturating_mul(level))
    }
}

impl Default for LevelCurve {
    fn default() -> Self {
        Self::new(GameConfig::DEFAULT_LEVEL_THRESHOLD_BASE)
    }
}

/// Emitted once for every level gained.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LevelUpEvent {
    pub new_level: u32,
}

/// Counter, level and next-threshold tracker.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExperienceSystem {
    experience: u64,
    level: u32,
    next_level_threshold: u64,
    curve: LevelCurve,
}

impl ExperienceSystem {
    /// Level 1 with no experience on the default curve.
    pub fn new() -> Self {
        Self::with_curve(LevelCurve::default())
    }

    pub fn with_curve(curve: LevelCurve) -> Self {
        Self::restore(0, 1, curve)
    }

    /// Rebuilds a tracker at `level` holding `experience`.
    ///
    /// Level 0 is lifted to 1 and levels above the cap are clamped to it.
    pub fn restore(experience: u64, level: u32, curve: LevelCurve) -> Self {
        let level = level.clamp(1, GameConfig::MAX_LEVEL);
        Self {
            experience,
            level,
            next_level_threshold: curve.threshold(level),
            curve,
        }
    }

    pub const fn experience(&self) -> u64 {
        self.experience
    }

    pub const fn level(&self) -> u32 {
        self.level
    }

    /// Experience at which the next level is reached, `None` at the level cap.
    pub const fn next_level_threshold(&self) -> Option<u64> {
        if self.level >= GameConfig::MAX_LEVEL {
            None
        } else {
            Some(self.next_level_threshold)
        }
    }

    pub const fn curve(&self) -> LevelCurve {
        self.curve
    }

    /// Adds experience and advances as many levels as the total now covers.
    pub fn gain_experience(&mut self, amount: u64) -> Vec<LevelUpEvent> {
        self.experience = self.experience.saturating_add(amount);

        let mut events = Vec::new();
        while self.level < GameConfig::MAX_LEVEL && self.experience >= self.next_level_threshold {
            self.level += 1;
            self.next_level_threshold = self.curve.threshold(self.level);
            events.push(LevelUpEvent {
                new_level: self.level,
            });
        }
        events
    }
}

impl Default for ExperienceSystem {
    fn default() -> Self {
        Self::new()
    }
}
