//! Timed modifiers attached to characters.
//!
//! An [`Effect`] applies its magnitude to every targeted attribute each time it
//! is activated, then counts one turn off its remaining duration. Effects are
//! created by skill resolution, stored on the receiving character, and purged
//! once inactive.

use crate::attribute::{AttributeSet, AttributeTable};

/// Shape of an effect, independent of how many turns it has left.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EffectKind {
    /// Applies once and expires (heals, burst damage).
    Instant {
        attributes: AttributeSet,
        magnitude: i32,
    },
    /// Reapplies on every activation for `turns` activations.
    OverTime {
        attributes: AttributeSet,
        magnitude: i32,
        turns: u32,
    },
}

impl EffectKind {
    pub const fn attributes(&self) -> AttributeSet {
        match *self {
            Self::Instant { attributes, .. } | Self::OverTime { attributes, .. } => attributes,
        }
    }

    pub const fn magnitude(&self) -> i32 {
        match *self {
            Self::Instant { magnitude, .. } | Self::OverTime { magnitude, .. } => magnitude,
        }
    }

    /// Number of activations a fresh effect of this kind lasts.
    pub const fn initial_duration(&self) -> u32 {
        match *self {
            Self::Instant { .. } => 1,
            Self::OverTime { turns, .. } => turns,
        }
    }

    /// Classifies raw effect data: one activation or fewer is instant.
    pub const fn from_parts(attributes: AttributeSet, magnitude: i32, duration: u32) -> Self {
        if duration <= 1 {
            Self::Instant {
                attributes,
                magnitude,
            }
        } else {
            Self::OverTime {
                attributes,
                magnitude,
                turns: duration,
            }
        }
    }
}

/// A timed modifier owned by the character it is attached to.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Effect {
    name: String,
    kind: EffectKind,
    remaining_duration: u32,
}

impl Effect {
    /// Creates a fresh effect with its kind's full duration.
    pub fn new(name: impl Into<String>, kind: EffectKind) -> Self {
        Self {
            name: name.into(),
            remaining_duration: kind.initial_duration(),
            kind,
        }
    }

    /// Rebuilds an effect from persisted parts, keeping `duration` as the
    /// remaining activation count.
    pub fn from_parts(
        name: impl Into<String>,
        attributes: AttributeSet,
        magnitude: i32,
        duration: u32,
    ) -> Self {
        Self {
            name: name.into(),
            kind: EffectKind::from_parts(attributes, magnitude, duration),
            remaining_duration: duration,
        }
    }

    /// Restores `amount` health once.
    pub fn heal(amount: i32) -> Self {
        Self::new(
            "Heal",
            EffectKind::Instant {
                attributes: AttributeSet::HP,
                magnitude: amount,
            },
        )
    }

    /// Removes `amount` health once.
    pub fn strike(amount: i32) -> Self {
        Self::new(
            "Strike",
            EffectKind::Instant {
                attributes: AttributeSet::HP,
                magnitude: -amount,
            },
        )
    }

    /// Fire damage over time.
    pub fn burn(per_turn: i32, turns: u32) -> Self {
        Self::damage_over_time("Burn", per_turn, turns)
    }

    /// Poison damage over time.
    pub fn poison(per_turn: i32, turns: u32) -> Self {
        Self::damage_over_time("Poison", per_turn, turns)
    }

    /// Health recovered over time.
    pub fn regeneration(per_turn: i32, turns: u32) -> Self {
        Self::new(
            "Regeneration",
            EffectKind::OverTime {
                attributes: AttributeSet::HP,
                magnitude: per_turn,
                turns,
            },
        )
    }

    /// Mana recovered over time.
    pub fn mana_surge(per_turn: i32, turns: u32) -> Self {
        Self::new(
            "Mana Surge",
            EffectKind::OverTime {
                attributes: AttributeSet::MANA,
                magnitude: per_turn,
                turns,
            },
        )
    }

    fn damage_over_time(name: &str, per_turn: i32, turns: u32) -> Self {
        Self::new(
            name,
            EffectKind::OverTime {
                attributes: AttributeSet::HP,
                magnitude: -per_turn,
                turns,
            },
        )
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub const fn kind(&self) -> EffectKind {
        self.kind
    }

    pub const fn attributes(&self) -> AttributeSet {
        self.kind.attributes()
    }

    pub const fn magnitude(&self) -> i32 {
        self.kind.magnitude()
    }

    pub const fn remaining_duration(&self) -> u32 {
        self.remaining_duration
    }

    /// True while at least one activation remains.
    pub const fn is_active(&self) -> bool {
        self.remaining_duration > 0
    }

    /// Applies the magnitude to every targeted attribute present on `target`,
    /// then consumes one activation.
    pub fn activate(&mut self, target: &mut AttributeTable) {
        let magnitude = f64::from(self.magnitude());
        for kind in self.attributes().kinds() {
            if let Some(attribute) = target.get_mut(kind) {
                attribute.apply_change(magnitude);
            }
        }
        self.remaining_duration = self.remaining_duration.saturating_sub(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attribute::AttributeKind;

    #[test]
    fn instant_effect_applies_once() {
        let mut table = AttributeTable::standard(100, 100, 10, 10);
        table.require_mut(AttributeKind::Hp).unwrap().apply_change(-60.0);

        let mut heal = Effect::heal(50);
        assert!(heal.is_active());

        heal.activate(&mut table);
        assert!(!heal.is_active());
        assert_eq!(table.value(AttributeKind::Hp), Some(90));
    }

    #[test]
    fn over_time_effect_ticks_down() {
        let mut table = AttributeTable::standard(100, 100, 10, 10);
        let mut burn = Effect::burn(5, 3);

        for expected_left in [2, 1, 0] {
            burn.activate(&mut table);
            assert_eq!(burn.remaining_duration(), expected_left);
        }
        assert!(!burn.is_active());
        assert_eq!(table.value(AttributeKind::Hp), Some(85));
    }

    #[test]
    fn multi_attribute_effect_hits_each_kind() {
        let mut table = AttributeTable::standard(100, 100, 10, 10);
        let mut drain = Effect::new(
            "Drain",
            EffectKind::Instant {
                attributes: AttributeSet::HP | AttributeSet::MANA,
                magnitude: -10,
            },
        );

        drain.activate(&mut table);
        assert_eq!(table.value(AttributeKind::Hp), Some(90));
        assert_eq!(table.value(AttributeKind::Mana), Some(90));
        assert_eq!(table.value(AttributeKind::Atk), Some(10));
    }

    #[test]
    fn missing_attributes_are_skipped() {
        let mut table = AttributeTable::empty();
        let mut surge = Effect::mana_surge(5, 2);
        surge.activate(&mut table);
        assert_eq!(surge.remaining_duration(), 1);
        assert!(table.is_empty());
    }

    #[test]
    fn parts_classify_duration() {
        let single = Effect::from_parts("Heal", AttributeSet::HP, 50, 1);
        assert!(matches!(single.kind(), EffectKind::Instant { .. }));

        let lingering = Effect::from_parts("Burn", AttributeSet::HP, -5, 4);
        assert_eq!(
            lingering.kind(),
            EffectKind::OverTime {
                attributes: AttributeSet::HP,
                magnitude: -5,
                turns: 4
            }
        );
        assert_eq!(lingering, Effect::burn(5, 4));
    }
}
