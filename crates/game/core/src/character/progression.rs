//! Attribute rebalancing on level-up.

use crate::attribute::{AttributeKind, AttributeTable};
use crate::experience::LevelUpEvent;

/// Rebalances a character's attributes when it gains a level.
///
/// Implementations must be deterministic: the same event applied to the same
/// table always yields the same result.
pub trait LevelUpPolicy {
    fn on_level_up(&self, event: LevelUpEvent, attributes: &mut AttributeTable);
}

/// Flat growth per level.
///
/// | Attribute | Max  | Current            |
/// |-----------|------|--------------------|
/// | HP        | +10  | reset to max       |
/// | MANA      | +10  | reset to max       |
/// | ATK       | +2   | +2                 |
/// | DEF       | +1   | +1                 |
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DefaultLevelUpPolicy;

impl DefaultLevelUpPolicy {
    const GROWTH: [(AttributeKind, i32); 4] = [
        (AttributeKind::Hp, 10),
        (AttributeKind::Mana, 10),
        (AttributeKind::Atk, 2),
        (AttributeKind::Def, 1),
    ];
}

impl LevelUpPolicy for DefaultLevelUpPolicy {
    fn on_level_up(&self, _event: LevelUpEvent, attributes: &mut AttributeTable) {
        for (kind, growth) in Self::GROWTH {
            let Some(attribute) = attributes.get_mut(kind) else {
                continue;
            };

            attribute.update_max_value(attribute.max_value().saturating_add(growth));
            match kind {
                AttributeKind::Hp | AttributeKind::Mana => attribute.reset_value(),
                AttributeKind::Atk | AttributeKind::Def => {
                    attribute.apply_change(f64::from(growth));
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_policy_grows_every_stat() {
        let mut table = AttributeTable::standard(100, 100, 10, 10);
        table
            .require_mut(AttributeKind::Hp)
            .unwrap()
            .apply_change(-40.0);

        DefaultLevelUpPolicy.on_level_up(LevelUpEvent { new_level: 2 }, &mut table);

        let snapshot: Vec<_> = table
            .iter()
            .map(|a| (a.kind(), a.value(), a.max_value()))
            .collect();
        assert_eq!(
            snapshot,
            vec![
                (AttributeKind::Hp, 110, 110),
                (AttributeKind::Mana, 110, 110),
                (AttributeKind::Atk, 12, 12),
                (AttributeKind::Def, 11, 11),
            ]
        );
    }

    #[test]
    fn policy_is_deterministic() {
        let mut a = AttributeTable::standard(50, 20, 5, 0);
        let mut b = a.clone();
        let event = LevelUpEvent { new_level: 3 };

        DefaultLevelUpPolicy.on_level_up(event, &mut a);
        DefaultLevelUpPolicy.on_level_up(event, &mut b);

        assert_eq!(a, b);
    }
}
