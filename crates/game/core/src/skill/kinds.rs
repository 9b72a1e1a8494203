//! Built-in skill catalog.

use crate::character::CharacterKinds;
use crate::effect::Effect;
use crate::rng::RngOracle;

use super::{Skill, SkillBehavior};

/// Names drawn by [`SkillKind::RandomAttack`].
pub const RANDOM_ATTACK_NAMES: [&str; 5] = [
    "Soul Eater",
    "Death's Scythe",
    "Death's Touch",
    "Soul Annihilator",
    "Darkness Hand of Death",
];

/// Inclusive force range for randomized skills.
const RANDOM_FORCE: (u32, u32) = (20, 100);

/// Named skill variants.
///
/// Variants with random parts draw them once, in [`build`](Self::build); the
/// resulting [`Skill`] is fixed afterwards.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum SkillKind {
    /// Free generic attack, force 20.
    BasicAttack,
    /// Free generic attack, force 30.
    Arrow,
    /// Wizard attack with random force that sets the target burning.
    Fireball,
    /// Wizard self-heal for 50 HP.
    Heal,
    /// Archer attack that poisons the target.
    PoisonDart,
    /// Wizard mana regeneration over three turns.
    Meditate,
    /// Generic attack with a random name and random force.
    RandomAttack,
}

impl SkillKind {
    /// Builds the skill, drawing any random parts from `rng`.
    pub fn build(self, rng: &mut impl RngOracle) -> Skill {
        match self {
            Self::BasicAttack => Skill::new("Basic Attack", SkillBehavior::GENERIC, 20),
            Self::Arrow => Skill::new("Arrow", SkillBehavior::GENERIC, 30),
            Self::Fireball => Skill::new(
                "Fireball",
                SkillBehavior::GENERIC | SkillBehavior::ENEMY_EFFECT,
                random_force(rng),
            )
            .with_mana_cost(20)
            .with_eligible(CharacterKinds::WIZARD)
            .with_effect(Effect::burn(5, 3)),
            Self::Heal => Skill::new("Heal", SkillBehavior::SELF_EFFECT, 0)
                .with_mana_cost(40)
                .with_eligible(CharacterKinds::WIZARD)
                .with_effect(Effect::heal(50)),
            Self::PoisonDart => Skill::new(
                "Poison Dart",
                SkillBehavior::GENERIC | SkillBehavior::ENEMY_EFFECT,
                10,
            )
            .with_mana_cost(15)
            .with_eligible(CharacterKinds::ARCHER)
            .with_effect(Effect::poison(4, 3)),
            Self::Meditate => Skill::new("Meditate", SkillBehavior::SELF_EFFECT, 0)
                .with_eligible(CharacterKinds::WIZARD)
                .with_effect(Effect::mana_surge(15, 3)),
            Self::RandomAttack => {
                let name = rng
                    .index(RANDOM_ATTACK_NAMES.len())
                    .map_or(RANDOM_ATTACK_NAMES[0], |i| RANDOM_ATTACK_NAMES[i]);
                Skill::new(name, SkillBehavior::GENERIC, random_force(rng))
            }
        }
    }
}

fn random_force(rng: &mut impl RngOracle) -> i32 {
    let (min, max) = RANDOM_FORCE;
    rng.range(min, max) as i32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::PcgRng;
    use strum::IntoEnumIterator;

    #[test]
    fn same_seed_builds_same_skill() {
        let first = SkillKind::RandomAttack.build(&mut PcgRng::new(11));
        let second = SkillKind::RandomAttack.build(&mut PcgRng::new(11));
        assert_eq!(first, second);
        assert!(RANDOM_ATTACK_NAMES.contains(&first.name()));
        assert!((20..=100).contains(&first.force()));
    }

    #[test]
    fn fixed_skills_ignore_rng() {
        let mut rng = PcgRng::new(3);
        let basic = SkillKind::BasicAttack.build(&mut rng);
        assert_eq!(basic.name(), "Basic Attack");
        assert_eq!(basic.force(), 20);
        assert_eq!(basic.mana_cost(), 0);
        assert_eq!(basic.eligible(), CharacterKinds::all());
    }

    #[test]
    fn heal_is_wizard_self_effect() {
        let heal = SkillKind::Heal.build(&mut PcgRng::default());
        assert_eq!(heal.behavior(), SkillBehavior::SELF_EFFECT);
        assert_eq!(heal.eligible(), CharacterKinds::WIZARD);
        assert_eq!(heal.effects(), &[Effect::heal(50)]);
    }

    #[test]
    fn every_kind_parses_from_its_name() {
        for kind in SkillKind::iter() {
            assert_eq!(kind.to_string().parse::<SkillKind>(), Ok(kind));
        }
    }
}
