//! Archetype factories for ready-made characters.
//!
//! Each archetype pairs a class with a starter skill set. With
//! `random_skills` the starter set is replaced by two randomized attacks
//! drawn from the injected RNG.

use game_core::{
    AttributePreset, Character, CharacterError, CharacterKind, RngOracle, Skill, SkillKind,
};

/// Builds characters for the three playable classes.
pub struct CharacterFactory;

impl CharacterFactory {
    /// Number of randomized attacks granted when `random_skills` is set.
    pub const RANDOM_SKILL_COUNT: usize = 2;

    /// Starter skills for `kind`.
    ///
    /// | Class   | Starter set          |
    /// |---------|----------------------|
    /// | Wizard  | Fireball, Heal       |
    /// | Warrior | Basic Attack         |
    /// | Archer  | Basic Attack, Arrow  |
    pub fn starter_skills(
        kind: CharacterKind,
        random_skills: bool,
        rng: &mut impl RngOracle,
    ) -> Vec<Skill> {
        if random_skills {
            return (0..Self::RANDOM_SKILL_COUNT)
                .map(|_| SkillKind::RandomAttack.build(rng))
                .collect();
        }

        let kinds: &[SkillKind] = match kind {
            CharacterKind::Wizard => &[SkillKind::Fireball, SkillKind::Heal],
            CharacterKind::Warrior => &[SkillKind::BasicAttack],
            CharacterKind::Archer => &[SkillKind::BasicAttack, SkillKind::Arrow],
        };
        kinds.iter().map(|skill| skill.build(rng)).collect()
    }

    /// Builds a single-class character with the class's starter skills.
    pub fn create(
        kind: CharacterKind,
        name: impl Into<String>,
        preset: AttributePreset,
        random_skills: bool,
        rng: &mut impl RngOracle,
    ) -> Result<Character, CharacterError> {
        let mut character = Character::new(name, kind.into(), preset.table());
        for skill in Self::starter_skills(kind, random_skills, rng) {
            character.learn_skill(skill)?;
        }
        Ok(character)
    }

    pub fn create_wizard(
        name: impl Into<String>,
        random_skills: bool,
        rng: &mut impl RngOracle,
    ) -> Result<Character, CharacterError> {
        Self::create(
            CharacterKind::Wizard,
            name,
            AttributePreset::Default,
            random_skills,
            rng,
        )
    }

    pub fn create_warrior(
        name: impl Into<String>,
        random_skills: bool,
        rng: &mut impl RngOracle,
    ) -> Result<Character, CharacterError> {
        Self::create(
            CharacterKind::Warrior,
            name,
            AttributePreset::Default,
            random_skills,
            rng,
        )
    }

    pub fn create_archer(
        name: impl Into<String>,
        random_skills: bool,
        rng: &mut impl RngOracle,
    ) -> Result<Character, CharacterError> {
        Self::create(
            CharacterKind::Archer,
            name,
            AttributePreset::Default,
            random_skills,
            rng,
        )
    }

    /// An easy enemy of a random class with randomized attacks.
    pub fn create_random_casual_enemy(
        rng: &mut impl RngOracle,
    ) -> Result<Character, CharacterError> {
        const CLASSES: [CharacterKind; 3] = [
            CharacterKind::Warrior,
            CharacterKind::Wizard,
            CharacterKind::Archer,
        ];

        let kind = rng
            .index(CLASSES.len())
            .map_or(CharacterKind::Warrior, |i| CLASSES[i]);
        Self::create(kind, "Enemy", AttributePreset::Easy, true, rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::{AttributeKind, PcgRng, RANDOM_ATTACK_NAMES};

    #[test]
    fn wizard_gets_fireball_and_heal() {
        let wizard = CharacterFactory::create_wizard("Nico", false, &mut PcgRng::new(1)).unwrap();

        let names: Vec<_> = wizard.skills().iter().map(Skill::name).collect();
        assert_eq!(names, ["Fireball", "Heal"]);
        assert_eq!(wizard.attributes().value(AttributeKind::Hp), Some(100));
    }

    #[test]
    fn random_skills_replace_the_starter_set() {
        let warrior = CharacterFactory::create_warrior("Conan", true, &mut PcgRng::new(9)).unwrap();

        assert_eq!(warrior.skills().len(), CharacterFactory::RANDOM_SKILL_COUNT);
        assert!(
            warrior
                .skills()
                .iter()
                .all(|skill| RANDOM_ATTACK_NAMES.contains(&skill.name()))
        );
    }

    #[test]
    fn casual_enemy_is_easy_and_reproducible() {
        let first = CharacterFactory::create_random_casual_enemy(&mut PcgRng::new(5)).unwrap();
        let second = CharacterFactory::create_random_casual_enemy(&mut PcgRng::new(5)).unwrap();

        assert_eq!(first, second);
        assert_eq!(first.attributes().value(AttributeKind::Hp), Some(50));
        assert_eq!(first.attributes().value(AttributeKind::Def), Some(0));
    }

    #[test]
    fn archer_starter_set() {
        let archer = CharacterFactory::create_archer("Robin", false, &mut PcgRng::new(2)).unwrap();
        assert!(archer.skill("Arrow").is_some());
        assert!(archer.skill("Basic Attack").is_some());
    }
}
