//! Characters: attributes, skills, active effects and progression.
//!
//! A [`Character`] exclusively owns everything attached to it. Skills are
//! capped at [`GameConfig::MAX_SKILLS`]; active effects keep insertion order
//! and are purged once expired.

mod error;
mod kind;
mod progression;

pub use error::CharacterError;
pub use kind::{CharacterKind, CharacterKinds};
pub use progression::{DefaultLevelUpPolicy, LevelUpPolicy};

use arrayvec::ArrayVec;

use crate::attribute::{Attribute, AttributeKind, AttributeTable};
use crate::config::GameConfig;
use crate::effect::Effect;
use crate::experience::{ExperienceSystem, LevelCurve, LevelUpEvent};
use crate::skill::{Caster, Skill, SkillOutcome};

/// Summary of one [`Character::apply_effects`] pass.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EffectPass {
    /// Effects activated during the pass.
    pub applied: usize,
    /// Effects removed after the pass because they ran out.
    pub expired: usize,
}

/// A combatant.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Character {
    name: String,
    kinds: CharacterKinds,
    attributes: AttributeTable,
    skills: ArrayVec<Skill, { GameConfig::MAX_SKILLS }>,
    active_effects: Vec<Effect>,
    experience: ExperienceSystem,
}

impl Character {
    /// Creates a level 1 character with no skills.
    pub fn new(name: impl Into<String>, kinds: CharacterKinds, attributes: AttributeTable) -> Self {
        Self {
            name: name.into(),
            kinds,
            attributes,
            skills: ArrayVec::new(),
            active_effects: Vec::new(),
            experience: ExperienceSystem::new(),
        }
    }

    /// Learns `skill` while building, with the same checks as [`learn_skill`](Self::learn_skill).
    pub fn with_skill(mut self, skill: Skill) -> Result<Self, CharacterError> {
        self.learn_skill(skill)?;
        Ok(self)
    }

    pub fn with_experience(mut self, experience: ExperienceSystem) -> Self {
        self.experience = experience;
        self
    }

    /// Moves the character onto another level curve, keeping level and experience.
    pub fn with_level_curve(mut self, curve: LevelCurve) -> Self {
        self.experience =
            ExperienceSystem::restore(self.experience.experience(), self.experience.level(), curve);
        self
    }

    // ===== accessors =====

    pub fn name(&self) -> &str {
        &self.name
    }

    pub const fn kinds(&self) -> CharacterKinds {
        self.kinds
    }

    pub const fn attributes(&self) -> &AttributeTable {
        &self.attributes
    }

    pub fn attributes_mut(&mut self) -> &mut AttributeTable {
        &mut self.attributes
    }

    pub fn skills(&self) -> &[Skill] {
        &self.skills
    }

    /// First learned skill named `name`.
    pub fn skill(&self, name: &str) -> Option<&Skill> {
        self.skills.iter().find(|skill| skill.name() == name)
    }

    pub fn active_effects(&self) -> &[Effect] {
        &self.active_effects
    }

    pub const fn experience_system(&self) -> &ExperienceSystem {
        &self.experience
    }

    pub const fn level(&self) -> u32 {
        self.experience.level()
    }

    pub const fn experience(&self) -> u64 {
        self.experience.experience()
    }

    pub const fn next_level_experience(&self) -> Option<u64> {
        self.experience.next_level_threshold()
    }

    // ===== operations =====

    /// Looks up one attribute.
    pub fn get_attribute(&self, kind: AttributeKind) -> Result<&Attribute, CharacterError> {
        self.attributes.require(kind)
    }

    pub fn get_attribute_mut(
        &mut self,
        kind: AttributeKind,
    ) -> Result<&mut Attribute, CharacterError> {
        self.attributes.require_mut(kind)
    }

    /// Uses the first learned skill named `name` against `targets`.
    ///
    /// An unknown name fails before anything is mutated.
    pub fn use_skill(
        &mut self,
        name: &str,
        targets: &mut [&mut Character],
    ) -> Result<SkillOutcome, CharacterError> {
        let Self {
            skills,
            attributes,
            active_effects,
            ..
        } = self;

        let skill = skills
            .iter()
            .find(|skill| skill.name() == name)
            .ok_or_else(|| CharacterError::SkillNotFound(name.to_owned()))?;

        skill.resolve(
            Caster {
                attributes,
                active_effects,
            },
            targets,
        )
    }

    /// True once health is at or below zero.
    ///
    /// A character without a health attribute cannot be harmed or healed and
    /// counts as incapacitated.
    pub fn is_dead(&self) -> bool {
        self.attributes
            .value(AttributeKind::Hp)
            .is_none_or(|hp| hp <= 0)
    }

    /// Appends `skill` to the skill list.
    ///
    /// Fails with `SkillCapacityExceeded` when four skills are already known,
    /// then with `SkillIneligible` when none of the skill's classes match.
    pub fn learn_skill(&mut self, skill: Skill) -> Result<(), CharacterError> {
        if self.skills.is_full() {
            return Err(CharacterError::capacity_exceeded());
        }

        if !skill.can_be_used_by(self) {
            return Err(CharacterError::SkillIneligible {
                skill: skill.name().to_owned(),
            });
        }

        self.skills
            .try_push(skill)
            .map_err(|_| CharacterError::capacity_exceeded())
    }

    /// Removes every skill named `name`, returning how many were removed.
    pub fn forget_skill(&mut self, name: &str) -> usize {
        let before = self.skills.len();
        self.skills.retain(|skill| skill.name() != name);
        before - self.skills.len()
    }

    /// Appends an effect to the active list.
    pub fn add_effect(&mut self, effect: Effect) {
        self.active_effects.push(effect);
    }

    /// Activates every active effect once, then purges the expired ones.
    ///
    /// Effects activate in insertion order. A single-activation effect is
    /// applied exactly once before it is removed.
    pub fn apply_effects(&mut self) -> EffectPass {
        let Self {
            attributes,
            active_effects,
            ..
        } = self;

        let mut applied = 0;
        for effect in active_effects.iter_mut().filter(|effect| effect.is_active()) {
            effect.activate(attributes);
            applied += 1;
        }

        let before = active_effects.len();
        active_effects.retain(Effect::is_active);

        EffectPass {
            applied,
            expired: before - active_effects.len(),
        }
    }

    /// Adds experience, returning the levels gained.
    ///
    /// Attributes are untouched; feed each event to
    /// [`apply_level_up`](Self::apply_level_up) to rebalance them.
    pub fn gain_experience(&mut self, amount: u64) -> Vec<LevelUpEvent> {
        self.experience.gain_experience(amount)
    }

    /// Rebalances attributes for one gained level.
    pub fn apply_level_up(&mut self, event: LevelUpEvent, policy: &(impl LevelUpPolicy + ?Sized)) {
        policy.on_level_up(event, &mut self.attributes);
    }

    pub(crate) fn caster(&mut self) -> Caster<'_> {
        Caster {
            attributes: &mut self.attributes,
            active_effects: &mut self.active_effects,
        }
    }

    pub(crate) fn from_parts(
        name: String,
        kinds: CharacterKinds,
        attributes: AttributeTable,
        skills: ArrayVec<Skill, { GameConfig::MAX_SKILLS }>,
        active_effects: Vec<Effect>,
        experience: ExperienceSystem,
    ) -> Self {
        Self {
            name,
            kinds,
            attributes,
            skills,
            active_effects,
            experience,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attribute::AttributePreset;
    use crate::rng::PcgRng;
    use crate::skill::{SkillBehavior, SkillKind};

    fn wizard() -> Character {
        Character::new(
            "Merlin",
            CharacterKind::Wizard.into(),
            AttributePreset::Default.table(),
        )
    }

    fn warrior() -> Character {
        Character::new(
            "Conan",
            CharacterKind::Warrior.into(),
            AttributePreset::Default.table(),
        )
    }

    fn generic(name: &str) -> Skill {
        Skill::new(name, SkillBehavior::GENERIC, 10)
    }

    #[test]
    fn get_attribute_reports_missing_kind() {
        let bare = Character::new("Bare", CharacterKind::Archer.into(), AttributeTable::empty());
        assert_eq!(
            bare.get_attribute(AttributeKind::Atk),
            Err(CharacterError::AttributeNotFound(AttributeKind::Atk))
        );
        assert!(bare.is_dead());
    }

    #[test]
    fn use_skill_requires_known_name() {
        let mut actor = warrior();
        let mut target = wizard();

        let result = actor.use_skill("Fireball", &mut [&mut target]);

        assert_eq!(result, Err(CharacterError::SkillNotFound("Fireball".into())));
        assert_eq!(target, wizard());
    }

    #[test]
    fn use_skill_resolves_first_match() {
        let mut actor = warrior()
            .with_skill(Skill::new("Smash", SkillBehavior::GENERIC, 20))
            .unwrap()
            .with_skill(Skill::new("Smash", SkillBehavior::GENERIC, 80))
            .unwrap();
        let mut target = wizard();

        actor.use_skill("Smash", &mut [&mut target]).unwrap();

        assert_eq!(target.attributes().value(AttributeKind::Hp), Some(91));
    }

    #[test]
    fn is_dead_at_zero_or_below() {
        let mut hero = warrior();
        assert!(!hero.is_dead());

        hero.get_attribute_mut(AttributeKind::Hp)
            .unwrap()
            .apply_change(-100.0);
        assert!(hero.is_dead());

        hero.get_attribute_mut(AttributeKind::Hp)
            .unwrap()
            .apply_change(-10.0);
        assert_eq!(hero.attributes().value(AttributeKind::Hp), Some(-10));
        assert!(hero.is_dead());
    }

    #[test]
    fn learn_skill_enforces_capacity() {
        let mut hero = warrior();
        for name in ["A", "B", "C", "D"] {
            hero.learn_skill(generic(name)).unwrap();
        }

        let result = hero.learn_skill(generic("E"));

        assert_eq!(
            result,
            Err(CharacterError::SkillCapacityExceeded { capacity: 4 })
        );
        assert_eq!(hero.skills().len(), 4);
    }

    #[test]
    fn learn_skill_enforces_eligibility() {
        let mut hero = warrior();
        let heal = SkillKind::Heal.build(&mut PcgRng::default());

        let result = hero.learn_skill(heal);

        assert_eq!(
            result,
            Err(CharacterError::SkillIneligible {
                skill: "Heal".into()
            })
        );
        assert!(hero.skills().is_empty());
    }

    #[test]
    fn capacity_is_checked_before_eligibility() {
        let mut hero = warrior();
        for name in ["A", "B", "C", "D"] {
            hero.learn_skill(generic(name)).unwrap();
        }
        let heal = SkillKind::Heal.build(&mut PcgRng::default());

        assert!(matches!(
            hero.learn_skill(heal),
            Err(CharacterError::SkillCapacityExceeded { .. })
        ));
    }

    #[test]
    fn forget_skill_removes_all_matches() {
        let mut hero = warrior()
            .with_skill(generic("Jab"))
            .unwrap()
            .with_skill(generic("Kick"))
            .unwrap()
            .with_skill(generic("Jab"))
            .unwrap();

        assert_eq!(hero.forget_skill("Jab"), 2);
        assert_eq!(hero.skills().len(), 1);
        assert_eq!(hero.forget_skill("Jab"), 0);
    }

    #[test]
    fn apply_effects_invokes_then_purges() {
        let mut hero = warrior();
        hero.get_attribute_mut(AttributeKind::Hp)
            .unwrap()
            .apply_change(-70.0);
        hero.add_effect(Effect::heal(50));
        hero.add_effect(Effect::poison(5, 2));

        let first = hero.apply_effects();
        assert_eq!(first, EffectPass { applied: 2, expired: 1 });
        assert_eq!(hero.attributes().value(AttributeKind::Hp), Some(75));
        assert_eq!(hero.active_effects().len(), 1);

        let second = hero.apply_effects();
        assert_eq!(second, EffectPass { applied: 1, expired: 1 });
        assert_eq!(hero.attributes().value(AttributeKind::Hp), Some(70));
        assert!(hero.active_effects().is_empty());
    }

    #[test]
    fn effects_attached_mid_turn_wait_for_next_pass() {
        let mut caster = wizard()
            .with_skill(SkillKind::Heal.build(&mut PcgRng::default()))
            .unwrap();
        caster
            .get_attribute_mut(AttributeKind::Hp)
            .unwrap()
            .apply_change(-60.0);
        let mut foe = warrior();

        caster.use_skill("Heal", &mut [&mut foe]).unwrap();
        assert_eq!(caster.attributes().value(AttributeKind::Hp), Some(40));

        caster.apply_effects();
        assert_eq!(caster.attributes().value(AttributeKind::Hp), Some(90));
    }

    #[test]
    fn experience_and_level_up_policy() {
        let mut hero = warrior();
        let events = hero.gain_experience(150);
        assert_eq!(events, vec![LevelUpEvent { new_level: 2 }]);
        assert_eq!(hero.level(), 2);
        assert_eq!(hero.next_level_experience(), Some(400));

        for event in events {
            hero.apply_level_up(event, &DefaultLevelUpPolicy);
        }
        let hp = hero.get_attribute(AttributeKind::Hp).unwrap();
        assert_eq!((hp.value(), hp.max_value()), (110, 110));
    }
}
