//! Abstraction for sourcing each combatant's skill choice.
//!
//! Runtime users plug in [`SkillSelector`] implementations so battles can run
//! with human input, scripted fixtures, or randomized policies.

use std::collections::VecDeque;

use game_core::{Character, PcgRng, RngOracle};

/// Chooses the skill a combatant uses on its turn.
///
/// Different implementations can handle:
/// - Player input (from UI/CLI)
/// - Randomized opponents
/// - Scripted/replayed turns
/// - Testing fixtures
pub trait SkillSelector: Send {
    /// Returns the name of the skill `actor` uses against `opponent`, or
    /// `None` to pass the turn.
    fn select_skill(&mut self, actor: &Character, opponent: &Character) -> Option<String>;
}

/// Picks uniformly among the actor's learned skills, affordable or not.
#[derive(Debug, Clone)]
pub struct RandomSelector {
    rng: PcgRng,
}

impl RandomSelector {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: PcgRng::new(seed),
        }
    }
}

impl SkillSelector for RandomSelector {
    fn select_skill(&mut self, actor: &Character, _opponent: &Character) -> Option<String> {
        let skills = actor.skills();
        let index = self.rng.index(skills.len())?;
        Some(skills[index].name().to_owned())
    }
}

/// Always uses the first learned skill.
#[derive(Debug, Clone, Copy, Default)]
pub struct FirstSkillSelector;

impl SkillSelector for FirstSkillSelector {
    fn select_skill(&mut self, actor: &Character, _opponent: &Character) -> Option<String> {
        actor.skills().first().map(|skill| skill.name().to_owned())
    }
}

/// Replays a fixed list of skill names, then passes every remaining turn.
#[derive(Debug, Clone, Default)]
pub struct ScriptedSelector {
    script: VecDeque<String>,
}

impl ScriptedSelector {
    pub fn new<I, S>(script: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            script: script.into_iter().map(Into::into).collect(),
        }
    }

    /// Scripted turns not yet played.
    pub fn remaining(&self) -> usize {
        self.script.len()
    }
}

impl SkillSelector for ScriptedSelector {
    fn select_skill(&mut self, _actor: &Character, _opponent: &Character) -> Option<String> {
        self.script.pop_front()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::{AttributePreset, CharacterKind, Skill, SkillBehavior};

    fn fighter(skills: &[&str]) -> Character {
        let mut character = Character::new(
            "Fighter",
            CharacterKind::Warrior.into(),
            AttributePreset::Default.table(),
        );
        for name in skills {
            character
                .learn_skill(Skill::new(*name, SkillBehavior::GENERIC, 10))
                .unwrap();
        }
        character
    }

    #[test]
    fn random_selector_is_seeded() {
        let actor = fighter(&["A", "B", "C", "D"]);
        let opponent = fighter(&[]);

        let picks = |seed| {
            let mut selector = RandomSelector::new(seed);
            (0..8)
                .map(|_| selector.select_skill(&actor, &opponent).unwrap())
                .collect::<Vec<_>>()
        };

        assert_eq!(picks(77), picks(77));
    }

    #[test]
    fn random_selector_passes_without_skills() {
        let empty = fighter(&[]);
        assert_eq!(RandomSelector::new(1).select_skill(&empty, &empty), None);
    }

    #[test]
    fn scripted_selector_replays_then_passes() {
        let actor = fighter(&["A"]);
        let mut selector = ScriptedSelector::new(["A", "Z"]);

        assert_eq!(selector.select_skill(&actor, &actor).as_deref(), Some("A"));
        assert_eq!(selector.select_skill(&actor, &actor).as_deref(), Some("Z"));
        assert_eq!(selector.remaining(), 0);
        assert_eq!(selector.select_skill(&actor, &actor), None);
    }

    #[test]
    fn first_skill_selector() {
        let actor = fighter(&["Jab", "Kick"]);
        assert_eq!(
            FirstSkillSelector.select_skill(&actor, &actor).as_deref(),
            Some("Jab")
        );
    }
}
