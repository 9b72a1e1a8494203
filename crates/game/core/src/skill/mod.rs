//! Mana-gated actions that deal damage and attach effects.
//!
//! A [`Skill`] is plain data fixed at construction. Resolving it against an
//! actor and a list of targets follows a strict order:
//!
//! 1. If the actor cannot pay the mana cost, nothing happens.
//! 2. Mana is deducted.
//! 3. `SELF_EFFECT`: every attached effect is appended to the actor.
//! 4. `ENEMY_EFFECT`: every attached effect is appended to each target.
//! 5. `GENERIC`: each target takes mitigated damage to HP.
//!
//! Attached effects are only attached, never applied here; they take effect
//! on the receiving character's next [`Character::apply_effects`] pass.

pub mod damage;
mod kinds;

pub use damage::calculate_damage;
pub use kinds::{RANDOM_ATTACK_NAMES, SkillKind};

use bitflags::bitflags;

use crate::attribute::{AttributeKind, AttributeTable};
use crate::character::{Character, CharacterError, CharacterKinds};
use crate::effect::Effect;

bitflags! {
    /// Behavior flags selecting which resolution steps a skill performs.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct SkillBehavior: u8 {
        /// Deals formula damage to every target.
        const GENERIC      = 1 << 0;
        /// Attaches the skill's effects to the user.
        const SELF_EFFECT  = 1 << 1;
        /// Attaches the skill's effects to every target.
        const ENEMY_EFFECT = 1 << 2;
    }
}

impl SkillBehavior {
    /// Persisted names, in flag order.
    const NAMES: [(Self, &'static str); 3] = [
        (Self::GENERIC, "generic"),
        (Self::SELF_EFFECT, "special_effect_player"),
        (Self::ENEMY_EFFECT, "special_effect_enemy"),
    ];

    /// Parses one persisted behavior name.
    pub fn from_label(name: &str) -> Option<Self> {
        Self::NAMES
            .iter()
            .find(|(_, label)| label.eq_ignore_ascii_case(name))
            .map(|(flag, _)| *flag)
    }

    /// Persisted names of the contained flags.
    pub fn names(self) -> impl Iterator<Item = &'static str> {
        Self::NAMES
            .into_iter()
            .filter(move |(flag, _)| self.contains(*flag))
            .map(|(_, label)| label)
    }
}

/// Mutable view of the character using a skill.
///
/// Splits the attribute table and effect list out of the character so the
/// skill being resolved can stay borrowed from the same character.
pub(crate) struct Caster<'a> {
    pub attributes: &'a mut AttributeTable,
    pub active_effects: &'a mut Vec<Effect>,
}

/// Damage dealt to one target by a generic skill.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Hit {
    /// Index of the target in the slice passed to the skill.
    pub target: usize,
    /// Health actually removed.
    pub damage: i32,
}

/// Result of using a skill.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SkillOutcome {
    /// The actor could not pay; nothing changed.
    InsufficientMana { required: i32, available: i32 },
    /// The skill resolved.
    Resolved {
        mana_spent: i32,
        hits: Vec<Hit>,
        effects_attached: usize,
    },
}

impl SkillOutcome {
    pub fn is_resolved(&self) -> bool {
        matches!(self, Self::Resolved { .. })
    }

    /// Total health removed across all targets.
    pub fn total_damage(&self) -> i32 {
        match self {
            Self::InsufficientMana { .. } => 0,
            Self::Resolved { hits, .. } => hits.iter().map(|hit| hit.damage).sum(),
        }
    }
}

/// An action consuming mana that deals damage and/or attaches effects.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Skill {
    name: String,
    behavior: SkillBehavior,
    force: i32,
    #[cfg_attr(feature = "serde", serde(default))]
    mana_cost: i32,
    #[cfg_attr(feature = "serde", serde(default = "CharacterKinds::all"))]
    eligible: CharacterKinds,
    #[cfg_attr(feature = "serde", serde(default))]
    effects: Vec<Effect>,
}

impl Skill {
    /// Creates a free skill usable by every class with no attached effects.
    pub fn new(name: impl Into<String>, behavior: SkillBehavior, force: i32) -> Self {
        Self {
            name: name.into(),
            behavior,
            force,
            mana_cost: 0,
            eligible: CharacterKinds::all(),
            effects: Vec::new(),
        }
    }

    pub fn with_mana_cost(mut self, mana_cost: i32) -> Self {
        self.mana_cost = mana_cost;
        self
    }

    /// Restricts the skill to the given classes.
    pub fn with_eligible(mut self, eligible: CharacterKinds) -> Self {
        self.eligible = eligible;
        self
    }

    pub fn with_effect(mut self, effect: Effect) -> Self {
        self.effects.push(effect);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub const fn behavior(&self) -> SkillBehavior {
        self.behavior
    }

    pub const fn force(&self) -> i32 {
        self.force
    }

    pub const fn mana_cost(&self) -> i32 {
        self.mana_cost
    }

    pub const fn eligible(&self) -> CharacterKinds {
        self.eligible
    }

    pub fn effects(&self) -> &[Effect] {
        &self.effects
    }

    /// True if `actor` has enough mana to pay for this skill.
    pub fn can_use(&self, actor: &Character) -> bool {
        self.is_affordable(actor.attributes())
    }

    /// True if the skill admits at least one of the character's classes.
    pub fn can_be_used_by(&self, character: &Character) -> bool {
        self.eligible.intersects(character.kinds())
    }

    /// Uses this skill as `actor` against `targets`.
    ///
    /// For skills the actor has learned, prefer [`Character::use_skill`].
    pub fn use_by(
        &self,
        actor: &mut Character,
        targets: &mut [&mut Character],
    ) -> Result<SkillOutcome, CharacterError> {
        self.resolve(actor.caster(), targets)
    }

    fn is_affordable(&self, attributes: &AttributeTable) -> bool {
        attributes
            .value(AttributeKind::Mana)
            .is_some_and(|mana| mana >= self.mana_cost)
    }

    pub(crate) fn resolve(
        &self,
        caster: Caster<'_>,
        targets: &mut [&mut Character],
    ) -> Result<SkillOutcome, CharacterError> {
        let available = caster.attributes.require(AttributeKind::Mana)?.value();
        if available < self.mana_cost {
            return Ok(SkillOutcome::InsufficientMana {
                required: self.mana_cost,
                available,
            });
        }

        // Resolve every attribute the damage step reads before touching anything.
        let is_generic = self.behavior.contains(SkillBehavior::GENERIC);
        let attack = if is_generic {
            caster.attributes.require(AttributeKind::Atk)?.value()
        } else {
            0
        };
        if is_generic {
            for target in targets.iter() {
                target.attributes().require(AttributeKind::Hp)?;
                target.attributes().require(AttributeKind::Def)?;
            }
        }

        caster
            .attributes
            .require_mut(AttributeKind::Mana)?
            .apply_change(-f64::from(self.mana_cost));

        let mut effects_attached = 0;
        if self.behavior.contains(SkillBehavior::SELF_EFFECT) {
            caster.active_effects.extend(self.effects.iter().cloned());
            effects_attached += self.effects.len();
        }

        if self.behavior.contains(SkillBehavior::ENEMY_EFFECT) {
            for target in targets.iter_mut() {
                for effect in &self.effects {
                    target.add_effect(effect.clone());
                }
                effects_attached += self.effects.len();
            }
        }

        let mut hits = Vec::new();
        if is_generic {
            for (index, target) in targets.iter_mut().enumerate() {
                let defense = target.attributes().require(AttributeKind::Def)?.value();
                let Some(damage) = calculate_damage(self.force, attack, defense) else {
                    continue;
                };

                let hp = target.attributes_mut().require_mut(AttributeKind::Hp)?;
                let before = hp.value();
                hp.apply_change(-damage);
                hits.push(Hit {
                    target: index,
                    damage: before.saturating_sub(hp.value()),
                });
            }
        }

        Ok(SkillOutcome::Resolved {
            mana_spent: self.mana_cost,
            hits,
            effects_attached,
        })
    }
}
