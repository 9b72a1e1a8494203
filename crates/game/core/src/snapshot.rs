//! Persisted character form exchanged with save/load collaborators.
//!
//! Field names and nesting follow the external persistence contract:
//! enum-valued fields are stored as their string names and struct fields are
//! camelCase (`maxValue`, `experienceSystem`, `manaCost`, ...).

use arrayvec::ArrayVec;
use strum::IntoEnumIterator;

use crate::attribute::{Attribute, AttributeKind, AttributeSet, AttributeTable};
use crate::character::{Character, CharacterKind, CharacterKinds};
use crate::config::GameConfig;
use crate::effect::Effect;
use crate::error::{ErrorSeverity, GameError};
use crate::experience::{ExperienceSystem, LevelCurve};
use crate::skill::{Skill, SkillBehavior};

/// Errors raised while rebuilding a character from a snapshot.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SnapshotError {
    #[error("unknown attribute '{0}'")]
    UnknownAttribute(String),

    #[error("unknown character type '{0}'")]
    UnknownCharacterKind(String),

    #[error("unknown skill type '{0}'")]
    UnknownSkillBehavior(String),

    #[error("attribute '{0}' appears more than once")]
    DuplicateAttribute(AttributeKind),

    #[error("attribute '{0}' is missing")]
    MissingAttribute(AttributeKind),

    #[error("{count} skills stored, at most {capacity} allowed")]
    TooManySkills { count: usize, capacity: usize },

    #[error("level {0} is out of range")]
    InvalidLevel(u32),
}

impl GameError for SnapshotError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::UnknownAttribute(_) => "SNAPSHOT_UNKNOWN_ATTRIBUTE",
            Self::UnknownCharacterKind(_) => "SNAPSHOT_UNKNOWN_CHARACTER_KIND",
            Self::UnknownSkillBehavior(_) => "SNAPSHOT_UNKNOWN_SKILL_BEHAVIOR",
            Self::DuplicateAttribute(_) => "SNAPSHOT_DUPLICATE_ATTRIBUTE",
            Self::MissingAttribute(_) => "SNAPSHOT_MISSING_ATTRIBUTE",
            Self::TooManySkills { .. } => "SNAPSHOT_TOO_MANY_SKILLS",
            Self::InvalidLevel(_) => "SNAPSHOT_INVALID_LEVEL",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct AttributeSnapshot {
    pub name: String,
    pub value: i32,
    pub max_value: i32,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct ExperienceSnapshot {
    pub experience: u64,
    pub level: u32,
}

/// Effect shape shared by skill templates and active effects.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct EffectSnapshot {
    pub name: String,
    pub attributes: Vec<String>,
    pub value: i32,
    /// Remaining activations.
    pub duration: u32,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct SkillSnapshot {
    pub name: String,
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub behavior: Vec<String>,
    pub force: i32,
    pub effects: Vec<EffectSnapshot>,
    pub mana_cost: i32,
    pub admitted_character_types: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct CharacterSnapshot {
    pub name: String,
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub kinds: Vec<String>,
    pub attributes: Vec<AttributeSnapshot>,
    pub experience_system: ExperienceSnapshot,
    pub skills: Vec<SkillSnapshot>,
    pub active_effects: Vec<EffectSnapshot>,
}

// ===== Character -> snapshot =====

fn kind_names(kinds: CharacterKinds) -> Vec<String> {
    kinds.kinds().map(|kind| kind.to_string()).collect()
}

fn attribute_names(attributes: AttributeSet) -> Vec<String> {
    attributes.kinds().map(|kind| kind.to_string()).collect()
}

impl From<&Attribute> for AttributeSnapshot {
    fn from(attribute: &Attribute) -> Self {
        Self {
            name: attribute.kind().to_string(),
            value: attribute.value(),
            max_value: attribute.max_value(),
        }
    }
}

impl From<&Effect> for EffectSnapshot {
    fn from(effect: &Effect) -> Self {
        Self {
            name: effect.name().to_owned(),
            attributes: attribute_names(effect.attributes()),
            value: effect.magnitude(),
            duration: effect.remaining_duration(),
        }
    }
}

impl From<&Skill> for SkillSnapshot {
    fn from(skill: &Skill) -> Self {
        Self {
            name: skill.name().to_owned(),
            behavior: skill.behavior().names().map(str::to_owned).collect(),
            force: skill.force(),
            effects: skill.effects().iter().map(EffectSnapshot::from).collect(),
            mana_cost: skill.mana_cost(),
            admitted_character_types: kind_names(skill.eligible()),
        }
    }
}

impl From<&Character> for CharacterSnapshot {
    fn from(character: &Character) -> Self {
        Self {
            name: character.name().to_owned(),
            kinds: kind_names(character.kinds()),
            attributes: character
                .attributes()
                .iter()
                .map(AttributeSnapshot::from)
                .collect(),
            experience_system: ExperienceSnapshot {
                experience: character.experience(),
                level: character.level(),
            },
            skills: character.skills().iter().map(SkillSnapshot::from).collect(),
            active_effects: character
                .active_effects()
                .iter()
                .map(EffectSnapshot::from)
                .collect(),
        }
    }
}

// ===== snapshot -> Character =====

fn parse_kinds(names: &[String]) -> Result<CharacterKinds, SnapshotError> {
    names
        .iter()
        .map(|name| {
            name.parse::<CharacterKind>()
                .map_err(|_| SnapshotError::UnknownCharacterKind(name.clone()))
        })
        .collect()
}

fn parse_attribute_kind(name: &str) -> Result<AttributeKind, SnapshotError> {
    name.parse()
        .map_err(|_| SnapshotError::UnknownAttribute(name.to_owned()))
}

fn parse_attribute_set(names: &[String]) -> Result<AttributeSet, SnapshotError> {
    names.iter().map(|name| parse_attribute_kind(name)).collect()
}

impl EffectSnapshot {
    pub fn to_effect(&self) -> Result<Effect, SnapshotError> {
        Ok(Effect::from_parts(
            self.name.clone(),
            parse_attribute_set(&self.attributes)?,
            self.value,
            self.duration,
        ))
    }
}

impl SkillSnapshot {
    pub fn to_skill(&self) -> Result<Skill, SnapshotError> {
        let behavior = self
            .behavior
            .iter()
            .map(|name| {
                SkillBehavior::from_label(name)
                    .ok_or_else(|| SnapshotError::UnknownSkillBehavior(name.clone()))
            })
            .collect::<Result<SkillBehavior, _>>()?;

        let mut skill = Skill::new(self.name.clone(), behavior, self.force)
            .with_mana_cost(self.mana_cost)
            .with_eligible(parse_kinds(&self.admitted_character_types)?);
        for effect in &self.effects {
            skill = skill.with_effect(effect.to_effect()?);
        }
        Ok(skill)
    }
}

impl CharacterSnapshot {
    /// Rebuilds a character on the default level curve.
    pub fn to_character(&self) -> Result<Character, SnapshotError> {
        self.to_character_with_curve(LevelCurve::default())
    }

    /// Rebuilds a character on `curve`.
    ///
    /// Every attribute kind must be stored exactly once. Stored skills are
    /// restored as-is; eligibility was checked when they were learned.
    pub fn to_character_with_curve(
        &self,
        curve: LevelCurve,
    ) -> Result<Character, SnapshotError> {
        let mut attributes = AttributeTable::empty();
        for stored in &self.attributes {
            let kind = parse_attribute_kind(&stored.name)?;
            if attributes.contains(kind) {
                return Err(SnapshotError::DuplicateAttribute(kind));
            }
            attributes.insert(Attribute::with_max(kind, stored.value, stored.max_value));
        }
        if let Some(missing) = AttributeKind::iter().find(|kind| !attributes.contains(*kind)) {
            return Err(SnapshotError::MissingAttribute(missing));
        }

        if self.skills.len() > GameConfig::MAX_SKILLS {
            return Err(SnapshotError::TooManySkills {
                count: self.skills.len(),
                capacity: GameConfig::MAX_SKILLS,
            });
        }
        let skills = self
            .skills
            .iter()
            .map(SkillSnapshot::to_skill)
            .collect::<Result<ArrayVec<_, { GameConfig::MAX_SKILLS }>, _>>()?;

        let active_effects = self
            .active_effects
            .iter()
            .map(EffectSnapshot::to_effect)
            .collect::<Result<Vec<_>, _>>()?;

        let ExperienceSnapshot { experience, level } = self.experience_system;
        if !(1..=GameConfig::MAX_LEVEL).contains(&level) {
            return Err(SnapshotError::InvalidLevel(level));
        }

        Ok(Character::from_parts(
            self.name.clone(),
            parse_kinds(&self.kinds)?,
            attributes,
            skills,
            active_effects,
            ExperienceSystem::restore(experience, level, curve),
        ))
    }
}

impl Character {
    /// Captures the persisted form of this character.
    pub fn snapshot(&self) -> CharacterSnapshot {
        CharacterSnapshot::from(self)
    }

    /// Rebuilds a character from its persisted form, on the default level curve.
    pub fn from_snapshot(snapshot: &CharacterSnapshot) -> Result<Self, SnapshotError> {
        snapshot.to_character()
    }
}
