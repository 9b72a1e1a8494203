//! Skill catalog loader.
//!
//! A catalog maps skill ids to either a built-in [`SkillKind`] or a custom
//! definition:
//!
//! ```ron
//! {
//!     "fireball": Catalog(fireball),
//!     "war_cry": Custom(
//!         name: "War Cry",
//!         behavior: ["special_effect_player"],
//!         force: 0,
//!         mana_cost: 10,
//!         eligible: [warrior],
//!         effects: [(name: "Fury", attributes: [attack], magnitude: 3, duration: 3)],
//!     ),
//! }
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use game_core::{
    AttributeKind, CharacterKind, CharacterKinds, Effect, RngOracle, Skill, SkillBehavior,
    SkillKind,
};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

fn single_activation() -> u32 {
    1
}

/// Effect template attached to a custom skill.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EffectSpec {
    pub name: String,
    pub attributes: Vec<AttributeKind>,
    pub magnitude: i32,
    /// Number of activations; one or fewer makes an instant effect.
    #[serde(default = "single_activation")]
    pub duration: u32,
}

impl EffectSpec {
    pub fn build(&self) -> Effect {
        Effect::from_parts(
            self.name.clone(),
            self.attributes.iter().copied().collect(),
            self.magnitude,
            self.duration,
        )
    }
}

/// One catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SkillSpec {
    /// A built-in skill, randomized parts drawn at build time.
    Catalog(SkillKind),
    /// A fully specified skill. An empty `eligible` list admits every class.
    Custom {
        name: String,
        behavior: Vec<String>,
        force: i32,
        #[serde(default)]
        mana_cost: i32,
        #[serde(default)]
        eligible: Vec<CharacterKind>,
        #[serde(default)]
        effects: Vec<EffectSpec>,
    },
}

impl SkillSpec {
    /// Builds the skill, drawing any random parts from `rng`.
    pub fn build(&self, rng: &mut impl RngOracle) -> LoadResult<Skill> {
        match self {
            Self::Catalog(kind) => Ok(kind.build(rng)),
            Self::Custom {
                name,
                behavior,
                force,
                mana_cost,
                eligible,
                effects,
            } => {
                let mut flags = SkillBehavior::empty();
                for label in behavior {
                    flags |= SkillBehavior::from_label(label).ok_or_else(|| {
                        anyhow::anyhow!("Unknown skill type '{}' in skill '{}'", label, name)
                    })?;
                }

                let eligible = if eligible.is_empty() {
                    CharacterKinds::all()
                } else {
                    eligible.iter().copied().collect()
                };

                Ok(effects.iter().fold(
                    Skill::new(name.clone(), flags, *force)
                        .with_mana_cost(*mana_cost)
                        .with_eligible(eligible),
                    |skill, effect| skill.with_effect(effect.build()),
                ))
            }
        }
    }
}

/// Skill definitions keyed by id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SkillCatalog {
    specs: BTreeMap<String, SkillSpec>,
}

impl SkillCatalog {
    pub fn new(specs: BTreeMap<String, SkillSpec>) -> Self {
        Self { specs }
    }

    pub fn get(&self, id: &str) -> Option<&SkillSpec> {
        self.specs.get(id)
    }

    /// Skill ids in sorted order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.specs.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.specs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }

    /// Builds the skill registered as `id`.
    ///
    /// Ids missing from the catalog are tried as built-in skill names
    /// (`basic_attack`, `fireball`, ...).
    pub fn build(&self, id: &str, rng: &mut impl RngOracle) -> LoadResult<Skill> {
        if let Some(spec) = self.specs.get(id) {
            return spec.build(rng);
        }

        let kind: SkillKind = id
            .parse()
            .map_err(|_| anyhow::anyhow!("Unknown skill id '{}'", id))?;
        Ok(kind.build(rng))
    }
}

/// Loader for skill catalogs from RON files.
pub struct SkillLoader;

impl SkillLoader {
    /// Load a skill catalog from a RON file.
    ///
    /// RON format: `{ "id": SkillSpec, ... }`
    pub fn load(path: &Path) -> LoadResult<SkillCatalog> {
        let content = read_file(path)?;
        let specs: BTreeMap<String, SkillSpec> = ron::from_str(&content).map_err(|e| {
            anyhow::anyhow!("Failed to parse skill catalog RON {}: {}", path.display(), e)
        })?;

        Ok(SkillCatalog::new(specs))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::PcgRng;
    use std::io::Write;

    const CATALOG: &str = r#"{
        "fireball": Catalog(fireball),
        "war_cry": Custom(
            name: "War Cry",
            behavior: ["special_effect_player"],
            force: 0,
            mana_cost: 10,
            eligible: [warrior],
            effects: [(name: "Fury", attributes: [attack], magnitude: 3, duration: 3)],
        ),
        "jab": Custom(name: "Jab", behavior: ["generic"], force: 12),
    }"#;

    fn load_catalog() -> SkillCatalog {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(CATALOG.as_bytes()).unwrap();
        SkillLoader::load(file.path()).unwrap()
    }

    #[test]
    fn loads_builtin_and_custom_entries() {
        let catalog = load_catalog();
        assert_eq!(catalog.ids().collect::<Vec<_>>(), ["fireball", "jab", "war_cry"]);

        let mut rng = PcgRng::new(4);
        let war_cry = catalog.build("war_cry", &mut rng).unwrap();
        assert_eq!(war_cry.behavior(), SkillBehavior::SELF_EFFECT);
        assert_eq!(war_cry.mana_cost(), 10);
        assert_eq!(war_cry.eligible(), CharacterKinds::WARRIOR);
        assert_eq!(war_cry.effects()[0].remaining_duration(), 3);

        let fireball = catalog.build("fireball", &mut rng).unwrap();
        assert_eq!(fireball.name(), "Fireball");
    }

    #[test]
    fn custom_defaults() {
        let jab = load_catalog().build("jab", &mut PcgRng::default()).unwrap();

        assert_eq!(jab.mana_cost(), 0);
        assert_eq!(jab.eligible(), CharacterKinds::all());
        assert!(jab.effects().is_empty());
    }

    #[test]
    fn unknown_ids_fall_back_to_builtins() {
        let catalog = SkillCatalog::default();

        let arrow = catalog.build("arrow", &mut PcgRng::default()).unwrap();
        assert_eq!(arrow.force(), 30);

        assert!(catalog.build("teleport", &mut PcgRng::default()).is_err());
    }

    #[test]
    fn unknown_behavior_is_rejected() {
        let spec = SkillSpec::Custom {
            name: "Blink".into(),
            behavior: vec!["teleport".into()],
            force: 0,
            mana_cost: 0,
            eligible: Vec::new(),
            effects: Vec::new(),
        };

        let err = spec.build(&mut PcgRng::default()).unwrap_err();
        assert!(err.to_string().contains("teleport"));
    }
}
