//! Character roster loader.
//!
//! Roster entries reference skills by catalog id. Entries without skills get
//! the starter set of their first class.

use std::path::Path;

use game_core::{
    AttributePreset, Character, CharacterKind, CharacterKinds, GameConfig, RngOracle,
};
use serde::{Deserialize, Serialize};

use crate::archetypes::CharacterFactory;
use crate::loaders::{LoadResult, SkillCatalog, read_file};

/// One roster entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterSpec {
    pub id: String,
    pub name: String,
    pub kinds: Vec<CharacterKind>,
    #[serde(default)]
    pub preset: AttributePreset,
    /// Skill catalog ids, learned in order.
    #[serde(default)]
    pub skills: Vec<String>,
    /// Replaces the starter set with randomized attacks when `skills` is empty.
    #[serde(default)]
    pub random_skills: bool,
}

impl CharacterSpec {
    /// Builds a level 1 character on the configured level curve.
    pub fn build(
        &self,
        catalog: &SkillCatalog,
        config: &GameConfig,
        rng: &mut impl RngOracle,
    ) -> LoadResult<Character> {
        let Some(&primary) = self.kinds.first() else {
            anyhow::bail!("Character '{}' has no class", self.id);
        };
        let kinds: CharacterKinds = self.kinds.iter().copied().collect();

        let skills = if self.skills.is_empty() {
            CharacterFactory::starter_skills(primary, self.random_skills, rng)
        } else {
            self.skills
                .iter()
                .map(|id| catalog.build(id, rng))
                .collect::<LoadResult<Vec<_>>>()?
        };

        let mut character = Character::new(self.name.clone(), kinds, self.preset.table())
            .with_level_curve(config.level_curve());
        for skill in skills {
            let skill_name = skill.name().to_owned();
            character.learn_skill(skill).map_err(|e| {
                anyhow::anyhow!(
                    "Character '{}' cannot learn '{}': {}",
                    self.id,
                    skill_name,
                    e
                )
            })?;
        }

        Ok(character)
    }
}

/// Characters available to the arena.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Roster {
    entries: Vec<CharacterSpec>,
}

impl Roster {
    pub fn new(entries: Vec<CharacterSpec>) -> Self {
        Self { entries }
    }

    pub fn get(&self, id: &str) -> Option<&CharacterSpec> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.id.as_str())
    }

    pub fn entries(&self) -> &[CharacterSpec] {
        &self.entries
    }

    /// Builds the character registered as `id`.
    pub fn spawn(
        &self,
        id: &str,
        catalog: &SkillCatalog,
        config: &GameConfig,
        rng: &mut impl RngOracle,
    ) -> LoadResult<Character> {
        let spec = self
            .get(id)
            .ok_or_else(|| anyhow::anyhow!("Unknown roster id '{}'", id))?;
        spec.build(catalog, config, rng)
    }
}

/// Loader for rosters from RON files.
pub struct RosterLoader;

impl RosterLoader {
    /// Load a roster from a RON file.
    ///
    /// RON format: `[CharacterSpec, ...]` with unique ids.
    pub fn load(path: &Path) -> LoadResult<Roster> {
        let content = read_file(path)?;
        let entries: Vec<CharacterSpec> = ron::from_str(&content).map_err(|e| {
            anyhow::anyhow!("Failed to parse roster RON {}: {}", path.display(), e)
        })?;

        for (index, entry) in entries.iter().enumerate() {
            if entries[..index].iter().any(|other| other.id == entry.id) {
                anyhow::bail!("Duplicate roster id '{}' in {}", entry.id, path.display());
            }
        }

        Ok(Roster::new(entries))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::{AttributeKind, PcgRng};
    use std::io::Write;

    fn write_roster(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn spawns_entries_with_catalog_skills() {
        let file = write_roster(
            r#"[
                (id: "nico", name: "Nico", kinds: [wizard], skills: ["fireball", "heal"]),
                (id: "brute", name: "Brute", kinds: [warrior], preset: hard),
            ]"#,
        );
        let roster = RosterLoader::load(file.path()).unwrap();
        let config = GameConfig::default();
        let mut rng = PcgRng::new(8);

        let nico = roster
            .spawn("nico", &SkillCatalog::default(), &config, &mut rng)
            .unwrap();
        assert_eq!(nico.skills().len(), 2);
        assert_eq!(nico.attributes().value(AttributeKind::Hp), Some(100));

        let brute = roster
            .spawn("brute", &SkillCatalog::default(), &config, &mut rng)
            .unwrap();
        assert_eq!(brute.skills()[0].name(), "Basic Attack");
        assert_eq!(brute.attributes().value(AttributeKind::Hp), Some(300));
    }

    #[test]
    fn ineligible_skill_names_the_entry() {
        let file = write_roster(
            r#"[(id: "brute", name: "Brute", kinds: [warrior], skills: ["heal"])]"#,
        );
        let roster = RosterLoader::load(file.path()).unwrap();

        let err = roster
            .spawn(
                "brute",
                &SkillCatalog::default(),
                &GameConfig::default(),
                &mut PcgRng::default(),
            )
            .unwrap_err();

        assert!(err.to_string().contains("brute"));
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let file = write_roster(
            r#"[
                (id: "a", name: "A", kinds: [archer]),
                (id: "a", name: "B", kinds: [archer]),
            ]"#,
        );

        assert!(RosterLoader::load(file.path()).is_err());
    }

    #[test]
    fn level_curve_follows_config() {
        let spec = CharacterSpec {
            id: "robin".into(),
            name: "Robin".into(),
            kinds: vec![CharacterKind::Archer],
            preset: AttributePreset::Default,
            skills: Vec::new(),
            random_skills: false,
        };
        let config = GameConfig {
            level_threshold_base: 40,
            ..GameConfig::default()
        };

        let robin = spec
            .build(&SkillCatalog::default(), &config, &mut PcgRng::default())
            .unwrap();

        assert_eq!(robin.next_level_experience(), Some(40));
    }
}
