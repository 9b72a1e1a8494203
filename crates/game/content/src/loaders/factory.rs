//! Content factory for loading arena content from a data directory.

use std::path::{Path, PathBuf};

use game_core::GameConfig;

use crate::loaders::{
    ConfigLoader, LoadResult, Roster, RosterLoader, SkillCatalog, SkillLoader,
};

/// Content factory that loads all arena content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml
/// ├── skills.ron
/// └── roster.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load game configuration from `config.toml`.
    ///
    /// A missing file yields the default configuration.
    pub fn load_config(&self) -> LoadResult<GameConfig> {
        let path = self.data_dir.join("config.toml");
        if !path.exists() {
            return Ok(GameConfig::default());
        }
        ConfigLoader::load(&path)
    }

    /// Load the skill catalog from `skills.ron`.
    pub fn load_skills(&self) -> LoadResult<SkillCatalog> {
        let path = self.data_dir.join("skills.ron");
        SkillLoader::load(&path)
    }

    /// Load the roster from `roster.ron`.
    pub fn load_roster(&self) -> LoadResult<Roster> {
        let path = self.data_dir.join("roster.ron");
        RosterLoader::load(&path)
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_factory_paths() {
        let factory = ContentFactory::new("/tmp/data");
        assert_eq!(factory.data_dir(), Path::new("/tmp/data"));
    }

    #[test]
    fn missing_config_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let factory = ContentFactory::new(temp_dir.path());

        assert_eq!(factory.load_config().unwrap(), GameConfig::default());
        assert!(factory.load_roster().is_err());
    }

    #[test]
    fn loads_every_file() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(temp_dir.path().join("config.toml"), "max_rounds = 30\n").unwrap();
        std::fs::write(
            temp_dir.path().join("skills.ron"),
            r#"{ "bolt": Catalog(arrow) }"#,
        )
        .unwrap();
        std::fs::write(
            temp_dir.path().join("roster.ron"),
            r#"[(id: "robin", name: "Robin", kinds: [archer], skills: ["bolt"])]"#,
        )
        .unwrap();
        let factory = ContentFactory::new(temp_dir.path());

        assert_eq!(factory.load_config().unwrap().max_rounds, 30);
        assert_eq!(factory.load_skills().unwrap().len(), 1);
        assert_eq!(
            factory.load_roster().unwrap().ids().collect::<Vec<_>>(),
            ["robin"]
        );
    }
}
