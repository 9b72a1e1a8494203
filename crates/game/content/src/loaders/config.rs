//! Game configuration loader.

use std::path::Path;

use game_core::{GameConfig, LevelCurve};

use crate::loaders::{LoadResult, read_file};

/// Loader for game configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    ///
    /// Missing keys fall back to [`GameConfig::default`].
    pub fn load(path: &Path) -> LoadResult<GameConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML {}: {}", path.display(), e))
    }

    /// Parse config data from TOML text.
    ///
    /// Rejects a `level_threshold_base` outside `1..=LevelCurve::MAX_BASE`.
    pub fn parse(content: &str) -> LoadResult<GameConfig> {
        let config: GameConfig = toml::from_str(content)?;
        let base = config.level_threshold_base;
        if !(1..=LevelCurve::MAX_BASE).contains(&base) {
            anyhow::bail!(
                "level_threshold_base {} is out of range (1..={})",
                base,
                LevelCurve::MAX_BASE
            );
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn partial_config_keeps_defaults() {
        let config = ConfigLoader::parse("max_rounds = 12\nvictory_experience = 250\n").unwrap();

        assert_eq!(config.max_rounds, 12);
        assert_eq!(config.victory_experience, 250);
        assert_eq!(
            config.level_threshold_base,
            GameConfig::DEFAULT_LEVEL_THRESHOLD_BASE
        );
        assert_eq!(
            config.mana_regen_per_round,
            GameConfig::DEFAULT_MANA_REGEN_PER_ROUND
        );
    }

    #[test]
    fn level_threshold_base_must_fit_the_level_cap() {
        let err = ConfigLoader::parse("level_threshold_base = 0\n").unwrap_err();
        assert!(err.to_string().contains("level_threshold_base"));

        let too_large = LevelCurve::MAX_BASE + 1;
        let err = ConfigLoader::parse(&format!("level_threshold_base = {too_large}\n"))
            .unwrap_err();
        assert!(err.to_string().contains("out of range"));

        let config =
            ConfigLoader::parse(&format!("level_threshold_base = {}\n", LevelCurve::MAX_BASE))
                .unwrap();
        assert_eq!(config.level_curve().base(), LevelCurve::MAX_BASE);
    }

    #[test]
    fn load_reads_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "mana_regen_per_round = 3").unwrap();

        let config = ConfigLoader::load(file.path()).unwrap();

        assert_eq!(config.mana_regen_per_round, 3);
    }

    #[test]
    fn load_reports_path_on_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "max_rounds = \"many\"").unwrap();

        let err = ConfigLoader::load(file.path()).unwrap_err();

        assert!(err.to_string().contains("Failed to parse config TOML"));
    }
}
