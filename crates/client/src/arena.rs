//! Arena assembly: content loading, character spawning and the battle run.

use std::path::Path;

use anyhow::{Context, Result};
use game_content::{CharacterFactory, ContentFactory};
use game_core::{Character, CharacterSnapshot, LevelCurve, PcgRng, Side, compute_seed};
use runtime::{BattleRunner, BattleSummary, RandomSelector};

use crate::config::ArenaConfig;

/// Seed contexts, so each consumer draws an independent stream.
const SPAWN_CONTEXT: u32 = 0;
const SELECT_CONTEXT: u32 = 1;

/// Everything produced by one arena battle.
#[derive(Debug)]
pub struct ArenaReport {
    pub seed: u64,
    pub player: Character,
    pub enemy: Character,
    pub summary: BattleSummary,
}

/// Loads content, spawns both combatants and runs the battle.
pub fn run_battle(config: &ArenaConfig) -> Result<ArenaReport> {
    let seed = config.seed.unwrap_or_else(rand::random);
    tracing::info!(seed, data_dir = %config.data_dir.display(), "preparing arena");

    let content = ContentFactory::new(&config.data_dir);
    let game_config = content.load_config()?;
    let skills = content.load_skills()?;
    let roster = content.load_roster()?;

    let mut player = roster.spawn(
        &config.player,
        &skills,
        &game_config,
        &mut PcgRng::new(compute_seed(seed, 0, 0, SPAWN_CONTEXT)),
    )?;

    let mut enemy_rng = PcgRng::new(compute_seed(seed, 0, 1, SPAWN_CONTEXT));
    let mut enemy = match &config.enemy {
        Some(id) => roster.spawn(id, &skills, &game_config, &mut enemy_rng)?,
        None => CharacterFactory::create_random_casual_enemy(&mut enemy_rng)?
            .with_level_curve(game_config.level_curve()),
    };

    let mut runner = BattleRunner::builder()
        .game_config(&game_config)
        .selector(
            Side::First,
            RandomSelector::new(compute_seed(seed, 0, 0, SELECT_CONTEXT)),
        )
        .selector(
            Side::Second,
            RandomSelector::new(compute_seed(seed, 0, 1, SELECT_CONTEXT)),
        )
        .build()?;

    let summary = runner.run(&mut player, &mut enemy)?;

    if let Some(dir) = &config.save_dir {
        save_snapshot(dir, "player", &player)?;
        save_snapshot(dir, "enemy", &enemy)?;
    }

    Ok(ArenaReport {
        seed,
        player,
        enemy,
        summary,
    })
}

/// Writes `character` as `<dir>/<label>.json` in the persisted snapshot form.
pub fn save_snapshot(dir: &Path, label: &str, character: &Character) -> Result<()> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create save directory {}", dir.display()))?;

    let path = dir.join(format!("{label}.json"));
    let json = serde_json::to_string_pretty(&character.snapshot())?;
    std::fs::write(&path, json)
        .with_context(|| format!("Failed to write snapshot {}", path.display()))?;

    tracing::info!(path = %path.display(), "snapshot saved");
    Ok(())
}

/// Reads a snapshot written by [`save_snapshot`], restoring progression on
/// `curve` (the loaded `GameConfig::level_curve`).
pub fn load_snapshot(path: &Path, curve: LevelCurve) -> Result<Character> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read snapshot {}", path.display()))?;
    let snapshot: CharacterSnapshot = serde_json::from_str(&json)
        .with_context(|| format!("Failed to parse snapshot {}", path.display()))?;
    snapshot
        .to_character_with_curve(curve)
        .with_context(|| format!("Invalid snapshot {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_content(dir: &Path) {
        std::fs::write(dir.join("config.toml"), "max_rounds = 50\n").unwrap();
        std::fs::write(dir.join("skills.ron"), r#"{ "fireball": Catalog(fireball) }"#).unwrap();
        std::fs::write(
            dir.join("roster.ron"),
            r#"[
                (id: "nico", name: "Nico", kinds: [wizard], skills: ["fireball", "heal"]),
                (id: "brute", name: "Brute", kinds: [warrior], preset: easy),
            ]"#,
        )
        .unwrap();
    }

    #[test]
    fn same_seed_same_battle() {
        let temp_dir = TempDir::new().unwrap();
        write_content(temp_dir.path());
        let config = ArenaConfig {
            data_dir: temp_dir.path().to_path_buf(),
            seed: Some(1234),
            enemy: Some("brute".into()),
            ..ArenaConfig::default()
        };

        let first = run_battle(&config).unwrap();
        let second = run_battle(&config).unwrap();

        assert_eq!(first.seed, 1234);
        assert_eq!(first.summary, second.summary);
        assert_eq!(first.player, second.player);
        assert!(first.summary.rounds <= 50);
    }

    #[test]
    fn snapshots_round_trip_through_save_dir() {
        let temp_dir = TempDir::new().unwrap();
        write_content(temp_dir.path());
        std::fs::write(
            temp_dir.path().join("config.toml"),
            "max_rounds = 50\nlevel_threshold_base = 40\n",
        )
        .unwrap();
        let save_dir = temp_dir.path().join("saves");
        let config = ArenaConfig {
            data_dir: temp_dir.path().to_path_buf(),
            seed: Some(99),
            save_dir: Some(save_dir.clone()),
            ..ArenaConfig::default()
        };

        let report = run_battle(&config).unwrap();
        let curve = LevelCurve::new(40);

        let restored = load_snapshot(&save_dir.join("player.json"), curve).unwrap();
        assert_eq!(restored, report.player);
        assert_eq!(restored.experience_system().curve(), curve);
        assert_eq!(
            restored.next_level_experience(),
            report.player.next_level_experience()
        );

        let enemy = load_snapshot(&save_dir.join("enemy.json"), curve).unwrap();
        assert_eq!(enemy, report.enemy);
    }

    #[test]
    fn malformed_snapshot_names_the_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("broken.json");
        std::fs::write(
            &path,
            r#"{"name":"X","type":["wizard"],"attributes":[],
                "experienceSystem":{"experience":0,"level":1},
                "skills":[],"activeEffects":[]}"#,
        )
        .unwrap();

        let err = load_snapshot(&path, LevelCurve::default()).unwrap_err();
        assert!(err.to_string().contains("broken.json"));
    }

    #[test]
    fn unknown_player_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        write_content(temp_dir.path());
        let config = ArenaConfig {
            data_dir: temp_dir.path().to_path_buf(),
            seed: Some(1),
            player: "ghost".into(),
            ..ArenaConfig::default()
        };

        let err = run_battle(&config).unwrap_err();
        assert!(err.to_string().contains("ghost"));
    }
}
