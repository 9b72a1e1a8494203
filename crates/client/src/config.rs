//! Arena configuration structures and loaders.
use std::env;
use std::path::PathBuf;

/// Configuration required to set up and run one arena battle.
#[derive(Clone, Debug)]
pub struct ArenaConfig {
    /// Directory holding `config.toml`, `skills.ron` and `roster.ron`.
    pub data_dir: PathBuf,
    /// Seed for skill generation and selection; random when unset.
    pub seed: Option<u64>,
    /// Roster id of the first combatant.
    pub player: String,
    /// Roster id of the second combatant; a random casual enemy when unset.
    pub enemy: Option<String>,
    /// Directory receiving JSON snapshots of both combatants after the battle.
    pub save_dir: Option<PathBuf>,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(Self::DEFAULT_DATA_DIR),
            seed: None,
            player: Self::DEFAULT_PLAYER.to_owned(),
            enemy: None,
            save_dir: None,
        }
    }
}

impl ArenaConfig {
    pub const DEFAULT_DATA_DIR: &'static str = "data";
    pub const DEFAULT_PLAYER: &'static str = "nico";

    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `DATA_DIR` - Content directory (default: `data`)
    /// - `BATTLE_SEED` - Deterministic seed (default: random)
    /// - `PLAYER` - Roster id of the first combatant (default: `nico`)
    /// - `ENEMY` - Roster id of the second combatant (default: random casual enemy)
    /// - `SAVE_DIR` - Where to write character snapshots (default: not saved)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(dir) = env::var("DATA_DIR") {
            config.data_dir = PathBuf::from(dir);
        }

        config.seed = read_env::<u64>("BATTLE_SEED");

        if let Some(player) = read_non_empty("PLAYER") {
            config.player = player;
        }

        config.enemy = read_non_empty("ENEMY");
        config.save_dir = env::var("SAVE_DIR").ok().map(PathBuf::from);

        config
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}

fn read_non_empty(key: &str) -> Option<String> {
    env::var(key).ok().filter(|value| !value.trim().is_empty())
}
