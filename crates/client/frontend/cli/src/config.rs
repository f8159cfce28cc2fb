//! CLI-specific configuration.
use std::env;
use std::path::PathBuf;

/// Settings used by the terminal binary.
#[derive(Clone, Debug)]
pub struct CliConfig {
    /// Level text file loaded at startup.
    pub level_path: PathBuf,
    /// Names the log directory of this run. Generated when absent.
    pub session_id: Option<String>,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            level_path: PathBuf::from("assets/level1.map"),
            session_id: None,
        }
    }
}

impl CliConfig {
    /// Construct CLI configuration from environment variables.
    ///
    /// Environment variables:
    /// - `DUNGEON_LEVEL` - Level file (default: assets/level1.map)
    /// - `DUNGEON_SESSION` - Session id used for the log directory
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(path) = read_env::<PathBuf>("DUNGEON_LEVEL") {
            config.level_path = path;
        }
        config.session_id = read_env::<String>("DUNGEON_SESSION").filter(|id| !id.is_empty());

        config
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
