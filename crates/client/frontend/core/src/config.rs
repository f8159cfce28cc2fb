//! Frontend configuration structures and loaders.
//!
//! Settings shared by every presentation implementation. Each presentation
//! instance gets its own copy; nothing here is shared mutable state.

use std::env;
use std::path::PathBuf;
use std::time::Duration;

/// Frontend-specific configuration.
#[derive(Clone, Debug)]
pub struct FrontendConfig {
    pub camera: CameraConfig,
    pub render: RenderConfig,
    /// Sleep between presentation iterations.
    pub frame_delay: Duration,
    /// Location of the atlas index file.
    pub atlas_path: PathBuf,
}

impl Default for FrontendConfig {
    fn default() -> Self {
        Self {
            camera: CameraConfig::default(),
            render: RenderConfig::default(),
            frame_delay: Duration::from_millis(10),
            atlas_path: PathBuf::from("assets/atlas-index.txt"),
        }
    }
}

impl FrontendConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `DUNGEON_FRAME_DELAY_MS` - Delay between presentation frames (default: 10)
    /// - `DUNGEON_VARIANT_SEED` - Seed for tile variant selection (default: 1)
    /// - `DUNGEON_DEADZONE` - Camera deadzone in tiles (default: 5)
    /// - `DUNGEON_ATLAS` - Atlas index path (default: assets/atlas-index.txt)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(ms) = read_env::<u64>("DUNGEON_FRAME_DELAY_MS") {
            config.frame_delay = Duration::from_millis(ms);
        }
        if let Some(seed) = read_env::<u64>("DUNGEON_VARIANT_SEED") {
            config.render.variant_seed = seed;
        }
        if let Some(deadzone) = read_env::<i32>("DUNGEON_DEADZONE") {
            config.camera.deadzone = deadzone.max(0);
        }
        if let Some(path) = read_env::<PathBuf>("DUNGEON_ATLAS") {
            config.atlas_path = path;
        }

        config
    }
}

#[derive(Clone, Debug)]
pub struct CameraConfig {
    /// Distance in tiles the player may drift from the center before the
    /// camera starts following.
    pub deadzone: i32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self { deadzone: 5 }
    }
}

#[derive(Clone, Debug)]
pub struct RenderConfig {
    pub variant_seed: u64,
    /// Vertical pixel distance between event log lines.
    pub line_height: u32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            variant_seed: 1,
            line_height: 32,
        }
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
