//! Game settings and preferences
//!
//! Persisted as JSON, separately from the high score. Gameplay rules are not
//! configurable; these only affect the shell around the simulation.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::consts::TARGET_FPS;
use crate::highscores::DEFAULT_SCORE_FILE;
use crate::persistence::{read_json, write_json};

/// Default location of the settings file
pub const DEFAULT_SETTINGS_FILE: &str = "Contents/settings.json";

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Storage ===
    /// Where the high score is kept
    pub score_file: String,

    // === Timing ===
    /// Frames (and simulation steps) per second
    pub target_fps: u32,

    // === Randomness ===
    /// Fixed RNG seed for reproducible obstacle layouts; random when absent
    pub seed: Option<u64>,

    // === Audio ===
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    /// Sound effects volume (0.0 - 1.0)
    pub sfx_volume: f32,
    pub muted: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            score_file: DEFAULT_SCORE_FILE.to_string(),
            target_fps: TARGET_FPS,
            seed: None,
            master_volume: 0.8,
            sfx_volume: 1.0,
            muted: false,
        }
    }
}

impl Settings {
    /// Duration of one frame at the target rate
    pub fn frame_duration(&self) -> Duration {
        let fps = self.target_fps.max(1);
        Duration::from_micros(1_000_000 / u64::from(fps))
    }

    /// Seed from settings, or a fresh random one
    pub fn resolve_seed(&self) -> u64 {
        self.seed.unwrap_or_else(rand::random)
    }

    /// Load settings from a JSON file, falling back to defaults
    pub fn load(path: &Path) -> Self {
        match read_json::<Settings>(path) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) if e.is_not_found() => {
                log::info!("Using default settings");
                Self::default()
            }
            Err(e) => {
                log::warn!("Ignoring bad settings file {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Save settings to a JSON file (best-effort)
    pub fn save(&self, path: &Path) {
        match write_json(path, self) {
            Ok(()) => log::info!("Settings saved"),
            Err(e) => log::warn!("Could not save settings to {}: {}", path.display(), e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.score_file, DEFAULT_SCORE_FILE);
        assert_eq!(settings.target_fps, 60);
        assert_eq!(settings.frame_duration(), Duration::from_micros(16_666));
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, r#"{"seed": 7, "muted": true}"#).unwrap();

        let settings = Settings::load(&path);
        assert_eq!(settings.seed, Some(7));
        assert!(settings.muted);
        assert_eq!(settings.target_fps, TARGET_FPS);
        assert_eq!(settings.resolve_seed(), 7);
    }

    #[test]
    fn test_bad_file_falls_back() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, "[1, 2").unwrap();
        assert_eq!(Settings::load(&path), Settings::default());
        assert_eq!(Settings::load(&dir.path().join("missing.json")), Settings::default());
    }

    #[test]
    fn test_save_and_reload() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("settings.json");
        let settings = Settings {
            target_fps: 30,
            sfx_volume: 0.5,
            ..Default::default()
        };
        settings.save(&path);
        assert_eq!(Settings::load(&path), settings);
    }

    #[test]
    fn test_zero_fps_does_not_divide_by_zero() {
        let settings = Settings {
            target_fps: 0,
            ..Default::default()
        };
        assert_eq!(settings.frame_duration(), Duration::from_secs(1));
    }
}
