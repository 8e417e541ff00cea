//! Persistent application settings (`voyage.json` in the config dir).
//!
//! Only ambient preferences live here - transition state (current scene,
//! lock) is never persisted.

use anyhow::{Context, Result};
use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::paths::{self, PathConfig};

/// Default world seed for scene generation.
pub const DEFAULT_SEED: u64 = 0x564f_5941_4745; // "VOYAGE"

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Deadtime between accepted wheel events, milliseconds.
    pub wheel_deadtime_ms: u64,
    /// Minimum swipe distance, points.
    pub swipe_threshold: f32,
    /// Show the "scroll to explore" hint on startup. Cleared after the
    /// first dismissal.
    pub show_hint: bool,
    /// Scene generation seed.
    pub seed: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            wheel_deadtime_ms: crate::core::input::WHEEL_DEADTIME_MS,
            swipe_threshold: crate::core::input::SWIPE_THRESHOLD,
            show_hint: true,
            seed: DEFAULT_SEED,
        }
    }
}

impl Settings {
    /// Load from the config dir; falls back to defaults on any failure.
    pub fn load(config: &PathConfig) -> Self {
        let path = paths::config_file("voyage.json", config);
        match std::fs::read_to_string(&path) {
            Ok(raw) => match serde_json::from_str(&raw) {
                Ok(settings) => {
                    info!("Settings loaded from {}", path.display());
                    settings
                }
                Err(e) => {
                    warn!("Settings file {} unreadable ({e}), using defaults", path.display());
                    Self::default()
                }
            },
            Err(_) => Self::default(),
        }
    }

    /// Write back to the config dir.
    pub fn save(&self, config: &PathConfig) -> Result<()> {
        let path = paths::config_file("voyage.json", config);
        let raw = serde_json::to_string_pretty(self)?;
        std::fs::write(&path, raw)
            .with_context(|| format!("Failed to write settings to {}", path.display()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roundtrip() {
        let dir = std::env::temp_dir().join("voyage_settings_test");
        let _ = std::fs::create_dir_all(&dir);
        let config = PathConfig {
            config_dir: Some(dir),
        };

        let mut settings = Settings::default();
        settings.show_hint = false;
        settings.wheel_deadtime_ms = 450;
        settings.save(&config).unwrap();

        let loaded = Settings::load(&config);
        assert!(!loaded.show_hint);
        assert_eq!(loaded.wheel_deadtime_ms, 450);
    }

    #[test]
    fn test_defaults_on_missing_file() {
        let config = PathConfig {
            config_dir: Some(std::env::temp_dir().join("voyage_settings_missing")),
        };
        let settings = Settings::load(&config);
        assert!(settings.show_hint);
        assert_eq!(settings.seed, DEFAULT_SEED);
    }
}
