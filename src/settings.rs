//! Game configuration
//!
//! Loaded from an optional JSON file; any missing field takes its default.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::sim::Playfield;

/// Simulation configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Playfield size in simulation units (pixels)
    pub playfield: Playfield,
    /// Seed for gameplay and decorative randomness
    pub seed: u64,

    // === Presentation ===
    /// Background stars
    pub star_count: usize,
    /// Simultaneous explosions kept alive (oldest dropped beyond this)
    pub max_explosions: usize,

    // === Headless runner ===
    /// Stop an autopilot run after this many ticks even if it is still alive
    pub max_ticks: u64,
    /// Autopilot runs per invocation
    pub runs: u32,
    /// Leaderboard file (None keeps scores in memory only)
    pub highscores_path: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            playfield: Playfield::default(),
            seed: 0x5eed,

            star_count: 100,
            max_explosions: 64,

            max_ticks: 60 * 60 * 10,
            runs: 1,
            highscores_path: None,
        }
    }
}

impl Config {
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Load a config file, falling back to defaults if it is missing or invalid
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match std::fs::read_to_string(path) {
            Ok(json) => match Self::from_json(&json) {
                Ok(config) => {
                    log::info!("Loaded config from {}", path.display());
                    config
                }
                Err(e) => {
                    log::warn!("Invalid config {}: {}; using defaults", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                log::warn!("Could not read config {}: {}; using defaults", path.display(), e);
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = Config::from_json(r#"{ "seed": 7, "playfield": { "width": 640.0, "height": 480.0 } }"#)
            .unwrap();
        assert_eq!(config.seed, 7);
        assert_eq!(config.playfield, Playfield::new(640.0, 480.0));
        assert_eq!(config.star_count, 100);
        assert!(config.highscores_path.is_none());
    }

    #[test]
    fn test_json_roundtrip() {
        let config = Config {
            runs: 3,
            highscores_path: Some("scores.json".into()),
            ..Config::default()
        };
        let back = Config::from_json(&config.to_json().unwrap()).unwrap();
        assert_eq!(back.runs, 3);
        assert_eq!(back.highscores_path.as_deref(), Some("scores.json"));
    }

    #[test]
    fn test_missing_file_falls_back() {
        let config = Config::load("/definitely/not/here.json");
        assert_eq!(config.seed, Config::default().seed);
    }

    #[test]
    fn test_invalid_json_is_error() {
        assert!(Config::from_json("{ seed: }").is_err());
    }
}
