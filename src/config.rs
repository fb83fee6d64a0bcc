//! Runtime configuration
//!
//! Gameplay rules are fixed in [`crate::consts`]; this only covers what the
//! host page decides: canvas geometry, the RNG seed and log verbosity.

use serde::{Deserialize, Serialize};

use crate::consts::{FIELD_HEIGHT, FIELD_WIDTH};

/// Playfield geometry in canvas pixels
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Field {
    pub width: f32,
    pub height: f32,
}

impl Default for Field {
    fn default() -> Self {
        Self {
            width: FIELD_WIDTH,
            height: FIELD_HEIGHT,
        }
    }
}

impl Field {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Horizontal center of the canvas
    pub fn center_x(&self) -> f32 {
        self.width / 2.0
    }
}

/// Host-provided settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Playfield size (the web build overrides this with the canvas size)
    pub field: Field,
    /// RNG seed for hit angle/power; wall clock when absent
    pub seed: Option<u64>,
    /// Log level name ("error", "warn", "info", "debug", "trace")
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            field: Field::default(),
            seed: None,
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    /// Parse from JSON; missing keys fall back to defaults
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Effective log filter; unknown names fall back to `Info`
    pub fn log_filter(&self) -> log::LevelFilter {
        self.log_level.parse().unwrap_or(log::LevelFilter::Info)
    }

    /// Seed to use, given the current wall-clock time in ms
    pub fn seed_or(&self, now_ms: f64) -> u64 {
        self.seed.unwrap_or(now_ms as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = Config::from_json(r#"{"seed": 42}"#).unwrap();
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.field, Field::default());
        assert_eq!(config.log_filter(), log::LevelFilter::Info);
    }

    #[test]
    fn test_log_filter_parsing() {
        let config = Config {
            log_level: "debug".into(),
            ..Default::default()
        };
        assert_eq!(config.log_filter(), log::LevelFilter::Debug);

        let config = Config {
            log_level: "loud".into(),
            ..Default::default()
        };
        assert_eq!(config.log_filter(), log::LevelFilter::Info);
    }

    #[test]
    fn test_seed_falls_back_to_clock() {
        let config = Config::default();
        assert_eq!(config.seed_or(1234.9), 1234);
        let config = Config {
            seed: Some(7),
            ..Default::default()
        };
        assert_eq!(config.seed_or(1234.9), 7);
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        assert!(Config::from_json("{seed: nope}").is_err());
    }
}
