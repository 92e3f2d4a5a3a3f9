//! Game settings and tuning
//!
//! Stored as JSON. Missing fields fall back to their defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::{FACE_COUNT, GRID_SIZE};
use crate::sim::snake::Speedup;

/// Errors that can occur when loading or validating settings.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    /// Failed to read the settings file from disk.
    #[error("failed to read settings: {0}")]
    Read(#[source] std::io::Error),

    /// Failed to write the settings file to disk.
    #[error("failed to write settings: {0}")]
    Write(#[source] std::io::Error),

    /// Failed to parse JSON content.
    #[error("failed to parse settings: {0}")]
    Parse(#[source] serde_json::Error),

    /// Failed to serialize settings to JSON.
    #[error("failed to serialize settings: {0}")]
    Serialize(#[source] serde_json::Error),

    /// Values parsed but cannot be played with.
    #[error("invalid settings: {0}")]
    Invalid(String),
}

/// Starting speed presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Pace {
    Relaxed,
    #[default]
    Normal,
    Frantic,
}

impl Pace {
    pub fn as_str(&self) -> &'static str {
        match self {
            Pace::Relaxed => "Relaxed",
            Pace::Normal => "Normal",
            Pace::Frantic => "Frantic",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "relaxed" | "slow" => Some(Pace::Relaxed),
            "normal" => Some(Pace::Normal),
            "frantic" | "fast" => Some(Pace::Frantic),
            _ => None,
        }
    }

    /// Time between snake steps at the start of a run (ms)
    pub fn move_period_ms(&self) -> f64 {
        match self {
            Pace::Relaxed => 220.0,
            Pace::Normal => 150.0,
            Pace::Frantic => 90.0,
        }
    }
}

/// Game tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Starting speed preset
    pub pace: Pace,

    // === Snake ===
    /// Time between steps at the start of a run (ms)
    pub move_period_ms: f64,
    /// Move period multiplier per food eaten (0.95 = 5% faster)
    pub speedup_factor: f64,
    /// The move period never drops below this (ms)
    pub min_move_period_ms: f64,

    // === Board ===
    /// Food cells planted per run; eating them all wins
    pub food_count: usize,
    /// Obstacle cells planted per run
    pub obstacle_count: usize,

    // === Camera ===
    /// Yaw drift per tick while spinning (degrees)
    pub auto_spin_deg_per_tick: f32,
    /// Degrees of rotation per pixel of drag
    pub drag_sensitivity: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            pace: Pace::Normal,

            move_period_ms: Pace::Normal.move_period_ms(),
            speedup_factor: 0.95,
            min_move_period_ms: 40.0,

            food_count: 10,
            obstacle_count: 10,

            auto_spin_deg_per_tick: 0.3,
            drag_sensitivity: 0.25,
        }
    }
}

impl Settings {
    /// Create settings from a pace preset (applies preset defaults)
    pub fn from_pace(pace: Pace) -> Self {
        let mut settings = Self::default();
        settings.apply_pace(pace);
        settings
    }

    /// Apply a pace preset (updates the starting move period)
    pub fn apply_pace(&mut self, pace: Pace) {
        self.pace = pace;
        self.move_period_ms = pace.move_period_ms();
    }

    /// Speed-up applied when the snake eats
    pub fn speedup(&self) -> Speedup {
        Speedup {
            factor: self.speedup_factor,
            min_period_ms: self.min_move_period_ms,
        }
    }

    /// Check that a game can be planted and played with these values
    pub fn validate(&self) -> Result<(), SettingsError> {
        if !(self.move_period_ms > 0.0) {
            return Err(SettingsError::Invalid(format!(
                "move_period_ms must be positive, got {}",
                self.move_period_ms
            )));
        }
        if !(self.min_move_period_ms > 0.0 && self.min_move_period_ms <= self.move_period_ms) {
            return Err(SettingsError::Invalid(format!(
                "min_move_period_ms must be in (0, {}], got {}",
                self.move_period_ms, self.min_move_period_ms
            )));
        }
        if !(self.speedup_factor > 0.0 && self.speedup_factor <= 1.0) {
            return Err(SettingsError::Invalid(format!(
                "speedup_factor must be in (0, 1], got {}",
                self.speedup_factor
            )));
        }
        if self.food_count == 0 {
            return Err(SettingsError::Invalid("food_count must be at least 1".into()));
        }

        // The snake's cell and the cell ahead of it stay free
        let cells = FACE_COUNT * (GRID_SIZE * GRID_SIZE) as usize;
        if self.food_count + self.obstacle_count > cells - 2 {
            return Err(SettingsError::Invalid(format!(
                "{} food + {} obstacles do not fit on {} cells",
                self.food_count, self.obstacle_count, cells
            )));
        }
        Ok(())
    }

    /// Parse and validate settings from JSON
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Settings = serde_json::from_str(json).map_err(SettingsError::Parse)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a JSON file
    pub fn load_from(path: &Path) -> Result<Self, SettingsError> {
        let json = std::fs::read_to_string(path).map_err(SettingsError::Read)?;
        Self::from_json(&json)
    }

    /// Load settings from `path`, falling back to defaults on any error
    pub fn load(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            log::info!("Using default settings");
            return Self::default();
        };

        match Self::load_from(path) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                log::warn!("{e}; using default settings");
                Self::default()
            }
        }
    }

    /// Write settings as pretty JSON
    pub fn save(&self, path: &Path) -> Result<(), SettingsError> {
        let json = serde_json::to_string_pretty(self).map_err(SettingsError::Serialize)?;
        std::fs::write(path, json).map_err(SettingsError::Write)?;
        log::info!("Settings saved to {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let settings = Settings::default();
        settings.validate().unwrap();
        assert_eq!(settings.move_period_ms, 150.0);
        assert_eq!(settings.food_count, 10);
        assert_eq!(settings.obstacle_count, 10);
    }

    #[test]
    fn test_pace_presets() {
        assert_eq!(Pace::from_str("FAST"), Some(Pace::Frantic));
        assert_eq!(Pace::from_str("relaxed"), Some(Pace::Relaxed));
        assert_eq!(Pace::from_str("warp"), None);

        let settings = Settings::from_pace(Pace::Relaxed);
        assert_eq!(settings.pace, Pace::Relaxed);
        assert_eq!(settings.move_period_ms, 220.0);
        settings.validate().unwrap();
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let settings = Settings::from_json(r#"{ "food_count": 3 }"#).unwrap();
        assert_eq!(settings.food_count, 3);
        assert_eq!(settings.obstacle_count, 10);
        assert_eq!(settings.speedup_factor, 0.95);
    }

    #[test]
    fn test_invalid_values_rejected() {
        let err = Settings::from_json(r#"{ "speedup_factor": 1.5 }"#).unwrap_err();
        assert!(matches!(err, SettingsError::Invalid(_)), "{err}");

        let err = Settings::from_json(r#"{ "min_move_period_ms": 500.0 }"#).unwrap_err();
        assert!(matches!(err, SettingsError::Invalid(_)), "{err}");

        let err = Settings::from_json(r#"{ "food_count": 1000, "obstacle_count": 536 }"#)
            .unwrap_err();
        assert!(matches!(err, SettingsError::Invalid(_)), "{err}");

        let err = Settings::from_json(r#"{ "food_count": 0 }"#).unwrap_err();
        assert!(matches!(err, SettingsError::Invalid(_)), "{err}");

        let err = Settings::from_json("{ not json").unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)), "{err}");
    }

    #[test]
    fn test_board_capacity_boundary() {
        // 6 * 16 * 16 = 1536 cells, two reserved for the snake and its first step
        let full = Settings::from_json(r#"{ "food_count": 1, "obstacle_count": 1533 }"#).unwrap();
        assert_eq!(full.food_count + full.obstacle_count, 1534);

        let err = Settings::from_json(r#"{ "food_count": 1, "obstacle_count": 1534 }"#)
            .unwrap_err();
        assert!(matches!(err, SettingsError::Invalid(_)), "{err}");
    }

    #[test]
    fn test_save_and_load_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");

        let settings = Settings {
            obstacle_count: 25,
            ..Settings::from_pace(Pace::Frantic)
        };
        settings.save(&path).unwrap();

        assert_eq!(Settings::load_from(&path).unwrap(), settings);
        assert_eq!(Settings::load(Some(path.as_path())), settings);
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.json");

        assert!(matches!(
            Settings::load_from(&path),
            Err(SettingsError::Read(_))
        ));
        assert_eq!(Settings::load(Some(path.as_path())), Settings::default());
    }
}
