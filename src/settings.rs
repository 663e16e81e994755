//! Session settings
//!
//! Rules that are not balance numbers: seed, renderer surface size, and the
//! two policy hooks (scoring and the player's health floor).

use std::fs;
use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::{VIEWPORT_HEIGHT, VIEWPORT_WIDTH};
use crate::tuning::{Tuning, TuningError};

/// How the score counter reacts to a defeated monster
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreRule {
    /// Counter is exposed but never moves
    Disabled,
    /// Add `points` for every monster removed this tick
    PerDefeat { points: u64 },
}

impl Default for ScoreRule {
    fn default() -> Self {
        ScoreRule::PerDefeat { points: 1 }
    }
}

impl ScoreRule {
    /// Points awarded for `defeated` monsters
    pub fn award(&self, defeated: usize) -> u64 {
        match self {
            ScoreRule::Disabled => 0,
            ScoreRule::PerDefeat { points } => points * defeated as u64,
        }
    }
}

/// What happens when player health reaches zero
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HealthFloor {
    /// Health may go negative and the run continues
    Unbounded,
    /// Health clamps at zero and the run ends
    #[default]
    EndRun,
}

/// Game settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Renderer surface size in world units
    pub viewport_size: Vec2,
    pub score_rule: ScoreRule,
    pub health_floor: HealthFloor,
    /// Balance table
    pub tuning: Tuning,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            seed: 0x5eed,
            viewport_size: Vec2::new(VIEWPORT_WIDTH, VIEWPORT_HEIGHT),
            score_rule: ScoreRule::default(),
            health_floor: HealthFloor::default(),
            tuning: Tuning::default(),
        }
    }
}

impl Settings {
    /// Parse settings from JSON and validate the embedded tuning
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.tuning.validate()?;
        Ok(settings)
    }

    /// Load settings from a JSON file, falling back to defaults on any error
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        let loaded = fs::read_to_string(path)
            .map_err(|source| TuningError::Io {
                path: path.to_path_buf(),
                source,
            })
            .and_then(|json| Self::from_json(&json));

        match loaded {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                log::warn!("Using default settings: {}", e);
                Self::default()
            }
        }
    }

    /// Write settings as pretty JSON
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), TuningError> {
        let path = path.as_ref();
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json).map_err(|source| TuningError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        log::info!("Settings saved to {}", path.display());
        Ok(())
    }
}
