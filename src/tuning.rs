//! Data-driven game balance
//!
//! Every gameplay number the simulation reads lives here. Defaults mirror
//! [`crate::consts`]; a JSON file may override any subset of them.

use std::fs;
use std::path::{Path, PathBuf};

use glam::Vec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// Failure loading or validating a tuning table
#[derive(Debug, Error)]
pub enum TuningError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("malformed tuning JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid tuning value `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// Gameplay constants
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Arena ===
    pub arena_width_tiles: u32,
    pub arena_height_tiles: u32,
    pub arena_unit: f32,

    // === Player ===
    pub player_start: Vec2,
    pub player_size: f32,
    pub player_start_health: i32,
    pub max_speed: f32,
    pub acceleration: f32,
    pub deceleration: f32,
    /// Radians per frame
    pub turn_rate: f32,

    // === Sword ===
    pub sword_reach_factor: f32,
    pub sword_tip_radius: f32,
    pub sword_damage: f32,
    pub swing_duration_ms: f64,

    // === Contact ===
    pub contact_grace_ms: f64,
    pub contact_damage: i32,
    pub invincible_duration_ms: f64,
    pub invincible_flash_ms: f64,

    // === Monsters ===
    pub monster_min_spawn_radius: f32,
    pub monster_max_spawn_radius: f32,
    pub monster_min_radius: f32,
    pub monster_size_speed_ref: f32,
    pub monster_speed_offset: f32,
    pub monster_health_per_radius: f32,
    pub monster_catch_up: f32,
    pub breath_step: f32,
    pub breath_limit: f32,

    // === Spawning ===
    pub spawn_min_interval_ms: f64,
    pub spawn_max_interval_ms: f64,
    pub spawn_margin: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            arena_width_tiles: ARENA_WIDTH_TILES,
            arena_height_tiles: ARENA_HEIGHT_TILES,
            arena_unit: ARENA_UNIT,

            player_start: Vec2::new(PLAYER_START_X, PLAYER_START_Y),
            player_size: PLAYER_SIZE,
            player_start_health: PLAYER_START_HEALTH,
            max_speed: PLAYER_MAX_SPEED,
            acceleration: PLAYER_ACCELERATION,
            deceleration: PLAYER_DECELERATION,
            turn_rate: PLAYER_TURN_RATE,

            sword_reach_factor: SWORD_REACH_FACTOR,
            sword_tip_radius: SWORD_TIP_RADIUS,
            sword_damage: SWORD_DAMAGE,
            swing_duration_ms: SWING_DURATION_MS,

            contact_grace_ms: CONTACT_GRACE_MS,
            contact_damage: CONTACT_DAMAGE,
            invincible_duration_ms: INVINCIBLE_DURATION_MS,
            invincible_flash_ms: INVINCIBLE_FLASH_MS,

            monster_min_spawn_radius: MONSTER_MIN_SPAWN_RADIUS,
            monster_max_spawn_radius: MONSTER_MAX_SPAWN_RADIUS,
            monster_min_radius: MONSTER_MIN_RADIUS,
            monster_size_speed_ref: MONSTER_SIZE_SPEED_REF,
            monster_speed_offset: MONSTER_SPEED_OFFSET,
            monster_health_per_radius: MONSTER_HEALTH_PER_RADIUS,
            monster_catch_up: MONSTER_CATCH_UP,
            breath_step: BREATH_STEP,
            breath_limit: BREATH_LIMIT,

            spawn_min_interval_ms: SPAWN_MIN_INTERVAL_MS,
            spawn_max_interval_ms: SPAWN_MAX_INTERVAL_MS,
            spawn_margin: SPAWN_MARGIN,
        }
    }
}

impl Tuning {
    /// Parse a (possibly partial) tuning table and validate it
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Read a tuning table from disk
    pub fn load(path: impl AsRef<Path>) -> Result<Self, TuningError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| TuningError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// Reject values the simulation cannot run with
    pub fn validate(&self) -> Result<(), TuningError> {
        fn invalid(field: &'static str, reason: impl Into<String>) -> TuningError {
            TuningError::Invalid {
                field,
                reason: reason.into(),
            }
        }

        if self.arena_width_tiles == 0 || self.arena_height_tiles == 0 {
            return Err(invalid("arena_width_tiles", "arena must be at least one tile"));
        }
        if self.arena_unit <= 0.0 {
            return Err(invalid("arena_unit", "must be positive"));
        }
        if self.player_size <= 0.0 {
            return Err(invalid("player_size", "must be positive"));
        }
        if self.player_size > self.arena_unit * self.arena_width_tiles.min(self.arena_height_tiles) as f32 {
            return Err(invalid("player_size", "player does not fit in the arena"));
        }
        if self.player_start_health <= 0 {
            return Err(invalid("player_start_health", "must be positive"));
        }
        if self.max_speed <= 0.0 {
            return Err(invalid("max_speed", "must be positive"));
        }
        if self.acceleration < 0.0 || self.deceleration < 0.0 {
            return Err(invalid("acceleration", "acceleration and deceleration must be >= 0"));
        }
        if self.monster_min_radius <= 0.0 {
            return Err(invalid("monster_min_radius", "must be positive"));
        }
        if self.monster_min_spawn_radius < self.monster_min_radius
            || self.monster_min_spawn_radius >= self.monster_max_spawn_radius
        {
            return Err(invalid(
                "monster_min_spawn_radius",
                format!(
                    "need {} <= min < max, got [{}, {})",
                    self.monster_min_radius, self.monster_min_spawn_radius, self.monster_max_spawn_radius
                ),
            ));
        }
        if self.monster_size_speed_ref <= 0.0 {
            return Err(invalid("monster_size_speed_ref", "must be positive"));
        }
        if self.spawn_min_interval_ms <= 0.0 || self.spawn_min_interval_ms >= self.spawn_max_interval_ms {
            return Err(invalid(
                "spawn_min_interval_ms",
                format!(
                    "need 0 < min < max, got [{}, {})",
                    self.spawn_min_interval_ms, self.spawn_max_interval_ms
                ),
            ));
        }
        if self.swing_duration_ms < 0.0
            || self.contact_grace_ms < 0.0
            || self.invincible_duration_ms < 0.0
        {
            return Err(invalid("swing_duration_ms", "durations must be >= 0"));
        }
        if self.invincible_flash_ms <= 0.0 {
            return Err(invalid("invincible_flash_ms", "must be positive"));
        }
        if self.contact_damage < 0 {
            return Err(invalid("contact_damage", "must be >= 0"));
        }
        if self.sword_damage < 0.0 {
            return Err(invalid("sword_damage", "must be >= 0"));
        }
        if self.spawn_margin < 0.0 {
            return Err(invalid("spawn_margin", "spawns must start off screen"));
        }
        Ok(())
    }

    /// Half the player's edge length; doubles as the contact radius
    #[inline]
    pub fn player_half_extent(&self) -> f32 {
        self.player_size / 2.0
    }

    /// Distance from the player's position to the sword tip
    #[inline]
    pub fn sword_reach(&self) -> f32 {
        self.player_half_extent() * self.sword_reach_factor
    }

    /// Starting health for a monster of the given radius
    #[inline]
    pub fn monster_health_for(&self, radius: f32) -> f32 {
        radius * self.monster_health_per_radius
    }

    /// Base speed for a monster of the given radius (bigger is slower)
    #[inline]
    pub fn monster_speed_for(&self, radius: f32) -> f32 {
        (self.monster_size_speed_ref - radius) / self.monster_size_speed_ref + self.monster_speed_offset
    }
}
