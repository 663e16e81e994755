//! Monster Slayer - A top-down survival arena
//!
//! Core modules:
//! - `sim`: Deterministic simulation (kinematics, combat, timers, spawning)
//! - `input`: Held-key tracking feeding the simulation
//! - `settings`: Session rules loaded from JSON
//! - `tuning`: Data-driven game balance

pub mod input;
pub mod settings;
pub mod sim;
pub mod tuning;

pub use settings::{HealthFloor, ScoreRule, Settings};
pub use tuning::{Tuning, TuningError};

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Nominal frame length (ms) for callers driving the sim at 60 Hz
    pub const FRAME_MS: f64 = 1000.0 / 60.0;

    /// Arena dimensions, in tiles
    pub const ARENA_WIDTH_TILES: u32 = 500;
    pub const ARENA_HEIGHT_TILES: u32 = 500;
    /// Tile edge length in world units
    pub const ARENA_UNIT: f32 = 32.0;

    /// Player spawn point
    pub const PLAYER_START_X: f32 = 400.0;
    pub const PLAYER_START_Y: f32 = 300.0;
    /// Player square edge length (half of it is the contact radius)
    pub const PLAYER_SIZE: f32 = 30.0;
    pub const PLAYER_START_HEALTH: i32 = 100;
    pub const PLAYER_MAX_SPEED: f32 = 8.0;
    pub const PLAYER_ACCELERATION: f32 = 0.4;
    pub const PLAYER_DECELERATION: f32 = 0.1;
    /// Heading change per frame (5 degrees)
    pub const PLAYER_TURN_RATE: f32 = 5.0 * (std::f32::consts::PI / 180.0);

    /// Sword reach, as a multiple of the player's half-extent
    pub const SWORD_REACH_FACTOR: f32 = 4.0;
    pub const SWORD_TIP_RADIUS: f32 = 10.0;
    pub const SWORD_DAMAGE: f32 = 5.0;
    pub const SWING_DURATION_MS: f64 = 150.0;

    /// Sustained contact required before damage lands
    pub const CONTACT_GRACE_MS: f64 = 1000.0;
    pub const CONTACT_DAMAGE: i32 = 6;
    pub const INVINCIBLE_DURATION_MS: f64 = 3000.0;
    /// Flash toggle period while invincible
    pub const INVINCIBLE_FLASH_MS: f64 = 100.0;

    /// Monster size range at spawn (min inclusive, max exclusive)
    pub const MONSTER_MIN_SPAWN_RADIUS: f32 = 20.0;
    pub const MONSTER_MAX_SPAWN_RADIUS: f32 = 40.0;
    /// Monsters never shrink below this
    pub const MONSTER_MIN_RADIUS: f32 = 10.0;
    /// Speed = (SIZE_SPEED_REF - radius) / SIZE_SPEED_REF + SPEED_OFFSET
    pub const MONSTER_SIZE_SPEED_REF: f32 = 40.0;
    pub const MONSTER_SPEED_OFFSET: f32 = 0.5;
    /// Health per unit of radius
    pub const MONSTER_HEALTH_PER_RADIUS: f32 = 2.0;
    /// Speed multiplier while off-screen
    pub const MONSTER_CATCH_UP: f32 = 2.0;

    /// Breathing animation
    pub const BREATH_STEP: f32 = 0.05;
    pub const BREATH_LIMIT: f32 = 2.0;

    /// Spawn interval range (ms)
    pub const SPAWN_MIN_INTERVAL_MS: f64 = 1000.0;
    pub const SPAWN_MAX_INTERVAL_MS: f64 = 3000.0;
    /// Distance outside the visible region where monsters appear
    pub const SPAWN_MARGIN: f32 = 30.0;

    /// Default renderer surface size
    pub const VIEWPORT_WIDTH: f32 = 800.0;
    pub const VIEWPORT_HEIGHT: f32 = 600.0;
}

/// Unit vector for a heading angle
#[inline]
pub fn heading_vector(theta: f32) -> Vec2 {
    polar_to_cartesian(1.0, theta)
}

/// Convert polar (r, theta) to cartesian (x, y)
#[inline]
pub fn polar_to_cartesian(r: f32, theta: f32) -> Vec2 {
    Vec2::new(r * theta.cos(), r * theta.sin())
}
