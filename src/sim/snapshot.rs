//! Read-only frame view for the renderer

use glam::Vec2;
use serde::Serialize;

use super::arena::Viewport;
use super::monster::MonsterColor;
use super::state::GamePhase;

#[derive(Debug, Clone, Serialize)]
pub struct PlayerView {
    pub pos: Vec2,
    pub heading: f32,
    pub size: f32,
    pub health: i32,
    pub invincible: bool,
    /// Draw the invincibility halo this frame
    pub flash: bool,
    /// Sword tip while a swing is active
    pub sword_tip: Option<Vec2>,
}

#[derive(Debug, Clone, Serialize)]
pub struct MonsterView {
    pub id: u32,
    pub pos: Vec2,
    pub radius: f32,
    /// Breathing offset added to `radius` when drawing
    pub breath: f32,
    pub health: f32,
    pub health_fraction: f32,
    pub color: MonsterColor,
    pub hit: bool,
    /// Inside the viewport this frame
    pub visible: bool,
}

/// Everything drawn in one frame
#[derive(Debug, Clone, Serialize)]
pub struct FrameSnapshot {
    pub tick: u64,
    pub clock_ms: f64,
    pub phase: GamePhase,
    pub arena_extent: Vec2,
    pub viewport: Viewport,
    pub player: PlayerView,
    /// Every live monster, in id order
    pub monsters: Vec<MonsterView>,
    pub monster_count: usize,
    pub score: u64,
}
