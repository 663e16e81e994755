//! Monsters: circles that chase the player and shrink when struck

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::tuning::Tuning;

/// Body color, picked at spawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MonsterColor {
    Blue,
    Green,
    Purple,
    Orange,
}

impl MonsterColor {
    pub const ALL: [MonsterColor; 4] = [
        MonsterColor::Blue,
        MonsterColor::Green,
        MonsterColor::Purple,
        MonsterColor::Orange,
    ];
}

/// A monster entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Monster {
    pub id: u32,
    pub pos: Vec2,
    pub radius: f32,
    pub health: f32,
    /// Health at spawn, for the health bar
    pub max_health: f32,
    /// Movement per tick while on screen
    pub speed: f32,
    pub color: MonsterColor,
    /// Set by a sword hit, consumed by the next snapshot
    pub hit: bool,
    /// Cosmetic pulse added to the radius, in `[-limit, limit]` give or take a step
    pub breath: f32,
    /// +1.0 or -1.0
    pub breath_dir: f32,
}

impl Monster {
    /// Health and speed both derive from the spawn radius
    pub fn new(id: u32, pos: Vec2, radius: f32, color: MonsterColor, tuning: &Tuning) -> Self {
        let health = tuning.monster_health_for(radius);
        Self {
            id,
            pos,
            radius,
            health,
            max_health: health,
            speed: tuning.monster_speed_for(radius),
            color,
            hit: false,
            breath: 0.0,
            breath_dir: 1.0,
        }
    }

    /// Step straight toward `target`; off-screen monsters move `catch_up` times faster
    pub fn seek(&mut self, target: Vec2, in_viewport: bool, catch_up: f32) {
        let Some(dir) = (target - self.pos).try_normalize() else {
            return;
        };
        let multiplier = if in_viewport { 1.0 } else { catch_up };
        self.pos += dir * self.speed * multiplier;
    }

    /// Take a sword hit. Returns true if this hit was fatal.
    pub fn apply_melee_damage(&mut self, amount: f32, min_radius: f32) -> bool {
        self.health -= amount;
        self.hit = true;
        self.radius = (self.radius - amount).max(min_radius);
        self.is_defeated()
    }

    #[inline]
    pub fn is_defeated(&self) -> bool {
        self.health <= 0.0
    }

    /// Radius used for sword hits, breathing included
    #[inline]
    pub fn hit_radius(&self) -> f32 {
        self.radius + self.breath
    }

    /// Advance the breathing pulse one frame
    pub fn breathe(&mut self, step: f32, limit: f32) {
        self.breath += self.breath_dir * step;
        if self.breath > limit || self.breath < -limit {
            self.breath_dir = -self.breath_dir;
        }
    }

    /// Remaining health as a fraction of spawn health
    pub fn health_fraction(&self) -> f32 {
        if self.max_health <= 0.0 {
            return 0.0;
        }
        (self.health / self.max_health).clamp(0.0, 1.0)
    }

    /// Read and clear the hit flag
    pub fn take_hit(&mut self) -> bool {
        std::mem::take(&mut self.hit)
    }
}
