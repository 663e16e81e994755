//! Monster spawn scheduling
//!
//! A countdown timer that fires on a random interval, redrawn after every
//! firing. Each firing plans one monster just outside a random edge of the
//! visible window.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::arena::{Edge, Viewport};
use super::monster::MonsterColor;
use crate::tuning::Tuning;

/// Where and what to spawn
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpawnPlan {
    pub edge: Edge,
    pub pos: Vec2,
    pub radius: f32,
    pub color: MonsterColor,
}

/// Randomized-interval spawn timer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpawnScheduler {
    /// Time until the next firing
    pub countdown_ms: f64,
    /// Firings so far
    pub total_spawned: u64,
}

impl SpawnScheduler {
    /// Arm the first interval
    pub fn new<R: Rng>(rng: &mut R, tuning: &Tuning) -> Self {
        Self {
            countdown_ms: draw_interval(rng, tuning),
            total_spawned: 0,
        }
    }

    /// Advance by `dt_ms` and plan at most one monster.
    ///
    /// Missed firings are not replayed: after a long pause the timer fires once
    /// and re-arms with a fresh interval. Non-finite or negative time counts as 0.
    pub fn advance<R: Rng>(
        &mut self,
        dt_ms: f64,
        rng: &mut R,
        tuning: &Tuning,
        viewport: &Viewport,
    ) -> Option<SpawnPlan> {
        let dt_ms = if dt_ms.is_finite() { dt_ms.max(0.0) } else { 0.0 };
        self.countdown_ms -= dt_ms;
        if self.countdown_ms > 0.0 {
            return None;
        }

        let plan = plan_spawn(rng, tuning, viewport);
        self.countdown_ms = draw_interval(rng, tuning);
        self.total_spawned += 1;
        Some(plan)
    }
}

fn draw_interval<R: Rng>(rng: &mut R, tuning: &Tuning) -> f64 {
    rng.random_range(tuning.spawn_min_interval_ms..tuning.spawn_max_interval_ms)
}

/// Pick an edge, a spot along it, a size and a color
pub fn plan_spawn<R: Rng>(rng: &mut R, tuning: &Tuning, viewport: &Viewport) -> SpawnPlan {
    let edge = Edge::ALL[rng.random_range(0..Edge::ALL.len())];
    let t: f32 = rng.random();
    let pos = viewport.point_outside(edge, t, tuning.spawn_margin);
    let radius = rng.random_range(tuning.monster_min_spawn_radius..tuning.monster_max_spawn_radius);
    let color = MonsterColor::ALL[rng.random_range(0..MonsterColor::ALL.len())];
    SpawnPlan {
        edge,
        pos,
        radius,
        color,
    }
}
