//! The player: a steerable square with a sword
//!
//! Movement is tank-style. Throttle changes a signed scalar speed, steering
//! rotates the heading, and integration moves along the heading. The player
//! also owns three timers: the sword swing window, the sustained-contact
//! grace period and post-hit invincibility.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::arena::Arena;
use super::collision::overlapping;
use super::monster::Monster;
use crate::heading_vector;
use crate::tuning::Tuning;

/// Throttle direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Throttle {
    Forward,
    Reverse,
}

/// Steering direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Steer {
    Left,
    Right,
}

/// Fixed per-run player characteristics
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlayerStats {
    pub size: f32,
    pub max_speed: f32,
    pub acceleration: f32,
    pub deceleration: f32,
    pub turn_rate: f32,
    pub sword_reach: f32,
    pub swing_duration_ms: f64,
    pub contact_grace_ms: f64,
    pub contact_damage: i32,
    pub invincible_duration_ms: f64,
    pub invincible_flash_ms: f64,
}

impl PlayerStats {
    pub fn from_tuning(tuning: &Tuning) -> Self {
        Self {
            size: tuning.player_size,
            max_speed: tuning.max_speed,
            acceleration: tuning.acceleration,
            deceleration: tuning.deceleration,
            turn_rate: tuning.turn_rate,
            sword_reach: tuning.sword_reach(),
            swing_duration_ms: tuning.swing_duration_ms,
            contact_grace_ms: tuning.contact_grace_ms,
            contact_damage: tuning.contact_damage,
            invincible_duration_ms: tuning.invincible_duration_ms,
            invincible_flash_ms: tuning.invincible_flash_ms,
        }
    }

    #[inline]
    pub fn half_extent(&self) -> f32 {
        self.size / 2.0
    }
}

/// The player's actor
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub pos: Vec2,
    /// Radians, unbounded
    pub heading: f32,
    /// Signed, within `[-max_speed / 2, max_speed]`
    pub speed: f32,
    pub health: i32,
    /// Clock time invincibility began
    pub invincible_since: Option<f64>,
    /// Clock time the current unbroken contact began
    pub contact_since: Option<f64>,
    /// Time left in the current swing (0 = not swinging)
    pub swing_remaining_ms: f64,
    pub stats: PlayerStats,
}

impl Player {
    pub fn new(pos: Vec2, health: i32, stats: PlayerStats) -> Self {
        Self {
            pos,
            heading: 0.0,
            speed: 0.0,
            health,
            invincible_since: None,
            contact_since: None,
            swing_remaining_ms: 0.0,
            stats,
        }
    }

    pub fn from_tuning(tuning: &Tuning) -> Self {
        Self::new(
            tuning.player_start,
            tuning.player_start_health,
            PlayerStats::from_tuning(tuning),
        )
    }

    /// Speed up or back off; reverse tops out at half of forward
    pub fn apply_throttle(&mut self, throttle: Throttle) {
        let s = &self.stats;
        self.speed = match throttle {
            Throttle::Forward => (self.speed + s.acceleration).min(s.max_speed),
            Throttle::Reverse => (self.speed - s.acceleration).max(-s.max_speed / 2.0),
        };
    }

    pub fn steer(&mut self, steer: Steer) {
        match steer {
            Steer::Left => self.heading -= self.stats.turn_rate,
            Steer::Right => self.heading += self.stats.turn_rate,
        }
    }

    /// Move along the heading, stay inside the arena, then coast down
    pub fn integrate(&mut self, arena: &Arena) {
        if self.speed != 0.0 {
            self.pos += heading_vector(self.heading) * self.speed;
            self.pos = arena.clamp_box(self.pos, self.stats.size);
        }

        let decel = self.stats.deceleration;
        if self.speed > 0.0 {
            self.speed = (self.speed - decel).max(0.0);
        } else if self.speed < 0.0 {
            self.speed = (self.speed + decel).min(0.0);
        }
    }

    #[inline]
    pub fn contact_radius(&self) -> f32 {
        self.stats.half_extent()
    }

    #[inline]
    pub fn is_invincible(&self) -> bool {
        self.invincible_since.is_some()
    }

    /// Run the contact state machine for this frame.
    ///
    /// Returns true if contact damage landed. Damage needs `contact_grace_ms`
    /// of unbroken contact and no active invincibility; it then starts a new
    /// invincibility window. Breaking contact restarts the grace period.
    pub fn evaluate_contact(&mut self, monsters: &[Monster], now: f64) -> bool {
        let touching = overlapping(
            self.pos,
            self.contact_radius(),
            monsters.iter().map(|m| (m.pos, m.radius)),
        )
        .next()
        .is_some();

        let mut damaged = false;
        if touching {
            match self.contact_since {
                None => self.contact_since = Some(now),
                Some(start) => {
                    if now - start >= self.stats.contact_grace_ms && !self.is_invincible() {
                        self.health -= self.stats.contact_damage;
                        self.invincible_since = Some(now);
                        damaged = true;
                    }
                }
            }
        } else {
            self.contact_since = None;
        }

        if let Some(start) = self.invincible_since
            && now - start >= self.stats.invincible_duration_ms
        {
            self.invincible_since = None;
        }

        damaged
    }

    /// Flash phase for the invincibility effect (on for even intervals)
    pub fn flash_visible(&self, now: f64) -> bool {
        match self.invincible_since {
            Some(start) => {
                let intervals = ((now - start) / self.stats.invincible_flash_ms).floor() as i64;
                intervals % 2 == 0
            }
            None => false,
        }
    }

    /// Start a swing; returns false if one is already in progress
    pub fn trigger_swing(&mut self) -> bool {
        if self.is_swinging() {
            return false;
        }
        self.swing_remaining_ms = self.stats.swing_duration_ms;
        true
    }

    /// Count the swing window down by `dt_ms`
    pub fn advance_swing(&mut self, dt_ms: f64) {
        self.swing_remaining_ms = (self.swing_remaining_ms - dt_ms).max(0.0);
    }

    #[inline]
    pub fn is_swinging(&self) -> bool {
        self.swing_remaining_ms > 0.0
    }

    /// Point the sword reaches along the heading
    pub fn sword_tip(&self) -> Vec2 {
        self.pos + heading_vector(self.heading) * self.stats.sword_reach
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::monster::MonsterColor;
    use proptest::prelude::*;

    fn player() -> Player {
        Player::from_tuning(&Tuning::default())
    }

    fn monster_at(pos: Vec2) -> Monster {
        Monster::new(1, pos, 30.0, MonsterColor::Blue, &Tuning::default())
    }

    #[test]
    fn test_forward_tick_scenario() {
        let arena = Arena::new(500, 500, 32.0);
        let mut p = player();
        assert_eq!(p.pos, Vec2::new(400.0, 300.0));

        p.apply_throttle(Throttle::Forward);
        assert!((p.speed - 0.4).abs() < 1e-6);

        p.integrate(&arena);
        assert!((p.pos.x - 400.4).abs() < 1e-4);
        assert!((p.pos.y - 300.0).abs() < 1e-4);
        assert!((p.speed - 0.3).abs() < 1e-6);
    }

    #[test]
    fn test_throttle_limits() {
        let mut p = player();
        for _ in 0..100 {
            p.apply_throttle(Throttle::Forward);
        }
        assert_eq!(p.speed, 8.0);
        for _ in 0..100 {
            p.apply_throttle(Throttle::Reverse);
        }
        assert_eq!(p.speed, -4.0);
    }

    #[test]
    fn test_steer() {
        let mut p = player();
        p.steer(Steer::Right);
        p.steer(Steer::Right);
        p.steer(Steer::Left);
        assert!((p.heading - 5.0_f32.to_radians()).abs() < 1e-6);
    }

    #[test]
    fn test_decay_lands_on_zero() {
        let arena = Arena::new(500, 500, 32.0);
        let mut p = player();
        p.speed = 0.05;
        p.integrate(&arena);
        assert_eq!(p.speed, 0.0);

        p.speed = -0.05;
        p.integrate(&arena);
        assert_eq!(p.speed, 0.0);
    }

    #[test]
    fn test_clamped_at_wall() {
        let arena = Arena::new(500, 500, 32.0);
        let mut p = player();
        p.pos = Vec2::new(2.0, 100.0);
        p.heading = std::f32::consts::PI;
        p.speed = 8.0;
        p.integrate(&arena);
        assert_eq!(p.pos.x, 0.0);
    }

    #[test]
    fn test_contact_grace_then_damage_then_invincible() {
        let mut p = player();
        let monsters = vec![monster_at(p.pos + Vec2::new(20.0, 0.0))];

        assert!(!p.evaluate_contact(&monsters, 0.0));
        assert_eq!(p.contact_since, Some(0.0));
        assert!(!p.evaluate_contact(&monsters, 999.0));
        assert_eq!(p.health, 100);

        assert!(p.evaluate_contact(&monsters, 1000.0));
        assert_eq!(p.health, 94);
        assert!(p.is_invincible());

        // Still touching, but invincible
        assert!(!p.evaluate_contact(&monsters, 2500.0));
        assert!(!p.evaluate_contact(&monsters, 3999.0));
        assert_eq!(p.health, 94);

        // Window closes at 4000; the next frame hits again
        assert!(!p.evaluate_contact(&monsters, 4000.0));
        assert!(!p.is_invincible());
        assert!(p.evaluate_contact(&monsters, 4016.0));
        assert_eq!(p.health, 88);
    }

    #[test]
    fn test_breaking_contact_restarts_grace() {
        let mut p = player();
        let near = vec![monster_at(p.pos + Vec2::new(20.0, 0.0))];
        let far = vec![monster_at(p.pos + Vec2::new(500.0, 0.0))];

        p.evaluate_contact(&near, 0.0);
        p.evaluate_contact(&far, 900.0);
        assert_eq!(p.contact_since, None);

        p.evaluate_contact(&near, 950.0);
        assert!(!p.evaluate_contact(&near, 1500.0));
        assert!(p.evaluate_contact(&near, 1950.0));
    }

    #[test]
    fn test_contact_uses_half_extent() {
        let mut p = player();
        // 15 + 30 = 45
        let touching = vec![monster_at(p.pos + Vec2::new(45.0, 0.0))];
        let apart = vec![monster_at(p.pos + Vec2::new(45.5, 0.0))];
        p.evaluate_contact(&touching, 0.0);
        assert!(p.contact_since.is_some());
        p.evaluate_contact(&apart, 10.0);
        assert!(p.contact_since.is_none());
    }

    #[test]
    fn test_swing_window() {
        let mut p = player();
        assert!(p.trigger_swing());
        assert!(!p.trigger_swing());
        p.advance_swing(100.0);
        assert!(p.is_swinging());
        p.advance_swing(50.0);
        assert!(!p.is_swinging());
        assert!(p.trigger_swing());
    }

    #[test]
    fn test_sword_tip() {
        let mut p = player();
        p.heading = std::f32::consts::FRAC_PI_2;
        let tip = p.sword_tip();
        assert!((tip.x - 400.0).abs() < 1e-3);
        assert!((tip.y - 360.0).abs() < 1e-3);
    }

    #[test]
    fn test_flash_alternates() {
        let mut p = player();
        assert!(!p.flash_visible(0.0));
        p.invincible_since = Some(1000.0);
        assert!(p.flash_visible(1050.0));
        assert!(!p.flash_visible(1150.0));
        assert!(p.flash_visible(1250.0));
    }

    proptest! {
        #[test]
        fn prop_decay_never_overshoots(speed in -4.0f32..8.0) {
            prop_assume!(speed != 0.0);
            let arena = Arena::new(500, 500, 32.0);
            let mut p = player();
            p.pos = Vec2::new(8000.0, 8000.0);
            p.speed = speed;
            p.integrate(&arena);

            let expected = (speed.abs() - 0.1).max(0.0);
            prop_assert!((p.speed.abs() - expected).abs() < 1e-5);
            prop_assert!(p.speed == 0.0 || p.speed.signum() == speed.signum());
        }

        #[test]
        fn prop_stays_in_bounds(
            x in -100.0f32..400.0,
            y in -100.0f32..400.0,
            heading in -10.0f32..10.0,
            speed in -4.0f32..8.0,
        ) {
            let arena = Arena::new(10, 10, 32.0);
            let mut p = player();
            p.pos = Vec2::new(x, y);
            p.heading = heading;
            p.speed = speed;
            p.integrate(&arena);

            let max = 320.0 - p.stats.size;
            if speed != 0.0 {
                prop_assert!(p.pos.x >= 0.0 && p.pos.x <= max);
                prop_assert!(p.pos.y >= 0.0 && p.pos.y <= max);
            }
        }
    }
}
