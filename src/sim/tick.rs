//! Per-frame simulation step
//!
//! One call advances the run by exactly one frame. Kinematics are per-frame;
//! timers (swing, contact grace, invincibility, spawning) use `dt_ms`.

use super::arena::Viewport;
use super::collision::circles_intersect;
use super::player::{Steer, Throttle};
use super::state::{GameEvent, GamePhase, GameState};
use crate::input::HeldKeys;
use crate::settings::HealthFloor;

/// Input for a single tick (deterministic)
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Movement keys held this frame
    pub held: HeldKeys,
    /// Swing pressed since the last tick
    pub swing: bool,
    /// Elapsed time since the previous tick
    pub dt_ms: f64,
    /// Visible window; `None` follows the player
    pub viewport: Option<Viewport>,
}

/// Advance the game state by one frame
pub fn tick(state: &mut GameState, input: &TickInput) {
    state.events.clear();

    // Don't tick once the run is over
    if state.phase == GamePhase::GameOver {
        return;
    }

    // A bad clock reading is a frame with no elapsed time
    let dt = if input.dt_ms.is_finite() { input.dt_ms.max(0.0) } else { 0.0 };
    state.time_ticks += 1;
    state.clock_ms += dt;
    let now = state.clock_ms;
    state.player.advance_swing(dt);

    let viewport = input
        .viewport
        .unwrap_or_else(|| Viewport::follow(&state.arena, state.player.pos, state.viewport_size));
    state.viewport = viewport;

    // Input
    apply_held_keys(state, &input.held);
    if input.swing && state.player.trigger_swing() {
        state.events.push(GameEvent::SwingStarted);
    }

    // Player kinematics
    state.player.integrate(&state.arena);

    // Contact damage
    if state.player.evaluate_contact(&state.monsters, now) {
        let health = state.player.health;
        log::info!("Player hit, health {}", health);
        state.events.push(GameEvent::PlayerDamaged { health });
    }
    apply_health_floor(state);
    if state.phase == GamePhase::GameOver {
        return;
    }

    // Melee
    if state.player.is_swinging() {
        let tip = state.player.sword_tip();
        let tip_radius = state.tuning.sword_tip_radius;
        let damage = state.tuning.sword_damage;
        let min_radius = state.tuning.monster_min_radius;
        for monster in state.monsters.iter_mut().filter(|m| !m.is_defeated()) {
            if circles_intersect(tip, tip_radius, monster.pos, monster.hit_radius()) {
                monster.apply_melee_damage(damage, min_radius);
                state.events.push(GameEvent::MonsterHit {
                    id: monster.id,
                    health: monster.health,
                });
            }
        }
    }

    // Monsters chase
    let target = state.player.pos;
    let catch_up = state.tuning.monster_catch_up;
    let (breath_step, breath_limit) = (state.tuning.breath_step, state.tuning.breath_limit);
    for monster in state.monsters.iter_mut().filter(|m| !m.is_defeated()) {
        let visible = viewport.contains_circle(monster.pos, monster.radius);
        monster.seek(target, visible, catch_up);
        if viewport.contains_circle(monster.pos, monster.radius) {
            monster.breathe(breath_step, breath_limit);
        }
    }

    // Retire the dead in one pass
    let before = state.monsters.len();
    for monster in state.monsters.iter().filter(|m| m.is_defeated()) {
        log::debug!("Monster {} defeated", monster.id);
        state.events.push(GameEvent::MonsterDefeated { id: monster.id });
    }
    state.monsters.retain(|m| !m.is_defeated());
    let defeated = before - state.monsters.len();
    state.score += state.score_rule.award(defeated);

    // Spawning
    state.advance_spawner(dt, &viewport);

    // Ensure deterministic ordering
    state.normalize_order();
}

fn apply_held_keys(state: &mut GameState, held: &HeldKeys) {
    let player = &mut state.player;
    if held.forward {
        player.apply_throttle(Throttle::Forward);
    }
    if held.reverse {
        player.apply_throttle(Throttle::Reverse);
    }
    if held.left {
        player.steer(Steer::Left);
    }
    if held.right {
        player.steer(Steer::Right);
    }
}

fn apply_health_floor(state: &mut GameState) {
    if state.health_floor == HealthFloor::EndRun && state.player.health <= 0 {
        state.player.health = 0;
        state.phase = GamePhase::GameOver;
        state.events.push(GameEvent::GameOver);
        log::info!(
            "Game over after {} ticks, score {}",
            state.time_ticks,
            state.score
        );
    }
}
