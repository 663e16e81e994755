//! Game state and core simulation types
//!
//! One `GameState` owns the whole run: arena, player, live monsters, score,
//! clock, spawn timer and RNG. Nothing lives in globals.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::arena::{Arena, Viewport};
use super::monster::{Monster, MonsterColor};
use super::player::Player;
use super::snapshot::{FrameSnapshot, MonsterView, PlayerView};
use super::spawn::SpawnScheduler;
use crate::settings::{HealthFloor, ScoreRule, Settings};
use crate::tuning::Tuning;

/// Current phase of the run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Player health hit the floor under [`HealthFloor::EndRun`]
    GameOver,
}

/// Things that happened during the last tick
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    SwingStarted,
    PlayerDamaged { health: i32 },
    MonsterHit { id: u32, health: f32 },
    MonsterDefeated { id: u32 },
    MonsterSpawned { id: u32, pos: Vec2 },
    GameOver,
}

/// Complete game state (deterministic for a given seed and input stream)
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub tuning: Tuning,
    pub score_rule: ScoreRule,
    pub health_floor: HealthFloor,
    pub arena: Arena,
    /// Renderer surface size, used when a tick doesn't supply a viewport
    pub viewport_size: Vec2,
    /// Window used by the most recent tick
    pub viewport: Viewport,
    pub phase: GamePhase,
    pub player: Player,
    /// Live monsters (sorted by id for determinism)
    pub monsters: Vec<Monster>,
    pub score: u64,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Accumulated elapsed time (ms)
    pub clock_ms: f64,
    pub spawner: SpawnScheduler,
    /// Events from the most recent tick
    pub events: Vec<GameEvent>,
    rng: Pcg32,
    /// Next entity ID
    next_id: u32,
}

impl GameState {
    /// Default rules with the given seed
    pub fn new(seed: u64) -> Self {
        Self::from_settings(&Settings {
            seed,
            ..Settings::default()
        })
    }

    pub fn from_settings(settings: &Settings) -> Self {
        let tuning = settings.tuning.clone();
        let mut rng = Pcg32::seed_from_u64(settings.seed);
        let spawner = SpawnScheduler::new(&mut rng, &tuning);
        let arena = Arena::new(tuning.arena_width_tiles, tuning.arena_height_tiles, tuning.arena_unit);
        let player = Player::from_tuning(&tuning);
        let viewport = Viewport::follow(&arena, player.pos, settings.viewport_size);

        Self {
            seed: settings.seed,
            score_rule: settings.score_rule,
            health_floor: settings.health_floor,
            arena,
            viewport_size: settings.viewport_size,
            viewport,
            phase: GamePhase::Playing,
            player,
            monsters: Vec::new(),
            score: 0,
            time_ticks: 0,
            clock_ms: 0.0,
            spawner,
            events: Vec::new(),
            rng,
            next_id: 1,
            tuning,
        }
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Add a monster of the given size; returns its id
    pub fn spawn_monster(&mut self, pos: Vec2, radius: f32, color: MonsterColor) -> u32 {
        let id = self.next_entity_id();
        self.monsters.push(Monster::new(id, pos, radius, color, &self.tuning));
        id
    }

    /// Run the spawn timer and add the monster it plans, if any
    pub fn advance_spawner(&mut self, dt_ms: f64, viewport: &Viewport) {
        if let Some(plan) = self.spawner.advance(dt_ms, &mut self.rng, &self.tuning, viewport) {
            let id = self.spawn_monster(plan.pos, plan.radius, plan.color);
            log::debug!("Monster {} spawned on {:?} edge at {}", id, plan.edge, plan.pos);
            self.events.push(GameEvent::MonsterSpawned { id, pos: plan.pos });
        }
    }

    /// Ensure monsters are sorted by ID for deterministic iteration
    pub fn normalize_order(&mut self) {
        self.monsters.sort_by_key(|m| m.id);
    }

    pub fn is_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    /// Frame view for the renderer. Lists every live monster; only the
    /// visible ones have their hit flag consumed.
    pub fn snapshot(&mut self) -> FrameSnapshot {
        let now = self.clock_ms;
        let viewport = self.viewport;
        let player = &self.player;

        let player_view = PlayerView {
            pos: player.pos,
            heading: player.heading,
            size: player.stats.size,
            health: player.health,
            invincible: player.is_invincible(),
            flash: player.flash_visible(now),
            sword_tip: player.is_swinging().then(|| player.sword_tip()),
        };

        let monsters = self
            .monsters
            .iter_mut()
            .map(|m| {
                let visible = viewport.contains_circle(m.pos, m.radius);
                MonsterView {
                    id: m.id,
                    pos: m.pos,
                    radius: m.radius,
                    breath: m.breath,
                    health: m.health,
                    health_fraction: m.health_fraction(),
                    color: m.color,
                    hit: if visible { m.take_hit() } else { m.hit },
                    visible,
                }
            })
            .collect();

        FrameSnapshot {
            tick: self.time_ticks,
            clock_ms: now,
            phase: self.phase,
            arena_extent: self.arena.extent(),
            viewport,
            player: player_view,
            monsters,
            monster_count: self.monsters.len(),
            score: self.score,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state() {
        let state = GameState::new(1);
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.player.health, 100);
        assert_eq!(state.arena.extent(), Vec2::new(16000.0, 16000.0));
        assert!(state.monsters.is_empty());
        assert_eq!(state.score, 0);
    }

    #[test]
    fn test_entity_ids_increase() {
        let mut state = GameState::new(1);
        let a = state.spawn_monster(Vec2::ZERO, 20.0, MonsterColor::Blue);
        let b = state.spawn_monster(Vec2::ZERO, 20.0, MonsterColor::Blue);
        assert!(b > a);
    }

    #[test]
    fn test_snapshot_consumes_visible_hit_flags() {
        let mut state = GameState::new(1);
        let on_screen = state.spawn_monster(Vec2::new(300.0, 300.0), 30.0, MonsterColor::Purple);
        state.spawn_monster(Vec2::new(9000.0, 9000.0), 30.0, MonsterColor::Orange);
        for m in &mut state.monsters {
            m.apply_melee_damage(5.0, 10.0);
        }

        let first = state.snapshot();
        assert_eq!(first.monster_count, 2);
        assert_eq!(first.monsters[0].id, on_screen);
        assert!(first.monsters[0].visible);
        assert!(first.monsters[0].hit);
        assert!(!first.monsters[1].visible);
        assert!(first.monsters[1].hit);

        let second = state.snapshot();
        assert!(!second.monsters[0].hit);
        // Off-screen flag is still waiting to be seen
        assert!(second.monsters[1].hit);
        assert!(state.monsters[1].hit);
    }

    #[test]
    fn test_snapshot_lists_offscreen_monsters() {
        let mut state = GameState::new(1);
        state.spawn_monster(Vec2::new(300.0, 300.0), 30.0, MonsterColor::Blue);
        let far = state.spawn_monster(Vec2::new(9000.0, 9000.0), 25.0, MonsterColor::Green);
        state.monsters[0].breath = 1.5;

        let snap = state.snapshot();
        assert_eq!(snap.monsters.len(), state.monsters.len());
        assert_eq!(snap.monster_count, snap.monsters.len());

        let near = &snap.monsters[0];
        assert_eq!(near.radius, 30.0);
        assert_eq!(near.breath, 1.5);

        let off = &snap.monsters[1];
        assert_eq!(off.id, far);
        assert_eq!(off.pos, Vec2::new(9000.0, 9000.0));
        assert_eq!(off.radius, 25.0);
        assert!(!off.visible);
    }

    #[test]
    fn test_snapshot_sword_tip_only_while_swinging() {
        let mut state = GameState::new(1);
        assert!(state.snapshot().player.sword_tip.is_none());
        state.player.trigger_swing();
        assert!(state.snapshot().player.sword_tip.is_some());
    }
}
