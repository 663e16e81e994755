//! Monster Slayer headless runner
//!
//! Loads settings, drives a scripted session through the simulation and
//! prints the final frame as JSON. Rendering lives elsewhere.

use monster_slayer::{Settings, Tuning};
use monster_slayer::consts::FRAME_MS;
use monster_slayer::input::InputTracker;
use monster_slayer::sim::{GameEvent, GameState, tick};

/// Frames to simulate (one minute at 60 Hz)
const DEMO_FRAMES: u32 = 60 * 60;

fn main() {
    env_logger::init();
    log::info!("Monster Slayer (headless) starting...");

    // Usage: monster-slayer [settings.json] [tuning.json]
    let mut args = std::env::args().skip(1);
    let mut settings = match args.next() {
        Some(path) => Settings::load(path),
        None => Settings::default(),
    };
    if let Some(path) = args.next() {
        match Tuning::load(&path) {
            Ok(tuning) => {
                log::info!("Loaded tuning from {}", path);
                settings.tuning = tuning;
            }
            Err(e) => log::warn!("{}, keeping current tuning", e),
        }
    }

    let mut state = GameState::from_settings(&settings);
    let mut tracker = InputTracker::new();
    let mut defeated = 0u32;

    for frame in 0..DEMO_FRAMES {
        script_keys(&mut tracker, frame);
        let input = tracker.next_input(FRAME_MS, None);
        tick(&mut state, &input);

        defeated += state
            .events
            .iter()
            .filter(|e| matches!(e, GameEvent::MonsterDefeated { .. }))
            .count() as u32;

        if state.is_over() {
            log::info!("Run ended at frame {}", frame);
            break;
        }
    }

    log::info!(
        "Done: {} ticks, health {}, {} monsters alive, {} defeated, score {}",
        state.time_ticks,
        state.player.health,
        state.monsters.len(),
        defeated,
        state.score
    );

    match serde_json::to_string_pretty(&state.snapshot()) {
        Ok(json) => println!("{}", json),
        Err(e) => log::error!("Failed to encode snapshot: {}", e),
    }
}

/// Drive in a wide circle and swing twice a second
fn script_keys(tracker: &mut InputTracker, frame: u32) {
    if frame == 0 {
        tracker.key_down("KeyW");
    }
    if frame % 120 == 0 {
        tracker.key_down("KeyD");
    }
    if frame % 120 == 40 {
        tracker.key_up("KeyD");
    }
    match frame % 30 {
        0 => {
            tracker.key_down("Space");
        }
        1 => {
            tracker.key_up("Space");
        }
        _ => {}
    }
}
