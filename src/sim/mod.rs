//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Elapsed time comes in through `TickInput`, never from a wall clock
//! - Seeded RNG only
//! - Stable iteration order (by entity ID)
//! - No rendering or platform dependencies

pub mod arena;
pub mod collision;
pub mod monster;
pub mod player;
pub mod snapshot;
pub mod spawn;
pub mod state;
pub mod tick;

pub use arena::{Arena, Edge, Viewport};
pub use collision::circles_intersect;
pub use monster::{Monster, MonsterColor};
pub use player::{Player, PlayerStats, Steer, Throttle};
pub use snapshot::{FrameSnapshot, MonsterView, PlayerView};
pub use spawn::{SpawnPlan, SpawnScheduler};
pub use state::{GameEvent, GamePhase, GameState};
pub use tick::{TickInput, tick};
