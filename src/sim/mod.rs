//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One fixed tick per animation frame
//! - Seeded RNG only (gap placement is the sole entropy source)
//! - Fixed obstacle slot order
//! - No rendering or platform dependencies

pub mod autopilot;
pub mod collision;
pub mod pool;
pub mod session;
pub mod snapshot;
pub mod state;
pub mod tick;

pub use collision::{Aabb, Crash, Verdict, apply_verdict, evaluate};
pub use pool::{ObstaclePool, POOL_SIZE, random_gap_top};
pub use session::{Session, Transition};
pub use snapshot::Snapshot;
pub use state::{Bird, GamePhase, GameState, Obstacle};
pub use tick::{TickOutcome, integrate_bird, step, tick};
