//! Read-only frame view handed to presenters

use serde::Serialize;

use super::state::{GamePhase, GameState, Obstacle};
use super::pool::POOL_SIZE;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    pub bird_y: f32,
    pub obstacles: [Obstacle; POOL_SIZE],
    pub score: u32,
    pub phase: GamePhase,
}

impl Snapshot {
    pub fn capture(state: &GameState) -> Self {
        Self {
            bird_y: state.bird.y,
            obstacles: state.pool.obstacles,
            score: state.score,
            phase: state.phase,
        }
    }

    /// JSON form for hosts that draw outside Rust
    pub fn to_json(&self) -> String {
        // Plain floats, enums and arrays always serialize
        serde_json::to_string(self).unwrap_or_default()
    }
}
