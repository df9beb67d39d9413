//! Collision detection and scoring
//!
//! Evaluation is split in two: [`evaluate`] reads post-tick state and returns
//! a [`Verdict`] without touching anything, then [`apply_verdict`] turns that
//! verdict into the next state. A terminal verdict always wins over scoring.

use glam::Vec2;

use super::pool::{ObstaclePool, POOL_SIZE};
use super::state::{Bird, GamePhase, GameState};
use crate::settings::GameConfig;

/// Axis-aligned box in field coordinates (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    /// Strict overlap: touching edges do not collide
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.max.x > other.min.x
            && self.min.x < other.max.x
            && self.max.y > other.min.y
            && self.min.y < other.max.y
    }
}

/// Bird bounding box
pub fn bird_box(bird: &Bird, config: &GameConfig) -> Aabb {
    Aabb::new(
        Vec2::new(config.bird_x, bird.y),
        Vec2::new(config.bird_x + config.bird_size, bird.y + config.bird_size),
    )
}

/// Upper and lower solid bodies of an obstacle
pub fn obstacle_bodies(x: f32, gap_top: f32, config: &GameConfig) -> [Aabb; 2] {
    let right = x + config.obstacle_width;
    [
        Aabb::new(Vec2::new(x, 0.0), Vec2::new(right, gap_top)),
        Aabb::new(
            Vec2::new(x, gap_top + config.gap_height),
            Vec2::new(right, config.field_height),
        ),
    ]
}

/// What ended the run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Crash {
    /// Hit the body of the obstacle in this pool slot
    Obstacle { slot: usize },
    /// Touched the top of the field
    Ceiling,
    /// Touched the bottom of the field
    Floor,
}

/// Outcome of one evaluation pass
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Verdict {
    /// First crash found, if any
    pub crash: Option<Crash>,
    /// Pool slots whose obstacle was cleared for the first time this pass
    pub cleared: [bool; POOL_SIZE],
}

impl Verdict {
    pub fn is_terminal(&self) -> bool {
        self.crash.is_some()
    }

    pub fn cleared_count(&self) -> u32 {
        self.cleared.iter().filter(|&&c| c).count() as u32
    }
}

/// Evaluate post-tick state. Pure.
pub fn evaluate(bird: &Bird, pool: &ObstaclePool, config: &GameConfig) -> Verdict {
    let bird_box = bird_box(bird, config);
    let mut verdict = Verdict::default();

    for (slot, obstacle) in pool.obstacles.iter().enumerate() {
        let hit = obstacle_bodies(obstacle.x, obstacle.gap_top, config)
            .iter()
            .any(|body| body.overlaps(&bird_box));
        if hit && verdict.crash.is_none() {
            verdict.crash = Some(Crash::Obstacle { slot });
        }

        if !obstacle.passed && obstacle.right(config.obstacle_width) < bird_box.min.x {
            verdict.cleared[slot] = true;
        }
    }

    // Bounds are checked on their own: resting clamped at either edge is fatal
    if verdict.crash.is_none() {
        if bird.y <= 0.0 {
            verdict.crash = Some(Crash::Ceiling);
        } else if bird.y >= config.floor() {
            verdict.crash = Some(Crash::Floor);
        }
    }

    verdict
}

/// Apply a verdict to the state it was computed from.
///
/// Scoring is gated on the phase before this pass and suppressed entirely by a
/// terminal verdict.
pub fn apply_verdict(state: &mut GameState, verdict: &Verdict) {
    let was_running = state.phase == GamePhase::Running;

    if let Some(crash) = verdict.crash {
        state.phase = GamePhase::Terminated;
        log::info!("Crashed ({:?}) with score {}", crash, state.score);
        return;
    }

    if !was_running {
        return;
    }

    for (slot, cleared) in verdict.cleared.iter().enumerate() {
        if *cleared {
            state.pool.obstacles[slot].passed = true;
            state.score += 1;
            log::debug!("Cleared obstacle {}, score {}", slot, state.score);
        }
    }
}
