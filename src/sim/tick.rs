//! One simulation tick per animation frame
//!
//! A tick integrates the bird, scrolls and recycles obstacles, then runs
//! exactly one collision/scoring evaluation on the freshly integrated state.

use super::collision::{Crash, apply_verdict, evaluate};
use super::pool::ObstaclePool;
use super::state::{Bird, GamePhase, GameState};
use crate::settings::GameConfig;

/// What a tick did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Session not Running; nothing moved
    Skipped,
    /// Advanced one tick; `scored` obstacles were cleared
    Advanced { scored: u32 },
    /// Advanced and crashed; the session is now Terminated
    Crashed(Crash),
}

/// Integrate the bird by one tick.
///
/// Position is clipped to the field; velocity always gains gravity.
pub fn integrate_bird(bird: &Bird, config: &GameConfig) -> Bird {
    Bird {
        y: (bird.y + bird.vel).clamp(0.0, config.floor()),
        vel: bird.vel + config.gravity,
    }
}

/// Advance bird and obstacles by one tick without evaluating collisions
pub fn step(state: &GameState, config: &GameConfig) -> (Bird, ObstaclePool) {
    let bird = integrate_bird(&state.bird, config);
    let pool = state.pool.scrolled(config.scroll_speed, config.obstacle_spacing);
    (bird, pool)
}

/// Advance the session by one tick
pub fn tick(state: &mut GameState, config: &GameConfig) -> TickOutcome {
    if state.phase != GamePhase::Running {
        return TickOutcome::Skipped;
    }

    let (bird, mut pool) = step(state, config);
    pool.recycle(config, &mut state.rng);
    state.bird = bird;
    state.pool = pool;
    state.time_ticks += 1;

    let score_before = state.score;
    let verdict = evaluate(&state.bird, &state.pool, config);
    apply_verdict(state, &verdict);

    match verdict.crash {
        Some(crash) => TickOutcome::Crashed(crash),
        None => TickOutcome::Advanced {
            scored: state.score - score_before,
        },
    }
}
