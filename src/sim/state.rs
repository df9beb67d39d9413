//! Game state and core simulation types

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::pool::ObstaclePool;
use crate::settings::GameConfig;

/// Current phase of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Waiting for the first flap; nothing moves
    Idle,
    /// Active gameplay
    Running,
    /// Crashed; state frozen for display
    Terminated,
}

/// The falling player entity
///
/// `y` is the top edge; the horizontal position is fixed by the config.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bird {
    pub y: f32,
    /// Positive is downward, in field units per tick
    pub vel: f32,
}

impl Bird {
    /// Centred vertically, at rest
    pub fn centred(config: &GameConfig) -> Self {
        Self {
            y: config.bird_start_y(),
            vel: 0.0,
        }
    }

    /// Replace velocity with the upward impulse
    pub fn flap(&mut self, impulse: f32) {
        self.vel = -impulse;
    }
}

/// One tree pair: solid above `gap_top`, solid below `gap_top + gap_height`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    /// Left edge
    pub x: f32,
    pub gap_top: f32,
    /// Already counted toward the score
    pub passed: bool,
}

impl Obstacle {
    pub fn new(x: f32, gap_top: f32) -> Self {
        Self {
            x,
            gap_top,
            passed: false,
        }
    }

    /// Right edge given the configured width
    pub fn right(&self, width: f32) -> f32 {
        self.x + width
    }
}

/// Complete session state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Seed the RNG was created from
    pub seed: u64,
    pub phase: GamePhase,
    pub score: u32,
    pub bird: Bird,
    pub pool: ObstaclePool,
    /// Ticks simulated since the last start
    pub time_ticks: u64,
    /// Source of every gap position
    pub(crate) rng: Pcg32,
}

impl GameState {
    /// Fresh Idle state with obstacles already placed
    pub fn new(config: &GameConfig, seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let pool = ObstaclePool::spawn(config, &mut rng);
        Self {
            seed,
            phase: GamePhase::Idle,
            score: 0,
            bird: Bird::centred(config),
            pool,
            time_ticks: 0,
            rng,
        }
    }

    /// Reset score, bird and obstacles, keeping the RNG stream going
    pub fn reset(&mut self, config: &GameConfig, phase: GamePhase) {
        self.phase = phase;
        self.score = 0;
        self.bird = Bird::centred(config);
        self.pool = ObstaclePool::spawn(config, &mut self.rng);
        self.time_ticks = 0;
    }

    pub fn is_running(&self) -> bool {
        self.phase == GamePhase::Running
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_is_idle_and_centred() {
        let config = GameConfig::default();
        let state = GameState::new(&config, 7);
        assert_eq!(state.phase, GamePhase::Idle);
        assert_eq!(state.score, 0);
        assert_eq!(state.bird, Bird { y: 285.0, vel: 0.0 });
        assert_eq!(state.pool.obstacles[0].x, config.initial_offset);
        assert_eq!(
            state.pool.obstacles[1].x,
            config.initial_offset + config.obstacle_spacing
        );
    }

    #[test]
    fn test_flap_replaces_velocity() {
        let mut bird = Bird { y: 100.0, vel: 12.5 };
        bird.flap(7.0);
        assert_eq!(bird.vel, -7.0);
        bird.flap(7.0);
        assert_eq!(bird.vel, -7.0, "flapping twice must not accumulate");
    }

    #[test]
    fn test_same_seed_same_gaps() {
        let config = GameConfig::default();
        let a = GameState::new(&config, 99);
        let b = GameState::new(&config, 99);
        assert_eq!(a.pool, b.pool);
    }
}
