//! Demo-mode pilot
//!
//! Flaps whenever the bird is sinking below the centre of the next gap.
//! Good enough to clear a handful of obstacles in a headless run.

use super::state::{GamePhase, GameState};
use crate::settings::GameConfig;

/// Decide whether to flap this frame
pub fn should_flap(state: &GameState, config: &GameConfig) -> bool {
    match state.phase {
        GamePhase::Idle => true,
        GamePhase::Terminated => false,
        GamePhase::Running => {
            // Next obstacle whose right edge has not yet cleared the bird
            let target = state
                .pool
                .ordered()
                .into_iter()
                .find(|o| o.right(config.obstacle_width) >= config.bird_x);
            let Some(obstacle) = target else {
                return false;
            };

            let bird_bottom = state.bird.y + config.bird_size;
            // Aim for the lower part of the gap; a flap lifts the bird well above
            let aim = obstacle.gap_top + config.gap_height * 0.75;
            let sinking = state.bird.vel >= 0.0;
            bird_bottom > aim && sinking
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::session::Session;
    use crate::sim::state::Bird;

    #[test]
    fn test_idle_flaps_to_start() {
        let config = GameConfig::default();
        let state = GameState::new(&config, 1);
        assert!(should_flap(&state, &config));
    }

    #[test]
    fn test_rising_bird_does_not_flap() {
        let config = GameConfig::default();
        let mut state = GameState::new(&config, 1);
        state.phase = GamePhase::Running;
        state.bird = Bird { y: 560.0, vel: -3.0 };
        assert!(!should_flap(&state, &config));
        state.bird.vel = 1.0;
        assert!(should_flap(&state, &config));
    }

    #[test]
    fn test_autopilot_clears_obstacles() {
        let mut session = Session::new(GameConfig::default(), 77);
        for _ in 0..3_000 {
            if session.phase() == GamePhase::Terminated {
                break;
            }
            if should_flap(session.state(), session.config()) {
                session.activate();
            }
            session.tick();
        }
        assert!(session.score() > 0, "pilot should clear at least one obstacle");
    }
}
