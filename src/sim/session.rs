//! Session state machine
//!
//! ```text
//! Idle --activate--> Running --crash--> Terminated --restart--> Idle
//!                    Running --activate--> Running (flap)
//! ```
//!
//! Every transition replaces the whole state between ticks; nothing else
//! mutates the phase except a crash found by [`tick`](super::tick::tick).

use super::snapshot::Snapshot;
use super::state::{GamePhase, GameState};
use super::tick::{TickOutcome, tick};
use crate::input::Command;
use crate::settings::GameConfig;

/// Result of applying a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Idle -> Running, with the opening flap
    Started,
    /// Running -> Running, velocity reset to the impulse
    Flapped,
    /// Terminated -> Idle
    Restarted,
    /// Illegal in the current phase; state untouched
    Ignored,
}

impl Transition {
    /// Whether the bird flapped (start or jump)
    pub fn is_flap(&self) -> bool {
        matches!(self, Transition::Started | Transition::Flapped)
    }
}

/// A game session: config plus mutable state
#[derive(Debug, Clone)]
pub struct Session {
    config: GameConfig,
    state: GameState,
}

impl Session {
    /// New session in Idle
    pub fn new(config: GameConfig, seed: u64) -> Self {
        let state = GameState::new(&config, seed);
        Self { config, state }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn phase(&self) -> GamePhase {
        self.state.phase
    }

    pub fn score(&self) -> u32 {
        self.state.score
    }

    /// Apply a routed command
    pub fn apply(&mut self, command: Command) -> Transition {
        match command {
            Command::Activate => self.activate(),
            Command::Restart => self.restart(),
            Command::None => Transition::Ignored,
        }
    }

    /// Start from Idle or flap while Running. Ignored once Terminated.
    pub fn activate(&mut self) -> Transition {
        match self.state.phase {
            GamePhase::Idle => {
                let mut next = self.state.clone();
                next.reset(&self.config, GamePhase::Running);
                next.bird.flap(self.config.jump_impulse);
                self.state = next;
                log::info!("Run started (seed {})", self.state.seed);
                Transition::Started
            }
            GamePhase::Running => {
                self.state.bird.flap(self.config.jump_impulse);
                Transition::Flapped
            }
            GamePhase::Terminated => Transition::Ignored,
        }
    }

    /// Terminated -> Idle. Ignored in any other phase.
    pub fn restart(&mut self) -> Transition {
        if self.state.phase != GamePhase::Terminated {
            return Transition::Ignored;
        }
        let mut next = self.state.clone();
        next.reset(&self.config, GamePhase::Idle);
        self.state = next;
        log::info!("Session reset to idle");
        Transition::Restarted
    }

    /// Advance one frame
    pub fn tick(&mut self) -> TickOutcome {
        tick(&mut self.state, &self.config)
    }

    /// Read-only view for presenters
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::capture(&self.state)
    }

    /// Mutable state access for tests that stage specific geometry
    #[cfg(test)]
    pub(crate) fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }
}
