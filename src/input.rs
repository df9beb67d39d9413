//! Input routing
//!
//! The game understands one logical action, "activate", plus a dedicated
//! restart button. Raw events are mapped to a [`Command`] based on the
//! current phase; the session applies it in one step.

use crate::sim::GamePhase;

/// Raw input delivered by the host
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    /// Click/tap on the play field
    Pointer,
    /// Key press, identified by `KeyboardEvent.code`
    Key(String),
    /// The restart button on the game-over overlay
    RestartButton,
}

/// What the session should do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Activate,
    Restart,
    None,
}

/// Maps raw events to commands
#[derive(Debug, Clone)]
pub struct InputRouter {
    activate_key: String,
}

impl InputRouter {
    pub fn new(activate_key: impl Into<String>) -> Self {
        Self {
            activate_key: activate_key.into(),
        }
    }

    /// Key code that activates (and restarts after a crash)
    pub fn activate_key(&self) -> &str {
        &self.activate_key
    }

    pub fn is_activate_key(&self, code: &str) -> bool {
        code == self.activate_key
    }

    /// Route an event given the current phase
    pub fn route(&self, event: &InputEvent, phase: GamePhase) -> Command {
        match event {
            InputEvent::Pointer => match phase {
                GamePhase::Terminated => Command::None,
                _ => Command::Activate,
            },
            InputEvent::Key(code) if self.is_activate_key(code) => match phase {
                GamePhase::Terminated => Command::Restart,
                _ => Command::Activate,
            },
            InputEvent::Key(_) => Command::None,
            InputEvent::RestartButton => Command::Restart,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn space() -> InputEvent {
        InputEvent::Key("Space".to_owned())
    }

    #[test]
    fn test_pointer_routing() {
        let router = InputRouter::new("Space");
        assert_eq!(router.route(&InputEvent::Pointer, GamePhase::Idle), Command::Activate);
        assert_eq!(router.route(&InputEvent::Pointer, GamePhase::Running), Command::Activate);
        assert_eq!(router.route(&InputEvent::Pointer, GamePhase::Terminated), Command::None);
    }

    #[test]
    fn test_key_routing() {
        let router = InputRouter::new("Space");
        assert_eq!(router.route(&space(), GamePhase::Idle), Command::Activate);
        assert_eq!(router.route(&space(), GamePhase::Running), Command::Activate);
        assert_eq!(router.route(&space(), GamePhase::Terminated), Command::Restart);

        let other = InputEvent::Key("KeyA".to_owned());
        for phase in [GamePhase::Idle, GamePhase::Running, GamePhase::Terminated] {
            assert_eq!(router.route(&other, phase), Command::None);
        }
    }

    #[test]
    fn test_restart_button_always_restarts() {
        let router = InputRouter::new("Space");
        for phase in [GamePhase::Idle, GamePhase::Running, GamePhase::Terminated] {
            assert_eq!(router.route(&InputEvent::RestartButton, phase), Command::Restart);
        }
    }

    #[test]
    fn test_custom_activate_key() {
        let router = InputRouter::new("ArrowUp");
        assert_eq!(router.activate_key(), "ArrowUp");
        assert_eq!(router.route(&space(), GamePhase::Running), Command::None);
        assert_eq!(
            router.route(&InputEvent::Key("ArrowUp".to_owned()), GamePhase::Running),
            Command::Activate
        );
    }
}
