//! Hen Flap - a one-button side-scrolling reflex game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, obstacles, collisions, session phases)
//! - `input`: Maps pointer/key/button events onto session commands
//! - `frame`: Animation frame scheduling scoped to the Running phase
//! - `game`: Host tying session, frame loop, presenter and audio together
//! - `settings`: Data-driven game constants
//! - `platform`: Browser bindings (wasm32 only)

pub mod audio;
pub mod frame;
pub mod game;
pub mod input;
pub mod platform;
pub mod settings;
pub mod sim;

pub use game::{Game, Presenter};
pub use settings::{ConfigError, GameConfig};

/// Game configuration constants
///
/// Units are field pixels and ticks (one tick per animation frame).
pub mod consts {
    /// Play field dimensions
    pub const FIELD_WIDTH: f32 = 400.0;
    pub const FIELD_HEIGHT: f32 = 600.0;

    /// Bird is a square of this size at a fixed horizontal position
    pub const BIRD_SIZE: f32 = 30.0;
    pub const BIRD_X: f32 = 60.0;

    /// Downward acceleration added to velocity every tick
    pub const GRAVITY: f32 = 0.4;
    /// Velocity set (not added) on every flap
    pub const JUMP_IMPULSE: f32 = 7.0;

    /// Obstacle (tree pair) defaults
    pub const OBSTACLE_WIDTH: f32 = 60.0;
    pub const OBSTACLE_GAP: f32 = 160.0;
    pub const SCROLL_SPEED: f32 = 2.0;
    /// Horizontal distance between the two live obstacles
    pub const OBSTACLE_SPACING: f32 = 200.0;
    /// Where the first obstacle spawns on reset
    pub const INITIAL_OFFSET: f32 = FIELD_WIDTH + 100.0;

    /// Minimum solid body above and below every gap
    pub const GAP_MARGIN_TOP: f32 = 60.0;
    pub const GAP_MARGIN_BOTTOM: f32 = 60.0;

    /// Default key that flaps (and restarts after a crash)
    pub const ACTIVATE_KEY: &str = "Space";

    /// Flap cue volume (0.0 - 1.0)
    pub const VOLUME: f32 = 0.8;
}
