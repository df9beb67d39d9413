//! Game configuration
//!
//! All tunables are fixed at process start. Loaded from JSON (a file on
//! native, LocalStorage on the web); missing fields fall back to the
//! constants in [`crate::consts`].

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// Reasons a configuration is rejected
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("{field} must be positive, got {value}")]
    NonPositive { field: &'static str, value: f32 },
    #[error("gap {gap} plus margins {margin_top}/{margin_bottom} does not fit in field height {field_height}")]
    GapDoesNotFit {
        gap: f32,
        margin_top: f32,
        margin_bottom: f32,
        field_height: f32,
    },
    #[error("bird of size {size} does not fit in field {width}x{height}")]
    BirdDoesNotFit { size: f32, width: f32, height: f32 },
    #[error("obstacle spacing {spacing} must exceed obstacle width {width}")]
    SpacingTooSmall { spacing: f32, width: f32 },
    #[error("volume must be within 0.0 - 1.0, got {0}")]
    VolumeOutOfRange(f32),
}

/// Simulation constants
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    // === Field ===
    pub field_width: f32,
    pub field_height: f32,

    // === Bird ===
    pub bird_size: f32,
    /// Fixed left edge of the bird
    pub bird_x: f32,
    pub gravity: f32,
    pub jump_impulse: f32,

    // === Obstacles ===
    pub obstacle_width: f32,
    pub gap_height: f32,
    pub scroll_speed: f32,
    pub obstacle_spacing: f32,
    pub initial_offset: f32,
    pub gap_margin_top: f32,
    pub gap_margin_bottom: f32,

    // === Input ===
    /// `KeyboardEvent.code` of the flap key
    pub activate_key: String,

    // === Audio ===
    /// Flap cue volume (0.0 - 1.0); zero mutes
    pub volume: f32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            field_width: FIELD_WIDTH,
            field_height: FIELD_HEIGHT,

            bird_size: BIRD_SIZE,
            bird_x: BIRD_X,
            gravity: GRAVITY,
            jump_impulse: JUMP_IMPULSE,

            obstacle_width: OBSTACLE_WIDTH,
            gap_height: OBSTACLE_GAP,
            scroll_speed: SCROLL_SPEED,
            obstacle_spacing: OBSTACLE_SPACING,
            initial_offset: INITIAL_OFFSET,
            gap_margin_top: GAP_MARGIN_TOP,
            gap_margin_bottom: GAP_MARGIN_BOTTOM,

            activate_key: ACTIVATE_KEY.to_owned(),

            volume: VOLUME,
        }
    }
}

impl GameConfig {
    /// Parse and validate a JSON document
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("field_width", self.field_width)?;
        positive("field_height", self.field_height)?;
        positive("bird_size", self.bird_size)?;
        positive("obstacle_width", self.obstacle_width)?;
        positive("gap_height", self.gap_height)?;
        positive("scroll_speed", self.scroll_speed)?;
        positive("jump_impulse", self.jump_impulse)?;

        if self.bird_size >= self.field_height || self.bird_x + self.bird_size > self.field_width {
            return Err(ConfigError::BirdDoesNotFit {
                size: self.bird_size,
                width: self.field_width,
                height: self.field_height,
            });
        }
        if self.gap_margin_top < 0.0 || self.gap_margin_bottom < 0.0 || self.gap_range() < 0.0 {
            return Err(ConfigError::GapDoesNotFit {
                gap: self.gap_height,
                margin_top: self.gap_margin_top,
                margin_bottom: self.gap_margin_bottom,
                field_height: self.field_height,
            });
        }
        if self.obstacle_spacing <= self.obstacle_width {
            return Err(ConfigError::SpacingTooSmall {
                spacing: self.obstacle_spacing,
                width: self.obstacle_width,
            });
        }
        if !(0.0..=1.0).contains(&self.volume) {
            return Err(ConfigError::VolumeOutOfRange(self.volume));
        }
        Ok(())
    }

    /// Vertical room left for placing the top of a gap
    pub fn gap_range(&self) -> f32 {
        self.field_height - self.gap_height - self.gap_margin_top - self.gap_margin_bottom
    }

    /// Lowest legal bird position (top edge)
    pub fn floor(&self) -> f32 {
        self.field_height - self.bird_size
    }

    /// Bird top edge when centred vertically
    pub fn bird_start_y(&self) -> f32 {
        self.field_height / 2.0 - self.bird_size / 2.0
    }

    /// Environment variable naming a JSON config file (native only)
    #[cfg(not(target_arch = "wasm32"))]
    pub const ENV_VAR: &'static str = "HEN_FLAP_CONFIG";

    /// Load config from the file named by `HEN_FLAP_CONFIG`, or defaults
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        let Ok(path) = std::env::var(Self::ENV_VAR) else {
            log::info!("Using default config");
            return Self::default();
        };
        let loaded = std::fs::read_to_string(&path)
            .map_err(|e| log::warn!("Failed to read config {}: {}", path, e))
            .ok()
            .map(|json| Self::from_json(&json));
        match loaded {
            Some(Ok(config)) => {
                log::info!("Loaded config from {}", path);
                config
            }
            Some(Err(e)) => {
                log::warn!("Invalid config {}: {} - using defaults", path, e);
                Self::default()
            }
            None => Self::default(),
        }
    }

    /// LocalStorage key (used only in wasm32)
    #[cfg(target_arch = "wasm32")]
    const STORAGE_KEY: &'static str = "hen_flap_config";

    /// Load config from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                match Self::from_json(&json) {
                    Ok(config) => {
                        log::info!("Loaded config from LocalStorage");
                        return config;
                    }
                    Err(e) => log::warn!("Invalid stored config: {} - using defaults", e),
                }
            }
        }

        log::info!("Using default config");
        Self::default()
    }
}

fn positive(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NonPositive { field, value })
    }
}
