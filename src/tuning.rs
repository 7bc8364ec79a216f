//! Game balance and tuning
//!
//! Every gameplay constant lives here so a round can be re-balanced from a
//! JSON file without rebuilding. Missing fields fall back to `consts`.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;
use crate::sim::EdgeContact;

/// Environment variable that overrides the tuning file location
pub const TUNING_PATH_ENV: &str = "FLAPPY_TUNING";
/// Default tuning file, looked up in the working directory
pub const DEFAULT_TUNING_FILE: &str = "tuning.json";

/// Errors raised while loading a tuning file
#[derive(Debug, Error)]
pub enum TuningError {
    #[error("failed to read tuning file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse tuning file: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid tuning value `{field}`: {reason}")]
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}

/// Game balance knobs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Play area ===
    pub screen_width: f32,
    pub screen_height: f32,

    // === Bird ===
    pub bird_x: f32,
    pub bird_width: f32,
    pub bird_height: f32,
    pub bird_base_speed: f32,
    /// Not applied to motion (arcade controls)
    pub gravity: f32,

    // === Pipes ===
    pub pipe_width: f32,
    pub pipe_gap_margin: f32,
    pub pipe_base_speed: f32,

    // === Difficulty curve ===
    pub speed_step: f64,
    pub initial_spawn_interval_ms: f64,
    pub min_spawn_interval_ms: f64,
    pub spawn_interval_decay: f64,
    pub initial_pipe_gap: f32,
    pub min_pipe_gap: f32,

    // === Frame pacing ===
    pub running_fps: u32,
    pub game_over_fps: u32,

    // === Collision ===
    pub edge_contact: EdgeContact,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,

            bird_x: BIRD_X,
            bird_width: BIRD_WIDTH,
            bird_height: BIRD_HEIGHT,
            bird_base_speed: BIRD_BASE_SPEED,
            gravity: GRAVITY,

            pipe_width: PIPE_WIDTH,
            pipe_gap_margin: PIPE_GAP_MARGIN,
            pipe_base_speed: PIPE_BASE_SPEED,

            speed_step: SPEED_STEP,
            initial_spawn_interval_ms: INITIAL_SPAWN_INTERVAL_MS,
            min_spawn_interval_ms: MIN_SPAWN_INTERVAL_MS,
            spawn_interval_decay: SPAWN_INTERVAL_DECAY,
            initial_pipe_gap: INITIAL_PIPE_GAP,
            min_pipe_gap: MIN_PIPE_GAP,

            running_fps: RUNNING_FPS,
            game_over_fps: GAME_OVER_FPS,

            edge_contact: EdgeContact::Inclusive,
        }
    }
}

impl Tuning {
    /// Parse and validate tuning from JSON
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Read, parse and validate a tuning file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, TuningError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Load tuning from `$FLAPPY_TUNING` or `./tuning.json`, falling back to
    /// defaults when the file is absent or broken.
    pub fn load_or_default() -> Self {
        let path = std::env::var(TUNING_PATH_ENV).unwrap_or_else(|_| DEFAULT_TUNING_FILE.into());

        if !Path::new(&path).exists() {
            log::info!("No tuning file at {}, using defaults", path);
            return Self::default();
        }

        match Self::load(&path) {
            Ok(tuning) => {
                log::info!("Loaded tuning from {}", path);
                tuning
            }
            Err(e) => {
                log::warn!("Ignoring tuning file {}: {}", path, e);
                Self::default()
            }
        }
    }

    /// Reject values the simulation cannot run with.
    ///
    /// An oversized gap is accepted; spawning clamps it.
    pub fn validate(&self) -> Result<(), TuningError> {
        let positive = [
            ("screen_width", self.screen_width),
            ("screen_height", self.screen_height),
            ("bird_width", self.bird_width),
            ("bird_height", self.bird_height),
            ("pipe_width", self.pipe_width),
            ("initial_pipe_gap", self.initial_pipe_gap),
            ("min_pipe_gap", self.min_pipe_gap),
        ];
        for (field, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(TuningError::Invalid {
                    field,
                    reason: "must be a positive finite number",
                });
            }
        }

        let non_negative = [
            ("bird_x", self.bird_x),
            ("bird_base_speed", self.bird_base_speed),
            ("pipe_gap_margin", self.pipe_gap_margin),
            ("pipe_base_speed", self.pipe_base_speed),
        ];
        for (field, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(TuningError::Invalid {
                    field,
                    reason: "must be a non-negative finite number",
                });
            }
        }

        if !self.speed_step.is_finite() || self.speed_step < 0.0 {
            return Err(TuningError::Invalid {
                field: "speed_step",
                reason: "must be a non-negative finite number",
            });
        }
        if !(self.spawn_interval_decay > 0.0 && self.spawn_interval_decay <= 1.0) {
            return Err(TuningError::Invalid {
                field: "spawn_interval_decay",
                reason: "must be in (0, 1]",
            });
        }
        if !self.min_spawn_interval_ms.is_finite() || self.min_spawn_interval_ms < 0.0 {
            return Err(TuningError::Invalid {
                field: "min_spawn_interval_ms",
                reason: "must be a non-negative finite number",
            });
        }
        if !self.initial_spawn_interval_ms.is_finite()
            || self.initial_spawn_interval_ms < self.min_spawn_interval_ms
        {
            return Err(TuningError::Invalid {
                field: "initial_spawn_interval_ms",
                reason: "must be finite and at least min_spawn_interval_ms",
            });
        }
        if self.running_fps == 0 {
            return Err(TuningError::Invalid {
                field: "running_fps",
                reason: "must be at least 1",
            });
        }
        if self.game_over_fps == 0 {
            return Err(TuningError::Invalid {
                field: "game_over_fps",
                reason: "must be at least 1",
            });
        }

        Ok(())
    }

    /// Vertical position of the bird's top edge at round start
    pub fn bird_start_y(&self) -> f32 {
        (self.screen_height / 2.0).floor()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let tuning = Tuning::default();
        assert!(tuning.validate().is_ok());
        assert_eq!(tuning.screen_height, 400.0);
        assert_eq!(tuning.bird_start_y(), 200.0);
        assert_eq!(tuning.edge_contact, EdgeContact::Inclusive);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let tuning = Tuning::from_json(r#"{ "screen_height": 600.0, "edge_contact": "exclusive" }"#)
            .expect("valid tuning");
        assert_eq!(tuning.screen_height, 600.0);
        assert_eq!(tuning.screen_width, SCREEN_WIDTH);
        assert_eq!(tuning.edge_contact, EdgeContact::Exclusive);
    }

    #[test]
    fn test_parse_error() {
        let err = Tuning::from_json("{ not json").unwrap_err();
        assert!(matches!(err, TuningError::Parse(_)));
    }

    #[test]
    fn test_rejects_zero_fps() {
        let err = Tuning::from_json(r#"{ "running_fps": 0 }"#).unwrap_err();
        assert!(matches!(
            err,
            TuningError::Invalid {
                field: "running_fps",
                ..
            }
        ));
    }

    #[test]
    fn test_rejects_bad_decay() {
        let err = Tuning::from_json(r#"{ "spawn_interval_decay": 1.5 }"#).unwrap_err();
        assert!(matches!(
            err,
            TuningError::Invalid {
                field: "spawn_interval_decay",
                ..
            }
        ));
    }

    #[test]
    fn test_oversized_gap_is_accepted() {
        let tuning = Tuning::from_json(r#"{ "initial_pipe_gap": 1000.0 }"#).expect("clamped later");
        assert_eq!(tuning.initial_pipe_gap, 1000.0);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = Tuning::load("/definitely/not/here/tuning.json").unwrap_err();
        assert!(matches!(err, TuningError::Io(_)));
        assert!(err.to_string().starts_with("failed to read tuning file"));
    }
}
