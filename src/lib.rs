//! Flappy Pipes - A side-scrolling pipe-dodging arcade game
//!
//! Core modules:
//! - `sim`: Frame-stepped simulation (bird physics, pipes, difficulty, session)
//! - `platform`: Clock, frame pacing and input abstraction
//! - `driver`: The single loop that owns a session and runs it to completion
//! - `view`: Per-frame render snapshot handed to an external renderer
//! - `tuning`: Data-driven game balance

pub mod driver;
pub mod platform;
pub mod sim;
pub mod tuning;
pub mod view;

pub use driver::{Presenter, SessionSummary, run};
pub use tuning::{Tuning, TuningError};
pub use view::FrameView;

/// Game configuration constants
pub mod consts {
    /// Play area dimensions (pixels, y grows downward)
    pub const SCREEN_WIDTH: f32 = 800.0;
    pub const SCREEN_HEIGHT: f32 = 400.0;

    /// Bird defaults - fixed column one sixth of the way in
    pub const BIRD_X: f32 = 133.0;
    pub const BIRD_WIDTH: f32 = 40.0;
    pub const BIRD_HEIGHT: f32 = 30.0;
    /// Vertical speed while a move key is held (pixels/frame at 1.0x)
    pub const BIRD_BASE_SPEED: f32 = 6.0;
    /// Declared for tuning files; motion is set-velocity, nothing integrates it
    pub const GRAVITY: f32 = 0.5;

    /// Pipe defaults
    pub const PIPE_WIDTH: f32 = 70.0;
    /// Minimum distance between the gap and the top/bottom screen edge
    pub const PIPE_GAP_MARGIN: f32 = 50.0;
    /// Horizontal scroll speed (pixels/frame at 1.0x)
    pub const PIPE_BASE_SPEED: f32 = 4.0;

    /// Gap height at 1.0x and its floor
    pub const INITIAL_PIPE_GAP: f32 = 130.0;
    pub const MIN_PIPE_GAP: f32 = 100.0;

    /// Spawn interval at 1.0x and its floor (milliseconds)
    pub const INITIAL_SPAWN_INTERVAL_MS: f64 = 1500.0;
    pub const MIN_SPAWN_INTERVAL_MS: f64 = 800.0;
    /// Interval multiplier applied per pipe passed
    pub const SPAWN_INTERVAL_DECAY: f64 = 0.97;

    /// Speed multiplier added per pipe passed
    pub const SPEED_STEP: f64 = 0.03;

    /// Frame pacing targets
    pub const RUNNING_FPS: u32 = 30;
    pub const GAME_OVER_FPS: u32 = 15;
}
