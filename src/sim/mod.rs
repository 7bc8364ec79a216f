//! Frame-stepped simulation module
//!
//! All gameplay logic lives here. This module must stay free of rendering
//! and platform code:
//! - One `tick` per frame, clock time passed in
//! - Seeded RNG only
//! - Pipes kept in spawn order

pub mod autopilot;
pub mod bird;
pub mod collision;
pub mod difficulty;
pub mod pipes;
pub mod rect;
pub mod state;
pub mod tick;

pub use autopilot::steer;
pub use bird::{Bird, Direction};
pub use collision::{CrashCause, check_crash, is_terminal};
pub use difficulty::Difficulty;
pub use pipes::{AdvanceReport, Pipe, PipeField, Segment};
pub use rect::{EdgeContact, Rect};
pub use state::{GameEvent, GamePhase, GameState, InputEvent};
pub use tick::{handle_event, tick};
