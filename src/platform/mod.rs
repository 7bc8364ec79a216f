//! Platform abstraction layer
//!
//! Everything the simulation needs from the outside world:
//! - Time: a monotonic millisecond clock and frame pacing
//! - Input: physical keys mapped to logical events, and event sources

pub mod input;
pub mod time;

pub use input::{AutopilotInput, InputSource, Key, ScriptedInput, map_key};
pub use time::{Clock, FramePacer, ManualClock, SystemClock};
