//! Input sources and key mapping
//!
//! Device polling is someone else's job; this module only turns physical
//! keys into [`InputEvent`]s and defines where the driver gets them from.

use std::collections::VecDeque;

use crate::sim::{GamePhase, GameState, InputEvent, steer};

/// Physical keys the game cares about
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Up,
    Down,
    Space,
    Escape,
    /// Window close button / OS quit request
    WindowClose,
    Other,
}

/// Map a key press (`pressed = true`) or release to a logical event
pub fn map_key(key: Key, pressed: bool) -> Option<InputEvent> {
    match (key, pressed) {
        (Key::Up, pressed) => Some(InputEvent::MoveUp { pressed }),
        (Key::Down, pressed) => Some(InputEvent::MoveDown { pressed }),
        (Key::Space, true) => Some(InputEvent::ConfirmRestart),
        (Key::Escape, true) => Some(InputEvent::ConfirmQuit),
        (Key::WindowClose, _) => Some(InputEvent::Quit),
        _ => None,
    }
}

/// Where the driver drains input from, once per loop iteration.
///
/// Sources may look at the session (the autopilot does); a real device
/// source would ignore it.
pub trait InputSource {
    /// Every event that arrived since the last call. Must not block.
    fn drain(&mut self, state: &GameState) -> Vec<InputEvent>;
}

/// Replays a fixed list of per-frame batches, then reports `Quit` as if the
/// window had been closed.
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    frames: VecDeque<Vec<InputEvent>>,
}

impl ScriptedInput {
    pub fn new(frames: impl IntoIterator<Item = Vec<InputEvent>>) -> Self {
        Self {
            frames: frames.into_iter().collect(),
        }
    }

    /// Batches not yet handed out
    pub fn remaining(&self) -> usize {
        self.frames.len()
    }
}

impl InputSource for ScriptedInput {
    fn drain(&mut self, _state: &GameState) -> Vec<InputEvent> {
        self.frames
            .pop_front()
            .unwrap_or_else(|| vec![InputEvent::Quit])
    }
}

/// Demo input: the autopilot flies, and after a crash it restarts until
/// `rounds` rounds have been played, then quits.
#[derive(Debug, Clone)]
pub struct AutopilotInput {
    rounds: u32,
}

impl AutopilotInput {
    pub fn new(rounds: u32) -> Self {
        Self {
            rounds: rounds.max(1),
        }
    }
}

impl InputSource for AutopilotInput {
    fn drain(&mut self, state: &GameState) -> Vec<InputEvent> {
        match state.phase {
            GamePhase::Running => steer(state).into_iter().collect(),
            GamePhase::AwaitingRestartChoice if state.restarts + 1 < self.rounds => {
                vec![InputEvent::ConfirmRestart]
            }
            GamePhase::AwaitingRestartChoice => vec![InputEvent::ConfirmQuit],
            GamePhase::Terminated => Vec::new(),
        }
    }
}
