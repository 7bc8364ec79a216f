//! Session state and core simulation types
//!
//! One `GameState` is one play session: the bird, the pipes, the difficulty
//! curve and the score, plus the phase of the session state machine. The
//! driver loop holds the only mutable reference.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::bird::Bird;
use super::collision::CrashCause;
use super::difficulty::Difficulty;
use super::pipes::PipeField;
use super::rect::Rect;
use crate::tuning::Tuning;

/// Session state machine phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Simulation advancing every frame
    Running,
    /// Round over, frozen until the player picks restart or quit
    AwaitingRestartChoice,
    /// Absorbing; the driver exits
    Terminated,
}

/// Logical input, already decoded from whatever device produced it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputEvent {
    MoveUp { pressed: bool },
    MoveDown { pressed: bool },
    /// Window closed / process asked to stop; honoured in every phase
    Quit,
    ConfirmRestart,
    ConfirmQuit,
}

/// Things that happened during the most recent tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    PipeSpawned { id: u32 },
    PipePassed { id: u32 },
    Crashed { cause: CrashCause },
    Restarted,
    Quit,
}

/// Complete session state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Seed for reproducible pipe layouts
    pub seed: u64,
    pub tuning: Tuning,
    pub phase: GamePhase,
    pub bird: Bird,
    pub pipes: PipeField,
    pub difficulty: Difficulty,
    /// Half a point per pipe segment passed
    pub score: f64,
    /// Frames simulated in the current round
    pub frame: u64,
    /// Rounds started after the first
    pub restarts: u32,
    /// Events from the last tick
    pub events: Vec<GameEvent>,
    pub(crate) rng: Pcg32,
}

impl GameState {
    /// Start a fresh session in `Running` at clock time `now_ms`
    pub fn new(tuning: Tuning, seed: u64, now_ms: u64) -> Self {
        log::info!("New session (seed {})", seed);
        Self {
            seed,
            phase: GamePhase::Running,
            bird: Bird::new(&tuning),
            pipes: PipeField::new(now_ms),
            difficulty: Difficulty::new(&tuning),
            score: 0.0,
            frame: 0,
            restarts: 0,
            events: Vec::new(),
            rng: Pcg32::seed_from_u64(seed),
            tuning,
        }
    }

    /// Put everything back to round-start values and resume running.
    ///
    /// The RNG keeps its stream so consecutive rounds get fresh layouts.
    pub fn reset(&mut self, now_ms: u64) {
        self.bird = Bird::new(&self.tuning);
        self.pipes.clear(now_ms);
        self.difficulty.reset(&self.tuning);
        self.score = 0.0;
        self.frame = 0;
        self.restarts += 1;
        self.phase = GamePhase::Running;
        log::info!("Round {} started", self.restarts + 1);
    }

    /// Score as shown to the player
    pub fn display_score(&self) -> u32 {
        self.score as u32
    }

    pub fn bird_rect(&self) -> Rect {
        self.bird.rect()
    }

    pub fn is_running(&self) -> bool {
        self.phase == GamePhase::Running
    }

    pub fn is_terminated(&self) -> bool {
        self.phase == GamePhase::Terminated
    }
}
