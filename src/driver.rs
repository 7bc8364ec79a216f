//! Session driver
//!
//! The one loop that owns the `GameState`: drain input, tick, present, pace.
//! Running frames are paced at `running_fps`; while waiting for the restart
//! choice the loop keeps polling at the slower `game_over_fps`. A quit is
//! seen on the very next poll in either phase and ends the loop before
//! anything else is touched.

use crate::platform::{Clock, FramePacer, InputSource};
use crate::sim::{GameEvent, GameState, tick};
use crate::view::FrameView;

/// Receives one snapshot per loop iteration
pub trait Presenter {
    fn present(&mut self, frame: &FrameView);
}

impl<F: FnMut(&FrameView)> Presenter for F {
    fn present(&mut self, frame: &FrameView) {
        self(frame)
    }
}

/// What a finished session looked like
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionSummary {
    /// Rounds started, including the first
    pub rounds: u32,
    /// Best final score across rounds
    pub best_score: u32,
    /// Score of the last round when the session ended
    pub last_score: u32,
    /// Simulation frames stepped across all rounds
    pub frames: u64,
}

/// Run `state` until it terminates
pub fn run<C, I, P>(
    state: &mut GameState,
    clock: &mut C,
    input: &mut I,
    presenter: &mut P,
) -> SessionSummary
where
    C: Clock + ?Sized,
    I: InputSource + ?Sized,
    P: Presenter + ?Sized,
{
    let mut pacer = FramePacer::new();
    let mut summary = SessionSummary {
        rounds: 1,
        ..Default::default()
    };

    loop {
        let events = input.drain(state);
        let was_running = state.is_running();
        tick(state, &events, clock.now_ms());

        if was_running && !state.is_terminated() {
            summary.frames += 1;
        }
        for event in &state.events {
            match event {
                GameEvent::Crashed { .. } => {
                    summary.best_score = summary.best_score.max(state.display_score());
                }
                GameEvent::Restarted => summary.rounds += 1,
                _ => {}
            }
        }

        if state.is_terminated() {
            break;
        }

        presenter.present(&FrameView::capture(state));

        let fps = if state.is_running() {
            state.tuning.running_fps
        } else {
            state.tuning.game_over_fps
        };
        pacer.wait(clock, fps);
    }

    summary.last_score = state.display_score();
    summary.best_score = summary.best_score.max(summary.last_score);
    log::info!(
        "Session over: {} rounds, best {}, {} frames",
        summary.rounds,
        summary.best_score,
        summary.frames
    );
    summary
}
