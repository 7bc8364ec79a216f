//! Flappy Pipes entry point
//!
//! Runs a headless session flown by the autopilot. Frames are logged rather
//! than drawn: score changes at info, full JSON snapshots at trace.

use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::Context;

use flappy_pipes::platform::{AutopilotInput, Clock, SystemClock};
use flappy_pipes::sim::GameState;
use flappy_pipes::{FrameView, Presenter, Tuning};

/// Rounds the demo plays before quitting
const DEMO_ROUNDS: u32 = 3;

/// Logs what a renderer would have drawn
#[derive(Debug, Default)]
struct LogPresenter {
    last_score: Option<u32>,
    banner_shown: bool,
}

impl Presenter for LogPresenter {
    fn present(&mut self, frame: &FrameView) {
        if self.last_score != Some(frame.score) {
            log::info!("{}", frame.hud);
            self.last_score = Some(frame.score);
        }

        match &frame.banner {
            Some(banner) if !self.banner_shown => {
                log::info!("{} ({})", banner.headline, banner.score_line);
                self.banner_shown = true;
            }
            Some(_) => {}
            None => self.banner_shown = false,
        }

        if log::log_enabled!(log::Level::Trace) {
            match frame.to_json() {
                Ok(json) => log::trace!("{}", json),
                Err(e) => log::warn!("Frame not serializable: {}", e),
            }
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    log::info!("Flappy Pipes starting...");

    let tuning = Tuning::load_or_default();
    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .context("system clock is before the epoch")?
        .as_millis() as u64;

    let mut clock = SystemClock::new();
    let mut state = GameState::new(tuning, seed, clock.now_ms());
    let mut input = AutopilotInput::new(DEMO_ROUNDS);
    let mut presenter = LogPresenter::default();

    let summary = flappy_pipes::run(&mut state, &mut clock, &mut input, &mut presenter);

    println!(
        "Played {} rounds, best score {} (seed {})",
        summary.rounds, summary.best_score, seed
    );
    Ok(())
}
