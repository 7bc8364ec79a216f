//! Per-frame render snapshot
//!
//! Everything a renderer needs to draw one frame, and nothing it could use to
//! mutate the session. Drawing itself happens outside this crate.

use serde::Serialize;

use crate::sim::{GamePhase, GameState, Rect};

/// Banner headline shown while waiting for the restart choice
pub const GAME_OVER_TEXT: &str = "Game Over! Press SPACE to Play Again or ESC to Quit";

/// Text shown once a round has ended
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GameOverBanner {
    pub headline: String,
    /// "Your Score: N"
    pub score_line: String,
}

/// What to draw this frame
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrameView {
    pub phase: GamePhase,
    pub bird: Rect,
    /// Pipe segments in screen order (top, bottom, top, bottom, ...)
    pub pipes: Vec<Rect>,
    /// Integer-truncated score
    pub score: u32,
    /// "Score: N" in the corner
    pub hud: String,
    pub banner: Option<GameOverBanner>,
}

impl FrameView {
    pub fn capture(state: &GameState) -> Self {
        let score = state.display_score();
        let banner = (state.phase == GamePhase::AwaitingRestartChoice).then(|| GameOverBanner {
            headline: GAME_OVER_TEXT.to_string(),
            score_line: format!("Your Score: {}", score),
        });

        Self {
            phase: state.phase,
            bird: state.bird_rect(),
            pipes: state.pipes.rects().copied().collect(),
            score,
            hud: format!("Score: {}", score),
            banner,
        }
    }

    /// JSON form for tracing/recording presenters
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tuning::Tuning;

    #[test]
    fn test_running_frame() {
        let mut state = GameState::new(Tuning::default(), 1, 0);
        let tuning = state.tuning.clone();
        state.pipes.spawn_at(500.0, 100.0, 130.0, &tuning);
        state.score = 2.5;

        let view = FrameView::capture(&state);
        assert_eq!(view.phase, GamePhase::Running);
        assert_eq!(view.bird, Rect::new(133.0, 200.0, 40.0, 30.0));
        assert_eq!(view.pipes.len(), 2);
        assert_eq!(view.pipes[0], Rect::new(500.0, 0.0, 70.0, 100.0));
        assert_eq!(view.pipes[1], Rect::new(500.0, 230.0, 70.0, 170.0));
        assert_eq!(view.score, 2);
        assert_eq!(view.hud, "Score: 2");
        assert!(view.banner.is_none());
    }

    #[test]
    fn test_game_over_banner() {
        let mut state = GameState::new(Tuning::default(), 1, 0);
        state.score = 7.0;
        state.phase = GamePhase::AwaitingRestartChoice;

        let view = FrameView::capture(&state);
        let banner = view.banner.expect("banner while awaiting choice");
        assert_eq!(banner.headline, GAME_OVER_TEXT);
        assert_eq!(banner.score_line, "Your Score: 7");
    }

    #[test]
    fn test_json_snapshot() {
        let state = GameState::new(Tuning::default(), 1, 0);
        let json = FrameView::capture(&state).to_json().expect("serializable");
        assert!(json.contains("\"phase\":\"Running\""));
        assert!(json.contains("\"hud\":\"Score: 0\""));
        assert!(json.contains("\"banner\":null"));
    }
}
