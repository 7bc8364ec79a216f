//! Demo mode: a controller that flies the bird by itself
//!
//! Aims the bird's centre at the centre of the next gap ahead. While the bird
//! is inside a pipe column the aim is clamped to the part of the current gap
//! it can safely occupy. Only emits an event when the wanted direction
//! changes, the same way a player presses and releases keys.

use super::bird::Direction;
use super::state::{GameState, InputEvent};

/// Next key event the autopilot wants, if any
pub fn steer(state: &GameState) -> Option<InputEvent> {
    if !state.is_running() {
        return None;
    }

    let bird = state.bird_rect();
    let half_height = bird.size.y / 2.0;
    let bird_centre = bird.top() + half_height;
    // Within one frame of travel counts as on target
    let dead_zone = state.difficulty.bird_speed(&state.tuning);

    let pipes = state.pipes.pipes();
    let mut target = pipes
        .iter()
        .find(|pipe| pipe.x() > bird.right())
        .map(|pipe| (pipe.gap_top() + pipe.gap_bottom()) / 2.0)
        .unwrap_or(state.tuning.screen_height / 2.0);

    if let Some(pipe) = pipes
        .iter()
        .find(|pipe| pipe.x() <= bird.right() && pipe.right() >= bird.left())
    {
        let low = pipe.gap_top() + half_height + dead_zone + 1.0;
        let high = pipe.gap_bottom() - half_height - dead_zone - 1.0;
        target = if low <= high {
            target.clamp(low, high)
        } else {
            (pipe.gap_top() + pipe.gap_bottom()) / 2.0
        };
    }

    let delta = target - bird_centre;
    let wanted = if delta < -dead_zone {
        Some(Direction::Up)
    } else if delta > dead_zone {
        Some(Direction::Down)
    } else {
        None
    };

    let current = if state.bird.vel_y < 0.0 {
        Some(Direction::Up)
    } else if state.bird.vel_y > 0.0 {
        Some(Direction::Down)
    } else {
        None
    };

    if wanted == current {
        return None;
    }

    Some(match wanted {
        Some(Direction::Up) => InputEvent::MoveUp { pressed: true },
        Some(Direction::Down) => InputEvent::MoveDown { pressed: true },
        None => InputEvent::MoveUp { pressed: false },
    })
}
