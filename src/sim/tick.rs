//! Frame step
//!
//! One call = one frame: apply the drained input events, then (while
//! running) move the bird, maybe spawn, scroll and score pipes, and check
//! for a crash.

use super::bird::Direction;
use super::collision::check_crash;
use super::state::{GameEvent, GamePhase, GameState, InputEvent};

/// Advance the session by one frame at clock time `now_ms`
pub fn tick(state: &mut GameState, input: &[InputEvent], now_ms: u64) {
    state.events.clear();

    // A restart handled this frame must not also step the new round
    let was_running = state.is_running();

    for &event in input {
        handle_event(state, event, now_ms);
        if state.is_terminated() {
            return;
        }
    }

    if was_running && state.is_running() {
        step(state, now_ms);
    }
}

/// Apply one input event according to the current phase
pub fn handle_event(state: &mut GameState, event: InputEvent, now_ms: u64) {
    match (state.phase, event) {
        (GamePhase::Terminated, _) => {}
        (_, InputEvent::Quit) | (GamePhase::AwaitingRestartChoice, InputEvent::ConfirmQuit) => {
            log::info!("Quit with score {}", state.display_score());
            state.phase = GamePhase::Terminated;
            state.events.push(GameEvent::Quit);
        }
        (GamePhase::AwaitingRestartChoice, InputEvent::ConfirmRestart) => {
            state.reset(now_ms);
            state.events.push(GameEvent::Restarted);
        }
        (GamePhase::Running, InputEvent::MoveUp { pressed })
        | (GamePhase::Running, InputEvent::MoveDown { pressed }) => {
            let direction = match (event, pressed) {
                (_, false) => None,
                (InputEvent::MoveUp { .. }, true) => Some(Direction::Up),
                _ => Some(Direction::Down),
            };
            let speed = state.difficulty.bird_speed(&state.tuning);
            state.bird.apply_input(direction, speed);
        }
        // Moves while frozen, confirms while running
        _ => {}
    }
}

fn step(state: &mut GameState, now_ms: u64) {
    state.frame += 1;
    state.bird.integrate();

    let GameState {
        tuning,
        pipes,
        difficulty,
        rng,
        ..
    } = state;
    if let Some(id) = pipes.maybe_spawn(
        now_ms,
        difficulty.spawn_interval_ms,
        difficulty.gap_height,
        tuning,
        rng,
    ) {
        log::debug!("Pipe {} spawned (gap {})", id, difficulty.gap_height);
        state.events.push(GameEvent::PipeSpawned { id });
    }

    let speed = state.difficulty.obstacle_speed(&state.tuning);
    let report = state.pipes.advance(speed, state.tuning.bird_x);
    state.score += 0.5 * report.segments_scored as f64;
    for id in report.passed {
        state.difficulty.on_obstacle_passed(&state.tuning);
        log::debug!(
            "Pipe {} passed, score {}, speed x{:.2}",
            id,
            state.score,
            state.difficulty.speed_multiplier
        );
        state.events.push(GameEvent::PipePassed { id });
    }

    if let Some(cause) = check_crash(
        &state.bird_rect(),
        state.pipes.pipes(),
        state.tuning.screen_height,
        state.tuning.edge_contact,
    ) {
        log::info!(
            "Game over ({:?}) after {} frames, score {}",
            cause,
            state.frame,
            state.display_score()
        );
        state.phase = GamePhase::AwaitingRestartChoice;
        state.events.push(GameEvent::Crashed { cause });
    }

    log::trace!(
        "Frame {}: bird y={:.1} vy={:.1}, {} pipes",
        state.frame,
        state.bird.pos.y,
        state.bird.vel_y,
        state.pipes.len()
    );
}
