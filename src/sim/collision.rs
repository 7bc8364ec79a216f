//! Terminal condition: pipe hits and leaving the play area
//!
//! Hitting a pipe and flying off the top or bottom are the same thing as far
//! as the session is concerned; [`CrashCause`] only exists for logging.

use super::pipes::Pipe;
use super::rect::{EdgeContact, Rect};

/// Why a round ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CrashCause {
    /// Bird's top edge went above the screen
    Ceiling,
    /// Bird's bottom edge went below the screen
    Floor,
    /// Bird overlapped a pipe segment
    Pipe { id: u32 },
}

/// Bounds first, then pipes in screen order
pub fn check_crash(
    bird: &Rect,
    pipes: &[Pipe],
    screen_height: f32,
    contact: EdgeContact,
) -> Option<CrashCause> {
    if bird.top() < 0.0 {
        return Some(CrashCause::Ceiling);
    }
    if bird.bottom() > screen_height {
        return Some(CrashCause::Floor);
    }

    pipes
        .iter()
        .find(|pipe| {
            pipe.segments()
                .iter()
                .any(|segment| bird.intersects(&segment.rect, contact))
        })
        .map(|pipe| CrashCause::Pipe { id: pipe.id })
}

/// Does this bird position end the round?
pub fn is_terminal<'a>(
    bird: &Rect,
    obstacles: impl IntoIterator<Item = &'a Rect>,
    screen_height: f32,
    contact: EdgeContact,
) -> bool {
    bird.top() < 0.0
        || bird.bottom() > screen_height
        || obstacles
            .into_iter()
            .any(|rect| bird.intersects(rect, contact))
}
