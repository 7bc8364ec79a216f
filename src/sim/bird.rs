//! The player-controlled bird
//!
//! Arcade controls: holding a move key sets the vertical velocity outright,
//! releasing either key stops the bird. There is no acceleration ramp and no
//! gravity fall.

use glam::Vec2;

use super::rect::Rect;
use crate::tuning::Tuning;

/// Vertical move direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Bird {
    /// Top-left corner; x never changes during a round
    pub pos: Vec2,
    /// Vertical velocity in pixels/frame (positive = downward)
    pub vel_y: f32,
    pub size: Vec2,
}

impl Bird {
    /// Bird at its starting column, vertically centred, at rest
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            pos: Vec2::new(tuning.bird_x, tuning.bird_start_y()),
            vel_y: 0.0,
            size: Vec2::new(tuning.bird_width, tuning.bird_height),
        }
    }

    /// Set velocity from a held direction, or stop on `None`
    pub fn apply_input(&mut self, direction: Option<Direction>, speed: f32) {
        self.vel_y = match direction {
            Some(Direction::Up) => -speed,
            Some(Direction::Down) => speed,
            None => 0.0,
        };
    }

    /// Advance one frame
    pub fn integrate(&mut self) {
        self.pos.y += self.vel_y;
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.pos.x, self.pos.y, self.size.x, self.size.y)
    }
}
