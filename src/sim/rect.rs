//! Axis-aligned rectangle geometry for the bird and pipe segments
//!
//! Screen space, top-left origin, y grows downward:
//! - min: top-left corner
//! - size: width and height (never negative)

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// How touching edges are treated by [`Rect::intersects`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EdgeContact {
    /// Closed intervals: rects that share an edge collide
    #[default]
    Inclusive,
    /// Open intervals: rects must overlap by a non-zero area
    Exclusive,
}

/// An axis-aligned rectangle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// Top-left corner
    pub min: Vec2,
    /// Width and height
    pub size: Vec2,
}

impl Rect {
    /// Negative extents are clamped to zero.
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            min: Vec2::new(x, y),
            size: Vec2::new(width.max(0.0), height.max(0.0)),
        }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.min.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.min.x + self.size.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.min.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.min.y + self.size.y
    }

    /// Shift horizontally by `dx` (negative = left)
    pub fn translate_x(&mut self, dx: f32) {
        self.min.x += dx;
    }

    /// Axis-aligned overlap test
    pub fn intersects(&self, other: &Rect, contact: EdgeContact) -> bool {
        match contact {
            EdgeContact::Inclusive => {
                self.left() <= other.right()
                    && other.left() <= self.right()
                    && self.top() <= other.bottom()
                    && other.top() <= self.bottom()
            }
            EdgeContact::Exclusive => {
                self.left() < other.right()
                    && other.left() < self.right()
                    && self.top() < other.bottom()
                    && other.top() < self.bottom()
            }
        }
    }
}
