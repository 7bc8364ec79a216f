//! Escalating difficulty
//!
//! A single speed multiplier drives everything: pipe speed, bird speed,
//! spawn cadence and gap height. It only ever grows within a round, one step
//! per pipe passed.

use crate::tuning::Tuning;

#[derive(Debug, Clone, PartialEq)]
pub struct Difficulty {
    /// Starts at 1.0, never decreases until reset
    pub speed_multiplier: f64,
    /// Minimum time between pipe spawns (never below the tuning floor)
    pub spawn_interval_ms: f64,
    /// Vertical gap between top and bottom pipe (never below the tuning floor)
    pub gap_height: f32,
    /// Pipes passed since the last reset
    pub pipes_passed: u32,
}

impl Difficulty {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            speed_multiplier: 1.0,
            spawn_interval_ms: tuning.initial_spawn_interval_ms,
            gap_height: tuning.initial_pipe_gap.max(tuning.min_pipe_gap),
            pipes_passed: 0,
        }
    }

    pub fn reset(&mut self, tuning: &Tuning) {
        *self = Self::new(tuning);
    }

    /// Step the curve once. Interval decay compounds on the current value.
    pub fn on_obstacle_passed(&mut self, tuning: &Tuning) {
        self.pipes_passed += 1;
        self.speed_multiplier += tuning.speed_step;
        self.spawn_interval_ms = (self.spawn_interval_ms * tuning.spawn_interval_decay)
            .max(tuning.min_spawn_interval_ms);
        let gap = (tuning.initial_pipe_gap as f64 / self.speed_multiplier).round() as f32;
        self.gap_height = gap.max(tuning.min_pipe_gap);
    }

    /// Horizontal pipe scroll per frame
    pub fn obstacle_speed(&self, tuning: &Tuning) -> f32 {
        (tuning.pipe_base_speed as f64 * self.speed_multiplier) as f32
    }

    /// Vertical bird speed per frame while a move key is held
    pub fn bird_speed(&self, tuning: &Tuning) -> f32 {
        (tuning.bird_base_speed as f64 * self.speed_multiplier) as f32
    }
}
