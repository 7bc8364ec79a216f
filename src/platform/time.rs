//! Monotonic clock and frame pacing

use std::time::{Duration, Instant};

/// Millisecond clock the driver paces against
pub trait Clock {
    /// Milliseconds since an arbitrary fixed origin; never goes backwards
    fn now_ms(&self) -> u64;

    /// Block for `ms` milliseconds
    fn sleep_ms(&mut self, ms: u64);
}

/// Wall clock backed by [`Instant`]
#[derive(Debug, Clone)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now_ms(&self) -> u64 {
        self.origin.elapsed().as_millis() as u64
    }

    fn sleep_ms(&mut self, ms: u64) {
        std::thread::sleep(Duration::from_millis(ms));
    }
}

/// Clock that only moves when told to. Sleeping advances it instantly.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now: u64,
}

impl ManualClock {
    pub fn new(start_ms: u64) -> Self {
        Self { now: start_ms }
    }

    pub fn advance(&mut self, ms: u64) {
        self.now += ms;
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> u64 {
        self.now
    }

    fn sleep_ms(&mut self, ms: u64) {
        self.advance(ms);
    }
}

/// Caps a loop at a target frame rate.
///
/// Each `wait` blocks until at least one frame period has passed since the
/// previous `wait` returned.
#[derive(Debug, Clone, Default)]
pub struct FramePacer {
    last_frame_ms: Option<u64>,
}

impl FramePacer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Frame period in whole milliseconds for a rate
    pub fn frame_ms(fps: u32) -> u64 {
        (1000 / fps.max(1)) as u64
    }

    /// Sleep out the rest of the frame. Returns the time slept.
    pub fn wait<C: Clock + ?Sized>(&mut self, clock: &mut C, fps: u32) -> u64 {
        let frame = Self::frame_ms(fps);
        let now = clock.now_ms();
        let slept = match self.last_frame_ms {
            Some(last) => {
                let elapsed = now.saturating_sub(last);
                let remaining = frame.saturating_sub(elapsed);
                if remaining > 0 {
                    clock.sleep_ms(remaining);
                }
                remaining
            }
            None => 0,
        };
        self.last_frame_ms = Some(clock.now_ms());
        slept
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_periods() {
        assert_eq!(FramePacer::frame_ms(30), 33);
        assert_eq!(FramePacer::frame_ms(15), 66);
        assert_eq!(FramePacer::frame_ms(0), 1000);
    }

    #[test]
    fn test_manual_clock_sleep_advances() {
        let mut clock = ManualClock::new(10);
        clock.sleep_ms(5);
        clock.advance(5);
        assert_eq!(clock.now_ms(), 20);
    }

    #[test]
    fn test_pacer_fills_remaining_frame() {
        let mut clock = ManualClock::new(0);
        let mut pacer = FramePacer::new();

        // First call only records the frame start
        assert_eq!(pacer.wait(&mut clock, 30), 0);

        clock.advance(10);
        assert_eq!(pacer.wait(&mut clock, 30), 23);
        assert_eq!(clock.now_ms(), 33);

        // A slow frame is not penalised further
        clock.advance(50);
        assert_eq!(pacer.wait(&mut clock, 30), 0);
        assert_eq!(clock.now_ms(), 83);

        // Reduced rate while waiting for a choice
        assert_eq!(pacer.wait(&mut clock, 15), 66);
        assert_eq!(clock.now_ms(), 149);
    }

    #[test]
    fn test_system_clock_is_monotonic() {
        let mut clock = SystemClock::new();
        let a = clock.now_ms();
        clock.sleep_ms(2);
        assert!(clock.now_ms() >= a + 2);
    }
}
