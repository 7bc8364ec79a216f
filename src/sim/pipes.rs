//! Pipe spawning, scrolling and scoring
//!
//! Pipes are kept in spawn order, which is also their left-to-right screen
//! order. Nothing ever reorders them; they enter at the right edge and are
//! dropped once fully past the left edge.

use rand::Rng;

use super::rect::Rect;
use crate::tuning::Tuning;

/// One half of a pipe pair
#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    pub rect: Rect,
    /// Already credited to the score
    pub scored: bool,
}

impl Segment {
    fn new(rect: Rect) -> Self {
        Self {
            rect,
            scored: false,
        }
    }
}

/// A top/bottom pipe pair sharing one column and one gap
#[derive(Debug, Clone, PartialEq)]
pub struct Pipe {
    pub id: u32,
    pub top: Segment,
    pub bottom: Segment,
}

impl Pipe {
    /// Build a pair whose gap starts `gap_top` pixels below the screen top
    pub fn new(id: u32, x: f32, gap_top: f32, gap_height: f32, tuning: &Tuning) -> Self {
        let bottom_y = gap_top + gap_height;
        Self {
            id,
            top: Segment::new(Rect::new(x, 0.0, tuning.pipe_width, gap_top)),
            bottom: Segment::new(Rect::new(
                x,
                bottom_y,
                tuning.pipe_width,
                tuning.screen_height - bottom_y,
            )),
        }
    }

    pub fn x(&self) -> f32 {
        self.top.rect.left()
    }

    pub fn right(&self) -> f32 {
        self.top.rect.right()
    }

    pub fn gap_top(&self) -> f32 {
        self.top.rect.bottom()
    }

    pub fn gap_bottom(&self) -> f32 {
        self.bottom.rect.top()
    }

    /// Both halves have been credited
    pub fn scored(&self) -> bool {
        self.top.scored && self.bottom.scored
    }

    pub fn segments(&self) -> [&Segment; 2] {
        [&self.top, &self.bottom]
    }

    fn segments_mut(&mut self) -> [&mut Segment; 2] {
        [&mut self.top, &mut self.bottom]
    }
}

/// What happened during one [`PipeField::advance`]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AdvanceReport {
    /// Segments credited this frame (each worth half a point)
    pub segments_scored: u32,
    /// Pipes passed for the first time this frame, in screen order
    pub passed: Vec<u32>,
    /// Pipes dropped off the left edge this frame
    pub retired: Vec<u32>,
}

/// The ordered set of live pipes plus the spawn timer
#[derive(Debug, Clone, PartialEq)]
pub struct PipeField {
    pipes: Vec<Pipe>,
    /// Clock time of the most recent spawn (or reset)
    pub last_spawn_ms: u64,
    next_id: u32,
}

impl PipeField {
    pub fn new(now_ms: u64) -> Self {
        Self {
            pipes: Vec::new(),
            last_spawn_ms: now_ms,
            next_id: 1,
        }
    }

    /// Drop every pipe and restart the spawn timer
    pub fn clear(&mut self, now_ms: u64) {
        self.pipes.clear();
        self.last_spawn_ms = now_ms;
    }

    pub fn pipes(&self) -> &[Pipe] {
        &self.pipes
    }

    pub fn is_empty(&self) -> bool {
        self.pipes.is_empty()
    }

    pub fn len(&self) -> usize {
        self.pipes.len()
    }

    /// Every segment rect in screen order
    pub fn rects(&self) -> impl Iterator<Item = &Rect> {
        self.pipes.iter().flat_map(|p| [&p.top.rect, &p.bottom.rect])
    }

    /// Inclusive range of gap offsets that keeps the margin on both sides,
    /// or `None` when the gap is too large for the screen.
    pub fn gap_offset_range(tuning: &Tuning, gap_height: f32) -> Option<(i32, i32)> {
        let lo = tuning.pipe_gap_margin.ceil() as i32;
        let hi = (tuning.screen_height - gap_height - tuning.pipe_gap_margin).floor() as i32;
        (hi >= lo).then_some((lo, hi))
    }

    /// Spawn a pair at the right edge if more than `spawn_interval_ms` has
    /// elapsed since the last spawn. Returns the new pipe id.
    pub fn maybe_spawn<R: Rng + ?Sized>(
        &mut self,
        now_ms: u64,
        spawn_interval_ms: f64,
        gap_height: f32,
        tuning: &Tuning,
        rng: &mut R,
    ) -> Option<u32> {
        let elapsed = now_ms.saturating_sub(self.last_spawn_ms);
        if elapsed as f64 <= spawn_interval_ms {
            return None;
        }

        let gap_top = match Self::gap_offset_range(tuning, gap_height) {
            Some((lo, hi)) => rng.random_range(lo..=hi) as f32,
            None => {
                log::warn!(
                    "Pipe gap {} does not fit a {} px screen, clamping to margin",
                    gap_height,
                    tuning.screen_height
                );
                tuning.pipe_gap_margin
            }
        };

        self.last_spawn_ms = now_ms;
        Some(self.spawn_at(tuning.screen_width, gap_top, gap_height, tuning))
    }

    /// Append a pair at an explicit position
    pub fn spawn_at(&mut self, x: f32, gap_top: f32, gap_height: f32, tuning: &Tuning) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        self.pipes.push(Pipe::new(id, x, gap_top, gap_height, tuning));
        id
    }

    /// Scroll every pipe left by `speed`, credit segments that are now left
    /// of `bird_x`, then drop pipes whose right edge reached the screen edge.
    ///
    /// Scoring runs before removal so a pipe that crosses and leaves in the
    /// same frame still counts.
    pub fn advance(&mut self, speed: f32, bird_x: f32) -> AdvanceReport {
        let mut report = AdvanceReport::default();

        for pipe in &mut self.pipes {
            let was_untouched = !pipe.top.scored && !pipe.bottom.scored;
            let mut credited = false;

            for segment in pipe.segments_mut() {
                segment.rect.translate_x(-speed);
                if !segment.scored && segment.rect.right() < bird_x {
                    segment.scored = true;
                    report.segments_scored += 1;
                    credited = true;
                }
            }

            if was_untouched && credited {
                report.passed.push(pipe.id);
            }
        }

        self.pipes.retain(|pipe| {
            let keep = pipe.right() > 0.0;
            if !keep {
                report.retired.push(pipe.id);
            }
            keep
        });

        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_pipe_geometry() {
        let tuning = Tuning::default();
        let pipe = Pipe::new(1, 800.0, 100.0, 130.0, &tuning);
        assert_eq!(pipe.top.rect, Rect::new(800.0, 0.0, 70.0, 100.0));
        assert_eq!(pipe.bottom.rect, Rect::new(800.0, 230.0, 70.0, 170.0));
        assert_eq!(pipe.gap_top(), 100.0);
        assert_eq!(pipe.gap_bottom(), 230.0);
        assert!(!pipe.scored());
    }

    #[test]
    fn test_spawn_waits_for_interval() {
        let tuning = Tuning::default();
        let mut rng = Pcg32::seed_from_u64(7);
        let mut field = PipeField::new(1000);

        assert_eq!(field.maybe_spawn(2500, 1500.0, 130.0, &tuning, &mut rng), None);
        assert!(field.is_empty());

        let id = field.maybe_spawn(2501, 1500.0, 130.0, &tuning, &mut rng);
        assert_eq!(id, Some(1));
        assert_eq!(field.last_spawn_ms, 2501);
        assert_eq!(field.len(), 1);
        assert_eq!(field.pipes()[0].x(), 800.0);

        // Timer restarted from the spawn
        assert_eq!(field.maybe_spawn(3000, 1500.0, 130.0, &tuning, &mut rng), None);
    }

    #[test]
    fn test_spawned_gap_within_margins() {
        let tuning = Tuning::default();
        let mut rng = Pcg32::seed_from_u64(42);
        let mut field = PipeField::new(0);
        let mut now = 0;
        for _ in 0..200 {
            now += 1501;
            field.maybe_spawn(now, 1500.0, 130.0, &tuning, &mut rng);
        }
        for pipe in field.pipes() {
            assert!(pipe.gap_top() >= 50.0);
            assert!(pipe.gap_top() <= 400.0 - 130.0 - 50.0);
            assert_eq!(pipe.gap_bottom() - pipe.gap_top(), 130.0);
            assert_eq!(pipe.bottom.rect.bottom(), 400.0);
            assert_eq!(pipe.gap_top().fract(), 0.0);
        }
    }

    #[test]
    fn test_oversized_gap_clamps_to_margin() {
        let tuning = Tuning::default();
        let mut rng = Pcg32::seed_from_u64(1);
        let mut field = PipeField::new(0);
        assert_eq!(PipeField::gap_offset_range(&tuning, 350.0), None);

        field.maybe_spawn(2000, 1500.0, 350.0, &tuning, &mut rng);
        let pipe = &field.pipes()[0];
        assert_eq!(pipe.gap_top(), 50.0);
        // Bottom segment would start past the screen edge; height clamps to zero
        assert_eq!(pipe.bottom.rect.size.y, 0.0);
    }

    #[test]
    fn test_advance_scrolls_and_keeps_order() {
        let tuning = Tuning::default();
        let mut field = PipeField::new(0);
        field.spawn_at(500.0, 100.0, 130.0, &tuning);
        field.spawn_at(800.0, 150.0, 130.0, &tuning);

        let report = field.advance(4.0, 133.0);
        assert_eq!(report, AdvanceReport::default());
        let xs: Vec<f32> = field.pipes().iter().map(Pipe::x).collect();
        assert_eq!(xs, vec![496.0, 796.0]);
        assert_eq!(field.pipes()[0].bottom.rect.left(), 496.0);
    }

    #[test]
    fn test_pair_scores_two_halves_once() {
        let tuning = Tuning::default();
        let mut field = PipeField::new(0);
        // Right edge at 135, bird at 133: crosses after one 4px step
        field.spawn_at(65.0, 100.0, 130.0, &tuning);

        let report = field.advance(4.0, 133.0);
        assert_eq!(report.segments_scored, 2);
        assert_eq!(report.passed, vec![1]);
        assert!(field.pipes()[0].scored());

        let report = field.advance(4.0, 133.0);
        assert_eq!(report.segments_scored, 0);
        assert!(report.passed.is_empty());
    }

    #[test]
    fn test_right_edge_on_bird_column_is_not_passed() {
        let tuning = Tuning::default();
        let mut field = PipeField::new(0);
        field.spawn_at(67.0, 100.0, 130.0, &tuning);
        // Right edge lands exactly on 133
        let report = field.advance(4.0, 133.0);
        assert_eq!(report.segments_scored, 0);
    }

    #[test]
    fn test_scored_and_removed_same_frame() {
        let tuning = Tuning::default();
        let mut field = PipeField::new(0);
        // Right edge at 3: after a 4px step it is past the left edge
        field.spawn_at(-67.0, 100.0, 130.0, &tuning);

        let report = field.advance(4.0, 133.0);
        assert_eq!(report.segments_scored, 2);
        assert_eq!(report.passed, vec![1]);
        assert_eq!(report.retired, vec![1]);
        assert!(field.is_empty());
    }

    #[test]
    fn test_removed_exactly_at_left_edge() {
        let tuning = Tuning::default();
        let mut field = PipeField::new(0);
        field.spawn_at(-66.0, 100.0, 130.0, &tuning);
        field.spawn_at(-65.0, 100.0, 130.0, &tuning);

        // Right edges land on 0 and 1
        let report = field.advance(4.0, 133.0);
        assert_eq!(report.retired, vec![1]);
        assert_eq!(field.len(), 1);
        assert_eq!(field.pipes()[0].right(), 1.0);
    }

    #[test]
    fn test_clear_resets_timer() {
        let tuning = Tuning::default();
        let mut field = PipeField::new(0);
        field.spawn_at(800.0, 100.0, 130.0, &tuning);
        field.clear(9000);
        assert!(field.is_empty());
        assert_eq!(field.last_spawn_ms, 9000);
        assert_eq!(field.rects().count(), 0);
    }

    proptest! {
        #[test]
        fn prop_spawn_iff_interval_exceeded(
            steps in proptest::collection::vec(0u64..3000, 1..60),
            interval in 800.0f64..2000.0,
        ) {
            let tuning = Tuning::default();
            let mut rng = Pcg32::seed_from_u64(3);
            let mut field = PipeField::new(0);
            let mut now = 0u64;
            for step in steps {
                now += step;
                let last = field.last_spawn_ms;
                let before = field.len();
                let spawned = field.maybe_spawn(now, interval, 130.0, &tuning, &mut rng);
                let expected = (now - last) as f64 > interval;
                prop_assert_eq!(spawned.is_some(), expected);
                prop_assert_eq!(field.len(), before + usize::from(expected));
            }
        }
    }
}
