//! Per-parameter transition driver.
//!
//! A countdown loses `dt` every frame and the parameter takes an eased value
//! until the countdown empties. The loop is inverted into a small state
//! machine driven by an external per-frame `tick(dt)` call, so the host owns
//! the clock and there is no suspension runtime.

use crate::easing::{ease, EaseType};

/// One in-flight parameter transition. Constructing a new one replaces any
/// running transition for the same parameter: last trigger wins, no queue.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    total: f32,
    remaining: f32,
    start: f32,
    end: f32,
    curve: EaseType,
}

impl Transition {
    /// A non-positive `total` degenerates to an instantaneous jump: the
    /// first tick returns `end` and the transition is already finished.
    pub fn new(total: f32, start: f32, end: f32, curve: EaseType) -> Self {
        let total = if total > 0.0 { total } else { 0.0 };
        Self {
            total,
            remaining: total,
            start,
            end,
            curve,
        }
    }

    /// Advance by one frame's elapsed time and return the current value.
    ///
    /// Ticking past completion is a no-op that keeps returning `end`.
    pub fn tick(&mut self, dt: f32) -> f32 {
        self.remaining = (self.remaining - dt.max(0.0)).max(0.0);
        let progress = if self.total > 0.0 {
            1.0 - self.remaining / self.total
        } else {
            1.0
        };
        ease(self.curve, self.start, self.end, progress)
    }

    pub fn is_finished(&self) -> bool {
        self.remaining <= 0.0
    }

    pub fn start_value(&self) -> f32 {
        self.start
    }

    pub fn end_value(&self) -> f32 {
        self.end
    }
}

#[cfg(test)]
mod tests {
    use super::Transition;
    use crate::easing::EaseType;

    #[test]
    fn ticks_summing_to_total_land_exactly_on_end() {
        let mut t = Transition::new(0.25, 0.0, 1.0, EaseType::QuadOut);
        let mut last = 0.0;
        for _ in 0..40 {
            last = t.tick(0.01);
        }
        assert_eq!(last, 1.0);
        assert!(t.is_finished());
    }

    #[test]
    fn value_is_monotonic_for_quad_out() {
        let mut t = Transition::new(1.0, 0.0, 1.0, EaseType::QuadOut);
        let mut previous = 0.0;
        for _ in 0..40 {
            let value = t.tick(0.025);
            assert!(value >= previous);
            previous = value;
        }
    }

    #[test]
    fn descending_transition_is_monotonic_decreasing() {
        let mut t = Transition::new(0.5, 64.0, 1.0, EaseType::QuadOut);
        let mut previous = 64.0;
        for _ in 0..20 {
            let value = t.tick(0.025);
            assert!(value <= previous);
            previous = value;
        }
        assert_eq!(previous, 1.0);
    }

    #[test]
    fn ticking_past_completion_keeps_returning_end() {
        let mut t = Transition::new(0.1, 2.0, 5.0, EaseType::Linear);
        t.tick(0.2);
        assert!(t.is_finished());
        assert_eq!(t.tick(0.016), 5.0);
        assert_eq!(t.tick(100.0), 5.0);
    }

    #[test]
    fn zero_duration_jumps_to_end_without_dividing() {
        let mut t = Transition::new(0.0, 0.0, 1.0, EaseType::QuadOut);
        assert_eq!(t.tick(0.016), 1.0);
        assert!(t.is_finished());

        let mut t = Transition::new(-1.0, 3.0, 9.0, EaseType::QuintOut);
        assert_eq!(t.tick(0.0), 9.0);
    }

    #[test]
    fn oversized_dt_clamps_remaining_at_zero() {
        let mut t = Transition::new(0.25, 0.0, 1.0, EaseType::QuadOut);
        assert_eq!(t.tick(10.0), 1.0);
        assert!(t.is_finished());
    }
}
