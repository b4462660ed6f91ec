//! Frame timing.
//!
//! Movement code authors velocities per logical frame (60 per second) and
//! scales them with [`frame_scale`], so gameplay speed does not depend on
//! the display refresh rate.

use std::time::Instant;

use crate::config::{DEFAULT_MAX_DELTA, LOGICAL_FPS};

/// Monotonic delta-time source with spike clamping.
#[derive(Debug, Clone)]
pub struct FrameClock {
    last: Option<Instant>,
    max_delta: f32,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::with_max_delta(DEFAULT_MAX_DELTA)
    }

    pub fn with_max_delta(max_delta: f32) -> Self {
        Self {
            last: None,
            max_delta,
        }
    }

    /// Seconds elapsed since the previous call, in `[0, max_delta]`.
    ///
    /// The first call returns exactly 0.0 so startup work does not show up
    /// as one huge frame.
    pub fn delta_time(&mut self) -> f32 {
        self.delta_at(Instant::now())
    }

    /// Same as [`delta_time`](Self::delta_time) but against an explicit sample time.
    pub fn delta_at(&mut self, now: Instant) -> f32 {
        let Some(last) = self.last.replace(now) else {
            return 0.0;
        };
        // saturating: an earlier `now` floors to zero instead of going negative
        let elapsed = now.saturating_duration_since(last).as_secs_f32();
        elapsed.clamp(0.0, self.max_delta)
    }

    /// Forgets the last sample; the next query returns 0.0 again.
    pub fn reset(&mut self) {
        self.last = None;
    }

    pub fn max_delta(&self) -> f32 {
        self.max_delta
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

/// Converts elapsed seconds to logical frames.
#[inline]
pub fn frame_scale(delta_seconds: f32) -> f32 {
    delta_seconds * LOGICAL_FPS
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::time::Duration;

    #[test]
    fn first_query_is_zero() {
        let mut clock = FrameClock::new();
        assert_eq!(clock.delta_time(), 0.0);
    }

    #[test]
    fn reports_elapsed_time() {
        let mut clock = FrameClock::new();
        let start = Instant::now();
        clock.delta_at(start);
        let dt = clock.delta_at(start + Duration::from_millis(16));
        assert_relative_eq!(dt, 0.016, epsilon = 1e-6);
    }

    #[test]
    fn spikes_are_clamped() {
        let mut clock = FrameClock::new();
        let start = Instant::now();
        clock.delta_at(start);
        let dt = clock.delta_at(start + Duration::from_secs(3));
        assert_relative_eq!(dt, DEFAULT_MAX_DELTA);
    }

    #[test]
    fn going_backwards_floors_to_zero() {
        let mut clock = FrameClock::new();
        let start = Instant::now() + Duration::from_secs(1);
        clock.delta_at(start);
        assert_eq!(clock.delta_at(start - Duration::from_millis(500)), 0.0);
    }

    #[test]
    fn real_clock_stays_in_range() {
        let mut clock = FrameClock::new();
        for _ in 0..5 {
            let dt = clock.delta_time();
            assert!((0.0..=DEFAULT_MAX_DELTA).contains(&dt));
            std::thread::sleep(Duration::from_millis(1));
        }
    }

    #[test]
    fn reset_restarts_at_zero() {
        let mut clock = FrameClock::new();
        let start = Instant::now();
        clock.delta_at(start);
        clock.reset();
        assert_eq!(clock.delta_at(start + Duration::from_millis(40)), 0.0);
    }

    #[test]
    fn frame_scale_counts_logical_frames() {
        assert_relative_eq!(frame_scale(1.0 / 60.0), 1.0, epsilon = 1e-5);
        assert_relative_eq!(frame_scale(0.05), 3.0, epsilon = 1e-5);
    }
}
