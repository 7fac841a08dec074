//! Fixed-timestep clock
//!
//! Converts irregular host frame callbacks into whole fixed-duration
//! simulation ticks. The accumulator carries the sub-tick remainder between
//! callbacks so the tick count tracks wall-clock time without drift, while the
//! per-callback clamp keeps a long stall from producing hundreds of catch-up
//! ticks.

use crate::config::GameConfig;

/// Outcome of one host frame callback
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Frame {
    /// Callback arrived inside the frame-rate ceiling; no ticks, no draw.
    /// Elapsed time is retained toward the next accepted frame.
    Skipped,
    /// Callback accepted; run this many fixed ticks, then draw.
    Accepted { ticks: u32 },
}

/// Accumulator-based fixed stepper
#[derive(Debug, Clone)]
pub struct FixedStepper {
    tick_ms: f64,
    max_frame_ms: f64,
    min_frame_ms: Option<f64>,
    /// Timestamp of the last accepted callback. `None` until seeded, so the
    /// first callback after a (re)start yields a ~0 delta instead of the
    /// full clock epoch.
    last_ms: Option<f64>,
    accumulator_ms: f64,
}

impl FixedStepper {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            tick_ms: config.tick_ms,
            max_frame_ms: config.max_frame_delta_ms,
            min_frame_ms: config.min_frame_interval_ms,
            last_ms: None,
            accumulator_ms: 0.0,
        }
    }

    /// Forget the reference timestamp; the next callback re-seeds it.
    /// Called on run start/restart so paused wall-clock time never converts
    /// into catch-up ticks.
    pub fn reset(&mut self) {
        self.last_ms = None;
        self.accumulator_ms = 0.0;
    }

    /// Nominal tick duration in milliseconds
    pub fn tick_ms(&self) -> f64 {
        self.tick_ms
    }

    /// Sub-tick remainder currently carried (for tests/diagnostics)
    pub fn carryover_ms(&self) -> f64 {
        self.accumulator_ms
    }

    /// Feed one host frame callback timestamp (ms, monotonically increasing).
    pub fn advance(&mut self, now_ms: f64) -> Frame {
        let Some(last) = self.last_ms else {
            self.last_ms = Some(now_ms);
            return Frame::Accepted { ticks: 0 };
        };

        let elapsed = (now_ms - last).max(0.0);
        if self.min_frame_ms.is_some_and(|min| elapsed < min) {
            // Throughput control only: last_ms stays put, so the skipped
            // span still counts toward the next accepted frame.
            return Frame::Skipped;
        }
        self.last_ms = Some(now_ms);

        self.accumulator_ms += elapsed.min(self.max_frame_ms);
        let ticks = (self.accumulator_ms / self.tick_ms) as u32;
        self.accumulator_ms -= f64::from(ticks) * self.tick_ms;
        Frame::Accepted { ticks }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stepper(max_frame_ms: f64, min_frame_ms: Option<f64>) -> FixedStepper {
        FixedStepper::new(&GameConfig {
            tick_ms: 1000.0 / 60.0,
            max_frame_delta_ms: max_frame_ms,
            min_frame_interval_ms: min_frame_ms,
            ..Default::default()
        })
    }

    #[test]
    fn test_first_callback_seeds_without_ticks() {
        // A large base timestamp stands in for the host's clock epoch: the
        // seeding callback must not convert it into ticks
        let mut s = stepper(1000.0, None);
        assert_eq!(s.advance(987654.0), Frame::Accepted { ticks: 0 });
        // Next frame just past one nominal tick produces exactly one tick
        // (safely past the boundary; an exact tick_ms offset can round to
        // just under it in f64)
        assert_eq!(s.advance(987654.0 + 17.0), Frame::Accepted { ticks: 1 });
    }

    #[test]
    fn test_forty_ms_gap_produces_two_ticks_with_carryover() {
        let mut s = stepper(1000.0, None);
        s.advance(0.0);
        assert_eq!(s.advance(40.0), Frame::Accepted { ticks: 2 });
        // 40 - 2 * 16.67 ms carried over
        assert!(s.carryover_ms() <= 1000.0 / 60.0);
        assert!((s.carryover_ms() - (40.0 - 2.0 * 1000.0 / 60.0)).abs() < 1e-9);
    }

    #[test]
    fn test_stall_clamped_to_max_frame_delta() {
        // 5000 ms stall with a 2-tick ceiling yields 2 ticks, not ~300
        let mut s = stepper(2.0 * 1000.0 / 60.0, None);
        s.advance(0.0);
        assert_eq!(s.advance(5000.0), Frame::Accepted { ticks: 2 });
    }

    #[test]
    fn test_no_drift_over_many_callbacks() {
        // Irregular 60 Hz-ish callbacks: total ticks track total elapsed time
        let mut s = stepper(1000.0, None);
        s.advance(0.0);
        let mut now = 0.0;
        let mut total_ticks = 0u64;
        for i in 0..1000 {
            now += if i % 3 == 0 { 14.0 } else { 18.0 };
            if let Frame::Accepted { ticks } = s.advance(now) {
                total_ticks += u64::from(ticks);
            }
        }
        let expected = (now / (1000.0 / 60.0)) as u64;
        assert!(total_ticks.abs_diff(expected) <= 1);
    }

    #[test]
    fn test_frame_rate_ceiling_skips_but_keeps_time() {
        // 30 Hz ceiling fed at 120 Hz: skipped frames accumulate toward the
        // next accepted one, so no simulation time is lost
        let mut s = stepper(1000.0, Some(30.0));
        s.advance(0.0);
        assert_eq!(s.advance(8.0), Frame::Skipped);
        assert_eq!(s.advance(16.0), Frame::Skipped);
        assert_eq!(s.advance(24.0), Frame::Skipped);
        // 32 ms since last accepted frame -> 1 tick + carryover
        assert_eq!(s.advance(32.0), Frame::Accepted { ticks: 1 });
        assert!((s.carryover_ms() - (32.0 - 1000.0 / 60.0)).abs() < 1e-9);
    }

    #[test]
    fn test_reset_forgets_reference_time() {
        let mut s = stepper(1000.0, None);
        s.advance(0.0);
        s.advance(16.0);
        s.reset();
        // Seeding callback after reset never converts the gap into ticks
        assert_eq!(s.advance(90_000.0), Frame::Accepted { ticks: 0 });
    }

    #[test]
    fn test_non_monotonic_timestamp_is_harmless() {
        let mut s = stepper(1000.0, None);
        s.advance(100.0);
        assert_eq!(s.advance(50.0), Frame::Accepted { ticks: 0 });
    }
}
