//! Frame-loop driver
//!
//! Owns the run flag and the last frame timestamp, and turns raw host
//! timestamps into clamped delta-times. The driver itself never schedules
//! anything; the platform layer asks it once per frame whether to keep
//! going (`frame` returning `None` is the cancellation point) and owns the
//! pending frame handle so a stop can cancel an in-flight callback.

use crate::consts::MAX_FRAME_DT;

/// Run flag plus timestamp bookkeeping for the per-frame loop
#[derive(Debug, Clone)]
pub struct AnimationDriver {
    running: bool,
    last_time: f64,
}

impl AnimationDriver {
    pub fn new() -> Self {
        Self {
            running: false,
            last_time: 0.0,
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Start the loop at `now_ms`. Returns false (and changes nothing) if
    /// already running.
    pub fn start(&mut self, now_ms: f64) -> bool {
        if self.running {
            return false;
        }
        self.running = true;
        self.last_time = now_ms;
        true
    }

    /// Stop the loop. Returns false if it was not running. The caller must
    /// also cancel any pending scheduled frame so a stray late callback
    /// cannot resume the loop.
    pub fn stop(&mut self) -> bool {
        if !self.running {
            return false;
        }
        self.running = false;
        true
    }

    /// Account for a frame at `timestamp_ms`.
    ///
    /// Returns the delta-time in seconds, clamped to [`MAX_FRAME_DT`] so a
    /// paused tab cannot produce a huge physics step. Returns `None` once
    /// stopped; the caller must then suspend without rescheduling.
    pub fn frame(&mut self, timestamp_ms: f64) -> Option<f32> {
        if !self.running {
            return None;
        }
        let delta_ms = timestamp_ms - self.last_time;
        self.last_time = timestamp_ms;
        Some(((delta_ms / 1000.0) as f32).clamp(0.0, MAX_FRAME_DT))
    }
}

impl Default for AnimationDriver {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_records_timestamp() {
        let mut driver = AnimationDriver::new();
        assert!(driver.start(1000.0));
        assert!(driver.is_running());

        // 16 ms later
        let dt = driver.frame(1016.0).unwrap();
        assert!((dt - 0.016).abs() < 1e-6);
    }

    #[test]
    fn test_start_while_running_is_a_no_op() {
        let mut driver = AnimationDriver::new();
        assert!(driver.start(1000.0));
        assert!(!driver.start(5000.0));

        // last_time untouched by the second start
        let dt = driver.frame(1010.0).unwrap();
        assert!((dt - 0.010).abs() < 1e-6);
    }

    #[test]
    fn test_delta_time_is_clamped() {
        let mut driver = AnimationDriver::new();
        driver.start(0.0);

        // 3 seconds of tab switch collapse to the clamp
        let dt = driver.frame(3000.0).unwrap();
        assert_eq!(dt, MAX_FRAME_DT);

        // Next frame resumes from the clamped timestamp
        let dt = driver.frame(3016.0).unwrap();
        assert!((dt - 0.016).abs() < 1e-6);
    }

    #[test]
    fn test_frame_after_stop_suspends() {
        let mut driver = AnimationDriver::new();
        driver.start(0.0);
        assert!(driver.stop());
        assert!(!driver.is_running());
        assert_eq!(driver.frame(16.0), None);
    }

    #[test]
    fn test_stop_while_stopped_is_a_no_op() {
        let mut driver = AnimationDriver::new();
        assert!(!driver.stop());
        driver.start(0.0);
        assert!(driver.stop());
        assert!(!driver.stop());
    }

    #[test]
    fn test_restart_after_stop() {
        let mut driver = AnimationDriver::new();
        driver.start(0.0);
        driver.frame(16.0);
        driver.stop();

        assert!(driver.start(5000.0));
        let dt = driver.frame(5016.0).unwrap();
        assert!((dt - 0.016).abs() < 1e-6);
    }
}
