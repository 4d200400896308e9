//! Rolling frame timing for fps logging.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Tracks recent frame durations.
pub struct FrameTimer {
    frame_times: VecDeque<Duration>,
    last_frame: Instant,
    max_samples: usize,
}

impl FrameTimer {
    /// Timer with a rolling window of `max_samples` frames (at least one).
    pub fn new(max_samples: usize) -> Self {
        Self {
            frame_times: VecDeque::with_capacity(max_samples),
            last_frame: Instant::now(),
            max_samples: max_samples.max(1),
        }
    }

    /// Mark the start of a frame and return the time since the previous one.
    pub fn begin_frame(&mut self) -> Duration {
        let now = Instant::now();
        let dt = now - self.last_frame;
        self.last_frame = now;
        self.record(dt);
        dt
    }

    /// Add a measured frame duration to the window.
    pub fn record(&mut self, dt: Duration) {
        self.frame_times.push_back(dt);
        while self.frame_times.len() > self.max_samples {
            self.frame_times.pop_front();
        }
    }

    fn total_secs(&self) -> f64 {
        self.frame_times.iter().map(Duration::as_secs_f64).sum()
    }

    /// Average frames per second over the window.
    pub fn fps(&self) -> f64 {
        let total = self.total_secs();
        if self.frame_times.is_empty() || total <= 0.0 {
            return 0.0;
        }
        self.frame_times.len() as f64 / total
    }

    /// Average frame time in milliseconds.
    pub fn frame_time_ms(&self) -> f64 {
        if self.frame_times.is_empty() {
            return 0.0;
        }
        self.total_secs() / self.frame_times.len() as f64 * 1000.0
    }

    pub fn sample_count(&self) -> usize {
        self.frame_times.len()
    }
}

impl Default for FrameTimer {
    fn default() -> Self {
        Self::new(120)
    }
}
