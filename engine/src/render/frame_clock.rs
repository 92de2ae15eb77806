//! Frame Clock
//!
//! Turns wall-clock frame times into frame-delta units (60 units per second)
//! for scene updates, and keeps a once-per-second FPS reading.

use std::time::{Duration, Instant};

/// Frame-delta units per second of wall-clock time
pub const FRAME_UNITS_PER_SECOND: f32 = 60.0;

/// Largest delta handed to a scene in one tick (a 10 FPS floor)
pub const MAX_FRAME_DELTA: f32 = 6.0;

/// Length of the FPS measurement window
const FPS_WINDOW: Duration = Duration::from_secs(1);

/// Per-frame delta source owned by the application loop
#[derive(Debug, Clone)]
pub struct FrameClock {
    last_frame: Instant,
    window_elapsed: Duration,
    window_frames: u32,
    fps: f32,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::starting_at(Instant::now())
    }

    /// Clock whose first frame is measured from `start`
    pub fn starting_at(start: Instant) -> Self {
        Self {
            last_frame: start,
            window_elapsed: Duration::ZERO,
            window_frames: 0,
            fps: 0.0,
        }
    }

    /// Measure the time since the previous tick and return it as a frame delta
    pub fn tick(&mut self) -> f32 {
        self.tick_at(Instant::now())
    }

    /// Like [`tick`](Self::tick) with an explicit timestamp
    pub fn tick_at(&mut self, now: Instant) -> f32 {
        let elapsed = now.saturating_duration_since(self.last_frame);
        self.last_frame = now;
        self.advance(elapsed)
    }

    /// Account for one frame that took `elapsed`; returns its frame delta
    pub fn advance(&mut self, elapsed: Duration) -> f32 {
        self.window_frames += 1;
        self.window_elapsed += elapsed;

        if self.window_elapsed >= FPS_WINDOW {
            self.fps = self.window_frames as f32 / self.window_elapsed.as_secs_f32();
            log::debug!("{:.1} fps", self.fps);
            self.window_frames = 0;
            self.window_elapsed = Duration::ZERO;
        }

        Self::to_frame_delta(elapsed)
    }

    /// Convert a duration to frame units, clamped to [`MAX_FRAME_DELTA`]
    pub fn to_frame_delta(elapsed: Duration) -> f32 {
        (elapsed.as_secs_f32() * FRAME_UNITS_PER_SECOND).min(MAX_FRAME_DELTA)
    }

    /// Frames per second over the last completed one-second window
    pub fn fps(&self) -> f32 {
        self.fps
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nominal_frame_is_one_unit() {
        let delta = FrameClock::to_frame_delta(Duration::from_secs_f64(1.0 / 60.0));
        assert!((delta - 1.0).abs() < 1e-4);
    }

    #[test]
    fn test_long_frame_is_clamped() {
        assert_eq!(FrameClock::to_frame_delta(Duration::from_secs(3)), MAX_FRAME_DELTA);
    }

    #[test]
    fn test_tick_at_uses_timestamps() {
        let start = Instant::now();
        let mut clock = FrameClock::starting_at(start);

        let delta = clock.tick_at(start + Duration::from_millis(50));
        assert!((delta - 3.0).abs() < 1e-4);

        // Going backwards never produces a negative delta
        assert_eq!(clock.tick_at(start), 0.0);
    }

    #[test]
    fn test_fps_reported_after_one_second() {
        let mut clock = FrameClock::new();
        let frame = Duration::from_micros(16_667);

        for _ in 0..59 {
            clock.advance(frame);
        }
        // Window still open
        assert_eq!(clock.fps(), 0.0);

        clock.advance(frame);
        assert!((clock.fps() - 60.0).abs() < 0.1, "fps = {}", clock.fps());

        // The reading holds until the next window closes
        for _ in 0..29 {
            clock.advance(frame * 2);
        }
        assert!((clock.fps() - 60.0).abs() < 0.1);
        clock.advance(frame * 2);
        assert!((clock.fps() - 30.0).abs() < 0.1, "fps = {}", clock.fps());
    }
}
