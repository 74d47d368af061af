#![forbid(unsafe_code)]

//! Frames-per-second readout.

use std::time::Duration;

const WINDOW: Duration = Duration::from_secs(1);

/// Counts frames and publishes the count once per one-second window.
///
/// The window restarts from zero when it closes; overshoot is not carried.
#[derive(Debug, Clone, Default)]
pub struct FpsCounter {
    elapsed: Duration,
    frames: u32,
    fps: u32,
}

impl FpsCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one frame of length `dt`. Returns the new reading when a window
    /// closes.
    pub fn tick(&mut self, dt: Duration) -> Option<u32> {
        self.frames += 1;
        self.elapsed += dt;
        if self.elapsed < WINDOW {
            return None;
        }
        self.fps = self.frames;
        self.frames = 0;
        self.elapsed = Duration::ZERO;
        Some(self.fps)
    }

    /// Last published reading.
    pub fn fps(&self) -> u32 {
        self.fps
    }

    pub fn label(&self) -> String {
        format!("FPS: {}", self.fps)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn publishes_once_per_second() {
        let mut fps = FpsCounter::new();
        let frame = Duration::from_millis(20);
        let readings: Vec<u32> = (0..150).filter_map(|_| fps.tick(frame)).collect();
        assert_eq!(readings, vec![50, 50, 50]);
        assert_eq!(fps.label(), "FPS: 50");
    }

    #[test]
    fn starts_at_zero() {
        let mut fps = FpsCounter::new();
        assert_eq!(fps.label(), "FPS: 0");
        assert_eq!(fps.tick(Duration::from_millis(999)), None);
        assert_eq!(fps.tick(Duration::from_millis(1)), Some(2));
    }

    #[test]
    fn stalled_frame_reports_one() {
        let mut fps = FpsCounter::new();
        assert_eq!(fps.tick(Duration::from_secs(3)), Some(1));
    }
}
