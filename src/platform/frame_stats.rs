//! Rolling frames-per-second counter

use std::time::Instant;

/// Number of frames the FPS average covers
pub const FPS_WINDOW: usize = 60;

/// Ring buffer of recent frame timestamps
#[derive(Debug)]
pub struct FrameStats {
    frame_times: [Option<Instant>; FPS_WINDOW],
    frame_index: usize,
    fps: u32,
}

impl Default for FrameStats {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameStats {
    pub fn new() -> Self {
        Self {
            frame_times: [None; FPS_WINDOW],
            frame_index: 0,
            fps: 0,
        }
    }

    /// Record a frame. Returns true once per full window, when `fps` was refreshed.
    pub fn record(&mut self, now: Instant) -> bool {
        // Oldest entry is the slot about to be overwritten
        let oldest = self.frame_times[self.frame_index];
        self.frame_times[self.frame_index] = Some(now);
        self.frame_index = (self.frame_index + 1) % FPS_WINDOW;

        if let Some(oldest) = oldest {
            let elapsed = now.saturating_duration_since(oldest).as_secs_f64();
            if elapsed > 0.0 {
                self.fps = (FPS_WINDOW as f64 / elapsed).round() as u32;
            }
        }

        self.frame_index == 0 && oldest.is_some()
    }

    /// Average over the last `FPS_WINDOW` frames, 0 until the window is full
    pub fn fps(&self) -> u32 {
        self.fps
    }
}
