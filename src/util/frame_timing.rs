//! Rolling frame-rate measurement over a fixed time window.

use web_time::{Duration, Instant};

/// Length of the window frames are counted over.
const WINDOW: Duration = Duration::from_secs(1);

/// Frame counter publishing frames-per-second once per second.
#[derive(Debug, Clone)]
pub struct FrameTiming {
    /// Start of the current counting window
    window_start: Instant,
    /// Frames ended in the current window
    frames: u32,
    /// Frames counted in the last completed window
    fps: u32,
    /// Average frame time of the last completed window
    frame_ms: f32,
}

impl FrameTiming {
    /// Create a timer whose first window starts now.
    #[must_use]
    pub fn new() -> Self {
        Self::starting_at(Instant::now())
    }

    /// Create a timer whose first window starts at `start`.
    #[must_use]
    pub fn starting_at(start: Instant) -> Self {
        Self {
            window_start: start,
            frames: 0,
            fps: 0,
            frame_ms: 0.0,
        }
    }

    /// Call after rendering each frame.
    ///
    /// Returns `true` when a window closed and new figures were published.
    pub fn end_frame(&mut self) -> bool {
        self.end_frame_at(Instant::now())
    }

    /// [`end_frame`](Self::end_frame) with an explicit timestamp.
    pub fn end_frame_at(&mut self, now: Instant) -> bool {
        self.frames += 1;
        if now.duration_since(self.window_start) <= WINDOW {
            return false;
        }

        self.fps = self.frames;
        // at least one frame ended in the window, so fps > 0
        self.frame_ms = 1000.0 / self.fps as f32;
        self.frames = 0;
        self.window_start = now;
        log::trace!("{} fps, {:.2} ms", self.fps, self.frame_ms);
        true
    }

    /// Frames counted in the last completed window.
    #[must_use]
    pub fn fps(&self) -> u32 {
        self.fps
    }

    /// Average frame time in milliseconds over the last completed window.
    #[must_use]
    pub fn frame_ms(&self) -> f32 {
        self.frame_ms
    }

    /// Window title with the current figures appended to `base`.
    #[must_use]
    pub fn window_title(&self, base: &str) -> String {
        format!("{base} - fps: {} | ms: {:.2}", self.fps, self.frame_ms)
    }
}

impl Default for FrameTiming {
    fn default() -> Self {
        Self::new()
    }
}
