//! Frame sources
//!
//! The engine does not own a display loop. It asks the host for one callback
//! per refresh through [`FrameSource`] and receives a monotonically
//! increasing timestamp each time the host calls back.

/// "Run me on the next display refresh"
pub trait FrameSource {
    fn request_frame(&mut self);
}

/// Deterministic frame source for headless runs and tests
///
/// Every granted request advances an internal clock by a fixed step. No
/// timestamp is produced unless a frame was requested, matching a host that
/// only calls back after `requestAnimationFrame`.
#[derive(Clone, Debug)]
pub struct ManualFrames {
    clock: f64,
    step: f64,
    pending: bool,
    requests: u64,
}

impl ManualFrames {
    /// Frames spaced `step` apart, starting at zero
    pub fn new(step: f64) -> Self {
        Self {
            clock: 0.0,
            step,
            pending: false,
            requests: 0,
        }
    }

    /// ~60 frames per second, in seconds
    pub fn sixty_hz() -> Self {
        Self::new(1.0 / 60.0)
    }

    /// Timestamp for the next frame, if one was requested
    pub fn next_frame(&mut self) -> Option<f64> {
        if !self.pending {
            return None;
        }
        self.pending = false;
        self.clock += self.step;
        Some(self.clock)
    }

    /// Whether a frame is waiting to be delivered
    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Total number of requests seen
    pub fn requests(&self) -> u64 {
        self.requests
    }

    /// Current clock value
    pub fn now(&self) -> f64 {
        self.clock
    }
}

impl FrameSource for ManualFrames {
    fn request_frame(&mut self) {
        self.pending = true;
        self.requests += 1;
    }
}
