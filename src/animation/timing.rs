//! Frame-threshold helpers shared by scenes.
//!
//! Everything here is a stateless function of the frame it is given. A phase that "completes"
//! is recomputed from the frame on every call; nothing remembers that it happened.

/// Per-item start offsets for list content that animates in sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Stagger {
    /// Start frame of item 0.
    pub base: i64,
    /// Frames between consecutive item starts.
    pub interval: i64,
}

impl Stagger {
    /// Items start at `base + i * interval`.
    pub const fn new(base: i64, interval: i64) -> Self {
        Self { base, interval }
    }

    /// Start frame of item `index`.
    pub fn start(self, index: usize) -> i64 {
        let index = i64::try_from(index).unwrap_or(i64::MAX);
        self.base.saturating_add(index.saturating_mul(self.interval))
    }

    /// Frame relative to item `index`'s start; negative before it starts.
    pub fn local_frame(self, frame: i64, index: usize) -> i64 {
        frame.saturating_sub(self.start(index))
    }

    /// Whether item `index` has started at `frame`.
    pub fn has_started(self, frame: i64, index: usize) -> bool {
        frame >= self.start(index)
    }

    /// Window of `duration` frames beginning at item `index`'s start.
    pub fn window(self, index: usize, duration: i64) -> Window {
        Window::new(self.start(index), duration)
    }
}

/// Where a frame falls relative to a [`Window`].
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum Phase {
    /// Before the window.
    Pending,
    /// Inside the window, with linear progress in `[0, 1)`.
    Active {
        /// Fraction of the window elapsed.
        progress: f64,
    },
    /// At or past the window end.
    Complete,
}

/// Half-open activity interval `[start, start + duration)` in scene-local frames.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Window {
    /// First active frame.
    pub start: i64,
    /// Number of active frames.
    pub duration: i64,
}

impl Window {
    /// A window of `duration` frames from `start`.
    pub const fn new(start: i64, duration: i64) -> Self {
        Self { start, duration }
    }

    /// Exclusive end frame.
    pub fn end(self) -> i64 {
        self.start.saturating_add(self.duration)
    }

    /// `start <= frame < end`.
    pub fn is_active(self, frame: i64) -> bool {
        self.start <= frame && frame < self.end()
    }

    /// `frame >= end`.
    pub fn is_complete(self, frame: i64) -> bool {
        frame >= self.end()
    }

    /// 0 before, linear while active, 1 once complete.
    pub fn progress(self, frame: i64) -> f64 {
        match self.phase(frame) {
            Phase::Pending => 0.0,
            Phase::Active { progress } => progress,
            Phase::Complete => 1.0,
        }
    }

    /// Classify `frame` against this window.
    pub fn phase(self, frame: i64) -> Phase {
        if self.is_complete(frame) {
            Phase::Complete
        } else if self.is_active(frame) {
            let progress = (frame - self.start) as f64 / self.duration as f64;
            Phase::Active { progress }
        } else {
            Phase::Pending
        }
    }
}

/// Breathing scale factor `1 + sin(frame * rate) * amplitude`.
pub fn pulse(frame: i64, rate: f64, amplitude: f64) -> f64 {
    1.0 + (frame as f64 * rate).sin() * amplitude
}

/// Square-wave visibility toggle: on while `sin(frame * rate) > 0`.
pub fn blink(frame: i64, rate: f64) -> bool {
    (frame as f64 * rate).sin() > 0.0
}

#[cfg(test)]
#[path = "../../tests/unit/animation/timing.rs"]
mod tests;
