use crate::animation::interpolate::{InterpolateOpts, interpolate};
use crate::animation::spring::{SpringConfig, spring};
use crate::foundation::core::{Canvas, Fps, FrameIndex};
use crate::foundation::error::PromoResult;
use crate::scene::node::Node;
use crate::scene::sequence::TimelineEntry;
use crate::style::theme::Theme;

/// Per-frame inputs handed to a [`Scene`].
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct SceneCtx {
    /// Frame relative to the scene's own start.
    pub frame: FrameIndex,
    /// Timeline frame rate.
    pub fps: Fps,
    /// Output size.
    pub canvas: Canvas,
    /// Length of the scene's window in frames.
    pub duration: u64,
}

impl SceneCtx {
    /// Context for `frame` of a scene that lasts `duration` frames.
    pub fn new(frame: FrameIndex, fps: Fps, canvas: Canvas, duration: u64) -> Self {
        Self {
            frame,
            fps,
            canvas,
            duration,
        }
    }

    /// Local frame as a signed value.
    pub fn frame_i64(&self) -> i64 {
        self.frame.as_i64()
    }

    /// Local frame as a float, for curve sampling.
    pub fn frame_f64(&self) -> f64 {
        self.frame.0 as f64
    }

    /// Same timeline, different local frame and window length.
    pub fn rebase(&self, local_frame: u64, duration: u64) -> Self {
        Self {
            frame: FrameIndex(local_frame),
            duration,
            ..*self
        }
    }

    /// `0 -> 1` spring that starts `delay` frames into the scene.
    pub fn spring(&self, delay: f64, config: SpringConfig) -> f64 {
        spring(self.frame_f64() - delay, self.fps, config)
    }

    /// Map the current frame through a breakpoint curve.
    pub fn interpolate(
        &self,
        input: &[f64],
        output: &[f64],
        opts: InterpolateOpts,
    ) -> PromoResult<f64> {
        interpolate(self.frame_f64(), input, output, opts)
    }
}

/// A pure frame-to-tree function.
///
/// Implementations hold only static configuration; everything that varies is derived from
/// `ctx` on each call, so any frame can be rendered in any order on any thread.
pub trait Scene: Send + Sync {
    /// Stable human-readable name used in logs and timelines.
    fn name(&self) -> &str;

    /// Build the visual tree for `ctx.frame`.
    fn render(&self, ctx: &SceneCtx, theme: &Theme) -> PromoResult<Node>;

    /// Child windows, for scenes that sequence other scenes.
    fn timeline(&self) -> Option<Vec<TimelineEntry>> {
        None
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/context.rs"]
mod tests;
