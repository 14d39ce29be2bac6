//! The 30-second promo: five back-to-back six-second scenes.

mod closing;
mod cta;
mod opening;
mod problem;
mod solution;

pub use closing::Closing;
pub use cta::CallToAction;
pub use opening::Opening;
pub use problem::Problem;
pub use solution::Solution;

use crate::foundation::error::PromoResult;
use crate::scene::context::{Scene, SceneCtx};
use crate::scene::node::Node;
use crate::scene::sequence::{Sequence, TimelineEntry};
use crate::style::props::Style;
use crate::style::theme::Theme;

/// Frames per promo scene.
pub const SCENE_FRAMES: u64 = 180;

/// Opening, Problem, Solution, CTA and Closing in sequence.
#[derive(Clone, Debug)]
pub struct PromoVideo {
    sequence: Sequence,
}

impl PromoVideo {
    /// Registry id.
    pub const ID: &'static str = "PromoVideo";
    /// Length in frames at 30 fps.
    pub const DURATION: u64 = 900;

    /// Lay out the five scenes.
    pub fn new() -> PromoResult<Self> {
        let sequence = Sequence::builder(Self::ID)
            .then(SCENE_FRAMES, Opening)
            .then(SCENE_FRAMES, Problem)
            .then(SCENE_FRAMES, Solution)
            .then(SCENE_FRAMES, CallToAction)
            .then(SCENE_FRAMES, Closing)
            .build()?;
        Ok(Self { sequence })
    }

    /// Underlying scene sequence.
    pub fn sequence(&self) -> &Sequence {
        &self.sequence
    }
}

impl Scene for PromoVideo {
    fn name(&self) -> &str {
        Self::ID
    }

    fn render(&self, ctx: &SceneCtx, theme: &Theme) -> PromoResult<Node> {
        Ok(Node::fill()
            .with_style(Style::new().background_color(theme.palette.background))
            .child(self.sequence.render(ctx, theme)?))
    }

    fn timeline(&self) -> Option<Vec<TimelineEntry>> {
        self.sequence.timeline()
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/compositions/promo.rs"]
mod tests;
