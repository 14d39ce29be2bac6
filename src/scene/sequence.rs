use std::sync::Arc;

use crate::foundation::core::{FrameIndex, FrameRange};
use crate::foundation::error::{PromoError, PromoResult};
use crate::scene::context::{Scene, SceneCtx};
use crate::scene::node::Node;
use crate::style::theme::Theme;

/// A child scene bound to its window on the parent timeline.
#[derive(Clone)]
pub struct SequenceEntry {
    /// Parent-timeline frames during which the child is active.
    pub window: FrameRange,
    /// Scene rendered with frames rebased to the window start.
    pub child: Arc<dyn Scene>,
}

impl std::fmt::Debug for SequenceEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SequenceEntry")
            .field("window", &self.window)
            .field("child", &self.child.name())
            .finish()
    }
}

/// Child selected for a parent frame by [`Sequence::select`].
#[derive(Clone, Copy)]
pub struct Active<'a> {
    /// Position of the child in the sequence.
    pub index: usize,
    /// `frame - window.start`.
    pub local_frame: FrameIndex,
    /// The child's window.
    pub window: FrameRange,
    /// The child itself.
    pub child: &'a dyn Scene,
}

/// One row of a sequence timeline, for display.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct TimelineEntry {
    /// Position in the sequence.
    pub index: usize,
    /// Child scene name.
    pub name: String,
    /// Window on the parent timeline.
    pub window: FrameRange,
}

/// Back-to-back child scenes on one timeline.
///
/// Windows are validated once: non-empty, ordered, gap-free and starting at frame 0. At most
/// one child is active for any frame, so children never overlap.
#[derive(Clone, Debug)]
pub struct Sequence {
    name: String,
    entries: Vec<SequenceEntry>,
}

impl Sequence {
    /// Start laying out children contiguously from frame 0.
    pub fn builder(name: impl Into<String>) -> SequenceBuilder {
        SequenceBuilder {
            name: name.into(),
            entries: Vec::new(),
            cursor: 0,
        }
    }

    /// Build from explicit windows.
    pub fn new(name: impl Into<String>, entries: Vec<SequenceEntry>) -> PromoResult<Self> {
        let name = name.into();
        if entries.is_empty() {
            return Err(PromoError::validation(format!(
                "sequence '{name}' must have at least one child"
            )));
        }
        let mut expected_start = 0u64;
        for (i, e) in entries.iter().enumerate() {
            if e.window.start.0 >= e.window.end.0 {
                return Err(PromoError::validation(format!(
                    "sequence '{name}' child {i} ('{}') has an empty or inverted window [{}, {})",
                    e.child.name(),
                    e.window.start.0,
                    e.window.end.0
                )));
            }
            if e.window.start.0 < expected_start {
                return Err(PromoError::validation(format!(
                    "sequence '{name}' child {i} starts at {} and overlaps the previous window ending at {expected_start}",
                    e.window.start.0
                )));
            }
            if e.window.start.0 > expected_start {
                return Err(PromoError::validation(format!(
                    "sequence '{name}' has a gap before child {i}: expected start {expected_start}, got {}",
                    e.window.start.0
                )));
            }
            expected_start = e.window.end.0;
        }
        Ok(Self { name, entries })
    }

    /// Children with their windows.
    pub fn entries(&self) -> &[SequenceEntry] {
        &self.entries
    }

    /// Sum of all window lengths.
    pub fn total_duration(&self) -> u64 {
        self.entries.last().map_or(0, |e| e.window.end.0)
    }

    /// Windows in order, labelled with child names.
    pub fn windows(&self) -> Vec<TimelineEntry> {
        self.entries
            .iter()
            .enumerate()
            .map(|(index, e)| TimelineEntry {
                index,
                name: e.child.name().to_owned(),
                window: e.window,
            })
            .collect()
    }

    /// The child whose window contains `frame`, if any.
    pub fn select(&self, frame: FrameIndex) -> Option<Active<'_>> {
        let index = self
            .entries
            .partition_point(|e| e.window.end.0 <= frame.0);
        let e = self.entries.get(index)?;
        if !e.window.contains(frame) {
            return None;
        }
        Some(Active {
            index,
            local_frame: FrameIndex(frame.0 - e.window.start.0),
            window: e.window,
            child: e.child.as_ref(),
        })
    }
}

impl Scene for Sequence {
    fn name(&self) -> &str {
        &self.name
    }

    fn render(&self, ctx: &SceneCtx, theme: &Theme) -> PromoResult<Node> {
        let mut out = Node::fill();
        if let Some(active) = self.select(ctx.frame) {
            let local = ctx.rebase(active.local_frame.0, active.window.len_frames());
            out = out.child(active.child.render(&local, theme)?);
        }
        Ok(out)
    }

    fn timeline(&self) -> Option<Vec<TimelineEntry>> {
        Some(self.windows())
    }
}

/// Incremental builder returned by [`Sequence::builder`].
pub struct SequenceBuilder {
    name: String,
    entries: Vec<SequenceEntry>,
    cursor: u64,
}

impl SequenceBuilder {
    /// Append a child that plays for `duration` frames right after the previous one.
    pub fn then(mut self, duration: u64, child: impl Scene + 'static) -> Self {
        let start = self.cursor;
        self.cursor = self.cursor.saturating_add(duration);
        self.entries.push(SequenceEntry {
            window: FrameRange {
                start: FrameIndex(start),
                end: FrameIndex(self.cursor),
            },
            child: Arc::new(child),
        });
        self
    }

    /// Validate and finish.
    pub fn build(self) -> PromoResult<Sequence> {
        Sequence::new(self.name, self.entries)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/sequence.rs"]
mod tests;
