use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::Context as _;

use crate::foundation::core::{Fps, FrameIndex, FrameRange};
use crate::foundation::error::{PromoError, PromoResult};
use crate::render::fingerprint::FrameFingerprint;
use crate::render::session::Snapshot;

/// Configuration provided to a [`FrameSink`] at the start of a range render.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct SinkConfig {
    /// Composition id.
    pub composition: String,
    /// Output width in pixels.
    pub width: u32,
    /// Output height in pixels.
    pub height: u32,
    /// Output frames-per-second.
    pub fps: Fps,
    /// Frames that will be pushed.
    pub range: FrameRange,
}

/// Sink contract for consuming snapshots in timeline order.
///
/// `push_frame` is called in strictly increasing `FrameIndex` order within the requested range.
/// `is_repeat` is set when the snapshot's tree is identical to the previous one pushed.
pub trait FrameSink: Send {
    /// Called once before any frames are pushed.
    fn begin(&mut self, cfg: SinkConfig) -> PromoResult<()>;
    /// Push one frame.
    fn push_frame(&mut self, snapshot: &Snapshot, is_repeat: bool) -> PromoResult<()>;
    /// Called once after the last frame is pushed.
    fn end(&mut self) -> PromoResult<()>;
}

/// A frame captured by [`InMemorySink`].
#[derive(Clone, Debug)]
pub struct SinkFrame {
    /// The sampled frame.
    pub snapshot: Snapshot,
    /// Same fingerprint as the previous frame.
    pub is_repeat: bool,
}

/// In-memory sink for tests and debugging.
#[derive(Debug, Default)]
pub struct InMemorySink {
    cfg: Option<SinkConfig>,
    frames: Vec<SinkFrame>,
    ended: bool,
}

impl InMemorySink {
    /// Create a new in-memory sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the sink configuration captured in `begin`, if any.
    pub fn config(&self) -> Option<&SinkConfig> {
        self.cfg.as_ref()
    }

    /// Borrow the captured frames.
    pub fn frames(&self) -> &[SinkFrame] {
        &self.frames
    }

    /// `true` once `end` has been called.
    pub fn is_ended(&self) -> bool {
        self.ended
    }
}

impl FrameSink for InMemorySink {
    fn begin(&mut self, cfg: SinkConfig) -> PromoResult<()> {
        self.cfg = Some(cfg);
        self.frames.clear();
        self.ended = false;
        Ok(())
    }

    fn push_frame(&mut self, snapshot: &Snapshot, is_repeat: bool) -> PromoResult<()> {
        self.frames.push(SinkFrame {
            snapshot: snapshot.clone(),
            is_repeat,
        });
        Ok(())
    }

    fn end(&mut self) -> PromoResult<()> {
        self.ended = true;
        Ok(())
    }
}

#[derive(serde::Serialize)]
struct RepeatLine<'a> {
    composition: &'a str,
    frame: FrameIndex,
    fingerprint: FrameFingerprint,
    repeat: bool,
}

/// Writes one JSON object per line: a full [`Snapshot`] for new frames and a short
/// `{"composition", "frame", "fingerprint", "repeat": true}` record for repeats.
#[derive(Debug)]
pub struct JsonLinesSink {
    path: PathBuf,
    out: Option<BufWriter<File>>,
    lines: u64,
}

impl JsonLinesSink {
    /// Sink that will create (or truncate) `path` on `begin`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            out: None,
            lines: 0,
        }
    }

    /// Output path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Lines written so far.
    pub fn lines_written(&self) -> u64 {
        self.lines
    }

    fn writer(&mut self) -> PromoResult<&mut BufWriter<File>> {
        self.out.as_mut().ok_or_else(|| {
            PromoError::validation(format!(
                "json-lines sink '{}' used before begin",
                self.path.display()
            ))
        })
    }

    fn write_line(&mut self, value: &impl serde::Serialize) -> PromoResult<()> {
        let path = self.path.clone();
        let w = self.writer()?;
        serde_json::to_writer(&mut *w, value)
            .map_err(|e| PromoError::serde(format!("failed to encode snapshot: {e}")))?;
        w.write_all(b"\n")
            .with_context(|| format!("failed to write '{}'", path.display()))?;
        self.lines += 1;
        Ok(())
    }
}

impl FrameSink for JsonLinesSink {
    fn begin(&mut self, cfg: SinkConfig) -> PromoResult<()> {
        ensure_parent_dir(&self.path)?;
        let file = File::create(&self.path)
            .with_context(|| format!("failed to create '{}'", self.path.display()))?;
        tracing::debug!(path = %self.path.display(), comp = %cfg.composition, "json-lines sink opened");
        self.out = Some(BufWriter::new(file));
        self.lines = 0;
        Ok(())
    }

    fn push_frame(&mut self, snapshot: &Snapshot, is_repeat: bool) -> PromoResult<()> {
        if is_repeat {
            self.write_line(&RepeatLine {
                composition: &snapshot.composition,
                frame: snapshot.frame,
                fingerprint: snapshot.fingerprint,
                repeat: true,
            })
        } else {
            self.write_line(snapshot)
        }
    }

    fn end(&mut self) -> PromoResult<()> {
        if let Some(mut w) = self.out.take() {
            w.flush()
                .with_context(|| format!("failed to flush '{}'", self.path.display()))?;
        }
        Ok(())
    }
}

/// Create the parent directory of `path` if it has one.
pub fn ensure_parent_dir(path: &Path) -> PromoResult<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create output directory '{}'", parent.display()))?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/render/sink.rs"]
mod tests;
