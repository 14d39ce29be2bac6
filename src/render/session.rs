use std::sync::Arc;

use rayon::prelude::*;

use crate::foundation::core::{FrameIndex, FrameRange};
use crate::foundation::error::{PromoError, PromoResult};
use crate::registry::catalog::{CompositionSpec, Registry};
use crate::render::fingerprint::{FrameFingerprint, fingerprint_node};
use crate::render::sink::{FrameSink, SinkConfig};
use crate::scene::context::{Scene, SceneCtx};
use crate::scene::node::Node;
use crate::style::theme::Theme;

/// Options controlling `RenderSession` range rendering behavior.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderSessionOpts {
    /// Enable frame-level parallelism (rayon), using a dedicated thread pool.
    pub parallel: bool,
    /// Frames sampled per chunk before they are handed to the sink.
    pub chunk_size: usize,
    /// Override the number of rayon worker threads. `None` uses rayon defaults.
    pub threads: Option<usize>,
    /// Flag frames whose tree matches the previous frame as repeats.
    pub static_frame_elision: bool,
}

impl Default for RenderSessionOpts {
    fn default() -> Self {
        Self {
            parallel: false,
            chunk_size: 64,
            threads: None,
            static_frame_elision: false,
        }
    }
}

/// Range render statistics.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize)]
pub struct RenderStats {
    /// Total frames in the requested range.
    pub frames_total: u64,
    /// Frames pushed as full snapshots.
    pub frames_rendered: u64,
    /// Frames pushed as repeats of their predecessor.
    pub frames_elided: u64,
}

/// One sampled frame of a composition.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Snapshot {
    /// Composition id.
    pub composition: String,
    /// Frame on the composition timeline.
    pub frame: FrameIndex,
    /// Canvas width in pixels.
    pub width: u32,
    /// Canvas height in pixels.
    pub height: u32,
    /// Hash of `root`.
    pub fingerprint: FrameFingerprint,
    /// The frame's visual tree.
    pub root: Node,
}

/// Samples frames of a single registered composition.
///
/// The session holds only the composition's static description and a theme, so frames can
/// be requested in any order and from any thread.
pub struct RenderSession {
    spec: CompositionSpec,
    scene: Arc<dyn Scene>,
    theme: Theme,
    opts: RenderSessionOpts,
}

impl std::fmt::Debug for RenderSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RenderSession")
            .field("spec", &self.spec)
            .field("opts", &self.opts)
            .finish_non_exhaustive()
    }
}

impl RenderSession {
    /// Open a session for composition `id`.
    pub fn new(
        registry: &Registry,
        id: &str,
        theme: Theme,
        opts: RenderSessionOpts,
    ) -> PromoResult<Self> {
        let entry = registry.get(id)?;
        theme.validate()?;
        if opts.threads == Some(0) {
            return Err(PromoError::validation(
                "render threading 'threads' must be >= 1 when set",
            ));
        }
        Ok(Self {
            spec: entry.spec.clone(),
            scene: Arc::clone(&entry.scene),
            theme,
            opts,
        })
    }

    /// Metadata of the composition being rendered.
    pub fn spec(&self) -> &CompositionSpec {
        &self.spec
    }

    /// Options the session was created with.
    pub fn opts(&self) -> &RenderSessionOpts {
        &self.opts
    }

    /// Sample a single frame.
    #[tracing::instrument(level = "trace", skip(self), fields(comp = %self.spec.id))]
    pub fn render_frame(&self, frame: FrameIndex) -> PromoResult<Snapshot> {
        if frame.0 >= self.spec.duration_frames {
            return Err(PromoError::validation(format!(
                "frame {} is outside composition '{}' ({} frames)",
                frame.0, self.spec.id, self.spec.duration_frames
            )));
        }

        let ctx = SceneCtx::new(
            frame,
            self.spec.fps,
            self.spec.canvas,
            self.spec.duration_frames,
        );
        let root = self.scene.render(&ctx, &self.theme)?;
        let fingerprint = fingerprint_node(&root)?;
        Ok(Snapshot {
            composition: self.spec.id.clone(),
            frame,
            width: self.spec.canvas.width,
            height: self.spec.canvas.height,
            fingerprint,
            root,
        })
    }

    /// Sample a frame range and stream snapshots into a sink.
    ///
    /// The sink receives frames in strictly increasing frame index order. When `parallel` is
    /// enabled, each chunk is sampled on the pool and handed over in timeline order.
    #[tracing::instrument(skip(self, sink), fields(comp = %self.spec.id))]
    pub fn render_range(
        &self,
        range: FrameRange,
        sink: &mut dyn FrameSink,
    ) -> PromoResult<RenderStats> {
        if range.is_empty() {
            return Err(PromoError::validation(
                "render_range range must be non-empty",
            ));
        }
        if range.end.0 > self.spec.duration_frames {
            return Err(PromoError::validation(format!(
                "render_range range must be within composition '{}' ({} frames)",
                self.spec.id, self.spec.duration_frames
            )));
        }

        let pool = if self.opts.parallel {
            Some(build_thread_pool(self.opts.threads)?)
        } else {
            None
        };
        let chunk_size = normalized_chunk_size(self.opts.chunk_size).min(range.len_frames());

        sink.begin(SinkConfig {
            composition: self.spec.id.clone(),
            width: self.spec.canvas.width,
            height: self.spec.canvas.height,
            fps: self.spec.fps,
            range,
        })?;

        let mut stats = RenderStats::default();
        let mut previous: Option<FrameFingerprint> = None;
        let mut chunk_start = range.start.0;
        while chunk_start < range.end.0 {
            let chunk_end = (chunk_start + chunk_size).min(range.end.0);
            let frames: Vec<FrameIndex> = (chunk_start..chunk_end).map(FrameIndex).collect();

            let snapshots = match &pool {
                Some(pool) => pool.install(|| {
                    frames
                        .par_iter()
                        .map(|&f| self.render_frame(f))
                        .collect::<PromoResult<Vec<_>>>()
                })?,
                None => frames
                    .iter()
                    .map(|&f| self.render_frame(f))
                    .collect::<PromoResult<Vec<_>>>()?,
            };

            let mut elided = 0u64;
            for snapshot in &snapshots {
                let is_repeat =
                    self.opts.static_frame_elision && previous == Some(snapshot.fingerprint);
                sink.push_frame(snapshot, is_repeat)?;
                previous = Some(snapshot.fingerprint);
                if is_repeat {
                    elided += 1;
                }
            }

            let total = snapshots.len() as u64;
            stats.frames_total += total;
            stats.frames_rendered += total - elided;
            stats.frames_elided += elided;
            tracing::debug!(
                start = chunk_start,
                end = chunk_end,
                elided,
                "chunk sampled"
            );
            chunk_start = chunk_end;
        }

        sink.end()?;
        tracing::info!(
            frames = stats.frames_total,
            rendered = stats.frames_rendered,
            elided = stats.frames_elided,
            parallel = self.opts.parallel,
            "range rendered"
        );
        Ok(stats)
    }
}

fn build_thread_pool(threads: Option<usize>) -> PromoResult<rayon::ThreadPool> {
    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder
        .build()
        .map_err(|e| PromoError::evaluation(format!("failed to build rayon thread pool: {e}")))
}

fn normalized_chunk_size(chunk_size: usize) -> u64 {
    chunk_size.max(1) as u64
}

#[cfg(test)]
#[path = "../../tests/unit/render/session.rs"]
mod tests;
