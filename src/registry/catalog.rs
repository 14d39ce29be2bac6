use std::sync::Arc;

use crate::compositions::agentic::AgenticDemo;
use crate::compositions::features::FeaturesDemo;
use crate::compositions::hero::HeroDemo;
use crate::compositions::promo::PromoVideo;
use crate::foundation::core::{Canvas, Fps, FrameRange};
use crate::foundation::error::{PromoError, PromoResult};
use crate::scene::context::Scene;

/// Timeline metadata a host needs to render a composition.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CompositionSpec {
    /// Unique id, e.g. `"PromoVideo"`.
    pub id: String,
    /// Number of frames.
    pub duration_frames: u64,
    /// Frame rate.
    pub fps: Fps,
    /// Output size.
    pub canvas: Canvas,
}

impl CompositionSpec {
    /// Full-HD spec at 30 fps.
    pub fn full_hd_30(id: impl Into<String>, duration_frames: u64) -> PromoResult<Self> {
        let spec = Self {
            id: id.into(),
            duration_frames,
            fps: Fps::integer(30)?,
            canvas: Canvas::FULL_HD,
        };
        spec.validate()?;
        Ok(spec)
    }

    /// Reject empty ids, empty timelines and zero-sized canvases.
    pub fn validate(&self) -> PromoResult<()> {
        if self.id.trim().is_empty() {
            return Err(PromoError::validation("composition id must be non-empty"));
        }
        if self.duration_frames == 0 {
            return Err(PromoError::validation(format!(
                "composition '{}' duration must be > 0 frames",
                self.id
            )));
        }
        if self.fps.num == 0 || self.fps.den == 0 {
            return Err(PromoError::validation(format!(
                "composition '{}' fps must be > 0",
                self.id
            )));
        }
        if self.canvas.width == 0 || self.canvas.height == 0 {
            return Err(PromoError::validation(format!(
                "composition '{}' canvas must be non-zero",
                self.id
            )));
        }
        Ok(())
    }

    /// `[0, duration_frames)`.
    pub fn range(&self) -> FrameRange {
        FrameRange::from_duration(self.duration_frames)
    }

    /// Duration in seconds.
    pub fn duration_secs(&self) -> f64 {
        self.fps.frames_to_secs(self.duration_frames)
    }
}

/// A registered composition: its metadata and the scene that draws it.
#[derive(Clone)]
pub struct Registered {
    /// Timeline metadata.
    pub spec: CompositionSpec,
    /// Root scene.
    pub scene: Arc<dyn Scene>,
}

impl std::fmt::Debug for Registered {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Registered")
            .field("spec", &self.spec)
            .field("scene", &self.scene.name())
            .finish()
    }
}

/// Ordered set of compositions a host can render, keyed by id.
#[derive(Clone, Debug, Default)]
pub struct Registry {
    entries: Vec<Registered>,
}

impl Registry {
    /// Empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// The four EtherealSearch compositions.
    pub fn builtin() -> PromoResult<Self> {
        let mut reg = Self::new();
        reg.register(
            CompositionSpec::full_hd_30(PromoVideo::ID, PromoVideo::DURATION)?,
            PromoVideo::new()?,
        )?;
        reg.register(
            CompositionSpec::full_hd_30(HeroDemo::ID, HeroDemo::DURATION)?,
            HeroDemo,
        )?;
        reg.register(
            CompositionSpec::full_hd_30(AgenticDemo::ID, AgenticDemo::DURATION)?,
            AgenticDemo,
        )?;
        reg.register(
            CompositionSpec::full_hd_30(FeaturesDemo::ID, FeaturesDemo::DURATION)?,
            FeaturesDemo,
        )?;
        Ok(reg)
    }

    /// Add a composition. Ids must be unique.
    pub fn register(
        &mut self,
        spec: CompositionSpec,
        scene: impl Scene + 'static,
    ) -> PromoResult<()> {
        self.register_arc(spec, Arc::new(scene))
    }

    /// Add a composition whose scene is already shared.
    ///
    /// A scene that exposes a timeline must cover exactly `[0, duration_frames)`.
    pub fn register_arc(&mut self, spec: CompositionSpec, scene: Arc<dyn Scene>) -> PromoResult<()> {
        spec.validate()?;
        if self.entries.iter().any(|e| e.spec.id == spec.id) {
            return Err(PromoError::validation(format!(
                "duplicate composition id '{}'",
                spec.id
            )));
        }
        if let Some(timeline) = scene.timeline() {
            let covered = timeline.last().map_or(0, |row| row.window.end.0);
            if covered != spec.duration_frames {
                return Err(PromoError::validation(format!(
                    "composition '{}' lasts {} frames but its timeline covers {covered}",
                    spec.id, spec.duration_frames
                )));
            }
        }
        tracing::debug!(id = %spec.id, frames = spec.duration_frames, "registered composition");
        self.entries.push(Registered { spec, scene });
        Ok(())
    }

    /// Look up by id.
    pub fn get(&self, id: &str) -> PromoResult<&Registered> {
        self.entries
            .iter()
            .find(|e| e.spec.id == id)
            .ok_or_else(|| {
                PromoError::validation(format!(
                    "unknown composition '{id}' (known: {})",
                    self.ids().collect::<Vec<_>>().join(", ")
                ))
            })
    }

    /// Registered compositions in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Registered> {
        self.entries.iter()
    }

    /// Registered ids in registration order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.spec.id.as_str())
    }

    /// Number of compositions.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// No compositions registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/registry/catalog.rs"]
mod tests;
