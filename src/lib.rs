//! EtherealSearch promotional video as frame-driven declarative scenes.
//!
//! Every composition is a pure function from a frame index to a serializable visual tree
//! ([`Node`]). Nothing here rasterizes; a host samples frames through a [`RenderSession`] and
//! hands the resulting [`Snapshot`]s to a [`FrameSink`].
//!
//! - Animation primitives: [`interpolate`], [`spring`], [`Stagger`]
//! - Scenes: [`PromoVideo`], [`HeroDemo`], [`AgenticDemo`], [`FeaturesDemo`]
//! - Hosting: [`Registry`], [`RenderSession`], [`JsonLinesSink`]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;

pub(crate) mod animation;
pub(crate) mod compositions;
pub(crate) mod registry;
pub(crate) mod render;
pub(crate) mod scene;
pub(crate) mod style;

pub use crate::foundation::core::{
    Affine, BezPath, Canvas, Fps, FrameIndex, FrameRange, Point, Rect, Vec2,
};
pub use crate::foundation::error::{PromoError, PromoResult};

pub use crate::animation::ease::Ease;
pub use crate::animation::interpolate::{Extrapolate, InterpolateOpts, Interpolation, interpolate};
pub use crate::animation::spring::{
    DEFAULT_SETTLE_THRESHOLD, Spring, SpringConfig, measure_spring, spring,
};
pub use crate::animation::timing::{Phase, Stagger, Window, blink, pulse};

pub use crate::style::color::Color;
pub use crate::style::props::{Paint, Style, Transform, TransformOp};
pub use crate::style::theme::{Palette, Theme};

pub use crate::scene::context::{Scene, SceneCtx};
pub use crate::scene::icon::{IconDef, IconName, IconRef};
pub use crate::scene::node::{Node, NodeKind};
pub use crate::scene::sequence::{
    Active, Sequence, SequenceBuilder, SequenceEntry, TimelineEntry,
};

pub use crate::compositions::agentic::AgenticDemo;
pub use crate::compositions::features::FeaturesDemo;
pub use crate::compositions::hero::HeroDemo;
pub use crate::compositions::promo::{
    CallToAction, Closing, Opening, Problem, PromoVideo, SCENE_FRAMES, Solution,
};

pub use crate::registry::catalog::{CompositionSpec, Registered, Registry};
pub use crate::render::fingerprint::{FrameFingerprint, fingerprint_node};
pub use crate::render::session::{RenderSession, RenderSessionOpts, RenderStats, Snapshot};
pub use crate::render::sink::{
    FrameSink, InMemorySink, JsonLinesSink, SinkConfig, SinkFrame, ensure_parent_dir,
};
