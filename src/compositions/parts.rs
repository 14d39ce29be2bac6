//! Building blocks reused across compositions.

use crate::animation::interpolate::{InterpolateOpts, interpolate};
use crate::animation::spring::SpringConfig;
use crate::animation::timing::Stagger;
use crate::foundation::error::PromoResult;
use crate::scene::context::SceneCtx;
use crate::scene::icon::{IconName, IconRef};
use crate::scene::node::Node;
use crate::style::props::{Edges, Style, TextAlign};
use crate::style::theme::Theme;

/// Damping used by most entrances.
pub(crate) const SETTLE: f64 = 12.0;
/// Bouncier damping used for logos and the hero titles.
pub(crate) const BOUNCE: f64 = 10.0;

/// Offset that shrinks from `distance` to 0 as `progress` goes 0 to 1.
pub(crate) fn lift(progress: f64, distance: f64) -> PromoResult<f64> {
    interpolate(
        progress,
        &[0.0, 1.0],
        &[distance, 0.0],
        InterpolateOpts::default(),
    )
}

/// Fade in with `progress` while rising `distance` px into place.
pub(crate) fn rise_in(style: Style, progress: f64, distance: f64) -> PromoResult<Style> {
    Ok(style.opacity(progress).translate_y(lift(progress, distance)?))
}

/// Spring progress of list item `index`, held at zero before its stagger start.
pub(crate) fn stagger_progress(ctx: &SceneCtx, stagger: Stagger, index: usize) -> f64 {
    let frame = ctx.frame_i64();
    if !stagger.has_started(frame, index) {
        return 0.0;
    }
    ctx.spring(stagger.start(index) as f64, SpringConfig::damped(SETTLE))
}

/// Layers mark with the brand-gradient stroke next to the word mark.
pub(crate) fn logo(theme: &Theme, scale: f64) -> Node {
    Node::boxed()
        .with_style(Style::row_center().gap(12.0).scale(scale))
        .child(Node::icon(
            IconRef::new(IconName::Layers, 40.0, theme.palette.accent_sky)
                .stroke(theme.brand_gradient()),
        ))
        .child(
            Node::text("EtherealSearch").with_style(
                theme
                    .text(24.0, theme.palette.white)
                    .font_weight(700),
            ),
        )
}

/// Centered section heading: plain lead-in, gradient highlight, optional plain tail.
pub(crate) fn heading(
    theme: &Theme,
    size: f64,
    lead: &str,
    highlight: &str,
    tail: &str,
) -> Node {
    Node::boxed()
        .with_style(
            theme
                .text(size, theme.palette.white)
                .font_weight(700)
                .text_align(TextAlign::Center)
                .margin(Edges::bottom(60.0)),
        )
        .child_if(!lead.is_empty(), || Node::text(lead))
        .child(Node::text(highlight).with_style(theme.gradient_text()))
        .child_if(!tail.is_empty(), || Node::text(tail))
}

/// Big gradient value over a small muted label.
pub(crate) fn stat_block(theme: &Theme, value: &str, label: &str, sizes: (f64, f64), gap: f64) -> [Node; 2] {
    let (value_px, label_px) = sizes;
    [
        Node::text(value).with_style(
            theme
                .gradient_text()
                .font_size(value_px)
                .font_weight(700),
        ),
        Node::text(label).with_style(
            theme
                .text(label_px, theme.palette.gray_500)
                .margin(Edges::top(gap)),
        ),
    ]
}

#[cfg(test)]
#[path = "../../tests/unit/compositions/parts.rs"]
mod tests;
