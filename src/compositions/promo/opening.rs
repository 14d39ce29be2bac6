use crate::animation::interpolate::InterpolateOpts;
use crate::animation::spring::SpringConfig;
use crate::compositions::parts::{BOUNCE, logo};
use crate::foundation::error::PromoResult;
use crate::scene::background::backdrop;
use crate::scene::context::{Scene, SceneCtx};
use crate::scene::node::Node;
use crate::style::props::{Edges, Style, TextAlign};
use crate::style::theme::Theme;

pub(crate) const TAGLINE: &str = "Agentic RAG Smart Search for Engineering Teams";

/// Logo springs in, tagline fades up underneath.
#[derive(Clone, Copy, Debug, Default)]
pub struct Opening;

impl Scene for Opening {
    fn name(&self) -> &str {
        "Opening"
    }

    fn render(&self, ctx: &SceneCtx, theme: &Theme) -> PromoResult<Node> {
        let logo_scale = ctx.spring(0.0, SpringConfig::damped(BOUNCE));
        let hold = InterpolateOpts::clamp_right();
        let tagline_opacity = ctx.interpolate(&[60.0, 90.0], &[0.0, 1.0], hold)?;
        let tagline_y = ctx.interpolate(&[60.0, 90.0], &[20.0, 0.0], hold)?;

        Ok(backdrop(theme, false)
            .map_style(|s| s.merge(Style::column_center()))
            .child(
                Node::boxed()
                    .with_style(
                        Style::new()
                            .text_align(TextAlign::Center)
                            .font_family(theme.font_family.clone()),
                    )
                    .child(
                        Node::boxed()
                            .with_style(Style::new().scale(logo_scale).margin(Edges::bottom(30.0)))
                            .child(logo(theme, 2.5)),
                    )
                    .child(
                        Node::text(TAGLINE).with_style(
                            theme
                                .text(32.0, theme.palette.gray_400)
                                .opacity(tagline_opacity)
                                .translate_y(tagline_y),
                        ),
                    ),
            ))
    }
}
