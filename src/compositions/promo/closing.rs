use crate::animation::spring::SpringConfig;
use crate::compositions::parts::{SETTLE, logo};
use crate::foundation::error::PromoResult;
use crate::scene::background::backdrop;
use crate::scene::context::{Scene, SceneCtx};
use crate::scene::node::Node;
use crate::style::props::{Edges, Style, TextAlign};
use crate::style::theme::Theme;

pub(crate) const SITE: &str = "etherealsearch.io";

/// Large logo and site address.
#[derive(Clone, Copy, Debug, Default)]
pub struct Closing;

impl Scene for Closing {
    fn name(&self) -> &str {
        "Closing"
    }

    fn render(&self, ctx: &SceneCtx, theme: &Theme) -> PromoResult<Node> {
        let progress = ctx.spring(0.0, SpringConfig::damped(SETTLE));
        Ok(backdrop(theme, false)
            .map_style(|s| s.merge(Style::column_center()))
            .child(
                Node::boxed()
                    .with_style(
                        Style::new()
                            .text_align(TextAlign::Center)
                            .opacity(progress)
                            .scale(progress)
                            .font_family(theme.font_family.clone()),
                    )
                    .child(logo(theme, 3.0))
                    .child(Node::text(SITE).with_style(
                        Style::new()
                            .font_size(28.0)
                            .color(theme.palette.gray_400)
                            .margin(Edges::top(40.0)),
                    )),
            ))
    }
}
