use crate::animation::spring::SpringConfig;
use crate::animation::timing::pulse;
use crate::compositions::parts::{SETTLE, rise_in};
use crate::foundation::error::PromoResult;
use crate::scene::background::backdrop;
use crate::scene::context::{Scene, SceneCtx};
use crate::scene::node::Node;
use crate::style::props::{Edges, Style, TextAlign};
use crate::style::theme::Theme;

const PULSE_RATE: f64 = 0.1;
const PULSE_AMPLITUDE: f64 = 0.02;

/// Call to action with a gently breathing trial button.
#[derive(Clone, Copy, Debug, Default)]
pub struct CallToAction;

impl Scene for CallToAction {
    fn name(&self) -> &str {
        "CallToAction"
    }

    fn render(&self, ctx: &SceneCtx, theme: &Theme) -> PromoResult<Node> {
        let p = &theme.palette;
        let progress = ctx.spring(0.0, SpringConfig::damped(SETTLE));
        let button_scale = pulse(ctx.frame_i64(), PULSE_RATE, PULSE_AMPLITUDE);

        let title = Node::boxed()
            .with_style(
                theme
                    .text(64.0, p.white)
                    .font_weight(700)
                    .margin(Edges::bottom(40.0)),
            )
            .child(Node::text("Ready to Transform Your"))
            .child(Node::line_break())
            .child(Node::text("Engineering Workflow?").with_style(theme.gradient_text()));

        Ok(backdrop(theme, false)
            .map_style(|s| s.merge(Style::column_center()))
            .child(
                Node::boxed()
                    .with_style(rise_in(
                        Style::new()
                            .text_align(TextAlign::Center)
                            .font_family(theme.font_family.clone()),
                        progress,
                        30.0,
                    )?)
                    .child(title)
                    .child(
                        Node::text("Start Free Trial").with_style(
                            theme
                                .button()
                                .padding(Edges::symmetric(20.0, 48.0))
                                .radius(16.0)
                                .font_size(22.0)
                                .scale(button_scale),
                        ),
                    )
                    .child(
                        Node::text("14-day free trial. No credit card required.").with_style(
                            Style::new()
                                .font_size(20.0)
                                .color(p.gray_500)
                                .margin(Edges::top(30.0)),
                        ),
                    ),
            ))
    }
}
