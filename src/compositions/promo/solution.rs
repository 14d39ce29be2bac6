use crate::animation::interpolate::InterpolateOpts;
use crate::animation::spring::SpringConfig;
use crate::animation::timing::Stagger;
use crate::compositions::parts::{SETTLE, heading, lift, stagger_progress, stat_block};
use crate::foundation::error::PromoResult;
use crate::scene::background::backdrop;
use crate::scene::context::{Scene, SceneCtx};
use crate::scene::node::Node;
use crate::style::color::Color;
use crate::style::props::{Display, Edges, Style, TextAlign};
use crate::style::theme::Theme;

pub(crate) const PITCH: &str = "AI-powered search that understands engineering documents, diagrams, \
                                and blueprints. Find answers in seconds, not hours.";

pub(crate) const STATS: [(&str, &str); 3] = [
    ("99.7%", "Accuracy"),
    ("<500ms", "Response Time"),
    ("50+", "Languages"),
];

pub(crate) const STATS_AT: Stagger = Stagger::new(60, 15);

/// "Introducing EtherealSearch" with the pitch and three headline numbers.
#[derive(Clone, Copy, Debug, Default)]
pub struct Solution;

impl Scene for Solution {
    fn name(&self) -> &str {
        "Solution"
    }

    fn render(&self, ctx: &SceneCtx, theme: &Theme) -> PromoResult<Node> {
        let p = &theme.palette;
        let title = ctx.spring(0.0, SpringConfig::damped(SETTLE));
        let title_y = lift(title, 30.0)?;
        let pitch_opacity = ctx.interpolate(
            &[30.0, 60.0],
            &[0.0, 1.0],
            InterpolateOpts::clamp_right(),
        )?;

        let mut stats = Vec::with_capacity(STATS.len());
        for (i, &(value, label)) in STATS.iter().enumerate() {
            let progress = stagger_progress(ctx, STATS_AT, i);
            stats.push(
                Node::boxed()
                    .with_style(
                        Style::new()
                            .text_align(TextAlign::Center)
                            .padding(Edges::all(24.0))
                            .background_color(Color::WHITE.with_alpha(0.03))
                            .border(1.0, Color::WHITE.with_alpha(0.08))
                            .radius(20.0)
                            .min_width(180.0)
                            .opacity(progress)
                            .translate_y(lift(progress, 20.0)?),
                    )
                    .children(stat_block(theme, value, label, (48.0, 16.0), 8.0)),
            );
        }

        Ok(backdrop(theme, false).child(
            Node::boxed()
                .with_style(
                    Style::column_center()
                        .padding(Edges::all(80.0))
                        .font_family(theme.font_family.clone()),
                )
                .child(
                    heading(theme, 52.0, "Introducing ", "EtherealSearch", "").map_style(|s| {
                        s.margin(Edges::bottom(40.0))
                            .translate_y(title_y)
                            .opacity(title)
                    }),
                )
                .child(
                    Node::text(PITCH).with_style(
                        Style::new()
                            .font_size(28.0)
                            .color(p.gray_400)
                            .max_width(900.0)
                            .text_align(TextAlign::Center)
                            .line_height(1.6)
                            .margin(Edges::bottom(60.0))
                            .opacity(pitch_opacity),
                    ),
                )
                .child(
                    Node::boxed()
                        .with_style(Style::new().display(Display::Flex).gap(60.0))
                        .children(stats),
                ),
        ))
    }
}
