use crate::animation::spring::SpringConfig;
use crate::animation::timing::Stagger;
use crate::compositions::parts::{SETTLE, lift, stagger_progress};
use crate::foundation::error::PromoResult;
use crate::scene::background::backdrop;
use crate::scene::context::{Scene, SceneCtx};
use crate::scene::icon::{IconName, IconRef};
use crate::scene::node::Node;
use crate::style::props::{Align, Direction, Display, Edges, Style, TextAlign};
use crate::style::theme::Theme;

pub(crate) const PROBLEMS: [&str; 3] = [
    "2.4M+ engineering documents scattered across systems",
    "Hours wasted searching for specifications",
    "Critical information buried in PDFs and blueprints",
];

pub(crate) const BULLETS_AT: Stagger = Stagger::new(30, 20);

/// "The Challenge": three pain points slide in from the left.
#[derive(Clone, Copy, Debug, Default)]
pub struct Problem;

impl Scene for Problem {
    fn name(&self) -> &str {
        "Problem"
    }

    fn render(&self, ctx: &SceneCtx, theme: &Theme) -> PromoResult<Node> {
        let p = &theme.palette;
        let title = ctx.spring(0.0, SpringConfig::damped(SETTLE));
        let title_y = lift(title, 30.0)?;

        let mut bullets = Vec::with_capacity(PROBLEMS.len());
        for (i, problem) in PROBLEMS.iter().enumerate() {
            let progress = stagger_progress(ctx, BULLETS_AT, i);
            bullets.push(
                Node::boxed()
                    .with_style(
                        Style::row_center()
                            .gap(20.0)
                            .opacity(progress)
                            .translate_x(lift(progress, -30.0)?),
                    )
                    .child(
                        Node::boxed()
                            .with_style(
                                Style::row_center()
                                    .justify_content(Align::Center)
                                    .size(48.0)
                                    .radius(12.0)
                                    .background_color(p.danger.with_alpha(0.2)),
                            )
                            .child(Node::icon(IconRef::new(IconName::XCircle, 24.0, p.danger))),
                    )
                    .child(Node::text(*problem).with_style(
                        Style::new().font_size(24.0).color(p.gray_400),
                    )),
            );
        }

        Ok(backdrop(theme, false).child(
            Node::boxed()
                .with_style(
                    Style::column_center()
                        .padding(Edges::all(100.0))
                        .font_family(theme.font_family.clone()),
                )
                .child(
                    Node::text("The Challenge").with_style(
                        theme
                            .text(52.0, p.white)
                            .font_weight(700)
                            .margin(Edges::bottom(60.0))
                            .text_align(TextAlign::Center)
                            .translate_y(title_y)
                            .opacity(title),
                    ),
                )
                .child(
                    Node::boxed()
                        .with_style(
                            Style::new()
                                .display(Display::Flex)
                                .direction(Direction::Column)
                                .gap(30.0),
                        )
                        .children(bullets),
                ),
        ))
    }
}
