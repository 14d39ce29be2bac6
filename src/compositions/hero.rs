use crate::animation::interpolate::InterpolateOpts;
use crate::animation::spring::SpringConfig;
use crate::compositions::parts::{BOUNCE, SETTLE, lift, stat_block};
use crate::foundation::error::PromoResult;
use crate::scene::background::backdrop;
use crate::scene::context::{Scene, SceneCtx};
use crate::scene::icon::{IconName, IconRef};
use crate::scene::node::Node;
use crate::style::props::{Align, Display, Edges, Length, Paint, Style, TextAlign};
use crate::style::theme::Theme;

const BADGE: &str = "Trusted by 500+ Engineering Teams Worldwide";
const TITLE: &str = "EtherealSearch";
const TAGLINE: &str = "Agentic RAG for Engineering";
const SUBTITLE_LEAD: &str = "World-class vision analysis meets intelligent search. Analyze diagrams, \
                             blueprints, and technical documentation with AI that truly ";
const SUBTITLE_EMPHASIS: &str = "understands";
const SUBTITLE_TAIL: &str = " engineering.";

const STATS: [(&str, &str); 3] = [
    ("99.7%", "Accuracy Rate"),
    ("2.4M+", "Diagrams Processed"),
    ("<500ms", "Response Time"),
];

/// Eight-second hero section: badge, two-line title, subtitle, CTAs and stats.
#[derive(Clone, Copy, Debug, Default)]
pub struct HeroDemo;

impl HeroDemo {
    /// Registry id.
    pub const ID: &'static str = "HeroDemo";
    /// Length in frames at 30 fps.
    pub const DURATION: u64 = 240;
}

/// Every animated value of the hero scene at one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct HeroFrame {
    pub(crate) badge_scale: f64,
    pub(crate) badge_opacity: f64,
    pub(crate) title1: f64,
    pub(crate) title2: f64,
    pub(crate) subtitle_opacity: f64,
    pub(crate) subtitle_y: f64,
    pub(crate) cta_scale: f64,
    pub(crate) cta_opacity: f64,
    pub(crate) stats_opacity: f64,
    pub(crate) gradient_position: f64,
}

impl HeroFrame {
    pub(crate) fn sample(ctx: &SceneCtx) -> PromoResult<Self> {
        let hold = InterpolateOpts::clamp_right();
        Ok(Self {
            badge_scale: ctx.spring(0.0, SpringConfig::damped(SETTLE)),
            badge_opacity: ctx.interpolate(&[0.0, 20.0], &[0.0, 1.0], hold)?,
            title1: ctx.spring(15.0, SpringConfig::damped(BOUNCE)),
            title2: ctx.spring(30.0, SpringConfig::damped(BOUNCE)),
            subtitle_opacity: ctx.interpolate(&[45.0, 65.0], &[0.0, 1.0], hold)?,
            subtitle_y: ctx.interpolate(&[45.0, 65.0], &[30.0, 0.0], hold)?,
            cta_scale: ctx.spring(70.0, SpringConfig::damped(SETTLE)),
            cta_opacity: ctx.interpolate(&[70.0, 90.0], &[0.0, 1.0], hold)?,
            stats_opacity: ctx.interpolate(&[100.0, 130.0], &[0.0, 1.0], hold)?,
            gradient_position: ctx.interpolate(
                &[0.0, 240.0],
                &[0.0, 100.0],
                InterpolateOpts::default(),
            )?,
        })
    }
}

impl Scene for HeroDemo {
    fn name(&self) -> &str {
        Self::ID
    }

    fn render(&self, ctx: &SceneCtx, theme: &Theme) -> PromoResult<Node> {
        let v = HeroFrame::sample(ctx)?;
        let p = &theme.palette;

        let badge = Node::boxed()
            .with_style(
                Style::row_center()
                    .display(Display::InlineFlex)
                    .gap(8.0)
                    .padding(Edges::symmetric(8.0, 16.0))
                    .radius(9999.0)
                    .background(Paint::linear(
                        135.0,
                        &[
                            p.ethereal_cyan.with_alpha(0.1),
                            p.ethereal_green.with_alpha(0.1),
                        ],
                    ))
                    .border(1.0, p.ethereal_cyan.with_alpha(0.3))
                    .margin(Edges::bottom(40.0))
                    .scale(v.badge_scale)
                    .opacity(v.badge_opacity),
            )
            .child(Node::icon(IconRef::new(
                IconName::Layers,
                16.0,
                p.ethereal_cyan,
            )))
            .child(
                Node::text(BADGE).with_style(
                    Style::new()
                        .color(p.ethereal_cyan)
                        .font_size(14.0)
                        .font_weight(500),
                ),
            );

        let titles = Node::boxed()
            .with_style(
                Style::new()
                    .text_align(TextAlign::Center)
                    .margin(Edges::bottom(30.0)),
            )
            .child(
                Node::boxed()
                    .with_style(
                        Style::new()
                            .font_size(90.0)
                            .font_weight(800)
                            .margin(Edges::bottom(10.0))
                            .translate_y(lift(v.title1, 50.0)?)
                            .opacity(v.title1),
                    )
                    .child(Node::text(TITLE).with_style(
                        theme.gradient_text().background_position(
                            Length::Percent(v.gradient_position),
                            Length::Percent(0.0),
                        ),
                    )),
            )
            .child(
                Node::text(TAGLINE).with_style(
                    Style::new()
                        .font_size(56.0)
                        .font_weight(700)
                        .color(p.white)
                        .translate_y(lift(v.title2, 30.0)?)
                        .opacity(v.title2),
                ),
            );

        let subtitle = Node::boxed()
            .with_style(
                Style::new()
                    .font_size(24.0)
                    .color(p.gray_400)
                    .max_width(900.0)
                    .text_align(TextAlign::Center)
                    .line_height(1.6)
                    .margin(Edges::bottom(50.0))
                    .opacity(v.subtitle_opacity)
                    .translate_y(v.subtitle_y),
            )
            .child(Node::text(SUBTITLE_LEAD))
            .child(Node::text(SUBTITLE_EMPHASIS).with_style(Style::new().color(p.ethereal_cyan)))
            .child(Node::text(SUBTITLE_TAIL));

        let cta_button = |base: Style| {
            base.padding(Edges::symmetric(18.0, 36.0))
                .radius(12.0)
                .color(p.white)
                .font_weight(600)
                .font_size(18.0)
                .display(Display::Flex)
                .align_items(Align::Center)
                .gap(8.0)
        };
        let ctas = Node::boxed()
            .with_style(
                Style::new()
                    .display(Display::Flex)
                    .gap(20.0)
                    .margin(Edges::bottom(60.0))
                    .scale(v.cta_scale)
                    .opacity(v.cta_opacity),
            )
            .child(
                Node::boxed()
                    .with_style(cta_button(theme.button()))
                    .child(Node::text("Start Free Trial"))
                    .child(Node::icon(IconRef::new(IconName::ArrowRight, 20.0, p.white))),
            )
            .child(
                Node::boxed()
                    .with_style(cta_button(theme.glass()))
                    .child(Node::icon(IconRef::new(IconName::Play, 20.0, p.white)))
                    .child(Node::text("Watch Demo")),
            );

        let stats = Node::boxed()
            .with_style(
                Style::new()
                    .display(Display::Flex)
                    .gap(60.0)
                    .opacity(v.stats_opacity),
            )
            .children(STATS.iter().map(|&(value, label)| {
                Node::boxed()
                    .with_style(
                        theme
                            .glass()
                            .text_align(TextAlign::Center)
                            .padding(Edges::all(20.0))
                            .min_width(180.0),
                    )
                    .children(stat_block(theme, value, label, (42.0, 14.0), 4.0))
            }));

        Ok(backdrop(theme, true).child(
            Node::boxed()
                .with_style(theme.content(60.0))
                .child(badge)
                .child(titles)
                .child(subtitle)
                .child(ctas)
                .child(stats),
        ))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/compositions/hero.rs"]
mod tests;
