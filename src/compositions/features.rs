use crate::animation::interpolate::InterpolateOpts;
use crate::animation::spring::SpringConfig;
use crate::animation::timing::Stagger;
use crate::compositions::parts::{SETTLE, heading, lift, stagger_progress};
use crate::foundation::error::PromoResult;
use crate::scene::background::backdrop;
use crate::scene::context::{Scene, SceneCtx};
use crate::scene::icon::{IconName, IconRef};
use crate::scene::node::Node;
use crate::style::color::Color;
use crate::style::props::{Align, Display, Edges, Inset, Length, Position, Style};
use crate::style::theme::Theme;

pub(crate) const CARDS_AT: Stagger = Stagger::new(30, 15);
const MARQUEE_FROM: i64 = 200;
const MARQUEE_REPEATS: usize = 2;

pub(crate) const FEATURES: [(IconName, &str, &str); 6] = [
    (
        IconName::Scan,
        "Diagram Analysis",
        "Parse blueprints & schematics with precision",
    ),
    (
        IconName::Camera,
        "Photo Processing",
        "Analyze field photos & equipment images",
    ),
    (
        IconName::Languages,
        "Multi-Language OCR",
        "Extract text in 50+ languages",
    ),
    (
        IconName::Brain,
        "Agentic Reasoning",
        "AI that thinks through complex problems",
    ),
    (
        IconName::Database,
        "Knowledge Integration",
        "Connect to your existing systems",
    ),
    (
        IconName::Users,
        "Collaboration",
        "Share analyses & build team knowledge",
    ),
];

pub(crate) const TECH: [&str; 6] = [
    "Artificial Intelligence",
    "Machine Learning",
    "Computer Vision",
    "NLP",
    "Knowledge Graphs",
    "RAG Architecture",
];

/// Ten-second capabilities grid with a scrolling technology strip.
#[derive(Clone, Copy, Debug, Default)]
pub struct FeaturesDemo;

impl FeaturesDemo {
    /// Registry id.
    pub const ID: &'static str = "FeaturesDemo";
    /// Length in frames at 30 fps.
    pub const DURATION: u64 = 300;
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct FeaturesFrame {
    pub(crate) title: f64,
    pub(crate) cards: [f64; 6],
    /// Horizontal offset of the strip, `None` before it appears.
    pub(crate) marquee_x: Option<f64>,
}

impl FeaturesFrame {
    pub(crate) fn sample(ctx: &SceneCtx) -> PromoResult<Self> {
        let marquee_x = ctx.interpolate(
            &[200.0, 300.0],
            &[0.0, -500.0],
            InterpolateOpts::clamp_right(),
        )?;
        Ok(Self {
            title: ctx.spring(0.0, SpringConfig::damped(SETTLE)),
            cards: std::array::from_fn(|i| stagger_progress(ctx, CARDS_AT, i)),
            marquee_x: (ctx.frame_i64() >= MARQUEE_FROM).then_some(marquee_x),
        })
    }
}

fn feature_card(theme: &Theme, index: usize, progress: f64) -> PromoResult<Node> {
    let p = &theme.palette;
    let (icon, title, description) = FEATURES[index];
    Ok(Node::boxed()
        .with_style(
            theme
                .glass()
                .radius(20.0)
                .padding(Edges::all(32.0))
                .opacity(progress)
                .translate_y(lift(progress, 30.0)?),
        )
        .child(
            Node::boxed()
                .with_style(
                    Style::row_center()
                        .justify_content(Align::Center)
                        .size(56.0)
                        .radius(16.0)
                        .background(theme.brand_tint(0.2))
                        .margin(Edges::bottom(20.0)),
                )
                .child(Node::icon(IconRef::new(icon, 28.0, p.accent_sky))),
        )
        .child(
            Node::text(title).with_style(
                Style::new()
                    .font_size(22.0)
                    .font_weight(600)
                    .color(p.white)
                    .margin(Edges::bottom(12.0)),
            ),
        )
        .child(
            Node::text(description).with_style(
                Style::new()
                    .font_size(15.0)
                    .color(p.gray_400)
                    .margin(Edges::all(0.0))
                    .line_height(1.5),
            ),
        ))
}

fn marquee(theme: &Theme, x: f64) -> Node {
    let pill = |tech: &str| {
        Node::text(tech).with_style(
            Style::row_center()
                .display(Display::InlineFlex)
                .radius(9999.0)
                .border(1.0, Color::WHITE.with_alpha(0.1))
                .background_color(Color::WHITE.with_alpha(0.05))
                .padding(Edges::symmetric(12.0, 24.0))
                .font_size(16.0)
                .font_weight(500)
                .color(theme.palette.gray_400)
                .nowrap(),
        )
    };

    Node::boxed()
        .with_style(
            Style::new()
                .position(Position::Absolute)
                .inset(Inset::bottom_strip(60.0))
                .clip()
                .padding(Edges::symmetric(20.0, 0.0))
                .background_color(Color::BLACK.with_alpha(0.5)),
        )
        .child(
            Node::boxed()
                .with_style(
                    Style::new()
                        .display(Display::Flex)
                        .gap(48.0)
                        .translate_x(x),
                )
                .children(
                    std::iter::repeat_n(TECH, MARQUEE_REPEATS)
                        .flatten()
                        .map(pill),
                ),
        )
}

impl Scene for FeaturesDemo {
    fn name(&self) -> &str {
        Self::ID
    }

    fn render(&self, ctx: &SceneCtx, theme: &Theme) -> PromoResult<Node> {
        let v = FeaturesFrame::sample(ctx)?;
        let title_y = lift(v.title, 30.0)?;

        let grid = Node::boxed()
            .with_style(
                Style::new()
                    .grid_columns(3)
                    .gap(24.0)
                    .width(Length::Percent(100.0))
                    .max_width(1200.0),
            )
            .children(
                v.cards
                    .iter()
                    .enumerate()
                    .map(|(i, &progress)| feature_card(theme, i, progress))
                    .collect::<PromoResult<Vec<_>>>()?,
            );

        Ok(backdrop(theme, true).child(
            Node::boxed()
                .with_style(theme.content(80.0))
                .child(
                    heading(theme, 56.0, "Powerful ", "Capabilities", "")
                        .map_style(|s| s.translate_y(title_y).opacity(v.title)),
                )
                .child(grid)
                .children(v.marquee_x.map(|x| marquee(theme, x))),
        ))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/compositions/features.rs"]
mod tests;
