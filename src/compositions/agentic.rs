use crate::animation::interpolate::InterpolateOpts;
use crate::animation::spring::SpringConfig;
use crate::animation::timing::{Phase, Stagger, blink};
use crate::compositions::parts::{SETTLE, heading, lift};
use crate::foundation::error::PromoResult;
use crate::scene::background::backdrop;
use crate::scene::context::{Scene, SceneCtx};
use crate::scene::icon::{IconName, IconRef};
use crate::scene::node::Node;
use crate::style::color::Color;
use crate::style::props::{Align, Display, Edges, Inset, Length, Position, Style};
use crate::style::theme::{Palette, Theme};

pub(crate) const QUERY: &str = "What is the design wind speed for Austin commercial buildings?";

const TYPING_START: f64 = 50.0;
const TYPING_END: f64 = 120.0;
const CURSOR_UNTIL: i64 = 120;
const CURSOR_RATE: f64 = 0.2;
const PHASE_FRAMES: i64 = 55;
const PHASES_AT: Stagger = Stagger::new(130, PHASE_FRAMES);

struct PhaseInfo {
    title: &'static str,
    description: &'static str,
    icon: IconName,
}

const PHASES: [PhaseInfo; 4] = [
    PhaseInfo {
        title: "Understanding",
        description: "Parsing your engineering query...",
        icon: IconName::Brain,
    },
    PhaseInfo {
        title: "Searching",
        description: "Scanning knowledge base...",
        icon: IconName::Search,
    },
    PhaseInfo {
        title: "Reasoning",
        description: "Cross-referencing technical data...",
        icon: IconName::Cpu,
    },
    PhaseInfo {
        title: "Answer",
        description: "Compiling response...",
        icon: IconName::Sparkles,
    },
];

/// Twelve-second walkthrough of one agentic query: typing, four reasoning phases, answer.
#[derive(Clone, Copy, Debug, Default)]
pub struct AgenticDemo;

impl AgenticDemo {
    /// Registry id.
    pub const ID: &'static str = "AgenticDemo";
    /// Length in frames at 30 fps.
    pub const DURATION: u64 = 360;
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct AgenticFrame {
    pub(crate) title: f64,
    pub(crate) search_opacity: f64,
    /// Characters of [`QUERY`] typed so far.
    pub(crate) typed: usize,
    /// `None` once typing is over, otherwise the blink state.
    pub(crate) cursor: Option<bool>,
    pub(crate) phases: [Phase; 4],
    pub(crate) result_opacity: f64,
}

impl AgenticFrame {
    pub(crate) fn sample(ctx: &SceneCtx) -> PromoResult<Self> {
        let frame = ctx.frame_i64();
        let len = QUERY.chars().count();
        let typed = ctx.interpolate(
            &[TYPING_START, TYPING_END],
            &[0.0, len as f64],
            InterpolateOpts::clamped(),
        )?;
        let phases = std::array::from_fn(|i| PHASES_AT.window(i, PHASE_FRAMES).phase(frame));

        Ok(Self {
            title: ctx.spring(0.0, SpringConfig::damped(SETTLE)),
            search_opacity: ctx.interpolate(
                &[20.0, 40.0],
                &[0.0, 1.0],
                InterpolateOpts::clamp_right(),
            )?,
            typed: (typed.floor().max(0.0) as usize).min(len),
            cursor: (frame < CURSOR_UNTIL).then(|| blink(frame, CURSOR_RATE)),
            phases,
            result_opacity: ctx.interpolate(
                &[340.0, 360.0],
                &[0.0, 1.0],
                InterpolateOpts::clamp_right(),
            )?,
        })
    }

    pub(crate) fn typed_query(&self) -> String {
        QUERY.chars().take(self.typed).collect()
    }
}

/// Colors for a phase card in a given state.
struct PhaseLook {
    background: Color,
    border: Color,
    accent: Color,
    tile: Color,
}

impl PhaseLook {
    fn for_phase(phase: Phase, p: &Palette) -> Self {
        match phase {
            Phase::Complete => Self {
                background: p.accent_sky.with_alpha(0.1),
                border: p.accent_sky.with_alpha(0.3),
                accent: p.accent_sky,
                tile: p.accent_sky.with_alpha(0.2),
            },
            Phase::Active { .. } => Self {
                background: p.accent_violet.with_alpha(0.1),
                border: p.accent_violet.with_alpha(0.3),
                accent: p.accent_violet,
                tile: p.accent_violet.with_alpha(0.2),
            },
            Phase::Pending => Self {
                background: Color::WHITE.with_alpha(0.03),
                border: Color::WHITE.with_alpha(0.08),
                accent: p.gray_500,
                tile: Color::WHITE.with_alpha(0.1),
            },
        }
    }
}

fn phase_card(info: &PhaseInfo, phase: Phase, theme: &Theme) -> Node {
    let p = &theme.palette;
    let look = PhaseLook::for_phase(phase, p);
    let progress = match phase {
        Phase::Active { progress } => Some(progress),
        _ => None,
    };

    let glyph = if phase == Phase::Complete {
        IconRef::new(IconName::Check, 24.0, p.accent_sky).stroke_width(3.0)
    } else {
        IconRef::new(info.icon, 28.0, look.accent)
    };

    Node::boxed()
        .with_style(
            Style::new()
                .flex(1.0)
                .padding(Edges::all(24.0))
                .background_color(look.background)
                .border(1.0, look.border)
                .radius(16.0)
                .position(Position::Relative)
                .clip(),
        )
        .children(progress.map(|pr| {
            Node::boxed().with_style(
                Style::new()
                    .position(Position::Absolute)
                    .inset(Inset::bottom_left(0.0, 0.0))
                    .height(Length::Px(3.0))
                    .width(Length::Percent(pr * 100.0))
                    .background_color(p.accent_violet),
            )
        }))
        .child(
            Node::boxed()
                .with_style(Style::row_center().gap(12.0).margin(Edges::bottom(12.0)))
                .child(
                    Node::boxed()
                        .with_style(
                            Style::row_center()
                                .justify_content(Align::Center)
                                .size(44.0)
                                .radius(12.0)
                                .background_color(look.tile),
                        )
                        .child(Node::icon(glyph)),
                )
                .child(
                    Node::text(info.title).with_style(
                        Style::new()
                            .font_weight(600)
                            .font_size(16.0)
                            .color(look.accent),
                    ),
                ),
        )
        .children(progress.map(|_| {
            Node::text(info.description).with_style(
                Style::new()
                    .font_size(13.0)
                    .color(p.gray_400)
                    .margin(Edges::all(0.0)),
            )
        }))
}

fn result_card(theme: &Theme, opacity: f64) -> Node {
    let p = &theme.palette;
    let source = |label: &str, value: &str, color: Color, weight: u16| {
        Node::boxed()
            .with_style(
                Style::new()
                    .flex(1.0)
                    .background_color(Color::WHITE.with_alpha(0.05))
                    .radius(12.0)
                    .padding(Edges::all(16.0)),
            )
            .child(Node::text(label).with_style(
                Style::new()
                    .font_size(13.0)
                    .color(p.gray_500)
                    .margin(Edges::bottom(4.0)),
            ))
            .child(Node::text(value).with_style(Style::new().color(color).font_weight(weight)))
    };

    Node::boxed()
        .with_style(
            Style::new()
                .background(theme.brand_tint(0.1))
                .border(1.0, p.accent_sky.with_alpha(0.2))
                .radius(16.0)
                .padding(Edges::all(30.0))
                .opacity(opacity),
        )
        .child(
            Node::boxed()
                .with_style(Style::row_center().gap(10.0).margin(Edges::bottom(20.0)))
                .child(Node::icon(IconRef::new(
                    IconName::Sparkles,
                    22.0,
                    p.accent_sky,
                )))
                .child(Node::text("Analysis Complete").with_style(
                    Style::new()
                        .font_weight(600)
                        .color(p.accent_sky)
                        .font_size(18.0),
                )),
        )
        .child(
            Node::boxed()
                .with_style(
                    Style::new()
                        .color(p.gray_400)
                        .font_size(16.0)
                        .line_height(1.6)
                        .margin(Edges::bottom(20.0)),
                )
                .child(Node::text("Based on your query, I found "))
                .child(
                    Node::text("23 relevant documents")
                        .with_style(Style::new().color(p.white).font_weight(700)),
                )
                .child(Node::text(
                    " in your knowledge base. The design wind speed for Austin commercial \
                     buildings is ",
                ))
                .child(
                    Node::text("115 mph")
                        .with_style(Style::new().color(p.ethereal_cyan).font_weight(700)),
                )
                .child(Node::text(" (ASCE 7-22, Risk Category II).")),
        )
        .child(
            Node::boxed()
                .with_style(Style::new().display(Display::Flex).gap(20.0))
                .child(source(
                    "Primary Match",
                    "Austin Building Code 2024, Section 1609",
                    p.white,
                    500,
                ))
                .child(source("Confidence Score", "97.3%", p.accent_sky, 600)),
        )
}

impl Scene for AgenticDemo {
    fn name(&self) -> &str {
        Self::ID
    }

    fn render(&self, ctx: &SceneCtx, theme: &Theme) -> PromoResult<Node> {
        let v = AgenticFrame::sample(ctx)?;
        let p = &theme.palette;

        let title_y = lift(v.title, 30.0)?;
        let title = heading(theme, 56.0, "See the ", "Magic", " in Action")
            .map_style(|s| s.translate_y(title_y).opacity(v.title));

        let search = Node::boxed()
            .with_style(
                Style::row_center()
                    .background_color(Color::WHITE.with_alpha(0.05))
                    .border(1.0, Color::WHITE.with_alpha(0.1))
                    .radius(16.0)
                    .padding(Edges::symmetric(20.0, 24.0))
                    .margin(Edges::bottom(40.0)),
            )
            .child(
                Node::icon(IconRef::new(IconName::Search, 24.0, p.gray_500))
                    .with_style(Style::new().margin(Edges {
                        right: 16.0,
                        ..Edges::default()
                    })),
            )
            .child(
                Node::boxed()
                    .with_style(Style::new().color(p.white).font_size(20.0).flex(1.0))
                    .child(Node::text(v.typed_query()))
                    .children(v.cursor.map(|on| {
                        Node::text("|")
                            .with_style(Style::new().opacity(if on { 1.0 } else { 0.0 }))
                    })),
            );

        let phases = Node::boxed()
            .with_style(
                Style::new()
                    .display(Display::Flex)
                    .gap(20.0)
                    .margin(Edges::bottom(40.0)),
            )
            .children(
                PHASES
                    .iter()
                    .zip(v.phases)
                    .map(|(info, phase)| phase_card(info, phase, theme)),
            );

        let card = Node::boxed()
            .with_style(
                theme
                    .glass()
                    .width(Length::Percent(100.0))
                    .max_width(1100.0)
                    .radius(24.0)
                    .padding(Edges::all(50.0))
                    .opacity(v.search_opacity),
            )
            .child(search)
            .child(phases)
            .child(result_card(theme, v.result_opacity));

        Ok(backdrop(theme, true).child(
            Node::boxed()
                .with_style(theme.content(80.0))
                .child(title)
                .child(card),
        ))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/compositions/agentic.rs"]
mod tests;
