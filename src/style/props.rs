use smallvec::SmallVec;

use crate::foundation::core::{Affine, Vec2};
use crate::style::color::Color;

/// A color at a position along a gradient, `offset` in `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct ColorStop {
    /// Stop color.
    pub color: Color,
    /// Position along the gradient line.
    pub offset: f64,
}

/// Fill used for backgrounds and gradient text.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Paint {
    /// Flat color.
    Solid {
        /// Fill color.
        color: Color,
    },
    /// CSS-style `linear-gradient(angle, stops...)`. `0deg` points up, `90deg` to the right.
    LinearGradient {
        /// Gradient direction in degrees.
        angle_deg: f64,
        /// Ordered color stops.
        stops: Vec<ColorStop>,
    },
    /// Circular gradient centered at a point given in percent of the box.
    RadialGradient {
        /// Center, in percent of width/height.
        center_pct: Vec2,
        /// Ordered color stops.
        stops: Vec<ColorStop>,
    },
}

impl Paint {
    /// Flat color fill.
    pub fn solid(color: Color) -> Self {
        Self::Solid { color }
    }

    /// Linear gradient with evenly spaced stops.
    pub fn linear(angle_deg: f64, colors: &[Color]) -> Self {
        Self::LinearGradient {
            angle_deg,
            stops: even_stops(colors),
        }
    }

    /// Radial wash from `color` at the center to transparent at `fade_at`.
    pub fn radial_wash(center_pct: Vec2, color: Color, fade_at: f64) -> Self {
        Self::RadialGradient {
            center_pct,
            stops: vec![
                ColorStop { color, offset: 0.0 },
                ColorStop {
                    color: Color::TRANSPARENT,
                    offset: fade_at,
                },
            ],
        }
    }

    /// Linear gradient made of hard color bands, e.g. 1px grid lines.
    pub fn bands(angle_deg: f64, stops: Vec<ColorStop>) -> Self {
        Self::LinearGradient { angle_deg, stops }
    }
}

fn even_stops(colors: &[Color]) -> Vec<ColorStop> {
    let last = colors.len().saturating_sub(1).max(1) as f64;
    colors
        .iter()
        .enumerate()
        .map(|(i, &color)| ColorStop {
            color,
            offset: if colors.len() == 1 { 0.0 } else { i as f64 / last },
        })
        .collect()
}

/// Box dimension.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Length {
    /// Absolute pixels.
    Px(f64),
    /// Percent of the containing box.
    Percent(f64),
}

/// Per-side pixel amounts (padding, margin).
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize)]
pub struct Edges {
    /// Top edge.
    pub top: f64,
    /// Right edge.
    pub right: f64,
    /// Bottom edge.
    pub bottom: f64,
    /// Left edge.
    pub left: f64,
}

impl Edges {
    /// Same amount on every side.
    pub const fn all(v: f64) -> Self {
        Self {
            top: v,
            right: v,
            bottom: v,
            left: v,
        }
    }

    /// `vertical` on top/bottom, `horizontal` on left/right.
    pub const fn symmetric(vertical: f64, horizontal: f64) -> Self {
        Self {
            top: vertical,
            right: horizontal,
            bottom: vertical,
            left: horizontal,
        }
    }

    /// Only the bottom edge (the usual `marginBottom`).
    pub const fn bottom(v: f64) -> Self {
        Self {
            top: 0.0,
            right: 0.0,
            bottom: v,
            left: 0.0,
        }
    }

    /// Only the top edge.
    pub const fn top(v: f64) -> Self {
        Self {
            top: v,
            right: 0.0,
            bottom: 0.0,
            left: 0.0,
        }
    }
}

/// Offsets of a positioned box from its parent's edges. Unset sides are left to layout.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize)]
pub struct Inset {
    /// Distance from the parent's top edge.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top: Option<f64>,
    /// Distance from the parent's right edge.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub right: Option<f64>,
    /// Distance from the parent's bottom edge.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bottom: Option<f64>,
    /// Distance from the parent's left edge.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub left: Option<f64>,
}

impl Inset {
    /// Pinned to every edge at distance `v`.
    pub const fn all(v: f64) -> Self {
        Self {
            top: Some(v),
            right: Some(v),
            bottom: Some(v),
            left: Some(v),
        }
    }

    /// Pinned to the bottom-left corner.
    pub const fn bottom_left(bottom: f64, left: f64) -> Self {
        Self {
            top: None,
            right: None,
            bottom: Some(bottom),
            left: Some(left),
        }
    }

    /// Full-width strip `bottom` px above the parent's bottom edge.
    pub const fn bottom_strip(bottom: f64) -> Self {
        Self {
            top: None,
            right: Some(0.0),
            bottom: Some(bottom),
            left: Some(0.0),
        }
    }
}

/// Solid border.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct Border {
    /// Stroke width in pixels.
    pub width: f64,
    /// Stroke color.
    pub color: Color,
}

/// Box layout mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Display {
    /// Block-level flex container.
    Flex,
    /// Inline flex container, sized to its content.
    InlineFlex,
    /// Grid container.
    Grid,
}

/// Main axis of a flex container.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// Left to right.
    Row,
    /// Top to bottom.
    Column,
}

/// Alignment along a flex axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Align {
    /// Leading edge.
    Start,
    /// Centered.
    Center,
    /// Trailing edge.
    End,
}

/// How a box is placed relative to its parent.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Position {
    /// In flow.
    Relative,
    /// Out of flow, placed by [`Inset`].
    Absolute,
}

/// Horizontal text alignment.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TextAlign {
    /// Flush left.
    Left,
    /// Centered.
    Center,
    /// Flush right.
    Right,
}

/// One step of a CSS-like transform list, applied left to right.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TransformOp {
    /// Offset in pixels.
    Translate(Vec2),
    /// Uniform scale about the box center.
    Scale(f64),
}

/// Ordered transform list. Empty means identity.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
#[serde(transparent)]
pub struct Transform(SmallVec<[TransformOp; 2]>);

impl Transform {
    /// Identity transform.
    pub fn identity() -> Self {
        Self::default()
    }

    /// Append a translation.
    pub fn translate(mut self, x: f64, y: f64) -> Self {
        self.0.push(TransformOp::Translate(Vec2::new(x, y)));
        self
    }

    /// Append a uniform scale.
    pub fn scale(mut self, s: f64) -> Self {
        self.0.push(TransformOp::Scale(s));
        self
    }

    /// Transform steps in application order.
    pub fn ops(&self) -> &[TransformOp] {
        &self.0
    }

    /// No steps.
    pub fn is_identity(&self) -> bool {
        self.0.is_empty()
    }

    /// Collapse to a matrix, scaling about `origin` (the box center in CSS).
    pub fn to_affine(&self, origin: Vec2) -> Affine {
        self.0.iter().fold(Affine::IDENTITY, |acc, op| {
            let step = match *op {
                TransformOp::Translate(v) => Affine::translate(v),
                TransformOp::Scale(s) => {
                    Affine::translate(origin) * Affine::scale(s) * Affine::translate(-origin)
                }
            };
            acc * step
        })
    }
}

fn is_false(v: &bool) -> bool {
    !*v
}

/// Declarative style attached to a [`crate::Node`].
///
/// Unset properties are omitted from serialized snapshots.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
pub struct Style {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) display: Option<Display>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) direction: Option<Direction>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) align_items: Option<Align>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) justify_content: Option<Align>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) gap: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) grid_columns: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) flex: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) padding: Option<Edges>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) margin: Option<Edges>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) width: Option<Length>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) height: Option<Length>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) min_width: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) max_width: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) position: Option<Position>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) inset: Option<Inset>,
    #[serde(skip_serializing_if = "is_false")]
    pub(crate) clip: bool,

    #[serde(skip_serializing_if = "SmallVec::is_empty")]
    pub(crate) background: SmallVec<[Paint; 1]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) background_size: Option<(Length, Length)>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) background_position: Option<(Length, Length)>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) border: Option<Border>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) border_radius: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) backdrop_blur: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) font_family: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) font_size: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) font_weight: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) color: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) text_fill: Option<Paint>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) text_align: Option<TextAlign>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) line_height: Option<f64>,
    #[serde(skip_serializing_if = "is_false")]
    pub(crate) nowrap: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) opacity: Option<f64>,
    #[serde(skip_serializing_if = "Transform::is_identity")]
    pub(crate) transform: Transform,
}

impl Style {
    /// Empty style.
    pub fn new() -> Self {
        Self::default()
    }

    /// No property set.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Flex column with centered content on both axes.
    pub fn column_center() -> Self {
        Self::new()
            .display(Display::Flex)
            .direction(Direction::Column)
            .align_items(Align::Center)
            .justify_content(Align::Center)
    }

    /// Flex row with vertically centered content.
    pub fn row_center() -> Self {
        Self::new()
            .display(Display::Flex)
            .direction(Direction::Row)
            .align_items(Align::Center)
    }

    /// Absolutely positioned, pinned to every edge of the parent.
    pub fn absolute_fill() -> Self {
        Self::new()
            .position(Position::Absolute)
            .inset(Inset::all(0.0))
    }

    /// Overlay the properties set in `other` on top of `self`.
    pub fn merge(mut self, other: Style) -> Self {
        macro_rules! take {
            ($($field:ident),* $(,)?) => {
                $(if other.$field.is_some() { self.$field = other.$field; })*
            };
        }
        take!(
            display,
            direction,
            align_items,
            justify_content,
            gap,
            grid_columns,
            flex,
            padding,
            margin,
            width,
            height,
            min_width,
            max_width,
            position,
            inset,
            background_size,
            background_position,
            border,
            border_radius,
            backdrop_blur,
            font_family,
            font_size,
            font_weight,
            color,
            text_fill,
            text_align,
            line_height,
            opacity,
        );
        if !other.background.is_empty() {
            self.background = other.background;
        }
        if !other.transform.is_identity() {
            self.transform = other.transform;
        }
        self.clip |= other.clip;
        self.nowrap |= other.nowrap;
        self
    }

    /// Layout mode.
    pub fn display(mut self, v: Display) -> Self {
        self.display = Some(v);
        self
    }

    /// Flex direction.
    pub fn direction(mut self, v: Direction) -> Self {
        self.direction = Some(v);
        self
    }

    /// Cross-axis alignment.
    pub fn align_items(mut self, v: Align) -> Self {
        self.align_items = Some(v);
        self
    }

    /// Main-axis alignment.
    pub fn justify_content(mut self, v: Align) -> Self {
        self.justify_content = Some(v);
        self
    }

    /// Gap between children.
    pub fn gap(mut self, px: f64) -> Self {
        self.gap = Some(px);
        self
    }

    /// Grid with `n` equal columns.
    pub fn grid_columns(mut self, n: u32) -> Self {
        self.display = Some(Display::Grid);
        self.grid_columns = Some(n);
        self
    }

    /// Flex grow factor.
    pub fn flex(mut self, grow: f64) -> Self {
        self.flex = Some(grow);
        self
    }

    /// Inner spacing.
    pub fn padding(mut self, v: Edges) -> Self {
        self.padding = Some(v);
        self
    }

    /// Outer spacing.
    pub fn margin(mut self, v: Edges) -> Self {
        self.margin = Some(v);
        self
    }

    /// Box width.
    pub fn width(mut self, v: Length) -> Self {
        self.width = Some(v);
        self
    }

    /// Box height.
    pub fn height(mut self, v: Length) -> Self {
        self.height = Some(v);
        self
    }

    /// Square box of `px` pixels.
    pub fn size(self, px: f64) -> Self {
        self.width(Length::Px(px)).height(Length::Px(px))
    }

    /// Lower width bound.
    pub fn min_width(mut self, px: f64) -> Self {
        self.min_width = Some(px);
        self
    }

    /// Upper width bound.
    pub fn max_width(mut self, px: f64) -> Self {
        self.max_width = Some(px);
        self
    }

    /// Positioning scheme.
    pub fn position(mut self, v: Position) -> Self {
        self.position = Some(v);
        self
    }

    /// Offsets from the parent edges for positioned boxes.
    pub fn inset(mut self, v: Inset) -> Self {
        self.inset = Some(v);
        self
    }

    /// Clip children to the box.
    pub fn clip(mut self) -> Self {
        self.clip = true;
        self
    }

    /// Add a background layer on top of existing ones.
    pub fn background(mut self, paint: Paint) -> Self {
        self.background.push(paint);
        self
    }

    /// Flat background color.
    pub fn background_color(self, color: Color) -> Self {
        self.background(Paint::solid(color))
    }

    /// Size of one background tile.
    pub fn background_size(mut self, w: Length, h: Length) -> Self {
        self.background_size = Some((w, h));
        self
    }

    /// Offset of the background tile, CSS `background-position`.
    pub fn background_position(mut self, x: Length, y: Length) -> Self {
        self.background_position = Some((x, y));
        self
    }

    /// Solid border.
    pub fn border(mut self, width: f64, color: Color) -> Self {
        self.border = Some(Border { width, color });
        self
    }

    /// Corner radius.
    pub fn radius(mut self, px: f64) -> Self {
        self.border_radius = Some(px);
        self
    }

    /// Blur of whatever is behind the box.
    pub fn backdrop_blur(mut self, px: f64) -> Self {
        self.backdrop_blur = Some(px);
        self
    }

    /// Font stack.
    pub fn font_family(mut self, family: impl Into<String>) -> Self {
        self.font_family = Some(family.into());
        self
    }

    /// Font size in pixels.
    pub fn font_size(mut self, px: f64) -> Self {
        self.font_size = Some(px);
        self
    }

    /// Numeric font weight.
    pub fn font_weight(mut self, w: u16) -> Self {
        self.font_weight = Some(w);
        self
    }

    /// Text color.
    pub fn color(mut self, c: Color) -> Self {
        self.color = Some(c);
        self
    }

    /// Paint glyphs with a gradient instead of a flat color.
    pub fn text_fill(mut self, paint: Paint) -> Self {
        self.text_fill = Some(paint);
        self
    }

    /// Horizontal text alignment.
    pub fn text_align(mut self, v: TextAlign) -> Self {
        self.text_align = Some(v);
        self
    }

    /// Line height multiplier.
    pub fn line_height(mut self, v: f64) -> Self {
        self.line_height = Some(v);
        self
    }

    /// Never wrap text.
    pub fn nowrap(mut self) -> Self {
        self.nowrap = true;
        self
    }

    /// Opacity in `[0, 1]`. Values are clamped.
    pub fn opacity(mut self, v: f64) -> Self {
        self.opacity = Some(v.clamp(0.0, 1.0));
        self
    }

    /// Replace the transform list.
    pub fn transform(mut self, t: Transform) -> Self {
        self.transform = t;
        self
    }

    /// Shorthand for a single vertical translation.
    pub fn translate_y(self, px: f64) -> Self {
        self.transform(Transform::identity().translate(0.0, px))
    }

    /// Shorthand for a single horizontal translation.
    pub fn translate_x(self, px: f64) -> Self {
        self.transform(Transform::identity().translate(px, 0.0))
    }

    /// Shorthand for a single uniform scale.
    pub fn scale(self, s: f64) -> Self {
        self.transform(Transform::identity().scale(s))
    }

    /// Current opacity, `1.0` when unset.
    pub fn opacity_value(&self) -> f64 {
        self.opacity.unwrap_or(1.0)
    }

    /// Current transform list.
    pub fn transform_value(&self) -> &Transform {
        &self.transform
    }

    /// Current background layers.
    pub fn background_layers(&self) -> &[Paint] {
        &self.background
    }

    /// Current text color.
    pub fn color_value(&self) -> Option<Color> {
        self.color
    }

    /// Current border.
    pub fn border_value(&self) -> Option<Border> {
        self.border
    }
}

#[cfg(test)]
#[path = "../../tests/unit/style/props.rs"]
mod tests;
