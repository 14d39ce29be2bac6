//! Static backdrop layers shared by every scene.

use crate::foundation::core::Vec2;
use crate::scene::node::Node;
use crate::style::color::Color;
use crate::style::props::{ColorStop, Length, Paint, Style};
use crate::style::theme::Theme;

/// Three soft radial glows (sky top-left, violet bottom-right, cyan center) at 30% opacity.
pub fn vector_background(theme: &Theme) -> Node {
    let p = &theme.palette;
    // `#rrggbb15` and `#rrggbb10` suffixes.
    let style = Style::absolute_fill()
        .opacity(0.3)
        .background(Paint::radial_wash(
            Vec2::new(20.0, 20.0),
            p.accent_sky.with_alpha_byte(0x15),
            0.5,
        ))
        .background(Paint::radial_wash(
            Vec2::new(80.0, 80.0),
            p.accent_violet.with_alpha_byte(0x15),
            0.5,
        ))
        .background(Paint::radial_wash(
            Vec2::new(50.0, 50.0),
            p.ethereal_cyan.with_alpha_byte(0x10),
            0.7,
        ));
    Node::boxed().with_style(style)
}

/// 60px grid of 1px faint white lines.
pub fn grid_pattern() -> Node {
    let line = Color::WHITE.with_alpha(0.03);
    let stops = || {
        vec![
            ColorStop {
                color: line,
                offset: 0.0,
            },
            ColorStop {
                color: line,
                offset: GRID_LINE_PX / GRID_TILE_PX,
            },
            ColorStop {
                color: Color::TRANSPARENT,
                offset: GRID_LINE_PX / GRID_TILE_PX,
            },
        ]
    };
    let style = Style::absolute_fill()
        .background(Paint::bands(180.0, stops()))
        .background(Paint::bands(90.0, stops()))
        .background_size(Length::Px(GRID_TILE_PX), Length::Px(GRID_TILE_PX));
    Node::boxed().with_style(style)
}

const GRID_TILE_PX: f64 = 60.0;
const GRID_LINE_PX: f64 = 1.0;

/// Solid page background with the vector glow and, optionally, the grid on top.
pub fn backdrop(theme: &Theme, with_grid: bool) -> Node {
    Node::fill()
        .with_style(Style::new().background_color(theme.palette.background))
        .child(vector_background(theme))
        .child_if(with_grid, grid_pattern)
}

#[cfg(test)]
#[path = "../../tests/unit/scene/background.rs"]
mod tests;
