use std::io::Read;
use std::path::Path;

use crate::foundation::error::{PromoError, PromoResult};
use crate::style::color::Color;
use crate::style::props::{Edges, Length, Paint, Style};

/// Brand colors shared by every composition.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Palette {
    /// Page background.
    pub background: Color,
    /// Second background tone used in the vertical wash.
    pub background_secondary: Color,
    /// Sky accent, first gradient stop.
    pub accent_sky: Color,
    /// Violet accent, second gradient stop.
    pub accent_violet: Color,
    /// Bright cyan used for the "after" gradient.
    pub ethereal_cyan: Color,
    /// Bright green used for the "after" gradient.
    pub ethereal_green: Color,
    /// Primary text.
    pub white: Color,
    /// Secondary text.
    pub gray_400: Color,
    /// Muted text.
    pub gray_500: Color,
    /// Problem-statement accent.
    pub danger: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: Color::rgb(0x03, 0x07, 0x12),
            background_secondary: Color::rgb(0x0c, 0x12, 0x22),
            accent_sky: Color::rgb(0x38, 0xbd, 0xf8),
            accent_violet: Color::rgb(0xa7, 0x8b, 0xfa),
            ethereal_cyan: Color::rgb(0x00, 0xd4, 0xff),
            ethereal_green: Color::rgb(0x00, 0xff, 0x88),
            white: Color::WHITE,
            gray_400: Color::rgb(0x9c, 0xa3, 0xaf),
            gray_500: Color::rgb(0x6b, 0x72, 0x80),
            danger: Color::rgb(0xef, 0x44, 0x44),
        }
    }
}

/// Palette plus typography, loaded once and shared read-only by every scene.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Theme {
    /// Brand colors.
    pub palette: Palette,
    /// CSS font stack for all text.
    pub font_family: String,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            palette: Palette::default(),
            font_family: "Inter, system-ui, sans-serif".to_owned(),
        }
    }
}

impl Theme {
    /// Parse a theme override from JSON. Missing keys keep their defaults.
    pub fn from_reader(reader: impl Read) -> PromoResult<Self> {
        let theme: Self =
            serde_json::from_reader(reader).map_err(|e| PromoError::serde(e.to_string()))?;
        theme.validate()?;
        Ok(theme)
    }

    /// Load a theme override from a JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> PromoResult<Self> {
        let path = path.as_ref();
        let file = std::fs::File::open(path).map_err(|e| {
            PromoError::validation(format!("failed to open theme '{}': {e}", path.display()))
        })?;
        Self::from_reader(std::io::BufReader::new(file))
    }

    /// Reject themes that cannot render text.
    pub fn validate(&self) -> PromoResult<()> {
        if self.font_family.trim().is_empty() {
            return Err(PromoError::validation("theme font_family must be non-empty"));
        }
        Ok(())
    }

    /// `135deg` sky to violet gradient used for headline text and stat values.
    pub fn brand_gradient(&self) -> Paint {
        Paint::linear(
            135.0,
            &[self.palette.accent_sky, self.palette.accent_violet],
        )
    }

    /// Brand gradient with both stops at `alpha`, for tinted card backgrounds.
    pub fn brand_tint(&self, alpha: f32) -> Paint {
        Paint::linear(
            135.0,
            &[
                self.palette.accent_sky.with_alpha(alpha),
                self.palette.accent_violet.with_alpha(alpha),
            ],
        )
    }

    /// `90deg` cyan to green and back, laid over a double-width tile so it can slide.
    pub fn cyan_gradient(&self) -> Paint {
        Paint::linear(
            90.0,
            &[
                self.palette.ethereal_cyan,
                self.palette.ethereal_green,
                self.palette.ethereal_cyan,
            ],
        )
    }

    /// Content column inside a scene: full size, centered, padded.
    pub fn content(&self, padding: f64) -> Style {
        Style::column_center()
            .width(Length::Percent(100.0))
            .height(Length::Percent(100.0))
            .padding(Edges::all(padding))
            .font_family(self.font_family.clone())
    }

    /// Base text style in the theme font.
    pub fn text(&self, size: f64, color: Color) -> Style {
        Style::new()
            .font_family(self.font_family.clone())
            .font_size(size)
            .color(color)
    }

    /// Text painted with the brand gradient.
    pub fn gradient_text(&self) -> Style {
        Style::new().text_fill(self.brand_gradient())
    }

    /// Text painted with the cyan gradient over a `200% x 100%` tile.
    pub fn gradient_text_cyan(&self) -> Style {
        Style::new()
            .text_fill(self.cyan_gradient())
            .background_size(Length::Percent(200.0), Length::Percent(100.0))
    }

    /// Glass card: 3% white fill, 20px backdrop blur, faint border.
    pub fn glass(&self) -> Style {
        Style::new()
            .background_color(Color::WHITE.with_alpha(0.03))
            .backdrop_blur(20.0)
            .border(1.0, Color::WHITE.with_alpha(0.08))
            .radius(16.0)
    }

    /// Primary button on a left-to-right sky to violet gradient.
    pub fn button(&self) -> Style {
        Style::new()
            .background(Paint::linear(
                90.0,
                &[self.palette.accent_sky, self.palette.accent_violet],
            ))
            .padding(Edges::symmetric(16.0, 32.0))
            .radius(12.0)
            .color(self.palette.white)
            .font_weight(600)
            .font_size(18.0)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/style/theme.rs"]
mod tests;
