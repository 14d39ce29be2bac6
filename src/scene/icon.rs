use std::fmt::Write as _;
use std::str::FromStr;

use kurbo::{BezPath, Circle, Ellipse, PathEl, Point, Rect, RoundedRect, Shape};

use crate::foundation::error::{PromoError, PromoResult};
use crate::style::color::Color;
use crate::style::props::Paint;

/// Side of the square view box every icon is drawn in.
pub const ICON_VIEW_BOX: f64 = 24.0;

const CURVE_TOLERANCE: f64 = 0.05;

/// Line-art icon vocabulary used across the compositions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IconName {
    /// Stacked sheets.
    Layers,
    /// Cross in a circle.
    XCircle,
    /// Right-pointing arrow.
    ArrowRight,
    /// Play triangle.
    Play,
    /// Magnifying glass.
    Search,
    /// Brain outline.
    Brain,
    /// Processor chip.
    Cpu,
    /// Four-point sparkles.
    Sparkles,
    /// Check mark.
    Check,
    /// Scan frame corners.
    Scan,
    /// Camera body and lens.
    Camera,
    /// Translation glyphs.
    Languages,
    /// Stacked cylinder.
    Database,
    /// Two people.
    Users,
}

impl IconName {
    /// Every icon, in declaration order.
    pub const ALL: [IconName; 14] = [
        IconName::Layers,
        IconName::XCircle,
        IconName::ArrowRight,
        IconName::Play,
        IconName::Search,
        IconName::Brain,
        IconName::Cpu,
        IconName::Sparkles,
        IconName::Check,
        IconName::Scan,
        IconName::Camera,
        IconName::Languages,
        IconName::Database,
        IconName::Users,
    ];

    /// Stable token, e.g. `"x_circle"`.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Layers => "layers",
            Self::XCircle => "x_circle",
            Self::ArrowRight => "arrow_right",
            Self::Play => "play",
            Self::Search => "search",
            Self::Brain => "brain",
            Self::Cpu => "cpu",
            Self::Sparkles => "sparkles",
            Self::Check => "check",
            Self::Scan => "scan",
            Self::Camera => "camera",
            Self::Languages => "languages",
            Self::Database => "database",
            Self::Users => "users",
        }
    }

    /// Vector definition in a 24x24 view box.
    pub fn definition(self) -> &'static IconDef {
        match self {
            Self::Layers => &LAYERS,
            Self::XCircle => &X_CIRCLE,
            Self::ArrowRight => &ARROW_RIGHT,
            Self::Play => &PLAY,
            Self::Search => &SEARCH,
            Self::Brain => &BRAIN,
            Self::Cpu => &CPU,
            Self::Sparkles => &SPARKLES,
            Self::Check => &CHECK,
            Self::Scan => &SCAN,
            Self::Camera => &CAMERA,
            Self::Languages => &LANGUAGES,
            Self::Database => &DATABASE,
            Self::Users => &USERS,
        }
    }
}

impl FromStr for IconName {
    type Err = PromoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim().to_ascii_lowercase().replace('-', "_");
        Self::ALL
            .into_iter()
            .find(|name| name.as_str() == token)
            .ok_or_else(|| PromoError::validation(format!("unknown icon '{s}'")))
    }
}

/// One drawing primitive of an icon, in view box units.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum IconPrimitive {
    /// SVG path data.
    Path(&'static str),
    /// Circle centered at `(cx, cy)`.
    Circle {
        /// Center x.
        cx: f64,
        /// Center y.
        cy: f64,
        /// Radius.
        r: f64,
    },
    /// Axis-aligned rectangle with rounded corners.
    Rect {
        /// Left edge.
        x: f64,
        /// Top edge.
        y: f64,
        /// Width.
        width: f64,
        /// Height.
        height: f64,
        /// Corner radius.
        rx: f64,
    },
    /// Axis-aligned ellipse centered at `(cx, cy)`.
    Ellipse {
        /// Center x.
        cx: f64,
        /// Center y.
        cy: f64,
        /// Horizontal radius.
        rx: f64,
        /// Vertical radius.
        ry: f64,
    },
    /// Closed point list.
    Polygon(&'static [(f64, f64)]),
    /// Open point list.
    Polyline(&'static [(f64, f64)]),
}

impl IconPrimitive {
    fn append_to(&self, out: &mut BezPath) -> PromoResult<()> {
        match *self {
            Self::Path(d) => {
                let path = BezPath::from_svg(d)
                    .map_err(|e| PromoError::validation(format!("invalid icon path '{d}': {e}")))?;
                out.extend(path.elements().iter().copied());
            }
            Self::Circle { cx, cy, r } => {
                out.extend(Circle::new((cx, cy), r).path_elements(CURVE_TOLERANCE));
            }
            Self::Rect {
                x,
                y,
                width,
                height,
                rx,
            } => {
                let rect = Rect::new(x, y, x + width, y + height);
                out.extend(RoundedRect::from_rect(rect, rx).path_elements(CURVE_TOLERANCE));
            }
            Self::Ellipse { cx, cy, rx, ry } => {
                out.extend(Ellipse::new((cx, cy), (rx, ry), 0.0).path_elements(CURVE_TOLERANCE));
            }
            Self::Polygon(points) | Self::Polyline(points) => {
                let mut it = points.iter().map(|&(x, y)| Point::new(x, y));
                if let Some(first) = it.next() {
                    out.push(PathEl::MoveTo(first));
                    for p in it {
                        out.push(PathEl::LineTo(p));
                    }
                    if matches!(self, Self::Polygon(_)) {
                        out.push(PathEl::ClosePath);
                    }
                }
            }
        }
        Ok(())
    }

    fn write_svg(&self, out: &mut String) {
        fn points_attr(points: &[(f64, f64)]) -> String {
            points
                .iter()
                .map(|(x, y)| format!("{x} {y}"))
                .collect::<Vec<_>>()
                .join(" ")
        }

        // Writing into a String cannot fail.
        let _ = match *self {
            Self::Path(d) => write!(out, r#"<path d="{d}"/>"#),
            Self::Circle { cx, cy, r } => write!(out, r#"<circle cx="{cx}" cy="{cy}" r="{r}"/>"#),
            Self::Rect {
                x,
                y,
                width,
                height,
                rx,
            } => write!(
                out,
                r#"<rect x="{x}" y="{y}" width="{width}" height="{height}" rx="{rx}"/>"#
            ),
            Self::Ellipse { cx, cy, rx, ry } => write!(
                out,
                r#"<ellipse cx="{cx}" cy="{cy}" rx="{rx}" ry="{ry}"/>"#
            ),
            Self::Polygon(points) => {
                write!(out, r#"<polygon points="{}"/>"#, points_attr(points))
            }
            Self::Polyline(points) => {
                write!(out, r#"<polyline points="{}"/>"#, points_attr(points))
            }
        };
    }
}

/// Static vector definition of an icon.
#[derive(Debug, PartialEq)]
pub struct IconDef {
    primitives: &'static [IconPrimitive],
}

impl IconDef {
    /// Drawing primitives in paint order.
    pub fn primitives(&self) -> &'static [IconPrimitive] {
        self.primitives
    }

    /// All primitives flattened into one kurbo path.
    pub fn outline(&self) -> PromoResult<BezPath> {
        let mut path = BezPath::new();
        for prim in self.primitives {
            prim.append_to(&mut path)?;
        }
        Ok(path)
    }

    /// Geometric bounds of the outline, ignoring stroke width.
    pub fn bounds(&self) -> PromoResult<Rect> {
        Ok(self.outline()?.bounding_box())
    }

    /// Standalone stroked SVG markup at `size` pixels.
    pub fn to_svg(&self, stroke: Color, stroke_width: f64, size: f64) -> String {
        let mut out = format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{size}" height="{size}" viewBox="0 0 {vb} {vb}" fill="none" stroke="{stroke}" stroke-width="{stroke_width}" stroke-linecap="round" stroke-linejoin="round">"#,
            vb = ICON_VIEW_BOX,
        );
        for prim in self.primitives {
            prim.write_svg(&mut out);
        }
        out.push_str("</svg>");
        out
    }
}

/// An icon placed in the visual tree.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct IconRef {
    /// Which icon.
    pub name: IconName,
    /// Rendered edge length in pixels.
    pub size: f64,
    /// Stroke paint (flat or gradient).
    pub stroke: Paint,
    /// Stroke width in view box units.
    pub stroke_width: f64,
}

impl IconRef {
    /// Icon stroked with a flat color at width 2.
    pub fn new(name: IconName, size: f64, stroke: Color) -> Self {
        Self {
            name,
            size,
            stroke: Paint::solid(stroke),
            stroke_width: 2.0,
        }
    }

    /// Override the stroke paint.
    pub fn stroke(mut self, paint: Paint) -> Self {
        self.stroke = paint;
        self
    }

    /// Override the stroke width.
    pub fn stroke_width(mut self, w: f64) -> Self {
        self.stroke_width = w;
        self
    }
}

static LAYERS: IconDef = IconDef {
    primitives: &[IconPrimitive::Path(
        "M 12 2 L 2 7 l 10 5 l 10 -5 l -10 -5 z M 2 17 l 10 5 l 10 -5 M 2 12 l 10 5 l 10 -5",
    )],
};

static X_CIRCLE: IconDef = IconDef {
    primitives: &[
        IconPrimitive::Circle {
            cx: 12.0,
            cy: 12.0,
            r: 10.0,
        },
        IconPrimitive::Path("M 15 9 l -6 6 M 9 9 l 6 6"),
    ],
};

static ARROW_RIGHT: IconDef = IconDef {
    primitives: &[IconPrimitive::Path("M 5 12 L 19 12 M 12 5 l 7 7 l -7 7")],
};

static PLAY: IconDef = IconDef {
    primitives: &[IconPrimitive::Polygon(&[
        (5.0, 3.0),
        (19.0, 12.0),
        (5.0, 21.0),
        (5.0, 3.0),
    ])],
};

static SEARCH: IconDef = IconDef {
    primitives: &[
        IconPrimitive::Circle {
            cx: 11.0,
            cy: 11.0,
            r: 8.0,
        },
        IconPrimitive::Path("M 21 21 l -4.3 -4.3"),
    ],
};

static BRAIN: IconDef = IconDef {
    primitives: &[
        IconPrimitive::Path(
            "M 9.5 2 A 2.5 2.5 0 0 1 12 4.5 l 0 15 a 2.5 2.5 0 0 1 -4.96 0.44 \
             a 2.5 2.5 0 0 1 -2.96 -3.08 a 3 3 0 0 1 -0.34 -5.58 \
             a 2.5 2.5 0 0 1 1.32 -4.24 a 2.5 2.5 0 0 1 4.44 -1.54",
        ),
        IconPrimitive::Path(
            "M 14.5 2 A 2.5 2.5 0 0 0 12 4.5 l 0 15 a 2.5 2.5 0 0 0 4.96 0.44 \
             a 2.5 2.5 0 0 0 2.96 -3.08 a 3 3 0 0 0 0.34 -5.58 \
             a 2.5 2.5 0 0 0 -1.32 -4.24 a 2.5 2.5 0 0 0 -4.44 -1.54",
        ),
    ],
};

static CPU: IconDef = IconDef {
    primitives: &[
        IconPrimitive::Rect {
            x: 4.0,
            y: 4.0,
            width: 16.0,
            height: 16.0,
            rx: 2.0,
        },
        IconPrimitive::Rect {
            x: 9.0,
            y: 9.0,
            width: 6.0,
            height: 6.0,
            rx: 0.0,
        },
        IconPrimitive::Path(
            "M 15 2 L 15 4 M 15 20 L 15 22 M 2 15 L 4 15 M 2 9 L 4 9 \
             M 20 15 L 22 15 M 20 9 L 22 9 M 9 2 L 9 4 M 9 20 L 9 22",
        ),
    ],
};

static SPARKLES: IconDef = IconDef {
    primitives: &[
        IconPrimitive::Path(
            "M 12 3 l -1.912 5.813 a 2 2 0 0 1 -1.275 1.275 L 3 12 \
             l 5.813 1.912 a 2 2 0 0 1 1.275 1.275 L 12 21 \
             l 1.912 -5.813 a 2 2 0 0 1 1.275 -1.275 L 21 12 \
             l -5.813 -1.912 a 2 2 0 0 1 -1.275 -1.275 L 12 3 Z",
        ),
        IconPrimitive::Path("M 5 3 L 5 7 M 3 5 L 7 5 M 19 17 L 19 21 M 17 19 L 21 19"),
    ],
};

static CHECK: IconDef = IconDef {
    primitives: &[IconPrimitive::Polyline(&[
        (20.0, 6.0),
        (9.0, 17.0),
        (4.0, 12.0),
    ])],
};

static SCAN: IconDef = IconDef {
    primitives: &[
        IconPrimitive::Path(
            "M 3 7 L 3 5 a 2 2 0 0 1 2 -2 l 2 0 M 17 3 l 2 0 a 2 2 0 0 1 2 2 l 0 2 \
             M 21 17 l 0 2 a 2 2 0 0 1 -2 2 l -2 0 M 7 21 L 5 21 a 2 2 0 0 1 -2 -2 l 0 -2",
        ),
        IconPrimitive::Rect {
            x: 7.0,
            y: 7.0,
            width: 10.0,
            height: 10.0,
            rx: 1.0,
        },
    ],
};

static CAMERA: IconDef = IconDef {
    primitives: &[
        IconPrimitive::Path(
            "M 14.5 4 l -5 0 L 7 7 L 4 7 a 2 2 0 0 0 -2 2 l 0 9 a 2 2 0 0 0 2 2 l 16 0 \
             a 2 2 0 0 0 2 -2 L 22 9 a 2 2 0 0 0 -2 -2 l -3 0 l -2.5 -3 z",
        ),
        IconPrimitive::Circle {
            cx: 12.0,
            cy: 13.0,
            r: 3.0,
        },
    ],
};

static LANGUAGES: IconDef = IconDef {
    primitives: &[IconPrimitive::Path(
        "M 5 8 l 6 6 M 4 14 l 6 -6 l 2 -3 M 2 5 l 12 0 M 7 2 l 1 0 \
         M 22 22 l -5 -10 l -5 10 M 14 18 l 6 0",
    )],
};

static DATABASE: IconDef = IconDef {
    primitives: &[
        IconPrimitive::Ellipse {
            cx: 12.0,
            cy: 5.0,
            rx: 9.0,
            ry: 3.0,
        },
        IconPrimitive::Path("M 3 5 L 3 19 A 9 3 0 0 0 21 19 L 21 5"),
        IconPrimitive::Path("M 3 12 A 9 3 0 0 0 21 12"),
    ],
};

static USERS: IconDef = IconDef {
    primitives: &[
        IconPrimitive::Path("M 16 21 l 0 -2 a 4 4 0 0 0 -4 -4 L 6 15 a 4 4 0 0 0 -4 4 l 0 2"),
        IconPrimitive::Circle {
            cx: 9.0,
            cy: 7.0,
            r: 4.0,
        },
        IconPrimitive::Path("M 22 21 l 0 -2 a 4 4 0 0 0 -3 -3.87 M 16 3.13 a 4 4 0 0 1 0 7.75"),
    ],
};

#[cfg(test)]
#[path = "../../tests/unit/scene/icon.rs"]
mod tests;
