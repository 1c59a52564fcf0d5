use serde::{Serialize, Deserialize};

use crate::figure::color::Color;
use crate::figure::point::Point;

/// Marker area in pt² used when a scatter layer does not set one.
pub const DEFAULT_MARKER_AREA: f64 = 36.0;
/// Line width in pt used when a line layer does not set one.
pub const DEFAULT_LINE_WIDTH: f64 = 1.5;
/// Font size in pt used when a text label does not set one.
pub const DEFAULT_FONT_SIZE: f64 = 10.0;

/// Circular markers, one per point.
///
/// `marker_area` is in pt², so the marker radius is `sqrt(marker_area) / 2` pt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScatterLayer {
    pub points: Vec<Point>,
    pub color: Color,
    pub marker_area: f64,
    pub label: Option<String>,
}

impl ScatterLayer {
    pub fn new(points: Vec<Point>, color: Color) -> Self {
        ScatterLayer { points, color, marker_area: DEFAULT_MARKER_AREA, label: None }
    }

    pub fn with_area(mut self, marker_area: f64) -> Self {
        self.marker_area = marker_area;
        self
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }
}

/// A polyline through `points` in order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineLayer {
    pub points: Vec<Point>,
    pub color: Color,
    /// Stroke width in pt.
    pub width: f64,
    pub label: Option<String>,
}

impl LineLayer {
    pub fn new(points: Vec<Point>, color: Color) -> Self {
        LineLayer { points, color, width: DEFAULT_LINE_WIDTH, label: None }
    }

    pub fn with_width(mut self, width: f64) -> Self {
        self.width = width;
        self
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }
}

/// Vertical placement of a text label relative to its anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum VerticalAlign {
    Center,
    #[default]
    Baseline,
}

/// Left-aligned text anchored at a data position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextLabel {
    pub anchor: Point,
    pub content: String,
    /// Font size in pt.
    pub font_size: f64,
    pub color: Color,
    pub v_align: VerticalAlign,
}

impl TextLabel {
    pub fn new(anchor: Point, content: impl Into<String>) -> Self {
        TextLabel {
            anchor,
            content: content.into(),
            font_size: DEFAULT_FONT_SIZE,
            color: Color::default(),
            v_align: VerticalAlign::default(),
        }
    }

    pub fn with_size(mut self, font_size: f64) -> Self {
        self.font_size = font_size;
        self
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn centered(mut self) -> Self {
        self.v_align = VerticalAlign::Center;
        self
    }
}

/// One drawable item of a figure, painted in insertion order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Element {
    Scatter(ScatterLayer),
    Line(LineLayer),
    Text(TextLabel),
}

impl From<ScatterLayer> for Element {
    fn from(layer: ScatterLayer) -> Self {
        Element::Scatter(layer)
    }
}

impl From<LineLayer> for Element {
    fn from(layer: LineLayer) -> Self {
        Element::Line(layer)
    }
}

impl From<TextLabel> for Element {
    fn from(label: TextLabel) -> Self {
        Element::Text(label)
    }
}
