use serde::{Serialize, Deserialize};

use crate::figure::color::Color;
use crate::figure::element::Element;

/// Canvas size in inches plus the resolution used to turn pt into px.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FigureSize {
    pub width_in: f64,
    pub height_in: f64,
    pub dpi: f64,
}

impl FigureSize {
    pub fn new(width_in: f64, height_in: f64) -> Self {
        FigureSize { width_in, height_in, dpi: 100.0 }
    }

    pub fn width_px(&self) -> f64 {
        self.width_in * self.dpi
    }

    pub fn height_px(&self) -> f64 {
        self.height_in * self.dpi
    }

    /// Converts a length in points (1/72 in) to pixels.
    pub fn pt_to_px(&self, pt: f64) -> f64 {
        pt * self.dpi / 72.0
    }
}

impl Default for FigureSize {
    fn default() -> Self {
        FigureSize::new(10.0, 6.0)
    }
}

/// Axis decoration and limits for the single plot area of a figure.
///
/// `None` limits are derived from the data when rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Axes {
    pub x_label: Option<String>,
    pub y_label: Option<String>,
    pub x_limits: Option<(f64, f64)>,
    pub y_limits: Option<(f64, f64)>,
    pub grid: bool,
    /// When false, frame, ticks, tick labels and axis labels are not drawn.
    pub visible: bool,
    pub legend: bool,
}

impl Default for Axes {
    fn default() -> Self {
        Axes {
            x_label: None,
            y_label: None,
            x_limits: None,
            y_limits: None,
            grid: false,
            visible: true,
            legend: false,
        }
    }
}

/// Extent of a set of points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

/// Glyph drawn next to a legend label.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LegendGlyph {
    Marker { area: f64 },
    Line { width: f64 },
}

#[derive(Debug, Clone, PartialEq)]
pub struct LegendEntry {
    pub label: String,
    pub color: Color,
    pub glyph: LegendGlyph,
}

/// A backend-independent description of one chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Figure {
    pub title: String,
    pub size: FigureSize,
    pub axes: Axes,
    pub elements: Vec<Element>,
}

impl Figure {
    pub fn new(title: impl Into<String>, size: FigureSize) -> Self {
        Figure {
            title: title.into(),
            size,
            axes: Axes::default(),
            elements: Vec::new(),
        }
    }

    pub fn push(&mut self, element: impl Into<Element>) {
        self.elements.push(element.into());
    }

    /// Extent of all scatter and line points. Text labels do not count.
    ///
    /// Returns `None` when the figure has no such points.
    pub fn data_bounds(&self) -> Option<Bounds> {
        let mut points = self.elements.iter().flat_map(|e| match e {
            Element::Scatter(s) => s.points.as_slice(),
            Element::Line(l) => l.points.as_slice(),
            Element::Text(_) => &[][..],
        });

        let first = points.next()?;
        let init = Bounds { x_min: first.x, x_max: first.x, y_min: first.y, y_max: first.y };
        Some(points.fold(init, |b, p| Bounds {
            x_min: b.x_min.min(p.x),
            x_max: b.x_max.max(p.x),
            y_min: b.y_min.min(p.y),
            y_max: b.y_max.max(p.y),
        }))
    }

    /// Labeled scatter and line layers, in drawing order.
    pub fn legend_entries(&self) -> Vec<LegendEntry> {
        self.elements
            .iter()
            .filter_map(|e| match e {
                Element::Scatter(s) => s.label.as_ref().map(|label| LegendEntry {
                    label: label.clone(),
                    color: s.color,
                    glyph: LegendGlyph::Marker { area: s.marker_area },
                }),
                Element::Line(l) => l.label.as_ref().map(|label| LegendEntry {
                    label: label.clone(),
                    color: l.color,
                    glyph: LegendGlyph::Line { width: l.width },
                }),
                Element::Text(_) => None,
            })
            .collect()
    }
}
