//! SVG backend.
//!
//! Lays a `Figure` out on a fixed plot area (matplotlib's default subplot
//! fractions), maps data coordinates to pixels and emits one standalone
//! `<svg>` document. Scatter and line layers are clipped to the plot area;
//! text labels are not.

use crate::figure::{
    Axes, Element, Figure, FigureSize, LegendGlyph, LineLayer, Point, ScatterLayer, TextLabel,
    VerticalAlign,
};
use crate::render::ticks::{format_tick, nice_step, nice_ticks, DEFAULT_TICK_TARGET};

// Plot area as fractions of the canvas, measured from the left / bottom.
const AREA_LEFT: f64 = 0.125;
const AREA_RIGHT: f64 = 0.9;
const AREA_BOTTOM: f64 = 0.11;
const AREA_TOP: f64 = 0.88;

/// Fraction of the data extent added on each side when limits are automatic.
const AUTO_MARGIN: f64 = 0.05;

// Sizes in pt.
const TITLE_SIZE: f64 = 12.0;
const LABEL_SIZE: f64 = 10.0;
const TICK_LENGTH: f64 = 3.5;
const TICK_PAD: f64 = 3.5;
const LEGEND_PAD: f64 = 5.0;
const LEGEND_GLYPH: f64 = 20.0;

const FONT_FAMILY: &str = "DejaVu Sans, Arial, sans-serif";
const GRID_COLOR: &str = "#b0b0b0";
const FRAME_COLOR: &str = "#000000";
const LEGEND_EDGE: &str = "#cccccc";
const CLIP_ID: &str = "plot-area";

/// Pixel rectangle of the plot area together with the data limits it shows.
struct PlotArea {
    left: f64,
    right: f64,
    top: f64,
    bottom: f64,
    x_limits: (f64, f64),
    y_limits: (f64, f64),
}

impl PlotArea {
    fn new(figure: &Figure) -> PlotArea {
        let w = figure.size.width_px();
        let h = figure.size.height_px();
        let (x_limits, y_limits) = resolve_limits(figure);
        PlotArea {
            left: w * AREA_LEFT,
            right: w * AREA_RIGHT,
            top: h * (1.0 - AREA_TOP),
            bottom: h * (1.0 - AREA_BOTTOM),
            x_limits,
            y_limits,
        }
    }

    fn px(&self, p: Point) -> (f64, f64) {
        let (x0, x1) = self.x_limits;
        let (y0, y1) = self.y_limits;
        let x = self.left + (p.x - x0) / (x1 - x0) * (self.right - self.left);
        let y = self.top + (y1 - p.y) / (y1 - y0) * (self.bottom - self.top);
        (x, y)
    }

    fn width(&self) -> f64 {
        self.right - self.left
    }

    fn height(&self) -> f64 {
        self.bottom - self.top
    }
}

/// Limits actually shown: explicit ones when set, otherwise the data extent
/// widened by `AUTO_MARGIN` on each side.
fn resolve_limits(figure: &Figure) -> ((f64, f64), (f64, f64)) {
    let bounds = figure.data_bounds();
    let auto_x = bounds.map(|b| with_margin(b.x_min, b.x_max)).unwrap_or((0.0, 1.0));
    let auto_y = bounds.map(|b| with_margin(b.y_min, b.y_max)).unwrap_or((0.0, 1.0));
    (
        non_degenerate(figure.axes.x_limits.unwrap_or(auto_x)),
        non_degenerate(figure.axes.y_limits.unwrap_or(auto_y)),
    )
}

fn with_margin(min: f64, max: f64) -> (f64, f64) {
    let pad = (max - min) * AUTO_MARGIN;
    (min - pad, max + pad)
}

fn non_degenerate((lo, hi): (f64, f64)) -> (f64, f64) {
    if hi > lo {
        (lo, hi)
    } else {
        (lo - 0.5, lo + 0.5)
    }
}

/// Renders `figure` as a standalone SVG document.
pub fn to_svg(figure: &Figure) -> String {
    let size = &figure.size;
    let area = PlotArea::new(figure);
    let mut svg = String::new();

    svg.push_str(&format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w:.0}\" height=\"{h:.0}\" \
         viewBox=\"0 0 {w:.0} {h:.0}\" font-family=\"{font}\">\n",
        w = size.width_px(),
        h = size.height_px(),
        font = FONT_FAMILY,
    ));
    svg.push_str(&format!(
        "<rect width=\"{:.0}\" height=\"{:.0}\" fill=\"#ffffff\"/>\n",
        size.width_px(),
        size.height_px()
    ));
    svg.push_str(&format!(
        "<defs><clipPath id=\"{}\"><rect x=\"{:.2}\" y=\"{:.2}\" width=\"{:.2}\" height=\"{:.2}\"/></clipPath></defs>\n",
        CLIP_ID,
        area.left,
        area.top,
        area.width(),
        area.height()
    ));

    if figure.axes.visible && figure.axes.grid {
        svg.push_str(&grid(&area, size));
    }

    svg.push_str(&format!("<g clip-path=\"url(#{})\">\n", CLIP_ID));
    for element in &figure.elements {
        match element {
            Element::Scatter(layer) => svg.push_str(&scatter(layer, &area, size)),
            Element::Line(layer) => svg.push_str(&polyline(layer, &area, size)),
            Element::Text(_) => {}
        }
    }
    svg.push_str("</g>\n");

    for element in &figure.elements {
        if let Element::Text(label) = element {
            svg.push_str(&text(label, &area, size));
        }
    }

    if figure.axes.visible {
        svg.push_str(&frame_and_ticks(&figure.axes, &area, size));
    }

    if !figure.title.is_empty() {
        svg.push_str(&format!(
            "<text x=\"{:.2}\" y=\"{:.2}\" text-anchor=\"middle\" font-size=\"{:.2}\">{}</text>\n",
            (area.left + area.right) / 2.0,
            area.top - size.pt_to_px(6.0),
            size.pt_to_px(TITLE_SIZE),
            escape(&figure.title)
        ));
    }

    if figure.axes.legend {
        svg.push_str(&legend(figure, &area));
    }

    svg.push_str("</svg>\n");
    svg
}

fn scatter(layer: &ScatterLayer, area: &PlotArea, size: &FigureSize) -> String {
    let r = size.pt_to_px(layer.marker_area.max(0.0).sqrt() / 2.0);
    let fill = layer.color.hex();
    layer
        .points
        .iter()
        .map(|&p| {
            let (x, y) = area.px(p);
            format!("<circle cx=\"{:.2}\" cy=\"{:.2}\" r=\"{:.2}\" fill=\"{}\"/>\n", x, y, r, fill)
        })
        .collect()
}

fn polyline(layer: &LineLayer, area: &PlotArea, size: &FigureSize) -> String {
    if layer.points.len() < 2 {
        return String::new();
    }
    let points: Vec<String> = layer
        .points
        .iter()
        .map(|&p| {
            let (x, y) = area.px(p);
            format!("{:.2},{:.2}", x, y)
        })
        .collect();
    format!(
        "<polyline points=\"{}\" fill=\"none\" stroke=\"{}\" stroke-width=\"{:.2}\" stroke-linecap=\"square\"/>\n",
        points.join(" "),
        layer.color.hex(),
        size.pt_to_px(layer.width)
    )
}

fn text(label: &TextLabel, area: &PlotArea, size: &FigureSize) -> String {
    let (x, y) = area.px(label.anchor);
    let baseline = match label.v_align {
        VerticalAlign::Center => "central",
        VerticalAlign::Baseline => "alphabetic",
    };
    format!(
        "<text x=\"{:.2}\" y=\"{:.2}\" fill=\"{}\" font-size=\"{:.2}\" dominant-baseline=\"{}\">{}</text>\n",
        x,
        y,
        label.color.hex(),
        size.pt_to_px(label.font_size),
        baseline,
        escape(&label.content)
    )
}

fn grid(area: &PlotArea, size: &FigureSize) -> String {
    let stroke = size.pt_to_px(0.8);
    let (x0, x1) = area.x_limits;
    let (y0, y1) = area.y_limits;
    let vertical = nice_ticks(x0, x1, DEFAULT_TICK_TARGET).into_iter().map(|t| {
        let (x, _) = area.px(Point::new(t, y0));
        format!(
            "<line x1=\"{:.2}\" y1=\"{:.2}\" x2=\"{:.2}\" y2=\"{:.2}\" stroke=\"{}\" stroke-width=\"{:.2}\"/>\n",
            x, area.top, x, area.bottom, GRID_COLOR, stroke
        )
    });
    let horizontal = nice_ticks(y0, y1, DEFAULT_TICK_TARGET).into_iter().map(|t| {
        let (_, y) = area.px(Point::new(x0, t));
        format!(
            "<line x1=\"{:.2}\" y1=\"{:.2}\" x2=\"{:.2}\" y2=\"{:.2}\" stroke=\"{}\" stroke-width=\"{:.2}\"/>\n",
            area.left, y, area.right, y, GRID_COLOR, stroke
        )
    });
    vertical.chain(horizontal).collect()
}

fn frame_and_ticks(axes: &Axes, area: &PlotArea, size: &FigureSize) -> String {
    let mut out = String::new();
    let font_px = size.pt_to_px(LABEL_SIZE);
    let tick_len = size.pt_to_px(TICK_LENGTH);
    let pad = size.pt_to_px(TICK_PAD);
    let (x0, x1) = area.x_limits;
    let (y0, y1) = area.y_limits;

    out.push_str(&format!(
        "<rect x=\"{:.2}\" y=\"{:.2}\" width=\"{:.2}\" height=\"{:.2}\" fill=\"none\" stroke=\"{}\" stroke-width=\"{:.2}\"/>\n",
        area.left,
        area.top,
        area.width(),
        area.height(),
        FRAME_COLOR,
        size.pt_to_px(0.8)
    ));

    let x_step = nice_step(x0, x1, DEFAULT_TICK_TARGET);
    for t in nice_ticks(x0, x1, DEFAULT_TICK_TARGET) {
        let (x, _) = area.px(Point::new(t, y0));
        out.push_str(&format!(
            "<line x1=\"{:.2}\" y1=\"{:.2}\" x2=\"{:.2}\" y2=\"{:.2}\" stroke=\"{}\"/>\n\
             <text class=\"tick\" x=\"{:.2}\" y=\"{:.2}\" text-anchor=\"middle\" dominant-baseline=\"hanging\" font-size=\"{:.2}\">{}</text>\n",
            x, area.bottom, x, area.bottom + tick_len, FRAME_COLOR,
            x, area.bottom + tick_len + pad, font_px, format_tick(t, x_step)
        ));
    }

    let y_step = nice_step(y0, y1, DEFAULT_TICK_TARGET);
    let mut widest_label = 0usize;
    for t in nice_ticks(y0, y1, DEFAULT_TICK_TARGET) {
        let (_, y) = area.px(Point::new(x0, t));
        let label = format_tick(t, y_step);
        widest_label = widest_label.max(label.chars().count());
        out.push_str(&format!(
            "<line x1=\"{:.2}\" y1=\"{:.2}\" x2=\"{:.2}\" y2=\"{:.2}\" stroke=\"{}\"/>\n\
             <text class=\"tick\" x=\"{:.2}\" y=\"{:.2}\" text-anchor=\"end\" dominant-baseline=\"central\" font-size=\"{:.2}\">{}</text>\n",
            area.left - tick_len, y, area.left, y, FRAME_COLOR,
            area.left - tick_len - pad, y, font_px, label
        ));
    }

    if let Some(label) = &axes.x_label {
        out.push_str(&format!(
            "<text x=\"{:.2}\" y=\"{:.2}\" text-anchor=\"middle\" dominant-baseline=\"hanging\" font-size=\"{:.2}\">{}</text>\n",
            (area.left + area.right) / 2.0,
            area.bottom + tick_len + 2.0 * pad + font_px,
            font_px,
            escape(label)
        ));
    }

    if let Some(label) = &axes.y_label {
        let x = area.left - tick_len - 2.0 * pad - estimate_width(widest_label, font_px);
        let y = (area.top + area.bottom) / 2.0;
        out.push_str(&format!(
            "<text x=\"{x:.2}\" y=\"{y:.2}\" text-anchor=\"middle\" font-size=\"{:.2}\" transform=\"rotate(-90 {x:.2} {y:.2})\">{}</text>\n",
            font_px,
            escape(label),
            x = x,
            y = y
        ));
    }

    out
}

fn legend(figure: &Figure, area: &PlotArea) -> String {
    let entries = figure.legend_entries();
    if entries.is_empty() {
        return String::new();
    }

    let size = &figure.size;
    let font_px = size.pt_to_px(LABEL_SIZE);
    let pad = size.pt_to_px(LEGEND_PAD);
    let glyph_w = size.pt_to_px(LEGEND_GLYPH);
    let row_h = font_px * 1.5;
    let widest = entries.iter().map(|e| e.label.chars().count()).max().unwrap_or(0);

    let x0 = area.left + pad;
    let y0 = area.top + pad;
    let box_w = pad * 3.0 + glyph_w + estimate_width(widest, font_px);
    let box_h = pad * 2.0 + row_h * entries.len() as f64;

    let mut out = format!(
        "<g class=\"legend\">\n<rect x=\"{:.2}\" y=\"{:.2}\" width=\"{:.2}\" height=\"{:.2}\" rx=\"3\" \
         fill=\"#ffffff\" fill-opacity=\"0.8\" stroke=\"{}\"/>\n",
        x0, y0, box_w, box_h, LEGEND_EDGE
    );

    for (i, entry) in entries.iter().enumerate() {
        let cy = y0 + pad + row_h * (i as f64 + 0.5);
        let gx = x0 + pad;
        match entry.glyph {
            LegendGlyph::Marker { area: marker_area } => out.push_str(&format!(
                "<circle cx=\"{:.2}\" cy=\"{:.2}\" r=\"{:.2}\" fill=\"{}\"/>\n",
                gx + glyph_w / 2.0,
                cy,
                size.pt_to_px(marker_area.max(0.0).sqrt() / 2.0),
                entry.color.hex()
            )),
            LegendGlyph::Line { width } => out.push_str(&format!(
                "<line x1=\"{:.2}\" y1=\"{:.2}\" x2=\"{:.2}\" y2=\"{:.2}\" stroke=\"{}\" stroke-width=\"{:.2}\"/>\n",
                gx,
                cy,
                gx + glyph_w,
                cy,
                entry.color.hex(),
                size.pt_to_px(width)
            )),
        }
        out.push_str(&format!(
            "<text x=\"{:.2}\" y=\"{:.2}\" dominant-baseline=\"central\" font-size=\"{:.2}\">{}</text>\n",
            gx + glyph_w + pad,
            cy,
            font_px,
            escape(&entry.label)
        ));
    }

    out.push_str("</g>\n");
    out
}

/// Rough rendered width of `chars` characters; there is no font metrics table.
fn estimate_width(chars: usize, font_px: f64) -> f64 {
    chars as f64 * font_px * 0.6
}

/// Escapes the five XML special characters.
pub fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            c => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::figure::{Color, FigureSize};

    fn dots(points: &[(f64, f64)]) -> Figure {
        let mut fig = Figure::new("dots", FigureSize::default());
        fig.push(ScatterLayer::new(points.iter().map(|&p| p.into()).collect(), Color::Blue));
        fig
    }

    #[test]
    fn one_circle_per_point() {
        let svg = to_svg(&dots(&[(0.0, 0.0), (1.0, 1.0), (2.0, 4.0)]));
        assert_eq!(svg.matches("<circle").count(), 3);
        assert!(svg.starts_with("<svg"));
        assert!(svg.trim_end().ends_with("</svg>"));
    }

    #[test]
    fn explicit_limits_map_corners_to_plot_area() {
        let mut fig = dots(&[]);
        fig.axes.x_limits = Some((0.0, 6.0));
        fig.axes.y_limits = Some((0.0, 30.0));
        let area = PlotArea::new(&fig);
        let close = |(ax, ay): (f64, f64), (bx, by): (f64, f64)| {
            (ax - bx).abs() < 1e-9 && (ay - by).abs() < 1e-9
        };

        assert!(close(area.px(Point::new(0.0, 0.0)), (area.left, area.bottom)));
        assert!(close(area.px(Point::new(6.0, 30.0)), (area.right, area.top)));
    }

    #[test]
    fn auto_limits_pad_the_data_extent() {
        let fig = dots(&[(0.0, 4.0), (2.0, 10.0)]);
        let ((x0, x1), (y0, y1)) = resolve_limits(&fig);
        assert!((x0 + 0.1).abs() < 1e-12 && (x1 - 2.1).abs() < 1e-12);
        assert!((y0 - 3.7).abs() < 1e-12 && (y1 - 10.3).abs() < 1e-12);
    }

    #[test]
    fn single_point_gets_a_unit_window() {
        let fig = dots(&[(3.0, 3.0)]);
        assert_eq!(resolve_limits(&fig), ((2.5, 3.5), (2.5, 3.5)));
    }

    #[test]
    fn hidden_axes_draw_no_ticks_or_frame() {
        let mut fig = dots(&[(0.0, 0.0), (1.0, 1.0)]);
        fig.axes.grid = true;
        fig.axes.visible = false;
        let svg = to_svg(&fig);
        assert!(!svg.contains("class=\"tick\""));
        assert!(!svg.contains(GRID_COLOR));
        assert!(!svg.contains("fill=\"none\" stroke=\"#000000\""));
    }

    #[test]
    fn visible_axes_draw_ticks_and_labels() {
        let mut fig = dots(&[(0.0, 0.0), (6.0, 30.0)]);
        fig.axes.x_limits = Some((0.0, 6.0));
        fig.axes.y_limits = Some((0.0, 30.0));
        fig.axes.x_label = Some("width".into());
        fig.axes.y_label = Some("height".into());
        let svg = to_svg(&fig);
        assert_eq!(svg.matches("class=\"tick\"").count(), 7 + 7);
        assert!(svg.contains(">width</text>"));
        assert!(svg.contains(">height</text>"));
    }

    #[test]
    fn legend_shows_labeled_layers() {
        let mut fig = dots(&[(0.0, 0.0)]);
        let line = vec![Point::new(0.0, 0.0), Point::new(1.0, 1.0)];
        fig.push(LineLayer::new(line, Color::Red).with_label("fit"));
        fig.axes.legend = true;
        let svg = to_svg(&fig);
        assert!(svg.contains("class=\"legend\""));
        assert!(svg.contains(">fit</text>"));
    }

    #[test]
    fn text_is_escaped_and_centered() {
        let mut fig = dots(&[]);
        fig.push(TextLabel::new(Point::new(0.5, 0.5), "a < b & c").centered());
        let svg = to_svg(&fig);
        assert!(svg.contains(">a &lt; b &amp; c</text>"));
        assert!(svg.contains("dominant-baseline=\"central\""));
    }

    #[test]
    fn uncentered_text_sits_on_its_baseline() {
        let mut fig = dots(&[]);
        fig.push(TextLabel::new(Point::new(0.5, 0.5), "plain"));
        assert!(to_svg(&fig).contains("dominant-baseline=\"alphabetic\">plain</text>"));
    }

    #[test]
    fn huge_explicit_limits_render_without_ticks() {
        let mut fig = dots(&[(0.0, 0.0)]);
        fig.axes.x_limits = Some((-1e308, 1e308));
        fig.axes.y_limits = Some((-1e308, 1e308));
        fig.axes.grid = true;
        let svg = to_svg(&fig);
        assert!(!svg.contains("class=\"tick\""));
        assert!(svg.trim_end().ends_with("</svg>"));
    }

    #[test]
    fn short_lines_are_skipped() {
        let mut fig = dots(&[]);
        fig.push(LineLayer::new(vec![Point::new(0.0, 0.0)], Color::Gray));
        assert!(!to_svg(&fig).contains("<polyline"));
    }
}
