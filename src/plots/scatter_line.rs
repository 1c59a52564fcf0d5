use crate::data::{ReferenceLine, SampleSet};
use crate::figure::{Color, Figure, FigureSize, LineLayer, ScatterLayer};

pub const TITLE: &str = "Simple Linear Regression Example";

/// Scatter of the noisy samples with the reference line drawn over them.
///
/// Limits are left automatic; both layers appear in the legend.
pub fn build(samples: &SampleSet, line: &ReferenceLine) -> Figure {
    let mut figure = Figure::new(TITLE, FigureSize::new(10.0, 6.0));
    figure.axes.x_label = Some("Input Feature (X)".into());
    figure.axes.y_label = Some("Output (Y)".into());
    figure.axes.grid = true;
    figure.axes.legend = true;

    figure.push(
        ScatterLayer::new(samples.points().to_vec(), Color::Blue).with_label("Data points"),
    );
    figure.push(
        LineLayer::new(line.endpoints().to_vec(), Color::Red)
            .with_width(2.0)
            .with_label("Regression Line"),
    );
    figure
}
