//! Linear regression drawn as a single dense layer: three inputs wired to
//! one output, with a weight on every edge and a bias on the output.

use crate::figure::{Color, Figure, FigureSize, LineLayer, Point, ScatterLayer, TextLabel};

pub const TITLE: &str = "Linear Regression as a Layer in a Neural Network";

pub const INPUT_NODES: [Point; 3] = [
    Point { x: 1.0, y: 10.0 },
    Point { x: 1.0, y: 20.0 },
    Point { x: 1.0, y: 30.0 },
];
pub const OUTPUT_NODE: Point = Point { x: 5.0, y: 20.0 };

pub const X_LIMITS: (f64, f64) = (0.0, 6.0);
pub const Y_LIMITS: (f64, f64) = (0.0, 30.0);

const INPUT_AREA: f64 = 300.0;
const OUTPUT_AREA: f64 = 500.0;
const EDGE_WIDTH: f64 = 2.0;
const NODE_FONT: f64 = 15.0;
const WEIGHT_FONT: f64 = 12.0;

// Labels sit right of and slightly below their node.
const LABEL_DX: f64 = 0.1;
const LABEL_DY: f64 = -1.0;

const WEIGHT_X: f64 = 3.0;
const BIAS_ANCHOR: Point = Point { x: 3.5, y: 21.0 };

/// Builds the diagram. Axes are hidden and limits fixed to `X_LIMITS` × `Y_LIMITS`.
pub fn build() -> Figure {
    let mut figure = Figure::new(TITLE, FigureSize::new(10.0, 6.0));
    figure.axes.x_limits = Some(X_LIMITS);
    figure.axes.y_limits = Some(Y_LIMITS);
    figure.axes.visible = false;

    for (i, node) in INPUT_NODES.iter().enumerate() {
        figure.push(ScatterLayer::new(vec![*node], Color::Blue).with_area(INPUT_AREA));
        figure.push(
            TextLabel::new(offset(*node), format!("X{}", i + 1))
                .with_size(NODE_FONT)
                .centered(),
        );
    }

    figure.push(ScatterLayer::new(vec![OUTPUT_NODE], Color::Green).with_area(OUTPUT_AREA));
    figure.push(
        TextLabel::new(offset(OUTPUT_NODE), "Y (Prediction)")
            .with_size(NODE_FONT)
            .centered(),
    );

    for node in &INPUT_NODES {
        figure.push(LineLayer::new(vec![*node, OUTPUT_NODE], Color::Gray).with_width(EDGE_WIDTH));
    }

    for (i, node) in INPUT_NODES.iter().enumerate() {
        figure.push(
            TextLabel::new(weight_anchor(*node), format!("W{}", i + 1))
                .with_size(WEIGHT_FONT)
                .with_color(Color::Red)
                .centered(),
        );
    }

    figure.push(
        TextLabel::new(BIAS_ANCHOR, "+ Bias")
            .with_size(NODE_FONT)
            .with_color(Color::Orange)
            .centered(),
    );

    figure
}

fn offset(node: Point) -> Point {
    Point::new(node.x + LABEL_DX, node.y + LABEL_DY)
}

/// Halfway up the edge from `input` to the output node, at a fixed x.
fn weight_anchor(input: Point) -> Point {
    Point::new(WEIGHT_X, input.y + (OUTPUT_NODE.y - input.y) / 2.0)
}
