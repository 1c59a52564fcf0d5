pub mod color;
pub mod element;
pub mod figure;
pub mod point;

pub use color::Color;
pub use element::{Element, LineLayer, ScatterLayer, TextLabel, VerticalAlign};
pub use figure::{Axes, Bounds, Figure, FigureSize, LegendEntry, LegendGlyph};
pub use point::Point;
