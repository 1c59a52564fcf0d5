pub mod error;
pub mod data;
pub mod figure;
pub mod render;
pub mod plots;
pub mod viewer;
pub mod session;

// Convenience re-exports
pub use error::{FigureError, Result};
pub use data::{GroundTruth, ReferenceLine, SampleConfig, SampleSet};
pub use figure::{Figure, Point};
pub use render::to_svg;
pub use viewer::{BrowserViewer, Viewer, ViewerConfig};
pub use session::run;
