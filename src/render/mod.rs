pub mod svg;
pub mod ticks;

pub use svg::to_svg;
