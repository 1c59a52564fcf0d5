use serde::{Serialize, Deserialize};

/// The named colors the figures use, with matplotlib's hex values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Blue,
    Red,
    Green,
    Gray,
    Orange,
    Black,
}

impl Color {
    pub fn hex(&self) -> &'static str {
        match self {
            Color::Blue => "#0000ff",
            Color::Red => "#ff0000",
            Color::Green => "#008000",
            Color::Gray => "#808080",
            Color::Orange => "#ffa500",
            Color::Black => "#000000",
        }
    }
}

impl Default for Color {
    fn default() -> Self {
        Color::Black
    }
}
