use serde::{Serialize, Deserialize};

/// The line the synthetic samples are scattered around: `y = intercept + slope * x`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GroundTruth {
    pub intercept: f64,
    pub slope: f64,
}

impl GroundTruth {
    pub fn new(intercept: f64, slope: f64) -> Self {
        GroundTruth { intercept, slope }
    }

    /// Noise-free value of the line at `x`.
    pub fn predict(&self, x: f64) -> f64 {
        self.intercept + self.slope * x
    }
}

impl Default for GroundTruth {
    fn default() -> Self {
        GroundTruth::new(4.0, 3.0)
    }
}
