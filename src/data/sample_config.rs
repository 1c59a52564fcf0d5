use serde::{Serialize, Deserialize};
use crate::data::ground_truth::GroundTruth;

/// Parameters of the synthetic data generator.
///
/// # Fields
/// - `seed`         : seed for the generator; equal seeds give equal sample sets
/// - `count`        : number of (x, y) pairs to draw
/// - `x_low`        : inclusive lower bound of the uniform x range
/// - `x_high`       : exclusive upper bound of the uniform x range
/// - `noise_std_dev`: standard deviation of the gaussian noise added to y
/// - `truth`        : line the noisy samples are drawn around
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SampleConfig {
    pub seed: u64,
    pub count: usize,
    pub x_low: f64,
    pub x_high: f64,
    pub noise_std_dev: f64,
    pub truth: GroundTruth,
}

impl SampleConfig {
    /// Same defaults with a different seed.
    pub fn with_seed(seed: u64) -> Self {
        SampleConfig { seed, ..SampleConfig::default() }
    }
}

impl Default for SampleConfig {
    fn default() -> Self {
        SampleConfig {
            seed: 42,
            count: 100,
            x_low: 0.0,
            x_high: 2.0,
            noise_std_dev: 1.0,
            truth: GroundTruth::default(),
        }
    }
}
