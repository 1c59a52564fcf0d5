use rand::{rngs::StdRng, SeedableRng};
use rand_distr::{Distribution, Normal, Uniform};
use serde::{Serialize, Deserialize};

use crate::data::sample_config::SampleConfig;
use crate::error::{FigureError, Result};
use crate::figure::point::Point;

/// Noisy (x, y) pairs scattered around a `GroundTruth` line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SampleSet {
    points: Vec<Point>,
}

impl SampleSet {
    /// Draws `config.count` samples from a generator seeded with `config.seed`.
    ///
    /// All x values are drawn first, then all noise values, from the same
    /// generator, so the set depends only on the config.
    ///
    /// # Errors
    /// - `FigureError::SampleRange` if `x_low >= x_high`, a bound is not finite,
    ///   or the width of the range overflows
    /// - `FigureError::Noise` if `noise_std_dev` is negative or NaN
    pub fn generate(config: &SampleConfig) -> Result<SampleSet> {
        let (low, high) = (config.x_low, config.x_high);
        if !low.is_finite() || !high.is_finite() || low >= high || !(high - low).is_finite() {
            return Err(FigureError::SampleRange { low, high });
        }
        let noise = Normal::new(0.0, config.noise_std_dev)?;
        let uniform = Uniform::new(low, high);

        let mut rng = StdRng::seed_from_u64(config.seed);
        let xs: Vec<f64> = uniform.sample_iter(&mut rng).take(config.count).collect();
        let points = xs
            .into_iter()
            .map(|x| Point::new(x, config.truth.predict(x) + noise.sample(&mut rng)))
            .collect();

        Ok(SampleSet { points })
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::ground_truth::GroundTruth;

    fn residuals(set: &SampleSet, truth: &GroundTruth) -> Vec<f64> {
        set.points().iter().map(|p| p.y - truth.predict(p.x)).collect()
    }

    #[test]
    fn default_config_draws_one_hundred_points_in_range() {
        let set = SampleSet::generate(&SampleConfig::default()).unwrap();
        assert_eq!(set.len(), 100);
        assert!(set.points().iter().all(|p| (0.0..2.0).contains(&p.x)));
    }

    #[test]
    fn same_seed_reproduces_the_set() {
        let a = SampleSet::generate(&SampleConfig::default()).unwrap();
        let b = SampleSet::generate(&SampleConfig::default()).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn different_seed_changes_the_set() {
        let a = SampleSet::generate(&SampleConfig::with_seed(42)).unwrap();
        let b = SampleSet::generate(&SampleConfig::with_seed(7)).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn noise_is_roughly_standard_normal() {
        let config = SampleConfig::default();
        let set = SampleSet::generate(&config).unwrap();
        let r = residuals(&set, &config.truth);
        let n = r.len() as f64;
        let mean = r.iter().sum::<f64>() / n;
        let std = (r.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n).sqrt();
        assert!(mean.abs() < 0.5, "mean = {mean}");
        assert!((0.6..1.4).contains(&std), "std = {std}");
    }

    #[test]
    fn zero_noise_puts_points_on_the_line() {
        let config = SampleConfig { noise_std_dev: 0.0, ..SampleConfig::default() };
        let set = SampleSet::generate(&config).unwrap();
        assert!(residuals(&set, &config.truth).iter().all(|r| r.abs() < 1e-12));
    }

    #[test]
    fn empty_range_is_rejected() {
        let config = SampleConfig { x_low: 2.0, x_high: 2.0, ..SampleConfig::default() };
        assert!(matches!(
            SampleSet::generate(&config),
            Err(FigureError::SampleRange { .. })
        ));
    }

    #[test]
    fn overflowing_range_is_rejected() {
        let config = SampleConfig { x_low: -f64::MAX, x_high: f64::MAX, ..SampleConfig::default() };
        assert!(matches!(
            SampleSet::generate(&config),
            Err(FigureError::SampleRange { .. })
        ));
    }

    #[test]
    fn negative_noise_is_rejected() {
        let config = SampleConfig { noise_std_dev: -1.0, ..SampleConfig::default() };
        assert!(matches!(SampleSet::generate(&config), Err(FigureError::Noise(_))));
    }

    #[test]
    fn zero_count_gives_empty_set() {
        let config = SampleConfig { count: 0, ..SampleConfig::default() };
        assert!(SampleSet::generate(&config).unwrap().is_empty());
    }
}
