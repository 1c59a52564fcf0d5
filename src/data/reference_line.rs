use serde::{Serialize, Deserialize};

use crate::data::ground_truth::GroundTruth;
use crate::data::sample_config::SampleConfig;
use crate::figure::point::Point;

/// Two endpoints of the noise-free ground-truth line.
///
/// Drawn as an overlay on the samples; it is not estimated from them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReferenceLine {
    start: Point,
    end: Point,
}

impl ReferenceLine {
    pub fn through(truth: &GroundTruth, x_start: f64, x_end: f64) -> Self {
        ReferenceLine {
            start: Point::new(x_start, truth.predict(x_start)),
            end: Point::new(x_end, truth.predict(x_end)),
        }
    }

    /// Spans the sampled x range of `config`.
    pub fn for_samples(config: &SampleConfig) -> Self {
        ReferenceLine::through(&config.truth, config.x_low, config.x_high)
    }

    pub fn endpoints(&self) -> [Point; 2] {
        [self.start, self.end]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_line_runs_from_0_4_to_2_10() {
        let line = ReferenceLine::for_samples(&SampleConfig::default());
        assert_eq!(line.endpoints(), [Point::new(0.0, 4.0), Point::new(2.0, 10.0)]);
    }

    #[test]
    fn custom_truth_is_followed() {
        let line = ReferenceLine::through(&GroundTruth::new(-1.0, 0.5), -2.0, 4.0);
        assert_eq!(line.endpoints(), [Point::new(-2.0, -2.0), Point::new(4.0, 1.0)]);
    }
}
