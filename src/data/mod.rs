pub mod ground_truth;
pub mod reference_line;
pub mod sample_config;
pub mod sample_set;

pub use ground_truth::GroundTruth;
pub use reference_line::ReferenceLine;
pub use sample_config::SampleConfig;
pub use sample_set::SampleSet;
