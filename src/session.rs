use log::info;

use crate::data::{ReferenceLine, SampleConfig, SampleSet};
use crate::error::Result;
use crate::plots::{network_diagram, scatter_line};
use crate::viewer::Viewer;

/// Shows the regression figure, then the network diagram, on `viewer`.
///
/// Exactly two `show` calls are made, in that order. The diagram is not
/// built if the first figure fails to display.
pub fn run<V: Viewer>(config: &SampleConfig, viewer: &mut V) -> Result<()> {
    let samples = SampleSet::generate(config)?;
    let line = ReferenceLine::for_samples(config);
    info!(
        "generated {} samples around y = {} + {}x (seed {})",
        samples.len(),
        config.truth.intercept,
        config.truth.slope,
        config.seed
    );

    viewer.show(&scatter_line::build(&samples, &line))?;

    info!("drawing network diagram");
    viewer.show(&network_diagram::build())?;
    Ok(())
}
