// Generates the synthetic regression data and shows two figures in the
// browser, one after the other. Close a figure's page to move on.
use anyhow::Context;
use env_logger::Env;

use linreg_figures::{BrowserViewer, SampleConfig, ViewerConfig};

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let mut viewer = BrowserViewer::new(ViewerConfig::default());
    linreg_figures::run(&SampleConfig::default(), &mut viewer)
        .with_context(|| format!("could not display figures at {}", viewer.url()))?;
    Ok(())
}
