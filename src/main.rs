use anyhow::Context;
use clap::Parser;
use tracing::error;
use tracing_subscriber::EnvFilter;

use meshview::config::{CliArgs, ViewerConfig};
use meshview::pipeline::{self, Viewer};

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();

    // Init tracing
    let filter = if args.verbose {
        EnvFilter::new("meshview=debug")
    } else {
        EnvFilter::new("meshview=info")
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config: ViewerConfig = args.into();

    match Viewer::load(&config) {
        Ok(loaded) => {
            pipeline::print_summary(&loaded);
            Ok(())
        }
        Err(e) => {
            error!(%e, "Load failed");
            Err(anyhow::anyhow!(e)).context("meshview failed to load the scene")
        }
    }
}
