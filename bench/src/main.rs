mod analytics;
mod args;
mod config;
mod error;
mod loader;
mod plot;
mod runner;

use crate::args::WorkloadBenchArgs;
use crate::error::WorkloadBenchError;
use crate::runner::ReportRunner;
use clap::Parser;
use tracing::info;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Registry};

fn main() -> Result<(), WorkloadBenchError> {
    let args = WorkloadBenchArgs::parse();

    Registry::default()
        .with(tracing_subscriber::fmt::layer())
        .with(EnvFilter::try_from_default_env().unwrap_or(EnvFilter::new("INFO")))
        .init();

    let options = args.chart_options()?;
    info!("Generating workload reports from: {}", args.data_dir);
    ReportRunner::new(args, options).run()?;
    info!("Finished generating workload reports.");
    Ok(())
}
