mod defaults;

use crate::config::ReportConfig;
use crate::error::WorkloadBenchError;
use clap::Parser;
use defaults::*;
use workload_bench_report::GroupChartOptions;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct WorkloadBenchArgs {
    /// Root of the measurements, laid out as <database>/<profile>/<params>.csv
    #[arg(long, short = 'd', default_value_t = DEFAULT_DATA_DIR.to_owned())]
    pub data_dir: String,

    /// Directory for the generated reports, defaults to the data directory
    #[arg(long, short = 'o')]
    pub output_dir: Option<String>,

    /// TOML file with chart options, command line flags take precedence
    #[arg(long, short = 'c')]
    pub config: Option<String>,

    /// Also plot every overlay averaged over groups of this many seconds
    #[arg(long, value_parser = parse_aggregate_seconds)]
    pub aggregate_seconds: Option<usize>,

    /// Also plot standard deviation charts
    #[arg(long, default_value_t = DEFAULT_DEVIATION_CHARTS)]
    pub deviation_charts: bool,

    /// Dark chart background
    #[arg(long, default_value_t = DEFAULT_DARK)]
    pub dark: bool,

    /// Write report.json with per-record statistics next to the HTML reports
    #[arg(long, default_value_t = DEFAULT_JSON)]
    pub json: bool,
}

fn parse_aggregate_seconds(v: &str) -> Result<usize, String> {
    match v.parse::<usize>() {
        Ok(0) => Err("Aggregation window must be at least 1 second.".to_owned()),
        Ok(seconds) => Ok(seconds),
        Err(e) => Err(format!("Invalid aggregation window '{v}': {e}")),
    }
}

impl WorkloadBenchArgs {
    pub fn output_dir(&self) -> &str {
        self.output_dir.as_deref().unwrap_or(&self.data_dir)
    }

    /// Chart options from the config file, overridden by command line flags.
    pub fn chart_options(&self) -> Result<GroupChartOptions, WorkloadBenchError> {
        let config = match &self.config {
            Some(path) => ReportConfig::load(path)?,
            None => ReportConfig::default(),
        };

        Ok(GroupChartOptions {
            aggregate_seconds: self.aggregate_seconds.or(config.charts.aggregate_seconds),
            deviation_charts: self.deviation_charts || config.charts.deviation_charts,
            dark: self.dark || config.charts.dark,
        })
    }
}
