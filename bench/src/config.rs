use crate::error::WorkloadBenchError;
use serde::Deserialize;
use tracing::info;

/// Options file, e.g.
///
/// ```toml
/// [charts]
/// aggregate_seconds = 10
/// deviation_charts = true
/// dark = false
/// ```
#[derive(Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct ReportConfig {
    pub charts: ChartsConfig,
}

#[derive(Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct ChartsConfig {
    pub aggregate_seconds: Option<usize>,
    pub deviation_charts: bool,
    pub dark: bool,
}

impl ReportConfig {
    pub fn load(path: &str) -> Result<Self, WorkloadBenchError> {
        info!("Loading report config from: {path}");
        let content =
            std::fs::read_to_string(path).map_err(|source| WorkloadBenchError::CannotReadFile {
                path: path.to_owned(),
                source,
            })?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self, WorkloadBenchError> {
        let config: ReportConfig = toml::from_str(content)?;
        if config.charts.aggregate_seconds == Some(0) {
            return Err(WorkloadBenchError::InvalidConfiguration(
                "charts.aggregate_seconds must be at least 1".to_owned(),
            ));
        }
        Ok(config)
    }
}
