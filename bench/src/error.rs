use thiserror::Error;
use workload_bench_report::ReportError;

#[derive(Debug, Error)]
pub enum WorkloadBenchError {
    #[error("Cannot read {path}")]
    CannotReadFile {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Cannot read directory {path}")]
    CannotReadDirectory {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Cannot write {path}")]
    CannotWriteFile {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid measurement file name: {0}")]
    InvalidFileName(String),
    #[error("Invalid parameter field '{field}' in file name: {file}")]
    InvalidParameterField { file: String, field: String },
    #[error("Missing header in: {0}")]
    MissingHeader(String),
    #[error("Invalid value '{value}' at line {line} of: {file}")]
    InvalidValue {
        file: String,
        line: usize,
        value: String,
    },
    #[error("Line {line} of {file} has {actual} values, expected {expected}")]
    RaggedRow {
        file: String,
        line: usize,
        expected: usize,
        actual: usize,
    },
    #[error("Invalid measurements in {file}")]
    InvalidMeasurements {
        file: String,
        #[source]
        source: ReportError,
    },
    #[error("Cannot parse config")]
    CannotParseConfig(#[from] toml::de::Error),
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
    #[error("Cannot serialize chart")]
    CannotSerializeChart(#[from] serde_json::Error),
}
