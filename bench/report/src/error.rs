use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ReportError {
    #[error("Missing workload parameter: {0}")]
    MissingParameter(&'static str),
    #[error("Invalid value {value} for workload parameter: {key}")]
    InvalidParameter { key: String, value: i64 },
    #[error("Duplicated workload parameter: {0}")]
    DuplicatedParameter(String),
    #[error("Missing column: {0}")]
    MissingColumn(&'static str),
    #[error("Empty series: {0}")]
    EmptySeries(String),
    #[error("Series {title} has a non-finite sample at position {index}")]
    NonFiniteSample { title: String, index: usize },
    #[error("Series {title} has {actual} samples, expected {expected}")]
    SeriesLengthMismatch {
        title: String,
        expected: usize,
        actual: usize,
    },
}
