use crate::error::WorkloadBenchError;
use workload_bench_report::workload_params::WorkloadParams;

pub const MEASUREMENT_EXTENSION: &str = ".csv";

/// Reads the workload parameters encoded in a measurement file name, e.g.
/// `sp=0016,wp=0004,r_lite=0000,r_heavy=0000,w_ins=0008,w_up_tiny=0000,w_up_wide=0000.csv`.
pub fn parse_file_name(file_name: &str) -> Result<WorkloadParams, WorkloadBenchError> {
    let stem = file_name
        .strip_suffix(MEASUREMENT_EXTENSION)
        .ok_or_else(|| WorkloadBenchError::InvalidFileName(file_name.to_owned()))?;

    let mut pairs = Vec::new();
    for field in stem.split(',') {
        let invalid_field = || WorkloadBenchError::InvalidParameterField {
            file: file_name.to_owned(),
            field: field.to_owned(),
        };
        let (key, value) = field.split_once('=').ok_or_else(invalid_field)?;
        let value = value.trim().parse::<i64>().map_err(|_| invalid_field())?;
        pairs.push((key.trim().to_owned(), value));
    }

    WorkloadParams::from_pairs(pairs).map_err(|source| WorkloadBenchError::InvalidMeasurements {
        file: file_name.to_owned(),
        source,
    })
}
