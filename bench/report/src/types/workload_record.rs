use super::record_id::RecordId;
use super::series_statistics::SeriesStatistics;
use super::workload_params::WorkloadParams;
use crate::error::ReportError;

const COLUMN_NAMES: [&str; 5] = ["time", "read ops", "read errors", "write ops", "write errors"];

/// One measurement file: its workload configuration and per-second series.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkloadRecord {
    pub id: RecordId,
    pub params: WorkloadParams,
    pub time: SeriesStatistics,
    pub read_ops: SeriesStatistics,
    pub read_errors: SeriesStatistics,
    pub write_ops: SeriesStatistics,
    pub write_errors: SeriesStatistics,
    pub read_throughput: u32,
    pub write_throughput: u32,
    pub max_throughput: u32,
}

impl WorkloadRecord {
    /// Builds a record from decoded columns ordered as time, read ops, read
    /// errors, write ops and write errors. Extra trailing columns are ignored.
    ///
    /// Operation series are renamed after the workload mix so that charts
    /// overlaying several records stay readable.
    pub fn parse(
        id: RecordId,
        params: WorkloadParams,
        columns: Vec<(String, Vec<f64>)>,
    ) -> Result<Self, ReportError> {
        if columns.len() < COLUMN_NAMES.len() {
            return Err(ReportError::MissingColumn(COLUMN_NAMES[columns.len()]));
        }

        let expected = columns[0].1.len();
        for (title, data) in columns.iter().take(COLUMN_NAMES.len()) {
            if data.is_empty() {
                return Err(ReportError::EmptySeries(title.clone()));
            }
            if data.len() != expected {
                return Err(ReportError::SeriesLengthMismatch {
                    title: title.clone(),
                    expected,
                    actual: data.len(),
                });
            }
            if let Some(index) = data.iter().position(|value| !value.is_finite()) {
                return Err(ReportError::NonFiniteSample {
                    title: title.clone(),
                    index,
                });
            }
        }

        let mut series = columns
            .into_iter()
            .take(COLUMN_NAMES.len())
            .map(|(title, data)| SeriesStatistics::compute_owned(id, title, data));
        let mut next = |name: &'static str| series.next().ok_or(ReportError::MissingColumn(name));

        let time = next(COLUMN_NAMES[0])?;
        let mut read_ops = next(COLUMN_NAMES[1])?;
        let mut read_errors = next(COLUMN_NAMES[2])?;
        let mut write_ops = next(COLUMN_NAMES[3])?;
        let mut write_errors = next(COLUMN_NAMES[4])?;

        let read_signature = params.read_signature();
        read_ops.title = format!("R_{read_signature}");
        read_errors.title = format!("RE_{read_signature}");

        let write_signature = params.write_signature();
        write_ops.title = format!("W_{write_signature}");
        write_errors.title = format!("WE_{write_signature}");

        let read_throughput = params.read_throughput();
        let write_throughput = params.write_throughput();

        Ok(Self {
            id,
            params,
            time,
            read_ops,
            read_errors,
            write_ops,
            write_errors,
            read_throughput,
            write_throughput,
            max_throughput: read_throughput.max(write_throughput),
        })
    }

    /// Number of per-second samples.
    pub fn samples(&self) -> usize {
        self.time.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn columns(len: usize) -> Vec<(String, Vec<f64>)> {
        ["Time", "ReadOps", "ReadErr", "WriteOps", "WriteErr"]
            .iter()
            .enumerate()
            .map(|(i, title)| {
                let data = (0..len).map(|t| (t * (i + 1)) as f64).collect();
                (title.to_string(), data)
            })
            .collect()
    }

    #[test]
    fn parse_should_derive_throughput_and_rename_series() {
        let params = WorkloadParams::new(2, 1, 4, 0, 3);
        let record = WorkloadRecord::parse(RecordId(7), params, columns(4)).unwrap();

        assert_eq!(record.read_throughput, 3);
        assert_eq!(record.write_throughput, 7);
        assert_eq!(record.max_throughput, 7);
        assert_eq!(record.time.title, "Time");
        assert_eq!(record.read_ops.title, "R_r2_R1");
        assert_eq!(record.read_errors.title, "RE_r2_R1");
        assert_eq!(record.write_ops.title, "W_i4_u0_U3");
        assert_eq!(record.write_errors.title, "WE_i4_u0_U3");
        assert_eq!(record.write_ops.data, vec![0.0, 4.0, 8.0, 12.0]);
        assert_eq!(record.samples(), 4);
    }

    #[test]
    fn parse_should_tag_every_series_with_record_id() {
        let record =
            WorkloadRecord::parse(RecordId(3), WorkloadParams::new(1, 0, 0, 0, 0), columns(2))
                .unwrap();

        for series in [
            &record.time,
            &record.read_ops,
            &record.read_errors,
            &record.write_ops,
            &record.write_errors,
        ] {
            assert_eq!(series.owner, Some(RecordId(3)));
        }
    }

    #[test]
    fn parse_should_reject_missing_columns() {
        let mut input = columns(3);
        input.truncate(3);
        let result = WorkloadRecord::parse(RecordId(0), WorkloadParams::default(), input);

        assert_eq!(result, Err(ReportError::MissingColumn("write ops")));
    }

    #[test]
    fn parse_should_reject_series_of_different_lengths() {
        let mut input = columns(3);
        input[2].1.pop();
        let result = WorkloadRecord::parse(RecordId(0), WorkloadParams::default(), input);

        assert_eq!(
            result,
            Err(ReportError::SeriesLengthMismatch {
                title: "ReadErr".to_owned(),
                expected: 3,
                actual: 2
            })
        );
    }

    #[test]
    fn parse_should_reject_empty_series() {
        let result = WorkloadRecord::parse(RecordId(0), WorkloadParams::default(), columns(0));

        assert_eq!(result, Err(ReportError::EmptySeries("Time".to_owned())));
    }

    #[test]
    fn parse_should_reject_non_finite_samples() {
        for value in [f64::INFINITY, f64::NEG_INFINITY, f64::NAN] {
            let mut input = columns(3);
            input[3].1[1] = value;

            let result = WorkloadRecord::parse(RecordId(0), WorkloadParams::default(), input);

            assert_eq!(
                result,
                Err(ReportError::NonFiniteSample {
                    title: "WriteOps".to_owned(),
                    index: 1,
                })
            );
        }
    }

    #[test]
    fn parse_should_ignore_trailing_columns() {
        let mut input = columns(2);
        input.push(("Latency".to_owned(), vec![1.0]));
        let record =
            WorkloadRecord::parse(RecordId(0), WorkloadParams::new(0, 0, 1, 0, 0), input).unwrap();

        assert_eq!(record.write_errors.title, "WE_i1_u0_U0");
    }
}
