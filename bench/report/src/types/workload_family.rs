use super::series_statistics::SeriesStatistics;
use super::workload_params::WorkloadParams;
use super::workload_record::WorkloadRecord;
use derive_more::Display;
use serde::{Deserialize, Serialize};

/// Side of the workload a thread count belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display, Serialize, Deserialize)]
pub enum ThroughputAxis {
    #[display("Read")]
    #[serde(rename = "read")]
    Read,
    #[display("Write")]
    #[serde(rename = "write")]
    Write,
}

impl ThroughputAxis {
    pub fn opposite(&self) -> ThroughputAxis {
        match self {
            ThroughputAxis::Read => ThroughputAxis::Write,
            ThroughputAxis::Write => ThroughputAxis::Read,
        }
    }

    /// Total thread count of the record on this axis.
    pub fn threads(&self, record: &WorkloadRecord) -> u32 {
        match self {
            ThroughputAxis::Read => record.read_throughput,
            ThroughputAxis::Write => record.write_throughput,
        }
    }
}

/// Series of a record plotted in grouped charts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
pub enum WorkloadMetric {
    #[display("Read Ops")]
    #[serde(rename = "read_ops")]
    ReadOps,
    #[display("Read Errors")]
    #[serde(rename = "read_errors")]
    ReadErrors,
    #[display("Write Ops")]
    #[serde(rename = "write_ops")]
    WriteOps,
    #[display("Write Errors")]
    #[serde(rename = "write_errors")]
    WriteErrors,
}

impl WorkloadMetric {
    pub fn select<'a>(&self, record: &'a WorkloadRecord) -> &'a SeriesStatistics {
        match self {
            WorkloadMetric::ReadOps => &record.read_ops,
            WorkloadMetric::ReadErrors => &record.read_errors,
            WorkloadMetric::WriteOps => &record.write_ops,
            WorkloadMetric::WriteErrors => &record.write_errors,
        }
    }
}

/// Records sharing one exclusively active operation kind.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Display,
    Serialize,
    Deserialize,
)]
pub enum WorkloadFamily {
    #[display("Write Ins")]
    #[serde(rename = "insert")]
    Insert,
    #[display("Write Up Tiny")]
    #[serde(rename = "tiny_update")]
    TinyUpdate,
    #[display("Write Up Wide")]
    #[serde(rename = "wide_update")]
    WideUpdate,
    #[display("Read by Id")]
    #[serde(rename = "lite_read")]
    LiteRead,
    #[display("Read by Range")]
    #[serde(rename = "heavy_read")]
    HeavyRead,
}

impl WorkloadFamily {
    pub const ALL: [WorkloadFamily; 5] = [
        WorkloadFamily::Insert,
        WorkloadFamily::TinyUpdate,
        WorkloadFamily::WideUpdate,
        WorkloadFamily::LiteRead,
        WorkloadFamily::HeavyRead,
    ];

    pub fn axis(&self) -> ThroughputAxis {
        match self {
            WorkloadFamily::Insert | WorkloadFamily::TinyUpdate | WorkloadFamily::WideUpdate => {
                ThroughputAxis::Write
            }
            WorkloadFamily::LiteRead | WorkloadFamily::HeavyRead => ThroughputAxis::Read,
        }
    }

    pub fn metric(&self) -> WorkloadMetric {
        match self.axis() {
            ThroughputAxis::Read => WorkloadMetric::ReadOps,
            ThroughputAxis::Write => WorkloadMetric::WriteOps,
        }
    }

    /// Thread count of the single parameter defining this family.
    pub fn parameter(&self, params: &WorkloadParams) -> u32 {
        match self {
            WorkloadFamily::Insert => params.w_ins,
            WorkloadFamily::TinyUpdate => params.w_up_tiny,
            WorkloadFamily::WideUpdate => params.w_up_wide,
            WorkloadFamily::LiteRead => params.r_lite,
            WorkloadFamily::HeavyRead => params.r_heavy,
        }
    }

    /// The family's parameter is the only active one on its axis and the
    /// opposite axis is idle.
    pub fn contains(&self, record: &WorkloadRecord) -> bool {
        let axis = self.axis();
        let parameter = self.parameter(&record.params);
        parameter > 0
            && parameter == axis.threads(record)
            && axis.opposite().threads(record) == 0
    }
}
