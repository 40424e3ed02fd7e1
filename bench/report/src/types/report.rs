use super::workload_family::{WorkloadFamily, WorkloadMetric};
use super::workload_record::WorkloadRecord;
use crate::utils::round_float;
use serde::{Deserialize, Serialize};
use std::path::Path;
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct WorkloadReport {
    /// Report unique identifier
    pub uuid: Uuid,

    /// Timestamp when the report was generated
    pub timestamp: String,

    /// Summaries per database/host profile
    pub profiles: Vec<ProfileSummary>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ProfileSummary {
    pub database: String,
    pub host: String,
    pub records: usize,
    pub families: Vec<FamilySummary>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct FamilySummary {
    pub family: WorkloadFamily,
    pub metric: WorkloadMetric,
    pub records: Vec<RecordSummary>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct RecordSummary {
    pub params: String,
    pub threads: u32,
    pub samples: usize,
    #[serde(serialize_with = "round_float")]
    pub mean: f64,
    #[serde(serialize_with = "round_float")]
    pub std_dev: f64,
    #[serde(serialize_with = "round_float")]
    pub upper_90: f64,
    #[serde(serialize_with = "round_float")]
    pub lower_90: f64,
}

impl FamilySummary {
    pub fn new(family: WorkloadFamily, records: &[&WorkloadRecord]) -> Self {
        let metric = family.metric();
        let axis = family.axis();
        let records = records
            .iter()
            .map(|record| {
                let series = metric.select(record);
                RecordSummary {
                    params: record.params.to_string(),
                    threads: axis.threads(record),
                    samples: series.len(),
                    mean: series.mean,
                    std_dev: series.std_dev,
                    upper_90: series.upper_90,
                    lower_90: series.lower_90,
                }
            })
            .collect();

        Self {
            family,
            metric,
            records,
        }
    }
}

impl WorkloadReport {
    pub fn dump_to_json(&self, output_dir: &str) -> std::io::Result<()> {
        std::fs::create_dir_all(output_dir)?;

        let report_path = Path::new(output_dir).join("report.json");
        let report_json = serde_json::to_string_pretty(self)?;
        std::fs::write(report_path, report_json)
    }
}
