use chrono::Utc;
use workload_bench_report::report::{ProfileSummary, WorkloadReport};

pub struct WorkloadReportBuilder;

impl WorkloadReportBuilder {
    pub fn build(mut profiles: Vec<ProfileSummary>) -> WorkloadReport {
        let uuid = uuid::Uuid::new_v4();
        let timestamp = Utc::now().to_rfc3339();

        // Same order as the report matrix columns
        profiles.sort_by(|a, b| (&a.database, &a.host).cmp(&(&b.database, &b.host)));

        WorkloadReport {
            uuid,
            timestamp,
            profiles,
        }
    }
}
