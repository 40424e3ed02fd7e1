use crate::classifier::WorkloadClassifier;
use crate::composer::{DivIdSequence, ReportComposer};
use crate::group_builder::{GroupChartOptions, GroupSummaryBuilder};
use crate::report::{FamilySummary, ProfileSummary};
use crate::workload_family::ThroughputAxis;
use crate::workload_record::WorkloadRecord;
use tracing::{info, warn};

/// Charts and summaries of one database/host profile.
#[derive(Debug)]
pub struct ProfileReport {
    pub write: ReportComposer,
    pub read: ReportComposer,
    pub summary: ProfileSummary,
}

pub struct ProfileReportGenerator;

impl ProfileReportGenerator {
    /// Classifies `records` and builds the charts of every non-empty family.
    ///
    /// All overlays share the time line of the first record. Write families
    /// land in the write composer, read families in the read composer.
    pub fn generate(
        database: &str,
        host: &str,
        records: &[WorkloadRecord],
        div_ids: &mut DivIdSequence,
        options: GroupChartOptions,
    ) -> ProfileReport {
        let mut write = ReportComposer::new();
        let mut read = ReportComposer::new();
        let mut families = Vec::new();

        let Some(first) = records.first() else {
            warn!("No workload records in {database}/{host}, skipping");
            return ProfileReport {
                write,
                read,
                summary: ProfileSummary {
                    database: database.to_owned(),
                    host: host.to_owned(),
                    records: 0,
                    families,
                },
            };
        };

        let time_line = &first.time;
        let classified = WorkloadClassifier::classify(records);
        let mut builder = GroupSummaryBuilder::new(database, host, records, div_ids, options);

        for (family, group) in classified.iter() {
            info!(
                "Building {family} charts for {database}/{host} from {} records",
                group.len()
            );
            let views = builder.build_group(
                time_line,
                group,
                &family.to_string(),
                family.metric(),
                family.axis(),
            );
            let composer = match family.axis() {
                ThroughputAxis::Write => &mut write,
                ThroughputAxis::Read => &mut read,
            };
            views.into_iter().for_each(|view| composer.add(view));
            families.push(FamilySummary::new(family, group));
        }

        ProfileReport {
            write,
            read,
            summary: ProfileSummary {
                database: database.to_owned(),
                host: host.to_owned(),
                records: records.len(),
                families,
            },
        }
    }
}
