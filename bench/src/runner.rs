use crate::analytics::report_builder::WorkloadReportBuilder;
use crate::args::WorkloadBenchArgs;
use crate::error::WorkloadBenchError;
use crate::loader::{discover_profiles, load_profile};
use crate::plot::{save_report, ReportKind};
use std::path::Path;
use tracing::info;
use workload_bench_report::{
    DivIdSequence, GroupChartOptions, ProfileReportGenerator, ReportComposer,
};

pub struct ReportRunner {
    args: WorkloadBenchArgs,
    options: GroupChartOptions,
}

impl ReportRunner {
    pub fn new(args: WorkloadBenchArgs, options: GroupChartOptions) -> Self {
        Self { args, options }
    }

    /// Processes every profile to completion before the next one and writes
    /// the merged write and read reports. Any failure aborts the whole run.
    pub fn run(&self) -> Result<(), WorkloadBenchError> {
        let profiles = discover_profiles(Path::new(&self.args.data_dir))?;
        info!(
            "Found {} profiles in: {}",
            profiles.len(),
            self.args.data_dir
        );

        let mut div_ids = DivIdSequence::default();
        let mut write = ReportComposer::new();
        let mut read = ReportComposer::new();
        let mut summaries = Vec::with_capacity(profiles.len());

        for profile in profiles {
            let records = load_profile(&profile.path)?;
            let report = ProfileReportGenerator::generate(
                &profile.database,
                &profile.host,
                &records,
                &mut div_ids,
                self.options,
            );
            report.summary.print_summary();

            write.merge(report.write);
            read.merge(report.read);
            summaries.push(report.summary);
        }

        let output_dir = self.args.output_dir();
        save_report(&write, output_dir, ReportKind::Write)?;
        save_report(&read, output_dir, ReportKind::Read)?;

        if self.args.json {
            let report = WorkloadReportBuilder::build(summaries);
            report
                .dump_to_json(output_dir)
                .map_err(|source| WorkloadBenchError::CannotWriteFile {
                    path: Path::new(output_dir).join("report.json").display().to_string(),
                    source,
                })?;
            info!("Saved report {} to: {output_dir}/report.json", report.uuid);
        }

        Ok(())
    }
}
