use crate::error::WorkloadBenchError;
use std::path::Path;
use std::time::Instant;
use tracing::{info, warn};
use workload_bench_report::plotting::page::render_page;
use workload_bench_report::ReportComposer;

pub enum ReportKind {
    Write,
    Read,
}

impl ReportKind {
    fn name(&self) -> &'static str {
        match self {
            ReportKind::Write => "report-write",
            ReportKind::Read => "report-read",
        }
    }

    fn title(&self) -> &'static str {
        match self {
            ReportKind::Write => "Write Workloads",
            ReportKind::Read => "Read Workloads",
        }
    }
}

pub fn save_report(
    composer: &ReportComposer,
    output_directory: &str,
    kind: ReportKind,
) -> Result<(), WorkloadBenchError> {
    if composer.is_empty() {
        warn!("No charts for {}, the page will be empty", kind.title());
    }

    let render_start = Instant::now();
    let html = render_page(composer, kind.title())?;
    let render_time = render_start.elapsed();

    let report_path = Path::new(output_directory).join(format!("{}.html", kind.name()));
    std::fs::create_dir_all(output_directory).map_err(|source| {
        WorkloadBenchError::CannotWriteFile {
            path: output_directory.to_owned(),
            source,
        }
    })?;
    std::fs::write(&report_path, html).map_err(|source| WorkloadBenchError::CannotWriteFile {
        path: report_path.display().to_string(),
        source,
    })?;

    info!(
        "Generated {} at: {} ({} charts, {} titles x {} profiles, render: {:.2?})",
        kind.title(),
        report_path.display(),
        composer.len(),
        composer.list_titles().len(),
        composer.list_profiles().len(),
        render_time
    );
    Ok(())
}
