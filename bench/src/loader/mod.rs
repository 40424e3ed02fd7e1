mod csv;
mod file_name;

use crate::error::WorkloadBenchError;
use file_name::{parse_file_name, MEASUREMENT_EXTENSION};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use workload_bench_report::record_id::RecordId;
use workload_bench_report::workload_record::WorkloadRecord;

/// Database directories starting with this prefix are disabled.
const DISABLED_PREFIX: char = '-';

/// Measurements of one host running one database.
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileDirectory {
    pub database: String,
    pub host: String,
    pub path: PathBuf,
}

/// Lists `<data_dir>/<database>/<host>` directories in name order.
pub fn discover_profiles(data_dir: &Path) -> Result<Vec<ProfileDirectory>, WorkloadBenchError> {
    let mut profiles = Vec::new();
    for (database, database_dir) in sorted_entries(data_dir)? {
        if database.starts_with(DISABLED_PREFIX) {
            debug!("Skipping disabled database directory: {database}");
            continue;
        }
        if !database_dir.is_dir() {
            continue;
        }

        for (host, profile_dir) in sorted_entries(&database_dir)? {
            if profile_dir.is_dir() {
                profiles.push(ProfileDirectory {
                    database: database.clone(),
                    host,
                    path: profile_dir,
                });
            }
        }
    }
    Ok(profiles)
}

/// Loads every measurement file of a profile directory, in file name order.
/// Record ids are positions in the returned list.
pub fn load_profile(profile_dir: &Path) -> Result<Vec<WorkloadRecord>, WorkloadBenchError> {
    let files = sorted_entries(profile_dir)?
        .into_iter()
        .filter(|(name, path)| name.ends_with(MEASUREMENT_EXTENSION) && path.is_file())
        .collect::<Vec<_>>();

    let mut records = Vec::with_capacity(files.len());
    for (index, (name, path)) in files.into_iter().enumerate() {
        let params = parse_file_name(&name)?;
        let content =
            fs::read_to_string(&path).map_err(|source| WorkloadBenchError::CannotReadFile {
                path: path.display().to_string(),
                source,
            })?;
        let columns = csv::parse_columns(&content, &name)?;
        let record = WorkloadRecord::parse(RecordId(index), params, columns).map_err(|source| {
            WorkloadBenchError::InvalidMeasurements {
                file: path.display().to_string(),
                source,
            }
        })?;
        debug!(
            "Loaded {} samples from: {}",
            record.samples(),
            path.display()
        );
        records.push(record);
    }

    info!(
        "Loaded {} measurement files from: {}",
        records.len(),
        profile_dir.display()
    );
    Ok(records)
}

fn sorted_entries(dir: &Path) -> Result<Vec<(String, PathBuf)>, WorkloadBenchError> {
    let cannot_read = |source| WorkloadBenchError::CannotReadDirectory {
        path: dir.display().to_string(),
        source,
    };

    let mut entries = Vec::new();
    for entry in fs::read_dir(dir).map_err(cannot_read)? {
        let entry = entry.map_err(cannot_read)?;
        entries.push((entry.file_name().to_string_lossy().into_owned(), entry.path()));
    }
    entries.sort();
    Ok(entries)
}
