use super::series_statistics::SeriesStatistics;
use crate::plotting::chart::WorkloadChart;
use derive_new::new;
use std::fmt;

/// One chart placed in the report matrix.
///
/// `columns[0]` is the x axis; every later column is drawn as one line.
#[derive(new)]
pub struct ChartView {
    pub database: String,
    pub host: String,
    pub title: String,
    /// Unique handle of the element the chart is drawn into.
    pub div_id: String,
    pub columns: Vec<SeriesStatistics>,
    pub chart: WorkloadChart,
}

impl ChartView {
    /// Column key of the report matrix.
    pub fn profile(&self) -> String {
        format!("{}/{}", self.database, self.host)
    }

    pub fn series_count(&self) -> usize {
        self.columns.len().saturating_sub(1)
    }
}

impl fmt::Debug for ChartView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChartView")
            .field("database", &self.database)
            .field("host", &self.host)
            .field("title", &self.title)
            .field("div_id", &self.div_id)
            .field("columns", &self.columns.len())
            .finish()
    }
}
