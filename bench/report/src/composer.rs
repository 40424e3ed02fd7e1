use crate::chart_view::ChartView;
use std::collections::BTreeSet;

/// Source of unique chart element ids for one report run.
#[derive(Debug, Default)]
pub struct DivIdSequence {
    last: u64,
}

impl DivIdSequence {
    pub fn next_id(&mut self) -> String {
        self.last += 1;
        format!("chart_{}", self.last)
    }
}

/// Collects chart views of any number of profiles and indexes them by
/// `(profile, title)` for the report matrix.
#[derive(Debug, Default)]
pub struct ReportComposer {
    chart_views: Vec<ChartView>,
}

impl ReportComposer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, chart_view: ChartView) {
        self.chart_views.push(chart_view);
    }

    pub fn merge(&mut self, other: ReportComposer) {
        self.chart_views.extend(other.chart_views);
    }

    /// Matrix rows: distinct chart titles, sorted.
    pub fn list_titles(&self) -> Vec<String> {
        self.chart_views
            .iter()
            .map(|cv| cv.title.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Matrix columns: distinct `database/host` profiles, sorted.
    pub fn list_profiles(&self) -> Vec<String> {
        self.chart_views
            .iter()
            .map(|cv| cv.profile())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Panics if more than one view is registered under the same key.
    pub fn lookup(&self, profile: &str, title: &str) -> Option<&ChartView> {
        let mut matching = self
            .chart_views
            .iter()
            .filter(|cv| cv.title == title && cv.profile() == profile);
        let found = matching.next();
        assert!(
            matching.next().is_none(),
            "duplicated chart '{title}' for profile '{profile}'"
        );
        found
    }

    pub fn iter(&self) -> impl Iterator<Item = &ChartView> {
        self.chart_views.iter()
    }

    pub fn len(&self) -> usize {
        self.chart_views.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chart_views.is_empty()
    }
}
