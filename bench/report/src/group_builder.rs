use crate::chart_view::ChartView;
use crate::composer::DivIdSequence;
use crate::plotting::chart::WorkloadChart;
use crate::plotting::palette::series_colors;
use crate::series_statistics::SeriesStatistics;
use crate::workload_family::{ThroughputAxis, WorkloadMetric};
use crate::workload_record::WorkloadRecord;
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;
use tracing::{debug, warn};

/// Throughput bands of record-backed charts. They overlap at the edges so a
/// workload near a boundary is visible next to both neighbours.
const THROUGHPUT_BANDS: [(RangeInclusive<u32>, &str); 3] = [
    (1..=9, "01..9"),
    (7..=20, "07..20"),
    (15..=256, "15..256"),
];

/// Charts emitted on top of the raw overlay and the two range charts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupChartOptions {
    /// Also plot the overlay averaged over groups of this many seconds.
    pub aggregate_seconds: Option<usize>,
    /// Also plot the standard deviation charts.
    pub deviation_charts: bool,
    /// Dark chart background.
    pub dark: bool,
}

/// Builds the charts of one workload family within one database/host profile.
pub struct GroupSummaryBuilder<'a> {
    database: &'a str,
    host: &'a str,
    records: &'a [WorkloadRecord],
    div_ids: &'a mut DivIdSequence,
    options: GroupChartOptions,
}

impl<'a> GroupSummaryBuilder<'a> {
    /// `records` is the full record list of the profile; series owners index
    /// into it.
    pub fn new(
        database: &'a str,
        host: &'a str,
        records: &'a [WorkloadRecord],
        div_ids: &'a mut DivIdSequence,
        options: GroupChartOptions,
    ) -> Self {
        Self {
            database,
            host,
            records,
            div_ids,
            options,
        }
    }

    /// Charts of `group`: the per-second overlay of `metric` against
    /// `time_line`, and the per-record average and range charts plotted
    /// against the thread count on `axis`. Records are plotted in the given
    /// order.
    pub fn build_group(
        &mut self,
        time_line: &SeriesStatistics,
        group: &[&WorkloadRecord],
        prefix: &str,
        metric: WorkloadMetric,
        axis: ThroughputAxis,
    ) -> Vec<ChartView> {
        let mut views = Vec::new();
        let series: Vec<&SeriesStatistics> = group.iter().map(|r| metric.select(r)).collect();

        let mut overlay = vec![time_line.clone()];
        overlay.extend(series.iter().map(|s| (*s).clone()));
        self.add_chart(&mut views, overlay, format!("{prefix} /1 sec"));

        if let Some(group_size) = self.options.aggregate_seconds {
            self.add_aggregated_chart(&mut views, time_line, &series, prefix, group_size);
        }

        let threads = || {
            meta_column(group, metric, format!("{prefix} Threads"), |record, _| {
                axis.threads(record) as f64
            })
        };
        let avg = || meta_column(group, metric, format!("{prefix} ops avg"), |_, s| s.mean);

        self.add_chart(
            &mut views,
            vec![
                threads(),
                avg(),
                meta_column(group, metric, format!("{prefix} ops 90% range size"), |_, s| {
                    s.range_size()
                }),
            ],
            format!("{prefix} Avg + 90% Range Size"),
        );

        if self.options.deviation_charts {
            self.add_chart(
                &mut views,
                vec![
                    threads(),
                    meta_column(group, metric, format!("{prefix} ops sd %"), |_, s| {
                        s.std_dev / s.mean.max(1.0) * 100.0
                    }),
                ],
                format!("{prefix} SD/Avg %"),
            );
            self.add_chart(
                &mut views,
                vec![
                    threads(),
                    avg(),
                    meta_column(group, metric, format!("{prefix} ops avg-sd*2"), |_, s| {
                        s.mean - s.std_dev * 2.0
                    }),
                    meta_column(group, metric, format!("{prefix} ops avg+sd*2"), |_, s| {
                        s.mean + s.std_dev * 2.0
                    }),
                ],
                format!("{prefix} Avg + 95% SD Range"),
            );
        }

        self.add_chart(
            &mut views,
            vec![
                threads(),
                avg(),
                meta_column(group, metric, format!("{prefix} ops upper"), |_, s| s.upper_90),
                meta_column(group, metric, format!("{prefix} ops lower"), |_, s| s.lower_90),
            ],
            format!("{prefix} Avg + 90% Range"),
        );

        debug!(
            "Built {} charts for {prefix} ({} records) in {}/{}",
            views.len(),
            group.len(),
            self.database,
            self.host
        );
        views
    }

    fn add_aggregated_chart(
        &mut self,
        views: &mut Vec<ChartView>,
        time_line: &SeriesStatistics,
        series: &[&SeriesStatistics],
        prefix: &str,
        group_size: usize,
    ) {
        let divisible = |s: &SeriesStatistics| group_size > 0 && s.len() % group_size == 0;
        if !divisible(time_line) || !series.iter().all(|s| divisible(*s)) {
            warn!(
                "Cannot aggregate {prefix} series in {}/{} by {group_size} seconds, skipping",
                self.database, self.host
            );
            return;
        }

        let mut columns = vec![time_line.aggregate(group_size)];
        columns.extend(series.iter().map(|s| s.aggregate(group_size)));
        self.add_chart(views, columns, format!("{prefix} /{group_size} sec"));
    }

    /// Emits a chart once, or once per throughput band when its series were
    /// read from records.
    fn add_chart(&mut self, views: &mut Vec<ChartView>, columns: Vec<SeriesStatistics>, title: String) {
        if !columns.iter().any(|c| c.owner.is_some()) {
            views.push(self.draw_chart(columns, title));
            return;
        }

        for (band, suffix) in THROUGHPUT_BANDS {
            let mut banded = columns[..1].to_vec();
            banded.extend(
                columns[1..]
                    .iter()
                    .filter(|c| {
                        self.max_throughput(c)
                            .is_some_and(|throughput| band.contains(&throughput))
                    })
                    .cloned(),
            );
            views.push(self.draw_chart(banded, format!("{title} {suffix}")));
        }
    }

    fn max_throughput(&self, column: &SeriesStatistics) -> Option<u32> {
        column
            .owner
            .map(|owner| owner.resolve(self.records).max_throughput)
    }

    fn draw_chart(&mut self, columns: Vec<SeriesStatistics>, title: String) -> ChartView {
        let colors = series_colors(&columns, self.records);
        let chart = WorkloadChart::from_columns(&title, &columns, &colors, self.options.dark);
        ChartView::new(
            self.database.to_owned(),
            self.host.to_owned(),
            title,
            self.div_ids.next_id(),
            columns,
            chart,
        )
    }
}

/// One value per record, derived from the record and its `metric` series.
fn meta_column(
    group: &[&WorkloadRecord],
    metric: WorkloadMetric,
    title: String,
    value: impl Fn(&WorkloadRecord, &SeriesStatistics) -> f64,
) -> SeriesStatistics {
    let data = group
        .iter()
        .map(|record| value(record, metric.select(record)))
        .collect();
    SeriesStatistics::compute(title, data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record_id::RecordId;
    use crate::workload_params::WorkloadParams;

    fn insert_record(id: usize, threads: u32, write_ops: Vec<f64>) -> WorkloadRecord {
        let len = write_ops.len();
        let time = (1..=len).map(|t| t as f64).collect();
        let columns = vec![
            ("Time".to_owned(), time),
            ("ReadOps".to_owned(), vec![0.0; len]),
            ("ReadErr".to_owned(), vec![0.0; len]),
            ("WriteOps".to_owned(), write_ops),
            ("WriteErr".to_owned(), vec![0.0; len]),
        ];
        WorkloadRecord::parse(
            RecordId(id),
            WorkloadParams::new(0, 0, threads, 0, 0),
            columns,
        )
        .unwrap()
    }

    fn build(records: &[WorkloadRecord], options: GroupChartOptions) -> Vec<ChartView> {
        let mut div_ids = DivIdSequence::default();
        let group: Vec<&WorkloadRecord> = records.iter().collect();
        let mut builder = GroupSummaryBuilder::new("pg", "host-a", records, &mut div_ids, options);
        builder.build_group(
            &records[0].time,
            &group,
            "Write Ins",
            WorkloadMetric::WriteOps,
            ThroughputAxis::Write,
        )
    }

    fn find<'v>(views: &'v [ChartView], title: &str) -> &'v ChartView {
        views
            .iter()
            .find(|v| v.title == title)
            .unwrap_or_else(|| panic!("missing chart {title}"))
    }

    fn points(view: &ChartView, column: usize) -> Vec<(f64, f64)> {
        view.columns[0]
            .data
            .iter()
            .copied()
            .zip(view.columns[column].data.iter().copied())
            .collect()
    }

    #[test]
    fn avg_meta_series_should_pair_threads_with_means_in_input_order() {
        let records = vec![
            insert_record(0, 5, vec![100.0; 4]),
            insert_record(1, 10, vec![160.0, 200.0, 160.0, 200.0]),
        ];
        let views = build(&records, GroupChartOptions::default());

        let view = find(&views, "Write Ins Avg + 90% Range Size");
        assert_eq!(view.columns[0].title, "Write Ins Threads");
        assert_eq!(view.columns[1].title, "Write Ins ops avg");
        assert_eq!(view.columns[2].title, "Write Ins ops 90% range size");
        assert_eq!(points(view, 1), vec![(5.0, 100.0), (10.0, 180.0)]);
    }

    #[test]
    fn range_chart_should_plot_average_and_both_bounds() {
        let records = vec![
            insert_record(0, 10, vec![160.0, 200.0, 160.0, 200.0]),
            insert_record(1, 5, vec![100.0; 4]),
        ];
        let views = build(&records, GroupChartOptions::default());

        let view = find(&views, "Write Ins Avg + 90% Range");
        assert_eq!(view.columns.len(), 4);
        assert_eq!(points(view, 1), vec![(10.0, 180.0), (5.0, 100.0)]);
        assert_eq!(view.columns[2].data[0], records[0].write_ops.upper_90);
        assert_eq!(view.columns[3].data[0], records[0].write_ops.lower_90);
        assert_eq!(
            find(&views, "Write Ins Avg + 90% Range Size").columns[2].data[1],
            records[1].write_ops.range_size()
        );
    }

    #[test]
    fn meta_charts_should_not_be_banded() {
        let records = vec![insert_record(0, 5, vec![100.0; 4])];
        let views = build(&records, GroupChartOptions::default());

        let titles: Vec<&str> = views.iter().map(|v| v.title.as_str()).collect();
        assert_eq!(
            titles,
            vec![
                "Write Ins /1 sec 01..9",
                "Write Ins /1 sec 07..20",
                "Write Ins /1 sec 15..256",
                "Write Ins Avg + 90% Range Size",
                "Write Ins Avg + 90% Range",
            ]
        );
        assert!(views[3].columns.iter().all(|c| c.owner.is_none()));
    }

    #[test]
    fn raw_overlay_should_split_records_into_overlapping_bands() {
        let records = vec![
            insert_record(0, 1, vec![10.0; 2]),
            insert_record(1, 8, vec![20.0; 2]),
            insert_record(2, 16, vec![30.0; 2]),
            insert_record(3, 300, vec![40.0; 2]),
        ];
        let views = build(&records, GroupChartOptions::default());

        let owners = |title: &str| -> Vec<Option<RecordId>> {
            find(&views, title).columns.iter().map(|c| c.owner).collect()
        };
        assert_eq!(
            owners("Write Ins /1 sec 01..9"),
            vec![Some(RecordId(0)), Some(RecordId(0)), Some(RecordId(1))]
        );
        assert_eq!(
            owners("Write Ins /1 sec 07..20"),
            vec![Some(RecordId(0)), Some(RecordId(1)), Some(RecordId(2))]
        );
        assert_eq!(
            owners("Write Ins /1 sec 15..256"),
            vec![Some(RecordId(0)), Some(RecordId(2))]
        );
    }

    #[test]
    fn empty_band_should_still_be_emitted_with_time_axis_only() {
        let records = vec![insert_record(0, 2, vec![10.0; 2])];
        let views = build(&records, GroupChartOptions::default());

        let view = find(&views, "Write Ins /1 sec 15..256");
        assert_eq!(view.columns.len(), 1);
        assert_eq!(view.series_count(), 0);
    }

    #[test]
    #[should_panic(expected = "record at position 1 carries id #0, expected #1")]
    fn records_should_sit_at_the_position_of_their_id() {
        let records = vec![
            insert_record(1, 2, vec![10.0; 2]),
            insert_record(0, 4, vec![20.0; 2]),
        ];
        build(&records, GroupChartOptions::default());
    }

    #[test]
    fn div_ids_should_be_unique_and_sequential() {
        let records = vec![insert_record(0, 2, vec![10.0; 2])];
        let views = build(&records, GroupChartOptions::default());

        let ids: Vec<&str> = views.iter().map(|v| v.div_id.as_str()).collect();
        assert_eq!(ids, vec!["chart_1", "chart_2", "chart_3", "chart_4", "chart_5"]);
    }

    #[test]
    fn optional_charts_should_follow_options() {
        let records = vec![insert_record(0, 4, vec![10.0, 20.0, 30.0, 40.0])];
        let views = build(
            &records,
            GroupChartOptions {
                aggregate_seconds: Some(2),
                deviation_charts: true,
                dark: false,
            },
        );

        let aggregated = find(&views, "Write Ins /2 sec 01..9");
        assert_eq!(aggregated.columns[1].data, vec![15.0, 35.0]);
        assert_eq!(aggregated.columns[1].mean, 25.0);
        assert!(views.iter().any(|v| v.title == "Write Ins SD/Avg %"));
        assert!(views.iter().any(|v| v.title == "Write Ins Avg + 95% SD Range"));
    }

    #[test]
    fn aggregation_should_be_skipped_when_not_divisible() {
        let records = vec![insert_record(0, 4, vec![10.0, 20.0, 30.0])];
        let views = build(
            &records,
            GroupChartOptions {
                aggregate_seconds: Some(2),
                ..Default::default()
            },
        );

        assert!(!views.iter().any(|v| v.title.contains("/2 sec")));
        assert_eq!(views.len(), 5);
    }
}
