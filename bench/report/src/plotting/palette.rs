use crate::series_statistics::SeriesStatistics;
use crate::workload_record::WorkloadRecord;

pub const PALETTE: [&str; 26] = [
    "#3366CC", "#DC3912", "#FF9900", "#109618", "#990099", "#3B3EAC", "#0099C6", "#DD4477",
    "#66AA00", "#B82E2E", "#316395", "#994499", "#22AA99", "#AAAA11", "#6633CC", "#E67300",
    "#8B0707", "#329262", "#5574A6", "#3B3EAC", "#7401DF", "#8A0829", "#5F4C0B", "#8A2908",
    "#3104B4", "#00FFBF",
];

pub fn color(slot: usize) -> &'static str {
    PALETTE[slot % PALETTE.len()]
}

/// Colours for `columns[1..]`.
///
/// A series read from a record is coloured after the record's thread count so
/// the same workload keeps its colour across charts; derived series are
/// coloured by position.
pub fn series_colors(columns: &[SeriesStatistics], records: &[WorkloadRecord]) -> Vec<&'static str> {
    columns
        .iter()
        .enumerate()
        .skip(1)
        .map(|(index, column)| {
            match column.owner {
                Some(owner) => color(owner.resolve(records).max_throughput as usize),
                None => color(index - 1),
            }
        })
        .collect()
}
