pub mod chart_view;
pub mod record_id;
pub mod report;
pub mod series_statistics;
pub mod workload_family;
pub mod workload_params;
pub mod workload_record;
