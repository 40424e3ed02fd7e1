mod classifier;
mod composer;
mod error;
mod generator;
mod group_builder;
mod prints;
mod types;
mod utils;

pub mod plotting;

pub use classifier::{ClassifiedWorkloads, WorkloadClassifier};
pub use composer::{DivIdSequence, ReportComposer};
pub use error::ReportError;
pub use generator::{ProfileReport, ProfileReportGenerator};
pub use group_builder::{GroupChartOptions, GroupSummaryBuilder};
pub use types::*;
