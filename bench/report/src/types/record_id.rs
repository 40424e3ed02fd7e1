use super::workload_record::WorkloadRecord;
use derive_more::Display;
use serde::{Deserialize, Serialize};

/// Position of a workload record within its profile's record list.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display, Serialize, Deserialize,
)]
#[display("#{_0}")]
pub struct RecordId(pub usize);

impl RecordId {
    /// The record this id points at in its profile's record list.
    ///
    /// Panics if the position is out of range or holds a record with another id.
    pub fn resolve<'r>(&self, records: &'r [WorkloadRecord]) -> &'r WorkloadRecord {
        let record = records.get(self.0).unwrap_or_else(|| {
            panic!(
                "record {self} is out of range of {} profile records",
                records.len()
            )
        });
        assert_eq!(
            record.id, *self,
            "record at position {} carries id {}, expected {self}",
            self.0, record.id
        );
        record
    }
}
