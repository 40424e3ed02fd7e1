use crate::workload_family::WorkloadFamily;
use crate::workload_record::WorkloadRecord;
use tracing::debug;

/// Records split into the five workload families, input order preserved.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ClassifiedWorkloads<'a> {
    pub insert: Vec<&'a WorkloadRecord>,
    pub tiny_update: Vec<&'a WorkloadRecord>,
    pub wide_update: Vec<&'a WorkloadRecord>,
    pub lite_read: Vec<&'a WorkloadRecord>,
    pub heavy_read: Vec<&'a WorkloadRecord>,
}

impl<'a> ClassifiedWorkloads<'a> {
    pub fn get(&self, family: WorkloadFamily) -> &[&'a WorkloadRecord] {
        match family {
            WorkloadFamily::Insert => &self.insert,
            WorkloadFamily::TinyUpdate => &self.tiny_update,
            WorkloadFamily::WideUpdate => &self.wide_update,
            WorkloadFamily::LiteRead => &self.lite_read,
            WorkloadFamily::HeavyRead => &self.heavy_read,
        }
    }

    fn get_mut(&mut self, family: WorkloadFamily) -> &mut Vec<&'a WorkloadRecord> {
        match family {
            WorkloadFamily::Insert => &mut self.insert,
            WorkloadFamily::TinyUpdate => &mut self.tiny_update,
            WorkloadFamily::WideUpdate => &mut self.wide_update,
            WorkloadFamily::LiteRead => &mut self.lite_read,
            WorkloadFamily::HeavyRead => &mut self.heavy_read,
        }
    }

    /// Non-empty families in [`WorkloadFamily::ALL`] order.
    pub fn iter(&self) -> impl Iterator<Item = (WorkloadFamily, &[&'a WorkloadRecord])> + '_ {
        WorkloadFamily::ALL
            .into_iter()
            .map(|family| (family, self.get(family)))
            .filter(|(_, records)| !records.is_empty())
    }
}

pub struct WorkloadClassifier;

impl WorkloadClassifier {
    /// Assigns each record to the family whose operation kind is the only
    /// active one. Mixed workloads belong to no family and are skipped.
    pub fn classify(records: &[WorkloadRecord]) -> ClassifiedWorkloads<'_> {
        let mut classified = ClassifiedWorkloads::default();
        for record in records {
            match WorkloadFamily::ALL
                .into_iter()
                .find(|family| family.contains(record))
            {
                Some(family) => classified.get_mut(family).push(record),
                None => debug!(
                    "Record {} ({}) matches no workload family, skipping",
                    record.id, record.params
                ),
            }
        }
        classified
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record_id::RecordId;
    use crate::workload_params::WorkloadParams;

    fn record(id: usize, params: WorkloadParams) -> WorkloadRecord {
        let columns = ["Time", "ReadOps", "ReadErr", "WriteOps", "WriteErr"]
            .iter()
            .map(|title| (title.to_string(), vec![1.0, 2.0]))
            .collect();
        WorkloadRecord::parse(RecordId(id), params, columns).unwrap()
    }

    fn families_of(classified: &ClassifiedWorkloads, id: usize) -> Vec<WorkloadFamily> {
        WorkloadFamily::ALL
            .into_iter()
            .filter(|family| classified.get(*family).iter().any(|r| r.id == RecordId(id)))
            .collect()
    }

    #[test]
    fn given_insert_only_record_it_should_belong_to_insert_family_only() {
        let records = vec![record(0, WorkloadParams::new(0, 0, 5, 0, 0))];
        let classified = WorkloadClassifier::classify(&records);

        assert_eq!(families_of(&classified, 0), vec![WorkloadFamily::Insert]);
        assert_eq!(classified.insert.len(), 1);
        assert!(classified.tiny_update.is_empty());
        assert!(classified.wide_update.is_empty());
        assert!(classified.lite_read.is_empty());
        assert!(classified.heavy_read.is_empty());
    }

    #[test]
    fn each_exclusive_parameter_should_select_its_family() {
        let records = vec![
            record(0, WorkloadParams::new(0, 0, 0, 2, 0)),
            record(1, WorkloadParams::new(0, 0, 0, 0, 3)),
            record(2, WorkloadParams::new(4, 0, 0, 0, 0)),
            record(3, WorkloadParams::new(0, 8, 0, 0, 0)),
        ];
        let classified = WorkloadClassifier::classify(&records);

        assert_eq!(families_of(&classified, 0), vec![WorkloadFamily::TinyUpdate]);
        assert_eq!(families_of(&classified, 1), vec![WorkloadFamily::WideUpdate]);
        assert_eq!(families_of(&classified, 2), vec![WorkloadFamily::LiteRead]);
        assert_eq!(families_of(&classified, 3), vec![WorkloadFamily::HeavyRead]);
    }

    #[test]
    fn mixed_records_should_be_excluded_from_all_families() {
        let records = vec![
            record(0, WorkloadParams::new(1, 0, 1, 0, 0)),
            record(1, WorkloadParams::new(0, 0, 2, 2, 0)),
            record(2, WorkloadParams::new(3, 3, 0, 0, 0)),
            record(3, WorkloadParams::new(0, 0, 0, 0, 0)),
        ];
        let classified = WorkloadClassifier::classify(&records);

        assert_eq!(classified.iter().count(), 0);
    }

    #[test]
    fn classification_should_preserve_input_order() {
        let records = vec![
            record(0, WorkloadParams::new(0, 0, 16, 0, 0)),
            record(1, WorkloadParams::new(0, 0, 1, 0, 0)),
            record(2, WorkloadParams::new(0, 0, 4, 0, 0)),
        ];
        let classified = WorkloadClassifier::classify(&records);

        let ids: Vec<RecordId> = classified.insert.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![RecordId(0), RecordId(1), RecordId(2)]);
        let families: Vec<WorkloadFamily> = classified.iter().map(|(f, _)| f).collect();
        assert_eq!(families, vec![WorkloadFamily::Insert]);
    }
}
