use crate::error::ReportError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

const SHARED_POOL: &str = "sp";
const WRITE_POOL: &str = "wp";
const READ_LITE: &str = "r_lite";
const READ_HEAVY: &str = "r_heavy";
const WRITE_INSERT: &str = "w_ins";
const WRITE_UPDATE_TINY: &str = "w_up_tiny";
const WRITE_UPDATE_WIDE: &str = "w_up_wide";

/// Workload configuration of one measurement file.
///
/// The thread counts of the five operation kinds are required. Pool sizes are
/// optional and every other key ends up in `extra`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct WorkloadParams {
    pub shared_pool: Option<u32>,
    pub write_pool: Option<u32>,
    /// Threads reading single rows by id.
    pub r_lite: u32,
    /// Threads reading row ranges.
    pub r_heavy: u32,
    /// Threads inserting rows.
    pub w_ins: u32,
    /// Threads updating a narrow column.
    pub w_up_tiny: u32,
    /// Threads updating a wide column.
    pub w_up_wide: u32,
    pub extra: BTreeMap<String, i64>,
}

impl WorkloadParams {
    pub fn new(r_lite: u32, r_heavy: u32, w_ins: u32, w_up_tiny: u32, w_up_wide: u32) -> Self {
        Self {
            r_lite,
            r_heavy,
            w_ins,
            w_up_tiny,
            w_up_wide,
            ..Default::default()
        }
    }

    /// Builds the parameters from `key=value` pairs, rejecting duplicated keys,
    /// missing workload keys and out-of-range values of known keys.
    pub fn from_pairs<K, I>(pairs: I) -> Result<Self, ReportError>
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, i64)>,
    {
        let mut values = BTreeMap::new();
        for (key, value) in pairs {
            let key = key.into();
            if values.contains_key(&key) {
                return Err(ReportError::DuplicatedParameter(key));
            }
            values.insert(key, value);
        }

        let shared_pool = take_optional(&mut values, SHARED_POOL)?;
        let write_pool = take_optional(&mut values, WRITE_POOL)?;
        let r_lite = take_required(&mut values, READ_LITE)?;
        let r_heavy = take_required(&mut values, READ_HEAVY)?;
        let w_ins = take_required(&mut values, WRITE_INSERT)?;
        let w_up_tiny = take_required(&mut values, WRITE_UPDATE_TINY)?;
        let w_up_wide = take_required(&mut values, WRITE_UPDATE_WIDE)?;

        checked_throughput(&[(READ_LITE, r_lite), (READ_HEAVY, r_heavy)])?;
        checked_throughput(&[
            (WRITE_INSERT, w_ins),
            (WRITE_UPDATE_TINY, w_up_tiny),
            (WRITE_UPDATE_WIDE, w_up_wide),
        ])?;

        Ok(Self {
            shared_pool,
            write_pool,
            r_lite,
            r_heavy,
            w_ins,
            w_up_tiny,
            w_up_wide,
            extra: values,
        })
    }

    pub fn read_throughput(&self) -> u32 {
        self.r_lite.saturating_add(self.r_heavy)
    }

    pub fn write_throughput(&self) -> u32 {
        self.w_ins
            .saturating_add(self.w_up_tiny)
            .saturating_add(self.w_up_wide)
    }

    /// Label of the read mix, e.g. `r4_R0`.
    pub fn read_signature(&self) -> String {
        format!("r{}_R{}", self.r_lite, self.r_heavy)
    }

    /// Label of the write mix, e.g. `i4_u0_U0`.
    pub fn write_signature(&self) -> String {
        format!("i{}_u{}_U{}", self.w_ins, self.w_up_tiny, self.w_up_wide)
    }
}

impl fmt::Display for WorkloadParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(shared_pool) = self.shared_pool {
            write!(f, "{SHARED_POOL}={shared_pool},")?;
        }
        if let Some(write_pool) = self.write_pool {
            write!(f, "{WRITE_POOL}={write_pool},")?;
        }
        write!(
            f,
            "{READ_LITE}={},{READ_HEAVY}={},{WRITE_INSERT}={},{WRITE_UPDATE_TINY}={},{WRITE_UPDATE_WIDE}={}",
            self.r_lite, self.r_heavy, self.w_ins, self.w_up_tiny, self.w_up_wide
        )?;
        for (key, value) in &self.extra {
            write!(f, ",{key}={value}")?;
        }
        Ok(())
    }
}

fn take_optional(
    values: &mut BTreeMap<String, i64>,
    key: &'static str,
) -> Result<Option<u32>, ReportError> {
    values
        .remove(key)
        .map(|value| {
            u32::try_from(value).map_err(|_| ReportError::InvalidParameter {
                key: key.to_owned(),
                value,
            })
        })
        .transpose()
}

/// Total thread count of one axis, rejecting the first count that overflows it.
fn checked_throughput(counts: &[(&'static str, u32)]) -> Result<u32, ReportError> {
    counts.iter().try_fold(0u32, |total, &(key, value)| {
        total
            .checked_add(value)
            .ok_or_else(|| ReportError::InvalidParameter {
                key: key.to_owned(),
                value: i64::from(value),
            })
    })
}

fn take_required(values: &mut BTreeMap<String, i64>, key: &'static str) -> Result<u32, ReportError> {
    take_optional(values, key)?.ok_or(ReportError::MissingParameter(key))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(raw: &[(&'static str, i64)]) -> Vec<(&'static str, i64)> {
        raw.to_vec()
    }

    #[test]
    fn from_pairs_should_fill_named_fields_and_keep_unknown_keys() {
        let params = WorkloadParams::from_pairs(pairs(&[
            ("sp", 16),
            ("wp", 4),
            ("r_lite", 0),
            ("r_heavy", 2),
            ("w_ins", 0),
            ("w_up_tiny", 0),
            ("w_up_wide", 0),
            ("batch", 100),
        ]))
        .unwrap();

        assert_eq!(params.shared_pool, Some(16));
        assert_eq!(params.write_pool, Some(4));
        assert_eq!(params.r_heavy, 2);
        assert_eq!(params.read_throughput(), 2);
        assert_eq!(params.write_throughput(), 0);
        assert_eq!(params.extra.get("batch"), Some(&100));
        assert_eq!(params.extra.len(), 1);
    }

    #[test]
    fn from_pairs_should_accept_missing_pool_sizes() {
        let params = WorkloadParams::from_pairs(pairs(&[
            ("r_lite", 1),
            ("r_heavy", 0),
            ("w_ins", 3),
            ("w_up_tiny", 2),
            ("w_up_wide", 1),
        ]))
        .unwrap();

        assert_eq!(params.shared_pool, None);
        assert_eq!(params.write_pool, None);
        assert_eq!(params.write_throughput(), 6);
    }

    #[test]
    fn from_pairs_should_reject_missing_workload_key() {
        let result = WorkloadParams::from_pairs(pairs(&[
            ("r_lite", 1),
            ("r_heavy", 0),
            ("w_ins", 3),
            ("w_up_tiny", 2),
        ]));

        assert_eq!(result, Err(ReportError::MissingParameter("w_up_wide")));
    }

    #[test]
    fn from_pairs_should_reject_negative_thread_count() {
        let result = WorkloadParams::from_pairs(pairs(&[
            ("r_lite", -1),
            ("r_heavy", 0),
            ("w_ins", 0),
            ("w_up_tiny", 0),
            ("w_up_wide", 0),
        ]));

        assert_eq!(
            result,
            Err(ReportError::InvalidParameter {
                key: "r_lite".to_owned(),
                value: -1
            })
        );
    }

    #[test]
    fn from_pairs_should_reject_thread_counts_overflowing_axis_throughput() {
        let result = WorkloadParams::from_pairs(pairs(&[
            ("r_lite", 4_000_000_000),
            ("r_heavy", 4_000_000_000),
            ("w_ins", 0),
            ("w_up_tiny", 0),
            ("w_up_wide", 0),
        ]));
        assert_eq!(
            result,
            Err(ReportError::InvalidParameter {
                key: "r_heavy".to_owned(),
                value: 4_000_000_000
            })
        );

        let result = WorkloadParams::from_pairs(pairs(&[
            ("r_lite", 0),
            ("r_heavy", 0),
            ("w_ins", 2_000_000_000),
            ("w_up_tiny", 2_000_000_000),
            ("w_up_wide", 1_000_000_000),
        ]));
        assert_eq!(
            result,
            Err(ReportError::InvalidParameter {
                key: "w_up_wide".to_owned(),
                value: 1_000_000_000
            })
        );
    }

    #[test]
    fn throughput_of_hand_built_params_should_saturate() {
        let params = WorkloadParams::new(u32::MAX, 1, u32::MAX, u32::MAX, 0);

        assert_eq!(params.read_throughput(), u32::MAX);
        assert_eq!(params.write_throughput(), u32::MAX);
    }

    #[test]
    fn from_pairs_should_reject_duplicated_key() {
        let result = WorkloadParams::from_pairs(pairs(&[("w_ins", 1), ("w_ins", 2)]));

        assert_eq!(
            result,
            Err(ReportError::DuplicatedParameter("w_ins".to_owned()))
        );
    }

    #[test]
    fn signatures_should_encode_thread_mix() {
        let params = WorkloadParams::new(3, 1, 8, 0, 2);

        assert_eq!(params.read_signature(), "r3_R1");
        assert_eq!(params.write_signature(), "i8_u0_U2");
        assert_eq!(
            params.to_string(),
            "r_lite=3,r_heavy=1,w_ins=8,w_up_tiny=0,w_up_wide=2"
        );
    }
}
