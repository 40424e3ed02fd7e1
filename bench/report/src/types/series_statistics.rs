use super::record_id::RecordId;
use crate::utils::{max, min, round_float};
use serde::{Deserialize, Serialize};

/// Coverage target of the capped-sum functionals used for the range estimate.
const COVERAGE: f64 = 0.95;

/// Bisection stops once the bracket is narrower than this absolute width.
const BISECTION_WIDTH: f64 = 1.0;

/// Series whose total is below this value fall back to a `mean ± 2·sd` range.
const DEGENERATE_SUM: f64 = 1.0;

/// Summary statistics of one time-ordered series.
///
/// `sum`, `mean` and `std_dev` are fixed at construction. The range estimate
/// (`upper_90`, `lower_90`) is not a rank percentile: it is the point where the
/// capped sum `Σ min(x, v)` (resp. `Σ max(x, v)`) reaches 95% of the total, found
/// by bisection over `[min, max]`. `upper_90 >= lower_90` is not guaranteed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesStatistics {
    pub title: String,
    pub data: Vec<f64>,
    #[serde(serialize_with = "round_float")]
    pub sum: f64,
    #[serde(serialize_with = "round_float")]
    pub mean: f64,
    #[serde(serialize_with = "round_float")]
    pub std_dev: f64,
    #[serde(serialize_with = "round_float")]
    pub upper_90: f64,
    #[serde(serialize_with = "round_float")]
    pub lower_90: f64,
    /// Record this series was read from, if any. Derived meta series have none.
    pub owner: Option<RecordId>,
}

impl SeriesStatistics {
    /// Computes statistics for a series that belongs to no record.
    ///
    /// Panics if `data` is empty.
    pub fn compute(title: impl Into<String>, data: Vec<f64>) -> Self {
        Self::with_owner(None, title, data)
    }

    /// Computes statistics for a series read from the record `owner`.
    pub fn compute_owned(owner: RecordId, title: impl Into<String>, data: Vec<f64>) -> Self {
        Self::with_owner(Some(owner), title, data)
    }

    fn with_owner(owner: Option<RecordId>, title: impl Into<String>, data: Vec<f64>) -> Self {
        let title = title.into();
        assert!(!data.is_empty(), "series '{title}' must not be empty");

        let count = data.len() as f64;
        let sum: f64 = data.iter().sum();
        let mean = sum / count;
        let std_dev = (data.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / count).sqrt();

        let (upper_90, lower_90) = if sum < DEGENERATE_SUM {
            (mean + std_dev * 2.0, mean - std_dev * 2.0)
        } else {
            // Non-empty data always has both extremes.
            let low = min(&data).unwrap_or(mean);
            let high = max(&data).unwrap_or(mean);
            let upper = bisect(low, high, |x| {
                data.iter().map(|&v| x.min(v)).sum::<f64>() / sum - COVERAGE
            });
            let lower = bisect(low, high, |x| {
                data.iter().map(|&v| x.max(v)).sum::<f64>() / sum - COVERAGE
            });
            (upper, lower)
        };

        Self {
            title,
            data,
            sum,
            mean,
            std_dev,
            upper_90,
            lower_90,
            owner,
        }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Width of the estimated 90% range.
    pub fn range_size(&self) -> f64 {
        self.upper_90 - self.lower_90
    }

    /// Downsamples the series by averaging contiguous groups of `group_size`
    /// samples.
    ///
    /// The returned series keeps `sum`, `mean` and `std_dev` of `self`; only the
    /// plotted data and the range estimate describe the coarser samples.
    /// Panics unless the length is a multiple of `group_size`.
    pub fn aggregate(&self, group_size: usize) -> SeriesStatistics {
        assert!(group_size > 0, "aggregation group size must be positive");
        assert_eq!(
            self.data.len() % group_size,
            0,
            "series '{}' of {} samples cannot be split into groups of {}",
            self.title,
            self.data.len(),
            group_size
        );

        let data = self
            .data
            .chunks(group_size)
            .map(|group| group.iter().sum::<f64>() / group_size as f64)
            .collect();

        let mut aggregated =
            SeriesStatistics::with_owner(self.owner, format!("{}_agg", self.title), data);
        aggregated.sum = self.sum;
        aggregated.mean = self.mean;
        aggregated.std_dev = self.std_dev;
        aggregated
    }
}

/// Finds a root of the non-decreasing `g` inside `[a, b]`.
///
/// Assumes `g(a) <= 0 <= g(b)` without checking it. Returns the bracket midpoint
/// as soon as the bracket is narrower than [`BISECTION_WIDTH`], or right away
/// when the bracket width is not finite.
fn bisect(mut a: f64, mut b: f64, g: impl Fn(f64) -> f64) -> f64 {
    loop {
        let c = (a + b) / 2.0;
        let width = b - a;
        if !width.is_finite() || width < BISECTION_WIDTH {
            return c;
        }
        if g(c) > 0.0 {
            b = c;
        } else {
            a = c;
        }
    }
}
