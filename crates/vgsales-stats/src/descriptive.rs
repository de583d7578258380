use serde::Serialize;

use crate::{StatsError, percentiles::compute_percentile};

/// Descriptive statistics summarizing a dataset.
///
/// This structure contains common measures of central tendency, dispersion
/// and shape for a dataset of `f64` values.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DescriptiveStats {
    /// The number of values in the dataset.
    pub count: usize,
    /// The minimum value in the dataset.
    pub min: f64,
    /// The maximum value in the dataset.
    pub max: f64,
    /// `max - min`.
    pub range: f64,
    /// The arithmetic mean of the dataset.
    pub mean: f64,
    /// The median (50th percentile, linear interpolation).
    pub median: f64,
    /// The most frequent value. Ties resolve to the smallest value.
    pub mode: f64,
    /// The sample variance (`n - 1` denominator). Zero for a single value.
    pub variance: f64,
    /// The sample standard deviation.
    pub std_dev: f64,
    /// Adjusted Fisher-Pearson skewness. `None` for fewer than three values.
    pub skewness: Option<f64>,
}

impl DescriptiveStats {
    /// Computes descriptive statistics from unsorted values.
    ///
    /// # Errors
    ///
    /// Returns [`StatsError::EmptyInput`] if the dataset is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vgsales_stats::descriptive::DescriptiveStats;
    /// let stats = DescriptiveStats::new([5.0, 2.0, 4.0, 1.0, 3.0]).unwrap();
    /// assert_eq!(stats.min, 1.0);
    /// assert_eq!(stats.max, 5.0);
    /// assert_eq!(stats.mean, 3.0);
    /// assert_eq!(stats.median, 3.0);
    /// assert_eq!(stats.variance, 2.5);
    /// ```
    pub fn new<I>(values: I) -> Result<Self, StatsError>
    where
        I: IntoIterator<Item = f64>,
    {
        let sorted = crate::sorted_copy(values);
        Self::from_sorted(&sorted)
    }

    /// Computes descriptive statistics from pre-sorted values.
    ///
    /// # Panics
    ///
    /// Panics if `sorted_values` is not sorted in ascending order.
    #[expect(clippy::cast_precision_loss)]
    pub fn from_sorted(sorted_values: &[f64]) -> Result<Self, StatsError> {
        assert!(
            sorted_values.is_sorted_by(|a, b| a <= b),
            "values must be sorted in ascending order"
        );

        let min = *sorted_values.first().ok_or(StatsError::EmptyInput)?;
        let max = *sorted_values.last().ok_or(StatsError::EmptyInput)?;
        let count = sorted_values.len();
        let n = count as f64;
        let mean = sorted_values.iter().sum::<f64>() / n;
        let median = compute_percentile(sorted_values, 50.0).ok_or(StatsError::EmptyInput)?;
        let mode = sorted_mode(sorted_values).ok_or(StatsError::EmptyInput)?;

        let sum_sq = sorted_values
            .iter()
            .map(|v| (v - mean).powi(2))
            .sum::<f64>();
        let variance = if count > 1 { sum_sq / (n - 1.0) } else { 0.0 };
        let std_dev = variance.sqrt();
        let skewness = adjusted_skewness(sorted_values, mean);

        Ok(Self {
            count,
            min,
            max,
            range: max - min,
            mean,
            median,
            mode,
            variance,
            std_dev,
            skewness,
        })
    }
}

/// Returns the most frequent value of a sorted slice.
///
/// Equal values are adjacent after sorting, so the first longest run wins,
/// which makes the smallest value the tie-breaker.
///
/// ```
/// use vgsales_stats::descriptive::sorted_mode;
///
/// assert_eq!(sorted_mode(&[1.0, 2.0, 2.0, 3.0, 3.0]), Some(2.0));
/// assert_eq!(sorted_mode(&[0.5, 0.7, 0.9]), Some(0.5));
/// assert_eq!(sorted_mode(&[]), None);
/// ```
#[must_use]
pub fn sorted_mode(sorted_values: &[f64]) -> Option<f64> {
    let mut best: Option<(f64, usize)> = None;
    for run in sorted_values.chunk_by(|a, b| a == b) {
        let candidate = (run[0], run.len());
        match best {
            Some((_, len)) if len >= candidate.1 => {}
            _ => best = Some(candidate),
        }
    }
    best.map(|(value, _)| value)
}

/// Adjusted Fisher-Pearson standardized moment coefficient.
///
/// `G1 = sqrt(n (n - 1)) / (n - 2) * m3 / m2^1.5`, where `m2` and `m3` are
/// the biased central moments. Zero spread yields `0.0`.
#[expect(clippy::cast_precision_loss)]
fn adjusted_skewness(values: &[f64], mean: f64) -> Option<f64> {
    let count = values.len();
    if count < 3 {
        return None;
    }
    let n = count as f64;
    let (m2, m3) = values.iter().fold((0.0, 0.0), |(m2, m3), v| {
        let d = v - mean;
        (m2 + d * d, m3 + d * d * d)
    });
    let m2 = m2 / n;
    let m3 = m3 / n;
    if m2 == 0.0 {
        return Some(0.0);
    }
    let g1 = m3 / m2.powf(1.5);
    Some((n * (n - 1.0)).sqrt() / (n - 2.0) * g1)
}
