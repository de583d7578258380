use serde::Serialize;

use crate::{
    StatsError, descriptive::DescriptiveStats, outliers::OutlierReport, percentiles::Percentiles,
};

/// Percentile points reported in every summary.
pub const SUMMARY_PERCENTILES: [f64; 3] = [25.0, 50.0, 75.0];

/// Complete statistical snapshot of one series.
///
/// Combines:
/// - Descriptive statistics (mean, median, mode, variance, skewness, ...)
/// - The quartiles as percentile values
/// - The interquartile range with its Tukey fences and outliers
///
/// # Examples
///
/// ```
/// use vgsales_stats::summary::SummaryStatistics;
///
/// let summary = SummaryStatistics::new([0.5, 0.1, 0.2, 0.1, 12.0]).unwrap();
/// assert_eq!(summary.stats.mode, 0.1);
/// assert_eq!(summary.p25(), 0.1);
/// assert_eq!(summary.p75(), 0.5);
/// assert_eq!(summary.outliers.values, vec![12.0]);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryStatistics {
    /// Central tendency, dispersion and shape.
    pub stats: DescriptiveStats,
    /// P25, P50 and P75.
    pub percentiles: Percentiles,
    /// IQR, fences and outlier values.
    pub outliers: OutlierReport,
}

impl SummaryStatistics {
    /// Computes a summary from unsorted values.
    ///
    /// # Errors
    ///
    /// Returns [`StatsError::EmptyInput`] if `values` is empty.
    pub fn new<I>(values: I) -> Result<Self, StatsError>
    where
        I: IntoIterator<Item = f64>,
    {
        let sorted = crate::sorted_copy(values);
        Self::from_sorted(&sorted)
    }

    /// Computes a summary from values sorted in ascending order.
    ///
    /// # Panics
    ///
    /// Panics if `sorted_values` is not sorted in ascending order.
    pub fn from_sorted(sorted_values: &[f64]) -> Result<Self, StatsError> {
        let stats = DescriptiveStats::from_sorted(sorted_values)?;
        let percentiles = Percentiles::from_sorted(sorted_values, &SUMMARY_PERCENTILES)
            .ok_or(StatsError::EmptyInput)?;
        let outliers = OutlierReport::from_sorted(sorted_values)?;

        Ok(Self {
            stats,
            percentiles,
            outliers,
        })
    }

    /// 25th percentile.
    #[must_use]
    pub fn p25(&self) -> f64 {
        self.outliers.q1
    }

    /// 50th percentile, identical to the median.
    #[must_use]
    pub fn p50(&self) -> f64 {
        self.stats.median
    }

    /// 75th percentile.
    #[must_use]
    pub fn p75(&self) -> f64 {
        self.outliers.q3
    }

    #[must_use]
    pub fn iqr(&self) -> f64 {
        self.outliers.iqr
    }
}
