//! Tukey-fence outlier detection.
//!
//! Every feature that reports an interquartile range or an outlier count goes
//! through [`OutlierReport::from_sorted`], so the numbers agree wherever they
//! are displayed.

use serde::Serialize;

use crate::{StatsError, percentiles::compute_percentile};

/// Multiplier applied to the IQR to place the fences.
pub const TUKEY_FACTOR: f64 = 1.5;

/// Interquartile range, Tukey fences and the values outside them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OutlierReport {
    /// 25th percentile.
    pub q1: f64,
    /// 75th percentile.
    pub q3: f64,
    /// `q3 - q1`.
    pub iqr: f64,
    /// `q1 - 1.5 * iqr`.
    pub lower_fence: f64,
    /// `q3 + 1.5 * iqr`.
    pub upper_fence: f64,
    /// Values strictly below the lower fence or strictly above the upper
    /// fence, in ascending order. Duplicates are kept.
    pub values: Vec<f64>,
}

impl OutlierReport {
    /// Detects outliers in unsorted values.
    ///
    /// # Examples
    ///
    /// ```
    /// use vgsales_stats::outliers::OutlierReport;
    ///
    /// let report = OutlierReport::new([1.0, 2.0, 3.0, 4.0, 100.0]).unwrap();
    /// assert_eq!(report.iqr, 2.0);
    /// assert_eq!(report.upper_fence, 7.0);
    /// assert_eq!(report.values, vec![100.0]);
    /// ```
    pub fn new<I>(values: I) -> Result<Self, StatsError>
    where
        I: IntoIterator<Item = f64>,
    {
        let sorted = crate::sorted_copy(values);
        Self::from_sorted(&sorted)
    }

    /// Detects outliers in values sorted in ascending order.
    ///
    /// # Panics
    ///
    /// Panics if `sorted_values` is not sorted in ascending order.
    pub fn from_sorted(sorted_values: &[f64]) -> Result<Self, StatsError> {
        assert!(
            sorted_values.is_sorted_by(|a, b| a <= b),
            "values must be sorted in ascending order"
        );

        let q1 = compute_percentile(sorted_values, 25.0).ok_or(StatsError::EmptyInput)?;
        let q3 = compute_percentile(sorted_values, 75.0).ok_or(StatsError::EmptyInput)?;
        let iqr = q3 - q1;
        let lower_fence = q1 - TUKEY_FACTOR * iqr;
        let upper_fence = q3 + TUKEY_FACTOR * iqr;
        let values = sorted_values
            .iter()
            .copied()
            .filter(|&v| v < lower_fence || v > upper_fence)
            .collect();

        Ok(Self {
            q1,
            q3,
            iqr,
            lower_fence,
            upper_fence,
            values,
        })
    }

    #[must_use]
    pub fn count(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn has_outliers(&self) -> bool {
        !self.values.is_empty()
    }

    /// Number of outliers above the upper fence.
    #[must_use]
    pub fn high_count(&self) -> usize {
        self.values.iter().filter(|&&v| v > self.upper_fence).count()
    }

    /// Number of outliers below the lower fence.
    #[must_use]
    pub fn low_count(&self) -> usize {
        self.values.iter().filter(|&&v| v < self.lower_fence).count()
    }

    /// Returns true if `value` lies strictly outside the fences.
    #[must_use]
    pub fn is_outlier(&self, value: f64) -> bool {
        value < self.lower_fence || value > self.upper_fence
    }
}
