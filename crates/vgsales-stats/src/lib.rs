//! Statistical building blocks for the video game sales engine.
//!
//! This crate is pure computation: every function takes an immutable slice
//! and returns a fresh value. Nothing here knows about regions, CSV files or
//! narrative text.
//!
//! - **Descriptive statistics**: mean, median, mode, sample variance, skewness
//! - **Percentiles**: linear-interpolation percentiles
//! - **Outliers**: Tukey fences around the interquartile range
//! - **Correlation**: Pearson's r over two aligned series
//! - **Trend**: mean first-difference over an ordered series
//! - **Histogram**: equal-width frequency bins
//! - **Summary**: all of the above for one series in a single snapshot
//!
//! # Conventions
//!
//! Statistical libraries disagree on defaults, so they are pinned here:
//!
//! - variance and standard deviation use the sample (`n - 1`) denominator
//! - percentiles interpolate linearly between closest ranks
//! - skewness is the adjusted Fisher-Pearson coefficient `G1`
//! - outliers lie strictly outside `[Q1 - 1.5 IQR, Q3 + 1.5 IQR]`
//!
//! # Examples
//!
//! ```
//! use vgsales_stats::summary::SummaryStatistics;
//!
//! let summary = SummaryStatistics::new([1.0, 2.0, 3.0, 4.0, 5.0]).unwrap();
//! assert_eq!(summary.stats.mean, 3.0);
//! assert_eq!(summary.stats.median, 3.0);
//! assert_eq!(summary.outliers.iqr, 2.0);
//! assert!(summary.outliers.values.is_empty());
//! ```
//!
//! ```
//! use vgsales_stats::{StatsError, correlation::pearson};
//!
//! let err = pearson(&[1.0, 2.0], &[1.0]).unwrap_err();
//! assert!(matches!(err, StatsError::LengthMismatch { left: 2, right: 1 }));
//! ```

pub mod correlation;
pub mod descriptive;
pub mod histogram;
pub mod outliers;
pub mod percentiles;
pub mod summary;
pub mod trend;

/// Errors raised when a statistic cannot be computed from its input.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum StatsError {
    #[display("cannot compute statistics over an empty series")]
    EmptyInput,
    #[display("paired series have different lengths ({left} vs {right})")]
    LengthMismatch { left: usize, right: usize },
    #[display("correlation is undefined for a series with zero variance")]
    ConstantInput,
}

/// Sorts a copy of `values` in ascending order.
pub(crate) fn sorted_copy(values: impl IntoIterator<Item = f64>) -> Vec<f64> {
    let mut sorted = values.into_iter().collect::<Vec<_>>();
    sorted.sort_by(f64::total_cmp);
    sorted
}
