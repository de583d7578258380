//! Tunable constants behind the qualitative labels.
//!
//! All thresholds are in the unit of the value they are compared against:
//! millions of units for spreads, dimensionless for skewness and r.

use serde::{Deserialize, Serialize};
use vgsales_stats::histogram::DEFAULT_NUM_BINS;

/// Largest accepted `histogram_bins` (`u16::MAX`, the bound of the CLI
/// `--bins` flag).
pub const MAX_HISTOGRAM_BINS: usize = 65_535;

/// Thresholds used by the classifiers in [`crate::classify`].
///
/// Every field has a default, so a JSON override file only needs the keys it
/// changes:
///
/// ```
/// use vgsales_insights::thresholds::InsightThresholds;
///
/// let thresholds: InsightThresholds =
///     serde_json::from_str(r#"{ "spread_std": 2.5 }"#).unwrap();
/// assert_eq!(thresholds.spread_std, 2.5);
/// assert_eq!(thresholds.correlation_strong, 0.75);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct InsightThresholds {
    /// Standard deviation above which sales are called widely spread.
    pub spread_std: f64,
    /// IQR above which a region's box is called wide.
    pub iqr_spread: f64,
    /// Skewness within `±skew_epsilon` is reported as symmetric.
    pub skew_epsilon: f64,
    /// r above this is a strong correlation.
    pub correlation_strong: f64,
    /// r above this is a moderate correlation.
    pub correlation_moderate: f64,
    /// r above this is a weak correlation.
    pub correlation_weak: f64,
    /// Classify `|r|` instead of signed `r`.
    ///
    /// Off by default, which reports strong negative correlations as
    /// negligible.
    pub correlation_uses_magnitude: bool,
    /// Number of histogram bins in the distribution section, between 1 and
    /// [`MAX_HISTOGRAM_BINS`].
    pub histogram_bins: usize,
}

impl Default for InsightThresholds {
    fn default() -> Self {
        Self {
            spread_std: 1.0,
            iqr_spread: 1.0,
            skew_epsilon: 1e-9,
            correlation_strong: 0.75,
            correlation_moderate: 0.5,
            correlation_weak: 0.3,
            correlation_uses_magnitude: false,
            histogram_bins: DEFAULT_NUM_BINS,
        }
    }
}

/// Error returned by [`InsightThresholds::validate`].
#[derive(Debug, Clone, PartialEq, derive_more::Display, derive_more::Error)]
pub enum InvalidThresholds {
    #[display("correlation thresholds must satisfy weak <= moderate <= strong")]
    UnorderedCorrelation,
    #[display("'{name}' must be a finite non-negative number, got {value}")]
    Negative { name: &'static str, value: f64 },
    #[display("histogram_bins must be between 1 and {}, got {value}", MAX_HISTOGRAM_BINS)]
    HistogramBinsOutOfRange { value: usize },
}

impl InsightThresholds {
    /// Checks that the thresholds describe a consistent configuration.
    ///
    /// ```
    /// use vgsales_insights::thresholds::InsightThresholds;
    ///
    /// assert!(InsightThresholds::default().validate().is_ok());
    ///
    /// let swapped = InsightThresholds {
    ///     correlation_weak: 0.9,
    ///     ..InsightThresholds::default()
    /// };
    /// assert!(swapped.validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<(), InvalidThresholds> {
        for (name, value) in [
            ("spread_std", self.spread_std),
            ("iqr_spread", self.iqr_spread),
            ("skew_epsilon", self.skew_epsilon),
        ] {
            if !(value.is_finite() && value >= 0.0) {
                return Err(InvalidThresholds::Negative { name, value });
            }
        }
        if !(self.correlation_weak <= self.correlation_moderate
            && self.correlation_moderate <= self.correlation_strong)
        {
            return Err(InvalidThresholds::UnorderedCorrelation);
        }
        if !(1..=MAX_HISTOGRAM_BINS).contains(&self.histogram_bins) {
            return Err(InvalidThresholds::HistogramBinsOutOfRange {
                value: self.histogram_bins,
            });
        }
        Ok(())
    }
}
