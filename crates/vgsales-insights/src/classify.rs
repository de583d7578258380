//! Qualitative labels derived from numeric statistics.
//!
//! Each classifier is a pure threshold function. The thresholds come from
//! [`InsightThresholds`] so they can be tuned without touching the rules.

use serde::Serialize;
use vgsales_stats::outliers::OutlierReport;

use crate::thresholds::InsightThresholds;

/// How widely sales vary around the mean.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, derive_more::IsVariant)]
pub enum Spread {
    Wide,
    Consistent,
}

impl Spread {
    /// Wide if `std_dev` is strictly above the spread threshold.
    ///
    /// ```
    /// use vgsales_insights::{classify::Spread, thresholds::InsightThresholds};
    ///
    /// let t = InsightThresholds::default();
    /// assert_eq!(Spread::classify(1.0, &t), Spread::Consistent);
    /// assert_eq!(Spread::classify(1.0001, &t), Spread::Wide);
    /// ```
    #[must_use]
    pub fn classify(std_dev: f64, thresholds: &InsightThresholds) -> Self {
        if std_dev > thresholds.spread_std {
            Self::Wide
        } else {
            Self::Consistent
        }
    }
}

/// Direction of a distribution's asymmetry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, derive_more::IsVariant)]
pub enum SkewShape {
    PositiveSkew,
    NegativeSkew,
    Symmetric,
}

impl SkewShape {
    /// Classifies a skewness value with a symmetric band of `±skew_epsilon`.
    #[must_use]
    pub fn classify(skewness: f64, thresholds: &InsightThresholds) -> Self {
        if skewness > thresholds.skew_epsilon {
            Self::PositiveSkew
        } else if skewness < -thresholds.skew_epsilon {
            Self::NegativeSkew
        } else {
            Self::Symmetric
        }
    }

    /// Classifies an optional skewness; an undefined value reads as symmetric.
    #[must_use]
    pub fn classify_opt(skewness: Option<f64>, thresholds: &InsightThresholds) -> Self {
        skewness.map_or(Self::Symmetric, |s| Self::classify(s, thresholds))
    }
}

/// Whether Tukey outliers were found.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, derive_more::IsVariant)]
pub enum OutlierPresence {
    None,
    Present(usize),
}

impl OutlierPresence {
    #[must_use]
    pub fn classify(report: &OutlierReport) -> Self {
        match report.count() {
            0 => Self::None,
            count => Self::Present(count),
        }
    }
}

/// Qualitative strength of a Pearson correlation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, derive_more::IsVariant)]
pub enum CorrelationStrength {
    Strong,
    Moderate,
    Weak,
    Negligible,
}

impl CorrelationStrength {
    /// Buckets `r` by the correlation thresholds.
    ///
    /// Signed `r` is compared unless `correlation_uses_magnitude` is set.
    ///
    /// ```
    /// use vgsales_insights::{classify::CorrelationStrength, thresholds::InsightThresholds};
    ///
    /// let t = InsightThresholds::default();
    /// assert_eq!(CorrelationStrength::classify(0.8, &t), CorrelationStrength::Strong);
    /// assert_eq!(CorrelationStrength::classify(-0.9, &t), CorrelationStrength::Negligible);
    ///
    /// let t = InsightThresholds { correlation_uses_magnitude: true, ..t };
    /// assert_eq!(CorrelationStrength::classify(-0.9, &t), CorrelationStrength::Strong);
    /// ```
    #[must_use]
    pub fn classify(r: f64, thresholds: &InsightThresholds) -> Self {
        let r = if thresholds.correlation_uses_magnitude {
            r.abs()
        } else {
            r
        };
        if r > thresholds.correlation_strong {
            Self::Strong
        } else if r > thresholds.correlation_moderate {
            Self::Moderate
        } else if r > thresholds.correlation_weak {
            Self::Weak
        } else {
            Self::Negligible
        }
    }
}

/// Direction of a year-over-year trend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, derive_more::IsVariant)]
pub enum TrendDirection {
    Increasing,
    Decreasing,
    Stable,
}

impl TrendDirection {
    #[must_use]
    pub fn classify(mean_diff: f64) -> Self {
        if mean_diff > 0.0 {
            Self::Increasing
        } else if mean_diff < 0.0 {
            Self::Decreasing
        } else {
            Self::Stable
        }
    }
}

/// Width of the middle half of a region's sales.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, derive_more::IsVariant)]
pub enum IqrSpread {
    Wide,
    Narrow,
}

impl IqrSpread {
    #[must_use]
    pub fn classify(iqr: f64, thresholds: &InsightThresholds) -> Self {
        if iqr > thresholds.iqr_spread {
            Self::Wide
        } else {
            Self::Narrow
        }
    }
}

/// Distribution shape read from the gap between mean and median.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, derive_more::IsVariant)]
pub enum CentralTendencyShape {
    /// Mean above median: a few large values pull the average up.
    PositivelySkewed,
    /// Mean below median: a few small values pull the average down.
    NegativelySkewed,
    Symmetric,
}

impl CentralTendencyShape {
    #[must_use]
    pub fn classify(mean: f64, median: f64) -> Self {
        if mean > median {
            Self::PositivelySkewed
        } else if mean < median {
            Self::NegativelySkewed
        } else {
            Self::Symmetric
        }
    }
}
