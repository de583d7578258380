use std::ops::Range;

use serde::Serialize;

use crate::StatsError;

/// Default number of bins for a sales distribution.
pub const DEFAULT_NUM_BINS: usize = 30;

/// A histogram representation of a dataset's distribution.
///
/// The data range `[min, max]` is split into equal-width bins. The last bin
/// is closed on the right so that `max` is counted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Histogram {
    /// The bins in ascending order.
    pub bins: Vec<HistogramBin>,
}

/// A single bin in a histogram.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistogramBin {
    /// The range of values covered by this bin (inclusive start, exclusive end,
    /// except for the last bin which also includes its end).
    pub range: Range<f64>,
    /// The number of values that fall within this bin's range.
    pub count: u64,
}

impl Histogram {
    /// Creates a histogram from unsorted values.
    ///
    /// A series whose values are all equal produces a single bin.
    ///
    /// # Errors
    ///
    /// Returns [`StatsError::EmptyInput`] if `values` is empty or `num_bins`
    /// is zero.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vgsales_stats::histogram::Histogram;
    /// let histogram = Histogram::new([0.0, 1.0, 1.5, 2.0, 4.0], 4).unwrap();
    /// let counts = histogram.bins.iter().map(|b| b.count).collect::<Vec<_>>();
    /// assert_eq!(counts, vec![1, 2, 1, 1]);
    /// ```
    pub fn new<I>(values: I, num_bins: usize) -> Result<Self, StatsError>
    where
        I: IntoIterator<Item = f64>,
    {
        let sorted = crate::sorted_copy(values);
        Self::from_sorted(&sorted, num_bins)
    }

    /// Creates a histogram from values sorted in ascending order.
    ///
    /// # Panics
    ///
    /// Panics if `sorted_values` is not sorted in ascending order.
    #[expect(
        clippy::cast_precision_loss,
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss
    )]
    pub fn from_sorted(sorted_values: &[f64], num_bins: usize) -> Result<Self, StatsError> {
        assert!(
            sorted_values.is_sorted_by(|a, b| a <= b),
            "values must be sorted in ascending order"
        );

        let (Some(&min), Some(&max)) = (sorted_values.first(), sorted_values.last()) else {
            return Err(StatsError::EmptyInput);
        };
        if num_bins == 0 {
            return Err(StatsError::EmptyInput);
        }

        let range = max - min;
        if range <= f64::EPSILON * max.abs().max(1.0) {
            // Degenerate distribution: everything sits on one value
            return Ok(Self {
                bins: vec![HistogramBin {
                    range: min..max,
                    count: sorted_values.len() as u64,
                }],
            });
        }

        let bin_width = range / num_bins as f64;
        let mut bins = (0..num_bins)
            .map(|bin_idx| {
                // Recompute edges from the index to avoid accumulated rounding
                let start = min + range * bin_idx as f64 / num_bins as f64;
                let end = if bin_idx + 1 == num_bins {
                    max
                } else {
                    min + range * (bin_idx + 1) as f64 / num_bins as f64
                };
                HistogramBin {
                    range: start..end,
                    count: 0,
                }
            })
            .collect::<Vec<_>>();

        for &val in sorted_values {
            let idx = (((val - min) / bin_width).floor() as usize).min(num_bins - 1);
            bins[idx].count += 1;
        }

        Ok(Self { bins })
    }

    /// Total number of values counted.
    #[must_use]
    pub fn total(&self) -> u64 {
        self.bins.iter().map(|b| b.count).sum()
    }

    /// The bin with the highest count; the first one on ties.
    #[must_use]
    pub fn peak(&self) -> Option<&HistogramBin> {
        self.bins
            .iter()
            .reduce(|best, bin| if bin.count > best.count { bin } else { best })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_values() {
        assert_eq!(
            Histogram::new(Vec::<f64>::new(), 10),
            Err(StatsError::EmptyInput)
        );
    }

    #[test]
    fn test_zero_bins() {
        assert_eq!(Histogram::new([1.0, 2.0], 0), Err(StatsError::EmptyInput));
    }

    #[test]
    fn test_single_value() {
        let histogram = Histogram::new([0.3, 0.3, 0.3], 30).unwrap();
        assert_eq!(histogram.bins.len(), 1);
        assert_eq!(histogram.total(), 3);
    }

    #[test]
    fn test_counts_every_value() {
        let values = (0..100).map(f64::from).collect::<Vec<_>>();
        let histogram = Histogram::new(values, DEFAULT_NUM_BINS).unwrap();
        assert_eq!(histogram.bins.len(), DEFAULT_NUM_BINS);
        assert_eq!(histogram.total(), 100);
    }

    #[test]
    fn test_bins_are_contiguous() {
        let histogram = Histogram::new([0.01, 0.2, 0.35, 2.1, 8.4, 82.5], 7).unwrap();
        for pair in histogram.bins.windows(2) {
            assert_eq!(pair[0].range.end, pair[1].range.start);
        }
        assert_eq!(histogram.bins[0].range.start, 0.01);
        assert_eq!(histogram.bins[6].range.end, 82.5);
    }

    #[test]
    fn test_peak_on_skewed_data() {
        let mut values = vec![0.1; 40];
        values.extend([5.0, 10.0]);
        let histogram = Histogram::new(values, 5).unwrap();
        let peak = histogram.peak().unwrap();
        assert_eq!(peak.count, 40);
        assert_eq!(peak.range.start, 0.1);
    }
}
