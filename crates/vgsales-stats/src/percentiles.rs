use serde::Serialize;

/// Precomputed percentile values for a dataset.
///
/// Stores percentile-value pairs so that a summary can carry P25/P50/P75
/// (or any other set of points) without keeping the sorted data around.
///
/// # Examples
///
/// ```
/// use vgsales_stats::percentiles::Percentiles;
///
/// let values = [1.0, 2.0, 3.0, 4.0, 5.0];
/// let percentiles = Percentiles::new(values, &[25.0, 50.0, 75.0]).unwrap();
///
/// assert_eq!(percentiles.get(25.0), Some(2.0));
/// assert_eq!(percentiles.get(50.0), Some(3.0));
/// assert_eq!(percentiles.get(75.0), Some(4.0));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Percentiles {
    /// Percentile-value pairs in the order they were requested.
    /// Each tuple contains (percentile, value) where percentile is 0.0-100.0.
    values: Vec<(f64, f64)>,
}

impl Percentiles {
    /// Computes percentiles from unsorted values.
    ///
    /// Returns `None` if `values` is empty.
    #[must_use]
    pub fn new<I>(values: I, percentile_points: &[f64]) -> Option<Self>
    where
        I: IntoIterator<Item = f64>,
    {
        let sorted = crate::sorted_copy(values);
        Self::from_sorted(&sorted, percentile_points)
    }

    /// Computes percentiles from values sorted in ascending order.
    ///
    /// Returns `None` if `sorted_values` is empty.
    ///
    /// # Panics
    ///
    /// Panics if `sorted_values` is not sorted in ascending order.
    #[must_use]
    pub fn from_sorted(sorted_values: &[f64], percentile_points: &[f64]) -> Option<Self> {
        assert!(
            sorted_values.is_sorted_by(|a, b| a <= b),
            "values must be sorted in ascending order"
        );

        let values = percentile_points
            .iter()
            .map(|&p| compute_percentile(sorted_values, p).map(|value| (p, value)))
            .collect::<Option<Vec<_>>>()?;
        Some(Self { values })
    }

    /// Gets the value at a precomputed percentile.
    ///
    /// Returns `None` if the percentile was not requested at construction.
    ///
    /// ```
    /// use vgsales_stats::percentiles::Percentiles;
    ///
    /// let percentiles = Percentiles::new([1.0, 2.0, 3.0], &[50.0]).unwrap();
    /// assert_eq!(percentiles.get(50.0), Some(2.0));
    /// assert_eq!(percentiles.get(90.0), None);
    /// ```
    #[must_use]
    pub fn get(&self, percentile: f64) -> Option<f64> {
        self.values.iter().find_map(|(p, value)| {
            if (*p - percentile).abs() < f64::EPSILON {
                Some(*value)
            } else {
                None
            }
        })
    }

    /// Returns an iterator over all (percentile, value) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.values.iter().copied()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[(f64, f64)] {
        &self.values
    }
}

/// Computes a single percentile from sorted data by linear interpolation.
///
/// For `n` sorted values the fractional rank is `h = (n - 1) * p / 100`; the
/// result interpolates between the values at `floor(h)` and `floor(h) + 1`.
/// This is the "linear" convention used by most numeric libraries.
/// `percentile` is clamped to `0.0..=100.0`.
///
/// Returns `None` if the input is empty.
///
/// # Examples
///
/// ```
/// use vgsales_stats::percentiles::compute_percentile;
///
/// let values = [1.0, 2.0, 3.0, 4.0];
/// assert_eq!(compute_percentile(&values, 50.0), Some(2.5));
/// assert_eq!(compute_percentile(&values, 25.0), Some(1.75));
/// assert_eq!(compute_percentile(&values, 100.0), Some(4.0));
/// assert_eq!(compute_percentile(&[], 50.0), None);
/// ```
#[expect(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
#[must_use]
pub fn compute_percentile(sorted_values: &[f64], percentile: f64) -> Option<f64> {
    let last = sorted_values.len().checked_sub(1)?;
    let rank = last as f64 * percentile.clamp(0.0, 100.0) / 100.0;
    let lower = (rank.floor() as usize).min(last);
    let upper = (lower + 1).min(last);
    let fraction = rank - lower as f64;
    let low = sorted_values[lower];
    let high = sorted_values[upper];
    Some(low + fraction * (high - low))
}
