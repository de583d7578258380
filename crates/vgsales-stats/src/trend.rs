use serde::Serialize;

use crate::StatsError;

/// One observation of a year-ordered series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TrendPoint {
    pub year: i32,
    pub value: f64,
}

impl TrendPoint {
    #[must_use]
    pub fn new(year: i32, value: f64) -> Self {
        Self { year, value }
    }
}

/// Mean of the first differences of a year-ordered series.
///
/// The differences telescope, so this is `(last - first) / (n - 1)`; it is
/// computed pairwise to keep the definition visible. A single point has no
/// difference and yields `0.0`.
///
/// # Errors
///
/// Returns [`StatsError::EmptyInput`] if `points` is empty.
///
/// # Panics
///
/// Panics if `points` is not sorted by year.
///
/// # Examples
///
/// ```
/// use vgsales_stats::trend::{TrendPoint, mean_first_difference};
///
/// let points = [
///     TrendPoint::new(2000, 1.0),
///     TrendPoint::new(2001, 3.0),
///     TrendPoint::new(2002, 2.0),
/// ];
/// assert_eq!(mean_first_difference(&points).unwrap(), 0.5);
/// ```
#[expect(clippy::cast_precision_loss)]
pub fn mean_first_difference(points: &[TrendPoint]) -> Result<f64, StatsError> {
    assert!(
        points.is_sorted_by_key(|p| p.year),
        "points must be sorted by year"
    );

    if points.is_empty() {
        return Err(StatsError::EmptyInput);
    }
    if points.len() == 1 {
        return Ok(0.0);
    }

    let total = points
        .windows(2)
        .map(|pair| pair[1].value - pair[0].value)
        .sum::<f64>();
    Ok(total / (points.len() - 1) as f64)
}
