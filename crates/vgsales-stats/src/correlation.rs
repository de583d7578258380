use crate::StatsError;

/// Computes Pearson's correlation coefficient between two aligned series.
///
/// The series must be index-aligned: `x[i]` and `y[i]` describe the same
/// observation. Nothing here drops or realigns values.
///
/// # Errors
///
/// - [`StatsError::LengthMismatch`] if the lengths differ
/// - [`StatsError::EmptyInput`] if both are empty
/// - [`StatsError::ConstantInput`] if either series has zero variance,
///   including the single-observation case
///
/// # Examples
///
/// ```
/// use vgsales_stats::correlation::pearson;
///
/// let r = pearson(&[1.0, 2.0, 3.0], &[2.0, 4.0, 6.0]).unwrap();
/// assert!((r - 1.0).abs() < 1e-12);
///
/// let r = pearson(&[1.0, 2.0, 3.0], &[3.0, 2.0, 1.0]).unwrap();
/// assert!((r + 1.0).abs() < 1e-12);
/// ```
#[expect(clippy::cast_precision_loss)]
pub fn pearson(x: &[f64], y: &[f64]) -> Result<f64, StatsError> {
    if x.len() != y.len() {
        return Err(StatsError::LengthMismatch {
            left: x.len(),
            right: y.len(),
        });
    }
    if x.is_empty() {
        return Err(StatsError::EmptyInput);
    }

    let n = x.len() as f64;
    let mean_x = x.iter().sum::<f64>() / n;
    let mean_y = y.iter().sum::<f64>() / n;

    let (cov, var_x, var_y) =
        x.iter()
            .zip(y)
            .fold((0.0, 0.0, 0.0), |(cov, var_x, var_y), (xi, yi)| {
                let dx = xi - mean_x;
                let dy = yi - mean_y;
                (cov + dx * dy, var_x + dx * dx, var_y + dy * dy)
            });

    if var_x == 0.0 || var_y == 0.0 {
        return Err(StatsError::ConstantInput);
    }

    // Rounding can push |r| a hair past 1
    Ok((cov / (var_x * var_y).sqrt()).clamp(-1.0, 1.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_mismatch() {
        assert_eq!(
            pearson(&[1.0, 2.0, 3.0], &[1.0, 2.0]),
            Err(StatsError::LengthMismatch { left: 3, right: 2 })
        );
    }

    #[test]
    fn test_empty() {
        assert_eq!(pearson(&[], &[]), Err(StatsError::EmptyInput));
    }

    #[test]
    fn test_constant_series() {
        assert_eq!(
            pearson(&[1.0, 1.0, 1.0], &[1.0, 2.0, 3.0]),
            Err(StatsError::ConstantInput)
        );
        assert_eq!(pearson(&[1.0], &[2.0]), Err(StatsError::ConstantInput));
    }

    #[test]
    fn test_known_value() {
        let x = [41.49, 29.08, 15.85, 15.75, 11.27];
        let y = [29.02, 3.58, 12.88, 11.01, 8.89];
        let r = pearson(&x, &y).unwrap();
        // Reference computed with the textbook formula
        assert!((r - 0.6351).abs() < 1e-3, "r = {r}");
    }

    #[test]
    fn test_symmetric_in_arguments() {
        let x = [0.1, 0.5, 0.2, 0.9, 0.3];
        let y = [0.0, 0.4, 0.4, 0.6, 0.1];
        assert_eq!(pearson(&x, &y).unwrap(), pearson(&y, &x).unwrap());
    }
}
