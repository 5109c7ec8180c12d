use crate::error::TsError;

/// Maximum drawdown: the largest absolute drop from a running peak to any
/// subsequent value, scanning left to right.
///
/// Returns `0.0` for a non-decreasing sequence.
///
/// # Errors
/// Returns [`TsError::EmptySeries`] if `values` is empty.
///
/// ```
/// use tsutil::max_drawdown;
///
/// // Peak 20.0, later trough 5.0.
/// let dd = max_drawdown(&[10.0, 15.0, 20.0, 12.0, 18.0, 14.0, 5.0, 6.0, 7.0]).unwrap();
/// assert_eq!(dd, 15.0);
/// ```
pub fn max_drawdown(values: &[f64]) -> Result<f64, TsError> {
    let Some(&first) = values.first() else {
        return Err(TsError::EmptySeries);
    };
    let mut peak = first;
    let mut worst = 0.0_f64;
    for &v in values {
        if v > peak {
            peak = v;
        } else if peak - v > worst {
            worst = peak - v;
        }
    }
    Ok(worst)
}
