use crate::error::TsError;
use crate::series::validate_series;
use crate::time::SampleTime;

/// Number of entries in sorted `times` at or before `t`.
fn count_at_or_before<T: SampleTime>(times: &[T], t: T) -> usize {
    times.partition_point(|&known| known <= t)
}

/// Step-hold resampling: each query time maps to the value of the latest
/// known sample at or before it.
///
/// Queries earlier than the entire series clamp to the first value. No
/// interpolation is performed, so every output value is one of the input
/// values. `stimes` does not have to be sorted; the output is positionally
/// aligned with it and has the same length.
///
/// # Errors
/// Rejects invalid series per [`validate_series`].
///
/// ```
/// use tsutil::resample;
///
/// let out = resample(&[1, 3, 5, 7], &[1.0, 3.0, 5.0, 7.0], &[2, 3, 6]).unwrap();
/// assert_eq!(out, vec![1.0, 3.0, 5.0]);
///
/// // A query before the first sample clamps to the first value.
/// let out = resample(&[1, 3, 5, 7], &[1.0, 3.0, 5.0, 7.0], &[0]).unwrap();
/// assert_eq!(out, vec![1.0]);
/// ```
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(
        level = "trace",
        skip_all,
        fields(samples = times.len(), queries = stimes.len()),
    )
)]
pub fn resample<T: SampleTime>(
    times: &[T],
    values: &[f64],
    stimes: &[T],
) -> Result<Vec<f64>, TsError> {
    validate_series(times, values)?;
    Ok(stimes
        .iter()
        .map(|&t| {
            let k = count_at_or_before(times, t);
            if k == 0 { values[0] } else { values[k - 1] }
        })
        .collect())
}

/// Linearly interpolated resampling.
///
/// In-range queries interpolate between the two bracketing samples. Queries
/// outside the known range extend the slope of the nearest boundary segment
/// on both sides, unlike [`resample`], which clamps. A query landing exactly
/// on a known time returns that sample's stored value with no floating-point
/// drift.
///
/// A single-sample series has no segment slope; every query returns the lone
/// value.
///
/// # Errors
/// Rejects invalid series per [`validate_series`].
///
/// ```
/// use tsutil::resample_interp;
///
/// let out = resample_interp(&[1, 3, 5, 7], &[1.0, 3.0, 5.0, 10.0], &[2, 3, 6]).unwrap();
/// assert_eq!(out, vec![2.0, 3.0, 7.5]);
///
/// // Past the last sample the final segment's slope (2.5/step) extends.
/// let out = resample_interp(&[1, 3, 5, 7], &[1.0, 3.0, 5.0, 10.0], &[9]).unwrap();
/// assert_eq!(out, vec![15.0]);
/// ```
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(
        level = "trace",
        skip_all,
        fields(samples = times.len(), queries = stimes.len()),
    )
)]
pub fn resample_interp<T: SampleTime>(
    times: &[T],
    values: &[f64],
    stimes: &[T],
) -> Result<Vec<f64>, TsError> {
    validate_series(times, values)?;
    let n = times.len();
    Ok(stimes
        .iter()
        .map(|&t| {
            if n == 1 {
                return values[0];
            }
            // Bracketing segment, clamped so out-of-range queries reuse the
            // boundary segment.
            let j = count_at_or_before(times, t).saturating_sub(1).min(n - 2);
            let ratio = t.offset_from(times[j]) / times[j + 1].offset_from(times[j]);
            // An exact hit on times[j + 1] must return the stored value;
            // v0 + (v1 - v0) is not guaranteed to round back to v1.
            if ratio == 1.0 {
                values[j + 1]
            } else {
                values[j] + (values[j + 1] - values[j]) * ratio
            }
        })
        .collect())
}
