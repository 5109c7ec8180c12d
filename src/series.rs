use serde::{Deserialize, Serialize};

use crate::error::TsError;
use crate::time::SampleTime;
use crate::{max_drawdown, resample, resample_interp};

/// Ensure the invariants shared by the resampling entry points: non-empty,
/// positionally aligned lengths, strictly increasing timestamps.
///
/// # Errors
/// - [`TsError::EmptySeries`] if `times` is empty.
/// - [`TsError::LengthMismatch`] if `times` and `values` differ in length.
/// - [`TsError::UnsortedTimes`] at the first index whose timestamp does not
///   strictly exceed its predecessor.
pub fn validate_series<T: SampleTime>(times: &[T], values: &[f64]) -> Result<(), TsError> {
    if times.is_empty() {
        return Err(TsError::EmptySeries);
    }
    if times.len() != values.len() {
        return Err(TsError::LengthMismatch {
            times: times.len(),
            values: values.len(),
        });
    }
    for (i, pair) in times.windows(2).enumerate() {
        if pair[1] <= pair[0] {
            return Err(TsError::UnsortedTimes { index: i + 1 });
        }
    }
    Ok(())
}

/// An owned, validated time series of `i64` timestamps paired with `f64`
/// values.
///
/// Construction and deserialization both run [`validate_series`], so a
/// `Series` in hand always has matching lengths and strictly increasing
/// timestamps, and its operations cannot fail on those grounds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawSeries", into = "RawSeries")]
pub struct Series {
    times: Vec<i64>,
    values: Vec<f64>,
}

impl Series {
    /// Build a series, validating the invariants.
    ///
    /// # Errors
    /// Same conditions as [`validate_series`].
    pub fn new(times: Vec<i64>, values: Vec<f64>) -> Result<Self, TsError> {
        validate_series(&times, &values)?;
        Ok(Self { times, values })
    }

    /// The timestamps, strictly increasing.
    #[must_use]
    pub fn times(&self) -> &[i64] {
        &self.times
    }

    /// The values, positionally aligned with [`Self::times`].
    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Step-hold resample at `stimes`; see [`resample`].
    ///
    /// # Errors
    /// None in practice: the series invariants were checked at construction.
    pub fn resample(&self, stimes: &[i64]) -> Result<Vec<f64>, TsError> {
        resample(&self.times, &self.values, stimes)
    }

    /// Linearly interpolated resample at `stimes`; see [`resample_interp`].
    ///
    /// # Errors
    /// None in practice: the series invariants were checked at construction.
    pub fn resample_interp(&self, stimes: &[i64]) -> Result<Vec<f64>, TsError> {
        resample_interp(&self.times, &self.values, stimes)
    }

    /// Maximum drawdown of the value sequence; see [`max_drawdown`].
    ///
    /// # Errors
    /// None in practice: the series is non-empty by construction.
    pub fn max_drawdown(&self) -> Result<f64, TsError> {
        max_drawdown(&self.values)
    }
}

/// Unvalidated mirror used as the serde wire shape, so deserialized data is
/// re-checked against the series invariants.
#[derive(Serialize, Deserialize)]
struct RawSeries {
    times: Vec<i64>,
    values: Vec<f64>,
}

impl TryFrom<RawSeries> for Series {
    type Error = TsError;

    fn try_from(raw: RawSeries) -> Result<Self, Self::Error> {
        Self::new(raw.times, raw.values)
    }
}

impl From<Series> for RawSeries {
    fn from(s: Series) -> Self {
        Self {
            times: s.times,
            values: s.values,
        }
    }
}
