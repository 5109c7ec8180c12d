use thiserror::Error;

/// Invalid-input conditions rejected by the series utilities.
///
/// Every variant is raised synchronously at the call boundary, before any
/// computation touches the data. There is no retry, partial-result, or
/// silent-fallback behavior anywhere in the crate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TsError {
    /// `times` and `values` are positionally aligned and must have the
    /// same length.
    #[error("length mismatch: {times} times vs {values} values")]
    LengthMismatch {
        /// Length of the timestamp sequence.
        times: usize,
        /// Length of the value sequence.
        values: usize,
    },

    /// An empty series has no resampled value and no drawdown.
    #[error("empty series")]
    EmptySeries,

    /// Timestamps must be strictly increasing.
    #[error("times not strictly increasing at index {index}")]
    UnsortedTimes {
        /// Index of the first element that fails to increase.
        index: usize,
    },
}
