//! tsutil
//!
//! Small, pure utilities for ordered time series:
//!
//! - [`resample`]: step/hold-previous resampling at arbitrary query times.
//! - [`resample_interp`]: linearly interpolated resampling, extrapolating
//!   along the nearest boundary segment outside the known range.
//! - [`max_drawdown`]: largest absolute peak-to-trough drop.
//!
//! Every entry point is synchronous and side-effect free, validates its
//! inputs up front, and surfaces a [`TsError`] instead of substituting a
//! default. Sample times are generic over [`SampleTime`], so plain `i64`/
//! `f64` timestamps and `chrono::DateTime<Utc>` all work at the boundary.
//!
//! The optional `tracing` cargo feature adds trace-level spans to the
//! resampling entry points.
#![warn(missing_docs)]

/// Maximum-drawdown computation.
pub mod drawdown;
/// Invalid-input error type shared by all entry points.
pub mod error;
/// Step and interpolated resampling.
pub mod resample;
/// Owned validated series type and the shared boundary check.
pub mod series;
/// The `SampleTime` abstraction over timestamp types.
pub mod time;

pub use drawdown::max_drawdown;
pub use error::TsError;
pub use resample::{resample, resample_interp};
pub use series::{Series, validate_series};
pub use time::SampleTime;
