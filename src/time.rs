use chrono::{DateTime, Utc};

/// An ordered instant usable as a sample time.
///
/// Implemented for plain numeric timestamps (`i64`, `f64`) and for
/// [`chrono::DateTime<Utc>`]. The only arithmetic the resamplers need is the
/// signed offset between two instants as an `f64`, from which interpolation
/// ratios are formed.
pub trait SampleTime: Copy + PartialOrd {
    /// Signed distance from `origin` to `self`.
    ///
    /// The unit is up to the implementation (seconds for `DateTime<Utc>`);
    /// only ratios of offsets along the same axis are ever taken, so the
    /// unit cancels out.
    fn offset_from(self, origin: Self) -> f64;
}

impl SampleTime for i64 {
    #[allow(clippy::cast_precision_loss)]
    fn offset_from(self, origin: Self) -> f64 {
        // Subtract before casting so nearby large timestamps stay exact.
        (self - origin) as f64
    }
}

impl SampleTime for f64 {
    fn offset_from(self, origin: Self) -> f64 {
        self - origin
    }
}

impl SampleTime for DateTime<Utc> {
    #[allow(clippy::cast_precision_loss)]
    fn offset_from(self, origin: Self) -> f64 {
        (self - origin).num_milliseconds() as f64 / 1_000.0
    }
}
