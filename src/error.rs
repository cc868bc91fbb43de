/// Errors raised when a field is constructed with unusable parameters.
///
/// Queries on a constructed field never fail.
#[derive(thiserror::Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Invalid field parameter: {0}")]
    BadParameter(&'static str),

    #[error("Support accumulator needs at least one direction")]
    EmptyDirectionSet,

    #[error("Support accumulator direction is not unit length")]
    NonUnitDirection,

    #[error("Sampled curve needs at least two samples")]
    TooFewSamples,
}

/// Fails unless `value` is finite and strictly positive.
pub(crate) fn check_positive(value: f32, what: &'static str) -> Result<f32, Error> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(Error::BadParameter(what))
    }
}

/// Fails unless `value` is finite and not negative.
pub(crate) fn check_non_negative(value: f32, what: &'static str) -> Result<f32, Error> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(Error::BadParameter(what))
    }
}
