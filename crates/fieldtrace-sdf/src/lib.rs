//! Closed-form signed distance functions and support-function accumulators.
//!
//! Everything in here is a pure function of a point and a handful of shape parameters.
//! Parameter validation lives one level up, in `fieldtrace`.

mod sdf;
pub use sdf::*;

mod support;
pub use support::*;
