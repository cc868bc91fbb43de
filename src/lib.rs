//! Implicit surfaces on the CPU: distance fields, sphere tracing, and projection onto the surface.
//!
//! Every shape implements [`Field`]. Exact fields return a true signed distance and can be
//! sphere traced safely; approximate ones (the quartics, the twisted band, smooth polyhedra)
//! return a potential that is only distance-like near the surface. [`signed_distance`] turns
//! either kind into a Euclidean distance by projecting onto the surface with [`closest_point`].
//!
//! ```text
//! let band = TwistedBand::mobius(2.0, 0.4, 0.1)?;
//! let hit = march(eye, dir, &band, &TraceOptions::default());
//! let d = signed_distance(pos, &band, &ProjectionOptions::default());
//! ```

// crate-specific exceptions:
#![forbid(unsafe_code)]

pub use fieldtrace_sdf::*;

mod error;
pub use error::Error;

mod math;
pub use math::*;

mod field;
pub use field::*;

mod primitives;
pub use primitives::*;

mod tangle;
pub use tangle::*;

mod band;
pub use band::*;

mod rounded_cube;
pub use rounded_cube::*;

mod tube;
pub use tube::*;

mod shape;
pub use shape::*;

#[cfg(any(test, feature = "with_serde"))]
mod params;

pub mod sphere_tracing;
pub use sphere_tracing::Disposition;
pub use sphere_tracing::Options as TraceOptions;
pub use sphere_tracing::RayHit;

mod trace;
pub use trace::*;

mod projection;
pub use projection::*;

mod signed_distance;
pub use signed_distance::*;

mod batch;
pub use batch::*;
