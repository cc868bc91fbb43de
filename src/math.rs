//! Small geometric value types shared by the tracer and the fields.

mod bounding_box;
pub use bounding_box::*;

mod ray3;
pub use ray3::*;
