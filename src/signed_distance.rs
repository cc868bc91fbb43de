use crate::projection::closest_point;
use crate::projection::Projection;
use crate::projection::ProjectionOptions;
use crate::Field;
use crate::FieldKind;
use glam::Vec3;

/// Euclidean signed distance from `pos` to the field's surface. Negative inside.
///
/// Exact fields are evaluated directly. For approximate ones the sign comes from the field and
/// the magnitude from the distance to the projected surface point, so the result is only as
/// good as the projection. A projection that did not converge, typically one started near a
/// point where the gradient vanishes such as the center of a [`crate::RoundedCube`], can give a
/// magnitude that is off by orders of magnitude. Use [`signed_distance_with_projection`] to see
/// whether it converged.
pub fn signed_distance(pos: Vec3, field: &impl Field, opt: &ProjectionOptions) -> f32 {
    signed_distance_with_projection(pos, field, opt).0
}

/// Like [`signed_distance`], but also returns the projection the magnitude came from.
///
/// The projection is `None` for exact fields, whose value is used as is.
pub fn signed_distance_with_projection(
    pos: Vec3,
    field: &impl Field,
    opt: &ProjectionOptions,
) -> (f32, Option<Projection>) {
    let value = field.eval(pos);
    if field.kind() == FieldKind::Exact {
        return (value, None);
    }
    let projection = closest_point(pos, field, opt);
    let distance = pos.distance(projection.point);
    let signed = if value < 0.0 { -distance } else { distance };
    (signed, Some(projection))
}

/// First-order estimate: the field value divided by its gradient length, halved.
///
/// Cheap, but only meaningful close to the surface and increasingly wrong further away.
/// Returns the raw value when the gradient vanishes.
pub fn approximate_signed_distance(pos: Vec3, field: &impl Field) -> f32 {
    let (value, gradient) = field.eval_with_gradient(pos);
    let gradient_length = gradient.length();
    if gradient_length > f32::EPSILON {
        0.5 * value / gradient_length
    } else {
        value
    }
}
