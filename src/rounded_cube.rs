use crate::math::BoundingBox;
use crate::BoxField;
use crate::Error;
use crate::Field;
use crate::FieldKind;
use glam::Vec3;

/// Keeps the distance estimate finite where the potential's gradient vanishes.
const STABILIZER: f32 = 1e-4;

/// Superellipsoid-like potential `x⁴ + y⁴ + z⁴ + c·(x²y² + y²z² + z²x²) - 1`, in coordinates
/// scaled by `half_size`.
///
/// `cross_weight` (`c`) shapes the solid: `0` is a rounded cube, `2` is an ellipsoid, and values
/// towards `-1` pull the edges out into an ever sharper box.
///
/// The value is the potential divided by its gradient length, which is only distance-like near
/// the surface. Further out than a small margin around the bounding box the exact box distance
/// is returned instead, and the potential is not evaluated at all.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(
    feature = "with_serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "crate::params::RoundedCubeParams")
)]
pub struct RoundedCube {
    half_size: Vec3,
    cross_weight: f32,
    #[cfg_attr(feature = "with_serde", serde(skip_serializing))]
    bounds: BoxField,
    #[cfg_attr(feature = "with_serde", serde(skip_serializing))]
    bounds_margin: f32,
}

impl RoundedCube {
    pub fn new(half_size: Vec3, cross_weight: f32) -> Result<Self, Error> {
        if !cross_weight.is_finite() || cross_weight <= -1.0 {
            return Err(Error::BadParameter("cross_weight"));
        }
        // Σq⁴ + c·cross ≥ (1 + c)·max(q)⁴ for c < 0, which bounds the surface.
        let extent = if cross_weight < 0.0 {
            (1.0 + cross_weight).powf(-0.25)
        } else {
            1.0
        };
        let bounds = BoxField::new(half_size * extent)?;
        Ok(Self {
            half_size,
            cross_weight,
            bounds,
            bounds_margin: 0.25 * half_size.min_element(),
        })
    }

    /// Raw potential and its gradient, both in world units.
    pub fn potential(&self, pos: Vec3) -> (f32, Vec3) {
        let q = pos / self.half_size;
        let q2 = q * q;
        let cross = q2.x * q2.y + q2.y * q2.z + q2.z * q2.x;
        let value = (q2 * q2).element_sum() + self.cross_weight * cross - 1.0;

        let others = Vec3::new(q2.y + q2.z, q2.z + q2.x, q2.x + q2.y);
        let gradient_q = 4.0 * q2 * q + 2.0 * self.cross_weight * q * others;
        (value, gradient_q / self.half_size)
    }

    #[inline]
    fn outside_bounds(&self, pos: Vec3) -> Option<f32> {
        let d = self.bounds.eval(pos);
        (d > self.bounds_margin).then_some(d)
    }
}

impl Field for RoundedCube {
    fn kind(&self) -> FieldKind {
        FieldKind::Approximate
    }

    fn eval(&self, pos: Vec3) -> f32 {
        if let Some(d) = self.outside_bounds(pos) {
            return d;
        }
        let (value, gradient) = self.potential(pos);
        value / (gradient.length() + STABILIZER)
    }

    /// The gradient is the potential's gradient scaled by the same factor as the value, so a
    /// Newton step on this pair is a Newton step on the raw potential.
    fn eval_with_gradient(&self, pos: Vec3) -> (f32, Vec3) {
        if self.outside_bounds(pos).is_some() {
            return self.bounds.eval_with_gradient(pos);
        }
        let (value, gradient) = self.potential(pos);
        let scale = (gradient.length() + STABILIZER).recip();
        (value * scale, gradient * scale)
    }

    fn has_analytic_gradient(&self) -> bool {
        true
    }

    fn bounding_box(&self) -> Option<BoundingBox> {
        self.bounds.bounding_box()
    }
}
