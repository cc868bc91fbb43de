use crate::error::check_positive;
use crate::math::BoundingBox;
use crate::Error;
use crate::Field;
use crate::FieldKind;
use glam::Vec3;

const TANGLE_CONSTANT: f32 = 11.8;

/// The tanglecube quartic, `Σ (q⁴ - 5q²) + 11.8` with `q = pos / scale`.
///
/// The value is a raw potential, positive in the hollow center and far away. Use
/// [`crate::signed_distance`] when an actual distance is needed.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(
    feature = "with_serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "crate::params::TangleParams")
)]
pub struct Tangle {
    scale: f32,
}

impl Tangle {
    pub fn new(scale: f32) -> Result<Self, Error> {
        Ok(Self {
            scale: check_positive(scale, "scale")?,
        })
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }
}

impl Field for Tangle {
    fn kind(&self) -> FieldKind {
        FieldKind::Approximate
    }

    #[inline]
    fn eval(&self, pos: Vec3) -> f32 {
        let q = pos / self.scale;
        let q2 = q * q;
        (q2 * q2 - 5.0 * q2).element_sum() + TANGLE_CONSTANT
    }

    fn eval_with_gradient(&self, pos: Vec3) -> (f32, Vec3) {
        let q = pos / self.scale;
        let q2 = q * q;
        let gradient = (4.0 * q2 * q - 10.0 * q) / self.scale;
        (self.eval(pos), gradient)
    }

    fn has_analytic_gradient(&self) -> bool {
        true
    }

    fn bounding_box(&self) -> Option<BoundingBox> {
        // q⁴ - 5q² ≥ -6.25 per axis, so a single coordinate beyond ~2.54 already leaves
        // the sum positive. Round up.
        Some(BoundingBox::from_center_half_size(
            Vec3::ZERO,
            Vec3::splat(2.6 * self.scale),
        ))
    }
}
