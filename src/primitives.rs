//! Closed-form fields for simple solids, all centered at origin.

use crate::error::check_non_negative;
use crate::error::check_positive;
use crate::math::BoundingBox;
use crate::Error;
use crate::Field;
use crate::FieldKind;
use fieldtrace_sdf::*;
use glam::Vec3;
use std::borrow::Cow;

fn check_half_size(half_size: Vec3) -> Result<Vec3, Error> {
    if half_size.is_finite() && half_size.min_element() > 0.0 {
        Ok(half_size)
    } else {
        Err(Error::BadParameter("half_size"))
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(
    feature = "with_serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "crate::params::SphereParams")
)]
pub struct Sphere {
    radius: f32,
}

impl Sphere {
    pub fn new(radius: f32) -> Result<Self, Error> {
        Ok(Self {
            radius: check_positive(radius, "radius")?,
        })
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }
}

impl Field for Sphere {
    fn kind(&self) -> FieldKind {
        FieldKind::Exact
    }

    #[inline]
    fn eval(&self, pos: Vec3) -> f32 {
        sd_sphere(pos, Vec3::ZERO, self.radius)
    }

    fn eval_with_gradient(&self, pos: Vec3) -> (f32, Vec3) {
        (self.eval(pos), pos.normalize_or_zero())
    }

    fn has_analytic_gradient(&self) -> bool {
        true
    }

    fn bounding_box(&self) -> Option<BoundingBox> {
        Some(BoundingBox::from_center_half_size(
            Vec3::ZERO,
            Vec3::splat(self.radius),
        ))
    }
}

/// Axis aligned box.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(
    feature = "with_serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "crate::params::BoxParams")
)]
pub struct BoxField {
    half_size: Vec3,
}

impl BoxField {
    pub fn new(half_size: Vec3) -> Result<Self, Error> {
        Ok(Self {
            half_size: check_half_size(half_size)?,
        })
    }

    pub fn cube(half_extent: f32) -> Result<Self, Error> {
        Self::new(Vec3::splat(half_extent))
    }

    pub fn half_size(&self) -> Vec3 {
        self.half_size
    }
}

impl Field for BoxField {
    fn kind(&self) -> FieldKind {
        FieldKind::Exact
    }

    #[inline]
    fn eval(&self, pos: Vec3) -> f32 {
        sd_box(pos, self.half_size)
    }

    fn eval_with_gradient(&self, pos: Vec3) -> (f32, Vec3) {
        let q = pos.abs() - self.half_size;
        let outside = q.max(Vec3::ZERO);
        let gradient = if q.max_element() > 0.0 {
            outside.normalize_or_zero() * pos.signum()
        } else if q.x >= q.y && q.x >= q.z {
            Vec3::X * pos.x.signum()
        } else if q.y >= q.z {
            Vec3::Y * pos.y.signum()
        } else {
            Vec3::Z * pos.z.signum()
        };
        (self.eval(pos), gradient)
    }

    fn has_analytic_gradient(&self) -> bool {
        true
    }

    fn bounding_box(&self) -> Option<BoundingBox> {
        Some(BoundingBox::from_center_half_size(Vec3::ZERO, self.half_size))
    }
}

/// A box with the rounding subtracted from its edges and corners.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(
    feature = "with_serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "crate::params::RoundedBoxParams")
)]
pub struct RoundedBox {
    half_size: Vec3,
    rounding_radius: f32,
}

impl RoundedBox {
    pub fn new(half_size: Vec3, rounding_radius: f32) -> Result<Self, Error> {
        let half_size = check_half_size(half_size)?;
        let rounding_radius = check_non_negative(rounding_radius, "rounding_radius")?;
        if rounding_radius > half_size.min_element() {
            return Err(Error::BadParameter("rounding_radius"));
        }
        Ok(Self {
            half_size,
            rounding_radius,
        })
    }
}

impl Field for RoundedBox {
    fn kind(&self) -> FieldKind {
        FieldKind::Exact
    }

    #[inline]
    fn eval(&self, pos: Vec3) -> f32 {
        sd_rounded_box(pos, self.half_size, self.rounding_radius)
    }

    fn bounding_box(&self) -> Option<BoundingBox> {
        Some(BoundingBox::from_center_half_size(Vec3::ZERO, self.half_size))
    }
}

/// Cylinder along the Y axis with flat caps.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(
    feature = "with_serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "crate::params::CappedCylinderParams")
)]
pub struct CappedCylinder {
    radius: f32,
    half_height: f32,
}

impl CappedCylinder {
    pub fn new(radius: f32, half_height: f32) -> Result<Self, Error> {
        Ok(Self {
            radius: check_positive(radius, "radius")?,
            half_height: check_positive(half_height, "half_height")?,
        })
    }
}

impl Field for CappedCylinder {
    fn kind(&self) -> FieldKind {
        FieldKind::Exact
    }

    #[inline]
    fn eval(&self, pos: Vec3) -> f32 {
        sd_capped_cylinder(pos, self.radius, self.half_height)
    }

    fn bounding_box(&self) -> Option<BoundingBox> {
        Some(BoundingBox::from_center_half_size(
            Vec3::ZERO,
            Vec3::new(self.radius, self.half_height, self.radius),
        ))
    }
}

/// A cylinder along the Y axis with rounded rims.
///
/// When `half_height == rounding_radius` you get a filled torus.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(
    feature = "with_serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "crate::params::RoundedCylinderParams")
)]
pub struct RoundedCylinder {
    radius: f32,
    half_height: f32,
    rounding_radius: f32,
}

impl RoundedCylinder {
    pub fn new(radius: f32, half_height: f32, rounding_radius: f32) -> Result<Self, Error> {
        let radius = check_positive(radius, "radius")?;
        let half_height = check_positive(half_height, "half_height")?;
        let rounding_radius = check_non_negative(rounding_radius, "rounding_radius")?;
        if rounding_radius > radius.min(half_height) {
            return Err(Error::BadParameter("rounding_radius"));
        }
        Ok(Self {
            radius,
            half_height,
            rounding_radius,
        })
    }
}

impl Field for RoundedCylinder {
    fn kind(&self) -> FieldKind {
        FieldKind::Exact
    }

    #[inline]
    fn eval(&self, pos: Vec3) -> f32 {
        sd_rounded_cylinder(pos, self.radius, self.half_height, self.rounding_radius)
    }

    fn bounding_box(&self) -> Option<BoundingBox> {
        Some(BoundingBox::from_center_half_size(
            Vec3::ZERO,
            Vec3::new(self.radius, self.half_height, self.radius),
        ))
    }
}

/// A ring, e.g. a donut.
///
/// Centered at origin, lying in the XZ plane.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(
    feature = "with_serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "crate::params::TorusParams")
)]
pub struct Torus {
    big_r: f32,
    small_r: f32,
}

impl Torus {
    pub fn new(big_r: f32, small_r: f32) -> Result<Self, Error> {
        Ok(Self {
            big_r: check_positive(big_r, "big_r")?,
            small_r: check_positive(small_r, "small_r")?,
        })
    }
}

impl Field for Torus {
    fn kind(&self) -> FieldKind {
        FieldKind::Exact
    }

    #[inline]
    fn eval(&self, pos: Vec3) -> f32 {
        sd_torus(pos, self.big_r, self.small_r)
    }

    fn eval_with_gradient(&self, pos: Vec3) -> (f32, Vec3) {
        let radial = Vec3::new(pos.x, 0.0, pos.z);
        let ring_offset = radial.length() - self.big_r;
        let from_ring = radial.normalize_or_zero() * ring_offset + Vec3::new(0.0, pos.y, 0.0);
        (self.eval(pos), from_ring.normalize_or_zero())
    }

    fn has_analytic_gradient(&self) -> bool {
        true
    }

    fn bounding_box(&self) -> Option<BoundingBox> {
        let outer = self.big_r + self.small_r;
        Some(BoundingBox::from_center_half_size(
            Vec3::ZERO,
            Vec3::new(outer, self.small_r, outer),
        ))
    }
}

/// Regular octahedron with its vertices at `±size` on each axis.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(
    feature = "with_serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "crate::params::OctahedronParams")
)]
pub struct Octahedron {
    size: f32,
}

impl Octahedron {
    pub fn new(size: f32) -> Result<Self, Error> {
        Ok(Self {
            size: check_positive(size, "size")?,
        })
    }
}

impl Field for Octahedron {
    fn kind(&self) -> FieldKind {
        FieldKind::Exact
    }

    #[inline]
    fn eval(&self, pos: Vec3) -> f32 {
        sd_octahedron(pos, self.size)
    }

    fn bounding_box(&self) -> Option<BoundingBox> {
        Some(BoundingBox::from_center_half_size(
            Vec3::ZERO,
            Vec3::splat(self.size),
        ))
    }
}

/// How the support accumulator combines the per-direction projections.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "with_serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Blend {
    /// Maximum projection. Flat facets and sharp edges.
    Sharp,

    /// p-norm of the projections with this exponent. Rounded edges; larger is sharper.
    Smooth(f32),
}

/// Polyhedron-like solid built from a set of facet normals.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "with_serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "crate::params::PolyhedronParams")
)]
pub struct Polyhedron {
    directions: Cow<'static, [Vec3]>,
    /// Distance from the center to each facet plane.
    radius: f32,
    blend: Blend,
}

impl Polyhedron {
    pub fn new(
        directions: impl Into<Cow<'static, [Vec3]>>,
        radius: f32,
        blend: Blend,
    ) -> Result<Self, Error> {
        let directions = directions.into();
        if directions.is_empty() {
            return Err(Error::EmptyDirectionSet);
        }
        if !directions
            .iter()
            .all(|n| n.is_finite() && (n.length() - 1.0).abs() < 1e-4)
        {
            return Err(Error::NonUnitDirection);
        }
        if let Blend::Smooth(exponent) = blend {
            if !exponent.is_finite() || exponent < 1.0 {
                return Err(Error::BadParameter("exponent"));
            }
        }
        Ok(Self {
            directions,
            radius: check_positive(radius, "radius")?,
            blend,
        })
    }

    pub fn icosahedron(radius: f32, blend: Blend) -> Result<Self, Error> {
        let directions: &'static [Vec3] = &ICOSAHEDRON_DIRECTIONS;
        Self::new(directions, radius, blend)
    }

    pub fn dodecahedron(radius: f32, blend: Blend) -> Result<Self, Error> {
        let directions: &'static [Vec3] = &DODECAHEDRON_DIRECTIONS;
        Self::new(directions, radius, blend)
    }

    pub fn directions(&self) -> &[Vec3] {
        &self.directions
    }

    pub fn blend(&self) -> Blend {
        self.blend
    }
}

impl Field for Polyhedron {
    fn kind(&self) -> FieldKind {
        match self.blend {
            Blend::Sharp => FieldKind::Exact,
            Blend::Smooth(_) => FieldKind::Approximate,
        }
    }

    #[inline]
    fn eval(&self, pos: Vec3) -> f32 {
        match self.blend {
            Blend::Sharp => sd_support_sharp(pos, &self.directions, self.radius),
            Blend::Smooth(exponent) => {
                sd_support_smooth(pos, &self.directions, exponent, self.radius)
            }
        }
    }

    fn bounding_box(&self) -> Option<BoundingBox> {
        // Loose: the vertices of these solids sit well within twice the facet distance.
        Some(BoundingBox::from_center_half_size(
            Vec3::ZERO,
            Vec3::splat(2.0 * self.radius),
        ))
    }
}
