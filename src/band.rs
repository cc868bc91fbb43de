use crate::error::check_non_negative;
use crate::error::check_positive;
use crate::math::BoundingBox;
use crate::Error;
use crate::Field;
use crate::FieldKind;
use fieldtrace_sdf::sd_rounded_rect;
use glam::Vec2;
use glam::Vec3;

/// Scale applied to the cross-section distance so that the twist does not make the field
/// overestimate the true distance. Tuned by eye, not derived.
pub const DEFAULT_DISTORTION: f32 = 0.8;

/// A flat band swept around a ring while its cross-section rotates.
///
/// The ring lies in the XZ plane, centered at origin. One half twist gives a Möbius strip.
///
/// The cross-section is a (rounded) rectangle in a local frame: `r` is the signed distance from
/// the ring's center circle in the XZ plane, `y` the height, and both are rotated by
/// `angle * half_twists / 2` where `angle` is the position around the ring.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(
    feature = "with_serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "crate::params::TwistedBandParams")
)]
pub struct TwistedBand {
    radius: f32,
    half_width: f32,
    half_thickness: f32,
    rounding_radius: f32,
    half_twists: i32,
    distortion: f32,
}

/// A point expressed in the band's toroidal frame.
#[derive(Clone, Copy, Debug, PartialEq)]
struct BandFrame {
    /// Angle around the ring.
    angle: f32,
    /// Cross-section coordinates after untwisting: across the band and through it.
    uv: Vec2,
}

impl TwistedBand {
    pub fn new(
        radius: f32,
        half_width: f32,
        half_thickness: f32,
        half_twists: i32,
    ) -> Result<Self, Error> {
        let radius = check_positive(radius, "radius")?;
        let half_width = check_positive(half_width, "half_width")?;
        let half_thickness = check_positive(half_thickness, "half_thickness")?;
        if Vec2::new(half_width, half_thickness).length() >= radius {
            return Err(Error::BadParameter("half_width"));
        }
        Ok(Self {
            radius,
            half_width,
            half_thickness,
            rounding_radius: 0.0,
            half_twists,
            distortion: DEFAULT_DISTORTION,
        })
    }

    /// Möbius strip: a single half twist.
    pub fn mobius(radius: f32, half_width: f32, half_thickness: f32) -> Result<Self, Error> {
        Self::new(radius, half_width, half_thickness, 1)
    }

    pub fn with_rounding(self, rounding_radius: f32) -> Result<Self, Error> {
        let rounding_radius = check_non_negative(rounding_radius, "rounding_radius")?;
        if rounding_radius > self.half_width.min(self.half_thickness) {
            return Err(Error::BadParameter("rounding_radius"));
        }
        Ok(Self {
            rounding_radius,
            ..self
        })
    }

    pub fn with_distortion(self, distortion: f32) -> Result<Self, Error> {
        let distortion = check_positive(distortion, "distortion")?;
        if distortion > 1.0 {
            return Err(Error::BadParameter("distortion"));
        }
        Ok(Self { distortion, ..self })
    }

    pub fn half_twists(&self) -> i32 {
        self.half_twists
    }

    fn half_size(&self) -> Vec2 {
        Vec2::new(self.half_width, self.half_thickness)
    }

    #[inline]
    fn twist(&self, angle: f32) -> (f32, f32) {
        (angle * self.half_twists as f32 * 0.5).sin_cos()
    }

    #[inline]
    fn to_local(&self, pos: Vec3) -> BandFrame {
        let angle = pos.z.atan2(pos.x);
        let r = pos.x.hypot(pos.z) - self.radius;
        let (s, c) = self.twist(angle);
        BandFrame {
            angle,
            uv: Vec2::new(c * r + s * pos.y, c * pos.y - s * r),
        }
    }

    #[inline]
    fn to_world(&self, frame: BandFrame) -> Vec3 {
        let (s, c) = self.twist(frame.angle);
        let r = c * frame.uv.x - s * frame.uv.y;
        let y = s * frame.uv.x + c * frame.uv.y;
        let (sin_a, cos_a) = frame.angle.sin_cos();
        Vec3::new((self.radius + r) * cos_a, y, (self.radius + r) * sin_a)
    }

    /// Nearest point on the band, found without iterating.
    ///
    /// The cross-section is solved exactly in the meridian plane (through the ring axis) that
    /// contains `pos`, then mapped back to world space. The result always lies on the band, but it
    /// is the nearest point within that section only. Off the section the twisted surface can come
    /// slightly closer, so this is not a true 3-D nearest point when `half_twists != 0`.
    pub fn closest_point(&self, pos: Vec3) -> Vec3 {
        let mut frame = self.to_local(pos);
        let half = self.half_size();
        let inner = half - Vec2::splat(self.rounding_radius);

        let clamped = frame.uv.clamp(-inner, inner);
        frame.uv = if let Some(dir) = (frame.uv - clamped).try_normalize() {
            clamped + dir * self.rounding_radius
        } else {
            // Inside the core of the cross-section: snap to whichever edge is nearer.
            let gap = half - frame.uv.abs();
            let mut snapped = frame.uv;
            if gap.x <= gap.y {
                snapped.x = half.x.copysign(frame.uv.x);
            } else {
                snapped.y = half.y.copysign(frame.uv.y);
            }
            snapped
        };

        self.to_world(frame)
    }
}

impl Field for TwistedBand {
    fn kind(&self) -> FieldKind {
        FieldKind::Approximate
    }

    #[inline]
    fn eval(&self, pos: Vec3) -> f32 {
        let frame = self.to_local(pos);
        sd_rounded_rect(frame.uv, self.half_size(), self.rounding_radius) * self.distortion
    }

    fn exact_closest_point(&self, pos: Vec3) -> Option<Vec3> {
        Some(self.closest_point(pos))
    }

    fn bounding_box(&self) -> Option<BoundingBox> {
        let reach = self.half_size().length();
        Some(BoundingBox::from_center_half_size(
            Vec3::ZERO,
            Vec3::new(self.radius + reach, reach, self.radius + reach),
        ))
    }
}

/// Nearest point on a twisted band, without iterating.
#[inline]
pub fn exact_closest_point(pos: Vec3, band: &TwistedBand) -> Vec3 {
    band.closest_point(pos)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::PI;

    fn band() -> TwistedBand {
        TwistedBand::mobius(2.0, 0.4, 0.1).unwrap()
    }

    #[test]
    fn frame_round_trips() {
        let band = band();
        for &p in &[
            Vec3::new(2.3, 0.2, 0.1),
            Vec3::new(-1.5, -0.3, 1.2),
            Vec3::new(0.1, 0.5, -2.4),
        ] {
            let back = band.to_world(band.to_local(p));
            assert!((back - p).length() < 1e-5, "{p:?} -> {back:?}");
        }
    }

    #[test]
    fn twist_rotates_cross_section() {
        let band = band();
        // At angle 0 the band lies flat in the XZ plane.
        assert!(band.eval(Vec3::new(2.4, 0.0, 0.0)).abs() < 1e-6);
        assert!(band.eval(Vec3::new(2.0, 0.1, 0.0)).abs() < 1e-6);
        // Half way round it has turned a quarter turn and stands upright.
        assert!(band.eval(Vec3::new(-2.0, 0.4, 0.0)).abs() < 1e-5);
        assert!(band.eval(Vec3::new(-2.1, 0.0, 0.0)).abs() < 1e-5);
    }

    #[test]
    fn mobius_is_continuous_across_the_seam() {
        let band = band();
        let above = band.eval(Vec3::new(-2.05, 0.3, 1e-4));
        let below = band.eval(Vec3::new(-2.05, 0.3, -1e-4));
        assert!((above - below).abs() < 1e-3);
    }

    #[test]
    fn closest_point_lies_on_surface() {
        let band = band().with_rounding(0.05).unwrap();
        for i in 0..16 {
            let angle = i as f32 / 16.0 * 2.0 * PI;
            let p = Vec3::new(2.3 * angle.cos(), 0.25 - 0.03 * i as f32, 2.3 * angle.sin());
            let q = band.closest_point(p);
            assert!(band.eval(q).abs() < 1e-4, "{p:?} -> {q:?}: {}", band.eval(q));
        }
    }

    #[test]
    fn inside_points_snap_to_nearest_edge() {
        let band = band();
        let frame = BandFrame {
            angle: 0.0,
            uv: Vec2::new(0.1, 0.04),
        };
        let q = band.closest_point(band.to_world(frame));
        assert!((q - Vec3::new(2.1, 0.1, 0.0)).length() < 1e-5, "{q:?}");

        let frame = BandFrame {
            angle: 0.0,
            uv: Vec2::new(-0.35, 0.0),
        };
        let q = band.closest_point(band.to_world(frame));
        assert!((q - Vec3::new(1.6, 0.0, 0.0)).length() < 1e-5, "{q:?}");
    }

    #[test]
    fn points_on_the_surface_stay_put() {
        let band = band();
        let p = Vec3::new(2.2, 0.1, 0.0);
        assert!((exact_closest_point(p, &band) - p).length() < 1e-6);
    }

    #[test]
    fn bad_parameters_are_rejected() {
        assert!(TwistedBand::mobius(0.3, 0.4, 0.1).is_err());
        assert!(TwistedBand::mobius(2.0, 0.0, 0.1).is_err());
        assert!(band().with_rounding(0.2).is_err());
        assert!(band().with_distortion(1.5).is_err());
        assert!(band().with_distortion(0.0).is_err());
        assert_eq!(band().with_distortion(0.5).unwrap().half_twists(), 1);
    }
}
