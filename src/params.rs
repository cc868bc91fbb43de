//! Raw field parameters as they appear in serialized data.
//!
//! Deserializing a field goes through one of these and then through the field's constructor,
//! so loaded fields are validated exactly like ones built in code.

use crate::Blend;
use crate::BoxField;
use crate::CappedCylinder;
use crate::Error;
use crate::Octahedron;
use crate::Polyhedron;
use crate::RoundedBox;
use crate::RoundedCube;
use crate::RoundedCylinder;
use crate::Sphere;
use crate::Tangle;
use crate::Torus;
use crate::Tube;
use crate::TwistedBand;
use glam::Vec3;

#[cfg_attr(feature = "with_serde", derive(serde::Deserialize))]
pub(crate) struct SphereParams {
    pub radius: f32,
}

impl TryFrom<SphereParams> for Sphere {
    type Error = Error;

    fn try_from(p: SphereParams) -> Result<Self, Error> {
        Self::new(p.radius)
    }
}

#[cfg_attr(feature = "with_serde", derive(serde::Deserialize))]
pub(crate) struct BoxParams {
    pub half_size: Vec3,
}

impl TryFrom<BoxParams> for BoxField {
    type Error = Error;

    fn try_from(p: BoxParams) -> Result<Self, Error> {
        Self::new(p.half_size)
    }
}

#[cfg_attr(feature = "with_serde", derive(serde::Deserialize))]
pub(crate) struct RoundedBoxParams {
    pub half_size: Vec3,
    pub rounding_radius: f32,
}

impl TryFrom<RoundedBoxParams> for RoundedBox {
    type Error = Error;

    fn try_from(p: RoundedBoxParams) -> Result<Self, Error> {
        Self::new(p.half_size, p.rounding_radius)
    }
}

#[cfg_attr(feature = "with_serde", derive(serde::Deserialize))]
pub(crate) struct CappedCylinderParams {
    pub radius: f32,
    pub half_height: f32,
}

impl TryFrom<CappedCylinderParams> for CappedCylinder {
    type Error = Error;

    fn try_from(p: CappedCylinderParams) -> Result<Self, Error> {
        Self::new(p.radius, p.half_height)
    }
}

#[cfg_attr(feature = "with_serde", derive(serde::Deserialize))]
pub(crate) struct RoundedCylinderParams {
    pub radius: f32,
    pub half_height: f32,
    pub rounding_radius: f32,
}

impl TryFrom<RoundedCylinderParams> for RoundedCylinder {
    type Error = Error;

    fn try_from(p: RoundedCylinderParams) -> Result<Self, Error> {
        Self::new(p.radius, p.half_height, p.rounding_radius)
    }
}

#[cfg_attr(feature = "with_serde", derive(serde::Deserialize))]
pub(crate) struct TorusParams {
    pub big_r: f32,
    pub small_r: f32,
}

impl TryFrom<TorusParams> for Torus {
    type Error = Error;

    fn try_from(p: TorusParams) -> Result<Self, Error> {
        Self::new(p.big_r, p.small_r)
    }
}

#[cfg_attr(feature = "with_serde", derive(serde::Deserialize))]
pub(crate) struct OctahedronParams {
    pub size: f32,
}

impl TryFrom<OctahedronParams> for Octahedron {
    type Error = Error;

    fn try_from(p: OctahedronParams) -> Result<Self, Error> {
        Self::new(p.size)
    }
}

#[cfg_attr(feature = "with_serde", derive(serde::Deserialize))]
pub(crate) struct PolyhedronParams {
    pub directions: Vec<Vec3>,
    pub radius: f32,
    pub blend: Blend,
}

impl TryFrom<PolyhedronParams> for Polyhedron {
    type Error = Error;

    fn try_from(p: PolyhedronParams) -> Result<Self, Error> {
        Self::new(p.directions, p.radius, p.blend)
    }
}

#[cfg_attr(feature = "with_serde", derive(serde::Deserialize))]
pub(crate) struct TangleParams {
    pub scale: f32,
}

impl TryFrom<TangleParams> for Tangle {
    type Error = Error;

    fn try_from(p: TangleParams) -> Result<Self, Error> {
        Self::new(p.scale)
    }
}

#[cfg_attr(feature = "with_serde", derive(serde::Deserialize))]
pub(crate) struct TwistedBandParams {
    pub radius: f32,
    pub half_width: f32,
    pub half_thickness: f32,
    pub rounding_radius: f32,
    pub half_twists: i32,
    pub distortion: f32,
}

impl TryFrom<TwistedBandParams> for TwistedBand {
    type Error = Error;

    fn try_from(p: TwistedBandParams) -> Result<Self, Error> {
        Self::new(p.radius, p.half_width, p.half_thickness, p.half_twists)?
            .with_rounding(p.rounding_radius)?
            .with_distortion(p.distortion)
    }
}

#[cfg_attr(feature = "with_serde", derive(serde::Deserialize))]
pub(crate) struct RoundedCubeParams {
    pub half_size: Vec3,
    pub cross_weight: f32,
}

impl TryFrom<RoundedCubeParams> for RoundedCube {
    type Error = Error;

    fn try_from(p: RoundedCubeParams) -> Result<Self, Error> {
        Self::new(p.half_size, p.cross_weight)
    }
}

#[cfg_attr(feature = "with_serde", derive(serde::Deserialize))]
pub(crate) struct TubeParams {
    pub segments: Vec<[Vec3; 2]>,
    pub radius: f32,
}

impl TryFrom<TubeParams> for Tube {
    type Error = Error;

    fn try_from(p: TubeParams) -> Result<Self, Error> {
        Self::from_segments(p.segments, p.radius)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Field;

    #[test]
    fn loading_revalidates() {
        assert_eq!(
            Sphere::try_from(SphereParams { radius: 0.0 }),
            Err(Error::BadParameter("radius"))
        );
        assert!(TwistedBand::try_from(TwistedBandParams {
            radius: 1.0,
            half_width: 2.0,
            half_thickness: 0.1,
            rounding_radius: 0.0,
            half_twists: 1,
            distortion: 0.8,
        })
        .is_err());
        assert_eq!(
            Tube::try_from(TubeParams {
                segments: Vec::new(),
                radius: 0.1,
            }),
            Err(Error::TooFewSamples)
        );
        assert!(RoundedCube::try_from(RoundedCubeParams {
            half_size: Vec3::ONE,
            cross_weight: -1.0,
        })
        .is_err());
        assert!(Polyhedron::try_from(PolyhedronParams {
            directions: vec![Vec3::ZERO],
            radius: 1.0,
            blend: Blend::Sharp,
        })
        .is_err());
    }

    #[test]
    fn valid_parameters_rebuild_the_same_field() {
        let band = TwistedBand::new(2.0, 0.4, 0.1, 3)
            .and_then(|b| b.with_rounding(0.05))
            .and_then(|b| b.with_distortion(0.9))
            .unwrap();
        let loaded = TwistedBand::try_from(TwistedBandParams {
            radius: 2.0,
            half_width: 0.4,
            half_thickness: 0.1,
            rounding_radius: 0.05,
            half_twists: 3,
            distortion: 0.9,
        })
        .unwrap();
        assert_eq!(loaded, band);

        let tube = Tube::try_from(TubeParams {
            segments: vec![[Vec3::ZERO, Vec3::X]],
            radius: 0.25,
        })
        .unwrap();
        assert!((tube.eval(Vec3::new(0.5, 1.0, 0.0)) - 0.75).abs() < 1e-6);
    }

    #[cfg(feature = "with_serde")]
    #[test]
    fn deserializing_rejects_bad_fields() {
        assert!(serde_json::from_str::<Sphere>(r#"{"radius":0.0}"#).is_err());
        assert!(serde_json::from_str::<Tube>(r#"{"segments":[],"radius":0.1}"#).is_err());
        assert!(serde_json::from_str::<TwistedBand>(
            r#"{"radius":1.0,"half_width":2.0,"half_thickness":0.1,"rounding_radius":0.0,"half_twists":1,"distortion":0.8}"#
        )
        .is_err());

        let shape = crate::Shape::from(RoundedCube::new(Vec3::new(1.0, 2.0, 1.0), 0.5).unwrap());
        let json = serde_json::to_string(&shape).unwrap();
        let back: crate::Shape = serde_json::from_str(&json).unwrap();
        assert_eq!(back, shape);

        let tube = Tube::from_points([Vec3::ZERO, Vec3::X, Vec3::Y], true, 0.1).unwrap();
        let back: Tube = serde_json::from_str(&serde_json::to_string(&tube).unwrap()).unwrap();
        assert_eq!(back, tube);
    }
}
