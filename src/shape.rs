use crate::math::BoundingBox;
use crate::BoxField;
use crate::CappedCylinder;
use crate::Field;
use crate::FieldKind;
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

/// Any one of the built-in fields, for scenes that mix them without boxing.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "with_serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Shape {
    Sphere(Sphere),
    Box(BoxField),
    RoundedBox(RoundedBox),
    CappedCylinder(CappedCylinder),
    RoundedCylinder(RoundedCylinder),
    Torus(Torus),
    Octahedron(Octahedron),
    Polyhedron(Polyhedron),
    Tangle(Tangle),
    TwistedBand(TwistedBand),
    RoundedCube(RoundedCube),
    Tube(Tube),
}

macro_rules! with_field {
    ($shape:expr, $f:ident => $body:expr) => {
        match $shape {
            Shape::Sphere($f) => $body,
            Shape::Box($f) => $body,
            Shape::RoundedBox($f) => $body,
            Shape::CappedCylinder($f) => $body,
            Shape::RoundedCylinder($f) => $body,
            Shape::Torus($f) => $body,
            Shape::Octahedron($f) => $body,
            Shape::Polyhedron($f) => $body,
            Shape::Tangle($f) => $body,
            Shape::TwistedBand($f) => $body,
            Shape::RoundedCube($f) => $body,
            Shape::Tube($f) => $body,
        }
    };
}

impl Shape {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Sphere(_) => "sphere",
            Self::Box(_) => "box",
            Self::RoundedBox(_) => "rounded_box",
            Self::CappedCylinder(_) => "capped_cylinder",
            Self::RoundedCylinder(_) => "rounded_cylinder",
            Self::Torus(_) => "torus",
            Self::Octahedron(_) => "octahedron",
            Self::Polyhedron(_) => "polyhedron",
            Self::Tangle(_) => "tangle",
            Self::TwistedBand(_) => "twisted_band",
            Self::RoundedCube(_) => "rounded_cube",
            Self::Tube(_) => "tube",
        }
    }
}

impl Field for Shape {
    fn kind(&self) -> FieldKind {
        with_field!(self, f => f.kind())
    }

    #[inline]
    fn eval(&self, pos: Vec3) -> f32 {
        with_field!(self, f => f.eval(pos))
    }

    #[inline]
    fn eval_with_gradient(&self, pos: Vec3) -> (f32, Vec3) {
        with_field!(self, f => f.eval_with_gradient(pos))
    }

    fn has_analytic_gradient(&self) -> bool {
        with_field!(self, f => f.has_analytic_gradient())
    }

    fn exact_closest_point(&self, pos: Vec3) -> Option<Vec3> {
        with_field!(self, f => f.exact_closest_point(pos))
    }

    fn bounding_box(&self) -> Option<BoundingBox> {
        with_field!(self, f => f.bounding_box())
    }
}

macro_rules! impl_from {
    ($($variant:ident($ty:ty)),* $(,)?) => {
        $(
            impl From<$ty> for Shape {
                fn from(field: $ty) -> Self {
                    Self::$variant(field)
                }
            }
        )*
    };
}

impl_from!(
    Sphere(Sphere),
    Box(BoxField),
    RoundedBox(RoundedBox),
    CappedCylinder(CappedCylinder),
    RoundedCylinder(RoundedCylinder),
    Torus(Torus),
    Octahedron(Octahedron),
    Polyhedron(Polyhedron),
    Tangle(Tangle),
    TwistedBand(TwistedBand),
    RoundedCube(RoundedCube),
    Tube(Tube),
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Blend;

    #[test]
    fn dispatches_to_inner_field() {
        let p = Vec3::new(0.3, 1.7, -0.2);
        let torus = Torus::new(1.0, 0.25).unwrap();
        let shape = Shape::from(torus);
        assert_eq!(shape.eval(p), torus.eval(p));
        assert_eq!(shape.eval_with_gradient(p), torus.eval_with_gradient(p));
        assert_eq!(shape.bounding_box(), torus.bounding_box());
        assert_eq!(shape.name(), "torus");
    }

    #[test]
    fn kinds_and_capabilities() {
        let scene: Vec<Shape> = vec![
            Sphere::new(1.0).unwrap().into(),
            Polyhedron::icosahedron(1.0, Blend::Smooth(8.0)).unwrap().into(),
            Tangle::new(1.0).unwrap().into(),
            TwistedBand::mobius(2.0, 0.4, 0.1).unwrap().into(),
        ];
        let kinds: Vec<FieldKind> = scene.iter().map(|s| s.kind()).collect();
        assert_eq!(
            kinds,
            [
                FieldKind::Exact,
                FieldKind::Approximate,
                FieldKind::Approximate,
                FieldKind::Approximate
            ]
        );
        let exact_projectable = scene
            .iter()
            .filter(|s| s.exact_closest_point(Vec3::X).is_some())
            .count();
        assert_eq!(exact_projectable, 1);
    }
}
