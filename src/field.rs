use crate::math::BoundingBox;
use glam::Vec3;

/// Step used for central-difference gradients of fields without an analytic one.
pub const GRADIENT_EPSILON: f32 = 1e-3;

/// How far a field's value can be trusted as a distance.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "with_serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FieldKind {
    /// The value is a true Euclidean signed distance, or at least never overestimates it.
    /// Safe to sphere trace.
    Exact,

    /// The value is a potential that is only distance-like close to the surface.
    /// Sphere tracing it can step past thin features.
    Approximate,
}

/// A scalar field over space whose zero set is a surface.
///
/// Negative values are inside. Implementations hold only immutable shape parameters,
/// so evaluating the same point twice always gives the same result.
pub trait Field {
    fn kind(&self) -> FieldKind;

    fn eval(&self, pos: Vec3) -> f32;

    /// Value and gradient of the field at `pos`.
    ///
    /// Falls back to central differences of [`Field::eval`] unless the field overrides it.
    fn eval_with_gradient(&self, pos: Vec3) -> (f32, Vec3) {
        (self.eval(pos), central_difference_gradient(|p| self.eval(p), pos))
    }

    /// True when [`Field::eval_with_gradient`] is analytic rather than numerical.
    fn has_analytic_gradient(&self) -> bool {
        false
    }

    /// Non-iterative nearest surface point, for fields that have one.
    fn exact_closest_point(&self, _pos: Vec3) -> Option<Vec3> {
        None
    }

    /// A box containing the whole surface, if the field is bounded.
    fn bounding_box(&self) -> Option<BoundingBox> {
        None
    }
}

impl<F: Field + ?Sized> Field for &F {
    fn kind(&self) -> FieldKind {
        (**self).kind()
    }

    fn eval(&self, pos: Vec3) -> f32 {
        (**self).eval(pos)
    }

    fn eval_with_gradient(&self, pos: Vec3) -> (f32, Vec3) {
        (**self).eval_with_gradient(pos)
    }

    fn has_analytic_gradient(&self) -> bool {
        (**self).has_analytic_gradient()
    }

    fn exact_closest_point(&self, pos: Vec3) -> Option<Vec3> {
        (**self).exact_closest_point(pos)
    }

    fn bounding_box(&self) -> Option<BoundingBox> {
        (**self).bounding_box()
    }
}

impl<F: Field + ?Sized> Field for Box<F> {
    fn kind(&self) -> FieldKind {
        (**self).kind()
    }

    fn eval(&self, pos: Vec3) -> f32 {
        (**self).eval(pos)
    }

    fn eval_with_gradient(&self, pos: Vec3) -> (f32, Vec3) {
        (**self).eval_with_gradient(pos)
    }

    fn has_analytic_gradient(&self) -> bool {
        (**self).has_analytic_gradient()
    }

    fn exact_closest_point(&self, pos: Vec3) -> Option<Vec3> {
        (**self).exact_closest_point(pos)
    }

    fn bounding_box(&self) -> Option<BoundingBox> {
        (**self).bounding_box()
    }
}

/// Gradient of `f` at `pos` from six samples.
#[inline]
pub fn central_difference_gradient(f: impl Fn(Vec3) -> f32, pos: Vec3) -> Vec3 {
    let h = GRADIENT_EPSILON;
    let dx = f(pos + Vec3::X * h) - f(pos - Vec3::X * h);
    let dy = f(pos + Vec3::Y * h) - f(pos - Vec3::Y * h);
    let dz = f(pos + Vec3::Z * h) - f(pos - Vec3::Z * h);
    Vec3::new(dx, dy, dz) / (2.0 * h)
}

#[inline]
pub fn evaluate(field: &impl Field, pos: Vec3) -> f32 {
    field.eval(pos)
}

#[inline]
pub fn evaluate_with_gradient(field: &impl Field, pos: Vec3) -> (f32, Vec3) {
    field.eval_with_gradient(pos)
}

/// Outward surface normal: the normalized gradient.
///
/// Where the gradient vanishes, +Y is returned so callers always get a unit vector.
pub fn normal(field: &impl Field, pos: Vec3) -> Vec3 {
    let (_, gradient) = field.eval_with_gradient(pos);
    gradient.try_normalize().unwrap_or(Vec3::Y)
}

/// Any field, moved so that its origin lands on `offset`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "with_serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Translated<F> {
    inner: F,
    offset: Vec3,
}

impl<F: Field> Translated<F> {
    pub fn new(inner: F, offset: Vec3) -> Self {
        Self { inner, offset }
    }

    pub fn inner(&self) -> &F {
        &self.inner
    }

    pub fn offset(&self) -> Vec3 {
        self.offset
    }
}

impl<F: Field> Field for Translated<F> {
    fn kind(&self) -> FieldKind {
        self.inner.kind()
    }

    fn eval(&self, pos: Vec3) -> f32 {
        self.inner.eval(pos - self.offset)
    }

    fn eval_with_gradient(&self, pos: Vec3) -> (f32, Vec3) {
        self.inner.eval_with_gradient(pos - self.offset)
    }

    fn has_analytic_gradient(&self) -> bool {
        self.inner.has_analytic_gradient()
    }

    fn exact_closest_point(&self, pos: Vec3) -> Option<Vec3> {
        self.inner
            .exact_closest_point(pos - self.offset)
            .map(|p| p + self.offset)
    }

    fn bounding_box(&self) -> Option<BoundingBox> {
        self.inner
            .bounding_box()
            .map(|bb| bb.translated(self.offset))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Sphere;

    #[test]
    fn numerical_gradient_of_sphere() {
        let sphere = Sphere::new(1.0).unwrap();
        let g = central_difference_gradient(|p| sphere.eval(p), Vec3::new(2.0, 0.0, 0.0));
        assert!((g - Vec3::X).length() < 1e-3, "{g:?}");
    }

    #[test]
    fn normal_falls_back_at_singularity() {
        let sphere = Sphere::new(1.0).unwrap();
        assert_eq!(normal(&sphere, Vec3::ZERO), Vec3::Y);
        let n = normal(&sphere, Vec3::new(0.0, 0.0, -3.0));
        assert!((n + Vec3::Z).length() < 1e-5);
    }

    #[test]
    fn translated_forwards_everything() {
        let moved = Translated::new(Sphere::new(1.0).unwrap(), Vec3::new(0.0, 2.0, 0.0));
        assert_eq!(moved.kind(), FieldKind::Exact);
        assert!(moved.eval(Vec3::new(0.0, 3.0, 0.0)).abs() < 1e-6);
        let (_, g) = moved.eval_with_gradient(Vec3::new(0.0, 4.0, 0.0));
        assert!((g - Vec3::Y).length() < 1e-5);
        let bb = moved.bounding_box().unwrap();
        assert_eq!(bb.center(), Vec3::new(0.0, 2.0, 0.0));
    }

    #[test]
    fn fields_behind_pointers() {
        let boxed: Box<dyn Field> = Box::new(Sphere::new(2.0).unwrap());
        assert!((evaluate(&boxed, Vec3::ZERO) + 2.0).abs() < 1e-6);
        let by_ref = &boxed;
        assert!(by_ref.has_analytic_gradient());
        let (d, _) = evaluate_with_gradient(&by_ref, Vec3::new(0.0, 0.0, 2.0));
        assert!(d.abs() < 1e-6);
    }
}
