use glam::Vec3;

/// A ray with an origin and a unit direction.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "with_serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Ray3 {
    pub origin: Vec3,
    /// Unit length. Callers normalize; the ray never does it for them.
    pub dir: Vec3,
}

impl Ray3 {
    pub fn new(origin: Vec3, dir: Vec3) -> Self {
        debug_assert!(
            dir.is_normalized(),
            "Ray direction must be unit length: {:?}",
            dir
        );
        Self { origin, dir }
    }

    /// Ray starting at `origin` and pointing at `target`.
    ///
    /// Returns `None` if the two points coincide.
    pub fn from_points(origin: Vec3, target: Vec3) -> Option<Self> {
        let dir = (target - origin).try_normalize()?;
        Some(Self { origin, dir })
    }

    #[inline]
    pub fn point_along(&self, t: f32) -> Vec3 {
        self.origin + t * self.dir
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_along() {
        let ray = Ray3::new(Vec3::new(0.0, 0.0, 5.0), -Vec3::Z);
        assert_eq!(ray.point_along(4.0), Vec3::new(0.0, 0.0, 1.0));
    }

    #[test]
    fn from_points() {
        let ray = Ray3::from_points(Vec3::ZERO, Vec3::new(0.0, 3.0, 0.0)).unwrap();
        assert_eq!(ray.dir, Vec3::Y);
        assert!(Ray3::from_points(Vec3::ONE, Vec3::ONE).is_none());
    }
}
