use crate::math::Ray3;
use crate::sphere_tracing::Options;
use crate::sphere_tracing::RayHit;
use crate::Field;
use glam::Vec3;

/// Marches a ray from `origin` along the unit vector `direction` through `field`,
/// returning the first hit, a miss, or where the step budget ran out.
///
/// Approximate fields are traced the same way as exact ones. The result is only as reliable as
/// the field's distance estimate.
pub fn march(origin: Vec3, direction: Vec3, field: &impl Field, opt: &Options) -> RayHit {
    let ray = Ray3::new(origin, direction);
    march_ray(ray, field, opt)
}

pub fn march_ray(ray: Ray3, field: &impl Field, opt: &Options) -> RayHit {
    crate::sphere_tracing::trace(|pos| field.eval(pos), ray, opt)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sphere_tracing::Disposition;
    use crate::BoxField;
    use crate::Sphere;
    use crate::Torus;

    #[test]
    fn sphere_scenario() {
        let sphere = Sphere::new(1.0).unwrap();
        let hit = march(
            Vec3::new(0.0, 0.0, 5.0),
            -Vec3::Z,
            &sphere,
            &Options::default(),
        );
        assert_eq!(hit.disposition, Disposition::Hit);
        assert!((hit.t - 4.0).abs() < 1e-3);
    }

    #[test]
    fn ray_through_torus_hole_misses() {
        let torus = Torus::new(1.0, 0.25).unwrap();
        let hit = march(
            Vec3::new(0.0, 5.0, 0.0),
            -Vec3::Y,
            &torus,
            &Options::default(),
        );
        assert_eq!(hit.disposition, Disposition::Miss);

        let hit = march(
            Vec3::new(1.0, 5.0, 0.0),
            -Vec3::Y,
            &torus,
            &Options::default(),
        );
        assert!(hit.is_hit());
        assert!((hit.t - 4.75).abs() < 1e-3);
    }

    #[test]
    fn diagonal_ray_hits_box_corner_region() {
        let cube = BoxField::cube(1.0).unwrap();
        let ray = Ray3::from_points(Vec3::splat(4.0), Vec3::ZERO).unwrap();
        let hit = march_ray(ray, &cube, &Options::default());
        assert!(hit.is_hit());
        assert!((hit.pos - Vec3::ONE).length() < 1e-3, "{hit:?}");
    }
}
