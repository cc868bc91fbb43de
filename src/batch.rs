//! Many independent queries against one field at once.
//!
//! With the `with_rayon` feature the work is spread over the rayon thread pool, otherwise it runs
//! on the calling thread. Results are in input order either way.

use crate::math::Ray3;
use crate::projection::closest_point;
use crate::projection::Projection;
use crate::projection::ProjectionOptions;
use crate::sphere_tracing::Options;
use crate::sphere_tracing::RayHit;
use crate::trace::march_ray;
use crate::Field;
use glam::Vec3;

pub fn evaluate_many(field: &(impl Field + Sync), positions: &[Vec3]) -> Vec<f32> {
    #[cfg(feature = "with_rayon")]
    {
        use rayon::prelude::*;

        positions.par_iter().map(|&p| field.eval(p)).collect()
    }

    #[cfg(not(feature = "with_rayon"))]
    {
        positions.iter().map(|&p| field.eval(p)).collect()
    }
}

pub fn march_many(field: &(impl Field + Sync), rays: &[Ray3], opt: &Options) -> Vec<RayHit> {
    #[cfg(feature = "with_rayon")]
    {
        use rayon::prelude::*;

        rays.par_iter().map(|&ray| march_ray(ray, field, opt)).collect()
    }

    #[cfg(not(feature = "with_rayon"))]
    {
        rays.iter().map(|&ray| march_ray(ray, field, opt)).collect()
    }
}

pub fn closest_points(
    field: &(impl Field + Sync),
    positions: &[Vec3],
    opt: &ProjectionOptions,
) -> Vec<Projection> {
    #[cfg(feature = "with_rayon")]
    {
        use rayon::prelude::*;

        positions
            .par_iter()
            .map(|&p| closest_point(p, field, opt))
            .collect()
    }

    #[cfg(not(feature = "with_rayon"))]
    {
        positions
            .iter()
            .map(|&p| closest_point(p, field, opt))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Sphere;
    use crate::TwistedBand;

    #[test]
    fn batches_match_single_queries() {
        let sphere = Sphere::new(1.0).unwrap();
        let positions: Vec<Vec3> = (0..16)
            .map(|i| Vec3::new(i as f32 * 0.25 - 2.0, 0.5, 0.0))
            .collect();
        let values = evaluate_many(&sphere, &positions);
        for (p, v) in positions.iter().zip(&values) {
            assert_eq!(*v, sphere.eval(*p));
        }

        let rays: Vec<Ray3> = (0..8)
            .map(|i| Ray3::new(Vec3::new(i as f32 * 0.3, 0.0, 5.0), -Vec3::Z))
            .collect();
        let hits = march_many(&sphere, &rays, &Options::default());
        assert_eq!(hits.len(), rays.len());
        assert_eq!(hits.iter().filter(|h| h.is_hit()).count(), 4);
        assert!(hits[0].is_hit() && (hits[0].t - 4.0).abs() < 1e-3);
    }

    #[test]
    fn closest_points_in_order() {
        let band = TwistedBand::mobius(2.0, 0.4, 0.1).unwrap();
        let positions = [Vec3::new(2.0, 0.3, 0.0), Vec3::new(-2.0, 0.0, 0.5)];
        let projections = closest_points(&band, &positions, &ProjectionOptions::default());
        assert_eq!(projections.len(), 2);
        for (p, projection) in positions.iter().zip(&projections) {
            assert_eq!(projection.point, band.closest_point(*p));
        }
    }
}
