#![allow(missing_docs, clippy::manual_clamp)]

use glam::*;

#[inline]
fn hypot(v: Vec2) -> f32 {
    v.x.hypot(v.y)
}

#[inline]
pub fn sd_sphere(pos: Vec3, center: Vec3, radius: f32) -> f32 {
    (pos - center).length() - radius
}

/// Axis aligned box centered at origin.
#[inline]
pub fn sd_box(pos: Vec3, half_size: Vec3) -> f32 {
    let q = pos.abs() - half_size;
    q.max(Vec3::ZERO).length() + q.x.max(q.y.max(q.z)).min(0.0)
}

/// The rounding is subtracted from the edges and corners (sandpapered down),
/// so the outer extent stays at `half_size`.
#[inline]
pub fn sd_rounded_box(pos: Vec3, half_size: Vec3, rounding_radius: f32) -> f32 {
    let q = pos.abs() - half_size + Vec3::splat(rounding_radius);
    q.max(Vec3::splat(0.0)).length() + q.x.max(q.y.max(q.z)).min(0.0) - rounding_radius
}

/// Cylinder along the Y axis, centered at origin.
#[inline]
pub fn sd_capped_cylinder(pos: Vec3, cylinder_radius: f32, half_height: f32) -> f32 {
    let d = Vec2::new(hypot(pos.xz()) - cylinder_radius, pos.y.abs() - half_height);
    d.x.max(d.y).min(0.0) + d.max(Vec2::ZERO).length()
}

#[inline]
pub fn sd_rounded_cylinder(
    pos: Vec3,
    cylinder_radius: f32,
    half_height: f32,
    rounding_radius: f32,
) -> f32 {
    let d = Vec2::new(
        hypot(pos.xz()) - cylinder_radius + rounding_radius,
        pos.y.abs() - half_height + rounding_radius,
    );
    d.x.max(d.y).min(0.0) + d.max(Vec2::ZERO).length() - rounding_radius
}

/// Ring in the XZ plane. `big_r` is the radius of the tube's center circle.
#[inline]
pub fn sd_torus(pos: Vec3, big_r: f32, small_r: f32) -> f32 {
    let q = Vec2::new(hypot(pos.xz()) - big_r, pos.y);
    q.length() - small_r
}

/// Exact octahedron with vertices at `±size` on each axis.
///
/// The point is reflected into the positive octant and then rotated so that the
/// closest face edge is handled by a single 2D clamp.
#[allow(clippy::many_single_char_names)]
#[inline]
pub fn sd_octahedron(pos: Vec3, size: f32) -> f32 {
    let p = pos.abs();
    let m = p.x + p.y + p.z - size;
    let q = if 3.0 * p.x < m {
        p
    } else if 3.0 * p.y < m {
        p.yzx()
    } else if 3.0 * p.z < m {
        p.zxy()
    } else {
        return m * 0.577_350_26;
    };
    let k = (0.5 * (q.z - q.y + size)).clamp(0.0, size);
    Vec3::new(q.x, q.y - size + k, q.z - k).length()
}

/// Closest point to `pos` on the segment `a`-`b`.
#[inline]
pub fn closest_on_segment(pos: Vec3, a: Vec3, b: Vec3) -> Vec3 {
    let pa = pos - a;
    let ba = b - a;
    let len_sq = ba.dot(ba);
    if len_sq <= f32::EPSILON {
        return a;
    }
    let h = (pa.dot(ba) / len_sq).clamp(0.0, 1.0);
    a + ba * h
}

#[inline]
pub fn sd_segment(pos: Vec3, a: Vec3, b: Vec3) -> f32 {
    (pos - closest_on_segment(pos, a, b)).length()
}

#[inline]
pub fn sd_capsule(pos: Vec3, points: &[Vec3; 2], radius: f32) -> f32 {
    sd_segment(pos, points[0], points[1]) - radius
}

/// 2D rectangle with rounded corners, centered at origin.
#[inline]
pub fn sd_rounded_rect(pos: Vec2, half_size: Vec2, rounding_radius: f32) -> f32 {
    let q = pos.abs() - half_size + Vec2::splat(rounding_radius);
    q.max(Vec2::ZERO).length() + q.x.max(q.y).min(0.0) - rounding_radius
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-5;

    #[test]
    fn box_distances() {
        let half = Vec3::ONE;
        assert!((sd_box(Vec3::new(2.0, 0.0, 0.0), half) - 1.0).abs() < EPS);
        assert!((sd_box(Vec3::ZERO, half) + 1.0).abs() < EPS);
        // Corner region measures to the corner, not the face.
        let corner = sd_box(Vec3::splat(2.0), half);
        assert!((corner - 3.0_f32.sqrt()).abs() < EPS);
    }

    #[test]
    fn rounded_box_keeps_extent() {
        let d = sd_rounded_box(Vec3::new(1.0, 0.0, 0.0), Vec3::ONE, 0.25);
        assert!(d.abs() < EPS);
        // The corner is pulled in by the rounding.
        assert!(sd_rounded_box(Vec3::ONE, Vec3::ONE, 0.25) > 0.0);
    }

    #[test]
    fn torus_surface_and_hole() {
        assert!(sd_torus(Vec3::new(1.25, 0.0, 0.0), 1.0, 0.25).abs() < EPS);
        assert!(sd_torus(Vec3::new(0.0, 0.0, -0.75), 1.0, 0.25).abs() < EPS);
        // Center of the hole is outside the tube.
        assert!((sd_torus(Vec3::ZERO, 1.0, 0.25) - 0.75).abs() < EPS);
    }

    #[test]
    fn cylinders() {
        assert!(sd_capped_cylinder(Vec3::new(0.5, 0.0, 0.0), 0.5, 1.0).abs() < EPS);
        assert!(sd_capped_cylinder(Vec3::new(0.0, 1.0, 0.0), 0.5, 1.0).abs() < EPS);
        assert!((sd_capped_cylinder(Vec3::new(0.0, 3.0, 0.0), 0.5, 1.0) - 2.0).abs() < EPS);
        assert!(sd_rounded_cylinder(Vec3::new(0.0, 1.0, 0.0), 0.5, 1.0, 0.1).abs() < EPS);
    }

    #[test]
    fn octahedron_vertices_and_faces() {
        assert!(sd_octahedron(Vec3::new(0.0, 0.0, 2.0), 2.0).abs() < EPS);
        assert!(sd_octahedron(Vec3::splat(2.0 / 3.0), 2.0).abs() < EPS);
        assert!((sd_octahedron(Vec3::new(0.0, 0.0, 3.0), 2.0) - 1.0).abs() < EPS);
        assert!(sd_octahedron(Vec3::ZERO, 2.0) < 0.0);
    }

    #[test]
    fn segment_clamps_to_endpoints() {
        let a = Vec3::ZERO;
        let b = Vec3::X;
        assert!((sd_segment(Vec3::new(0.5, 1.0, 0.0), a, b) - 1.0).abs() < EPS);
        assert!((sd_segment(Vec3::new(3.0, 0.0, 0.0), a, b) - 2.0).abs() < EPS);
        assert_eq!(closest_on_segment(Vec3::Y, a, a), a);
    }

    #[test]
    fn rounded_rect() {
        let half = Vec2::new(1.0, 0.5);
        assert!(sd_rounded_rect(Vec2::new(1.0, 0.0), half, 0.1).abs() < EPS);
        assert!((sd_rounded_rect(Vec2::ZERO, half, 0.0) + 0.5).abs() < EPS);
    }
}
