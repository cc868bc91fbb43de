//! Support-function accumulators for regular polyhedra.
//!
//! A polyhedron is described by a set of unit facet normals. Because the solids are centrally
//! symmetric only one normal of each opposite pair is stored, and the accumulators use
//! `|dot(pos, n)|`.

use glam::Vec3;

const INV_SQRT3: f32 = 0.577_350_26;

// normalize(0, 1, phi + 1) and permutations
const ICO_A: f32 = 0.356_822_1;
const ICO_B: f32 = 0.934_172_4;

// normalize(0, phi, 1) and permutations
const DODECA_A: f32 = 0.525_731_1;
const DODECA_B: f32 = 0.850_650_8;

/// Facet normals of a regular icosahedron (up to sign).
pub const ICOSAHEDRON_DIRECTIONS: [Vec3; 10] = [
    Vec3::new(INV_SQRT3, INV_SQRT3, INV_SQRT3),
    Vec3::new(-INV_SQRT3, INV_SQRT3, INV_SQRT3),
    Vec3::new(INV_SQRT3, -INV_SQRT3, INV_SQRT3),
    Vec3::new(INV_SQRT3, INV_SQRT3, -INV_SQRT3),
    Vec3::new(0.0, ICO_A, ICO_B),
    Vec3::new(0.0, -ICO_A, ICO_B),
    Vec3::new(ICO_B, 0.0, ICO_A),
    Vec3::new(-ICO_B, 0.0, ICO_A),
    Vec3::new(ICO_A, ICO_B, 0.0),
    Vec3::new(-ICO_A, ICO_B, 0.0),
];

/// Facet normals of a regular dodecahedron (up to sign).
pub const DODECAHEDRON_DIRECTIONS: [Vec3; 6] = [
    Vec3::new(0.0, DODECA_B, DODECA_A),
    Vec3::new(0.0, -DODECA_B, DODECA_A),
    Vec3::new(DODECA_A, 0.0, DODECA_B),
    Vec3::new(-DODECA_A, 0.0, DODECA_B),
    Vec3::new(DODECA_B, DODECA_A, 0.0),
    Vec3::new(-DODECA_B, DODECA_A, 0.0),
];

/// Sup-norm accumulation: flat facets at distance `radius` from the center.
///
/// Exact inside, and never an overestimate outside.
#[inline]
pub fn sd_support_sharp(pos: Vec3, directions: &[Vec3], radius: f32) -> f32 {
    let mut d = 0.0_f32;
    for n in directions {
        d = d.max(pos.dot(*n).abs());
    }
    d - radius
}

/// p-norm accumulation with the given `exponent`.
///
/// Low exponents give a rounded, almost spherical solid. As the exponent grows the result
/// approaches [`sd_support_sharp`].
///
/// The projections are divided by the largest one before being raised to `exponent`, so the sum
/// stays in `[1, directions.len()]` however far out `pos` is.
#[inline]
pub fn sd_support_smooth(pos: Vec3, directions: &[Vec3], exponent: f32, radius: f32) -> f32 {
    let mut largest = 0.0_f32;
    for n in directions {
        largest = largest.max(pos.dot(*n).abs());
    }
    if largest == 0.0 {
        return -radius;
    }

    let mut sum = 0.0_f32;
    for n in directions {
        sum += (pos.dot(*n).abs() / largest).powf(exponent);
    }
    largest * sum.powf(exponent.recip()) - radius
}
