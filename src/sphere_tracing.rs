use crate::math::Ray3;
use glam::Vec3;
use std::cmp::Ordering;

#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "with_serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "with_arbitrary", derive(arbitrary::Arbitrary))]
pub struct Options {
    /// A field value below this counts as a hit. Also the initial offset along the ray,
    /// so that a ray starting on a surface does not immediately hit it again.
    pub epsilon: f32,

    /// Don't take more steps than this.
    pub max_steps: usize,

    /// Give up once the ray has travelled this far.
    pub max_dist: f32,
}

impl Options {
    /// Fewer steps and a looser hit threshold, for previews.
    pub fn coarse() -> Self {
        Self {
            epsilon: 1e-3,
            max_steps: 64,
            max_dist: 100.0,
        }
    }
}

impl Default for Options {
    fn default() -> Self {
        Self {
            epsilon: 1e-4,
            max_steps: 256,
            max_dist: 100.0,
        }
    }
}

/// How a march ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "with_serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Disposition {
    /// The field dropped below epsilon.
    Hit,
    /// The ray travelled further than `max_dist`.
    Miss,
    /// `max_steps` ran out first.
    Exhausted,
}

/// Where a march stopped, and why.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "with_serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RayHit {
    /// Distance along ray.
    pub t: f32,
    /// Point in world: `origin + dir * t`.
    pub pos: Vec3,
    /// Field value at `pos`.
    pub dist: f32,
    /// Number of field evaluations.
    pub steps: usize,
    pub disposition: Disposition,
}

impl RayHit {
    pub fn is_hit(&self) -> bool {
        self.disposition == Disposition::Hit
    }

    /// The hit point, if this is a hit.
    pub fn hit_pos(&self) -> Option<Vec3> {
        self.is_hit().then_some(self.pos)
    }
}

/// Less means earlier or closer hit.
impl PartialOrd for RayHit {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self.is_hit(), other.is_hit()) {
            (true, false) => Some(Ordering::Less),    // hits before misses
            (false, true) => Some(Ordering::Greater), // misses after hits
            (true, true) => self.t.partial_cmp(&other.t), // both hits: first hit is first
            (false, false) => self.dist.partial_cmp(&other.dist), // both missed: closest is first
        }
    }
}

/// Marches a ray from `opt.epsilon` until it hits, passes `opt.max_dist`, or runs out of steps.
///
/// `sd` is used directly as the step length, so it must never overestimate the distance to the
/// surface. Fields that do (approximate ones) can make the march step straight through thin or
/// sharply curved features.
pub fn trace(mut sd: impl FnMut(Vec3) -> f32, ray: Ray3, opt: &Options) -> RayHit {
    let mut t = opt.epsilon;
    let mut pos = ray.point_along(t);
    let mut dist = f32::INFINITY;

    for step in 0..opt.max_steps {
        pos = ray.point_along(t);
        dist = sd(pos);

        if dist < opt.epsilon {
            return RayHit {
                t,
                pos,
                dist,
                steps: step + 1,
                disposition: Disposition::Hit,
            };
        }

        if t > opt.max_dist {
            return RayHit {
                t,
                pos,
                dist,
                steps: step + 1,
                disposition: Disposition::Miss,
            };
        }

        t += dist;
    }

    tracing::trace!(t, dist, max_steps = opt.max_steps, "Sphere trace ran out of steps");

    RayHit {
        t,
        pos,
        dist,
        steps: opt.max_steps,
        disposition: Disposition::Exhausted,
    }
}
