//! Moving points onto a field's zero set.

use crate::Field;
use glam::Vec3;

#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "with_serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "with_arbitrary", derive(arbitrary::Arbitrary))]
pub struct ProjectionOptions {
    /// Never take more Newton steps than this.
    pub max_iterations: usize,

    /// Added to the field value before testing for convergence, so the projection lands on
    /// the iso-surface `field == -offset` instead of the zero set.
    pub offset: f32,

    /// Fraction of the full Newton step to take. Tuned for visual convergence speed,
    /// not derived from a stability bound.
    pub damping: f32,

    /// `|field + offset|` below this counts as on the surface.
    pub epsilon: f32,

    /// Squared gradient lengths below this are treated as a vanishing gradient.
    pub degenerate_gradient: f32,

    /// Fixed step along +X used to escape singular points.
    pub nudge: f32,

    /// Starting points closer than this to the origin are nudged before iterating.
    pub origin_tolerance: f32,
}

impl ProjectionOptions {
    /// More iterations and a tighter tolerance.
    pub fn precise() -> Self {
        Self {
            max_iterations: 32,
            epsilon: 1e-6,
            ..Default::default()
        }
    }
}

impl Default for ProjectionOptions {
    fn default() -> Self {
        Self {
            max_iterations: 8,
            offset: 0.0,
            damping: 0.8,
            epsilon: 1e-4,
            degenerate_gradient: 1e-10,
            nudge: 1e-3,
            origin_tolerance: 1e-6,
        }
    }
}

/// A point believed to lie on (or very near) a field's zero set.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "with_serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Projection {
    pub point: Vec3,
    /// Newton steps taken. Zero for exact projections and points already on the surface.
    pub iterations: usize,
    /// False when the iteration budget ran out first; `point` is then the last iterate.
    pub converged: bool,
}

/// Nearest point on the surface, using the field's exact projection when it has one and
/// damped Newton iteration otherwise.
pub fn closest_point(pos: Vec3, field: &impl Field, opt: &ProjectionOptions) -> Projection {
    if let Some(point) = field.exact_closest_point(pos) {
        return Projection {
            point,
            iterations: 0,
            converged: true,
        };
    }
    newton_closest_point(pos, field, opt)
}

/// Damped Newton iteration towards the zero set, ignoring any exact projection.
///
/// Each step moves the point by `-gradient * value / |gradient|² * damping`. Vanishing
/// gradients are stepped over with a small fixed nudge instead of being divided by.
pub fn newton_closest_point(pos: Vec3, field: &impl Field, opt: &ProjectionOptions) -> Projection {
    let mut point = pos;
    if point.length_squared() < opt.origin_tolerance * opt.origin_tolerance {
        // Many fields centered at origin have no usable gradient there.
        point.x += opt.nudge;
    }

    for iteration in 0..opt.max_iterations {
        let (value, gradient) = field.eval_with_gradient(point);
        let value = value + opt.offset;
        if value.abs() < opt.epsilon {
            return Projection {
                point,
                iterations: iteration,
                converged: true,
            };
        }

        let gradient_sq = gradient.length_squared();
        if gradient_sq < opt.degenerate_gradient {
            tracing::trace!(?point, "Vanishing gradient, nudging");
            point.x += opt.nudge;
            continue;
        }

        point -= gradient * (value / gradient_sq * opt.damping);
    }

    let converged = (field.eval(point) + opt.offset).abs() < opt.epsilon;
    if !converged {
        tracing::trace!(
            ?pos,
            ?point,
            max_iterations = opt.max_iterations,
            "Closest point did not converge"
        );
    }
    Projection {
        point,
        iterations: opt.max_iterations,
        converged,
    }
}
