use crate::error::check_positive;
use crate::math::BoundingBox;
use crate::Error;
use crate::Field;
use crate::FieldKind;
use fieldtrace_sdf::closest_on_segment;
use glam::Vec3;
use std::ops::RangeInclusive;

/// A tube of constant radius around a polyline.
///
/// Smooth curves are sampled once, at construction, into short segments. The value is the
/// exact distance to the tube around those segments; how close that is to the tube around the
/// smooth curve depends only on the sampling density.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "with_serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "crate::params::TubeParams")
)]
pub struct Tube {
    segments: Vec<[Vec3; 2]>,
    radius: f32,
    #[cfg_attr(feature = "with_serde", serde(skip_serializing))]
    bounds: BoundingBox,
}

impl Tube {
    /// Tube through `points` in order. A closed tube also joins the last point to the first.
    pub fn from_points(
        points: impl IntoIterator<Item = Vec3>,
        closed: bool,
        radius: f32,
    ) -> Result<Self, Error> {
        let points: Vec<Vec3> = points.into_iter().collect();
        if points.len() < 2 {
            return Err(Error::TooFewSamples);
        }

        let mut segments: Vec<[Vec3; 2]> = points.windows(2).map(|w| [w[0], w[1]]).collect();
        if closed {
            if let (Some(&first), Some(&last)) = (points.first(), points.last()) {
                if first != last {
                    segments.push([last, first]);
                }
            }
        }
        Self::from_segments(segments, radius)
    }

    /// Tube around already-built segments, which need not be connected.
    pub fn from_segments(segments: Vec<[Vec3; 2]>, radius: f32) -> Result<Self, Error> {
        let radius = check_positive(radius, "radius")?;
        if segments.is_empty() {
            return Err(Error::TooFewSamples);
        }
        if !segments.iter().flatten().all(|p| p.is_finite()) {
            return Err(Error::BadParameter("points"));
        }

        let bounds = BoundingBox::from_points(segments.iter().flatten().copied())
            .expanded(Vec3::splat(radius));
        tracing::debug!(
            segments = segments.len(),
            radius,
            "Built sampled-curve tube"
        );

        Ok(Self {
            segments,
            radius,
            bounds,
        })
    }

    /// Samples `curve` at `samples` evenly spaced parameters across `t_range`.
    ///
    /// For a closed curve `curve(t_range.end())` is assumed to equal `curve(t_range.start())`,
    /// so the end is not sampled twice.
    pub fn from_curve(
        curve: impl Fn(f32) -> Vec3,
        t_range: RangeInclusive<f32>,
        samples: usize,
        closed: bool,
        radius: f32,
    ) -> Result<Self, Error> {
        if samples < 2 {
            return Err(Error::TooFewSamples);
        }
        let (start, end) = (*t_range.start(), *t_range.end());
        if !start.is_finite() || !end.is_finite() || start >= end {
            return Err(Error::BadParameter("t_range"));
        }
        let divisions = (if closed { samples } else { samples - 1 }) as f32;
        let points = (0..samples).map(|i| curve(start + (end - start) * i as f32 / divisions));
        Self::from_points(points, closed, radius)
    }

    pub fn segments(&self) -> &[[Vec3; 2]] {
        &self.segments
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Nearest point on the polyline itself (the tube's center line).
    pub fn nearest_on_center_line(&self, pos: Vec3) -> Vec3 {
        let mut best = pos;
        let mut best_dist_sq = f32::INFINITY;
        for [a, b] in &self.segments {
            let c = closest_on_segment(pos, *a, *b);
            let dist_sq = pos.distance_squared(c);
            if dist_sq < best_dist_sq {
                best_dist_sq = dist_sq;
                best = c;
            }
        }
        best
    }
}

impl Field for Tube {
    fn kind(&self) -> FieldKind {
        FieldKind::Exact
    }

    fn eval(&self, pos: Vec3) -> f32 {
        pos.distance(self.nearest_on_center_line(pos)) - self.radius
    }

    fn eval_with_gradient(&self, pos: Vec3) -> (f32, Vec3) {
        let offset = pos - self.nearest_on_center_line(pos);
        (offset.length() - self.radius, offset.normalize_or_zero())
    }

    fn has_analytic_gradient(&self) -> bool {
        true
    }

    fn bounding_box(&self) -> Option<BoundingBox> {
        Some(self.bounds)
    }
}
