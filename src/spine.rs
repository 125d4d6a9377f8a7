//! The spine: a fixed chain of control points interpolated into a smooth
//! curve, queryable by normalized arc length.
//!
//! The chain is mutated in place every frame (head pulled toward the smoothed
//! follow vector, each joint dragged after its predecessor) and the curve is
//! re-fit over it. Queries go through an arc-length table so a parameter step
//! corresponds to a constant distance along the body, not a control-point
//! index — without this, bend amplitude would bunch up wherever joints
//! happen to cluster.

use glam::Vec3;

use crate::config::{CurveType, SwimConfig};

/// Number of control points in the spine chain. Index 0 is the head (closest
/// to the follow target), index `JOINT_COUNT - 1` the tail. Fixed for the
/// lifetime of the curve.
pub const JOINT_COUNT: usize = 14;

/// Resolution of the cumulative arc-length table.
const ARC_LENGTH_DIVISIONS: usize = 200;

/// Segment parameterizations shorter than this are treated as zero-length.
const MIN_SEGMENT_DT: f32 = 1e-4;

#[derive(Debug, Clone)]
pub struct SpineCurve {
    points: [Vec3; JOINT_COUNT],
    curve_type: CurveType,
    tension: f32,
    /// Cumulative lengths at `ARC_LENGTH_DIVISIONS + 1` evenly spaced raw
    /// parameters. Only valid after [`SpineCurve::update_arc_lengths`].
    arc_lengths: Vec<f32>,
}

impl SpineCurve {
    #[must_use]
    pub fn new(curve_type: CurveType, tension: f32) -> Self {
        let mut curve = Self {
            points: [Vec3::ZERO; JOINT_COUNT],
            curve_type,
            tension,
            arc_lengths: Vec::with_capacity(ARC_LENGTH_DIVISIONS + 1),
        };
        curve.update_arc_lengths();
        curve
    }

    #[must_use]
    pub fn points(&self) -> &[Vec3; JOINT_COUNT] {
        &self.points
    }

    #[must_use]
    pub fn head(&self) -> Vec3 {
        self.points[0]
    }

    #[must_use]
    pub fn tail(&self) -> Vec3 {
        self.points[JOINT_COUNT - 1]
    }

    /// Drags the chain one frame toward `head_target` (the smoothed follow
    /// vector).
    ///
    /// The head is pulled most of the way toward the target; every other
    /// joint first has its z forced to its own chain index (the
    /// distance-along-spine cue the deformation loop multiplies by) and is
    /// then pulled toward its predecessor.
    ///
    /// Point mutation invalidates the arc-length table; callers must follow
    /// up with [`SpineCurve::update_arc_lengths`] before sampling.
    pub fn advance(&mut self, head_target: Vec3, cfg: &SwimConfig) {
        self.points[0] = self.points[0].lerp(head_target, cfg.head_lerp_factor);

        for i in 1..JOINT_COUNT {
            let prev = self.points[i - 1];
            self.points[i].z = i as f32;
            self.points[i] = self.points[i].lerp(prev, cfg.joint_lerp_factor);
        }
    }

    /// Rebuilds the cumulative arc-length table from the current control
    /// points. Explicit rather than a side effect of [`SpineCurve::advance`]
    /// so the cost and the invalidation point are visible to the caller.
    pub fn update_arc_lengths(&mut self) {
        self.arc_lengths.clear();
        self.arc_lengths.push(0.0);

        let mut previous = self.point_at(0.0);
        let mut sum = 0.0;
        for i in 1..=ARC_LENGTH_DIVISIONS {
            let current = self.point_at(i as f32 / ARC_LENGTH_DIVISIONS as f32);
            sum += current.distance(previous);
            self.arc_lengths.push(sum);
            previous = current;
        }
    }

    /// Total length of the curve per the current arc-length table.
    #[must_use]
    pub fn length(&self) -> f32 {
        self.arc_lengths[self.arc_lengths.len() - 1]
    }

    /// Position at normalized arc length `u` in `[0, 1]`: `u = 0` is the
    /// head control point, `u = 1` the tail. Out-of-range values clamp.
    #[must_use]
    pub fn sample_at(&self, u: f32) -> Vec3 {
        self.point_at(self.u_to_t(u))
    }

    /// Maps a normalized arc length to the raw curve parameter by searching
    /// the cumulative table and interpolating within the found subdivision.
    fn u_to_t(&self, u: f32) -> f32 {
        let u = u.clamp(0.0, 1.0);
        let total = self.length();
        // All control points coincident: distances carry no information,
        // fall back to the raw parameter.
        if total <= f32::EPSILON {
            return u;
        }

        let target = u * total;
        let i = self.arc_lengths.partition_point(|&len| len < target);
        if i == 0 {
            return 0.0;
        }
        if i >= self.arc_lengths.len() {
            return 1.0;
        }

        let before = self.arc_lengths[i - 1];
        let after = self.arc_lengths[i];
        let segment = after - before;
        let fraction = if segment > f32::EPSILON {
            (target - before) / segment
        } else {
            0.0
        };

        ((i - 1) as f32 + fraction) / ARC_LENGTH_DIVISIONS as f32
    }

    /// Evaluates the Catmull-Rom fit at raw parameter `t` in `[0, 1]`
    /// (control-point-index spacing, *not* arc length).
    fn point_at(&self, t: f32) -> Vec3 {
        let segments = (JOINT_COUNT - 1) as f32;
        let p = segments * t.clamp(0.0, 1.0);
        let mut index = p.floor() as usize;
        let mut weight = p - index as f32;

        // Landing exactly on the tail: evaluate the last segment at 1.
        if weight == 0.0 && index == JOINT_COUNT - 1 {
            index = JOINT_COUNT - 2;
            weight = 1.0;
        }

        // Endpoints extrapolate a phantom neighbor by reflection.
        let p0 = if index > 0 {
            self.points[index - 1]
        } else {
            self.points[0] * 2.0 - self.points[1]
        };
        let p1 = self.points[index];
        let p2 = self.points[index + 1];
        let p3 = if index + 2 < JOINT_COUNT {
            self.points[index + 2]
        } else {
            self.points[JOINT_COUNT - 1] * 2.0 - self.points[JOINT_COUNT - 2]
        };

        match self.curve_type {
            CurveType::Chordal | CurveType::Centripetal => {
                let exponent = if self.curve_type == CurveType::Chordal {
                    0.5
                } else {
                    0.25
                };
                let mut dt0 = p0.distance_squared(p1).powf(exponent);
                let mut dt1 = p1.distance_squared(p2).powf(exponent);
                let mut dt2 = p2.distance_squared(p3).powf(exponent);

                // Coincident points would zero a knot interval; reuse the
                // central one so the tangents stay finite.
                if dt1 < MIN_SEGMENT_DT {
                    dt1 = 1.0;
                }
                if dt0 < MIN_SEGMENT_DT {
                    dt0 = dt1;
                }
                if dt2 < MIN_SEGMENT_DT {
                    dt2 = dt1;
                }

                let m1 = ((p1 - p0) / dt0 - (p2 - p0) / (dt0 + dt1) + (p2 - p1) / dt1) * dt1;
                let m2 = ((p2 - p1) / dt1 - (p3 - p1) / (dt1 + dt2) + (p3 - p2) / dt2) * dt1;

                hermite(p1, p2, m1, m2, weight)
            }
            CurveType::Uniform => {
                let m1 = (p2 - p0) * self.tension;
                let m2 = (p3 - p1) * self.tension;
                hermite(p1, p2, m1, m2, weight)
            }
        }
    }
}

/// Cubic Hermite segment through `x0` at 0 and `x1` at 1 with tangents
/// `m0`/`m1`.
fn hermite(x0: Vec3, x1: Vec3, m0: Vec3, m1: Vec3, t: f32) -> Vec3 {
    let t2 = t * t;
    let t3 = t2 * t;

    let c2 = (x1 - x0) * 3.0 - m0 * 2.0 - m1;
    let c3 = (x0 - x1) * 2.0 + m0 + m1;

    x0 + m0 * t + c2 * t2 + c3 * t3
}
