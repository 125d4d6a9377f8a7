//! Tuning parameters for the swim animation.
//!
//! All tunables live in one immutable [`SwimConfig`] value constructed once
//! and passed by reference into the components that need it, so tests can run
//! with deterministic alternate tunings.

use glam::Vec3;

/// How a vertex depth is mapped into the spine curve's parameter space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DepthNormalization {
    /// The historical mapping the swim animation was tuned against.
    ///
    /// This is *not* a standard 0-to-1 normalization: both bounds are shifted
    /// by `|min| + |max|` before dividing, so `min` does not map to 0 nor
    /// `max` to 1. It is monotonic in `v` and directly shapes the visible
    /// bend, which is why it is kept bit-for-bit as the default.
    #[default]
    Legacy,
    /// Standard `(v - min) / (max - min)` normalization.
    Linear,
}

/// Parameterization mode for the spine's Catmull-Rom interpolation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CurveType {
    /// Segment spacing reflects actual chord distances between control
    /// points. The default for the swim spine.
    #[default]
    Chordal,
    /// Square-root-of-chord spacing; avoids cusps on tight turns.
    Centripetal,
    /// Uniform spacing with an explicit tension (see
    /// [`SwimConfig::curve_tension`]).
    Uniform,
}

/// Tunables for the whole follow/spine/deformation pipeline.
///
/// Defaults are the hand-tuned values the swim was authored with.
#[derive(Debug, Clone)]
pub struct SwimConfig {
    /// Fixed offset added to the external follow target every frame.
    pub follow_offset: Vec3,
    /// Per-frame lerp factor pulling the body position toward the target.
    pub position_lerp_factor: f32,
    /// Per-frame lerp factor of the smoothed follow vector (never reset,
    /// so it accumulates an exponential lag across frames).
    pub follow_lerp_factor: f32,
    /// How far the spine head is pulled toward the follow vector each frame.
    pub head_lerp_factor: f32,
    /// Per-frame lerp factor pulling each joint toward its predecessor.
    pub joint_lerp_factor: f32,

    /// Body tilt factors derived from the follow vector's angle and length.
    pub pitch_factor: f32,
    /// See [`SwimConfig::pitch_factor`].
    pub yaw_factor: f32,
    /// See [`SwimConfig::pitch_factor`].
    pub roll_factor: f32,

    /// Per-axis multiplier applied to the sampled joint displacement.
    pub body_curve_intensity: Vec3,
    /// Per-axis damping of the joint displacement written to the vertices.
    pub body_curve_tension: Vec3,

    /// Parameterization of the spine curve.
    pub curve_type: CurveType,
    /// Tension used by [`CurveType::Uniform`]; the distance-based modes
    /// derive their tangents from chord lengths and ignore it.
    pub curve_tension: f32,

    /// Depth-to-curve-parameter mapping (see [`DepthNormalization`]).
    pub depth_normalization: DepthNormalization,
}

impl Default for SwimConfig {
    fn default() -> Self {
        Self {
            follow_offset: Vec3::new(0.0, 0.1, 8.0),
            position_lerp_factor: 0.09,
            follow_lerp_factor: 0.09,
            head_lerp_factor: 0.9,
            joint_lerp_factor: 0.17,

            pitch_factor: 0.85,
            yaw_factor: 0.85,
            roll_factor: 0.7,

            body_curve_intensity: Vec3::new(6.0, 6.0, 0.0),
            body_curve_tension: Vec3::new(0.6, 0.7, 0.0),

            curve_type: CurveType::Chordal,
            curve_tension: 0.9,

            depth_normalization: DepthNormalization::Legacy,
        }
    }
}
