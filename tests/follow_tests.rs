//! Follow Controller Tests
//!
//! Tests for:
//! - Monotonic, overshoot-free convergence toward a stationary target
//! - Fixed follow offset applied to the external target
//! - Exponential lag of the smoothed follow vector
//! - angle/speed derivation and the pitch/yaw/roll closed forms
//! - BodyPose quaternion conversion

use std::f32::consts::FRAC_PI_2;

use glam::{Quat, Vec3};

use swimmer::{BodyPose, FollowController, SwimConfig};

const EPSILON: f32 = 1e-5;

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

/// Config with a zero offset so targets are used as-is.
fn no_offset_config() -> SwimConfig {
    SwimConfig {
        follow_offset: Vec3::ZERO,
        ..SwimConfig::default()
    }
}

// ============================================================================
// Convergence
// ============================================================================

#[test]
fn stationary_target_converges_monotonically() {
    let cfg = no_offset_config();
    let mut follow = FollowController::new(Vec3::ZERO, &cfg);
    let target = Vec3::new(3.0, 4.0, 5.0);

    let mut previous = follow.position().distance(target);
    for frame in 0..200 {
        follow.update(target, &cfg);
        let distance = follow.position().distance(target);
        assert!(
            distance <= previous + EPSILON,
            "distance grew at frame {frame}: {distance} > {previous}"
        );
        previous = distance;
    }

    // Exponential approach: 0.91^200 of the initial distance is negligible.
    assert!(previous < 1e-3);
}

#[test]
fn never_overshoots_target() {
    let cfg = no_offset_config();
    let mut follow = FollowController::new(Vec3::ZERO, &cfg);
    let target = Vec3::new(10.0, 0.0, 0.0);

    for _ in 0..500 {
        follow.update(target, &cfg);
        // The body stays on the near side of the target for any lerp
        // factor in (0, 1).
        assert!(follow.position().x <= target.x + EPSILON);
    }
}

#[test]
fn initial_position_sits_on_offset_target() {
    let cfg = SwimConfig::default();
    let follow = FollowController::new(Vec3::ZERO, &cfg);

    assert_eq!(follow.position(), cfg.follow_offset);
    assert_eq!(follow.target(), cfg.follow_offset);
}

#[test]
fn target_reached_is_a_fixed_point() {
    // Body already on the target and a zero follow vector: nothing moves.
    let cfg = SwimConfig::default();
    let mut follow = FollowController::new(Vec3::ZERO, &cfg);

    follow.update(Vec3::ZERO, &cfg);
    assert_eq!(follow.position(), cfg.follow_offset);
    assert!(approx(follow.speed(), 0.0));
    assert_eq!(follow.follow_vector(), Vec3::ZERO);
}

// ============================================================================
// Offset
// ============================================================================

#[test]
fn follow_offset_shifts_external_target() {
    let cfg = SwimConfig::default();
    let mut follow = FollowController::new(Vec3::ZERO, &cfg);

    follow.update(Vec3::new(1.0, 2.0, 3.0), &cfg);
    assert_eq!(follow.target(), Vec3::new(1.0, 2.0, 3.0) + cfg.follow_offset);
}

// ============================================================================
// Smoothed follow vector
// ============================================================================

#[test]
fn follow_vector_first_frame_closed_form() {
    let cfg = no_offset_config();
    let mut follow = FollowController::new(Vec3::ZERO, &cfg);

    follow.update(Vec3::new(10.0, 0.0, 0.0), &cfg);

    // P = lerp(0, 10, 0.09) = 0.9; to_target = 9.1; S = lerp(0, 9.1, 0.09).
    assert!(approx(follow.position().x, 0.9));
    assert!(approx(follow.follow_vector().x, 0.819));
    assert!(approx(follow.speed(), 0.819));
    assert!(approx(follow.angle(), 0.0));
}

#[test]
fn follow_vector_lags_behind_instantaneous_vector() {
    let cfg = no_offset_config();
    let mut follow = FollowController::new(Vec3::ZERO, &cfg);
    let target = Vec3::new(10.0, 0.0, 0.0);

    follow.update(target, &cfg);
    let instantaneous = follow.target() - follow.position();
    // One smoothing step covers only 9% of the gap.
    assert!(follow.follow_vector().length() < instantaneous.length());
}

#[test]
fn follow_vector_accumulates_across_frames() {
    // The smoothed vector is never reset, so a second frame with the same
    // target keeps growing it toward the (shrinking) instantaneous vector.
    let cfg = no_offset_config();
    let mut follow = FollowController::new(Vec3::ZERO, &cfg);
    let target = Vec3::new(10.0, 0.0, 0.0);

    follow.update(target, &cfg);
    let first = follow.follow_vector().length();
    follow.update(target, &cfg);
    let second = follow.follow_vector().length();
    assert!(second > first);
}

// ============================================================================
// Pose derivation
// ============================================================================

#[test]
fn pose_rotation_closed_form_along_x() {
    let cfg = no_offset_config();
    let mut follow = FollowController::new(Vec3::ZERO, &cfg);
    follow.update(Vec3::new(10.0, 0.0, 0.0), &cfg);

    // angle = 0, speed = 0.819:
    // pitch = -sin(0) * s * 0.85 = 0
    // yaw   =  cos(0) * s * 0.85
    // roll  = -cos(0) * s * 0.7
    let pose = follow.pose(&cfg);
    assert!(approx(pose.rotation.x, 0.0));
    assert!(approx(pose.rotation.y, 0.819 * 0.85));
    assert!(approx(pose.rotation.z, -0.819 * 0.7));
    assert_eq!(pose.position, follow.position());
}

#[test]
fn pose_rotation_closed_form_along_y() {
    let cfg = no_offset_config();
    let mut follow = FollowController::new(Vec3::ZERO, &cfg);
    follow.update(Vec3::new(0.0, 10.0, 0.0), &cfg);

    // angle = pi/2: pitch picks up the full magnitude, yaw/roll vanish.
    let pose = follow.pose(&cfg);
    assert!(approx(follow.angle(), FRAC_PI_2));
    assert!(approx(pose.rotation.x, -0.819 * 0.85));
    assert!(pose.rotation.y.abs() < 1e-5);
    assert!(pose.rotation.z.abs() < 1e-5);
}

#[test]
fn zero_rotation_pose_is_identity_quat() {
    let pose = BodyPose::default();
    let q = pose.rotation_quat();
    assert!(q.angle_between(Quat::IDENTITY) < 1e-6);
}
