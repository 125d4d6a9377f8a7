//! Follow-target smoothing and body-orientation derivation.

use glam::{EulerRot, Quat, Vec3};

use crate::config::SwimConfig;

/// Where the rendering host should place the body this frame.
///
/// The core never touches a scene graph; it hands the derived transform out
/// as plain data and the host applies it to whatever node owns the mesh.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BodyPose {
    /// Smoothed body position in world space.
    pub position: Vec3,
    /// XYZ Euler angles (pitch, yaw, roll) in radians.
    pub rotation: Vec3,
}

impl BodyPose {
    /// The rotation as a quaternion, for hosts that don't take Euler angles.
    #[must_use]
    pub fn rotation_quat(&self) -> Quat {
        Quat::from_euler(
            EulerRot::XYZ,
            self.rotation.x,
            self.rotation.y,
            self.rotation.z,
        )
    }
}

/// Tracks a moving target with exponential smoothing.
///
/// Keeps two lagged quantities: the body position, lerped toward the offset
/// target each frame, and the follow vector — a smoothed body-to-target
/// vector that is never reset, so it accumulates an exponential lag with the
/// configured factor. The follow vector drives both the spine's head joint
/// and the body tilt, which is what keeps bend and tilt correlated.
#[derive(Debug, Clone)]
pub struct FollowController {
    position: Vec3,
    target: Vec3,
    follow: Vec3,
    angle: f32,
    speed: f32,
}

impl FollowController {
    /// Starts with the body already sitting on the offset target.
    #[must_use]
    pub fn new(initial_target: Vec3, cfg: &SwimConfig) -> Self {
        let target = initial_target + cfg.follow_offset;
        Self {
            position: target,
            target,
            follow: Vec3::ZERO,
            angle: 0.0,
            speed: 0.0,
        }
    }

    /// Advances the smoothed state one frame toward `external_target` (the
    /// already-projected 3D input point).
    pub fn update(&mut self, external_target: Vec3, cfg: &SwimConfig) {
        self.target = external_target + cfg.follow_offset;
        self.position = self.position.lerp(self.target, cfg.position_lerp_factor);

        let to_target = self.target - self.position;
        self.follow = self.follow.lerp(to_target, cfg.follow_lerp_factor);

        self.angle = self.follow.y.atan2(self.follow.x);
        self.speed = self.follow.length();
    }

    /// Body transform derived from the current smoothed state.
    #[must_use]
    pub fn pose(&self, cfg: &SwimConfig) -> BodyPose {
        BodyPose {
            position: self.position,
            rotation: Vec3::new(
                -self.angle.sin() * self.speed * cfg.pitch_factor,
                self.angle.cos() * self.speed * cfg.yaw_factor,
                -self.angle.cos() * self.speed * cfg.roll_factor,
            ),
        }
    }

    /// The smoothed follow vector that drives the spine head.
    #[must_use]
    pub fn follow_vector(&self) -> Vec3 {
        self.follow
    }

    /// Magnitude of the follow vector; the deformation loop damps bend
    /// amplitude by `1 - speed` so sharp turns don't bend and tilt at once.
    #[must_use]
    pub fn speed(&self) -> f32 {
        self.speed
    }

    /// Heading of the follow vector in the XY plane, in radians.
    #[must_use]
    pub fn angle(&self) -> f32 {
        self.angle
    }

    /// Current smoothed body position.
    #[must_use]
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// The offset target the body is converging toward.
    #[must_use]
    pub fn target(&self) -> Vec3 {
        self.target
    }
}
