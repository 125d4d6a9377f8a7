//! The animated creature: wires the follow controller, spine and deformation
//! engine into one per-frame update.

use glam::Vec3;
use log::trace;

use crate::config::SwimConfig;
use crate::deform::DeformationEngine;
use crate::errors::Result;
use crate::follow::{BodyPose, FollowController};
use crate::mesh::DeformableMesh;
use crate::spine::SpineCurve;

/// A mesh that swims toward a moving follow target.
///
/// Owns the mesh and all animation state. The host supplies two things per
/// frame: a frame index and the follow target already projected into 3D (the
/// core never reads raw 2D input). Everything else — asset loading, scene and
/// camera setup, applying [`BodyPose`] to a scene node — stays on the host's
/// side of the seam.
#[derive(Debug)]
pub struct Creature<M: DeformableMesh> {
    mesh: M,
    config: SwimConfig,
    follow: FollowController,
    spine: SpineCurve,
    deformer: DeformationEngine,
    pose: BodyPose,
}

impl<M: DeformableMesh> Creature<M> {
    /// Takes ownership of the mesh, snapshots its geometry and seeds the
    /// follow state at `initial_target`.
    pub fn init(mesh: M, initial_target: Vec3, config: SwimConfig) -> Result<Self> {
        let deformer = DeformationEngine::new(&mesh)?;
        let follow = FollowController::new(initial_target, &config);
        let spine = SpineCurve::new(config.curve_type, config.curve_tension);
        let pose = follow.pose(&config);

        Ok(Self {
            mesh,
            config,
            follow,
            spine,
            deformer,
            pose,
        })
    }

    /// Runs one animation tick: smooth the follow state, derive the body
    /// pose, drag the spine after the follow vector, re-fit its arc-length
    /// table, and rewrite every vertex.
    ///
    /// Invoked once per display refresh by the host's frame driver;
    /// `frame_index` is the driver's tick counter.
    pub fn update(&mut self, frame_index: u64, follow_target: Vec3) -> Result<()> {
        self.follow.update(follow_target, &self.config);
        self.pose = self.follow.pose(&self.config);

        self.spine.advance(self.follow.follow_vector(), &self.config);
        self.spine.update_arc_lengths();

        self.deformer
            .apply(&mut self.mesh, &self.spine, self.follow.speed(), &self.config)?;

        trace!(
            "frame {frame_index}: target {follow_target:?}, speed {:.4}, spine length {:.4}",
            self.follow.speed(),
            self.spine.length()
        );
        Ok(())
    }

    #[must_use]
    pub fn mesh(&self) -> &M {
        &self.mesh
    }

    pub fn mesh_mut(&mut self) -> &mut M {
        &mut self.mesh
    }

    /// The body transform the host should apply to its scene node this frame.
    #[must_use]
    pub fn pose(&self) -> BodyPose {
        self.pose
    }

    #[must_use]
    pub fn spine(&self) -> &SpineCurve {
        &self.spine
    }

    #[must_use]
    pub fn follow(&self) -> &FollowController {
        &self.follow
    }

    #[must_use]
    pub fn deformer(&self) -> &DeformationEngine {
        &self.deformer
    }

    #[must_use]
    pub fn config(&self) -> &SwimConfig {
        &self.config
    }
}
