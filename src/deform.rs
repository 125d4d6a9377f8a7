//! Per-vertex displacement of the mesh from the spine curve.

use glam::Vec3;
use log::{debug, warn};

use crate::config::{DepthNormalization, SwimConfig};
use crate::errors::{Result, SwimmerError};
use crate::mesh::DeformableMesh;
use crate::range::Range;
use crate::spine::SpineCurve;

/// Rewrites every mesh vertex each frame from its depth position on the
/// spine.
///
/// Owns an immutable snapshot of the original vertex positions, captured once
/// at initialization, and the depth extent of that snapshot. The live mesh is
/// only ever written from the snapshot, so per-frame mutations are idempotent
/// overwrites and a dropped frame needs no rollback.
#[derive(Debug, Clone)]
pub struct DeformationEngine {
    cached_vertices: Vec<Vec3>,
    depth_extent: Range,
}

impl DeformationEngine {
    /// Snapshots the mesh's vertex positions and measures its depth extent.
    ///
    /// Fails with [`SwimmerError::EmptyGeometry`] if the mesh exposes no
    /// vertices; nothing is partially initialized in that case.
    pub fn new(mesh: &impl DeformableMesh) -> Result<Self> {
        let count = mesh.vertex_count();
        if count == 0 {
            return Err(SwimmerError::EmptyGeometry);
        }

        let mut cached_vertices = Vec::with_capacity(count);
        let mut depth_extent = Range::EMPTY;
        for i in 0..count {
            let vertex = mesh.position(i);
            depth_extent.adjust(vertex.z, vertex.z);
            cached_vertices.push(vertex);
        }

        if depth_extent.span().abs() < f32::EPSILON {
            warn!(
                "Mesh depth extent is degenerate ({:?}); every vertex will sample the same spine point",
                depth_extent
            );
        }
        debug!(
            "Deformation engine initialized: {count} vertices, depth extent {:?}",
            depth_extent
        );

        Ok(Self {
            cached_vertices,
            depth_extent,
        })
    }

    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.cached_vertices.len()
    }

    #[must_use]
    pub fn depth_extent(&self) -> Range {
        self.depth_extent
    }

    /// Writes one frame of displaced positions into `mesh`, then marks the
    /// buffer dirty and recomputes normals.
    ///
    /// `speed` is the follow vector's magnitude; displacement is damped by
    /// `1 - speed` so bend amplitude shrinks while the body is turning hard.
    ///
    /// A vertex count that differs from the initialization snapshot means the
    /// geometry was swapped out from under the engine; the frame is aborted
    /// with [`SwimmerError::VertexCountMismatch`] before anything is written.
    pub fn apply(
        &self,
        mesh: &mut impl DeformableMesh,
        spine: &SpineCurve,
        speed: f32,
        cfg: &SwimConfig,
    ) -> Result<()> {
        let live = mesh.vertex_count();
        if live != self.cached_vertices.len() {
            return Err(SwimmerError::VertexCountMismatch {
                cached: self.cached_vertices.len(),
                live,
            });
        }

        let damping = 1.0 - speed;
        for (i, &vertex) in self.cached_vertices.iter().enumerate() {
            // The original, unchanged depth decides where along the spine
            // this vertex rides. Inverted: deep vertices map to the head.
            let coeff = 1.0
                - match cfg.depth_normalization {
                    DepthNormalization::Legacy => self.depth_extent.percent(vertex.z),
                    DepthNormalization::Linear => self.depth_extent.percent_linear(vertex.z),
                };
            let joint = spine.sample_at(coeff.clamp(0.0, 1.0));

            // joint.z holds the chain index, a per-segment amplitude
            // multiplier baked in by the spine update.
            let jx = joint.x * joint.z * cfg.body_curve_intensity.x;
            let jy = joint.y * joint.z * cfg.body_curve_intensity.y;

            mesh.set_position(
                i,
                Vec3::new(
                    vertex.x + jx * cfg.body_curve_tension.x * damping,
                    vertex.y + jy * cfg.body_curve_tension.y * damping,
                    vertex.z,
                ),
            );
        }

        mesh.mark_positions_dirty();
        mesh.recompute_normals();
        Ok(())
    }
}
