//! Mesh-provider interface and a CPU-side implementation.
//!
//! The deformation core only needs a narrow capability from whatever owns the
//! geometry: read/write vertex positions, a dirty flag for upload, and a
//! normals recompute. [`DeformableMesh`] is that seam; [`MeshBuffers`] is the
//! bundled plain-buffers implementation for hosts that keep geometry on the
//! CPU (and for tests).

use glam::Vec3;

/// What the deformation engine requires of a mesh.
pub trait DeformableMesh {
    /// Number of vertices in the position buffer. Must stay fixed for the
    /// lifetime of the deformation engine built over this mesh.
    fn vertex_count(&self) -> usize;

    /// Position of vertex `index`.
    fn position(&self, index: usize) -> Vec3;

    /// Overwrites the position of vertex `index`.
    fn set_position(&mut self, index: usize, position: Vec3);

    /// Called once per frame after all positions were rewritten, before
    /// normals are recomputed. Hosts typically schedule a GPU upload here.
    fn mark_positions_dirty(&mut self);

    /// Recomputes surface normals from the current positions. Required every
    /// frame since the deformation changes the geometry.
    fn recompute_normals(&mut self);
}

/// Plain vertex/normal/index buffers.
#[derive(Debug, Clone)]
pub struct MeshBuffers {
    positions: Vec<Vec3>,
    normals: Vec<Vec3>,
    indices: Vec<u32>,
    version: u64,
}

impl MeshBuffers {
    /// Builds a mesh from triangle data. Pass an empty `indices` for
    /// non-indexed geometry, where every consecutive position triple is one
    /// triangle. Normals are computed immediately.
    #[must_use]
    pub fn new(positions: Vec<Vec3>, indices: Vec<u32>) -> Self {
        let normals = vec![Vec3::ZERO; positions.len()];
        let mut mesh = Self {
            positions,
            normals,
            indices,
            version: 0,
        };
        mesh.compute_vertex_normals();
        mesh
    }

    #[must_use]
    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    #[must_use]
    pub fn normals(&self) -> &[Vec3] {
        &self.normals
    }

    #[must_use]
    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    /// Bumped every time the position buffer is marked dirty, so a renderer
    /// can cheaply detect that a re-upload is needed.
    #[must_use]
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Area-weighted vertex normals: each face's (unnormalized) cross
    /// product is accumulated into its corners, then every sum is
    /// normalized. Larger faces therefore weigh more, which is what you
    /// want for shading a low-poly body.
    pub fn compute_vertex_normals(&mut self) {
        let positions = &self.positions;
        let normals = &mut self.normals;

        for normal in normals.iter_mut() {
            *normal = Vec3::ZERO;
        }

        let mut accumulate = |a: usize, b: usize, c: usize| {
            let face = (positions[b] - positions[a]).cross(positions[c] - positions[a]);
            normals[a] += face;
            normals[b] += face;
            normals[c] += face;
        };

        if self.indices.is_empty() {
            for tri in (0..positions.len().saturating_sub(2)).step_by(3) {
                accumulate(tri, tri + 1, tri + 2);
            }
        } else {
            for tri in self.indices.chunks_exact(3) {
                accumulate(tri[0] as usize, tri[1] as usize, tri[2] as usize);
            }
        }

        for normal in &mut self.normals {
            // Degenerate or unused vertices keep a zero normal.
            *normal = normal.normalize_or_zero();
        }
    }
}

impl DeformableMesh for MeshBuffers {
    fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    fn position(&self, index: usize) -> Vec3 {
        self.positions[index]
    }

    fn set_position(&mut self, index: usize, position: Vec3) {
        self.positions[index] = position;
    }

    fn mark_positions_dirty(&mut self) {
        self.version += 1;
    }

    fn recompute_normals(&mut self) {
        self.compute_vertex_normals();
    }
}
