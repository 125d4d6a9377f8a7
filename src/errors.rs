//! Error Types
//!
//! The animation core runs inside a per-frame update loop, so there are no
//! recoverable mid-frame error paths: every failure aborts that frame's
//! update and is surfaced to the frame driver through [`Result`].

use thiserror::Error;

/// The main error type for the swimmer engine.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SwimmerError {
    // ========================================================================
    // Initialization Errors
    // ========================================================================
    /// The mesh handed to the engine has no readable vertex positions.
    ///
    /// Fatal to the object: no partial initialization is attempted.
    #[error("Mesh has no readable vertex positions")]
    EmptyGeometry,

    // ========================================================================
    // Frame-Update Precondition Violations
    // ========================================================================
    /// The live mesh's vertex count no longer matches the snapshot taken at
    /// initialization. This means the geometry was swapped without
    /// re-initialization; the frame is aborted before anything is written.
    #[error("Vertex count mismatch: cached {cached}, live mesh has {live}")]
    VertexCountMismatch {
        /// Vertex count captured at initialization
        cached: usize,
        /// Vertex count reported by the live mesh
        live: usize,
    },
}

/// Alias for `Result<T, SwimmerError>`.
pub type Result<T> = std::result::Result<T, SwimmerError>;
