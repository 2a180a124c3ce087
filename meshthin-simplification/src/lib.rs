//! Mesh simplification and decimation algorithms
//!
//! This crate reduces a triangle mesh's vertex count to a target
//! fraction while minimizing geometric distortion, using quadric error
//! metrics (QEM) and greedy edge collapse:
//! - per-vertex error-quadric accumulation
//! - edge-cost evaluation with a linear-solve/midpoint fallback
//! - a globally sorted, one-shot greedy collapse schedule
//! - a path-compressed union-find tracking vertex merges
//! - final mesh compaction, remap, and normal/bounds recomputation

pub mod quadric;
pub mod edge;
pub mod union_find;
pub mod rebuild;
pub mod quadric_error;

pub use quadric::*;
pub use edge::*;
pub use union_find::*;
pub use rebuild::*;
pub use quadric_error::*;

use meshthin_core::{Result, TriangleMesh};

/// Simplify a mesh by reducing the number of vertices
pub trait MeshSimplifier {
    /// Simplify the mesh, keeping roughly `keep_ratio` of its vertices.
    ///
    /// `keep_ratio` is the fraction of original vertices to retain, in
    /// `(0, 1]`. Values above 1 are a no-op; NaN or negative values are
    /// rejected with [`meshthin_core::Error::InvalidData`].
    fn simplify(&self, mesh: &TriangleMesh, keep_ratio: f32) -> Result<TriangleMesh>;
}
