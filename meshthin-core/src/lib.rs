//! Core data structures for meshthin
//!
//! This crate provides the fundamental types shared by the meshthin
//! decimation crates: points, triangle meshes, bounding boxes, and the
//! common error type.

pub mod point;
pub mod mesh;
pub mod error;

pub use point::*;
pub use mesh::*;
pub use error::*;

/// Re-export commonly used types from nalgebra
pub use nalgebra::{Point3, Vector3, Matrix3, Matrix4};

/// Common result type for meshthin operations
pub type Result<T> = std::result::Result<T, Error>;

// Type alias for easier imports
pub type Mesh = TriangleMesh;
