//! Mesh data structures and functionality

use crate::point::*;
use serde::{Deserialize, Serialize};

/// A triangle mesh with vertices and faces
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TriangleMesh {
    pub vertices: Vec<Point3f>,
    pub faces: Vec<[usize; 3]>,
    pub normals: Option<Vec<Vector3f>>,
}

/// An axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub min: Point3f,
    pub max: Point3f,
}

impl Aabb {
    /// Smallest box enclosing all given points; `None` for an empty slice
    pub fn from_points(points: &[Point3f]) -> Option<Self> {
        let first = points.first()?;
        let mut min = *first;
        let mut max = *first;
        for p in &points[1..] {
            for i in 0..3 {
                if p[i] < min[i] {
                    min[i] = p[i];
                }
                if p[i] > max[i] {
                    max[i] = p[i];
                }
            }
        }
        Some(Self { min, max })
    }

    /// Center of the box
    pub fn center(&self) -> Point3f {
        Point3f::from((self.min.coords + self.max.coords) * 0.5)
    }

    /// Side lengths of the box
    pub fn extents(&self) -> Vector3f {
        self.max - self.min
    }
}

impl TriangleMesh {
    /// Create a new empty mesh
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            faces: Vec::new(),
            normals: None,
        }
    }

    /// Create a mesh from vertices and faces
    pub fn from_vertices_and_faces(vertices: Vec<Point3f>, faces: Vec<[usize; 3]>) -> Self {
        Self {
            vertices,
            faces,
            normals: None,
        }
    }

    /// Get the number of vertices
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Get the number of faces
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Check if the mesh is empty
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty() || self.faces.is_empty()
    }

    /// Add a vertex to the mesh
    pub fn add_vertex(&mut self, vertex: Point3f) -> usize {
        let index = self.vertices.len();
        self.vertices.push(vertex);
        index
    }

    /// Add a face to the mesh
    pub fn add_face(&mut self, face: [usize; 3]) {
        self.faces.push(face);
    }

    /// Calculate face normals
    ///
    /// Zero-area faces produce non-finite normals; callers that cannot
    /// tolerate NaN should prefer [`Self::calculate_vertex_normals`].
    pub fn calculate_face_normals(&self) -> Vec<Vector3f> {
        self.faces
            .iter()
            .map(|face| {
                let v0 = self.vertices[face[0]];
                let v1 = self.vertices[face[1]];
                let v2 = self.vertices[face[2]];

                let edge1 = v1 - v0;
                let edge2 = v2 - v0;

                edge1.cross(&edge2).normalize()
            })
            .collect()
    }

    /// Calculate per-vertex normals as the area-weighted average of
    /// incident face normals.
    ///
    /// The raw cross product of each face is accumulated without
    /// per-face normalization, so zero-area faces contribute nothing
    /// and the result is always finite. Vertices with no incident
    /// (non-degenerate) face get a zero normal.
    pub fn calculate_vertex_normals(&self) -> Vec<Vector3f> {
        let mut normals = vec![Vector3f::zeros(); self.vertices.len()];
        for face in &self.faces {
            let v0 = self.vertices[face[0]];
            let v1 = self.vertices[face[1]];
            let v2 = self.vertices[face[2]];
            let cross = (v1 - v0).cross(&(v2 - v0));
            normals[face[0]] += cross;
            normals[face[1]] += cross;
            normals[face[2]] += cross;
        }
        for n in &mut normals {
            let len = n.norm();
            if len > 0.0 && len.is_finite() {
                *n /= len;
            } else {
                *n = Vector3f::zeros();
            }
        }
        normals
    }

    /// Axis-aligned bounding box over the vertex buffer; `None` when empty
    pub fn bounding_box(&self) -> Option<Aabb> {
        Aabb::from_points(&self.vertices)
    }

    /// Set vertex normals
    pub fn set_normals(&mut self, normals: Vec<Vector3f>) {
        if normals.len() == self.vertices.len() {
            self.normals = Some(normals);
        }
    }

    /// Clear the mesh
    pub fn clear(&mut self) {
        self.vertices.clear();
        self.faces.clear();
        self.normals = None;
    }
}

impl Default for TriangleMesh {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn unit_triangle() -> TriangleMesh {
        TriangleMesh::from_vertices_and_faces(
            vec![
                Point3f::new(0.0, 0.0, 0.0),
                Point3f::new(1.0, 0.0, 0.0),
                Point3f::new(0.0, 1.0, 0.0),
            ],
            vec![[0, 1, 2]],
        )
    }

    #[test]
    fn test_vertex_normals_planar() {
        let mesh = unit_triangle();
        let normals = mesh.calculate_vertex_normals();
        assert_eq!(normals.len(), 3);
        for n in &normals {
            assert_relative_eq!(n.z, 1.0, epsilon = 1e-6);
        }
    }

    #[test]
    fn test_vertex_normals_degenerate_face_is_finite() {
        // Three collinear vertices: zero-area face
        let mesh = TriangleMesh::from_vertices_and_faces(
            vec![
                Point3f::new(0.0, 0.0, 0.0),
                Point3f::new(1.0, 0.0, 0.0),
                Point3f::new(2.0, 0.0, 0.0),
            ],
            vec![[0, 1, 2]],
        );
        for n in mesh.calculate_vertex_normals() {
            assert!(n.iter().all(|c| c.is_finite()));
            assert_relative_eq!(n.norm(), 0.0);
        }
    }

    #[test]
    fn test_bounding_box() {
        let mesh = unit_triangle();
        let bbox = mesh.bounding_box().unwrap();
        assert_eq!(bbox.min, Point3f::new(0.0, 0.0, 0.0));
        assert_eq!(bbox.max, Point3f::new(1.0, 1.0, 0.0));
        assert_relative_eq!(bbox.center().x, 0.5);
        assert_relative_eq!(bbox.extents().y, 1.0);
    }

    #[test]
    fn test_bounding_box_empty() {
        assert!(TriangleMesh::new().bounding_box().is_none());
    }
}
