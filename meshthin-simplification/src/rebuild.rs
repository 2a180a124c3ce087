//! Output mesh rebuild
//!
//! Compacts surviving vertices, remaps triangle indices into the dense
//! output index space, and recomputes per-vertex normals and bounds.

use crate::union_find::VertexUnionFind;
use meshthin_core::{Point3f, TriangleMesh};

const UNASSIGNED: usize = usize::MAX;

/// Build the compacted output mesh from collapse state.
///
/// Resolved root ids are assigned dense output indices in first-seen
/// order over the original vertex ids, so the output is deterministic.
/// Triangles whose three indices all resolved to the same vertex are
/// kept unless `strip_degenerate` is set; stripping also drops
/// triangles with any two coincident corners.
pub fn rebuild_mesh(
    positions: &[Point3f],
    faces: &[[usize; 3]],
    map: &mut VertexUnionFind,
    strip_degenerate: bool,
) -> TriangleMesh {
    let mut remap = vec![UNASSIGNED; positions.len()];
    let mut new_vertices = Vec::new();
    for i in 0..positions.len() {
        let root = map.find(i);
        if remap[root] == UNASSIGNED {
            remap[root] = new_vertices.len();
            new_vertices.push(positions[root]);
        }
    }

    let mut new_faces = Vec::with_capacity(faces.len());
    for face in faces {
        let f = [
            remap[map.find(face[0])],
            remap[map.find(face[1])],
            remap[map.find(face[2])],
        ];
        if strip_degenerate && (f[0] == f[1] || f[1] == f[2] || f[2] == f[0]) {
            continue;
        }
        new_faces.push(f);
    }

    let mut mesh = TriangleMesh::from_vertices_and_faces(new_vertices, new_faces);
    let normals = mesh.calculate_vertex_normals();
    mesh.set_normals(normals);
    mesh
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_triangles() -> (Vec<Point3f>, Vec<[usize; 3]>) {
        (
            vec![
                Point3f::new(0.0, 0.0, 0.0),
                Point3f::new(1.0, 0.0, 0.0),
                Point3f::new(0.0, 1.0, 0.0),
                Point3f::new(1.0, 1.0, 0.0),
            ],
            vec![[0, 1, 2], [2, 1, 3]],
        )
    }

    #[test]
    fn test_identity_rebuild_preserves_mesh() {
        let (positions, faces) = two_triangles();
        let mut map = VertexUnionFind::new(positions.len());
        let mesh = rebuild_mesh(&positions, &faces, &mut map, false);
        assert_eq!(mesh.vertices, positions);
        assert_eq!(mesh.faces, faces);
        assert!(mesh.normals.is_some());
    }

    #[test]
    fn test_merged_vertex_is_compacted_out() {
        let (positions, faces) = two_triangles();
        let mut map = VertexUnionFind::new(positions.len());
        map.union(1, 3);
        let mesh = rebuild_mesh(&positions, &faces, &mut map, false);
        assert_eq!(mesh.vertex_count(), 3);
        // Both faces survive; the second is now degenerate on 1/3
        assert_eq!(mesh.face_count(), 2);
        for face in &mesh.faces {
            for &i in face {
                assert!(i < mesh.vertex_count());
            }
        }
    }

    #[test]
    fn test_strip_degenerate_drops_collapsed_face() {
        let (positions, faces) = two_triangles();
        let mut map = VertexUnionFind::new(positions.len());
        map.union(1, 3);
        let mesh = rebuild_mesh(&positions, &faces, &mut map, true);
        assert_eq!(mesh.vertex_count(), 3);
        assert_eq!(mesh.face_count(), 1);
    }

    #[test]
    fn test_first_seen_order_is_stable() {
        let (positions, faces) = two_triangles();
        let mut map = VertexUnionFind::new(positions.len());
        map.union(2, 0);
        let mesh = rebuild_mesh(&positions, &faces, &mut map, false);
        // Vertex 0 resolves to root 2, which is first seen at original
        // index 0 and therefore compacted to output index 0
        assert_eq!(mesh.vertices[0], positions[2]);
        assert_eq!(mesh.faces[0][0], 0);
    }
}
