//! Quadric error decimation
//!
//! Greedy edge-collapse simplifier: accumulate per-vertex quadrics,
//! evaluate every unique edge once, sort all candidates ascending by
//! cost, then contract edges in that fixed order through a union-find
//! until the target vertex count is reached.
//!
//! Costs are deliberately not recomputed after a merge: an edge whose
//! endpoints were already merged by an earlier contraction is detected
//! as stale and skipped. This one-shot schedule trades some quality for
//! a fully reproducible, single-sort pipeline.

use crate::edge::collect_candidate_edges;
use crate::quadric::accumulate_quadrics;
use crate::rebuild::rebuild_mesh;
use crate::union_find::VertexUnionFind;
use crate::MeshSimplifier;
use meshthin_core::{Aabb, Error, Result, TriangleMesh};

/// Counters and output summary for one decimation call.
///
/// Returned alongside the mesh so callers own their own reporting; the
/// algorithm keeps no global state between calls.
#[derive(Debug, Clone, PartialEq)]
pub struct SimplificationReport {
    /// Vertex count of the input mesh
    pub input_vertex_count: usize,
    /// `max(1, round(input * keep_ratio))`
    pub target_vertex_count: usize,
    /// Vertex count of the compacted output mesh
    pub output_vertex_count: usize,
    /// Edge contractions actually applied
    pub collapses_applied: usize,
    /// Edges skipped because both endpoints already shared a representative
    pub stale_edges_skipped: usize,
    /// Bounding box of the output mesh, `None` when the output is empty
    pub bounds: Option<Aabb>,
}

/// Quadric error decimation simplifier
#[derive(Debug, Clone, Default)]
pub struct QuadricErrorSimplifier {
    /// Drop output triangles with repeated corner indices after the
    /// remap. Off by default: collapsed-to-a-point triangles are kept
    /// in the output, matching the classic one-pass formulation.
    pub strip_degenerate_faces: bool,
}

impl QuadricErrorSimplifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Simplify and return the per-call counters along with the mesh.
    ///
    /// `keep_ratio` is the fraction of vertices to retain. Ratios above
    /// 1 yield a target at or above the input count and therefore a
    /// topologically identical output; ratios at or near 0 clamp the
    /// target to a single vertex. NaN, infinite, or negative ratios are
    /// rejected, as are faces indexing outside the vertex buffer.
    pub fn simplify_with_report(
        &self,
        mesh: &TriangleMesh,
        keep_ratio: f32,
    ) -> Result<(TriangleMesh, SimplificationReport)> {
        if !keep_ratio.is_finite() || keep_ratio < 0.0 {
            return Err(Error::InvalidData(format!(
                "keep ratio must be a non-negative finite number, got {keep_ratio}"
            )));
        }

        let n = mesh.vertex_count();
        if n == 0 {
            return Ok((
                TriangleMesh::new(),
                SimplificationReport {
                    input_vertex_count: 0,
                    target_vertex_count: 0,
                    output_vertex_count: 0,
                    collapses_applied: 0,
                    stale_edges_skipped: 0,
                    bounds: None,
                },
            ));
        }

        for face in &mesh.faces {
            if face.iter().any(|&i| i >= n) {
                return Err(Error::InvalidData(format!(
                    "face {face:?} indexes outside vertex buffer of length {n}"
                )));
            }
        }

        let target = ((n as f32 * keep_ratio).round() as usize).max(1);

        let mut positions = mesh.vertices.clone();
        let mut quadrics = accumulate_quadrics(&positions, &mesh.faces);
        let mut edges = collect_candidate_edges(&positions, &mesh.faces, &quadrics);
        // Stable sort: ties keep first-seen edge order for reproducibility
        edges.sort_by(|a, b| a.cost.total_cmp(&b.cost));

        let mut map = VertexUnionFind::new(n);
        let mut live = n;
        let mut collapses_applied = 0;
        let mut stale_edges_skipped = 0;

        for edge in &edges {
            if live <= target {
                break;
            }
            let survivor = map.find(edge.v1);
            let absorbed = map.find(edge.v2);
            if survivor == absorbed {
                // Subsumed by an earlier merge; cost is stale, skip
                stale_edges_skipped += 1;
                continue;
            }
            positions[survivor] = edge.optimal;
            let absorbed_quadric = quadrics[absorbed];
            quadrics[survivor] += absorbed_quadric;
            map.union(survivor, absorbed);
            live -= 1;
            collapses_applied += 1;
        }

        let output = rebuild_mesh(&positions, &mesh.faces, &mut map, self.strip_degenerate_faces);
        let report = SimplificationReport {
            input_vertex_count: n,
            target_vertex_count: target,
            output_vertex_count: output.vertex_count(),
            collapses_applied,
            stale_edges_skipped,
            bounds: output.bounding_box(),
        };
        Ok((output, report))
    }
}

impl MeshSimplifier for QuadricErrorSimplifier {
    fn simplify(&self, mesh: &TriangleMesh, keep_ratio: f32) -> Result<TriangleMesh> {
        self.simplify_with_report(mesh, keep_ratio)
            .map(|(mesh, _)| mesh)
    }
}
