//! Edge-cost evaluation
//!
//! Derives the set of unique undirected edges from the triangle buffer
//! and computes, for each, the optimal contraction point and its scalar
//! QEM cost. Each edge is evaluated exactly once; costs are never
//! recomputed after later merges.

use crate::quadric::Quadric;
use meshthin_core::Point3f;
use std::collections::HashSet;

/// A collapse candidate over a canonical `(min, max)` vertex pair.
///
/// Immutable once constructed. An edge whose endpoints later resolve to
/// the same live vertex becomes a stale no-op in the collapse schedule.
#[derive(Debug, Clone, Copy)]
pub struct CandidateEdge {
    /// Smaller endpoint index
    pub v1: usize,
    /// Larger endpoint index
    pub v2: usize,
    /// Contraction target minimizing the combined quadric (or midpoint)
    pub optimal: Point3f,
    /// Combined quadric evaluated at `optimal`
    pub cost: f64,
}

impl CandidateEdge {
    fn evaluate(v1: usize, v2: usize, quadrics: &[Quadric], vertices: &[Point3f]) -> Self {
        let q = quadrics[v1] + quadrics[v2];
        let optimal = q.optimal_position().unwrap_or_else(|| {
            Point3f::from((vertices[v1].coords + vertices[v2].coords) * 0.5)
        });
        let cost = q.error(&optimal);
        Self { v1, v2, optimal, cost }
    }
}

/// Scan every triangle's three edges, canonicalize each to its
/// `(min, max)` pair, and evaluate each unique edge exactly once.
///
/// The returned list is in first-seen scan order, so identical inputs
/// always produce an identical list (duplicates across shared triangles
/// collapse to the first occurrence).
pub fn collect_candidate_edges(
    vertices: &[Point3f],
    faces: &[[usize; 3]],
    quadrics: &[Quadric],
) -> Vec<CandidateEdge> {
    let mut seen: HashSet<(usize, usize)> = HashSet::with_capacity(faces.len() * 3);
    let mut edges = Vec::new();
    for face in faces {
        for j in 0..3 {
            let a = face[j];
            let b = face[(j + 1) % 3];
            let key = (a.min(b), a.max(b));
            if seen.insert(key) {
                edges.push(CandidateEdge::evaluate(key.0, key.1, quadrics, vertices));
            }
        }
    }
    edges
}
