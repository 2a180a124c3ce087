//! Vertex union-find
//!
//! Tracks which original vertices have been merged into which surviving
//! vertex during edge collapse. The structure is always a forest: a
//! union only ever redirects the absorbed endpoint toward the survivor,
//! so `find` terminates in bounded steps.

/// Disjoint-set over original vertex ids with path-compressed `find`.
#[derive(Debug, Clone)]
pub struct VertexUnionFind {
    parent: Vec<usize>,
}

impl VertexUnionFind {
    /// Create `n` singleton sets, one per original vertex.
    pub fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
        }
    }

    /// Number of tracked vertex ids.
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Current live representative of `x`, compressing every visited
    /// node's parent to the root on the way.
    ///
    /// Iterative two-pass form: walk to the root, then re-walk the
    /// chain pointing each node at the root. Idempotent on its result.
    pub fn find(&mut self, x: usize) -> usize {
        let mut root = x;
        while self.parent[root] != root {
            root = self.parent[root];
        }
        let mut cur = x;
        while self.parent[cur] != root {
            let next = self.parent[cur];
            self.parent[cur] = root;
            cur = next;
        }
        root
    }

    /// Merge `absorbed`'s set into `survivor`'s. The survivor's
    /// identity never changes.
    pub fn union(&mut self, survivor: usize, absorbed: usize) {
        let root = self.find(survivor);
        let absorbed_root = self.find(absorbed);
        if absorbed_root != root {
            self.parent[absorbed_root] = root;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_singletons_are_their_own_representative() {
        let mut uf = VertexUnionFind::new(4);
        for i in 0..4 {
            assert_eq!(uf.find(i), i);
        }
    }

    #[test]
    fn test_union_keeps_survivor_identity() {
        let mut uf = VertexUnionFind::new(4);
        uf.union(0, 1);
        uf.union(0, 2);
        assert_eq!(uf.find(1), 0);
        assert_eq!(uf.find(2), 0);
        assert_eq!(uf.find(0), 0);
        assert_eq!(uf.find(3), 3);
    }

    #[test]
    fn test_find_is_idempotent() {
        let mut uf = VertexUnionFind::new(8);
        uf.union(0, 1);
        uf.union(1, 2);
        uf.union(2, 3);
        for i in 0..8 {
            let r = uf.find(i);
            assert_eq!(uf.find(r), r);
        }
    }

    #[test]
    fn test_long_chain_compresses() {
        let n = 10_000;
        let mut uf = VertexUnionFind::new(n);
        // Chain n-1 -> n-2 -> ... -> 0
        for i in (1..n).rev() {
            uf.union(i - 1, i);
        }
        assert_eq!(uf.find(n - 1), 0);
        // After compression every node points straight at the root
        for i in 0..n {
            assert_eq!(uf.find(i), 0);
        }
    }

    #[test]
    fn test_union_already_merged_is_noop() {
        let mut uf = VertexUnionFind::new(3);
        uf.union(0, 1);
        uf.union(0, 1);
        uf.union(1, 0);
        assert_eq!(uf.find(0), 0);
        assert_eq!(uf.find(1), 0);
    }
}
