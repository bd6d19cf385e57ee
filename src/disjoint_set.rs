//! Disjoint-set forest over node indices.

/// Union-find with full path compression and no rank balancing.
///
/// Graphs are capped at a few dozen nodes, so the trees never get deep enough
/// for balancing to matter; `find` is iterative regardless.
#[derive(Debug, Clone)]
pub struct DisjointSetForest {
    parent: Vec<usize>,
}

impl DisjointSetForest {
    /// Create a forest of `n` singleton sets.
    pub fn new(n: usize) -> Self {
        DisjointSetForest {
            parent: (0..n).collect(),
        }
    }

    /// Representative of the set containing `x`.
    pub fn find(&mut self, x: usize) -> usize {
        let mut root = x;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        // Second pass: point every node on the path straight at the root
        let mut node = x;
        while self.parent[node] != root {
            let next = self.parent[node];
            self.parent[node] = root;
            node = next;
        }

        root
    }

    /// Merge the sets containing `a` and `b`; the root of `a` is attached
    /// below the root of `b`.
    pub fn union(&mut self, a: usize, b: usize) {
        let root_a = self.find(a);
        let root_b = self.find(b);
        if root_a != root_b {
            self.parent[root_a] = root_b;
        }
    }

    /// Whether `a` and `b` are in the same set.
    pub fn connected(&mut self, a: usize, b: usize) -> bool {
        self.find(a) == self.find(b)
    }

    /// Number of elements in the forest.
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }
}
