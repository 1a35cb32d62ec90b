// SPDX-License-Identifier: MIT OR Apache-2.0
//! Disjoint-set forest with path compression and union by rank.

use std::collections::HashMap;

use crate::Vertex;

/// Union-Find data structure for Kruskal's algorithm.
pub(crate) struct UnionFind<V> {
    parent: HashMap<V, V>,
    rank: HashMap<V, usize>,
}

impl<V: Vertex> UnionFind<V> {
    pub(crate) fn new(vertices: &[V]) -> Self {
        let parent = vertices.iter().map(|v| (v.clone(), v.clone())).collect();
        let rank = vertices.iter().map(|v| (v.clone(), 0)).collect();
        Self { parent, rank }
    }

    /// Root of `x`'s set. Vertices never seen before are their own root.
    pub(crate) fn find(&mut self, x: &V) -> V {
        let mut root = x.clone();
        while let Some(p) = self.parent.get(&root) {
            if *p == root {
                break;
            }
            root = p.clone();
        }

        // Second pass re-points every node on the walk straight at the root.
        let mut node = x.clone();
        while node != root {
            let Some(next) = self.parent.insert(node, root.clone()) else {
                break;
            };
            node = next;
        }

        root
    }

    /// Merge the sets rooted at `a` and `b`, returning the new root.
    ///
    /// Both arguments must be distinct roots. On equal rank `a` wins and its rank
    /// grows by one.
    pub(crate) fn union(&mut self, a: V, b: V) -> V {
        debug_assert!(a != b, "union of a root with itself");

        let rank_a = self.rank.get(&a).copied().unwrap_or(0);
        let rank_b = self.rank.get(&b).copied().unwrap_or(0);

        match rank_a.cmp(&rank_b) {
            std::cmp::Ordering::Less => {
                self.parent.insert(a, b.clone());
                b
            },
            std::cmp::Ordering::Greater => {
                self.parent.insert(b, a.clone());
                a
            },
            std::cmp::Ordering::Equal => {
                self.parent.insert(b, a.clone());
                self.rank.insert(a.clone(), rank_a + 1);
                a
            },
        }
    }

    #[cfg(test)]
    fn connected(&mut self, a: &V, b: &V) -> bool {
        self.find(a) == self.find(b)
    }

    /// Number of disjoint sets among the tracked vertices.
    pub(crate) fn component_count(&self) -> usize {
        self.parent.iter().filter(|(v, p)| v == p).count()
    }

    #[cfg(test)]
    fn rank_of(&self, v: &V) -> usize {
        self.rank.get(v).copied().unwrap_or(0)
    }
}
