/*!
Kruskal's minimum spanning forest.

All edges are treated as undirected connections between their endpoints. They are scanned in
ascending weight order (stable, so equal weights keep their encounter order: vertices in
registration order, edges in insertion order) and accepted iff their endpoints lie in
different trees. Trees are tracked with a union-find using path halving and union by rank.
*/

use tracing::{debug, instrument, trace};

use super::*;

/// Disjoint sets over `0..n`.
#[derive(Debug, Clone, Default)]
pub struct UnionFind {
    parent: Vec<VertexId>,
    rank: Vec<u8>,
}

impl UnionFind {
    /// Creates `n` singleton sets
    pub fn new(n: NumVertices) -> Self {
        Self {
            parent: (0..n).collect(),
            rank: vec![0; n as usize],
        }
    }

    /// Returns the representative of the set containing `x`
    pub fn find(&mut self, mut x: VertexId) -> VertexId {
        while self.parent[x as usize] != x {
            let grandparent = self.parent[self.parent[x as usize] as usize];
            self.parent[x as usize] = grandparent;
            x = grandparent;
        }
        x
    }

    /// Merges the sets of `x` and `y`; returns *false* if they already were the same set
    pub fn union(&mut self, x: VertexId, y: VertexId) -> bool {
        let (rx, ry) = (self.find(x), self.find(y));
        if rx == ry {
            return false;
        }

        let (rank_x, rank_y) = (self.rank[rx as usize], self.rank[ry as usize]);
        match rank_x.cmp(&rank_y) {
            std::cmp::Ordering::Less => self.parent[rx as usize] = ry,
            std::cmp::Ordering::Greater => self.parent[ry as usize] = rx,
            std::cmp::Ordering::Equal => {
                self.parent[ry as usize] = rx;
                self.rank[rx as usize] += 1;
            }
        }
        true
    }

    /// Returns *true* if `x` and `y` are in the same set
    pub fn same_set(&mut self, x: VertexId, y: VertexId) -> bool {
        self.find(x) == self.find(y)
    }
}

/// A reusable Kruskal engine.
///
/// # Examples
/// ```
/// use wgraphs::{prelude::*, algo::*};
///
/// let mut graph = Graph::new();
/// graph.add_vertices(["A", "B", "C"]).unwrap();
/// graph.add_edge("A", "B", (1, 1)).unwrap();
/// graph.add_edge("B", "C", (2, 2)).unwrap();
/// graph.add_edge("A", "C", (5, 5)).unwrap();
///
/// let forest = KruskalMst::new().run(&graph);
/// assert_eq!(forest.total_weight(), 3);
/// assert_eq!(forest.tree_count(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct KruskalMst {
    union_find: UnionFind,
}

impl KruskalMst {
    pub fn new() -> Self {
        Self::default()
    }

    /// Computes a minimum spanning forest. Never fails; an edgeless graph yields an empty
    /// forest. Self-loops are never accepted.
    #[instrument(level = "debug", skip_all)]
    pub fn run(&mut self, graph: &Graph) -> SpanningForest {
        let mut candidates: Vec<WeightedEdge> = graph.edges().map(Edge::summary).collect();
        candidates.sort_by_key(WeightedEdge::weight);

        self.union_find = UnionFind::new(graph.number_of_vertices());
        let mut accepted = Vec::new();

        for e in candidates {
            if self.union_find.union(e.source(), e.destination()) {
                accepted.push(e);
            } else {
                trace!(edge = %e, "discarded, closes a cycle");
            }
        }

        let forest =
            SpanningForest::from_components(accepted, |e| self.union_find.find(e.source()));
        debug!(
            edges = forest.len(),
            trees = forest.tree_count(),
            weight = forest.total_weight(),
            "kruskal finished"
        );
        forest
    }
}
