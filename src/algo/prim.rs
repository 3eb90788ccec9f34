/*!
Prim's minimum spanning tree, grown from a start vertex along outgoing edges.

Candidate edges live in a binary heap keyed `(weight, encounter sequence)`, so equal weights
are taken in the order they were pushed. A candidate whose destination got visited after it
was pushed is stale and dropped when popped. Only vertices reachable from the start are
spanned; on a graph whose edges all come in equally weighted pairs this is the minimum
spanning tree of the start's component.
*/

use std::{cmp::Reverse, collections::BinaryHeap};

use tracing::{debug, instrument, trace};

use super::*;

/// A reusable Prim engine owning its candidate heap.
///
/// # Examples
/// ```
/// use wgraphs::{prelude::*, algo::*};
///
/// let mut graph = Graph::new();
/// graph.add_vertices(["A", "B", "C"]).unwrap();
/// graph.add_edge("A", "B", (4, 4)).unwrap();
/// graph.add_edge("A", "C", (1, 1)).unwrap();
/// graph.add_edge("C", "B", (2, 2)).unwrap();
///
/// let forest = PrimMst::new().run(&graph, "A").unwrap();
/// assert_eq!(forest.total_weight(), 3);
/// assert!(forest.contains(2, 1));
/// ```
#[derive(Debug, Clone, Default)]
pub struct PrimMst {
    heap: BinaryHeap<Reverse<(Weight, u64, WeightedEdge)>>,
    sequence: u64,
}

impl PrimMst {
    pub fn new() -> Self {
        Self::default()
    }

    /// Grows a single tree from `start`. The result holds at most one tree; a start without
    /// outgoing edges yields an empty forest.
    ///
    /// # Errors
    /// Returns [`GraphError::UnknownVertex`] (or [`GraphError::InvalidLabel`]) if `start`
    /// does not name a vertex.
    #[instrument(level = "debug", skip(self, graph))]
    pub fn run(&mut self, graph: &Graph, start: &str) -> Result<SpanningForest> {
        let start = graph.resolve(start)?;
        self.heap.clear();
        self.sequence = 0;

        let n = graph.number_of_vertices();
        let mut visited = VertexBitSet::new(n);
        visited.set_bit(start);
        self.push_candidates(graph, start, &visited);

        let mut accepted = Vec::new();
        while visited.cardinality() < n {
            let Some(Reverse((_, _, edge))) = self.heap.pop() else {
                break;
            };

            if visited.set_bit(edge.destination()) {
                trace!(%edge, "stale candidate");
                continue;
            }

            accepted.push(edge);
            self.push_candidates(graph, edge.destination(), &visited);
        }

        debug!(
            edges = accepted.len(),
            spanned = visited.cardinality(),
            "prim finished"
        );
        Ok(SpanningForest::single_tree(accepted))
    }

    fn push_candidates(&mut self, graph: &Graph, u: VertexId, visited: &VertexBitSet) {
        for edge in graph.vertex_at(u).edges() {
            if !visited.get_bit(edge.destination()) {
                self.heap
                    .push(Reverse((edge.weight(), self.sequence, edge.summary())));
                self.sequence += 1;
            }
        }
    }
}
