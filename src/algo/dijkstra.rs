/*!
Single-source shortest paths for positive edge weights.

The frontier is a binary heap of `(distance, vertex)` entries with lazy deletion: a vertex is
settled the first time it is popped and every later entry for it is skipped. Ordering the heap
by `(distance, VertexId)` settles, among all unsettled vertices of minimal distance, the one
registered first.

By default an edge relaxes its destination also when the new path is exactly as long as the
known one ([`Relaxation::OverwriteOnTie`]); the predecessor then points to the vertex settled
last among the equally good ones. [`Relaxation::KeepFirst`] switches to the strict comparison.
*/

use std::{cmp::Reverse, collections::BinaryHeap};

use tracing::{debug, instrument, trace};

use super::*;

/// When an edge `u -> v` with weight `w` replaces the tentative distance of `v`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum Relaxation {
    /// Relax if `dist(v) >= dist(u) + w`
    #[default]
    OverwriteOnTie,
    /// Relax if `dist(v) > dist(u) + w`
    KeepFirst,
}

impl Relaxation {
    fn improves(self, current: Distance, candidate: Distance) -> bool {
        match self {
            Relaxation::OverwriteOnTie => current >= candidate,
            Relaxation::KeepFirst => current > candidate,
        }
    }
}

/// A reusable Dijkstra engine owning its priority queue.
///
/// # Examples
/// ```
/// use wgraphs::{prelude::*, algo::*};
///
/// let mut graph = Graph::new();
/// graph.add_vertices(["S", "A", "B"]).unwrap();
/// graph.add_edge("S", "A", 5).unwrap();
/// graph.add_edge("S", "B", 1).unwrap();
/// graph.add_edge("B", "A", 2).unwrap();
///
/// DijkstraSearch::new().run(&mut graph, "S").unwrap();
///
/// let a = graph.get_vertex("A").unwrap();
/// assert_eq!(a.dijkstra_distance(), Distance::Finite(3));
/// assert_eq!(a.dijkstra_predecessor(), graph.id_of("B"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct DijkstraSearch {
    heap: BinaryHeap<Reverse<(u64, VertexId)>>,
    relaxation: Relaxation,
}

impl DijkstraSearch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the relaxation rule
    pub fn set_relaxation(&mut self, relaxation: Relaxation) {
        self.relaxation = relaxation;
    }

    /// Sets the relaxation rule
    pub fn relaxation(mut self, relaxation: Relaxation) -> Self {
        self.set_relaxation(relaxation);
        self
    }

    /// Resets the Dijkstra group and computes shortest path weights from `start`.
    ///
    /// Unreachable vertices keep [`Distance::Infinite`] and no predecessor.
    ///
    /// # Errors
    /// Returns [`GraphError::UnknownVertex`] (or [`GraphError::InvalidLabel`]) if `start`
    /// does not name a vertex; the graph is left untouched in that case.
    #[instrument(level = "debug", skip(self, graph))]
    pub fn run(&mut self, graph: &mut Graph, start: &str) -> Result<()> {
        let start = graph.resolve(start)?;
        graph.reset(AttributeGroup::Dijkstra);
        self.heap.clear();

        let mut settled = VertexBitSet::new(graph.number_of_vertices());
        graph.vertex_at_mut(start).dijkstra.distance = Distance::ZERO;
        self.heap.push(Reverse((0, start)));

        while let Some(Reverse((distance, u))) = self.heap.pop() {
            if settled.set_bit(u) {
                continue;
            }

            let base = Distance::Finite(distance);
            for i in 0..graph.vertex_at(u).out_degree() {
                let edge = &graph.vertex_at(u).edges[i];
                let (v, candidate) = (edge.destination(), base.extended_by(edge.weight()));

                let neighbor = graph.vertex_at_mut(v);
                if self
                    .relaxation
                    .improves(neighbor.dijkstra.distance, candidate)
                {
                    trace!(from = u, to = v, %candidate, "relaxed");
                    neighbor.dijkstra.distance = candidate;
                    neighbor.dijkstra.predecessor = OptionalVertex::new(u);

                    if let Some(d) = candidate.finite() {
                        self.heap.push(Reverse((d, v)));
                    }
                }
            }
        }

        debug!(settled = settled.cardinality(), "dijkstra finished");
        Ok(())
    }
}
