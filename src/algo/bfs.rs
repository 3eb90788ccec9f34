/*!
Breadth-first search computing unweighted shortest distances.

Vertices move `White -> Gray` (queued) `-> Black` (all outgoing edges scanned). Edges of a
vertex are scanned in insertion order, and the first vertex that reaches a neighbour becomes
its predecessor; later writers at the same depth see a non-white neighbour and back off.
*/

use std::collections::VecDeque;

use tracing::{debug, instrument, trace};

use super::*;

/// A reusable BFS engine owning its FIFO frontier.
///
/// # Examples
/// ```
/// use wgraphs::{prelude::*, algo::*};
///
/// let mut graph = Graph::new();
/// graph.add_vertices(["A", "B", "C"]).unwrap();
/// graph.add_unit_edge("A", "B").unwrap();
/// graph.add_unit_edge("B", "C").unwrap();
///
/// BreadthFirstSearch::new().run(&mut graph, "A").unwrap();
/// assert_eq!(graph.get_vertex("C").unwrap().distance(), Distance::Finite(2));
/// ```
#[derive(Debug, Clone, Default)]
pub struct BreadthFirstSearch {
    queue: VecDeque<VertexId>,
}

impl BreadthFirstSearch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resets the BFS group and explores everything reachable from `start`.
    ///
    /// Unreachable vertices stay white with distance [`Distance::Infinite`].
    ///
    /// # Errors
    /// Returns [`GraphError::UnknownVertex`] (or [`GraphError::InvalidLabel`]) if `start`
    /// does not name a vertex; the graph is left untouched in that case.
    #[instrument(level = "debug", skip(self, graph))]
    pub fn run(&mut self, graph: &mut Graph, start: &str) -> Result<()> {
        let start = graph.resolve(start)?;
        graph.reset(AttributeGroup::Bfs);
        self.queue.clear();

        let root = graph.vertex_at_mut(start);
        root.traversal.color = Color::Gray;
        root.bfs.distance = Distance::ZERO;
        self.queue.push_back(start);

        let mut reached = 1usize;
        while let Some(head) = self.queue.pop_front() {
            let next_distance = graph.vertex_at(head).bfs.distance.extended_by(1);

            for i in 0..graph.vertex_at(head).out_degree() {
                let v = graph.vertex_at(head).edges[i].destination();
                let neighbor = graph.vertex_at_mut(v);

                if neighbor.traversal.color == Color::White {
                    neighbor.traversal = TraversalState {
                        color: Color::Gray,
                        predecessor: OptionalVertex::new(head),
                    };
                    neighbor.bfs.distance = next_distance;
                    self.queue.push_back(v);
                    reached += 1;
                    trace!(from = head, to = v, "discovered");
                }
            }

            graph.vertex_at_mut(head).traversal.color = Color::Black;
        }

        debug!(reached, "bfs finished");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    use super::*;
    use crate::testing::*;

    #[test]
    fn canonical_demo_graph() {
        let mut graph = demo_unweighted();
        graph.bfs("A").unwrap();

        let distances = graph
            .vertices()
            .map(|v| (v.label().as_str(), v.distance().finite()))
            .collect_vec();
        assert_eq!(
            distances,
            vec![
                ("A", Some(0)),
                ("B", Some(1)),
                ("C", Some(2)),
                ("D", Some(1)),
                ("E", Some(1)),
                ("F", Some(2)),
                ("G", Some(3)),
                ("H", Some(3)),
                ("I", None),
                ("J", Some(3)),
            ]
        );

        let unreachable = graph.get_vertex("I").unwrap();
        assert_eq!(unreachable.color(), Color::White);
        assert_eq!(unreachable.predecessor(), None);
        assert!(
            graph
                .vertices()
                .filter(|v| v.label().as_str() != "I")
                .all(|v| v.color() == Color::Black)
        );
    }

    #[test]
    fn first_writer_wins() {
        // D is reachable at depth 1 from A directly, and at depth 2 via B and E.
        let mut graph = demo_unweighted();
        graph.bfs("A").unwrap();

        let pred = |l: &str| {
            graph
                .get_vertex(l)
                .and_then(|v| v.predecessor())
                .and_then(|p| graph.label_of(p))
                .map(|l| l.as_str().to_string())
        };
        assert_eq!(pred("D").as_deref(), Some("A"));
        assert_eq!(pred("F").as_deref(), Some("D"));
        assert_eq!(pred("G").as_deref(), Some("C"));
        assert_eq!(pred("J").as_deref(), Some("F"));
        assert_eq!(pred("A"), None);
    }

    #[test]
    fn unknown_start_is_rejected_without_reset() {
        let mut graph = demo_unweighted();
        graph.bfs("A").unwrap();
        let before = graph.definition(Algorithm::Bfs);

        assert_eq!(
            graph.bfs("Z"),
            Err(GraphError::UnknownVertex("Z".into()))
        );
        assert_eq!(graph.definition(Algorithm::Bfs), before);
    }

    #[test]
    fn rerun_is_idempotent() {
        let mut graph = demo_unweighted();
        graph.bfs("B").unwrap();
        let first = graph.definition(Algorithm::Bfs);

        graph.bfs("E").unwrap();
        graph.bfs("B").unwrap();
        assert_eq!(graph.definition(Algorithm::Bfs), first);

        let mut fresh = demo_unweighted();
        fresh.bfs("B").unwrap();
        assert_eq!(fresh.definition(Algorithm::Bfs), first);
    }

    #[test]
    fn loops_and_isolated_start() {
        let mut graph = Graph::new();
        graph.add_vertices(["A", "B"]).unwrap();
        graph.add_unit_edge("A", "A").unwrap();

        graph.bfs("A").unwrap();
        assert_eq!(graph.get_vertex("A").unwrap().distance(), Distance::ZERO);
        assert_eq!(graph.get_vertex("A").unwrap().predecessor(), None);
        assert_eq!(graph.get_vertex("B").unwrap().distance(), Distance::Infinite);
    }

    #[test]
    fn distances_match_unit_weight_oracle() {
        let rng = &mut Pcg64Mcg::seed_from_u64(3);

        for n in [1, 5, 10, 20] {
            for m in [n, 2 * n, 4 * n] {
                let mut graph = random_graph(rng, n, m, 1);
                let oracle = all_pairs_shortest_paths(&graph);

                for s in 0..n {
                    let start = graph.label_of(s as VertexId).unwrap().clone();
                    graph.bfs(start.as_str()).unwrap();

                    for v in graph.vertices() {
                        assert_eq!(v.distance(), oracle[s][v.id() as usize]);
                        if let Some(p) = v.predecessor() {
                            let p = graph.vertex_by_id(p).unwrap();
                            assert_eq!(p.distance().extended_by(1), v.distance());
                        }
                    }
                }
            }
        }
    }
}
