/*!
Depth-first search with discovery/finish timestamps and edge classification.

The traversal keeps an explicit stack of frames `(vertex, next edge index)` instead of
recursing, so path length is bounded by memory rather than call-stack depth. The clock is a
plain value threaded through [`DepthFirstSearch::visit`]; every discovery and every finish
advances it by one, so timestamps over one run are `1..=2n` for the visited vertices.

Edge classes are decided when the edge is scanned, by the color of its destination:
- `White`: tree edge (destination gets discovered next),
- `Gray`: back edge (destination is an ancestor on the stack),
- `Black`: forward edge if the source was discovered earlier, cross edge otherwise.
*/

use tracing::{debug, instrument, trace};

use super::*;

#[derive(Debug, Clone, Copy)]
struct Frame {
    vertex: VertexId,
    next_edge: usize,
}

/// A reusable DFS engine owning its frame stack.
///
/// # Examples
/// ```
/// use wgraphs::{prelude::*, algo::*};
///
/// let mut graph = Graph::new();
/// graph.add_vertices(["A", "B"]).unwrap();
/// graph.add_unit_edge("A", "B").unwrap();
/// graph.add_unit_edge("B", "A").unwrap();
///
/// DepthFirstSearch::new().run(&mut graph);
///
/// let a = graph.get_vertex("A").unwrap();
/// assert_eq!((a.discovery_time(), a.finish_time()), (1, 4));
/// assert_eq!(graph.find_edge("B", "A").unwrap().classification(), Some(EdgeClass::Back));
/// ```
#[derive(Debug, Clone, Default)]
pub struct DepthFirstSearch {
    stack: Vec<Frame>,
}

impl DepthFirstSearch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resets the DFS group and visits every still-white vertex in registration order,
    /// producing a DFS forest. Never fails, also not on disconnected graphs.
    #[instrument(level = "debug", skip_all)]
    pub fn run(&mut self, graph: &mut Graph) {
        graph.reset(AttributeGroup::Dfs);

        let mut clock: Time = 0;
        let mut roots = 0usize;
        for u in 0..graph.number_of_vertices() {
            if graph.vertex_at(u).traversal.color == Color::White {
                clock = self.visit(graph, u, clock);
                roots += 1;
            }
        }

        debug!(roots, clock, "dfs forest finished");
    }

    /// Resets the DFS group and visits only what is reachable from `start`.
    ///
    /// # Errors
    /// Returns [`GraphError::UnknownVertex`] (or [`GraphError::InvalidLabel`]) if `start`
    /// does not name a vertex; the graph is left untouched in that case.
    #[instrument(level = "debug", skip(self, graph))]
    pub fn run_from(&mut self, graph: &mut Graph, start: &str) -> Result<()> {
        let start = graph.resolve(start)?;
        graph.reset(AttributeGroup::Dfs);

        let clock = self.visit(graph, start, 0);
        debug!(clock, "dfs finished");
        Ok(())
    }

    /// Explores the DFS tree rooted at the white vertex `root` and returns the clock value
    /// after `root` finished.
    fn visit(&mut self, graph: &mut Graph, root: VertexId, mut clock: Time) -> Time {
        debug_assert!(self.stack.is_empty());

        clock += 1;
        Self::discover(graph, root, None, clock);
        self.stack.push(Frame {
            vertex: root,
            next_edge: 0,
        });

        while let Some(&Frame {
            vertex: u,
            next_edge: i,
        }) = self.stack.last()
        {
            let Some(edge) = graph.vertex_at(u).edges.get(i) else {
                clock += 1;
                let vertex = graph.vertex_at_mut(u);
                vertex.traversal.color = Color::Black;
                vertex.dfs.finish_time = clock;
                self.stack.pop();
                continue;
            };

            let v = edge.destination();
            if let Some(top) = self.stack.last_mut() {
                top.next_edge += 1;
            }

            let destination = graph.vertex_at(v);
            let class = match destination.traversal.color {
                Color::White => EdgeClass::Tree,
                Color::Gray => EdgeClass::Back,
                Color::Black => {
                    if graph.vertex_at(u).dfs.discovery_time < destination.dfs.discovery_time {
                        EdgeClass::Forward
                    } else {
                        EdgeClass::Cross
                    }
                }
            };

            graph.vertex_at_mut(u).edges[i].classification = Some(class);
            trace!(from = u, to = v, %class, "classified");

            if class == EdgeClass::Tree {
                clock += 1;
                Self::discover(graph, v, Some(u), clock);
                self.stack.push(Frame {
                    vertex: v,
                    next_edge: 0,
                });
            }
        }

        clock
    }

    fn discover(graph: &mut Graph, v: VertexId, predecessor: Option<VertexId>, clock: Time) {
        let vertex = graph.vertex_at_mut(v);
        vertex.traversal = TraversalState {
            color: Color::Gray,
            predecessor: predecessor.and_then(OptionalVertex::new),
        };
        vertex.dfs.discovery_time = clock;
    }
}
