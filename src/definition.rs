/*!
# Graph Definitions

A deterministic, human-readable dump of the graph state as seen by one algorithm. Each vertex
is rendered on its own line in registration order, showing only the attributes the
algorithm reads or writes:

```text
Graph Definition:
  - Vertex({label: A, color: black, predecessor: None, distance: 0, edges: [Edge(A, B)]})
  - Vertex({label: B, color: black, predecessor: A, distance: 1, edges: []})
```

The output is meant for screens and snapshot tests, not for parsing.
*/

use std::fmt::{self, Display};

use itertools::Itertools;

use crate::{
    edge::Edge,
    graph::{Algorithm, Graph},
    vertex::{Vertex, VertexId},
};

/// Display adapter returned by [`Graph::display_definition`].
pub struct GraphDefinition<'a> {
    graph: &'a Graph,
    algorithm: Algorithm,
}

impl Graph {
    /// Renders the graph state relevant to `algorithm`.
    ///
    /// # Examples
    /// ```
    /// use wgraphs::prelude::*;
    ///
    /// let mut graph = Graph::new();
    /// graph.add_vertices(["A", "B"]).unwrap();
    /// graph.add_edge("A", "B", 3).unwrap();
    ///
    /// assert_eq!(
    ///     graph.definition(Algorithm::Prim),
    ///     "Graph Definition:\n  - Vertex({label: A, edges: [Edge(A, B, 3)]})\n  - Vertex({label: B, edges: []})\n"
    /// );
    /// ```
    pub fn definition(&self, algorithm: Algorithm) -> String {
        self.display_definition(algorithm).to_string()
    }

    /// Like [`Graph::definition`] but without allocating
    pub fn display_definition(&self, algorithm: Algorithm) -> GraphDefinition<'_> {
        GraphDefinition {
            graph: self,
            algorithm,
        }
    }
}

impl GraphDefinition<'_> {
    fn label(&self, id: Option<VertexId>) -> &str {
        id.and_then(|id| self.graph.label_of(id))
            .map_or("None", |l| l.as_str())
    }

    fn write_vertex(&self, f: &mut fmt::Formatter<'_>, vertex: &Vertex) -> fmt::Result {
        write!(f, "Vertex({{label: {}", vertex.label())?;

        match self.algorithm {
            Algorithm::Bfs => write!(
                f,
                ", color: {}, predecessor: {}, distance: {}",
                vertex.color(),
                self.label(vertex.predecessor()),
                vertex.distance()
            )?,
            Algorithm::Dfs => write!(
                f,
                ", color: {}, predecessor: {}, discovery: {}, finish: {}",
                vertex.color(),
                self.label(vertex.predecessor()),
                vertex.discovery_time(),
                vertex.finish_time()
            )?,
            Algorithm::Dijkstra => write!(
                f,
                ", predecessor: {}, distance: {}",
                self.label(vertex.dijkstra_predecessor()),
                vertex.dijkstra_distance()
            )?,
            Algorithm::Kruskal | Algorithm::Prim => {}
        }

        write!(
            f,
            ", edges: [{}]}})",
            vertex
                .edges()
                .iter()
                .format_with(", ", |e, g| g(&format_args!("{}", self.edge(e))))
        )
    }

    fn edge<'b>(&'b self, edge: &'b Edge) -> EdgeDefinition<'b> {
        EdgeDefinition { def: self, edge }
    }
}

struct EdgeDefinition<'a> {
    def: &'a GraphDefinition<'a>,
    edge: &'a Edge,
}

impl Display for EdgeDefinition<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let source = self.def.label(Some(self.edge.source()));
        let destination = self.def.label(Some(self.edge.destination()));
        write!(f, "Edge({source}, {destination}")?;

        match self.def.algorithm {
            Algorithm::Bfs => {}
            Algorithm::Dfs => match self.edge.classification() {
                Some(class) => write!(f, ", {class}")?,
                None => f.write_str(", None")?,
            },
            Algorithm::Dijkstra | Algorithm::Kruskal | Algorithm::Prim => {
                write!(f, ", {}", self.edge.weight())?
            }
        }

        f.write_str(")")
    }
}

impl Display for GraphDefinition<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Graph Definition:")?;

        if self.graph.is_empty() {
            return writeln!(f, "  Graph is empty");
        }

        for vertex in self.graph.vertices() {
            f.write_str("  - ")?;
            self.write_vertex(f, vertex)?;
            writeln!(f)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle() -> Graph {
        let mut graph = Graph::new();
        graph.add_vertices(["A", "B", "C"]).unwrap();
        graph.add_edge("A", "B", 2).unwrap();
        graph.add_edge("B", "C", (5, 7)).unwrap();
        graph
    }

    #[test]
    fn empty_graph() {
        assert_eq!(
            Graph::new().definition(Algorithm::Bfs),
            "Graph Definition:\n  Graph is empty\n"
        );
    }

    #[test]
    fn fresh_graph_per_algorithm() {
        let graph = triangle();

        assert_eq!(
            graph.definition(Algorithm::Bfs),
            "Graph Definition:\n\
             \x20 - Vertex({label: A, color: white, predecessor: None, distance: inf, edges: [Edge(A, B)]})\n\
             \x20 - Vertex({label: B, color: white, predecessor: None, distance: inf, edges: [Edge(B, C)]})\n\
             \x20 - Vertex({label: C, color: white, predecessor: None, distance: inf, edges: [Edge(C, B)]})\n"
        );

        assert_eq!(
            graph.definition(Algorithm::Dfs).lines().nth(1),
            Some(
                "  - Vertex({label: A, color: white, predecessor: None, discovery: 0, finish: 0, edges: [Edge(A, B, None)]})"
            )
        );

        assert_eq!(
            graph.definition(Algorithm::Dijkstra).lines().nth(2),
            Some("  - Vertex({label: B, predecessor: None, distance: inf, edges: [Edge(B, C, 5)]})")
        );

        assert_eq!(
            graph.definition(Algorithm::Kruskal).lines().nth(3),
            Some("  - Vertex({label: C, edges: [Edge(C, B, 7)]})")
        );
    }

    #[test]
    fn definition_is_stable() {
        let graph = triangle();
        assert_eq!(
            graph.definition(Algorithm::Dfs),
            graph.display_definition(Algorithm::Dfs).to_string()
        );
        assert_eq!(
            graph.definition(Algorithm::Prim),
            graph.clone().definition(Algorithm::Prim)
        );
    }
}
