/*!
`wgraphs` is a small graph data structure & algorithms library for graphs that are
- **labelled** : every vertex carries a unique alphabetic [`Label`](crate::label::Label)
- **weighted** : every edge carries a positive integer weight (default `1`)
- **directed** : edges are owned by their source vertex; a weight pair `(w1, w2)` adds both
  directions at once

# Representation

Vertices live in registration order inside the [`Graph`](crate::graph::Graph) and are
addressed by a dense [`VertexId`](crate::vertex::VertexId) (`u32`) internally, and by label at
the API boundary. Edges reference their destination by id, so predecessor links and edges never
borrow into the registry.

Each vertex carries one attribute group per search algorithm (BFS, DFS, Dijkstra). A run resets
only its own group, so results of different algorithms can be inspected side by side.

# Design

All algorithms are provided as configurable structs that one can alter to their needs
using either the *Builder* / *Setter* pattern before running them on a graph. The most common
calls are also implemented via the [`Search`](crate::algo::Search) trait on the graph itself.

# Usage

There are *2* core submodules you probably want to interact with:
- [`prelude`] includes the graph, vertices, edges, labels and the error type,
- [`algo`] includes BFS (`graph.bfs("A")`), DFS, Dijkstra, Kruskal and Prim.

In most use-cases, `use wgraphs::{prelude::*, algo::*};` suffices for your needs.

```rust
use wgraphs::{prelude::*, algo::*};

let mut graph = Graph::new();
graph.add_vertices(["S", "A", "B"]).unwrap();
graph.add_edge("S", "A", 4).unwrap();
graph.add_edge("S", "B", (1, 1)).unwrap();
graph.add_edge("B", "A", 2).unwrap();

graph.dijkstra("S").unwrap();
assert_eq!(graph.get_vertex("A").unwrap().dijkstra_distance(), Distance::Finite(3));
assert_eq!(graph.path_to(AttributeGroup::Dijkstra, "A"), Some(vec![0, 2, 1]));
```

Library code only emits [`tracing`](https://docs.rs/tracing) events; installing a subscriber is
up to the caller.
*/

pub mod algo;
pub mod definition;
pub mod edge;
pub mod error;
pub mod graph;
pub mod label;
pub mod vertex;

#[cfg(test)]
pub(crate) mod testing;

/// `wgraphs::prelude` includes the graph container, vertex and edge types, labels and errors.
pub mod prelude {
    pub use super::{edge::*, error::*, graph::*, label::*, vertex::*};
}
