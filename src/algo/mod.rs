/*!
# Graph Algorithms

Every algorithm is a small reusable engine struct that owns its working queue, stack or heap
and is configured with the *Builder* / *Setter* pattern before it is run on a [`Graph`].
For the common case, the [`Search`] trait exposes one-call shortcuts on the graph itself:
```rust
use wgraphs::{prelude::*, algo::*};

let mut graph = Graph::new();
graph.add_vertices(["A", "B"]).unwrap();
graph.add_edge("A", "B", 2).unwrap();

graph.dijkstra("A").unwrap();
assert_eq!(graph.get_vertex("B").unwrap().dijkstra_distance(), Distance::Finite(2));
```

BFS, DFS and Dijkstra write their results into the per-vertex attribute group they own and
reset only that group before running. Kruskal and Prim leave the graph untouched and return
a [`SpanningForest`].
*/

mod bfs;
mod dfs;
mod dijkstra;
mod kruskal;
mod path;
mod prim;
mod spanning;

use crate::prelude::*;

pub use bfs::*;
pub use dfs::*;
pub use dijkstra::*;
pub use kruskal::*;
pub use prim::*;
pub use spanning::*;

/// Shortcuts running a default-configured engine on the graph.
pub trait Search {
    /// Runs [`BreadthFirstSearch`] from `start`.
    ///
    /// # Examples
    /// ```
    /// use wgraphs::{prelude::*, algo::*};
    ///
    /// let mut graph = Graph::new();
    /// graph.add_vertices(["A", "B", "C"]).unwrap();
    /// graph.add_unit_edge("A", "B").unwrap();
    ///
    /// graph.bfs("A").unwrap();
    /// assert_eq!(graph.get_vertex("B").unwrap().distance(), Distance::Finite(1));
    /// assert_eq!(graph.get_vertex("C").unwrap().distance(), Distance::Infinite);
    /// ```
    fn bfs(&mut self, start: &str) -> Result<()>;

    /// Runs [`DepthFirstSearch::run`] over all vertices.
    fn dfs(&mut self);

    /// Runs [`DepthFirstSearch::run_from`] from `start`.
    fn dfs_from(&mut self, start: &str) -> Result<()>;

    /// Runs [`DijkstraSearch`] with the default [`Relaxation`] from `start`.
    fn dijkstra(&mut self, start: &str) -> Result<()>;

    /// Computes a minimum spanning forest with [`KruskalMst`].
    fn kruskal(&self) -> SpanningForest;

    /// Grows a minimum spanning tree from `start` with [`PrimMst`].
    ///
    /// # Examples
    /// ```
    /// use wgraphs::{prelude::*, algo::*};
    ///
    /// let mut graph = Graph::new();
    /// graph.add_vertices(["A", "B", "C"]).unwrap();
    /// graph.add_edge("A", "B", (2, 2)).unwrap();
    /// graph.add_edge("B", "C", (3, 3)).unwrap();
    ///
    /// assert_eq!(graph.prim("C").unwrap().total_weight(), 5);
    /// ```
    fn prim(&self, start: &str) -> Result<SpanningForest>;
}

impl Search for Graph {
    fn bfs(&mut self, start: &str) -> Result<()> {
        BreadthFirstSearch::new().run(self, start)
    }

    fn dfs(&mut self) {
        DepthFirstSearch::new().run(self)
    }

    fn dfs_from(&mut self, start: &str) -> Result<()> {
        DepthFirstSearch::new().run_from(self, start)
    }

    fn dijkstra(&mut self, start: &str) -> Result<()> {
        DijkstraSearch::new().run(self, start)
    }

    fn kruskal(&self) -> SpanningForest {
        KruskalMst::new().run(self)
    }

    fn prim(&self, start: &str) -> Result<SpanningForest> {
        PrimMst::new().run(self, start)
    }
}
