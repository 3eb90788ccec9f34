use super::*;

impl Graph {
    /// Reconstructs the path from the start of the last run of `group` to `target` by
    /// following predecessors. The returned ids begin with that start and end with `target`.
    ///
    /// Returns `None` if `target` does not name a vertex or was not reached by that run.
    ///
    /// # Examples
    /// ```
    /// use wgraphs::{prelude::*, algo::*};
    ///
    /// let mut graph = Graph::new();
    /// graph.add_vertices(["A", "B", "C"]).unwrap();
    /// graph.add_edge("A", "B", 1).unwrap();
    /// graph.add_edge("B", "C", 1).unwrap();
    /// graph.add_edge("A", "C", 5).unwrap();
    ///
    /// graph.dijkstra("A").unwrap();
    /// assert_eq!(graph.path_to(AttributeGroup::Dijkstra, "C"), Some(vec![0, 1, 2]));
    ///
    /// graph.bfs("A").unwrap();
    /// assert_eq!(graph.path_to(AttributeGroup::Bfs, "C"), Some(vec![0, 2]));
    /// ```
    pub fn path_to(&self, group: AttributeGroup, target: &str) -> Option<Vec<VertexId>> {
        let target = self.get_vertex(target)?;
        let reached = match group {
            AttributeGroup::Bfs => target.distance().is_finite(),
            AttributeGroup::Dfs => target.discovery_time() > 0,
            AttributeGroup::Dijkstra => target.dijkstra_distance().is_finite(),
        };
        if !reached {
            return None;
        }

        let predecessor = |v: VertexId| {
            let vertex = self.vertex_at(v);
            match group {
                AttributeGroup::Bfs | AttributeGroup::Dfs => vertex.predecessor(),
                AttributeGroup::Dijkstra => vertex.dijkstra_predecessor(),
            }
        };

        let mut path = vec![target.id()];
        let mut current = target.id();
        while let Some(p) = predecessor(current) {
            // at most n - 1 hops
            if path.len() > self.len() {
                return None;
            }
            path.push(p);
            current = p;
        }

        path.reverse();
        Some(path)
    }
}
