use fxhash::FxHashMap;
use itertools::Itertools;

use super::*;

/// Result of a spanning-tree computation: the accepted edges in acceptance order, grouped
/// into one tree per connected component they touch.
///
/// Isolated vertices belong to no tree.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SpanningForest {
    edges: Vec<WeightedEdge>,
    trees: Vec<Vec<WeightedEdge>>,
}

impl SpanningForest {
    /// Groups `edges` by the component key returned by `component_of`; trees are ordered by
    /// their first accepted edge.
    pub(crate) fn from_components<F>(edges: Vec<WeightedEdge>, mut component_of: F) -> Self
    where
        F: FnMut(&WeightedEdge) -> VertexId,
    {
        let mut tree_index: FxHashMap<VertexId, usize> = FxHashMap::default();
        let mut trees: Vec<Vec<WeightedEdge>> = Vec::new();

        for e in &edges {
            let next = trees.len();
            let idx = *tree_index.entry(component_of(e)).or_insert(next);
            if idx == next {
                trees.push(Vec::new());
            }
            trees[idx].push(*e);
        }

        Self { edges, trees }
    }

    /// All edges are known to form a single tree
    pub(crate) fn single_tree(edges: Vec<WeightedEdge>) -> Self {
        let trees = if edges.is_empty() {
            Vec::new()
        } else {
            vec![edges.clone()]
        };
        Self { edges, trees }
    }

    /// Accepted edges in the order they were accepted
    pub fn edges(&self) -> &[WeightedEdge] {
        &self.edges
    }

    /// One edge list per tree
    pub fn trees(&self) -> &[Vec<WeightedEdge>] {
        &self.trees
    }

    pub fn tree_count(&self) -> usize {
        self.trees.len()
    }

    pub fn total_weight(&self) -> Weight {
        self.edges.iter().map(WeightedEdge::weight).sum()
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Returns *true* if the directed edge `source -> destination` was accepted
    pub fn contains(&self, source: VertexId, destination: VertexId) -> bool {
        self.edges
            .iter()
            .any(|e| e.source() == source && e.destination() == destination)
    }

    /// Vertices touched by any accepted edge, sorted by id
    pub fn vertices(&self) -> Vec<VertexId> {
        self.edges
            .iter()
            .flat_map(|e| [e.source(), e.destination()])
            .sorted_unstable()
            .dedup()
            .collect()
    }
}
