/*!
# Graph Container

[`Graph`] owns all vertices in registration order together with a label index. Edges are
owned by their source vertex and reference their destination by [`VertexId`], so neither
predecessors nor edges ever hold a reference into the registry.

All mutation goes through [`Graph::add_vertex`] / [`Graph::add_edge`] which validate every
argument before touching the registry: a failed call leaves the graph unchanged.
*/

use std::str::FromStr;

use fxhash::FxHashMap;
use tracing::trace;

use crate::{
    edge::{Edge, EdgeWeight, NumEdges},
    error::{GraphError, Result},
    label::Label,
    vertex::{
        BfsState, DfsState, DijkstraState, INVALID_VERTEX, NumVertices, TraversalState, Vertex,
        VertexId,
    },
};

/// Id for the vertex registered after `len` others; [`INVALID_VERTEX`] is never handed out
fn next_vertex_id(len: usize) -> Result<VertexId> {
    VertexId::try_from(len)
        .ok()
        .filter(|&id| id != INVALID_VERTEX)
        .ok_or(GraphError::TooManyVertices(INVALID_VERTEX as u64))
}

/// Names an algorithm, e.g. for [`Graph::definition`](crate::graph::Graph::definition).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Algorithm {
    Bfs,
    Dfs,
    Dijkstra,
    Kruskal,
    Prim,
}

impl FromStr for Algorithm {
    type Err = GraphError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "bfs" => Ok(Algorithm::Bfs),
            "dfs" => Ok(Algorithm::Dfs),
            "dijkstra" => Ok(Algorithm::Dijkstra),
            "kruskal" => Ok(Algorithm::Kruskal),
            "prim" => Ok(Algorithm::Prim),
            _ => Err(GraphError::UnknownAlgorithm(s.to_string())),
        }
    }
}

/// The per-vertex attribute groups that can be reset between runs.
///
/// Kruskal and Prim keep their state in their result and own no group.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum AttributeGroup {
    /// Color, predecessor and BFS distance
    Bfs,
    /// Color, predecessor, timestamps and all edge classifications
    Dfs,
    /// Dijkstra distance and predecessor
    Dijkstra,
}

impl TryFrom<Algorithm> for AttributeGroup {
    type Error = GraphError;

    fn try_from(value: Algorithm) -> Result<Self> {
        match value {
            Algorithm::Bfs => Ok(AttributeGroup::Bfs),
            Algorithm::Dfs => Ok(AttributeGroup::Dfs),
            Algorithm::Dijkstra => Ok(AttributeGroup::Dijkstra),
            Algorithm::Kruskal => Err(GraphError::UnknownAlgorithm("kruskal".into())),
            Algorithm::Prim => Err(GraphError::UnknownAlgorithm("prim".into())),
        }
    }
}

impl FromStr for AttributeGroup {
    type Err = GraphError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "bfs" => Ok(AttributeGroup::Bfs),
            "dfs" => Ok(AttributeGroup::Dfs),
            "dijkstra" => Ok(AttributeGroup::Dijkstra),
            _ => Err(GraphError::UnknownAlgorithm(s.to_string())),
        }
    }
}

/// Outcome of [`Graph::try_add_vertex`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum VertexInsertion {
    Created(VertexId),
    AlreadyExists(VertexId),
}

impl VertexInsertion {
    /// Id of the vertex carrying the requested label
    pub fn id(&self) -> VertexId {
        match self {
            VertexInsertion::Created(id) | VertexInsertion::AlreadyExists(id) => *id,
        }
    }

    pub fn is_created(&self) -> bool {
        matches!(self, VertexInsertion::Created(_))
    }
}

/// A mutable directed, weighted graph over labelled vertices.
///
/// # Examples
/// ```
/// use wgraphs::prelude::*;
///
/// let mut graph = Graph::new();
/// graph.add_vertices(["A", "B", "C"]).unwrap();
/// graph.add_edge("A", "B", 4).unwrap();
/// graph.add_edge("B", "C", (2, 3)).unwrap();
///
/// assert_eq!(graph.number_of_vertices(), 3);
/// assert_eq!(graph.number_of_edges(), 3);
/// assert_eq!(graph.find_edge("C", "B").map(|e| e.weight()), Some(3));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Graph {
    vertices: Vec<Vertex>,
    index: FxHashMap<Label, VertexId>,
    number_of_edges: NumEdges,
}

impl Graph {
    /// Creates an empty graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a vertex unless its label is taken.
    ///
    /// # Errors
    /// Returns [`GraphError::InvalidLabel`] if `label` is not a valid [`Label`] and
    /// [`GraphError::TooManyVertices`] once every [`VertexId`] below [`INVALID_VERTEX`] is used.
    pub fn try_add_vertex(&mut self, label: &str) -> Result<VertexInsertion> {
        let label = Label::new(label)?;
        if let Some(&id) = self.index.get(&label) {
            return Ok(VertexInsertion::AlreadyExists(id));
        }

        let id = next_vertex_id(self.vertices.len())?;
        self.index.insert(label.clone(), id);
        self.vertices.push(Vertex::new(id, label));

        Ok(VertexInsertion::Created(id))
    }

    /// Registers a new vertex and returns its id.
    ///
    /// # Errors
    /// Returns [`GraphError::InvalidLabel`] for a malformed label and
    /// [`GraphError::DuplicateLabel`] if the label is already registered.
    pub fn add_vertex(&mut self, label: &str) -> Result<VertexId> {
        match self.try_add_vertex(label)? {
            VertexInsertion::Created(id) => Ok(id),
            VertexInsertion::AlreadyExists(_) => Err(GraphError::DuplicateLabel(label.into())),
        }
    }

    /// Calls [`Graph::add_vertex`] for every label, stopping at the first error
    pub fn add_vertices<I, S>(&mut self, labels: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for label in labels {
            self.add_vertex(label.as_ref())?;
        }
        Ok(())
    }

    /// Adds a directed edge `source -> destination`; for a weight pair `(w1, w2)` also adds
    /// the independent reverse edge `destination -> source` with weight `w2`.
    ///
    /// # Errors
    /// - [`GraphError::InvalidLabel`] / [`GraphError::UnknownVertex`] if an endpoint cannot be
    ///   resolved,
    /// - [`GraphError::InvalidWeight`] if any supplied weight is not positive.
    ///
    /// Nothing is attached unless all checks pass.
    pub fn add_edge<W>(&mut self, source: &str, destination: &str, weight: W) -> Result<()>
    where
        W: Into<EdgeWeight>,
    {
        let u = self.resolve(source)?;
        let v = self.resolve(destination)?;
        let (forward, backward) = weight.into().validate()?;

        self.vertices[u as usize].edges.push(Edge::new(u, v, forward));
        self.number_of_edges += 1;

        if let Some(backward) = backward {
            self.vertices[v as usize].edges.push(Edge::new(v, u, backward));
            self.number_of_edges += 1;
        }

        trace!(source, destination, forward, ?backward, "edge added");
        Ok(())
    }

    /// Shorthand for [`Graph::add_edge`] with [`EdgeWeight::UNIT`]
    pub fn add_unit_edge(&mut self, source: &str, destination: &str) -> Result<()> {
        self.add_edge(source, destination, EdgeWeight::UNIT)
    }

    /// Looks up a vertex; absent or malformed labels simply yield `None`
    pub fn get_vertex(&self, label: &str) -> Option<&Vertex> {
        self.id_of(label).map(|id| &self.vertices[id as usize])
    }

    /// Looks up a vertex that is required to exist.
    ///
    /// # Errors
    /// Returns [`GraphError::InvalidLabel`] or [`GraphError::UnknownVertex`].
    pub fn vertex(&self, label: &str) -> Result<&Vertex> {
        self.resolve(label).map(|id| &self.vertices[id as usize])
    }

    pub fn vertex_by_id(&self, id: VertexId) -> Option<&Vertex> {
        self.vertices.get(id as usize)
    }

    pub fn id_of(&self, label: &str) -> Option<VertexId> {
        self.index.get(label).copied()
    }

    pub fn label_of(&self, id: VertexId) -> Option<&Label> {
        self.vertex_by_id(id).map(Vertex::label)
    }

    /// Returns `true` if a vertex with this label exists
    pub fn contains(&self, label: &str) -> bool {
        self.index.contains_key(label)
    }

    /// Vertices in registration order
    pub fn vertices(&self) -> impl Iterator<Item = &Vertex> + '_ {
        self.vertices.iter()
    }

    /// All edges, grouped by source in registration order, each group in insertion order
    pub fn edges(&self) -> impl Iterator<Item = &Edge> + '_ {
        self.vertices.iter().flat_map(|v| v.edges.iter())
    }

    /// First edge `source -> destination` in insertion order
    pub fn find_edge(&self, source: &str, destination: &str) -> Option<&Edge> {
        let v = self.id_of(destination)?;
        self.get_vertex(source)?
            .edges
            .iter()
            .find(|e| e.destination() == v)
    }

    pub fn number_of_vertices(&self) -> NumVertices {
        self.vertices.len() as NumVertices
    }

    pub fn number_of_edges(&self) -> NumEdges {
        self.number_of_edges
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Returns *true* if the graph has no vertices (and thus no edges)
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Reinitialises the given attribute group on every vertex; other groups are untouched.
    pub fn reset(&mut self, group: AttributeGroup) {
        trace!(?group, "resetting attribute group");
        for vertex in &mut self.vertices {
            match group {
                AttributeGroup::Bfs => {
                    vertex.traversal = TraversalState::default();
                    vertex.bfs = BfsState::default();
                }
                AttributeGroup::Dfs => {
                    vertex.traversal = TraversalState::default();
                    vertex.dfs = DfsState::default();
                    for edge in &mut vertex.edges {
                        edge.classification = None;
                    }
                }
                AttributeGroup::Dijkstra => {
                    vertex.dijkstra = DijkstraState::default();
                }
            }
        }
    }

    /// Parses `tag` (`"bfs"`, `"dfs"`, `"dijkstra"`) and resets that group.
    ///
    /// # Errors
    /// Returns [`GraphError::UnknownAlgorithm`] for any other tag.
    pub fn reset_by_tag(&mut self, tag: &str) -> Result<()> {
        self.reset(tag.parse()?);
        Ok(())
    }

    /// Validates `label` and maps it to the id of an existing vertex
    pub(crate) fn resolve(&self, label: &str) -> Result<VertexId> {
        if !Label::is_valid(label) {
            return Err(GraphError::InvalidLabel(label.into()));
        }
        self.id_of(label)
            .ok_or_else(|| GraphError::UnknownVertex(label.into()))
    }

    /// ** Panics if `id` was not handed out by this graph **
    pub(crate) fn vertex_at(&self, id: VertexId) -> &Vertex {
        &self.vertices[id as usize]
    }

    /// ** Panics if `id` was not handed out by this graph **
    pub(crate) fn vertex_at_mut(&mut self, id: VertexId) -> &mut Vertex {
        &mut self.vertices[id as usize]
    }
}
