/*!
# Vertex Representation

Vertices are stored in registration order inside the [`Graph`](crate::graph::Graph) and
addressed by their position, a [`VertexId`]. Every vertex carries one attribute group per
algorithm; a run only resets and writes the groups it owns, so results of a BFS survive a
subsequent Dijkstra run and vice versa.
*/

use std::{fmt::Display, num::NonZero};

use stream_bitset::bitset::BitSetImpl;

use crate::{edge::Edge, label::Label};

/// Vertices are numbered `0` to `n - 1` in registration order
pub type VertexId = u32;

/// Sentinel id; never assigned to a registered vertex
pub const INVALID_VERTEX: VertexId = VertexId::MAX;

/// There can be at most `2^32 - 1` vertices in a graph
pub type NumVertices = VertexId;

/// BitSet over VertexIds
pub type VertexBitSet = BitSetImpl<VertexId>;

/// DFS timestamps; `0` means unset
pub type Time = u32;

/// Predecessor link stored in every vertex's attribute groups.
///
/// The id is kept XOR-ed with [`INVALID_VERTEX`], so the sentinel maps to zero and
/// `Option<OptionalVertex>` fits into a single `u32`. The graph never registers a vertex
/// with the sentinel id, so every real vertex can be stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct OptionalVertex(NonZero<VertexId>);

impl OptionalVertex {
    /// `None` for [`INVALID_VERTEX`]
    pub const fn new(v: VertexId) -> Option<Self> {
        match NonZero::new(v ^ INVALID_VERTEX) {
            Some(link) => Some(OptionalVertex(link)),
            None => None,
        }
    }

    pub const fn get(&self) -> VertexId {
        self.0.get() ^ INVALID_VERTEX
    }
}

/// Traversal status of a vertex during BFS/DFS.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Color {
    /// Not discovered yet
    #[default]
    White,
    /// Discovered; queued (BFS) or on the recursion stack (DFS)
    Gray,
    /// Fully processed
    Black,
}

impl Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Color::White => "white",
            Color::Gray => "gray",
            Color::Black => "black",
        })
    }
}

/// A path length that may be infinite (unreachable).
///
/// The derived order places [`Distance::Infinite`] above every finite value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Distance {
    Finite(u64),
    #[default]
    Infinite,
}

impl Distance {
    pub const ZERO: Self = Distance::Finite(0);

    /// Returns *true* if the distance is finite
    pub const fn is_finite(&self) -> bool {
        matches!(self, Distance::Finite(_))
    }

    /// Returns the finite value or `None` if unreachable
    pub const fn finite(&self) -> Option<u64> {
        match self {
            Distance::Finite(d) => Some(*d),
            Distance::Infinite => None,
        }
    }

    /// Adds `w` to a finite distance; infinity absorbs everything.
    pub const fn extended_by(self, w: u64) -> Self {
        match self {
            Distance::Finite(d) => Distance::Finite(d.saturating_add(w)),
            Distance::Infinite => Distance::Infinite,
        }
    }
}

impl From<u64> for Distance {
    fn from(value: u64) -> Self {
        Distance::Finite(value)
    }
}

impl Display for Distance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Distance::Finite(d) => write!(f, "{d}"),
            Distance::Infinite => f.write_str("inf"),
        }
    }
}

/// Color and predecessor, shared by BFS and DFS.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TraversalState {
    pub color: Color,
    pub predecessor: Option<OptionalVertex>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BfsState {
    pub distance: Distance,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DfsState {
    pub discovery_time: Time,
    pub finish_time: Time,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DijkstraState {
    pub distance: Distance,
    pub predecessor: Option<OptionalVertex>,
}

/// A labelled vertex owning its outgoing edges (in insertion order).
#[derive(Debug, Clone)]
pub struct Vertex {
    id: VertexId,
    label: Label,
    pub(crate) edges: Vec<Edge>,
    pub(crate) traversal: TraversalState,
    pub(crate) bfs: BfsState,
    pub(crate) dfs: DfsState,
    pub(crate) dijkstra: DijkstraState,
}

impl Vertex {
    pub(crate) fn new(id: VertexId, label: Label) -> Self {
        Self {
            id,
            label,
            edges: Vec::new(),
            traversal: TraversalState::default(),
            bfs: BfsState::default(),
            dfs: DfsState::default(),
            dijkstra: DijkstraState::default(),
        }
    }

    /// Position of the vertex in the graph's registration order
    pub fn id(&self) -> VertexId {
        self.id
    }

    pub fn label(&self) -> &Label {
        &self.label
    }

    /// Outgoing edges in insertion order
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn out_degree(&self) -> usize {
        self.edges.len()
    }

    /// BFS/DFS color
    pub fn color(&self) -> Color {
        self.traversal.color
    }

    /// BFS/DFS predecessor
    pub fn predecessor(&self) -> Option<VertexId> {
        self.traversal.predecessor.map(|p| p.get())
    }

    /// Number of edges on a shortest path from the last BFS start
    pub fn distance(&self) -> Distance {
        self.bfs.distance
    }

    pub fn discovery_time(&self) -> Time {
        self.dfs.discovery_time
    }

    pub fn finish_time(&self) -> Time {
        self.dfs.finish_time
    }

    /// Weight of a shortest path from the last Dijkstra start
    pub fn dijkstra_distance(&self) -> Distance {
        self.dijkstra.distance
    }

    pub fn dijkstra_predecessor(&self) -> Option<VertexId> {
        self.dijkstra.predecessor.map(|p| p.get())
    }
}
