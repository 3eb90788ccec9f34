use std::fmt::{Debug, Display};

use crate::{
    error::{GraphError, Result},
    vertex::VertexId,
};

/// Edge weights are positive integers
pub type Weight = u64;

/// We limit the number of edges to `2^32 - 1`.
pub type NumEdges = u32;

/// Weight argument of [`Graph::add_edge`](crate::graph::Graph::add_edge).
///
/// A scalar creates a single directed edge; a pair `(w1, w2)` creates two independent
/// edges `A -> B` with `w1` and `B -> A` with `w2`. Components are wide enough to hold any
/// signed or unsigned 64-bit input unchanged; they are checked only when the edge is added.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EdgeWeight {
    Single(i128),
    Pair(i128, i128),
}

impl EdgeWeight {
    /// Weight used when the caller does not supply one
    pub const UNIT: Self = EdgeWeight::Single(1);

    /// Returns the forward weight and, for pairs, the backward weight.
    ///
    /// # Errors
    /// Returns [`GraphError::InvalidWeight`] for the first component that is not positive or
    /// does not fit into a [`Weight`].
    pub fn validate(self) -> Result<(Weight, Option<Weight>)> {
        fn positive(w: i128) -> Result<Weight> {
            Weight::try_from(w)
                .ok()
                .filter(|&w| w > 0)
                .ok_or(GraphError::InvalidWeight(w))
        }

        match self {
            EdgeWeight::Single(w) => Ok((positive(w)?, None)),
            EdgeWeight::Pair(w1, w2) => Ok((positive(w1)?, Some(positive(w2)?))),
        }
    }
}

impl Default for EdgeWeight {
    fn default() -> Self {
        Self::UNIT
    }
}

macro_rules! impl_edge_weight_from {
    ($($t:ty),*) => {
        $(
            impl From<$t> for EdgeWeight {
                fn from(value: $t) -> Self {
                    EdgeWeight::Single(value as i128)
                }
            }

            impl From<($t, $t)> for EdgeWeight {
                fn from((w1, w2): ($t, $t)) -> Self {
                    EdgeWeight::Pair(w1 as i128, w2 as i128)
                }
            }
        )*
    };
}

impl_edge_weight_from!(i32, i64, u32, u64, usize);

/// DFS classification of an edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EdgeClass {
    /// Edge of the DFS forest
    Tree,
    /// Points to an ancestor still on the stack; witnesses a cycle
    Back,
    /// Points to an already finished descendant
    Forward,
    /// Everything else
    Cross,
}

impl Display for EdgeClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            EdgeClass::Tree => "T",
            EdgeClass::Back => "B",
            EdgeClass::Forward => "F",
            EdgeClass::Cross => "C",
        })
    }
}

/// A directed, weighted edge owned by its source vertex.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edge {
    source: VertexId,
    destination: VertexId,
    weight: Weight,
    pub(crate) classification: Option<EdgeClass>,
}

impl Edge {
    pub(crate) fn new(source: VertexId, destination: VertexId, weight: Weight) -> Self {
        Self {
            source,
            destination,
            weight,
            classification: None,
        }
    }

    pub fn source(&self) -> VertexId {
        self.source
    }

    pub fn destination(&self) -> VertexId {
        self.destination
    }

    pub fn weight(&self) -> Weight {
        self.weight
    }

    /// Classification assigned by the last DFS run, `None` if the edge was not scanned
    pub fn classification(&self) -> Option<EdgeClass> {
        self.classification
    }

    /// Returns *true* if both endpoints are equal
    pub fn is_loop(&self) -> bool {
        self.source == self.destination
    }

    /// Copyable summary `(source, destination, weight)`
    pub fn summary(&self) -> WeightedEdge {
        WeightedEdge(self.source, self.destination, self.weight)
    }
}

/// Compact `(source, destination, weight)` triple, used in spanning-tree results.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WeightedEdge(pub VertexId, pub VertexId, pub Weight);

impl WeightedEdge {
    pub fn source(&self) -> VertexId {
        self.0
    }

    pub fn destination(&self) -> VertexId {
        self.1
    }

    pub fn weight(&self) -> Weight {
        self.2
    }

    /// Endpoints with the smaller id first
    pub fn normalized_endpoints(&self) -> (VertexId, VertexId) {
        (self.0.min(self.1), self.0.max(self.1))
    }
}

impl Display for WeightedEdge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{}:{})", self.0, self.1, self.2)
    }
}

impl Debug for WeightedEdge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        <Self as Display>::fmt(self, f)
    }
}

impl From<&Edge> for WeightedEdge {
    fn from(value: &Edge) -> Self {
        value.summary()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weight_validation() {
        assert_eq!(EdgeWeight::from(5).validate(), Ok((5, None)));
        assert_eq!(EdgeWeight::from((2, 9)).validate(), Ok((2, Some(9))));
        assert_eq!(EdgeWeight::default().validate(), Ok((1, None)));

        assert_eq!(
            EdgeWeight::from(0).validate(),
            Err(GraphError::InvalidWeight(0))
        );
        assert_eq!(
            EdgeWeight::from((3, -1)).validate(),
            Err(GraphError::InvalidWeight(-1))
        );
        assert_eq!(
            EdgeWeight::from((-2, -1)).validate(),
            Err(GraphError::InvalidWeight(-2))
        );
    }

    #[test]
    fn unsigned_weights_keep_their_value() {
        assert_eq!(EdgeWeight::from(u64::MAX).validate(), Ok((u64::MAX, None)));
        assert_eq!(
            EdgeWeight::from((u64::MAX, 1u64 << 63)).validate(),
            Ok((u64::MAX, Some(1 << 63)))
        );
        assert_eq!(
            EdgeWeight::from(usize::MAX).validate(),
            Ok((usize::MAX as Weight, None))
        );
        assert_eq!(
            EdgeWeight::from(i64::MIN).validate(),
            Err(GraphError::InvalidWeight(i64::MIN as i128))
        );
    }

    #[test]
    fn unrepresentable_weights_are_rejected() {
        let too_large = u64::MAX as i128 + 1;
        assert_eq!(
            EdgeWeight::Single(too_large).validate(),
            Err(GraphError::InvalidWeight(too_large))
        );
        assert_eq!(
            EdgeWeight::Pair(4, too_large).validate(),
            Err(GraphError::InvalidWeight(too_large))
        );
    }

    #[test]
    fn classification_letters() {
        let letters: String = [
            EdgeClass::Tree,
            EdgeClass::Back,
            EdgeClass::Forward,
            EdgeClass::Cross,
        ]
        .iter()
        .map(|c| c.to_string())
        .collect();
        assert_eq!(letters, "TBFC");
    }

    #[test]
    fn summary() {
        let mut e = Edge::new(2, 0, 7);
        e.classification = Some(EdgeClass::Back);
        assert_eq!(e.summary(), WeightedEdge(2, 0, 7));
        assert_eq!(e.summary().normalized_endpoints(), (0, 2));
        assert_eq!(format!("{:?}", e.summary()), "(2,0:7)");
        assert!(!e.is_loop());
    }
}
