//! Core types for network representation.

use std::fmt;

/// A stable identifier for a node slot in a [`Network`](super::Network).
///
/// Ids are never reused: removing a node frees its slot but later nodes
/// always get fresh indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub usize);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "N{}", self.0)
    }
}

/// A stable identifier for an edge (resistor) slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EdgeId(pub usize);

impl fmt::Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "E{}", self.0)
    }
}

/// One entry in a node's incidence list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Incidence {
    /// The node at the other end of the edge
    pub neighbor: NodeId,
    /// The edge itself
    pub edge: EdgeId,
}

/// A resistor: an undirected, weighted edge between two nodes.
#[derive(Debug, Clone, PartialEq)]
pub struct Resistor {
    /// Component name, or the composed expression for merged edges
    pub label: String,
    pub nodes: [NodeId; 2],
    /// Resistance in ohms
    pub resistance: f64,
}

impl Resistor {
    /// Create a new resistor.
    pub fn new(label: impl Into<String>, nodes: [NodeId; 2], resistance: f64) -> Self {
        Self {
            label: label.into(),
            nodes,
            resistance,
        }
    }

    /// Whether both endpoints are the same node.
    pub fn is_self_loop(&self) -> bool {
        self.nodes[0] == self.nodes[1]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_self_loop() {
        assert!(!Resistor::new("R1", [NodeId(3), NodeId(7)], 1.0).is_self_loop());
        assert!(Resistor::new("R2", [NodeId(3), NodeId(3)], 1.0).is_self_loop());
    }

    #[test]
    fn test_id_display() {
        assert_eq!(NodeId(4).to_string(), "N4");
        assert_eq!(EdgeId(2).to_string(), "E2");
    }
}
