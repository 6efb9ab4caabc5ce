//! Arena-backed multigraph of resistors.

use std::collections::{HashMap, HashSet, VecDeque};

use super::types::{EdgeId, Incidence, NodeId, Resistor};
use crate::dsl::Netlist;

#[derive(Debug, Clone)]
struct NodeSlot {
    name: String,
    incident: Vec<Incidence>,
}

/// An undirected resistor multigraph.
///
/// Iteration over nodes and edges follows slot order, i.e. insertion
/// order, so every scan over the network is deterministic.
#[derive(Debug, Clone, Default)]
pub struct Network {
    nodes: Vec<Option<NodeSlot>>,
    edges: Vec<Option<Resistor>>,
    node_map: HashMap<String, NodeId>,
}

impl Network {
    /// Create an empty network.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a network from a parsed netlist.
    ///
    /// Nodes receive ids in order of first appearance in the netlist.
    pub fn from_netlist(netlist: &Netlist) -> Self {
        let mut network = Self::new();
        for name in &netlist.nodes {
            network.add_node(name.as_str());
        }
        for def in &netlist.resistors {
            let a = network.add_node(def.nodes[0].as_str());
            let b = network.add_node(def.nodes[1].as_str());
            network.attach(def.name.clone(), a, b, def.resistance);
        }
        network
    }

    /// Build a network from literal `(node_a, node_b, ohms)` triples.
    ///
    /// Resistors are labelled `R1`, `R2`, ... in the order given.
    pub fn from_edges<I, N>(edges: I) -> Self
    where
        I: IntoIterator<Item = (N, N, f64)>,
        N: Into<String>,
    {
        let mut network = Self::new();
        for (idx, (a, b, resistance)) in edges.into_iter().enumerate() {
            let a = network.add_node(a);
            let b = network.add_node(b);
            network.attach(format!("R{}", idx + 1), a, b, resistance);
        }
        network
    }

    /// Add a node by name, returning the existing id if it is already present.
    pub fn add_node(&mut self, name: impl Into<String>) -> NodeId {
        let name = name.into();
        if let Some(&id) = self.node_map.get(&name) {
            return id;
        }
        let id = NodeId(self.nodes.len());
        self.node_map.insert(name.clone(), id);
        self.nodes.push(Some(NodeSlot {
            name,
            incident: Vec::new(),
        }));
        id
    }

    /// Insert an edge whose endpoints are known to be live.
    pub(crate) fn attach(&mut self, label: String, a: NodeId, b: NodeId, resistance: f64) -> EdgeId {
        let id = EdgeId(self.edges.len());
        self.edges.push(Some(Resistor::new(label, [a, b], resistance)));
        if let Some(slot) = self.slot_mut(a) {
            slot.incident.push(Incidence { neighbor: b, edge: id });
        }
        // A self-loop is recorded once
        if a != b {
            if let Some(slot) = self.slot_mut(b) {
                slot.incident.push(Incidence { neighbor: a, edge: id });
            }
        }
        id
    }

    /// Remove an edge, returning it if it was present.
    pub fn remove_edge(&mut self, id: EdgeId) -> Option<Resistor> {
        let resistor = self.edges.get_mut(id.0)?.take()?;
        for node in resistor.nodes {
            if let Some(slot) = self.slot_mut(node) {
                slot.incident.retain(|inc| inc.edge != id);
            }
        }
        Some(resistor)
    }

    /// Remove a node together with every edge touching it.
    ///
    /// Returns the removed node's name.
    pub fn remove_node(&mut self, id: NodeId) -> Option<String> {
        let incident: Vec<EdgeId> = self.incident(id).iter().map(|inc| inc.edge).collect();
        for edge in incident {
            self.remove_edge(edge);
        }
        let slot = self.nodes.get_mut(id.0)?.take()?;
        self.node_map.remove(&slot.name);
        Some(slot.name)
    }

    /// Find a node ID by name.
    pub fn find_node(&self, name: &str) -> Option<NodeId> {
        self.node_map.get(name).copied()
    }

    /// Get the name of a node.
    pub fn node_name(&self, id: NodeId) -> Option<&str> {
        self.slot(id).map(|slot| slot.name.as_str())
    }

    /// Whether the node slot is live.
    pub fn contains_node(&self, id: NodeId) -> bool {
        self.slot(id).is_some()
    }

    /// Live node ids in insertion order.
    pub fn node_ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes
            .iter()
            .enumerate()
            .filter(|(_, slot)| slot.is_some())
            .map(|(idx, _)| NodeId(idx))
    }

    /// Live edges in insertion order.
    pub fn edges(&self) -> impl Iterator<Item = (EdgeId, &Resistor)> + '_ {
        self.edges
            .iter()
            .enumerate()
            .filter_map(|(idx, slot)| slot.as_ref().map(|r| (EdgeId(idx), r)))
    }

    /// Look up an edge by id.
    pub fn edge(&self, id: EdgeId) -> Option<&Resistor> {
        self.edges.get(id.0).and_then(Option::as_ref)
    }

    /// The incidence list of a node (empty for a missing node).
    pub fn incident(&self, id: NodeId) -> &[Incidence] {
        self.slot(id).map(|slot| slot.incident.as_slice()).unwrap_or(&[])
    }

    /// All edges joining `a` and `b`, in the order they appear at `a`.
    pub fn edges_between(&self, a: NodeId, b: NodeId) -> Vec<EdgeId> {
        self.incident(a)
            .iter()
            .filter(|inc| inc.neighbor == b)
            .map(|inc| inc.edge)
            .collect()
    }

    /// Number of live nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.iter().filter(|slot| slot.is_some()).count()
    }

    /// Number of live edges.
    pub fn edge_count(&self) -> usize {
        self.edges.iter().filter(|slot| slot.is_some()).count()
    }

    /// Every node reachable from `start` by following edges (including `start`).
    pub fn reachable_from(&self, start: NodeId) -> HashSet<NodeId> {
        let mut seen = HashSet::new();
        if !self.contains_node(start) {
            return seen;
        }

        let mut queue = VecDeque::from([start]);
        seen.insert(start);
        while let Some(node) = queue.pop_front() {
            for inc in self.incident(node) {
                if seen.insert(inc.neighbor) {
                    queue.push_back(inc.neighbor);
                }
            }
        }
        seen
    }

    fn slot(&self, id: NodeId) -> Option<&NodeSlot> {
        self.nodes.get(id.0).and_then(Option::as_ref)
    }

    fn slot_mut(&mut self, id: NodeId) -> Option<&mut NodeSlot> {
        self.nodes.get_mut(id.0).and_then(Option::as_mut)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dsl;

    fn chain() -> Network {
        Network::from_edges([("A", "B", 2.0), ("B", "C", 3.0)])
    }

    #[test]
    fn test_from_edges() {
        let net = chain();
        assert_eq!(net.node_count(), 3);
        assert_eq!(net.edge_count(), 2);

        let a = net.find_node("A").unwrap();
        let b = net.find_node("B").unwrap();
        assert_eq!(a, NodeId(0));
        assert_eq!(net.incident(b).len(), 2);
        assert_eq!(net.node_name(b), Some("B"));

        let labels: Vec<&str> = net.edges().map(|(_, r)| r.label.as_str()).collect();
        assert_eq!(labels, vec!["R1", "R2"]);
    }

    #[test]
    fn test_from_netlist_keeps_declaration_order() {
        let netlist = dsl::parse(".source C\nR1 A B 2\nR2 B C 3").unwrap();
        let net = Network::from_netlist(&netlist);
        assert_eq!(net.find_node("C"), Some(NodeId(0)));
        assert_eq!(net.find_node("A"), Some(NodeId(1)));
        let (_, r1) = net.edges().next().unwrap();
        assert_eq!(r1.label, "R1");
        assert_eq!(r1.resistance, 2.0);
    }

    #[test]
    fn test_multi_edges() {
        let net = Network::from_edges([("A", "B", 2.0), ("A", "B", 3.0), ("B", "A", 6.0)]);
        let a = net.find_node("A").unwrap();
        let b = net.find_node("B").unwrap();
        assert_eq!(net.edges_between(a, b).len(), 3);
        assert_eq!(net.edges_between(b, a).len(), 3);
        assert_eq!(net.incident(a).len(), 3);
    }

    #[test]
    fn test_remove_edge_updates_incidence() {
        let mut net = chain();
        let a = net.find_node("A").unwrap();
        let b = net.find_node("B").unwrap();
        let removed = net.remove_edge(EdgeId(0)).unwrap();
        assert_eq!(removed.label, "R1");
        assert_eq!(net.incident(a).len(), 0);
        assert_eq!(net.incident(b).len(), 1);
        assert_eq!(net.edge_count(), 1);
        assert!(net.remove_edge(EdgeId(0)).is_none());
    }

    #[test]
    fn test_remove_node_frees_slot_without_shifting() {
        let mut net = chain();
        let b = net.find_node("B").unwrap();
        let c = net.find_node("C").unwrap();
        assert_eq!(net.remove_node(b).as_deref(), Some("B"));
        assert_eq!(net.node_count(), 2);
        assert_eq!(net.edge_count(), 0);
        assert_eq!(net.find_node("B"), None);
        assert_eq!(net.find_node("C"), Some(c));
        assert_eq!(net.node_ids().collect::<Vec<_>>(), vec![NodeId(0), NodeId(2)]);

        let d = net.add_node("D");
        assert_eq!(d, NodeId(3));
    }

    #[test]
    fn test_attach_takes_fresh_edge_id() {
        let mut net = chain();
        let a = net.find_node("A").unwrap();
        let c = net.find_node("C").unwrap();
        net.remove_edge(EdgeId(1));
        let id = net.attach("Rx".to_string(), a, c, 1.0);
        assert_eq!(id, EdgeId(2));
        assert_eq!(net.edges_between(c, a), vec![id]);
    }

    #[test]
    fn test_reachability() {
        let net = Network::from_edges([("A", "B", 1.0), ("C", "D", 1.0)]);
        let a = net.find_node("A").unwrap();
        let reach = net.reachable_from(a);
        assert_eq!(reach.len(), 2);
        assert!(reach.contains(&net.find_node("B").unwrap()));
        assert!(!reach.contains(&net.find_node("D").unwrap()));
    }
}
