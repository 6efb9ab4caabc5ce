//! Boundary validation of a network before reduction.

use crate::error::{OhmicError, Result};

use super::{Network, NodeId};

/// Look up a terminal by name.
pub fn resolve_terminal(network: &Network, name: &str) -> Result<NodeId> {
    network
        .find_node(name)
        .ok_or_else(|| OhmicError::invalid_input(format!("terminal node '{}' not found in network", name)))
}

/// Validate a network and its terminals for reduction.
///
/// Checks:
/// - The network has at least one resistor
/// - Every resistance is finite and strictly positive
/// - No resistor connects a node to itself
/// - Both terminals exist and are distinct
pub fn validate_network(network: &Network, source: NodeId, target: NodeId) -> Result<()> {
    if network.edge_count() == 0 {
        return Err(OhmicError::invalid_input("network has no resistors"));
    }

    for (_, resistor) in network.edges() {
        if !resistor.resistance.is_finite() || resistor.resistance <= 0.0 {
            return Err(OhmicError::invalid_input(format!(
                "resistor '{}' has non-positive or non-finite resistance {}",
                resistor.label, resistor.resistance
            )));
        }
        if resistor.is_self_loop() {
            let node = network.node_name(resistor.nodes[0]).unwrap_or_default();
            return Err(OhmicError::invalid_input(format!(
                "resistor '{}' connects node '{}' to itself",
                resistor.label, node
            )));
        }
    }

    // Every series merge is bounded by the total, so a finite total cannot overflow
    let total: f64 = network.edges().map(|(_, r)| r.resistance).sum();
    if !total.is_finite() {
        return Err(OhmicError::invalid_input(format!(
            "total network resistance overflows ({} Ω)",
            total
        )));
    }

    for (role, node) in [("source", source), ("target", target)] {
        if !network.contains_node(node) {
            return Err(OhmicError::invalid_input(format!(
                "{} terminal {} is not in the network",
                role, node
            )));
        }
    }

    if source == target {
        return Err(OhmicError::invalid_input("source and target must be different nodes"));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn terminals(net: &Network, a: &str, b: &str) -> (NodeId, NodeId) {
        (resolve_terminal(net, a).unwrap(), resolve_terminal(net, b).unwrap())
    }

    #[test]
    fn test_valid_network() {
        let net = Network::from_edges([("A", "B", 2.0), ("B", "C", 3.0)]);
        let (s, t) = terminals(&net, "A", "C");
        assert!(validate_network(&net, s, t).is_ok());
    }

    #[test]
    fn test_rejects_non_positive_resistance() {
        for bad in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let net = Network::from_edges([("A", "B", bad)]);
            let (s, t) = terminals(&net, "A", "B");
            let err = validate_network(&net, s, t).unwrap_err();
            assert!(matches!(err, OhmicError::InvalidInput { .. }), "accepted {}", bad);
        }
    }

    #[test]
    fn test_rejects_overflowing_total() {
        let net = Network::from_edges([("A", "B", 1.5e308), ("B", "C", 1.5e308)]);
        let (s, t) = terminals(&net, "A", "C");
        let err = validate_network(&net, s, t).unwrap_err();
        assert!(matches!(err, OhmicError::InvalidInput { ref message } if message.contains("overflows")));
    }

    #[test]
    fn test_rejects_self_loop() {
        let net = Network::from_edges([("A", "B", 1.0), ("B", "B", 1.0)]);
        let (s, t) = terminals(&net, "A", "B");
        assert!(matches!(
            validate_network(&net, s, t),
            Err(OhmicError::InvalidInput { .. })
        ));
    }

    #[test]
    fn test_rejects_same_terminals() {
        let net = Network::from_edges([("A", "B", 1.0)]);
        let (s, _) = terminals(&net, "A", "B");
        assert!(matches!(
            validate_network(&net, s, s),
            Err(OhmicError::InvalidInput { .. })
        ));
    }

    #[test]
    fn test_rejects_empty_network() {
        let mut net = Network::new();
        let a = net.add_node("A");
        let b = net.add_node("B");
        assert!(validate_network(&net, a, b).is_err());
    }

    #[test]
    fn test_missing_terminal_name() {
        let net = Network::from_edges([("A", "B", 1.0)]);
        let err = resolve_terminal(&net, "Z").unwrap_err();
        assert!(err.to_string().contains("'Z'"));
    }
}
