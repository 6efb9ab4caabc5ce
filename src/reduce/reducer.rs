//! Series/parallel graph reduction.

use std::fmt;

use tracing::{debug, info, trace};

use super::combine::{parallel, parallel_label, series, series_label};
use super::ReducerConfig;
use crate::error::{OhmicError, Result};
use crate::network::{resolve_terminal, validate_network, EdgeId, Incidence, Network, NodeId};
use crate::report::format_ohms;

/// One rewrite applied during reduction.
#[derive(Debug, Clone, PartialEq)]
pub enum ReductionStep {
    /// Several resistors between the same pair of nodes became one.
    Parallel {
        nodes: [String; 2],
        merged: Vec<f64>,
        resistance: f64,
    },
    /// A two-edge internal node was removed and its edges joined.
    Series {
        removed: String,
        nodes: [String; 2],
        merged: [f64; 2],
        resistance: f64,
    },
}

impl ReductionStep {
    /// Resistance of the edge produced by this step.
    pub fn resistance(&self) -> f64 {
        match self {
            Self::Parallel { resistance, .. } | Self::Series { resistance, .. } => *resistance,
        }
    }
}

impl fmt::Display for ReductionStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parallel {
                nodes,
                merged,
                resistance,
            } => {
                let terms: Vec<String> = merged.iter().map(|r| format_ohms(*r, 6)).collect();
                write!(
                    f,
                    "parallel {}-{}: {} = {}",
                    nodes[0],
                    nodes[1],
                    terms.join(" || "),
                    format_ohms(*resistance, 6)
                )
            }
            Self::Series {
                removed,
                nodes,
                merged,
                resistance,
            } => write!(
                f,
                "series   {}-{}-{}: {} + {} = {}",
                nodes[0],
                removed,
                nodes[1],
                format_ohms(merged[0], 6),
                format_ohms(merged[1], 6),
                format_ohms(*resistance, 6)
            ),
        }
    }
}

/// Outcome of a successful reduction.
#[derive(Debug, Clone, PartialEq)]
pub struct Reduction {
    pub source: String,
    pub target: String,
    /// Equivalent resistance between the terminals, in ohms
    pub resistance: f64,
    /// The network written as a series/parallel expression of its resistor labels
    pub expression: String,
    /// Rewrites in the order they were applied (empty if recording is off)
    pub steps: Vec<ReductionStep>,
}

/// Collapses a series-parallel resistor network into a single equivalent
/// resistance between two terminals.
///
/// The reducer works on its own copy of the network; the caller's network
/// is never modified.
#[derive(Debug, Clone)]
pub struct GraphReducer {
    network: Network,
    source: NodeId,
    target: NodeId,
    config: ReducerConfig,
    steps: Vec<ReductionStep>,
}

impl GraphReducer {
    /// Create a reducer with default configuration.
    pub fn new(network: &Network, source: NodeId, target: NodeId) -> Result<Self> {
        Self::with_config(network, source, target, ReducerConfig::default())
    }

    /// Create a reducer, naming the terminals by node name.
    pub fn by_name(network: &Network, source: &str, target: &str) -> Result<Self> {
        let source = resolve_terminal(network, source)?;
        let target = resolve_terminal(network, target)?;
        Self::new(network, source, target)
    }

    /// Create a reducer with custom configuration.
    ///
    /// The network is validated before it is copied.
    pub fn with_config(
        network: &Network,
        source: NodeId,
        target: NodeId,
        config: ReducerConfig,
    ) -> Result<Self> {
        validate_network(network, source, target)?;
        Ok(Self {
            network: network.clone(),
            source,
            target,
            config,
            steps: Vec::new(),
        })
    }

    /// The working copy of the network in its current state.
    pub fn network(&self) -> &Network {
        &self.network
    }

    /// Steps applied so far.
    pub fn steps(&self) -> &[ReductionStep] {
        &self.steps
    }

    fn name(&self, node: NodeId) -> String {
        self.network.node_name(node).unwrap_or_default().to_string()
    }

    fn record(&mut self, step: ReductionStep) {
        if self.config.record_steps {
            self.steps.push(step);
        }
    }

    /// First node pair, scanning from the lower node id, joined by more
    /// than one resistor.
    fn find_parallel_group(&self) -> Option<(NodeId, NodeId, Vec<EdgeId>)> {
        for u in self.network.node_ids() {
            for inc in self.network.incident(u) {
                if inc.neighbor <= u {
                    continue;
                }
                let group = self.network.edges_between(u, inc.neighbor);
                if group.len() > 1 {
                    return Some((u, inc.neighbor, group));
                }
            }
        }
        None
    }

    /// Replace one group of parallel resistors with their equivalent.
    ///
    /// Returns `true` if a merge happened. At most one node pair is merged
    /// per call.
    pub fn parallel_merge(&mut self) -> bool {
        let Some((u, v, group)) = self.find_parallel_group() else {
            trace!("no parallel group found");
            return false;
        };

        let removed: Vec<_> = group
            .iter()
            .filter_map(|&id| self.network.remove_edge(id))
            .collect();
        let merged: Vec<f64> = removed.iter().map(|r| r.resistance).collect();
        let resistance = parallel(&merged);
        let label = parallel_label(removed.iter().map(|r| r.label.as_str()));

        let nodes = [self.name(u), self.name(v)];
        debug!(
            a = %nodes[0],
            b = %nodes[1],
            count = merged.len(),
            resistance,
            "parallel merge"
        );

        self.network.attach(label, u, v, resistance);
        self.record(ReductionStep::Parallel {
            nodes,
            merged,
            resistance,
        });
        true
    }

    /// First non-terminal node with exactly one resistor to each of two
    /// distinct neighbours.
    fn find_series_node(&self) -> Option<(NodeId, [Incidence; 2])> {
        self.network
            .node_ids()
            .filter(|&node| node != self.source && node != self.target)
            .find_map(|node| match self.network.incident(node) {
                [first, second] if first.neighbor != second.neighbor => Some((node, [*first, *second])),
                _ => None,
            })
    }

    /// Remove one internal node sitting between two resistors in series,
    /// joining its neighbours with a single resistor.
    ///
    /// Returns `true` if a merge happened. At most one node is removed per
    /// call; the terminals are never removed.
    pub fn series_merge(&mut self) -> bool {
        let Some((node, [first, second])) = self.find_series_node() else {
            trace!("no series node found");
            return false;
        };

        let removed_name = self.name(node);
        let nodes = [self.name(first.neighbor), self.name(second.neighbor)];
        let (Some(r1), Some(r2)) = (
            self.network.remove_edge(first.edge),
            self.network.remove_edge(second.edge),
        ) else {
            return false;
        };
        self.network.remove_node(node);

        let merged = [r1.resistance, r2.resistance];
        let resistance = series(&merged);
        let label = series_label([r1.label.as_str(), r2.label.as_str()]);

        debug!(
            removed = %removed_name,
            a = %nodes[0],
            b = %nodes[1],
            resistance,
            "series merge"
        );

        self.network.attach(label, first.neighbor, second.neighbor, resistance);
        self.record(ReductionStep::Series {
            removed: removed_name,
            nodes,
            merged,
            resistance,
        });
        true
    }

    /// Fail unless every node can reach the source.
    fn check_connected(&self) -> Result<()> {
        let reachable = self.network.reachable_from(self.source);
        if !reachable.contains(&self.target) {
            return Err(OhmicError::disconnected(format!(
                "no path from '{}' to '{}'",
                self.name(self.source),
                self.name(self.target)
            )));
        }

        let stray: Vec<String> = self
            .network
            .node_ids()
            .filter(|node| !reachable.contains(node))
            .map(|node| self.name(node))
            .collect();
        if !stray.is_empty() {
            return Err(OhmicError::disconnected(format!(
                "node(s) {} are not connected to the terminals",
                stray.join(", ")
            )));
        }

        Ok(())
    }

    /// Run merges until only the two terminals remain, then read off the
    /// equivalent resistance.
    ///
    /// Parallel merges are always preferred over series merges. Each merge
    /// removes at least one edge or node, so the loop is bounded by the
    /// initial size of the network.
    pub fn reduce(mut self) -> Result<Reduction> {
        self.check_connected()?;

        while self.network.node_count() > 2 {
            if self.parallel_merge() || self.series_merge() {
                continue;
            }
            let err = OhmicError::IrreducibleTopology {
                remaining_nodes: self.network.node_count(),
                remaining_edges: self.network.edge_count(),
            };
            debug!(%err, "reduction stuck");
            return Err(err);
        }

        let remaining: Vec<NodeId> = self.network.node_ids().collect();
        if remaining != [self.source, self.target] && remaining != [self.target, self.source] {
            let names: Vec<String> = remaining.iter().map(|&n| self.name(n)).collect();
            return Err(OhmicError::disconnected(format!(
                "reduction ended on nodes [{}] instead of the terminals",
                names.join(", ")
            )));
        }

        // Collapse whatever resistors directly join the terminals
        self.parallel_merge();

        let direct = self.network.edges_between(self.source, self.target);
        let (resistances, labels): (Vec<f64>, Vec<&str>) = direct
            .iter()
            .filter_map(|&id| self.network.edge(id))
            .map(|r| (r.resistance, r.label.as_str()))
            .unzip();
        if resistances.is_empty() {
            return Err(OhmicError::disconnected("no resistor joins the terminals"));
        }
        let resistance = parallel(&resistances);
        let expression = parallel_label(labels);

        let source = self.name(self.source);
        let target = self.name(self.target);
        info!(
            source = %source,
            target = %target,
            resistance,
            steps = self.steps.len(),
            "network reduced"
        );

        Ok(Reduction {
            source,
            target,
            resistance,
            expression,
            steps: self.steps,
        })
    }
}

/// Equivalent resistance of a literal edge list between two named terminals.
pub fn equivalent_resistance<I, N>(edges: I, source: &str, target: &str) -> Result<f64>
where
    I: IntoIterator<Item = (N, N, f64)>,
    N: Into<String>,
{
    let network = Network::from_edges(edges);
    let reduction = GraphReducer::by_name(&network, source, target)?.reduce()?;
    Ok(reduction.resistance)
}
