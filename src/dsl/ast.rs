//! Syntax tree types for the netlist language.

/// A parsed netlist: resistors, nodes, and the two measurement terminals.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Netlist {
    /// All resistor instances, in file order
    pub resistors: Vec<ResistorDef>,
    /// Node names in order of first appearance (declared or referenced)
    pub nodes: Vec<String>,
    /// Terminal named by `.source`
    pub source: Option<String>,
    /// Terminal named by `.target`
    pub target: Option<String>,
}

impl Netlist {
    /// Create a new empty netlist.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a node name, keeping first-appearance order.
    pub fn declare_node(&mut self, name: &str) {
        if !self.nodes.iter().any(|n| n == name) {
            self.nodes.push(name.to_string());
        }
    }
}

/// A resistor line from the netlist.
#[derive(Debug, Clone, PartialEq)]
pub struct ResistorDef {
    /// Unique component name (`R1`, `Rload`, ...)
    pub name: String,
    /// The two node names it connects
    pub nodes: [String; 2],
    /// Resistance in ohms
    pub resistance: f64,
    /// Source line number for error reporting
    pub line: usize,
}
