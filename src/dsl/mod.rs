//! Netlist language for describing resistor networks.
//!
//! A small SPICE-flavoured, line-oriented format. Only resistors exist;
//! the two terminals between which the equivalent resistance is measured
//! are named with directives.
//!
//! # Grammar Overview
//!
//! ```text
//! netlist     = { line }
//! line        = comment | directive | resistor | empty
//! comment     = ('#' | ';') { any_char }
//! directive   = '.' ("source" | "target") node
//!             | '.node' node { node }
//! resistor    = name node node value
//!
//! name        = ('R' | 'r') { letter | digit | '_' }
//! node        = identifier | digit+
//! value       = number [unit_suffix] ['Ω']
//! unit_suffix = 'p' | 'n' | 'u' | 'm' | 'k' | 'K' | 'M' | 'G'
//! ```
//!
//! # Example
//!
//! ```text
//! # Two resistors in series, shunted by a third
//! .source A
//! .target C
//!
//! R1 A B 2
//! R2 B C 3
//! R3 A C 4
//! ```

mod ast;
mod lexer;
mod parser;

pub use ast::*;
pub use lexer::{parse_value, Lexer, Token, TokenKind};
pub use parser::Parser;

use crate::error::Result;

/// Parse a netlist string.
pub fn parse(input: &str) -> Result<Netlist> {
    let lexer = Lexer::new(input);
    let mut parser = Parser::new(lexer)?;
    parser.parse()
}

/// Parse a netlist file.
#[cfg(feature = "cli")]
pub fn parse_file(path: &std::path::Path) -> Result<Netlist> {
    let content = std::fs::read_to_string(path).map_err(|e| crate::error::OhmicError::FileReadError {
        path: path.display().to_string(),
        source: e,
    })?;
    parse(&content)
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::parse;
    use crate::error::OhmicError;
    use crate::network::{resolve_terminal, Network};
    use crate::reduce::{GraphReducer, Reduction};

    fn reduce_source(input: &str) -> crate::Result<Reduction> {
        let netlist = parse(input)?;
        let network = Network::from_netlist(&netlist);
        let source = resolve_terminal(&network, netlist.source.as_deref().unwrap_or_default())?;
        let target = resolve_terminal(&network, netlist.target.as_deref().unwrap_or_default())?;
        GraphReducer::new(&network, source, target)?.reduce()
    }

    #[test]
    fn test_series_shunt_netlist() {
        let reduction = reduce_source(include_str!("../../netlists/series_shunt.net")).unwrap();
        assert_relative_eq!(reduction.resistance, 20.0 / 9.0, epsilon = 1e-9);
    }

    #[test]
    fn test_ladder_netlist() {
        let reduction = reduce_source(include_str!("../../netlists/ladder.net")).unwrap();
        assert_relative_eq!(reduction.resistance, 2000.0, epsilon = 1e-9);
        assert_eq!(reduction.target, "0");
        assert_eq!(reduction.steps.len(), 5);
    }

    #[test]
    fn test_bridge_netlist() {
        let err = reduce_source(include_str!("../../netlists/bridge.net")).unwrap_err();
        assert!(matches!(err, OhmicError::IrreducibleTopology { .. }));
    }
}
