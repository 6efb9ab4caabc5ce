//! Error types for the Ohmic network reducer.
//!
//! This module provides a unified error type [`OhmicError`] that covers
//! all error conditions that can occur during netlist parsing, network
//! validation, and reduction.

use thiserror::Error;

/// Result type alias using [`OhmicError`].
pub type Result<T> = std::result::Result<T, OhmicError>;

/// Unified error type for all Ohmic operations.
#[derive(Error, Debug)]
pub enum OhmicError {
    // ============ Netlist Parsing Errors ============
    /// Error during lexical analysis
    #[error("Lexer error at line {line}, column {column}: {message}")]
    LexerError {
        line: usize,
        column: usize,
        message: String,
    },

    /// Error during parsing
    #[error("Parse error at line {line}: {message}")]
    ParseError { line: usize, message: String },

    /// Invalid component definition
    #[error("Invalid component '{name}' at line {line}: {message}")]
    InvalidComponent {
        name: String,
        line: usize,
        message: String,
    },

    /// Unknown component type
    #[error("Unknown component type '{component_type}' at line {line} (only resistors are supported)")]
    UnknownComponentType { component_type: String, line: usize },

    /// Duplicate component name
    #[error("Duplicate component name '{name}'")]
    DuplicateComponent { name: String },

    /// Missing source terminal
    #[error("No source terminal specified (use '.source <node>')")]
    MissingSource,

    /// Missing target terminal
    #[error("No target terminal specified (use '.target <node>')")]
    MissingTarget,

    // ============ Reduction Errors ============
    /// The network or terminals violate the reducer's input contract
    #[error("Invalid input: {message}")]
    InvalidInput { message: String },

    /// No series or parallel rewrite applies but more than two nodes remain
    #[error(
        "Irreducible topology: {remaining_nodes} nodes and {remaining_edges} edges remain \
         with no series or parallel reduction available (a general nodal solver is required)"
    )]
    IrreducibleTopology {
        remaining_nodes: usize,
        remaining_edges: usize,
    },

    /// The terminals are not connected, or reduction ended on the wrong pair of nodes
    #[error("Disconnected or malformed network: {message}")]
    DisconnectedOrMalformed { message: String },

    // ============ I/O Errors ============
    /// Error reading netlist file
    #[error("Failed to read netlist file '{path}': {source}")]
    FileReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl OhmicError {
    /// Create a lexer error
    pub fn lexer(line: usize, column: usize, message: impl Into<String>) -> Self {
        Self::LexerError {
            line,
            column,
            message: message.into(),
        }
    }

    /// Create a parse error
    pub fn parse(line: usize, message: impl Into<String>) -> Self {
        Self::ParseError {
            line,
            message: message.into(),
        }
    }

    /// Create an invalid component error
    pub fn invalid_component(name: impl Into<String>, line: usize, message: impl Into<String>) -> Self {
        Self::InvalidComponent {
            name: name.into(),
            line,
            message: message.into(),
        }
    }

    /// Create an invalid input error
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }

    /// Create a disconnected-or-malformed error
    pub fn disconnected(message: impl Into<String>) -> Self {
        Self::DisconnectedOrMalformed {
            message: message.into(),
        }
    }

    /// Whether this error is one of the two reduction outcomes that no
    /// amount of retrying will change.
    pub fn is_terminal_reduction_failure(&self) -> bool {
        matches!(
            self,
            Self::IrreducibleTopology { .. } | Self::DisconnectedOrMalformed { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reduction_failures_are_terminal() {
        let irreducible = OhmicError::IrreducibleTopology {
            remaining_nodes: 4,
            remaining_edges: 5,
        };
        assert!(irreducible.is_terminal_reduction_failure());
        assert!(OhmicError::disconnected("terminals apart").is_terminal_reduction_failure());
        assert!(!OhmicError::invalid_input("negative resistance").is_terminal_reduction_failure());
    }

    #[test]
    fn test_error_messages() {
        let err = OhmicError::parse(3, "expected node name");
        assert_eq!(err.to_string(), "Parse error at line 3: expected node name");

        let err = OhmicError::invalid_input("terminal node 'X' not found");
        assert_eq!(err.to_string(), "Invalid input: terminal node 'X' not found");
    }
}
