//! Resistor network representation and validation.
//!
//! A [`Network`] is an undirected multigraph stored as two arenas: node
//! slots carrying an incidence list, and resistor slots keyed by
//! [`EdgeId`]. Removing a node or edge frees its slot instead of shifting
//! the arena, so ids held elsewhere stay valid while the graph is rewritten.

mod graph;
mod types;
mod validate;

pub use graph::Network;
pub use types::*;
pub use validate::{resolve_terminal, validate_network};
