//! # Ohmic Core
//!
//! Equivalent resistance of series-parallel resistor networks.
//!
//! This library provides:
//! - A small netlist language for describing resistor networks
//! - An arena-backed multigraph representation of the network
//! - A series/parallel graph reducer that collapses the network to a single
//!   resistance between two terminals, with a step-by-step trace
//!
//! ## Architecture
//!
//! - [`dsl`] - Parser for the netlist language
//! - [`network`] - Network graph representation and validation
//! - [`reduce`] - Combination rules and the graph reducer
//! - [`report`] - Text rendering of results
//!
//! ## Usage
//!
//! ### Native CLI
//!
//! ```bash
//! ohmic ladder.net --steps
//! echo "R1 A B 2\nR2 B C 3" | ohmic - --source A --target C
//! ```
//!
//! ### Library
//!
//! ```
//! use ohmic_core::reduce::equivalent_resistance;
//!
//! let ohms = equivalent_resistance([("A", "B", 2.0), ("B", "C", 3.0), ("A", "C", 4.0)], "A", "C")?;
//! assert!((ohms - 20.0 / 9.0).abs() < 1e-9);
//! # Ok::<(), ohmic_core::OhmicError>(())
//! ```
//!
//! ## Reduction Method
//!
//! Until only the two terminals remain:
//!
//! 1. Merge any group of resistors joining the same pair of nodes (parallel)
//! 2. Otherwise remove an internal node that joins exactly two resistors (series)
//! 3. Otherwise fail: the network needs a general nodal solver
//!
//! Networks that are not series-parallel between the chosen terminals, such as
//! a Wheatstone bridge, are reported as
//! [`OhmicError::IrreducibleTopology`].

pub mod dsl;
pub mod error;
pub mod network;
pub mod reduce;
pub mod report;

// Re-export main types for convenience
pub use error::{OhmicError, Result};
pub use network::Network;
pub use reduce::{GraphReducer, Reduction};

// WASM bindings
#[cfg(feature = "wasm")]
mod wasm;

#[cfg(feature = "wasm")]
pub use wasm::WasmReduction;
