//! Series/parallel reduction of resistor networks.
//!
//! ## Method
//!
//! Two rewrites are applied to a private copy of the network until only
//! the two terminals remain:
//!
//! 1. **Parallel**: all resistors joining the same pair of nodes become one
//!    resistor of `1 / Σ(1/Rᵢ)`.
//! 2. **Series**: an internal node with exactly one resistor to each of two
//!    distinct neighbours is removed, and its neighbours are joined by one
//!    resistor of `R₁ + R₂`.
//!
//! Parallel merges are always tried first. If neither rewrite applies while
//! more than two nodes remain, the network is not series-parallel with
//! respect to the chosen terminals (a Wheatstone bridge is the classic
//! example) and reduction fails with
//! [`OhmicError::IrreducibleTopology`](crate::error::OhmicError::IrreducibleTopology).

mod combine;
mod reducer;

pub use combine::{parallel, series};
pub use reducer::{equivalent_resistance, GraphReducer, Reduction, ReductionStep};

/// Configuration for the reducer.
#[derive(Debug, Clone)]
pub struct ReducerConfig {
    /// Whether each applied rewrite is kept in [`Reduction::steps`].
    pub record_steps: bool,
}

impl Default for ReducerConfig {
    fn default() -> Self {
        Self { record_steps: true }
    }
}

impl ReducerConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable step recording.
    pub fn with_record_steps(mut self, record_steps: bool) -> Self {
        self.record_steps = record_steps;
        self
    }
}
