//! WASM bindings for Ohmic Core.
//!
//! ## Usage (JavaScript)
//!
//! ```javascript
//! import init, { WasmReduction, equivalent_resistance } from 'ohmic_core';
//!
//! await init();
//!
//! const netlist = `
//!   .source A
//!   .target C
//!   R1 A B 2
//!   R2 B C 3
//!   R3 A C 4
//! `;
//!
//! const ohms = equivalent_resistance(netlist);   // 2.2222...
//! const reduction = new WasmReduction(netlist);
//! console.log(reduction.expression, reduction.steps());
//! ```

use wasm_bindgen::prelude::*;

use crate::dsl;
use crate::error::OhmicError;
use crate::network::{resolve_terminal, Network};
use crate::reduce::{GraphReducer, Reduction};

/// Initialize panic hook for better error messages in browser console.
#[wasm_bindgen(start)]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}

fn to_js(err: OhmicError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn reduce_netlist(netlist_dsl: &str) -> crate::Result<Reduction> {
    let netlist = dsl::parse(netlist_dsl)?;
    let network = Network::from_netlist(&netlist);
    let source = netlist.source.as_deref().ok_or(OhmicError::MissingSource)?;
    let target = netlist.target.as_deref().ok_or(OhmicError::MissingTarget)?;
    let source = resolve_terminal(&network, source)?;
    let target = resolve_terminal(&network, target)?;
    GraphReducer::new(&network, source, target)?.reduce()
}

/// Equivalent resistance, in ohms, of a netlist with `.source` and `.target` directives.
#[wasm_bindgen]
pub fn equivalent_resistance(netlist_dsl: &str) -> Result<f64, JsValue> {
    reduce_netlist(netlist_dsl)
        .map(|reduction| reduction.resistance)
        .map_err(to_js)
}

/// A completed reduction, exposed to JavaScript.
#[wasm_bindgen]
pub struct WasmReduction {
    reduction: Reduction,
}

#[wasm_bindgen]
impl WasmReduction {
    /// Reduce a netlist.
    ///
    /// # Returns
    /// The reduction, or an error string if the netlist is invalid or the
    /// network is not series-parallel.
    #[wasm_bindgen(constructor)]
    pub fn new(netlist_dsl: &str) -> Result<WasmReduction, JsValue> {
        let reduction = reduce_netlist(netlist_dsl).map_err(to_js)?;
        Ok(WasmReduction { reduction })
    }

    /// Equivalent resistance in ohms.
    #[wasm_bindgen(getter)]
    pub fn resistance(&self) -> f64 {
        self.reduction.resistance
    }

    /// The network as a series/parallel expression of resistor names.
    #[wasm_bindgen(getter)]
    pub fn expression(&self) -> String {
        self.reduction.expression.clone()
    }

    /// One human-readable line per reduction step.
    #[wasm_bindgen]
    pub fn steps(&self) -> Vec<String> {
        self.reduction.steps.iter().map(|step| step.to_string()).collect()
    }
}

/// Get the library version.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
