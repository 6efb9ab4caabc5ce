//! Text rendering of reduction results.

use std::fmt::Write;

use crate::reduce::Reduction;

/// Default number of decimal places shown.
pub const DEFAULT_PRECISION: usize = 6;

const PREFIXES: [(f64, &str); 6] = [
    (1e9, "G"),
    (1e6, "M"),
    (1e3, "k"),
    (1.0, ""),
    (1e-3, "m"),
    (1e-6, "µ"),
];

/// Format a resistance with an SI prefix, e.g. `2.2 kΩ` or `470 mΩ`.
///
/// `precision` is the maximum number of decimal places; trailing zeros are
/// dropped.
pub fn format_ohms(ohms: f64, precision: usize) -> String {
    if ohms.is_infinite() {
        return "∞ Ω".to_string();
    }
    if ohms.is_nan() {
        return "NaN Ω".to_string();
    }
    if ohms == 0.0 {
        return "0 Ω".to_string();
    }

    let magnitude = ohms.abs();
    let (scale, prefix) = PREFIXES
        .iter()
        .copied()
        .find(|&(scale, _)| magnitude >= scale)
        .unwrap_or(PREFIXES[PREFIXES.len() - 1]);

    format!("{} {}Ω", trim_decimal(format!("{:.*}", precision, ohms / scale)), prefix)
}

fn trim_decimal(text: String) -> String {
    if text.contains('.') {
        text.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        text
    }
}

/// Rendering options for [`render`].
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Decimal places for resistance values
    pub precision: usize,
    /// Whether to list every reduction step
    pub show_steps: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            precision: DEFAULT_PRECISION,
            show_steps: false,
        }
    }
}

/// Render a reduction as a short human-readable report.
pub fn render(reduction: &Reduction, options: &RenderOptions) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "R({}, {}) = {}",
        reduction.source,
        reduction.target,
        format_ohms(reduction.resistance, options.precision)
    );
    let _ = writeln!(out, "  = {}", reduction.expression);

    if options.show_steps && !reduction.steps.is_empty() {
        let _ = writeln!(out, "steps:");
        for (idx, step) in reduction.steps.iter().enumerate() {
            let _ = writeln!(out, "  {:>2}. {}", idx + 1, step);
        }
    }
    out
}
