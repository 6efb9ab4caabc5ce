//! Series and parallel combination rules.

/// Equivalent resistance of resistors in parallel: `1 / Σ(1/Rᵢ)`.
///
/// An empty group is an open circuit (`+∞`). Any zero-ohm member shorts
/// the whole group to zero, whatever the other members are.
///
/// Computed as `R_min / Σ(R_min/Rᵢ)` so that no reciprocal overflows: each
/// ratio is at most 1, so positive finite members always give a positive
/// finite result no larger than `R_min`.
pub fn parallel(resistances: &[f64]) -> f64 {
    if resistances.is_empty() {
        return f64::INFINITY;
    }
    if resistances.iter().any(|&r| r == 0.0) {
        return 0.0;
    }
    let smallest = resistances.iter().copied().fold(f64::INFINITY, f64::min);
    let relative: f64 = resistances.iter().map(|r| smallest / r).sum();
    smallest / relative
}

/// Equivalent resistance of resistors in series: `Σ Rᵢ`.
pub fn series(resistances: &[f64]) -> f64 {
    resistances.iter().sum()
}

/// Operator joining the outermost terms of a composed label, if any.
fn top_level_operator(label: &str) -> Option<&'static str> {
    let mut depth = 0usize;
    for (idx, ch) in label.char_indices() {
        match ch {
            '(' => depth += 1,
            ')' => depth = depth.saturating_sub(1),
            ' ' if depth == 0 => {
                let rest = &label[idx..];
                if rest.starts_with(" || ") {
                    return Some(" || ");
                }
                if rest.starts_with(" + ") {
                    return Some(" + ");
                }
            }
            _ => {}
        }
    }
    None
}

/// Join labels with `op`, parenthesizing terms built from the other operator.
pub(crate) fn compose_labels<'a>(labels: impl IntoIterator<Item = &'a str>, op: &str) -> String {
    labels
        .into_iter()
        .map(|label| match top_level_operator(label) {
            Some(inner) if inner != op => format!("({})", label),
            _ => label.to_string(),
        })
        .collect::<Vec<_>>()
        .join(op)
}

/// Label for a parallel merge.
pub(crate) fn parallel_label<'a>(labels: impl IntoIterator<Item = &'a str>) -> String {
    compose_labels(labels, " || ")
}

/// Label for a series merge.
pub(crate) fn series_label<'a>(labels: impl IntoIterator<Item = &'a str>) -> String {
    compose_labels(labels, " + ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_parallel() {
        assert_relative_eq!(parallel(&[2.0, 3.0]), 1.2, epsilon = 1e-12);
        assert_relative_eq!(parallel(&[10.0, 10.0]), 5.0, epsilon = 1e-12);
        assert_relative_eq!(parallel(&[7.0]), 7.0, epsilon = 1e-12);
    }

    #[test]
    fn test_parallel_conventions() {
        assert_eq!(parallel(&[]), f64::INFINITY);
        // A short dominates the group, including very small positive members
        assert_eq!(parallel(&[0.0, 1e-9, 1e9]), 0.0);
    }

    #[test]
    fn test_parallel_extreme_magnitudes() {
        let tiny = parallel(&[1e-320, 1e-320]);
        assert!(tiny > 0.0 && tiny <= 1e-320);

        let huge = parallel(&[1.5e308, 1.5e308]);
        assert!(huge.is_finite());
        assert_relative_eq!(huge, 0.75e308, max_relative = 1e-12);

        assert_relative_eq!(parallel(&[1e-300, 1e300]), 1e-300, max_relative = 1e-12);
    }

    #[test]
    fn test_series() {
        assert_relative_eq!(series(&[2.0, 3.0, 4.5]), 9.5, epsilon = 1e-12);
        assert_eq!(series(&[]), 0.0);
    }

    #[test]
    fn test_labels() {
        assert_eq!(series_label(["R1", "R2"]), "R1 + R2");
        assert_eq!(parallel_label(["R1 + R2", "R3"]), "(R1 + R2) || R3");
        assert_eq!(series_label(["R1 + R2", "R3"]), "R1 + R2 + R3");
        assert_eq!(series_label(["(R1 + R2) || R3", "R4"]), "((R1 + R2) || R3) + R4");
        assert_eq!(parallel_label(["R1 + (R2 || R3)", "R4 || R5"]), "(R1 + (R2 || R3)) || R4 || R5");
    }
}
