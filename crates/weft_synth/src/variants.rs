//! Variant combination generation
//!
//! Enumerates a bounded subset of a component's variant space. The
//! generator is iterative with the cap as a loop bound, and the truncation
//! policy is deliberate rather than an artifact of traversal order: the
//! default combination comes first, then every combination that differs
//! from the default in exactly one axis, then the remaining Cartesian
//! product in lexicographic order. Near-default variants are the ones
//! worth keeping when the product is large.

use rustc_hash::FxHashSet;

use weft_core::VariantAxis;

/// One full assignment of a value to every axis, in axis declaration order
pub type Combination = Vec<(String, String)>;

/// Generate up to `cap` combinations across `axes`.
///
/// The default combination (from `default_variant`, falling back to each
/// axis's first value for unlisted axes) is always the first entry and
/// appears exactly once. An empty axis set, or any axis with no values,
/// yields an empty result; the caller synthesizes the no-variant case
/// directly.
pub fn generate_combinations(
    axes: &[VariantAxis],
    default_variant: &std::collections::BTreeMap<String, String>,
    cap: usize,
) -> Vec<Combination> {
    if cap == 0 || axes.is_empty() || axes.iter().any(|a| a.values.is_empty()) {
        return Vec::new();
    }

    let default: Combination = axes
        .iter()
        .map(|axis| {
            let value = default_variant
                .get(&axis.name)
                .cloned()
                .unwrap_or_else(|| axis.values[0].clone());
            (axis.name.clone(), value)
        })
        .collect();

    let mut out: Vec<Combination> = Vec::new();
    let mut seen: FxHashSet<Combination> = FxHashSet::default();
    seen.insert(default.clone());
    out.push(default.clone());

    // Single-axis deviations from the default
    for (i, axis) in axes.iter().enumerate() {
        for value in &axis.values {
            if out.len() >= cap {
                return out;
            }
            if *value == default[i].1 {
                continue;
            }
            let mut combo = default.clone();
            combo[i].1 = value.clone();
            if seen.insert(combo.clone()) {
                out.push(combo);
            }
        }
    }

    // Remaining product, lexicographic in declaration order, last axis
    // fastest
    let mut idx = vec![0usize; axes.len()];
    loop {
        if out.len() >= cap {
            return out;
        }
        let combo: Combination = axes
            .iter()
            .zip(&idx)
            .map(|(axis, &i)| (axis.name.clone(), axis.values[i].clone()))
            .collect();
        if seen.insert(combo.clone()) {
            out.push(combo);
        }

        // Odometer increment; done once every axis rolls over
        let mut pos = axes.len();
        loop {
            if pos == 0 {
                return out;
            }
            pos -= 1;
            idx[pos] += 1;
            if idx[pos] < axes[pos].values.len() {
                break;
            }
            idx[pos] = 0;
        }
    }
}
