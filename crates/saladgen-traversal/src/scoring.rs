//! Recency-weighted aggregate strength.
//!
//! A candidate is scored against the current composition `i_1..i_n`
//! (selection order, `i_1` earliest). Position weights start at `1/n` and
//! double per position, so the most recent selection dominates:
//!
//! ```text
//! w_1 = 1/n,  w_{j+1} = 2 * w_j
//! raw = Σ_j weight_between(i_j, c) * w_j
//! score = raw * w_n
//! ```
//!
//! The aggregate is scaled once more by the final position weight. Within
//! a round that factor is identical for every candidate, so it never
//! changes the ranking order of a round.

use saladgen_core::model::Ingredient;
use saladgen_graph::WeightedGraph;

/// The geometric position-weight sequence for a composition of length `n`.
/// Empty for `n == 0`.
pub fn position_weights(n: usize) -> Vec<f64> {
    let mut weights = Vec::with_capacity(n);
    if n == 0 {
        return weights;
    }
    let mut w = 1.0 / n as f64;
    for _ in 0..n {
        weights.push(w);
        w *= 2.0;
    }
    weights
}

/// Score `candidate` against the composition so far.
///
/// An empty composition scores every candidate 0. A composition member
/// with no edge to the candidate contributes nothing to the sum.
pub fn score(graph: &WeightedGraph, composition: &[&Ingredient], candidate: &Ingredient) -> f64 {
    let n = composition.len();
    if n == 0 {
        return 0.0;
    }

    let weights = position_weights(n);
    let mut raw = 0.0;
    for (selected, w) in composition.iter().zip(&weights) {
        let strength = graph
            .weight_between(&selected.name, &candidate.name)
            .map(f64::from)
            .unwrap_or(0.0);
        raw += strength * w;
    }

    raw * weights[n - 1]
}
