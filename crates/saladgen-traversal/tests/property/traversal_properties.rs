//! Property tests for the traversal engine.

use proptest::prelude::*;

use saladgen_core::config::CompositionLimits;
use saladgen_core::model::{Ingredient, IngredientKind, Mapping};
use saladgen_graph::WeightedGraph;
use saladgen_traversal::Traverser;

fn kind_of(tag: usize) -> IngredientKind {
    IngredientKind::ALL[tag % IngredientKind::ALL.len()]
}

fn ingredient(i: usize, kind_tag: usize) -> Ingredient {
    Ingredient::new(
        format!("ing{i}"),
        "test",
        i as i64,
        kind_of(kind_tag),
        Vec::new(),
    )
}

/// Build mappings for a random graph: `kinds[i]` tags node `i`, edges are
/// arbitrary pairs with nonnegative weights (self-pairs skipped).
fn build_mappings(kinds: &[usize], edges: &[(usize, usize, i64)]) -> Vec<Mapping> {
    let n = kinds.len();
    let mut mappings = Vec::new();
    for &(a, b, weight) in edges {
        let (a, b) = (a % n, b % n);
        if a == b {
            continue;
        }
        mappings.push((ingredient(a, kinds[a]), ingredient(b, kinds[b]), weight));
    }
    mappings
}

fn graph_strategy() -> impl Strategy<Value = (Vec<usize>, Vec<(usize, usize, i64)>)> {
    (2_usize..12).prop_flat_map(|n| {
        (
            prop::collection::vec(0_usize..4, n),
            prop::collection::vec((0_usize..n, 0_usize..n, 0_i64..20), 1..n * 3),
        )
    })
}

/// Limits loose enough that every kind is admissible.
fn open_limits() -> CompositionLimits {
    let mut limits = CompositionLimits::empty();
    for kind in IngredientKind::ALL {
        limits = limits.with_range(kind, (0, 2));
    }
    limits
}

proptest! {
    #[test]
    fn quota_invariant_holds_under_arbitrary_selections(
        (kinds, edges) in graph_strategy(),
        picks in prop::collection::vec(0_usize..32, 0..16)
    ) {
        let mappings = build_mappings(&kinds, &edges);
        prop_assume!(!mappings.is_empty());
        let graph = WeightedGraph::from_mappings(mappings).unwrap();
        let limits = open_limits();
        let mut traverser = Traverser::with_limits(&graph, limits.clone()).unwrap();

        for pick in picks {
            let candidates = traverser.next_candidates();
            if candidates.is_empty() {
                break;
            }
            let name = candidates[pick % candidates.len()].ingredient.name.clone();
            prop_assert!(traverser.select(&name).is_ok());

            // Invariant: no kind ever exceeds its maximum.
            for kind in IngredientKind::ALL {
                let count = traverser
                    .composition()
                    .iter()
                    .filter(|c| c.kind == kind)
                    .count() as u32;
                prop_assert!(count <= limits.range(kind).unwrap().max);
            }
        }

        // No duplicates, ever.
        let mut names: Vec<&str> = traverser
            .composition()
            .iter()
            .map(|c| c.name.as_str())
            .collect();
        names.sort_unstable();
        let len_before = names.len();
        names.dedup();
        prop_assert_eq!(names.len(), len_before);
    }

    #[test]
    fn selected_ingredients_never_reappear_as_candidates(
        (kinds, edges) in graph_strategy(),
        picks in prop::collection::vec(0_usize..32, 1..8)
    ) {
        let mappings = build_mappings(&kinds, &edges);
        prop_assume!(!mappings.is_empty());
        let graph = WeightedGraph::from_mappings(mappings).unwrap();
        let mut traverser = Traverser::with_limits(&graph, open_limits()).unwrap();

        for pick in picks {
            let candidates = traverser.next_candidates();
            if candidates.is_empty() {
                break;
            }
            let name = candidates[pick % candidates.len()].ingredient.name.clone();
            traverser.select(&name).unwrap();

            let offered_again = traverser
                .next_candidates()
                .iter()
                .any(|c| c.ingredient.name == name);
            prop_assert!(!offered_again, "{} offered again after selection", name);
        }
    }
}
