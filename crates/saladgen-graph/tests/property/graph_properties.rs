//! Property tests for the weighted similarity graph.

use proptest::prelude::*;

use saladgen_core::model::{Ingredient, IngredientKind, Mapping};
use saladgen_graph::WeightedGraph;

fn ingredient(i: usize, kind_tag: usize) -> Ingredient {
    Ingredient::new(
        format!("ing{i}"),
        "test",
        i as i64,
        IngredientKind::ALL[kind_tag % IngredientKind::ALL.len()],
        Vec::new(),
    )
}

/// Mappings for a random graph: `kinds[i]` tags node `i`, edges are
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

proptest! {
    #[test]
    fn weight_between_is_symmetric(
        (kinds, edges) in graph_strategy()
    ) {
        let graph = WeightedGraph::from_mappings(build_mappings(&kinds, &edges)).unwrap();
        let names: Vec<String> = graph.nodes().map(|n| n.name.clone()).collect();
        for a in &names {
            for b in &names {
                if a == b {
                    continue;
                }
                match (graph.weight_between(a, b), graph.weight_between(b, a)) {
                    (Ok(ab), Ok(ba)) => prop_assert_eq!(ab, ba),
                    (Err(_), Err(_)) => {}
                    _ => prop_assert!(false, "asymmetric edge presence for {} / {}", a, b),
                }
            }
        }
    }

    #[test]
    fn closest_neighbors_is_bounded_and_sorted(
        (kinds, edges) in graph_strategy(),
        k in 0_usize..16
    ) {
        let graph = WeightedGraph::from_mappings(build_mappings(&kinds, &edges)).unwrap();
        for node in graph.nodes() {
            let closest = graph.closest_neighbors(&node.name, k, None).unwrap();
            prop_assert!(closest.len() <= k);
            for pair in closest.windows(2) {
                prop_assert!(pair[0].1 >= pair[1].1);
            }
        }
    }

    #[test]
    fn every_node_is_reachable_by_its_own_name(
        (kinds, edges) in graph_strategy()
    ) {
        let graph = WeightedGraph::from_mappings(build_mappings(&kinds, &edges)).unwrap();
        for node in graph.nodes() {
            let found = graph.lookup_by_name(&node.name).unwrap();
            prop_assert_eq!(&found.name, &node.name);
        }
    }
}
