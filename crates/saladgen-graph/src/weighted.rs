//! Undirected petgraph wrapper with a name index for O(1) lookup.

use std::collections::HashMap;

use petgraph::graph::{NodeIndex, UnGraph};
use tracing::debug;

use saladgen_core::errors::GraphError;
use saladgen_core::model::{Ingredient, IngredientKind, Mapping};

/// The similarity graph over ingredients.
///
/// Nodes are ingredients, edges carry a nonnegative similarity weight
/// (shared-molecule count). At most one edge exists per unordered pair and
/// self-edges are rejected at construction. A pair with no edge is a
/// distinct, observable state from a pair joined by a zero-weight edge.
pub struct WeightedGraph {
    graph: UnGraph<Ingredient, u32>,
    /// Lowercased ingredient name → node index.
    name_index: HashMap<String, NodeIndex>,
}

impl WeightedGraph {
    /// Build the graph from ingestion mappings in O(E).
    ///
    /// Fails with [`GraphError::InvalidEdge`] on a negative weight, an
    /// empty endpoint name, or a self-edge; on failure no graph is
    /// produced. A repeated unordered pair overwrites the earlier weight.
    pub fn from_mappings(mappings: Vec<Mapping>) -> Result<Self, GraphError> {
        let mut graph = UnGraph::new_undirected();
        let mut name_index = HashMap::new();

        for (a, b, weight) in mappings {
            let weight = validate_weight(&a, &b, weight)?;
            if a.name.trim().is_empty() || b.name.trim().is_empty() {
                return Err(GraphError::InvalidEdge {
                    reason: "ingredient with empty name".to_string(),
                });
            }
            if a.name.to_lowercase() == b.name.to_lowercase() {
                return Err(GraphError::InvalidEdge {
                    reason: format!("self-edge on {:?}", a.name),
                });
            }

            let a_idx = ensure_node(&mut graph, &mut name_index, a);
            let b_idx = ensure_node(&mut graph, &mut name_index, b);
            graph.update_edge(a_idx, b_idx, weight);
        }

        debug!(
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            "built similarity graph"
        );

        Ok(Self { graph, name_index })
    }

    /// Case-normalized exact-match lookup through the name index.
    pub fn lookup_by_name(&self, name: &str) -> Result<&Ingredient, GraphError> {
        let idx = self.index_of(name)?;
        Ok(&self.graph[idx])
    }

    /// All ingredients in the graph, order not significant.
    pub fn nodes(&self) -> impl Iterator<Item = &Ingredient> {
        self.graph.node_weights()
    }

    pub fn len(&self) -> usize {
        self.graph.node_count()
    }

    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }

    /// All ingredients adjacent to the named node with their edge weights,
    /// optionally restricted to one kind.
    pub fn neighbors(
        &self,
        name: &str,
        kind_filter: Option<IngredientKind>,
    ) -> Result<Vec<(&Ingredient, u32)>, GraphError> {
        let idx = self.index_of(name)?;
        let mut out = Vec::new();
        for neighbor in self.graph.neighbors(idx) {
            let ingredient = &self.graph[neighbor];
            if let Some(kind) = kind_filter {
                if ingredient.kind != kind {
                    continue;
                }
            }
            if let Some(edge) = self.graph.find_edge(idx, neighbor) {
                out.push((ingredient, self.graph[edge]));
            }
        }
        Ok(out)
    }

    /// The `k` strongest neighbors of the named node, sorted by weight
    /// descending with ingredient name ascending as the tie-break.
    pub fn closest_neighbors(
        &self,
        name: &str,
        k: usize,
        kind_filter: Option<IngredientKind>,
    ) -> Result<Vec<(&Ingredient, u32)>, GraphError> {
        let mut neighbors = self.neighbors(name, kind_filter)?;
        neighbors.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.name.cmp(&b.0.name)));
        neighbors.truncate(k);
        Ok(neighbors)
    }

    /// The symmetric edge weight between two named nodes.
    ///
    /// Fails with [`GraphError::NotFound`] if either name is unknown, and
    /// with [`GraphError::EdgeNotFound`] if both resolve but no edge
    /// connects them. Never silently reports 0 for a missing edge.
    pub fn weight_between(&self, a: &str, b: &str) -> Result<u32, GraphError> {
        let a_idx = self.index_of(a)?;
        let b_idx = self.index_of(b)?;
        match self.graph.find_edge(a_idx, b_idx) {
            Some(edge) => Ok(self.graph[edge]),
            None => Err(GraphError::EdgeNotFound {
                a: a.to_lowercase(),
                b: b.to_lowercase(),
            }),
        }
    }

    fn index_of(&self, name: &str) -> Result<NodeIndex, GraphError> {
        self.name_index
            .get(&name.to_lowercase())
            .copied()
            .ok_or_else(|| GraphError::NotFound {
                name: name.to_string(),
            })
    }
}

fn ensure_node(
    graph: &mut UnGraph<Ingredient, u32>,
    name_index: &mut HashMap<String, NodeIndex>,
    ingredient: Ingredient,
) -> NodeIndex {
    let key = ingredient.name.to_lowercase();
    match name_index.get(&key) {
        Some(idx) => *idx,
        None => {
            let idx = graph.add_node(ingredient);
            name_index.insert(key, idx);
            idx
        }
    }
}

fn validate_weight(a: &Ingredient, b: &Ingredient, weight: i64) -> Result<u32, GraphError> {
    if weight < 0 {
        return Err(GraphError::InvalidEdge {
            reason: format!(
                "negative weight {weight} between {:?} and {:?}",
                a.name, b.name
            ),
        });
    }
    u32::try_from(weight).map_err(|_| GraphError::InvalidEdge {
        reason: format!(
            "weight {weight} between {:?} and {:?} out of range",
            a.name, b.name
        ),
    })
}
