//! The driver-paced selection state machine.

use tracing::{debug, info};

use saladgen_core::config::CompositionLimits;
use saladgen_core::errors::TraversalError;
use saladgen_core::model::{Ingredient, IngredientKind};
use saladgen_graph::WeightedGraph;

use crate::scoring;

/// One ranked entry from [`Traverser::next_candidates`].
#[derive(Debug, Clone, Copy)]
pub struct RankedCandidate<'g> {
    pub ingredient: &'g Ingredient,
    pub score: f64,
}

/// Stateful traversal over an ingredient graph.
///
/// Each round the driver calls [`next_candidates`](Self::next_candidates)
/// to obtain the eligible ingredients ranked by aggregate strength, then
/// [`select`](Self::select) to commit one of them to the composition.
/// Selection is only permitted from the most recently produced candidate
/// list, and never past a kind's configured maximum; the quota check
/// inside `select` is the hard invariant that keeps the composition within
/// bounds even for a driver that ignores [`is_complete`](Self::is_complete).
///
/// The graph may be shared read-only across traversers; each traverser
/// owns an independent copy of its limits and of the composition it is
/// building. A single traverser is stepped through `&mut self` and is not
/// meant for concurrent use.
pub struct Traverser<'g> {
    graph: &'g WeightedGraph,
    limits: CompositionLimits,
    /// Ingredients not yet selected.
    remaining: Vec<&'g Ingredient>,
    /// Selected ingredients, in selection order.
    composition: Vec<&'g Ingredient>,
    /// Lowercase names offered by the latest `next_candidates` call.
    /// Cleared by a successful `select`.
    offered: Option<Vec<String>>,
}

impl<'g> Traverser<'g> {
    /// Construct a traverser with the built-in default limits.
    pub fn new(graph: &'g WeightedGraph) -> Result<Self, TraversalError> {
        Self::with_limits(graph, CompositionLimits::default())
    }

    /// Construct a traverser with explicit limits.
    ///
    /// Fails with [`TraversalError::EmptyGraph`] on a graph with no
    /// ingredients, and with [`TraversalError::InvalidQuota`] if any range
    /// is inverted or any kind present in the graph has no entry.
    pub fn with_limits(
        graph: &'g WeightedGraph,
        limits: CompositionLimits,
    ) -> Result<Self, TraversalError> {
        if graph.is_empty() {
            return Err(TraversalError::EmptyGraph);
        }
        limits.validate()?;
        for ingredient in graph.nodes() {
            if limits.range(ingredient.kind).is_none() {
                return Err(TraversalError::InvalidQuota {
                    reason: format!("no quota entry for kind {}", ingredient.kind),
                });
            }
        }

        Ok(Self {
            graph,
            limits,
            remaining: graph.nodes().collect(),
            composition: Vec::new(),
            offered: None,
        })
    }

    /// Rank the current round's eligible candidates.
    ///
    /// An ingredient is eligible iff it has not been selected and its
    /// kind's count is still below the configured maximum. Candidates are
    /// ordered by score descending, ties broken by name ascending. An
    /// empty result means no further selection is possible.
    pub fn next_candidates(&mut self) -> Vec<RankedCandidate<'g>> {
        let mut candidates: Vec<RankedCandidate<'g>> = self
            .remaining
            .iter()
            .copied()
            .filter(|c| self.has_room(c.kind))
            .map(|c| RankedCandidate {
                ingredient: c,
                score: scoring::score(self.graph, &self.composition, c),
            })
            .collect();

        candidates.sort_by(|a, b| {
            b.score
                .total_cmp(&a.score)
                .then_with(|| a.ingredient.name.cmp(&b.ingredient.name))
        });

        self.offered = Some(
            candidates
                .iter()
                .map(|c| c.ingredient.name.clone())
                .collect(),
        );

        debug!(
            round = self.composition.len() + 1,
            candidates = candidates.len(),
            "ranked candidates"
        );

        candidates
    }

    /// Commit one ingredient from the latest candidate list.
    ///
    /// Fails with [`TraversalError::SelectionIneligible`] if the named
    /// ingredient was not offered in the most recent
    /// [`next_candidates`](Self::next_candidates) call, was already
    /// selected, or its kind is saturated. A failed call leaves the
    /// composition untouched. A successful call consumes the offer, so
    /// each round requires a fresh `next_candidates`.
    pub fn select(&mut self, name: &str) -> Result<(), TraversalError> {
        let key = name.to_lowercase();
        let ineligible = || TraversalError::SelectionIneligible {
            name: name.to_string(),
        };

        let offered = self.offered.as_ref().ok_or_else(ineligible)?;
        if !offered.iter().any(|offer| *offer == key) {
            return Err(ineligible());
        }

        let position = self
            .remaining
            .iter()
            .position(|c| c.name == key)
            .ok_or_else(ineligible)?;

        // The hard quota invariant, independent of what was offered.
        let kind = self.remaining[position].kind;
        if !self.has_room(kind) {
            return Err(ineligible());
        }

        let selected = self.remaining.remove(position);
        self.composition.push(selected);
        self.offered = None;

        info!(
            name = %selected.name,
            kind = %selected.kind,
            selected = self.composition.len(),
            "ingredient selected"
        );

        Ok(())
    }

    /// Advisory completion state: true iff every kind with a quota entry
    /// has reached its minimum and is either at its maximum or out of
    /// remaining candidates. The engine keeps accepting eligible
    /// selections regardless; drivers consult this to decide when to stop.
    pub fn is_complete(&self) -> bool {
        self.limits.ranges.iter().all(|(&kind, range)| {
            let count = self.count_of(kind);
            let exhausted = !self.remaining.iter().any(|c| c.kind == kind);
            count >= range.min && (count == range.max || exhausted)
        })
    }

    /// The composition built so far, in selection order.
    pub fn composition(&self) -> &[&'g Ingredient] {
        &self.composition
    }

    pub fn limits(&self) -> &CompositionLimits {
        &self.limits
    }

    fn count_of(&self, kind: IngredientKind) -> u32 {
        self.composition.iter().filter(|c| c.kind == kind).count() as u32
    }

    fn has_room(&self, kind: IngredientKind) -> bool {
        match self.limits.range(kind) {
            Some(range) => self.count_of(kind) < range.max,
            None => false,
        }
    }
}
