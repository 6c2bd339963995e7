use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::constants;
use crate::errors::TraversalError;
use crate::model::IngredientKind;

/// An inclusive `(min, max)` bound on how many ingredients of one kind may
/// appear in a composition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuotaRange {
    pub min: u32,
    pub max: u32,
}

impl QuotaRange {
    pub fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }
}

impl From<(u32, u32)> for QuotaRange {
    fn from((min, max): (u32, u32)) -> Self {
        Self { min, max }
    }
}

/// Per-kind quota ranges bounding a valid salad composition.
///
/// Traversal may conclude once every minimum is reached and must stop
/// adding ingredients of a kind once its maximum is reached. Each
/// `Traverser` owns an independent clone of its limits; overriding one
/// session's limits can never leak into another session or into the
/// default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompositionLimits {
    pub ranges: BTreeMap<IngredientKind, QuotaRange>,
}

impl CompositionLimits {
    /// Limits with no entries; ranges must be supplied via
    /// [`with_range`](Self::with_range).
    pub fn empty() -> Self {
        Self {
            ranges: BTreeMap::new(),
        }
    }

    /// Set the range for one kind, replacing any existing entry.
    pub fn with_range(mut self, kind: IngredientKind, range: impl Into<QuotaRange>) -> Self {
        self.ranges.insert(kind, range.into());
        self
    }

    /// The range for `kind`, if one is configured.
    pub fn range(&self, kind: IngredientKind) -> Option<QuotaRange> {
        self.ranges.get(&kind).copied()
    }

    /// Check that every configured range satisfies `min <= max`.
    pub fn validate(&self) -> Result<(), TraversalError> {
        for (kind, range) in &self.ranges {
            if range.min > range.max {
                return Err(TraversalError::InvalidQuota {
                    reason: format!(
                        "{kind}: min {} exceeds max {}",
                        range.min, range.max
                    ),
                });
            }
        }
        Ok(())
    }
}

impl Default for CompositionLimits {
    fn default() -> Self {
        Self::empty()
            .with_range(IngredientKind::Base, constants::DEFAULT_BASE_RANGE)
            .with_range(IngredientKind::Topping, constants::DEFAULT_TOPPING_RANGE)
            .with_range(IngredientKind::Protein, constants::DEFAULT_PROTEIN_RANGE)
            .with_range(IngredientKind::Dressing, constants::DEFAULT_DRESSING_RANGE)
    }
}
