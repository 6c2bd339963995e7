use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_TOP_FLAVOR_PCT;

use super::{IngredientKind, Molecule};

/// An ingredient extracted from the FlavorDB database.
///
/// The composition engine relies on two fields only: `name` (unique,
/// lowercased at construction, the lookup key) and `kind` (the quota
/// category). Everything else is opaque payload carried along for the
/// presentation layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    /// Unique lowercase name, the graph lookup key.
    pub name: String,
    /// Free-form FlavorDB category (e.g. "bakery"), lowercased. Opaque.
    pub category: String,
    /// FlavorDB entity ID.
    pub id: i64,
    /// Role in the composition; the quota category.
    pub kind: IngredientKind,
    pub molecules: Vec<Molecule>,
    /// Flavor profiles and their occurrence counts across all molecules,
    /// ordered from the highest to lowest occurring flavor.
    pub flavor_profiles: Vec<(String, u32)>,
}

impl Ingredient {
    /// Build an ingredient, normalizing `name` and `category` to lowercase
    /// and extracting the flavor-profile counts from `molecules`.
    pub fn new(
        name: impl Into<String>,
        category: impl Into<String>,
        id: i64,
        kind: IngredientKind,
        molecules: Vec<Molecule>,
    ) -> Self {
        let flavor_profiles = extract_flavor_profiles(&molecules);
        Self {
            name: name.into().to_lowercase(),
            category: category.into().to_lowercase(),
            id,
            kind,
            molecules,
            flavor_profiles,
        }
    }

    /// The top `pct`% of flavors represented by this ingredient's molecules.
    /// The cutoff index is computed with a ceiling, so a nonzero `pct` over a
    /// nonempty profile list always yields at least one flavor.
    pub fn top_flavors(&self, pct: u32) -> &[(String, u32)] {
        let cutoff = (self.flavor_profiles.len() * pct as usize).div_ceil(100);
        &self.flavor_profiles[..cutoff.min(self.flavor_profiles.len())]
    }

    /// The single highest-occurring flavor, or `None` for an ingredient
    /// without molecules.
    pub fn top_flavor(&self) -> Option<&str> {
        self.flavor_profiles.first().map(|(name, _)| name.as_str())
    }

    /// Default-percentage variant of [`top_flavors`](Self::top_flavors).
    pub fn top_flavors_default(&self) -> &[(String, u32)] {
        self.top_flavors(DEFAULT_TOP_FLAVOR_PCT)
    }
}

impl fmt::Display for Ingredient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {} : {}", self.name, self.category, self.id)
    }
}

/// Count flavor-profile occurrences across molecules, ordered by count
/// descending with name ascending as the tie-break.
fn extract_flavor_profiles(molecules: &[Molecule]) -> Vec<(String, u32)> {
    let mut counts: HashMap<&str, u32> = HashMap::new();
    for molecule in molecules {
        for profile in &molecule.flavor_profiles {
            *counts.entry(profile.as_str()).or_insert(0) += 1;
        }
    }

    let mut profiles: Vec<(String, u32)> = counts
        .into_iter()
        .map(|(name, count)| (name.to_string(), count))
        .collect();
    profiles.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    profiles
}
