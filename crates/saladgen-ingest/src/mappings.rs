//! Ingredient construction and pairwise similarity mapping.

use std::collections::HashSet;
use std::path::Path;

use tracing::info;

use saladgen_core::errors::IngestError;
use saladgen_core::model::{Ingredient, IngredientKind, Mapping, Molecule};

use crate::record::{read_records, FlavorDbRecord};

/// Build an [`Ingredient`] from a raw FlavorDB record. Name and category
/// are lowercased; `@`-separated flavor profiles are split out per
/// molecule.
pub fn construct_ingredient(record: &FlavorDbRecord, kind: IngredientKind) -> Ingredient {
    let molecules = record
        .molecules
        .iter()
        .map(|m| {
            Molecule::new(
                m.pubchem_id,
                m.common_name.clone(),
                m.fooddb_flavor_profile
                    .split('@')
                    .filter(|p| !p.is_empty())
                    .map(str::to_string)
                    .collect(),
            )
        })
        .collect();

    Ingredient::new(
        record.entity_alias_readable.clone(),
        record.category_readable.clone(),
        record.entity_id,
        kind,
        molecules,
    )
}

/// The number of molecules two ingredients share, matched by PubChem ID.
pub fn calculate_similarity(a: &Ingredient, b: &Ingredient) -> i64 {
    let ids: HashSet<i64> = a.molecules.iter().map(|m| m.pubchem_id).collect();
    b.molecules
        .iter()
        .map(|m| m.pubchem_id)
        .collect::<HashSet<i64>>()
        .intersection(&ids)
        .count() as i64
}

/// Read every record under `root` and produce one mapping per unordered
/// ingredient pair that shares at least one molecule. Pairs sharing
/// nothing produce no mapping at all, so they stay absent from the graph
/// rather than appearing as zero-weight edges.
pub fn create_mappings(root: &Path) -> Result<Vec<Mapping>, IngestError> {
    let records = read_records(root)?;
    let ingredients: Vec<Ingredient> = records
        .iter()
        .map(|(record, kind)| construct_ingredient(record, *kind))
        .collect();

    let mut mappings = Vec::new();
    for (i, a) in ingredients.iter().enumerate() {
        for b in &ingredients[i + 1..] {
            let similarity = calculate_similarity(a, b);
            if similarity > 0 {
                mappings.push((a.clone(), b.clone(), similarity));
            }
        }
    }

    info!(
        ingredients = ingredients.len(),
        mappings = mappings.len(),
        "created similarity mappings"
    );

    Ok(mappings)
}
