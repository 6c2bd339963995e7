//! # saladgen-ingest
//!
//! Preprocesses JSON files downloaded from FlavorDB into ingredients and
//! similarity mappings. The data directory layout drives classification:
//! each subdirectory of the root names an ingredient kind ("base",
//! "topping", "protein", "dressing") and holds one JSON record per
//! ingredient. Similarity between two ingredients is the number of
//! molecules they share, matched by PubChem ID.

pub mod mappings;
pub mod record;

pub use mappings::{calculate_similarity, construct_ingredient, create_mappings};
pub use record::{read_records, FlavorDbMolecule, FlavorDbRecord};
