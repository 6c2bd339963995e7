//! # saladgen-core
//!
//! Foundation crate for the saladgen composition engine.
//! Defines the ingredient data model, error enums, composition-limit
//! config, and constants. Every other crate in the workspace depends
//! on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod model;

// Re-export the most commonly used types at the crate root.
pub use config::{CompositionLimits, QuotaRange};
pub use errors::{GraphError, IngestError, TraversalError};
pub use model::{Ingredient, IngredientKind, Mapping, Molecule};
