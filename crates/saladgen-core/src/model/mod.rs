pub mod ingredient;
pub mod kind;
pub mod molecule;

pub use ingredient::Ingredient;
pub use kind::{IngredientKind, UnknownKind};
pub use molecule::Molecule;

/// A similarity mapping between two ingredients, as handed over by the
/// ingestion layer: `(a, b, weight)` with a nonnegative weight.
pub type Mapping = (Ingredient, Ingredient, i64);
