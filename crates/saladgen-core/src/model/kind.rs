use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The role an ingredient plays in a salad composition.
///
/// This is the classification the composition limits are keyed on; it is
/// distinct from the free-form FlavorDB `category` string (e.g. "bakery"),
/// which the engine never inspects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IngredientKind {
    Base,
    Topping,
    Protein,
    Dressing,
}

impl IngredientKind {
    /// All kinds, in a fixed order.
    pub const ALL: [IngredientKind; 4] = [
        IngredientKind::Base,
        IngredientKind::Topping,
        IngredientKind::Protein,
        IngredientKind::Dressing,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            IngredientKind::Base => "base",
            IngredientKind::Topping => "topping",
            IngredientKind::Protein => "protein",
            IngredientKind::Dressing => "dressing",
        }
    }
}

impl fmt::Display for IngredientKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parsed from ingest directory names, case-insensitively.
impl FromStr for IngredientKind {
    type Err = UnknownKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "base" => Ok(IngredientKind::Base),
            "topping" => Ok(IngredientKind::Topping),
            "protein" => Ok(IngredientKind::Protein),
            "dressing" => Ok(IngredientKind::Dressing),
            _ => Err(UnknownKind {
                name: s.to_string(),
            }),
        }
    }
}

/// Failure to parse an [`IngredientKind`] from a string.
#[derive(Debug, Clone, thiserror::Error)]
#[error("unknown ingredient kind: {name}")]
pub struct UnknownKind {
    pub name: String,
}
