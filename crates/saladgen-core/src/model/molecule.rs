use serde::{Deserialize, Serialize};

/// A flavor molecule attached to an ingredient: the PubChem compound ID,
/// its common name, and the flavor profiles it contributes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Molecule {
    pub pubchem_id: i64,
    pub name: String,
    pub flavor_profiles: Vec<String>,
}

impl Molecule {
    pub fn new(
        pubchem_id: i64,
        name: impl Into<String>,
        flavor_profiles: Vec<String>,
    ) -> Self {
        Self {
            pubchem_id,
            name: name.into(),
            flavor_profiles,
        }
    }
}
