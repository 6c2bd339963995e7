//! Raw FlavorDB record shapes and directory walking.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;
use walkdir::WalkDir;

use saladgen_core::errors::IngestError;
use saladgen_core::model::IngredientKind;

/// One molecule entry as FlavorDB serves it. Flavor profiles arrive as a
/// single `@`-separated string (e.g. `"bitter@green@sweet"`).
#[derive(Debug, Clone, Deserialize)]
pub struct FlavorDbMolecule {
    pub pubchem_id: i64,
    pub common_name: String,
    pub fooddb_flavor_profile: String,
}

/// One ingredient record as FlavorDB serves it. Unknown fields are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct FlavorDbRecord {
    pub entity_id: i64,
    pub entity_alias_readable: String,
    pub category_readable: String,
    pub molecules: Vec<FlavorDbMolecule>,
}

/// Read every JSON record under `root`, pairing each with the ingredient
/// kind named by its subdirectory.
///
/// Layout: `root/<kind>/<record>.json`. Non-JSON files are skipped; a
/// subdirectory whose name is not a known kind fails with
/// [`IngestError::UnknownKind`].
pub fn read_records(root: &Path) -> Result<Vec<(FlavorDbRecord, IngredientKind)>, IngestError> {
    let mut records = Vec::new();

    for entry in WalkDir::new(root) {
        let entry = entry.map_err(std::io::Error::from)?;
        if !entry.file_type().is_file() {
            continue;
        }
        let path = entry.path();
        if path.extension().and_then(|e| e.to_str()) != Some("json") {
            continue;
        }

        let kind = kind_for(root, path)?;
        let file = File::open(path)?;
        let record: FlavorDbRecord =
            serde_json::from_reader(BufReader::new(file)).map_err(|source| {
                IngestError::Json {
                    path: path.to_path_buf(),
                    source,
                }
            })?;
        records.push((record, kind));
    }

    debug!(records = records.len(), root = %root.display(), "read FlavorDB records");
    Ok(records)
}

/// The kind of a record file is the first directory component below the
/// data root.
fn kind_for(root: &Path, path: &Path) -> Result<IngredientKind, IngestError> {
    let relative = path.strip_prefix(root).unwrap_or(path);
    let dir_name = relative
        .components()
        .next()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .unwrap_or_default();
    Ok(dir_name.parse()?)
}
