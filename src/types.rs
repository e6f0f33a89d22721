use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::Result;

/// The district dataset document.
///
/// Districts stay as raw JSON objects so fields this tool does not know
/// about (representative, party, boundary references, ...) survive a
/// read-modify-write cycle. Unknown top-level fields are preserved too.
#[derive(Debug, Deserialize, Serialize)]
pub struct DistrictFile {
    #[serde(rename = "_note", skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,

    pub districts: Vec<Value>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl DistrictFile {
    /// Read the dataset document from disk.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// Write the document back, pretty-printed with 2-space indentation.
    pub fn save(&self, path: &Path) -> Result<()> {
        let mut out = serde_json::to_string_pretty(self)?;
        out.push('\n');
        std::fs::write(path, out)?;
        Ok(())
    }
}

/// Typed view of a single district entry, used by the dataset audit.
#[derive(Debug, Clone, Deserialize)]
pub struct District {
    pub id: String,
    pub state: String,

    #[serde(default)]
    pub pvi: Option<String>,

    #[serde(default)]
    pub pvi_numeric: Option<i32>,
}
