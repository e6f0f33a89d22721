use std::collections::HashMap;
use std::path::Path;

use crate::district_id::district_id;
use crate::error::{Error, Result};

/// Default header of the CSV column holding the PVI descriptor.
pub const DEFAULT_PVI_COLUMN: &str = "2025 Cook PVI";

/// Cook PVI descriptors keyed by canonical district id, plus load
/// diagnostics.
#[derive(Debug, Default)]
pub struct LeanTable {
    pub by_district: HashMap<String, String>,
    pub skipped: usize,
}

/// Read a Cook PVI CSV into a district id -> descriptor map.
///
/// Rows whose state name or district number cannot be normalized are
/// warned about on stderr and skipped; the rest of the file still loads.
/// A missing required column aborts the load.
pub fn load_lean_csv(path: &Path, pvi_column: &str) -> Result<LeanTable> {
    let raw = std::fs::read_to_string(path)?;
    // Spreadsheet exports lead with a UTF-8 BOM.
    let raw = raw.trim_start_matches('\u{feff}');

    let mut reader = csv::Reader::from_reader(raw.as_bytes());
    let headers = reader.headers()?.clone();
    let column = |name: &str| {
        headers
            .iter()
            .position(|h| h == name)
            .ok_or_else(|| Error::MissingColumn(name.to_string()))
    };
    let state_idx = column("State")?;
    let number_idx = column("Number")?;
    let pvi_idx = column(pvi_column)?;

    let mut table = LeanTable::default();
    for record in reader.records() {
        let record = record?;
        let state = record.get(state_idx).unwrap_or("").trim();
        let number = record.get(number_idx).unwrap_or("").trim();
        let pvi = record.get(pvi_idx).unwrap_or("").trim();

        match district_id(state, number) {
            Ok(id) => {
                table.by_district.insert(id, pvi.to_string());
            }
            Err(err) => {
                eprintln!("Warning: {}", err);
                table.skipped += 1;
            }
        }
    }

    Ok(table)
}
