use std::collections::{BTreeSet, HashMap};

use regex::Regex;
use serde_json::Value;

use crate::error::Result;
use crate::pvi::pvi_to_numeric;
use crate::types::{District, DistrictFile};

/// Findings from a read-only audit of the dataset.
#[derive(Debug, Default)]
pub struct AuditReport {
    pub total: usize,
    pub malformed_ids: Vec<String>,
    pub duplicate_ids: Vec<String>,
    pub inconsistent_pvi: Vec<String>,
    pub states: BTreeSet<String>,
    pub has_dc: bool,
    pub with_pvi: usize,
}

/// Inspect the dataset without mutating it.
///
/// Flags ids that do not match the `XX-NN` / `XX-AL` scheme, duplicate
/// ids, entries missing the required fields, and districts whose stored
/// `pvi_numeric` disagrees with their descriptor; summarizes state and
/// PVI coverage.
pub fn audit(file: &DistrictFile) -> Result<AuditReport> {
    let id_format = Regex::new(r"^[A-Z]{2}-(AL|[0-9]{2})$")?;

    let mut report = AuditReport {
        total: file.districts.len(),
        ..AuditReport::default()
    };
    let mut seen: HashMap<String, usize> = HashMap::new();

    for entry in &file.districts {
        let district: District = match serde_json::from_value(entry.clone()) {
            Ok(district) => district,
            Err(_) => {
                let id = entry
                    .get("id")
                    .and_then(Value::as_str)
                    .unwrap_or("<missing id>");
                report.malformed_ids.push(id.to_string());
                continue;
            }
        };

        if !id_format.is_match(&district.id) {
            report.malformed_ids.push(district.id.clone());
        }
        if let Some(descriptor) = &district.pvi {
            if pvi_to_numeric(descriptor) != district.pvi_numeric {
                report.inconsistent_pvi.push(district.id.clone());
            }
        }
        *seen.entry(district.id).or_insert(0) += 1;

        if district.state == "District of Columbia" {
            report.has_dc = true;
        }
        report.states.insert(district.state);

        if district.pvi.is_some() {
            report.with_pvi += 1;
        }
    }

    report.duplicate_ids = seen
        .into_iter()
        .filter(|(_, count)| *count > 1)
        .map(|(id, _)| id)
        .collect();
    report.duplicate_ids.sort();

    Ok(report)
}
