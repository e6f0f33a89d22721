use std::collections::HashMap;

use serde_json::Value;

use crate::pvi::pvi_to_numeric;
use crate::types::DistrictFile;

/// Outcome of joining lean values onto the dataset.
#[derive(Debug, Default)]
pub struct MergeReport {
    pub matched: usize,
    pub unmatched: Vec<String>,
}

/// Attach `pvi` and `pvi_numeric` to every district with a lean value.
///
/// A left join keyed on district id: districts without a matching id are
/// left untouched and collected for reporting. Partial coverage is
/// expected, not an error. An unparsable descriptor still merges, with a
/// null numeric value.
pub fn merge_pvi(file: &mut DistrictFile, lean: &HashMap<String, String>) -> MergeReport {
    let mut report = MergeReport::default();

    for district in &mut file.districts {
        let id = district
            .get("id")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();

        let Some(descriptor) = lean.get(&id) else {
            report.unmatched.push(id);
            continue;
        };

        if let Some(obj) = district.as_object_mut() {
            let numeric = pvi_to_numeric(descriptor).map_or(Value::Null, Value::from);
            obj.insert("pvi".to_string(), Value::String(descriptor.clone()));
            obj.insert("pvi_numeric".to_string(), numeric);
            report.matched += 1;
        }
    }

    report
}
