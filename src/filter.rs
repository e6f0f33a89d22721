use serde_json::Value;

use crate::states::TERRITORY_PREFIXES;

/// True when a district id belongs to a non-state territory.
pub fn is_territory(id: &str) -> bool {
    TERRITORY_PREFIXES.iter().any(|prefix| id.starts_with(prefix))
}

/// Drop territory districts, keeping the remaining entries in order.
///
/// Entries without an id string never match a prefix and are retained.
/// Returns the retained districts and the number removed.
pub fn remove_territories(districts: Vec<Value>) -> (Vec<Value>, usize) {
    let before = districts.len();
    let retained: Vec<Value> = districts
        .into_iter()
        .filter(|district| {
            !district
                .get("id")
                .and_then(Value::as_str)
                .map(is_territory)
                .unwrap_or(false)
        })
        .collect();
    let removed = before - retained.len();
    (retained, removed)
}

/// Compose the `_note` line describing the filtered dataset.
pub fn composition_note(districts: &[Value]) -> String {
    let total = districts.len();
    let has_dc = districts.iter().any(|district| {
        district
            .get("id")
            .and_then(Value::as_str)
            .map(|id| id.starts_with("DC-"))
            .unwrap_or(false)
    });

    if has_dc {
        format!(
            "Dataset for all {} congressional districts ({} voting districts from 50 states + 1 non-voting district from DC). \
             Includes district boundaries, current representatives, and Cook PVI data.",
            total,
            total - 1
        )
    } else {
        format!(
            "Dataset for all {} congressional districts. \
             Includes district boundaries, current representatives, and Cook PVI data.",
            total
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn ids(districts: &[Value]) -> Vec<&str> {
        districts
            .iter()
            .filter_map(|d| d.get("id").and_then(Value::as_str))
            .collect()
    }

    #[test]
    fn test_territories_removed_in_order() {
        let districts = vec![
            json!({"id": "CA-01"}),
            json!({"id": "GU-AL"}),
            json!({"id": "PR-01"}),
            json!({"id": "DC-AL"}),
        ];

        let (retained, removed) = remove_territories(districts);
        assert_eq!(ids(&retained), vec!["CA-01", "DC-AL"]);
        assert_eq!(removed, 2);
    }

    #[test]
    fn test_all_territory_prefixes_match() {
        for id in ["GU-AL", "VI-AL", "AS-AL", "MP-AL", "PR-01"] {
            assert!(is_territory(id), "{} should be a territory", id);
        }
        for id in ["CA-01", "DC-AL", "PA-01", "VT-AL"] {
            assert!(!is_territory(id), "{} should not be a territory", id);
        }
    }

    #[test]
    fn test_filter_is_idempotent() {
        let districts = vec![json!({"id": "CA-01"}), json!({"id": "VI-AL"})];

        let (first, removed_first) = remove_territories(districts);
        assert_eq!(removed_first, 1);

        let (second, removed_second) = remove_territories(first.clone());
        assert_eq!(removed_second, 0);
        assert_eq!(second, first);
    }

    #[test]
    fn test_entries_without_id_retained() {
        let districts = vec![json!({"state": "Texas"}), json!({"id": "AS-AL"})];

        let (retained, removed) = remove_territories(districts);
        assert_eq!(retained.len(), 1);
        assert_eq!(removed, 1);
    }

    #[test]
    fn test_composition_note_with_dc() {
        let districts = vec![json!({"id": "CA-01"}), json!({"id": "DC-AL"})];
        let note = composition_note(&districts);
        assert!(note.contains("all 2 congressional districts"));
        assert!(note.contains("1 voting districts from 50 states"));
        assert!(note.contains("non-voting district from DC"));
    }

    #[test]
    fn test_composition_note_without_dc() {
        let districts = vec![json!({"id": "CA-01"})];
        let note = composition_note(&districts);
        assert!(note.contains("all 1 congressional districts"));
        assert!(!note.contains("DC"));
    }
}
