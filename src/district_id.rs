use crate::error::{Error, Result};
use crate::states::{is_at_large_state, state_abbrev};

/// Build the canonical district id for a (state name, district number) pair.
///
/// At-large labels (`AL` in any case, or `0`) map to `<code>-AL` for the
/// states keyed that way in the dataset and to `<code>-01` everywhere else,
/// so an at-large seat always gets a stable id. Numeric labels are
/// zero-padded to two digits.
pub fn district_id(state: &str, number: &str) -> Result<String> {
    let abbrev =
        state_abbrev(state).ok_or_else(|| Error::UnknownState(state.to_string()))?;

    if number.eq_ignore_ascii_case("AL") || number == "0" {
        if is_at_large_state(abbrev) {
            return Ok(format!("{}-AL", abbrev));
        }
        return Ok(format!("{}-01", abbrev));
    }

    let n: u32 = number
        .trim()
        .parse()
        .map_err(|_| Error::InvalidDistrictNumber(number.to_string()))?;
    Ok(format!("{}-{:02}", abbrev, n))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numbered_districts_zero_padded() {
        assert_eq!(district_id("California", "7").unwrap(), "CA-07");
        assert_eq!(district_id("California", "52").unwrap(), "CA-52");
        assert_eq!(district_id("Texas", "03").unwrap(), "TX-03");
    }

    #[test]
    fn test_at_large_suffix_states() {
        for (state, expected) in [
            ("Alaska", "AK-AL"),
            ("Delaware", "DE-AL"),
            ("North Dakota", "ND-AL"),
            ("South Dakota", "SD-AL"),
            ("Vermont", "VT-AL"),
            ("Wyoming", "WY-AL"),
        ] {
            assert_eq!(district_id(state, "AL").unwrap(), expected);
            assert_eq!(district_id(state, "0").unwrap(), expected);
        }
    }

    #[test]
    fn test_at_large_fallback_to_first_district() {
        // Montana has an at-large history but is keyed MT-01 in the dataset.
        assert_eq!(district_id("Montana", "AL").unwrap(), "MT-01");
        assert_eq!(district_id("Montana", "0").unwrap(), "MT-01");
    }

    #[test]
    fn test_at_large_label_case_insensitive() {
        assert_eq!(district_id("Vermont", "al").unwrap(), "VT-AL");
        assert_eq!(district_id("Vermont", "Al").unwrap(), "VT-AL");
    }

    #[test]
    fn test_unknown_state() {
        assert!(matches!(
            district_id("Guam", "1"),
            Err(Error::UnknownState(_))
        ));
    }

    #[test]
    fn test_invalid_number() {
        assert!(matches!(
            district_id("California", "seven"),
            Err(Error::InvalidDistrictNumber(_))
        ));
        assert!(matches!(
            district_id("California", ""),
            Err(Error::InvalidDistrictNumber(_))
        ));
    }
}
