/// District id prefixes that mark non-state territories.
pub const TERRITORY_PREFIXES: [&str; 5] = ["GU-", "VI-", "AS-", "MP-", "PR-"];

/// States whose single at-large district is keyed with an `-AL` suffix
/// in the dataset.
pub const AT_LARGE_STATES: [&str; 6] = ["AK", "DE", "ND", "SD", "VT", "WY"];

/// Resolve a full state name to its USPS abbreviation.
///
/// Covers the 50 states; DC and the territories are keyed directly by
/// abbreviation in the dataset and never appear in the PVI source.
pub fn state_abbrev(name: &str) -> Option<&'static str> {
    let code = match name {
        "Alabama" => "AL",
        "Alaska" => "AK",
        "Arizona" => "AZ",
        "Arkansas" => "AR",
        "California" => "CA",
        "Colorado" => "CO",
        "Connecticut" => "CT",
        "Delaware" => "DE",
        "Florida" => "FL",
        "Georgia" => "GA",
        "Hawaii" => "HI",
        "Idaho" => "ID",
        "Illinois" => "IL",
        "Indiana" => "IN",
        "Iowa" => "IA",
        "Kansas" => "KS",
        "Kentucky" => "KY",
        "Louisiana" => "LA",
        "Maine" => "ME",
        "Maryland" => "MD",
        "Massachusetts" => "MA",
        "Michigan" => "MI",
        "Minnesota" => "MN",
        "Mississippi" => "MS",
        "Missouri" => "MO",
        "Montana" => "MT",
        "Nebraska" => "NE",
        "Nevada" => "NV",
        "New Hampshire" => "NH",
        "New Jersey" => "NJ",
        "New Mexico" => "NM",
        "New York" => "NY",
        "North Carolina" => "NC",
        "North Dakota" => "ND",
        "Ohio" => "OH",
        "Oklahoma" => "OK",
        "Oregon" => "OR",
        "Pennsylvania" => "PA",
        "Rhode Island" => "RI",
        "South Carolina" => "SC",
        "South Dakota" => "SD",
        "Tennessee" => "TN",
        "Texas" => "TX",
        "Utah" => "UT",
        "Vermont" => "VT",
        "Virginia" => "VA",
        "Washington" => "WA",
        "West Virginia" => "WV",
        "Wisconsin" => "WI",
        "Wyoming" => "WY",
        _ => return None,
    };
    Some(code)
}

/// Check whether a state keys its sole district as `<code>-AL`.
pub fn is_at_large_state(code: &str) -> bool {
    AT_LARGE_STATES.contains(&code)
}
