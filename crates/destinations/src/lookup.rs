//! Static lookup tables: party codes, state names, and known misspellings.
//!
//! All tables are built once on first use and never mutated.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::record::{CostOfLivingLabel, Party};

// =============================================================================
// TABLE DATA
// =============================================================================

const PARTY_CODES: &[(&str, Party)] = &[
    ("R", Party::Republican),
    ("D", Party::Democrat),
    ("I", Party::Independent),
    ("N", Party::Nonpartisan),
    ("M", Party::Nonpartisan),
];

const STATE_CODES: &[(&str, &str)] = &[
    ("AK", "Alaska"),
    ("AL", "Alabama"),
    ("AR", "Arkansas"),
    ("AZ", "Arizona"),
    ("CA", "California"),
    ("CO", "Colorado"),
    ("CT", "Connecticut"),
    ("DC", "District of Columbia"),
    ("DE", "Delaware"),
    ("FL", "Florida"),
    ("GA", "Georgia"),
    ("HI", "Hawaii"),
    ("IA", "Iowa"),
    ("ID", "Idaho"),
    ("IL", "Illinois"),
    ("IN", "Indiana"),
    ("KS", "Kansas"),
    ("KY", "Kentucky"),
    ("LA", "Louisiana"),
    ("MA", "Massachusetts"),
    ("MD", "Maryland"),
    ("ME", "Maine"),
    ("MI", "Michigan"),
    ("MN", "Minnesota"),
    ("MO", "Missouri"),
    ("MS", "Mississippi"),
    ("MT", "Montana"),
    ("NC", "North Carolina"),
    ("ND", "North Dakota"),
    ("NE", "Nebraska"),
    ("NH", "New Hampshire"),
    ("NJ", "New Jersey"),
    ("NM", "New Mexico"),
    ("NV", "Nevada"),
    ("NY", "New York"),
    ("OH", "Ohio"),
    ("OK", "Oklahoma"),
    ("OR", "Oregon"),
    ("PA", "Pennsylvania"),
    ("RI", "Rhode Island"),
    ("SC", "South Carolina"),
    ("SD", "South Dakota"),
    ("TN", "Tennessee"),
    ("TX", "Texas"),
    ("UT", "Utah"),
    ("VA", "Virginia"),
    ("VT", "Vermont"),
    ("WA", "Washington"),
    ("WI", "Wisconsin"),
    ("WV", "West Virginia"),
    ("WY", "Wyoming"),
];

const CITY_FIXES: &[(&str, &str)] = &[("Lousville", "Louisville"), ("Tuscon", "Tucson")];

const STATE_FIXES: &[(&str, &str)] = &[("Tennesee", "Tennessee")];

/// Representative index for each label found in older vintages, chosen so
/// that classifying the index gives back the same label.
const COST_OF_LIVING_LABELS: &[(CostOfLivingLabel, u32)] = &[
    (CostOfLivingLabel::Low, 75),
    (CostOfLivingLabel::LowMedium, 94),
    (CostOfLivingLabel::Medium, 100),
    (CostOfLivingLabel::High, 110),
    (CostOfLivingLabel::VeryHigh, 125),
];

// =============================================================================
// LAZY MAPS
// =============================================================================

static PARTY_MAP: Lazy<HashMap<&'static str, Party>> =
    Lazy::new(|| PARTY_CODES.iter().copied().collect());

static STATE_BY_CODE: Lazy<HashMap<&'static str, &'static str>> =
    Lazy::new(|| STATE_CODES.iter().copied().collect());

static CODE_BY_STATE: Lazy<HashMap<&'static str, &'static str>> =
    Lazy::new(|| STATE_CODES.iter().map(|&(code, name)| (name, code)).collect());

static CITY_FIX_MAP: Lazy<HashMap<&'static str, &'static str>> =
    Lazy::new(|| CITY_FIXES.iter().copied().collect());

static STATE_FIX_MAP: Lazy<HashMap<&'static str, &'static str>> =
    Lazy::new(|| STATE_FIXES.iter().copied().collect());

// =============================================================================
// LOOKUPS
// =============================================================================

/// Resolve a party code. Returns `None` for blank or unmapped codes so the
/// caller can both default to [`Party::Independent`] and record the miss.
pub fn lookup_party(code: &str) -> Option<Party> {
    let normalized = code.trim().to_ascii_uppercase();
    PARTY_MAP.get(normalized.as_str()).copied()
}

/// Resolve a party code, defaulting blank or unmapped codes to independent.
pub fn party_from_code(code: &str) -> Party {
    lookup_party(code).unwrap_or_default()
}

/// Full state name for a two-letter code.
pub fn state_name(code: &str) -> Option<&'static str> {
    STATE_BY_CODE.get(code.trim()).copied()
}

/// Two-letter code for a full state name.
pub fn state_code(name: &str) -> Option<&'static str> {
    CODE_BY_STATE.get(name.trim()).copied()
}

/// Expand a state code to its full name; anything else passes through.
pub fn expand_state(value: &str) -> &str {
    state_name(value).unwrap_or(value)
}

/// Exact-match spelling correction for a city name.
pub fn fix_city(city: &str) -> &str {
    CITY_FIX_MAP.get(city).copied().unwrap_or(city)
}

/// Exact-match spelling correction for a state name.
pub fn fix_state(state: &str) -> &str {
    STATE_FIX_MAP.get(state).copied().unwrap_or(state)
}

/// Representative index for a cost-of-living label.
pub fn cost_of_living_for_label(label: CostOfLivingLabel) -> u32 {
    COST_OF_LIVING_LABELS
        .iter()
        .find(|(l, _)| *l == label)
        .map(|&(_, index)| index)
        .unwrap_or(crate::classify::DEFAULT_COST_OF_LIVING)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::cost_of_living_label;

    #[test]
    fn test_party_codes() {
        assert_eq!(party_from_code("R"), Party::Republican);
        assert_eq!(party_from_code(" d "), Party::Democrat);
        assert_eq!(party_from_code("N"), Party::Nonpartisan);
        assert_eq!(party_from_code("M"), Party::Nonpartisan);
        assert_eq!(party_from_code("I"), Party::Independent);
    }

    #[test]
    fn test_party_unmapped_defaults_independent() {
        assert_eq!(party_from_code(""), Party::Independent);
        assert_eq!(party_from_code("X"), Party::Independent);
        assert_eq!(lookup_party("X"), None);
        assert_eq!(lookup_party(""), None);
    }

    #[test]
    fn test_state_lookup() {
        assert_eq!(state_name("KY"), Some("Kentucky"));
        assert_eq!(state_code("New Mexico"), Some("NM"));
        assert_eq!(expand_state("AZ"), "Arizona");
        assert_eq!(expand_state("Arizona"), "Arizona");
        assert_eq!(expand_state("ZZ"), "ZZ");
        assert_eq!(STATE_BY_CODE.len(), STATE_CODES.len());
    }

    #[test]
    fn test_spelling_fixes_are_exact_match() {
        assert_eq!(fix_city("Lousville"), "Louisville");
        assert_eq!(fix_city("Tuscon"), "Tucson");
        assert_eq!(fix_city("lousville"), "lousville");
        assert_eq!(fix_state("Tennesee"), "Tennessee");
        assert_eq!(fix_state("Texas"), "Texas");
    }

    #[test]
    fn test_label_indices_round_trip() {
        for label in CostOfLivingLabel::ALL {
            assert_eq!(cost_of_living_label(cost_of_living_for_label(label)), label);
        }
    }
}
