//! URL-safe identifiers derived from display fields.

use once_cell::sync::Lazy;
use regex::Regex;

static NON_ALNUM: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^a-z0-9]+").unwrap());

/// Lower-case, collapse every non-alphanumeric run into one hyphen, and trim
/// hyphens from both ends.
pub fn slugify(value: &str) -> String {
    let lowered = value.to_lowercase();
    NON_ALNUM
        .replace_all(&lowered, "-")
        .trim_matches('-')
        .to_string()
}

/// Record id for a city/state pair.
pub fn destination_id(city: &str, state: &str) -> String {
    slugify(&format!("{city}-{state}"))
}

/// Check that a string already has slug shape.
pub fn is_slug(value: &str) -> bool {
    !value.is_empty()
        && !value.starts_with('-')
        && !value.ends_with('-')
        && !value.contains("--")
        && value
            .bytes()
            .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'-')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("St. Louis"), "st-louis");
        assert_eq!(slugify("  Coeur d'Alene  "), "coeur-d-alene");
        assert_eq!(slugify("--Already--Hyphenated--"), "already-hyphenated");
        assert_eq!(slugify("???"), "");
    }

    #[test]
    fn test_destination_id() {
        assert_eq!(destination_id("Louisville", "Kentucky"), "louisville-kentucky");
        assert_eq!(
            destination_id("Winston-Salem", "North Carolina"),
            "winston-salem-north-carolina"
        );
        assert_eq!(destination_id("Boise", ""), "boise");
    }

    #[test]
    fn test_non_ascii_letters_collapse() {
        assert_eq!(slugify("Española"), "espa-ola");
    }

    #[test]
    fn test_is_slug() {
        assert!(is_slug("st-louis-missouri"));
        assert!(!is_slug(""));
        assert!(!is_slug("-st-louis"));
        assert!(!is_slug("St-Louis"));
        assert!(!is_slug("st--louis"));
    }
}
