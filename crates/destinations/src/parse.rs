//! Cell parsers.
//!
//! Every parser is total: empty, placeholder, or unparseable text yields the
//! documented default instead of an error. Numeric parsers report how the
//! value was obtained through [`ParseOutcome`] so defaulting stays auditable.

use serde::{Deserialize, Serialize};

use crate::record::UNKNOWN_GRADE;

/// Characters dropped from decimal cells before parsing.
const CURRENCY_NOISE: &[char] = &['$', '€', '£', ','];

/// Tokens curators use for "unknown".
const PLACEHOLDERS: &[&str] = &["?", "na", "n/a"];

/// Tokens that read as `true`.
const AFFIRMATIVE: &[&str] = &["y", "yes", "true"];

/// How a parsed value was obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParseOutcome {
    /// The cell held a usable value.
    Parsed,
    /// The cell was empty or whitespace.
    Blank,
    /// The cell held a placeholder token such as `?`.
    Placeholder,
    /// The cell held text that could not be parsed.
    Malformed,
}

/// A parsed value plus how it was obtained.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Parsed<T> {
    pub value: T,
    pub outcome: ParseOutcome,
}

impl<T> Parsed<T> {
    pub fn parsed(value: T) -> Self {
        Self {
            value,
            outcome: ParseOutcome::Parsed,
        }
    }

    pub fn defaulted(value: T, outcome: ParseOutcome) -> Self {
        Self { value, outcome }
    }

    /// True when the value is a substituted default.
    pub fn is_defaulted(&self) -> bool {
        self.outcome != ParseOutcome::Parsed
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Parsed<U> {
        Parsed {
            value: f(self.value),
            outcome: self.outcome,
        }
    }
}

/// Check whether a cell is a placeholder for "unknown".
pub fn is_placeholder(raw: &str) -> bool {
    let trimmed = raw.trim();
    PLACEHOLDERS.iter().any(|p| trimmed.eq_ignore_ascii_case(p))
}

/// Round to two decimal places. Values too large to scale are returned as is.
pub fn round2(value: f64) -> f64 {
    let scaled = value * 100.0;
    if scaled.is_finite() {
        scaled.round() / 100.0
    } else {
        value
    }
}

/// Classify a blank or placeholder cell, returning the cleaned text otherwise.
fn prepare<'a>(raw: &'a str) -> Result<&'a str, ParseOutcome> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        Err(ParseOutcome::Blank)
    } else if is_placeholder(trimmed) {
        Err(ParseOutcome::Placeholder)
    } else {
        Ok(trimmed)
    }
}

fn parse_finite(text: &str) -> Option<f64> {
    text.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Decimal/currency parser: `"$1,234.50"` -> `1234.5`. Defaults to `0.0`.
pub fn parse_decimal(raw: &str) -> Parsed<f64> {
    let text = match prepare(raw) {
        Ok(t) => t,
        Err(outcome) => return Parsed::defaulted(0.0, outcome),
    };
    let cleaned: String = text.chars().filter(|c| !CURRENCY_NOISE.contains(c)).collect();
    match parse_finite(cleaned.trim()) {
        Some(v) => Parsed::parsed(round2(v)),
        None => Parsed::defaulted(0.0, ParseOutcome::Malformed),
    }
}

/// Integer parser: strips thousands separators and truncates any fraction,
/// so `"1,234.9"` -> `1234`. Defaults to `0`.
pub fn parse_integer(raw: &str) -> Parsed<i64> {
    let text = match prepare(raw) {
        Ok(t) => t,
        Err(outcome) => return Parsed::defaulted(0, outcome),
    };
    let cleaned = text.replace(',', "");
    match parse_finite(cleaned.trim()) {
        Some(v) => Parsed::parsed(v.trunc() as i64),
        None => Parsed::defaulted(0, ParseOutcome::Malformed),
    }
}

/// Non-negative integer parser. Negative values are treated as malformed.
pub fn parse_count(raw: &str) -> Parsed<u64> {
    let parsed = parse_integer(raw);
    match u64::try_from(parsed.value) {
        Ok(v) => Parsed {
            value: v,
            outcome: parsed.outcome,
        },
        Err(_) => Parsed::defaulted(0, ParseOutcome::Malformed),
    }
}

/// Percentage parser: strips one trailing `%`, rounds to two places.
/// Defaults to `0.0`.
pub fn parse_percent(raw: &str) -> Parsed<f64> {
    let text = match prepare(raw) {
        Ok(t) => t,
        Err(outcome) => return Parsed::defaulted(0.0, outcome),
    };
    let text = text.strip_suffix('%').unwrap_or(text).trim();
    match parse_finite(text) {
        Some(v) => Parsed::parsed(round2(v)),
        None => Parsed::defaulted(0.0, ParseOutcome::Malformed),
    }
}

/// Boolean parser: case-insensitive `y`, `yes`, or `true`; anything else is
/// `false`.
pub fn parse_bool(raw: &str) -> bool {
    let trimmed = raw.trim();
    AFFIRMATIVE.iter().any(|t| trimmed.eq_ignore_ascii_case(t))
}

/// Free-text parser: trimmed text, or empty.
pub fn parse_text(raw: &str) -> String {
    raw.trim().to_string()
}

/// Free-text parser with a default for empty cells.
pub fn parse_text_or(raw: &str, default: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        default.to_string()
    } else {
        trimmed.to_string()
    }
}

/// Letter-grade parser. Blank, placeholder, and `Unknown` cells carry no
/// grade.
pub fn parse_grade(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || is_placeholder(trimmed) || trimmed.eq_ignore_ascii_case(UNKNOWN_GRADE) {
        None
    } else {
        Some(trimmed.to_string())
    }
}
