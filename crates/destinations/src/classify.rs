//! Derived classifiers.
//!
//! Each classifier is a total, deterministic function of its input.

use crate::parse::{is_placeholder, parse_grade};
use crate::record::{CostOfLivingLabel, FirearmLaws};

/// Cost-of-living index used when the source has none.
pub const DEFAULT_COST_OF_LIVING: u32 = 95;

/// Firearm-law permissiveness from a Giffords letter grade.
///
/// Only the first letter counts: A/B are restrictive, C is moderate, any
/// other letter is permissive. A blank or `Unknown` grade is moderate.
pub fn firearm_laws(grade: &str) -> FirearmLaws {
    let Some(grade) = parse_grade(grade) else {
        return FirearmLaws::Moderate;
    };
    let Some(letter) = grade.to_uppercase().chars().next() else {
        return FirearmLaws::Moderate;
    };
    match letter {
        'A' | 'B' => FirearmLaws::Restrictive,
        'C' => FirearmLaws::Moderate,
        _ => FirearmLaws::Permissive,
    }
}

/// Bucket a cost-of-living index. Upper bounds are inclusive.
pub fn cost_of_living_label(index: u32) -> CostOfLivingLabel {
    match index {
        0..=90 => CostOfLivingLabel::Low,
        91..=97 => CostOfLivingLabel::LowMedium,
        98..=105 => CostOfLivingLabel::Medium,
        106..=120 => CostOfLivingLabel::High,
        _ => CostOfLivingLabel::VeryHigh,
    }
}

/// Append the sunny-day clause to a climate description.
///
/// A zero count leaves the text unchanged. Blank text still gets the clause,
/// leading space included.
pub fn describe_climate(climate: &str, sunny_days: u32) -> String {
    let climate = climate.trim();
    if sunny_days == 0 {
        return climate.to_string();
    }
    format!("{climate} with roughly {sunny_days} sunny days per year.")
}

/// Marijuana status as lower-cased free text, `"unknown"` when blank.
pub fn marijuana_status(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() || is_placeholder(trimmed) {
        "unknown".to_string()
    } else {
        trimmed.to_lowercase()
    }
}
