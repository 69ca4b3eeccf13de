//! Categorical value types carried by a destination record.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Political party of an office holder or state legislature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Party {
    Republican,
    Democrat,
    Independent,
    Nonpartisan,
}

impl Party {
    pub fn as_str(&self) -> &'static str {
        match self {
            Party::Republican => "republican",
            Party::Democrat => "democrat",
            Party::Independent => "independent",
            Party::Nonpartisan => "nonpartisan",
        }
    }
}

impl Default for Party {
    fn default() -> Self {
        Party::Independent
    }
}

impl fmt::Display for Party {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How permissive a state's firearm laws are.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FirearmLaws {
    Restrictive,
    Moderate,
    Permissive,
}

impl FirearmLaws {
    pub fn as_str(&self) -> &'static str {
        match self {
            FirearmLaws::Restrictive => "restrictive",
            FirearmLaws::Moderate => "moderate",
            FirearmLaws::Permissive => "permissive",
        }
    }
}

impl fmt::Display for FirearmLaws {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Bucketed cost-of-living index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum CostOfLivingLabel {
    Low,
    #[serde(rename = "Low/Medium")]
    LowMedium,
    Medium,
    High,
    #[serde(rename = "Very High")]
    VeryHigh,
}

impl CostOfLivingLabel {
    pub const ALL: [CostOfLivingLabel; 5] = [
        CostOfLivingLabel::Low,
        CostOfLivingLabel::LowMedium,
        CostOfLivingLabel::Medium,
        CostOfLivingLabel::High,
        CostOfLivingLabel::VeryHigh,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CostOfLivingLabel::Low => "Low",
            CostOfLivingLabel::LowMedium => "Low/Medium",
            CostOfLivingLabel::Medium => "Medium",
            CostOfLivingLabel::High => "High",
            CostOfLivingLabel::VeryHigh => "Very High",
        }
    }

    /// Parse a display label, case-insensitively.
    pub fn from_label(label: &str) -> Option<Self> {
        let label = label.trim();
        Self::ALL
            .into_iter()
            .find(|l| l.as_str().eq_ignore_ascii_case(label))
    }
}

impl fmt::Display for CostOfLivingLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_party_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&Party::Nonpartisan).unwrap(),
            "\"nonpartisan\""
        );
        assert_eq!(Party::default(), Party::Independent);
    }

    #[test]
    fn test_cost_of_living_label_serialization() {
        assert_eq!(
            serde_json::to_string(&CostOfLivingLabel::LowMedium).unwrap(),
            "\"Low/Medium\""
        );
        assert_eq!(
            serde_json::to_string(&CostOfLivingLabel::VeryHigh).unwrap(),
            "\"Very High\""
        );
    }

    #[test]
    fn test_cost_of_living_from_label() {
        assert_eq!(
            CostOfLivingLabel::from_label("very high"),
            Some(CostOfLivingLabel::VeryHigh)
        );
        assert_eq!(
            CostOfLivingLabel::from_label(" Low/Medium "),
            Some(CostOfLivingLabel::LowMedium)
        );
        assert_eq!(CostOfLivingLabel::from_label("cheap"), None);
    }
}
