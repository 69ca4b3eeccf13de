//! Source fields consumed by the record builder.

use serde::{Deserialize, Serialize};

/// A logical input field. Column maps bind each field to concrete column
/// names, so renamed columns never reach the builder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    City,
    State,
    County,
    StateParty,
    Governor,
    Mayor,
    Population,
    Density,
    SalesTax,
    IncomeTax,
    Marijuana,
    GiffordScore,
    VeteranBenefits,
    Climate,
    Snowfall,
    Rainfall,
    GasPrice,
    CostOfLiving,
    SunnyDays,
    Lgbtq,
    TechHub,
    VaSupport,
    Tci,
    Alw,
    Ahs,
    #[serde(rename = "election_2016_winner")]
    Election2016Winner,
    #[serde(rename = "election_2016_percent")]
    Election2016Percent,
    #[serde(rename = "election_2024_winner")]
    Election2024Winner,
    #[serde(rename = "election_2024_percent")]
    Election2024Percent,
    ElectionChange,
}

impl Field {
    pub const ALL: [Field; 30] = [
        Field::City,
        Field::State,
        Field::County,
        Field::StateParty,
        Field::Governor,
        Field::Mayor,
        Field::Population,
        Field::Density,
        Field::SalesTax,
        Field::IncomeTax,
        Field::Marijuana,
        Field::GiffordScore,
        Field::VeteranBenefits,
        Field::Climate,
        Field::Snowfall,
        Field::Rainfall,
        Field::GasPrice,
        Field::CostOfLiving,
        Field::SunnyDays,
        Field::Lgbtq,
        Field::TechHub,
        Field::VaSupport,
        Field::Tci,
        Field::Alw,
        Field::Ahs,
        Field::Election2016Winner,
        Field::Election2016Percent,
        Field::Election2024Winner,
        Field::Election2024Percent,
        Field::ElectionChange,
    ];

    /// Name of the output attribute the field feeds.
    pub fn output_name(&self) -> &'static str {
        match self {
            Field::City => "city",
            Field::State => "state",
            Field::County => "county",
            Field::StateParty => "stateParty",
            Field::Governor => "governorParty",
            Field::Mayor => "mayorParty",
            Field::Population => "population",
            Field::Density => "density",
            Field::SalesTax => "salesTax",
            Field::IncomeTax => "incomeTax",
            Field::Marijuana => "marijuanaStatus",
            Field::GiffordScore => "giffordScore",
            Field::VeteranBenefits => "veteranBenefits",
            Field::Climate => "climate",
            Field::Snowfall => "snowfall",
            Field::Rainfall => "rainfall",
            Field::GasPrice => "gasPrice",
            Field::CostOfLiving => "costOfLiving",
            Field::SunnyDays => "sunnyDays",
            Field::Lgbtq => "lgbtqScore",
            Field::TechHub => "techHub",
            Field::VaSupport => "vaSupport",
            Field::Tci => "tciScore",
            Field::Alw => "alwScore",
            Field::Ahs => "ahsScore",
            Field::Election2016Winner => "election2016Winner",
            Field::Election2016Percent => "election2016Percent",
            Field::Election2024Winner => "election2024Winner",
            Field::Election2024Percent => "election2024Percent",
            Field::ElectionChange => "electionChange",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_all_fields_unique() {
        let set: HashSet<_> = Field::ALL.iter().collect();
        assert_eq!(set.len(), Field::ALL.len());
    }

    #[test]
    fn test_field_serde_names() {
        assert_eq!(serde_json::to_string(&Field::SalesTax).unwrap(), "\"sales_tax\"");
        assert_eq!(
            serde_json::to_string(&Field::Election2024Percent).unwrap(),
            "\"election_2024_percent\""
        );
        let parsed: Field = serde_json::from_str("\"tech_hub\"").unwrap();
        assert_eq!(parsed, Field::TechHub);
    }
}
