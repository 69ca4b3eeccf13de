//! The normalized destination record and its builder.

mod builder;
mod types;

pub use builder::{BuiltRecord, DEFAULT_VETERAN_BENEFIT, RecordBuilder};
pub use types::{CostOfLivingLabel, FirearmLaws, Party};

use std::cmp::Ordering;

use serde::ser::{Serialize, SerializeStruct, Serializer};

use crate::classify::{cost_of_living_label, firearm_laws};

/// Shown for `giffordScore` when no grade is known.
pub const UNKNOWN_GRADE: &str = "Unknown";

/// One normalized city/state record.
///
/// `firearmLaws` and `costOfLivingLabel` are not stored: they are computed
/// from `gifford_score` and `cost_of_living` whenever they are read or
/// serialized.
#[derive(Debug, Clone, PartialEq)]
pub struct DestinationRecord {
    pub id: String,
    pub city: String,
    pub state: String,
    pub state_code: String,
    pub county: String,
    pub state_party: Party,
    pub governor_party: Party,
    pub mayor_party: Party,
    pub population: u64,
    pub density: u64,
    pub sales_tax: f64,
    pub income_tax: f64,
    pub marijuana_status: String,
    /// Letter grade as supplied; `None` when the source had none.
    pub gifford_score: Option<String>,
    pub veteran_benefits: String,
    pub climate: String,
    pub snowfall: f64,
    pub rainfall: f64,
    pub gas_price: f64,
    pub cost_of_living: u32,
    pub sunny_days: u32,
    pub lgbtq_score: i64,
    pub tech_hub: bool,
    pub va_support: bool,
    pub tci_score: i64,
    pub alw_score: i64,
    pub ahs_score: i64,
    pub election_2016_winner: String,
    pub election_2016_percent: f64,
    pub election_2024_winner: String,
    pub election_2024_percent: f64,
    pub election_change: String,
}

impl DestinationRecord {
    pub fn firearm_laws(&self) -> FirearmLaws {
        firearm_laws(self.gifford_score.as_deref().unwrap_or(""))
    }

    pub fn cost_of_living_label(&self) -> CostOfLivingLabel {
        cost_of_living_label(self.cost_of_living)
    }

    /// Grade as written to output.
    pub fn gifford_display(&self) -> &str {
        self.gifford_score.as_deref().unwrap_or(UNKNOWN_GRADE)
    }

    /// A record without a city (or whose city yields no id) is dropped.
    pub fn is_valid(&self) -> bool {
        !self.city.is_empty() && !self.id.is_empty()
    }

    /// Output ordering: city, then state, plain byte-wise comparison.
    pub fn cmp_by_location(&self, other: &Self) -> Ordering {
        (self.city.as_str(), self.state.as_str()).cmp(&(other.city.as_str(), other.state.as_str()))
    }
}

impl Serialize for DestinationRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut s = serializer.serialize_struct("DestinationRecord", 34)?;
        s.serialize_field("id", &self.id)?;
        s.serialize_field("stateCode", &self.state_code)?;
        s.serialize_field("city", &self.city)?;
        s.serialize_field("county", &self.county)?;
        s.serialize_field("state", &self.state)?;
        s.serialize_field("stateParty", &self.state_party)?;
        s.serialize_field("governorParty", &self.governor_party)?;
        s.serialize_field("mayorParty", &self.mayor_party)?;
        s.serialize_field("population", &self.population)?;
        s.serialize_field("density", &self.density)?;
        s.serialize_field("salesTax", &self.sales_tax)?;
        s.serialize_field("incomeTax", &self.income_tax)?;
        s.serialize_field("marijuanaStatus", &self.marijuana_status)?;
        s.serialize_field("firearmLaws", &self.firearm_laws())?;
        s.serialize_field("giffordScore", self.gifford_display())?;
        s.serialize_field("veteranBenefits", &self.veteran_benefits)?;
        s.serialize_field("climate", &self.climate)?;
        s.serialize_field("snowfall", &self.snowfall)?;
        s.serialize_field("rainfall", &self.rainfall)?;
        s.serialize_field("gasPrice", &self.gas_price)?;
        s.serialize_field("costOfLiving", &self.cost_of_living)?;
        s.serialize_field("costOfLivingLabel", &self.cost_of_living_label())?;
        s.serialize_field("sunnyDays", &self.sunny_days)?;
        s.serialize_field("lgbtqScore", &self.lgbtq_score)?;
        s.serialize_field("techHub", &self.tech_hub)?;
        s.serialize_field("vaSupport", &self.va_support)?;
        s.serialize_field("tciScore", &self.tci_score)?;
        s.serialize_field("alwScore", &self.alw_score)?;
        s.serialize_field("ahsScore", &self.ahs_score)?;
        s.serialize_field("election2016Winner", &self.election_2016_winner)?;
        s.serialize_field("election2016Percent", &self.election_2016_percent)?;
        s.serialize_field("election2024Winner", &self.election_2024_winner)?;
        s.serialize_field("election2024Percent", &self.election_2024_percent)?;
        s.serialize_field("electionChange", &self.election_change)?;
        s.end()
    }
}
