//! Versioned column-name mapping.

use std::fs;
use std::path::Path;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::field::Field;
use crate::error::{DestinationError, Result};
use crate::input::RawRow;

/// Built-in column layouts, one per data vintage.
const V1_COLUMNS: &[(Field, &[&str])] = &[
    (Field::City, &["City"]),
    (Field::State, &["State"]),
    (Field::Governor, &["Governor"]),
    (Field::SalesTax, &["Sales Tax"]),
    (Field::IncomeTax, &["Income"]),
    (Field::Marijuana, &["Marijuana"]),
    (Field::GiffordScore, &["Gifford Score"]),
    (Field::VeteranBenefits, &["Veterans Benefits"]),
    (Field::Climate, &["Climate"]),
    (Field::Snowfall, &["Snowfall"]),
    (Field::Rainfall, &["Rainfall"]),
    (Field::GasPrice, &["Gas Price"]),
    (Field::CostOfLiving, &["COL"]),
    (Field::SunnyDays, &["Sun"]),
];

const V2_COLUMNS: &[(Field, &[&str])] = &[
    (Field::City, &["City"]),
    (Field::State, &["State"]),
    (Field::County, &["County"]),
    (Field::StateParty, &["StateParty"]),
    (Field::Governor, &["Governor"]),
    (Field::Mayor, &["Mayor"]),
    (Field::Population, &["Population"]),
    (Field::Density, &["Density"]),
    (Field::SalesTax, &["Sales Tax"]),
    (Field::IncomeTax, &["Income"]),
    (Field::Marijuana, &["Marijuana"]),
    (Field::GiffordScore, &["Gifford Score"]),
    (Field::VeteranBenefits, &["Veterans Benefits"]),
    (Field::Climate, &["Climate"]),
    (Field::Snowfall, &["Snow"]),
    (Field::Rainfall, &["Rain"]),
    (Field::GasPrice, &["Gas"]),
    (Field::CostOfLiving, &["COL"]),
    (Field::SunnyDays, &["Sun"]),
    (Field::Lgbtq, &["LGBTQ"]),
    (Field::TechHub, &["TechHub", "Tech"]),
    (Field::VaSupport, &["VA"]),
    (Field::Tci, &["TCI"]),
    (Field::Alw, &["ALW"]),
    (Field::Ahs, &["AHS"]),
    (Field::Election2016Winner, &["2016Election"]),
    (Field::Election2016Percent, &["2016PresidentPercent"]),
    (Field::Election2024Winner, &["2024 Election"]),
    (Field::Election2024Percent, &["2024PresidentPercent"]),
    (Field::ElectionChange, &["ElectionChange"]),
];

/// Binds each [`Field`] to the column names that may carry it.
///
/// Candidates are tried in order; the first non-blank cell wins. Fields the
/// map leaves out always read as empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnMap {
    /// Label for the data vintage this map describes.
    pub version: String,
    /// Candidate column names per field.
    pub columns: IndexMap<Field, Vec<String>>,
}

impl ColumnMap {
    fn from_table(version: &str, table: &[(Field, &[&str])]) -> Self {
        let columns = table
            .iter()
            .map(|(field, names)| (*field, names.iter().map(|n| n.to_string()).collect()))
            .collect();
        Self {
            version: version.to_string(),
            columns,
        }
    }

    /// Early vintage: long column names, `COL` given as a label.
    pub fn v1() -> Self {
        Self::from_table("v1", V1_COLUMNS)
    }

    /// Current vintage.
    pub fn v2() -> Self {
        Self::from_table("v2", V2_COLUMNS)
    }

    /// Look up a built-in map by version label.
    pub fn for_version(version: &str) -> Result<Self> {
        match version.trim().to_ascii_lowercase().as_str() {
            "v1" | "1" | "legacy" => Ok(Self::v1()),
            "v2" | "2" | "current" => Ok(Self::v2()),
            other => Err(DestinationError::Config(format!(
                "Unknown schema version: {other}. Use v1 or v2."
            ))),
        }
    }

    /// Load a custom map from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|e| DestinationError::io(path, e))?;
        let map: ColumnMap = serde_json::from_str(&text)?;
        map.validate()?;
        Ok(map)
    }

    /// A usable map names the city column and never lists an empty name.
    pub fn validate(&self) -> Result<()> {
        let has_city = self
            .columns
            .get(&Field::City)
            .is_some_and(|names| !names.is_empty());
        if !has_city {
            return Err(DestinationError::Config(format!(
                "Column map '{}' does not map the city field",
                self.version
            )));
        }
        for (field, names) in &self.columns {
            if names.iter().any(|n| n.trim().is_empty()) {
                return Err(DestinationError::Config(format!(
                    "Column map '{}' lists a blank column name for {:?}",
                    self.version, field
                )));
            }
        }
        Ok(())
    }

    /// Whether this map binds the field at all.
    pub fn maps(&self, field: Field) -> bool {
        self.columns.contains_key(&field)
    }

    /// Raw cell text for a field in one row.
    pub fn get<'a>(&self, row: &RawRow<'a>, field: Field) -> &'a str {
        let Some(names) = self.columns.get(&field) else {
            return "";
        };
        names
            .iter()
            .map(|name| row.get(name))
            .find(|value| !value.trim().is_empty())
            .unwrap_or("")
    }

    /// Mapped fields with none of their candidate columns in the header.
    pub fn missing_fields(&self, headers: &[String]) -> Vec<Field> {
        self.columns
            .iter()
            .filter(|(_, names)| !names.iter().any(|n| headers.contains(n)))
            .map(|(field, _)| *field)
            .collect()
    }
}

impl Default for ColumnMap {
    fn default() -> Self {
        Self::v2()
    }
}
