//! Builds one [`DestinationRecord`] from one raw row.

use super::{DestinationRecord, Party};
use crate::audit::{Issue, IssueKind};
use crate::classify::{DEFAULT_COST_OF_LIVING, describe_climate, marijuana_status};
use crate::input::{GunLawTable, RawRow};
use crate::lookup::{
    cost_of_living_for_label, fix_city, fix_state, lookup_party, state_code, state_name,
};
use crate::parse::{
    ParseOutcome, Parsed, parse_bool, parse_count, parse_decimal, parse_grade, parse_integer,
    parse_percent, parse_text, parse_text_or,
};
use crate::record::CostOfLivingLabel;
use crate::schema::{ColumnMap, Field};
use crate::slug::destination_id;

/// Written when a row names no veteran benefit.
pub const DEFAULT_VETERAN_BENEFIT: &str = "No state-specific veteran benefit noted.";

/// A built record plus everything that was defaulted along the way.
#[derive(Debug, Clone)]
pub struct BuiltRecord {
    /// 0-based source row index.
    pub row: usize,
    pub record: DestinationRecord,
    pub issues: Vec<Issue>,
}

/// Maps raw rows to records. Holds only read-only configuration, so the same
/// builder can be reused for every row.
pub struct RecordBuilder<'a> {
    columns: &'a ColumnMap,
    gun_laws: Option<&'a GunLawTable>,
}

impl<'a> RecordBuilder<'a> {
    pub fn new(columns: &'a ColumnMap) -> Self {
        Self {
            columns,
            gun_laws: None,
        }
    }

    /// Use a per-state gun-law table for rows without their own grade.
    pub fn with_gun_laws(mut self, gun_laws: &'a GunLawTable) -> Self {
        self.gun_laws = Some(gun_laws);
        self
    }

    /// Build the record for one row. Never fails; bad cells become defaults
    /// and are listed in [`BuiltRecord::issues`].
    pub fn build(&self, row: &RawRow<'_>) -> BuiltRecord {
        let get = |field: Field| self.columns.get(row, field);

        let city = fix_city(get(Field::City).trim()).to_string();
        let (state, code) = resolve_state(fix_state(get(Field::State).trim()));

        let mut audit = RowAudit {
            row: row.index,
            city: &city,
            state: &state,
            issues: Vec::new(),
        };
        let mut read = |field: Field, parser: fn(&str) -> Parsed<f64>| {
            audit.number(field, get(field), parser(get(field)))
        };
        let sales_tax = read(Field::SalesTax, parse_percent);
        let income_tax = read(Field::IncomeTax, parse_percent);
        let snowfall = read(Field::Snowfall, parse_decimal);
        let rainfall = read(Field::Rainfall, parse_decimal);
        let gas_price = read(Field::GasPrice, parse_decimal);
        let election_2016_percent = read(Field::Election2016Percent, parse_percent);
        let election_2024_percent = read(Field::Election2024Percent, parse_percent);

        let mut score = |field: Field| audit.number(field, get(field), parse_integer(get(field)));
        let lgbtq_score = score(Field::Lgbtq);
        let tci_score = score(Field::Tci);
        let alw_score = score(Field::Alw);
        let ahs_score = score(Field::Ahs);

        let mut count = |field: Field| audit.number(field, get(field), parse_count(get(field)));
        let population = count(Field::Population);
        let density = count(Field::Density);
        let sunny_days = u32::try_from(count(Field::SunnyDays)).unwrap_or(u32::MAX);

        for (field, value) in [(Field::Population, population), (Field::Density, density)] {
            if value == 0 && self.columns.maps(field) {
                audit.push(
                    field,
                    IssueKind::Missing,
                    get(field),
                    format!("missing {} value", field.output_name()),
                );
            }
        }

        let state_party = audit.party(Field::StateParty, get(Field::StateParty));
        let governor_party = audit.party(Field::Governor, get(Field::Governor));
        let mayor_party = audit.party(Field::Mayor, get(Field::Mayor));
        let cost_of_living = audit.cost_of_living(get(Field::CostOfLiving));
        let issues = audit.issues;

        let record = DestinationRecord {
            id: destination_id(&city, &state),
            state_code: code.unwrap_or_default().to_string(),
            county: parse_text(get(Field::County)),
            state_party,
            governor_party,
            mayor_party,
            population,
            density,
            sales_tax,
            income_tax,
            marijuana_status: marijuana_status(get(Field::Marijuana)),
            gifford_score: self.gifford_score(get(Field::GiffordScore), code),
            veteran_benefits: parse_text_or(get(Field::VeteranBenefits), DEFAULT_VETERAN_BENEFIT),
            climate: describe_climate(get(Field::Climate), sunny_days),
            snowfall,
            rainfall,
            gas_price,
            cost_of_living,
            sunny_days,
            lgbtq_score,
            tech_hub: parse_bool(get(Field::TechHub)),
            va_support: parse_bool(get(Field::VaSupport)),
            tci_score,
            alw_score,
            ahs_score,
            election_2016_winner: parse_text(get(Field::Election2016Winner)),
            election_2016_percent,
            election_2024_winner: parse_text(get(Field::Election2024Winner)),
            election_2024_percent,
            election_change: parse_text(get(Field::ElectionChange)),
            city,
            state,
        };

        BuiltRecord {
            row: row.index,
            record,
            issues,
        }
    }

    /// The row's own grade wins; the side table fills blanks. A literal
    /// `Unknown` counts as blank.
    fn gifford_score(&self, raw: &str, code: Option<&str>) -> Option<String> {
        if let Some(own) = parse_grade(raw) {
            return Some(own);
        }
        let table = self.gun_laws?;
        table
            .gifford_score(code?)
            .map(|grade| grade.to_string())
    }
}

/// Expand a state code to its name, or find the code for a full name.
fn resolve_state(value: &str) -> (String, Option<&'static str>) {
    if value.len() == 2 {
        let upper = value.to_ascii_uppercase();
        if let Some(name) = state_name(&upper) {
            return (name.to_string(), state_code(name));
        }
    }
    (value.to_string(), state_code(value))
}

/// Collects issues for one row while its fields are parsed.
struct RowAudit<'r> {
    row: usize,
    city: &'r str,
    state: &'r str,
    issues: Vec<Issue>,
}

impl RowAudit<'_> {
    fn push(&mut self, field: Field, kind: IssueKind, raw: &str, message: String) {
        let raw = raw.trim();
        self.issues.push(Issue {
            row: self.row,
            city: self.city.to_string(),
            state: self.state.to_string(),
            field: Some(field),
            kind,
            raw: (!raw.is_empty()).then(|| raw.to_string()),
            message,
        });
    }

    /// Unwrap a parsed number, recording placeholder and malformed cells.
    fn number<T>(&mut self, field: Field, raw: &str, parsed: Parsed<T>) -> T {
        if let Some(kind) = IssueKind::from_outcome(parsed.outcome) {
            let message = match kind {
                IssueKind::Placeholder => format!("{} reported as '{}'", field.output_name(), raw.trim()),
                _ => format!("could not parse {} from '{}'", field.output_name(), raw.trim()),
            };
            self.push(field, kind, raw, message);
        }
        parsed.value
    }

    fn party(&mut self, field: Field, raw: &str) -> Party {
        match lookup_party(raw) {
            Some(party) => party,
            None => {
                if !raw.trim().is_empty() {
                    self.push(
                        field,
                        IssueKind::UnmappedCode,
                        raw,
                        format!("unknown party code '{}' for {}", raw.trim(), field.output_name()),
                    );
                }
                Party::default()
            }
        }
    }

    /// Numeric index, or a label from older vintages; anything else falls
    /// back to the default index.
    fn cost_of_living(&mut self, raw: &str) -> u32 {
        if let Some(label) = CostOfLivingLabel::from_label(raw) {
            return cost_of_living_for_label(label);
        }
        let parsed = parse_integer(raw);
        match parsed.outcome {
            ParseOutcome::Parsed => match u32::try_from(parsed.value) {
                Ok(index) if index > 0 => index,
                _ => {
                    self.push(
                        Field::CostOfLiving,
                        IssueKind::Malformed,
                        raw,
                        format!("cost of living index '{}' is not positive", raw.trim()),
                    );
                    DEFAULT_COST_OF_LIVING
                }
            },
            outcome => {
                self.number(Field::CostOfLiving, raw, Parsed::defaulted((), outcome));
                DEFAULT_COST_OF_LIVING
            }
        }
    }
}
