//! Pipeline driver: read, build, filter, sort, write.

use std::collections::HashMap;
use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::audit::{Issue, IssueCounts, IssueKind};
use crate::error::{DestinationError, Result};
use crate::input::{DataTable, GunLawTable, Parser, ParserConfig, SourceMetadata};
use crate::output::write_records;
use crate::record::{DestinationRecord, RecordBuilder};
use crate::schema::{ColumnMap, Field};

/// What to do when two records share an id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DuplicateIdPolicy {
    /// Keep both and report the collision.
    #[default]
    Keep,
    /// Fail the run before anything is written.
    Reject,
}

impl FromStr for DuplicateIdPolicy {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "keep" | "allow" => Ok(DuplicateIdPolicy::Keep),
            "reject" | "error" => Ok(DuplicateIdPolicy::Reject),
            _ => Err(format!("Unknown duplicate-id policy: {}. Use keep or reject.", s)),
        }
    }
}

impl fmt::Display for DuplicateIdPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DuplicateIdPolicy::Keep => write!(f, "keep"),
            DuplicateIdPolicy::Reject => write!(f, "reject"),
        }
    }
}

/// Configuration for a pipeline run.
#[derive(Debug, Clone, Default)]
pub struct PipelineConfig {
    /// Input reader configuration.
    pub parser: ParserConfig,
    /// Column names for each field.
    pub columns: ColumnMap,
    /// Id collision handling.
    pub duplicate_ids: DuplicateIdPolicy,
    /// Optional per-state gun-law grades.
    pub gun_laws: Option<GunLawTable>,
}

/// Counts describing one run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunSummary {
    /// Column map version used.
    pub schema_version: String,
    /// Data rows in the source.
    pub rows_read: usize,
    /// Records dropped for lacking a city.
    pub records_dropped: usize,
    /// Records in the final collection.
    pub records_kept: usize,
    /// Mapped fields with no matching column in the header.
    pub missing_fields: Vec<Field>,
    /// Issues by kind.
    pub issues: IssueCounts,
}

/// Result of processing a source file.
#[derive(Debug, Clone)]
pub struct PipelineOutput {
    pub source: SourceMetadata,
    /// Valid records ordered by (city, state).
    pub records: Vec<DestinationRecord>,
    /// Issues from every row, including dropped ones, in source order.
    pub issues: Vec<Issue>,
    pub summary: RunSummary,
}

/// Batch normalization pipeline.
pub struct Pipeline {
    config: PipelineConfig,
    parser: Parser,
}

impl Pipeline {
    /// Create a pipeline with default configuration (current column map).
    pub fn new() -> Self {
        Self::with_config(PipelineConfig::default())
    }

    pub fn with_config(config: PipelineConfig) -> Self {
        let parser = Parser::with_config(config.parser.clone());
        Self { config, parser }
    }

    pub fn with_columns(mut self, columns: ColumnMap) -> Self {
        self.config.columns = columns;
        self
    }

    pub fn with_gun_laws(mut self, gun_laws: GunLawTable) -> Self {
        self.config.gun_laws = Some(gun_laws);
        self
    }

    pub fn with_duplicate_ids(mut self, policy: DuplicateIdPolicy) -> Self {
        self.config.duplicate_ids = policy;
        self
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Read and transform a source file without writing anything.
    pub fn process(&self, input: impl AsRef<Path>) -> Result<PipelineOutput> {
        let input = input.as_ref();
        let (table, source) = self.parser.parse_file(input)?;
        info!(
            file = %source.file,
            rows = source.row_count,
            hash = %source.hash,
            "loaded source"
        );

        let (records, issues, summary) = self.process_table(&table)?;
        Ok(PipelineOutput {
            source,
            records,
            issues,
            summary,
        })
    }

    /// Full run: process `input` and overwrite `output` with the result.
    ///
    /// Nothing is written unless every stage succeeds.
    pub fn run(&self, input: impl AsRef<Path>, output: impl AsRef<Path>) -> Result<PipelineOutput> {
        let result = self.process(input)?;
        let output = output.as_ref();
        write_records(output, &result.records)?;
        info!(
            path = %output.display(),
            records = result.records.len(),
            "wrote destinations"
        );
        Ok(result)
    }

    /// Build, filter, order, and check ids for an in-memory table.
    pub fn process_table(
        &self,
        table: &DataTable,
    ) -> Result<(Vec<DestinationRecord>, Vec<Issue>, RunSummary)> {
        let columns = &self.config.columns;
        let mut builder = RecordBuilder::new(columns);
        if let Some(ref gun_laws) = self.config.gun_laws {
            builder = builder.with_gun_laws(gun_laws);
        }

        let missing_fields = columns.missing_fields(&table.headers);
        if !missing_fields.is_empty() {
            debug!(?missing_fields, version = %columns.version, "mapped fields absent from header");
        }

        let mut issues = Vec::new();
        let mut built = Vec::with_capacity(table.row_count());
        for row in table.raw_rows() {
            let result = builder.build(&row);
            debug!(row = result.row, id = %result.record.id, "built record");
            for issue in &result.issues {
                warn!(row = issue.row, kind = issue.kind.label(), "{}", issue);
            }
            issues.extend(result.issues);
            built.push((result.row, result.record));
        }

        let rows_read = built.len();
        built.retain(|(row, record)| {
            let keep = record.is_valid();
            if !keep {
                debug!(row, "dropping record without a city");
            }
            keep
        });
        let records_dropped = rows_read - built.len();

        for (id, first_row, second_row, record) in find_duplicate_ids(&built) {
            match self.config.duplicate_ids {
                DuplicateIdPolicy::Reject => {
                    return Err(DestinationError::DuplicateId {
                        id,
                        first_row,
                        second_row,
                    });
                }
                DuplicateIdPolicy::Keep => {
                    let issue = Issue {
                        row: second_row,
                        city: record.city.clone(),
                        state: record.state.clone(),
                        field: None,
                        kind: IssueKind::DuplicateId,
                        raw: Some(id.clone()),
                        message: format!("id '{}' already used by row {}", id, first_row),
                    };
                    warn!(row = second_row, "{}", issue);
                    issues.push(issue);
                }
            }
        }

        built.sort_by(|(_, a), (_, b)| a.cmp_by_location(b));
        let records: Vec<DestinationRecord> = built.into_iter().map(|(_, r)| r).collect();

        let summary = RunSummary {
            schema_version: columns.version.clone(),
            rows_read,
            records_dropped,
            records_kept: records.len(),
            missing_fields,
            issues: IssueCounts::from_issues(&issues),
        };

        Ok((records, issues, summary))
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}

/// Every later occurrence of an id already seen, with the row that first
/// used it. `records` must still be in source order.
fn find_duplicate_ids(
    records: &[(usize, DestinationRecord)],
) -> Vec<(String, usize, usize, &DestinationRecord)> {
    let mut first_seen: HashMap<&str, usize> = HashMap::new();
    let mut duplicates = Vec::new();
    for (row, record) in records {
        match first_seen.get(record.id.as_str()) {
            Some(&first) => duplicates.push((record.id.clone(), first, *row, record)),
            None => {
                first_seen.insert(record.id.as_str(), *row);
            }
        }
    }
    duplicates
}
