//! Destinations: normalizes a hand-curated city/state table into a clean,
//! typed record set.
//!
//! Each input row maps independently to one [`DestinationRecord`]: spelling
//! fixes and code lookups first, then per-field parsing under a uniform
//! "missing means default" policy, then derived classifications and a
//! slug id. The [`Pipeline`] drops rows without a city, orders the rest by
//! (city, state), and writes one JSON array.
//!
//! # Example
//!
//! ```no_run
//! use destinations::Pipeline;
//!
//! let pipeline = Pipeline::new();
//! let result = pipeline.run("data/locations.csv", "data/destinations.json").unwrap();
//!
//! println!("Wrote {} destinations", result.records.len());
//! ```

pub mod audit;
pub mod classify;
pub mod error;
pub mod input;
pub mod lookup;
pub mod output;
pub mod parse;
pub mod record;
pub mod schema;
pub mod slug;

mod pipeline;

pub use crate::pipeline::{
    DuplicateIdPolicy, Pipeline, PipelineConfig, PipelineOutput, RunSummary,
};
pub use audit::{Issue, IssueCounts, IssueKind};
pub use error::{DestinationError, Result};
pub use input::{DataTable, GunLawTable, Parser, ParserConfig, RawRow, SourceMetadata};
pub use output::{to_json, write_records};
pub use record::{BuiltRecord, CostOfLivingLabel, DestinationRecord, FirearmLaws, Party, RecordBuilder};
pub use schema::{ColumnMap, Field};
