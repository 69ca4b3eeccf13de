//! CLI command implementations.

pub mod check;
pub mod import;

use destinations::{ColumnMap, GunLawTable, ParserConfig, Pipeline, PipelineConfig};
use tracing::debug;

use crate::cli::SourceArgs;

/// Assemble a pipeline from the shared source flags.
pub(crate) fn build_pipeline(args: &SourceArgs) -> Result<Pipeline, Box<dyn std::error::Error>> {
    let columns = match args.columns {
        Some(ref path) => ColumnMap::load(path)?,
        None => ColumnMap::for_version(&args.schema)?,
    };

    let gun_laws = match args.gun_laws {
        Some(ref path) => Some(GunLawTable::load(path)?),
        None => None,
    };

    debug!(
        columns = %columns.version,
        gun_laws = gun_laws.as_ref().map_or(0, |t| t.len()),
        duplicate_ids = %args.duplicate_ids,
        "Configured pipeline"
    );

    let config = PipelineConfig {
        parser: ParserConfig {
            delimiter: args.delimiter.map(|d| d.0),
            ..ParserConfig::default()
        },
        columns,
        duplicate_ids: args.duplicate_ids,
        gun_laws,
    };

    Ok(Pipeline::with_config(config))
}
