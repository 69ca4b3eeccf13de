//! Input reading and data source handling.

mod gun_laws;
mod parser;
mod source;

pub use gun_laws::GunLawTable;
pub use parser::{Parser, ParserConfig, detect_delimiter};
pub use source::{DataTable, RawRow, SourceMetadata};
