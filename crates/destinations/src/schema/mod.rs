//! Input schema: logical fields and the column maps that locate them.

mod columns;
mod field;

pub use columns::ColumnMap;
pub use field::Field;
