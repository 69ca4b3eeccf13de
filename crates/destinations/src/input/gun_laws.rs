//! Per-state gun-law side table.
//!
//! Layout: `state code, magazine limit, gifford score, ghost gun ban,
//! assault weapon ban`, one header row. Only the grade feeds records, so
//! only the grade is kept.

use std::collections::HashMap;
use std::path::Path;

use tracing::debug;

use crate::error::Result;
use crate::parse::parse_grade;

use super::parser::Parser;

/// Cells a row must carry to be read.
const ROW_WIDTH: usize = 5;

/// Column holding the grade.
const GRADE_COLUMN: usize = 2;

/// Gifford grades keyed by two-letter state code.
#[derive(Debug, Clone, Default)]
pub struct GunLawTable {
    by_state: HashMap<String, Option<String>>,
}

impl GunLawTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load the table. Rows with fewer than five cells in the source, or no
    /// state code, are skipped.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let (table, _) = Parser::new().parse_file(path)?;
        let mut out = Self::new();
        for (index, row) in table.rows.iter().enumerate() {
            let code = row.first().map(|c| c.trim()).unwrap_or("");
            if table.source_width(index) < ROW_WIDTH || code.is_empty() {
                debug!(row = index, "skipping short gun-law row");
                continue;
            }
            out.insert(code, &row[GRADE_COLUMN]);
        }
        Ok(out)
    }

    /// Record a state's grade. Blank, placeholder, and `Unknown` grades are
    /// stored as absent.
    pub fn insert(&mut self, state_code: &str, grade: &str) {
        self.by_state
            .insert(state_code.trim().to_ascii_uppercase(), parse_grade(grade));
    }

    /// Whether the table has a row for this state.
    pub fn contains(&self, state_code: &str) -> bool {
        self.by_state
            .contains_key(&state_code.trim().to_ascii_uppercase())
    }

    /// Grade for a state, if the table has a usable one.
    pub fn gifford_score(&self, state_code: &str) -> Option<&str> {
        self.by_state
            .get(&state_code.trim().to_ascii_uppercase())?
            .as_deref()
    }

    pub fn len(&self) -> usize {
        self.by_state.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_state.is_empty()
    }
}
