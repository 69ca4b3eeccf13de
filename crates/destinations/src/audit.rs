//! Audit trail for values the builder had to default or could not map.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::parse::ParseOutcome;
use crate::schema::Field;

/// Kind of issue found while building a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueKind {
    /// Non-blank cell that failed to parse and was defaulted.
    Malformed,
    /// Required value absent or zero.
    Missing,
    /// Cell held a placeholder token such as `?`.
    Placeholder,
    /// Non-blank code with no lookup entry.
    UnmappedCode,
    /// Another record already produced this id.
    DuplicateId,
}

impl IssueKind {
    pub fn label(&self) -> &'static str {
        match self {
            IssueKind::Malformed => "Malformed",
            IssueKind::Missing => "Missing",
            IssueKind::Placeholder => "Placeholder",
            IssueKind::UnmappedCode => "Unmapped Code",
            IssueKind::DuplicateId => "Duplicate Id",
        }
    }

    /// Issue kind for a defaulted parse, if it is worth reporting.
    pub fn from_outcome(outcome: ParseOutcome) -> Option<Self> {
        match outcome {
            ParseOutcome::Malformed => Some(IssueKind::Malformed),
            ParseOutcome::Placeholder => Some(IssueKind::Placeholder),
            ParseOutcome::Parsed | ParseOutcome::Blank => None,
        }
    }
}

/// One audit finding, tied to its source row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    /// 0-based data row index.
    pub row: usize,
    pub city: String,
    pub state: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<Field>,
    pub kind: IssueKind,
    /// Raw cell text, when there was one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw: Option<String>,
    pub message: String,
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let city = if self.city.is_empty() {
            "Unknown city"
        } else {
            self.city.as_str()
        };
        write!(f, "{}, {}: {}", city, self.state, self.message)
    }
}

/// Issue counts by kind.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssueCounts {
    pub malformed: usize,
    pub missing: usize,
    pub placeholder: usize,
    pub unmapped_code: usize,
    pub duplicate_id: usize,
}

impl IssueCounts {
    pub fn from_issues<'a>(issues: impl IntoIterator<Item = &'a Issue>) -> Self {
        let mut counts = Self::default();
        for issue in issues {
            match issue.kind {
                IssueKind::Malformed => counts.malformed += 1,
                IssueKind::Missing => counts.missing += 1,
                IssueKind::Placeholder => counts.placeholder += 1,
                IssueKind::UnmappedCode => counts.unmapped_code += 1,
                IssueKind::DuplicateId => counts.duplicate_id += 1,
            }
        }
        counts
    }

    pub fn total(&self) -> usize {
        self.malformed + self.missing + self.placeholder + self.unmapped_code + self.duplicate_id
    }
}
