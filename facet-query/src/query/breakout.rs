//! Breakout clauses

use serde::Deserialize;
use serde::Serialize;
use uuid::Uuid;

/// Temporal bucket applied to a breakout on a temporal column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TemporalBucket {
    Day,
    Week,
    Month,
    Quarter,
    Year,
}

impl TemporalBucket {
    /// Display label for the bucket.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Day => "Day",
            Self::Week => "Week",
            Self::Month => "Month",
            Self::Quarter => "Quarter",
            Self::Year => "Year",
        }
    }
}

/// A grouping clause applied to a stage, targeting one column.
///
/// Clause identity is stable across column re-targeting so the UI can refer
/// to a clause while the query it came from is being replaced underneath it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreakoutClause {
    id: Uuid,
    /// Logical name of the targeted column.
    pub column: String,
    /// Temporal bucket, if the targeted column is temporal.
    pub bucket: Option<TemporalBucket>,
}

impl BreakoutClause {
    /// Create a clause targeting the given column.
    pub fn new(column: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            column: column.into(),
            bucket: None,
        }
    }

    /// Create a clause with a temporal bucket.
    pub fn with_bucket(column: impl Into<String>, bucket: TemporalBucket) -> Self {
        Self {
            id: Uuid::new_v4(),
            column: column.into(),
            bucket: Some(bucket),
        }
    }

    /// Stable identity of this clause.
    pub fn id(&self) -> Uuid {
        self.id
    }
}
