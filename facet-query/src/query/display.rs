//! Display metadata resolution
//!
//! Resolves columns and column groups to the information the UI renders:
//! display names and the positions of any breakout clauses already applied
//! to a column.

use crate::metadata::{ColumnGroup, ColumnMetadata};

use super::{Query, TemporalBucket};

/// Display metadata for a column in the context of a query stage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnDisplayInfo {
    /// Display name of the column.
    pub display_name: String,
    /// Indexes into the stage's breakout list for every clause that targets
    /// this column. Empty when the column is unused.
    pub breakout_positions: Vec<usize>,
}

/// Display metadata for a column group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupDisplayInfo {
    /// Display name of the group.
    pub display_name: String,
}

/// Group name used for derived columns with no originating table.
const SUMMARIES_GROUP: &str = "Summaries";

impl Query {
    /// Resolve a column to its display metadata for the given stage.
    pub fn display_info(&self, stage: usize, column: &ColumnMetadata) -> ColumnDisplayInfo {
        let breakout_positions = self
            .breakouts(stage)
            .iter()
            .enumerate()
            .filter(|(_, clause)| clause.column == column.name)
            .map(|(position, _)| position)
            .collect();

        ColumnDisplayInfo {
            display_name: column.display_name.clone(),
            breakout_positions,
        }
    }

    /// Resolve a column group to its display metadata.
    pub fn group_display_info(&self, group: &ColumnGroup) -> GroupDisplayInfo {
        let display_name = group
            .columns
            .iter()
            .find_map(|c| c.table.as_ref())
            .map(|t| t.display_name.clone())
            .unwrap_or_else(|| SUMMARIES_GROUP.to_string());

        GroupDisplayInfo { display_name }
    }

    /// Display label for a breakout clause: the column display name, plus the
    /// bucket when one is applied (e.g. "Created At: Month").
    pub fn breakout_label(&self, stage: usize, clause_column: &str, bucket: Option<TemporalBucket>) -> String {
        let display_name = self
            .breakoutable_columns(stage)
            .iter()
            .find(|c| c.name == clause_column)
            .map(|c| c.display_name.clone())
            .unwrap_or_else(|| clause_column.to_string());

        match bucket {
            Some(bucket) => format!("{}: {}", display_name, bucket.label()),
            None => display_name,
        }
    }
}
