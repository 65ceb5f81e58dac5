//! Column metadata types

use serde::Deserialize;
use serde::Serialize;

/// The value kind of a column.
///
/// Determines which buckets a breakout on the column accepts and how the UI
/// sorts its values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnKind {
    #[default]
    Text,
    Number,
    Temporal,
    Boolean,
}

/// Reference to the table a column originates from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableRef {
    /// The logical name of the table (e.g., "orders").
    pub name: String,
    /// Display name of the table (e.g., "Orders").
    pub display_name: String,
}

impl TableRef {
    pub fn new(name: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            display_name: display_name.into(),
        }
    }
}

/// Metadata for a query column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnMetadata {
    /// The logical name of the column (e.g., "created_at", "total").
    pub name: String,

    /// Display name of the column.
    pub display_name: String,

    /// The value kind.
    #[serde(default)]
    pub kind: ColumnKind,

    /// The table this column originates from.
    ///
    /// `None` for derived columns (aggregations, custom expressions), which
    /// group together under the summaries section.
    #[serde(default)]
    pub table: Option<TableRef>,
}

impl ColumnMetadata {
    /// Create a new column with the given logical and display name.
    pub fn new(name: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            display_name: display_name.into(),
            kind: ColumnKind::default(),
            table: None,
        }
    }

    /// Set the value kind.
    pub fn kind(mut self, kind: ColumnKind) -> Self {
        self.kind = kind;
        self
    }

    /// Set the originating table.
    pub fn table(mut self, table: TableRef) -> Self {
        self.table = Some(table);
        self
    }

    /// Returns true if this column supports temporal bucketing.
    pub fn is_temporal(&self) -> bool {
        self.kind == ColumnKind::Temporal
    }
}
