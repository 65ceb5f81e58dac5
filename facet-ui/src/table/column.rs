//! TableRow trait and Column types for table display.

use crate::collate::SortValue;
use crate::node::{Alignment, Node};

/// Column configuration.
///
/// Columns define the structure of the table: a unique key, the header
/// label, a width, alignment, and whether the column responds to sort
/// clicks. Columns are sortable unless opted out.
///
/// # Examples
///
/// ```ignore
/// let columns = vec![
///     Column::new("name", "Name", 30),
///     Column::new("policy", "Policy", 20).unsortable(),
///     Column::new("total", "Total", 10).align(Alignment::Right),
/// ];
/// ```
#[derive(Debug, Clone)]
pub struct Column {
    /// Unique key identifying this column
    pub key: String,
    /// Column header label
    pub label: String,
    /// Column width in terminal columns (fixed)
    pub width: u16,
    /// Horizontal alignment
    pub align: Alignment,
    /// Whether this column responds to sort clicks
    pub sortable: bool,
}

impl Column {
    /// Create a new sortable column with explicit width.
    pub fn new(key: impl Into<String>, label: impl Into<String>, width: u16) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            width,
            align: Alignment::Left,
            sortable: true,
        }
    }

    /// Set the column alignment.
    pub fn align(mut self, align: Alignment) -> Self {
        self.align = align;
        self
    }

    /// Opt this column out of sorting.
    ///
    /// Header clicks on an unsortable column are ignored and its header
    /// carries no sort affordance.
    pub fn unsortable(mut self) -> Self {
        self.sortable = false;
        self
    }
}

/// Trait for rows that can be displayed in a table.
///
/// Rows are opaque to the table: it never reaches into their fields. Cell
/// content and sort values both go through the implementor, so each table
/// instance carries its own typed extractor instead of a stringly keyed
/// lookup.
pub trait TableRow: Send + Sync + Clone + 'static {
    /// Unique identifier for this row.
    fn id(&self) -> String;

    /// Render the cell content for the given column.
    fn cell(&self, column_key: &str) -> Node;

    /// Extract the sort value for the given column.
    ///
    /// Return [`SortValue::Missing`] for columns that do not sort; such rows
    /// keep their relative position.
    fn sort_value(&self, column_key: &str) -> SortValue;
}
