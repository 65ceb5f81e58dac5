//! Semantic column grouping

use super::column::ColumnMetadata;

/// A group of columns that share an origin.
///
/// Columns from the same table group together; derived columns (no table)
/// collect into a single trailing group.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnGroup {
    /// The logical name of the shared table, or `None` for derived columns.
    pub table_name: Option<String>,
    /// The columns in this group, in encounter order.
    pub columns: Vec<ColumnMetadata>,
}

impl ColumnGroup {
    /// The columns in this group.
    pub fn columns(&self) -> &[ColumnMetadata] {
        &self.columns
    }
}

/// Group a column set by originating table.
///
/// Groups appear in the order their first column was encountered; columns
/// within a group keep their relative order. Derived columns (no table) fall
/// into one shared group keyed by `None`.
pub fn group_columns(columns: &[ColumnMetadata]) -> Vec<ColumnGroup> {
    let mut groups: Vec<ColumnGroup> = Vec::new();

    for column in columns {
        let key = column.table.as_ref().map(|t| t.name.clone());
        match groups.iter_mut().find(|g| g.table_name == key) {
            Some(group) => group.columns.push(column.clone()),
            None => groups.push(ColumnGroup {
                table_name: key,
                columns: vec![column.clone()],
            }),
        }
    }

    groups
}
