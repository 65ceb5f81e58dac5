//! Column metadata types

mod column;
mod group;

pub use column::{ColumnKind, ColumnMetadata, TableRef};
pub use group::{ColumnGroup, group_columns};
