//! Query metadata library
//!
//! The public surface of the query-representation layer consumed by the Facet
//! UI: immutable query snapshots, stages, breakout clauses, column metadata,
//! display info, and semantic column grouping.

pub mod error;
pub mod metadata;
pub mod query;

pub use error::QueryError;
pub use metadata::{ColumnGroup, ColumnKind, ColumnMetadata, TableRef, group_columns};
pub use query::{
    BreakoutClause, ColumnDisplayInfo, GroupDisplayInfo, Query, Stage, TemporalBucket,
};
