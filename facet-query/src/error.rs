//! Error types

use thiserror::Error;
use uuid::Uuid;

/// Errors from query snapshot operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    /// The requested stage index does not exist in the query.
    #[error("stage {0} does not exist in this query")]
    UnknownStage(usize),

    /// The column is not breakoutable in the given stage.
    #[error("column '{0}' is not breakoutable in this stage")]
    UnknownColumn(String),

    /// The breakout clause does not exist in the given stage.
    #[error("breakout clause {0} does not exist in this stage")]
    UnknownClause(Uuid),
}
