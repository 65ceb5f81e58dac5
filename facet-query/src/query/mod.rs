//! Immutable query snapshots
//!
//! A [`Query`] is a read-only snapshot of a multi-stage query pipeline.
//! Mutating operations never modify a snapshot in place; they validate their
//! inputs and return a new snapshot, so consumers can hold on to the previous
//! one for as long as they need it.

mod breakout;
mod display;

pub use breakout::{BreakoutClause, TemporalBucket};
pub use display::{ColumnDisplayInfo, GroupDisplayInfo};

use uuid::Uuid;

use crate::error::QueryError;
use crate::metadata::ColumnMetadata;

/// One step of a multi-stage query pipeline.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Stage {
    columns: Vec<ColumnMetadata>,
    breakouts: Vec<BreakoutClause>,
}

impl Stage {
    /// Create a stage with the given breakoutable columns and no breakouts.
    pub fn new(columns: Vec<ColumnMetadata>) -> Self {
        Self {
            columns,
            breakouts: Vec::new(),
        }
    }

    /// Create a stage with columns and pre-existing breakout clauses.
    pub fn with_breakouts(columns: Vec<ColumnMetadata>, breakouts: Vec<BreakoutClause>) -> Self {
        Self { columns, breakouts }
    }
}

/// An immutable query snapshot.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Query {
    stages: Vec<Stage>,
}

impl Query {
    /// Create a query from its stages.
    pub fn new(stages: Vec<Stage>) -> Self {
        Self { stages }
    }

    /// Create a single-stage query.
    pub fn single_stage(stage: Stage) -> Self {
        Self {
            stages: vec![stage],
        }
    }

    /// Number of stages in the pipeline.
    pub fn stage_count(&self) -> usize {
        self.stages.len()
    }

    /// The columns a breakout can be applied to in the given stage.
    ///
    /// An unknown stage yields an empty slice rather than an error; rendering
    /// callers treat missing data as empty.
    pub fn breakoutable_columns(&self, stage: usize) -> &[ColumnMetadata] {
        self.stages
            .get(stage)
            .map(|s| s.columns.as_slice())
            .unwrap_or_default()
    }

    /// The breakout clauses applied in the given stage, in application order.
    pub fn breakouts(&self, stage: usize) -> &[BreakoutClause] {
        self.stages
            .get(stage)
            .map(|s| s.breakouts.as_slice())
            .unwrap_or_default()
    }

    /// Resolve a breakout clause back to the column it targets.
    pub fn breakout_column(&self, stage: usize, clause: &BreakoutClause) -> Option<&ColumnMetadata> {
        self.breakoutable_columns(stage)
            .iter()
            .find(|c| c.name == clause.column)
    }

    /// Add a breakout on the given column, returning a new snapshot.
    pub fn with_breakout(&self, stage: usize, column: &str) -> Result<Query, QueryError> {
        let mut next = self.clone();
        let stage_ref = next.stage_mut(stage)?;
        Self::require_column(&stage_ref.columns, column)?;
        stage_ref.breakouts.push(BreakoutClause::new(column));
        Ok(next)
    }

    /// Re-target an existing breakout clause at a different column.
    pub fn with_updated_breakout(
        &self,
        stage: usize,
        clause_id: Uuid,
        column: &str,
    ) -> Result<Query, QueryError> {
        let mut next = self.clone();
        let stage_ref = next.stage_mut(stage)?;
        Self::require_column(&stage_ref.columns, column)?;
        let clause = stage_ref
            .breakouts
            .iter_mut()
            .find(|b| b.id() == clause_id)
            .ok_or(QueryError::UnknownClause(clause_id))?;
        clause.column = column.to_string();
        clause.bucket = None;
        Ok(next)
    }

    /// Remove a breakout clause, returning a new snapshot.
    pub fn without_breakout(&self, stage: usize, clause_id: Uuid) -> Result<Query, QueryError> {
        let mut next = self.clone();
        let stage_ref = next.stage_mut(stage)?;
        let index = stage_ref
            .breakouts
            .iter()
            .position(|b| b.id() == clause_id)
            .ok_or(QueryError::UnknownClause(clause_id))?;
        stage_ref.breakouts.remove(index);
        Ok(next)
    }

    /// Replace every breakout in the stage with a single breakout on the
    /// given column.
    pub fn with_replaced_breakouts(&self, stage: usize, column: &str) -> Result<Query, QueryError> {
        let mut next = self.clone();
        let stage_ref = next.stage_mut(stage)?;
        Self::require_column(&stage_ref.columns, column)?;
        stage_ref.breakouts = vec![BreakoutClause::new(column)];
        Ok(next)
    }

    fn stage_mut(&mut self, stage: usize) -> Result<&mut Stage, QueryError> {
        self.stages
            .get_mut(stage)
            .ok_or(QueryError::UnknownStage(stage))
    }

    fn require_column(columns: &[ColumnMetadata], name: &str) -> Result<(), QueryError> {
        if columns.iter().any(|c| c.name == name) {
            Ok(())
        } else {
            Err(QueryError::UnknownColumn(name.to_string()))
        }
    }
}
