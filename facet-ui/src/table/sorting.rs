//! Row-sorting state holder.

use std::sync::atomic::{AtomicBool, Ordering as AtomicOrdering};
use std::sync::{Arc, RwLock};

use crate::collate::Collator;

use super::column::TableRow;

/// Sort direction for a table column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    /// The opposite direction.
    pub fn flipped(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }
}

/// Cached sort order, keyed by what it was derived from.
#[derive(Debug, Clone)]
struct SortCache {
    rows_revision: u64,
    column: String,
    direction: SortDirection,
    order: Vec<usize>,
}

#[derive(Debug)]
struct SortingInner<T: TableRow> {
    rows: Vec<T>,
    /// Bumped whenever rows are replaced, invalidating the cache.
    rows_revision: u64,
    sort_column: Option<String>,
    sort_direction: SortDirection,
    collator: Collator,
    cache: Option<SortCache>,
}

/// State holder for client-side table sorting.
///
/// Owns the active sort column and direction, and derives the sorted row
/// order on demand. With no active column the input order is returned
/// unchanged. The derived order is memoized on (rows revision, column,
/// direction); reads with unchanged inputs reuse the cached order.
///
/// Sorting is stable: rows whose extracted values compare equal (including
/// every non-comparable extraction) keep their relative input order.
#[derive(Debug)]
pub struct TableSorting<T: TableRow> {
    inner: Arc<RwLock<SortingInner<T>>>,
    dirty: Arc<AtomicBool>,
}

impl<T: TableRow> TableSorting<T> {
    /// Create a sorting holder over the given rows with no active sort.
    pub fn new(rows: Vec<T>, collator: Collator) -> Self {
        Self {
            inner: Arc::new(RwLock::new(SortingInner {
                rows,
                rows_revision: 0,
                sort_column: None,
                sort_direction: SortDirection::default(),
                collator,
                cache: None,
            })),
            dirty: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Set the initial sort column and direction.
    pub fn with_default_sort(self, column: impl Into<String>, direction: SortDirection) -> Self {
        if let Ok(mut guard) = self.inner.write() {
            guard.sort_column = Some(column.into());
            guard.sort_direction = direction;
        }
        self
    }

    /// Replace the rows, keeping the current sort state.
    pub fn set_rows(&self, rows: Vec<T>) {
        if let Ok(mut guard) = self.inner.write() {
            guard.rows = rows;
            guard.rows_revision += 1;
            guard.cache = None;
            self.dirty.store(true, AtomicOrdering::SeqCst);
        }
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.inner.read().map(|g| g.rows.len()).unwrap_or(0)
    }

    /// Check if there are no rows.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The active sort column key, if any.
    pub fn sort_column(&self) -> Option<String> {
        self.inner.read().ok().and_then(|g| g.sort_column.clone())
    }

    /// The current sort direction.
    ///
    /// Only meaningful while a sort column is active.
    pub fn sort_direction(&self) -> SortDirection {
        self.inner
            .read()
            .map(|g| g.sort_direction)
            .unwrap_or_default()
    }

    /// Set the active sort column.
    ///
    /// Any key is accepted; a key no extractor recognizes yields all-equal
    /// comparisons, leaving the order unchanged.
    pub fn set_sort_column(&self, column: impl Into<String>) {
        if let Ok(mut guard) = self.inner.write() {
            guard.sort_column = Some(column.into());
            self.dirty.store(true, AtomicOrdering::SeqCst);
        }
    }

    /// Set the sort direction.
    pub fn set_sort_direction(&self, direction: SortDirection) {
        if let Ok(mut guard) = self.inner.write() {
            guard.sort_direction = direction;
            self.dirty.store(true, AtomicOrdering::SeqCst);
        }
    }

    /// Toggle sort for a column.
    ///
    /// Clicking the already-active column flips the direction; any other
    /// column becomes active sorted ascending.
    pub fn toggle_sort(&self, column: &str) {
        if let Ok(mut guard) = self.inner.write() {
            if guard.sort_column.as_deref() == Some(column) {
                guard.sort_direction = guard.sort_direction.flipped();
            } else {
                guard.sort_column = Some(column.to_string());
                guard.sort_direction = SortDirection::Ascending;
            }
            self.dirty.store(true, AtomicOrdering::SeqCst);
        }
    }

    /// The rows in sorted order.
    ///
    /// With no active column this is the input sequence unchanged. The
    /// computed order is cached; repeated calls with unchanged rows and sort
    /// state do not re-sort.
    pub fn sorted_rows(&self) -> Vec<T> {
        if let Ok(guard) = self.inner.read() {
            let Some(column) = guard.sort_column.clone() else {
                return guard.rows.clone();
            };
            if let Some(cache) = &guard.cache
                && cache.rows_revision == guard.rows_revision
                && cache.column == column
                && cache.direction == guard.sort_direction
            {
                return cache.order.iter().map(|&i| guard.rows[i].clone()).collect();
            }
        }

        let Ok(mut guard) = self.inner.write() else {
            return Vec::new();
        };
        let Some(column) = guard.sort_column.clone() else {
            return guard.rows.clone();
        };

        let mut order: Vec<usize> = (0..guard.rows.len()).collect();
        let direction = guard.sort_direction;
        // Vec::sort_by is stable: equal keys (and every non-comparable pair)
        // preserve input order.
        order.sort_by(|&a, &b| {
            let left = guard.rows[a].sort_value(&column);
            let right = guard.rows[b].sort_value(&column);
            let ordering = guard.collator.compare(&left, &right);
            match direction {
                SortDirection::Ascending => ordering,
                SortDirection::Descending => ordering.reverse(),
            }
        });

        let rows: Vec<T> = order.iter().map(|&i| guard.rows[i].clone()).collect();
        guard.cache = Some(SortCache {
            rows_revision: guard.rows_revision,
            column,
            direction,
            order,
        });
        rows
    }

    /// Check if the sort state changed since last check
    pub fn is_dirty(&self) -> bool {
        self.dirty.load(AtomicOrdering::SeqCst)
    }

    /// Clear the dirty flag
    pub fn clear_dirty(&self) {
        self.dirty.store(false, AtomicOrdering::SeqCst);
    }
}

impl<T: TableRow> Clone for TableSorting<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
            dirty: Arc::clone(&self.dirty),
        }
    }
}
