//! Event handling for the table view.

use super::column::TableRow;
use super::view::TableView;

/// Result of dispatching an input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// The event was handled and state may have changed.
    Consumed,
    /// The event did not apply; no state changed.
    Ignored,
}

impl<T: TableRow> TableView<T> {
    /// Calculate which column a header x-coordinate falls into.
    fn column_at_x(&self, x: u16) -> Option<usize> {
        let mut column_x = 0u16;
        for (index, column) in self.columns().iter().enumerate() {
            if x >= column_x && x < column_x + column.width {
                return Some(index);
            }
            column_x += column.width;
        }
        None
    }

    /// Handle a click on the header row.
    ///
    /// Clicking an inactive sortable column activates it ascending; clicking
    /// the active column flips the direction. Clicks on unsortable columns
    /// and past the last column change nothing.
    pub fn on_header_click(&self, x: u16) -> EventResult {
        let Some(index) = self.column_at_x(x) else {
            log::debug!("header click at x={x} past the last column");
            return EventResult::Ignored;
        };

        let column = &self.columns()[index];
        if !column.sortable {
            return EventResult::Ignored;
        }

        self.sorting().toggle_sort(&column.key);
        EventResult::Consumed
    }
}
