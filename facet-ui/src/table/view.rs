//! Table view building.

use std::sync::Arc;

use crate::node::Node;
use crate::style::Style;
use crate::text::ellipsify;

use super::column::{Column, TableRow};
use super::sorting::{SortDirection, TableSorting};

/// Callback rendering one body row.
pub type RowRenderer<T> = Arc<dyn Fn(&T) -> Node + Send + Sync>;

/// Indicator shown in the active sort column's header.
/// Up means descending, down means ascending.
const INDICATOR_DESCENDING: &str = "▲";
const INDICATOR_ASCENDING: &str = "▼";
/// Blank spacer of the same width, so header widths never shift when the
/// active sort column changes.
const INDICATOR_SPACER: &str = " ";

/// A sortable table view.
///
/// Renders the header row itself (one fixed-width cell per column, with the
/// sort indicator for the active column) and delegates all body rendering to
/// the consumer's row callback; the view only supplies the sorted order. An
/// optional empty-state node replaces the body when there are no rows, and
/// an optional trailing node is appended after the body either way.
pub struct TableView<T: TableRow> {
    columns: Vec<Column>,
    sorting: TableSorting<T>,
    render_row: RowRenderer<T>,
    empty_state: Option<Node>,
    append: Option<Node>,
    header_style: Style,
}

impl<T: TableRow> TableView<T> {
    /// Create a table view.
    pub fn new(columns: Vec<Column>, sorting: TableSorting<T>, render_row: RowRenderer<T>) -> Self {
        Self {
            columns,
            sorting,
            render_row,
            empty_state: None,
            append: None,
            header_style: Style::new().bold(),
        }
    }

    /// Node to render in place of body rows when there are none.
    pub fn empty_state(mut self, node: Node) -> Self {
        self.empty_state = Some(node);
        self
    }

    /// Node appended after all body rows, present or not.
    pub fn append(mut self, node: Node) -> Self {
        self.append = Some(node);
        self
    }

    /// Override the header style.
    pub fn header_style(mut self, style: Style) -> Self {
        self.header_style = style;
        self
    }

    /// The column definitions.
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// The sorting state holder.
    pub fn sorting(&self) -> &TableSorting<T> {
        &self.sorting
    }

    /// Build the table node: header first, then the sorted body rows (or the
    /// empty-state node), then the trailing node if one was set.
    pub fn build(&self) -> Node {
        let mut children = vec![self.build_header()];

        let rows = self.sorting.sorted_rows();
        if rows.is_empty() {
            if let Some(empty) = &self.empty_state {
                children.push(empty.clone());
            }
        } else {
            for row in &rows {
                children.push((self.render_row)(row));
            }
        }

        if let Some(append) = &self.append {
            children.push(append.clone());
        }

        Node::column(children)
    }

    /// Build the header row.
    fn build_header(&self) -> Node {
        let sort_column = self.sorting.sort_column();
        let direction = self.sorting.sort_direction();

        let cells = self
            .columns
            .iter()
            .map(|column| {
                let indicator = if sort_column.as_deref() == Some(column.key.as_str()) {
                    match direction {
                        SortDirection::Descending => INDICATOR_DESCENDING,
                        SortDirection::Ascending => INDICATOR_ASCENDING,
                    }
                } else {
                    INDICATOR_SPACER
                };
                // Leave room for the separating space and the indicator slot
                // so a long label cannot push the indicator out of the cell.
                let label = ellipsify(&column.label, column.width.saturating_sub(2) as usize);
                Node::text_styled(format!("{label} {indicator}"), self.header_style.clone())
                    .boxed(column.width, column.align)
            })
            .collect();

        Node::row(cells)
    }
}
