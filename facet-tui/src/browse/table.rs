//! Models table consumer.
//!
//! Supplies row shape, column definitions, and per-row behavior to the
//! generic table view. Store mutations stay with the caller: activating a
//! row yields a [`BrowseCommand`] instead of dispatching anything here.

use std::sync::Arc;

use facet_ui::collate::{Collator, SortValue};
use facet_ui::node::Node;
use facet_ui::style::Style;
use facet_ui::table::{Column, SortDirection, TableRow, TableSorting, TableView};

use super::models::ModelRecord;

/// Command produced by row activation, dispatched by the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrowseCommand {
    /// Open the model with the given id.
    OpenModel(i64),
}

impl TableRow for ModelRecord {
    fn id(&self) -> String {
        self.id.to_string()
    }

    fn cell(&self, column_key: &str) -> Node {
        match column_key {
            "name" => Node::text(&self.name),
            "collection" => {
                Node::text_styled(self.collection_path_string(), Style::new().dim())
            }
            "description" => Node::text(self.description.clone().unwrap_or_default()),
            "last_edited" => Node::text(self.last_edited.format("%Y-%m-%d").to_string()),
            _ => Node::empty(),
        }
    }

    fn sort_value(&self, column_key: &str) -> SortValue {
        match column_key {
            "name" => self.name.as_str().into(),
            "collection" => self.collection_path_string().into(),
            "description" => self.description.clone().into(),
            "last_edited" => self.last_edited.timestamp().into(),
            _ => SortValue::Missing,
        }
    }
}

/// Column definitions for the models table.
pub fn models_table_columns() -> Vec<Column> {
    vec![
        Column::new("name", "Name", 24),
        Column::new("collection", "Collection", 28),
        Column::new("description", "Description", 32),
        Column::new("last_edited", "Last edited", 13),
    ]
}

/// Build the models table, sorted by collection ascending by default.
pub fn models_table(models: Vec<ModelRecord>, collator: Collator) -> TableView<ModelRecord> {
    let columns = models_table_columns();
    let sorting = TableSorting::new(models, collator)
        .with_default_sort("collection", SortDirection::Ascending);

    let render_columns = columns.clone();
    TableView::new(
        columns,
        sorting,
        Arc::new(move |model: &ModelRecord| {
            Node::row(
                render_columns
                    .iter()
                    .map(|column| model.cell(&column.key).boxed(column.width, column.align))
                    .collect(),
            )
        }),
    )
    .empty_state(Node::text_styled("No models here yet", Style::new().dim()))
}

/// The command to dispatch when a row is activated.
pub fn activate_model(model: &ModelRecord) -> BrowseCommand {
    BrowseCommand::OpenModel(model.id)
}
