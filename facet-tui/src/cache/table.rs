//! Cache strategy table consumer.

use std::sync::Arc;

use facet_ui::collate::{Collator, SortValue};
use facet_ui::node::Node;
use facet_ui::style::Style;
use facet_ui::table::{Column, TableRow, TableSorting, TableView};

use super::models::{CacheStrategy, CacheableKind};

/// Commands the caller dispatches for per-row actions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CacheCommand {
    /// Open the policy editor for the item.
    EditPolicy { kind: CacheableKind, model_id: i64 },
    /// Reset the item to inherit the default policy.
    ResetPolicy { kind: CacheableKind, model_id: i64 },
}

/// One row of the caching admin table: a cacheable entity and its policy.
#[derive(Debug, Clone)]
pub struct CacheableItem {
    pub kind: CacheableKind,
    pub model_id: i64,
    pub name: String,
    /// The containing collection, when the entity lives in one.
    pub collection: Option<String>,
    /// The configured strategy; `None` means the item inherits the default.
    pub strategy: Option<CacheStrategy>,
}

impl CacheableItem {
    /// The command for editing this item's policy.
    pub fn edit_command(&self) -> CacheCommand {
        CacheCommand::EditPolicy {
            kind: self.kind,
            model_id: self.model_id,
        }
    }

    /// The command for resetting this item's policy.
    pub fn reset_command(&self) -> CacheCommand {
        CacheCommand::ResetPolicy {
            kind: self.kind,
            model_id: self.model_id,
        }
    }

    fn policy_label(&self) -> String {
        self.strategy
            .as_ref()
            .map(CacheStrategy::label)
            .unwrap_or_else(|| "Inherit default".to_string())
    }
}

impl TableRow for CacheableItem {
    fn id(&self) -> String {
        format!("{}-{}", self.kind.label(), self.model_id)
    }

    fn cell(&self, column_key: &str) -> Node {
        match column_key {
            "name" => Node::text(&self.name),
            "collection" => Node::text_styled(
                self.collection.clone().unwrap_or_default(),
                Style::new().dim(),
            ),
            "policy" => Node::text(self.policy_label()),
            _ => Node::empty(),
        }
    }

    fn sort_value(&self, column_key: &str) -> SortValue {
        match column_key {
            "name" => self.name.as_str().into(),
            "collection" => self.collection.clone().into(),
            // The policy column is an action target, not a sort key.
            _ => SortValue::Missing,
        }
    }
}

/// Column definitions for the caching admin table.
pub fn cache_table_columns() -> Vec<Column> {
    vec![
        Column::new("name", "Name", 26),
        Column::new("collection", "Collection", 22),
        Column::new("policy", "Policy", 20).unsortable(),
    ]
}

/// Build the caching admin table.
pub fn cache_table(items: Vec<CacheableItem>, collator: Collator) -> TableView<CacheableItem> {
    let columns = cache_table_columns();
    let sorting = TableSorting::new(items, collator);

    let render_columns = columns.clone();
    TableView::new(
        columns,
        sorting,
        Arc::new(move |item: &CacheableItem| {
            Node::row(
                render_columns
                    .iter()
                    .map(|column| item.cell(&column.key).boxed(column.width, column.align))
                    .collect(),
            )
        }),
    )
    .empty_state(Node::text_styled(
        "No dashboards or questions have their own policy",
        Style::new().dim(),
    ))
}
