use std::sync::Arc;

use facet_ui::collate::{Collator, SortValue};
use facet_ui::node::Node;
use facet_ui::render::render_plain;
use facet_ui::table::{Column, EventResult, SortDirection, TableRow, TableSorting, TableView};
use facet_ui::text::display_width;

#[derive(Clone, Debug)]
struct Item {
    id: i64,
    name: &'static str,
}

impl TableRow for Item {
    fn id(&self) -> String {
        self.id.to_string()
    }

    fn cell(&self, column_key: &str) -> Node {
        match column_key {
            "name" => Node::text(self.name),
            "id" => Node::text(self.id.to_string()),
            _ => Node::empty(),
        }
    }

    fn sort_value(&self, column_key: &str) -> SortValue {
        match column_key {
            "name" => self.name.into(),
            "id" => self.id.into(),
            _ => SortValue::Missing,
        }
    }
}

fn columns() -> Vec<Column> {
    vec![
        Column::new("name", "Name", 12),
        Column::new("id", "Id", 6),
        Column::new("actions", "Actions", 10).unsortable(),
    ]
}

fn view_with(rows: Vec<Item>) -> TableView<Item> {
    let sorting = TableSorting::new(rows, Collator::new("en"));
    let cols = columns();
    let render_cols = cols.clone();
    TableView::new(
        cols,
        sorting,
        Arc::new(move |item: &Item| {
            Node::row(
                render_cols
                    .iter()
                    .map(|c| item.cell(&c.key).boxed(c.width, c.align))
                    .collect(),
            )
        }),
    )
}

#[test]
fn test_header_width_is_stable_across_sort_states() {
    let view = view_with(vec![Item { id: 1, name: "a" }]);

    let width_of_header = |view: &TableView<Item>| {
        let lines = render_plain(&view.build());
        display_width(&lines[0])
    };

    let unsorted = width_of_header(&view);
    view.on_header_click(0); // sort by name ascending
    let ascending = width_of_header(&view);
    view.on_header_click(0); // flip to descending
    let descending = width_of_header(&view);
    view.on_header_click(12); // switch active column to id
    let other = width_of_header(&view);

    assert_eq!(unsorted, ascending);
    assert_eq!(ascending, descending);
    assert_eq!(descending, other);
}

#[test]
fn test_active_column_shows_direction_indicator() {
    let view = view_with(vec![Item { id: 1, name: "a" }]);
    view.on_header_click(0);
    let header = render_plain(&view.build())[0].clone();
    assert!(header.contains('▼'), "ascending shows a down indicator");

    view.on_header_click(0);
    let header = render_plain(&view.build())[0].clone();
    assert!(header.contains('▲'), "descending shows an up indicator");
}

#[test]
fn test_click_inactive_column_starts_ascending() {
    let view = view_with(vec![Item { id: 1, name: "a" }]);
    view.on_header_click(0);
    view.on_header_click(0);
    assert_eq!(view.sorting().sort_direction(), SortDirection::Descending);

    // A different column resets to ascending.
    assert_eq!(view.on_header_click(12), EventResult::Consumed);
    assert_eq!(view.sorting().sort_column().as_deref(), Some("id"));
    assert_eq!(view.sorting().sort_direction(), SortDirection::Ascending);
}

#[test]
fn test_click_unsortable_column_changes_nothing() {
    let view = view_with(vec![Item { id: 1, name: "a" }]);
    view.on_header_click(0);
    let before = (view.sorting().sort_column(), view.sorting().sort_direction());

    // x = 20 lands in the unsortable actions column (12 + 6 <= 20 < 28).
    assert_eq!(view.on_header_click(20), EventResult::Ignored);
    let after = (view.sorting().sort_column(), view.sorting().sort_direction());
    assert_eq!(before, after);
}

#[test]
fn test_click_past_last_column_is_ignored() {
    let view = view_with(vec![Item { id: 1, name: "a" }]);
    assert_eq!(view.on_header_click(99), EventResult::Ignored);
    assert_eq!(view.sorting().sort_column(), None);
}

#[test]
fn test_body_rows_render_in_sorted_order() {
    let view = view_with(vec![
        Item { id: 1, name: "pear" },
        Item { id: 2, name: "apple" },
    ]);
    view.on_header_click(0);
    let lines = render_plain(&view.build());
    assert!(lines[1].starts_with("apple"));
    assert!(lines[2].starts_with("pear"));
}

#[test]
fn test_empty_state_renders_in_place_of_body() {
    let view = view_with(Vec::new()).empty_state(Node::text("No results"));
    let lines = render_plain(&view.build());
    assert_eq!(lines.len(), 2);
    assert!(lines[1].starts_with("No results"));
}

#[test]
fn test_append_node_renders_after_rows_and_when_empty() {
    let view = view_with(vec![Item { id: 1, name: "a" }]).append(Node::text("1 item"));
    let lines = render_plain(&view.build());
    assert!(lines.last().unwrap().starts_with("1 item"));

    let empty_view = view_with(Vec::new()).append(Node::text("0 items"));
    let lines = render_plain(&empty_view.build());
    assert!(lines.last().unwrap().starts_with("0 items"));
}
