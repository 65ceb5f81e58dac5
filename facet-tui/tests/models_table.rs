use chrono::{TimeZone, Utc};

use facet_tui::browse::{BrowseCommand, ModelRecord, activate_model, models_table};
use facet_ui::collate::Collator;
use facet_ui::render::render_plain;
use facet_ui::table::TableRow;

fn model(id: i64, name: &str, collection: &[&str]) -> ModelRecord {
    ModelRecord {
        id,
        name: name.to_string(),
        description: None,
        collection_path: collection.iter().map(|s| s.to_string()).collect(),
        last_edited: Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap(),
    }
}

fn sorted_ids(table: &facet_ui::table::TableView<ModelRecord>) -> Vec<i64> {
    table
        .sorting()
        .sorted_rows()
        .iter()
        .map(|m| m.id)
        .collect()
}

#[test]
fn test_default_sort_is_collection_ascending() {
    let table = models_table(
        vec![
            model(1, "a", &["Zoo"]),
            model(2, "b", &["Analytics"]),
            model(3, "c", &["Growth"]),
        ],
        Collator::new("en"),
    );
    assert_eq!(sorted_ids(&table), vec![2, 3, 1]);
}

#[test]
fn test_name_sort_toggles_through_header_clicks() {
    let table = models_table(
        vec![model(1, "b", &[]), model(2, "a", &[])],
        Collator::new("en"),
    );

    // Name is the first column.
    table.on_header_click(0);
    assert_eq!(sorted_ids(&table), vec![2, 1]);

    table.on_header_click(0);
    assert_eq!(sorted_ids(&table), vec![1, 2]);
}

#[test]
fn test_nested_collection_path_sorts_as_flattened_string() {
    let table = models_table(
        vec![
            model(1, "a", &["Our analytics", "Finance"]),
            model(2, "b", &["Growth"]),
        ],
        Collator::new("en"),
    );
    assert_eq!(sorted_ids(&table), vec![2, 1]);
}

#[test]
fn test_missing_descriptions_sort_stably() {
    let table = models_table(
        vec![
            model(1, "a", &[]),
            model(2, "b", &[]),
            model(3, "c", &[]),
        ],
        Collator::new("en"),
    );
    // Description is the third column (starts at x = 24 + 28 = 52).
    table.on_header_click(52);
    assert_eq!(sorted_ids(&table), vec![1, 2, 3]);
}

#[test]
fn test_activation_yields_open_command() {
    let record = model(7, "Churn", &[]);
    assert_eq!(activate_model(&record), BrowseCommand::OpenModel(7));
}

#[test]
fn test_empty_table_renders_empty_state() {
    let table = models_table(Vec::new(), Collator::new("en"));
    let lines = render_plain(&table.build());
    assert!(lines[1].contains("No models here yet"));
}

#[test]
fn test_cells_cover_every_column() {
    let record = ModelRecord {
        id: 9,
        name: "Orders".into(),
        description: Some("All orders".into()),
        collection_path: vec!["Finance".into()],
        last_edited: Utc.with_ymd_and_hms(2024, 6, 30, 8, 0, 0).unwrap(),
    };
    assert_eq!(record.id(), "9");
    let lines = render_plain(&record.cell("last_edited"));
    assert_eq!(lines, vec!["2024-06-30".to_string()]);
}
