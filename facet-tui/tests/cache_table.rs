use facet_tui::cache::{
    CacheCommand, CacheStrategy, CacheableItem, CacheableKind, cache_table, cache_table_columns,
};
use facet_ui::collate::Collator;
use facet_ui::render::render_plain;
use facet_ui::table::EventResult;

fn item(model_id: i64, name: &str, strategy: Option<CacheStrategy>) -> CacheableItem {
    CacheableItem {
        kind: CacheableKind::Question,
        model_id,
        name: name.to_string(),
        collection: None,
        strategy,
    }
}

#[test]
fn test_policy_column_is_not_sortable() {
    let columns = cache_table_columns();
    let policy = columns.iter().find(|c| c.key == "policy").unwrap();
    assert!(!policy.sortable);

    let table = cache_table(
        vec![
            item(1, "b", Some(CacheStrategy::Nothing)),
            item(2, "a", None),
        ],
        Collator::new("en"),
    );
    // Policy column starts at x = 26 + 22 = 48.
    assert_eq!(table.on_header_click(48), EventResult::Ignored);
    assert_eq!(table.sorting().sort_column(), None);
}

#[test]
fn test_rows_show_policy_labels() {
    let table = cache_table(
        vec![
            item(
                1,
                "Weekly revenue",
                Some(CacheStrategy::Ttl {
                    multiplier: 8,
                    min_duration_ms: 60_000,
                }),
            ),
            item(2, "Ad-hoc question", None),
        ],
        Collator::new("en"),
    );
    table.on_header_click(0); // sort by name ascending

    let lines = render_plain(&table.build());
    assert!(lines[1].contains("Inherit default"));
    assert!(lines[2].contains("Adaptive (8x)"));
}

#[test]
fn test_row_commands_carry_identity() {
    let row = item(42, "Churn", Some(CacheStrategy::Nothing));
    assert_eq!(
        row.edit_command(),
        CacheCommand::EditPolicy {
            kind: CacheableKind::Question,
            model_id: 42
        }
    );
    assert_eq!(
        row.reset_command(),
        CacheCommand::ResetPolicy {
            kind: CacheableKind::Question,
            model_id: 42
        }
    );
}

#[test]
fn test_empty_table_shows_empty_state() {
    let table = cache_table(Vec::new(), Collator::new("en"));
    let lines = render_plain(&table.build());
    assert_eq!(lines.len(), 2);
    assert!(lines[1].contains("No dashboards or questions"));
}
