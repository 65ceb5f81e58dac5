use std::fs::File;

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use simplelog::{Config, LevelFilter, WriteLogger};

use facet_query::{ColumnKind, ColumnMetadata, Query, Stage, TableRef};
use facet_tui::browse::{ModelRecord, models_table};
use facet_tui::cache::{
    CacheConfig, CacheConfigSource, CacheConfigStore, CacheError, CacheStrategy, CacheableItem,
    CacheableKind, ROOT_ID, cache_table,
};
use facet_tui::summarize::BreakoutPicker;
use facet_ui::collate::Collator;
use facet_ui::debounce::SEARCH_DEBOUNCE;
use facet_ui::render::render_ansi;

/// In-memory config source for the demo.
struct StaticConfigSource(Vec<CacheConfig>);

#[async_trait]
impl CacheConfigSource for StaticConfigSource {
    async fn list_configs(&self, kind: CacheableKind) -> Result<Vec<CacheConfig>, CacheError> {
        Ok(self.0.iter().filter(|c| c.model == kind).cloned().collect())
    }
}

fn sample_models() -> Vec<ModelRecord> {
    let edited = |y, m, d| Utc.with_ymd_and_hms(y, m, d, 12, 0, 0).unwrap();
    vec![
        ModelRecord {
            id: 1,
            name: "Orders by month".into(),
            description: Some("Monthly order volume".into()),
            collection_path: vec!["Our analytics".into(), "Finance".into()],
            last_edited: edited(2024, 11, 3),
        },
        ModelRecord {
            id: 2,
            name: "Active accounts".into(),
            description: None,
            collection_path: vec!["Our analytics".into()],
            last_edited: edited(2024, 12, 19),
        },
        ModelRecord {
            id: 3,
            name: "Churn candidates".into(),
            description: Some("Accounts with falling usage".into()),
            collection_path: vec!["Growth".into()],
            last_edited: edited(2025, 1, 7),
        },
    ]
}

fn sample_query() -> Query {
    let orders = TableRef::new("orders", "Orders");
    let products = TableRef::new("products", "Products");
    Query::single_stage(Stage::new(vec![
        ColumnMetadata::new("created_at", "Created At")
            .kind(ColumnKind::Temporal)
            .table(orders.clone()),
        ColumnMetadata::new("tax", "Tax")
            .kind(ColumnKind::Number)
            .table(orders.clone()),
        ColumnMetadata::new("total", "Total")
            .kind(ColumnKind::Number)
            .table(orders),
        ColumnMetadata::new("category", "Category").table(products),
        ColumnMetadata::new("count", "Count").kind(ColumnKind::Number),
    ]))
}

fn print_node(node: &facet_ui::node::Node) {
    for line in render_ansi(node) {
        println!("{line}");
    }
}

#[tokio::main]
async fn main() {
    let log_file = File::create("facet-tui.log").expect("Failed to create log file");
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)
        .expect("Failed to initialize logger");

    let collator = Collator::new("en");

    println!("Models");
    let models = models_table(sample_models(), collator.clone());
    print_node(&models.build());

    println!();
    println!("Models, sorted by name descending");
    models.on_header_click(0);
    models.on_header_click(0);
    print_node(&models.build());

    println!();
    println!("Summarize by");
    let query = sample_query()
        .with_breakout(0, "created_at")
        .expect("sample column exists");
    let picker = BreakoutPicker::new(query, 0);
    print_node(&picker.build_list());

    println!();
    println!("Summarize by, searching \"ta\"");
    picker.set_search("ta");
    tokio::time::sleep(SEARCH_DEBOUNCE * 2).await;
    print_node(&picker.build_list());

    println!();
    println!("Caching policies");
    let store = CacheConfigStore::new(vec![
        CacheableKind::Root,
        CacheableKind::Dashboard,
        CacheableKind::Question,
    ]);
    let source = StaticConfigSource(vec![
        CacheConfig {
            model: CacheableKind::Root,
            model_id: ROOT_ID,
            strategy: CacheStrategy::Nothing,
        },
        CacheConfig {
            model: CacheableKind::Question,
            model_id: 42,
            strategy: CacheStrategy::Duration { duration_hours: 24 },
        },
    ]);
    store.refresh(&source).await;

    let items: Vec<CacheableItem> = store
        .configs()
        .into_iter()
        .map(|config| CacheableItem {
            kind: config.model,
            model_id: config.model_id,
            name: match config.model_id {
                ROOT_ID => config.model.label().to_string(),
                id => format!("Question {id}"),
            },
            collection: None,
            strategy: Some(config.strategy),
        })
        .collect();
    print_node(&cache_table(items, collator).build());
}
