//! Models browsing.

mod models;
mod table;

pub use models::ModelRecord;
pub use table::{BrowseCommand, activate_model, models_table, models_table_columns};
