//! Model records.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde::Serialize;

/// Separator used when flattening a collection path for display.
const PATH_SEPARATOR: &str = " / ";

/// A saved model as returned by the listing endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelRecord {
    /// Unique model id.
    pub id: i64,

    /// Model name.
    pub name: String,

    /// Optional description.
    #[serde(default)]
    pub description: Option<String>,

    /// Names of the collections containing the model, outermost first.
    #[serde(default)]
    pub collection_path: Vec<String>,

    /// When the model was last edited.
    pub last_edited: DateTime<Utc>,
}

impl ModelRecord {
    /// The collection path flattened for display and sorting,
    /// e.g. "Our analytics / Finance".
    pub fn collection_path_string(&self) -> String {
        self.collection_path.join(PATH_SEPARATOR)
    }
}
