//! Table primitive - client-side sortable tabular rendering.
//!
//! The table splits into three pieces:
//! - [`Column`] descriptors and the [`TableRow`] trait rows implement
//!   (cell rendering plus a typed sort-value extractor);
//! - [`TableSorting`], the state holder owning the active sort column and
//!   direction and deriving the sorted row order;
//! - [`TableView`], which renders the header (with click-to-sort toggles and
//!   a width-stable sort indicator) and delegates body rendering to the
//!   consumer's row callback.
//!
//! # Example
//!
//! ```ignore
//! #[derive(Clone)]
//! struct User { id: i64, name: String }
//!
//! impl TableRow for User {
//!     fn id(&self) -> String { self.id.to_string() }
//!     fn cell(&self, column_key: &str) -> Node {
//!         match column_key {
//!             "name" => Node::text(&self.name),
//!             _ => Node::empty(),
//!         }
//!     }
//!     fn sort_value(&self, column_key: &str) -> SortValue {
//!         match column_key {
//!             "name" => self.name.as_str().into(),
//!             _ => SortValue::Missing,
//!         }
//!     }
//! }
//!
//! let sorting = TableSorting::new(users, Collator::new("en"));
//! let view = TableView::new(columns, sorting, Arc::new(default_row));
//! let node = view.build();
//! ```

mod column;
mod events;
mod sorting;
mod view;

pub use column::{Column, TableRow};
pub use events::EventResult;
pub use sorting::{SortDirection, TableSorting};
pub use view::{RowRenderer, TableView};
