//! Facet UI toolkit
//!
//! The presentation machinery shared by the Facet application crates: view
//! tree nodes and text rendering, the sortable table primitive, reactive
//! state and async resource holders, debounced input, and locale-aware
//! collation.

pub mod collate;
pub mod debounce;
pub mod node;
pub mod render;
pub mod resource;
pub mod state;
pub mod style;
pub mod table;
pub mod text;

pub mod prelude {
    pub use crate::collate::{Collator, SortValue};
    pub use crate::debounce::{Debounced, SEARCH_DEBOUNCE};
    pub use crate::node::{Alignment, Layout, Node, Size};
    pub use crate::resource::{LoadToken, Resource, ResourceError, ResourceState};
    pub use crate::state::State;
    pub use crate::style::Style;
    pub use crate::table::{
        Column, EventResult, SortDirection, TableRow, TableSorting, TableView,
    };
}
