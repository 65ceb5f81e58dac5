//! Facet application layer
//!
//! The concrete consumers of the Facet UI toolkit: the models browse table,
//! the caching-policy admin table, and the breakout column picker.

pub mod browse;
pub mod cache;
pub mod summarize;
