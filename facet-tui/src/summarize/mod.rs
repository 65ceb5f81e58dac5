//! Breakout column picking.

mod picker;

pub use picker::{BreakoutCommand, BreakoutItem, BreakoutPicker, ListSection};
