//! Breakout column picker.
//!
//! Derives the summarize sidebar's column list from a query snapshot: pinned
//! items (one per breakout already applied) and grouped sections of columns
//! still available for grouping, filtered by a debounced search string.
//!
//! The picker never mutates the query or any store. Every mutation surfaces
//! as a [`BreakoutCommand`] for the caller to dispatch; the caller applies it
//! to the query and hands the new snapshot back via [`BreakoutPicker::set_query`].
//! The only local state transitions are the pin bookkeeping and the search
//! text.

use facet_query::{BreakoutClause, ColumnMetadata, Query, group_columns};
use facet_ui::debounce::Debounced;
use facet_ui::node::Node;
use facet_ui::state::State;
use facet_ui::style::Style;

/// One entry in the picker's list: a column, possibly tied to an existing
/// breakout clause.
#[derive(Debug, Clone, PartialEq)]
pub struct BreakoutItem {
    /// The column metadata handle.
    pub column: ColumnMetadata,
    /// Derived display name.
    pub display_name: String,
    /// The clause this entry represents, when the column is already used.
    /// A column used twice appears twice, once per clause.
    pub breakout: Option<BreakoutClause>,
}

/// A named group of picker items.
#[derive(Debug, Clone, PartialEq)]
pub struct ListSection {
    /// Group display name.
    pub name: String,
    /// Items in group order.
    pub items: Vec<BreakoutItem>,
}

/// Mutation command produced by the picker, dispatched by the caller.
#[derive(Debug, Clone, PartialEq)]
pub enum BreakoutCommand {
    /// Add a breakout on the column.
    Add { column: String },
    /// Re-target an existing clause at a different column.
    Update {
        clause: BreakoutClause,
        column: String,
    },
    /// Remove the clause.
    Remove { clause: BreakoutClause },
    /// Replace every breakout with a single one on the column.
    ReplaceAll { column: String },
}

/// The grouping/search adapter over one query stage.
pub struct BreakoutPicker {
    query: State<Query>,
    stage: usize,
    search_input: State<String>,
    search: Debounced,
    /// Indexes into the stage's breakout list for every still-pinned item.
    pinned_breakout_indexes: State<Vec<usize>>,
}

impl BreakoutPicker {
    /// Create a picker over the given stage of a query snapshot.
    ///
    /// Every breakout existing at construction time starts out pinned.
    pub fn new(query: Query, stage: usize) -> Self {
        let pinned = (0..query.breakouts(stage).len()).collect();
        Self {
            query: State::new(query),
            stage,
            search_input: State::default(),
            search: Debounced::for_search(),
            pinned_breakout_indexes: State::new(pinned),
        }
    }

    /// Replace the query snapshot after the caller applied a command.
    ///
    /// Pin bookkeeping is kept; it was already adjusted when the command was
    /// produced.
    pub fn set_query(&self, query: Query) {
        self.query.set(query);
    }

    /// The raw (undebounced) search input, for echoing in the UI.
    pub fn search_input(&self) -> String {
        self.search_input.get()
    }

    /// Update the search text. Filtering follows after the debounce delay.
    pub fn set_search(&self, text: &str) {
        self.search_input.set(text.to_string());
        self.search.submit(text);
    }

    /// True while the raw search text is non-blank. Searching widens the
    /// visible list to all columns and bypasses the pinned section.
    pub fn is_searching(&self) -> bool {
        !self.search_input.get().trim().is_empty()
    }

    /// The pinned items, one per originally-pinned breakout, in order.
    pub fn pinned_items(&self) -> Vec<BreakoutItem> {
        let query = self.query.get();
        let breakouts = query.breakouts(self.stage).to_vec();
        self.pinned_breakout_indexes
            .get()
            .iter()
            .filter_map(|&index| breakouts.get(index))
            .map(|clause| self.breakout_item(&query, clause))
            .collect()
    }

    /// The grouped sections of visible columns.
    ///
    /// Outside a search this covers only columns not yet fully consumed by
    /// pinned breakouts; during a search it covers every column, filtered by
    /// a case-insensitive substring match on display names.
    pub fn sections(&self) -> Vec<ListSection> {
        let query = self.query.get();
        let all = query.breakoutable_columns(self.stage);
        let pinned = self.pinned_breakout_indexes.get();

        let scope: Vec<ColumnMetadata> = if self.is_searching() {
            all.to_vec()
        } else {
            all.iter()
                .filter(|column| !Self::is_pinned_column(&query, self.stage, &pinned, column))
                .cloned()
                .collect()
        };

        let needle = self.search.committed().trim().to_lowercase();
        let filtered: Vec<ColumnMetadata> = if needle.is_empty() {
            scope
        } else {
            scope
                .into_iter()
                .filter(|column| {
                    query
                        .display_info(self.stage, column)
                        .display_name
                        .to_lowercase()
                        .contains(&needle)
                })
                .collect()
        };

        group_columns(&filtered)
            .iter()
            .map(|group| ListSection {
                name: query.group_display_info(group).display_name,
                items: group
                    .columns()
                    .iter()
                    .flat_map(|column| self.column_items(&query, column))
                    .collect(),
            })
            .collect()
    }

    /// Command for adding a breakout on a column.
    pub fn add_breakout(&self, column: &ColumnMetadata) -> BreakoutCommand {
        BreakoutCommand::Add {
            column: column.name.clone(),
        }
    }

    /// Command for re-targeting an existing clause.
    pub fn update_breakout(
        &self,
        clause: &BreakoutClause,
        column: &ColumnMetadata,
    ) -> BreakoutCommand {
        BreakoutCommand::Update {
            clause: clause.clone(),
            column: column.name.clone(),
        }
    }

    /// Command for removing an unpinned clause.
    pub fn remove_breakout(&self, clause: &BreakoutClause) -> BreakoutCommand {
        BreakoutCommand::Remove {
            clause: clause.clone(),
        }
    }

    /// Remove the pinned item at the given list position.
    ///
    /// Updates the pin bookkeeping immediately, so the next render reflects
    /// the removal before the query round-trip, and yields the remove
    /// command carrying the original clause.
    pub fn remove_pinned(&self, item_index: usize) -> Option<BreakoutCommand> {
        let pinned = self.pinned_breakout_indexes.get();
        let &breakout_index = pinned.get(item_index)?;
        let query = self.query.get();
        let clause = query.breakouts(self.stage).get(breakout_index)?.clone();

        self.pinned_breakout_indexes.update(|indexes| {
            indexes.remove(item_index);
        });

        Some(BreakoutCommand::Remove { clause })
    }

    /// Command for replacing every breakout with one on the column.
    ///
    /// Clears the pin bookkeeping: the replaced clauses are gone.
    pub fn replace_breakouts(&self, column: &ColumnMetadata) -> BreakoutCommand {
        self.pinned_breakout_indexes.update(Vec::clear);
        BreakoutCommand::ReplaceAll {
            column: column.name.clone(),
        }
    }

    /// Render the picker as a simple list: pinned items first (hidden while
    /// searching), then the grouped sections.
    pub fn build_list(&self) -> Node {
        let mut children = Vec::new();

        if !self.is_searching() {
            let query = self.query.get();
            for item in self.pinned_items() {
                let label = match &item.breakout {
                    Some(clause) => {
                        query.breakout_label(self.stage, &clause.column, clause.bucket)
                    }
                    None => item.display_name.clone(),
                };
                children.push(Node::text(format!("● {label}")));
            }
        }

        for section in self.sections() {
            children.push(Node::text_styled(section.name, Style::new().bold()));
            for item in section.items {
                let marker = if item.breakout.is_some() { "✓" } else { " " };
                children.push(Node::text(format!("{} {}", marker, item.display_name)));
            }
        }

        Node::column(children)
    }

    /// A column is pinned when it is used by at least one breakout and every
    /// one of its applications is still pinned. Partially pinned columns
    /// stay available.
    fn is_pinned_column(
        query: &Query,
        stage: usize,
        pinned_indexes: &[usize],
        column: &ColumnMetadata,
    ) -> bool {
        let positions = query.display_info(stage, column).breakout_positions;
        !positions.is_empty()
            && positions
                .iter()
                .all(|position| pinned_indexes.contains(position))
    }

    fn breakout_item(&self, query: &Query, clause: &BreakoutClause) -> BreakoutItem {
        match query.breakout_column(self.stage, clause) {
            Some(column) => BreakoutItem {
                display_name: query.display_info(self.stage, column).display_name,
                column: column.clone(),
                breakout: Some(clause.clone()),
            },
            None => BreakoutItem {
                // The clause outlived its column; show what we know.
                display_name: clause.column.clone(),
                column: ColumnMetadata::new(clause.column.clone(), clause.column.clone()),
                breakout: Some(clause.clone()),
            },
        }
    }

    /// A used column expands into one item per breakout application; an
    /// unused column yields exactly one item.
    fn column_items(&self, query: &Query, column: &ColumnMetadata) -> Vec<BreakoutItem> {
        let info = query.display_info(self.stage, column);
        let breakouts = query.breakouts(self.stage);

        if info.breakout_positions.is_empty() {
            return vec![BreakoutItem {
                column: column.clone(),
                display_name: info.display_name,
                breakout: None,
            }];
        }

        info.breakout_positions
            .iter()
            .filter_map(|&position| breakouts.get(position))
            .map(|clause| BreakoutItem {
                column: column.clone(),
                display_name: info.display_name.clone(),
                breakout: Some(clause.clone()),
            })
            .collect()
    }
}
