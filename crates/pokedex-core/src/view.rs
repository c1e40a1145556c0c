//! View state derivation for the list and gallery pages.
//!
//! All functions here are pure: the derived list is recomputed from the raw
//! records plus the user's criteria on every change, with no hidden state.
//!
//! # List page
//!
//! [`ListQuery`] holds search text, sort key and sort direction. Two rules
//! are part of the page's behavior, not incidental:
//!
//! - changing the search text clears the sort key
//! - sort controls are only offered while a search term is present
//!
//! # Gallery page
//!
//! [`TypeFilter`] holds the selected type names. A record passes when any of
//! its types is selected; an empty selection lets everything through.

use std::cmp::Ordering;

use tracing::debug;

use crate::model::{HasIdentity, PokemonDetails, PokemonListItem};

/// Field the list is sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    /// Numeric identity parsed from the locator
    Id,
    /// Lexicographic name
    Name,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

/// Search and sort criteria of the list page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListQuery {
    search: String,
    sort_key: Option<SortKey>,
    direction: SortDirection,
}

impl ListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn sort_key(&self) -> Option<SortKey> {
        self.sort_key
    }

    pub fn direction(&self) -> SortDirection {
        self.direction
    }

    /// Replaces the search text. Any change to the text clears the sort key.
    pub fn set_search(&mut self, search: impl Into<String>) {
        let search = search.into();
        if search != self.search {
            self.sort_key = None;
        }
        self.search = search;
    }

    pub fn set_sort_key(&mut self, key: SortKey) {
        self.sort_key = Some(key);
    }

    pub fn set_direction(&mut self, direction: SortDirection) {
        self.direction = direction;
    }

    /// Sort controls are only shown while a search term is active.
    pub fn sort_controls_visible(&self) -> bool {
        !self.search.is_empty()
    }

    /// Direction buttons do nothing until a sort key is chosen.
    pub fn direction_enabled(&self) -> bool {
        self.sort_key.is_some()
    }

    /// Case-insensitive substring match against the search text.
    pub fn matches(&self, name: &str) -> bool {
        self.search.is_empty() || name.to_lowercase().contains(&self.search.to_lowercase())
    }
}

fn compare_items(a: &PokemonListItem, b: &PokemonListItem, key: SortKey) -> Ordering {
    match key {
        // Entries without identity order before all identified ones
        SortKey::Id => a.identity().cmp(&b.identity()),
        SortKey::Name => a.name.cmp(&b.name),
    }
}

/// Applies search and sort to the raw list.
///
/// Without a sort key the fetch order is preserved. Sorting is stable, so
/// ties keep their fetch order in both directions.
pub fn derive_list(items: &[PokemonListItem], query: &ListQuery) -> Vec<PokemonListItem> {
    let mut derived: Vec<PokemonListItem> = items
        .iter()
        .filter(|item| query.matches(&item.name))
        .cloned()
        .collect();

    if let Some(key) = query.sort_key {
        derived.sort_by(|a, b| {
            let ordering = compare_items(a, b, key);
            match query.direction {
                SortDirection::Ascending => ordering,
                SortDirection::Descending => ordering.reverse(),
            }
        });
    }

    debug!(
        "Derived {} of {} list entries (search: {:?}, sort: {:?} {:?})",
        derived.len(),
        items.len(),
        query.search,
        query.sort_key,
        query.direction
    );

    derived
}

/// Selected type names of the gallery filter bar.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TypeFilter {
    selected: Vec<String>,
}

impl TypeFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Selects `type_name` if it is not selected, otherwise deselects it.
    pub fn toggle(&mut self, type_name: &str) {
        if let Some(pos) = self.selected.iter().position(|t| t == type_name) {
            self.selected.remove(pos);
        } else {
            self.selected.push(type_name.to_string());
        }
    }

    /// Back to "All".
    pub fn clear(&mut self) {
        self.selected.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    pub fn is_selected(&self, type_name: &str) -> bool {
        self.selected.iter().any(|t| t == type_name)
    }

    pub fn matches(&self, record: &PokemonDetails) -> bool {
        self.is_empty() || record.type_names().any(|name| self.is_selected(name))
    }
}

/// Keeps the records matching any selected type, in their original order.
pub fn filter_by_types(records: &[PokemonDetails], filter: &TypeFilter) -> Vec<PokemonDetails> {
    records
        .iter()
        .filter(|record| filter.matches(record))
        .cloned()
        .collect()
}
