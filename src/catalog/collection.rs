use std::collections::HashMap;

use tracing::{debug, warn};

use super::entries::CatalogEntry;
use super::favorites::OrderedIdSet;
use super::item::{Item, ItemSummary};

/// Result of a favorite toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FavoriteToggle {
    Added,
    Removed,
    /// No item carries the requested id; nothing changed.
    Unknown,
}

/// All rendered books, in catalog order.
#[derive(Debug, Clone, Default)]
pub struct Collection {
    items: Vec<Item>,
    positions: HashMap<u32, usize>,
    order_candidates: Vec<ItemSummary>,
    favorites: OrderedIdSet,
}

impl Collection {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds one item per entry, in input order.
    /// A repeated id replaces the earlier item at its original position.
    pub fn render_all<I>(&mut self, entries: I)
    where
        I: IntoIterator<Item = CatalogEntry>,
    {
        for entry in entries {
            let item = Item::new(entry);
            let id = item.id();
            let summary = item.summary();

            if let Some(&pos) = self.positions.get(&id) {
                warn!(id, "duplicate catalog id, replacing earlier entry");
                self.items[pos] = item;
                self.order_candidates[pos] = summary;
                self.favorites.remove(id);
            } else {
                self.positions.insert(id, self.items.len());
                self.items.push(item);
                self.order_candidates.push(summary);
            }
        }
        debug!(items = self.items.len(), "rendered collection");
    }

    pub fn toggle_favorite(&mut self, id: u32) -> FavoriteToggle {
        if !self.positions.contains_key(&id) {
            debug!(id, "favorite toggle for unknown id ignored");
            return FavoriteToggle::Unknown;
        }
        if self.favorites.toggle(id) {
            FavoriteToggle::Added
        } else {
            FavoriteToggle::Removed
        }
    }

    /// Re-evaluates every item against the full filter list.
    /// Returns how many items ended up hidden.
    pub fn filter_books<S: AsRef<str>>(&mut self, filters: &[S]) -> usize {
        let hidden = self
            .items
            .iter_mut()
            .map(|item| item.apply_filters(filters))
            .filter(|&hidden| hidden)
            .count();
        debug!(
            filters = filters.len(),
            hidden,
            total = self.items.len(),
            "applied filters"
        );
        hidden
    }

    #[must_use]
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    #[must_use]
    pub fn get(&self, id: u32) -> Option<&Item> {
        self.positions.get(&id).map(|&pos| &self.items[pos])
    }

    #[must_use]
    pub fn item_at(&self, index: usize) -> Option<&Item> {
        self.items.get(index)
    }

    #[must_use]
    pub fn favorite_ids(&self) -> &[u32] {
        self.favorites.as_slice()
    }

    #[must_use]
    pub fn is_favorite(&self, id: u32) -> bool {
        self.favorites.contains(id)
    }

    /// Summaries of every book, keyed by id, in catalog order.
    #[must_use]
    pub fn order_candidates(&self) -> &[ItemSummary] {
        &self.order_candidates
    }

    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.items.iter().filter(|item| !item.is_hidden()).count()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
