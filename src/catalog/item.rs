use super::entries::CatalogEntry;
use super::rating::RatingStyle;

/// Read-only projection of a book used as an order candidate.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemSummary {
    pub id: u32,
    pub name: String,
    pub price: f64,
    pub rating: f64,
}

/// One catalog entry together with its view state.
#[derive(Debug, Clone)]
pub struct Item {
    entry: CatalogEntry,
    hidden: bool,
    rating_style: RatingStyle,
}

impl Item {
    #[must_use]
    pub fn new(entry: CatalogEntry) -> Self {
        let rating_style = RatingStyle::from_rating(entry.rating);
        Self {
            entry,
            hidden: false,
            rating_style,
        }
    }

    #[must_use]
    pub fn id(&self) -> u32 {
        self.entry.id
    }

    #[must_use]
    pub fn entry(&self) -> &CatalogEntry {
        &self.entry
    }

    #[must_use]
    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    #[must_use]
    pub fn rating_style(&self) -> RatingStyle {
        self.rating_style
    }

    /// Hides the item unless every filter names a set attribute.
    /// Returns the new hidden state.
    pub fn apply_filters<S: AsRef<str>>(&mut self, filters: &[S]) -> bool {
        self.hidden = filters
            .iter()
            .any(|filter| !self.entry.details.allows(filter.as_ref()));
        self.hidden
    }

    #[must_use]
    pub fn summary(&self) -> ItemSummary {
        ItemSummary {
            id: self.entry.id,
            name: self.entry.name.clone(),
            price: self.entry.price,
            rating: self.entry.rating,
        }
    }
}
