mod collection;
mod entries;
mod favorites;
mod item;
mod persistence;
mod rating;

pub use collection::{Collection, FavoriteToggle};
pub use entries::{CatalogEntry, DataSource, Details};
pub use favorites::OrderedIdSet;
pub use item::{Item, ItemSummary};
pub use persistence::{load_data_source, parse_data_source, sample_data_source};
pub use rating::{Gradient, RatingBand, RatingStyle, Rgb, band_for_percentage, rating_percentage};
