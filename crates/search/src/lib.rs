//! Property listing search
//!
//! Features:
//! - AND-composed filters (text, type, price, rooms, size, amenities)
//! - Stable sorting by price, days on market or size
//! - Listing sources: in-memory records or a JSON file
//! - Saved-flag toggling through immutable snapshots

pub mod engine;
pub mod filter;
pub mod sort;
pub mod source;

pub use engine::{query, PropertyQueryEngine};
pub use filter::matches;
pub use sort::sort_records;
pub use source::{load_listings_from_file, set_saved, InMemorySource, JsonFileSource};

pub use realty_core::{PriceRange, PropertyRecord, PropertySource, QueryCriteria, SortKey};
