//! Listing source trait

use std::sync::Arc;

use crate::property::{PropertyId, PropertyRecord};
use crate::Result;

/// Supplier of property listings
///
/// Implementations:
/// - `InMemorySource` - constructor-injected records
/// - `JsonFileSource` - records loaded from a JSON file
///
/// A snapshot is immutable. Changing a listing (for example its saved flag)
/// produces a new snapshot; holders of an older one keep seeing it unchanged.
pub trait PropertySource: Send + Sync {
    /// Current listings, in source order
    fn snapshot(&self) -> Result<Arc<[PropertyRecord]>>;

    /// Mark a listing saved or unsaved by swapping in a new snapshot
    ///
    /// Fails with [`crate::Error::PropertyNotFound`] for an unknown id.
    fn set_saved(&self, id: PropertyId, saved: bool) -> Result<()>;

    /// Source name for logging
    fn name(&self) -> &str;
}
