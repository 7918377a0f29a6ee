//! Listing sources
//!
//! Handles supplying property listings to the query engine, either from
//! records handed in by the caller or from a JSON file on disk.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use parking_lot::RwLock;
use serde::Deserialize;

use realty_core::{Error, PropertyId, PropertyRecord, PropertySource, Result};

/// Listings file structure
#[derive(Debug, Deserialize)]
struct ListingsFile {
    properties: Vec<PropertyRecord>,
}

/// Load listings from a JSON file shaped `{ "properties": [...] }`
pub fn load_listings_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<PropertyRecord>> {
    let content = std::fs::read_to_string(path)?;
    let file: ListingsFile = serde_json::from_str(&content)?;
    Ok(file.properties)
}

/// Copy of `records` with one listing's saved flag changed
///
/// Records are cloned, the input is left as is. An unknown id yields an
/// unchanged copy.
pub fn set_saved(records: &[PropertyRecord], id: PropertyId, saved: bool) -> Vec<PropertyRecord> {
    records
        .iter()
        .map(|r| if r.id == id { r.with_saved(saved) } else { r.clone() })
        .collect()
}

/// Listings held in memory
///
/// Each save toggle swaps in a fresh snapshot; readers holding an earlier
/// snapshot keep seeing it unchanged.
pub struct InMemorySource {
    name: String,
    snapshot: RwLock<Arc<[PropertyRecord]>>,
}

impl InMemorySource {
    pub fn new(records: Vec<PropertyRecord>) -> Self {
        Self::named("memory", records)
    }

    pub fn named(name: impl Into<String>, records: Vec<PropertyRecord>) -> Self {
        Self {
            name: name.into(),
            snapshot: RwLock::new(records.into()),
        }
    }

    /// Replace every listing, returning the new count
    pub fn replace(&self, records: Vec<PropertyRecord>) -> usize {
        let count = records.len();
        *self.snapshot.write() = records.into();
        count
    }

    pub fn len(&self) -> usize {
        self.snapshot.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshot.read().is_empty()
    }
}

impl PropertySource for InMemorySource {
    fn snapshot(&self) -> Result<Arc<[PropertyRecord]>> {
        Ok(Arc::clone(&self.snapshot.read()))
    }

    fn set_saved(&self, id: PropertyId, saved: bool) -> Result<()> {
        let mut guard = self.snapshot.write();
        if !guard.iter().any(|r| r.id == id) {
            return Err(Error::PropertyNotFound(id));
        }
        *guard = set_saved(&guard, id, saved).into();
        tracing::debug!(source = %self.name, id = %id, saved, "Updated saved flag");
        Ok(())
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Listings loaded from a JSON file
pub struct JsonFileSource {
    path: PathBuf,
    inner: InMemorySource,
}

impl JsonFileSource {
    /// Load listings from `path`
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let records = load_listings_from_file(&path).map_err(|e| {
            tracing::warn!(path = %path.display(), error = %e, "Could not load listings");
            e
        })?;
        tracing::info!("Loaded {} listings from {}", records.len(), path.display());

        Ok(Self {
            inner: InMemorySource::named(path.display().to_string(), records),
            path,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Re-read the file (for runtime updates)
    ///
    /// Saved flags come from the file again. On failure the current
    /// listings stay in place.
    pub fn reload(&self) -> Result<usize> {
        let records = load_listings_from_file(&self.path)?;
        let count = self.inner.replace(records);
        tracing::info!("Reloaded {} listings from {}", count, self.path.display());
        Ok(count)
    }
}

impl PropertySource for JsonFileSource {
    fn snapshot(&self) -> Result<Arc<[PropertyRecord]>> {
        self.inner.snapshot()
    }

    fn set_saved(&self, id: PropertyId, saved: bool) -> Result<()> {
        self.inner.set_saved(id, saved)
    }

    fn name(&self) -> &str {
        self.inner.name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use realty_core::PropertyType;

    fn record(id: u64) -> PropertyRecord {
        PropertyRecord {
            id: PropertyId(id),
            title: format!("Listing {}", id),
            address: "1 Test Street".to_string(),
            property_type: PropertyType::Apartment,
            price: 100_000.0 * id as f64,
            bedrooms: 1,
            bathrooms: 1.0,
            sqft: 800,
            days_on_market: 1,
            description: String::new(),
            agent: Default::default(),
            coordinates: None,
            images: vec![],
            is_saved: false,
            amenities: vec![],
        }
    }

    #[test]
    fn test_set_saved_copies() {
        let records = vec![record(1), record(2)];
        let updated = set_saved(&records, PropertyId(2), true);
        assert!(updated[1].is_saved);
        assert!(!records[1].is_saved);
        assert_eq!(updated[0], records[0]);

        let unchanged = set_saved(&records, PropertyId(9), true);
        assert_eq!(unchanged, records);
    }

    #[test]
    fn test_in_memory_snapshot_isolation() {
        let source = InMemorySource::new(vec![record(1), record(2)]);
        let before = source.snapshot().unwrap();

        source.set_saved(PropertyId(1), true).unwrap();
        let after = source.snapshot().unwrap();

        assert!(!before[0].is_saved);
        assert!(after[0].is_saved);
        assert!(!Arc::ptr_eq(&before, &after));
    }

    #[test]
    fn test_unknown_id_is_error() {
        let source = InMemorySource::new(vec![record(1)]);
        let err = source.set_saved(PropertyId(42), true).unwrap_err();
        assert!(matches!(err, Error::PropertyNotFound(PropertyId(42))));
    }

    #[test]
    fn test_json_file_source_load_and_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("listings.json");
        let json = serde_json::json!({ "properties": [record(1), record(2)] });
        std::fs::write(&path, json.to_string()).unwrap();

        let source = JsonFileSource::open(&path).unwrap();
        assert_eq!(source.snapshot().unwrap().len(), 2);
        source.set_saved(PropertyId(2), true).unwrap();
        assert!(source.snapshot().unwrap()[1].is_saved);

        let json = serde_json::json!({ "properties": [record(3)] });
        std::fs::write(&path, json.to_string()).unwrap();
        assert_eq!(source.reload().unwrap(), 1);
        assert_eq!(source.snapshot().unwrap()[0].id, PropertyId(3));
    }

    #[test]
    fn test_json_file_source_errors() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            JsonFileSource::open(dir.path().join("missing.json")),
            Err(Error::Io(_))
        ));

        let path = dir.path().join("broken.json");
        std::fs::write(&path, "{ \"listings\": [] }").unwrap();
        assert!(matches!(JsonFileSource::open(&path), Err(Error::Json(_))));
    }
}
