//! Property query engine

use std::sync::Arc;

use realty_config::SearchConfig;
use realty_core::criteria::param;
use realty_core::{
    Error, PropertyId, PropertyRecord, PropertySource, QueryCriteria, Result, SortKey,
};

use crate::filter::matches;
use crate::sort::sort_records;
use crate::source::JsonFileSource;

/// Filter then sort a listing snapshot
///
/// Criteria are normalized first, so empty strings and `"all"` are ignored.
/// The input is never reordered; a new `Vec` is returned. Calling this twice
/// with the same arguments gives equal results.
pub fn query(
    properties: &[PropertyRecord],
    criteria: &QueryCriteria,
    sort: SortKey,
) -> Vec<PropertyRecord> {
    let criteria = criteria.normalized();

    let mut results: Vec<PropertyRecord> = properties
        .iter()
        .filter(|r| matches(r, &criteria))
        .cloned()
        .collect();
    sort_records(&mut results, sort);

    tracing::debug!(
        total = properties.len(),
        matched = results.len(),
        sort = %sort,
        "Listing query"
    );

    results
}

/// Query engine over a pluggable listing source
#[derive(Clone)]
pub struct PropertyQueryEngine {
    source: Arc<dyn PropertySource>,
    default_sort: SortKey,
}

impl PropertyQueryEngine {
    pub fn new(source: Arc<dyn PropertySource>) -> Self {
        Self {
            source,
            default_sort: SortKey::default(),
        }
    }

    /// Set the sort used by [`Self::search_default`]
    pub fn with_default_sort(mut self, sort: SortKey) -> Self {
        self.default_sort = sort;
        self
    }

    /// Build an engine over the configured listings file
    pub fn from_config(config: &SearchConfig) -> Result<Self> {
        let path = config.listings_path.as_deref().ok_or_else(|| {
            Error::invalid_input("search.listings_path", "No listings file configured")
        })?;
        let source = JsonFileSource::open(path)?;
        Ok(Self::new(Arc::new(source)).with_default_sort(config.default_sort))
    }

    pub fn source(&self) -> &Arc<dyn PropertySource> {
        &self.source
    }

    pub fn default_sort(&self) -> SortKey {
        self.default_sort
    }

    /// Query the current snapshot
    pub fn search(&self, criteria: &QueryCriteria, sort: SortKey) -> Result<Vec<PropertyRecord>> {
        let snapshot = self.source.snapshot().map_err(|e| {
            tracing::warn!(source = self.source.name(), error = %e, "Listing source failed");
            e
        })?;
        Ok(query(&snapshot, criteria, sort))
    }

    /// Query with the configured default sort
    pub fn search_default(&self, criteria: &QueryCriteria) -> Result<Vec<PropertyRecord>> {
        self.search(criteria, self.default_sort)
    }

    /// Query from a URL query string such as `?propertyType=house&minPrice=400000`
    ///
    /// A `sort` parameter picks the ordering, falling back to the default sort.
    pub fn search_query_string(&self, query_string: &str) -> Result<Vec<PropertyRecord>> {
        let criteria = QueryCriteria::from_query_string(query_string);
        let sort = sort_param(query_string).unwrap_or(self.default_sort);
        self.search(&criteria, sort)
    }

    /// Save or unsave a listing
    ///
    /// Results already returned by [`Self::search`] are unaffected.
    pub fn set_saved(&self, id: PropertyId, saved: bool) -> Result<()> {
        self.source.set_saved(id, saved)
    }

    /// Saved listings in source order
    pub fn saved(&self) -> Result<Vec<PropertyRecord>> {
        let snapshot = self.source.snapshot()?;
        Ok(snapshot.iter().filter(|r| r.is_saved).cloned().collect())
    }
}

fn sort_param(query_string: &str) -> Option<SortKey> {
    let query_string = query_string.strip_prefix('?').unwrap_or(query_string);
    url::form_urlencoded::parse(query_string.as_bytes())
        .find(|(key, _)| key == param::SORT)
        .map(|(_, value)| SortKey::parse(&value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::InMemorySource;
    use realty_core::PropertyType;

    fn record(id: u64, property_type: PropertyType, price: f64) -> PropertyRecord {
        PropertyRecord {
            id: PropertyId(id),
            title: format!("Listing {}", id),
            address: format!("{} Main Street, Springfield", id),
            property_type,
            price,
            bedrooms: 3,
            bathrooms: 2.0,
            sqft: 1500,
            days_on_market: id as u32,
            description: String::new(),
            agent: Default::default(),
            coordinates: None,
            images: vec![],
            is_saved: false,
            amenities: vec![],
        }
    }

    fn sample() -> Vec<PropertyRecord> {
        vec![
            record(1, PropertyType::House, 500_000.0),
            record(2, PropertyType::Condo, 300_000.0),
            record(3, PropertyType::House, 350_000.0),
        ]
    }

    fn engine() -> PropertyQueryEngine {
        PropertyQueryEngine::new(Arc::new(InMemorySource::new(sample())))
    }

    #[test]
    fn test_query_leaves_input_untouched() {
        let records = sample();
        let results = query(&records, &QueryCriteria::default(), SortKey::PriceLow);
        assert_eq!(results.iter().map(|r| r.id.0).collect::<Vec<_>>(), vec![2, 3, 1]);
        assert_eq!(records, sample());
    }

    #[test]
    fn test_query_normalizes_sentinels() {
        let criteria = QueryCriteria {
            property_type: Some("all".to_string()),
            location: Some("  ".to_string()),
            ..QueryCriteria::default()
        };
        assert_eq!(query(&sample(), &criteria, SortKey::Relevance).len(), 3);
    }

    #[test]
    fn test_no_match_is_empty() {
        let criteria = QueryCriteria::new().with_min_price(10_000_000.0);
        assert!(query(&sample(), &criteria, SortKey::Relevance).is_empty());
    }

    #[test]
    fn test_search_query_string() {
        let engine = engine();
        let results = engine
            .search_query_string("?propertyType=house&sort=price-low")
            .unwrap();
        assert_eq!(results.iter().map(|r| r.id.0).collect::<Vec<_>>(), vec![3, 1]);

        let results = engine.search_query_string("sort=bogus").unwrap();
        assert_eq!(results.iter().map(|r| r.id.0).collect::<Vec<_>>(), vec![1, 2, 3]);
    }

    #[test]
    fn test_default_sort() {
        let engine = engine().with_default_sort(SortKey::PriceHigh);
        let results = engine.search_default(&QueryCriteria::default()).unwrap();
        assert_eq!(results[0].id, PropertyId(1));
        assert_eq!(engine.search_query_string("").unwrap()[0].id, PropertyId(1));
    }

    #[test]
    fn test_saved_toggle_does_not_touch_results() {
        let engine = engine();
        let before = engine.search(&QueryCriteria::default(), SortKey::Relevance).unwrap();

        engine.set_saved(PropertyId(2), true).unwrap();

        assert!(before.iter().all(|r| !r.is_saved));
        let saved = engine.saved().unwrap();
        assert_eq!(saved.len(), 1);
        assert_eq!(saved[0].id, PropertyId(2));
    }

    #[test]
    fn test_from_config_requires_path() {
        let err = PropertyQueryEngine::from_config(&SearchConfig::default()).err();
        assert!(matches!(err, Some(Error::InvalidInput { .. })));
    }
}
