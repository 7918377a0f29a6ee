//! Result ordering

use std::cmp::Ordering;

use realty_core::{PropertyRecord, SortKey};

/// Sort records in place
///
/// The sort is stable: records that compare equal keep their relative
/// order. [`SortKey::Relevance`] leaves the slice untouched.
pub fn sort_records(records: &mut [PropertyRecord], key: SortKey) {
    match key {
        SortKey::Relevance => {}
        SortKey::PriceLow => records.sort_by(|a, b| a.price.total_cmp(&b.price)),
        SortKey::PriceHigh => records.sort_by(|a, b| b.price.total_cmp(&a.price)),
        SortKey::Newest => records.sort_by_key(|r| r.days_on_market),
        SortKey::Oldest => records.sort_by(|a, b| descending(a.days_on_market, b.days_on_market)),
        SortKey::Size => records.sort_by(|a, b| descending(a.sqft, b.sqft)),
    }
}

fn descending(a: u32, b: u32) -> Ordering {
    b.cmp(&a)
}

#[cfg(test)]
mod tests {
    use super::*;
    use realty_core::{PropertyId, PropertyType};

    fn record(id: u64, price: f64, days: u32, sqft: u32) -> PropertyRecord {
        PropertyRecord {
            id: PropertyId(id),
            title: format!("Listing {}", id),
            address: String::new(),
            property_type: PropertyType::Condo,
            price,
            bedrooms: 2,
            bathrooms: 1.0,
            sqft,
            days_on_market: days,
            description: String::new(),
            agent: Default::default(),
            coordinates: None,
            images: vec![],
            is_saved: false,
            amenities: vec![],
        }
    }

    fn ids(records: &[PropertyRecord]) -> Vec<u64> {
        records.iter().map(|r| r.id.0).collect()
    }

    fn sample() -> Vec<PropertyRecord> {
        vec![
            record(1, 500_000.0, 10, 1500),
            record(2, 300_000.0, 3, 900),
            record(3, 500_000.0, 30, 2200),
            record(4, 200_000.0, 3, 1500),
        ]
    }

    #[test]
    fn test_relevance_keeps_order() {
        let mut records = sample();
        sort_records(&mut records, SortKey::Relevance);
        assert_eq!(ids(&records), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_price_sorts_are_stable() {
        let mut records = sample();
        sort_records(&mut records, SortKey::PriceLow);
        assert_eq!(ids(&records), vec![4, 2, 1, 3]);

        let mut records = sample();
        sort_records(&mut records, SortKey::PriceHigh);
        assert_eq!(ids(&records), vec![1, 3, 2, 4]);
    }

    #[test]
    fn test_days_on_market_sorts() {
        let mut records = sample();
        sort_records(&mut records, SortKey::Newest);
        assert_eq!(ids(&records), vec![2, 4, 1, 3]);

        let mut records = sample();
        sort_records(&mut records, SortKey::Oldest);
        assert_eq!(ids(&records), vec![3, 1, 2, 4]);
    }

    #[test]
    fn test_size_sort_largest_first() {
        let mut records = sample();
        sort_records(&mut records, SortKey::Size);
        assert_eq!(ids(&records), vec![3, 1, 4, 2]);
    }
}
