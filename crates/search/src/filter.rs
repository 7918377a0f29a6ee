//! Listing filters
//!
//! Every set criterion must hold (AND). Text criteria match case-insensitive
//! substrings, numeric ones are inclusive bounds.

use realty_core::{PropertyRecord, QueryCriteria};

/// Whether a record satisfies normalized criteria
///
/// Callers pass criteria through [`QueryCriteria::normalized`] first; an
/// `"all"` property type here would match nothing.
pub fn matches(record: &PropertyRecord, criteria: &QueryCriteria) -> bool {
    // Free text
    if let Some(q) = &criteria.query {
        let q = q.to_lowercase();
        if !contains_ci(&record.title, &q)
            && !contains_ci(&record.address, &q)
            && !contains_ci(&record.description, &q)
        {
            return false;
        }
    }

    if let Some(location) = &criteria.location {
        if !contains_ci(&record.address, &location.to_lowercase()) {
            return false;
        }
    }

    // Stored string, exact
    if let Some(property_type) = &criteria.property_type {
        if record.property_type.as_str() != property_type.as_str() {
            return false;
        }
    }

    if let Some(min) = criteria.min_price {
        if record.price < min {
            return false;
        }
    }

    if let Some(max) = criteria.max_price {
        if record.price > max {
            return false;
        }
    }

    // Minimum counts, "3" means 3+
    if let Some(bedrooms) = criteria.bedrooms {
        if record.bedrooms < bedrooms {
            return false;
        }
    }

    if let Some(bathrooms) = criteria.bathrooms {
        if record.bathrooms < f64::from(bathrooms) {
            return false;
        }
    }

    if let Some(min) = criteria.min_sqft {
        if record.sqft < min {
            return false;
        }
    }

    if let Some(max) = criteria.max_sqft {
        if record.sqft > max {
            return false;
        }
    }

    criteria.amenities.iter().all(|a| record.has_amenity(a))
}

fn contains_ci(haystack: &str, needle_lower: &str) -> bool {
    haystack.to_lowercase().contains(needle_lower)
}
