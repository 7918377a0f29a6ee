//! Listing query criteria and sort keys
//!
//! Criteria are sourced from user-editable request parameters. Every field is
//! optional and an absent field means "no constraint". When reading
//! parameters, an empty value or the sentinel `"all"` is the same as absence,
//! and so is a number that does not parse.
//!
//! # Example
//!
//! ```
//! use realty_core::{QueryCriteria, SortKey};
//!
//! let criteria = QueryCriteria::from_query_string("?propertyType=house&minPrice=400000&bedrooms=all");
//! assert_eq!(criteria.property_type.as_deref(), Some("house"));
//! assert_eq!(criteria.min_price, Some(400000.0));
//! assert_eq!(criteria.bedrooms, None);
//! assert_eq!(criteria.to_query_string(), "propertyType=house&minPrice=400000");
//! assert_eq!(SortKey::parse("price-low"), SortKey::PriceLow);
//! ```

use serde::{Deserialize, Serialize};
use url::form_urlencoded;

/// Sentinel meaning "any value"
pub const ALL_SENTINEL: &str = "all";

/// Parameter names, in the order they are emitted
pub mod param {
    pub const QUERY: &str = "query";
    pub const LOCATION: &str = "location";
    pub const PROPERTY_TYPE: &str = "propertyType";
    pub const MIN_PRICE: &str = "minPrice";
    pub const MAX_PRICE: &str = "maxPrice";
    pub const PRICE_RANGE: &str = "priceRange";
    pub const BEDROOMS: &str = "bedrooms";
    pub const BATHROOMS: &str = "bathrooms";
    pub const MIN_SQFT: &str = "minSqft";
    pub const MAX_SQFT: &str = "maxSqft";
    pub const AMENITIES: &str = "amenities";
    /// Ordering, read by the query engine rather than the criteria
    pub const SORT: &str = "sort";
}

/// Constraints narrowing a property collection
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryCriteria {
    /// Free text matched against title, address and description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
    /// Matched against the address only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// Exact stored property type
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub property_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_price: Option<f64>,
    /// Minimum bedroom count
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bedrooms: Option<u32>,
    /// Minimum bathroom count
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bathrooms: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_sqft: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_sqft: Option<u32>,
    /// Every listed amenity must be present
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub amenities: Vec<String>,
}

impl QueryCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = normalize_text(&query.into());
        self
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = normalize_text(&location.into());
        self
    }

    pub fn with_property_type(mut self, property_type: impl Into<String>) -> Self {
        self.property_type = normalize_text(&property_type.into());
        self
    }

    pub fn with_min_price(mut self, min_price: f64) -> Self {
        self.min_price = Some(min_price);
        self
    }

    pub fn with_max_price(mut self, max_price: f64) -> Self {
        self.max_price = Some(max_price);
        self
    }

    /// Set both price bounds from a preset
    pub fn with_price_range(mut self, range: PriceRange) -> Self {
        self.min_price = range.min;
        self.max_price = range.max;
        self
    }

    pub fn with_bedrooms(mut self, bedrooms: u32) -> Self {
        self.bedrooms = Some(bedrooms);
        self
    }

    pub fn with_bathrooms(mut self, bathrooms: u32) -> Self {
        self.bathrooms = Some(bathrooms);
        self
    }

    pub fn with_sqft_range(mut self, min_sqft: Option<u32>, max_sqft: Option<u32>) -> Self {
        self.min_sqft = min_sqft;
        self.max_sqft = max_sqft;
        self
    }

    pub fn with_amenity(mut self, amenity: impl Into<String>) -> Self {
        if let Some(a) = normalize_list_item(&amenity.into()) {
            self.amenities.push(a);
        }
        self
    }

    /// Same criteria with empty and `"all"` text fields removed
    ///
    /// Criteria built through struct literals or deserialization may still
    /// carry sentinel values; the query engine normalizes before filtering.
    pub fn normalized(&self) -> Self {
        Self {
            query: self.query.as_deref().and_then(normalize_text),
            location: self.location.as_deref().and_then(normalize_text),
            property_type: self.property_type.as_deref().and_then(normalize_text),
            min_price: self.min_price.filter(|p| p.is_finite()),
            max_price: self.max_price.filter(|p| p.is_finite()),
            bedrooms: self.bedrooms,
            bathrooms: self.bathrooms,
            min_sqft: self.min_sqft,
            max_sqft: self.max_sqft,
            amenities: self
                .amenities
                .iter()
                .filter_map(|a| normalize_list_item(a))
                .collect(),
        }
    }

    /// Whether any constraint is set
    pub fn has_active_filters(&self) -> bool {
        *self != Self::default()
    }

    /// Drop every constraint
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Build criteria from request parameters
    ///
    /// The first occurrence of a key wins. A `priceRange` preset only fills
    /// bounds that were not given explicitly. `amenities` accepts a comma
    /// separated list and may repeat.
    pub fn from_params<I, K, V>(params: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut criteria = Self::default();
        let mut price_range: Option<PriceRange> = None;

        for (key, value) in params {
            let key = key.as_ref();
            let value = value.as_ref();
            match key {
                param::QUERY => set_once(&mut criteria.query, normalize_text(value)),
                param::LOCATION => set_once(&mut criteria.location, normalize_text(value)),
                param::PROPERTY_TYPE => {
                    set_once(&mut criteria.property_type, normalize_text(value))
                }
                param::MIN_PRICE => {
                    set_once(&mut criteria.min_price, parse_count(key, value).map(|v| v as f64))
                }
                param::MAX_PRICE => {
                    set_once(&mut criteria.max_price, parse_count(key, value).map(|v| v as f64))
                }
                param::BEDROOMS => set_once(&mut criteria.bedrooms, parse_u32(key, value)),
                param::BATHROOMS => set_once(&mut criteria.bathrooms, parse_u32(key, value)),
                param::MIN_SQFT => set_once(&mut criteria.min_sqft, parse_u32(key, value)),
                param::MAX_SQFT => set_once(&mut criteria.max_sqft, parse_u32(key, value)),
                param::PRICE_RANGE => {
                    if price_range.is_none() {
                        price_range = PriceRange::parse(value);
                        if price_range.is_none() {
                            tracing::debug!(value, "Ignoring unrecognised price range");
                        }
                    }
                }
                param::AMENITIES => criteria
                    .amenities
                    .extend(value.split(',').filter_map(normalize_list_item)),
                param::SORT => {}
                other => tracing::debug!(key = other, "Ignoring unknown query parameter"),
            }
        }

        if let Some(range) = price_range {
            set_once(&mut criteria.min_price, range.min);
            set_once(&mut criteria.max_price, range.max);
        }

        criteria
    }

    /// Build criteria from a URL query string, with or without the leading `?`
    pub fn from_query_string(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        Self::from_params(form_urlencoded::parse(query.as_bytes()))
    }

    /// Active constraints as request parameters
    ///
    /// Only set, non-empty, non-`"all"` values are emitted, in a fixed order.
    pub fn to_params(&self) -> Vec<(&'static str, String)> {
        let c = self.normalized();
        let mut params = Vec::new();

        if let Some(v) = c.query {
            params.push((param::QUERY, v));
        }
        if let Some(v) = c.location {
            params.push((param::LOCATION, v));
        }
        if let Some(v) = c.property_type {
            params.push((param::PROPERTY_TYPE, v));
        }
        if let Some(v) = c.min_price {
            params.push((param::MIN_PRICE, v.to_string()));
        }
        if let Some(v) = c.max_price {
            params.push((param::MAX_PRICE, v.to_string()));
        }
        if let Some(v) = c.bedrooms {
            params.push((param::BEDROOMS, v.to_string()));
        }
        if let Some(v) = c.bathrooms {
            params.push((param::BATHROOMS, v.to_string()));
        }
        if let Some(v) = c.min_sqft {
            params.push((param::MIN_SQFT, v.to_string()));
        }
        if let Some(v) = c.max_sqft {
            params.push((param::MAX_SQFT, v.to_string()));
        }
        if !c.amenities.is_empty() {
            params.push((param::AMENITIES, c.amenities.join(",")));
        }

        params
    }

    /// Active constraints as a URL-encoded query string (no leading `?`)
    pub fn to_query_string(&self) -> String {
        form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.to_params())
            .finish()
    }
}

fn set_once<T>(slot: &mut Option<T>, value: Option<T>) {
    if slot.is_none() {
        *slot = value;
    }
}

/// Text criterion as given, `None` when empty, blank or `"all"`
///
/// The value itself is kept verbatim so substring matching sees exactly
/// what was asked for.
fn normalize_text(value: &str) -> Option<String> {
    if value.trim().is_empty() || value == ALL_SENTINEL {
        None
    } else {
        Some(value.to_string())
    }
}

/// One entry of a comma separated list, trimmed
fn normalize_list_item(value: &str) -> Option<String> {
    normalize_text(value.trim())
}

/// Parse an optionally signed integer prefix, so `"3+"` reads as 3 and
/// `"-5"` as -5
fn parse_count(key: &str, value: &str) -> Option<i64> {
    let trimmed = value.trim_start();
    if trimmed.is_empty() || trimmed == ALL_SENTINEL {
        return None;
    }
    let (sign, rest) = match trimmed.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };
    let digits: String = rest.chars().take_while(|c| c.is_ascii_digit()).collect();
    match digits.parse::<i64>() {
        Ok(v) => Some(sign * v),
        Err(_) => {
            tracing::debug!(key, value, "Ignoring non-numeric query parameter");
            None
        }
    }
}

fn parse_u32(key: &str, value: &str) -> Option<u32> {
    parse_count(key, value).and_then(|v| u32::try_from(v).ok())
}

/// Price bound preset, e.g. "$200K - $400K"
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PriceRange {
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl PriceRange {
    pub const fn new(min: Option<f64>, max: Option<f64>) -> Self {
        Self { min, max }
    }

    /// No bounds
    pub const fn any() -> Self {
        Self::new(None, None)
    }

    /// The preset ranges offered to users, "Any Price" first
    pub fn presets() -> Vec<PriceRange> {
        vec![
            Self::any(),
            Self::new(Some(0.0), Some(200_000.0)),
            Self::new(Some(200_000.0), Some(400_000.0)),
            Self::new(Some(400_000.0), Some(600_000.0)),
            Self::new(Some(600_000.0), Some(800_000.0)),
            Self::new(Some(800_000.0), Some(1_000_000.0)),
            Self::new(Some(1_000_000.0), None),
        ]
    }

    /// Parse `"200000-400000"`, `"1000000+"` or `""` (any)
    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        if value.is_empty() || value == ALL_SENTINEL {
            return Some(Self::any());
        }
        if let Some(min) = value.strip_suffix('+') {
            let min = min.trim().parse::<f64>().ok()?;
            return Some(Self::new(Some(min), None));
        }
        let (min, max) = value.split_once('-')?;
        let min = min.trim().parse::<f64>().ok()?;
        let max = max.trim().parse::<f64>().ok()?;
        Some(Self::new(Some(min), Some(max)))
    }

    /// Parameter form accepted by [`PriceRange::parse`]
    pub fn to_param(&self) -> String {
        match (self.min, self.max) {
            (None, None) => String::new(),
            (Some(min), None) => format!("{}+", min),
            (min, Some(max)) => format!("{}-{}", min.unwrap_or(0.0), max),
        }
    }

    /// Human label, e.g. "Under $200K" or "$800K - $1M"
    pub fn label(&self) -> String {
        match (self.min, self.max) {
            (None, None) => "Any Price".to_string(),
            (Some(min), None) => format!("Over {}", short_dollars(min)),
            (min, Some(max)) if min.unwrap_or(0.0) <= 0.0 => {
                format!("Under {}", short_dollars(max))
            }
            (min, Some(max)) => {
                format!("{} - {}", short_dollars(min.unwrap_or(0.0)), short_dollars(max))
            }
        }
    }

    pub fn contains(&self, price: f64) -> bool {
        self.min.map_or(true, |min| price >= min) && self.max.map_or(true, |max| price <= max)
    }
}

fn short_dollars(amount: f64) -> String {
    if amount >= 1_000_000.0 {
        format!("${}M", amount / 1_000_000.0)
    } else if amount >= 1_000.0 {
        format!("${}K", amount / 1_000.0)
    } else {
        format!("${}", amount)
    }
}

/// Result ordering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    /// Keep input order
    #[default]
    Relevance,
    PriceLow,
    PriceHigh,
    /// Fewest days on market first
    Newest,
    Oldest,
    /// Largest first
    Size,
}

impl SortKey {
    pub const ALL: [SortKey; 6] = [
        SortKey::Relevance,
        SortKey::PriceLow,
        SortKey::PriceHigh,
        SortKey::Newest,
        SortKey::Oldest,
        SortKey::Size,
    ];

    /// Parse a sort parameter; unknown values fall back to relevance
    pub fn parse(value: &str) -> Self {
        match value.trim() {
            "price-low" => SortKey::PriceLow,
            "price-high" => SortKey::PriceHigh,
            "newest" => SortKey::Newest,
            "oldest" => SortKey::Oldest,
            "size" => SortKey::Size,
            _ => SortKey::Relevance,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Relevance => "relevance",
            SortKey::PriceLow => "price-low",
            SortKey::PriceHigh => "price-high",
            SortKey::Newest => "newest",
            SortKey::Oldest => "oldest",
            SortKey::Size => "size",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            SortKey::Relevance => "Relevance",
            SortKey::PriceLow => "Price: Low to High",
            SortKey::PriceHigh => "Price: High to Low",
            SortKey::Newest => "Newest",
            SortKey::Oldest => "Oldest",
            SortKey::Size => "Size",
        }
    }
}

impl From<&str> for SortKey {
    fn from(value: &str) -> Self {
        SortKey::parse(value)
    }
}

impl std::fmt::Display for SortKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
