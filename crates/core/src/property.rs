//! Property listing types

use serde::{Deserialize, Serialize};

/// Stable listing identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PropertyId(pub u64);

impl std::fmt::Display for PropertyId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for PropertyId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

/// Kind of property
///
/// Serialized as the stored string. Unknown strings are kept verbatim in
/// [`PropertyType::Other`] so that type filtering stays an exact match on
/// whatever the listing source stored.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PropertyType {
    House,
    Apartment,
    Condo,
    Townhouse,
    Loft,
    Penthouse,
    Commercial,
    MultiFamily,
    Land,
    Other(String),
}

impl PropertyType {
    /// All known property types, in display order
    pub const KNOWN: [PropertyType; 9] = [
        PropertyType::House,
        PropertyType::Apartment,
        PropertyType::Condo,
        PropertyType::Townhouse,
        PropertyType::Loft,
        PropertyType::Penthouse,
        PropertyType::Commercial,
        PropertyType::MultiFamily,
        PropertyType::Land,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            PropertyType::House => "house",
            PropertyType::Apartment => "apartment",
            PropertyType::Condo => "condo",
            PropertyType::Townhouse => "townhouse",
            PropertyType::Loft => "loft",
            PropertyType::Penthouse => "penthouse",
            PropertyType::Commercial => "commercial",
            PropertyType::MultiFamily => "multi-family",
            PropertyType::Land => "land",
            PropertyType::Other(s) => s.as_str(),
        }
    }

    /// Get display name
    pub fn display_name(&self) -> &str {
        match self {
            PropertyType::House => "House",
            PropertyType::Apartment => "Apartment",
            PropertyType::Condo => "Condo",
            PropertyType::Townhouse => "Townhouse",
            PropertyType::Loft => "Loft",
            PropertyType::Penthouse => "Penthouse",
            PropertyType::Commercial => "Commercial",
            PropertyType::MultiFamily => "Multi-family",
            PropertyType::Land => "Land",
            PropertyType::Other(s) => s.as_str(),
        }
    }
}

impl From<&str> for PropertyType {
    fn from(s: &str) -> Self {
        match s {
            "house" => PropertyType::House,
            "apartment" => PropertyType::Apartment,
            "condo" => PropertyType::Condo,
            "townhouse" => PropertyType::Townhouse,
            "loft" => PropertyType::Loft,
            "penthouse" => PropertyType::Penthouse,
            "commercial" => PropertyType::Commercial,
            "multi-family" => PropertyType::MultiFamily,
            "land" => PropertyType::Land,
            other => PropertyType::Other(other.to_string()),
        }
    }
}

impl From<String> for PropertyType {
    fn from(s: String) -> Self {
        PropertyType::from(s.as_str())
    }
}

impl From<PropertyType> for String {
    fn from(t: PropertyType) -> Self {
        match t {
            PropertyType::Other(s) => s,
            known => known.as_str().to_string(),
        }
    }
}

impl std::fmt::Display for PropertyType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Listing agent contact, carried through untouched
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AgentContact {
    pub name: String,
    pub phone: String,
    #[serde(default)]
    pub avatar: String,
}

/// Map coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

/// A property listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyRecord {
    pub id: PropertyId,
    pub title: String,
    pub address: String,
    pub property_type: PropertyType,
    pub price: f64,
    pub bedrooms: u32,
    pub bathrooms: f64,
    pub sqft: u32,
    pub days_on_market: u32,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub agent: AgentContact,
    #[serde(default)]
    pub coordinates: Option<Coordinates>,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub is_saved: bool,
    #[serde(default)]
    pub amenities: Vec<String>,
}

impl PropertyRecord {
    /// Copy of this record with the saved flag set
    pub fn with_saved(&self, is_saved: bool) -> Self {
        Self {
            is_saved,
            ..self.clone()
        }
    }

    /// Case-insensitive amenity lookup
    pub fn has_amenity(&self, amenity: &str) -> bool {
        let wanted = amenity.to_lowercase();
        self.amenities.iter().any(|a| a.to_lowercase() == wanted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> PropertyRecord {
        PropertyRecord {
            id: PropertyId(7),
            title: "Cozy Studio Loft".to_string(),
            address: "789 Industrial Blvd, Brooklyn, NY 11201".to_string(),
            property_type: PropertyType::Loft,
            price: 280_000.0,
            bedrooms: 1,
            bathrooms: 1.0,
            sqft: 650,
            days_on_market: 22,
            description: String::new(),
            agent: AgentContact::default(),
            coordinates: None,
            images: Vec::new(),
            is_saved: false,
            amenities: vec!["Exposed Brick".to_string(), "High Ceilings".to_string()],
        }
    }

    #[test]
    fn test_property_type_round_trip_strings() {
        assert_eq!(PropertyType::from("multi-family"), PropertyType::MultiFamily);
        assert_eq!(PropertyType::from("House"), PropertyType::Other("House".to_string()));
        assert_eq!(String::from(PropertyType::Other("barn".into())), "barn");
        assert_eq!(PropertyType::MultiFamily.to_string(), "multi-family");
    }

    #[test]
    fn test_with_saved_leaves_original() {
        let original = record();
        let saved = original.with_saved(true);
        assert!(saved.is_saved);
        assert!(!original.is_saved);
        assert_eq!(saved.id, original.id);
    }

    #[test]
    fn test_has_amenity_ignores_case() {
        let r = record();
        assert!(r.has_amenity("exposed brick"));
        assert!(!r.has_amenity("Pool"));
    }

    #[test]
    fn test_deserialize_camel_case() {
        let json = r#"{
            "id": 3,
            "title": "Waterfront Condo",
            "address": "321 Harbor View, Jersey City, NJ 07302",
            "propertyType": "condo",
            "price": 920000,
            "bedrooms": 3,
            "bathrooms": 2,
            "sqft": 1800,
            "daysOnMarket": 5,
            "isSaved": true
        }"#;
        let r: PropertyRecord = serde_json::from_str(json).unwrap();
        assert_eq!(r.id, PropertyId(3));
        assert_eq!(r.property_type, PropertyType::Condo);
        assert_eq!(r.days_on_market, 5);
        assert!(r.is_saved);
        assert!(r.amenities.is_empty());
    }
}
