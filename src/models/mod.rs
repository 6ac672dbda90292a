use serde::{Deserialize, Serialize};

/// Kind of property being listed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PropertyType {
    House,
    Apartment,
    Condo,
    Townhouse,
    Commercial,
}

/// Whether a listing is offered for sale or for rent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListingType {
    Sale,
    Rent,
}

/// Current market status of a listing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListingStatus {
    Active,
    Pending,
    Sold,
    Rented,
}

/// Role of a signed-in user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Buyer,
    Agent,
    Admin,
}

/// Geographic coordinates of a property
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

/// Location information for a listing
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub coordinates: Coordinates,
}

/// Core listing data model
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Listing {
    pub id: String,
    pub title: String,
    pub description: String,
    pub price: i64,
    pub location: Location,
    pub property_type: PropertyType,
    pub listing_type: ListingType,
    pub bedrooms: u32,
    pub bathrooms: u32,
    pub square_footage: u32,
    pub year_built: u32,
    pub features: Vec<String>,
    pub images: Vec<String>,
    /// Must resolve to a seeded agent
    pub agent_id: String,
    pub status: ListingStatus,
    /// YYYY-MM-DD
    pub date_posted: String,
    pub is_featured: bool,
}

/// Professional associated with a listing, distinct from a signed-in user
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Agent {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub avatar: String,
    pub company: String,
    pub rating: f32,
    pub review_count: u32,
}

/// Session-scoped identity; serialized as-is into the persistence layer
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub avatar: String,
    pub role: Role,
    pub favorites: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub join_date: Option<String>,
    #[serde(default)]
    pub verified: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub license_number: Option<String>,
}

/// Listing-type constraint in a search; `All` disables the check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListingTypeFilter {
    #[default]
    All,
    Sale,
    Rent,
}

/// Full set of search constraints, replaced wholesale on each search
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchFilters {
    /// Case-insensitive substring match against the listing city; empty = any
    pub location: String,
    pub price_min: i64,
    pub price_max: i64,
    pub property_type: Option<PropertyType>,
    pub listing_type: ListingTypeFilter,
    /// Minimum bedroom count; 0 = any
    pub bedrooms: u32,
    /// Minimum bathroom count; 0 = any
    pub bathrooms: u32,
    /// Declared in the search form but not applied by the predicate chain
    /// (pending product clarification); kept for shape compatibility
    pub features: Vec<String>,
}

impl Default for SearchFilters {
    fn default() -> Self {
        Self {
            location: String::new(),
            price_min: 0,
            price_max: 10_000_000,
            property_type: None,
            listing_type: ListingTypeFilter::All,
            bedrooms: 0,
            bathrooms: 0,
            features: Vec::new(),
        }
    }
}

impl SearchFilters {
    /// Test a listing against every active predicate conjunctively.
    pub fn matches(&self, listing: &Listing) -> bool {
        if !self.location.is_empty()
            && !listing
                .location
                .city
                .to_lowercase()
                .contains(&self.location.to_lowercase())
        {
            return false;
        }
        if listing.price < self.price_min || listing.price > self.price_max {
            return false;
        }
        if let Some(property_type) = self.property_type {
            if listing.property_type != property_type {
                return false;
            }
        }
        match self.listing_type {
            ListingTypeFilter::All => {}
            ListingTypeFilter::Sale => {
                if listing.listing_type != ListingType::Sale {
                    return false;
                }
            }
            ListingTypeFilter::Rent => {
                if listing.listing_type != ListingType::Rent {
                    return false;
                }
            }
        }
        if self.bedrooms > 0 && listing.bedrooms < self.bedrooms {
            return false;
        }
        if self.bathrooms > 0 && listing.bathrooms < self.bathrooms {
            return false;
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data;

    fn listings() -> Vec<Listing> {
        data::seed_listings()
    }

    #[test]
    fn default_filters_match_everything() {
        let filters = SearchFilters::default();
        assert!(listings().iter().all(|l| filters.matches(l)));
    }

    #[test]
    fn location_match_is_case_insensitive_substring() {
        let filters = SearchFilters {
            location: "chandi".to_string(),
            ..Default::default()
        };
        let matched: Vec<_> = listings()
            .into_iter()
            .filter(|l| filters.matches(l))
            .collect();
        assert!(!matched.is_empty());
        assert!(matched
            .iter()
            .all(|l| l.location.city.to_lowercase().contains("chandi")));
    }

    #[test]
    fn price_bounds_are_inclusive() {
        let filters = SearchFilters {
            price_min: 875_000,
            price_max: 875_000,
            ..Default::default()
        };
        let matched: Vec<_> = listings()
            .into_iter()
            .filter(|l| filters.matches(l))
            .collect();
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].price, 875_000);
    }

    #[test]
    fn feature_tags_are_not_applied() {
        let filters = SearchFilters {
            features: vec!["No Such Feature".to_string()],
            ..Default::default()
        };
        assert!(listings().iter().all(|l| filters.matches(l)));
    }

    #[test]
    fn user_blob_uses_camel_case_keys() {
        let user = data::seed_users().remove(1);
        let blob = serde_json::to_string(&user).unwrap();
        assert!(blob.contains("\"licenseNumber\""));
        assert!(blob.contains("\"joinDate\""));
        assert!(blob.contains("\"role\":\"agent\""));
    }
}
