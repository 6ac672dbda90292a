//! Immutable seed data: the demo catalog, its agents, and the demo accounts.
//!
//! Loaded once at startup and never mutated afterwards (registration appends
//! to the in-memory user list but never writes back here).

use crate::models::{
    Agent, Coordinates, Listing, ListingStatus, ListingType, Location, PropertyType, Role, User,
};

/// Agents referenced by the seed catalog
pub fn seed_agents() -> Vec<Agent> {
    vec![
        Agent {
            id: "1".to_string(),
            name: "Prince Thakur".to_string(),
            email: "prince@estatehub.com".to_string(),
            phone: "(978) 123-4567".to_string(),
            avatar: "https://images.pexels.com/photos/774909/pexels-photo-774909.jpeg?auto=compress&cs=tinysrgb&w=150&h=150&fit=crop".to_string(),
            company: "Premier Realty Group".to_string(),
            rating: 4.9,
            review_count: 127,
        },
        Agent {
            id: "2".to_string(),
            name: "Rahul Gill".to_string(),
            email: "rahul@estatehub.com".to_string(),
            phone: "(798) 234-5678".to_string(),
            avatar: "https://images.pexels.com/photos/2379004/pexels-photo-2379004.jpeg?auto=compress&cs=tinysrgb&w=150&h=150&fit=crop".to_string(),
            company: "Urban Properties".to_string(),
            rating: 4.8,
            review_count: 89,
        },
        Agent {
            id: "3".to_string(),
            name: "Sumit Sharma".to_string(),
            email: "sumit@estatehub.com".to_string(),
            phone: "(947) 345-6789".to_string(),
            avatar: "https://images.pexels.com/photos/1239291/pexels-photo-1239291.jpeg?auto=compress&cs=tinysrgb&w=150&h=150&fit=crop".to_string(),
            company: "Coastal Real Estate".to_string(),
            rating: 4.7,
            review_count: 156,
        },
    ]
}

/// The full demo catalog; every `agent_id` resolves within [`seed_agents`]
pub fn seed_listings() -> Vec<Listing> {
    vec![
        Listing {
            id: "1".to_string(),
            title: "Modern Luxury Penthouse".to_string(),
            description: "Stunning penthouse with panoramic city views, featuring floor-to-ceiling windows, premium finishes, and a private rooftop terrace.".to_string(),
            price: 2_850_000,
            location: Location {
                address: "#123 Sec-7".to_string(),
                city: "Chandigarh".to_string(),
                state: "Chandigarh".to_string(),
                zip_code: "160105".to_string(),
                coordinates: Coordinates { lat: 37.7749, lng: -122.4194 },
            },
            property_type: PropertyType::Apartment,
            listing_type: ListingType::Sale,
            bedrooms: 3,
            bathrooms: 3,
            square_footage: 2400,
            year_built: 2020,
            features: vec![
                "City View".to_string(),
                "Rooftop Terrace".to_string(),
                "Parking".to_string(),
                "Gym".to_string(),
                "Concierge".to_string(),
            ],
            images: vec![
                "https://images.pexels.com/photos/1643383/pexels-photo-1643383.jpeg?auto=compress&cs=tinysrgb&w=800".to_string(),
                "https://images.pexels.com/photos/2029670/pexels-photo-2029670.jpeg?auto=compress&cs=tinysrgb&w=800".to_string(),
                "https://images.pexels.com/photos/1571463/pexels-photo-1571463.jpeg?auto=compress&cs=tinysrgb&w=800".to_string(),
            ],
            agent_id: "1".to_string(),
            status: ListingStatus::Active,
            date_posted: "2024-01-15".to_string(),
            is_featured: true,
        },
        Listing {
            id: "2".to_string(),
            title: "Charming Victorian Home".to_string(),
            description: "Beautiful restored Victorian home with original hardwood floors, modern kitchen, and private garden in a quiet neighborhood.".to_string(),
            price: 1_250_000,
            location: Location {
                address: "#456 sec-54".to_string(),
                city: "Mohali".to_string(),
                state: "Chandigarh".to_string(),
                zip_code: "160201".to_string(),
                coordinates: Coordinates { lat: 45.5152, lng: -122.6784 },
            },
            property_type: PropertyType::House,
            listing_type: ListingType::Sale,
            bedrooms: 4,
            bathrooms: 2,
            square_footage: 2800,
            year_built: 1895,
            features: vec![
                "Hardwood Floors".to_string(),
                "Garden".to_string(),
                "Fireplace".to_string(),
                "Updated Kitchen".to_string(),
            ],
            images: vec![
                "https://images.pexels.com/photos/1396122/pexels-photo-1396122.jpeg?auto=compress&cs=tinysrgb&w=800".to_string(),
                "https://images.pexels.com/photos/1571458/pexels-photo-1571458.jpeg?auto=compress&cs=tinysrgb&w=800".to_string(),
                "https://images.pexels.com/photos/2724749/pexels-photo-2724749.jpeg?auto=compress&cs=tinysrgb&w=800".to_string(),
            ],
            agent_id: "2".to_string(),
            status: ListingStatus::Active,
            date_posted: "2024-01-12".to_string(),
            is_featured: false,
        },
        Listing {
            id: "3".to_string(),
            title: "Contemporary Downtown Condo".to_string(),
            description: "Sleek contemporary condo in the heart of downtown with premium amenities and walking distance to everything.".to_string(),
            price: 4_500,
            location: Location {
                address: "789 Urban Plaza".to_string(),
                city: "Ludhiana".to_string(),
                state: "Punjab".to_string(),
                zip_code: "98101".to_string(),
                coordinates: Coordinates { lat: 47.6062, lng: -122.3321 },
            },
            property_type: PropertyType::Condo,
            listing_type: ListingType::Rent,
            bedrooms: 2,
            bathrooms: 2,
            square_footage: 1400,
            year_built: 2018,
            features: vec![
                "Pool".to_string(),
                "Gym".to_string(),
                "Parking".to_string(),
                "Balcony".to_string(),
                "In-unit Laundry".to_string(),
            ],
            images: vec![
                "https://images.pexels.com/photos/2029670/pexels-photo-2029670.jpeg?auto=compress&cs=tinysrgb&w=800".to_string(),
                "https://images.pexels.com/photos/1643383/pexels-photo-1643383.jpeg?auto=compress&cs=tinysrgb&w=800".to_string(),
                "https://images.pexels.com/photos/271618/pexels-photo-271618.jpeg?auto=compress&cs=tinysrgb&w=800".to_string(),
            ],
            agent_id: "3".to_string(),
            status: ListingStatus::Active,
            date_posted: "2024-01-10".to_string(),
            is_featured: true,
        },
        Listing {
            id: "4".to_string(),
            title: "Spacious Family Home".to_string(),
            description: "Perfect family home with large backyard, updated kitchen, and great school district. Move-in ready!".to_string(),
            price: 875_000,
            location: Location {
                address: "321 Maple Avenue".to_string(),
                city: "Amritsar".to_string(),
                state: "Punjab".to_string(),
                zip_code: "78701".to_string(),
                coordinates: Coordinates { lat: 30.2672, lng: -97.7431 },
            },
            property_type: PropertyType::House,
            listing_type: ListingType::Sale,
            bedrooms: 4,
            bathrooms: 3,
            square_footage: 3200,
            year_built: 2010,
            features: vec![
                "Large Backyard".to_string(),
                "Updated Kitchen".to_string(),
                "Great Schools".to_string(),
                "Garage".to_string(),
            ],
            images: vec![
                "https://images.pexels.com/photos/106399/pexels-photo-106399.jpeg?auto=compress&cs=tinysrgb&w=800".to_string(),
                "https://images.pexels.com/photos/1571463/pexels-photo-1571463.jpeg?auto=compress&cs=tinysrgb&w=800".to_string(),
                "https://images.pexels.com/photos/2724749/pexels-photo-2724749.jpeg?auto=compress&cs=tinysrgb&w=800".to_string(),
            ],
            agent_id: "1".to_string(),
            status: ListingStatus::Active,
            date_posted: "2024-01-08".to_string(),
            is_featured: false,
        },
    ]
}

/// Demo accounts; all share the sentinel password checked by the session store
pub fn seed_users() -> Vec<User> {
    vec![
        User {
            id: "1".to_string(),
            name: "Prince Thakur".to_string(),
            email: "prince@test.com".to_string(),
            avatar: "https://images.pexels.com/photos/2379004/pexels-photo-2379004.jpeg?auto=compress&cs=tinysrgb&w=150&h=150&fit=crop".to_string(),
            role: Role::Buyer,
            favorites: vec!["1".to_string(), "3".to_string()],
            phone: Some("(987) 293-7567".to_string()),
            company: None,
            join_date: Some("2024-01-01".to_string()),
            verified: true,
            license_number: None,
        },
        User {
            id: "2".to_string(),
            name: "Rahul Gill".to_string(),
            email: "rahul@test.com".to_string(),
            avatar: "https://images.pexels.com/photos/774909/pexels-photo-774909.jpeg?auto=compress&cs=tinysrgb&w=150&h=150&fit=crop".to_string(),
            role: Role::Agent,
            favorites: Vec::new(),
            phone: Some("(789) 234-5678".to_string()),
            company: Some("Premier Realty".to_string()),
            join_date: Some("2023-06-15".to_string()),
            verified: true,
            license_number: Some("RE123456".to_string()),
        },
        User {
            id: "3".to_string(),
            name: "Admin".to_string(),
            email: "admin@test.com".to_string(),
            avatar: "https://images.pexels.com/photos/1239291/pexels-photo-1239291.jpeg?auto=compress&cs=tinysrgb&w=150&h=150&fit=crop".to_string(),
            role: Role::Admin,
            favorites: Vec::new(),
            phone: Some("(798) 345-6789".to_string()),
            company: None,
            join_date: Some("2023-01-01".to_string()),
            verified: true,
            license_number: None,
        },
    ]
}
