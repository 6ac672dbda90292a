//! Catalog store: owns the listing collection, the live filtered view, and
//! the favorite-id set exposed to the UI.
//!
//! The collection itself is immutable seed data; only the derived view and
//! the favorite set change. Search runs the predicate chain synchronously but
//! publishes the result behind a short simulated delay, raising a loading
//! flag for the duration (Idle -> Searching -> Idle, no failure state).

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, RwLock};
use std::time::Duration;

use tracing::{debug, info};

use crate::data;
use crate::models::{Agent, Listing, SearchFilters};
use crate::session::SessionStore;

pub struct CatalogStore {
    listings: Vec<Listing>,
    agents: Vec<Agent>,
    filtered: RwLock<Vec<Listing>>,
    filters: RwLock<SearchFilters>,
    favorites: RwLock<Vec<String>>,
    loading: AtomicBool,
    session: Arc<SessionStore>,
    latency: Duration,
}

impl CatalogStore {
    /// Create a catalog seeded with the demo listings; the filtered view
    /// starts as the full collection and favorites mirror the current
    /// identity.
    pub fn new(session: Arc<SessionStore>) -> Self {
        Self::with_latency(session, Duration::from_millis(300))
    }

    /// As [`CatalogStore::new`] but with custom simulated search latency.
    /// Tests pass `Duration::ZERO`.
    pub fn with_latency(session: Arc<SessionStore>, latency: Duration) -> Self {
        let listings = data::seed_listings();
        let store = Self {
            filtered: RwLock::new(listings.clone()),
            listings,
            agents: data::seed_agents(),
            filters: RwLock::new(SearchFilters::default()),
            favorites: RwLock::new(Vec::new()),
            loading: AtomicBool::new(false),
            session,
            latency,
        };
        store.sync_favorites();
        store
    }

    /// Replace the filter configuration wholesale and recompute the filtered
    /// view. The loading flag stays raised for the simulated delay before the
    /// new view is published.
    pub async fn set_filters(&self, filters: SearchFilters) {
        self.loading.store(true, Ordering::SeqCst);
        *self.filters.write().unwrap() = filters.clone();

        let matched: Vec<Listing> = self
            .listings
            .iter()
            .filter(|l| filters.matches(l))
            .cloned()
            .collect();
        debug!(
            "Search matched {} of {} listings",
            matched.len(),
            self.listings.len()
        );

        tokio::time::sleep(self.latency).await;

        *self.filtered.write().unwrap() = matched;
        self.loading.store(false, Ordering::SeqCst);
    }

    /// Full immutable collection
    pub fn listings(&self) -> &[Listing] {
        &self.listings
    }

    /// Current filtered view
    pub fn filtered_listings(&self) -> Vec<Listing> {
        self.filtered.read().unwrap().clone()
    }

    /// Active filter configuration
    pub fn filters(&self) -> SearchFilters {
        self.filters.read().unwrap().clone()
    }

    /// True while a search result is pending publication
    pub fn is_loading(&self) -> bool {
        self.loading.load(Ordering::SeqCst)
    }

    /// Detail lookup; `None` is the catalog's only not-found condition
    pub fn listing(&self, id: &str) -> Option<&Listing> {
        self.listings.iter().find(|l| l.id == id)
    }

    pub fn agent(&self, id: &str) -> Option<&Agent> {
        self.agents.iter().find(|a| a.id == id)
    }

    /// Resolve a listing's owning agent
    pub fn agent_for(&self, listing: &Listing) -> Option<&Agent> {
        self.agent(&listing.agent_id)
    }

    pub fn featured_listings(&self) -> Vec<&Listing> {
        self.listings.iter().filter(|l| l.is_featured).collect()
    }

    /// Listings owned by the given agent id (dashboard "my listings" view)
    pub fn listings_by_agent(&self, agent_id: &str) -> Vec<&Listing> {
        self.listings
            .iter()
            .filter(|l| l.agent_id == agent_id)
            .collect()
    }

    /// Flip a listing id in the current identity's favorite set and persist
    /// the identity immediately. Returns the new membership state, or `None`
    /// when no identity is current (nothing changes).
    pub fn toggle_favorite(&self, listing_id: &str) -> Option<bool> {
        let user = self.session.current_user()?;

        let mut favorites = user.favorites;
        let now_favorited = if let Some(pos) = favorites.iter().position(|id| id == listing_id) {
            favorites.remove(pos);
            false
        } else {
            favorites.push(listing_id.to_string());
            true
        };

        if !self.session.set_favorites(favorites.clone()) {
            return None;
        }
        info!(
            "{} listing {}",
            if now_favorited {
                "Favorited"
            } else {
                "Unfavorited"
            },
            listing_id
        );
        *self.favorites.write().unwrap() = favorites;
        Some(now_favorited)
    }

    /// Reset the exposed favorite set from the current identity. Called on
    /// every identity transition (login, logout, switch); anonymous means
    /// empty.
    pub fn sync_favorites(&self) {
        let favorites = self
            .session
            .current_user()
            .map(|u| u.favorites)
            .unwrap_or_default();
        *self.favorites.write().unwrap() = favorites;
    }

    /// Favorite ids exposed to the UI
    pub fn favorites(&self) -> Vec<String> {
        self.favorites.read().unwrap().clone()
    }

    pub fn is_favorite(&self, listing_id: &str) -> bool {
        self.favorites.read().unwrap().iter().any(|id| id == listing_id)
    }

    /// Listings the current identity has favorited
    pub fn favorite_listings(&self) -> Vec<&Listing> {
        let favorites = self.favorites.read().unwrap();
        self.listings
            .iter()
            .filter(|l| favorites.contains(&l.id))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ListingType, ListingTypeFilter};
    use crate::storage::{KeyValueStorage, MemoryStorage};

    fn stores() -> (Arc<SessionStore>, CatalogStore) {
        let session = Arc::new(SessionStore::with_latency(
            Arc::new(MemoryStorage::new()),
            Duration::ZERO,
        ));
        let catalog = CatalogStore::with_latency(session.clone(), Duration::ZERO);
        (session, catalog)
    }

    #[tokio::test]
    async fn rent_filter_returns_exactly_the_rental() {
        let (_, catalog) = stores();
        catalog
            .set_filters(SearchFilters {
                listing_type: ListingTypeFilter::Rent,
                ..Default::default()
            })
            .await;

        let filtered = catalog.filtered_listings();
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].price, 4_500);
        assert_eq!(filtered[0].listing_type, ListingType::Rent);
    }

    #[tokio::test]
    async fn price_band_returns_exactly_the_two_mid_listings() {
        let (_, catalog) = stores();
        catalog
            .set_filters(SearchFilters {
                price_min: 1_000_000,
                price_max: 3_000_000,
                ..Default::default()
            })
            .await;

        let mut prices: Vec<i64> = catalog.filtered_listings().iter().map(|l| l.price).collect();
        prices.sort();
        assert_eq!(prices, vec![1_250_000, 2_850_000]);
    }

    #[tokio::test]
    async fn filtered_view_is_subset_satisfying_all_predicates() {
        let (_, catalog) = stores();
        let filters = SearchFilters {
            location: "punjab".to_string(),
            bedrooms: 2,
            ..Default::default()
        };
        catalog.set_filters(filters.clone()).await;

        for listing in catalog.filtered_listings() {
            assert!(catalog.listing(&listing.id).is_some());
            assert!(filters.matches(&listing));
        }
    }

    #[tokio::test]
    async fn reapplying_filters_is_idempotent() {
        let (_, catalog) = stores();
        let filters = SearchFilters {
            bedrooms: 4,
            ..Default::default()
        };
        catalog.set_filters(filters.clone()).await;
        let first: Vec<String> = catalog
            .filtered_listings()
            .iter()
            .map(|l| l.id.clone())
            .collect();

        catalog.set_filters(filters).await;
        let second: Vec<String> = catalog
            .filtered_listings()
            .iter()
            .map(|l| l.id.clone())
            .collect();
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn loading_flag_settles_after_search() {
        let (_, catalog) = stores();
        assert!(!catalog.is_loading());
        catalog.set_filters(SearchFilters::default()).await;
        assert!(!catalog.is_loading());
    }

    #[tokio::test]
    async fn toggle_twice_restores_membership() {
        let (session, catalog) = stores();
        assert!(session.login("prince@test.com", "password").await);
        catalog.sync_favorites();
        let before = catalog.favorites();

        assert_eq!(catalog.toggle_favorite("2"), Some(true));
        assert!(catalog.is_favorite("2"));
        assert_eq!(catalog.toggle_favorite("2"), Some(false));
        assert_eq!(catalog.favorites(), before);
    }

    #[tokio::test]
    async fn toggle_is_noop_when_anonymous() {
        let (_, catalog) = stores();
        assert_eq!(catalog.toggle_favorite("1"), None);
        assert!(catalog.favorites().is_empty());
    }

    #[tokio::test]
    async fn toggle_persists_through_the_session() {
        let storage = Arc::new(MemoryStorage::new());
        let session = Arc::new(SessionStore::with_latency(storage.clone(), Duration::ZERO));
        let catalog = CatalogStore::with_latency(session.clone(), Duration::ZERO);

        assert!(session.login("prince@test.com", "password").await);
        catalog.sync_favorites();
        catalog.toggle_favorite("4");

        let blob = storage.get(crate::session::CURRENT_USER_KEY).unwrap().unwrap();
        let persisted: crate::models::User = serde_json::from_str(&blob).unwrap();
        assert!(persisted.favorites.contains(&"4".to_string()));
    }

    #[tokio::test]
    async fn favorites_follow_identity_transitions() {
        let (session, catalog) = stores();

        assert!(session.login("prince@test.com", "password").await);
        catalog.sync_favorites();
        assert_eq!(catalog.favorites(), vec!["1".to_string(), "3".to_string()]);
        assert_eq!(catalog.favorite_listings().len(), 2);

        session.logout();
        catalog.sync_favorites();
        assert!(catalog.favorites().is_empty());

        assert!(session.login("rahul@test.com", "password").await);
        catalog.sync_favorites();
        assert!(catalog.favorites().is_empty());
    }

    #[test]
    fn unknown_listing_id_is_not_found() {
        let (_, catalog) = stores();
        assert!(catalog.listing("999").is_none());
    }

    #[test]
    fn agents_resolve_for_every_listing() {
        let (_, catalog) = stores();
        for listing in catalog.listings() {
            assert!(catalog.agent_for(listing).is_some());
        }
    }

    #[test]
    fn dashboard_view_groups_listings_by_owning_agent() {
        let (_, catalog) = stores();

        let mut owned: Vec<&str> = catalog
            .listings_by_agent("1")
            .iter()
            .map(|l| l.id.as_str())
            .collect();
        owned.sort();
        assert_eq!(owned, vec!["1", "4"]);
        assert!(catalog
            .listings_by_agent("1")
            .iter()
            .all(|l| l.agent_id == "1"));

        assert!(catalog.listings_by_agent("999").is_empty());
    }

    #[test]
    fn featured_listings_are_flagged() {
        let (_, catalog) = stores();
        let featured = catalog.featured_listings();
        assert_eq!(featured.len(), 2);
        assert!(featured.iter().all(|l| l.is_featured));
    }
}
