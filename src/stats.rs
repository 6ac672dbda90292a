//! Read-only dashboard statistics.
//!
//! Listing counts derive from the catalog and the user count from the
//! session's account list; the remaining platform-wide figures (users beyond
//! this process, revenue, growth) are static demo numbers.

use serde::Serialize;

use crate::catalog::CatalogStore;
use crate::models::ListingStatus;
use crate::session::SessionStore;

// Demo platform figures shown on the admin dashboard
const PLATFORM_USERS: u64 = 1547;
const PENDING_REVIEWS: u32 = 12;
const TOTAL_REVENUE: u64 = 145_000;
const MONTHLY_GROWTH: f32 = 12.5;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_users: u64,
    pub total_listings: usize,
    pub active_listings: usize,
    pub featured_listings: usize,
    pub pending_reviews: u32,
    pub total_revenue: u64,
    pub monthly_growth: f32,
}

impl DashboardStats {
    pub fn collect(catalog: &CatalogStore, session: &SessionStore) -> Self {
        let listings = catalog.listings();
        Self {
            total_users: PLATFORM_USERS + session.user_count() as u64,
            total_listings: listings.len(),
            active_listings: listings
                .iter()
                .filter(|l| l.status == ListingStatus::Active)
                .count(),
            featured_listings: listings.iter().filter(|l| l.is_featured).count(),
            pending_reviews: PENDING_REVIEWS,
            total_revenue: TOTAL_REVENUE,
            monthly_growth: MONTHLY_GROWTH,
        }
    }
}
