use std::sync::Arc;

use estatehub::models::{ListingTypeFilter, SearchFilters};
use estatehub::routes::{Access, Route};
use estatehub::stats::DashboardStats;
use estatehub::storage::JsonFileStorage;
use estatehub::{CatalogStore, SessionStore};
use tracing::{info, Level};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .init();

    info!("🏠 EstateHub - Listing Browser Demo");
    info!("====================================");
    info!("");

    // State lives in JSON files next to the binary, standing in for the
    // browser's local storage
    let storage = Arc::new(JsonFileStorage::new(".estatehub")?);
    let session = Arc::new(SessionStore::new(storage));
    session.restore();
    let catalog = CatalogStore::new(session.clone());

    match session.current_user() {
        Some(user) => info!("Welcome back, {} ({:?})", user.name, user.role),
        None => {
            info!("No saved session, signing in with the demo buyer account");
            if !session.login("prince@test.com", "password").await {
                anyhow::bail!("demo login rejected");
            }
            catalog.sync_favorites();
        }
    }

    // Browse the rentals
    info!("");
    info!("Searching for rentals...");
    catalog
        .set_filters(SearchFilters {
            listing_type: ListingTypeFilter::Rent,
            ..Default::default()
        })
        .await;

    for (i, listing) in catalog.filtered_listings().iter().enumerate() {
        println!(
            "{}. {} (${}/mo)",
            i + 1,
            listing.title,
            listing.price
        );
        println!(
            "   {} bed, {} bath, {} sqft in {}",
            listing.bedrooms, listing.bathrooms, listing.square_footage, listing.location.city
        );
        if let Some(agent) = catalog.agent_for(listing) {
            println!("   Listed by {} ({})", agent.name, agent.company);
        }
        println!("   Features: {}", listing.features.join(", "));
        println!();
    }

    // Favorite the first hit
    if let Some(listing) = catalog.filtered_listings().first() {
        match catalog.toggle_favorite(&listing.id) {
            Some(true) => info!("⭐ Saved \"{}\" to favorites", listing.title),
            Some(false) => info!("Removed \"{}\" from favorites", listing.title),
            None => info!("Sign in to save favorites"),
        }
    }
    info!(
        "Favorites now: {}",
        catalog
            .favorite_listings()
            .iter()
            .map(|l| l.title.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    );

    // Role guard demo: the buyer account cannot reach the admin panel
    let user = session.current_user();
    if Route::Admin.resolve(user.as_ref()) != Access::Granted {
        info!("Admin panel is off limits for this account, redirecting home");
    }

    let stats = DashboardStats::collect(&catalog, &session);
    info!("");
    info!(
        "📊 Platform: {} users, {} listings ({} active, {} featured)",
        stats.total_users, stats.total_listings, stats.active_listings, stats.featured_listings
    );

    Ok(())
}
