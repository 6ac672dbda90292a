//! Navigation surface and role guards.
//!
//! Guards never error: a missing identity on a guarded route redirects to
//! login, a role mismatch redirects home.

use crate::models::{Role, User};

/// Named view routes of the application
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    Listings,
    ListingDetail(String),
    Login,
    Register,
    Favorites,
    Dashboard,
    Profile,
    AddListing,
    Admin,
}

/// Outcome of a guard check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Granted,
    RedirectToLogin,
    RedirectHome,
}

impl Route {
    /// Roles allowed on this route; `None` means unguarded
    fn allowed_roles(&self) -> Option<&'static [Role]> {
        match self {
            Route::Home
            | Route::Listings
            | Route::ListingDetail(_)
            | Route::Login
            | Route::Register => None,
            Route::Favorites | Route::Dashboard | Route::Profile => {
                Some(&[Role::Buyer, Role::Agent, Role::Admin])
            }
            Route::AddListing => Some(&[Role::Agent, Role::Admin]),
            Route::Admin => Some(&[Role::Admin]),
        }
    }

    /// Check whether the given identity may render this route
    pub fn resolve(&self, user: Option<&User>) -> Access {
        let Some(roles) = self.allowed_roles() else {
            return Access::Granted;
        };
        match user {
            None => Access::RedirectToLogin,
            Some(user) if roles.contains(&user.role) => Access::Granted,
            Some(_) => Access::RedirectHome,
        }
    }

    /// Path string for the route, as rendered in navigation links
    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::Listings => "/properties".to_string(),
            Route::ListingDetail(id) => format!("/property/{id}"),
            Route::Login => "/login".to_string(),
            Route::Register => "/register".to_string(),
            Route::Favorites => "/favorites".to_string(),
            Route::Dashboard => "/dashboard".to_string(),
            Route::Profile => "/profile".to_string(),
            Route::AddListing => "/add-property".to_string(),
            Route::Admin => "/admin".to_string(),
        }
    }
}
