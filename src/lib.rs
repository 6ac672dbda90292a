//! EstateHub: an in-memory real-estate listing browser core.
//!
//! Two process-wide stores drive everything: [`session::SessionStore`] owns
//! the current identity (restore/login/register/logout/update), and
//! [`catalog::CatalogStore`] owns the seeded listing collection plus its
//! derived filtered view and favorite set. Presentation layers consume both
//! through read accessors and the state-changing calls; persistence goes
//! through the narrow [`storage::KeyValueStorage`] port.

pub mod catalog;
pub mod data;
pub mod error;
pub mod models;
pub mod routes;
pub mod session;
pub mod stats;
pub mod storage;

pub use catalog::CatalogStore;
pub use error::{StoreError, StoreResult};
pub use session::{ProfileUpdate, RegisterData, SessionStore};
pub use storage::KeyValueStorage;
