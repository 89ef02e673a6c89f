//! Actions module
//!
//! All actions in the application use a tagged architecture: one closed enum
//! per domain store, wrapped in a root `Action` tagged by domain. Request
//! actions flow from the UI, success/failure actions flow back from the
//! effect runner; the reducers treat both uniformly.

pub mod auth;
pub mod catalog;

pub use auth::AuthAction;
pub use catalog::CatalogAction;

/// Root action enum - tagged by domain store
///
/// The root reducer routes each variant to its domain reducer; an action
/// addressed to one store is a no-op for the other by construction.
#[derive(Debug, Clone)]
pub enum Action {
    /// Authentication and user-directory actions
    Auth(AuthAction),
    /// Restaurant and review catalog actions
    Catalog(CatalogAction),
}
