//! State module
//!
//! One struct per domain store plus the root `AppState` that owns both.

pub mod app;
pub mod auth;
pub mod catalog;

pub use app::AppState;
pub use auth::AuthState;
pub use catalog::CatalogState;
