//! State store for the eatery review client
//!
//! This crate keeps client-side screens in sync with the review service
//! without letting network concerns leak into state transitions. It follows
//! a strict unidirectional loop:
//!
//! ```text
//!   UI ──dispatch──▶ Store ──▶ middleware chain ──▶ reducers ──▶ AppState
//!                      ▲            │
//!                      │            ▼
//!                    pump ◀── spawned API tasks (success/failure actions)
//! ```
//!
//! Reducers are pure functions over a closed action vocabulary; all I/O
//! lives in [`middleware::ApiMiddleware`], which owns a tokio runtime and a
//! shared [`eatery_client::EateryApi`] client. Cross-store knowledge (a
//! profile edit re-stamping users embedded in the catalog) is an explicit
//! middleware wiring step, not reducer magic.
//!
//! # Example
//!
//! ```rust,no_run
//! use eatery_client::{ApiConfig, Credentials, HttpApiClient};
//! use eatery_store::{Action, AuthAction, Store};
//! use std::sync::Arc;
//! use std::time::Duration;
//!
//! # fn main() -> anyhow::Result<()> {
//! let api = Arc::new(HttpApiClient::new(&ApiConfig::load())?);
//! let mut store = Store::with_default_middleware(api);
//!
//! store.dispatch(Action::Auth(AuthAction::Login(Credentials {
//!     email: "ada@example.com".into(),
//!     password: "secret".into(),
//! })));
//!
//! // The embedding event loop applies asynchronous outcomes as they arrive.
//! store.pump_blocking(Duration::from_secs(10));
//! assert!(store.state().auth.user.is_some());
//! # Ok(())
//! # }
//! ```

pub mod actions;
pub mod dispatcher;
pub mod domain_models;
pub mod middleware;
pub mod reducers;
pub mod state;
pub mod store;

pub use actions::{Action, AuthAction, CatalogAction};
pub use dispatcher::Dispatcher;
pub use state::{AppState, AuthState, CatalogState};
pub use store::Store;

#[cfg(test)]
pub(crate) mod test_fixtures;
