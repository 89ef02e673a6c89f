//! HTTP client for the eatery restaurant-review API
//!
//! This crate provides a trait-based client for the review service. The
//! state store's effect runner depends only on the trait, so the HTTP
//! implementation can be swapped for a canned one in tests.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────┐
//! │                EateryApi trait                   │
//! │  - login() / signup() / user management          │
//! │  - restaurants() / reviews() paginated listings  │
//! │  - create / update / delete / reply operations   │
//! └─────────────────────────────────────────────────┘
//!                        │
//!                        ▼
//!            ┌─────────────────────┐
//!            │    HttpApiClient    │
//!            │  (reqwest, bearer   │
//!            │   session, outcome  │
//!            │   normalization)    │
//!            └─────────────────────┘
//! ```
//!
//! Every failure is collapsed into an [`ApiError`] carrying one message and
//! a status code; connectivity is checked up front and reported locally as
//! a 503 without touching the network.

pub mod client;
pub mod config;
pub mod connectivity;
pub mod error;
pub mod http_client;
pub mod types;

pub use client::{ApiResult, EateryApi};
pub use config::ApiConfig;
pub use connectivity::{AlwaysOnline, Connectivity};
pub use error::{ApiError, NO_CONNECTION_MESSAGE};
pub use http_client::HttpApiClient;
pub use types::{
    Credentials, PageQuery, ReplyDraft, Restaurant, RestaurantDraft, RestaurantPatch, Review,
    ReviewDraft, ReviewPatch, Role, SignupData, User, UserPatch, DEFAULT_PAGE_SIZE, FIRST_PAGE,
};
