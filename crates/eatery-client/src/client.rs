//! Eatery API client trait
//!
//! This module defines the core `EateryApi` trait that all client
//! implementations must satisfy. The store's effect runner only ever talks
//! to this trait, so tests can swap the HTTP implementation for a canned one.

use crate::error::ApiError;
use crate::types::{
    Credentials, PageQuery, ReplyDraft, Restaurant, RestaurantDraft, RestaurantPatch, Review,
    ReviewDraft, ReviewPatch, SignupData, User, UserPatch,
};
use async_trait::async_trait;

/// Result alias used by every API call
pub type ApiResult<T> = Result<T, ApiError>;

/// Review-service API client
///
/// One method per server operation. Every outcome is normalized: success
/// returns the decoded payload, failure returns an [`ApiError`] carrying a
/// single message and status code.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync` so the effect runner can share one
/// client across its spawned tasks.
#[async_trait]
pub trait EateryApi: Send + Sync {
    // === Accounts ===

    /// Register a new account
    ///
    /// Returns the created user record. Registration does not authenticate;
    /// callers log in separately.
    async fn signup(&self, data: &SignupData) -> ApiResult<User>;

    /// Authenticate with email and password
    ///
    /// Returns the authenticated user. Implementations keep whatever session
    /// material the server hands back (bearer token) for later calls.
    async fn login(&self, credentials: &Credentials) -> ApiResult<User>;

    /// Fetch the authenticated user's own profile
    async fn user_profile(&self) -> ApiResult<User>;

    /// Fetch the full user directory (admin only)
    async fn all_users(&self) -> ApiResult<Vec<User>>;

    /// Update the authenticated user's own profile
    ///
    /// Returns the server's updated record.
    async fn edit_profile(&self, patch: &UserPatch) -> ApiResult<User>;

    /// Update another user's account (admin only)
    async fn edit_other_user(&self, user_id: &str, patch: &UserPatch) -> ApiResult<User>;

    /// Delete a user account (admin only)
    async fn delete_user(&self, user_id: &str) -> ApiResult<()>;

    // === Restaurants ===

    /// Fetch one page of the restaurant listing
    async fn restaurants(&self, page: &PageQuery) -> ApiResult<Vec<Restaurant>>;

    /// Fetch a single restaurant with its computed rating
    async fn restaurant_details(&self, restaurant_id: &str) -> ApiResult<Restaurant>;

    /// Create a restaurant owned by the authenticated user
    async fn create_restaurant(&self, draft: &RestaurantDraft) -> ApiResult<Restaurant>;

    /// Update a restaurant
    async fn update_restaurant(
        &self,
        restaurant_id: &str,
        patch: &RestaurantPatch,
    ) -> ApiResult<Restaurant>;

    /// Delete a restaurant
    async fn delete_restaurant(&self, restaurant_id: &str) -> ApiResult<()>;

    // === Reviews ===

    /// Fetch one page of the global review listing
    async fn reviews(&self, page: &PageQuery) -> ApiResult<Vec<Review>>;

    /// Post a review on a restaurant
    async fn create_review(&self, restaurant_id: &str, draft: &ReviewDraft) -> ApiResult<Review>;

    /// Update a review
    async fn update_review(
        &self,
        restaurant_id: &str,
        review_id: &str,
        patch: &ReviewPatch,
    ) -> ApiResult<Review>;

    /// Delete a review
    async fn delete_review(&self, review_id: &str) -> ApiResult<()>;

    /// Post the owner's reply on a review
    ///
    /// Returns the stored reply text.
    async fn reply_review(
        &self,
        restaurant_id: &str,
        review_id: &str,
        reply: &ReplyDraft,
    ) -> ApiResult<String>;
}
