//! Reqwest-based eatery API client
//!
//! Direct implementation of the `EateryApi` trait against the review
//! service's REST endpoints. Every call goes through the same pipeline:
//! connectivity gate, bearer auth, request, outcome normalization.

use crate::client::{ApiResult, EateryApi};
use crate::config::ApiConfig;
use crate::connectivity::{AlwaysOnline, Connectivity};
use crate::error::ApiError;
use crate::types::{
    Credentials, PageQuery, ReplyDraft, Restaurant, RestaurantDraft, RestaurantPatch, Review,
    ReviewDraft, ReviewPatch, SignupData, User, UserPatch,
};
use anyhow::Context;
use async_trait::async_trait;
use log::debug;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::sync::{Arc, RwLock};
use std::time::Duration;

/// Direct HTTP client for the review service
///
/// Holds the session token handed back by `login`; subsequent requests carry
/// it as a bearer header. The token lives only in memory.
pub struct HttpApiClient {
    http: reqwest::Client,
    base_url: String,
    token: RwLock<Option<String>>,
    connectivity: Arc<dyn Connectivity>,
}

/// Wire shape of a successful login
#[derive(Deserialize)]
struct LoginResponse {
    user: User,
    token: String,
}

/// Wire shape of a stored reply
#[derive(Deserialize)]
struct ReplyResponse {
    reply: String,
}

impl HttpApiClient {
    /// Create a client for the given configuration
    pub fn new(config: &ApiConfig) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .context("building HTTP client")?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            token: RwLock::new(None),
            connectivity: Arc::new(AlwaysOnline),
        })
    }

    /// Replace the reachability probe
    pub fn with_connectivity(mut self, connectivity: Arc<dyn Connectivity>) -> Self {
        self.connectivity = connectivity;
        self
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn bearer(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        let token = self.token.read().expect("token lock poisoned").clone();
        match token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    fn store_token(&self, token: String) {
        *self.token.write().expect("token lock poisoned") = Some(token);
    }

    /// Run a request through the shared pipeline and decode the body.
    async fn send<T: DeserializeOwned>(&self, request: reqwest::RequestBuilder) -> ApiResult<T> {
        let response = self.execute(request).await?;
        response.json::<T>().await.map_err(ApiError::from_transport)
    }

    /// Run a request whose response body is irrelevant.
    async fn send_no_content(&self, request: reqwest::RequestBuilder) -> ApiResult<()> {
        self.execute(request).await?;
        Ok(())
    }

    async fn execute(&self, request: reqwest::RequestBuilder) -> ApiResult<reqwest::Response> {
        if !self.connectivity.is_connected() {
            debug!("Skipping request, no connectivity");
            return Err(ApiError::Offline);
        }

        let response = self
            .bearer(request)
            .send()
            .await
            .map_err(ApiError::from_transport)?;

        let status = response.status();
        if status.is_success() {
            Ok(response)
        } else {
            let body = response.text().await.unwrap_or_default();
            Err(ApiError::from_response(status.as_u16(), &body))
        }
    }

    fn page_params(page: &PageQuery) -> [(&'static str, u32); 2] {
        [("pageNo", page.page_no()), ("pageSize", page.page_size())]
    }
}

#[async_trait]
impl EateryApi for HttpApiClient {
    async fn signup(&self, data: &SignupData) -> ApiResult<User> {
        debug!("Signing up {}", data.email);
        self.send(self.http.post(self.url("/auth/signup")).json(data))
            .await
    }

    async fn login(&self, credentials: &Credentials) -> ApiResult<User> {
        debug!("Logging in {}", credentials.email);
        let session: LoginResponse = self
            .send(self.http.post(self.url("/auth/login")).json(credentials))
            .await?;
        self.store_token(session.token);
        Ok(session.user)
    }

    async fn user_profile(&self) -> ApiResult<User> {
        self.send(self.http.get(self.url("/users/me"))).await
    }

    async fn all_users(&self) -> ApiResult<Vec<User>> {
        self.send(self.http.get(self.url("/users"))).await
    }

    async fn edit_profile(&self, patch: &UserPatch) -> ApiResult<User> {
        self.send(self.http.put(self.url("/users/me")).json(patch))
            .await
    }

    async fn edit_other_user(&self, user_id: &str, patch: &UserPatch) -> ApiResult<User> {
        self.send(
            self.http
                .put(self.url(&format!("/users/{user_id}")))
                .json(patch),
        )
        .await
    }

    async fn delete_user(&self, user_id: &str) -> ApiResult<()> {
        self.send_no_content(self.http.delete(self.url(&format!("/users/{user_id}"))))
            .await
    }

    async fn restaurants(&self, page: &PageQuery) -> ApiResult<Vec<Restaurant>> {
        debug!(
            "Fetching restaurants page {} (size {})",
            page.page_no(),
            page.page_size()
        );
        self.send(
            self.http
                .get(self.url("/restaurants"))
                .query(&Self::page_params(page)),
        )
        .await
    }

    async fn restaurant_details(&self, restaurant_id: &str) -> ApiResult<Restaurant> {
        self.send(self.http.get(self.url(&format!("/restaurants/{restaurant_id}"))))
            .await
    }

    async fn create_restaurant(&self, draft: &RestaurantDraft) -> ApiResult<Restaurant> {
        self.send(self.http.post(self.url("/restaurants")).json(draft))
            .await
    }

    async fn update_restaurant(
        &self,
        restaurant_id: &str,
        patch: &RestaurantPatch,
    ) -> ApiResult<Restaurant> {
        self.send(
            self.http
                .put(self.url(&format!("/restaurants/{restaurant_id}")))
                .json(patch),
        )
        .await
    }

    async fn delete_restaurant(&self, restaurant_id: &str) -> ApiResult<()> {
        self.send_no_content(
            self.http
                .delete(self.url(&format!("/restaurants/{restaurant_id}"))),
        )
        .await
    }

    async fn reviews(&self, page: &PageQuery) -> ApiResult<Vec<Review>> {
        debug!(
            "Fetching reviews page {} (size {})",
            page.page_no(),
            page.page_size()
        );
        self.send(
            self.http
                .get(self.url("/reviews"))
                .query(&Self::page_params(page)),
        )
        .await
    }

    async fn create_review(&self, restaurant_id: &str, draft: &ReviewDraft) -> ApiResult<Review> {
        self.send(
            self.http
                .post(self.url(&format!("/restaurants/{restaurant_id}/reviews")))
                .json(draft),
        )
        .await
    }

    async fn update_review(
        &self,
        restaurant_id: &str,
        review_id: &str,
        patch: &ReviewPatch,
    ) -> ApiResult<Review> {
        self.send(
            self.http
                .put(self.url(&format!(
                    "/restaurants/{restaurant_id}/reviews/{review_id}"
                )))
                .json(patch),
        )
        .await
    }

    async fn delete_review(&self, review_id: &str) -> ApiResult<()> {
        self.send_no_content(self.http.delete(self.url(&format!("/reviews/{review_id}"))))
            .await
    }

    async fn reply_review(
        &self,
        restaurant_id: &str,
        review_id: &str,
        reply: &ReplyDraft,
    ) -> ApiResult<String> {
        let stored: ReplyResponse = self
            .send(
                self.http
                    .put(self.url(&format!(
                        "/restaurants/{restaurant_id}/reviews/{review_id}/reply"
                    )))
                    .json(reply),
            )
            .await?;
        Ok(stored.reply)
    }
}
