//! API Middleware
//!
//! Central middleware for all review-service interactions. Request actions
//! pass through to the reducers (which set the busy flags) while a task is
//! spawned on the internal runtime; when the call finishes, the task
//! dispatches the matching success or failure action back into the chain.
//!
//! Failures arrive here as normalized `ApiError`s and leave as plain
//! message strings; the reducers never see status codes.

use crate::actions::{Action, AuthAction, CatalogAction};
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::AppState;
use eatery_client::{ApiResult, EateryApi};
use std::future::Future;
use std::sync::Arc;
use tokio::runtime::Runtime;

/// Middleware for all review-service API operations
pub struct ApiMiddleware {
    /// Tokio runtime for async operations
    runtime: Runtime,
    /// Shared API client
    api: Arc<dyn EateryApi>,
}

impl ApiMiddleware {
    /// Create the middleware around an API client
    pub fn new(api: Arc<dyn EateryApi>) -> Self {
        let runtime = Runtime::new().expect("Failed to create tokio runtime");
        Self { runtime, api }
    }

    /// Run one API call off-thread and dispatch its outcome.
    fn spawn<T, F, S, E>(&self, dispatcher: &Dispatcher, call: F, on_success: S, on_failure: E)
    where
        T: Send + 'static,
        F: Future<Output = ApiResult<T>> + Send + 'static,
        S: FnOnce(T) -> Action + Send + 'static,
        E: FnOnce(String) -> Action + Send + 'static,
    {
        let dispatcher = dispatcher.clone();
        self.runtime.spawn(async move {
            match call.await {
                Ok(value) => dispatcher.dispatch(on_success(value)),
                Err(err) => {
                    if err.is_auth_expired() {
                        // Recognized but not acted on; nothing dispatches a
                        // forced logout yet.
                        log::warn!("Session expired: {}", err);
                    }
                    dispatcher.dispatch(on_failure(err.to_string()));
                }
            }
        });
    }

    fn handle_auth(&self, action: &AuthAction, dispatcher: &Dispatcher) {
        match action {
            AuthAction::Signup(data) => {
                let api = Arc::clone(&self.api);
                let data = data.clone();
                self.spawn(
                    dispatcher,
                    async move { api.signup(&data).await },
                    |user| Action::Auth(AuthAction::SignupSuccess(user)),
                    |error| Action::Auth(AuthAction::SignupFailure { error }),
                );
            }

            AuthAction::Login(credentials) => {
                let api = Arc::clone(&self.api);
                let credentials = credentials.clone();
                // Credential flows share one failure action; a rejected
                // sign-in lands in the same error slot as a rejected signup.
                self.spawn(
                    dispatcher,
                    async move { api.login(&credentials).await },
                    |user| Action::Auth(AuthAction::AuthSuccess(user)),
                    |error| Action::Auth(AuthAction::SignupFailure { error }),
                );
            }

            AuthAction::EditProfile(patch) => {
                let api = Arc::clone(&self.api);
                let request = patch.clone();
                let confirmed = patch.clone();
                self.spawn(
                    dispatcher,
                    async move { api.edit_profile(&request).await },
                    move |user| {
                        log::debug!("Server stored profile for {}", user.id);
                        Action::Auth(AuthAction::EditProfileSuccess(confirmed))
                    },
                    |error| Action::Auth(AuthAction::EditProfileFailure { error }),
                );
            }

            AuthAction::UserProfile => {
                let api = Arc::clone(&self.api);
                self.spawn(
                    dispatcher,
                    async move { api.user_profile().await },
                    |user| Action::Auth(AuthAction::UserProfileSuccess(user)),
                    |error| Action::Auth(AuthAction::UserProfileFailure { error }),
                );
            }

            AuthAction::AllUsers => {
                let api = Arc::clone(&self.api);
                self.spawn(
                    dispatcher,
                    async move { api.all_users().await },
                    |users| Action::Auth(AuthAction::AllUsersSuccess(users)),
                    |error| Action::Auth(AuthAction::AllUsersFailure { error }),
                );
            }

            AuthAction::EditOtherUser { user_id, data } => {
                let api = Arc::clone(&self.api);
                let id = user_id.clone();
                let request = data.clone();
                let confirmed_id = user_id.clone();
                self.spawn(
                    dispatcher,
                    async move { api.edit_other_user(&id, &request).await },
                    move |user| {
                        Action::Auth(AuthAction::EditOtherUserSuccess {
                            user,
                            user_id: confirmed_id,
                        })
                    },
                    |error| Action::Auth(AuthAction::EditOtherUserFailure { error }),
                );
            }

            AuthAction::DeleteUser { user_id } => {
                let api = Arc::clone(&self.api);
                let id = user_id.clone();
                let confirmed_id = user_id.clone();
                self.spawn(
                    dispatcher,
                    async move { api.delete_user(&id).await },
                    move |()| {
                        Action::Auth(AuthAction::DeleteUserSuccess {
                            user_id: confirmed_id,
                        })
                    },
                    |error| Action::Auth(AuthAction::DeleteUserFailure { error }),
                );
            }

            // Logout is local by design: session invalidation on the server
            // is someone else's job. Success/failure actions are results,
            // not requests.
            _ => {}
        }
    }

    fn handle_catalog(&self, action: &CatalogAction, dispatcher: &Dispatcher) {
        match action {
            CatalogAction::RestaurantsList(query) => {
                let api = Arc::clone(&self.api);
                let query = *query;
                self.spawn(
                    dispatcher,
                    async move { api.restaurants(&query).await },
                    |page| Action::Catalog(CatalogAction::RestaurantsListSuccess(page)),
                    |error| Action::Catalog(CatalogAction::RestaurantsListFailure { error }),
                );
            }

            CatalogAction::RestaurantDetails { restaurant_id } => {
                let api = Arc::clone(&self.api);
                let id = restaurant_id.clone();
                self.spawn(
                    dispatcher,
                    async move { api.restaurant_details(&id).await },
                    |restaurant| Action::Catalog(CatalogAction::RestaurantDetailsSuccess(restaurant)),
                    |error| Action::Catalog(CatalogAction::RestaurantDetailsFailure { error }),
                );
            }

            CatalogAction::CreateRestaurant(draft) => {
                let api = Arc::clone(&self.api);
                let draft = draft.clone();
                self.spawn(
                    dispatcher,
                    async move { api.create_restaurant(&draft).await },
                    |restaurant| Action::Catalog(CatalogAction::CreateRestaurantSuccess(restaurant)),
                    |error| Action::Catalog(CatalogAction::CreateRestaurantFailure { error }),
                );
            }

            CatalogAction::UpdateRestaurant {
                data,
                restaurant_id,
            } => {
                let api = Arc::clone(&self.api);
                let id = restaurant_id.clone();
                let patch = data.clone();
                let confirmed_id = restaurant_id.clone();
                self.spawn(
                    dispatcher,
                    async move { api.update_restaurant(&id, &patch).await },
                    move |restaurant| {
                        Action::Catalog(CatalogAction::UpdateRestaurantSuccess {
                            restaurant,
                            restaurant_id: confirmed_id,
                        })
                    },
                    |error| Action::Catalog(CatalogAction::UpdateRestaurantFailure { error }),
                );
            }

            CatalogAction::DeleteRestaurant { restaurant_id } => {
                let api = Arc::clone(&self.api);
                let id = restaurant_id.clone();
                let confirmed_id = restaurant_id.clone();
                self.spawn(
                    dispatcher,
                    async move { api.delete_restaurant(&id).await },
                    move |()| {
                        Action::Catalog(CatalogAction::DeleteRestaurantSuccess {
                            restaurant_id: confirmed_id,
                        })
                    },
                    |error| Action::Catalog(CatalogAction::DeleteRestaurantFailure { error }),
                );
            }

            CatalogAction::GetAllReviews(query) => {
                let api = Arc::clone(&self.api);
                let query = *query;
                self.spawn(
                    dispatcher,
                    async move { api.reviews(&query).await },
                    |page| Action::Catalog(CatalogAction::GetAllReviewsSuccess(page)),
                    |error| Action::Catalog(CatalogAction::GetAllReviewsFailure { error }),
                );
            }

            CatalogAction::CreateReview {
                data,
                restaurant_id,
            } => {
                let api = Arc::clone(&self.api);
                let id = restaurant_id.clone();
                let draft = data.clone();
                self.spawn(
                    dispatcher,
                    async move { api.create_review(&id, &draft).await },
                    |review| Action::Catalog(CatalogAction::CreateReviewSuccess(review)),
                    |error| Action::Catalog(CatalogAction::CreateReviewFailure { error }),
                );
            }

            CatalogAction::UpdateReview {
                data,
                restaurant_id,
                review_id,
            } => {
                let api = Arc::clone(&self.api);
                let restaurant_id = restaurant_id.clone();
                let id = review_id.clone();
                let patch = data.clone();
                let confirmed_id = review_id.clone();
                self.spawn(
                    dispatcher,
                    async move { api.update_review(&restaurant_id, &id, &patch).await },
                    move |review| {
                        Action::Catalog(CatalogAction::UpdateReviewSuccess {
                            review,
                            review_id: confirmed_id,
                        })
                    },
                    |error| Action::Catalog(CatalogAction::UpdateReviewFailure { error }),
                );
            }

            CatalogAction::DeleteReview { review_id } => {
                let api = Arc::clone(&self.api);
                let id = review_id.clone();
                let confirmed_id = review_id.clone();
                self.spawn(
                    dispatcher,
                    async move { api.delete_review(&id).await },
                    move |()| {
                        Action::Catalog(CatalogAction::DeleteReviewSuccess {
                            review_id: confirmed_id,
                        })
                    },
                    |error| Action::Catalog(CatalogAction::DeleteReviewFailure { error }),
                );
            }

            CatalogAction::ReviewReply {
                data,
                restaurant_id,
                review_id,
            } => {
                let api = Arc::clone(&self.api);
                let restaurant_id = restaurant_id.clone();
                let id = review_id.clone();
                let draft = data.clone();
                let confirmed_id = review_id.clone();
                self.spawn(
                    dispatcher,
                    async move { api.reply_review(&restaurant_id, &id, &draft).await },
                    move |reply| {
                        Action::Catalog(CatalogAction::ReviewReplySuccess {
                            reply,
                            review_id: confirmed_id,
                        })
                    },
                    |error| Action::Catalog(CatalogAction::ReviewReplyFailure { error }),
                );
            }

            // Success/failure results and the local user re-stamp need no
            // network call.
            _ => {}
        }
    }
}

impl Middleware for ApiMiddleware {
    fn handle(&mut self, action: &Action, _state: &AppState, dispatcher: &Dispatcher) -> bool {
        match action {
            Action::Auth(action) => self.handle_auth(action, dispatcher),
            Action::Catalog(action) => self.handle_catalog(action, dispatcher),
        }
        true // Requests still reach the reducer to raise their busy flag
    }
}
