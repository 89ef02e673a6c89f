//! Shared builders and a canned API client for tests.

use chrono::{TimeZone, Utc};
use eatery_client::{
    ApiError, ApiResult, Credentials, EateryApi, PageQuery, ReplyDraft, Restaurant,
    RestaurantDraft, RestaurantPatch, Review, ReviewDraft, ReviewPatch, Role, SignupData, User,
    UserPatch,
};

pub(crate) fn sample_user(id: &str) -> User {
    User {
        id: id.to_string(),
        name: format!("user-{id}"),
        email: format!("{id}@example.com"),
        phone: Some("000".to_string()),
        role: Role::Regular,
        image: None,
    }
}

pub(crate) fn sample_restaurant(id: &str, owner: User) -> Restaurant {
    Restaurant {
        id: id.to_string(),
        name: format!("restaurant-{id}"),
        description: "food".to_string(),
        location: "downtown".to_string(),
        established: Some(Utc.with_ymd_and_hms(2015, 6, 1, 0, 0, 0).unwrap()),
        user: owner,
        avg_rating: 4.0,
        is_reviewed: false,
    }
}

pub(crate) fn sample_review(id: &str, restaurant_id: &str, reviewer: User) -> Review {
    Review {
        id: id.to_string(),
        restaurant_id: restaurant_id.to_string(),
        rating: 4.0,
        comment: format!("comment-{id}"),
        visit_date: Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap(),
        user: reviewer,
        reply: None,
    }
}

/// Canned `EateryApi` for effect-runner tests.
///
/// Succeeds with fixed records unless constructed with a failure, in which
/// case every call fails with that server error.
pub(crate) struct MockApi {
    fail: Option<(u16, String)>,
}

impl MockApi {
    pub(crate) fn ok() -> Self {
        Self { fail: None }
    }

    pub(crate) fn failing(status: u16, message: &str) -> Self {
        Self {
            fail: Some((status, message.to_string())),
        }
    }

    fn guard(&self) -> ApiResult<()> {
        match &self.fail {
            Some((status, message)) => Err(ApiError::Server {
                status: *status,
                message: message.clone(),
                body: None,
            }),
            None => Ok(()),
        }
    }
}

#[async_trait::async_trait]
impl EateryApi for MockApi {
    async fn signup(&self, data: &SignupData) -> ApiResult<User> {
        self.guard()?;
        let mut user = sample_user("u-new");
        user.email = data.email.clone();
        Ok(user)
    }

    async fn login(&self, credentials: &Credentials) -> ApiResult<User> {
        self.guard()?;
        let mut user = sample_user("u1");
        user.email = credentials.email.clone();
        Ok(user)
    }

    async fn user_profile(&self) -> ApiResult<User> {
        self.guard()?;
        Ok(sample_user("u1"))
    }

    async fn all_users(&self) -> ApiResult<Vec<User>> {
        self.guard()?;
        Ok(vec![sample_user("u1"), sample_user("u2")])
    }

    async fn edit_profile(&self, _patch: &UserPatch) -> ApiResult<User> {
        self.guard()?;
        Ok(sample_user("u1"))
    }

    async fn edit_other_user(&self, user_id: &str, _patch: &UserPatch) -> ApiResult<User> {
        self.guard()?;
        Ok(sample_user(user_id))
    }

    async fn delete_user(&self, _user_id: &str) -> ApiResult<()> {
        self.guard()
    }

    async fn restaurants(&self, _page: &PageQuery) -> ApiResult<Vec<Restaurant>> {
        self.guard()?;
        Ok(vec![sample_restaurant("r1", sample_user("u1"))])
    }

    async fn restaurant_details(&self, restaurant_id: &str) -> ApiResult<Restaurant> {
        self.guard()?;
        Ok(sample_restaurant(restaurant_id, sample_user("u1")))
    }

    async fn create_restaurant(&self, draft: &RestaurantDraft) -> ApiResult<Restaurant> {
        self.guard()?;
        let mut restaurant = sample_restaurant("r-new", sample_user("u1"));
        restaurant.name = draft.name.clone();
        Ok(restaurant)
    }

    async fn update_restaurant(
        &self,
        restaurant_id: &str,
        patch: &RestaurantPatch,
    ) -> ApiResult<Restaurant> {
        self.guard()?;
        let mut restaurant = sample_restaurant(restaurant_id, sample_user("u1"));
        if let Some(name) = &patch.name {
            restaurant.name = name.clone();
        }
        Ok(restaurant)
    }

    async fn delete_restaurant(&self, _restaurant_id: &str) -> ApiResult<()> {
        self.guard()
    }

    async fn reviews(&self, _page: &PageQuery) -> ApiResult<Vec<Review>> {
        self.guard()?;
        Ok(vec![sample_review("v1", "r1", sample_user("u2"))])
    }

    async fn create_review(&self, restaurant_id: &str, draft: &ReviewDraft) -> ApiResult<Review> {
        self.guard()?;
        let mut review = sample_review("v-new", restaurant_id, sample_user("u1"));
        review.comment = draft.comment.clone();
        Ok(review)
    }

    async fn update_review(
        &self,
        restaurant_id: &str,
        review_id: &str,
        patch: &ReviewPatch,
    ) -> ApiResult<Review> {
        self.guard()?;
        let mut review = sample_review(review_id, restaurant_id, sample_user("u1"));
        if let Some(comment) = &patch.comment {
            review.comment = comment.clone();
        }
        Ok(review)
    }

    async fn delete_review(&self, _review_id: &str) -> ApiResult<()> {
        self.guard()
    }

    async fn reply_review(
        &self,
        _restaurant_id: &str,
        _review_id: &str,
        reply: &ReplyDraft,
    ) -> ApiResult<String> {
        self.guard()?;
        Ok(reply.reply.clone())
    }
}
