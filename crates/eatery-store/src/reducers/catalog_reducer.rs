//! Catalog Reducer
//!
//! Handles the paginated restaurant and review listings, the restaurant
//! detail slot, and the targeted mutations that keep already-loaded records
//! in sync after create/update/delete/reply operations.
//!
//! The listing and the detail slot are separate storage: an update lands in
//! the listing entry, a detail fetch lands in the slot, and neither implies
//! the other.

use crate::actions::CatalogAction;
use crate::domain_models::{merge_page, PageCursor};
use crate::state::CatalogState;

/// Reduce catalog actions
pub fn reduce_catalog(mut state: CatalogState, action: &CatalogAction) -> CatalogState {
    match action {
        // === Restaurant listing ===
        CatalogAction::RestaurantsList(query) => {
            state.restaurant_page = PageCursor::from_query(query);
            state.loading = true;
        }

        CatalogAction::RestaurantsListSuccess(page) => {
            let current = std::mem::take(&mut state.restaurants);
            state.restaurants = merge_page(current, page, state.restaurant_page, |r| &r.id);
            state.restaurants_remaining = !page.is_empty();
            state.loading = false;
            log::debug!(
                "Restaurant listing holds {} entries after page {}",
                state.restaurants.len(),
                state.restaurant_page.page_no
            );
        }

        CatalogAction::RestaurantsListFailure { error } => {
            state.error = error.clone();
            state.restaurants_remaining = false;
            state.loading = false;
        }

        // === Restaurant detail ===
        CatalogAction::RestaurantDetails { restaurant_id } => {
            log::debug!("Fetching details for restaurant {}", restaurant_id);
            state.details_loading = true;
        }

        CatalogAction::RestaurantDetailsSuccess(restaurant) => {
            state.restaurant_details = Some(restaurant.clone());
            state.details_loading = false;
        }

        CatalogAction::RestaurantDetailsFailure { error } => {
            state.error = error.clone();
            state.details_loading = false;
            state.loading = false;
        }

        // === Restaurant CRUD ===
        CatalogAction::CreateRestaurant(_) => {
            state.loading = true;
        }

        CatalogAction::CreateRestaurantSuccess(restaurant) => {
            // A fresh record cannot collide with an existing id, so it is
            // appended without a de-dup pass.
            state.restaurants.push(restaurant.clone());
            state.loading = false;
        }

        CatalogAction::CreateRestaurantFailure { error } => {
            state.error = error.clone();
            state.loading = false;
        }

        CatalogAction::UpdateRestaurant { restaurant_id, .. } => {
            log::debug!("Updating restaurant {}", restaurant_id);
            state.loading = true;
            state.updating_restaurant = true;
        }

        CatalogAction::UpdateRestaurantSuccess {
            restaurant,
            restaurant_id,
        } => {
            if let Some(entry) = state.restaurants.iter_mut().find(|r| r.id == *restaurant_id) {
                *entry = restaurant.clone();
            }
            state.updating_restaurant = false;
            state.loading = false;
        }

        CatalogAction::UpdateRestaurantFailure { error } => {
            state.error = error.clone();
            state.updating_restaurant = false;
            state.loading = false;
        }

        CatalogAction::DeleteRestaurant { restaurant_id } => {
            log::debug!("Deleting restaurant {}", restaurant_id);
            state.deleting_restaurant = true;
        }

        CatalogAction::DeleteRestaurantSuccess { restaurant_id } => {
            state.restaurants.retain(|r| r.id != *restaurant_id);
            state.deleting_restaurant = false;
        }

        CatalogAction::DeleteRestaurantFailure { error } => {
            state.error = error.clone();
            state.deleting_restaurant = false;
        }

        // === Review listing ===
        CatalogAction::GetAllReviews(query) => {
            state.review_page = PageCursor::from_query(query);
            state.reviews_loading = true;
        }

        CatalogAction::GetAllReviewsSuccess(page) => {
            let current = std::mem::take(&mut state.reviews);
            state.reviews = merge_page(current, page, state.review_page, |r| &r.id);
            state.reviews_remaining = !page.is_empty();
            state.reviews_loading = false;
            state.loading = false;
        }

        CatalogAction::GetAllReviewsFailure { error } => {
            state.error = error.clone();
            state.reviews_remaining = false;
            state.reviews_loading = false;
        }

        // === Review CRUD ===
        CatalogAction::CreateReview { restaurant_id, .. } => {
            log::debug!("Posting review on restaurant {}", restaurant_id);
            state.creating_review = true;
        }

        CatalogAction::CreateReviewSuccess(review) => {
            // Review creation is observed from the detail screen: it marks
            // the open detail record reviewed and stashes the new review,
            // without touching the global listing.
            if let Some(details) = state.restaurant_details.as_mut() {
                details.is_reviewed = true;
            } else {
                log::warn!("Review created with no restaurant details open");
            }
            state.created_review = Some(review.clone());
            state.creating_review = false;
        }

        CatalogAction::CreateReviewFailure { error } => {
            state.error = error.clone();
            state.creating_review = false;
        }

        CatalogAction::UpdateReview { review_id, .. } => {
            log::debug!("Updating review {}", review_id);
            state.loading = true;
            state.updating_review = true;
        }

        CatalogAction::UpdateReviewSuccess { review, review_id } => {
            if let Some(entry) = state.reviews.iter_mut().find(|r| r.id == *review_id) {
                *entry = review.clone();
            }
            state.updating_review = false;
            state.loading = false;
        }

        CatalogAction::UpdateReviewFailure { error } => {
            state.error = error.clone();
            state.updating_review = false;
            state.loading = false;
        }

        CatalogAction::DeleteReview { review_id } => {
            log::debug!("Deleting review {}", review_id);
            state.deleting_review = true;
        }

        CatalogAction::DeleteReviewSuccess { review_id } => {
            state.reviews.retain(|r| r.id != *review_id);
            state.deleting_review = false;
        }

        CatalogAction::DeleteReviewFailure { error } => {
            state.error = error.clone();
            state.deleting_review = false;
        }

        CatalogAction::ReviewReply { review_id, .. } => {
            log::debug!("Replying to review {}", review_id);
            state.replying = true;
        }

        CatalogAction::ReviewReplySuccess { reply, review_id } => {
            // Patch only the reply field; the rest of the review stays.
            if let Some(review) = state.reviews.iter_mut().find(|r| r.id == *review_id) {
                review.reply = Some(reply.clone());
            }
            state.replying = false;
        }

        CatalogAction::ReviewReplyFailure { error } => {
            state.error = error.clone();
            state.replying = false;
        }

        // === Cross-store synchronization ===
        CatalogAction::UpdateUserInRestaurantsAndReviews(user) => {
            let mut stamped = 0usize;
            for restaurant in &mut state.restaurants {
                if restaurant.user.id == user.id {
                    restaurant.user = user.clone();
                    stamped += 1;
                }
            }
            for review in &mut state.reviews {
                if review.user.id == user.id {
                    review.user = user.clone();
                    stamped += 1;
                }
            }
            log::debug!("Re-stamped {} embedded copies of user {}", stamped, user.id);
        }
    }

    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_fixtures::{sample_restaurant, sample_review, sample_user};
    use eatery_client::PageQuery;

    fn restaurant_ids(state: &CatalogState) -> Vec<&str> {
        state.restaurants.iter().map(|r| r.id.as_str()).collect()
    }

    fn listed(state: CatalogState, page_no: u32, ids: &[&str]) -> CatalogState {
        let page: Vec<_> = ids
            .iter()
            .map(|id| sample_restaurant(id, sample_user("u1")))
            .collect();
        let state = reduce_catalog(
            state,
            &CatalogAction::RestaurantsList(PageQuery::new(page_no, 2)),
        );
        reduce_catalog(state, &CatalogAction::RestaurantsListSuccess(page))
    }

    #[test]
    fn test_first_page_replaces_listing() {
        let state = listed(CatalogState::default(), 1, &["r1", "r2"]);
        assert_eq!(restaurant_ids(&state), vec!["r1", "r2"]);
        assert!(state.restaurants_remaining);
        assert!(!state.loading);

        // A new first page discards what was loaded before.
        let state = listed(state, 1, &["r9"]);
        assert_eq!(restaurant_ids(&state), vec!["r9"]);
    }

    #[test]
    fn test_later_pages_append_in_receipt_order() {
        let state = listed(CatalogState::default(), 1, &["r1", "r2"]);
        let state = listed(state, 2, &["r3", "r4"]);
        let state = listed(state, 3, &["r5"]);
        assert_eq!(restaurant_ids(&state), vec!["r1", "r2", "r3", "r4", "r5"]);
    }

    #[test]
    fn test_overlapping_pages_dedupe_by_id() {
        let state = listed(CatalogState::default(), 1, &["r1", "r2"]);
        let state = listed(state, 2, &["r2", "r3"]);
        assert_eq!(restaurant_ids(&state), vec!["r1", "r2", "r3"]);
    }

    #[test]
    fn test_same_page_twice_leaves_no_duplicates() {
        let state = listed(CatalogState::default(), 2, &["r1", "r2"]);
        let state = listed(state, 2, &["r1", "r2"]);
        assert_eq!(restaurant_ids(&state), vec!["r1", "r2"]);
    }

    #[test]
    fn test_duplicate_keeps_position_takes_latest_content() {
        let state = listed(CatalogState::default(), 1, &["r1", "r2"]);

        let mut refreshed = sample_restaurant("r1", sample_user("u1"));
        refreshed.name = "renamed".to_string();
        let state = reduce_catalog(
            state,
            &CatalogAction::RestaurantsList(PageQuery::new(2, 2)),
        );
        let state = reduce_catalog(
            state,
            &CatalogAction::RestaurantsListSuccess(vec![refreshed]),
        );

        assert_eq!(restaurant_ids(&state), vec!["r1", "r2"]);
        assert_eq!(state.restaurants[0].name, "renamed");
    }

    #[test]
    fn test_empty_page_means_exhausted() {
        let state = listed(CatalogState::default(), 1, &["r1"]);
        assert!(state.restaurants_remaining);
        let state = listed(state, 2, &[]);
        assert!(!state.restaurants_remaining);
        assert_eq!(restaurant_ids(&state), vec!["r1"]);
    }

    #[test]
    fn test_listing_failure_keeps_collection() {
        let state = listed(CatalogState::default(), 1, &["r1"]);
        let state = reduce_catalog(
            state,
            &CatalogAction::RestaurantsListFailure {
                error: "timeout".to_string(),
            },
        );
        assert_eq!(restaurant_ids(&state), vec!["r1"]);
        assert_eq!(state.error, "timeout");
        assert!(!state.restaurants_remaining);
        assert!(!state.loading);
    }

    #[test]
    fn test_review_cursor_is_independent() {
        // Load restaurants at page 3, reviews at page 1: the review merge
        // must replace, not append, despite the restaurant cursor.
        let state = listed(CatalogState::default(), 3, &["r1"]);
        let state = reduce_catalog(
            state,
            &CatalogAction::GetAllReviews(PageQuery::new(1, 10)),
        );
        let page = vec![sample_review("v1", "r1", sample_user("u2"))];
        let state = reduce_catalog(state, &CatalogAction::GetAllReviewsSuccess(page));
        assert_eq!(state.reviews.len(), 1);
        assert!(state.reviews_remaining);
        assert_eq!(state.restaurant_page.page_no, 3);
        assert_eq!(state.review_page.page_no, 1);
    }

    #[test]
    fn test_details_fetch_lifecycle() {
        let state = reduce_catalog(
            CatalogState::default(),
            &CatalogAction::RestaurantDetails {
                restaurant_id: "r1".to_string(),
            },
        );
        assert!(state.details_loading);

        let detail = sample_restaurant("r1", sample_user("u1"));
        let state = reduce_catalog(state, &CatalogAction::RestaurantDetailsSuccess(detail));
        assert!(!state.details_loading);
        assert_eq!(
            state.restaurant_details.as_ref().map(|r| r.id.as_str()),
            Some("r1")
        );
    }

    #[test]
    fn test_details_failure_clears_both_flags() {
        let mut state = CatalogState::default();
        state.details_loading = true;
        state.loading = true;
        let state = reduce_catalog(
            state,
            &CatalogAction::RestaurantDetailsFailure {
                error: "not found".to_string(),
            },
        );
        assert!(!state.details_loading);
        assert!(!state.loading);
        assert_eq!(state.error, "not found");
    }

    #[test]
    fn test_create_restaurant_appends() {
        let state = listed(CatalogState::default(), 1, &["r1"]);
        let state = reduce_catalog(
            state,
            &CatalogAction::CreateRestaurantSuccess(sample_restaurant("r2", sample_user("u1"))),
        );
        assert_eq!(restaurant_ids(&state), vec!["r1", "r2"]);
    }

    #[test]
    fn test_update_restaurant_replaces_matching_entry() {
        let state = listed(CatalogState::default(), 1, &["r1", "r2"]);
        let mut updated = sample_restaurant("r2", sample_user("u1"));
        updated.name = "new name".to_string();

        let state = reduce_catalog(
            state,
            &CatalogAction::UpdateRestaurantSuccess {
                restaurant: updated,
                restaurant_id: "r2".to_string(),
            },
        );
        assert_eq!(state.restaurants[1].name, "new name");
        assert_eq!(state.restaurants[0].name, "restaurant-r1");
        assert!(!state.updating_restaurant);
        assert!(!state.loading);
    }

    #[test]
    fn test_update_restaurant_missing_id_is_noop() {
        let state = listed(CatalogState::default(), 1, &["r1"]);
        let before = state.restaurants.clone();
        let state = reduce_catalog(
            state,
            &CatalogAction::UpdateRestaurantSuccess {
                restaurant: sample_restaurant("r9", sample_user("u1")),
                restaurant_id: "r9".to_string(),
            },
        );
        assert_eq!(state.restaurants, before);
    }

    #[test]
    fn test_delete_restaurant_removes_matching_entry() {
        let state = listed(CatalogState::default(), 1, &["r1", "r2"]);
        let state = reduce_catalog(
            state,
            &CatalogAction::DeleteRestaurantSuccess {
                restaurant_id: "r1".to_string(),
            },
        );
        assert_eq!(restaurant_ids(&state), vec!["r2"]);

        // Deleting an id that is not loaded changes nothing.
        let before = state.restaurants.clone();
        let state = reduce_catalog(
            state,
            &CatalogAction::DeleteRestaurantSuccess {
                restaurant_id: "r9".to_string(),
            },
        );
        assert_eq!(state.restaurants, before);
    }

    #[test]
    fn test_create_review_marks_detail_and_stashes() {
        let mut state = CatalogState::default();
        state.restaurant_details = Some(sample_restaurant("r1", sample_user("u1")));
        state.reviews = vec![sample_review("v1", "r1", sample_user("u2"))];

        let created = sample_review("v2", "r1", sample_user("u3"));
        let state = reduce_catalog(state, &CatalogAction::CreateReviewSuccess(created));

        assert!(state.restaurant_details.as_ref().unwrap().is_reviewed);
        assert_eq!(
            state.created_review.as_ref().map(|r| r.id.as_str()),
            Some("v2")
        );
        // The global listing is not part of this flow.
        assert_eq!(state.reviews.len(), 1);
        assert!(!state.creating_review);
    }

    #[test]
    fn test_reply_patches_only_reply_field() {
        let mut state = CatalogState::default();
        state.reviews = vec![
            sample_review("v5", "r1", sample_user("u2")),
            sample_review("v6", "r1", sample_user("u3")),
        ];

        let state = reduce_catalog(
            state,
            &CatalogAction::ReviewReplySuccess {
                reply: "thanks".to_string(),
                review_id: "v5".to_string(),
            },
        );

        assert_eq!(state.reviews[0].reply.as_deref(), Some("thanks"));
        assert_eq!(state.reviews[0].comment, "comment-v5"); // untouched
        assert!(state.reviews[1].reply.is_none());
        assert!(!state.replying);
    }

    #[test]
    fn test_update_review_replaces_matching_entry() {
        let mut state = CatalogState::default();
        state.reviews = vec![sample_review("v1", "r1", sample_user("u2"))];
        let mut updated = sample_review("v1", "r1", sample_user("u2"));
        updated.comment = "edited".to_string();

        let state = reduce_catalog(
            state,
            &CatalogAction::UpdateReviewSuccess {
                review: updated,
                review_id: "v1".to_string(),
            },
        );
        assert_eq!(state.reviews[0].comment, "edited");
        assert!(!state.updating_review);
    }

    #[test]
    fn test_update_review_missing_id_is_noop() {
        let mut state = CatalogState::default();
        state.reviews = vec![sample_review("v1", "r1", sample_user("u2"))];
        let before = state.reviews.clone();

        let state = reduce_catalog(
            state,
            &CatalogAction::UpdateReviewSuccess {
                review: sample_review("v9", "r1", sample_user("u2")),
                review_id: "v9".to_string(),
            },
        );
        assert_eq!(state.reviews, before);
    }

    #[test]
    fn test_delete_review_removes_matching_entry() {
        let mut state = CatalogState::default();
        state.reviews = vec![
            sample_review("v1", "r1", sample_user("u2")),
            sample_review("v2", "r1", sample_user("u3")),
        ];
        let state = reduce_catalog(
            state,
            &CatalogAction::DeleteReviewSuccess {
                review_id: "v2".to_string(),
            },
        );
        assert_eq!(state.reviews.len(), 1);
        assert_eq!(state.reviews[0].id, "v1");
    }

    #[test]
    fn test_user_sync_stamps_matching_embedded_users_only() {
        let mut state = CatalogState::default();
        state.restaurants = vec![
            sample_restaurant("r1", sample_user("u1")),
            sample_restaurant("r2", sample_user("u2")),
        ];
        state.reviews = vec![
            sample_review("v1", "r1", sample_user("u1")),
            sample_review("v2", "r1", sample_user("u3")),
        ];
        let untouched_restaurant = state.restaurants[1].clone();
        let untouched_review = state.reviews[1].clone();

        let mut renamed = sample_user("u1");
        renamed.name = "Grace".to_string();
        let state = reduce_catalog(
            state,
            &CatalogAction::UpdateUserInRestaurantsAndReviews(renamed),
        );

        assert_eq!(state.restaurants[0].user.name, "Grace");
        assert_eq!(state.reviews[0].user.name, "Grace");
        assert_eq!(state.restaurants[1], untouched_restaurant);
        assert_eq!(state.reviews[1], untouched_review);
    }

    #[test]
    fn test_user_sync_leaves_pagination_alone() {
        let state = listed(CatalogState::default(), 2, &["r1"]);
        let cursor = state.restaurant_page;
        let remaining = state.restaurants_remaining;

        let state = reduce_catalog(
            state,
            &CatalogAction::UpdateUserInRestaurantsAndReviews(sample_user("u1")),
        );
        assert_eq!(state.restaurant_page, cursor);
        assert_eq!(state.restaurants_remaining, remaining);
    }

    #[test]
    fn test_failures_clear_their_own_flag_only() {
        let mut state = CatalogState::default();
        state.replying = true;
        state.updating_review = true;
        let state = reduce_catalog(
            state,
            &CatalogAction::ReviewReplyFailure {
                error: "forbidden".to_string(),
            },
        );
        assert!(!state.replying);
        assert!(state.updating_review); // unrelated flag untouched
        assert_eq!(state.error, "forbidden");
    }
}
