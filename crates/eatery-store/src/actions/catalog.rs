//! Catalog actions
//!
//! Actions for the paginated restaurant and review collections, the single
//! restaurant-detail slot, and the cross-store user synchronization hook.

use eatery_client::{
    PageQuery, ReplyDraft, Restaurant, RestaurantDraft, RestaurantPatch, Review, ReviewDraft,
    ReviewPatch, User,
};

/// Actions for the catalog store
#[derive(Debug, Clone)]
pub enum CatalogAction {
    // Restaurant listing
    /// Fetch a page of the restaurant listing; the cursor follows the query
    RestaurantsList(PageQuery),
    /// Page received; first page replaces the list, later pages append
    RestaurantsListSuccess(Vec<Restaurant>),
    /// Listing fetch failed
    RestaurantsListFailure { error: String },

    // Restaurant detail
    /// Fetch one restaurant into the detail slot
    RestaurantDetails { restaurant_id: String },
    /// Detail record received
    RestaurantDetailsSuccess(Restaurant),
    /// Detail fetch failed
    RestaurantDetailsFailure { error: String },

    // Restaurant CRUD
    /// Create a restaurant
    CreateRestaurant(RestaurantDraft),
    /// Restaurant created; appended to the listing as-is
    CreateRestaurantSuccess(Restaurant),
    /// Creation failed
    CreateRestaurantFailure { error: String },

    /// Update a restaurant
    UpdateRestaurant {
        data: RestaurantPatch,
        restaurant_id: String,
    },
    /// Update confirmed; the matching listing entry is replaced wholesale
    UpdateRestaurantSuccess {
        restaurant: Restaurant,
        restaurant_id: String,
    },
    /// Update failed
    UpdateRestaurantFailure { error: String },

    /// Delete a restaurant
    DeleteRestaurant { restaurant_id: String },
    /// Deletion confirmed; the matching listing entry is removed
    DeleteRestaurantSuccess { restaurant_id: String },
    /// Deletion failed
    DeleteRestaurantFailure { error: String },

    // Review listing
    /// Fetch a page of the global review listing
    GetAllReviews(PageQuery),
    /// Page received; merged under the review cursor
    GetAllReviewsSuccess(Vec<Review>),
    /// Review listing fetch failed
    GetAllReviewsFailure { error: String },

    // Review CRUD
    /// Post a review on a restaurant (observed from the detail screen)
    CreateReview {
        data: ReviewDraft,
        restaurant_id: String,
    },
    /// Review created; marks the detail record reviewed, does not touch the
    /// global review listing
    CreateReviewSuccess(Review),
    /// Review creation failed
    CreateReviewFailure { error: String },

    /// Update a review
    UpdateReview {
        data: ReviewPatch,
        restaurant_id: String,
        review_id: String,
    },
    /// Update confirmed; the matching review is replaced wholesale
    UpdateReviewSuccess { review: Review, review_id: String },
    /// Review update failed
    UpdateReviewFailure { error: String },

    /// Delete a review
    DeleteReview { review_id: String },
    /// Deletion confirmed; the matching review is removed
    DeleteReviewSuccess { review_id: String },
    /// Review deletion failed
    DeleteReviewFailure { error: String },

    /// Post the owner's reply on a review
    ReviewReply {
        data: ReplyDraft,
        restaurant_id: String,
        review_id: String,
    },
    /// Reply stored; patches only the reply field of the matching review
    ReviewReplySuccess { reply: String, review_id: String },
    /// Reply failed
    ReviewReplyFailure { error: String },

    // Cross-store synchronization
    /// Re-stamp the embedded user record of every restaurant and review
    /// owned by the given user; dispatched when a profile edit is confirmed
    UpdateUserInRestaurantsAndReviews(User),
}
