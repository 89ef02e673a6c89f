//! Catalog state

use crate::domain_models::PageCursor;
use eatery_client::{Restaurant, Review};

/// State owned by the catalog store
///
/// Two independently paginated listings, one detail slot, and one busy flag
/// per operation kind. The detail slot is separate storage from the listing:
/// a restaurant can live in both places at once and is updated in both.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogState {
    /// Message of the last failed operation
    pub error: String,

    /// Ordered, de-duplicated restaurant listing
    pub restaurants: Vec<Restaurant>,
    /// Ordered, de-duplicated global review listing
    pub reviews: Vec<Review>,
    /// The restaurant currently shown in detail, if any
    pub restaurant_details: Option<Restaurant>,
    /// The most recently created review (observed from the detail screen)
    pub created_review: Option<Review>,

    /// Restaurant listing fetch, create, or update is in flight
    pub loading: bool,
    /// Detail fetch is in flight
    pub details_loading: bool,
    /// Review listing fetch is in flight
    pub reviews_loading: bool,
    /// Review creation is in flight
    pub creating_review: bool,
    /// Owner reply is in flight
    pub replying: bool,
    /// Restaurant update is in flight
    pub updating_restaurant: bool,
    /// Review update is in flight
    pub updating_review: bool,
    /// Restaurant deletion is in flight
    pub deleting_restaurant: bool,
    /// Review deletion is in flight
    pub deleting_review: bool,

    /// The last restaurant page was non-empty, so more pages may remain
    pub restaurants_remaining: bool,
    /// The last review page was non-empty, so more pages may remain
    pub reviews_remaining: bool,

    /// Cursor of the last restaurant listing request
    pub restaurant_page: PageCursor,
    /// Cursor of the last review listing request
    pub review_page: PageCursor,
}

impl Default for CatalogState {
    fn default() -> Self {
        Self {
            error: String::new(),
            restaurants: Vec::new(),
            reviews: Vec::new(),
            restaurant_details: None,
            created_review: None,
            // The first screen fetches the listing immediately, so the
            // catalog starts out loading.
            loading: true,
            details_loading: false,
            reviews_loading: false,
            creating_review: false,
            replying: false,
            updating_restaurant: false,
            updating_review: false,
            deleting_restaurant: false,
            deleting_review: false,
            restaurants_remaining: false,
            reviews_remaining: false,
            restaurant_page: PageCursor::default(),
            review_page: PageCursor::default(),
        }
    }
}
