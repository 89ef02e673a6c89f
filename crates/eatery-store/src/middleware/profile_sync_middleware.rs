//! Profile Sync Middleware
//!
//! The catalog embeds a copy of the owning user in every restaurant and
//! review it has loaded. When the signed-in user edits their profile, those
//! copies go stale; this middleware is the explicit wiring step that
//! re-dispatches the confirmed edit into the catalog store.

use crate::actions::{Action, AuthAction, CatalogAction};
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::AppState;

/// Middleware that propagates profile edits into the catalog
pub struct ProfileSyncMiddleware;

impl ProfileSyncMiddleware {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ProfileSyncMiddleware {
    fn default() -> Self {
        Self::new()
    }
}

impl Middleware for ProfileSyncMiddleware {
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool {
        if let Action::Auth(AuthAction::EditProfileSuccess(patch)) = action {
            // The snapshot precedes this action's reduction, so applying the
            // patch here yields exactly the user the auth reducer is about
            // to store.
            match &state.auth.user {
                Some(user) => {
                    let mut merged = user.clone();
                    patch.apply_to(&mut merged);
                    dispatcher.dispatch(Action::Catalog(
                        CatalogAction::UpdateUserInRestaurantsAndReviews(merged),
                    ));
                }
                None => {
                    log::warn!("Profile edit confirmed with no user signed in; nothing to sync");
                }
            }
        }
        true // Never consumes; the auth reducer still applies the merge
    }
}
