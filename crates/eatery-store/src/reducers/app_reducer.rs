//! Root reducer
//!
//! Routes each action to the domain store it is tagged for. The other
//! store's state passes through untouched, so a dispatched action can never
//! affect a store it was not addressed to.

use crate::actions::Action;
use crate::reducers::{reduce_auth, reduce_catalog};
use crate::state::AppState;

/// Produce the next application state for one dispatched action
pub fn reduce(state: AppState, action: &Action) -> AppState {
    let AppState { auth, catalog } = state;
    match action {
        Action::Auth(action) => AppState {
            auth: reduce_auth(auth, action),
            catalog,
        },
        Action::Catalog(action) => AppState {
            auth,
            catalog: reduce_catalog(catalog, action),
        },
    }
}
