//! Application state

use super::{AuthState, CatalogState};

/// Root application state
///
/// Owns both domain stores. There is exactly one value of this type per
/// store; reducers consume it and hand back the next snapshot.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    /// Authentication and user-directory store
    pub auth: AuthState,
    /// Restaurant and review catalog store
    pub catalog: CatalogState,
}
