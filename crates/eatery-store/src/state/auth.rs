//! Authentication state

use eatery_client::User;

/// State owned by the authentication store
///
/// `user` is the signed-in account; `all_users` is the admin-facing user
/// directory. The busy flags each cover exactly one operation kind, and
/// `error` always holds the message of the most recent failure.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AuthState {
    /// A credential or profile operation is in flight
    pub loading: bool,
    /// The signed-in user, if any
    pub user: Option<User>,
    /// Message of the last failed operation
    pub error: String,
    /// The user directory is being fetched
    pub is_fetching_users: bool,
    /// A user deletion is in flight
    pub deleting_user: bool,
    /// Every known user account (admin management)
    pub all_users: Vec<User>,
}
