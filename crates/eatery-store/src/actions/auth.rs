//! Authentication actions
//!
//! Request/success/failure triples for every account operation. Failure
//! payloads are the already-normalized message string; the reducer never
//! sees status codes.

use eatery_client::{Credentials, SignupData, User, UserPatch};

/// Actions for the authentication store
#[derive(Debug, Clone)]
pub enum AuthAction {
    // Registration
    /// Submit a new account registration
    Signup(SignupData),
    /// Registration accepted; the new account is not signed in yet
    SignupSuccess(User),
    /// Registration or credential check failed
    SignupFailure { error: String },

    // Session
    /// Submit credentials for sign-in
    Login(Credentials),
    /// A user is authenticated (sign-in or session restore)
    AuthSuccess(User),
    /// Drop the local session unconditionally
    Logout,

    // Own profile
    /// Submit a partial update of the signed-in user's profile
    EditProfile(UserPatch),
    /// Profile update confirmed; carries the fields that changed
    EditProfileSuccess(UserPatch),
    /// Profile update failed
    EditProfileFailure { error: String },

    /// Fetch the signed-in user's profile
    UserProfile,
    /// Profile fetched
    UserProfileSuccess(User),
    /// Profile fetch failed
    UserProfileFailure { error: String },

    // User directory (admin)
    /// Fetch every user account
    AllUsers,
    /// Directory fetched; stored verbatim
    AllUsersSuccess(Vec<User>),
    /// Directory fetch failed
    AllUsersFailure { error: String },

    /// Submit a partial update of another user's account
    EditOtherUser { user_id: String, data: UserPatch },
    /// Other-user update confirmed; the directory entry is replaced wholesale
    EditOtherUserSuccess { user: User, user_id: String },
    /// Other-user update failed
    EditOtherUserFailure { error: String },

    /// Delete a user account
    DeleteUser { user_id: String },
    /// Account deleted; the directory entry is removed
    DeleteUserSuccess { user_id: String },
    /// Account deletion failed
    DeleteUserFailure { error: String },
}
