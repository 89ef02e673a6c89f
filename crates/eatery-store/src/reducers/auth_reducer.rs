//! Auth Reducer
//!
//! Handles state updates for authentication and the admin user directory.
//! Collections are only touched by success actions; a failure records its
//! message and clears the operation's busy flag, nothing else.

use crate::actions::AuthAction;
use crate::state::AuthState;

/// Reduce authentication actions
pub fn reduce_auth(mut state: AuthState, action: &AuthAction) -> AuthState {
    match action {
        AuthAction::Signup(data) => {
            log::debug!("Signing up {}", data.email);
            state.loading = true;
        }

        AuthAction::SignupSuccess(user) => {
            // A fresh account is not a session; the user signs in separately
            // and only AuthSuccess populates `user`.
            log::info!("Account created for {}", user.email);
            state.loading = false;
        }

        AuthAction::SignupFailure { error } => {
            state.error = error.clone();
            state.loading = false;
        }

        AuthAction::Login(credentials) => {
            log::debug!("Signing in {}", credentials.email);
            state.loading = true;
        }

        AuthAction::AuthSuccess(user) => {
            log::info!("Authenticated as {}", user.email);
            state.user = Some(user.clone());
            state.loading = false;
        }

        AuthAction::Logout => {
            log::info!("Signed out");
            state.user = None;
            state.loading = false;
            state.error.clear();
        }

        AuthAction::EditProfile(_) => {
            state.loading = true;
        }

        AuthAction::EditProfileSuccess(patch) => {
            // Key-wise merge: only the fields the patch carries change.
            match state.user.as_mut() {
                Some(user) => patch.apply_to(user),
                None => log::warn!("Profile edit confirmed with no user signed in"),
            }
            state.loading = false;
        }

        AuthAction::EditProfileFailure { error } => {
            state.error = error.clone();
            state.loading = false;
        }

        AuthAction::UserProfile => {
            state.loading = true;
        }

        AuthAction::UserProfileSuccess(user) => {
            state.user = Some(user.clone());
            state.loading = false;
        }

        AuthAction::UserProfileFailure { error } => {
            state.error = error.clone();
            state.loading = false;
        }

        AuthAction::AllUsers => {
            state.is_fetching_users = true;
        }

        AuthAction::AllUsersSuccess(users) => {
            log::debug!("User directory holds {} accounts", users.len());
            state.all_users = users.clone();
            state.is_fetching_users = false;
        }

        AuthAction::AllUsersFailure { error } => {
            state.error = error.clone();
            state.is_fetching_users = false;
        }

        AuthAction::EditOtherUser { user_id, .. } => {
            log::debug!("Editing account {}", user_id);
            state.loading = true;
        }

        AuthAction::EditOtherUserSuccess { user, user_id } => {
            // Wholesale replacement of the directory entry, unlike the
            // self-edit merge above.
            if let Some(entry) = state.all_users.iter_mut().find(|u| u.id == *user_id) {
                *entry = user.clone();
            } else {
                log::warn!("Account {} not present in the directory", user_id);
            }
            state.loading = false;
        }

        AuthAction::EditOtherUserFailure { error } => {
            state.error = error.clone();
            state.loading = false;
        }

        AuthAction::DeleteUser { user_id } => {
            log::debug!("Deleting account {}", user_id);
            state.deleting_user = true;
        }

        AuthAction::DeleteUserSuccess { user_id } => {
            state.all_users.retain(|u| u.id != *user_id);
            state.deleting_user = false;
        }

        AuthAction::DeleteUserFailure { error } => {
            state.error = error.clone();
            state.deleting_user = false;
        }
    }

    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_fixtures::sample_user;
    use eatery_client::{Credentials, UserPatch};

    fn credentials() -> Credentials {
        Credentials {
            email: "ada@example.com".to_string(),
            password: "pw".to_string(),
        }
    }

    #[test]
    fn test_signup_sets_loading() {
        let state = reduce_auth(
            AuthState::default(),
            &AuthAction::Signup(eatery_client::SignupData {
                name: "Ada".to_string(),
                email: "ada@example.com".to_string(),
                password: "pw".to_string(),
                phone: None,
                role: None,
            }),
        );
        assert!(state.loading);
    }

    #[test]
    fn test_signup_success_does_not_authenticate() {
        let mut state = AuthState::default();
        state.loading = true;
        let state = reduce_auth(state, &AuthAction::SignupSuccess(sample_user("u1")));
        assert!(state.user.is_none());
        assert!(!state.loading);
    }

    #[test]
    fn test_auth_success_populates_user() {
        let state = reduce_auth(AuthState::default(), &AuthAction::Login(credentials()));
        assert!(state.loading);

        let state = reduce_auth(state, &AuthAction::AuthSuccess(sample_user("u1")));
        assert_eq!(state.user.as_ref().map(|u| u.id.as_str()), Some("u1"));
        assert!(!state.loading);
    }

    #[test]
    fn test_logout_resets_everything() {
        let mut state = AuthState::default();
        state.user = Some(sample_user("u1"));
        state.loading = true;
        state.error = "old failure".to_string();

        let state = reduce_auth(state, &AuthAction::Logout);
        assert!(state.user.is_none());
        assert!(!state.loading);
        assert!(state.error.is_empty());
    }

    #[test]
    fn test_edit_profile_success_merges_not_replaces() {
        let mut state = AuthState::default();
        state.user = Some(sample_user("u1"));

        let patch = UserPatch {
            phone: Some("123".to_string()),
            ..UserPatch::default()
        };
        let state = reduce_auth(state, &AuthAction::EditProfileSuccess(patch));

        let user = state.user.expect("user should survive the merge");
        assert_eq!(user.phone.as_deref(), Some("123"));
        assert_eq!(user.name, "user-u1"); // untouched field
        assert!(!state.loading);
    }

    #[test]
    fn test_edit_profile_success_without_user_is_noop() {
        let state = reduce_auth(
            AuthState::default(),
            &AuthAction::EditProfileSuccess(UserPatch::default()),
        );
        assert!(state.user.is_none());
        assert!(!state.loading);
    }

    #[test]
    fn test_edit_other_user_replaces_wholesale() {
        let mut state = AuthState::default();
        let mut replacement = sample_user("u2");
        replacement.name = "renamed".to_string();
        replacement.phone = None;
        state.all_users = vec![sample_user("u1"), sample_user("u2")];

        let state = reduce_auth(
            state,
            &AuthAction::EditOtherUserSuccess {
                user: replacement.clone(),
                user_id: "u2".to_string(),
            },
        );

        assert_eq!(state.all_users[0], sample_user("u1"));
        assert_eq!(state.all_users[1], replacement);
        // Replacement means the old phone is gone, not merged over.
        assert!(state.all_users[1].phone.is_none());
    }

    #[test]
    fn test_edit_other_user_missing_id_is_noop() {
        let mut state = AuthState::default();
        state.all_users = vec![sample_user("u1")];
        let before = state.all_users.clone();

        let state = reduce_auth(
            state,
            &AuthAction::EditOtherUserSuccess {
                user: sample_user("u9"),
                user_id: "u9".to_string(),
            },
        );
        assert_eq!(state.all_users, before);
    }

    #[test]
    fn test_delete_user_removes_entry() {
        let mut state = AuthState::default();
        state.all_users = vec![sample_user("u1"), sample_user("u2")];
        state.deleting_user = true;

        let state = reduce_auth(
            state,
            &AuthAction::DeleteUserSuccess {
                user_id: "u1".to_string(),
            },
        );
        assert_eq!(state.all_users.len(), 1);
        assert_eq!(state.all_users[0].id, "u2");
        assert!(!state.deleting_user);
    }

    #[test]
    fn test_all_users_success_stores_verbatim() {
        let mut state = AuthState::default();
        state.is_fetching_users = true;
        let directory = vec![sample_user("u1"), sample_user("u2")];

        let state = reduce_auth(state, &AuthAction::AllUsersSuccess(directory.clone()));
        assert_eq!(state.all_users, directory);
        assert!(!state.is_fetching_users);
    }

    #[test]
    fn test_failures_record_message_and_clear_flag() {
        let mut state = AuthState::default();
        state.loading = true;
        let state = reduce_auth(
            state,
            &AuthAction::SignupFailure {
                error: "email taken".to_string(),
            },
        );
        assert_eq!(state.error, "email taken");
        assert!(!state.loading);

        let mut state = AuthState::default();
        state.deleting_user = true;
        state.all_users = vec![sample_user("u1")];
        let state = reduce_auth(
            state,
            &AuthAction::DeleteUserFailure {
                error: "forbidden".to_string(),
            },
        );
        assert_eq!(state.error, "forbidden");
        assert!(!state.deleting_user);
        // Failure never touches the directory.
        assert_eq!(state.all_users.len(), 1);
    }

    #[test]
    fn test_last_error_wins() {
        let state = reduce_auth(
            AuthState::default(),
            &AuthAction::SignupFailure {
                error: "first".to_string(),
            },
        );
        let state = reduce_auth(
            state,
            &AuthAction::EditProfileFailure {
                error: "second".to_string(),
            },
        );
        assert_eq!(state.error, "second");
    }
}
