//! Session context and hooks for the UI.

use api::Services;
use dioxus::prelude::*;
use store::{SessionStore, User};

use crate::session::{load_config, make_session_store};

/// Session state shared by every page.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AuthState {
    pub user: Option<User>,
}

impl AuthState {
    pub fn is_signed_in(&self) -> bool {
        self.user.is_some()
    }

    pub fn user_id(&self) -> Option<String> {
        self.user.as_ref().map(|u| u.id.clone())
    }
}

/// Get the current authentication state.
/// Returns a signal that updates when the user signs in or out.
pub fn use_auth() -> Signal<AuthState> {
    use_context::<Signal<AuthState>>()
}

/// The remote clients configured for this app.
pub fn use_services() -> Services {
    use_context::<Services>()
}

/// Store the signed-in user in the session signal and persist it.
pub fn remember_user(mut auth: Signal<AuthState>, user: User) {
    make_session_store().save(&user);
    tracing::info!("Signed in as {}", user.username);
    auth.set(AuthState { user: Some(user) });
}

/// Drop the session, both in memory and in persistent storage.
pub fn forget_user(mut auth: Signal<AuthState>) {
    make_session_store().clear();
    auth.set(AuthState::default());
}

/// Provider component that restores the persisted session and exposes
/// [`AuthState`] and [`Services`] to the tree below it.
#[component]
pub fn AuthProvider(children: Element) -> Element {
    let auth_state = use_signal(|| AuthState {
        user: make_session_store().load(),
    });
    use_context_provider(|| auth_state);
    use_context_provider(|| Services::new(&load_config()));

    rsx! {
        {children}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_state_accessors() {
        let state = AuthState::default();
        assert!(!state.is_signed_in());
        assert_eq!(state.user_id(), None);

        let state = AuthState {
            user: Some(User {
                id: "u1".into(),
                username: "ann".into(),
                ..Default::default()
            }),
        };
        assert!(state.is_signed_in());
        assert_eq!(state.user_id().as_deref(), Some("u1"));
    }

    #[test]
    fn test_native_session_store_is_shared() {
        let user = User {
            id: "u9".into(),
            ..Default::default()
        };
        make_session_store().save(&user);
        assert_eq!(make_session_store().load(), Some(user));
        make_session_store().clear();
        assert_eq!(make_session_store().load(), None);
    }
}
