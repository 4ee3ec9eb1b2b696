//! # `localStorage` session store: browser-side persistence
//!
//! [`LocalStore`] keeps the signed-in user as a JSON string under
//! [`SESSION_KEY`] in the window's `localStorage`. It is a zero-size handle
//! that looks the storage object up on every call.
//!
//! All methods swallow errors (private browsing, storage disabled, quota):
//! the UI then simply behaves as signed out.

use crate::models::User;
use crate::session::{decode_user, encode_user, SessionStore, SESSION_KEY};

#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStore;

impl LocalStore {
    pub fn new() -> Self {
        Self
    }

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

impl SessionStore for LocalStore {
    fn load(&self) -> Option<User> {
        let raw = Self::storage()?.get_item(SESSION_KEY).ok().flatten()?;
        decode_user(&raw)
    }

    fn save(&self, user: &User) {
        if let Some(storage) = Self::storage() {
            if storage.set_item(SESSION_KEY, &encode_user(user)).is_err() {
                tracing::warn!("Could not persist session");
            }
        }
    }

    fn clear(&self) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(SESSION_KEY);
        }
    }
}
