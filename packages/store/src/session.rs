//! # Session persistence
//!
//! The signed-in [`User`] is the only state shared between pages, and it has to
//! survive a page reload. [`SessionStore`] abstracts where it is kept:
//!
//! - [`crate::MemoryStore`]: process memory; tests and native builds.
//! - `LocalStore`: browser `localStorage` (wasm + `web` feature).
//!
//! Implementations never fail loudly: a missing or corrupt record loads as
//! `None`, which the UI treats as "signed out".

use crate::models::User;

/// Key under which the current user is stored.
pub const SESSION_KEY: &str = "estate.currentUser";

pub trait SessionStore {
    fn load(&self) -> Option<User>;
    fn save(&self, user: &User);
    fn clear(&self);
}

/// Decode a persisted session record, treating garbage as absent.
pub fn decode_user(raw: &str) -> Option<User> {
    match serde_json::from_str::<User>(raw) {
        Ok(user) if !user.id.is_empty() => Some(user),
        Ok(_) => None,
        Err(e) => {
            tracing::warn!("Discarding unreadable session: {}", e);
            None
        }
    }
}

pub fn encode_user(user: &User) -> String {
    // User holds only strings; serialisation cannot fail.
    serde_json::to_string(user).unwrap_or_default()
}
