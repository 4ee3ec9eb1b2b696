//! Shared session store and configuration constructors for all platforms.
//!
//! Returns a [`store::SessionStore`] backed by the appropriate storage:
//! - **Web** (WASM + `web` feature): `localStorage` via [`store::LocalStore`]
//! - **Native**: a process-wide [`store::MemoryStore`]

use store::EstateConfig;

/// Create the platform-appropriate session store.
pub fn make_session_store() -> impl store::SessionStore {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        store::LocalStore::new()
    }
    #[cfg(not(all(target_arch = "wasm32", feature = "web")))]
    {
        use std::sync::OnceLock;
        static SESSION: OnceLock<store::MemoryStore> = OnceLock::new();
        SESSION.get_or_init(store::MemoryStore::new).clone()
    }
}

/// Client configuration: build-time defaults, plus the process environment
/// on native targets.
pub fn load_config() -> EstateConfig {
    #[cfg(target_arch = "wasm32")]
    {
        EstateConfig::default()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        EstateConfig::from_env()
    }
}
