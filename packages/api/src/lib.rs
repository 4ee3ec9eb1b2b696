//! # API crate: remote collaborators of the Estate client
//!
//! Everything the pages need from the outside world goes through this crate.
//! It owns no UI and no state beyond its HTTP clients.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`client`] | [`ApiClient`]: one method per listings/users/auth REST endpoint |
//! | [`storage`] | [`StorageClient`]: image uploads to object storage, public URLs, concurrent batch uploads |
//! | [`reply`] | `success:false` branching and response decoding shared by all endpoints |
//! | [`error`] | [`ApiError`], whose `Display` is the user-facing message |
//!
//! [`Services`] bundles both clients built from one [`EstateConfig`] so the UI
//! can put a single value into context.

pub mod client;
pub mod error;
pub mod reply;
pub mod storage;

pub use client::ApiClient;
pub use error::ApiError;
pub use storage::{upload_all, StorageClient, UploadOutcome, Uploader};

pub use store::{EstateConfig, Listing, User};

/// Both remote clients, configured together.
#[derive(Clone, Debug)]
pub struct Services {
    pub api: ApiClient,
    pub storage: StorageClient,
}

impl Services {
    pub fn new(config: &EstateConfig) -> Self {
        Self {
            api: ApiClient::new(&config.api),
            storage: StorageClient::new(&config.storage),
        }
    }
}
