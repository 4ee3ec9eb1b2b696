//! # Client configuration: `estate.toml`
//!
//! Where the client finds the listings API and the object-storage service.
//!
//! ## Structure
//!
//! ```toml
//! [api]
//! base_url = "https://mern-estate-backend-pied.vercel.app"
//!
//! [storage]
//! url = "https://xyz.supabase.co"
//! anon_key = "..."
//! bucket = "profile"
//! listings_prefix = "listings"
//! ```
//!
//! ## Sources
//!
//! | Source | When |
//! |--------|------|
//! | [`EstateConfig::default`] | Always. Baked-in defaults, overridden by the `ESTATE_API_URL`, `ESTATE_STORAGE_URL` and `ESTATE_STORAGE_KEY` variables present at build time. |
//! | [`EstateConfig::from_toml`] | Explicit config file contents. Missing sections take the defaults. |
//! | [`EstateConfig::from_env`] | Native builds only: the same variables read at runtime (`.env` honoured via `dotenvy`). |

use serde::{Deserialize, Serialize};

const DEFAULT_API_BASE: &str = "https://mern-estate-backend-pied.vercel.app";
const DEFAULT_BUCKET: &str = "profile";
const DEFAULT_LISTINGS_PREFIX: &str = "listings";

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct EstateConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub storage: StorageConfig,
}

/// Listings/users/auth REST API location.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_api_base")]
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_api_base(),
        }
    }
}

/// Object-storage service used for avatars and listing photos.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Project URL, e.g. `https://xyz.supabase.co`. Empty disables uploads.
    #[serde(default = "default_storage_url")]
    pub url: String,
    #[serde(default = "default_storage_key")]
    pub anon_key: String,
    #[serde(default = "default_bucket")]
    pub bucket: String,
    /// Folder inside the bucket that holds listing photos.
    #[serde(default = "default_listings_prefix")]
    pub listings_prefix: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            url: default_storage_url(),
            anon_key: default_storage_key(),
            bucket: default_bucket(),
            listings_prefix: default_listings_prefix(),
        }
    }
}

impl StorageConfig {
    pub fn is_configured(&self) -> bool {
        !self.url.is_empty() && !self.anon_key.is_empty()
    }
}

fn default_api_base() -> String {
    option_env!("ESTATE_API_URL")
        .unwrap_or(DEFAULT_API_BASE)
        .trim_end_matches('/')
        .to_string()
}

fn default_storage_url() -> String {
    option_env!("ESTATE_STORAGE_URL")
        .unwrap_or_default()
        .trim_end_matches('/')
        .to_string()
}

fn default_storage_key() -> String {
    option_env!("ESTATE_STORAGE_KEY").unwrap_or_default().to_string()
}

fn default_bucket() -> String {
    DEFAULT_BUCKET.to_string()
}

fn default_listings_prefix() -> String {
    DEFAULT_LISTINGS_PREFIX.to_string()
}

impl EstateConfig {
    /// Builder method to point at a different API host.
    pub fn with_api_base(mut self, base_url: impl Into<String>) -> Self {
        self.api.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Builder method to configure object storage.
    pub fn with_storage(mut self, url: impl Into<String>, anon_key: impl Into<String>) -> Self {
        self.storage.url = url.into().trim_end_matches('/').to_string();
        self.storage.anon_key = anon_key.into();
        self
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Defaults overridden by `ESTATE_*` variables from the process environment.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mut config = Self::default();
        if let Ok(base) = std::env::var("ESTATE_API_URL") {
            config = config.with_api_base(base);
        }
        if let Ok(url) = std::env::var("ESTATE_STORAGE_URL") {
            let key = std::env::var("ESTATE_STORAGE_KEY").unwrap_or_default();
            config = config.with_storage(url, key);
        }
        if let Ok(bucket) = std::env::var("ESTATE_STORAGE_BUCKET") {
            config.storage.bucket = bucket;
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_is_default() {
        let config = EstateConfig::from_toml("").unwrap();
        assert_eq!(config, EstateConfig::default());
        assert_eq!(config.storage.bucket, "profile");
        assert_eq!(config.storage.listings_prefix, "listings");
    }

    #[test]
    fn test_partial_toml() {
        let config = EstateConfig::from_toml(
            r#"
            [storage]
            url = "https://abc.supabase.co"
            anon_key = "k"
            "#,
        )
        .unwrap();
        assert!(config.storage.is_configured());
        assert_eq!(config.storage.bucket, "profile");
        assert_eq!(config.api, ApiConfig::default());
    }

    #[test]
    fn test_toml_roundtrip() {
        let config = EstateConfig::default()
            .with_api_base("http://localhost:3000/")
            .with_storage("https://abc.supabase.co/", "anon");
        assert_eq!(config.api.base_url, "http://localhost:3000");
        assert_eq!(config.storage.url, "https://abc.supabase.co");

        let text = config.to_toml().unwrap();
        assert_eq!(EstateConfig::from_toml(&text).unwrap(), config);
    }
}
