//! # Object-storage client for avatars and listing photos
//!
//! Uploads go straight from the browser to the storage service, never through
//! the listings API. An upload is a single `POST` of the raw bytes to
//! `{url}/storage/v1/object/{bucket}/{path}`; the resulting public URL is
//! derived locally as `{url}/storage/v1/object/public/{bucket}/{path}`.
//!
//! ## Object naming
//!
//! | Kind | Path |
//! |------|------|
//! | Avatar | `{millis}_{file name}` |
//! | Listing photo | `{listings_prefix}/{millis}-{file name}` |
//!
//! ## Batches
//!
//! [`upload_all`] dispatches every file of a selection at once and waits for
//! all of them. Failed uploads are logged and dropped; the successful URLs come
//! back in selection order. There is no retry.

use std::future::Future;

use futures::future::join_all;
use serde_json::Value;

use store::config::StorageConfig;
use store::SelectedFile;

use crate::ApiError;

/// Anything that can turn a picked image into a public URL.
pub trait Uploader {
    fn store_image(&self, file: &SelectedFile) -> impl Future<Output = Result<String, ApiError>>;
}

#[derive(Clone, Debug)]
pub struct StorageClient {
    http: reqwest::Client,
    config: StorageConfig,
}

impl StorageClient {
    pub fn new(config: &StorageConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config: config.clone(),
        }
    }

    pub fn object_url(&self, path: &str) -> String {
        format!(
            "{}/storage/v1/object/{}/{}",
            self.config.url, self.config.bucket, path
        )
    }

    pub fn public_url(&self, path: &str) -> String {
        format!(
            "{}/storage/v1/object/public/{}/{}",
            self.config.url, self.config.bucket, path
        )
    }

    pub fn listing_object_path(&self, millis: u64, file_name: &str) -> String {
        format!(
            "{}/{}-{}",
            self.config.listings_prefix,
            millis,
            sanitize_file_name(file_name)
        )
    }

    pub fn avatar_object_path(&self, millis: u64, file_name: &str) -> String {
        format!("{}_{}", millis, sanitize_file_name(file_name))
    }

    /// Store raw bytes at `path` in the configured bucket.
    pub async fn upload(
        &self,
        path: &str,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> Result<(), ApiError> {
        if !self.config.is_configured() {
            return Err(ApiError::NotConfigured("Image storage"));
        }

        let response = self
            .http
            .post(self.object_url(path))
            .bearer_auth(&self.config.anon_key)
            .header("apikey", &self.config.anon_key)
            .header("x-upsert", "false")
            .header(reqwest::header::CONTENT_TYPE, content_type)
            .body(bytes)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        let body = response.text().await.unwrap_or_default();
        Err(ApiError::Storage(storage_error_message(status.as_u16(), &body)))
    }

    /// Upload a profile picture and return its public URL.
    pub async fn upload_avatar(&self, file: &SelectedFile) -> Result<String, ApiError> {
        let path = self.avatar_object_path(now_millis(), &file.name);
        self.upload(&path, file.bytes.clone(), &file.content_type)
            .await?;
        Ok(self.public_url(&path))
    }
}

impl Uploader for StorageClient {
    async fn store_image(&self, file: &SelectedFile) -> Result<String, ApiError> {
        let path = self.listing_object_path(now_millis(), &file.name);
        self.upload(&path, file.bytes.clone(), &file.content_type)
            .await?;
        Ok(self.public_url(&path))
    }
}

/// Result of a batch upload.
#[derive(Debug, Default, PartialEq)]
pub struct UploadOutcome {
    pub urls: Vec<String>,
    pub failed: usize,
}

impl UploadOutcome {
    pub fn all_failed(&self) -> bool {
        self.urls.is_empty() && self.failed > 0
    }
}

/// Upload every file concurrently, keeping the URLs that succeeded.
pub async fn upload_all<U: Uploader>(uploader: &U, files: &[SelectedFile]) -> UploadOutcome {
    let results = join_all(files.iter().map(|file| uploader.store_image(file))).await;

    let mut outcome = UploadOutcome::default();
    for (file, result) in files.iter().zip(results) {
        match result {
            Ok(url) => outcome.urls.push(url),
            Err(e) => {
                tracing::error!("Upload of {} failed: {}", file.name, e);
                outcome.failed += 1;
            }
        }
    }
    tracing::info!(
        "Uploaded {} of {} images",
        outcome.urls.len(),
        files.len()
    );
    outcome
}

/// Keep object keys URL-safe: anything outside `[A-Za-z0-9._-]` becomes `_`.
pub fn sanitize_file_name(name: &str) -> String {
    let cleaned: String = name
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_') {
                c
            } else {
                '_'
            }
        })
        .collect();
    if cleaned.is_empty() {
        "image".to_string()
    } else {
        cleaned
    }
}

fn storage_error_message(status: u16, body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|v| {
            v.get("message")
                .or_else(|| v.get("error"))
                .and_then(Value::as_str)
                .map(str::to_string)
        })
        .unwrap_or_else(|| format!("Upload failed ({status})"))
}

pub fn now_millis() -> u64 {
    #[cfg(target_arch = "wasm32")]
    {
        js_sys::Date::now() as u64
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use store::EstateConfig;

    fn client() -> StorageClient {
        let config = EstateConfig::default().with_storage("https://abc.supabase.co", "anon");
        StorageClient::new(&config.storage)
    }

    fn file(name: &str) -> SelectedFile {
        SelectedFile {
            name: name.to_string(),
            content_type: "image/png".to_string(),
            bytes: vec![1, 2, 3],
        }
    }

    /// Succeeds for every file except those whose name starts with "bad".
    struct FlakyUploader;

    impl Uploader for FlakyUploader {
        async fn store_image(&self, file: &SelectedFile) -> Result<String, ApiError> {
            if file.name.starts_with("bad") {
                Err(ApiError::Storage("Upload failed".into()))
            } else {
                Ok(format!("https://cdn/{}", file.name))
            }
        }
    }

    #[test]
    fn test_object_and_public_urls() {
        let storage = client();
        let path = storage.listing_object_path(1700000000000, "front door.jpg");
        assert_eq!(path, "listings/1700000000000-front_door.jpg");
        assert_eq!(
            storage.object_url(&path),
            "https://abc.supabase.co/storage/v1/object/profile/listings/1700000000000-front_door.jpg"
        );
        assert_eq!(
            storage.public_url(&path),
            "https://abc.supabase.co/storage/v1/object/public/profile/listings/1700000000000-front_door.jpg"
        );
        assert_eq!(storage.avatar_object_path(5, "me.png"), "5_me.png");
    }

    #[test]
    fn test_sanitize_file_name() {
        assert_eq!(sanitize_file_name("Living Room (1).JPG"), "Living_Room__1_.JPG");
        assert_eq!(sanitize_file_name(""), "image");
    }

    #[test]
    fn test_storage_error_message() {
        assert_eq!(
            storage_error_message(400, r#"{"statusCode":"409","error":"Duplicate","message":"The resource already exists"}"#),
            "The resource already exists"
        );
        assert_eq!(storage_error_message(500, "oops"), "Upload failed (500)");
    }

    #[tokio::test]
    async fn test_upload_all_drops_failures_and_keeps_order() {
        let files = vec![file("a.png"), file("bad.png"), file("c.png")];
        let outcome = upload_all(&FlakyUploader, &files).await;
        assert_eq!(
            outcome.urls,
            vec!["https://cdn/a.png".to_string(), "https://cdn/c.png".to_string()]
        );
        assert_eq!(outcome.failed, 1);
        assert!(!outcome.all_failed());
    }

    #[tokio::test]
    async fn test_upload_all_every_file_failing() {
        let outcome = upload_all(&FlakyUploader, &[file("bad1.png"), file("bad2.png")]).await;
        assert!(outcome.urls.is_empty());
        assert!(outcome.all_failed());
    }

    #[tokio::test]
    async fn test_upload_without_configuration() {
        let storage = StorageClient::new(&StorageConfig {
            url: String::new(),
            anon_key: String::new(),
            bucket: "profile".into(),
            listings_prefix: "listings".into(),
        });
        let err = storage.store_image(&file("a.png")).await.unwrap_err();
        assert!(matches!(err, ApiError::NotConfigured(_)));
        assert_eq!(err.to_string(), "Image storage is not configured");
    }
}
