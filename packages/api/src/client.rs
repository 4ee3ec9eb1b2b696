//! # REST client for the listings/users/auth API
//!
//! [`ApiClient`] is a thin, clonable wrapper around a [`reqwest::Client`] and
//! the configured base URL. Every method maps to exactly one backend endpoint
//! and returns the decoded payload or an [`ApiError`] whose `Display` is ready
//! to show in the page.
//!
//! | Area | Endpoints |
//! |------|-----------|
//! | Auth | `POST /api/auth/signup`, `POST /api/auth/signin`, `POST /api/auth/google`, `GET /api/auth/signout` |
//! | Users | `POST /api/user/update/:id`, `DELETE /api/user/delete/:id`, `GET /api/user/listings/:id`, `GET /api/user/:id` |
//! | Listings | `POST /api/listing/create`, `POST /api/listing/update/:id`, `DELETE /api/listing/delete/:id`, `GET /api/listing/get/:id`, `GET /api/listing/get?...` |
//!
//! In the browser every request is sent with `credentials: include` so the
//! backend's session cookie travels with it.

use reqwest::{Method, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use store::config::ApiConfig;
use store::{
    Listing, ListingRequest, SearchQuery, SignInForm, SignUpForm, User, UserUpdate,
};

use crate::reply::{parse_reply, UserEnvelope};
use crate::ApiError;

#[derive(Clone, Debug)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

#[derive(Serialize)]
struct GoogleSignIn<'a> {
    name: &'a str,
    email: &'a str,
    photo: &'a str,
}

impl ApiClient {
    pub fn new(config: &ApiConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for an API path such as `/api/listing/get/42`.
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let builder = self.http.request(method, self.url(path));
        #[cfg(target_arch = "wasm32")]
        let builder = builder.fetch_credentials_include();
        builder
    }

    async fn send<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<T, ApiError> {
        let response = builder.send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;
        parse_reply(status, &body)
    }

    /// Request for an endpoint, without a body.
    fn build(&self, endpoint: &Endpoint<'_>) -> RequestBuilder {
        let (method, path) = endpoint.route();
        tracing::debug!("{} {}", method, path);
        self.request(method, &path)
    }

    async fn call<T: DeserializeOwned>(&self, endpoint: Endpoint<'_>) -> Result<T, ApiError> {
        self.send(self.build(&endpoint)).await
    }

    async fn call_with<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        endpoint: Endpoint<'_>,
        body: &B,
    ) -> Result<T, ApiError> {
        self.send(self.build(&endpoint).json(body)).await
    }

    // ---- auth ----

    /// Create an account. The backend answers with a confirmation string.
    pub async fn sign_up(&self, form: &SignUpForm) -> Result<(), ApiError> {
        let _: Value = self.call_with(Endpoint::SignUp, form).await?;
        Ok(())
    }

    pub async fn sign_in(&self, form: &SignInForm) -> Result<User, ApiError> {
        self.call_with(Endpoint::SignIn, form).await
    }

    /// Exchange an identity-provider profile for a session.
    pub async fn google_sign_in(
        &self,
        name: &str,
        email: &str,
        photo: &str,
    ) -> Result<User, ApiError> {
        self.call_with(Endpoint::GoogleSignIn, &GoogleSignIn { name, email, photo })
            .await
    }

    pub async fn sign_out(&self) -> Result<(), ApiError> {
        let _: Value = self.call(Endpoint::SignOut).await?;
        Ok(())
    }

    // ---- users ----

    pub async fn update_user(&self, id: &str, update: &UserUpdate) -> Result<User, ApiError> {
        let envelope: UserEnvelope = self.call_with(Endpoint::UpdateUser(id), update).await?;
        Ok(envelope.into_user())
    }

    pub async fn delete_user(&self, id: &str) -> Result<(), ApiError> {
        let _: Value = self.call(Endpoint::DeleteUser(id)).await?;
        Ok(())
    }

    pub async fn user_listings(&self, id: &str) -> Result<Vec<Listing>, ApiError> {
        self.call(Endpoint::UserListings(id)).await
    }

    /// Public profile of a listing's owner.
    pub async fn get_user(&self, id: &str) -> Result<User, ApiError> {
        self.call(Endpoint::GetUser(id)).await
    }

    // ---- listings ----

    pub async fn create_listing(&self, request: &ListingRequest) -> Result<Listing, ApiError> {
        let listing: Listing = self.call_with(Endpoint::CreateListing, request).await?;
        require_id(listing)
    }

    pub async fn update_listing(
        &self,
        id: &str,
        request: &ListingRequest,
    ) -> Result<Listing, ApiError> {
        let listing: Listing = self.call_with(Endpoint::UpdateListing(id), request).await?;
        require_id(listing)
    }

    pub async fn delete_listing(&self, id: &str) -> Result<(), ApiError> {
        let _: Value = self.call(Endpoint::DeleteListing(id)).await?;
        Ok(())
    }

    pub async fn get_listing(&self, id: &str) -> Result<Listing, ApiError> {
        self.call(Endpoint::GetListing(id)).await
    }

    pub async fn search_listings(&self, query: &SearchQuery) -> Result<Vec<Listing>, ApiError> {
        self.call(Endpoint::Search(query)).await
    }
}

/// One backend route. Ids are passed through as path segments.
#[derive(Debug, Clone, Copy)]
enum Endpoint<'a> {
    SignUp,
    SignIn,
    GoogleSignIn,
    SignOut,
    UpdateUser(&'a str),
    DeleteUser(&'a str),
    UserListings(&'a str),
    GetUser(&'a str),
    CreateListing,
    UpdateListing(&'a str),
    DeleteListing(&'a str),
    GetListing(&'a str),
    Search(&'a SearchQuery),
}

impl Endpoint<'_> {
    fn route(&self) -> (Method, String) {
        match self {
            Endpoint::SignUp => (Method::POST, "/api/auth/signup".into()),
            Endpoint::SignIn => (Method::POST, "/api/auth/signin".into()),
            Endpoint::GoogleSignIn => (Method::POST, "/api/auth/google".into()),
            Endpoint::SignOut => (Method::GET, "/api/auth/signout".into()),
            Endpoint::UpdateUser(id) => (Method::POST, format!("/api/user/update/{id}")),
            Endpoint::DeleteUser(id) => (Method::DELETE, format!("/api/user/delete/{id}")),
            Endpoint::UserListings(id) => (Method::GET, format!("/api/user/listings/{id}")),
            Endpoint::GetUser(id) => (Method::GET, format!("/api/user/{id}")),
            Endpoint::CreateListing => (Method::POST, "/api/listing/create".into()),
            Endpoint::UpdateListing(id) => (Method::POST, format!("/api/listing/update/{id}")),
            Endpoint::DeleteListing(id) => (Method::DELETE, format!("/api/listing/delete/{id}")),
            Endpoint::GetListing(id) => (Method::GET, format!("/api/listing/get/{id}")),
            Endpoint::Search(query) => (Method::GET, search_path(query)),
        }
    }
}

pub(crate) fn search_path(query: &SearchQuery) -> String {
    format!("/api/listing/get?{}", query.to_query_string())
}

fn require_id(listing: Listing) -> Result<Listing, ApiError> {
    if listing.id.is_empty() {
        Err(ApiError::MissingId)
    } else {
        Ok(listing)
    }
}
