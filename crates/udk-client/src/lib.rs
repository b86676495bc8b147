//! HTTP access layer to the remote user collection
//!
//! [`UsersClient`] wraps the five operations of the fixture API. Every call is
//! a single round-trip: no retry, no timeout policy, no idempotency key. Any
//! non-success outcome maps onto the closed [`ClientError`] taxonomy.

pub mod error;
#[cfg(feature = "fixture")]
pub mod fixture;

use udk_core::{CreateReceipt, User, UserDraft, UserId};

pub use error::ClientError;
// Callers match on `ClientError::Unexpected` without depending on reqwest.
pub use reqwest::StatusCode;

/// Client for the remote user collection endpoint
#[derive(Debug, Clone)]
pub struct UsersClient {
    http: reqwest::Client,
    base_url: String,
}

impl UsersClient {
    /// Create a client against a base URL such as
    /// `https://jsonplaceholder.typicode.com`. A trailing slash is tolerated.
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            http: reqwest::Client::new(),
            base_url,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Fetch the full collection. `GET /users`
    pub async fn list(&self) -> Result<Vec<User>, ClientError> {
        tracing::debug!(base_url = %self.base_url, "fetching user collection");
        let response = self.http.get(self.url("/users")).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::Unexpected(status));
        }
        Ok(response.json().await?)
    }

    /// Fetch one record by identifier. `GET /users/{id}`
    pub async fn get(&self, id: UserId) -> Result<User, ClientError> {
        let response = self
            .http
            .get(self.url(&format!("/users/{id}")))
            .send()
            .await?;

        match response.status() {
            StatusCode::NOT_FOUND => Err(ClientError::NotFound(id)),
            status if !status.is_success() => Err(ClientError::Unexpected(status)),
            _ => Ok(response.json().await?),
        }
    }

    /// Submit a new record. `POST /users`
    ///
    /// Returns the remote-assigned identifier and username; the fixture
    /// service may omit either, which the store reducer compensates for.
    pub async fn create(&self, draft: &UserDraft) -> Result<CreateReceipt, ClientError> {
        let response = self
            .http
            .post(self.url("/users"))
            .json(draft)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::Unexpected(status));
        }
        Ok(response.json().await?)
    }

    /// Replace an existing record. `PUT /users/{id}`
    pub async fn update(&self, id: UserId, draft: &UserDraft) -> Result<User, ClientError> {
        let response = self
            .http
            .put(self.url(&format!("/users/{id}")))
            .json(draft)
            .send()
            .await?;

        match response.status() {
            StatusCode::NOT_FOUND => Err(ClientError::NotFound(id)),
            status if !status.is_success() => Err(ClientError::Unexpected(status)),
            _ => Ok(response.json().await?),
        }
    }

    /// Remove a record. `DELETE /users/{id}`
    pub async fn delete(&self, id: UserId) -> Result<(), ClientError> {
        let response = self
            .http
            .delete(self.url(&format!("/users/{id}")))
            .send()
            .await?;

        match response.status() {
            StatusCode::NOT_FOUND => Err(ClientError::NotFound(id)),
            status if !status.is_success() => Err(ClientError::Unexpected(status)),
            _ => Ok(()),
        }
    }
}
