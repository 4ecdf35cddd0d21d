//! Shared HTTP client underlying the per-family resource clients.
//!
//! Responsibilities end at request assembly and response decoding:
//! no retries, no caching, and no timeout beyond whatever the transport
//! itself enforces. Failures surface to the caller unrecovered.

use reqwest::{Method, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;

use crate::config::ClientConfig;
use crate::error::{ApiError, ApiResult};
use crate::session::Session;

/// HTTP client for the Aula API.
///
/// Attaches the session's bearer token to every request except the
/// explicitly public ones (login).
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    session: Arc<Session>,
}

impl ApiClient {
    pub fn new(config: &ClientConfig, session: Arc<Session>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            session,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn session(&self) -> &Arc<Session> {
        &self.session
    }

    fn request(&self, method: Method, path: &str, public: bool) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!(%method, %url, "API request");

        let mut req = self.http.request(method, &url);
        if !public {
            if let Some(token) = self.session.token() {
                req = req.bearer_auth(token);
            }
        }
        req
    }

    /// GET with typed query pairs. An empty slice produces no query
    /// string at all.
    pub async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&'static str, String)],
    ) -> ApiResult<T> {
        let mut req = self.request(Method::GET, path, false);
        if !query.is_empty() {
            req = req.query(query);
        }
        self.execute(req).await
    }

    pub async fn post<B, T>(&self, path: &str, body: &B) -> ApiResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.execute(self.request(Method::POST, path, false).json(body))
            .await
    }

    /// POST without a bearer header, for unauthenticated endpoints.
    pub async fn post_public<B, T>(&self, path: &str, body: &B) -> ApiResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.execute(self.request(Method::POST, path, true).json(body))
            .await
    }

    pub async fn patch<B, T>(&self, path: &str, body: &B) -> ApiResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.execute(self.request(Method::PATCH, path, false).json(body))
            .await
    }

    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        self.execute(self.request(Method::DELETE, path, false)).await
    }

    async fn execute<T: DeserializeOwned>(&self, req: RequestBuilder) -> ApiResult<T> {
        let response = req.send().await?;

        let status = response.status();
        let body = response.text().await.unwrap_or_default();

        if !status.is_success() {
            return Err(ApiError::Status {
                status,
                message: extract_message(&body),
            });
        }

        Ok(serde_json::from_str(&body)?)
    }
}

/// Pull a human-readable message out of an error body.
///
/// The server answers with `{"detail": ...}` or `{"error": ...}`; anything
/// else falls through as the raw body.
fn extract_message(body: &str) -> String {
    match serde_json::from_str::<serde_json::Value>(body) {
        Ok(value) => value
            .get("detail")
            .or_else(|| value.get("error"))
            .and_then(|v| v.as_str())
            .map(str::to_string)
            .unwrap_or_else(|| body.to_string()),
        Err(_) => body.to_string(),
    }
}
