//! Backend REST client.
//!
//! Provides async HTTP access to the three backend endpoints:
//! - Author search proxy (`GET /api/scholar`)
//! - Article persistence (`POST /db/save`)
//! - Stored article listing (`GET /db/articles`)
//!
//! GET requests go through retry middleware with exponential backoff. The
//! save request is sent exactly once so a transient failure cannot store an
//! article twice.

use std::time::Duration;

use anyhow::Context;
use reqwest::Client;
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use reqwest_retry::{RetryTransientMiddleware, policies::ExponentialBackoff};
use serde::Deserialize;
use url::Url;

use crate::config::{Config, api};
use crate::error::{ClientError, ClientResult};
use crate::models::{Article, AuthorInfo, StoredArticle};

/// Operations the view layer needs from the backend.
#[async_trait::async_trait]
pub trait Backend: Send + Sync {
    /// Look up an author and their articles.
    async fn fetch_author(&self, author_id: &str) -> ClientResult<AuthorInfo>;

    /// Persist one article. Returns the stored record (at least its id).
    async fn save_article(&self, article: &Article) -> ClientResult<StoredArticle>;

    /// List every stored article.
    async fn list_articles(&self) -> ClientResult<Vec<StoredArticle>>;
}

/// Error body shape shared by all endpoints.
#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    error: Option<String>,
}

/// reqwest-backed [`Backend`].
#[derive(Clone)]
pub struct BackendClient {
    /// HTTP client with retry middleware, for GET requests.
    client: ClientWithMiddleware,

    /// HTTP client without retries, for the save request.
    save_client: ClientWithMiddleware,

    /// Backend origin, always ending in `/`.
    base_url: Url,
}

impl BackendClient {
    /// Create a new client with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns error if the backend URL is invalid or HTTP client
    /// initialization fails.
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let mut base_url = Url::parse(&config.backend_url)
            .with_context(|| format!("invalid backend URL {:?}", config.backend_url))?;
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        let mut builder = Client::builder()
            .connect_timeout(config.connect_timeout)
            .pool_max_idle_per_host(api::MAX_KEEPALIVE)
            .pool_idle_timeout(api::KEEPALIVE_EXPIRY)
            .gzip(true);

        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }

        let http = builder.build()?;

        let retry_policy = ExponentialBackoff::builder()
            .retry_bounds(Duration::from_millis(500), Duration::from_secs(10))
            .build_with_max_retries(config.max_retries);

        let client = ClientBuilder::new(http.clone())
            .with(RetryTransientMiddleware::new_with_policy(retry_policy))
            .build();
        let save_client = ClientBuilder::new(http).build();

        Ok(Self { client, save_client, base_url })
    }

    /// Backend origin in use.
    #[must_use]
    pub fn base_url(&self) -> &str {
        self.base_url.as_str()
    }

    fn endpoint(&self, path: &str) -> ClientResult<Url> {
        self.base_url.join(path).map_err(ClientError::from)
    }

    /// Make a GET request.
    async fn get<T>(&self, url: Url, params: &[(&str, &str)], fallback: &str) -> ClientResult<T>
    where
        T: serde::de::DeserializeOwned,
    {
        tracing::debug!(url = %url, "GET");

        let mut request = self.client.get(url);
        if !params.is_empty() {
            request = request.query(params);
        }
        let response = request.send().await?;

        let response = Self::handle_response(response, fallback).await?;
        let text = response.text().await?;

        serde_json::from_str(&text).map_err(|e| {
            tracing::warn!(error = %e, "Backend returned a body that is not the expected JSON");
            ClientError::from(e)
        })
    }

    /// Turn a non-2xx response into [`ClientError::Api`].
    ///
    /// The message is the body's `error` field when present and non-empty,
    /// otherwise `"{fallback} Status: {code}"`.
    async fn handle_response(
        response: reqwest::Response,
        fallback: &str,
    ) -> ClientResult<reqwest::Response> {
        let status = response.status();

        if status.is_success() {
            return Ok(response);
        }

        let text = response.text().await.unwrap_or_default();
        let body: ErrorBody = serde_json::from_str(&text).unwrap_or_default();
        let message = body
            .error
            .filter(|e| !e.is_empty())
            .unwrap_or_else(|| format!("{fallback} Status: {}", status.as_u16()));

        tracing::warn!(status = status.as_u16(), %message, "Backend returned an error");
        Err(ClientError::api(status.as_u16(), message))
    }
}

#[async_trait::async_trait]
impl Backend for BackendClient {
    async fn fetch_author(&self, author_id: &str) -> ClientResult<AuthorInfo> {
        let url = self.endpoint(api::SCHOLAR_PATH)?;
        self.get(url, &[("authorId", author_id)], "HTTP error!").await
    }

    async fn save_article(&self, article: &Article) -> ClientResult<StoredArticle> {
        let url = self.endpoint(api::SAVE_PATH)?;
        let body = serde_json::to_string(article)?;

        tracing::debug!(url = %url, title = ?article.title, "POST");

        let response = self
            .save_client
            .post(url)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await?;

        let response = Self::handle_response(response, "Failed to save article.").await?;
        let text = response.text().await?;

        // The article is stored once the backend answers 2xx, so an
        // unreadable body does not turn the save into a failure.
        Ok(serde_json::from_str(&text).unwrap_or_else(|e| {
            tracing::warn!(error = %e, "Save succeeded but the response body was not a stored article");
            StoredArticle::default()
        }))
    }

    async fn list_articles(&self) -> ClientResult<Vec<StoredArticle>> {
        let url = self.endpoint(api::ARTICLES_PATH)?;
        self.get(url, &[], "Failed to fetch database content.").await
    }
}

impl std::fmt::Debug for BackendClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BackendClient").field("base_url", &self.base_url.as_str()).finish()
    }
}
