//! HTTP binding of the Quercle API

use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use url::Url;

use super::{FetchResponse, QuercleClient, SearchOptions, SearchResponse};
use crate::config::{QuercleConfig, ResolvedConfig, resolve_config};
use crate::{Error, Result};

const API_KEY_HEADER: &str = "X-API-Key";
const USER_AGENT: &str = concat!("quercle-tools/", env!("CARGO_PKG_VERSION"));

/// Search request body
#[derive(Debug, Serialize)]
struct SearchRequest<'a> {
    query: &'a str,
    #[serde(flatten)]
    options: &'a SearchOptions,
}

/// Fetch request body
#[derive(Debug, Serialize)]
struct FetchRequest<'a> {
    url: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    prompt: Option<&'a str>,
}

/// Error body returned on non-success responses
#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    detail: Option<String>,
    error: Option<String>,
    message: Option<String>,
}

/// Quercle API client over HTTP
///
/// A missing API key is not an error at construction time; it is reported
/// by the first request.
pub struct HttpClient {
    api_key: Option<SecretString>,
    base_url: String,
    timeout: Duration,
    client: reqwest::Client,
}

impl fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpClient")
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .field("has_api_key", &self.api_key.is_some())
            .finish_non_exhaustive()
    }
}

impl HttpClient {
    /// Create a client from resolved configuration
    #[must_use]
    pub fn new(config: ResolvedConfig) -> Self {
        Self {
            api_key: config.api_key,
            base_url: config.base_url,
            timeout: config.timeout,
            client: reqwest::Client::new(),
        }
    }

    /// Resolve `config` against the environment and create a client
    #[must_use]
    pub fn from_config(config: Option<QuercleConfig>) -> Self {
        Self::new(resolve_config(config))
    }

    /// API base URL this client talks to
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Join an API path onto the base URL
    fn endpoint(&self, path: &str) -> Result<Url> {
        let base = format!("{}/", self.base_url.trim_end_matches('/'));
        Url::parse(&base)
            .and_then(|u| u.join(path))
            .map_err(|e| Error::Config(format!("invalid base URL {}: {e}", self.base_url)))
    }

    /// POST a JSON body and decode the JSON response
    async fn post<B, R>(&self, path: &str, body: &B) -> Result<R>
    where
        B: Serialize + Sync,
        R: DeserializeOwned,
    {
        let api_key = self.api_key.as_ref().ok_or(Error::MissingApiKey)?;
        let url = self.endpoint(path)?;

        tracing::debug!(%url, "quercle request");

        let response = self
            .client
            .post(url)
            .header(API_KEY_HEADER, api_key.expose_secret())
            .header(reqwest::header::USER_AGENT, USER_AGENT)
            .timeout(self.timeout)
            .json(body)
            .send()
            .await?;

        let status = response.status();
        tracing::debug!(status = status.as_u16(), path, "quercle response");

        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(Error::Api {
                status: status.as_u16(),
                message: error_message(&text, status),
            });
        }

        Ok(response.json().await?)
    }
}

/// Pull a readable message out of an error response body
fn error_message(body: &str, status: reqwest::StatusCode) -> String {
    let parsed: ErrorBody = serde_json::from_str(body).unwrap_or_default();
    parsed
        .detail
        .or(parsed.error)
        .or(parsed.message)
        .or_else(|| {
            let trimmed = body.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        })
        .unwrap_or_else(|| {
            status
                .canonical_reason()
                .unwrap_or("request failed")
                .to_string()
        })
}

#[async_trait]
impl QuercleClient for HttpClient {
    async fn search(&self, query: &str, options: &SearchOptions) -> Result<String> {
        let request = SearchRequest { query, options };
        let response: SearchResponse = self.post("v1/search", &request).await?;
        Ok(response.result)
    }

    async fn fetch(&self, url: &str, prompt: Option<&str>) -> Result<String> {
        let request = FetchRequest { url, prompt };
        let response: FetchResponse = self.post("v1/fetch", &request).await?;
        Ok(response.result)
    }
}
