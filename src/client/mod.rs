//! Quercle client contract and its HTTP binding

mod http;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::Result;

pub use http::HttpClient;

/// Domain filters applied to a search
///
/// When both lists are given they are forwarded as-is; how they interact is
/// decided by the Quercle service.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchOptions {
    /// Only return results from these domains
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allowed_domains: Option<Vec<String>>,

    /// Never return results from these domains
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blocked_domains: Option<Vec<String>>,
}

/// Search endpoint response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResponse {
    /// Synthesized answer with citations
    pub result: String,
}

/// Fetch endpoint response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FetchResponse {
    /// Analyzed page content
    pub result: String,
}

/// Operations the tools delegate to
///
/// Implementations must be safe to share across concurrent tool calls.
#[async_trait]
pub trait QuercleClient: Send + Sync {
    /// Search the web and return a synthesized answer
    ///
    /// # Errors
    ///
    /// Returns error on missing credentials, transport failure or an upstream
    /// service error
    async fn search(&self, query: &str, options: &SearchOptions) -> Result<String>;

    /// Fetch a URL and return its content analyzed against `prompt`
    ///
    /// # Errors
    ///
    /// Returns error on missing credentials, transport failure or an upstream
    /// service error
    async fn fetch(&self, url: &str, prompt: Option<&str>) -> Result<String>;
}
