//! Web search tool
//!
//! Forwards a query and optional domain filters to the Quercle client and
//! returns the synthesized answer unchanged.

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::schema::{SEARCH_DESCRIPTION, SEARCH_SCHEMA};
use super::{InputSchema, Tool, decode_args};
use crate::Result;
use crate::client::{QuercleClient, SearchOptions};

/// Arguments for the search tool
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchInput {
    /// Search query
    pub query: String,
    /// Only include these domains
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allowed_domains: Option<Vec<String>>,
    /// Exclude these domains
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blocked_domains: Option<Vec<String>>,
}

impl SearchInput {
    /// Search input with no domain filters
    #[must_use]
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..Self::default()
        }
    }
}

/// Web search tool bound to one client
#[derive(Clone)]
pub struct SearchTool {
    client: Arc<dyn QuercleClient>,
}

impl fmt::Debug for SearchTool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SearchTool").finish_non_exhaustive()
    }
}

impl SearchTool {
    /// Tool name exposed to the model
    pub const NAME: &'static str = "quercle_search";

    /// Bind a search tool to `client`
    #[must_use]
    pub fn new(client: Arc<dyn QuercleClient>) -> Self {
        Self { client }
    }

    /// Client this tool delegates to
    #[must_use]
    pub const fn client(&self) -> &Arc<dyn QuercleClient> {
        &self.client
    }

    /// Run a search
    ///
    /// # Errors
    ///
    /// Returns the client's error unchanged
    pub async fn execute(&self, input: SearchInput) -> Result<String> {
        tracing::debug!(
            tool = Self::NAME,
            query = %input.query,
            allowed = input.allowed_domains.as_ref().map_or(0, Vec::len),
            blocked = input.blocked_domains.as_ref().map_or(0, Vec::len),
            "executing tool"
        );

        let options = SearchOptions {
            allowed_domains: input.allowed_domains,
            blocked_domains: input.blocked_domains,
        };

        self.client.search(&input.query, &options).await
    }
}

#[async_trait]
impl Tool for SearchTool {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn description(&self) -> &'static str {
        SEARCH_DESCRIPTION
    }

    fn input_schema(&self) -> &'static InputSchema {
        &SEARCH_SCHEMA
    }

    async fn call(&self, args: Value) -> Result<String> {
        let input = decode_args(Self::NAME, args)?;
        self.execute(input).await
    }
}
