//! URL fetch tool

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::schema::{FETCH_DESCRIPTION, FETCH_SCHEMA};
use super::{InputSchema, Tool, decode_args};
use crate::Result;
use crate::client::QuercleClient;

/// Arguments for the fetch tool
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FetchInput {
    /// Page to fetch
    pub url: String,
    /// What to extract from the page
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prompt: Option<String>,
}

impl FetchInput {
    /// Fetch input with no prompt
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            prompt: None,
        }
    }

    /// Attach a prompt
    #[must_use]
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = Some(prompt.into());
        self
    }
}

/// URL fetch tool bound to one client
#[derive(Clone)]
pub struct FetchTool {
    client: Arc<dyn QuercleClient>,
}

impl fmt::Debug for FetchTool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FetchTool").finish_non_exhaustive()
    }
}

impl FetchTool {
    /// Tool name exposed to the model
    pub const NAME: &'static str = "quercle_fetch";

    /// Bind a fetch tool to `client`
    #[must_use]
    pub fn new(client: Arc<dyn QuercleClient>) -> Self {
        Self { client }
    }

    /// Client this tool delegates to
    #[must_use]
    pub const fn client(&self) -> &Arc<dyn QuercleClient> {
        &self.client
    }

    /// Fetch and analyze a page
    ///
    /// # Errors
    ///
    /// Returns the client's error unchanged
    pub async fn execute(&self, input: FetchInput) -> Result<String> {
        tracing::debug!(
            tool = Self::NAME,
            url = %input.url,
            has_prompt = input.prompt.is_some(),
            "executing tool"
        );

        self.client.fetch(&input.url, input.prompt.as_deref()).await
    }
}

#[async_trait]
impl Tool for FetchTool {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn description(&self) -> &'static str {
        FETCH_DESCRIPTION
    }

    fn input_schema(&self) -> &'static InputSchema {
        &FETCH_SCHEMA
    }

    async fn call(&self, args: Value) -> Result<String> {
        let input = decode_args(Self::NAME, args)?;
        self.execute(input).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_is_optional() {
        let input: FetchInput =
            serde_json::from_value(serde_json::json!({ "url": "https://example.com" })).unwrap();
        assert_eq!(input, FetchInput::new("https://example.com"));

        let input: FetchInput = serde_json::from_value(serde_json::json!({
            "url": "https://example.com",
            "prompt": "list the headings",
        }))
        .unwrap();
        assert_eq!(input.prompt.as_deref(), Some("list the headings"));
    }

    #[test]
    fn missing_url_does_not_decode() {
        let err = decode_args::<FetchInput>(FetchTool::NAME, serde_json::json!({ "prompt": "hi" }))
            .unwrap_err();
        assert!(matches!(
            err,
            crate::Error::InvalidArguments { ref tool, .. } if tool == FetchTool::NAME
        ));
    }
}
