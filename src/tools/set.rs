//! Tool construction
//!
//! Every tool set is built by [`create_tools_with_client`]; the configured
//! and default variants only differ in how the client is obtained.

use std::fmt;
use std::sync::{Arc, LazyLock};

use serde_json::Value;

use super::{FetchTool, SearchTool, Tool, ToolDefinition};
use crate::client::{HttpClient, QuercleClient};
use crate::config::QuercleConfig;
use crate::{Error, Result};

/// Search and fetch tools sharing one client
#[derive(Clone)]
pub struct QuercleTools {
    /// Web search tool
    pub search: SearchTool,
    /// URL fetch tool
    pub fetch: FetchTool,
}

impl fmt::Debug for QuercleTools {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QuercleTools")
            .field("tools", &[SearchTool::NAME, FetchTool::NAME])
            .finish()
    }
}

impl QuercleTools {
    /// Both tools as trait objects, search first
    #[must_use]
    pub fn tools(&self) -> Vec<&dyn Tool> {
        vec![&self.search, &self.fetch]
    }

    /// Look up a tool by name
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&dyn Tool> {
        self.tools().into_iter().find(|t| t.name() == name)
    }

    /// Function-calling definitions for registration with a model
    #[must_use]
    pub fn definitions(&self) -> Vec<ToolDefinition> {
        self.tools().into_iter().map(Tool::definition).collect()
    }

    /// Dispatch a tool call by name
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownTool`] for an unrecognised name, otherwise the
    /// tool's own result
    pub async fn call(&self, name: &str, args: Value) -> Result<String> {
        let tool = self
            .get(name)
            .ok_or_else(|| Error::UnknownTool(name.to_string()))?;
        tool.call(args).await
    }
}

/// Build both tools around an existing client
#[must_use]
pub fn create_tools_with_client(client: Arc<dyn QuercleClient>) -> QuercleTools {
    QuercleTools {
        search: SearchTool::new(Arc::clone(&client)),
        fetch: FetchTool::new(client),
    }
}

/// Build both tools around a new HTTP client
///
/// `config` is resolved against the environment once, here. A missing API
/// key does not fail construction; it is reported when a tool is executed.
#[must_use]
pub fn create_tools(config: Option<QuercleConfig>) -> QuercleTools {
    let client = HttpClient::from_config(config);
    tracing::debug!(base_url = client.base_url(), "created quercle tools");
    create_tools_with_client(Arc::new(client))
}

static DEFAULT_TOOLS: LazyLock<QuercleTools> = LazyLock::new(|| create_tools(None));

/// Tools configured from the environment, built on first use
#[must_use]
pub fn default_tools() -> &'static QuercleTools {
    &DEFAULT_TOOLS
}

/// Search tool configured from the environment
#[must_use]
pub fn search() -> &'static SearchTool {
    &default_tools().search
}

/// Fetch tool configured from the environment
#[must_use]
pub fn fetch() -> &'static FetchTool {
    &default_tools().fetch
}
