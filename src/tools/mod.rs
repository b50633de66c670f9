//! Quercle tools for agent runtimes

mod fetch;
pub mod schema;
mod search;
mod set;

use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;

use crate::Result;

pub use fetch::{FetchInput, FetchTool};
pub use schema::{InputSchema, Property, PropertyKind};
pub use search::{SearchInput, SearchTool};
pub use set::{QuercleTools, create_tools, create_tools_with_client, default_tools, fetch, search};

/// A tool an LLM runtime can register and invoke by name
#[async_trait]
pub trait Tool: Send + Sync {
    /// Name the model uses to call the tool
    fn name(&self) -> &'static str;

    /// Description shown to the model
    fn description(&self) -> &'static str;

    /// Accepted arguments
    fn input_schema(&self) -> &'static InputSchema;

    /// Decode JSON arguments and execute
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidArguments`] if `args` does not decode,
    /// otherwise whatever the client returned
    async fn call(&self, args: Value) -> Result<String>;

    /// Function-calling definition for this tool
    fn definition(&self) -> ToolDefinition {
        ToolDefinition {
            tool_type: "function",
            function: FunctionDefinition {
                name: self.name(),
                description: self.description(),
                parameters: self.input_schema().to_json(),
            },
        }
    }
}

/// Tool definition in the common function-calling shape
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ToolDefinition {
    /// Always `"function"`
    #[serde(rename = "type")]
    pub tool_type: &'static str,
    /// Function metadata
    pub function: FunctionDefinition,
}

/// Function metadata inside a [`ToolDefinition`]
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FunctionDefinition {
    /// Tool name
    pub name: &'static str,
    /// Tool description
    pub description: &'static str,
    /// JSON Schema of the arguments
    pub parameters: Value,
}

/// Decode tool-call arguments into a typed input
fn decode_args<T: serde::de::DeserializeOwned>(tool: &str, args: Value) -> Result<T> {
    serde_json::from_value(args).map_err(|e| crate::Error::InvalidArguments {
        tool: tool.to_string(),
        reason: e.to_string(),
    })
}
