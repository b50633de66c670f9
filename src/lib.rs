//! Quercle tools - web search and fetch for AI agent runtimes
//!
//! Exposes two tools backed by the Quercle API:
//! - `quercle_search`: AI-synthesized web search answers with citations
//! - `quercle_fetch`: fetch a URL and analyze its content
//!
//! Each tool carries a description and a declarative JSON Schema for its
//! arguments, and delegates execution to a [`QuercleClient`]. Results and
//! errors from the client are returned unchanged.
//!
//! ```no_run
//! use quercle_tools::{QuercleConfig, SearchInput, create_tools};
//!
//! # async fn run() -> quercle_tools::Result<()> {
//! let tools = create_tools(Some(QuercleConfig::new().with_api_key("qk_...")));
//! let answer = tools.search.execute(SearchInput::new("latest Rust release")).await?;
//! println!("{answer}");
//! # Ok(())
//! # }
//! ```
//!
//! The [`search`] and [`fetch`] functions return tools configured from
//! `QUERCLE_API_KEY` without any setup.

pub mod client;
pub mod config;
pub mod error;
pub mod tools;

pub use client::{FetchResponse, HttpClient, QuercleClient, SearchOptions, SearchResponse};
pub use config::{QuercleConfig, ResolvedConfig, resolve_config};
pub use error::{Error, Result};
pub use tools::{
    FetchInput, FetchTool, InputSchema, QuercleTools, SearchInput, SearchTool, Tool,
    ToolDefinition, create_tools, create_tools_with_client, default_tools, fetch, search,
};
