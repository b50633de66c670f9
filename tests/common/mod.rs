//! Shared test utilities

#![allow(dead_code)]

use std::sync::Mutex;

use async_trait::async_trait;
use quercle_tools::{QuercleClient, Result, SearchOptions};

/// A call recorded by [`StubClient`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Search { query: String, options: SearchOptions },
    Fetch { url: String, prompt: Option<String> },
}

type Responder = Box<dyn Fn() -> Result<String> + Send + Sync>;

/// In-memory client that records calls and returns canned results
pub struct StubClient {
    calls: Mutex<Vec<Call>>,
    on_search: Responder,
    on_fetch: Responder,
}

impl StubClient {
    /// Stub answering both operations with `"stub"`
    pub fn new() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            on_search: Box::new(|| Ok("stub".to_string())),
            on_fetch: Box::new(|| Ok("stub".to_string())),
        }
    }

    /// Replace the search response
    pub fn with_search(mut self, f: impl Fn() -> Result<String> + Send + Sync + 'static) -> Self {
        self.on_search = Box::new(f);
        self
    }

    /// Replace the fetch response
    pub fn with_fetch(mut self, f: impl Fn() -> Result<String> + Send + Sync + 'static) -> Self {
        self.on_fetch = Box::new(f);
        self
    }

    /// Calls received so far
    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl QuercleClient for StubClient {
    async fn search(&self, query: &str, options: &SearchOptions) -> Result<String> {
        self.calls.lock().unwrap().push(Call::Search {
            query: query.to_string(),
            options: options.clone(),
        });
        (self.on_search)()
    }

    async fn fetch(&self, url: &str, prompt: Option<&str>) -> Result<String> {
        self.calls.lock().unwrap().push(Call::Fetch {
            url: url.to_string(),
            prompt: prompt.map(ToString::to_string),
        });
        (self.on_fetch)()
    }
}
