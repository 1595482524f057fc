//! Shared fakes for the unit tests: a scripted fetcher and a diagnostic
//! sink that records events instead of logging them.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use reqwest::StatusCode;
use serde_json::Value;

use crate::fetch::{DiagnosticSink, Fetch, FetchError};

#[derive(Default)]
pub struct RecordingSink {
    events: Mutex<Vec<(String, String)>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        RecordingSink::default()
    }

    pub fn events(&self) -> Vec<(String, String)> {
        self.events.lock().unwrap().clone()
    }
}

impl DiagnosticSink for RecordingSink {
    fn record(&self, target: &str, detail: &str) {
        self.events
            .lock()
            .unwrap()
            .push((target.to_string(), detail.to_string()));
    }
}

/// Maps URLs to canned outcomes. Unscripted URLs fail, as does anything
/// registered through `fail`, with a synthetic 500 status.
pub struct ScriptedFetcher {
    responses: HashMap<String, Option<Value>>,
}

impl ScriptedFetcher {
    pub fn new() -> Self {
        ScriptedFetcher {
            responses: HashMap::new(),
        }
    }

    pub fn ok(mut self, url: &str, body: Value) -> Self {
        self.responses.insert(url.to_string(), Some(body));
        self
    }

    pub fn fail(mut self, url: &str) -> Self {
        self.responses.insert(url.to_string(), None);
        self
    }
}

#[async_trait]
impl Fetch for ScriptedFetcher {
    async fn fetch(&self, url: &str) -> Result<Value, FetchError> {
        match self.responses.get(url) {
            Some(Some(body)) => Ok(body.clone()),
            _ => Err(FetchError::Status(StatusCode::INTERNAL_SERVER_ERROR)),
        }
    }
}
