use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use log::error;
use reqwest::StatusCode;
use serde_json::Value;
use thiserror::Error;

/// How long a single request may take before it is abandoned. There is no
/// retry; a timed-out call is just a failed call.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("unexpected status {0}")]
    Status(StatusCode),
    #[error("invalid JSON body: {0}")]
    InvalidJson(#[source] serde_json::Error),
}

/// Write-only sink for swallowed-error diagnostics. The production sink
/// forwards to the process log; tests substitute a recording sink.
pub trait DiagnosticSink: Send + Sync {
    fn record(&self, target: &str, detail: &str);
}

pub struct LogSink;

impl DiagnosticSink for LogSink {
    fn record(&self, target: &str, detail: &str) {
        error!("{}: {}", target, detail);
    }
}

/// Seam between the collector and the network. Every failure is surfaced as
/// a `FetchError` value; implementations must never panic on bad upstream
/// behavior.
#[async_trait]
pub trait Fetch: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<Value, FetchError>;
}

pub struct HttpFetcher {
    client: reqwest::Client,
    diagnostics: Arc<dyn DiagnosticSink>,
}

impl HttpFetcher {
    pub fn new(diagnostics: Arc<dyn DiagnosticSink>) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(HttpFetcher {
            client,
            diagnostics,
        })
    }

    async fn get_json(&self, url: &str) -> Result<Value, FetchError> {
        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status));
        }
        let body = response.text().await?;
        serde_json::from_str(&body).map_err(FetchError::InvalidJson)
    }
}

#[async_trait]
impl Fetch for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<Value, FetchError> {
        match self.get_json(url).await {
            Ok(value) => Ok(value),
            Err(e) => {
                self.diagnostics.record(url, &e.to_string());
                Err(e)
            }
        }
    }
}
