//! Where documents come from.

use serde_json::Value;

use crate::error::{FetchFailure, FormatError, LoadError};

/// Retrieves the raw JSON payload behind a document URL with a plain HTTP
/// GET through reqwest. On wasm this goes through `fetch()`.
#[derive(Debug, Clone, Default)]
pub struct HttpSource {
    client: reqwest::Client,
}

impl HttpSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn fetch(&self, url: &str) -> Result<Value, LoadError> {
        let transport = |e: reqwest::Error| LoadError::Fetch {
            url: url.to_owned(),
            reason: FetchFailure::Transport(e.to_string()),
        };

        tracing::debug!("GET {url}");
        let response = self.client.get(url).send().await.map_err(transport)?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!("GET {url} answered {status}");
            return Err(LoadError::Fetch {
                url: url.to_owned(),
                reason: FetchFailure::Status(status.as_u16()),
            });
        }

        let body = response.bytes().await.map_err(transport)?;
        let payload: Value = serde_json::from_slice(&body)
            .map_err(|e| FormatError::InvalidJson(e.to_string()))?;
        Ok(payload)
    }
}
