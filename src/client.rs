//! HTTP client used by the quiz front-end to load the player catalog.

use std::sync::Arc;

use reqwest::{Client, StatusCode};
use thiserror::Error;
use tracing::debug;

use crate::game::PlayerCatalog;

/// Result alias for quiz client calls.
pub type ClientResult<T> = Result<T, ClientError>;

/// Failures while talking to the player API.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Building the HTTP client failed (invalid TLS setup, etc).
    #[error("failed to build HTTP client")]
    Build {
        #[source]
        source: reqwest::Error,
    },
    #[error("failed to send request to `{url}`")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("unexpected response status {status} from `{url}`")]
    Status { url: String, status: StatusCode },
    #[error("failed to decode response from `{url}`")]
    Decode {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

/// HTTP client for the players API of a running server.
#[derive(Clone)]
pub struct ApiClient {
    http: Client,
    base_url: Arc<str>,
}

impl ApiClient {
    /// Build a client for the server at `base_url`; a trailing slash is ignored.
    pub fn new(base_url: &str) -> ClientResult<Self> {
        let http = Client::builder()
            .build()
            .map_err(|source| ClientError::Build { source })?;
        Ok(Self {
            http,
            base_url: Arc::from(base_url.trim_end_matches('/')),
        })
    }

    /// Server root every request is resolved against.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch `GET /api/players` once; the quiz works off this copy afterwards.
    pub async fn fetch_catalog(&self) -> ClientResult<PlayerCatalog> {
        let url = format!("{}/api/players", self.base_url);
        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|source| ClientError::Request {
                url: url.clone(),
                source,
            })?;

        if response.status() != StatusCode::OK {
            return Err(ClientError::Status {
                url,
                status: response.status(),
            });
        }

        let catalog: PlayerCatalog = response
            .json()
            .await
            .map_err(|source| ClientError::Decode { url, source })?;
        debug!(players = catalog.len(), "fetched player catalog");
        Ok(catalog)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_is_dropped() {
        let client = ApiClient::new("http://localhost:3000/").unwrap();
        assert_eq!(client.base_url(), "http://localhost:3000");
    }
}
