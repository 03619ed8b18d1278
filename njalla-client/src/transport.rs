//! HTTP transport
//!
//! The [`Transport`] trait is the only seam between the library and the
//! network. [`HttpTransport`] is the real HTTPS implementation; tests plug in
//! their own implementation to script responses without a network.
//!
//! # Design principles
//! - **One round-trip per call** - no retries at this layer
//! - **Status codes are not interpreted** - the provider reports application
//!   errors inside the JSON body, even on HTTP 200
//! - **Transport failures stay distinct** - connection, TLS and timeout problems
//!   surface as `Network` / `Timeout`, never as protocol or RPC errors

use async_trait::async_trait;
use reqwest::Client;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};

use crate::config::ClientConfig;
use crate::error::{NjallaError, Result};
use crate::utils::log_sanitizer::{redact_token, truncate_for_log};

/// Scheme literal the provider expects in front of the token.
pub const AUTH_SCHEME: &str = "Njalla";

/// Sends one serialized request envelope and returns the raw response body.
#[async_trait]
pub trait Transport: Send + Sync {
    /// POST `body` with `Authorization: Njalla <token>`.
    ///
    /// `method` is the RPC verb inside `body`; it is passed separately so
    /// implementations can log it without re-parsing the payload.
    async fn send(&self, token: &str, method: &str, body: Vec<u8>) -> Result<Vec<u8>>;
}

/// Build the `Authorization` header value for a token.
pub fn authorization_header(token: &str) -> String {
    format!("{AUTH_SCHEME} {token}")
}

/// HTTPS transport backed by `reqwest`.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
    endpoint: String,
}

impl HttpTransport {
    /// Create a transport from `config`.
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let client = Client::builder()
            .connect_timeout(config.connect_timeout)
            .timeout(config.request_timeout)
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| NjallaError::Network {
                detail: format!("Failed to create HTTP client: {e}"),
            })?;

        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
        })
    }

    /// Endpoint requests are sent to.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, token: &str, method: &str, body: Vec<u8>) -> Result<Vec<u8>> {
        log::debug!(
            "POST {} method={method} token={}",
            self.endpoint,
            redact_token(token)
        );

        let response = self
            .client
            .post(&self.endpoint)
            .header(AUTHORIZATION, authorization_header(token))
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        log::debug!("[{method}] Response Status: {status}");

        let bytes = response.bytes().await.map_err(|e| {
            if e.is_timeout() {
                NjallaError::Timeout {
                    detail: e.to_string(),
                }
            } else {
                NjallaError::Network {
                    detail: format!("Failed to read response body: {e}"),
                }
            }
        })?;

        log::debug!(
            "[{method}] Response Body: {}",
            truncate_for_log(&String::from_utf8_lossy(&bytes))
        );

        Ok(bytes.to_vec())
    }
}

fn map_reqwest_error(e: reqwest::Error) -> NjallaError {
    if e.is_timeout() {
        NjallaError::Timeout {
            detail: e.to_string(),
        }
    } else {
        NjallaError::Network {
            detail: e.to_string(),
        }
    }
}
