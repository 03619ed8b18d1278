//! Njalla API client

use std::sync::Arc;

use serde::de::DeserializeOwned;

use crate::config::ClientConfig;
use crate::envelope::{RpcRequest, RpcResult, decode_response};
use crate::error::Result;
use crate::method::RpcMethod;
use crate::params::Params;
use crate::transport::{HttpTransport, Transport};

/// Client for the Njalla JSON-RPC API.
///
/// Holds nothing but the transport, so it is cheap to clone and can be shared
/// between tasks as far as the transport allows. The API token is passed to
/// every call.
#[derive(Clone)]
pub struct NjallaClient {
    transport: Arc<dyn Transport>,
}

impl NjallaClient {
    /// Create a client talking HTTPS to the endpoint in `config`.
    pub fn new(config: &ClientConfig) -> Result<Self> {
        Ok(Self::with_transport(Arc::new(HttpTransport::new(config)?)))
    }

    /// Create a client over an arbitrary transport.
    pub fn with_transport(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    /// Perform one RPC round-trip and return the undecoded `result`.
    pub async fn call(&self, token: &str, method: RpcMethod, params: Params) -> Result<RpcResult> {
        let result = self.round_trip(token, method, params).await;
        if let Err(e) = &result {
            if e.is_expected() {
                log::warn!("{method} failed: {e}");
            } else {
                log::error!("{method} failed: {e}");
            }
        }
        result
    }

    async fn round_trip(
        &self,
        token: &str,
        method: RpcMethod,
        params: Params,
    ) -> Result<RpcResult> {
        let body = RpcRequest::new(method.as_str(), params).encode()?;
        let raw = self.transport.send(token, method.as_str(), body).await?;
        decode_response(&raw)
    }

    /// Perform one RPC round-trip and decode the `result` into `T`.
    pub(crate) async fn call_as<T: DeserializeOwned>(
        &self,
        token: &str,
        method: RpcMethod,
        params: Params,
    ) -> Result<T> {
        self.call(token, method, params).await?.decode()
    }
}

impl std::fmt::Debug for NjallaClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NjallaClient").finish_non_exhaustive()
    }
}
