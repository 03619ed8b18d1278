//! JSON-RPC envelope codec
//!
//! Outbound: `{"method": "...", "params": {...}}`.
//! Inbound: `{"jsonrpc": "2.0", "result": ...}` or
//! `{"jsonrpc": "2.0", "error": {"code": ..., "message": "..."}}`.
//!
//! The codec is method-agnostic. It hands the `result` value back as an opaque
//! [`RpcResult`] and each resource operation decodes it into its own shape.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{NjallaError, Result};
use crate::params::Params;
use crate::utils::log_sanitizer::truncate_for_log;

/// Request envelope.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RpcRequest<'a> {
    pub method: &'a str,
    pub params: Map<String, Value>,
}

impl<'a> RpcRequest<'a> {
    pub fn new(method: &'a str, params: Params) -> Self {
        Self {
            method,
            params: params.into_inner(),
        }
    }

    /// Serialize to the wire format.
    pub fn encode(&self) -> Result<Vec<u8>> {
        serde_json::to_vec(self).map_err(|e| NjallaError::Serialization {
            detail: e.to_string(),
        })
    }
}

/// The `error` member of a failed response.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RpcErrorBody {
    pub code: i64,
    pub message: String,
}

/// The `result` member of a successful response, re-serialized and not yet decoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RpcResult(Vec<u8>);

impl RpcResult {
    /// Raw JSON bytes of the result value.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Decode into the shape the calling operation expects.
    ///
    /// A mismatch is a [`NjallaError::Protocol`]: the provider and the client
    /// disagree about the contract.
    pub fn decode<T: DeserializeOwned>(&self) -> Result<T> {
        serde_json::from_slice(&self.0).map_err(|e| {
            log::error!(
                "Result decode failed: {e}; raw result: {}",
                truncate_for_log(&String::from_utf8_lossy(&self.0))
            );
            NjallaError::protocol(format!("unexpected result shape: {e}"))
        })
    }
}

/// Unwrap a raw response body into its `result`, or the provider's error.
///
/// `error` wins when both members are present. `"error": null` counts as
/// absent, while `"result": null` is a valid result.
pub fn decode_response(body: &[u8]) -> Result<RpcResult> {
    let mut object: Map<String, Value> = serde_json::from_slice(body).map_err(|e| {
        log::error!(
            "Malformed response body ({e}): {}",
            truncate_for_log(&String::from_utf8_lossy(body))
        );
        NjallaError::protocol("malformed response body")
    })?;

    match object.remove("error") {
        None | Some(Value::Null) => {}
        Some(error) => {
            let error: RpcErrorBody = serde_json::from_value(error).map_err(|e| {
                log::error!("Malformed error member: {e}");
                NjallaError::protocol(format!("malformed error member: {e}"))
            })?;
            return Err(NjallaError::Rpc {
                code: error.code,
                message: error.message,
            });
        }
    }

    match object.remove("result") {
        None => {
            log::error!("Response carries neither result nor error");
            Err(NjallaError::protocol("missing result"))
        }
        Some(result) => serde_json::to_vec(&result)
            .map(RpcResult)
            .map_err(|e| NjallaError::protocol(e.to_string())),
    }
}
