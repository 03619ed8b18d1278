use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unified error type for every Njalla API call.
///
/// The variants fall into three families that callers can tell apart:
///
/// - transport failures: [`Network`](Self::Network) and [`Timeout`](Self::Timeout)
///   (see [`is_transport`](Self::is_transport))
/// - contract mismatches: [`Protocol`](Self::Protocol), the response body was not
///   a usable JSON-RPC envelope or the result had an unexpected shape
/// - provider failures: [`Rpc`](Self::Rpc), carrying the provider's own code and
///   message untouched
///
/// No variant is retried by the library. The task poller is the only loop, and
/// it aborts on the first error.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum NjallaError {
    /// A network-level error occurred (DNS resolution failure, TLS, connection refused, etc.).
    #[error("Network error: {detail}")]
    Network {
        /// Error details.
        detail: String,
    },

    /// The HTTP request timed out.
    #[error("Request timeout: {detail}")]
    Timeout {
        /// Error details.
        detail: String,
    },

    /// The response body could not be understood.
    ///
    /// Raised when the body is not JSON, when it carries neither `result` nor
    /// `error`, or when `result` does not decode into the expected shape.
    #[error("Protocol error: {detail}")]
    Protocol {
        /// Details about the mismatch.
        detail: String,
    },

    /// The provider reported an application-level failure.
    #[error("RPC error {code}: {message}")]
    Rpc {
        /// Provider error code.
        code: i64,
        /// Provider error message.
        message: String,
    },

    /// Failed to serialize a request envelope.
    #[error("Serialization error: {detail}")]
    Serialization {
        /// Details about the serialization failure.
        detail: String,
    },

    /// A request parameter was rejected before anything was sent.
    #[error("Invalid parameter '{param}': {detail}")]
    InvalidParameter {
        /// Name of the invalid parameter.
        param: String,
        /// Description of what's wrong.
        detail: String,
    },

    /// Task polling stopped before a terminal status was observed.
    #[error("Polling task '{task_id}' cancelled: {detail}")]
    Cancelled {
        /// The task that was being polled.
        task_id: String,
        /// Why polling stopped.
        detail: String,
    },
}

impl NjallaError {
    pub(crate) fn protocol(detail: impl ToString) -> Self {
        Self::Protocol {
            detail: detail.to_string(),
        }
    }

    /// Whether the error came from the transport rather than from the provider.
    #[must_use]
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Network { .. } | Self::Timeout { .. })
    }

    /// Whether this is expected behavior (bad input, provider refusal), used for log grading.
    ///
    /// `true` should be logged at `warn`, `false` at `error`.
    /// **Keep this in sync when adding variants.**
    #[must_use]
    pub fn is_expected(&self) -> bool {
        matches!(
            self,
            Self::Rpc { .. } | Self::InvalidParameter { .. } | Self::Cancelled { .. }
        )
    }

    /// Provider error code, if the provider reported one.
    #[must_use]
    pub fn rpc_code(&self) -> Option<i64> {
        match self {
            Self::Rpc { code, .. } => Some(*code),
            _ => None,
        }
    }
}

/// Convenience type alias for `Result<T, NjallaError>`.
pub type Result<T> = std::result::Result<T, NjallaError>;
