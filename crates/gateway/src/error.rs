use ramadan_core::operation::Operation;

/// Errors surfaced by [`GatewayClient`](crate::GatewayClient).
///
/// The client never recovers locally. Every variant except `Config`
/// names the operation that failed, and the client stays usable after
/// any of them.
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    /// No response was obtained (connection refused, DNS, TLS, timeout,
    /// or the body stream broke off).
    #[error("{operation} failed: backend unreachable: {source}")]
    Network {
        operation: Operation,
        #[source]
        source: reqwest::Error,
    },

    /// The backend answered with a non-2xx status.
    #[error("{operation} failed with HTTP {status}: {body}")]
    RequestFailed {
        operation: Operation,
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },

    /// The backend answered 2xx but the body was not the expected JSON.
    #[error("{operation} returned an undecodable body: {source}")]
    Decode {
        operation: Operation,
        #[source]
        source: serde_json::Error,
    },

    /// The gateway could not be constructed from its configuration.
    #[error("Invalid gateway configuration: {0}")]
    Config(String),
}

/// Convenience alias for gateway call results.
pub type GatewayResult<T> = Result<T, GatewayError>;

impl GatewayError {
    /// The operation that failed, if the error came from a call.
    pub fn operation(&self) -> Option<Operation> {
        match self {
            GatewayError::Network { operation, .. }
            | GatewayError::RequestFailed { operation, .. }
            | GatewayError::Decode { operation, .. } => Some(*operation),
            GatewayError::Config(_) => None,
        }
    }

    /// HTTP status attached to the failure. `None` when no response
    /// was received.
    pub fn status(&self) -> Option<u16> {
        match self {
            GatewayError::RequestFailed { status, .. } => Some(*status),
            _ => None,
        }
    }
}
