use ramadan_core::operation::Operation;

use crate::client::GatewayClient;
use crate::error::GatewayResult;

impl GatewayClient {
    /// `GET /health`. Returns the backend's status document as-is.
    pub async fn health(&self) -> GatewayResult<serde_json::Value> {
        self.get(Operation::Health, "/health").await
    }
}
