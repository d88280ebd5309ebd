//! Append-only activity log.

use serde::Serialize;

use ramadan_core::models::{Ack, HistoryEntry};
use ramadan_core::operation::Operation;

use crate::client::{segment, GatewayClient};
use crate::error::GatewayResult;

#[derive(Debug, Serialize)]
struct LogActionBody<'a> {
    user_email: &'a str,
    action_type: &'a str,
    action_data: &'a serde_json::Value,
}

impl GatewayClient {
    /// `GET /history/{email}`, newest first.
    pub async fn get_history(&self, user_email: &str) -> GatewayResult<Vec<HistoryEntry>> {
        self.get(
            Operation::GetHistory,
            &format!("/history/{}", segment(user_email)),
        )
        .await
    }

    /// Record one user action, e.g. `dua_generated` or `video_searched`.
    ///
    /// `POST /history/log`. `action_data` is stored as given.
    pub async fn log_action(
        &self,
        user_email: &str,
        action_type: &str,
        action_data: &serde_json::Value,
    ) -> GatewayResult<Ack> {
        let body = LogActionBody {
            user_email,
            action_type,
            action_data,
        };
        self.post(Operation::LogAction, "/history/log", &body).await
    }
}
