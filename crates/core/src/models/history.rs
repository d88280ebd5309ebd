use serde::{Deserialize, Serialize};

use crate::nullable::Nullable;
use crate::types::{DbId, Extra, Timestamp};

/// One row of a user's append-only activity log.
///
/// `action_data` is opaque to the client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub id: Nullable<DbId>,
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub user_email: Nullable<String>,
    pub action_type: String,
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub action_data: Nullable<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub created_at: Nullable<Timestamp>,
    #[serde(flatten)]
    pub extra: Extra,
}
