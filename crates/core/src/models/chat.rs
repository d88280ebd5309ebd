//! Conversation and message DTOs.

use serde::{Deserialize, Serialize};

use crate::nullable::Nullable;
use crate::types::{DbId, Extra, Timestamp};

/// Which side of a conversation sent a message.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SenderType {
    #[default]
    User,
    Imam,
}

impl std::str::FromStr for SenderType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "user" => Ok(SenderType::User),
            "imam" => Ok(SenderType::Imam),
            other => Err(format!("unknown sender type '{other}', expected 'user' or 'imam'")),
        }
    }
}

/// A topic-scoped thread between one user and one imam.
///
/// `messages` is only sent by the single-conversation endpoint;
/// listings leave the key out.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Conversation {
    pub id: DbId,
    pub user_email: String,
    pub imam_id: DbId,
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub imam_name: Nullable<String>,
    pub topic: String,
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub unread_count: Nullable<i64>,
    pub created_at: Timestamp,
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub updated_at: Nullable<Timestamp>,
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub messages: Nullable<Vec<Message>>,
    #[serde(flatten)]
    pub extra: Extra,
}

/// One appended message. The send endpoint omits `sender_email` and
/// `is_read` from its echo.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub id: DbId,
    pub conversation_id: DbId,
    pub sender_type: SenderType,
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub sender_email: Nullable<String>,
    pub message_text: String,
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub is_read: Nullable<bool>,
    pub created_at: Timestamp,
    #[serde(flatten)]
    pub extra: Extra,
}
