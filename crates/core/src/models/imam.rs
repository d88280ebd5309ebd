use serde::{Deserialize, Serialize};

use crate::nullable::Nullable;
use crate::types::{DbId, Extra};

/// A registered scholar who can be messaged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Imam {
    pub id: DbId,
    pub name: String,
    pub email: String,
    pub expertise: String,
    pub is_available: bool,
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub bio: Nullable<String>,
    #[serde(flatten)]
    pub extra: Extra,
}

/// Availability lookup result.
///
/// Accepts `{"is_available": bool}`, the chat service's
/// `{"is_available_for_chat": bool}`, or a bare boolean.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum AvailabilityResponse {
    Wrapped { is_available: bool },
    ForChat { is_available_for_chat: bool },
    Bare(bool),
}

impl AvailabilityResponse {
    pub fn is_available(self) -> bool {
        match self {
            AvailabilityResponse::Wrapped { is_available } => is_available,
            AvailabilityResponse::ForChat {
                is_available_for_chat,
            } => is_available_for_chat,
            AvailabilityResponse::Bare(value) => value,
        }
    }
}
