use serde::{Deserialize, Serialize};

use crate::nullable::Nullable;
use crate::types::Extra;

/// Generic acknowledgement returned by write-only endpoints,
/// e.g. `{"status": "success", "dua_id": 7}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Ack {
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub status: Nullable<String>,
    #[serde(flatten)]
    pub extra: Extra,
}
