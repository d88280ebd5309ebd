//! User identity DTOs.

use serde::{Deserialize, Serialize};

use crate::nullable::Nullable;
use crate::types::{DbId, Extra, Timestamp};

/// Account kind. Imams answer conversations; admins manage the directory.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserType {
    #[default]
    User,
    Imam,
    Admin,
}

/// A user record, keyed by email.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: DbId,
    pub email: String,
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub name: Nullable<String>,
    pub user_type: UserType,
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub created_at: Nullable<Timestamp>,
    #[serde(flatten)]
    pub extra: Extra,
}
