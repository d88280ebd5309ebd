//! Dua generation DTOs.

use serde::{Deserialize, Serialize};

use crate::nullable::Nullable;
use crate::types::{DbId, Extra, Timestamp};

/// A generated prayer in paired English/Arabic form.
///
/// The generation endpoint returns the `how_to_use_*` pair and a
/// `timestamp`; the history endpoint returns `email`, `helpful` and
/// `created_at` instead. Both decode into this one shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dua {
    pub id: DbId,
    pub category: String,
    pub context: String,
    pub dua_text_en: String,
    pub dua_text_ar: String,
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub how_to_use_en: Nullable<String>,
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub how_to_use_ar: Nullable<String>,
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub ai_generated: Nullable<bool>,
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub email: Nullable<String>,
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub helpful: Nullable<bool>,
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub created_at: Nullable<Timestamp>,
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub timestamp: Nullable<Timestamp>,
    #[serde(flatten)]
    pub extra: Extra,
}

/// Category listing. The backend wraps it as `{"categories": [...]}`,
/// older deployments return the bare array.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum CategoryList {
    Wrapped { categories: Vec<String> },
    Bare(Vec<String>),
}

impl CategoryList {
    pub fn into_inner(self) -> Vec<String> {
        match self {
            CategoryList::Wrapped { categories } => categories,
            CategoryList::Bare(categories) => categories,
        }
    }
}
