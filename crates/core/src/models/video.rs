use serde::{Deserialize, Serialize};

use crate::nullable::Nullable;
use crate::types::{DbId, Extra};

/// A devotional video catalog entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Video {
    pub id: DbId,
    pub title: String,
    pub channel: String,
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub duration: Nullable<String>,
    pub youtube_id: String,
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub description: Nullable<String>,
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub thumbnail_url: Nullable<String>,
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub keywords: Nullable<Vec<String>>,
    #[serde(flatten)]
    pub extra: Extra,
}

/// Body accepted by the catalog's add endpoint.
///
/// The backend validates it as a full catalog row: the caller picks the
/// `id`, and `duration` and `description` are required. `thumbnail_url`
/// is always sent, as `null` when unset.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NewVideo {
    pub id: DbId,
    pub title: String,
    pub youtube_id: String,
    pub channel: String,
    pub duration: String,
    pub description: String,
    pub thumbnail_url: Option<String>,
}

/// Result of adding a catalog entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VideoCreated {
    pub id: DbId,
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub status: Nullable<String>,
    #[serde(flatten)]
    pub extra: Extra,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn video_without_thumbnail_round_trips() {
        let body = serde_json::json!({
            "id": 2,
            "title": "Tafsir of Surah Al-Qadr",
            "youtube_id": "abc123XYZ",
            "channel": "Yaqeen Institute",
            "duration": "14:05",
            "description": "Laylat al-Qadr explained",
            "thumbnail_url": null,
            "keywords": []
        });
        let video: Video = serde_json::from_value(body.clone()).unwrap();
        assert!(video.thumbnail_url.is_null());
        assert_eq!(serde_json::to_value(&video).unwrap(), body);
    }

    #[test]
    fn new_video_sends_every_required_field() {
        let video = NewVideo {
            id: 31,
            title: "Night prayer".into(),
            youtube_id: "q1w2e3".into(),
            channel: "Bayyinah".into(),
            duration: "9:30".into(),
            description: String::new(),
            thumbnail_url: None,
        };
        assert_eq!(
            serde_json::to_value(&video).unwrap(),
            serde_json::json!({
                "id": 31,
                "title": "Night prayer",
                "youtube_id": "q1w2e3",
                "channel": "Bayyinah",
                "duration": "9:30",
                "description": "",
                "thumbnail_url": null
            })
        );
    }
}
