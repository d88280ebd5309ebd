//! Devotional video catalog.

use serde::Serialize;

use ramadan_core::models::{NewVideo, Video, VideoCreated};
use ramadan_core::operation::Operation;
use ramadan_core::types::DbId;

use crate::client::GatewayClient;
use crate::error::GatewayResult;

#[derive(Debug, Serialize)]
struct PromptSearchBody<'a> {
    email: &'a str,
    prompt: &'a str,
}

impl GatewayClient {
    /// `GET /videos`.
    pub async fn list_videos(&self) -> GatewayResult<Vec<Video>> {
        self.get(Operation::ListVideos, "/videos").await
    }

    /// `GET /videos/{id}`.
    pub async fn get_video(&self, id: DbId) -> GatewayResult<Video> {
        self.get(Operation::GetVideo, &format!("/videos/{id}")).await
    }

    /// Title/description search over the catalog.
    ///
    /// `GET /videos/search?query=..`.
    pub async fn search_videos(&self, query: &str) -> GatewayResult<Vec<Video>> {
        self.get_with_query(Operation::SearchVideos, "/videos/search", &[("query", query)])
            .await
    }

    /// Keyword-extracting search driven by a free-form prompt.
    ///
    /// `POST /videos/search-by-prompt`. The result shape is backend-defined.
    pub async fn search_videos_by_prompt(
        &self,
        email: &str,
        prompt: &str,
    ) -> GatewayResult<serde_json::Value> {
        self.post(
            Operation::SearchVideosByPrompt,
            "/videos/search-by-prompt",
            &PromptSearchBody { email, prompt },
        )
        .await
    }

    /// `POST /videos/add`. The backend validates the body as a full
    /// catalog row, so `video` carries its own `id`.
    pub async fn add_video(&self, video: &NewVideo) -> GatewayResult<VideoCreated> {
        self.post(Operation::AddVideo, "/videos/add", video).await
    }
}
