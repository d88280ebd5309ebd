//! Personalised dua generation and feedback.

use serde::Serialize;

use ramadan_core::models::{Ack, CategoryList, Dua};
use ramadan_core::operation::Operation;
use ramadan_core::types::DbId;

use crate::client::{segment, GatewayClient};
use crate::error::GatewayResult;

#[derive(Debug, Serialize)]
struct GenerateDuaBody<'a> {
    email: &'a str,
    category: &'a str,
    context: &'a str,
}

#[derive(Debug, Serialize)]
struct FeedbackBody<'a> {
    dua_id: DbId,
    helpful: bool,
    notes: &'a str,
}

impl GatewayClient {
    /// `GET /dua/categories`, unwrapped to the category names.
    pub async fn list_categories(&self) -> GatewayResult<Vec<String>> {
        let list: CategoryList = self
            .get(Operation::ListCategories, "/dua/categories")
            .await?;
        Ok(list.into_inner())
    }

    /// Ask the backend to compose a dua for `context` within `category`.
    ///
    /// `POST /dua/generate`. The backend stores the result in the user's
    /// history.
    pub async fn generate_dua(
        &self,
        email: &str,
        category: &str,
        context: &str,
    ) -> GatewayResult<Dua> {
        let body = GenerateDuaBody {
            email,
            category,
            context,
        };
        self.post(Operation::GenerateDua, "/dua/generate", &body)
            .await
    }

    /// `GET /dua/{id}`.
    pub async fn get_dua(&self, id: DbId) -> GatewayResult<Dua> {
        self.get(Operation::GetDua, &format!("/dua/{id}")).await
    }

    /// `GET /dua/history/{email}`.
    pub async fn get_dua_history(&self, email: &str) -> GatewayResult<Vec<Dua>> {
        self.get(
            Operation::GetDuaHistory,
            &format!("/dua/history/{}", segment(email)),
        )
        .await
    }

    /// `POST /dua/feedback`. Missing notes are sent as an empty string.
    pub async fn submit_feedback(
        &self,
        dua_id: DbId,
        helpful: bool,
        notes: Option<&str>,
    ) -> GatewayResult<Ack> {
        let body = FeedbackBody {
            dua_id,
            helpful,
            notes: notes.unwrap_or_default(),
        };
        self.post(Operation::SubmitFeedback, "/dua/feedback", &body)
            .await
    }

    /// `GET /dua/stats/helpful`. The statistics shape is backend-defined.
    pub async fn get_helpful_stats(&self) -> GatewayResult<serde_json::Value> {
        self.get(Operation::GetHelpfulStats, "/dua/stats/helpful")
            .await
    }
}
