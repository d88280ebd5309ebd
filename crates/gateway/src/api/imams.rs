//! Imam directory and availability.

use serde::Serialize;

use ramadan_core::models::{Ack, AvailabilityResponse, Imam};
use ramadan_core::operation::Operation;
use ramadan_core::types::DbId;

use crate::client::GatewayClient;
use crate::error::GatewayResult;

#[derive(Debug, Serialize)]
struct RegisterImamBody<'a> {
    name: &'a str,
    email: &'a str,
    expertise: &'a str,
}

#[derive(Debug, Serialize)]
struct AvailabilityBody {
    is_available: bool,
}

impl GatewayClient {
    /// `GET /imams`. An empty directory is an empty vec.
    pub async fn list_imams(&self) -> GatewayResult<Vec<Imam>> {
        self.get(Operation::ListImams, "/imams").await
    }

    /// `GET /imams/{id}`.
    pub async fn get_imam(&self, id: DbId) -> GatewayResult<Imam> {
        self.get(Operation::GetImam, &format!("/imams/{id}")).await
    }

    /// `POST /imams/register`.
    pub async fn register_imam(
        &self,
        name: &str,
        email: &str,
        expertise: &str,
    ) -> GatewayResult<Imam> {
        let body = RegisterImamBody {
            name,
            email,
            expertise,
        };
        self.post(Operation::RegisterImam, "/imams/register", &body)
            .await
    }

    /// `PUT /chat/imam/{id}/availability`.
    pub async fn set_availability(&self, imam_id: DbId, is_available: bool) -> GatewayResult<Ack> {
        self.put(
            Operation::SetAvailability,
            &format!("/chat/imam/{imam_id}/availability"),
            &AvailabilityBody { is_available },
        )
        .await
    }

    /// `GET /chat/imam/{id}/availability`, reduced to the flag.
    pub async fn get_availability(&self, imam_id: DbId) -> GatewayResult<bool> {
        let response: AvailabilityResponse = self
            .get(
                Operation::GetAvailability,
                &format!("/chat/imam/{imam_id}/availability"),
            )
            .await?;
        Ok(response.is_available())
    }
}
