//! User login and lookup.

use serde::Serialize;

use ramadan_core::models::{User, UserType};
use ramadan_core::operation::Operation;

use crate::client::{segment, GatewayClient};
use crate::error::GatewayResult;

#[derive(Debug, Serialize)]
struct LoginBody<'a> {
    email: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<&'a str>,
    user_type: UserType,
}

impl GatewayClient {
    /// Log in, registering the user on first sight.
    ///
    /// `POST /users/login`. `user_type` defaults to [`UserType::User`].
    pub async fn login(
        &self,
        email: &str,
        name: Option<&str>,
        user_type: Option<UserType>,
    ) -> GatewayResult<User> {
        let body = LoginBody {
            email,
            name,
            user_type: user_type.unwrap_or_default(),
        };
        self.post(Operation::Login, "/users/login", &body).await
    }

    /// Make sure a regular user record exists for `email` and return it.
    ///
    /// The backend's login endpoint is get-or-create, so this is one
    /// idempotent call: repeating it (at-least-once delivery) yields the
    /// same user and never a duplicate.
    pub async fn ensure_user(&self, email: &str, name: &str) -> GatewayResult<User> {
        let body = LoginBody {
            email,
            name: Some(name),
            user_type: UserType::User,
        };
        self.post(Operation::EnsureUser, "/users/login", &body).await
    }

    /// `GET /users/{email}`.
    pub async fn get_user(&self, email: &str) -> GatewayResult<User> {
        self.get(Operation::GetUser, &format!("/users/{}", segment(email)))
            .await
    }
}
