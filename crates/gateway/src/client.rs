//! Shared request pipeline for every gateway operation.
//!
//! The per-subdomain methods live in [`crate::api`]; they all funnel into
//! [`GatewayClient::dispatch`], which attaches a request id, sends exactly
//! one request and normalises the outcome.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::{Method, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Serialize;

use ramadan_core::operation::Operation;

use crate::config::GatewayConfig;
use crate::error::{GatewayError, GatewayResult};

/// Header carrying the per-request correlation id.
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Everything except RFC 3986 unreserved characters is escaped in path
/// segments.
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Stateless HTTP client for the Ramadan Helper backend.
///
/// Cloning is cheap: clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct GatewayClient {
    http: reqwest::Client,
    base_url: String,
}

impl GatewayClient {
    /// Build a client from explicit configuration.
    pub fn new(config: GatewayConfig) -> GatewayResult<Self> {
        let mut headers = HeaderMap::new();
        for (name, value) in &config.default_headers {
            let header_name = HeaderName::from_bytes(name.as_bytes()).map_err(|e| {
                GatewayError::Config(format!("invalid header name '{name}': {e}"))
            })?;
            let header_value = HeaderValue::from_str(value).map_err(|e| {
                GatewayError::Config(format!("invalid value for header '{name}': {e}"))
            })?;
            headers.append(header_name, header_value);
        }

        let mut builder = reqwest::Client::builder()
            .default_headers(headers)
            .user_agent(config.user_agent.clone());
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder
            .build()
            .map_err(|e| GatewayError::Config(format!("failed to build HTTP client: {e}")))?;

        Ok(Self::with_client(http, config.normalized_base_url()))
    }

    /// Create a client reusing an existing [`reqwest::Client`].
    pub fn with_client(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Backend base URL, without trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // ---- request helpers used by the api modules ----

    pub(crate) async fn get<T: DeserializeOwned>(
        &self,
        operation: Operation,
        path: &str,
    ) -> GatewayResult<T> {
        self.dispatch(operation, Method::GET, path, |req| req).await
    }

    pub(crate) async fn get_with_query<T, Q>(
        &self,
        operation: Operation,
        path: &str,
        query: &Q,
    ) -> GatewayResult<T>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        self.dispatch(operation, Method::GET, path, |req| req.query(query))
            .await
    }

    pub(crate) async fn post<T, B>(
        &self,
        operation: Operation,
        path: &str,
        body: &B,
    ) -> GatewayResult<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.dispatch(operation, Method::POST, path, |req| req.json(body))
            .await
    }

    pub(crate) async fn put<T, B>(
        &self,
        operation: Operation,
        path: &str,
        body: &B,
    ) -> GatewayResult<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.dispatch(operation, Method::PUT, path, |req| req.json(body))
            .await
    }

    // ---- private helpers ----

    /// Send one request and decode its response.
    ///
    /// `build` adds the query string or body to the prepared request.
    async fn dispatch<T, F>(
        &self,
        operation: Operation,
        method: Method,
        path: &str,
        build: F,
    ) -> GatewayResult<T>
    where
        T: DeserializeOwned,
        F: FnOnce(RequestBuilder) -> RequestBuilder,
    {
        let request_id = uuid::Uuid::new_v4().to_string();
        tracing::debug!(%operation, %method, path, %request_id, "Sending gateway request");

        let request = self
            .http
            .request(method, format!("{}{}", self.base_url, path))
            .header(REQUEST_ID_HEADER, request_id.as_str());

        let response = build(request).send().await.map_err(|source| {
            tracing::warn!(%operation, %request_id, error = %source, "Backend unreachable");
            GatewayError::Network { operation, source }
        })?;

        let response = Self::ensure_success(operation, &request_id, response).await?;
        Self::parse_response(operation, &request_id, response).await
    }

    /// Return the response unchanged on a 2xx status, otherwise a
    /// [`GatewayError::RequestFailed`] carrying the status and body text.
    async fn ensure_success(
        operation: Operation,
        request_id: &str,
        response: reqwest::Response,
    ) -> GatewayResult<reqwest::Response> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            tracing::warn!(
                %operation,
                request_id,
                status = status.as_u16(),
                "Backend rejected request",
            );
            return Err(GatewayError::RequestFailed {
                operation,
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }

    /// Decode a successful JSON body into the expected type.
    async fn parse_response<T: DeserializeOwned>(
        operation: Operation,
        request_id: &str,
        response: reqwest::Response,
    ) -> GatewayResult<T> {
        let bytes = response
            .bytes()
            .await
            .map_err(|source| GatewayError::Network { operation, source })?;

        serde_json::from_slice(&bytes).map_err(|source| {
            tracing::warn!(%operation, request_id, error = %source, "Undecodable backend response");
            GatewayError::Decode { operation, source }
        })
    }
}

/// Percent-encode caller data for use as a single path segment.
pub(crate) fn segment(raw: &str) -> String {
    utf8_percent_encode(raw, PATH_SEGMENT).to_string()
}
