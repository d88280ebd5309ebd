use std::time::Duration;

use crate::error::{GatewayError, GatewayResult};

/// Base URL used when `RAMADAN_API_BASE_URL` is not set.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000/api";

/// User agent sent with every request.
pub const DEFAULT_USER_AGENT: &str = concat!("ramadan-gateway/", env!("CARGO_PKG_VERSION"));

/// Gateway configuration, injected at construction.
///
/// Build one explicitly with [`GatewayConfig::new`] or load it from the
/// environment with [`GatewayConfig::from_env`].
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Backend base URL including the `/api` prefix. Trailing slashes are
    /// ignored.
    pub base_url: String,
    /// Headers added to every request, e.g. an `Authorization` token.
    pub default_headers: Vec<(String, String)>,
    /// Whole-request timeout. `None` means calls wait indefinitely.
    pub request_timeout: Option<Duration>,
    pub user_agent: String,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl GatewayConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            default_headers: Vec::new(),
            request_timeout: None,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }

    /// Add a header sent with every request.
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.default_headers.push((name.into(), value.into()));
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = Some(timeout);
        self
    }

    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                    | Default                      |
    /// |----------------------------|------------------------------|
    /// | `RAMADAN_API_BASE_URL`     | `http://localhost:8000/api`  |
    /// | `RAMADAN_API_TIMEOUT_SECS` | unset (no timeout)           |
    /// | `RAMADAN_API_HEADERS`      | unset; `Name: value, ...`    |
    pub fn from_env() -> GatewayResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) but reads variables through
    /// `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> GatewayResult<Self> {
        let base_url = lookup("RAMADAN_API_BASE_URL")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.into());

        let request_timeout = match lookup("RAMADAN_API_TIMEOUT_SECS") {
            Some(raw) => {
                let secs: u64 = raw.trim().parse().map_err(|_| {
                    GatewayError::Config(format!(
                        "RAMADAN_API_TIMEOUT_SECS must be a whole number of seconds, got '{raw}'"
                    ))
                })?;
                Some(Duration::from_secs(secs))
            }
            None => None,
        };

        let default_headers = match lookup("RAMADAN_API_HEADERS") {
            Some(raw) => parse_headers(&raw)?,
            None => Vec::new(),
        };

        Ok(Self {
            base_url,
            default_headers,
            request_timeout,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        })
    }

    /// Base URL without trailing slashes.
    pub fn normalized_base_url(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }
}

/// Parse comma-separated `Name: value` pairs.
fn parse_headers(raw: &str) -> GatewayResult<Vec<(String, String)>> {
    raw.split(',')
        .map(str::trim)
        .filter(|pair| !pair.is_empty())
        .map(|pair| -> GatewayResult<(String, String)> {
            let (name, value) = pair.split_once(':').ok_or_else(|| {
                GatewayError::Config(format!("header '{pair}' must look like 'Name: value'"))
            })?;
            Ok((name.trim().to_string(), value.trim().to_string()))
        })
        .collect()
}
