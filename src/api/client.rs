//! api::client
//!
//! Authenticated HTTP execution of built requests.
//!
//! # Design
//!
//! Every request carries the account's `x-api-user` / `x-api-key`
//! headers. Mutating verbs (PUT, POST, DELETE) send the payload as a
//! JSON body; GET sends it as query parameters. A 2xx response yields
//! the `data` member of the JSON envelope; anything else maps to an
//! [`ApiError`] carrying the status code. Requests are sequential and
//! never retried.

use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE, USER_AGENT};
use reqwest::{Client, Method, Response, StatusCode};
use serde::Deserialize;
use serde_json::{Map, Value};
use thiserror::Error;

use super::request::{BuiltRequest, RequestSpec, API_PATH};
use crate::core::config::Config;

/// User-Agent header value for API requests.
const USER_AGENT_VALUE: &str = "questline-cli";

/// Errors from API operations.
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    /// Credentials were rejected (401).
    #[error("authentication failed: {0}")]
    AuthFailed(String),

    /// The requested entity does not exist (404).
    #[error("not found: {0}")]
    NotFound(String),

    /// Rate limit exceeded (429).
    #[error("rate limited")]
    RateLimited,

    /// Any other non-success response.
    #[error("API error: {status} - {message}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Error message from the response body
        message: String,
    },

    /// The response body was not the expected JSON envelope.
    #[error("malformed response: {0}")]
    Parse(String),

    /// Network or connection error.
    #[error("network error: {0}")]
    Network(String),

    /// Configured credentials contain bytes a header cannot carry.
    #[error("invalid credentials: {0}")]
    InvalidCredentials(String),
}

/// Error envelope the service returns on failure.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

/// Authenticated client for the service's v3 API.
pub struct ApiClient {
    client: Client,
    api_base: String,
    user: String,
    key: String,
}

// Custom Debug to avoid exposing the API key.
impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("api_base", &self.api_base)
            .field("user", &self.user)
            .finish()
    }
}

impl ApiClient {
    /// Create a client for `base_url`, authenticating as `user`/`key`.
    pub fn new(base_url: &str, user: impl Into<String>, key: impl Into<String>) -> Self {
        ApiClient {
            client: Client::new(),
            api_base: format!("{}/{}", base_url.trim_end_matches('/'), API_PATH),
            user: user.into(),
            key: key.into(),
        }
    }

    /// Create a client from loaded configuration.
    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.base_url(),
            config.service.user.clone(),
            config.service.key.clone(),
        )
    }

    /// The versioned API base URL this client talks to.
    pub fn api_base(&self) -> &str {
        &self.api_base
    }

    /// Build and execute a request, returning the `data` member of the
    /// response envelope.
    pub async fn send(&self, spec: RequestSpec) -> Result<Value, ApiError> {
        let BuiltRequest {
            method,
            url,
            payload,
        } = spec.build(&self.api_base);

        let request = self
            .client
            .request(method.clone(), &url)
            .headers(self.headers()?);
        let request = match method {
            Method::PUT | Method::POST | Method::DELETE => request.json(&payload),
            _ => request.query(&query_pairs(&payload)),
        };

        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        self.handle_response(response).await
    }

    /// Auth and content headers attached to every request.
    fn headers(&self) -> Result<HeaderMap, ApiError> {
        let mut headers = HeaderMap::new();
        headers.insert(
            "x-api-user",
            HeaderValue::from_str(&self.user)
                .map_err(|e| ApiError::InvalidCredentials(e.to_string()))?,
        );
        headers.insert(
            "x-api-key",
            HeaderValue::from_str(&self.key)
                .map_err(|e| ApiError::InvalidCredentials(e.to_string()))?,
        );
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(USER_AGENT, HeaderValue::from_static(USER_AGENT_VALUE));
        Ok(headers)
    }

    /// Unwrap the response envelope, mapping errors appropriately.
    async fn handle_response(&self, response: Response) -> Result<Value, ApiError> {
        let status = response.status();

        if status.is_success() {
            let body: Value = response
                .json()
                .await
                .map_err(|e| ApiError::Parse(e.to_string()))?;
            return Ok(body.get("data").cloned().unwrap_or(Value::Null));
        }

        let message = response
            .json::<ErrorBody>()
            .await
            .map(|body| body.message)
            .unwrap_or_else(|_| "unknown error".to_string());

        Err(match status {
            StatusCode::UNAUTHORIZED => ApiError::AuthFailed(message),
            StatusCode::NOT_FOUND => ApiError::NotFound(message),
            StatusCode::TOO_MANY_REQUESTS => ApiError::RateLimited,
            _ => ApiError::Api {
                status: status.as_u16(),
                message,
            },
        })
    }
}

/// Flatten a payload map into query parameters for GET requests.
fn query_pairs(fields: &Map<String, Value>) -> Vec<(String, String)> {
    fields
        .iter()
        .map(|(key, value)| {
            let value = match value {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            };
            (key.clone(), value)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn api_base_includes_version_path() {
        let client = ApiClient::new("https://habitica.com/", "u", "k");
        assert_eq!(client.api_base(), "https://habitica.com/api/v3");
    }

    #[test]
    fn query_pairs_unquote_strings() {
        let mut fields = Map::new();
        fields.insert("type".to_string(), json!("todos"));
        fields.insert("limit".to_string(), json!(30));
        let mut pairs = query_pairs(&fields);
        pairs.sort();
        assert_eq!(
            pairs,
            vec![
                ("limit".to_string(), "30".to_string()),
                ("type".to_string(), "todos".to_string()),
            ]
        );
    }

    #[test]
    fn debug_hides_key() {
        let client = ApiClient::new("https://habitica.com", "user-id", "secret");
        let rendered = format!("{:?}", client);
        assert!(rendered.contains("user-id"));
        assert!(!rendered.contains("secret"));
    }
}
