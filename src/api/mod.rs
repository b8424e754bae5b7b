//! Remote Data Gateway
//!
//! Request functions per backend entity, organized by domain. Shared here:
//! the base URL, bearer-auth request helpers, and the error type every
//! gateway call surfaces.

mod auth;
mod projects;
mod users;

pub use auth::*;
pub use projects::*;
pub use users::*;

use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Backend base URL, overridable at compile time.
pub fn api_url() -> &'static str {
    option_env!("API_URL").unwrap_or("http://localhost:3000")
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Network(String),
    #[error("server responded with status {status}")]
    Status { status: u16, message: Option<String> },
    #[error("failed to decode response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Message shown to the user: the backend's own message when the
    /// response body carried one, otherwise the caller's fallback.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ApiError::Status {
                message: Some(message),
                ..
            } if !message.is_empty() => message.clone(),
            _ => fallback.to_string(),
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Status { status: 401, .. })
    }
}

/// Error body shape the backend uses for non-2xx responses
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

fn network(err: gloo_net::Error) -> ApiError {
    ApiError::Network(err.to_string())
}

fn with_bearer(builder: RequestBuilder, token: &str) -> RequestBuilder {
    if token.is_empty() {
        builder
    } else {
        builder.header("Authorization", &format!("Bearer {token}"))
    }
}

async fn decode_response<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    if !response.ok() {
        let message = response
            .json::<ErrorBody>()
            .await
            .ok()
            .and_then(|body| body.message);
        return Err(ApiError::Status {
            status: response.status(),
            message,
        });
    }
    response
        .json::<T>()
        .await
        .map_err(|err| ApiError::Decode(err.to_string()))
}

pub(crate) async fn get_json<T: DeserializeOwned>(
    path: &str,
    query: &[(&'static str, String)],
    token: &str,
) -> Result<T, ApiError> {
    let url = format!("{}{}", api_url(), path);
    let builder = Request::get(&url).query(query.iter().map(|(k, v)| (*k, v.as_str())));
    let response = with_bearer(builder, token).send().await.map_err(network)?;
    decode_response(response).await
}

pub(crate) async fn post_json<T: DeserializeOwned, B: Serialize>(
    path: &str,
    body: &B,
    token: &str,
) -> Result<T, ApiError> {
    let url = format!("{}{}", api_url(), path);
    let request = with_bearer(Request::post(&url), token)
        .json(body)
        .map_err(network)?;
    let response = request.send().await.map_err(network)?;
    decode_response(response).await
}

pub(crate) async fn put_json<T: DeserializeOwned, B: Serialize>(
    path: &str,
    body: &B,
    token: &str,
) -> Result<T, ApiError> {
    let url = format!("{}{}", api_url(), path);
    let request = with_bearer(Request::put(&url), token)
        .json(body)
        .map_err(network)?;
    let response = request.send().await.map_err(network)?;
    decode_response(response).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_message_prefers_body_message() {
        let err = ApiError::Status {
            status: 409,
            message: Some("Name already taken".to_string()),
        };
        assert_eq!(err.user_message("Failed to create project"), "Name already taken");
    }

    #[test]
    fn test_user_message_falls_back() {
        let no_body = ApiError::Status {
            status: 500,
            message: None,
        };
        assert_eq!(no_body.user_message("Failed to create project"), "Failed to create project");

        let empty_body = ApiError::Status {
            status: 500,
            message: Some(String::new()),
        };
        assert_eq!(empty_body.user_message("fallback"), "fallback");

        let network = ApiError::Network("connection refused".to_string());
        assert_eq!(network.user_message("fallback"), "fallback");
    }

    #[test]
    fn test_is_unauthorized() {
        let unauthorized = ApiError::Status {
            status: 401,
            message: None,
        };
        assert!(unauthorized.is_unauthorized());
        assert!(!ApiError::Network("x".to_string()).is_unauthorized());
    }
}
