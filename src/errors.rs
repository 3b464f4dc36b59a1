use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use std::fmt;

/// Message returned whenever TMDb answers with anything other than 200.
pub const UPSTREAM_STATUS_MESSAGE: &str = "Unable to fetch data from TMDb";
pub const UPSTREAM_UNAVAILABLE_MESSAGE: &str = "Unable to reach TMDb";
pub const UPSTREAM_TIMEOUT_MESSAGE: &str = "Timed out waiting for TMDb";
pub const INVALID_UPSTREAM_RESPONSE_MESSAGE: &str = "Invalid response from TMDb";

/// Application-specific error types.
#[derive(Debug, Clone)]
pub enum AppError {
    /// TMDb answered with a non-200 status. The status is relayed to the caller.
    UpstreamStatus(StatusCode),
    /// TMDb could not be reached (DNS, connection refused, reset).
    UpstreamUnavailable(String),
    /// The configured TMDb timeout elapsed.
    UpstreamTimeout(String),
    /// TMDb answered 200 with a body that is not JSON.
    InvalidUpstreamResponse(String),
    /// Internal server error.
    InternalError(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::UpstreamStatus(status) => write!(f, "TMDb returned {}", status),
            AppError::UpstreamUnavailable(msg) => write!(f, "TMDb unreachable: {}", msg),
            AppError::UpstreamTimeout(msg) => write!(f, "TMDb timeout: {}", msg),
            AppError::InvalidUpstreamResponse(msg) => {
                write!(f, "Invalid TMDb response: {}", msg)
            }
            AppError::InternalError(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

impl AppError {
    /// Status code and public message for this error.
    pub fn status_and_message(&self) -> (StatusCode, &'static str) {
        match self {
            AppError::UpstreamStatus(status) => (*status, UPSTREAM_STATUS_MESSAGE),
            AppError::UpstreamUnavailable(_) => {
                (StatusCode::BAD_GATEWAY, UPSTREAM_UNAVAILABLE_MESSAGE)
            }
            AppError::UpstreamTimeout(_) => {
                (StatusCode::GATEWAY_TIMEOUT, UPSTREAM_TIMEOUT_MESSAGE)
            }
            AppError::InvalidUpstreamResponse(_) => {
                (StatusCode::BAD_GATEWAY, INVALID_UPSTREAM_RESPONSE_MESSAGE)
            }
            AppError::InternalError(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
            }
        }
    }
}

impl IntoResponse for AppError {
    /// Maps each variant to its status code and a `{"error": ...}` body.
    /// Upstream detail is logged here and never sent to the caller.
    fn into_response(self) -> Response {
        match &self {
            AppError::UpstreamStatus(status) => {
                tracing::warn!("TMDb returned non-success status {}", status)
            }
            AppError::UpstreamUnavailable(msg) => tracing::error!("TMDb unreachable: {}", msg),
            AppError::UpstreamTimeout(msg) => tracing::error!("TMDb timeout: {}", msg),
            AppError::InvalidUpstreamResponse(msg) => {
                tracing::error!("Invalid TMDb response: {}", msg)
            }
            AppError::InternalError(msg) => tracing::error!("Internal error: {}", msg),
        }

        let (status, error_message) = self.status_and_message();
        let body = Json(json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}

impl From<reqwest::Error> for AppError {
    /// Classifies a transport-level failure from the TMDb client.
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            AppError::UpstreamTimeout(err.to_string())
        } else if err.is_decode() {
            AppError::InvalidUpstreamResponse(err.to_string())
        } else if err.is_builder() {
            AppError::InternalError(err.to_string())
        } else {
            AppError::UpstreamUnavailable(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upstream_status_is_relayed() {
        let (status, message) = AppError::UpstreamStatus(StatusCode::UNAUTHORIZED).status_and_message();
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(message, "Unable to fetch data from TMDb");

        let (status, _) = AppError::UpstreamStatus(StatusCode::NOT_FOUND).status_and_message();
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_transport_failures_map_to_gateway_statuses() {
        let (status, message) =
            AppError::UpstreamUnavailable("connection refused".into()).status_and_message();
        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(message, UPSTREAM_UNAVAILABLE_MESSAGE);

        let (status, message) = AppError::UpstreamTimeout("elapsed".into()).status_and_message();
        assert_eq!(status, StatusCode::GATEWAY_TIMEOUT);
        assert_eq!(message, UPSTREAM_TIMEOUT_MESSAGE);

        let (status, _) =
            AppError::InvalidUpstreamResponse("expected value".into()).status_and_message();
        assert_eq!(status, StatusCode::BAD_GATEWAY);
    }

    #[tokio::test]
    async fn test_into_response_body_hides_detail() {
        let response = AppError::UpstreamUnavailable("dns error: secret-host".into()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body, json!({"error": "Unable to reach TMDb"}));
    }
}
