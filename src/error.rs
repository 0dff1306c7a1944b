use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;
use crate::models::ErrorBody;

#[derive(Debug, Error)]
pub enum RecipeError {
    #[error("Method Not Allowed")]
    MethodNotAllowed,

    #[error("API key is not configured.")]
    MissingApiKey,

    #[error("{0}")]
    InvalidRequest(#[from] serde_json::Error),

    #[error("Google API Error: {body}")]
    Upstream { status: u16, body: String },

    #[error("{0}")]
    InvalidUpstreamBody(serde_json::Error),

    #[error("invalid upstream endpoint: {0}")]
    InvalidEndpoint(String),

    #[error("{0}")]
    Transport(reqwest::Error)
}

impl From<reqwest::Error> for RecipeError {

    fn from(err: reqwest::Error) -> Self {

        // the request url carries the api key
        RecipeError::Transport(err.without_url())

    }

}

impl RecipeError {

    pub fn status_code(&self) -> StatusCode {

        match self {
            RecipeError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            RecipeError::Upstream { status, .. } => {
                StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY)
            }
            RecipeError::MissingApiKey
            | RecipeError::InvalidRequest(_)
            | RecipeError::InvalidUpstreamBody(_)
            | RecipeError::InvalidEndpoint(_)
            | RecipeError::Transport(_) => StatusCode::INTERNAL_SERVER_ERROR
        }

    }

}

impl IntoResponse for RecipeError {

    fn into_response(self) -> Response {

        let status = self.status_code();

        match &self {
            RecipeError::MethodNotAllowed => return (status, "Method Not Allowed").into_response(),
            RecipeError::MissingApiKey => tracing::warn!("rejecting request: {}", self),
            RecipeError::Upstream { status, body } => {
                tracing::error!(status, body = %body, "Google API Error")
            }
            RecipeError::InvalidRequest(_)
            | RecipeError::InvalidUpstreamBody(_)
            | RecipeError::InvalidEndpoint(_)
            | RecipeError::Transport(_) => {
                tracing::error!(error = %self, "Function Error")
            }
        }

        (status, Json(ErrorBody { error: self.to_string() })).into_response()

    }

}

#[cfg(test)]
mod tests {

    use super::*;
    use axum::body::to_bytes;
    use serde_json::{Value, json};

    async fn body_json(response: Response) -> Value {

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()

    }

    #[tokio::test]
    async fn test_method_not_allowed_is_plain_text() {

        let response = RecipeError::MethodNotAllowed.into_response();
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&bytes[..], b"Method Not Allowed");

    }

    #[tokio::test]
    async fn test_missing_api_key_message() {

        let response = RecipeError::MissingApiKey.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_json(response).await, json!({"error": "API key is not configured."}));

    }

    #[tokio::test]
    async fn test_upstream_status_passes_through() {

        let err = RecipeError::Upstream {
            status: 429,
            body: "quota exceeded".to_string()
        };
        let response = err.into_response();

        assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);
        assert_eq!(body_json(response).await, json!({"error": "Google API Error: quota exceeded"}));

    }

    #[tokio::test]
    async fn test_parse_error_is_server_error() {

        let parse_err = serde_json::from_str::<Value>("{not json").unwrap_err();
        let expected = parse_err.to_string();

        let response = RecipeError::from(parse_err).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_json(response).await["error"], expected);

    }

}
