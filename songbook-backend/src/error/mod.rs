use std::any::Any;

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use axum_extra::extract::QueryRejection;
use songbook_api::common::Envelope;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{0}")]
    InvalidParameter(&'static str),
    #[error("Could not serialize {0}")]
    SerializeRequest(&'static str),
    #[error(transparent)]
    ExtractRequestBody(#[from] JsonRejection),
    #[error(transparent)]
    ExtractRequestQuery(#[from] QueryRejection),

    #[error("{0}")]
    NotFound(&'static str),

    #[error("Could not fetch song information from enrichment service")]
    EnrichmentUnavailable(#[source] color_eyre::Report),
    #[error("Could not decode song information from enrichment service")]
    EnrichmentDecode(#[source] color_eyre::Report),

    #[error("Could not checkout a connection from connection pool")]
    CheckoutConnectionPool,
    #[error(transparent)]
    Storage(#[from] diesel::result::Error),

    #[error("Request timed out after {0:?}")]
    RequestTimeout(std::time::Duration),

    #[error(transparent)]
    Internal(#[from] color_eyre::Report),
}

impl Error {
    /// Response body used when a handler panics instead of returning.
    pub fn from_panic(panic: Box<dyn Any + Send + 'static>) -> Response {
        let message = if let Some(message) = panic.downcast_ref::<&str>() {
            (*message).to_owned()
        } else if let Some(message) = panic.downcast_ref::<String>() {
            message.clone()
        } else {
            "unknown panic payload".to_owned()
        };
        Self::Internal(color_eyre::eyre::eyre!("handler panicked: {message}")).into_response()
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let message = match &self {
            Error::InvalidParameter(_) | Error::NotFound(_) => {
                tracing::warn!(error = %self);
                self.to_string()
            }
            Error::ExtractRequestBody(_) => {
                tracing::warn!(error = %self);
                "Could not decode request body".into()
            }
            Error::ExtractRequestQuery(_) => {
                tracing::warn!(error = %self);
                "Could not decode query parameters".into()
            }
            Error::EnrichmentUnavailable(_) | Error::EnrichmentDecode(_) => {
                tracing::error!(error = ?self);
                self.to_string()
            }
            Error::CheckoutConnectionPool | Error::Storage(_) => {
                tracing::error!(error = ?self);
                "Could not access song storage".into()
            }
            Error::RequestTimeout(_) => {
                tracing::error!(error = %self);
                "Request timed out".into()
            }
            Error::SerializeRequest(_) | Error::Internal(_) => {
                tracing::error!(error = ?self);
                "Internal server error".into()
            }
        };
        (StatusCode::OK, Json(Envelope::error(message))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use http_body_util::BodyExt;
    use rstest::rstest;
    use serde_json::{json, Value};

    use super::*;

    async fn to_json(error: Error) -> Value {
        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::OK);
        let body = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&body).unwrap()
    }

    #[rstest]
    #[case(Error::InvalidParameter("Invalid song id"), "Invalid song id")]
    #[case(Error::NotFound("Song not found"), "Song not found")]
    #[case(Error::CheckoutConnectionPool, "Could not access song storage")]
    #[case(Error::Storage(diesel::result::Error::BrokenTransactionManager), "Could not access song storage")]
    #[case(Error::RequestTimeout(std::time::Duration::from_secs(30)), "Request timed out")]
    #[case(Error::Internal(color_eyre::eyre::eyre!("secret detail")), "Internal server error")]
    #[tokio::test]
    async fn test_envelope(#[case] error: Error, #[case] message: &str) {
        assert_eq!(to_json(error).await, json!({"status": "Error", "error": message}));
    }

    #[tokio::test]
    async fn test_from_panic() {
        let response = Error::from_panic(Box::new("boom"));
        let body = response.into_body().collect().await.unwrap().to_bytes();
        let body: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(body, json!({"status": "Error", "error": "Internal server error"}));
    }
}
