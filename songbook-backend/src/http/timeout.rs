use std::time::Duration;

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};

use crate::Error;

/// Answers with an error envelope when the inner service does not respond within `duration`.
pub async fn timeout(State(duration): State<Duration>, request: Request, next: Next) -> Response {
    match tokio::time::timeout(duration, next.run(request)).await {
        Ok(response) => response,
        Err(_) => Error::RequestTimeout(duration).into_response(),
    }
}
