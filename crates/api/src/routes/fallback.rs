//! Catch-all for unknown paths.

use axum::extract::Request;
use axum::response::{IntoResponse, Response};

use crate::error::ApiError;
use crate::routes::remote_addr;

pub async fn not_found(request: Request) -> Response {
    let path = request.uri().path().to_string();
    tracing::info!(
        method = %request.method(),
        path = %path,
        remote_addr = %remote_addr(request.extensions()),
        "no route found"
    );

    ApiError::NotFound { path }.into_response()
}
