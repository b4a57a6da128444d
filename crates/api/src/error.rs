//! API error types with HTTP response mapping.

use std::io;

use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use thiserror::Error;

use crate::config::ConfigError;

/// Body of every plain-text 500 response.
pub const INTERNAL_ERROR_BODY: &str = "Internal Server Error";

/// Request-level error that maps to an HTTP response.
#[derive(Debug, Error)]
pub enum ApiError {
    /// No route matches the request path.
    #[error("no route for path '{path}'")]
    NotFound { path: String },

    /// The response record could not be encoded as JSON.
    #[error("failed to encode response: {0}")]
    Serialization(#[from] serde_json::Error),
}

#[derive(Serialize)]
struct NotFoundBody<'a> {
    error: &'static str,
    status_code: u16,
    path: &'a str,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::NotFound { path } => {
                let status = StatusCode::NOT_FOUND;
                let body = NotFoundBody {
                    error: "Not Found",
                    status_code: status.as_u16(),
                    path: &path,
                };
                (status, axum::Json(body)).into_response()
            }
            ApiError::Serialization(err) => {
                tracing::error!(error = %err, "failed to encode JSON response");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
                    INTERNAL_ERROR_BODY,
                )
                    .into_response()
            }
        }
    }
}

/// Fatal errors raised while starting the server.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: io::Error,
    },

    #[error("server error: {0}")]
    Serve(#[source] io::Error),
}
