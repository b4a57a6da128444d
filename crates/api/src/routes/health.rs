//! Health check endpoint.

use axum::extract::Request;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::error::ApiError;
use crate::routes::{json_response, remote_addr};

pub const PATH: &str = "/health";

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub timestamp: String,
    pub uptime_seconds: u64,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy",
            timestamp: facts::utc_now_rfc3339(),
            uptime_seconds: facts::process_uptime().seconds,
        }
    }
}

/// ANY /health — liveness probe.
pub async fn check(request: Request) -> Response {
    tracing::info!(
        method = %request.method(),
        remote_addr = %remote_addr(request.extensions()),
        "health check"
    );

    json_response(&HealthResponse::healthy()).unwrap_or_else(ApiError::into_response)
}
