//! HTTP info and health-check service.
//!
//! Exposes `/` with service metadata, host facts, process uptime and an
//! echo of the incoming request, plus `/health` for liveness probes.
//! Every other path answers 404.

pub mod config;
pub mod error;
pub mod routes;

use std::io;
use std::net::SocketAddr;

use axum::Router;
use axum::routing::any;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

/// Creates the Axum application router.
pub fn create_app() -> Router {
    Router::new()
        .route(routes::home::PATH, any(routes::home::info))
        .route(routes::health::PATH, any(routes::health::check))
        .fallback(routes::fallback::not_found)
        .layer(TraceLayer::new_for_http())
}

/// Serves the application on `listener` until the process is terminated.
///
/// Peer addresses are recorded on each request so handlers can report the
/// client IP.
pub async fn serve(listener: TcpListener) -> io::Result<()> {
    let app = create_app().into_make_service_with_connect_info::<SocketAddr>();
    axum::serve(listener, app).await
}
