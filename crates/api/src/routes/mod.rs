//! Route handlers and the helpers they share.

pub mod fallback;
pub mod health;
pub mod home;

use std::net::SocketAddr;

use axum::extract::ConnectInfo;
use axum::http::{Extensions, HeaderValue, header};
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::error::ApiError;

/// Encodes `body` as a JSON response.
///
/// The body is fully encoded before the response exists, so an encoding
/// failure yields a clean 500 instead of a half-written 200.
pub fn json_response<T: Serialize>(body: &T) -> Result<Response, ApiError> {
    let bytes = serde_json::to_vec(body)?;
    Ok((
        [(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/json"),
        )],
        bytes,
    )
        .into_response())
}

/// Remote address of the connected peer as the listener reports it, e.g.
/// `127.0.0.1:51234` or `[::1]:51234`. Empty when the request did not come
/// through a listener that records connection info.
pub fn remote_addr(extensions: &Extensions) -> String {
    extensions
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.to_string())
        .unwrap_or_default()
}
