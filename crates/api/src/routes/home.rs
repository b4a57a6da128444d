//! Service information endpoint.

use axum::extract::Request;
use axum::http::header;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::error::ApiError;
use crate::routes::{json_response, remote_addr};

pub const PATH: &str = "/";

pub const SERVICE_NAME: &str = "devops-info-service";
pub const SERVICE_VERSION: &str = "1.0.0";
pub const SERVICE_DESCRIPTION: &str = "DevOps course info service";
pub const FRAMEWORK: &str = "axum";

#[derive(Debug, Serialize)]
pub struct ServiceInfo {
    pub name: &'static str,
    pub version: &'static str,
    pub description: &'static str,
    pub framework: &'static str,
}

#[derive(Debug, Serialize)]
pub struct SystemInfo {
    pub hostname: String,
    pub platform: &'static str,
    pub platform_version: String,
    pub architecture: &'static str,
    pub cpu_count: usize,
    pub rust_version: &'static str,
}

#[derive(Debug, Serialize)]
pub struct RuntimeInfo {
    pub uptime_seconds: u64,
    pub uptime_human: String,
    pub current_time: String,
    pub timezone: &'static str,
}

#[derive(Debug, Serialize)]
pub struct RequestInfo {
    pub client_ip: String,
    pub user_agent: String,
    pub method: String,
    pub path: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Endpoint {
    pub path: &'static str,
    pub method: &'static str,
    pub description: &'static str,
}

/// Routes advertised in every home response, in this order.
pub const ENDPOINTS: [Endpoint; 2] = [
    Endpoint {
        path: "/",
        method: "GET",
        description: "Service information",
    },
    Endpoint {
        path: "/health",
        method: "GET",
        description: "Health check",
    },
];

#[derive(Debug, Serialize)]
pub struct HomeResponse {
    pub service: ServiceInfo,
    pub system: SystemInfo,
    pub runtime: RuntimeInfo,
    pub request: RequestInfo,
    pub endpoints: Vec<Endpoint>,
}

impl HomeResponse {
    /// Gathers service, host and runtime facts for a request.
    pub fn collect(request: RequestInfo) -> Self {
        let uptime = facts::process_uptime();
        Self {
            service: ServiceInfo {
                name: SERVICE_NAME,
                version: SERVICE_VERSION,
                description: SERVICE_DESCRIPTION,
                framework: FRAMEWORK,
            },
            system: SystemInfo {
                hostname: facts::hostname(),
                platform: facts::os(),
                platform_version: facts::platform_version(),
                architecture: facts::architecture(),
                cpu_count: facts::cpu_count(),
                rust_version: facts::rust_version(),
            },
            runtime: RuntimeInfo {
                uptime_seconds: uptime.seconds,
                uptime_human: uptime.human,
                current_time: facts::utc_now_rfc3339(),
                timezone: "UTC",
            },
            request,
            endpoints: ENDPOINTS.to_vec(),
        }
    }
}

impl RequestInfo {
    /// Copies the echoed fields out of an incoming request.
    pub fn from_request(request: &Request) -> Self {
        Self {
            client_ip: remote_addr(request.extensions()),
            user_agent: request
                .headers()
                .get(header::USER_AGENT)
                .map(|value| String::from_utf8_lossy(value.as_bytes()).into_owned())
                .unwrap_or_default(),
            method: request.method().to_string(),
            path: request.uri().path().to_string(),
        }
    }
}

/// ANY / — returns service, host, runtime and request details.
///
/// Paths other than `/` are answered with 404.
pub async fn info(request: Request) -> Response {
    let echo = RequestInfo::from_request(&request);
    // The router only sends `/` here; this covers direct calls to the handler.
    if echo.path != PATH {
        return super::fallback::not_found(request).await;
    }

    tracing::info!(
        method = %echo.method,
        path = %echo.path,
        remote_addr = %echo.client_ip,
        "service info request"
    );

    json_response(&HomeResponse::collect(echo)).unwrap_or_else(ApiError::into_response)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn echo() -> RequestInfo {
        RequestInfo {
            client_ip: "127.0.0.1:40000".to_string(),
            user_agent: "unit".to_string(),
            method: "GET".to_string(),
            path: "/".to_string(),
        }
    }

    #[test]
    fn test_collect_fills_service_metadata() {
        let response = HomeResponse::collect(echo());
        assert_eq!(response.service.name, "devops-info-service");
        assert_eq!(response.service.version, "1.0.0");
        assert_eq!(response.service.framework, "axum");
        assert_eq!(response.runtime.timezone, "UTC");
        assert!(response.system.cpu_count >= 1);
        assert!(!response.system.hostname.is_empty());
    }

    #[test]
    fn test_endpoints_are_fixed() {
        let response = HomeResponse::collect(echo());
        assert_eq!(response.endpoints.len(), 2);
        assert_eq!(response.endpoints[0].path, "/");
        assert_eq!(response.endpoints[0].method, "GET");
        assert_eq!(response.endpoints[1].path, "/health");
        assert_eq!(response.endpoints[1].method, "GET");
    }

    #[test]
    fn test_request_info_defaults_missing_fields_to_empty() {
        let request = axum::http::Request::builder()
            .method("POST")
            .uri("/?q=1")
            .body(axum::body::Body::empty())
            .unwrap();
        let echo = RequestInfo::from_request(&request);
        assert_eq!(echo.method, "POST");
        assert_eq!(echo.path, "/");
        assert_eq!(echo.user_agent, "");
        assert_eq!(echo.client_ip, "");
    }
}
