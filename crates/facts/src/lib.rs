//! Host and process facts for the info service.
//!
//! Everything here is cheap to compute and safe to call from any number of
//! concurrent requests. The only process-wide state is the start instant
//! held by [`uptime`], which is written once and read afterwards.

pub mod host;
pub mod uptime;

pub use host::{architecture, cpu_count, hostname, os, platform_version, rust_version};
pub use uptime::{Uptime, mark_process_start, process_uptime, utc_now_rfc3339};
