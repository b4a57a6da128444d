//! Process uptime and wall-clock timestamps.

use std::sync::OnceLock;
use std::time::{Duration, Instant};

use chrono::{SecondsFormat, Utc};

static PROCESS_START: OnceLock<Instant> = OnceLock::new();

/// Records the process start instant. Only the first call has any effect.
pub fn mark_process_start() {
    PROCESS_START.get_or_init(Instant::now);
}

fn process_start() -> Instant {
    *PROCESS_START.get_or_init(Instant::now)
}

/// Elapsed time since process start, in whole seconds and as text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Uptime {
    pub seconds: u64,
    /// `"<H> hours, <M> minutes"`; seconds are not shown.
    pub human: String,
}

impl Uptime {
    pub fn from_elapsed(elapsed: Duration) -> Self {
        let seconds = elapsed.as_secs();
        let hours = seconds / 3600;
        let minutes = (seconds % 3600) / 60;
        Self {
            seconds,
            human: format!("{hours} hours, {minutes} minutes"),
        }
    }
}

/// Uptime measured on the monotonic clock, so it never goes backwards.
pub fn process_uptime() -> Uptime {
    Uptime::from_elapsed(process_start().elapsed())
}

/// Current UTC time as RFC 3339 with whole seconds, e.g. `2026-10-18T10:00:00Z`.
pub fn utc_now_rfc3339() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true)
}
