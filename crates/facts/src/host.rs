//! Facts about the machine the service runs on.

use std::num::NonZeroUsize;

use sysinfo::System;

/// Placeholder reported when the hostname cannot be determined.
pub const UNKNOWN_HOSTNAME: &str = "unknown";

/// Returns the network hostname, or `"unknown"` if the lookup fails.
pub fn hostname() -> String {
    System::host_name()
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| UNKNOWN_HOSTNAME.to_string())
}

/// Operating system the binary was built for, e.g. `"linux"`.
pub fn os() -> &'static str {
    std::env::consts::OS
}

/// CPU architecture the binary was built for, e.g. `"x86_64"`.
pub fn architecture() -> &'static str {
    std::env::consts::ARCH
}

/// Returns `"<os>-<arch>"`, e.g. `"linux-x86_64"`.
pub fn platform_version() -> String {
    format!("{}-{}", os(), architecture())
}

/// Logical CPUs available to this process. Never zero.
pub fn cpu_count() -> usize {
    std::thread::available_parallelism()
        .map(NonZeroUsize::get)
        .unwrap_or(1)
}

/// Compiler version this binary was built with, e.g. `"rustc 1.85.0 (...)"`.
pub fn rust_version() -> &'static str {
    env!("FACTS_RUSTC_VERSION")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hostname_is_never_empty() {
        assert!(!hostname().is_empty());
    }

    #[test]
    fn platform_version_joins_os_and_arch() {
        let version = platform_version();
        assert_eq!(version, format!("{}-{}", os(), architecture()));
        assert!(version.len() >= 3);
        assert!(version.contains('-'));
    }

    #[test]
    fn cpu_count_is_positive() {
        assert!(cpu_count() >= 1);
    }

    #[test]
    fn rust_version_is_recorded() {
        assert!(!rust_version().is_empty());
    }
}
