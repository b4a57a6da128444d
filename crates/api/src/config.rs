//! Application configuration loaded from environment variables.

use thiserror::Error;

/// Port used when `PORT` is unset or empty.
pub const DEFAULT_PORT: u16 = 8080;

/// Errors raised while reading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// `PORT` is set but is not a valid TCP port.
    #[error("invalid PORT value '{value}': expected an integer between 1 and 65535")]
    InvalidPort { value: String },
}

/// Server configuration.
///
/// Reads from environment variables:
/// - `PORT` — listen port (default: `8080`)
///
/// Surrounding whitespace in `PORT` is ignored, so a blank value means the
/// default. Port `0` is rejected rather than binding an ephemeral port.
///
/// The log filter is taken from `RUST_LOG` when tracing is initialised.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub port: u16,
}

impl Config {
    /// Loads configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_port_var(std::env::var("PORT").ok().as_deref())
    }

    /// Builds a configuration from the raw value of `PORT`, if any.
    pub fn from_port_var(value: Option<&str>) -> Result<Self, ConfigError> {
        let port = match value.map(str::trim) {
            None | Some("") => DEFAULT_PORT,
            Some(raw) => raw
                .parse()
                .ok()
                .filter(|&port: &u16| port != 0)
                .ok_or_else(|| ConfigError::InvalidPort {
                    value: raw.to_string(),
                })?,
        };
        Ok(Self { port })
    }

    /// Returns the `"host:port"` bind address string.
    pub fn addr(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self { port: DEFAULT_PORT }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_default_values() {
        let config = Config::default();
        assert_eq!(config.port, 8080);
        assert_eq!(config.addr(), "0.0.0.0:8080");
    }

    #[test]
    fn test_unset_port_uses_default() {
        assert_eq!(Config::from_port_var(None).unwrap(), Config::default());
    }

    #[test]
    fn test_empty_port_uses_default() {
        assert_eq!(Config::from_port_var(Some("")).unwrap().port, 8080);
        assert_eq!(Config::from_port_var(Some("  ")).unwrap().port, 8080);
    }

    #[test]
    fn test_explicit_port() {
        let config = Config::from_port_var(Some("9000")).unwrap();
        assert_eq!(config.port, 9000);
        assert_eq!(config.addr(), "0.0.0.0:9000");
    }

    #[test]
    fn test_port_whitespace_is_trimmed() {
        assert_eq!(Config::from_port_var(Some(" 9000 ")).unwrap().port, 9000);
    }

    #[test]
    fn test_invalid_port_is_rejected() {
        for raw in ["http", "-1", "0", "65536", "80a"] {
            let err = Config::from_port_var(Some(raw)).unwrap_err();
            assert!(matches!(err, ConfigError::InvalidPort { ref value } if value == raw));
        }
    }

    #[test]
    #[serial]
    fn test_from_env_reads_port() {
        // SAFETY: serialised with every other test that touches PORT.
        unsafe { std::env::set_var("PORT", "8181") };
        let config = Config::from_env();
        unsafe { std::env::remove_var("PORT") };
        assert_eq!(config.unwrap().port, 8181);
    }

    #[test]
    #[serial]
    fn test_from_env_without_port() {
        // SAFETY: see above.
        unsafe { std::env::remove_var("PORT") };
        assert_eq!(Config::from_env().unwrap().port, DEFAULT_PORT);
    }
}
