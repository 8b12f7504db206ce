use std::time::Duration;

use crate::error::ConfigError;

/// Default maximum bytes per JSON-RPC message (1 MiB).
pub const DEFAULT_MAX_LINE_BYTES: usize = 1024 * 1024;

const MAX_LINE_BYTES_VAR: &str = "MCP_MAX_LINE_BYTES";
const REQUEST_TIMEOUT_VAR: &str = "MCP_REQUEST_TIMEOUT_SECS";

/// Listener configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Lines longer than this are logged and skipped.
    pub max_line_bytes: usize,
    /// Deadline handed to each operation through its [`Context`](crate::context::Context).
    pub request_timeout: Option<Duration>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            max_line_bytes: DEFAULT_MAX_LINE_BYTES,
            request_timeout: None,
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment.
    ///
    /// - `MCP_MAX_LINE_BYTES` (optional, default 1 MiB) — max bytes per message line
    /// - `MCP_REQUEST_TIMEOUT_SECS` (optional, no default) — deadline per call
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`ServerConfig::from_env`] but reads variables through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let max_line_bytes = match lookup(MAX_LINE_BYTES_VAR) {
            Some(val) => parse_positive(MAX_LINE_BYTES_VAR, &val)? as usize,
            None => DEFAULT_MAX_LINE_BYTES,
        };

        let request_timeout = lookup(REQUEST_TIMEOUT_VAR)
            .map(|val| parse_positive(REQUEST_TIMEOUT_VAR, &val).map(Duration::from_secs))
            .transpose()?;

        Ok(Self {
            max_line_bytes,
            request_timeout,
        })
    }
}

fn parse_positive(var: &'static str, value: &str) -> Result<u64, ConfigError> {
    match value.trim().parse::<u64>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(ConfigError::Invalid {
            var,
            value: value.to_string(),
        }),
    }
}
