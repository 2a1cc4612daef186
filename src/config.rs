//! Client configuration.
//!
//! Defines `ClientConfig` and environment variable loading. Paths here only
//! tell the client where to send requests; the matching handlers are set up
//! wherever the proxy itself is started.

use std::env;
use std::time::Duration;

pub const DEFAULT_PROXY: &str = "localhost:8080";
pub const DEFAULT_PROXY_HOST: &str = "martian.proxy";
pub const DEFAULT_CONFIGURE_PATH: &str = "/configure";
pub const DEFAULT_RESET_VERIFICATIONS_PATH: &str = "/verify/reset";
pub const DEFAULT_CHECK_VERIFICATIONS_PATH: &str = "/verify";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// `host:port` of the running proxy; all traffic is forwarded through it.
    pub proxy: String,
    /// Virtual host the proxy answers its own API on.
    pub proxy_host: String,
    pub configure_path: String,
    pub reset_verifications_path: String,
    pub check_verifications_path: String,
    /// Applied to connect and to the whole request/response exchange.
    pub timeout: Option<Duration>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            proxy: DEFAULT_PROXY.to_string(),
            proxy_host: DEFAULT_PROXY_HOST.to_string(),
            configure_path: DEFAULT_CONFIGURE_PATH.to_string(),
            reset_verifications_path: DEFAULT_RESET_VERIFICATIONS_PATH.to_string(),
            check_verifications_path: DEFAULT_CHECK_VERIFICATIONS_PATH.to_string(),
            timeout: None,
        }
    }
}

fn get_env_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

fn get_env_u64(key: &str) -> Option<u64> {
    env::var(key).ok().and_then(|s| s.trim().parse().ok())
}

impl ClientConfig {
    pub fn new(proxy: impl Into<String>) -> Self {
        Self {
            proxy: proxy.into(),
            ..Self::default()
        }
    }

    /// Defaults overridden by `MARTIAN_*` environment variables.
    ///
    /// `MARTIAN_TIMEOUT_MS` is ignored when it does not parse as an integer.
    pub fn from_env() -> Self {
        Self {
            proxy: get_env_or("MARTIAN_PROXY", DEFAULT_PROXY),
            proxy_host: get_env_or("MARTIAN_PROXY_HOST", DEFAULT_PROXY_HOST),
            configure_path: get_env_or("MARTIAN_CONFIGURE_PATH", DEFAULT_CONFIGURE_PATH),
            reset_verifications_path: get_env_or(
                "MARTIAN_RESET_VERIFICATIONS_PATH",
                DEFAULT_RESET_VERIFICATIONS_PATH,
            ),
            check_verifications_path: get_env_or(
                "MARTIAN_CHECK_VERIFICATIONS_PATH",
                DEFAULT_CHECK_VERIFICATIONS_PATH,
            ),
            timeout: get_env_u64("MARTIAN_TIMEOUT_MS").map(Duration::from_millis),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}
