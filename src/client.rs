// Blocking client for a running Martian proxy
// Uses reqwest's blocking client with the proxy configured as the HTTP forward proxy

use reqwest::blocking::Client as HttpClient;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Method, Proxy, Url};
use std::collections::HashMap;
use std::time::Duration;
use tracing::{debug, warn};

use crate::config::ClientConfig;
use crate::error::{MartianError, Result};
use crate::modifiers::Modifier;
use crate::verification::parse_verification_failures;

pub const JSON_CONTENT_TYPE: &str = "application/json; charset=utf-8";

/// A named in-memory traffic log inside the proxy, reached through two handlers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Logger {
    reset_url: Url,
    retrieve_url: Url,
}

impl Logger {
    /// POST here clears the log.
    pub fn reset_url(&self) -> &Url {
        &self.reset_url
    }

    /// GET here returns the log as HAR.
    pub fn retrieve_url(&self) -> &Url {
        &self.retrieve_url
    }
}

/// Configures modifiers on, and reads verification results from, one proxy instance.
///
/// Every call is a single blocking round trip. Failures are returned as-is;
/// nothing is retried.
pub struct Client {
    http: HttpClient,
    config: ClientConfig,
    base_url: Url,
    loggers: HashMap<String, Logger>,
}

impl Client {
    /// Client for the proxy at `host:port` (an `http://` prefix is accepted too).
    pub fn new(proxy: &str) -> Result<Self> {
        Self::with_config(ClientConfig::new(proxy))
    }

    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let http = build_http_client(&config)?;
        let base_url = Url::parse(&format!("http://{}/", config.proxy_host))
            .map_err(|_| MartianError::InvalidProxyHost(config.proxy_host.clone()))?;
        Ok(Self {
            http,
            config,
            base_url,
            loggers: HashMap::new(),
        })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Bound connect and request time for every subsequent call.
    pub fn set_timeout(&mut self, timeout: Duration) -> Result<()> {
        self.config.timeout = Some(timeout);
        self.http = build_http_client(&self.config)?;
        Ok(())
    }

    pub fn set_configure_path(&mut self, path: impl Into<String>) {
        self.config.configure_path = path.into();
    }

    pub fn set_reset_verifications_path(&mut self, path: impl Into<String>) {
        self.config.reset_verifications_path = path.into();
    }

    pub fn set_check_verifications_path(&mut self, path: impl Into<String>) {
        self.config.check_verifications_path = path.into();
    }

    /// Replace the proxy's configuration with `modifier`.
    pub fn configure(&self, modifier: &Modifier) -> Result<()> {
        let body = modifier.to_json()?;
        let url = self.martian_url(&self.config.configure_path);
        debug!(modifier = modifier.wire_name(), "configuring proxy");
        self.execute(Method::POST, &url, Some(body))?;
        Ok(())
    }

    /// Clear the proxy's in-memory verification failures.
    pub fn reset_verifications(&self) -> Result<()> {
        let url = self.martian_url(&self.config.reset_verifications_path);
        self.execute(Method::POST, &url, Some(String::new()))?;
        Ok(())
    }

    /// Every verification failure the proxy has recorded since the last reset.
    pub fn check_verifications(&self) -> Result<Vec<String>> {
        let url = self.martian_url(&self.config.check_verifications_path);
        let body = self.execute(Method::GET, &url, None)?;
        Ok(parse_verification_failures(&body)?)
    }

    /// Track a proxy log under `name`. An existing entry with the same name is replaced.
    pub fn register_logger(&mut self, name: impl Into<String>, reset_path: &str, retrieve_path: &str) {
        let name = name.into();
        let logger = Logger {
            reset_url: self.martian_url(reset_path),
            retrieve_url: self.martian_url(retrieve_path),
        };
        debug!(logger = %name, retrieve = %logger.retrieve_url, "registered logger");
        self.loggers.insert(name, logger);
    }

    pub fn deregister_logger(&mut self, name: &str) -> Option<Logger> {
        debug!(logger = %name, "deregistered logger");
        self.loggers.remove(name)
    }

    pub fn logger(&self, name: &str) -> Option<&Logger> {
        self.loggers.get(name)
    }

    /// Raw HAR text held by the named log.
    pub fn retrieve_logs(&self, name: &str) -> Result<String> {
        let logger = self.lookup_logger(name)?;
        self.execute(Method::GET, &logger.retrieve_url, None)
    }

    pub fn reset_logs(&self, name: &str) -> Result<()> {
        let logger = self.lookup_logger(name)?;
        self.execute(Method::POST, &logger.reset_url, None)?;
        Ok(())
    }

    /// `http://<proxy host>/<path>`, with each `/`-separated part of `path`
    /// appended as one literal, percent-encoded segment. Empty, `.` and `..`
    /// parts are dropped, so leading and trailing slashes don't matter.
    pub fn martian_url(&self, path: &str) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments
                .clear()
                .extend(path.split('/').filter(|part| !part.is_empty()));
        }
        url
    }

    fn lookup_logger(&self, name: &str) -> Result<&Logger> {
        self.loggers
            .get(name)
            .ok_or_else(|| MartianError::LoggerNotFound(name.to_string()))
    }

    /// One round trip. `json_body` is sent with the JSON content type; the
    /// response body is returned only for 2xx statuses.
    fn execute(&self, method: Method, url: &Url, json_body: Option<String>) -> Result<String> {
        debug!(method = %method, url = %url, "sending proxy request");

        let mut request = self.http.request(method.clone(), url.clone());
        match json_body {
            Some(body) => {
                request = request.header(CONTENT_TYPE, JSON_CONTENT_TYPE).body(body);
            }
            None if method == Method::POST => {
                request = request.body(Vec::<u8>::new());
            }
            None => {}
        }

        let response = request.send().map_err(|source| MartianError::Transport {
            method: method.to_string(),
            url: url.to_string(),
            source,
        })?;
        let status = response.status();
        let body = response.text().map_err(|source| MartianError::Transport {
            method: method.to_string(),
            url: url.to_string(),
            source,
        })?;

        if !status.is_success() {
            warn!(method = %method, url = %url, status = status.as_u16(), "proxy request failed");
            return Err(MartianError::Protocol {
                method: method.to_string(),
                url: url.to_string(),
                status: status.as_u16(),
                body,
            });
        }
        Ok(body)
    }
}

fn build_http_client(config: &ClientConfig) -> Result<HttpClient> {
    let addr = config.proxy.trim_start_matches("http://");
    let invalid = |source: reqwest::Error| MartianError::InvalidProxy {
        addr: config.proxy.clone(),
        source,
    };

    let proxy = Proxy::http(format!("http://{}", addr)).map_err(invalid)?;
    let mut builder = HttpClient::builder().proxy(proxy);
    if let Some(timeout) = config.timeout {
        builder = builder.connect_timeout(timeout).timeout(timeout);
    }
    builder.build().map_err(invalid)
}
