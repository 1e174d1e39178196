use std::path::Path;
use std::time::Duration;

use anyhow::Context;
use serde::Deserialize;

/// Server configuration.
///
/// `max_reqsize` is the capacity of the receive buffer used to frame a
/// request and `max_ressize` the exclusive upper bound on an encoded
/// response. Neither is validated beyond being used as a size.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub max_reqsize: usize,
    pub max_ressize: usize,
    /// Upper bound on reading one request frame. `None` blocks until the
    /// peer sends the separator, closes, or the buffer fills.
    pub read_timeout_ms: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            max_reqsize: 8192,
            max_ressize: 8192,
            read_timeout_ms: None,
        }
    }
}

impl Config {
    /// Loads configuration from the process environment.
    ///
    /// See [`Config::from_lookup`] for the variables consulted.
    pub fn load() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a configuration from a key lookup.
    ///
    /// If `HEARTH_CONFIG` names a file it is parsed as YAML first, otherwise
    /// defaults are used. `HEARTH_HOST`, `HEARTH_PORT`, `HEARTH_MAX_REQSIZE`,
    /// `HEARTH_MAX_RESSIZE` and `HEARTH_READ_TIMEOUT_MS` then override the
    /// individual fields.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = match lookup("HEARTH_CONFIG") {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };

        if let Some(host) = lookup("HEARTH_HOST") {
            cfg.host = host;
        }
        if let Some(port) = lookup("HEARTH_PORT") {
            cfg.port = port
                .parse()
                .with_context(|| format!("invalid HEARTH_PORT: {port}"))?;
        }
        if let Some(size) = lookup("HEARTH_MAX_REQSIZE") {
            cfg.max_reqsize = size
                .parse()
                .with_context(|| format!("invalid HEARTH_MAX_REQSIZE: {size}"))?;
        }
        if let Some(size) = lookup("HEARTH_MAX_RESSIZE") {
            cfg.max_ressize = size
                .parse()
                .with_context(|| format!("invalid HEARTH_MAX_RESSIZE: {size}"))?;
        }
        if let Some(ms) = lookup("HEARTH_READ_TIMEOUT_MS") {
            cfg.read_timeout_ms = Some(
                ms.parse()
                    .with_context(|| format!("invalid HEARTH_READ_TIMEOUT_MS: {ms}"))?,
            );
        }

        Ok(cfg)
    }

    /// Parses a YAML document. Missing fields take their defaults.
    pub fn from_yaml_str(yaml: &str) -> anyhow::Result<Self> {
        serde_yaml::from_str(yaml).context("invalid configuration")
    }

    pub fn from_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        Self::from_yaml_str(&contents)
    }

    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn read_timeout(&self) -> Option<Duration> {
        self.read_timeout_ms.map(Duration::from_millis)
    }
}
