//! Host configuration parsed from environment variables.

use blocks::DecodePolicy;
use client::config::{DEFAULT_FEED_ENDPOINT, FeedConfig};

pub const DEFAULT_PORT: u16 = 3000;

/// Errors produced while reading host configuration.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid PORT: {0}")]
    InvalidPort(String),
    #[error("FEED_ENDPOINT must be a ws:// or wss:// URL, got '{0}'")]
    InvalidEndpoint(String),
    #[error("unknown FEED_POLICY '{0}' (expected 'lenient' or 'strict')")]
    UnknownPolicy(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostConfig {
    pub port: u16,
    pub feed_endpoint: String,
    pub feed_policy: DecodePolicy,
}

impl HostConfig {
    /// Build typed host config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `FEED_ENDPOINT`: default `ws://localhost:8080/ws`
    /// - `FEED_POLICY`: `lenient` (default) or `strict`
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = match lookup("PORT") {
            Some(raw) => raw.trim().parse::<u16>().map_err(|_| ConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };
        let feed_endpoint = parse_endpoint(lookup("FEED_ENDPOINT").as_deref())?;
        let feed_policy = parse_policy(lookup("FEED_POLICY").as_deref())?;

        Ok(Self { port, feed_endpoint, feed_policy })
    }

    /// Feed config for one page render, labeled with `client_id`.
    pub fn feed_config(&self, client_id: String) -> FeedConfig {
        FeedConfig::new(client_id)
            .with_endpoint(self.feed_endpoint.clone())
            .with_policy(self.feed_policy)
    }
}

fn parse_endpoint(raw: Option<&str>) -> Result<String, ConfigError> {
    let endpoint = raw.map_or(DEFAULT_FEED_ENDPOINT, str::trim);
    if endpoint.starts_with("ws://") || endpoint.starts_with("wss://") {
        Ok(endpoint.to_owned())
    } else {
        Err(ConfigError::InvalidEndpoint(endpoint.to_owned()))
    }
}

fn parse_policy(raw: Option<&str>) -> Result<DecodePolicy, ConfigError> {
    match raw {
        None => Ok(DecodePolicy::default()),
        Some(name) => DecodePolicy::from_name(name).ok_or_else(|| ConfigError::UnknownPolicy(name.to_owned())),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
