//! Feed configuration handed to the app by its host.
//!
//! SYSTEM CONTEXT
//! ==============
//! The server generates a fresh client identifier for every page render and
//! writes it, together with the feed endpoint and decode policy, into `<meta>`
//! tags in the document head. `hydrate()` reads the same tags back so the
//! browser renders exactly what the server rendered.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use blocks::DecodePolicy;

/// Block server endpoint used when the host does not configure one.
pub const DEFAULT_FEED_ENDPOINT: &str = "ws://localhost:8080/ws";

/// `<meta name>` carrying the client identifier.
pub const META_CLIENT_ID: &str = "block-feed:client-id";
/// `<meta name>` carrying the WebSocket endpoint.
pub const META_ENDPOINT: &str = "block-feed:endpoint";
/// `<meta name>` carrying the decode policy name.
pub const META_POLICY: &str = "block-feed:policy";

/// Configuration for one mounted feed view.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FeedConfig {
    /// WebSocket URL of the block server.
    pub endpoint: String,
    /// Identifier used to label this session in the UI. Never sent.
    pub client_id: String,
    /// How strictly incoming frames are checked.
    pub policy: DecodePolicy,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self::new(String::new())
    }
}

impl FeedConfig {
    /// Config for `client_id` against the default endpoint and lenient policy.
    pub fn new(client_id: impl Into<String>) -> Self {
        Self {
            endpoint: DEFAULT_FEED_ENDPOINT.to_owned(),
            client_id: client_id.into(),
            policy: DecodePolicy::default(),
        }
    }

    #[must_use]
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    #[must_use]
    pub fn with_policy(mut self, policy: DecodePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Display label for the session, e.g. `user-k3j9x0a`.
    #[must_use]
    pub fn client_label(&self) -> String {
        format!("user-{}", self.client_id)
    }

    /// Rebuild a config from `<meta>` values looked up by name.
    ///
    /// Returns `None` when the client identifier is missing. A missing or
    /// blank endpoint falls back to [`DEFAULT_FEED_ENDPOINT`]; an unknown
    /// policy name falls back to the default policy.
    pub fn from_meta(lookup: impl Fn(&str) -> Option<String>) -> Option<Self> {
        let client_id = lookup(META_CLIENT_ID)?;
        let mut config = Self::new(client_id);
        if let Some(endpoint) = lookup(META_ENDPOINT).filter(|e| !e.trim().is_empty()) {
            config.endpoint = endpoint;
        }
        if let Some(policy) = lookup(META_POLICY).as_deref().and_then(DecodePolicy::from_name) {
            config.policy = policy;
        }
        Some(config)
    }

    /// Read the config from the current document's `<meta>` tags.
    #[cfg(feature = "hydrate")]
    pub fn from_document() -> Option<Self> {
        let document = web_sys::window()?.document()?;
        Self::from_meta(|name| {
            document
                .query_selector(&format!("meta[name=\"{name}\"]"))
                .ok()
                .flatten()
                .and_then(|el| el.get_attribute("content"))
        })
    }
}
