//! Client configuration.

use crate::forecast::row_decoder::ColumnPolicy;
use bon::Builder;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://www.meteociel.fr";
pub const DEFAULT_USER_AGENT: &str = concat!("meteociel-rs/", env!("CARGO_PKG_VERSION"));

/// Settings for a [`crate::Meteociel`] client.
///
/// # Examples
///
/// ```
/// use meteociel::{ClientConfig, ColumnPolicy};
/// use std::time::Duration;
///
/// let config = ClientConfig::builder()
///     .timeout(Duration::from_secs(10))
///     .column_policy(ColumnPolicy::Independent)
///     .build();
/// assert_eq!(config.base_url, "https://www.meteociel.fr");
/// assert_eq!(config.timeout, Some(Duration::from_secs(10)));
/// ```
#[derive(Debug, Clone, Builder)]
pub struct ClientConfig {
    /// Site root every page path is joined onto. Point it at a mirror or a local
    /// server for testing.
    #[builder(into, default = DEFAULT_BASE_URL.to_string())]
    pub base_url: String,
    #[builder(into, default = DEFAULT_USER_AGENT.to_string())]
    pub user_agent: String,
    /// Overall deadline for each request. No deadline when unset.
    pub timeout: Option<Duration>,
    /// How a malformed cell affects the rest of its row.
    #[builder(default)]
    pub column_policy: ColumnPolicy,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert!(config.user_agent.starts_with("meteociel-rs/"));
        assert_eq!(config.timeout, None);
        assert_eq!(config.column_policy, ColumnPolicy::AbortRow);
    }

    #[test]
    fn test_builder_overrides() {
        let config = ClientConfig::builder()
            .base_url("http://127.0.0.1:9000")
            .user_agent("test-agent")
            .build();
        assert_eq!(config.base_url, "http://127.0.0.1:9000");
        assert_eq!(config.user_agent, "test-agent");
    }
}
