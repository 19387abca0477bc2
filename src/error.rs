//! Error types for proxy transport construction
//!
//! One build-time error kind plus a wrapper for failures surfaced by the
//! underlying HTTP client when a transport is created.

/// A `Result` alias where the `Err` case is [`ProxyError`].
pub type Result<T> = std::result::Result<T, ProxyError>;

/// Errors produced while building proxy transport adapters.
#[derive(Debug, thiserror::Error)]
pub enum ProxyError {
    /// The supplied proxy configuration is unusable: mismatched
    /// username/password pairing, or a proxy URL without a resolvable
    /// host and port.
    #[error("invalid proxy configuration: {0}")]
    InvalidConfiguration(String),

    /// The underlying HTTP client rejected the assembled configuration.
    ///
    /// Raised from [`TransportFactory::create`](crate::transport::TransportFactory::create);
    /// network-level failures stay in the HTTP stack and never map here.
    #[error("failed to build proxied HTTP client")]
    ClientBuild(#[from] reqwest::Error),
}

impl ProxyError {
    pub(crate) fn invalid<S: Into<String>>(message: S) -> ProxyError {
        ProxyError::InvalidConfiguration(message.into())
    }
}
