//! Channel configurator and proxy-detection hook
//!
//! Builds the transform applied to a generic RPC channel builder so every
//! outbound connection is tunneled through the configured forward proxy.

use std::net::SocketAddr;
use std::sync::Arc;

use url::Url;

use super::address::{BasicCredentials, ProxiedAddress, ProxyAddress};
use crate::config::{resolve_proxy_address, validate_credentials};
use crate::error::Result;

/// Hook invoked by the RPC stack per target address at connection time.
///
/// Returns the descriptor the transport uses to tunnel through the proxy.
pub type ProxyDetector = Arc<dyn Fn(SocketAddr) -> ProxiedAddress + Send + Sync>;

/// The extension point a channel builder exposes for proxy detection.
///
/// RPC integrations implement this for their builder type; the configurator
/// stays independent of any particular RPC framework.
pub trait ChannelBuilder: Sized {
    /// Install the proxy-detection hook on this builder.
    fn proxy_detector(self, detector: ProxyDetector) -> Self;
}

/// A transformation that routes a channel builder's connections through a
/// fixed forward proxy.
///
/// Holds only immutable captured configuration, so one configurator can be
/// applied to any number of builders, concurrently.
#[derive(Clone, Debug)]
pub struct ChannelConfigurator {
    proxy: ProxyAddress,
    credentials: Option<BasicCredentials>,
}

impl ChannelConfigurator {
    pub(crate) fn new(proxy: ProxyAddress, credentials: Option<BasicCredentials>) -> Self {
        Self { proxy, credentials }
    }

    /// Get the proxy address this configurator tunnels through.
    pub fn proxy(&self) -> &ProxyAddress {
        &self.proxy
    }

    /// Apply this configurator to a channel builder.
    ///
    /// Pure transformation; the proxy is only contacted when the RPC stack
    /// later opens connections.
    pub fn configure<B: ChannelBuilder>(&self, builder: B) -> B {
        builder.proxy_detector(self.detector())
    }

    /// Build the per-target detection hook.
    ///
    /// Each invocation of the hook produces a fresh descriptor carrying the
    /// original target, the fixed proxy address, and a clone of the
    /// credentials when configured, so the proxy can be authenticated on
    /// every connection attempt.
    pub fn detector(&self) -> ProxyDetector {
        let proxy = self.proxy.clone();
        let credentials = self.credentials.clone();
        Arc::new(move |target| ProxiedAddress::new(target, proxy.clone(), credentials.clone()))
    }
}

/// Build the channel configurator for an optional forward proxy.
///
/// Returns `Ok(None)` when no proxy is configured; callers must then leave
/// their builder untouched rather than apply an identity transform. With a
/// proxy present, the username/password pairing is validated and the proxy
/// host and port are resolved from the URL exactly once.
///
/// # Example
///
/// ```
/// # fn run() -> connector_proxy::Result<()> {
/// let proxy = "http://proxy.example.com:8080".parse().ok();
/// if let Some(configurator) =
///     connector_proxy::build_channel_configurator(proxy.as_ref(), None, None)?
/// {
///     assert_eq!(configurator.proxy().port(), 8080);
/// }
/// # Ok(())
/// # }
/// ```
pub fn build_channel_configurator(
    proxy_url: Option<&Url>,
    username: Option<&str>,
    password: Option<&str>,
) -> Result<Option<ChannelConfigurator>> {
    let Some(proxy_url) = proxy_url else {
        tracing::debug!("no proxy configured, channel builders left untouched");
        return Ok(None);
    };
    validate_credentials(username, password)?;

    let proxy = resolve_proxy_address(proxy_url)?;
    let credentials = username
        .zip(password)
        .map(|(user, pass)| BasicCredentials::new(user.to_owned(), pass.to_owned()));

    tracing::debug!(proxy = %proxy, authenticated = credentials.is_some(), "channel configurator built");
    Ok(Some(ChannelConfigurator::new(proxy, credentials)))
}
