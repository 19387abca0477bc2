//! Proxy configuration and validation
//!
//! The connector-options view of proxy settings, the credential-pairing rule
//! shared by both builder paths, and one-time host/port resolution from the
//! proxy URL.

use serde::Deserialize;
use url::Url;

use crate::channel::{build_channel_configurator, ChannelConfigurator, ProxyAddress};
use crate::error::{ProxyError, Result};
use crate::transport::{build_http_transport_factory, ProxyTransportFactory};

/// Check that proxy username and password are either both present or both
/// absent.
///
/// This is the single validation rule of the crate and runs before any proxy
/// object is constructed, in both builder paths. Pure check, no side effects.
pub fn validate_credentials(username: Option<&str>, password: Option<&str>) -> Result<()> {
    if username.is_some() != password.is_some() {
        return Err(ProxyError::invalid(
            "proxy username and password must be defined together or not at all",
        ));
    }
    Ok(())
}

/// Resolve the proxy host and port from its URL.
///
/// The scheme is ignored beyond supplying a default port when the URL carries
/// none. A URL without a host or a resolvable port is unusable as a proxy
/// endpoint.
pub(crate) fn resolve_proxy_address(proxy_url: &Url) -> Result<ProxyAddress> {
    let host = proxy_url
        .host_str()
        .ok_or_else(|| ProxyError::invalid(format!("proxy URL `{proxy_url}` has no host")))?;
    let port = proxy_url
        .port_or_known_default()
        .ok_or_else(|| ProxyError::invalid(format!("proxy URL `{proxy_url}` has no port")))?;
    Ok(ProxyAddress::new(host.to_owned(), port))
}

/// Proxy settings as sourced from connector configuration.
///
/// Parsing raw option strings into a [`Url`] is the caller's job; this type
/// only enforces the credential-pairing invariant and hands the settings to
/// the two builder functions.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ProxyConfig {
    /// Address of the forward proxy, absent when the feature is unused.
    pub address: Option<Url>,
    /// Basic-auth username, paired with `password`.
    pub username: Option<String>,
    /// Basic-auth password, paired with `username`.
    pub password: Option<String>,
}

impl ProxyConfig {
    /// Create a validated proxy configuration.
    pub fn new(
        address: Option<Url>,
        username: Option<String>,
        password: Option<String>,
    ) -> Result<Self> {
        validate_credentials(username.as_deref(), password.as_deref())?;
        Ok(Self {
            address,
            username,
            password,
        })
    }

    /// Whether a proxy endpoint is configured at all.
    pub fn is_configured(&self) -> bool {
        self.address.is_some()
    }

    /// Build the channel configurator for these settings.
    ///
    /// See [`build_channel_configurator`].
    pub fn channel_configurator(&self) -> Result<Option<ChannelConfigurator>> {
        build_channel_configurator(
            self.address.as_ref(),
            self.username.as_deref(),
            self.password.as_deref(),
        )
    }

    /// Build the HTTP transport factory for these settings.
    ///
    /// See [`build_http_transport_factory`].
    pub fn http_transport_factory(&self) -> Result<Option<ProxyTransportFactory>> {
        build_http_transport_factory(
            self.address.as_ref(),
            self.username.as_deref(),
            self.password.as_deref(),
        )
    }
}
