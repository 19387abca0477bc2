//! Blocking HTTP transport factory
//!
//! A reusable producer of blocking HTTP clients pre-configured to route
//! through the forward proxy, with credentials resolved from the factory's
//! own scoped store.

use url::Url;

use super::credentials::{CredentialScope, ScopedCredentialStore};
use crate::channel::{BasicCredentials, ProxyAddress};
use crate::config::{resolve_proxy_address, validate_credentials};
use crate::error::{ProxyError, Result};

/// A blocking HTTP transport routed through the configured proxy.
#[derive(Clone, Debug)]
pub struct HttpTransport {
    client: reqwest::blocking::Client,
}

impl HttpTransport {
    /// Get the underlying blocking client.
    pub fn client(&self) -> &reqwest::blocking::Client {
        &self.client
    }
}

/// The capability of producing HTTP transports.
///
/// Narrow on purpose so the underlying HTTP client implementation can be
/// swapped without touching the callers that only need `create()`.
pub trait TransportFactory {
    /// Build a fresh transport instance.
    fn create(&self) -> Result<HttpTransport>;
}

/// The pre-configured recipe for a proxied blocking client.
///
/// Cloneable and immutable; every transport built from it is independent.
#[derive(Clone, Debug)]
pub struct HttpClientConfig {
    proxy: ProxyAddress,
    credentials: ScopedCredentialStore,
}

impl HttpClientConfig {
    /// Create a recipe for the given proxy with its scoped credential store.
    pub fn new(proxy: ProxyAddress, credentials: ScopedCredentialStore) -> Self {
        Self { proxy, credentials }
    }

    /// Get the proxy address the client will route through.
    pub fn proxy(&self) -> &ProxyAddress {
        &self.proxy
    }

    /// Get the credential store consulted when the client is assembled.
    pub fn credentials(&self) -> &ScopedCredentialStore {
        &self.credentials
    }

    /// Assemble a client builder routing all traffic through the proxy.
    ///
    /// Basic auth is attached only when the store resolves credentials for
    /// the proxy's own host and port.
    pub fn client_builder(&self) -> Result<reqwest::blocking::ClientBuilder> {
        let mut proxy = reqwest::Proxy::all(format!("http://{}", self.proxy))?;
        if let Some(credentials) = self
            .credentials
            .lookup(self.proxy.host(), self.proxy.port())
        {
            proxy = proxy.basic_auth(credentials.username(), credentials.password());
        }
        Ok(reqwest::blocking::Client::builder().proxy(proxy))
    }
}

/// A reusable producer of proxied blocking HTTP transports.
///
/// `create()` may be called any number of times; each call assembles a fresh
/// client from the same immutable recipe.
#[derive(Clone, Debug)]
pub struct ProxyTransportFactory {
    config: HttpClientConfig,
}

impl ProxyTransportFactory {
    /// One-shot construction from a pre-configured client recipe.
    pub fn new(config: HttpClientConfig) -> Self {
        Self { config }
    }

    /// Start two-phase construction: bare builder first, recipe attached
    /// separately, finalized with `build()`.
    pub fn builder() -> ProxyTransportFactoryBuilder {
        ProxyTransportFactoryBuilder::new()
    }

    /// Get the client recipe this factory builds transports from.
    pub fn config(&self) -> &HttpClientConfig {
        &self.config
    }
}

impl TransportFactory for ProxyTransportFactory {
    fn create(&self) -> Result<HttpTransport> {
        let client = self.config.client_builder()?.build()?;
        Ok(HttpTransport { client })
    }
}

/// Two-phase builder for [`ProxyTransportFactory`].
///
/// Exists for callers whose instantiation contract separates creation from
/// configuration; the factory itself is never observable half-built.
#[derive(Clone, Debug, Default)]
pub struct ProxyTransportFactoryBuilder {
    config: Option<HttpClientConfig>,
}

impl ProxyTransportFactoryBuilder {
    /// Create a bare builder with no recipe attached.
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach the pre-configured client recipe.
    pub fn client_config(mut self, config: HttpClientConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Finalize into an immutable factory.
    ///
    /// Fails when no recipe was attached.
    pub fn build(self) -> Result<ProxyTransportFactory> {
        let config = self
            .config
            .ok_or_else(|| ProxyError::invalid("transport factory has no client configuration"))?;
        Ok(ProxyTransportFactory::new(config))
    }
}

/// Build the HTTP transport factory for an optional forward proxy.
///
/// Returns `Ok(None)` when no proxy is configured, so callers can leave their
/// HTTP stack untouched. With a proxy present, the username/password pairing
/// is validated, the proxy host and port are resolved from the URL once, and
/// credentials are registered in a store scoped to that exact host and port.
///
/// # Example
///
/// ```
/// # fn run() -> connector_proxy::Result<()> {
/// use connector_proxy::TransportFactory;
///
/// let proxy = "http://proxy.example.com:8080".parse().ok();
/// if let Some(factory) = connector_proxy::build_http_transport_factory(
///     proxy.as_ref(),
///     Some("alice"),
///     Some("secret"),
/// )? {
///     let transport = factory.create()?;
///     let _ = transport.client();
/// }
/// # Ok(())
/// # }
/// ```
pub fn build_http_transport_factory(
    proxy_url: Option<&Url>,
    username: Option<&str>,
    password: Option<&str>,
) -> Result<Option<ProxyTransportFactory>> {
    let Some(proxy_url) = proxy_url else {
        tracing::debug!("no proxy configured, HTTP transports left untouched");
        return Ok(None);
    };
    validate_credentials(username, password)?;

    let proxy = resolve_proxy_address(proxy_url)?;
    let mut credentials = ScopedCredentialStore::new();
    if let Some((user, pass)) = username.zip(password) {
        credentials.insert(
            CredentialScope::new(proxy.host(), proxy.port()),
            BasicCredentials::new(user.to_owned(), pass.to_owned()),
        );
    }

    tracing::debug!(proxy = %proxy, authenticated = !credentials.is_empty(), "HTTP transport factory built");
    let config = HttpClientConfig::new(proxy, credentials);
    Ok(Some(ProxyTransportFactory::new(config)))
}
