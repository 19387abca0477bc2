//! # connector-proxy
//!
//! Transport-layer configuration adapters that route a client application's
//! traffic through an optional authenticated forward proxy. Two independent
//! builders share one validation rule: [`build_channel_configurator`] wires a
//! proxy-detection hook into a generic RPC channel builder, and
//! [`build_http_transport_factory`] yields a factory of blocking HTTP clients
//! pre-configured for the same proxy.
//!
//! Both builders model "no proxy configured" as `Ok(None)` — distinct from an
//! error and from an identity transform — and both reject a half-supplied
//! username/password pair with [`ProxyError::InvalidConfiguration`].
//!
//! ## Usage
//!
//! ```
//! # fn run() -> connector_proxy::Result<()> {
//! use connector_proxy::TransportFactory;
//!
//! let proxy: Option<url::Url> = "http://proxy.example.com:8080".parse().ok();
//!
//! let configurator =
//!     connector_proxy::build_channel_configurator(proxy.as_ref(), None, None)?;
//! let factory =
//!     connector_proxy::build_http_transport_factory(proxy.as_ref(), None, None)?;
//!
//! if let Some(factory) = factory {
//!     let transport = factory.create()?;
//!     let _ = transport.client();
//! }
//! # let _ = configurator;
//! # Ok(())
//! # }
//! ```

#![deny(unsafe_code)]
#![warn(clippy::all)]

pub mod channel;
pub mod config;
pub mod error;
pub mod transport;

pub use channel::{
    build_channel_configurator, BasicCredentials, ChannelBuilder, ChannelConfigurator,
    ProxiedAddress, ProxyAddress, ProxyDetector,
};
pub use config::{validate_credentials, ProxyConfig};
pub use error::{ProxyError, Result};
pub use transport::{
    build_http_transport_factory, CredentialScope, HttpClientConfig, HttpTransport,
    ProxyTransportFactory, ProxyTransportFactoryBuilder, ScopedCredentialStore, TransportFactory,
};
