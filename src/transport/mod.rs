//! Blocking HTTP transport configuration
//!
//! The scoped credential store and the factory that produces proxied blocking
//! HTTP clients on demand.

pub mod credentials;
pub mod factory;

pub use credentials::{CredentialScope, ScopedCredentialStore};
pub use factory::{
    build_http_transport_factory, HttpClientConfig, HttpTransport, ProxyTransportFactory,
    ProxyTransportFactoryBuilder, TransportFactory,
};
