//! Proxy address and credential value types
//!
//! Defines the resolved proxy endpoint, the optional basic-auth pair, and the
//! proxied-address descriptor handed to the RPC stack per connection attempt.

use std::fmt;
use std::net::SocketAddr;

use http::header::HeaderValue;

/// Resolved network address of the forward proxy.
///
/// Derived once from the proxy URL at build time; the host is kept as a name
/// so resolution stays with the stack that opens the connection.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProxyAddress {
    host: String,
    port: u16,
}

impl ProxyAddress {
    /// Create a proxy address from a host name and port.
    pub fn new<H: Into<String>>(host: H, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
        }
    }

    /// Get the proxy host name.
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Get the proxy port.
    pub fn port(&self) -> u16 {
        self.port
    }
}

impl fmt::Display for ProxyAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.host, self.port)
    }
}

/// A username/password pair for proxy basic authentication.
///
/// Both halves are always present; the pairing invariant is enforced before
/// this type is constructed.
#[derive(Clone, PartialEq, Eq)]
pub struct BasicCredentials {
    username: String,
    password: String,
}

impl BasicCredentials {
    /// Create a credential pair.
    pub fn new<U: Into<String>, P: Into<String>>(username: U, password: P) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Get the username.
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Get the password.
    pub fn password(&self) -> &str {
        &self.password
    }

    /// Encode the pair as a `Proxy-Authorization` basic-auth header value.
    pub fn to_basic_auth(&self) -> HeaderValue {
        use base64::Engine;
        let credentials = format!("{}:{}", self.username, self.password);
        let encoded = base64::engine::general_purpose::STANDARD.encode(credentials.as_bytes());
        let auth_value = format!("Basic {encoded}");

        let mut value = HeaderValue::from_str(&auth_value)
            .unwrap_or_else(|_| HeaderValue::from_static("Basic invalid"));
        value.set_sensitive(true);
        value
    }
}

impl fmt::Debug for BasicCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BasicCredentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// A value pairing a real target address with the proxy used to reach it.
///
/// Produced by the proxy-detection hook once per target address at connection
/// time. Credentials, when configured, ride along on every descriptor so the
/// transport can authenticate per attempt.
#[derive(Clone, Debug)]
pub struct ProxiedAddress {
    target: SocketAddr,
    proxy: ProxyAddress,
    credentials: Option<BasicCredentials>,
}

impl ProxiedAddress {
    pub(crate) fn new(
        target: SocketAddr,
        proxy: ProxyAddress,
        credentials: Option<BasicCredentials>,
    ) -> Self {
        Self {
            target,
            proxy,
            credentials,
        }
    }

    /// Get the original target address the caller asked to reach.
    pub fn target(&self) -> SocketAddr {
        self.target
    }

    /// Get the proxy address the connection should be tunneled through.
    pub fn proxy(&self) -> &ProxyAddress {
        &self.proxy
    }

    /// Get the credentials to present to the proxy, if any were configured.
    pub fn credentials(&self) -> Option<&BasicCredentials> {
        self.credentials.as_ref()
    }
}
