//! Scoped credential store for the HTTP path
//!
//! Credentials are keyed by the exact destination host and port so they are
//! only ever presented to the configured proxy, never to unrelated hosts. The
//! store is owned by the transport factory that built it; there is no ambient
//! process-wide provider.

use crate::channel::BasicCredentials;

/// The (host, port) pair a credential entry applies to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CredentialScope {
    host: String,
    port: u16,
}

impl CredentialScope {
    /// Create a scope for an exact host and port.
    pub fn new<H: Into<String>>(host: H, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
        }
    }

    /// Get the scoped host.
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Get the scoped port.
    pub fn port(&self) -> u16 {
        self.port
    }

    fn matches(&self, host: &str, port: u16) -> bool {
        self.port == port && self.host.eq_ignore_ascii_case(host)
    }
}

/// Credential lookup keyed by destination host and port.
///
/// Immutable after the owning factory is built; lookups for any scope other
/// than the ones registered resolve to nothing.
#[derive(Clone, Debug, Default)]
pub struct ScopedCredentialStore {
    entries: Vec<(CredentialScope, BasicCredentials)>,
}

impl ScopedCredentialStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register credentials for a scope, replacing any previous entry for
    /// that exact scope.
    pub fn insert(&mut self, scope: CredentialScope, credentials: BasicCredentials) {
        self.entries
            .retain(|(existing, _)| !existing.matches(scope.host(), scope.port()));
        self.entries.push((scope, credentials));
    }

    /// Resolve credentials for an exact host and port.
    pub fn lookup(&self, host: &str, port: u16) -> Option<&BasicCredentials> {
        self.entries
            .iter()
            .find(|(scope, _)| scope.matches(host, port))
            .map(|(_, credentials)| credentials)
    }

    /// Whether the store holds any entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
