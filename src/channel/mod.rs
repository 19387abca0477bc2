//! RPC channel proxy configuration
//!
//! The proxied-address value types and the configurator applied to a generic
//! channel builder's proxy-detection extension point.

pub mod address;
pub mod configurator;

pub use address::{BasicCredentials, ProxiedAddress, ProxyAddress};
pub use configurator::{
    build_channel_configurator, ChannelBuilder, ChannelConfigurator, ProxyDetector,
};
