use std::net::SocketAddr;

use connector_proxy::{
    build_channel_configurator, ChannelBuilder, ProxyDetector, ProxyError,
};
use url::Url;

fn proxy_url() -> Url {
    Url::parse("http://proxy.example.com:8080").expect("static proxy URL must parse")
}

/// Fake channel builder recording the installed proxy-detection hook.
#[derive(Default)]
struct RecordingChannelBuilder {
    detector: Option<ProxyDetector>,
}

impl ChannelBuilder for RecordingChannelBuilder {
    fn proxy_detector(mut self, detector: ProxyDetector) -> Self {
        self.detector = Some(detector);
        self
    }
}

#[test]
fn absent_proxy_yields_none_for_every_credential_combination() {
    let combinations = [
        (None, None),
        (Some("alice"), None),
        (None, Some("secret")),
        (Some("alice"), Some("secret")),
    ];
    for (username, password) in combinations {
        let configurator = build_channel_configurator(None, username, password)
            .expect("absent proxy must not fail validation");
        assert!(configurator.is_none());
    }
}

#[test]
fn mismatched_credentials_are_rejected() {
    let url = proxy_url();
    for (username, password) in [(Some("alice"), None), (None, Some("secret"))] {
        let err = build_channel_configurator(Some(&url), username, password)
            .expect_err("half-supplied credentials must be rejected");
        assert!(matches!(err, ProxyError::InvalidConfiguration(_)));
    }
}

#[test]
fn paired_or_absent_credentials_succeed() {
    let url = proxy_url();
    for (username, password) in [(None, None), (Some("alice"), Some("secret"))] {
        let configurator = build_channel_configurator(Some(&url), username, password)
            .expect("valid configuration must succeed");
        assert!(configurator.is_some());
    }
}

#[test]
fn detector_pairs_target_with_fixed_proxy_address() {
    let url = proxy_url();
    let configurator = build_channel_configurator(Some(&url), None, None)
        .expect("valid configuration must succeed")
        .expect("configured proxy must yield a configurator");

    let builder = configurator.configure(RecordingChannelBuilder::default());
    let detector = builder.detector.expect("configure must install the hook");

    let target: SocketAddr = "10.0.0.5:443".parse().expect("static target must parse");
    let proxied = detector(target);

    assert_eq!(proxied.target(), target);
    assert_eq!(proxied.proxy().host(), "proxy.example.com");
    assert_eq!(proxied.proxy().port(), 8080);
    assert!(proxied.credentials().is_none());
}

#[test]
fn detector_carries_credentials_on_every_attempt() {
    let url = proxy_url();
    let configurator = build_channel_configurator(Some(&url), Some("alice"), Some("secret"))
        .expect("valid configuration must succeed")
        .expect("configured proxy must yield a configurator");

    let detector = configurator.detector();
    let target: SocketAddr = "10.0.0.5:443".parse().expect("static target must parse");

    for _ in 0..3 {
        let proxied = detector(target);
        let credentials = proxied
            .credentials()
            .expect("credentials must ride along per attempt");
        assert_eq!(credentials.username(), "alice");
        assert_eq!(credentials.password(), "secret");
    }
}

#[test]
fn one_configurator_applies_to_many_builders() {
    let url = proxy_url();
    let configurator = build_channel_configurator(Some(&url), None, None)
        .expect("valid configuration must succeed")
        .expect("configured proxy must yield a configurator");

    let first = configurator.configure(RecordingChannelBuilder::default());
    let second = configurator.configure(RecordingChannelBuilder::default());
    assert!(first.detector.is_some());
    assert!(second.detector.is_some());
}

#[test]
fn scheme_default_port_is_used_when_url_names_none() {
    let url = Url::parse("https://proxy.example.com").expect("static proxy URL must parse");
    let configurator = build_channel_configurator(Some(&url), None, None)
        .expect("valid configuration must succeed")
        .expect("configured proxy must yield a configurator");
    assert_eq!(configurator.proxy().port(), 443);
}

#[test]
fn url_without_resolvable_endpoint_is_rejected() {
    // No host at all.
    let hostless = Url::parse("data:,ignored").expect("static URL must parse");
    let err = build_channel_configurator(Some(&hostless), None, None)
        .expect_err("hostless proxy URL must be rejected");
    assert!(matches!(err, ProxyError::InvalidConfiguration(_)));

    // Host but no port and no known default for the scheme.
    let portless = Url::parse("foo://proxy.example.com").expect("static URL must parse");
    let err = build_channel_configurator(Some(&portless), None, None)
        .expect_err("portless proxy URL must be rejected");
    assert!(matches!(err, ProxyError::InvalidConfiguration(_)));
}

#[test]
fn credentials_debug_never_prints_the_password() {
    let url = proxy_url();
    let configurator = build_channel_configurator(Some(&url), Some("alice"), Some("secret"))
        .expect("valid configuration must succeed")
        .expect("configured proxy must yield a configurator");

    let detector = configurator.detector();
    let target: SocketAddr = "10.0.0.5:443".parse().expect("static target must parse");
    let rendered = format!("{:?}", detector(target));

    assert!(rendered.contains("alice"));
    assert!(rendered.contains("<redacted>"));
    assert!(!rendered.contains("secret"));
}
