//! A disabled client is a silent no-op.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::sync::Arc;

use ddline_client::{CaptureSink, Client, ClientConfig};

#[test]
fn every_operation_is_ok_and_silent() {
    let c = Client::default();
    assert!(!c.is_enabled());
    assert!(c.emitter().is_none());

    for rate in [1.0, 0.5, 0.0, -1.0, f64::NAN] {
        c.incr("a", &[], rate).unwrap();
        c.decr("a", &["x"], rate).unwrap();
        c.count("a", 10, &[], rate).unwrap();
        c.gauge("a", f64::NAN, &["x", "y"], rate).unwrap();
        c.histogram("a", -1.5, &[], rate).unwrap();
    }
}

#[test]
fn disabled_builder_never_writes() {
    let sink = Arc::new(CaptureSink::new());
    let c = Client::builder()
        .enabled(false)
        .namespace("app")
        .sink(sink.clone())
        .build()
        .unwrap();
    assert!(matches!(c, Client::Disabled));

    c.incr("requests", &["env:prod"], 1.0).unwrap();
    c.gauge("latency", 1.0, &[], 1.0).unwrap();
    assert!(sink.is_empty());
}

#[test]
fn config_disabled_yields_disabled_client() {
    let cfg = ClientConfig {
        enabled: false,
        ..ClientConfig::default()
    };
    let c = Client::from_config(&cfg).unwrap();
    assert!(!c.is_enabled());
}

#[test]
fn setters_are_ignored_when_disabled() {
    let c = Client::disabled()
        .with_namespace("app")
        .unwrap()
        .with_tags(["a"])
        .unwrap();
    assert!(c.emitter().is_none());
}
