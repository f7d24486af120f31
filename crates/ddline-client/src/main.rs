//! ddline-heartbeat
//!
//! Emits `incr("heartbeat")` on a fixed interval until Ctrl-C.
//! Environment:
//! - `DDLINE_NAMESPACE`: metric namespace (default empty)
//! - `DDLINE_TAGS`: comma-separated global tags, written on every line
//! - `DDLINE_INTERVAL_MS`: tick interval (default 10000)
//!
//! Logs go to stderr; stdout carries only metric lines.

use std::env;
use std::process::ExitCode;
use std::time::Duration;

use tracing_subscriber::{fmt, EnvFilter};

use ddline_client::{Client, ClientConfig};

const DEFAULT_INTERVAL_MS: u64 = 10_000;

#[tokio::main]
async fn main() -> ExitCode {
    fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cfg = config_from_env();
    let client = match Client::from_config(&cfg) {
        Ok(c) => c,
        Err(e) => {
            tracing::error!(error = %e, kind = e.kind().as_str(), "metrics client setup failed");
            return ExitCode::from(2);
        }
    };
    let interval_ms = interval_from_env();

    tracing::info!(interval_ms, namespace = %cfg.namespace, "ddline-heartbeat starting");
    let mut ticker = tokio::time::interval(Duration::from_millis(interval_ms));
    let shutdown = tokio::signal::ctrl_c();
    tokio::pin!(shutdown);

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                if let Err(e) = client.incr("heartbeat", &[], 1.0) {
                    tracing::error!(error = %e, "heartbeat write failed");
                    return ExitCode::FAILURE;
                }
            }
            _ = &mut shutdown => {
                tracing::info!("shutdown requested");
                return ExitCode::SUCCESS;
            }
        }
    }
}

fn config_from_env() -> ClientConfig {
    let tags = env::var("DDLINE_TAGS")
        .map(|s| {
            s.split(',')
                .map(str::trim)
                .filter(|t| !t.is_empty())
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default();

    ClientConfig {
        namespace: env::var("DDLINE_NAMESPACE").unwrap_or_default(),
        merge_global_tags: true,
        tags,
        ..ClientConfig::default()
    }
}

fn interval_from_env() -> u64 {
    match env::var("DDLINE_INTERVAL_MS") {
        Ok(raw) => match raw.parse::<u64>() {
            Ok(ms) if ms > 0 => ms,
            _ => {
                tracing::warn!(value = %raw, default = DEFAULT_INTERVAL_MS, "invalid DDLINE_INTERVAL_MS");
                DEFAULT_INTERVAL_MS
            }
        },
        Err(_) => DEFAULT_INTERVAL_MS,
    }
}
