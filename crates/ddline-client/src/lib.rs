//! ddline client: the metric emitter.
//!
//! This crate wires the core line format and sampling decision to an output
//! sink and a clock. It is consumed by applications directly and by the
//! `ddline-heartbeat` binary.
//!
//! ```no_run
//! use ddline_client::Client;
//!
//! let client = Client::new()?.with_namespace("app")?;
//! client.incr("requests", &["env:prod"], 1.0)?;
//! client.gauge("queue.depth", 12.0, &[], 0.1)?;
//! # Ok::<(), ddline_client::DdlineError>(())
//! ```

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod builder;
pub mod client;
pub mod clock;
pub mod config;
pub mod sink;

pub use builder::ClientBuilder;
pub use client::{Client, Emitter};
pub use clock::{Clock, FixedClock, SystemClock};
pub use config::ClientConfig;
pub use ddline_core::{DdlineError, ErrorKind, Result};
pub use sink::{CaptureSink, Sink, StdoutSink, WriterSink};
