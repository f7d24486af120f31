//! ddline core: the `MONITORING|...` wire contract, sampling, and error types.
//!
//! This crate defines the line format and the sampling decision shared by the
//! client and any downstream tooling that reads emitted lines. It performs no
//! I/O so it can be reused wherever the lines are produced or consumed.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! All fallible paths surface as `DdlineError`/`Result`.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;
pub mod protocol;
pub mod sampling;

/// Shared result type.
pub use error::{DdlineError, ErrorKind, Result};
pub use protocol::{MetricLine, MetricType, MetricValue, ParsedLine};
pub use sampling::{should_emit, LockedRng, RandomSource};
