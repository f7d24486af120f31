//! The metric emitter.
//!
//! `Client` is either `Enabled` with an `Emitter`, or `Disabled`. A disabled
//! client accepts every call and returns `Ok(())` without sampling or writing,
//! so callers can turn metrics off by holding `Client::default()`.
//!
//! Every enabled call goes: sampling decision -> render line -> one sink write.
//! Write failures are returned as `DdlineError::Write` and never retried.

use std::fmt;
use std::sync::Arc;

use ddline_core::error::Result;
use ddline_core::protocol::{MetricLine, MetricType, MetricValue};
use ddline_core::sampling::{should_emit, RandomSource};

use crate::builder::ClientBuilder;
use crate::clock::Clock;
use crate::config::{validate_fields, ClientConfig};
use crate::sink::Sink;

/// Handle for emitting metric lines. Safe to share across threads.
#[derive(Debug, Default)]
pub enum Client {
    Enabled(Emitter),
    #[default]
    Disabled,
}

/// Configuration and collaborators of an enabled client.
///
/// `namespace` and `tags` may be set by the owner before the client is
/// shared; emission only ever reads them. Direct field writes skip the `|`
/// check done by the builder and `Client::with_*`.
pub struct Emitter {
    /// Prepended to every metric name with a literal dot.
    pub namespace: String,
    /// Global tags. Only written when `merge_global_tags` is set.
    pub tags: Vec<String>,
    pub merge_global_tags: bool,
    pub(crate) rng: Arc<dyn RandomSource>,
    pub(crate) sink: Arc<dyn Sink>,
    pub(crate) clock: Arc<dyn Clock>,
}

impl fmt::Debug for Emitter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Emitter")
            .field("namespace", &self.namespace)
            .field("tags", &self.tags)
            .field("merge_global_tags", &self.merge_global_tags)
            .finish_non_exhaustive()
    }
}

impl Emitter {
    fn send(
        &self,
        name: &str,
        value: MetricValue,
        metric_type: MetricType,
        tags: &[&str],
        rate: f64,
    ) -> Result<()> {
        if !should_emit(rate, self.rng.as_ref()) {
            tracing::trace!(metric = name, rate, "metric sampled out");
            return Ok(());
        }

        let global_tags: &[String] = if self.merge_global_tags {
            &self.tags
        } else {
            &[]
        };
        let line = MetricLine {
            timestamp: self.clock.unix_seconds(),
            value,
            metric_type,
            namespace: &self.namespace,
            name,
            global_tags,
            tags,
        }
        .to_string();

        self.sink.write_line(&line)?;
        Ok(())
    }
}

impl Client {
    /// Enabled client: empty namespace and tags, stdout, system clock.
    /// Currently infallible; the `Result` leaves room for sinks that connect.
    pub fn new() -> Result<Self> {
        ClientBuilder::default().build()
    }

    /// A client that swallows every call.
    pub fn disabled() -> Self {
        Client::Disabled
    }

    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Validate `cfg` and build from it. `enabled: false` yields `Disabled`.
    pub fn from_config(cfg: &ClientConfig) -> Result<Self> {
        ClientBuilder::from_config(cfg).build()
    }

    pub fn is_enabled(&self) -> bool {
        matches!(self, Client::Enabled(_))
    }

    pub fn emitter(&self) -> Option<&Emitter> {
        match self {
            Client::Enabled(e) => Some(e),
            Client::Disabled => None,
        }
    }

    /// Mutable access for the owner, before the client is shared.
    pub fn emitter_mut(&mut self) -> Option<&mut Emitter> {
        match self {
            Client::Enabled(e) => Some(e),
            Client::Disabled => None,
        }
    }

    /// Set the namespace. Rejects `|`; no effect on a disabled client.
    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Result<Self> {
        let namespace = namespace.into();
        validate_fields(&namespace, &[])?;
        if let Some(e) = self.emitter_mut() {
            e.namespace = namespace;
        }
        Ok(self)
    }

    /// Set the global tags. Rejects `|`; no effect on a disabled client.
    pub fn with_tags<I, S>(mut self, tags: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let tags: Vec<String> = tags.into_iter().map(Into::into).collect();
        validate_fields("", &tags)?;
        if let Some(e) = self.emitter_mut() {
            e.tags = tags;
        }
        Ok(self)
    }

    /// Count tracks how many times something happened per second.
    ///
    /// Emitted with the `gauge` type label, not `count`. Downstream consumers
    /// depend on the existing label, so it is kept as is.
    pub fn count(&self, name: &str, value: i64, tags: &[&str], rate: f64) -> Result<()> {
        self.send(name, MetricValue::Int(value), MetricType::Gauge, tags, rate)
    }

    /// `count` type with value -1.
    pub fn decr(&self, name: &str, tags: &[&str], rate: f64) -> Result<()> {
        self.send(name, MetricValue::Int(-1), MetricType::Count, tags, rate)
    }

    /// `count` type with value 1.
    pub fn incr(&self, name: &str, tags: &[&str], rate: f64) -> Result<()> {
        self.send(name, MetricValue::Int(1), MetricType::Count, tags, rate)
    }

    /// Gauge measures the value of a metric at a particular time.
    pub fn gauge(&self, name: &str, value: f64, tags: &[&str], rate: f64) -> Result<()> {
        self.send(name, MetricValue::Float(value), MetricType::Gauge, tags, rate)
    }

    /// Histogram tracks the statistical distribution of a set of values.
    pub fn histogram(&self, name: &str, value: f64, tags: &[&str], rate: f64) -> Result<()> {
        self.send(name, MetricValue::Float(value), MetricType::Histogram, tags, rate)
    }

    fn send(
        &self,
        name: &str,
        value: MetricValue,
        metric_type: MetricType,
        tags: &[&str],
        rate: f64,
    ) -> Result<()> {
        match self {
            Client::Enabled(e) => e.send(name, value, metric_type, tags, rate),
            Client::Disabled => Ok(()),
        }
    }
}
