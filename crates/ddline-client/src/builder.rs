//! Client construction.

use std::sync::Arc;

use ddline_core::error::Result;
use ddline_core::sampling::{LockedRng, RandomSource};

use crate::client::{Client, Emitter};
use crate::clock::{Clock, SystemClock};
use crate::config::{validate_fields, ClientConfig};
use crate::sink::{Sink, StdoutSink};

/// Builder for `Client`. Defaults: enabled, empty namespace and tags, stdout,
/// system clock, OS-seeded RNG.
pub struct ClientBuilder {
    enabled: bool,
    namespace: String,
    tags: Vec<String>,
    merge_global_tags: bool,
    seed: Option<u64>,
    rng: Option<Arc<dyn RandomSource>>,
    sink: Arc<dyn Sink>,
    clock: Arc<dyn Clock>,
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self {
            enabled: true,
            namespace: String::new(),
            tags: Vec::new(),
            merge_global_tags: false,
            seed: None,
            rng: None,
            sink: Arc::new(StdoutSink),
            clock: Arc::new(SystemClock),
        }
    }
}

impl ClientBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from a deserialized config section.
    pub fn from_config(cfg: &ClientConfig) -> Self {
        Self {
            enabled: cfg.enabled,
            namespace: cfg.namespace.clone(),
            tags: cfg.tags.clone(),
            merge_global_tags: cfg.merge_global_tags,
            seed: cfg.sampling_seed,
            ..Self::default()
        }
    }

    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = namespace.into();
        self
    }

    /// Global tags.
    pub fn tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn merge_global_tags(mut self, merge: bool) -> Self {
        self.merge_global_tags = merge;
        self
    }

    /// Seed the built-in RNG. Ignored when `random_source` is set.
    pub fn sampling_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn random_source<R: RandomSource + 'static>(mut self, source: Arc<R>) -> Self {
        self.rng = Some(source as Arc<dyn RandomSource>);
        self
    }

    pub fn sink<S: Sink + 'static>(mut self, sink: Arc<S>) -> Self {
        self.sink = sink;
        self
    }

    pub fn clock<C: Clock + 'static>(mut self, clock: Arc<C>) -> Self {
        self.clock = clock;
        self
    }

    pub fn build(self) -> Result<Client> {
        validate_fields(&self.namespace, &self.tags)?;

        if !self.enabled {
            tracing::debug!("metrics client disabled");
            return Ok(Client::Disabled);
        }

        let rng: Arc<dyn RandomSource> = match (self.rng, self.seed) {
            (Some(rng), _) => rng,
            (None, Some(seed)) => Arc::new(LockedRng::seeded(seed)),
            (None, None) => Arc::new(LockedRng::from_os()),
        };

        tracing::debug!(
            namespace = %self.namespace,
            global_tags = self.tags.len(),
            merge_global_tags = self.merge_global_tags,
            "metrics client ready"
        );

        Ok(Client::Enabled(Emitter {
            namespace: self.namespace,
            tags: self.tags,
            merge_global_tags: self.merge_global_tags,
            rng,
            sink: self.sink,
            clock: self.clock,
        }))
    }
}
