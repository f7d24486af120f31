//! Embeddable client config section (strict parsing).
//!
//! ddline never reads files. Hosts nest `ClientConfig` in their own config
//! type and hand the deserialized section to `Client::from_config`.

use serde::Deserialize;

use ddline_core::error::{DdlineError, Result};

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ClientConfig {
    /// `false` yields a disabled client that swallows every call.
    #[serde(default = "default_enabled")]
    pub enabled: bool,

    #[serde(default)]
    pub namespace: String,

    /// Global tags.
    #[serde(default)]
    pub tags: Vec<String>,

    /// Write global tags ahead of per-call tags.
    #[serde(default)]
    pub merge_global_tags: bool,

    /// Fixed RNG seed for reproducible sampling.
    #[serde(default)]
    pub sampling_seed: Option<u64>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            namespace: String::new(),
            tags: Vec::new(),
            merge_global_tags: false,
            sampling_seed: None,
        }
    }
}

impl ClientConfig {
    pub fn validate(&self) -> Result<()> {
        validate_fields(&self.namespace, &self.tags)
    }
}

fn default_enabled() -> bool {
    true
}

/// `|` separates wire fields, so it may not appear in configured values.
pub(crate) fn validate_fields(namespace: &str, tags: &[String]) -> Result<()> {
    if namespace.contains('|') {
        return Err(DdlineError::InvalidConfig(
            "namespace must not contain '|'".into(),
        ));
    }
    if let Some(tag) = tags.iter().find(|t| t.contains('|')) {
        return Err(DdlineError::InvalidConfig(format!(
            "global tag {tag:?} must not contain '|'"
        )));
    }
    Ok(())
}
