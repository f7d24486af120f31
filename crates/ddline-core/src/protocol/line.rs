//! The `MONITORING|...` line.
//!
//! Layout (no trailing newline):
//!
//! ```text
//! MONITORING|<unix_seconds>|<value>|<metric_type>|<namespace>.<name>|<tags>
//! ```
//!
//! The namespace is always joined with a dot, so an empty namespace yields a
//! leading dot. Tags are comma-joined with no `#` prefix; an empty tag list
//! leaves the last field empty.

use std::fmt;

use crate::error::{DdlineError, Result};
use crate::protocol::metric::{MetricType, MetricValue};

/// First field of every line.
pub const LINE_PREFIX: &str = "MONITORING";

/// A line ready to be rendered. Borrowed; rendering allocates only the output.
#[derive(Debug, Clone, Copy)]
pub struct MetricLine<'a> {
    pub timestamp: i64,
    pub value: MetricValue,
    pub metric_type: MetricType,
    pub namespace: &'a str,
    pub name: &'a str,
    /// Written ahead of `tags`. Empty unless global tag merging is enabled.
    pub global_tags: &'a [String],
    pub tags: &'a [&'a str],
}

impl fmt::Display for MetricLine<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{LINE_PREFIX}|{}|{}|{}|{}.{}|",
            self.timestamp, self.value, self.metric_type, self.namespace, self.name
        )?;

        let all = self
            .global_tags
            .iter()
            .map(String::as_str)
            .chain(self.tags.iter().copied());
        for (i, tag) in all.enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            f.write_str(tag)?;
        }
        Ok(())
    }
}

/// A decoded line.
///
/// `name` is the full wire name (`<namespace>.<name>`); the split point is
/// ambiguous when the namespace itself contains dots, so it is not undone.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedLine {
    pub timestamp: i64,
    pub value: MetricValue,
    pub metric_type: MetricType,
    pub name: String,
    pub tags: Vec<String>,
}

impl ParsedLine {
    /// Decode one line. A single trailing `\n` is tolerated for sinks that add one.
    pub fn parse(line: &str) -> Result<Self> {
        let line = line.strip_suffix('\n').unwrap_or(line);
        let mut parts = line.splitn(6, '|');

        let mut next = |field: &str| {
            parts
                .next()
                .ok_or_else(|| DdlineError::Malformed(format!("missing {field}")))
        };

        let prefix = next("prefix")?;
        if prefix != LINE_PREFIX {
            return Err(DdlineError::Malformed(format!("unexpected prefix: {prefix}")));
        }

        let ts = next("timestamp")?;
        let timestamp = ts
            .parse::<i64>()
            .map_err(|e| DdlineError::Malformed(format!("invalid timestamp {ts:?}: {e}")))?;
        let value = next("value")?.parse::<MetricValue>()?;
        let metric_type = next("metric type")?.parse::<MetricType>()?;
        let name = next("name")?.to_string();
        let tags = next("tags")?;

        let tags = if tags.is_empty() {
            Vec::new()
        } else {
            tags.split(',').map(str::to_string).collect()
        };

        Ok(Self {
            timestamp,
            value,
            metric_type,
            name,
            tags,
        })
    }
}
