//! Wire protocol for emitted metric lines.
//!
//! - `metric`: metric type labels and value rendering
//! - `line`: the `MONITORING|...` line, both directions

pub mod line;
pub mod metric;

pub use line::{MetricLine, ParsedLine, LINE_PREFIX};
pub use metric::{MetricType, MetricValue};
