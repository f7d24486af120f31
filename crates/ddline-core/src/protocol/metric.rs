//! Metric type labels and value rendering.

use std::fmt;
use std::str::FromStr;

use crate::error::DdlineError;

/// How a value should be interpreted downstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MetricType {
    Gauge,
    Count,
    Histogram,
    /// Reserved; no emission operation produces it yet.
    Check,
}

impl MetricType {
    /// Wire label.
    pub fn as_str(self) -> &'static str {
        match self {
            MetricType::Gauge => "gauge",
            MetricType::Count => "count",
            MetricType::Histogram => "histogram",
            MetricType::Check => "check",
        }
    }
}

impl fmt::Display for MetricType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MetricType {
    type Err = DdlineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "gauge" => Ok(MetricType::Gauge),
            "count" => Ok(MetricType::Count),
            "histogram" => Ok(MetricType::Histogram),
            "check" => Ok(MetricType::Check),
            other => Err(DdlineError::Malformed(format!("unknown metric type: {other}"))),
        }
    }
}

/// A metric value as rendered on the wire.
///
/// Integers render as plain signed decimals. Floats render with exactly six
/// fractional digits (`%f`); non-finite floats render as `NaN`, `+Inf`, `-Inf`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MetricValue {
    Int(i64),
    Float(f64),
}

impl fmt::Display for MetricValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            MetricValue::Int(v) => write!(f, "{v}"),
            MetricValue::Float(v) if v.is_nan() => f.write_str("NaN"),
            MetricValue::Float(v) if v.is_infinite() => {
                f.write_str(if v > 0.0 { "+Inf" } else { "-Inf" })
            }
            MetricValue::Float(v) => write!(f, "{v:.6}"),
        }
    }
}

impl FromStr for MetricValue {
    type Err = DdlineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "NaN" => return Ok(MetricValue::Float(f64::NAN)),
            "+Inf" => return Ok(MetricValue::Float(f64::INFINITY)),
            "-Inf" => return Ok(MetricValue::Float(f64::NEG_INFINITY)),
            _ => {}
        }

        if !s.contains('.') {
            if let Ok(v) = s.parse::<i64>() {
                return Ok(MetricValue::Int(v));
            }
        }

        // Digits only past this point; reject "inf"/"nan" spellings we never write.
        if s.bytes().any(|b| b.is_ascii_alphabetic()) {
            return Err(DdlineError::Malformed(format!("invalid value: {s}")));
        }
        s.parse::<f64>()
            .map(MetricValue::Float)
            .map_err(|e| DdlineError::Malformed(format!("invalid value {s:?}: {e}")))
    }
}
