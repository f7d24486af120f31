//! Decoding emitted lines.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use ddline_core::protocol::{MetricType, MetricValue, ParsedLine};
use ddline_core::ErrorKind;

#[test]
fn parse_count_line() {
    let p = ParsedLine::parse("MONITORING|1700000000|1|count|app.requests|env:prod").unwrap();
    assert_eq!(p.timestamp, 1_700_000_000);
    assert_eq!(p.value, MetricValue::Int(1));
    assert_eq!(p.metric_type, MetricType::Count);
    assert_eq!(p.name, "app.requests");
    assert_eq!(p.tags, vec!["env:prod".to_string()]);
}

#[test]
fn parse_gauge_line_without_tags() {
    let p = ParsedLine::parse("MONITORING|42|12.500000|gauge|.latency|").unwrap();
    assert_eq!(p.value, MetricValue::Float(12.5));
    assert_eq!(p.name, ".latency");
    assert!(p.tags.is_empty());
}

#[test]
fn parse_tolerates_trailing_newline() {
    let p = ParsedLine::parse("MONITORING|1|-1|count|.jobs|a,b\n").unwrap();
    assert_eq!(p.value, MetricValue::Int(-1));
    assert_eq!(p.tags, vec!["a".to_string(), "b".to_string()]);
}

#[test]
fn parse_non_finite_values() {
    let p = ParsedLine::parse("MONITORING|1|NaN|gauge|.x|").unwrap();
    match p.value {
        MetricValue::Float(v) => assert!(v.is_nan()),
        other => panic!("expected float, got {other:?}"),
    }
    let p = ParsedLine::parse("MONITORING|1|-Inf|histogram|.x|").unwrap();
    assert_eq!(p.value, MetricValue::Float(f64::NEG_INFINITY));
}

#[test]
fn reject_wrong_prefix() {
    let err = ParsedLine::parse("METRICS|1|1|count|.x|").expect_err("must fail");
    assert_eq!(err.kind().as_str(), "MALFORMED_LINE");
}

#[test]
fn reject_unknown_type_and_missing_fields() {
    let err = ParsedLine::parse("MONITORING|1|1|meter|.x|").expect_err("must fail");
    assert_eq!(err.kind(), ErrorKind::Malformed);

    let err = ParsedLine::parse("MONITORING|1|1|count").expect_err("must fail");
    assert_eq!(err.kind(), ErrorKind::Malformed);
}

#[test]
fn reject_bad_timestamp_and_value() {
    assert!(ParsedLine::parse("MONITORING|soon|1|count|.x|").is_err());
    assert!(ParsedLine::parse("MONITORING|1|inf|gauge|.x|").is_err());
    assert!(ParsedLine::parse("MONITORING|1|one|count|.x|").is_err());
}
