//! Sink write failures surface to the caller.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::io::{self, Write};
use std::sync::Arc;

use ddline_client::{Client, DdlineError, ErrorKind, FixedClock, WriterSink};

struct BrokenPipe;

impl Write for BrokenPipe {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "reader went away"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn broken_pipe_is_returned_as_write_error() {
    let c = Client::builder()
        .sink(Arc::new(WriterSink::new(BrokenPipe)))
        .build()
        .unwrap();

    let err = c.incr("requests", &[], 1.0).expect_err("must fail");
    assert_eq!(err.kind(), ErrorKind::Write);
    assert_eq!(err.kind().as_str(), "WRITE_FAILED");
    match err {
        DdlineError::Write(io) => assert_eq!(io.kind(), io::ErrorKind::BrokenPipe),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn sampled_out_call_never_touches_the_sink() {
    let c = Client::builder()
        .sink(Arc::new(WriterSink::new(BrokenPipe)))
        .build()
        .unwrap();
    // A negative rate never emits, so the broken sink is never reached.
    c.gauge("x", 1.0, &[], -1.0).unwrap();
}

#[test]
fn disabled_client_swallows_sink_failures() {
    let c = Client::builder()
        .enabled(false)
        .sink(Arc::new(WriterSink::new(BrokenPipe)))
        .build()
        .unwrap();
    c.incr("requests", &[], 1.0).unwrap();
}

#[test]
fn writer_sink_receives_raw_bytes() {
    let sink = Arc::new(WriterSink::new(Vec::<u8>::new()));
    let c = Client::builder()
        .namespace("app")
        .sink(sink.clone())
        .clock(Arc::new(FixedClock(9)))
        .build()
        .unwrap();
    c.incr("a", &[], 1.0).unwrap();
    c.decr("b", &[], 1.0).unwrap();
    drop(c);

    let bytes = Arc::try_unwrap(sink).unwrap().into_inner();
    assert_eq!(
        String::from_utf8(bytes).unwrap(),
        "MONITORING|9|1|count|app.a|MONITORING|9|-1|count|app.b|"
    );
}
