//! Logging of resolved interface sets.

#![cfg(feature = "tracing")]

use std::io::Write;
use std::sync::{Arc, Mutex};

use socket_caps::prelude::*;
use socket_caps::trace_interfaces;

#[derive(SocketInterfaces)]
#[socket_interfaces(Stream, Handshake)]
struct TracedStream;

/// Collects formatted events in memory.
#[derive(Clone, Default)]
struct Capture(Arc<Mutex<Vec<u8>>>);

impl Write for Capture {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

#[test]
fn debug_event_lists_interfaces() {
    let capture = Capture::default();
    let writer = capture.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();

    tracing::subscriber::with_default(subscriber, || {
        trace_interfaces::<TracedStream>();
    });

    let output = String::from_utf8(capture.0.lock().unwrap().clone()).unwrap();
    assert!(output.contains("resolved socket interfaces"), "{output}");
    assert!(output.contains("TracedStream"), "{output}");
    assert!(output.contains("\"Handshake\""), "{output}");
    assert!(output.contains("count=8"), "{output}");
}
