//! The nine socket interfaces.
//!
//! Columns, left to right: Socket, SyncStream, AsyncStream, Stream,
//! SyncHandshake, SyncBufferedHandshake, AsyncHandshake,
//! AsyncBufferedHandshake, Handshake.

use super::tag::define_interfaces;

define_interfaces! {
    /// Socket-level operations: options, shutdown, local and peer addresses.
    Socket = [1 0 0 0 0 0 0 0 0];

    /// Blocking `read_some` / `write_some`.
    SyncStream = [0 1 0 0 0 0 0 0 0];

    /// Non-blocking reads and writes driven by a reactor.
    AsyncStream = [0 0 1 0 0 0 0 0 0];

    /// A full byte stream, both blocking and non-blocking.
    Stream = [0 0 0 1 0 0 0 0 0] => SyncStream, AsyncStream;

    /// Blocking handshake.
    SyncHandshake = [0 0 0 0 1 0 0 0 0];

    /// Blocking handshake that accepts bytes already read off the wire.
    SyncBufferedHandshake = [0 0 0 0 0 1 0 0 0] => SyncHandshake;

    /// Non-blocking handshake.
    AsyncHandshake = [0 0 0 0 0 0 1 0 0];

    /// Non-blocking handshake that accepts bytes already read off the wire.
    AsyncBufferedHandshake = [0 0 0 0 0 0 0 1 0] => AsyncHandshake;

    /// Every handshake flavour, as an encrypted stream provides.
    Handshake = [0 0 0 0 0 0 0 0 1] => SyncBufferedHandshake, AsyncBufferedHandshake;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interface::Interface;
    use crate::set::{Inspect, SupersetOf};
    use crate::Bool;

    fn closure_names<I: Interface>() -> Vec<&'static str> {
        let mut names = Vec::new();
        <I::Closure as Inspect>::inspect(|name| names.push(name));
        names
    }

    #[test]
    fn atomic_tags_close_over_themselves() {
        assert_eq!(closure_names::<Socket>(), ["Socket"]);
        assert_eq!(closure_names::<SyncHandshake>(), ["SyncHandshake"]);
    }

    #[test]
    fn composite_closures() {
        assert_eq!(closure_names::<Stream>(), ["SyncStream", "AsyncStream", "Stream"]);
        assert_eq!(
            closure_names::<Handshake>(),
            [
                "SyncHandshake",
                "SyncBufferedHandshake",
                "AsyncHandshake",
                "AsyncBufferedHandshake",
                "Handshake",
            ]
        );
    }

    #[test]
    fn handshake_covers_its_buffered_halves() {
        type H = <Handshake as Interface>::Closure;
        type B = <SyncBufferedHandshake as Interface>::Closure;
        assert!(<<H as SupersetOf<B>>::Out as Bool>::VALUE);
        assert!(!<<B as SupersetOf<H>>::Out as Bool>::VALUE);
    }
}
