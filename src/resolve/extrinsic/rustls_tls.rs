//! `tokio-rustls` encrypted streams, over any transport.
//!
//! The TLS layer hides the transport's socket operations, so these carry no
//! `Socket`, whatever `S` is.

extrinsic! {
    for<S> {
        tokio_rustls::TlsStream<S> => [Stream, Handshake];
        tokio_rustls::client::TlsStream<S> => [Stream, Handshake];
        tokio_rustls::server::TlsStream<S> => [Stream, Handshake];
    }
}
