//! Interface sets of the transports classified by the library.

mod common;

use common::{answers, assert_lattice, names};
use socket_caps::prelude::*;

// =============================================================================
// std::net
// =============================================================================

#[cfg(feature = "std")]
mod std_net {
    use super::*;
    use std::net::{TcpListener, TcpStream, UdpSocket};

    #[test]
    fn tcp_stream_is_blocking_only() {
        assert_eq!(names::<TcpStream>(), ["Socket", "SyncStream"]);
        assert!(!has_interface::<TcpStream, Stream>());
        assert!(!has_interface::<TcpStream, AsyncStream>());
    }

    #[test]
    fn listeners_and_datagrams_are_plain_sockets() {
        assert_eq!(names::<TcpListener>(), ["Socket"]);
        assert_eq!(names::<UdpSocket>(), ["Socket"]);
    }

    #[cfg(unix)]
    #[test]
    fn unix_domain() {
        use std::os::unix::net::{UnixDatagram, UnixListener, UnixStream};

        assert_eq!(names::<UnixStream>(), ["Socket", "SyncStream"]);
        assert_eq!(names::<UnixListener>(), ["Socket"]);
        assert_eq!(names::<UnixDatagram>(), ["Socket"]);
    }

    #[test]
    fn lattice_holds() {
        assert_lattice::<TcpStream>();
        assert_lattice::<TcpListener>();
        assert_lattice::<UdpSocket>();
    }
}

// =============================================================================
// tokio::net
// =============================================================================

#[cfg(feature = "tokio")]
mod tokio_net {
    use super::*;
    use tokio::net::{TcpListener, TcpSocket, TcpStream, UdpSocket};

    /// A plain socket shape: socket operations and nothing else.
    #[test]
    fn scenario_plain_socket() {
        assert!(has_interface::<TcpSocket, Socket>());
        assert!(!has_interface::<TcpSocket, Stream>());
    }

    /// A stream socket shape.
    #[test]
    fn scenario_stream_socket() {
        assert!(has_interface::<TcpStream, Socket>());
        assert!(has_interface::<TcpStream, Stream>());
        assert!(has_interface::<TcpStream, SyncStream>());
        assert!(!has_interface::<TcpStream, Handshake>());
    }

    #[test]
    fn exact_sets() {
        assert_eq!(names::<TcpSocket>(), ["Socket"]);
        assert_eq!(names::<TcpListener>(), ["Socket"]);
        assert_eq!(names::<UdpSocket>(), ["Socket"]);
        assert_eq!(
            names::<TcpStream>(),
            ["Socket", "SyncStream", "AsyncStream", "Stream"]
        );
    }

    #[test]
    fn socket_only_rejects_everything_else() {
        let [socket, rest @ ..] = answers::<TcpListener>();
        assert!(socket);
        assert_eq!(rest, [false; 8]);
    }

    #[cfg(unix)]
    #[test]
    fn unix_domain() {
        use tokio::net::{UnixDatagram, UnixListener, UnixStream};

        assert_eq!(
            names::<UnixStream>(),
            ["Socket", "SyncStream", "AsyncStream", "Stream"]
        );
        assert_eq!(names::<UnixListener>(), ["Socket"]);
        assert_eq!(names::<UnixDatagram>(), ["Socket"]);
    }

    #[test]
    fn lattice_holds() {
        assert_lattice::<TcpStream>();
        assert_lattice::<TcpSocket>();
    }

    const _: () = assert!(<TcpStream as HasInterface<Stream>>::VALUE);
    const _: () = assert!(!<TcpSocket as HasInterface<SyncStream>>::VALUE);
}

// =============================================================================
// socket2
// =============================================================================

#[cfg(feature = "socket2")]
#[test]
fn raw_socket2_socket() {
    let [socket, rest @ ..] = answers::<socket2::Socket>();
    assert!(socket);
    assert_eq!(rest, [false; 8]);
}

// =============================================================================
// tokio-rustls
// =============================================================================

#[cfg(all(feature = "rustls", feature = "tokio"))]
mod tls {
    use super::*;
    use tokio::net::TcpStream;
    use tokio_rustls::{client, server, TlsStream};

    /// An encrypted stream shape.
    #[test]
    fn scenario_encrypted_stream() {
        type Tls = client::TlsStream<TcpStream>;

        assert!(has_interface::<Tls, Stream>());
        assert!(has_interface::<Tls, Handshake>());
        assert!(has_interface::<Tls, SyncHandshake>());
        assert!(!has_interface::<Tls, Socket>());
    }

    #[test]
    fn every_tls_flavour_matches_exactly() {
        let expected = [false, true, true, true, true, true, true, true, true];

        assert_eq!(answers::<client::TlsStream<TcpStream>>(), expected);
        assert_eq!(answers::<server::TlsStream<TcpStream>>(), expected);
        assert_eq!(answers::<TlsStream<TcpStream>>(), expected);
    }

    /// The shape matches for any transport, including unclassified ones.
    #[test]
    fn transport_does_not_leak_into_the_set() {
        struct Opaque;

        assert_eq!(
            answers::<client::TlsStream<Opaque>>(),
            answers::<client::TlsStream<TcpStream>>()
        );
        assert_lattice::<server::TlsStream<Opaque>>();
    }
}
