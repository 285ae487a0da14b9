//! `tokio::net` shapes.
//!
//! Connected streams are full `Stream`s: reactor-driven I/O plus the
//! `try_read` / `try_write` family.

extrinsic! {
    tokio::net::TcpStream => [Socket, Stream];
    tokio::net::TcpSocket => [Socket];
    tokio::net::TcpListener => [Socket];
    tokio::net::UdpSocket => [Socket];

    #[cfg(unix)]
    tokio::net::UnixStream => [Socket, Stream];
    #[cfg(unix)]
    tokio::net::UnixListener => [Socket];
    #[cfg(unix)]
    tokio::net::UnixDatagram => [Socket];
}
