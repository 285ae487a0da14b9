//! `std::net` shapes. Blocking only, so streams get `SyncStream` and not
//! `Stream`.

extrinsic! {
    std::net::TcpStream => [Socket, SyncStream];
    std::net::TcpListener => [Socket];
    std::net::UdpSocket => [Socket];

    #[cfg(unix)]
    std::os::unix::net::UnixStream => [Socket, SyncStream];
    #[cfg(unix)]
    std::os::unix::net::UnixListener => [Socket];
    #[cfg(unix)]
    std::os::unix::net::UnixDatagram => [Socket];
}
