extrinsic! {
    /// The raw, unconnected socket.
    socket2::Socket => [Socket];
}
