//! Extrinsic interface table.
//!
//! Interface sets for transport types this crate knows without their
//! authors' cooperation. Each family sits behind the feature that brings the
//! crate in. Shapes by category:
//!
//! | Shape | Set |
//! |-------|-----|
//! | raw socket (unconnected, listener, datagram) | `Socket` |
//! | blocking stream socket | `Socket`, `SyncStream` |
//! | reactor-driven stream socket | `Socket`, `Stream` |
//! | encrypted stream over any transport | `Stream`, `Handshake` |
//!
//! Adding a shape is one row in the relevant file. A shape listed here must
//! not also implement [`SocketInterfaces`](crate::SocketInterfaces); the two
//! impls would overlap.

/// Implement `InterfacesOf` for a list of shapes.
///
/// Generic shapes go in a `for<S> { ... }` block, one impl per row covering
/// every parameterization.
macro_rules! extrinsic {
    (@one [$($gen:ident),+] $(#[$meta:meta])* $shape:ty => [$($tag:ident),+]) => {
        $(#[$meta])*
        impl<$($gen),+> $crate::resolve::InterfacesOf for $shape {
            type Out = $crate::interfaces![$($crate::interface::$tag),+];
        }
    };
    (@gen $gens:tt $( $(#[$meta:meta])* $shape:ty => [$($tag:ident),+]; )*) => {
        $( extrinsic!(@one $gens $(#[$meta])* $shape => [$($tag),+]); )*
    };
    (for<$($gen:ident),+> {
        $($body:tt)*
    }) => {
        extrinsic!(@gen [$($gen),+] $($body)*);
    };
    ($( $(#[$meta:meta])* $shape:ty => [$($tag:ident),+]; )*) => {
        $(
            $(#[$meta])*
            impl $crate::resolve::InterfacesOf for $shape {
                type Out = $crate::interfaces![$($crate::interface::$tag),+];
            }
        )*
    };
}

#[cfg(feature = "std")]
mod std_net;

#[cfg(feature = "tokio")]
mod tokio_net;

#[cfg(feature = "socket2")]
mod socket2_raw;

#[cfg(feature = "rustls")]
mod rustls_tls;
