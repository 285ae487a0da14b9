//! Per-interface constants on classified types.
//!
//! `InterfaceFlags` gives every classified socket type one `IS_*` constant
//! per tag:
//!
//! ```
//! use socket_caps::{interfaces, InterfaceFlags, SocketInterfaces, Stream};
//!
//! struct Pipe;
//! impl SocketInterfaces for Pipe {
//!     type SocketInterfaces = interfaces![Stream];
//! }
//!
//! assert!(Pipe::IS_STREAM && Pipe::IS_SYNC_STREAM);
//! assert!(!Pipe::IS_SOCKET);
//! ```

use crate::query::HasInterface;
use crate::resolve::InterfacesOf;

macro_rules! define_flags {
    ($($slot:ident),+ $(,)?) => {
        ::paste::paste! {
            /// One constant per interface tag, `true` iff the type supports it.
            pub trait InterfaceFlags {
                $(
                    #[doc = concat!("Supports [`", stringify!($slot), "`](crate::", stringify!($slot), ").")]
                    const [<IS_ $slot:snake:upper>]: bool;
                )+
            }

            impl<T: InterfacesOf + ?Sized> InterfaceFlags for T {
                $(
                    const [<IS_ $slot:snake:upper>]: bool =
                        <T as HasInterface<$crate::interface::$slot>>::VALUE;
                )+
            }
        }
    };
}

define_flags! {
    Socket,
    SyncStream,
    AsyncStream,
    Stream,
    SyncHandshake,
    SyncBufferedHandshake,
    AsyncHandshake,
    AsyncBufferedHandshake,
    Handshake,
}
