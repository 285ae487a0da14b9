#![cfg_attr(not(feature = "std"), no_std)]

// Feature flags handled:
// - std: default, enables std library and the std::net shapes
// - macros: re-exports the derive / attribute macros
// - tokio, socket2, rustls: extrinsic shapes for those crates
// - tracing: logging of resolved interface sets

//! # socket-caps
//!
//! **Compile-time socket interface detection.**
//!
//! Given any socket-like type, `socket-caps` answers which of a closed set of
//! structural interfaces it supports: raw socket operations, synchronous and
//! asynchronous streams, synchronous and asynchronous (buffered) handshakes.
//! The type does not implement any common runtime interface; the answer is a
//! type-level boolean resolved during compilation, so a generic wrapping
//! layer can expose `read`, `write` or `handshake` only where the wrapped
//! type provides them.
//!
//! ## Architecture
//!
//! ```text
//! +-------------------------------------------------------------------+
//! |  Layer 0: Primitives                                              |
//! |  - Present / Absent, And / Or / Not                               |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 1: Interface tags                                          |
//! |  - Socket, SyncStream, AsyncStream, Stream, ..., Handshake        |
//! |  - each tag's closure over the tags it implies                    |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 2: Interface sets                                          |
//! |  - InterfaceSet (9 slots), interfaces![..], union / superset      |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 3: Resolution                                              |
//! |  - InterfacesOf: extrinsic table first, SocketInterfaces fallback |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 4: Membership                                              |
//! |  - HasInterface, Supports, Satisfies, has_interface, IS_* flags   |
//! +-------------------------------------------------------------------+
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use socket_caps::prelude::*;
//!
//! // Intrusive: the type declares its own set.
//! #[derive(SocketInterfaces)]
//! #[socket_interfaces(Stream, Handshake)]
//! struct MyHandshakingStream;
//!
//! const { assert!(has_interface::<MyHandshakingStream, SyncHandshake>()) };
//!
//! // Extrinsic: well-known transports are classified by this crate.
//! const { assert!(has_interface::<std::net::TcpStream, SyncStream>()) };
//! const { assert!(!has_interface::<std::net::TcpStream, AsyncStream>()) };
//!
//! // Gate an operation on an interface.
//! struct Wrapper<S>(S);
//!
//! #[socket_bound(S: Handshake)]
//! impl<S> Wrapper<S> {
//!     fn can_handshake(&self) -> bool { true }
//! }
//!
//! assert!(Wrapper(MyHandshakingStream).can_handshake());
//! ```
//!
//! ## Declaration errors
//!
//! Interface lists are checked when the derive expands. Unknown names,
//! repeated names and empty lists are rejected:
//!
//! ```compile_fail
//! use socket_caps::prelude::*;
//!
//! #[derive(SocketInterfaces)]
//! #[socket_interfaces(Stream, Datagram)]
//! struct Unknown;
//! ```
//!
//! ```compile_fail
//! use socket_caps::prelude::*;
//!
//! #[derive(SocketInterfaces)]
//! #[socket_interfaces(Stream, socket_caps::Stream)]
//! struct Repeated;
//! ```
//!
//! ```compile_fail
//! use socket_caps::prelude::*;
//!
//! #[derive(SocketInterfaces)]
//! #[socket_interfaces()]
//! struct Nothing;
//! ```
//!
//! A gated operation does not exist for a type lacking the interface:
//!
//! ```compile_fail
//! use socket_caps::prelude::*;
//!
//! struct Wrapper<S>(S);
//!
//! #[socket_bound(S: AsyncStream)]
//! impl<S> Wrapper<S> {
//!     fn poll_read(&self) {}
//! }
//!
//! Wrapper(std::net::TcpStream::connect("127.0.0.1:0").unwrap()).poll_read();
//! ```

// Allow `::socket_caps` to work inside the crate itself
extern crate self as socket_caps;

// =============================================================================
// Layer 0: Primitives (no dependencies)
// =============================================================================
pub mod primitives;

// =============================================================================
// Layer 1: Interface Tags
// =============================================================================
pub mod interface;

// =============================================================================
// Layer 2: Interface Sets
// =============================================================================
pub mod set;

// =============================================================================
// Layer 3: Resolution
// =============================================================================
pub mod resolve;

// =============================================================================
// Layer 4: Membership
// =============================================================================
pub mod query;

// =============================================================================
// Re-exports at Crate Root
// =============================================================================

pub use primitives::bool::{Bool, Present, Absent};
pub use interface::{
    Interface,
    Socket, SyncStream, AsyncStream, Stream,
    SyncHandshake, SyncBufferedHandshake,
    AsyncHandshake, AsyncBufferedHandshake,
    Handshake,
};
pub use set::{InterfaceSet, Slots, Empty, SetUnion, SetIntersect, SupersetOf, Inspect};
pub use resolve::{InterfacesOf, SocketInterfaces};
pub use query::{
    HasInterface, Supports, has_interface, InterfaceFlags,
    Evaluate, Satisfies, Require, IsPresent, Has, And, Or, Not,
};

#[cfg(feature = "tracing")]
pub use query::trace::trace_interfaces;

// Re-export proc-macros
#[cfg(feature = "macros")]
pub use macros::{SocketInterfaces, socket_bound};

/// Common items for the interface system.
pub mod prelude {
    pub use crate::interface::{
        Interface,
        Socket, SyncStream, AsyncStream, Stream,
        SyncHandshake, SyncBufferedHandshake,
        AsyncHandshake, AsyncBufferedHandshake,
        Handshake,
    };
    pub use crate::resolve::{InterfacesOf, SocketInterfaces};
    pub use crate::query::{HasInterface, Supports, has_interface, InterfaceFlags, Satisfies, Require};
    pub use crate::primitives::{Present, Absent};
    #[cfg(feature = "macros")]
    pub use macros::{SocketInterfaces, socket_bound};
    // Note: interfaces!, union!, intersect! are #[macro_export] so they're at crate root
    pub use crate::interfaces;
}
