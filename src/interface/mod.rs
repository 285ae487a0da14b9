//! # Layer 1: Interface Tags
//!
//! The closed vocabulary of socket interfaces and its lattice.
//!
//! ```text
//!               Stream                          Handshake
//!              /      \                        /         \
//!     SyncStream    AsyncStream   SyncBufferedHandshake  AsyncBufferedHandshake
//!                                          |                      |
//!  Socket                            SyncHandshake          AsyncHandshake
//! ```
//!
//! An edge reads "implies": a set holding `Stream` also holds both stream
//! halves, but holding both halves does not make it a `Stream`.

pub mod tag;
pub mod vocab;

pub use tag::Interface;
pub use vocab::{
    Socket, SyncStream, AsyncStream, Stream,
    SyncHandshake, SyncBufferedHandshake,
    AsyncHandshake, AsyncBufferedHandshake,
    Handshake,
};
